//! Player input application.
//!
//! Polled input is applied once per tick, after combat resolution: rotate,
//! thrust (diverting motion into background scroll near the viewport
//! walls), and primary fire. Decorative stars are translated by the
//! negative of the diverted displacement, producing the parallax scroll.
//! Returns the background shift applied this tick.

use glam::DVec2;
use hecs::{Entity, World};

use voidstrike_core::commands::InputState;
use voidstrike_core::components::{PlayerShip, Star, Transform, Velocity, Visibility};
use voidstrike_core::constants::{DT, PLAYER_ROTATION_STEP_DEG, PLAYER_WALL_MARGIN};
use voidstrike_core::events::{AudioEvent, SoundId};
use voidstrike_core::types::Viewport;

use voidstrike_enemy_ai::fsm::FireChoice;

use crate::systems::weapons::{self, FireRequest};

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    input: &InputState,
    viewport: &Viewport,
    now_tick: u64,
    spawn_seq: &mut u64,
    audio_events: &mut Vec<AudioEvent>,
    engine_roaring: &mut bool,
) -> DVec2 {
    let mut background_shift = DVec2::ZERO;
    let mut player: Option<Entity> = None;
    let mut thrusting = false;

    {
        let mut query = world.query::<(&PlayerShip, &mut Transform, &mut Velocity, &Visibility)>();
        if let Some((entity, (_ship, transform, velocity, visibility))) = query.iter().next() {
            if visibility.visible {
                player = Some(entity);

                if input.rotate_clockwise {
                    velocity.heading += PLAYER_ROTATION_STEP_DEG;
                } else if input.rotate_counter_clockwise {
                    velocity.heading -= PLAYER_ROTATION_STEP_DEG;
                }

                thrusting = input.forward || input.reverse;
                if thrusting {
                    let displacement = velocity.displacement(DT);
                    let mut motion = if input.forward {
                        displacement
                    } else {
                        -displacement
                    };

                    // Near a wall and moving toward it: divert that axis of
                    // motion into background scroll instead.
                    let near_left = transform.position.x < PLAYER_WALL_MARGIN;
                    let near_right = transform.position.x
                        > viewport.width() - (transform.size.x + PLAYER_WALL_MARGIN);
                    let near_top = transform.position.y < PLAYER_WALL_MARGIN;
                    let near_bottom = transform.position.y
                        > viewport.height() - (transform.size.y + PLAYER_WALL_MARGIN);

                    if (near_right && motion.x > 0.0) || (near_left && motion.x < 0.0) {
                        background_shift.x = motion.x;
                        motion.x = 0.0;
                    }
                    if (near_bottom && motion.y > 0.0) || (near_top && motion.y < 0.0) {
                        background_shift.y = motion.y;
                        motion.y = 0.0;
                    }

                    transform.position += motion;
                }
            }
        }
    }

    // Engine roar start/stop notifications on transitions only.
    if thrusting && !*engine_roaring {
        audio_events.push(AudioEvent::Play {
            sound: SoundId::EngineRoar,
        });
        *engine_roaring = true;
    } else if !thrusting && *engine_roaring {
        audio_events.push(AudioEvent::Fade {
            sound: SoundId::EngineRoar,
        });
        *engine_roaring = false;
    }

    if let Some(shooter) = player {
        if input.fire {
            weapons::fire_single(
                world,
                &FireRequest {
                    shooter,
                    choice: FireChoice::Primary,
                },
                now_tick,
                spawn_seq,
                audio_events,
            );
        }
    }

    // Parallax: stars scroll opposite the diverted player displacement.
    if background_shift != DVec2::ZERO {
        for (_entity, (_star, transform)) in world.query_mut::<(&Star, &mut Transform)>() {
            transform.position -= background_shift;
        }
    }

    background_shift
}
