#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use voidstrike_core::components::EnemyAiState;
    use voidstrike_core::constants::DT;
    use voidstrike_core::enums::{AiMode, EnemyArchetype, WeaponKind};
    use voidstrike_core::types::Heading;

    use crate::fsm::{evaluate, initial_state, EnemyContext, FireChoice};
    use crate::profiles::{profile, roll_loadout};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    /// Enemy at the origin, player on the +x axis at `distance`.
    fn make_context(
        archetype: EnemyArchetype,
        state: EnemyAiState,
        heading_deg: f64,
        distance: f64,
        armed: &[WeaponKind],
    ) -> EnemyContext<'_> {
        EnemyContext {
            archetype,
            state,
            heading: Heading::new(heading_deg),
            position: DVec2::ZERO,
            player_position: DVec2::new(distance, 0.0),
            distance_to_player: distance,
            armed,
        }
    }

    fn approaching(keep: f64) -> EnemyAiState {
        EnemyAiState {
            mode: AiMode::Approaching,
            keep_distance: keep,
            fallback_distance: 400.0,
            fall_to_heading: Heading::default(),
        }
    }

    // ---- Movement cycle ----

    #[test]
    fn test_approaching_steers_at_player() {
        let ctx = make_context(EnemyArchetype::Raider, approaching(150.0), 90.0, 600.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state.mode, AiMode::Approaching);
        // Bearing to a player on the +x axis is 0°.
        assert!(update.heading.degrees().abs() < 1e-10);
    }

    #[test]
    fn test_approaching_transitions_at_keep_distance() {
        let ctx = make_context(EnemyArchetype::Raider, approaching(150.0), 0.0, 140.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state.mode, AiMode::MovingToFallback);
        // Retreat heading is roughly opposite the current heading (±10°).
        assert!(update.state.fall_to_heading.separation(Heading::new(180.0)) <= 10.0);
        // Fallback distance resampled into [base, 2*base).
        let base = profile(EnemyArchetype::Raider).base_fallback_distance;
        assert!(update.state.fallback_distance >= base);
        assert!(update.state.fallback_distance < base * 2.0);
    }

    #[test]
    fn test_fallback_rotation_is_bounded_per_tick() {
        let step = profile(EnemyArchetype::Raider).turn_step_deg;
        let state = EnemyAiState {
            mode: AiMode::MovingToFallback,
            keep_distance: 150.0,
            fallback_distance: 500.0,
            fall_to_heading: Heading::new(200.0),
        };
        let ctx = make_context(EnemyArchetype::Raider, state, 0.0, 300.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state.mode, AiMode::MovingToFallback);
        assert!(
            (update.heading.separation(ctx.heading) - step).abs() < 1e-10,
            "rotation must be exactly one step, got {}",
            update.heading.separation(ctx.heading)
        );
    }

    #[test]
    fn test_fallback_picks_shorter_rotation() {
        let state = EnemyAiState {
            mode: AiMode::MovingToFallback,
            keep_distance: 150.0,
            fallback_distance: 500.0,
            fall_to_heading: Heading::new(10.0),
        };
        // 350° → 10° is shorter clockwise (increasing degrees).
        let ctx = make_context(EnemyArchetype::Raider, state, 350.0, 300.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert!(update.heading.degrees() > 350.0);
    }

    #[test]
    fn test_fallback_transitions_past_fallback_distance() {
        let state = EnemyAiState {
            mode: AiMode::MovingToFallback,
            keep_distance: 150.0,
            fallback_distance: 500.0,
            fall_to_heading: Heading::new(180.0),
        };
        let ctx = make_context(EnemyArchetype::Raider, state, 180.0, 501.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state.mode, AiMode::MovingToApproach);
    }

    #[test]
    fn test_approach_realigns_then_cycles() {
        // Far off the bearing: rotates, stays in MovingToApproach.
        let state = EnemyAiState {
            mode: AiMode::MovingToApproach,
            keep_distance: 150.0,
            fallback_distance: 500.0,
            fall_to_heading: Heading::new(180.0),
        };
        let ctx = make_context(EnemyArchetype::Raider, state, 90.0, 600.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state.mode, AiMode::MovingToApproach);
        assert!(update.heading.separation(ctx.heading) <= profile(EnemyArchetype::Raider).turn_step_deg + 1e-10);

        // Within tolerance of the bearing: back to Approaching, keep resampled.
        let ctx = make_context(EnemyArchetype::Raider, state, 5.0, 600.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state.mode, AiMode::Approaching);
        let base = profile(EnemyArchetype::Raider).base_keep_distance;
        assert!(update.state.keep_distance >= base);
        assert!(update.state.keep_distance < base * 2.0);
    }

    /// Static player, enemy approaching from beyond keep distance: the
    /// distance decreases monotonically until keep distance, then the state
    /// transitions to MovingToFallback exactly once at the crossing tick.
    #[test]
    fn test_approach_cycle_single_transition() {
        let mut rng = rng();
        let player = DVec2::new(500.0, 0.0);
        let mut position = DVec2::ZERO;
        let mut heading = Heading::new(37.0);
        let mut state = approaching(150.0);
        let speed = 200.0;

        let mut transitions = 0u32;
        let mut last_distance = position.distance(player);

        for _ in 0..200 {
            let distance = position.distance(player);
            let ctx = EnemyContext {
                archetype: EnemyArchetype::Raider,
                state,
                heading,
                position,
                player_position: player,
                distance_to_player: distance,
                armed: &[],
            };
            let update = evaluate(&ctx, &mut rng);
            if state.mode == AiMode::Approaching && update.state.mode == AiMode::MovingToFallback
            {
                transitions += 1;
            }
            state = update.state;
            heading = update.heading;

            if state.mode == AiMode::Approaching {
                assert!(
                    distance <= last_distance + 1e-9,
                    "distance must not grow while approaching"
                );
            } else {
                break;
            }
            last_distance = distance;
            position += heading.unit_vector() * speed * DT;
        }

        assert_eq!(transitions, 1, "exactly one fallback transition expected");
    }

    // ---- Weapon selection ----

    const FULLY_ARMED: [WeaponKind; 4] = [
        WeaponKind::PlasmaTorpedo,
        WeaponKind::PulseCannon,
        WeaponKind::TwinPulseCannon,
        WeaponKind::SeekerMissile,
    ];

    #[test]
    fn test_weapon_brackets_longest_range_first() {
        let cases = [
            (600.0, WeaponKind::SeekerMissile),
            (400.0, WeaponKind::PlasmaTorpedo),
            (250.0, WeaponKind::PulseCannon),
            (150.0, WeaponKind::TwinPulseCannon),
        ];
        for (distance, expected) in cases {
            let ctx = make_context(
                EnemyArchetype::Raider,
                approaching(50.0),
                0.0,
                distance,
                &FULLY_ARMED,
            );
            let update = evaluate(&ctx, &mut rng());
            assert_eq!(
                update.fire,
                Some(FireChoice::Secondary(expected)),
                "at distance {distance}"
            );
        }
    }

    #[test]
    fn test_no_fire_beyond_engagement_range() {
        let ctx = make_context(
            EnemyArchetype::Raider,
            approaching(50.0),
            0.0,
            800.0,
            &FULLY_ARMED,
        );
        let update = evaluate(&ctx, &mut rng());
        assert!(update.fire.is_none());
    }

    #[test]
    fn test_no_fire_when_not_pointing() {
        // Enemy heading 90° while the player bears 0°: outside aim tolerance.
        let state = EnemyAiState {
            mode: AiMode::MovingToFallback,
            keep_distance: 50.0,
            fallback_distance: 900.0,
            fall_to_heading: Heading::new(90.0),
        };
        let ctx = make_context(EnemyArchetype::Raider, state, 90.0, 250.0, &FULLY_ARMED);
        let update = evaluate(&ctx, &mut rng());
        assert!(update.fire.is_none());
    }

    #[test]
    fn test_bracket_falls_through_without_ammo() {
        // Only the torpedo is armed: at 600 px the missile bracket is
        // skipped and the torpedo bracket (distance > 300) wins.
        let armed = [WeaponKind::PlasmaTorpedo];
        let ctx = make_context(EnemyArchetype::Raider, approaching(50.0), 0.0, 600.0, &armed);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(
            update.fire,
            Some(FireChoice::Secondary(WeaponKind::PlasmaTorpedo))
        );
    }

    #[test]
    fn test_point_blank_primary() {
        let ctx = make_context(EnemyArchetype::Raider, approaching(200.0), 0.0, 60.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.fire, Some(FireChoice::Primary));
    }

    #[test]
    fn test_unarmed_midrange_degrades_to_no_fire() {
        let ctx = make_context(EnemyArchetype::Raider, approaching(50.0), 0.0, 300.0, &[]);
        let update = evaluate(&ctx, &mut rng());
        assert!(update.fire.is_none());
    }

    // ---- Profiles and sampling ----

    #[test]
    fn test_initial_state_samples_within_band() {
        let mut rng = rng();
        for archetype in [
            EnemyArchetype::Raider,
            EnemyArchetype::Brawler,
            EnemyArchetype::Lancer,
        ] {
            let p = profile(archetype);
            for _ in 0..50 {
                let state = initial_state(archetype, &mut rng);
                assert_eq!(state.mode, AiMode::Approaching);
                assert!(state.keep_distance >= p.base_keep_distance);
                assert!(state.keep_distance < p.base_keep_distance * 2.0);
            }
        }
    }

    #[test]
    fn test_profiles_are_well_formed() {
        for archetype in [
            EnemyArchetype::Raider,
            EnemyArchetype::Brawler,
            EnemyArchetype::Lancer,
        ] {
            let p = profile(archetype);
            assert!(p.turn_step_deg > 0.0);
            assert!(p.engagement_range > p.point_blank_range);
            assert!(p.hit_points_max >= p.hit_points_min);
            assert!(p.hit_points_min > 0);
            assert!(p.max_speed_max >= p.max_speed_min);
            assert!(p.max_speed_min > 0.0);
            // Brackets ordered longest range first.
            for pair in p.brackets.windows(2) {
                assert!(pair[0].min_range > pair[1].min_range);
            }
            // The default selection is a guaranteed fit.
            assert!(p
                .secondary_fits
                .iter()
                .any(|f| f.kind == p.default_selection));
        }
    }

    #[test]
    fn test_roll_loadout_selects_default() {
        let mut rng = rng();
        let p = profile(EnemyArchetype::Raider);
        for _ in 0..10 {
            let loadout = roll_loadout(&p, &mut rng);
            assert_eq!(loadout.selected().map(|w| w.kind), Some(p.default_selection));
            assert!(loadout.secondaries().len() >= p.secondary_fits.len());
            assert!(loadout.secondaries().len() <= p.secondary_fits.len() + 1);
        }
    }
}
