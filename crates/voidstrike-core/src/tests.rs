#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::{InputState, PlayerCommand};
    use crate::components::{Transform, Vitals, Weapon, WeaponLoadout};
    use crate::enums::*;
    use crate::errors::WeaponError;
    use crate::events::{AudioEvent, SoundId};
    use crate::state::GameSnapshot;
    use crate::types::{Heading, Rect, SimTime, Velocity, Viewport};

    // ---- Heading arithmetic ----

    #[test]
    fn test_heading_normalization() {
        assert_eq!(Heading::new(0.0).degrees(), 0.0);
        assert_eq!(Heading::new(360.0).degrees(), 0.0);
        assert_eq!(Heading::new(-90.0).degrees(), 270.0);
        assert_eq!(Heading::new(725.0).degrees(), 5.0);
    }

    #[test]
    fn test_heading_wraparound_arithmetic() {
        let h = Heading::new(350.0) + 20.0;
        assert!((h.degrees() - 10.0).abs() < 1e-10);

        let h = Heading::new(10.0) - 20.0;
        assert!((h.degrees() - 350.0).abs() < 1e-10);
    }

    #[test]
    fn test_heading_unit_vector() {
        let east = Heading::new(0.0).unit_vector();
        assert!((east.x - 1.0).abs() < 1e-10);
        assert!(east.y.abs() < 1e-10);

        let south = Heading::new(90.0).unit_vector();
        assert!(south.x.abs() < 1e-10);
        assert!((south.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_heading_between() {
        let bearing = Heading::between(DVec2::new(0.0, 0.0), DVec2::new(100.0, 0.0));
        assert!((bearing.degrees() - 0.0).abs() < 1e-10);

        let bearing = Heading::between(DVec2::new(0.0, 0.0), DVec2::new(0.0, -50.0));
        assert!((bearing.degrees() - 270.0).abs() < 1e-10);
    }

    #[test]
    fn test_heading_separation_symmetric() {
        let a = Heading::new(10.0);
        let b = Heading::new(350.0);
        assert!((a.separation(b) - 20.0).abs() < 1e-10);
        assert!((b.separation(a) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_heading_turn_step_shorter_direction() {
        // 350° → 10° should rotate clockwise (increasing degrees).
        let h = Heading::new(350.0).turn_step(Heading::new(10.0), 1.0);
        assert!((h.degrees() - 351.0).abs() < 1e-10);

        // 10° → 350° should rotate counter-clockwise (decreasing degrees).
        let h = Heading::new(10.0).turn_step(Heading::new(350.0), 1.0);
        assert!((h.degrees() - 9.0).abs() < 1e-10);
    }

    // ---- Velocity invariant ----

    #[test]
    fn test_velocity_speed_clamped_to_max() {
        let v = Velocity::new(Heading::new(0.0), 500.0, 300.0);
        assert_eq!(v.speed(), 300.0);

        let v = Velocity::new(Heading::new(0.0), -10.0, 300.0);
        assert_eq!(v.speed(), 0.0);
    }

    #[test]
    fn test_velocity_set_speed_clamps() {
        let mut v = Velocity::new(Heading::new(0.0), 100.0, 200.0);
        v.set_speed(1000.0);
        assert_eq!(v.speed(), 200.0);
        v.set_speed(-1.0);
        assert_eq!(v.speed(), 0.0);
    }

    #[test]
    fn test_velocity_displacement() {
        let v = Velocity::new(Heading::new(0.0), 60.0, 100.0);
        let d = v.displacement(0.5);
        assert!((d.x - 30.0).abs() < 1e-10);
        assert!(d.y.abs() < 1e-10);
    }

    // ---- Rect intersection ----

    #[test]
    fn test_rect_intersects_overlapping() {
        let a = Rect::centered(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
        let b = Rect::centered(DVec2::new(8.0, 0.0), DVec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_intersects_disjoint() {
        let a = Rect::centered(DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0));
        let b = Rect::centered(DVec2::new(20.0, 0.0), DVec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));

        // Overlap on one axis only is not an intersection.
        let c = Rect::centered(DVec2::new(0.0, 30.0), DVec2::new(10.0, 10.0));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_transform_bounds() {
        let t = Transform::new(DVec2::new(100.0, 50.0), DVec2::new(32.0, 32.0));
        let r = t.bounds();
        assert_eq!(r.min, DVec2::new(84.0, 34.0));
        assert_eq!(r.max, DVec2::new(116.0, 66.0));
    }

    // ---- Viewport ----

    #[test]
    fn test_viewport_rejects_non_positive() {
        assert!(Viewport::new(0.0, 768.0).is_err());
        assert!(Viewport::new(1024.0, -1.0).is_err());
        assert!(Viewport::new(1024.0, 768.0).is_ok());
    }

    #[test]
    fn test_viewport_bounds_exclusive() {
        let vp = Viewport::new(100.0, 100.0).unwrap();
        assert!(vp.contains(DVec2::new(0.0, 0.0)));
        assert!(vp.contains(DVec2::new(99.9, 99.9)));
        assert!(!vp.contains(DVec2::new(100.0, 50.0)));
        assert!(!vp.contains(DVec2::new(50.0, -0.1)));
    }

    // ---- Vitals ----

    #[test]
    fn test_vitals_shield_absorbs_first() {
        let mut v = Vitals::new(10, 3);
        assert!(!v.apply_hit(1));
        assert_eq!(v.shield_points, 2);
        assert_eq!(v.hit_points, 10);
    }

    #[test]
    fn test_vitals_damage_spills_past_shield() {
        let mut v = Vitals::new(10, 2);
        assert!(!v.apply_hit(5));
        assert_eq!(v.shield_points, 0);
        assert_eq!(v.hit_points, 7);
    }

    #[test]
    fn test_vitals_destructive_hit() {
        let mut v = Vitals::new(1, 0);
        assert!(v.apply_hit(1));
        assert!(v.is_destroyed());
    }

    // ---- Weapon gating ----

    #[test]
    fn test_weapon_fire_gating() {
        let mut w = Weapon::new(WeaponKind::PulseCannon, 2, 30);
        assert!(w.fire(100));
        assert_eq!(w.ammo_remaining, 1);

        // Delay not yet elapsed.
        assert!(!w.fire(110));
        assert_eq!(w.ammo_remaining, 1);

        assert!(w.fire(130));
        assert_eq!(w.ammo_remaining, 0);

        // Out of ammo: always a no-op.
        assert!(!w.fire(500));
        assert!(!w.fire(501));
    }

    #[test]
    fn test_weapon_never_fired_is_ready() {
        let w = Weapon::new(WeaponKind::PlasmaTorpedo, 5, 60);
        assert!(w.can_fire(0));
    }

    // ---- Loadout selection ----

    #[test]
    fn test_loadout_select_by_kind() {
        let mut loadout = WeaponLoadout::new(Weapon::new(WeaponKind::PulseCannon, 100, 10));
        loadout.add_secondary(Weapon::new(WeaponKind::PlasmaTorpedo, 5, 60));
        loadout.add_secondary(Weapon::new(WeaponKind::SeekerMissile, 10, 120));

        assert!(loadout.selected().is_none());
        loadout.select(WeaponKind::SeekerMissile).unwrap();
        assert_eq!(loadout.selected().unwrap().kind, WeaponKind::SeekerMissile);
    }

    #[test]
    fn test_loadout_select_absent_kind() {
        let mut loadout = WeaponLoadout::new(Weapon::new(WeaponKind::PulseCannon, 100, 10));
        loadout.add_secondary(Weapon::new(WeaponKind::PlasmaTorpedo, 5, 60));

        let err = loadout.select(WeaponKind::SeekerMissile).unwrap_err();
        assert_eq!(
            err,
            WeaponError::NotFound {
                kind: WeaponKind::SeekerMissile
            }
        );
        // Selection unchanged by the failed call.
        assert!(loadout.selected().is_none());
    }

    #[test]
    fn test_loadout_select_zero_ammo_is_legal() {
        let mut loadout = WeaponLoadout::new(Weapon::new(WeaponKind::PulseCannon, 100, 10));
        loadout.add_secondary(Weapon::new(WeaponKind::PlasmaTorpedo, 0, 60));

        loadout.select(WeaponKind::PlasmaTorpedo).unwrap();
        let w = loadout.selected_mut().unwrap();
        for tick in 0..5 {
            assert!(!w.fire(tick * 100));
        }
    }

    #[test]
    fn test_loadout_armed_kinds_in_order() {
        let mut loadout = WeaponLoadout::new(Weapon::new(WeaponKind::PulseCannon, 100, 10));
        loadout.add_secondary(Weapon::new(WeaponKind::PlasmaTorpedo, 5, 60));
        loadout.add_secondary(Weapon::new(WeaponKind::TwinPulseCannon, 0, 30));
        loadout.add_secondary(Weapon::new(WeaponKind::SeekerMissile, 10, 120));

        assert_eq!(
            loadout.armed_kinds(),
            vec![WeaponKind::PlasmaTorpedo, WeaponKind::SeekerMissile]
        );
    }

    // ---- Input state ----

    #[test]
    fn test_input_state_is_pressed() {
        let input = InputState {
            forward: true,
            fire: true,
            ..Default::default()
        };
        assert!(input.is_pressed(LogicalKey::Forward));
        assert!(input.is_pressed(LogicalKey::Fire));
        assert!(!input.is_pressed(LogicalKey::Reverse));
        assert!(!input.is_pressed(LogicalKey::Escape));
    }

    // ---- Serde round trips ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartScenario,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::Play {
                sound: SoundId::EngineRoar,
            },
            AudioEvent::Fade {
                sound: SoundId::EngineRoar,
            },
            AudioEvent::Play {
                sound: SoundId::WaveChime,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
    }

    // ---- SimTime ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..crate::constants::TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, crate::constants::TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_ms_to_ticks() {
        use crate::constants::ms_to_ticks;
        assert_eq!(ms_to_ticks(1000), crate::constants::TICK_RATE as u64);
        assert_eq!(ms_to_ticks(500), crate::constants::TICK_RATE as u64 / 2);
        assert_eq!(ms_to_ticks(0), 0);
    }
}
