#[cfg(test)]
mod platform_tests {
    use super::super::{Room, Strip, player};
    use crate::env::TriggerKind;
    use crate::env::platforms::{PlatKind, PlatStatus};
    use crate::level::Level;
    use crate::{LevelEvent, SfxName, SoundOrigin, Thinker};

    const LIFT: usize = 1;

    /// Player room at 0, a lift tagged 4 at 64 and a ledge at 64 behind it.
    /// The line onto the lift is a repeatable lift switch.
    fn lift_strip() -> Strip {
        Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(128, 64, 192).tagged(4))
            .join(62, 4)
            .room(Room::new(256, 64, 192))
            .thing(200, 128, 0, 1)
    }

    fn floor(level: &Level, sector: usize) -> f32 {
        level.map_data.sectors[sector].floorheight
    }

    fn plat_status(level: &Level, sector: usize) -> PlatStatus {
        let id = level.map_data.sectors[sector].specialdata.unwrap();
        match level.thinkers.get(id) {
            Some(Thinker::Platform(plat)) => plat.status,
            t => panic!("not a platform: {t:?}"),
        }
    }

    #[test]
    fn switch_flips_and_pops_back_out() {
        let strip = lift_strip();
        let (mut level, recorder) = strip.load_recorded();
        let p = player(&level);
        let line = strip.join_line(1);
        let side = level.map_data.linedefs[line].front_sidedef;
        let off = level.pic_data.wallpic_num_for_name("SW1COMP");
        let on = level.pic_data.wallpic_num_for_name("SW2COMP");
        assert!(off.is_some() && on.is_some());
        level.map_data.sidedefs[side].bottomtexture = off;

        assert!(level.trigger_special(line, p, TriggerKind::Switch, 0));
        assert_eq!(level.map_data.sidedefs[side].bottomtexture, on);
        // the upper texture is no switch and stays
        assert_eq!(
            level.map_data.sidedefs[side].toptexture,
            level.pic_data.wallpic_num_for_name("STARTAN3")
        );

        level.run(34);
        assert_eq!(level.map_data.sidedefs[side].bottomtexture, on);
        level.tick();
        assert_eq!(level.map_data.sidedefs[side].bottomtexture, off);
        assert_eq!(level.map_data.linedefs[line].special, 62);
        assert!(level.map_data.linedefs[line].switch_action.is_none());

        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::WallTextureChanged { sidedef } if *sidedef == side)),
            2
        );
        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::Sound { sfx: SfxName::swtchn, .. })),
            2
        );
    }

    #[test]
    fn lift_lowers_waits_and_comes_back() {
        let strip = lift_strip();
        let (mut level, recorder) = strip.load_recorded();
        let p = player(&level);
        assert!(level.trigger_special(strip.join_line(1), p, TriggerKind::Push, 0));
        assert_eq!(plat_status(&level, LIFT), PlatStatus::Down);

        let mut heights = Vec::new();
        for _ in 0..200 {
            level.tick();
            heights.push(floor(&level, LIFT));
        }
        // down to the lowest neighbour at 4 a tic
        assert_eq!(heights[0], 60.0);
        let bottom = heights.iter().filter(|&&h| h == 0.0).count();
        assert!((105..=108).contains(&bottom), "waited {bottom}");
        let left = heights.iter().rposition(|&h| h == 0.0).unwrap();
        assert_eq!(heights[left + 1], 4.0);

        assert_eq!(floor(&level, LIFT), 64.0);
        assert!(level.map_data.sectors[LIFT].specialdata.is_none());
        assert!(level.thinkers.is_empty());
        assert_eq!(
            recorder.count(|e| matches!(
                e,
                LevelEvent::Sound {
                    sfx: SfxName::pstart,
                    origin: SoundOrigin::Sector(LIFT)
                }
            )),
            2
        );
        assert_eq!(
            recorder.count(|e| matches!(
                e,
                LevelEvent::Sound {
                    sfx: SfxName::pstop,
                    origin: SoundOrigin::Sector(LIFT)
                }
            )),
            2
        );
    }

    #[test]
    fn busy_lift_ignores_the_switch() {
        let strip = lift_strip();
        let mut level = strip.load();
        let p = player(&level);
        let line = strip.join_line(1);
        assert!(level.trigger_special(line, p, TriggerKind::Push, 0));
        level.run(5);
        assert!(!level.trigger_special(line, p, TriggerKind::Push, 0));
        assert_eq!(level.thinkers.len(), 1);
    }

    #[test]
    fn perpetual_platform_stops_and_restarts() {
        let strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(128, 32, 160).tagged(5))
            .join(53, 5)
            .room(Room::new(256, 64, 160))
            .thing(200, 128, 0, 1);
        let mut level = strip.load();
        let p = player(&level);
        let line = strip.join_line(1);
        assert!(level.trigger_special(line, p, TriggerKind::Walk, 0));
        assert_eq!(level.map_data.linedefs[line].special, 0);

        level.run(10);
        let moving = floor(&level, 1);
        assert!(moving == 22.0 || moving == 42.0, "{moving}");

        level.ev_stop_plat(line);
        assert_eq!(plat_status(&level, 1), PlatStatus::InStasis);
        level.run(50);
        assert_eq!(floor(&level, 1), moving);
        // still owns the sector while stopped
        assert!(level.map_data.sectors[1].specialdata.is_some());

        assert!(level.ev_do_plat(line, PlatKind::PerpetualRaise, 0));
        assert_ne!(plat_status(&level, 1), PlatStatus::InStasis);
        level.run(5);
        assert_ne!(floor(&level, 1), moving);
        assert_eq!(level.thinkers.len(), 1);
    }
}
