#[cfg(test)]
mod mover_tests {
    use glam::Vec2;

    use super::super::{Room, Strip, player};
    use crate::env::TriggerKind;
    use crate::lang::english::SECRETFOUND;
    use crate::level::Level;
    use crate::{LevelEvent, MapObjKind};

    /// Player room then a crusher room tagged 3 holding `kind`
    fn crusher_strip(kind: i16) -> Strip {
        Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(256, 0, 128).tagged(3))
            .join(25, 3)
            .thing(100, 128, 0, 1)
            .thing(384, 128, 0, kind)
    }

    fn ceiling(level: &Level, sector: usize) -> f32 {
        level.map_data.sectors[sector].ceilingheight
    }

    #[test]
    fn crusher_reverses_on_solid_scenery() {
        let strip = crusher_strip(2028);
        let mut level = strip.load();
        let p = player(&level);
        assert!(level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 0));

        let mut heights = Vec::new();
        for _ in 0..120 {
            level.tick();
            heights.push(ceiling(&level, 1));
        }
        // the column is 48 high and never squeezed
        assert!(heights.iter().all(|&h| h >= 48.0));
        let at = heights.iter().position(|&h| h == 48.0).unwrap();
        assert_eq!(heights[at + 1], 48.0);
        assert_eq!(heights[at + 2], 49.0);
        assert!(heights[119] > 80.0);

        let column = level.things.iter().find(|t| t.kind == MapObjKind::MT_COLUMN).unwrap();
        assert_eq!(column.z, 0.0);
        assert!(column.ceilingz - column.floorz >= column.height);
    }

    #[test]
    fn crusher_kills_what_it_can_hurt() {
        let strip = crusher_strip(3004);
        let (mut level, recorder) = strip.load_recorded();
        let p = player(&level);
        assert!(level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 0));

        let mut lowest = f32::MAX;
        for _ in 0..600 {
            level.tick();
            lowest = lowest.min(ceiling(&level, 1));
        }
        let victim = level.things.iter().find(|t| t.kind == MapObjKind::MT_POSSESSED).unwrap();
        assert!(victim.health <= 0);
        assert!(recorder.count(|e| matches!(e, LevelEvent::ThingAdded { kind: MapObjKind::MT_BLOOD, .. })) >= 1);
        // the body no longer holds it up
        assert_eq!(lowest, 8.0);
        assert!(ceiling(&level, 1) > 8.0);
        let credited = level.things.get(p).and_then(|t| t.player()).map(|pl| pl.killcount);
        assert_eq!(credited, Some(1));
    }

    #[test]
    fn tagged_sectors_finish_together() {
        let strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(128, 0, 128).tagged(7))
            .join(58, 7)
            .room(Room::new(128, 40, 128))
            .room(Room::new(128, 16, 128).tagged(7))
            .thing(100, 128, 0, 1);
        let mut level = strip.load();
        let p = player(&level);
        assert!(level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 0));

        let mut done = [None, None];
        for tic in 1..=100 {
            level.tick();
            for (slot, sector) in [1, 3].into_iter().enumerate() {
                if done[slot].is_none() && level.map_data.sectors[sector].specialdata.is_none() {
                    done[slot] = Some(tic);
                }
            }
        }
        assert!(done[0].is_some());
        assert_eq!(done[0], done[1]);
        assert_eq!(level.map_data.sectors[1].floorheight, 24.0);
        assert_eq!(level.map_data.sectors[3].floorheight, 40.0);
        assert_eq!(level.map_data.sectors[2].floorheight, 40.0);
    }

    #[test]
    fn generalized_floor_raises_24() {
        // walk once, up 24, slow
        let strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(256, 8, 128).tagged(6))
            .join(0x6000 | (6 << 7) | 0x40, 6)
            .thing(100, 128, 0, 1);
        let mut level = strip.load();
        let p = player(&level);
        let line = strip.join_line(1);
        assert!(!level.trigger_special(line, p, TriggerKind::Push, 0));
        assert!(level.trigger_special(line, p, TriggerKind::Walk, 0));
        assert_eq!(level.map_data.linedefs[line].special, 0);

        level.run(20);
        assert_eq!(level.map_data.sectors[1].floorheight, 28.0);
        assert!(level.map_data.sectors[1].specialdata.is_some());
        level.run(20);
        assert_eq!(level.map_data.sectors[1].floorheight, 32.0);
        assert!(level.map_data.sectors[1].specialdata.is_none());
        assert!(level.thinkers.is_empty());
    }

    #[test]
    fn stairs_climb_through_matching_floors() {
        let strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 0, 128).tagged(9))
            .join(8, 9)
            .room(Room::new(64, 0, 128))
            .room(Room::new(64, 0, 128))
            .thing(100, 128, 0, 1);
        let mut level = strip.load();
        let p = player(&level);
        assert!(level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 0));
        assert_eq!(level.thinkers.len(), 3);

        level.run(200);
        let floors: Vec<f32> = level.map_data.sectors.iter().map(|s| s.floorheight).collect();
        assert_eq!(floors, vec![0.0, 8.0, 16.0, 24.0]);
        assert!(level.thinkers.is_empty());
    }

    #[test]
    fn glow_stays_between_its_limits() {
        let strip = Strip::new()
            .room(Room {
                light: 96,
                ..Room::new(256, 0, 128)
            })
            .room(Room {
                light: 200,
                ..Room::new(256, 0, 128).special(8)
            });
        let (mut level, recorder) = strip.load_recorded();
        assert_eq!(level.map_data.sectors[1].special, 0);
        assert_eq!(level.thinkers.len(), 1);

        let mut seen = Vec::new();
        for _ in 0..100 {
            level.tick();
            seen.push(level.map_data.sectors[1].lightlevel);
        }
        assert!(seen.iter().all(|l| (96..=200).contains(l)));
        assert!(seen.iter().any(|&l| l < 150));
        assert!(recorder.count(|e| matches!(e, LevelEvent::SectorLightChanged { sector: 1, .. })) > 10);
    }

    #[test]
    fn scroller_moves_the_front_texture() {
        let strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(256, 0, 128))
            .join(48, 0);
        let (mut level, recorder) = strip.load_recorded();
        let side = level.map_data.linedefs[strip.join_line(1)].front_sidedef;

        level.run(10);
        assert_eq!(level.map_data.sidedefs[side].textureoffset, 10.0);
        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::WallTextureChanged { sidedef } if *sidedef == side)),
            10
        );
    }

    #[test]
    fn walking_over_an_exit_line_ends_the_level() {
        let strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(256, 0, 128))
            .join(52, 0)
            .thing(200, 128, 0, 1);
        let (mut level, recorder) = strip.load_recorded();
        let p = player(&level);
        if let Some(t) = level.things.get_mut(p) {
            t.momxy = Vec2::new(30.0, 0.0);
        }

        // 30 then 27.2 after friction takes the centre over the line
        assert_eq!(level.run(35), 2);
        assert_eq!(level.exit, Some(false));
        assert_eq!(level.find_sector(level.things.get(p).unwrap().xy), 1);
        assert_eq!(recorder.count(|e| matches!(e, LevelEvent::LevelExit { secret: false })), 1);
        assert_eq!(level.map_data.linedefs[strip.join_line(1)].special, 0);
    }

    #[test]
    fn nukage_hurts_every_32_tics() {
        let strip = Strip::new()
            .room(Room::new(512, 0, 128).special(7))
            .thing(256, 128, 0, 1);
        let mut level = strip.load();
        let p = player(&level);

        level.run(32);
        assert_eq!(level.things.get(p).unwrap().health, 95);
        level.tick();
        assert_eq!(level.things.get(p).unwrap().health, 90);
    }

    #[test]
    fn secret_is_counted_once() {
        let strip = Strip::new()
            .room(Room::new(512, 0, 128).special(9))
            .thing(256, 128, 0, 1);
        let (mut level, recorder) = strip.load_recorded();
        let p = player(&level);
        assert_eq!(level.totals.secrets, 1);

        level.run(5);
        let found = level.things.get(p).and_then(|t| t.player()).map(|pl| pl.secretcount);
        assert_eq!(found, Some(1));
        assert_eq!(level.map_data.sectors[0].special, 0);
        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::Message { text, .. } if *text == SECRETFOUND)),
            1
        );
    }

    #[test]
    fn same_input_same_checksums() {
        let run = |push: f32| {
            let strip = crusher_strip(3004);
            let mut level = strip.load();
            let p = player(&level);
            level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 0);
            if let Some(t) = level.things.get_mut(p) {
                t.momxy = Vec2::new(push, 7.0);
            }
            (0..150)
                .map(|_| {
                    level.tick();
                    level.state_checksum()
                })
                .collect::<Vec<u32>>()
        };
        let a = run(12.0);
        let b = run(12.0);
        assert_eq!(a, b);
        let c = run(-12.0);
        assert_ne!(a, c);
    }

    #[test]
    fn thinkers_snapshot_mid_move() {
        let strip = crusher_strip(2028);
        let mut level = strip.load();
        let p = player(&level);
        level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 0);
        level.run(20);

        let bytes = level.thinkers.snapshot().unwrap();
        let restored = crate::thinker::Thinkers::restore(&bytes).unwrap();
        assert_eq!(restored, level.thinkers);
    }
}
