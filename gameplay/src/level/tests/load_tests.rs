#[cfg(test)]
mod load_tests {
    use glam::Vec2;
    use wad::{LumpError, WadThing};

    use super::super::{DEPTH, Room, Strip, player, single_room};
    use crate::error::LoadError;
    use crate::level::Level;
    use crate::options::{GameOptions, Skill};
    use crate::pic::PicData;
    use crate::{MapObjKind, NodeChild};

    fn three_rooms() -> Strip {
        Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 16, 96))
            .room(Room::new(256, 0, 128).tagged(3))
    }

    #[test]
    fn strip_loads() {
        let level = three_rooms().load();
        let map = &level.map_data;
        assert_eq!(map.sectors.len(), 3);
        assert_eq!(map.subsectors.len(), 3);
        assert_eq!(map.nodes.len(), 2);
        assert_eq!(map.root(), NodeChild::Node(1));
        assert_eq!(map.sectors_by_tag(3), &[2]);
        assert!(map.sectors_by_tag(0).is_empty());

        // every leaf has a closed outline
        for ss in map.subsectors.iter() {
            assert!(ss.polygon.len() >= 4, "{:?}", ss.polygon);
            assert_eq!(ss.bbox.top, DEPTH as f32);
            assert_eq!(ss.bbox.bottom, 0.0);
        }
        // the middle room is bounded by both shared lines
        let middle: Vec<usize> = map.neighbours(1).collect();
        assert_eq!(middle, vec![0, 2]);
    }

    #[test]
    fn find_sector_is_stable_for_interior_points() {
        let level = three_rooms().load();
        let cases = [
            (Vec2::new(10.0, 10.0), 0),
            (Vec2::new(255.0, 200.0), 0),
            (Vec2::new(257.0, 5.0), 1),
            (Vec2::new(300.0, 128.0), 1),
            (Vec2::new(321.0, 128.0), 2),
            (Vec2::new(570.0, 250.0), 2),
        ];
        for (point, sector) in cases {
            let first = level.find_sector(point);
            assert_eq!(first, sector, "{point}");
            for _ in 0..3 {
                assert_eq!(level.find_sector(point), first);
            }
            let ss = level.point_in_subsector(point);
            assert!(ss < level.map_data.subsectors.len());
            assert_eq!(level.map_data.subsectors[ss].sector, sector);
        }
    }

    #[test]
    fn geometry_checksum_is_repeatable() {
        let a = three_rooms().load();
        let b = three_rooms().load();
        assert_eq!(a.map_data.checksum(), b.map_data.checksum());

        let c = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 24, 96))
            .room(Room::new(256, 0, 128).tagged(3))
            .load();
        assert_ne!(a.map_data.checksum(), c.map_data.checksum());
    }

    #[test]
    fn lumps_round_trip_in_to_a_level() {
        let lumps = three_rooms().build().to_lumps();
        let level = Level::from_lumps(&lumps, GameOptions::default(), PicData::default()).unwrap();
        assert_eq!(level.map_data.checksum(), three_rooms().load().map_data.checksum());
    }

    #[test]
    fn bad_lump_size_fails_the_load() {
        let mut lumps = three_rooms().build().to_lumps();
        lumps.linedefs.pop();
        let err = Level::from_lumps(&lumps, GameOptions::default(), PicData::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Lump(LumpError::BadLumpSize {
                lump: "LINEDEFS",
                record: 14,
                ..
            })
        ));
    }

    #[test]
    fn bad_reference_fails_the_load() {
        let mut map = three_rooms().build();
        map.sidedefs[0].sector = 9;
        let err = Level::load(&map, GameOptions::default(), PicData::default()).unwrap_err();
        match err {
            LoadError::BadReference {
                kind,
                target,
                value,
                count,
                ..
            } => {
                assert_eq!(kind, "sidedef");
                assert_eq!(target, "sector");
                assert_eq!(value, 9);
                assert_eq!(count, 3);
            }
            e => panic!("unexpected error {e}"),
        }

        let mut map = three_rooms().build();
        map.segs[2].linedef = 500;
        assert!(Level::load(&map, GameOptions::default(), PicData::default()).is_err());
    }

    #[test]
    fn node_loops_fail_the_load() {
        // the first node points back up at the root
        let mut map = three_rooms().build();
        map.nodes[0].child_index[1] = 1;
        let err = Level::load(&map, GameOptions::default(), PicData::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::BadReference {
                kind: "node",
                index: 0,
                target: "node",
                value: 1,
                count: 0,
            }
        ));

        // the root points at itself
        let mut map = three_rooms().build();
        map.nodes[1].child_index[1] = 1;
        assert!(matches!(
            Level::load(&map, GameOptions::default(), PicData::default()),
            Err(LoadError::BadReference { index: 1, value: 1, .. })
        ));
    }

    #[test]
    fn empty_map_is_an_error() {
        let mut map = three_rooms().build();
        map.sectors.clear();
        assert!(matches!(
            Level::load(&map, GameOptions::default(), PicData::default()),
            Err(LoadError::Empty("sectors"))
        ));
    }

    #[test]
    fn things_spawn_by_skill() {
        let strip = single_room()
            // easy only
            .thing(100, 100, 0, 3004)
            .thing(400, 100, 90, 3001);
        let mut map = strip.build();
        map.things[1] = WadThing::new(100, 100, 0, 3004, 1);
        map.things[2] = WadThing::new(400, 100, 90, 3001, 4);

        let easy = GameOptions {
            skill: Skill::Easy,
            ..GameOptions::default()
        };
        let level = Level::load(&map, easy, PicData::default()).unwrap();
        let kinds: Vec<MapObjKind> = level.things.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&MapObjKind::MT_POSSESSED));
        assert!(!kinds.contains(&MapObjKind::MT_TROOP));
        assert_eq!(level.totals.kills, 1);

        let hard = GameOptions {
            skill: Skill::Hard,
            ..GameOptions::default()
        };
        let level = Level::load(&map, hard, PicData::default()).unwrap();
        let kinds: Vec<MapObjKind> = level.things.iter().map(|t| t.kind).collect();
        assert!(!kinds.contains(&MapObjKind::MT_POSSESSED));
        assert!(kinds.contains(&MapObjKind::MT_TROOP));

        let none = GameOptions {
            skill: Skill::Easy,
            no_monsters: true,
            ..GameOptions::default()
        };
        let level = Level::load(&map, none, PicData::default()).unwrap();
        assert_eq!(level.totals.kills, 0);
        assert_eq!(level.things.len(), 1);
    }

    #[test]
    fn player_spawns_on_the_floor() {
        let level = Strip::new()
            .room(Room::new(512, 32, 160))
            .thing(256, 128, 90, 1)
            .load();
        let player = level.things.get(player(&level)).unwrap();
        assert_eq!(player.z, 32.0);
        assert_eq!(player.floorz, 32.0);
        assert_eq!(player.ceilingz, 160.0);
        assert!(player.is_player());
        assert!(level.player_starts[0].is_some());
        assert!(level.players[1].is_none());
    }
}
