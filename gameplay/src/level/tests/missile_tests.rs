#[cfg(test)]
mod missile_tests {
    use glam::Vec2;

    use super::super::{Room, Strip};
    use crate::doom_def::ONFLOORZ;
    use crate::level::Level;
    use crate::thing::{MapObjFlag, ThingId};
    use crate::{LevelEvent, MapObjKind};

    fn open_room() -> Strip {
        Strip::new().room(Room::new(512, 0, 128))
    }

    /// Tick until the missile hits something, at most a second
    fn fly(level: &mut Level, missile: ThingId) {
        for _ in 0..35 {
            let flying = level
                .things
                .get(missile)
                .is_some_and(|m| m.has_flag(MapObjFlag::Missile));
            if !flying {
                return;
            }
            level.tick();
        }
        panic!("missile never landed");
    }

    /// A fireball from `shooter` at x 50 on its way to `victim` at x 300
    fn duel(shooter: MapObjKind, victim: MapObjKind) -> (Level, ThingId, ThingId) {
        let mut level = open_room().load();
        let from = level.spawn_thing(Vec2::new(50.0, 128.0), ONFLOORZ, shooter);
        let to = level.spawn_thing(Vec2::new(300.0, 128.0), ONFLOORZ, victim);
        let missile = level.spawn_missile(from, to, MapObjKind::MT_TROOPSHOT).unwrap();
        (level, to, missile)
    }

    fn assert_exploded(level: &Level, missile: ThingId) {
        let m = level.things.get(missile).unwrap();
        assert_eq!(m.state, MapObjKind::MT_TROOPSHOT.info().deathstate);
        assert!(!m.has_flag(MapObjFlag::Missile));
        assert_eq!(m.momxy, Vec2::ZERO);
    }

    #[test]
    fn fireball_spares_its_own_kind() {
        let (mut level, victim, missile) = duel(MapObjKind::MT_TROOP, MapObjKind::MT_TROOP);
        fly(&mut level, missile);
        assert_exploded(&level, missile);
        // stopped against the imp, not passed through it
        assert!(level.things.get(missile).unwrap().xy.x < 300.0 - 20.0);
        assert_eq!(
            level.things.get(victim).unwrap().health,
            MapObjKind::MT_TROOP.info().spawnhealth
        );
    }

    #[test]
    fn fireball_hurts_other_kinds() {
        let (mut level, victim, missile) = duel(MapObjKind::MT_TROOP, MapObjKind::MT_POSSESSED);
        fly(&mut level, missile);
        assert_exploded(&level, missile);
        assert!(level.things.get(victim).unwrap().health < MapObjKind::MT_POSSESSED.info().spawnhealth);
    }

    #[test]
    fn knights_and_barons_do_not_fight() {
        let (mut level, victim, missile) = duel(MapObjKind::MT_KNIGHT, MapObjKind::MT_BRUISER);
        fly(&mut level, missile);
        assert_exploded(&level, missile);
        assert_eq!(level.things.get(victim).unwrap().health, 1000);
    }

    #[test]
    fn wall_stops_a_missile() {
        let mut level = open_room().load();
        let shooter = level.spawn_thing(Vec2::new(400.0, 128.0), ONFLOORZ, MapObjKind::MT_POSSESSED);
        let missile = level
            .spawn_player_missile(shooter, MapObjKind::MT_TROOPSHOT)
            .unwrap();
        fly(&mut level, missile);
        assert_exploded(&level, missile);
        let x = level.things.get(missile).unwrap().xy.x;
        assert!(x > 500.0 && x <= 512.0 - 6.0, "{x}");
    }

    /// Player room then a room with a 64 high ceiling, the missile flying
    /// above that ceiling toward it
    fn into_low_ceiling(sky: bool) -> (Level, ThingId, crate::events::recorder::Recorder) {
        let (mut level, recorder) = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(256, 0, 64))
            .load_recorded();
        if sky {
            level.map_data.sectors[1].ceilingpic = level.pic_data.sky_num();
        }
        let shooter = level.spawn_thing(Vec2::new(100.0, 128.0), ONFLOORZ, MapObjKind::MT_POSSESSED);
        let missile = level
            .spawn_player_missile(shooter, MapObjKind::MT_TROOPSHOT)
            .unwrap();
        if let Some(m) = level.things.get_mut(missile) {
            m.z = 80.0;
        }
        (level, missile, recorder)
    }

    #[test]
    fn sky_swallows_a_missile() {
        let (mut level, missile, recorder) = into_low_ceiling(true);
        fly(&mut level, missile);
        assert!(level.things.get(missile).is_none());
        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::ThingRemoved { thing } if *thing == missile)),
            1
        );

        // the same shot at a plain ceiling blows up on the upper wall
        let (mut level, missile, _) = into_low_ceiling(false);
        fly(&mut level, missile);
        assert_exploded(&level, missile);
        assert!(level.things.get(missile).unwrap().xy.x < 256.0);
    }
}
