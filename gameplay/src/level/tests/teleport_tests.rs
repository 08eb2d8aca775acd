#[cfg(test)]
mod teleport_tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec2;

    use super::super::{Room, Strip, player};
    use crate::doom_def::ONFLOORZ;
    use crate::env::TriggerKind;
    use crate::level::Level;
    use crate::thing::ThingId;
    use crate::{LevelEvent, MapObjKind};

    const LANDING: Vec2 = Vec2::new(400.0, 128.0);

    /// Player room, then a room tagged 5 with a landing spot facing north.
    /// The line between them is a repeatable teleport.
    fn teleport_strip() -> Strip {
        Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(256, 0, 128).tagged(5))
            .join(97, 5)
            .thing(100, 128, 0, 1)
            .thing(400, 128, 90, 14)
    }

    fn push(level: &mut Level, id: ThingId, xy: Vec2, momx: f32) {
        level.set_position(id, xy);
        if let Some(t) = level.things.get_mut(id) {
            t.momxy = Vec2::new(momx, 0.0);
        }
    }

    #[test]
    fn walking_in_from_the_front_teleports() {
        let (mut level, recorder) = teleport_strip().load_recorded();
        let p = player(&level);
        push(&mut level, p, Vec2::new(230.0, 128.0), 30.0);
        level.tick();

        let t = level.things.get(p).unwrap();
        assert_eq!(t.xy, LANDING);
        assert_eq!(t.momxy, Vec2::ZERO);
        assert_eq!(t.reactiontime, 18);
        assert!((t.angle.rad() - FRAC_PI_2).abs() < 1e-4);
        // fog where the player left and where it arrived
        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::ThingAdded { kind: MapObjKind::MT_TFOG, .. })),
            2
        );
    }

    #[test]
    fn walking_out_from_the_back_does_not() {
        let strip = teleport_strip();
        let mut level = strip.load();
        let p = player(&level);
        push(&mut level, p, Vec2::new(280.0, 128.0), -30.0);
        level.tick();

        let t = level.things.get(p).unwrap();
        assert_eq!(t.xy, Vec2::new(250.0, 128.0));
        assert_eq!(level.find_sector(t.xy), 0);
        assert!(!level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 1));
        assert_eq!(level.map_data.linedefs[strip.join_line(1)].special, 97);
    }

    #[test]
    fn missiles_never_teleport() {
        let strip = teleport_strip();
        let mut level = strip.load();
        let p = player(&level);
        let missile = level
            .spawn_player_missile(p, MapObjKind::MT_TROOPSHOT)
            .unwrap();
        let before = level.things.get(missile).unwrap().xy;
        let line = strip.join_line(1);
        assert!(!level.trigger_special(line, missile, TriggerKind::Walk, 0));
        assert!(!level.ev_teleport(line, 0, missile, false));
        assert_eq!(level.things.get(missile).unwrap().xy, before);
    }

    #[test]
    fn player_telefrags_whatever_is_on_the_spot() {
        let strip = teleport_strip();
        let mut level = strip.load();
        let p = player(&level);
        let victim = level.spawn_thing(LANDING, ONFLOORZ, MapObjKind::MT_POSSESSED);

        assert!(level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 0));
        assert_eq!(level.things.get(p).unwrap().xy, LANDING);
        assert!(level.things.get(victim).unwrap().health <= 0);
    }

    #[test]
    fn monsters_only_telefrag_on_map_30() {
        let strip = teleport_strip();
        let mut level = strip.load();
        let imp = level.spawn_thing(Vec2::new(150.0, 128.0), ONFLOORZ, MapObjKind::MT_TROOP);
        let victim = level.spawn_thing(LANDING, ONFLOORZ, MapObjKind::MT_POSSESSED);
        let line = strip.join_line(1);

        assert!(!level.trigger_special(line, imp, TriggerKind::Walk, 0));
        assert_eq!(level.things.get(imp).unwrap().xy, Vec2::new(150.0, 128.0));
        assert_eq!(level.things.get(victim).unwrap().health, 20);

        level.options.map = 30;
        assert!(level.trigger_special(line, imp, TriggerKind::Walk, 0));
        assert_eq!(level.things.get(imp).unwrap().xy, LANDING);
        assert!(level.things.get(victim).unwrap().health <= 0);
    }
}
