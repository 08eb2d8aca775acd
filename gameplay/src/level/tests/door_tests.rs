#[cfg(test)]
mod door_tests {
    use glam::Vec2;

    use super::super::{Room, Strip, player};
    use crate::doom_def::{Card, ONFLOORZ, TICRATE};
    use crate::env::TriggerKind;
    use crate::env::ceiling::CeilingKind;
    use crate::env::doors::DoorKind;
    use crate::lang::english::PD_BLUEK;
    use crate::level::Level;
    use crate::thinker::{Thinker, ThinkerId};
    use crate::{LevelEvent, MapObjKind, SfxName, SoundOrigin};

    const DOOR: usize = 1;

    /// Player room, a closed door, and a room with a 100 high ceiling behind
    /// it. The door opens to 96.
    fn door_strip(special: u16, tag: i16) -> Strip {
        Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 0, 0).tagged(tag))
            .join(special, tag)
            .room(Room::new(256, 0, 100))
            .thing(200, 128, 0, 1)
    }

    fn ceiling(level: &Level) -> f32 {
        level.map_data.sectors[DOOR].ceilingheight
    }

    fn door_direction(level: &Level, id: ThinkerId) -> i32 {
        match level.thinkers.get(id) {
            Some(Thinker::VerticalDoor(door)) => door.direction,
            t => panic!("not a door: {t:?}"),
        }
    }

    /// Tick until the door sector is idle, giving every ceiling height seen
    fn run_door(level: &mut Level) -> Vec<f32> {
        let mut heights = Vec::new();
        while level.map_data.sectors[DOOR].specialdata.is_some() {
            level.tick();
            heights.push(ceiling(level));
            assert!(heights.len() < 2000, "door never finished");
        }
        heights
    }

    #[test]
    fn manual_door_opens_holds_and_closes() {
        let strip = door_strip(1, 0);
        let (mut level, recorder) = strip.load_recorded();
        let p = player(&level);

        assert!(level.use_lines(p));
        let id = level.map_data.sectors[DOOR].specialdata.unwrap();
        assert_eq!(level.thinkers.len(), 1);

        let heights = run_door(&mut level);
        let top = heights.iter().copied().fold(f32::MIN, f32::max);
        // lowest neighbouring ceiling less 4
        assert_eq!(top, 96.0);
        let held = heights.iter().filter(|&&h| h == top).count() as i32;
        assert!((150..=152).contains(&held), "held for {held}");
        assert_eq!(ceiling(&level), 0.0);

        assert!(level.map_data.sectors[DOOR].specialdata.is_none());
        assert!(level.thinkers.get(id).is_none());
        assert!(level.thinkers.is_empty());
        // push doors stay usable
        assert_eq!(level.map_data.linedefs[strip.join_line(1)].special, 1);

        assert_eq!(
            recorder.count(|e| matches!(
                e,
                LevelEvent::Sound {
                    sfx: SfxName::doropn,
                    origin: SoundOrigin::Sector(DOOR)
                }
            )),
            1
        );
        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::Sound { sfx: SfxName::dorcls, .. })),
            1
        );
        assert!(recorder.count(|e| matches!(e, LevelEvent::SectorZChanged { sector: DOOR, .. })) > 90);
    }

    #[test]
    fn open_stay_door_only_rises() {
        let strip = door_strip(2, 5);
        let mut level = strip.load();
        let p = player(&level);
        let line = strip.join_line(1);

        assert!(level.trigger_special(line, p, TriggerKind::Walk, 0));
        // walk once
        assert_eq!(level.map_data.linedefs[line].special, 0);

        let heights = run_door(&mut level);
        assert!(heights.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(ceiling(&level), 96.0);
        level.run(300);
        assert_eq!(ceiling(&level), 96.0);
        assert!(level.thinkers.is_empty());
    }

    #[test]
    fn open_wait_close_restores_the_ceiling() {
        let strip = door_strip(4, 5);
        let mut level = strip.load();
        let p = player(&level);
        let before = ceiling(&level);

        assert!(level.trigger_special(strip.join_line(1), p, TriggerKind::Walk, 0));
        let heights = run_door(&mut level);
        assert!(heights.contains(&96.0));
        assert_eq!(ceiling(&level), before);
    }

    #[test]
    fn busy_sector_ignores_tagged_door() {
        let strip = door_strip(4, 5);
        let mut level = strip.load();
        let p = player(&level);
        let line = strip.join_line(1);

        assert!(level.ev_do_door(line, DoorKind::Open));
        let first = level.map_data.sectors[DOOR].specialdata;
        // already moving, keep going
        assert!(!level.trigger_special(line, p, TriggerKind::Walk, 0));
        assert_eq!(level.map_data.sectors[DOOR].specialdata, first);
        assert_eq!(level.thinkers.len(), 1);
        // walk once lines are spent even when nothing started
        assert_eq!(level.map_data.linedefs[line].special, 0);
    }

    #[test]
    fn pushing_a_moving_door() {
        let strip = door_strip(1, 0);
        let mut level = strip.load();
        let p = player(&level);
        let line = strip.join_line(1);

        assert!(level.use_lines(p));
        let id = level.map_data.sectors[DOOR].specialdata.unwrap();
        level.run(10);
        assert_eq!(ceiling(&level), 20.0);

        // monsters never close doors
        let monster = level.spawn_thing(Vec2::new(100.0, 64.0), ONFLOORZ, MapObjKind::MT_POSSESSED);
        assert!(!level.ev_vertical_door(line, monster));
        assert_eq!(door_direction(&level, id), 1);

        // an opening door closes for a player
        assert!(level.use_lines(p));
        assert_eq!(door_direction(&level, id), -1);
        level.run(3);
        assert_eq!(ceiling(&level), 14.0);

        // and a closing door opens for anyone
        assert!(level.ev_vertical_door(line, monster));
        assert_eq!(door_direction(&level, id), 1);
        level.tick();
        assert_eq!(ceiling(&level), 16.0);
        // still the same thinker
        assert_eq!(level.map_data.sectors[DOOR].specialdata, Some(id));
    }

    #[test]
    fn waiting_door_closes_for_a_player() {
        let strip = door_strip(1, 0);
        let mut level = strip.load();
        let p = player(&level);

        assert!(level.use_lines(p));
        let id = level.map_data.sectors[DOOR].specialdata.unwrap();
        level.run(60);
        assert_eq!(ceiling(&level), 96.0);
        assert_eq!(door_direction(&level, id), 0);

        assert!(level.use_lines(p));
        assert_eq!(door_direction(&level, id), -1);
        level.tick();
        assert_eq!(ceiling(&level), 94.0);
    }

    #[test]
    fn other_mover_blocks_the_push() {
        let strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 0, 64).tagged(4))
            .join(1, 4)
            .room(Room::new(256, 0, 100))
            .thing(200, 128, 0, 1);
        let mut level = strip.load();
        let p = player(&level);
        let line = strip.join_line(1);

        assert!(level.ev_do_ceiling(line, CeilingKind::LowerToFloor));
        let id = level.map_data.sectors[DOOR].specialdata.unwrap();
        assert!(!level.use_lines(p));
        assert!(matches!(level.thinkers.get(id), Some(Thinker::CeilingMove(_))));
        assert_eq!(level.thinkers.len(), 1);
    }

    #[test]
    fn locked_door_needs_its_key() {
        let strip = door_strip(26, 0);
        let (mut level, recorder) = strip.load_recorded();
        let p = player(&level);

        assert!(!level.use_lines(p));
        assert!(level.map_data.sectors[DOOR].specialdata.is_none());
        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::Message { text, .. } if *text == PD_BLUEK)),
            1
        );
        let message = level.things.get(p).and_then(|t| t.player()).and_then(|pl| pl.message.clone());
        assert_eq!(message.as_deref(), Some(PD_BLUEK));

        // the skull works for a card door
        if let Some(pl) = level.things.get_mut(p).and_then(|t| t.player_mut()) {
            pl.cards[Card::Blueskull.index()] = true;
        }
        assert!(level.use_lines(p));
        assert!(level.map_data.sectors[DOOR].specialdata.is_some());
    }

    #[test]
    fn sector_special_closes_door_after_30_seconds() {
        let level_strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 0, 96).special(10))
            .room(Room::new(256, 0, 100));
        let mut level = level_strip.load();
        assert_eq!(level.map_data.sectors[DOOR].special, 0);
        assert_eq!(level.thinkers.len(), 1);

        level.run(30 * TICRATE as u32);
        assert_eq!(ceiling(&level), 96.0);
        level.run(100);
        assert_eq!(ceiling(&level), 0.0);
        assert!(level.thinkers.is_empty());
        assert!(level.map_data.sectors[DOOR].specialdata.is_none());
    }

    #[test]
    fn generalized_door_holds_for_a_second() {
        // push many, open wait close, normal speed, 1 second wait
        let strip = door_strip(0x3c00 | 7, 0);
        let mut level = strip.load();
        let p = player(&level);
        let line = strip.join_line(1);
        assert!(!level.trigger_special(line, p, TriggerKind::Walk, 0));
        assert!(level.trigger_special(line, p, TriggerKind::Push, 0));

        let heights = run_door(&mut level);
        let top = heights.iter().copied().fold(f32::MIN, f32::max);
        assert_eq!(top, 96.0);
        let held = heights.iter().filter(|&&h| h == top).count() as i32;
        assert!((TICRATE..=TICRATE + 2).contains(&held), "held for {held}");
        assert_eq!(ceiling(&level), 0.0);
        assert!(level.thinkers.is_empty());
        // used again as often as wanted
        assert_eq!(level.map_data.linedefs[line].special, 0x3c07);
        assert!(level.trigger_special(line, p, TriggerKind::Push, 0));
    }
}
