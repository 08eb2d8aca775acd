#[cfg(test)]
mod trace_tests {
    use glam::Vec2;

    use super::super::{Room, Strip, player, single_room, wedge};
    use crate::doom_def::ONFLOORZ;
    use crate::lang::english::GOTMEDIKIT;
    use crate::level::Level;
    use crate::options::GameOptions;
    use crate::pic::PicData;
    use crate::{LevelEvent, MapObjKind, SfxName, SoundOrigin};
    use crate::trace::{LineHit, TraceHooks, TraceRequest};

    /// Right hand wall of a one room strip
    const EAST_WALL: usize = 3;

    fn line_hits(strip: &Strip, req: TraceRequest) -> Vec<LineHit> {
        let mut level = strip.load();
        let mut hits = Vec::new();
        let mut on_line = |hit: &LineHit| {
            hits.push(*hit);
            true
        };
        assert!(level.trace_move(&req, TraceHooks::new().on_line(&mut on_line)));
        hits
    }

    #[test]
    fn ray_reports_the_wall_it_reaches() {
        let req = TraceRequest::ray(Vec2::new(10.0, 128.0), Vec2::new(1000.0, 0.0));
        let hits = line_hits(&single_room(), req);
        assert_eq!(hits.len(), 1);
        let hit = hits[0];
        assert_eq!(hit.line, EAST_WALL);
        assert_eq!(hit.side, 0);
        assert!((hit.fraction - 0.502).abs() < 1e-4, "{}", hit.fraction);
        assert!((hit.point.x - 512.0).abs() < 0.01);

        // a zero width mover is the same path
        let mover = TraceRequest::mover(Vec2::new(10.0, 128.0), Vec2::new(1000.0, 0.0), 0.0, 0.0, 56.0);
        let same = line_hits(&single_room(), mover);
        assert_eq!(same.len(), 1);
        assert!((same[0].fraction - hit.fraction).abs() < 1e-5);
    }

    #[test]
    fn box_touches_before_its_centre() {
        let req = TraceRequest::mover(Vec2::new(10.0, 128.0), Vec2::new(1000.0, 0.0), 16.0, 0.0, 56.0);
        let hits = line_hits(&single_room(), req);
        let wall = hits.iter().find(|h| h.line == EAST_WALL).unwrap();
        assert!((wall.fraction - 0.486).abs() < 1e-4, "{}", wall.fraction);
        assert!(hits.iter().all(|h| (0.0..=1.0).contains(&h.fraction)));
    }

    #[test]
    fn hits_arrive_nearest_first_and_stop_on_false() {
        let strip = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 0, 128))
            .room(Room::new(256, 0, 128));
        let req = TraceRequest::ray(Vec2::new(10.0, 100.0), Vec2::new(1000.0, 0.0));
        let hits = line_hits(&strip, req);
        let lines: Vec<usize> = hits.iter().map(|h| h.line).collect();
        assert_eq!(lines, vec![strip.join_line(1), strip.join_line(2), 7]);
        assert!(hits.windows(2).all(|w| w[0].fraction <= w[1].fraction));

        let mut level = strip.load();
        let mut seen = 0;
        let mut on_line = |_: &LineHit| {
            seen += 1;
            false
        };
        assert!(!level.trace_ray(&req, TraceHooks::new().on_line(&mut on_line)));
        assert_eq!(seen, 1);
    }

    #[test]
    fn leaves_are_visited_along_the_path() {
        let level = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 0, 128))
            .room(Room::new(256, 0, 128))
            .load();
        let mut leaves = Vec::new();
        level.trace_subsectors(Vec2::new(10.0, 128.0), Vec2::new(500.0, 0.0), 0.0, &mut |ss| {
            leaves.push(ss);
            true
        });
        assert_eq!(leaves, vec![0, 1, 2]);

        let mut leaves = Vec::new();
        level.trace_subsectors(Vec2::new(500.0, 128.0), Vec2::new(-500.0, 0.0), 0.0, &mut |ss| {
            leaves.push(ss);
            true
        });
        assert_eq!(leaves, vec![2, 1, 0]);
    }

    #[test]
    fn player_slides_to_a_stop_on_a_wall() {
        let mut level = single_room().load();
        let p = player(&level);
        level.set_position(p, Vec2::new(490.0, 128.0));
        if let Some(t) = level.things.get_mut(p) {
            t.momxy = Vec2::new(10.0, 0.0);
        }
        level.xy_movement(p);
        let t = level.things.get(p).unwrap();
        assert!((t.xy.x - 496.0).abs() < 0.1, "{}", t.xy);
        assert_eq!(t.xy.y, 128.0);
        assert_eq!(t.momxy.x, 0.0);
    }

    #[test]
    fn player_keeps_the_along_wall_part() {
        let mut level = single_room().load();
        let p = player(&level);
        level.set_position(p, Vec2::new(490.0, 128.0));
        if let Some(t) = level.things.get_mut(p) {
            t.momxy = Vec2::new(10.0, 5.0);
        }
        level.xy_movement(p);
        let t = level.things.get(p).unwrap();
        assert!((t.xy.x - 496.0).abs() < 0.1, "{}", t.xy);
        assert!((t.xy.y - 133.0).abs() < 0.1, "{}", t.xy);
        assert_eq!(t.momxy.x, 0.0);
        assert!(t.momxy.y > 0.0);
    }

    #[test]
    fn player_stuck_in_a_sharp_corner_stops() {
        let mut level = Level::load(&wedge(), GameOptions::default(), PicData::default()).unwrap();
        let p = player(&level);
        // just above the floor line, heading for the tip
        level.set_position(p, Vec2::new(420.0, 17.0));
        if let Some(t) = level.things.get_mut(p) {
            t.momxy = Vec2::new(30.0, 0.0);
        }
        level.xy_movement(p);

        let t = level.things.get(p).unwrap();
        assert_eq!(t.momxy, Vec2::ZERO);
        assert!(t.xy.x > 425.0, "{}", t.xy);
        // still clear of both walls
        assert!(t.xy.y >= 16.0 - 0.01, "{}", t.xy);
        assert!(t.xy.x + 2.0 * t.xy.y <= 464.01, "{}", t.xy);
    }

    #[test]
    fn player_picks_up_what_it_runs_over() {
        let (mut level, recorder) = single_room().load_recorded();
        let p = player(&level);
        level.set_position(p, Vec2::new(200.0, 128.0));
        if let Some(t) = level.things.get_mut(p) {
            t.health = 50;
            t.momxy = Vec2::new(30.0, 0.0);
        }
        let medikit = level.spawn_thing(Vec2::new(240.0, 128.0), ONFLOORZ, MapObjKind::MT_MEDI);
        level.xy_movement(p);

        let t = level.things.get(p).unwrap();
        assert_eq!(t.health, 75);
        // items are walked over, not into
        assert!((t.xy.x - 230.0).abs() < 0.01, "{}", t.xy);
        assert_eq!(t.player().unwrap().message.as_deref(), Some(GOTMEDIKIT));
        assert!(level.things.get(medikit).is_none());
        assert_eq!(
            recorder.count(|e| matches!(
                e,
                LevelEvent::Sound {
                    sfx: SfxName::itemup,
                    origin: SoundOrigin::Thing(thing)
                } if *thing == p
            )),
            1
        );
        assert_eq!(
            recorder.count(|e| matches!(e, LevelEvent::Message { text, .. } if *text == GOTMEDIKIT)),
            1
        );
    }

    #[test]
    fn full_health_leaves_the_medikit() {
        let mut level = single_room().load();
        let p = player(&level);
        level.set_position(p, Vec2::new(200.0, 128.0));
        if let Some(t) = level.things.get_mut(p) {
            t.momxy = Vec2::new(30.0, 0.0);
        }
        let medikit = level.spawn_thing(Vec2::new(240.0, 128.0), ONFLOORZ, MapObjKind::MT_MEDI);
        level.xy_movement(p);
        assert_eq!(level.things.get(p).unwrap().health, 100);
        assert!(level.things.get(medikit).is_some());
    }

    #[test]
    fn position_check_finds_the_wall() {
        let mut level = single_room().load();
        let p = player(&level);
        let clear = level.check_position(p, Vec2::new(256.0, 128.0));
        assert_eq!(clear.blockline, None);
        assert_eq!(clear.floorz, 0.0);
        assert_eq!(clear.ceilingz, 128.0);

        let against = level.check_position(p, Vec2::new(500.0, 128.0));
        assert_eq!(against.blockline, Some(EAST_WALL));
    }

    #[test]
    fn sight_passes_open_lines() {
        let mut level = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(256, 0, 128))
            .thing(100, 128, 0, 1)
            .load();
        let p = player(&level);
        let monster = level.spawn_thing(Vec2::new(400.0, 128.0), ONFLOORZ, MapObjKind::MT_POSSESSED);
        assert!(level.has_line_of_sight(p, monster));
        assert!(level.has_line_of_sight(monster, p));
    }

    #[test]
    fn sight_is_blocked_by_a_closed_door() {
        let mut level = Strip::new()
            .room(Room::new(256, 0, 128))
            .room(Room::new(64, 0, 0))
            .room(Room::new(256, 0, 128))
            .thing(100, 128, 0, 1)
            .load();
        let p = player(&level);
        let monster = level.spawn_thing(Vec2::new(450.0, 128.0), ONFLOORZ, MapObjKind::MT_POSSESSED);
        assert!(!level.has_line_of_sight(p, monster));
    }
}
