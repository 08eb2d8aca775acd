//! Hitscan, sight, use and blast queries. All of them are rays through the
//! trace engine with the rules of what stops them applied in the hooks.

use std::cell::Cell;

use glam::{Vec2, Vec3};
use log::trace;
use math::Angle;

use super::movement::body_can_pass;
use super::{MapObjFlag, ThingId};
use crate::doom_def::{MISSILERANGE, USERANGE};
use crate::env::TriggerKind;
use crate::events::SoundOrigin;
use crate::info::SfxName;
use crate::level::Level;
use crate::trace::{self, LineHit, ThingHit, TraceHooks, TraceRequest};

/// Can't aim outside the view angles
const AIM_SLOPE: f32 = 100.0 / 160.0;

/// A ray that ignores heights when testing things. Vertical checks are done
/// with slopes by the callers.
fn flat_ray(start: Vec2, delta: Vec2, ignore: ThingId) -> TraceRequest {
    TraceRequest {
        z: f32::MIN / 2.0,
        height: f32::MAX,
        ..TraceRequest::ray(start, delta)
    }
    .ignoring(ignore)
}

/// What a hitscan attack ended on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotResult {
    Thing(ThingId),
    Wall(usize),
    /// Went into a sky or ran out of range
    Nothing,
}

impl Level {
    /// P_CheckSight
    ///
    /// True if the eyes of `looker` can see any part of `target`. Two-sided
    /// lines narrow the visible slope window, a one-sided line or a closed
    /// opening blocks.
    pub fn has_line_of_sight(&mut self, looker: ThingId, target: ThingId) -> bool {
        let (Some(a), Some(b)) = (self.things.get(looker), self.things.get(target)) else {
            return false;
        };
        let sightz = a.z + a.height - a.height / 4.0;
        let mut top_slope = b.z + b.height - sightz;
        let mut bottom_slope = b.z - sightz;
        let req = flat_ray(a.xy, b.xy - a.xy, looker);

        let map = &self.map_data;
        let mut on_line = |hit: &LineHit| {
            let line = &map.linedefs[hit.line];
            let Some(back) = line.backsector else {
                return false;
            };
            let front = &map.sectors[line.frontsector];
            let back = &map.sectors[back];
            if front.floorheight == back.floorheight && front.ceilingheight == back.ceilingheight {
                // no wall to block sight with
                return true;
            }
            let Some(opening) = map.line_opening(hit.line) else {
                return false;
            };
            if opening.range <= 0.0 {
                // quick test for totally closed doors
                return false;
            }
            let frac = hit.fraction.max(f32::EPSILON);
            if front.floorheight != back.floorheight {
                let slope = (opening.bottom - sightz) / frac;
                if slope > bottom_slope {
                    bottom_slope = slope;
                }
            }
            if front.ceilingheight != back.ceilingheight {
                let slope = (opening.top - sightz) / frac;
                if slope < top_slope {
                    top_slope = slope;
                }
            }
            top_slope > bottom_slope
        };
        trace::trace_ray(
            map,
            &self.things,
            &mut self.trace_ctx,
            &req,
            TraceHooks::new().on_line(&mut on_line),
        )
    }

    /// P_AimLineAttack
    ///
    /// The first shootable thing within the vertical view window along
    /// `angle`, and the slope to its middle.
    pub fn aim_line_attack(
        &mut self,
        shooter: ThingId,
        angle: Angle,
        range: f32,
    ) -> Option<(ThingId, f32)> {
        let source = self.things.get(shooter)?;
        let shootz = source.z + source.height / 2.0 + 8.0;
        let req = flat_ray(source.xy, angle.unit() * range, shooter);
        // narrowed by lines, read by things
        let top_slope = Cell::new(AIM_SLOPE);
        let bottom_slope = Cell::new(-AIM_SLOPE);
        let mut result = None;

        let map = &self.map_data;
        let things = &self.things;
        let mut on_line = |hit: &LineHit| {
            let line = &map.linedefs[hit.line];
            let Some(opening) = map.line_opening(hit.line) else {
                return false;
            };
            if opening.range <= 0.0 {
                return false;
            }
            let Some(back) = line.backsector else {
                return false;
            };
            let front = &map.sectors[line.frontsector];
            let back = &map.sectors[back];
            let dist = (range * hit.fraction).max(f32::EPSILON);
            if front.floorheight != back.floorheight {
                bottom_slope.set(bottom_slope.get().max((opening.bottom - shootz) / dist));
            }
            if front.ceilingheight != back.ceilingheight {
                top_slope.set(top_slope.get().min((opening.top - shootz) / dist));
            }
            top_slope.get() > bottom_slope.get()
        };
        let mut on_thing = |hit: &ThingHit| {
            let Some(thing) = things.get(hit.thing) else {
                return true;
            };
            if !thing.has_flag(MapObjFlag::Shootable) {
                return true;
            }
            let dist = (range * hit.fraction).max(f32::EPSILON);
            let (top, bottom) = (top_slope.get(), bottom_slope.get());
            let thing_top = ((thing.z + thing.height - shootz) / dist).min(top);
            let thing_bottom = ((thing.z - shootz) / dist).max(bottom);
            if thing_top < bottom || thing_bottom > top {
                // shot over or under it
                return true;
            }
            result = Some((hit.thing, (thing_top + thing_bottom) / 2.0));
            false
        };
        trace::trace_ray(
            map,
            things,
            &mut self.trace_ctx,
            &req,
            TraceHooks::new()
                .on_line(&mut on_line)
                .on_thing(&mut on_thing),
        );
        result
    }

    /// P_LineAttack
    ///
    /// Fire a hitscan from the middle of `shooter`. Every line with a special
    /// met before whatever stops the shot, and the stopping line itself, gets
    /// a gun trigger. Walls get a puff, things get blood or a puff.
    pub fn line_attack(
        &mut self,
        shooter: ThingId,
        angle: Angle,
        range: f32,
        slope: f32,
        damage: i32,
    ) -> ShotResult {
        let Some(source) = self.things.get(shooter) else {
            return ShotResult::Nothing;
        };
        let start = source.xy;
        let shootz = source.z + source.height / 2.0 + 8.0;
        let delta = angle.unit() * range;
        let req = flat_ray(start, delta, shooter);
        let sky = self.pic_data.sky_num();

        let mut specials: Vec<(usize, usize)> = Vec::new();
        let mut wall: Option<(usize, f32, bool)> = None;
        let mut victim: Option<(ThingId, f32)> = None;

        let map = &self.map_data;
        let things = &self.things;
        let mut on_line = |hit: &LineHit| {
            let line = &map.linedefs[hit.line];
            if line.special != 0 {
                specials.push((hit.line, hit.side));
            }
            let dist = (range * hit.fraction).max(f32::EPSILON);
            if let (Some(opening), Some(back)) = (map.line_opening(hit.line), line.backsector) {
                let front = &map.sectors[line.frontsector];
                let back = &map.sectors[back];
                let under = front.floorheight != back.floorheight
                    && (opening.bottom - shootz) / dist > slope;
                let over = front.ceilingheight != back.ceilingheight
                    && (opening.top - shootz) / dist < slope;
                if !under && !over {
                    // shot continues
                    return true;
                }
            }
            // hit line, position a bit closer
            let frac = hit.fraction - 4.0 / range;
            let z = shootz + slope * range * frac;
            let front = &map.sectors[line.frontsector];
            let mut in_sky = front.ceilingpic == sky && z > front.ceilingheight;
            if let Some(back) = line.backsector {
                // it's a sky hack wall
                in_sky |= map.sectors[back].ceilingpic == sky;
            }
            wall = Some((hit.line, frac, in_sky));
            false
        };
        let mut on_thing = |hit: &ThingHit| {
            let Some(thing) = things.get(hit.thing) else {
                return true;
            };
            if !thing.has_flag(MapObjFlag::Shootable) {
                // corpse or something
                return true;
            }
            let dist = (range * hit.fraction).max(f32::EPSILON);
            if (thing.z + thing.height - shootz) / dist < slope {
                // shot over the thing
                return true;
            }
            if (thing.z - shootz) / dist > slope {
                // shot under the thing
                return true;
            }
            victim = Some((hit.thing, hit.fraction - 10.0 / range));
            false
        };
        trace::trace_ray(
            map,
            things,
            &mut self.trace_ctx,
            &req,
            TraceHooks::new()
                .on_line(&mut on_line)
                .on_thing(&mut on_thing),
        );

        for (line, side) in specials {
            self.trigger_special(line, shooter, TriggerKind::Gun, side);
        }

        if let Some((thing, frac)) = victim {
            let point = start + delta * frac;
            let xyz = Vec3::new(point.x, point.y, shootz + slope * range * frac);
            let bleeds = self
                .things
                .get(thing)
                .is_some_and(|t| !t.has_flag(MapObjFlag::NoBlood));
            if bleeds {
                self.spawn_blood(xyz, damage);
            } else {
                self.spawn_puff(xyz);
            }
            if damage > 0 {
                self.damage(thing, Some(shooter), Some(shooter), damage);
            }
            return ShotResult::Thing(thing);
        }
        if let Some((line, frac, in_sky)) = wall {
            if in_sky {
                // don't shoot the sky!
                return ShotResult::Nothing;
            }
            let point = start + delta * frac;
            self.spawn_puff(Vec3::new(point.x, point.y, shootz + slope * range * frac));
            return ShotResult::Wall(line);
        }
        ShotResult::Nothing
    }

    /// A straight shot at whatever is ahead, aimed vertically at the first
    /// thing in view. Used by the simple attack helpers.
    pub fn gun_shot(&mut self, shooter: ThingId, damage: i32) -> ShotResult {
        let Some(angle) = self.things.get(shooter).map(|t| t.angle) else {
            return ShotResult::Nothing;
        };
        let slope = self
            .aim_line_attack(shooter, angle, MISSILERANGE)
            .map(|(_, s)| s)
            .unwrap_or(0.0);
        self.events.sound(SfxName::pistol, SoundOrigin::Thing(shooter));
        self.line_attack(shooter, angle, MISSILERANGE, slope, damage)
    }

    /// P_UseLines
    ///
    /// Looks for special lines in front of the player to activate. Only the
    /// front side of a line can be used, a plain wall in the way makes the
    /// player grunt.
    pub fn use_lines(&mut self, user: ThingId) -> bool {
        let Some(thing) = self.things.get(user) else {
            return false;
        };
        let start = thing.xy;
        let req = flat_ray(start, thing.angle.unit() * USERANGE, user);

        let mut used: Option<(usize, usize)> = None;
        let mut blocked = false;
        let map = &self.map_data;
        let mut on_line = |hit: &LineHit| {
            let line = &map.linedefs[hit.line];
            if line.special == 0 {
                let open = map.line_opening(hit.line).is_some_and(|o| o.range > 0.0);
                if !open {
                    blocked = true;
                    // can't use through a wall
                    return false;
                }
                // not a special line, but keep checking
                return true;
            }
            used = Some((hit.line, line.point_on_side(start)));
            false
        };
        trace::trace_ray(
            map,
            &self.things,
            &mut self.trace_ctx,
            &req,
            TraceHooks::new().on_line(&mut on_line),
        );

        if blocked {
            self.events.sound(SfxName::noway, SoundOrigin::Thing(user));
            return false;
        }
        let Some((line, side)) = used else {
            return false;
        };
        if side == 1 {
            // don't use back sides
            trace!("Line {line} used from the back");
            return false;
        }
        self.trigger_special(line, user, TriggerKind::Push, side)
    }

    /// True if a body move by `delta` would be stopped by a wall it can't
    /// step through or a solid thing. Nothing is moved.
    pub fn path_blocked(&mut self, id: ThingId, delta: Vec2) -> bool {
        let Some(thing) = self.things.get(id) else {
            return true;
        };
        let (z, height, flags) = (thing.z, thing.height, thing.flags);
        let monster = thing.is_monster();
        let req = TraceRequest::mover(thing.xy, delta, thing.radius, z, height).ignoring(id);
        let map = &self.map_data;
        let things = &self.things;
        let mut on_line = |hit: &LineHit| body_can_pass(map, hit.line, z, height, flags, monster);
        let mut on_thing = |hit: &ThingHit| {
            !things
                .get(hit.thing)
                .is_some_and(|t| t.has_flag(MapObjFlag::Solid))
        };
        !trace::trace_move(
            map,
            things,
            &mut self.trace_ctx,
            &req,
            TraceHooks::new()
                .on_line(&mut on_line)
                .on_thing(&mut on_thing),
        )
    }

    /// P_RadiusAttack
    ///
    /// `spot` is the exploding thing, `source` the creature that caused it.
    /// Damage falls off with the larger axis distance and needs line of
    /// sight from the spot.
    pub fn radius_attack(&mut self, spot: ThingId, source: Option<ThingId>, damage: i32) {
        let Some(bomb) = self.things.get(spot) else {
            return;
        };
        let centre = bomb.xy;
        let (_, others) = trace::touching(
            &self.map_data,
            &self.things,
            &mut self.trace_ctx,
            centre,
            damage as f32,
            Some(spot),
        );
        for other in others {
            let Some(thing) = self.things.get(other) else {
                continue;
            };
            if !thing.has_flag(MapObjFlag::Shootable) {
                continue;
            }
            let d = (thing.xy - centre).abs();
            let dist = (d.x.max(d.y) - thing.radius).max(0.0) as i32;
            if dist >= damage {
                // out of range of blowy
                continue;
            }
            if self.has_line_of_sight(spot, other) {
                // must be in direct path
                self.damage(other, Some(spot), source, damage - dist);
            }
        }
    }
}
