//! Movement, collision handling.
//!
//! Things are moved by sweeping their box along the momentum with the trace
//! engine. Walls and solid things that stop a body make it slide along them,
//! anything stopping a missile blows it up.

use glam::Vec2;
use log::{debug, trace};
use math::slide_along;

use super::{MapObjFlag, ThingId};
use crate::doom_def::{FLOATSPEED, FRICTION, GRAVITY, MAXMOVE, MAXSTEP, STOPSPEED, TELEFRAG_DAMAGE};
use crate::env::TriggerKind;
use crate::events::LevelEvent;
use crate::info::MapObjKind;
use crate::level::Level;
use crate::level::flags::LineDefFlags;
use crate::level::map_data::MapData;
use crate::trace::{self, LineHit, ThingHit, TraceHooks, TraceRequest};

#[cfg(feature = "hprof")]
use coarse_prof::profile;

/// How many times a body may slide off something in one tick before it gives
/// up and stops
pub const MAX_SLIDE_MOVES: usize = 4;
/// Distance kept from whatever stopped a move
const CONTACT_BACKOFF: f32 = 0.01;

/// What a thing would stand in if it were at a position.
///
/// The closest interval over all contacted sectors, plus the first thing
/// stopping it being there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionCheck {
    pub floorz: f32,
    pub ceilingz: f32,
    pub dropoffz: f32,
    pub blockline: Option<usize>,
    pub blockthing: Option<ThingId>,
}

impl PositionCheck {
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.blockline.is_none() && self.blockthing.is_none()
    }
}

/// True if a body of `height` standing at `z` may pass through the line.
pub(crate) fn body_can_pass(map: &MapData, line_num: usize, z: f32, height: f32, flags: u32, monster: bool) -> bool {
    let line = &map.linedefs[line_num];
    if LineDefFlags::Blocking.is_set(line.flags) {
        return false;
    }
    if monster && LineDefFlags::BlockMonsters.is_set(line.flags) {
        return false;
    }
    let Some(opening) = map.line_opening(line_num) else {
        return false;
    };
    if opening.range < height {
        // doesn't fit
        return false;
    }
    if opening.top - z < height {
        // mobj must lower itself to fit
        return false;
    }
    if opening.bottom - z > MAXSTEP {
        // too big a step up
        return false;
    }
    if monster
        && !MapObjFlag::DropOff.is_set(flags)
        && !MapObjFlag::Float.is_set(flags)
        && opening.bottom - opening.lowfloor > MAXSTEP
    {
        // don't stand over a dropoff
        return false;
    }
    true
}

/// Hell knights and barons count as one species
fn same_species(a: MapObjKind, b: MapObjKind) -> bool {
    use MapObjKind::{MT_BRUISER, MT_KNIGHT};
    a == b || matches!((a, b), (MT_KNIGHT, MT_BRUISER) | (MT_BRUISER, MT_KNIGHT))
}

impl Level {
    /// Remove the thing from its subsector and sector lists
    pub(crate) fn unlink_thing(&mut self, id: ThingId) {
        let Some(thing) = self.things.get(id) else {
            return;
        };
        let ss = thing.subsector;
        if let Some(leaf) = self.map_data.subsectors.get_mut(ss) {
            leaf.things.retain(|t| *t != id);
            let sector = leaf.sector;
            self.map_data.sectors[sector].things.retain(|t| *t != id);
        }
    }

    /// Add the thing to the subsector and sector lists for its position
    pub(crate) fn link_thing(&mut self, id: ThingId) {
        let Some(thing) = self.things.get(id) else {
            return;
        };
        let ss = self.map_data.point_in_subsector(thing.xy);
        let sector = self.map_data.subsectors[ss].sector;
        self.map_data.subsectors[ss].things.push(id);
        self.map_data.sectors[sector].things.push(id);
        if let Some(thing) = self.things.get_mut(id) {
            thing.subsector = ss;
        }
    }

    /// The sector the thing's centre is in
    pub fn thing_sector(&self, id: ThingId) -> Option<usize> {
        let thing = self.things.get(id)?;
        Some(self.map_data.subsectors[thing.subsector].sector)
    }

    /// P_SetThingPosition
    ///
    /// Put the thing at `xy`, relink it, and refresh the floor and ceiling it
    /// stands between. No collision checks.
    pub fn set_position(&mut self, id: ThingId, xy: Vec2) {
        if !self.things.contains(id) {
            return;
        }
        self.unlink_thing(id);
        if let Some(thing) = self.things.get_mut(id) {
            thing.xy = xy;
        }
        self.link_thing(id);
        let check = self.check_position(id, xy);
        if let Some(thing) = self.things.get_mut(id) {
            thing.floorz = check.floorz;
            thing.ceilingz = check.ceilingz;
            thing.dropoffz = check.dropoffz;
            let xyz = thing.xyz();
            self.events.emit(LevelEvent::ThingMoved { thing: id, xyz });
        }
    }

    /// P_CheckPosition
    ///
    /// Work out the floor and ceiling the thing would have at `xy` and the
    /// first line or thing in the way. Does not move it.
    pub fn check_position(&mut self, id: ThingId, xy: Vec2) -> PositionCheck {
        let sector = &self.map_data.sectors[self.map_data.find_sector(xy)];
        let mut check = PositionCheck {
            floorz: sector.floorheight,
            ceilingz: sector.ceilingheight,
            dropoffz: sector.floorheight,
            blockline: None,
            blockthing: None,
        };
        let Some(thing) = self.things.get(id) else {
            return check;
        };
        let radius = thing.radius;
        let flags = thing.flags;
        let missile = thing.has_flag(MapObjFlag::Missile);
        let monster = thing.is_monster();
        let shooter = thing.target;

        let (lines, others) = trace::touching(
            &self.map_data,
            &self.things,
            &mut self.trace_ctx,
            xy,
            radius,
            Some(id),
        );

        for line_num in lines {
            let line = &self.map_data.linedefs[line_num];
            let Some(opening) = self.map_data.line_opening(line_num) else {
                // one sided line
                check.blockline.get_or_insert(line_num);
                continue;
            };
            if !missile {
                if LineDefFlags::Blocking.is_set(line.flags)
                    || (monster && LineDefFlags::BlockMonsters.is_set(line.flags))
                {
                    check.blockline.get_or_insert(line_num);
                    continue;
                }
            }
            // adjust floor / ceiling heights
            if opening.top < check.ceilingz {
                check.ceilingz = opening.top;
            }
            if opening.bottom > check.floorz {
                check.floorz = opening.bottom;
            }
            if opening.lowfloor < check.dropoffz {
                check.dropoffz = opening.lowfloor;
            }
        }

        if MapObjFlag::NoClip.is_set(flags) {
            check.blockline = None;
            return check;
        }

        for other_id in others {
            let Some(other) = self.things.get(other_id) else {
                continue;
            };
            if missile && shooter == Some(other_id) {
                // don't hit originator
                continue;
            }
            if other.has_flag(MapObjFlag::Solid) {
                check.blockthing.get_or_insert(other_id);
            }
        }
        check
    }

    /// P_XYMovement
    pub fn xy_movement(&mut self, id: ThingId) {
        #[cfg(feature = "hprof")]
        profile!("xy_movement");
        let Some(thing) = self.things.get_mut(id) else {
            return;
        };
        if thing.momxy == Vec2::ZERO {
            return;
        }
        thing.momxy = thing.momxy.clamp(Vec2::splat(-MAXMOVE), Vec2::splat(MAXMOVE));

        if thing.has_flag(MapObjFlag::NoClip) {
            let xy = thing.xy + thing.momxy;
            self.set_position(id, xy);
        } else if thing.has_flag(MapObjFlag::Missile) {
            self.missile_move(id);
        } else {
            self.body_move(id);
        }
        self.apply_friction(id);
    }

    /// Slow things on the ground down, stopping them once slow enough
    fn apply_friction(&mut self, id: ThingId) {
        let Some(thing) = self.things.get(id) else {
            return;
        };
        if thing.has_flag(MapObjFlag::Missile) || thing.has_flag(MapObjFlag::SkullFly) {
            // no friction for missiles ever
            return;
        }
        if thing.z > thing.floorz {
            // no friction when airborne
            return;
        }
        if thing.has_flag(MapObjFlag::Corpse) {
            // do not stop sliding if halfway off a step with some momentum
            let sector_floor =
                self.map_data.sectors[self.map_data.subsectors[thing.subsector].sector].floorheight;
            if (thing.momxy.x.abs() > 0.25 || thing.momxy.y.abs() > 0.25)
                && thing.floorz != sector_floor
            {
                return;
            }
        }
        let Some(thing) = self.things.get_mut(id) else {
            return;
        };
        if thing.momxy.x.abs() < STOPSPEED && thing.momxy.y.abs() < STOPSPEED {
            thing.momxy = Vec2::ZERO;
        } else {
            thing.momxy *= FRICTION;
        }
    }

    /// Players, monsters and anything else that slides when it hits something
    fn body_move(&mut self, id: ThingId) {
        let Some(thing) = self.things.get(id) else {
            return;
        };
        let start = thing.xy;
        let mut remaining = thing.momxy;
        let can_pickup = thing.has_flag(MapObjFlag::Pickup);
        let fires_specials = !thing.has_flag(MapObjFlag::Teleport);
        let mut crossed: Vec<(usize, usize)> = Vec::new();
        let mut pickups = Vec::new();

        for attempt in 0..=MAX_SLIDE_MOVES {
            if remaining.length_squared() <= f32::EPSILON {
                break;
            }
            if attempt == MAX_SLIDE_MOVES {
                trace!("{:?} ran out of slide moves", id);
                if let Some(thing) = self.things.get_mut(id) {
                    thing.momxy = Vec2::ZERO;
                }
                break;
            }
            let Some(thing) = self.things.get(id) else {
                return;
            };
            let xy = thing.xy;
            let (z, height, flags) = (thing.z, thing.height, thing.flags);
            let monster = thing.is_monster();
            let req = TraceRequest::mover(xy, remaining, thing.radius, z, height).ignoring(id);

            let mut line_block: Option<LineHit> = None;
            let mut thing_block: Option<ThingHit> = None;
            let mut touched = Vec::new();
            {
                let map = &self.map_data;
                let things = &self.things;
                let mut on_line = |hit: &LineHit| {
                    if body_can_pass(map, hit.line, z, height, flags, monster) {
                        touched.push(hit.line);
                        return true;
                    }
                    line_block = Some(*hit);
                    false
                };
                let mut on_thing = |hit: &ThingHit| {
                    let Some(other) = things.get(hit.thing) else {
                        return true;
                    };
                    if other.has_flag(MapObjFlag::Special) && can_pickup {
                        pickups.push(hit.thing);
                        return true;
                    }
                    if !other.has_flag(MapObjFlag::Solid) {
                        return true;
                    }
                    thing_block = Some(*hit);
                    false
                };
                trace::trace_move(
                    map,
                    things,
                    &mut self.trace_ctx,
                    &req,
                    TraceHooks::new()
                        .on_line(&mut on_line)
                        .on_thing(&mut on_thing),
                );
            }

            for line in touched {
                if !crossed.iter().any(|(l, _)| *l == line) {
                    crossed.push((line, self.map_data.linedefs[line].point_on_side(start)));
                }
            }

            let block = line_block
                .map(|h| (h.fraction, h.normal))
                .or(thing_block.map(|h| (h.fraction, h.normal)));
            let Some((fraction, normal)) = block else {
                self.set_position(id, xy + remaining);
                break;
            };

            let back = CONTACT_BACKOFF / remaining.length();
            let moved = (fraction - back).max(0.0);
            if moved > 0.0 {
                self.set_position(id, xy + remaining * moved);
            }
            remaining = slide_along(remaining * (1.0 - moved), normal);
            if let Some(thing) = self.things.get_mut(id) {
                thing.momxy = slide_along(thing.momxy, normal);
            }
        }

        // Walk over specials for every line the centre ended up across
        if fires_specials {
            for (line, side) in crossed {
                let Some(thing) = self.things.get(id) else {
                    break;
                };
                let now = self.map_data.linedefs[line].point_on_side(thing.xy);
                if now != side && self.map_data.linedefs[line].special != 0 {
                    self.trigger_special(line, id, TriggerKind::Walk, side);
                }
            }
        }
        for item in pickups {
            self.touch_special(item, id);
        }
    }

    /// Missiles stop at the first wall or shootable they meet and explode
    fn missile_move(&mut self, id: ThingId) {
        let Some(thing) = self.things.get(id) else {
            return;
        };
        let xy = thing.xy;
        let delta = thing.momxy;
        let (z, height) = (thing.z, thing.height);
        let shooter = thing.target;
        let req = TraceRequest::mover(xy, delta, thing.radius, z, height).ignoring(id);

        let mut line_block: Option<LineHit> = None;
        let mut thing_block: Option<ThingHit> = None;
        {
            let map = &self.map_data;
            let things = &self.things;
            let mut on_line = |hit: &LineHit| {
                if let Some(opening) = map.line_opening(hit.line) {
                    if z >= opening.bottom && z + height <= opening.top {
                        return true;
                    }
                }
                line_block = Some(*hit);
                false
            };
            let mut on_thing = |hit: &ThingHit| {
                if shooter == Some(hit.thing) {
                    // don't hit originator
                    return true;
                }
                let Some(other) = things.get(hit.thing) else {
                    return true;
                };
                if !other.has_flag(MapObjFlag::Shootable) {
                    // solid scenery stops missiles, anything else is passed through
                    if !other.has_flag(MapObjFlag::Solid) {
                        return true;
                    }
                }
                thing_block = Some(*hit);
                false
            };
            trace::trace_move(
                map,
                things,
                &mut self.trace_ctx,
                &req,
                TraceHooks::new()
                    .on_line(&mut on_line)
                    .on_thing(&mut on_thing),
            );
        }

        if let Some(hit) = line_block {
            let back = CONTACT_BACKOFF / delta.length();
            self.set_position(id, xy + delta * (hit.fraction - back).max(0.0));
            // explode a missile, unless it hit the sky
            let line = &self.map_data.linedefs[hit.line];
            if let Some(far) = line.sector(hit.side ^ 1) {
                let far = &self.map_data.sectors[far];
                if line.is_two_sided()
                    && far.ceilingpic == self.pic_data.sky_num()
                    && z + height > far.ceilingheight
                {
                    self.remove_thing(id);
                    return;
                }
            }
            self.explode_missile(id);
            return;
        }

        if let Some(hit) = thing_block {
            let back = CONTACT_BACKOFF / delta.length();
            self.set_position(id, xy + delta * (hit.fraction - back).max(0.0));
            let (kind, damage) = match self.things.get(id) {
                Some(m) => (m.kind, m.info().damage),
                None => return,
            };
            let shooter_kind = shooter.and_then(|s| self.things.get(s)).map(|s| s.kind);
            if let Some(other) = self.things.get(hit.thing) {
                // don't damage the same species as the shooter
                let same = shooter_kind.is_some_and(|k| same_species(k, other.kind)) && !other.is_player();
                if other.has_flag(MapObjFlag::Shootable) && !same {
                    let amount = ((self.rng.p_random() % 8) + 1) * damage;
                    self.damage(hit.thing, Some(id), shooter, amount);
                }
            }
            debug!("{:?} struck {:?}", kind, hit.thing);
            self.explode_missile(id);
            return;
        }

        self.set_position(id, xy + delta);
    }

    /// P_ExplodeMissile
    pub fn explode_missile(&mut self, id: ThingId) {
        let Some(thing) = self.things.get_mut(id) else {
            return;
        };
        thing.momxy = Vec2::ZERO;
        thing.momz = 0.0;
        let info = thing.info();
        if !self.set_state(id, info.deathstate) {
            return;
        }
        let random = self.rng.p_random();
        if let Some(thing) = self.things.get_mut(id) {
            thing.tics = (thing.tics - (random & 3)).max(1);
            thing.flags &= !(MapObjFlag::Missile as u32);
        }
        self.events
            .sound(info.deathsound, crate::events::SoundOrigin::Thing(id));
    }

    /// P_ZMovement
    pub fn z_movement(&mut self, id: ThingId) {
        let target_z = self
            .things
            .get(id)
            .and_then(|t| t.target)
            .and_then(|t| self.things.get(t))
            .map(|t| (t.xy, t.z));
        let Some(thing) = self.things.get_mut(id) else {
            return;
        };

        // adjust height
        thing.z += thing.momz;

        if thing.has_flag(MapObjFlag::Float) && !thing.has_flag(MapObjFlag::SkullFly) {
            // float down towards target if too close
            if let Some((txy, tz)) = target_z {
                if !thing.has_flag(MapObjFlag::InFloat) {
                    let dist = thing.xy.distance(txy);
                    let delta = (tz + thing.height / 2.0) - thing.z;
                    if delta < 0.0 && dist < -(delta * 3.0) {
                        thing.z -= FLOATSPEED;
                    } else if delta > 0.0 && dist < (delta * 3.0) {
                        thing.z += FLOATSPEED;
                    }
                }
            }
        }

        let missile = thing.has_flag(MapObjFlag::Missile) && !thing.has_flag(MapObjFlag::NoClip);
        let mut explode = false;

        // clip movement
        if thing.z <= thing.floorz {
            // hit the floor
            if thing.momz < 0.0 {
                thing.momz = 0.0;
            }
            thing.z = thing.floorz;
            if missile {
                explode = true;
            }
        } else if !thing.has_flag(MapObjFlag::NoGravity) {
            if thing.momz == 0.0 {
                thing.momz = -GRAVITY * 2.0;
            } else {
                thing.momz -= GRAVITY;
            }
        }

        if thing.z + thing.height > thing.ceilingz {
            // hit the ceiling
            if thing.momz > 0.0 {
                thing.momz = 0.0;
            }
            thing.z = thing.ceilingz - thing.height;
            if missile {
                explode = true;
            }
        }

        let xyz = thing.xyz();
        if explode {
            self.explode_missile(id);
        } else {
            self.events.emit(LevelEvent::ThingMoved { thing: id, xyz });
        }
    }

    /// P_TeleportMove
    ///
    /// Kill anything shootable at the destination, then put the thing there.
    /// Monsters only telefrag on map 30.
    pub fn teleport_move(&mut self, id: ThingId, xy: Vec2) -> bool {
        let Some(thing) = self.things.get(id) else {
            return false;
        };
        let is_player = thing.is_player();
        let radius = thing.radius;
        let (_, others) = trace::touching(
            &self.map_data,
            &self.things,
            &mut self.trace_ctx,
            xy,
            radius,
            Some(id),
        );
        let victims: Vec<ThingId> = others
            .into_iter()
            .filter(|o| {
                self.things
                    .get(*o)
                    .is_some_and(|t| t.has_flag(MapObjFlag::Shootable))
            })
            .collect();
        if !victims.is_empty() && !is_player && self.options.map != 30 {
            // monsters don't stomp things except on boss level
            return false;
        }
        for victim in victims {
            self.damage(victim, Some(id), Some(id), TELEFRAG_DAMAGE);
        }
        self.set_position(id, xy);
        true
    }

    /// P_MobjThinker
    ///
    /// Momentum movement, then the state tic countdown.
    pub fn tick_thing(&mut self, id: ThingId) {
        let Some(thing) = self.things.get(id) else {
            return;
        };
        if thing.momxy != Vec2::ZERO || thing.has_flag(MapObjFlag::SkullFly) {
            self.xy_movement(id);
        }

        let Some(thing) = self.things.get(id) else {
            // thing was removed
            return;
        };
        if thing.z != thing.floorz || thing.momz != 0.0 {
            self.z_movement(id);
        }

        let Some(thing) = self.things.get_mut(id) else {
            return;
        };
        // cycle through states, calling action functions at transitions
        if thing.tics != -1 {
            thing.tics -= 1;
            if thing.tics == 0 {
                let next = thing.state.state().next_state;
                self.set_state(id, next);
            }
        }
    }
}
