//! Teleport lines. Classic teleports move a thing to the `MT_TELEPORTMAN` in a
//! tagged sector, the silent and line-to-line kinds keep the thing's speed and
//! height above the floor.
//!
//! Doom source name `p_telept`

use glam::Vec2;
use log::{debug, trace};
use math::Angle;

use crate::events::{LevelEvent, SoundOrigin};
use crate::info::{MapObjKind, SfxName};
use crate::level::Level;
use crate::thing::{MapObjFlag, ThingId};

/// Steps allowed when nudging a line-teleported thing to the correct side
const FUDGEFACTOR: i32 = 10;

/// Rotate a vector by `angle` radians
fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.y * c + v.x * s)
}

impl Level {
    /// The first teleport destination found in the sectors tagged by `line`
    fn find_teleport_dest(&self, line: usize) -> Option<(Vec2, Angle)> {
        let tag = self.map_data.linedefs[line].tag;
        let tagged = self.map_data.sectors_by_tag(tag);
        self.things
            .iter()
            .filter(|t| t.kind == MapObjKind::MT_TELEPORTMAN)
            .find(|t| tagged.contains(&self.map_data.subsectors[t.subsector].sector))
            .map(|t| (t.xy, t.angle))
    }

    /// EV_Teleport and EV_SilentTeleport
    ///
    /// Only from the front side, and never for missiles.
    pub fn ev_teleport(&mut self, line: usize, side: usize, thing: ThingId, silent: bool) -> bool {
        let Some(mobj) = self.things.get(thing) else {
            return false;
        };
        if mobj.has_flag(MapObjFlag::Missile) || side == 1 {
            return false;
        }
        let (old_xy, old_z, old_floorz, old_angle, is_player) =
            (mobj.xy, mobj.z, mobj.floorz, mobj.angle, mobj.is_player());

        let Some((dest, dest_angle)) = self.find_teleport_dest(line) else {
            debug!("Teleport line {line} has no destination");
            return false;
        };

        if !self.teleport_move(thing, dest) {
            return false;
        }
        trace!("Teleported {thing:?} from {old_xy} to {dest}");

        if silent {
            let turn = dest_angle.rad() - old_angle.rad();
            if let Some(mobj) = self.things.get_mut(thing) {
                mobj.z = old_z - old_floorz + mobj.floorz;
                mobj.angle += turn;
                mobj.momxy = rotate(mobj.momxy, turn);
                let xyz = mobj.xyz();
                self.events.emit(LevelEvent::ThingMoved { thing, xyz });
            }
            return true;
        }

        let Some(mobj) = self.things.get_mut(thing) else {
            return false;
        };
        mobj.z = mobj.floorz;
        mobj.angle = dest_angle;
        mobj.momxy = Vec2::ZERO;
        mobj.momz = 0.0;
        if is_player {
            // don't move for a bit
            mobj.reactiontime = 18;
        }
        let z = mobj.z;
        let xyz = mobj.xyz();
        self.events.emit(LevelEvent::ThingMoved { thing, xyz });

        // spawn teleport fog at source and destination
        let fog = self.spawn_thing(old_xy, old_z, MapObjKind::MT_TFOG);
        self.events.sound(SfxName::telept, SoundOrigin::Thing(fog));
        let fog = self.spawn_thing(dest + dest_angle.unit() * 20.0, z, MapObjKind::MT_TFOG);
        self.events.sound(SfxName::telept, SoundOrigin::Thing(fog));
        true
    }

    /// EV_SilentLineTeleport
    ///
    /// Move the thing to the same spot along another line with the same tag,
    /// keeping its height above the floor, speed and facing relative to the
    /// line. `reverse` flips it to come out of the other side.
    pub fn ev_line_teleport(&mut self, line: usize, side: usize, thing: ThingId, reverse: bool) -> bool {
        let Some(mobj) = self.things.get(thing) else {
            return false;
        };
        if mobj.has_flag(MapObjFlag::Missile) || side == 1 {
            return false;
        }
        let (xy, height_above, is_player) = (mobj.xy, mobj.z - mobj.floorz, mobj.is_player());

        let src = &self.map_data.linedefs[line];
        let (src_v1, src_delta, tag) = (src.v1, src.delta, src.tag);
        let exit = self.map_data.lines_by_tag(tag).iter().copied().find(|&l| {
            l != line && self.map_data.linedefs[l].backsector.is_some()
        });
        let Some(exit) = exit else {
            debug!("Line teleport {line} has no exit line");
            return false;
        };
        let ld = &self.map_data.linedefs[exit];
        let Some(back) = ld.backsector else {
            return false;
        };

        // fraction of the way along the source line
        let mut pos = if src_delta.x.abs() > src_delta.y.abs() {
            (xy.x - src_v1.x) / src_delta.x
        } else {
            (xy.y - src_v1.y) / src_delta.y
        };
        let mut turn = Angle::from_vector(ld.delta).rad() - Angle::from_vector(src_delta).rad();
        if reverse {
            pos = 1.0 - pos;
        } else {
            turn += std::f32::consts::PI;
        }
        let mut dest = ld.v2 - ld.delta * pos;

        let front_floor = self.map_data.sectors[ld.frontsector].floorheight;
        let back_floor = self.map_data.sectors[back].floorheight;
        let stepdown = front_floor < back_floor;
        let want_side = usize::from(reverse || (is_player && stepdown));

        // make sure we are on the correct side of the exit line
        let mut fudge = FUDGEFACTOR;
        while ld.point_on_side(dest) != want_side && fudge > 0 {
            fudge -= 1;
            let flip = want_side == 1;
            if ld.delta.x.abs() > ld.delta.y.abs() {
                dest.y -= if (ld.delta.x < 0.0) != flip { -1.0 } else { 1.0 };
            } else {
                dest.x += if (ld.delta.y < 0.0) != flip { -1.0 } else { 1.0 };
            }
        }
        let floor = front_floor.max(back_floor);

        if !self.teleport_move(thing, dest) {
            return false;
        }
        trace!("Line teleported {thing:?} from line {line} to line {exit}");
        if let Some(mobj) = self.things.get_mut(thing) {
            mobj.z = floor + height_above;
            mobj.angle += turn;
            mobj.momxy = rotate(mobj.momxy, turn);
            let xyz = mobj.xyz();
            self.events.emit(LevelEvent::ThingMoved { thing, xyz });
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rotate_quarter_turn() {
        let v = rotate(Vec2::new(2.0, 0.0), FRAC_PI_2);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 2.0).abs() < 1e-5);
    }
}
