use glam::{Vec2, Vec3};
use log::{debug, trace, warn};
use math::{Angle, point_to_angle_2};
use wad::WadThing;

use super::{MapObjFlag, MapObject, Role, ThingId};
use crate::doom_def::{MTF_AMBUSH, MTF_NOT_SINGLE, ONCEILINGZ, ONFLOORZ};
use crate::events::{LevelEvent, SoundOrigin};
use crate::info::{MapObjKind, StateNum};
use crate::level::Level;
use crate::options::Skill;

/// Reaction time given to every spawned thing outside nightmare
const DEFAULT_REACTIONTIME: i32 = 8;

impl Level {
    /// P_SpawnMobj
    ///
    /// The Z position is used to determine if the object should spawn on the
    /// floor or ceiling: pass `ONFLOORZ` or `ONCEILINGZ` for those.
    pub fn spawn_thing(&mut self, xy: Vec2, z: f32, kind: MapObjKind) -> ThingId {
        let info = kind.info();
        // do not set the state with set_state, because action routines can
        // not be called yet
        let state = info.spawnstate.state();
        let reactiontime = if self.options.skill != Skill::Nightmare {
            DEFAULT_REACTIONTIME
        } else {
            0
        };

        let id = self.things.insert(MapObject {
            id: ThingId::new(0, 0),
            kind,
            role: Role::for_kind(kind, info.flags),
            xy,
            z: 0.0,
            momxy: Vec2::ZERO,
            momz: 0.0,
            angle: Angle::default(),
            radius: info.radius,
            height: info.height,
            flags: info.flags,
            health: info.spawnhealth,
            subsector: 0,
            floorz: 0.0,
            ceilingz: 0.0,
            dropoffz: 0.0,
            state: info.spawnstate,
            tics: state.tics,
            target: None,
            tracer: None,
            movedir: 8,
            movecount: 0,
            reactiontime,
            threshold: 0,
            spawn_point: None,
        });

        // Sets the subsector link and links in sector
        self.link_thing(id);
        let check = self.check_position(id, xy);
        if let Some(thing) = self.things.get_mut(id) {
            thing.floorz = check.floorz;
            thing.ceilingz = check.ceilingz;
            thing.dropoffz = check.dropoffz;
            thing.z = if z == ONFLOORZ {
                check.floorz
            } else if z == ONCEILINGZ {
                check.ceilingz - info.height
            } else {
                z
            };
        }
        self.events.emit(LevelEvent::ThingAdded { thing: id, kind });
        id
    }

    /// P_SpawnMapThing
    pub fn spawn_map_thing(&mut self, mthing: &WadThing) {
        // deathmatch starts are not used by the simulation
        if mthing.kind == 11 {
            return;
        }

        // check for players specially
        if (1..=4).contains(&mthing.kind) {
            let num = (mthing.kind - 1) as usize;
            self.player_starts[num] = Some(*mthing);
            if self.options.deathmatch == 0 && (num == 0 || self.options.netgame) {
                self.spawn_player(mthing);
            }
            return;
        }

        // check for appropriate skill level
        if !self.options.netgame && mthing.flags & MTF_NOT_SINGLE != 0 {
            return;
        }
        let bit: i16 = match self.options.skill {
            Skill::Baby => 1,
            Skill::Nightmare => 4,
            s => 1 << (s as i16 - 1),
        };
        if mthing.flags & bit == 0 {
            return;
        }

        // find which type to spawn
        let Some(kind) = MapObjKind::from_doomednum(mthing.kind) else {
            debug!(
                "P_SpawnMapThing: Unknown type {} at ({}, {})",
                mthing.kind, mthing.x, mthing.y
            );
            return;
        };
        let info = kind.info();

        // don't spawn keycards and players in deathmatch
        if self.options.deathmatch != 0 && MapObjFlag::NotDeathmatch.is_set(info.flags) {
            return;
        }
        if self.options.no_monsters && MapObjFlag::CountKill.is_set(info.flags) {
            return;
        }

        let z = if MapObjFlag::SpawnCeiling.is_set(info.flags) {
            ONCEILINGZ
        } else {
            ONFLOORZ
        };
        let id = self.spawn_thing(Vec2::new(mthing.x as f32, mthing.y as f32), z, kind);
        let random = self.rng.p_random();
        if let Some(thing) = self.things.get_mut(id) {
            if thing.tics > 0 {
                thing.tics = 1 + (random % thing.tics);
            }
            if thing.has_flag(MapObjFlag::CountKill) {
                self.totals.kills += 1;
            }
            if thing.has_flag(MapObjFlag::CountItem) {
                self.totals.items += 1;
            }
            thing.angle = Angle::from_degrees(mthing.angle as f32);
            if mthing.flags & MTF_AMBUSH != 0 {
                thing.flags |= MapObjFlag::Ambush as u32;
            }
            thing.spawn_point = Some(*mthing);
        }
    }

    /// P_SpawnPlayer
    fn spawn_player(&mut self, mthing: &WadThing) {
        let num = (mthing.kind - 1) as usize;
        trace!("Spawning player {}", num + 1);
        if let Some(old) = self.players[num] {
            self.remove_thing(old);
        }
        let id = self.spawn_thing(
            Vec2::new(mthing.x as f32, mthing.y as f32),
            ONFLOORZ,
            MapObjKind::MT_PLAYER,
        );
        if let Some(thing) = self.things.get_mut(id) {
            thing.angle = Angle::from_degrees(mthing.angle as f32);
            thing.spawn_point = Some(*mthing);
            if let Some(player) = thing.player_mut() {
                player.num = num;
            }
        }
        self.players[num] = Some(id);
    }

    /// P_RemoveMobj
    ///
    /// Unlinks from every membership list before dropping the thing.
    pub fn remove_thing(&mut self, id: ThingId) {
        if !self.things.contains(id) {
            return;
        }
        self.unlink_thing(id);
        self.things.remove(id);
        for p in self.players.iter_mut() {
            if *p == Some(id) {
                *p = None;
            }
        }
        for sector in self.map_data.sectors.iter_mut() {
            if sector.sound_target == Some(id) {
                sector.sound_target = None;
            }
        }
        self.events.emit(LevelEvent::ThingRemoved { thing: id });
    }

    /// A metal spark/puff, used for gun-strikes against walls or non-fleshy
    /// things.
    ///
    /// Doom function name `P_SpawnPuff`
    pub fn spawn_puff(&mut self, xyz: Vec3) -> ThingId {
        let z = xyz.z + (self.rng.p_subrandom() as f32 / 64.0);
        let id = self.spawn_thing(xyz.truncate(), z, MapObjKind::MT_PUFF);
        let random = self.rng.p_random();
        if let Some(thing) = self.things.get_mut(id) {
            thing.momz = 1.0;
            thing.tics = (thing.tics - (random & 3)).max(1);
        }
        id
    }

    /// Doom function name `P_SpawnBlood`
    pub fn spawn_blood(&mut self, xyz: Vec3, damage: i32) -> ThingId {
        let z = xyz.z + (self.rng.p_subrandom() as f32 / 64.0);
        let id = self.spawn_thing(xyz.truncate(), z, MapObjKind::MT_BLOOD);
        let random = self.rng.p_random();
        if let Some(thing) = self.things.get_mut(id) {
            thing.momz = 2.0;
            thing.tics = (thing.tics - (random & 3)).max(1);
        }
        if damage <= 12 {
            self.set_state(id, StateNum::S_BLOOD2);
        }
        id
    }

    /// Launch `kind` from `source` toward `dest`.
    ///
    /// Doom function name is `P_SpawnMissile`
    pub fn spawn_missile(
        &mut self,
        source: ThingId,
        dest: ThingId,
        kind: MapObjKind,
    ) -> Option<ThingId> {
        let (src_xy, src_z) = self.things.get(source).map(|t| (t.xy, t.z))?;
        let (dst_xy, dst_z, shadow) = self
            .things
            .get(dest)
            .map(|t| (t.xy, t.z, t.has_flag(MapObjFlag::Shadow)))?;

        let mut angle = point_to_angle_2(dst_xy, src_xy);
        // fuzzy player
        if shadow {
            angle += self.rng.p_subrandom() as f32 * (std::f32::consts::PI / 2048.0);
        }
        let speed = kind.info().speed;
        let mut dist = src_xy.distance(dst_xy) / speed;
        if dist < 1.0 {
            dist = 1.0;
        }
        let momz = (dst_z - src_z) / dist;
        self.launch_missile(source, kind, angle, momz)
    }

    /// Fire `kind` straight ahead along the shooter's angle.
    ///
    /// Doom function name is `P_SpawnPlayerMissile`, without the aim assist
    pub fn spawn_player_missile(&mut self, source: ThingId, kind: MapObjKind) -> Option<ThingId> {
        let angle = self.things.get(source)?.angle;
        self.launch_missile(source, kind, angle, 0.0)
    }

    fn launch_missile(
        &mut self,
        source: ThingId,
        kind: MapObjKind,
        angle: Angle,
        momz: f32,
    ) -> Option<ThingId> {
        let (xy, z) = self.things.get(source).map(|t| (t.xy, t.z + 32.0))?;
        let id = self.spawn_thing(xy, z, kind);
        let info = kind.info();
        self.events.sound(info.seesound, SoundOrigin::Thing(id));
        let random = self.rng.p_random();
        let thing = self.things.get_mut(id)?;
        thing.target = Some(source);
        thing.angle = angle;
        thing.momxy = angle.unit() * info.speed;
        thing.momz = momz;
        thing.tics = (thing.tics - (random & 3)).max(1);
        self.check_missile_spawn(id);
        if self.things.contains(id) {
            Some(id)
        } else {
            warn!("Missile {:?} did not survive spawning", kind);
            None
        }
    }

    /// Move a new missile a little forward so an explosion happens from the
    /// right spot if it spawned inside a wall.
    ///
    /// Doom function name `P_CheckMissileSpawn`
    fn check_missile_spawn(&mut self, id: ThingId) {
        let Some(thing) = self.things.get(id) else {
            return;
        };
        let half = thing.momxy / 2.0;
        let dz = thing.momz / 2.0;
        let xy = thing.xy;
        if let Some(thing) = self.things.get_mut(id) {
            thing.z += dz;
        }
        let check = self.check_position(id, xy + half);
        if check.blockline.is_some() || check.blockthing.is_some() {
            self.explode_missile(id);
        } else {
            self.set_position(id, xy + half);
        }
    }
}
