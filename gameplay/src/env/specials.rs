//! Shared plumbing for the sector movers, the neighbour searches used to pick
//! their targets, and the entry point from a line activation to the effect it
//! starts.
//!
//! Doom source name `p_spec`

use glam::{Vec2, Vec3};
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use super::TriggerKind;
use super::generalized::Generalized;
use super::lights::{FASTDARK, SLOWDARK};
use super::line_specials::{self, LineAction, Who};
use super::scroll::Scroll;
use crate::events::LevelEvent;
use crate::info::{MapObjKind, StateNum};
use crate::lang::english::SECRETFOUND;
use crate::level::Level;
use crate::level::flags::LineDefFlags;
use crate::level::map_data::MapData;
use crate::pic::{DEFAULT_TEXTURE_HEIGHT, PicData};
use crate::thing::{MapObjFlag, ThingId};
use crate::thinker::{Thinker, ThinkerId};

/// Damage dealt to anything caught by a crushing plane
const CRUSH_DAMAGE: i32 = 10;

/// Which boundary of a sector a mover drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plane {
    Floor,
    Ceiling,
}

/// The result of moving a plane one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneResult {
    Ok,
    /// Something shootable is in the way. With crushing on the plane kept
    /// moving, otherwise the step was undone.
    Crushed,
    /// Something solid that can't be hurt is in the way, step undone
    Blocked,
    /// Reached the destination
    PastDest,
}

/// How the things in a sector took a height change
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SectorFit {
    Fits,
    Crushed,
    Blocked,
}

/// Flat (and optionally special) a mover gives its sector when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneChange {
    pub pic: usize,
    pub special: Option<i16>,
}

/// P_FindLowestFloorSurrounding
pub fn find_lowest_floor_surrounding(map: &MapData, sector: usize) -> f32 {
    let mut floor = map.sectors[sector].floorheight;
    for other in map.neighbours(sector) {
        floor = floor.min(map.sectors[other].floorheight);
    }
    floor
}

/// P_FindHighestFloorSurrounding
pub fn find_highest_floor_surrounding(map: &MapData, sector: usize) -> f32 {
    let mut floor = -500.0f32;
    for other in map.neighbours(sector) {
        floor = floor.max(map.sectors[other].floorheight);
    }
    floor
}

/// P_FindNextHighestFloor
///
/// The lowest neighbouring floor above `current`, or `current` if there is
/// none.
pub fn find_next_highest_floor(map: &MapData, sector: usize, current: f32) -> f32 {
    map.neighbours(sector)
        .map(|s| map.sectors[s].floorheight)
        .filter(|h| *h > current)
        .fold(None, |acc: Option<f32>, h| Some(acc.map_or(h, |a| a.min(h))))
        .unwrap_or(current)
}

/// P_FindNextLowestFloor
pub fn find_next_lowest_floor(map: &MapData, sector: usize, current: f32) -> f32 {
    map.neighbours(sector)
        .map(|s| map.sectors[s].floorheight)
        .filter(|h| *h < current)
        .fold(None, |acc: Option<f32>, h| Some(acc.map_or(h, |a| a.max(h))))
        .unwrap_or(current)
}

/// P_FindLowestCeilingSurrounding
pub fn find_lowest_ceiling_surrounding(map: &MapData, sector: usize) -> f32 {
    let mut height = f32::MAX;
    for other in map.neighbours(sector) {
        height = height.min(map.sectors[other].ceilingheight);
    }
    height
}

/// P_FindHighestCeilingSurrounding
pub fn find_highest_ceiling_surrounding(map: &MapData, sector: usize) -> f32 {
    let mut height = -32000.0f32;
    for other in map.neighbours(sector) {
        height = height.max(map.sectors[other].ceilingheight);
    }
    height
}

/// P_FindNextHighestCeiling
pub fn find_next_highest_ceiling(map: &MapData, sector: usize, current: f32) -> f32 {
    map.neighbours(sector)
        .map(|s| map.sectors[s].ceilingheight)
        .filter(|h| *h > current)
        .fold(None, |acc: Option<f32>, h| Some(acc.map_or(h, |a| a.min(h))))
        .unwrap_or(current)
}

/// P_FindNextLowestCeiling
pub fn find_next_lowest_ceiling(map: &MapData, sector: usize, current: f32) -> f32 {
    map.neighbours(sector)
        .map(|s| map.sectors[s].ceilingheight)
        .filter(|h| *h < current)
        .fold(None, |acc: Option<f32>, h| Some(acc.map_or(h, |a| a.max(h))))
        .unwrap_or(current)
}

/// Shortest texture on the chosen part of any sidedef of the sector's two
/// sided lines. Lines without a texture there don't count, and if nothing
/// counts the default texture height is used.
fn find_shortest_texture_around(
    map: &MapData,
    pics: &PicData,
    sector: usize,
    part: impl Fn(&crate::level::map_defs::SideDef) -> Option<usize>,
) -> f32 {
    let mut shortest = i16::MAX as f32;
    for &l in map.sectors[sector].lines.iter() {
        let line = &map.linedefs[l];
        if !line.is_two_sided() {
            continue;
        }
        for side in [Some(line.front_sidedef), line.back_sidedef].into_iter().flatten() {
            if let Some(tex) = part(&map.sidedefs[side]) {
                shortest = shortest.min(pics.texture_height(tex));
            }
        }
    }
    if shortest == i16::MAX as f32 {
        DEFAULT_TEXTURE_HEIGHT
    } else {
        shortest
    }
}

/// P_FindShortestTextureAround
pub fn find_shortest_lower_around(map: &MapData, pics: &PicData, sector: usize) -> f32 {
    find_shortest_texture_around(map, pics, sector, |s| s.bottomtexture)
}

/// P_FindShortestUpperAround
pub fn find_shortest_upper_around(map: &MapData, pics: &PicData, sector: usize) -> f32 {
    find_shortest_texture_around(map, pics, sector, |s| s.toptexture)
}

/// P_FindMinSurroundingLight
pub fn find_min_light_surrounding(map: &MapData, sector: usize, max: i32) -> i32 {
    let mut min = max;
    for other in map.neighbours(sector) {
        min = min.min(map.sectors[other].lightlevel);
    }
    min
}

/// Brightest neighbour, or 0 if there are no neighbours
pub fn find_max_light_surrounding(map: &MapData, sector: usize) -> i32 {
    let mut max = 0;
    for other in map.neighbours(sector) {
        max = max.max(map.sectors[other].lightlevel);
    }
    max
}

/// P_FindModelFloorSector
///
/// A neighbour whose floor sits at `height`, used to copy its flat.
pub fn find_model_floor_sector(map: &MapData, sector: usize, height: f32) -> Option<usize> {
    map.neighbours(sector)
        .find(|&s| map.sectors[s].floorheight == height)
}

/// P_FindModelCeilingSector
pub fn find_model_ceiling_sector(map: &MapData, sector: usize, height: f32) -> Option<usize> {
    map.neighbours(sector)
        .find(|&s| map.sectors[s].ceilingheight == height)
}

impl Level {
    /// Sectors a line activation works on. Push specials act on the sector
    /// behind the line, everything else on the sectors sharing its tag.
    pub(crate) fn activation_sectors(&self, line: usize, manual: bool) -> Vec<usize> {
        let line = &self.map_data.linedefs[line];
        if manual {
            line.backsector.into_iter().collect()
        } else {
            self.map_data.sectors_by_tag(line.tag).to_vec()
        }
    }

    /// Register a mover and mark its sector busy
    pub(crate) fn add_mover(&mut self, sector: usize, thinker: Thinker) -> ThinkerId {
        let id = self.thinkers.push(thinker);
        self.map_data.sectors[sector].specialdata = Some(id);
        debug!("Added mover {:?} to sector {sector}", id);
        id
    }

    /// Add a thinker that doesn't occupy its sector, such as a light
    pub(crate) fn add_thinker(&mut self, thinker: Thinker) -> ThinkerId {
        self.thinkers.push(thinker)
    }

    /// Called by a mover as it finishes. The thinker list drops it after the
    /// tick.
    pub(crate) fn finish_mover(&mut self, sector: usize) {
        trace!("Mover in sector {sector} finished");
        self.map_data.sectors[sector].specialdata = None;
    }

    pub(crate) fn apply_plane_change(&mut self, sector: usize, plane: Plane, change: PlaneChange) {
        let sec = &mut self.map_data.sectors[sector];
        match plane {
            Plane::Floor => sec.floorpic = change.pic,
            Plane::Ceiling => sec.ceilingpic = change.pic,
        }
        if let Some(special) = change.special {
            sec.special = special;
        }
        let (floor, ceiling) = (sec.floorpic, sec.ceilingpic);
        self.events.emit(LevelEvent::SectorFlatChanged {
            sector,
            floor,
            ceiling,
        });
    }

    fn set_plane_height(&mut self, sector: usize, plane: Plane, height: f32) {
        let sec = &mut self.map_data.sectors[sector];
        match plane {
            Plane::Floor => sec.floorheight = height,
            Plane::Ceiling => sec.ceilingheight = height,
        }
    }

    /// T_MovePlane
    ///
    /// Move a floor or ceiling one step of `speed` toward `dest`, then make
    /// everything in the sector fit the new heights. A step that leaves
    /// something solid stuck, or something shootable stuck while not
    /// crushing, is undone.
    ///
    /// A floor never rises through the ceiling and a ceiling never drops
    /// through the floor.
    pub fn move_plane(
        &mut self,
        sector: usize,
        speed: f32,
        mut dest: f32,
        crush: bool,
        plane: Plane,
        direction: i32,
    ) -> PlaneResult {
        let sec = &self.map_data.sectors[sector];
        let (last, other) = match plane {
            Plane::Floor => (sec.floorheight, sec.ceilingheight),
            Plane::Ceiling => (sec.ceilingheight, sec.floorheight),
        };
        match (plane, direction) {
            (Plane::Floor, 1) => dest = dest.min(other),
            (Plane::Ceiling, -1) => dest = dest.max(other),
            (_, 1 | -1) => {}
            _ => {
                warn!("move_plane: invalid direction {direction} for {plane:?}");
                return PlaneResult::Ok;
            }
        }

        let next = last + speed * direction as f32;
        let past_dest = if direction == 1 {
            next > dest
        } else {
            next < dest
        };
        let height = if past_dest { dest } else { next };
        trace!("move_plane: {plane:?} of sector {sector}: {last} to {height} (dest {dest})");

        self.set_plane_height(sector, plane, height);
        let fit = self.change_sector(sector, crush);
        let keep = match fit {
            SectorFit::Fits => true,
            SectorFit::Crushed => crush && !past_dest,
            SectorFit::Blocked => false,
        };
        if !keep {
            self.set_plane_height(sector, plane, last);
            self.change_sector(sector, false);
            return if fit == SectorFit::Blocked {
                PlaneResult::Blocked
            } else {
                PlaneResult::Crushed
            };
        }

        let sec = &self.map_data.sectors[sector];
        let (floor, ceiling) = (sec.floorheight, sec.ceilingheight);
        self.events.emit(LevelEvent::SectorZChanged {
            sector,
            floor,
            ceiling,
        });
        if past_dest {
            PlaneResult::PastDest
        } else if fit == SectorFit::Crushed {
            PlaneResult::Crushed
        } else {
            PlaneResult::Ok
        }
    }

    /// Every thing whose box may reach in to the sector
    fn things_touching_sector(&self, sector: usize) -> Vec<ThingId> {
        let sec = &self.map_data.sectors[sector];
        let mut found = sec.things.clone();
        for other in self.map_data.neighbours(sector) {
            for &id in self.map_data.sectors[other].things.iter() {
                if found.contains(&id) {
                    continue;
                }
                if let Some(thing) = self.things.get(id) {
                    if sec.blockbox.expand(thing.radius).contains(thing.xy, 0.0) {
                        found.push(id);
                    }
                }
            }
        }
        found
    }

    /// P_ChangeSector
    ///
    /// Re-fit every thing touching the sector after a height change and
    /// crunch whatever no longer fits. Returns the worst outcome.
    pub fn change_sector(&mut self, sector: usize, crush: bool) -> SectorFit {
        let mut fit = SectorFit::Fits;
        for id in self.things_touching_sector(sector) {
            if self.thing_height_clip(id) {
                continue;
            }
            fit = fit.max(self.crunch_thing(id, crush));
        }
        fit
    }

    /// PIT_ChangeSector for a thing that doesn't fit
    fn crunch_thing(&mut self, id: ThingId, crush: bool) -> SectorFit {
        let Some(thing) = self.things.get(id) else {
            return SectorFit::Fits;
        };
        if thing.health <= 0 {
            // crunch bodies to giblets
            if self.set_state(id, StateNum::S_GIBS) {
                if let Some(thing) = self.things.get_mut(id) {
                    thing.flags &= !(MapObjFlag::Solid as u32);
                    thing.height = 0.0;
                    thing.radius = 0.0;
                }
            }
            return SectorFit::Fits;
        }
        if thing.has_flag(MapObjFlag::Dropped) {
            // crunch dropped items
            self.remove_thing(id);
            return SectorFit::Fits;
        }
        if !thing.has_flag(MapObjFlag::Shootable) {
            return if thing.has_flag(MapObjFlag::Solid) {
                SectorFit::Blocked
            } else {
                SectorFit::Fits
            };
        }

        if crush && self.level_time % 4 == 0 {
            let xyz = Vec3::new(thing.xy.x, thing.xy.y, thing.z + thing.height / 2.0);
            self.damage(id, None, None, CRUSH_DAMAGE);
            // spray blood in a random direction
            let blood = self.spawn_thing(xyz.truncate(), xyz.z, MapObjKind::MT_BLOOD);
            let momx = self.rng.p_subrandom() as f32 / 16.0;
            let momy = self.rng.p_subrandom() as f32 / 16.0;
            if let Some(blood) = self.things.get_mut(blood) {
                blood.momxy = Vec2::new(momx, momy);
            }
        }
        SectorFit::Crushed
    }

    /// P_ThingHeightClip
    ///
    /// Refresh the floor and ceiling of a thing in place, keeping it on the
    /// floor if it was standing there. Returns false if it no longer fits.
    pub fn thing_height_clip(&mut self, id: ThingId) -> bool {
        let Some(thing) = self.things.get(id) else {
            return true;
        };
        let xy = thing.xy;
        let on_floor = thing.z == thing.floorz;
        let check = self.check_position(id, xy);
        let Some(thing) = self.things.get_mut(id) else {
            return true;
        };
        let old_z = thing.z;
        thing.floorz = check.floorz;
        thing.ceilingz = check.ceilingz;
        thing.dropoffz = check.dropoffz;
        if on_floor {
            // walking monsters rise and fall with the floor
            thing.z = thing.floorz;
        } else if thing.z + thing.height > thing.ceilingz {
            // don't adjust a floating monster unless forced to
            thing.z = thing.ceilingz - thing.height;
        }
        let fits = thing.ceilingz - thing.floorz >= thing.height;
        if thing.z != old_z {
            let xyz = thing.xyz();
            self.events.emit(LevelEvent::ThingMoved { thing: id, xyz });
        }
        fits
    }

    /// Start whatever the line's special does.
    ///
    /// `side` is the side of the line the thing was on. Returns true if the
    /// special did something. Lines that can only be used once lose their
    /// special here.
    ///
    /// Doom function names `P_CrossSpecialLine`, `P_UseSpecialLine` and
    /// `P_ShootSpecialLine`
    pub fn trigger_special(&mut self, line: usize, thing: ThingId, kind: TriggerKind, side: usize) -> bool {
        let Some(ld) = self.map_data.linedefs.get(line) else {
            return false;
        };
        let (special, flags) = (ld.special, ld.flags);
        if special == 0 {
            return false;
        }
        let Some(mobj) = self.things.get(thing) else {
            return false;
        };
        let is_player = mobj.is_player();
        if kind == TriggerKind::Walk && mobj.has_flag(MapObjFlag::Missile) {
            // projectiles never trip walk lines
            return false;
        }
        let used = matches!(kind, TriggerKind::Push | TriggerKind::Switch);
        if !is_player && used && LineDefFlags::Secret.is_set(flags) {
            // monsters don't open secret doors
            return false;
        }

        if let Some(generalized) = Generalized::decode(special) {
            return self.trigger_generalized(line, thing, kind, side, generalized);
        }

        let Some(def) = line_specials::lookup(special) else {
            debug!("Ignoring unknown line special {special} on line {line}");
            return false;
        };
        if !def.trigger.accepts(kind) {
            return false;
        }
        match def.who {
            Who::Players if !is_player => return false,
            Who::Monsters if is_player => return false,
            _ => {}
        }

        trace!("Line {line} special {special} triggered by {:?} as {kind:?}", thing);
        let done = self.run_line_action(def.action, line, thing, side);
        match def.trigger {
            TriggerKind::Walk if !def.repeat => self.map_data.linedefs[line].special = 0,
            TriggerKind::Gun => self.change_switch_texture(line, def.repeat),
            TriggerKind::Switch if done => self.change_switch_texture(line, def.repeat),
            TriggerKind::Push if done && !def.repeat => self.map_data.linedefs[line].special = 0,
            _ => {}
        }
        done
    }

    fn run_line_action(&mut self, action: LineAction, line: usize, thing: ThingId, side: usize) -> bool {
        match action {
            LineAction::ManualDoor => self.ev_vertical_door(line, thing),
            LineAction::Door(kind) => self.ev_do_door(line, kind),
            LineAction::LockedDoor(kind, card) => self.ev_do_locked_door(line, kind, card, thing),
            LineAction::Floor(kind) => self.ev_do_floor(line, kind),
            LineAction::Ceiling(kind) => self.ev_do_ceiling(line, kind),
            LineAction::CeilingAndFloor(ceiling, floor) => {
                let c = self.ev_do_ceiling(line, ceiling);
                let f = self.ev_do_floor(line, floor);
                c || f
            }
            LineAction::CeilingStop => self.ev_ceiling_crush_stop(line),
            LineAction::Plat(kind, amount) => self.ev_do_plat(line, kind, amount),
            LineAction::PlatStop => {
                self.ev_stop_plat(line);
                true
            }
            LineAction::Stairs(kind) => self.ev_build_stairs(line, kind),
            LineAction::Donut => self.ev_do_donut(line),
            LineAction::Teleport { silent } => self.ev_teleport(line, side, thing, silent),
            LineAction::LineTeleport { reverse } => self.ev_line_teleport(line, side, thing, reverse),
            LineAction::LightTurnOn(bright) => {
                self.ev_light_turn_on(line, bright);
                true
            }
            LineAction::LightsOff => {
                self.ev_turn_tag_lights_off(line);
                true
            }
            LineAction::StartStrobing => {
                self.ev_start_light_strobing(line);
                true
            }
            LineAction::Exit { secret } => {
                self.exit_level(secret);
                true
            }
        }
    }

    /// G_ExitLevel and G_SecretExitLevel
    pub fn exit_level(&mut self, secret: bool) {
        info!("Level exit triggered (secret: {secret})");
        self.exit = Some(secret);
        self.events.emit(LevelEvent::LevelExit { secret });
    }

    /// P_SpawnSpecials
    ///
    /// Start the thinkers sector and line specials need from the first tick.
    pub(crate) fn spawn_specials(&mut self) {
        for sector in 0..self.map_data.sectors.len() {
            let special = self.map_data.sectors[sector].special;
            match special {
                0 => {}
                1 => {
                    debug!("sector-special #{special}: light flicker");
                    self.spawn_light_flash(sector);
                }
                2 => {
                    debug!("sector-special #{special}: strobe fast");
                    self.spawn_strobe_flash(sector, FASTDARK, false);
                }
                3 => {
                    debug!("sector-special #{special}: strobe slow");
                    self.spawn_strobe_flash(sector, SLOWDARK, false);
                }
                4 => {
                    debug!("sector-special #{special}: strobe fast death/slime");
                    self.spawn_strobe_flash(sector, FASTDARK, false);
                    self.map_data.sectors[sector].special = 4;
                }
                8 => {
                    debug!("sector-special #{special}: glowing light");
                    self.spawn_glow(sector);
                }
                9 => self.totals.secrets += 1,
                10 => {
                    debug!("sector-special #{special}: door close in 30 seconds");
                    self.spawn_door_close_in_30(sector);
                }
                12 => self.spawn_strobe_flash(sector, SLOWDARK, true),
                13 => self.spawn_strobe_flash(sector, FASTDARK, true),
                14 => {
                    debug!("sector-special #{special}: door raise in 5 minutes");
                    self.spawn_door_raise_in_5_mins(sector);
                }
                17 => {
                    debug!("sector-special #{special}: fire flicker");
                    self.spawn_fire_flicker(sector);
                }
                // damage floors are handled while a player stands on them
                5 | 7 | 11 | 16 => {}
                _ => debug!("Sector {sector} has unknown special {special}"),
            }
        }

        for line in 0..self.map_data.linedefs.len() {
            if self.map_data.linedefs[line].special == 48 {
                let sidedef = self.map_data.linedefs[line].front_sidedef;
                self.add_thinker(Thinker::Scroll(Scroll { line, sidedef }));
            }
        }
    }

    /// P_PlayerInSpecialSector
    ///
    /// Damage floors, secrets and the end of episode exit for a player
    /// standing on the floor of a special sector.
    pub(crate) fn player_in_special_sector(&mut self, id: ThingId) {
        let Some(sector) = self.thing_sector(id) else {
            return;
        };
        let Some(thing) = self.things.get(id) else {
            return;
        };
        let sec = &self.map_data.sectors[sector];
        if thing.z != sec.floorheight {
            // falling, not all the way down yet
            return;
        }
        let special = sec.special;
        let hurt_tick = self.level_time % 32 == 0;
        match special {
            // HELLSLIME DAMAGE
            5 if hurt_tick => self.damage(id, None, None, 10),
            // NUKAGE DAMAGE
            7 if hurt_tick => self.damage(id, None, None, 5),
            // SUPER HELLSLIME DAMAGE, STROBE HURT
            16 | 4 if hurt_tick => self.damage(id, None, None, 20),
            9 => {
                // SECRET SECTOR
                self.map_data.sectors[sector].special = 0;
                if let Some(player) = self.things.get_mut(id).and_then(|t| t.player_mut()) {
                    player.secretcount += 1;
                    player.message = Some(SECRETFOUND.to_string());
                }
                info!("Secret found in sector {sector}");
                self.events.emit(LevelEvent::Message {
                    player: id,
                    text: SECRETFOUND,
                });
            }
            11 => {
                // EXIT SUPER DAMAGE! (for E1M8 finale)
                if hurt_tick {
                    self.damage(id, None, None, 20);
                }
                if self.things.get(id).is_some_and(|t| t.health <= 10) && self.exit.is_none() {
                    self.exit_level(false);
                }
            }
            _ => {}
        }
    }

    /// P_UpdateSpecials
    ///
    /// Texture animation and switches flipping back
    pub(crate) fn update_specials(&mut self) {
        self.pic_data.update_animations(self.level_time);
        self.update_switches();
    }
}
