//! Boom generalized line specials. The special number is a bit field giving
//! the trigger, the effect and its parameters, so any combination can be
//! placed on a line without a table entry.

use log::{debug, trace};

use super::TriggerKind;
use super::ceiling::{CEILSPEED, CeilingKind, CeilingMove};
use super::doors::{DoorKind, VDOORSPEED, VDOORWAIT};
use super::floor::{FLOORSPEED, FloorKind, FloorMove};
use super::platforms::{PLATSPEED, PlatKind, PlatStatus, Platform};
use super::specials::{
    Plane, PlaneChange, find_highest_ceiling_surrounding, find_highest_floor_surrounding,
    find_lowest_ceiling_surrounding, find_lowest_floor_surrounding, find_model_ceiling_sector,
    find_model_floor_sector, find_next_highest_ceiling, find_next_highest_floor, find_next_lowest_ceiling,
    find_next_lowest_floor, find_shortest_lower_around, find_shortest_upper_around,
};
use crate::doom_def::{Card, TICRATE};
use crate::info::SfxName;
use crate::lang::english::*;
use crate::level::Level;
use crate::thing::ThingId;
use crate::thinker::Thinker;

const GEN_FLOOR_BASE: i16 = 0x6000;
const GEN_CEILING_BASE: i16 = 0x4000;
const GEN_DOOR_BASE: i16 = 0x3c00;
const GEN_LOCKED_BASE: i16 = 0x3800;
const GEN_LIFT_BASE: i16 = 0x3400;
const GEN_STAIRS_BASE: i16 = 0x3000;
const GEN_CRUSHER_BASE: i16 = 0x2f80;

const TRIGGER_MASK: u16 = 0x0007;

/// How a generalized line fires, the low three bits of the special
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenTrigger {
    WalkOnce,
    WalkMany,
    SwitchOnce,
    SwitchMany,
    GunOnce,
    GunMany,
    PushOnce,
    PushMany,
}

impl GenTrigger {
    fn from_bits(bits: u16) -> Self {
        match bits & TRIGGER_MASK {
            0 => GenTrigger::WalkOnce,
            1 => GenTrigger::WalkMany,
            2 => GenTrigger::SwitchOnce,
            3 => GenTrigger::SwitchMany,
            4 => GenTrigger::GunOnce,
            5 => GenTrigger::GunMany,
            6 => GenTrigger::PushOnce,
            _ => GenTrigger::PushMany,
        }
    }

    pub fn kind(self) -> TriggerKind {
        match self {
            GenTrigger::WalkOnce | GenTrigger::WalkMany => TriggerKind::Walk,
            GenTrigger::SwitchOnce | GenTrigger::SwitchMany => TriggerKind::Switch,
            GenTrigger::GunOnce | GenTrigger::GunMany => TriggerKind::Gun,
            GenTrigger::PushOnce | GenTrigger::PushMany => TriggerKind::Push,
        }
    }

    pub fn repeat(self) -> bool {
        matches!(
            self,
            GenTrigger::WalkMany | GenTrigger::SwitchMany | GenTrigger::GunMany | GenTrigger::PushMany
        )
    }

    /// Push lines act on the sector behind them instead of tagged sectors
    pub fn manual(self) -> bool {
        self.kind() == TriggerKind::Push
    }
}

/// Floor or ceiling mover. The same layout serves both, `target` means a
/// different set of heights for each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenPlane {
    pub trigger: GenTrigger,
    pub crush: bool,
    /// 0 none, 1 zero the special, 2 texture only, 3 texture and special
    pub change: u8,
    pub target: u8,
    pub up: bool,
    /// With a change: take it from a sector at the destination height
    /// instead of the line's front. Without: monsters may trigger.
    pub model: bool,
    pub speed: f32,
}

impl GenPlane {
    fn decode(bits: u16, trigger: GenTrigger, base_speed: f32) -> Self {
        Self {
            trigger,
            crush: bits & 0x1000 != 0,
            change: ((bits & 0x0c00) >> 10) as u8,
            target: ((bits & 0x0380) >> 7) as u8,
            up: bits & 0x0040 != 0,
            model: bits & 0x0020 != 0,
            speed: base_speed * speed_factor((bits & 0x0018) >> 3),
        }
    }

    fn direction(&self) -> i32 {
        if self.up { 1 } else { -1 }
    }
}

/// Slow, normal, fast, turbo
fn speed_factor(bits: u16) -> f32 {
    match bits {
        0 => 1.0,
        1 => 2.0,
        2 => 4.0,
        _ => 8.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenDoorKind {
    OpenWaitClose,
    Open,
    CloseWaitOpen,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenDoor {
    pub trigger: GenTrigger,
    /// Tics to wait before reversing
    pub delay: i32,
    pub monsters: bool,
    pub kind: GenDoorKind,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenKey {
    Any,
    Card(Card),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenLockedDoor {
    pub trigger: GenTrigger,
    /// Cards and skulls of a colour count as the same key
    pub skull_is_card: bool,
    pub key: GenKey,
    /// Stays open instead of closing after the wait
    pub stay_open: bool,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftTarget {
    LowestFloor,
    NextFloor,
    LowestCeiling,
    Perpetual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenLift {
    pub trigger: GenTrigger,
    pub target: LiftTarget,
    /// Tics to wait at the bottom
    pub delay: i32,
    pub monsters: bool,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenStairs {
    pub trigger: GenTrigger,
    pub ignore_texture: bool,
    pub up: bool,
    pub step: f32,
    pub monsters: bool,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenCrusher {
    pub trigger: GenTrigger,
    pub silent: bool,
    pub monsters: bool,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Generalized {
    Floor(GenPlane),
    Ceiling(GenPlane),
    Door(GenDoor),
    LockedDoor(GenLockedDoor),
    Lift(GenLift),
    Stairs(GenStairs),
    Crusher(GenCrusher),
}

impl Generalized {
    /// Split a special number in to its generalized fields. Classic specials
    /// are below every generalized range and give `None`.
    pub fn decode(special: i16) -> Option<Self> {
        let bits = special as u16;
        let trigger = GenTrigger::from_bits(bits);
        // the floor range covers the sign bit
        let decoded = if bits >= GEN_FLOOR_BASE as u16 {
            Generalized::Floor(GenPlane::decode(bits, trigger, FLOORSPEED))
        } else if special >= GEN_CEILING_BASE {
            Generalized::Ceiling(GenPlane::decode(bits, trigger, CEILSPEED))
        } else if special >= GEN_DOOR_BASE {
            let delay = match (bits & 0x0300) >> 8 {
                0 => TICRATE,
                1 => VDOORWAIT,
                2 => 2 * VDOORWAIT,
                _ => 7 * VDOORWAIT,
            };
            let kind = match (bits & 0x0060) >> 5 {
                0 => GenDoorKind::OpenWaitClose,
                1 => GenDoorKind::Open,
                2 => GenDoorKind::CloseWaitOpen,
                _ => GenDoorKind::Close,
            };
            Generalized::Door(GenDoor {
                trigger,
                delay,
                monsters: bits & 0x0080 != 0,
                kind,
                speed: VDOORSPEED * speed_factor((bits & 0x0018) >> 3),
            })
        } else if special >= GEN_LOCKED_BASE {
            let key = match (bits & 0x01c0) >> 6 {
                0 => GenKey::Any,
                1 => GenKey::Card(Card::Redcard),
                2 => GenKey::Card(Card::Bluecard),
                3 => GenKey::Card(Card::Yellowcard),
                4 => GenKey::Card(Card::Redskull),
                5 => GenKey::Card(Card::Blueskull),
                6 => GenKey::Card(Card::Yellowskull),
                _ => GenKey::All,
            };
            Generalized::LockedDoor(GenLockedDoor {
                trigger,
                skull_is_card: bits & 0x0200 != 0,
                key,
                stay_open: bits & 0x0020 != 0,
                speed: VDOORSPEED * speed_factor((bits & 0x0018) >> 3),
            })
        } else if special >= GEN_LIFT_BASE {
            let target = match (bits & 0x0300) >> 8 {
                0 => LiftTarget::LowestFloor,
                1 => LiftTarget::NextFloor,
                2 => LiftTarget::LowestCeiling,
                _ => LiftTarget::Perpetual,
            };
            let delay = match (bits & 0x00c0) >> 6 {
                0 => 1,
                1 => 3,
                2 => 5,
                _ => 10,
            } * TICRATE;
            Generalized::Lift(GenLift {
                trigger,
                target,
                delay,
                monsters: bits & 0x0020 != 0,
                speed: PLATSPEED * 2.0 * speed_factor((bits & 0x0018) >> 3),
            })
        } else if special >= GEN_STAIRS_BASE {
            let step = match (bits & 0x00c0) >> 6 {
                0 => 4.0,
                1 => 8.0,
                2 => 16.0,
                _ => 24.0,
            };
            let speed = match (bits & 0x0018) >> 3 {
                0 => FLOORSPEED / 4.0,
                1 => FLOORSPEED / 2.0,
                2 => FLOORSPEED * 2.0,
                _ => FLOORSPEED * 4.0,
            };
            Generalized::Stairs(GenStairs {
                trigger,
                ignore_texture: bits & 0x0200 != 0,
                up: bits & 0x0100 != 0,
                step,
                monsters: bits & 0x0020 != 0,
                speed,
            })
        } else if special >= GEN_CRUSHER_BASE {
            Generalized::Crusher(GenCrusher {
                trigger,
                silent: bits & 0x0040 != 0,
                monsters: bits & 0x0020 != 0,
                speed: CEILSPEED * speed_factor((bits & 0x0018) >> 3),
            })
        } else {
            return None;
        };
        Some(decoded)
    }

    pub fn trigger(&self) -> GenTrigger {
        match self {
            Generalized::Floor(g) | Generalized::Ceiling(g) => g.trigger,
            Generalized::Door(g) => g.trigger,
            Generalized::LockedDoor(g) => g.trigger,
            Generalized::Lift(g) => g.trigger,
            Generalized::Stairs(g) => g.trigger,
            Generalized::Crusher(g) => g.trigger,
        }
    }

    /// Monsters may only set off lines flagged for them, and never locked
    /// doors or anything that changes a sector's flat
    pub fn allows_monsters(&self) -> bool {
        match self {
            Generalized::Floor(g) | Generalized::Ceiling(g) => g.change == 0 && g.model,
            Generalized::Door(g) => g.monsters,
            Generalized::LockedDoor(_) => false,
            Generalized::Lift(g) => g.monsters,
            Generalized::Stairs(g) => g.monsters,
            Generalized::Crusher(g) => g.monsters,
        }
    }
}

impl Level {
    /// Run a generalized line. Once-only lines lose their special, and
    /// switches flip, only if something actually started.
    pub(crate) fn trigger_generalized(
        &mut self,
        line: usize,
        thing: ThingId,
        kind: TriggerKind,
        _side: usize,
        params: Generalized,
    ) -> bool {
        let trigger = params.trigger();
        if !trigger.kind().accepts(kind) {
            return false;
        }
        let is_player = self.things.get(thing).is_some_and(|t| t.is_player());
        if !is_player && !params.allows_monsters() {
            return false;
        }
        let manual = trigger.manual();
        if manual && self.map_data.linedefs[line].backsector.is_none() {
            debug!("Generalized push line {line} has no sector behind it");
            return false;
        }

        trace!("Line {line} generalized {params:?} triggered by {thing:?}");
        let done = match params {
            Generalized::Floor(g) => self.ev_do_gen_floor(line, g),
            Generalized::Ceiling(g) => self.ev_do_gen_ceiling(line, g),
            Generalized::Door(g) => self.ev_do_gen_door(line, g),
            Generalized::LockedDoor(g) => self.ev_do_gen_locked_door(line, thing, g),
            Generalized::Lift(g) => self.ev_do_gen_lift(line, g),
            Generalized::Stairs(g) => self.ev_do_gen_stairs(line, g),
            Generalized::Crusher(g) => self.ev_do_gen_crusher(line, g),
        };
        if done {
            match trigger.kind() {
                TriggerKind::Switch | TriggerKind::Gun => self.change_switch_texture(line, trigger.repeat()),
                _ if !trigger.repeat() => self.map_data.linedefs[line].special = 0,
                _ => {}
            }
        }
        done
    }

    /// The flat and special a generalized plane change hands over, from the
    /// line's front sector or from a model sector at `dest`
    fn gen_plane_change(&self, line: usize, sector: usize, params: &GenPlane, plane: Plane, dest: f32) -> Option<PlaneChange> {
        if params.change == 0 {
            return None;
        }
        let map = &self.map_data;
        let model = if params.model {
            match plane {
                Plane::Floor => find_model_floor_sector(map, sector, dest)?,
                Plane::Ceiling => find_model_ceiling_sector(map, sector, dest)?,
            }
        } else {
            map.linedefs[line].frontsector
        };
        let model = &map.sectors[model];
        let pic = match plane {
            Plane::Floor => model.floorpic,
            Plane::Ceiling => model.ceilingpic,
        };
        let special = match params.change {
            1 => Some(0),
            3 => Some(model.special),
            _ => None,
        };
        Some(PlaneChange { pic, special })
    }

    /// EV_DoGenFloor
    pub fn ev_do_gen_floor(&mut self, line: usize, params: GenPlane) -> bool {
        let mut rtn = false;
        for sector in self.activation_sectors(line, params.trigger.manual()) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            rtn = true;
            let map = &self.map_data;
            let sec = &map.sectors[sector];
            let (floorheight, ceilingheight) = (sec.floorheight, sec.ceilingheight);
            let dir = params.direction();
            let dest = match params.target {
                0 => find_highest_floor_surrounding(map, sector),
                1 => find_lowest_floor_surrounding(map, sector),
                2 if params.up => find_next_highest_floor(map, sector, floorheight),
                2 => find_next_lowest_floor(map, sector, floorheight),
                3 => find_lowest_ceiling_surrounding(map, sector),
                4 => ceilingheight,
                5 => floorheight + dir as f32 * find_shortest_lower_around(map, &self.pic_data, sector),
                6 => floorheight + dir as f32 * 24.0,
                _ => floorheight + dir as f32 * 32.0,
            };
            let mut floor = FloorMove::new(sector, FloorKind::Generalized, dir, params.speed, dest);
            floor.crush = params.crush;
            floor.change = self.gen_plane_change(line, sector, &params, Plane::Floor, dest);
            self.add_mover(sector, Thinker::FloorMove(floor));
        }
        rtn
    }

    /// EV_DoGenCeiling
    pub fn ev_do_gen_ceiling(&mut self, line: usize, params: GenPlane) -> bool {
        let mut rtn = false;
        let tag = self.map_data.linedefs[line].tag;
        for sector in self.activation_sectors(line, params.trigger.manual()) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            rtn = true;
            let map = &self.map_data;
            let sec = &map.sectors[sector];
            let (floorheight, ceilingheight) = (sec.floorheight, sec.ceilingheight);
            let dir = params.direction();
            let dest = match params.target {
                0 => find_highest_ceiling_surrounding(map, sector),
                1 => find_lowest_ceiling_surrounding(map, sector),
                2 if params.up => find_next_highest_ceiling(map, sector, ceilingheight),
                2 => find_next_lowest_ceiling(map, sector, ceilingheight),
                3 => find_highest_floor_surrounding(map, sector),
                4 => floorheight,
                5 => ceilingheight + dir as f32 * find_shortest_upper_around(map, &self.pic_data, sector),
                6 => ceilingheight + dir as f32 * 24.0,
                _ => ceilingheight + dir as f32 * 32.0,
            };
            let mut ceiling = CeilingMove::new(sector, CeilingKind::Generalized, tag);
            ceiling.crush = params.crush;
            ceiling.direction = dir;
            ceiling.speed = params.speed;
            ceiling.oldspeed = params.speed;
            if params.up {
                ceiling.topheight = dest;
            } else {
                ceiling.bottomheight = dest;
            }
            ceiling.change = self.gen_plane_change(line, sector, &params, Plane::Ceiling, dest);
            self.add_mover(sector, Thinker::CeilingMove(ceiling));
        }
        rtn
    }

    /// EV_DoGenDoor
    pub fn ev_do_gen_door(&mut self, line: usize, params: GenDoor) -> bool {
        let blaze = params.speed >= VDOORSPEED * 4.0;
        let kind = match (params.kind, blaze) {
            (GenDoorKind::OpenWaitClose, false) => DoorKind::Normal,
            (GenDoorKind::OpenWaitClose, true) => DoorKind::BlazeRaise,
            (GenDoorKind::Open, false) => DoorKind::Open,
            (GenDoorKind::Open, true) => DoorKind::BlazeOpen,
            (GenDoorKind::CloseWaitOpen, _) => DoorKind::Close30ThenOpen,
            (GenDoorKind::Close, false) => DoorKind::Close,
            (GenDoorKind::Close, true) => DoorKind::BlazeClose,
        };
        self.start_gen_doors(line, params.trigger, kind, params.speed, params.delay)
    }

    fn start_gen_doors(&mut self, line: usize, trigger: GenTrigger, kind: DoorKind, speed: f32, delay: i32) -> bool {
        let mut rtn = false;
        for sector in self.activation_sectors(line, trigger.manual()) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            rtn = true;
            let mut door = self.door_for_sector(sector, kind, speed, delay);
            door.speed = speed;
            self.add_mover(sector, Thinker::VerticalDoor(door));
        }
        rtn
    }

    /// EV_DoGenLockedDoor
    pub fn ev_do_gen_locked_door(&mut self, line: usize, thing: ThingId, params: GenLockedDoor) -> bool {
        if !self.can_unlock_gen_door(thing, params) {
            return false;
        }
        let blaze = params.speed >= VDOORSPEED * 4.0;
        let kind = match (params.stay_open, blaze) {
            (false, false) => DoorKind::Normal,
            (false, true) => DoorKind::BlazeRaise,
            (true, false) => DoorKind::Open,
            (true, true) => DoorKind::BlazeOpen,
        };
        self.start_gen_doors(line, params.trigger, kind, params.speed, VDOORWAIT)
    }

    /// P_CanUnlockGenDoor
    fn can_unlock_gen_door(&mut self, thing: ThingId, params: GenLockedDoor) -> bool {
        let Some(player) = self.things.get(thing).and_then(|t| t.player()) else {
            return false;
        };
        let has = |card: Card| player.cards[card.index()];
        let has_colour = |card: Card| has(card) || (params.skull_is_card && has(card.counterpart()));

        let (ok, text) = match params.key {
            GenKey::Any => (player.cards.iter().any(|&c| c), PD_ANY),
            GenKey::Card(card) => {
                let text = match card {
                    Card::Redcard | Card::Redskull => PD_REDK,
                    Card::Bluecard | Card::Blueskull => PD_BLUEK,
                    Card::Yellowcard | Card::Yellowskull => PD_YELLOWK,
                };
                (has_colour(card), text)
            }
            GenKey::All if params.skull_is_card => (
                [Card::Redcard, Card::Bluecard, Card::Yellowcard]
                    .into_iter()
                    .all(has_colour),
                PD_ALL3,
            ),
            GenKey::All => (player.cards.iter().all(|&c| c), PD_ALL6),
        };
        if !ok {
            self.need_key(thing, text);
        }
        ok
    }

    /// EV_DoGenLift
    pub fn ev_do_gen_lift(&mut self, line: usize, params: GenLift) -> bool {
        let mut rtn = false;
        if params.target == LiftTarget::Perpetual {
            rtn = self.activate_in_stasis_plat(line);
        }

        let tag = self.map_data.linedefs[line].tag;
        for sector in self.activation_sectors(line, params.trigger.manual()) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            rtn = true;
            let map = &self.map_data;
            let floorheight = map.sectors[sector].floorheight;
            let kind = if params.target == LiftTarget::Perpetual {
                PlatKind::GenPerpetual
            } else {
                PlatKind::GenLift
            };
            let mut plat = Platform::new(sector, kind, tag);
            plat.speed = params.speed;
            plat.wait = params.delay;
            plat.high = floorheight;
            plat.status = PlatStatus::Down;
            match params.target {
                LiftTarget::LowestFloor => {
                    plat.low = find_lowest_floor_surrounding(map, sector).min(floorheight);
                }
                LiftTarget::NextFloor => {
                    plat.low = find_next_lowest_floor(map, sector, floorheight);
                }
                LiftTarget::LowestCeiling => {
                    plat.low = find_lowest_ceiling_surrounding(map, sector).min(floorheight);
                }
                LiftTarget::Perpetual => {
                    plat.low = find_lowest_floor_surrounding(map, sector).min(floorheight);
                    plat.high = find_highest_floor_surrounding(map, sector).max(floorheight);
                    if self.rng.p_random() & 1 == 0 {
                        plat.status = PlatStatus::Up;
                    }
                }
            }
            self.sector_sound(sector, SfxName::pstart);
            self.add_mover(sector, Thinker::Platform(plat));
        }
        rtn
    }

    /// EV_DoGenStairs
    pub fn ev_do_gen_stairs(&mut self, line: usize, params: GenStairs) -> bool {
        let sectors = self.activation_sectors(line, params.trigger.manual());
        let direction = if params.up { 1 } else { -1 };
        self.build_stairs(sectors, direction, params.speed, params.step, params.ignore_texture, false)
    }

    /// EV_DoGenCrusher
    pub fn ev_do_gen_crusher(&mut self, line: usize, params: GenCrusher) -> bool {
        let mut rtn = self.activate_in_stasis_ceiling(line);

        let tag = self.map_data.linedefs[line].tag;
        let kind = if params.silent {
            CeilingKind::GenSilentCrusher
        } else {
            CeilingKind::GenCrusher
        };
        for sector in self.activation_sectors(line, params.trigger.manual()) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            rtn = true;
            let sec = &self.map_data.sectors[sector];
            let mut ceiling = CeilingMove::new(sector, kind, tag);
            ceiling.crush = true;
            ceiling.direction = -1;
            ceiling.topheight = sec.ceilingheight;
            ceiling.bottomheight = sec.floorheight + 8.0;
            ceiling.speed = params.speed;
            ceiling.oldspeed = params.speed;
            self.add_mover(sector, Thinker::CeilingMove(ceiling));
        }
        rtn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_specials_are_not_generalized() {
        assert_eq!(Generalized::decode(0), None);
        assert_eq!(Generalized::decode(1), None);
        assert_eq!(Generalized::decode(269), None);
        assert_eq!(Generalized::decode(0x2f7f), None);
    }

    #[test]
    fn floor_fields() {
        // WR, turbo, up, raise by 24, crush
        let special = (0x6000u16 | 0x1000 | (6 << 7) | 0x40 | (3 << 3) | 1) as i16;
        let Some(Generalized::Floor(g)) = Generalized::decode(special) else {
            panic!("expected a floor");
        };
        assert_eq!(g.trigger, GenTrigger::WalkMany);
        assert!(g.crush);
        assert!(g.up);
        assert_eq!(g.target, 6);
        assert_eq!(g.change, 0);
        assert_eq!(g.speed, FLOORSPEED * 8.0);
    }

    #[test]
    fn floor_with_change_never_lets_monsters_in() {
        let special = (0x6000u16 | (2 << 10) | 0x20) as i16;
        let params = Generalized::decode(special).unwrap();
        assert!(!params.allows_monsters());
        let special = (0x6000u16 | 0x20) as i16;
        assert!(Generalized::decode(special).unwrap().allows_monsters());
    }

    #[test]
    fn door_fields() {
        // DR, 30 second delay, close wait open, fast
        let special = 0x3c00 | (3 << 8) | (2 << 5) | (2 << 3) | 7;
        let Some(Generalized::Door(g)) = Generalized::decode(special) else {
            panic!("expected a door");
        };
        assert_eq!(g.trigger, GenTrigger::PushMany);
        assert!(g.trigger.manual());
        assert_eq!(g.delay, 7 * VDOORWAIT);
        assert_eq!(g.kind, GenDoorKind::CloseWaitOpen);
        assert_eq!(g.speed, VDOORSPEED * 4.0);
    }

    #[test]
    fn locked_door_keys() {
        let special = 0x3800 | 0x200 | (7 << 6) | 2;
        let Some(Generalized::LockedDoor(g)) = Generalized::decode(special) else {
            panic!("expected a locked door");
        };
        assert_eq!(g.key, GenKey::All);
        assert!(g.skull_is_card);
        assert_eq!(g.trigger, GenTrigger::SwitchOnce);
        assert!(!Generalized::LockedDoor(g).allows_monsters());
    }

    #[test]
    fn lift_stairs_crusher() {
        let Some(Generalized::Lift(l)) = Generalized::decode(0x3400 | (3 << 8) | (1 << 6)) else {
            panic!("expected a lift");
        };
        assert_eq!(l.target, LiftTarget::Perpetual);
        assert_eq!(l.delay, 3 * TICRATE);
        assert_eq!(l.speed, PLATSPEED * 2.0);

        let Some(Generalized::Stairs(s)) = Generalized::decode(0x3000 | 0x100 | (3 << 6)) else {
            panic!("expected stairs");
        };
        assert!(s.up);
        assert_eq!(s.step, 24.0);
        assert_eq!(s.speed, FLOORSPEED / 4.0);

        let Some(Generalized::Crusher(c)) = Generalized::decode(0x2f80 | 0x40 | 0x20) else {
            panic!("expected a crusher");
        };
        assert!(c.silent);
        assert!(c.monsters);
    }
}
