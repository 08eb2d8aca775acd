//! Door movement thinker, controls open/close, locked.
//!
//! Doom source name `p_doors`

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::doom_def::{Card, TICRATE};
use crate::events::LevelEvent;
use crate::info::SfxName;
use crate::lang::english::*;
use crate::level::Level;
use crate::thing::ThingId;
use crate::thinker::Thinker;

use super::specials::{Plane, PlaneResult, find_lowest_ceiling_surrounding};

pub const VDOORWAIT: i32 = 150;
pub const VDOORSPEED: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorKind {
    /// Open, wait, close
    Normal,
    Close30ThenOpen,
    Close,
    Open,
    RaiseIn5Mins,
    BlazeRaise,
    BlazeOpen,
    BlazeClose,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalDoor {
    pub sector: usize,
    pub kind: DoorKind,
    pub topheight: f32,
    pub speed: f32,
    /// 1 = up, 0 = waiting, -1 = down, 2 = initial wait
    pub direction: i32,
    /// tics to wait at the top
    pub topwait: i32,
    /// (keep in case a door going down is reset)
    /// when it reaches 0, start going down
    pub topcountdown: i32,
}

/// What a push on a door that is already moving does to it.
///
/// Returns the new direction, or `None` to leave the door alone. A closing
/// door always goes back up. An open or opening door is shut by players,
/// monsters never close doors.
pub fn interrupt_door(direction: i32, is_player: bool) -> Option<i32> {
    if direction == -1 {
        Some(1)
    } else if is_player {
        Some(-1)
    } else {
        None
    }
}

impl VerticalDoor {
    fn new(sector: usize, kind: DoorKind) -> Self {
        Self {
            sector,
            kind,
            topheight: 0.0,
            speed: VDOORSPEED,
            direction: 1,
            topwait: VDOORWAIT,
            topcountdown: 0,
        }
    }

    fn is_blazing(&self) -> bool {
        self.speed >= VDOORSPEED * 4.0
    }

    fn open_sound(&self) -> SfxName {
        if self.is_blazing() {
            SfxName::bdopn
        } else {
            SfxName::doropn
        }
    }

    fn close_sound(&self) -> SfxName {
        if self.is_blazing() {
            SfxName::bdcls
        } else {
            SfxName::dorcls
        }
    }

    /// T_VerticalDoor
    pub fn think(&mut self, level: &mut Level) -> bool {
        match self.direction {
            0 => {
                // WAITING
                self.topcountdown -= 1;
                if self.topcountdown <= 0 {
                    trace!("Door in sector {} done waiting", self.sector);
                    match self.kind {
                        DoorKind::BlazeRaise | DoorKind::Normal => {
                            self.direction = -1;
                            level.sector_sound(self.sector, self.close_sound());
                        }
                        DoorKind::Close30ThenOpen => {
                            self.direction = 1;
                            level.sector_sound(self.sector, self.open_sound());
                        }
                        _ => warn!("Door kind {:?} should not be waiting", self.kind),
                    }
                }
            }
            2 => {
                // INITIAL WAIT
                self.topcountdown -= 1;
                if self.topcountdown <= 0 {
                    if self.kind == DoorKind::RaiseIn5Mins {
                        self.direction = 1;
                        self.kind = DoorKind::Normal;
                        level.sector_sound(self.sector, SfxName::doropn);
                    } else {
                        warn!("Door kind {:?} should not be in initial wait", self.kind);
                    }
                }
            }
            -1 => {
                // DOWN
                let floor = level.map_data.sectors[self.sector].floorheight;
                let res = level.move_plane(self.sector, self.speed, floor, false, Plane::Ceiling, -1);
                match res {
                    PlaneResult::PastDest => match self.kind {
                        DoorKind::BlazeRaise | DoorKind::BlazeClose => {
                            level.sector_sound(self.sector, SfxName::bdcls);
                            level.finish_mover(self.sector);
                            return false;
                        }
                        DoorKind::Normal | DoorKind::Close => {
                            level.finish_mover(self.sector);
                            return false;
                        }
                        DoorKind::Close30ThenOpen => {
                            self.direction = 0;
                            self.topcountdown = self.topwait;
                        }
                        _ => {}
                    },
                    PlaneResult::Crushed | PlaneResult::Blocked => match self.kind {
                        // DO NOT GO BACK UP!
                        DoorKind::BlazeClose | DoorKind::Close => {}
                        _ => {
                            debug!("Door in sector {} hit something, reopening", self.sector);
                            self.direction = 1;
                            level.sector_sound(self.sector, self.open_sound());
                        }
                    },
                    PlaneResult::Ok => {}
                }
            }
            1 => {
                // UP
                let res =
                    level.move_plane(self.sector, self.speed, self.topheight, false, Plane::Ceiling, 1);
                if res == PlaneResult::PastDest {
                    match self.kind {
                        DoorKind::BlazeRaise | DoorKind::Normal => {
                            // wait at top
                            self.direction = 0;
                            self.topcountdown = self.topwait;
                        }
                        DoorKind::Close30ThenOpen | DoorKind::BlazeOpen | DoorKind::Open => {
                            level.finish_mover(self.sector);
                            return false;
                        }
                        _ => {}
                    }
                }
            }
            _ => warn!("Invalid door direction of {}", self.direction),
        }
        true
    }
}

impl Level {
    /// EV_DoDoor
    ///
    /// Start `kind` in every idle sector tagged like the line.
    pub fn ev_do_door(&mut self, line: usize, kind: DoorKind) -> bool {
        let mut ret = false;
        for sector in self.activation_sectors(line, false) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            ret = true;
            let topwait = if kind == DoorKind::Close30ThenOpen {
                30 * TICRATE
            } else {
                VDOORWAIT
            };
            let door = self.door_for_sector(sector, kind, VDOORSPEED, topwait);
            self.add_mover(sector, Thinker::VerticalDoor(door));
        }
        ret
    }

    /// Build a door of `kind` for the sector and play its start sound.
    /// `topwait` is how long it holds before reversing.
    pub(crate) fn door_for_sector(&mut self, sector: usize, kind: DoorKind, speed: f32, topwait: i32) -> VerticalDoor {
        let mut door = VerticalDoor::new(sector, kind);
        door.speed = speed;
        door.topwait = topwait;
        let ceiling = self.map_data.sectors[sector].ceilingheight;
        let top = find_lowest_ceiling_surrounding(&self.map_data, sector) - 4.0;
        match kind {
            DoorKind::BlazeRaise | DoorKind::BlazeOpen | DoorKind::BlazeClose => {
                door.speed = VDOORSPEED * 4.0;
            }
            _ => {}
        }
        match kind {
            DoorKind::Normal | DoorKind::Open | DoorKind::BlazeRaise | DoorKind::BlazeOpen => {
                door.topheight = top;
                door.direction = 1;
                if door.topheight != ceiling {
                    self.sector_sound(sector, door.open_sound());
                }
            }
            DoorKind::BlazeClose | DoorKind::Close => {
                door.topheight = top;
                door.direction = -1;
                self.sector_sound(sector, door.close_sound());
            }
            DoorKind::Close30ThenOpen => {
                door.topheight = ceiling;
                door.direction = -1;
                self.sector_sound(sector, door.close_sound());
            }
            DoorKind::RaiseIn5Mins => {
                door.topheight = top;
                door.direction = 2;
                door.topcountdown = 5 * 60 * TICRATE;
            }
        }
        door
    }

    /// True if the player carries the card or its skull
    pub(crate) fn has_key(&self, thing: ThingId, card: Card) -> bool {
        self.things
            .get(thing)
            .and_then(|t| t.player())
            .is_some_and(|p| p.cards[card.index()] || p.cards[card.counterpart().index()])
    }

    /// Tell the player they need a key
    pub(crate) fn need_key(&mut self, thing: ThingId, text: &'static str) {
        if let Some(player) = self.things.get_mut(thing).and_then(|t| t.player_mut()) {
            player.message = Some(text.to_string());
        }
        self.events.emit(LevelEvent::Message { player: thing, text });
        self.events.sound(SfxName::oof, crate::events::SoundOrigin::Thing(thing));
    }

    /// EV_DoLockedDoor
    pub fn ev_do_locked_door(&mut self, line: usize, kind: DoorKind, card: Card, thing: ThingId) -> bool {
        if !self.things.get(thing).is_some_and(|t| t.is_player()) {
            return false;
        }
        if !self.has_key(thing, card) {
            let text = match card {
                Card::Bluecard | Card::Blueskull => PD_BLUEO,
                Card::Redcard | Card::Redskull => PD_REDO,
                Card::Yellowcard | Card::Yellowskull => PD_YELLOWO,
            };
            self.need_key(thing, text);
            return false;
        }
        self.ev_do_door(line, kind)
    }

    /// EV_VerticalDoor
    ///
    /// Open the door behind a pushed line. Pushing a door that is already
    /// moving interrupts it, see `interrupt_door`.
    pub fn ev_vertical_door(&mut self, line: usize, thing: ThingId) -> bool {
        let Some(mobj) = self.things.get(thing) else {
            return false;
        };
        let is_player = mobj.is_player();
        let special = self.map_data.linedefs[line].special;

        let lock = match special {
            26 | 32 => Some((Card::Bluecard, PD_BLUEK)),
            27 | 34 => Some((Card::Yellowcard, PD_YELLOWK)),
            28 | 33 => Some((Card::Redcard, PD_REDK)),
            _ => None,
        };
        if let Some((card, text)) = lock {
            if !is_player {
                return false;
            }
            if !self.has_key(thing, card) {
                self.need_key(thing, text);
                return false;
            }
        }

        let Some(sector) = self.map_data.linedefs[line].backsector else {
            warn!("ev_vertical_door: line {line} has no sector behind it");
            return false;
        };

        // if the sector has an active thinker, use it
        if let Some(active) = self.map_data.sectors[sector].specialdata {
            if !matches!(special, 1 | 26 | 27 | 28 | 117) {
                return false;
            }
            let Some(door) = self.thinkers.get_mut(active).and_then(|t| t.vertical_door()) else {
                debug!("ev_vertical_door: sector {sector} is busy with another mover");
                return false;
            };
            let Some(direction) = interrupt_door(door.direction, is_player) else {
                // bad guys never close doors
                return false;
            };
            door.direction = direction;
            let sfx = if direction == 1 {
                door.open_sound()
            } else {
                door.close_sound()
            };
            self.sector_sound(sector, sfx);
            return true;
        }

        let mut door = VerticalDoor::new(sector, DoorKind::Normal);
        match special {
            31..=34 => door.kind = DoorKind::Open,
            117 => {
                door.kind = DoorKind::BlazeRaise;
                door.speed = VDOORSPEED * 4.0;
            }
            118 => {
                door.kind = DoorKind::BlazeOpen;
                door.speed = VDOORSPEED * 4.0;
            }
            _ => {}
        }
        self.sector_sound(sector, door.open_sound());
        door.topheight = find_lowest_ceiling_surrounding(&self.map_data, sector) - 4.0;
        debug!("Activated door: {door:?}");
        self.add_mover(sector, Thinker::VerticalDoor(door));
        true
    }

    /// P_SpawnDoorCloseIn30
    pub(crate) fn spawn_door_close_in_30(&mut self, sector: usize) {
        let mut door = VerticalDoor::new(sector, DoorKind::Normal);
        door.direction = 0;
        door.topcountdown = 30 * TICRATE;
        self.map_data.sectors[sector].special = 0;
        self.add_mover(sector, Thinker::VerticalDoor(door));
    }

    /// P_SpawnDoorRaiseIn5Mins
    pub(crate) fn spawn_door_raise_in_5_mins(&mut self, sector: usize) {
        let door = self.door_for_sector(sector, DoorKind::RaiseIn5Mins, VDOORSPEED, VDOORWAIT);
        self.map_data.sectors[sector].special = 0;
        self.add_mover(sector, Thinker::VerticalDoor(door));
    }
}

#[cfg(test)]
mod tests {
    use super::interrupt_door;

    #[test]
    fn closing_door_reopens_for_anyone() {
        assert_eq!(interrupt_door(-1, true), Some(1));
        assert_eq!(interrupt_door(-1, false), Some(1));
    }

    #[test]
    fn open_door_closes_for_players_only() {
        assert_eq!(interrupt_door(1, true), Some(-1));
        assert_eq!(interrupt_door(0, true), Some(-1));
        assert_eq!(interrupt_door(1, false), None);
        assert_eq!(interrupt_door(0, false), None);
    }
}
