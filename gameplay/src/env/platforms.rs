//! Platform movement thinker: raise and lower. Can be crushers and can be
//! stopped and restarted by tag.
//!
//! Doom source name `p_plats`

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::doom_def::TICRATE;
use crate::info::SfxName;
use crate::level::Level;
use crate::thinker::Thinker;

use super::specials::{
    Plane, PlaneChange, PlaneResult, find_highest_floor_surrounding, find_lowest_floor_surrounding,
    find_next_highest_floor,
};

pub const PLATSPEED: f32 = 1.0;
/// Seconds a lift waits at the bottom
pub const PLATWAIT: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatStatus {
    Up,
    Down,
    Waiting,
    InStasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatKind {
    PerpetualRaise,
    DownWaitUpStay,
    RaiseAndChange,
    RaiseToNearestAndChange,
    BlazeDWUS,
    GenLift,
    GenPerpetual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub sector: usize,
    pub speed: f32,
    pub low: f32,
    pub high: f32,
    pub wait: i32,
    pub count: i32,
    pub status: PlatStatus,
    pub old_status: PlatStatus,
    pub crush: bool,
    pub tag: i16,
    pub kind: PlatKind,
}

impl Platform {
    pub(crate) fn new(sector: usize, kind: PlatKind, tag: i16) -> Self {
        Self {
            sector,
            speed: PLATSPEED,
            low: 0.0,
            high: 0.0,
            wait: 0,
            count: 0,
            status: PlatStatus::Up,
            old_status: PlatStatus::Up,
            crush: false,
            tag,
            kind,
        }
    }

    fn is_perpetual(&self) -> bool {
        matches!(self.kind, PlatKind::PerpetualRaise | PlatKind::GenPerpetual)
    }

    /// T_PlatRaise
    pub fn think(&mut self, level: &mut Level) -> bool {
        match self.status {
            PlatStatus::Up => {
                let res = level.move_plane(self.sector, self.speed, self.high, self.crush, Plane::Floor, 1);

                if matches!(self.kind, PlatKind::RaiseAndChange | PlatKind::RaiseToNearestAndChange)
                    && level.level_time & 7 == 0
                {
                    level.sector_sound(self.sector, SfxName::stnmov);
                }

                let reverse = match res {
                    PlaneResult::Blocked => true,
                    PlaneResult::Crushed => !self.crush,
                    _ => false,
                };
                if reverse {
                    debug!("Platform in sector {} hit something, going back down", self.sector);
                    self.count = self.wait;
                    self.status = PlatStatus::Down;
                    level.sector_sound(self.sector, SfxName::pstart);
                } else if res == PlaneResult::PastDest {
                    self.count = self.wait;
                    self.status = PlatStatus::Waiting;
                    level.sector_sound(self.sector, SfxName::pstop);
                    if !self.is_perpetual() {
                        level.finish_mover(self.sector);
                        return false;
                    }
                }
            }
            PlatStatus::Down => {
                let res = level.move_plane(self.sector, self.speed, self.low, false, Plane::Floor, -1);
                if res == PlaneResult::PastDest {
                    self.count = self.wait;
                    self.status = PlatStatus::Waiting;
                    level.sector_sound(self.sector, SfxName::pstop);
                }
            }
            PlatStatus::Waiting => {
                self.count -= 1;
                if self.count <= 0 {
                    self.status = if level.map_data.sectors[self.sector].floorheight == self.low {
                        PlatStatus::Up
                    } else {
                        PlatStatus::Down
                    };
                    trace!("Platform in sector {} now {:?}", self.sector, self.status);
                    level.sector_sound(self.sector, SfxName::pstart);
                }
            }
            PlatStatus::InStasis => {}
        }
        true
    }
}

impl Level {
    /// EV_DoPlat
    ///
    /// `amount` is only used by raise-and-change platforms.
    pub fn ev_do_plat(&mut self, line: usize, kind: PlatKind, amount: i32) -> bool {
        let mut rtn = false;
        // Activate all <kind> plats that are in stasis
        if kind == PlatKind::PerpetualRaise {
            rtn = self.activate_in_stasis_plat(line);
        }

        let (tag, front) = {
            let ld = &self.map_data.linedefs[line];
            (ld.tag, ld.frontsector)
        };
        for sector in self.activation_sectors(line, false) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            rtn = true;
            let floorheight = self.map_data.sectors[sector].floorheight;
            let map = &self.map_data;
            let mut plat = Platform::new(sector, kind, tag);

            match kind {
                PlatKind::RaiseToNearestAndChange => {
                    plat.speed = PLATSPEED / 2.0;
                    plat.high = find_next_highest_floor(map, sector, floorheight);
                    plat.status = PlatStatus::Up;
                    let pic = map.sectors[front].floorpic;
                    // NO MORE DAMAGE, IF APPLICABLE
                    self.apply_plane_change(sector, Plane::Floor, PlaneChange { pic, special: Some(0) });
                    self.sector_sound(sector, SfxName::stnmov);
                }
                PlatKind::RaiseAndChange => {
                    plat.speed = PLATSPEED / 2.0;
                    plat.high = floorheight + amount as f32;
                    plat.status = PlatStatus::Up;
                    let pic = map.sectors[front].floorpic;
                    self.apply_plane_change(sector, Plane::Floor, PlaneChange { pic, special: None });
                    self.sector_sound(sector, SfxName::stnmov);
                }
                PlatKind::DownWaitUpStay | PlatKind::BlazeDWUS => {
                    plat.speed = if kind == PlatKind::BlazeDWUS {
                        PLATSPEED * 8.0
                    } else {
                        PLATSPEED * 4.0
                    };
                    plat.low = find_lowest_floor_surrounding(map, sector).min(floorheight);
                    plat.high = floorheight;
                    plat.wait = TICRATE * PLATWAIT;
                    plat.status = PlatStatus::Down;
                    self.sector_sound(sector, SfxName::pstart);
                }
                PlatKind::PerpetualRaise => {
                    plat.low = find_lowest_floor_surrounding(map, sector).min(floorheight);
                    plat.high = find_highest_floor_surrounding(map, sector).max(floorheight);
                    plat.wait = TICRATE * PLATWAIT;
                    plat.status = if self.rng.p_random() & 1 == 0 {
                        PlatStatus::Up
                    } else {
                        PlatStatus::Down
                    };
                    self.sector_sound(sector, SfxName::pstart);
                }
                PlatKind::GenLift | PlatKind::GenPerpetual => {
                    debug!("ev_do_plat: {kind:?} is started elsewhere");
                    continue;
                }
            }
            self.add_mover(sector, Thinker::Platform(plat));
        }
        rtn
    }

    /// P_ActivateInStasis
    pub(crate) fn activate_in_stasis_plat(&mut self, line: usize) -> bool {
        let tag = self.map_data.linedefs[line].tag;
        let mut rtn = false;
        for (_, thinker) in self.thinkers.iter_mut() {
            if let Some(plat) = thinker.platform() {
                if plat.tag == tag && plat.status == PlatStatus::InStasis {
                    plat.status = plat.old_status;
                    rtn = true;
                }
            }
        }
        rtn
    }

    /// EV_StopPlat
    pub fn ev_stop_plat(&mut self, line: usize) {
        let tag = self.map_data.linedefs[line].tag;
        for (id, thinker) in self.thinkers.iter_mut() {
            if let Some(plat) = thinker.platform() {
                if plat.tag == tag && plat.status != PlatStatus::InStasis {
                    trace!("Stopping platform {id:?}");
                    plat.old_status = plat.status;
                    plat.status = PlatStatus::InStasis;
                }
            }
        }
    }
}
