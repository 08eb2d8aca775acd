//! Ceiling movement thinker: raise, lower, crusher
//!
//! Doom source name `p_ceiling`

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::info::SfxName;
use crate::level::Level;
use crate::thinker::Thinker;

use super::specials::{Plane, PlaneChange, PlaneResult, find_highest_ceiling_surrounding};

pub const CEILSPEED: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CeilingKind {
    LowerToFloor,
    RaiseToHighest,
    LowerAndCrush,
    CrushAndRaise,
    FastCrushAndRaise,
    SilentCrushAndRaise,
    Generalized,
    GenCrusher,
    GenSilentCrusher,
}

impl CeilingKind {
    /// Crushers go back up once they reach the bottom
    fn is_crusher(self) -> bool {
        matches!(
            self,
            CeilingKind::CrushAndRaise
                | CeilingKind::FastCrushAndRaise
                | CeilingKind::SilentCrushAndRaise
                | CeilingKind::GenCrusher
                | CeilingKind::GenSilentCrusher
        )
    }

    fn is_silent(self) -> bool {
        matches!(self, CeilingKind::SilentCrushAndRaise | CeilingKind::GenSilentCrusher)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingMove {
    pub sector: usize,
    pub kind: CeilingKind,
    pub bottomheight: f32,
    pub topheight: f32,
    pub speed: f32,
    /// Speed to go back to after slowing down for a crush
    pub oldspeed: f32,
    pub crush: bool,
    /// 1 = up, 0 = waiting, -1 = down
    pub direction: i32,
    /// ID
    pub tag: i16,
    pub olddirection: i32,
    /// Flat and special given to the sector once the ceiling stops
    pub change: Option<PlaneChange>,
}

impl CeilingMove {
    pub(crate) fn new(sector: usize, kind: CeilingKind, tag: i16) -> Self {
        Self {
            sector,
            kind,
            bottomheight: 0.0,
            topheight: 0.0,
            speed: CEILSPEED,
            oldspeed: CEILSPEED,
            crush: false,
            direction: 0,
            tag,
            olddirection: 0,
            change: None,
        }
    }

    fn finish(&mut self, level: &mut Level) -> bool {
        if let Some(change) = self.change {
            level.apply_plane_change(self.sector, Plane::Ceiling, change);
        }
        level.finish_mover(self.sector);
        false
    }

    /// T_MoveCeiling
    pub fn think(&mut self, level: &mut Level) -> bool {
        let quiet_tick = level.level_time & 7 != 0;
        match self.direction {
            // IN STASIS
            0 => {}
            // UP
            1 => {
                let res =
                    level.move_plane(self.sector, self.speed, self.topheight, false, Plane::Ceiling, 1);
                if !quiet_tick && !self.kind.is_silent() {
                    level.sector_sound(self.sector, SfxName::stnmov);
                }
                if res == PlaneResult::PastDest {
                    if self.kind.is_crusher() {
                        if self.kind.is_silent() {
                            level.sector_sound(self.sector, SfxName::pstop);
                        }
                        self.direction = -1;
                    } else {
                        return self.finish(level);
                    }
                }
            }
            // DOWN
            -1 => {
                let res = level.move_plane(
                    self.sector,
                    self.speed,
                    self.bottomheight,
                    self.crush,
                    Plane::Ceiling,
                    -1,
                );
                if !quiet_tick && !self.kind.is_silent() {
                    level.sector_sound(self.sector, SfxName::stnmov);
                }
                match res {
                    PlaneResult::PastDest => {
                        if self.kind.is_crusher() {
                            if self.kind.is_silent() {
                                level.sector_sound(self.sector, SfxName::pstop);
                            }
                            self.speed = self.oldspeed;
                            self.direction = 1;
                        } else {
                            return self.finish(level);
                        }
                    }
                    PlaneResult::Crushed => match self.kind {
                        CeilingKind::CrushAndRaise | CeilingKind::LowerAndCrush => {
                            self.speed = CEILSPEED / 8.0;
                        }
                        CeilingKind::SilentCrushAndRaise
                        | CeilingKind::GenCrusher
                        | CeilingKind::GenSilentCrusher => {
                            if self.oldspeed < CEILSPEED * 3.0 {
                                self.speed = CEILSPEED / 8.0;
                            }
                        }
                        _ => {}
                    },
                    PlaneResult::Blocked => {
                        if self.kind.is_crusher() {
                            debug!("Crusher in sector {} blocked, going back up", self.sector);
                            self.speed = self.oldspeed;
                            self.direction = 1;
                        }
                    }
                    PlaneResult::Ok => {}
                }
            }
            _ => {}
        }
        true
    }
}

impl Level {
    /// EV_DoCeiling
    ///
    /// Move a ceiling up/down and all around!
    pub fn ev_do_ceiling(&mut self, line: usize, kind: CeilingKind) -> bool {
        let mut rtn = false;
        if matches!(
            kind,
            CeilingKind::FastCrushAndRaise | CeilingKind::SilentCrushAndRaise | CeilingKind::CrushAndRaise
        ) {
            rtn = self.activate_in_stasis_ceiling(line);
        }

        let tag = self.map_data.linedefs[line].tag;
        for sector in self.activation_sectors(line, false) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            let sec = &self.map_data.sectors[sector];
            let (floorheight, ceilingheight) = (sec.floorheight, sec.ceilingheight);
            let mut ceiling = CeilingMove::new(sector, kind, tag);

            match kind {
                CeilingKind::FastCrushAndRaise => {
                    ceiling.crush = true;
                    ceiling.topheight = ceilingheight;
                    ceiling.bottomheight = floorheight + 8.0;
                    ceiling.direction = -1;
                    ceiling.speed = CEILSPEED * 2.0;
                }
                CeilingKind::SilentCrushAndRaise | CeilingKind::CrushAndRaise => {
                    ceiling.crush = true;
                    ceiling.topheight = ceilingheight;
                    ceiling.bottomheight = floorheight + 8.0;
                    ceiling.direction = -1;
                }
                CeilingKind::LowerAndCrush => {
                    ceiling.crush = true;
                    ceiling.topheight = ceilingheight;
                    ceiling.bottomheight = floorheight + 8.0;
                    ceiling.direction = -1;
                }
                CeilingKind::LowerToFloor => {
                    ceiling.topheight = ceilingheight;
                    ceiling.bottomheight = floorheight;
                    ceiling.direction = -1;
                }
                CeilingKind::RaiseToHighest => {
                    ceiling.topheight = find_highest_ceiling_surrounding(&self.map_data, sector);
                    ceiling.direction = 1;
                }
                CeilingKind::Generalized | CeilingKind::GenCrusher | CeilingKind::GenSilentCrusher => {
                    debug!("ev_do_ceiling: {kind:?} is started elsewhere");
                    continue;
                }
            }
            ceiling.oldspeed = ceiling.speed;
            rtn = true;
            self.add_mover(sector, Thinker::CeilingMove(ceiling));
        }
        rtn
    }

    /// P_ActivateInStasisCeiling
    ///
    /// Restart crushers stopped by a line with the same tag.
    pub(crate) fn activate_in_stasis_ceiling(&mut self, line: usize) -> bool {
        let tag = self.map_data.linedefs[line].tag;
        let mut rtn = false;
        for (id, thinker) in self.thinkers.iter_mut() {
            if let Some(ceiling) = thinker.ceiling_move() {
                if ceiling.tag == tag && ceiling.direction == 0 {
                    trace!("Reactivating ceiling {id:?}");
                    ceiling.direction = ceiling.olddirection;
                    rtn = true;
                }
            }
        }
        rtn
    }

    /// EV_CeilingCrushStop
    ///
    /// Put moving ceilings with the line's tag in stasis.
    pub fn ev_ceiling_crush_stop(&mut self, line: usize) -> bool {
        let tag = self.map_data.linedefs[line].tag;
        let mut rtn = false;
        for (id, thinker) in self.thinkers.iter_mut() {
            if let Some(ceiling) = thinker.ceiling_move() {
                if ceiling.tag == tag && ceiling.direction != 0 {
                    trace!("Stopping ceiling {id:?}");
                    ceiling.olddirection = ceiling.direction;
                    ceiling.direction = 0;
                    rtn = true;
                }
            }
        }
        rtn
    }
}
