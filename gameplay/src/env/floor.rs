//! Floor movers: raise and lower, stair builders and donuts.
//!
//! Doom source name `p_floor`

use log::debug;
use serde::{Deserialize, Serialize};

use crate::info::SfxName;
use crate::level::Level;
use crate::thinker::Thinker;

use super::specials::{
    Plane, PlaneChange, PlaneResult, find_highest_floor_surrounding, find_lowest_ceiling_surrounding,
    find_lowest_floor_surrounding, find_model_floor_sector, find_next_highest_floor, find_shortest_lower_around,
};

pub const FLOORSPEED: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloorKind {
    /// lower floor to highest surrounding floor
    LowerFloor,
    /// lower floor to lowest surrounding floor
    LowerFloorToLowest,
    /// lower floor to highest surrounding floor VERY FAST
    TurboLower,
    /// raise floor to lowest surrounding CEILING
    RaiseFloor,
    /// raise floor to next highest surrounding floor
    RaiseFloorToNearest,
    /// raise floor to shortest height texture around it
    RaiseToTexture,
    /// lower floor to lowest surrounding floor and change floorpic
    LowerAndChange,
    RaiseFloor24,
    RaiseFloor24AndChange,
    RaiseFloorCrush,
    /// raise to next highest floor, turbo-speed
    RaiseFloorTurbo,
    DonutRaise,
    RaiseFloor512,
    BuildStair,
    Generalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StairKind {
    /// slowly build by 8
    Build8,
    /// quickly build by 16
    Turbo16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorMove {
    pub sector: usize,
    pub kind: FloorKind,
    pub crush: bool,
    pub direction: i32,
    pub floordestheight: f32,
    pub speed: f32,
    /// Flat and special given to the sector once the floor stops
    pub change: Option<PlaneChange>,
}

impl FloorMove {
    pub(crate) fn new(sector: usize, kind: FloorKind, direction: i32, speed: f32, floordestheight: f32) -> Self {
        Self {
            sector,
            kind,
            crush: false,
            direction,
            floordestheight,
            speed,
            change: None,
        }
    }

    /// T_MoveFloor
    pub fn think(&mut self, level: &mut Level) -> bool {
        let res = level.move_plane(
            self.sector,
            self.speed,
            self.floordestheight,
            self.crush,
            Plane::Floor,
            self.direction,
        );

        if level.level_time & 7 == 0 {
            level.sector_sound(self.sector, SfxName::stnmov);
        }

        if res == PlaneResult::PastDest {
            if let Some(change) = self.change {
                level.apply_plane_change(self.sector, Plane::Floor, change);
            }
            level.sector_sound(self.sector, SfxName::pstop);
            level.finish_mover(self.sector);
            return false;
        }
        true
    }
}

impl Level {
    /// EV_DoFloor
    pub fn ev_do_floor(&mut self, line: usize, kind: FloorKind) -> bool {
        let mut rtn = false;
        for sector in self.activation_sectors(line, false) {
            // ALREADY MOVING?  IF SO, KEEP GOING...
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            let sec = &self.map_data.sectors[sector];
            let (floorheight, ceilingheight) = (sec.floorheight, sec.ceilingheight);
            let map = &self.map_data;
            let mut floor = FloorMove::new(sector, kind, 1, FLOORSPEED, floorheight);

            match kind {
                FloorKind::LowerFloor => {
                    floor.direction = -1;
                    floor.floordestheight = find_highest_floor_surrounding(map, sector);
                }
                FloorKind::LowerFloorToLowest => {
                    floor.direction = -1;
                    floor.floordestheight = find_lowest_floor_surrounding(map, sector);
                }
                FloorKind::TurboLower => {
                    floor.direction = -1;
                    floor.speed = FLOORSPEED * 4.0;
                    floor.floordestheight = find_highest_floor_surrounding(map, sector);
                    if floor.floordestheight != floorheight {
                        floor.floordestheight += 8.0;
                    }
                }
                FloorKind::RaiseFloorCrush | FloorKind::RaiseFloor => {
                    floor.crush = kind == FloorKind::RaiseFloorCrush;
                    floor.floordestheight = find_lowest_ceiling_surrounding(map, sector).min(ceilingheight);
                    if floor.crush {
                        floor.floordestheight -= 8.0;
                    }
                }
                FloorKind::RaiseFloorTurbo => {
                    floor.speed = FLOORSPEED * 4.0;
                    floor.floordestheight = find_next_highest_floor(map, sector, floorheight);
                }
                FloorKind::RaiseFloorToNearest => {
                    floor.floordestheight = find_next_highest_floor(map, sector, floorheight);
                }
                FloorKind::RaiseFloor24 => floor.floordestheight = floorheight + 24.0,
                FloorKind::RaiseFloor512 => floor.floordestheight = floorheight + 512.0,
                FloorKind::RaiseFloor24AndChange => {
                    floor.floordestheight = floorheight + 24.0;
                    let front = &map.sectors[map.linedefs[line].frontsector];
                    let change = PlaneChange {
                        pic: front.floorpic,
                        special: Some(front.special),
                    };
                    self.apply_plane_change(sector, Plane::Floor, change);
                }
                FloorKind::RaiseToTexture => {
                    floor.floordestheight =
                        floorheight + find_shortest_lower_around(map, &self.pic_data, sector);
                }
                FloorKind::LowerAndChange => {
                    floor.direction = -1;
                    floor.floordestheight = find_lowest_floor_surrounding(map, sector);
                    let model = find_model_floor_sector(map, sector, floor.floordestheight).unwrap_or(sector);
                    let model = &map.sectors[model];
                    floor.change = Some(PlaneChange {
                        pic: model.floorpic,
                        special: Some(model.special),
                    });
                }
                FloorKind::DonutRaise | FloorKind::BuildStair | FloorKind::Generalized => {
                    debug!("ev_do_floor: {kind:?} is started elsewhere");
                    continue;
                }
            }
            rtn = true;
            self.add_mover(sector, Thinker::FloorMove(floor));
        }
        rtn
    }

    /// EV_BuildStairs
    pub fn ev_build_stairs(&mut self, line: usize, kind: StairKind) -> bool {
        let (speed, stairsize, crush) = match kind {
            StairKind::Build8 => (FLOORSPEED / 4.0, 8.0, false),
            StairKind::Turbo16 => (FLOORSPEED * 4.0, 16.0, true),
        };
        let sectors = self.activation_sectors(line, false);
        self.build_stairs(sectors, 1, speed, stairsize, false, crush)
    }

    /// Step each starting sector by `stairsize`, then keep going through two
    /// sided lines to the sector behind while it has the same floor flat.
    ///
    /// The step height accumulates even past a sector that is already moving,
    /// so a second staircase sharing sectors with the first carries on from
    /// the combined height.
    pub(crate) fn build_stairs(
        &mut self,
        sectors: Vec<usize>,
        direction: i32,
        speed: f32,
        stairsize: f32,
        ignore_texture: bool,
        crush: bool,
    ) -> bool {
        let step = stairsize * direction as f32;
        let mut rtn = false;
        for start in sectors {
            if self.map_data.sectors[start].specialdata.is_some() {
                continue;
            }
            rtn = true;
            let mut sector = start;
            let mut height = self.map_data.sectors[start].floorheight + step;
            let texture = self.map_data.sectors[start].floorpic;
            let mut floor = FloorMove::new(sector, FloorKind::BuildStair, direction, speed, height);
            floor.crush = crush;
            self.add_mover(sector, Thinker::FloorMove(floor));

            // Find next sector to raise
            // 1. Find 2-sided line with same sector side[0]
            // 2. Other side is the next sector to raise
            loop {
                let mut next = None;
                for &l in self.map_data.sectors[sector].lines.iter() {
                    let ld = &self.map_data.linedefs[l];
                    if !ld.is_two_sided() || ld.frontsector != sector {
                        continue;
                    }
                    let Some(back) = ld.backsector else {
                        continue;
                    };
                    if !ignore_texture && self.map_data.sectors[back].floorpic != texture {
                        continue;
                    }
                    height += step;
                    if self.map_data.sectors[back].specialdata.is_some() {
                        continue;
                    }
                    next = Some(back);
                    break;
                }
                let Some(back) = next else {
                    break;
                };
                sector = back;
                let mut floor = FloorMove::new(sector, FloorKind::BuildStair, direction, speed, height);
                floor.crush = crush;
                self.add_mover(sector, Thinker::FloorMove(floor));
            }
        }
        rtn
    }

    /// EV_DoDonut
    ///
    /// Lower the tagged sector (the hole) and raise the ring around it to the
    /// floor outside the ring, taking its flat.
    pub fn ev_do_donut(&mut self, line: usize) -> bool {
        let mut rtn = false;
        for s1 in self.activation_sectors(line, false) {
            // ALREADY MOVING?  IF SO, KEEP GOING...
            if self.map_data.sectors[s1].specialdata.is_some() {
                continue;
            }
            let Some(&first) = self.map_data.sectors[s1].lines.first() else {
                continue;
            };
            let Some(s2) = self.map_data.next_sector(first, s1) else {
                continue;
            };
            if self.map_data.sectors[s2].specialdata.is_some() {
                continue;
            }

            let outside = self.map_data.sectors[s2].lines.iter().find_map(|&l| {
                let ld = &self.map_data.linedefs[l];
                ld.backsector.filter(|&b| ld.is_two_sided() && b != s1)
            });
            let Some(s3) = outside else {
                continue;
            };
            let (dest, pic) = {
                let s3 = &self.map_data.sectors[s3];
                (s3.floorheight, s3.floorpic)
            };
            rtn = true;

            // Spawn rising slime
            let mut ring = FloorMove::new(s2, FloorKind::DonutRaise, 1, FLOORSPEED / 2.0, dest);
            ring.change = Some(PlaneChange { pic, special: Some(0) });
            self.add_mover(s2, Thinker::FloorMove(ring));

            // Spawn lowering donut-hole
            let hole = FloorMove::new(s1, FloorKind::LowerFloor, -1, FLOORSPEED / 2.0, dest);
            self.add_mover(s1, Thinker::FloorMove(hole));
        }
        rtn
    }
}
