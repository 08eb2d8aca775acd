//! Sector light effects and the line specials that switch lights.
//!
//! Doom source name `p_lights`

use serde::{Deserialize, Serialize};

use crate::events::LevelEvent;
use crate::level::Level;
use crate::thinker::Thinker;

use super::specials::{find_max_light_surrounding, find_min_light_surrounding};

const STROBEBRIGHT: i32 = 5;
pub const FASTDARK: i32 = 15;
pub const SLOWDARK: i32 = 35;
const GLOWSPEED: i32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireFlicker {
    pub sector: usize,
    pub count: i32,
    pub max_light: i32,
    pub min_light: i32,
}

impl FireFlicker {
    /// T_FireFlicker
    pub fn think(&mut self, level: &mut Level) -> bool {
        self.count -= 1;
        if self.count != 0 {
            return true;
        }

        let amount = (level.rng.p_random() & 3) * 16;
        let light = if level.map_data.sectors[self.sector].lightlevel - amount < self.min_light {
            self.min_light
        } else {
            self.max_light - amount
        };
        level.set_light(self.sector, light);
        self.count = 4;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightFlash {
    pub sector: usize,
    pub count: i32,
    pub max_light: i32,
    pub min_light: i32,
    pub max_time: i32,
    pub min_time: i32,
}

impl LightFlash {
    /// T_LightFlash
    ///
    /// Broken light flickering between its level and the darkest neighbour
    pub fn think(&mut self, level: &mut Level) -> bool {
        self.count -= 1;
        if self.count != 0 {
            return true;
        }

        if level.map_data.sectors[self.sector].lightlevel == self.max_light {
            level.set_light(self.sector, self.min_light);
            self.count = (level.rng.p_random() & self.min_time) + 1;
        } else {
            level.set_light(self.sector, self.max_light);
            self.count = (level.rng.p_random() & self.max_time) + 1;
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrobeFlash {
    pub sector: usize,
    pub count: i32,
    pub min_light: i32,
    pub max_light: i32,
    pub dark_time: i32,
    pub bright_time: i32,
}

impl StrobeFlash {
    /// T_StrobeFlash
    pub fn think(&mut self, level: &mut Level) -> bool {
        self.count -= 1;
        if self.count != 0 {
            return true;
        }

        if level.map_data.sectors[self.sector].lightlevel == self.min_light {
            level.set_light(self.sector, self.max_light);
            self.count = self.bright_time;
        } else {
            level.set_light(self.sector, self.min_light);
            self.count = self.dark_time;
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub sector: usize,
    pub min_light: i32,
    pub max_light: i32,
    pub direction: i32,
}

impl Glow {
    /// T_Glow
    pub fn think(&mut self, level: &mut Level) -> bool {
        let mut light = level.map_data.sectors[self.sector].lightlevel;
        match self.direction {
            -1 => {
                // DOWN
                light -= GLOWSPEED;
                if light <= self.min_light {
                    light += GLOWSPEED;
                    self.direction = 1;
                }
            }
            1 => {
                // UP
                light += GLOWSPEED;
                if light >= self.max_light {
                    light -= GLOWSPEED;
                    self.direction = -1;
                }
            }
            _ => {}
        }
        level.set_light(self.sector, light);
        true
    }
}

impl Level {
    /// Change a sector's light level and tell observers
    pub fn set_light(&mut self, sector: usize, light: i32) {
        let sec = &mut self.map_data.sectors[sector];
        if sec.lightlevel != light {
            sec.lightlevel = light;
            self.events.emit(LevelEvent::SectorLightChanged { sector, light });
        }
    }

    /// P_SpawnFireFlicker
    pub(crate) fn spawn_fire_flicker(&mut self, sector: usize) {
        // Note that we are resetting sector attributes.
        // Nothing special about it during gameplay.
        let sec = &mut self.map_data.sectors[sector];
        sec.special = 0;
        let max_light = sec.lightlevel;
        let light = FireFlicker {
            sector,
            count: 4,
            max_light,
            min_light: find_min_light_surrounding(&self.map_data, sector, max_light) + 16,
        };
        self.add_thinker(Thinker::FireFlicker(light));
    }

    /// P_SpawnLightFlash
    pub(crate) fn spawn_light_flash(&mut self, sector: usize) {
        let sec = &mut self.map_data.sectors[sector];
        sec.special = 0;
        let max_light = sec.lightlevel;
        let light = LightFlash {
            sector,
            count: (self.rng.p_random() & 64) + 1,
            max_light,
            min_light: find_min_light_surrounding(&self.map_data, sector, max_light),
            max_time: 64,
            min_time: 7,
        };
        self.add_thinker(Thinker::LightFlash(light));
    }

    /// P_SpawnStrobeFlash
    ///
    /// `in_sync` strobes all start together, others start at a random
    /// point.
    pub(crate) fn spawn_strobe_flash(&mut self, sector: usize, fast_or_slow: i32, in_sync: bool) {
        let sec = &mut self.map_data.sectors[sector];
        sec.special = 0;
        let max_light = sec.lightlevel;
        let mut min_light = find_min_light_surrounding(&self.map_data, sector, max_light);
        if min_light == max_light {
            min_light = 0;
        }
        let count = if in_sync {
            1
        } else {
            (self.rng.p_random() & 7) + 1
        };
        let light = StrobeFlash {
            sector,
            count,
            min_light,
            max_light,
            dark_time: fast_or_slow,
            bright_time: STROBEBRIGHT,
        };
        self.add_thinker(Thinker::StrobeFlash(light));
    }

    /// P_SpawnGlowingLight
    pub(crate) fn spawn_glow(&mut self, sector: usize) {
        let sec = &mut self.map_data.sectors[sector];
        sec.special = 0;
        let max_light = sec.lightlevel;
        let light = Glow {
            sector,
            min_light: find_min_light_surrounding(&self.map_data, sector, max_light),
            max_light,
            direction: -1,
        };
        self.add_thinker(Thinker::Glow(light));
    }

    /// EV_StartLightStrobing
    ///
    /// Start strobing lights (usually from a trigger)
    pub fn ev_start_light_strobing(&mut self, line: usize) {
        for sector in self.activation_sectors(line, false) {
            if self.map_data.sectors[sector].specialdata.is_some() {
                continue;
            }
            self.spawn_strobe_flash(sector, SLOWDARK, false);
        }
    }

    /// EV_TurnTagLightsOff
    ///
    /// Set each tagged sector to the darkest of its neighbours.
    pub fn ev_turn_tag_lights_off(&mut self, line: usize) {
        for sector in self.activation_sectors(line, false) {
            let own = self.map_data.sectors[sector].lightlevel;
            let min = find_min_light_surrounding(&self.map_data, sector, own);
            self.set_light(sector, min);
        }
    }

    /// EV_LightTurnOn
    ///
    /// Set the tagged sectors to `bright`, or to their brightest neighbour if
    /// `bright` is 0.
    pub fn ev_light_turn_on(&mut self, line: usize, bright: i32) {
        for sector in self.activation_sectors(line, false) {
            let light = if bright == 0 {
                find_max_light_surrounding(&self.map_data, sector)
            } else {
                bright
            };
            self.set_light(sector, light);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_bounces_between_limits() {
        let mut glow = Glow {
            sector: 0,
            min_light: 96,
            max_light: 160,
            direction: -1,
        };
        // stepping without a level, the same sums the thinker uses
        let mut light = 160;
        let mut seen = Vec::new();
        for _ in 0..20 {
            match glow.direction {
                -1 => {
                    light -= GLOWSPEED;
                    if light <= glow.min_light {
                        light += GLOWSPEED;
                        glow.direction = 1;
                    }
                }
                _ => {
                    light += GLOWSPEED;
                    if light >= glow.max_light {
                        light -= GLOWSPEED;
                        glow.direction = -1;
                    }
                }
            }
            seen.push(light);
        }
        assert!(seen.iter().all(|l| (96..=160).contains(l)));
        assert!(seen.contains(&104));
    }
}
