use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DoomArgError {
    #[error("invalid skill {0}, expected 0-4")]
    InvalidSkill(String),
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Baby = 0,
    Easy = 1,
    #[default]
    Medium = 2,
    Hard = 3,
    Nightmare = 4,
}

impl FromStr for Skill {
    type Err = DoomArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Skill::Baby),
            "1" => Ok(Skill::Easy),
            "2" => Ok(Skill::Medium),
            "3" => Ok(Skill::Hard),
            "4" => Ok(Skill::Nightmare),
            _ => Err(DoomArgError::InvalidSkill(s.to_owned())),
        }
    }
}

/// Options that change how a level spawns and plays
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub skill: Skill,
    pub episode: i32,
    pub map: i32,
    /// Doom II style map numbering (MAPxx). Affects a few specials such as
    /// monster telefrags on map 30.
    pub commercial: bool,
    pub no_monsters: bool,
    pub respawn_monsters: bool,
    pub fast_monsters: bool,
    pub deathmatch: u8,
    pub netgame: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            skill: Skill::default(),
            episode: 1,
            map: 1,
            commercial: false,
            no_monsters: false,
            respawn_monsters: false,
            fast_monsters: false,
            deathmatch: 0,
            netgame: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skill() {
        assert_eq!("3".parse::<Skill>().unwrap(), Skill::Hard);
        assert!("9".parse::<Skill>().is_err());
    }
}
