use serde::{Deserialize, Serialize};

/// Tics per second
pub const TICRATE: i32 = 35;

pub const MELEERANGE: f32 = 64.0;
pub const MISSILERANGE: f32 = 32.0 * 64.0;
pub const FLOATSPEED: f32 = 4.0;

/// Used as a z value to spawn on the floor
pub const ONFLOORZ: f32 = f32::MIN;
/// Used as a z value to spawn hanging from the ceiling
pub const ONCEILINGZ: f32 = f32::MAX;
pub const MAXHEALTH: i32 = 100;
pub const VIEWHEIGHT: f32 = 41.0;
/// Largest radius of any thing. Trace broad-phase widens by this so things
/// whose centre is in a neighbouring leaf are still found.
pub const MAXRADIUS: f32 = 32.0;
pub const USERANGE: f32 = 64.0;
/// Highest step a walker can climb
pub const MAXSTEP: f32 = 24.0;
/// Largest per-tic move on either axis
pub const MAXMOVE: f32 = 30.0;
pub const GRAVITY: f32 = 1.0;
/// 0xE800 in fixed point
pub const FRICTION: f32 = 0.906_25;
/// 0x1000 in fixed point
pub const STOPSPEED: f32 = 0.062_5;
/// Damage applied by telefrags
pub const TELEFRAG_DAMAGE: i32 = 10_000;

/// The maximum number of players, multiplayer/networking.
pub const MAXPLAYERS: usize = 4;

/// Deaf monsters/do not react to sound.
pub const MTF_AMBUSH: i16 = 8;
/// Thing does not appear in single player
pub const MTF_NOT_SINGLE: i16 = 16;
pub const MTF_EASY: i16 = 1;
pub const MTF_NORMAL: i16 = 2;
pub const MTF_HARD: i16 = 4;

/// Key cards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Bluecard,
    Yellowcard,
    Redcard,
    Blueskull,
    Yellowskull,
    Redskull,
}

pub const NUMCARDS: usize = 6;

impl Card {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The skull of the same colour (or the card if this is a skull)
    pub const fn counterpart(self) -> Card {
        match self {
            Card::Bluecard => Card::Blueskull,
            Card::Yellowcard => Card::Yellowskull,
            Card::Redcard => Card::Redskull,
            Card::Blueskull => Card::Bluecard,
            Card::Yellowskull => Card::Yellowcard,
            Card::Redskull => Card::Redcard,
        }
    }
}
