//! All environment interaction stuff. Things like `Thinker`s that move parts of
//! the level or affect its appearance, lights, switches, and line specials

pub mod ceiling;
pub mod doors;
pub mod floor;
pub mod generalized;
pub mod lights;
pub mod line_specials;
pub mod platforms;
pub mod scroll;
pub mod specials;
pub mod switch;
pub mod teleport;

pub use specials::{Plane, PlaneResult, SectorFit};

/// How a line special got activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Used by a thing pressing on the line
    Push,
    /// Used, and the line has a switch texture to flip
    Switch,
    /// The line was crossed
    Walk,
    /// The line was shot by a hitscan attack
    Gun,
}

impl TriggerKind {
    /// True if an activation of kind `by` may start a special defined with
    /// this kind. Pressing use works for both push and switch lines.
    #[inline]
    pub fn accepts(self, by: TriggerKind) -> bool {
        match (self, by) {
            (TriggerKind::Push | TriggerKind::Switch, TriggerKind::Push | TriggerKind::Switch) => true,
            (a, b) => a == b,
        }
    }
}
