//! The classic line special table. Each special number maps to how it gets
//! triggered, who may trigger it, and the effect it starts.

use super::TriggerKind;
use super::ceiling::CeilingKind;
use super::doors::DoorKind;
use super::floor::{FloorKind, StairKind};
use super::platforms::PlatKind;
use crate::doom_def::Card;

/// Who may trigger a special
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Who {
    Players,
    /// Players and monsters
    Anyone,
    Monsters,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineAction {
    /// Door in the sector behind the line, may be interrupted
    ManualDoor,
    Door(DoorKind),
    LockedDoor(DoorKind, Card),
    Floor(FloorKind),
    Ceiling(CeilingKind),
    CeilingAndFloor(CeilingKind, FloorKind),
    CeilingStop,
    /// Platform kind and the raise amount for raise-and-change
    Plat(PlatKind, i32),
    PlatStop,
    Stairs(StairKind),
    Donut,
    Teleport { silent: bool },
    LineTeleport { reverse: bool },
    /// Light level to set, 0 means the brightest neighbour
    LightTurnOn(i32),
    LightsOff,
    StartStrobing,
    Exit { secret: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSpecialDef {
    pub trigger: TriggerKind,
    /// False if the line loses its special after use
    pub repeat: bool,
    pub who: Who,
    pub action: LineAction,
}

const fn def(trigger: TriggerKind, repeat: bool, action: LineAction) -> LineSpecialDef {
    LineSpecialDef {
        trigger,
        repeat,
        who: Who::Players,
        action,
    }
}

const fn monsters_too(mut d: LineSpecialDef) -> LineSpecialDef {
    d.who = Who::Anyone;
    d
}

const fn monsters_only(mut d: LineSpecialDef) -> LineSpecialDef {
    d.who = Who::Monsters;
    d
}

/// Look up a classic special. `None` for zero, the scroller, generalized and
/// unknown numbers.
pub fn lookup(special: i16) -> Option<LineSpecialDef> {
    use CeilingKind as C;
    use DoorKind as D;
    use FloorKind as F;
    use LineAction as A;
    use PlatKind as P;
    use TriggerKind::{Gun, Push, Switch, Walk};

    let d = match special {
        // Manual doors
        1 => monsters_too(def(Push, true, A::ManualDoor)),
        26 | 27 | 28 | 117 => def(Push, true, A::ManualDoor),
        32 | 33 | 34 => monsters_too(def(Push, false, A::ManualDoor)),
        31 | 118 => def(Push, false, A::ManualDoor),

        // Walk once
        2 => def(Walk, false, A::Door(D::Open)),
        3 => def(Walk, false, A::Door(D::Close)),
        4 => monsters_too(def(Walk, false, A::Door(D::Normal))),
        5 => def(Walk, false, A::Floor(F::RaiseFloor)),
        6 => def(Walk, false, A::Ceiling(C::FastCrushAndRaise)),
        8 => def(Walk, false, A::Stairs(StairKind::Build8)),
        10 => monsters_too(def(Walk, false, A::Plat(P::DownWaitUpStay, 0))),
        12 => def(Walk, false, A::LightTurnOn(0)),
        13 => def(Walk, false, A::LightTurnOn(255)),
        16 => def(Walk, false, A::Door(D::Close30ThenOpen)),
        17 => def(Walk, false, A::StartStrobing),
        19 => def(Walk, false, A::Floor(F::LowerFloor)),
        22 => def(Walk, false, A::Plat(P::RaiseToNearestAndChange, 0)),
        25 => def(Walk, false, A::Ceiling(C::CrushAndRaise)),
        30 => def(Walk, false, A::Floor(F::RaiseToTexture)),
        35 => def(Walk, false, A::LightTurnOn(35)),
        36 => def(Walk, false, A::Floor(F::TurboLower)),
        37 => def(Walk, false, A::Floor(F::LowerAndChange)),
        38 => def(Walk, false, A::Floor(F::LowerFloorToLowest)),
        39 => monsters_too(def(Walk, false, A::Teleport { silent: false })),
        40 => def(Walk, false, A::CeilingAndFloor(C::RaiseToHighest, F::LowerFloorToLowest)),
        44 => def(Walk, false, A::Ceiling(C::LowerAndCrush)),
        52 => def(Walk, false, A::Exit { secret: false }),
        53 => def(Walk, false, A::Plat(P::PerpetualRaise, 0)),
        54 => def(Walk, false, A::PlatStop),
        56 => def(Walk, false, A::Floor(F::RaiseFloorCrush)),
        57 => def(Walk, false, A::CeilingStop),
        58 => def(Walk, false, A::Floor(F::RaiseFloor24)),
        59 => def(Walk, false, A::Floor(F::RaiseFloor24AndChange)),
        100 => def(Walk, false, A::Stairs(StairKind::Turbo16)),
        104 => def(Walk, false, A::LightsOff),
        108 => def(Walk, false, A::Door(D::BlazeRaise)),
        109 => def(Walk, false, A::Door(D::BlazeOpen)),
        110 => def(Walk, false, A::Door(D::BlazeClose)),
        119 => def(Walk, false, A::Floor(F::RaiseFloorToNearest)),
        121 => def(Walk, false, A::Plat(P::BlazeDWUS, 0)),
        124 => def(Walk, false, A::Exit { secret: true }),
        125 => monsters_only(def(Walk, false, A::Teleport { silent: false })),
        130 => def(Walk, false, A::Floor(F::RaiseFloorTurbo)),
        141 => def(Walk, false, A::Ceiling(C::SilentCrushAndRaise)),

        // Walk repeatable
        72 => def(Walk, true, A::Ceiling(C::LowerAndCrush)),
        73 => def(Walk, true, A::Ceiling(C::CrushAndRaise)),
        74 => def(Walk, true, A::CeilingStop),
        75 => def(Walk, true, A::Door(D::Close)),
        76 => def(Walk, true, A::Door(D::Close30ThenOpen)),
        77 => def(Walk, true, A::Ceiling(C::FastCrushAndRaise)),
        79 => def(Walk, true, A::LightTurnOn(35)),
        80 => def(Walk, true, A::LightTurnOn(0)),
        81 => def(Walk, true, A::LightTurnOn(255)),
        82 => def(Walk, true, A::Floor(F::LowerFloorToLowest)),
        83 => def(Walk, true, A::Floor(F::LowerFloor)),
        84 => def(Walk, true, A::Floor(F::LowerAndChange)),
        86 => def(Walk, true, A::Door(D::Open)),
        87 => def(Walk, true, A::Plat(P::PerpetualRaise, 0)),
        88 => monsters_too(def(Walk, true, A::Plat(P::DownWaitUpStay, 0))),
        89 => def(Walk, true, A::PlatStop),
        90 => def(Walk, true, A::Door(D::Normal)),
        91 => def(Walk, true, A::Floor(F::RaiseFloor)),
        92 => def(Walk, true, A::Floor(F::RaiseFloor24)),
        93 => def(Walk, true, A::Floor(F::RaiseFloor24AndChange)),
        94 => def(Walk, true, A::Floor(F::RaiseFloorCrush)),
        95 => def(Walk, true, A::Plat(P::RaiseToNearestAndChange, 0)),
        96 => def(Walk, true, A::Floor(F::RaiseToTexture)),
        97 => monsters_too(def(Walk, true, A::Teleport { silent: false })),
        98 => def(Walk, true, A::Floor(F::TurboLower)),
        105 => def(Walk, true, A::Door(D::BlazeRaise)),
        106 => def(Walk, true, A::Door(D::BlazeOpen)),
        107 => def(Walk, true, A::Door(D::BlazeClose)),
        120 => def(Walk, true, A::Plat(P::BlazeDWUS, 0)),
        126 => monsters_only(def(Walk, true, A::Teleport { silent: false })),
        128 => def(Walk, true, A::Floor(F::RaiseFloorToNearest)),
        129 => def(Walk, true, A::Floor(F::RaiseFloorTurbo)),

        // Silent and line to line teleporters
        207 => monsters_too(def(Walk, false, A::Teleport { silent: true })),
        208 => monsters_too(def(Walk, true, A::Teleport { silent: true })),
        243 => monsters_too(def(Walk, false, A::LineTeleport { reverse: false })),
        244 => monsters_too(def(Walk, true, A::LineTeleport { reverse: false })),
        262 => monsters_too(def(Walk, false, A::LineTeleport { reverse: true })),
        263 => monsters_too(def(Walk, true, A::LineTeleport { reverse: true })),
        264 => monsters_only(def(Walk, false, A::LineTeleport { reverse: true })),
        265 => monsters_only(def(Walk, true, A::LineTeleport { reverse: true })),
        266 => monsters_only(def(Walk, false, A::LineTeleport { reverse: false })),
        267 => monsters_only(def(Walk, true, A::LineTeleport { reverse: false })),
        268 => monsters_only(def(Walk, false, A::Teleport { silent: true })),
        269 => monsters_only(def(Walk, true, A::Teleport { silent: true })),

        // Switch once
        7 => def(Switch, false, A::Stairs(StairKind::Build8)),
        9 => def(Switch, false, A::Donut),
        11 => def(Switch, false, A::Exit { secret: false }),
        14 => def(Switch, false, A::Plat(P::RaiseAndChange, 32)),
        15 => def(Switch, false, A::Plat(P::RaiseAndChange, 24)),
        18 => def(Switch, false, A::Floor(F::RaiseFloorToNearest)),
        20 => def(Switch, false, A::Plat(P::RaiseToNearestAndChange, 0)),
        21 => def(Switch, false, A::Plat(P::DownWaitUpStay, 0)),
        23 => def(Switch, false, A::Floor(F::LowerFloorToLowest)),
        29 => def(Switch, false, A::Door(D::Normal)),
        41 => def(Switch, false, A::Ceiling(C::LowerToFloor)),
        49 => def(Switch, false, A::Ceiling(C::CrushAndRaise)),
        50 => def(Switch, false, A::Door(D::Close)),
        51 => def(Switch, false, A::Exit { secret: true }),
        55 => def(Switch, false, A::Floor(F::RaiseFloorCrush)),
        71 => def(Switch, false, A::Floor(F::TurboLower)),
        101 => def(Switch, false, A::Floor(F::RaiseFloor)),
        102 => def(Switch, false, A::Floor(F::LowerFloor)),
        103 => def(Switch, false, A::Door(D::Open)),
        111 => def(Switch, false, A::Door(D::BlazeRaise)),
        112 => def(Switch, false, A::Door(D::BlazeOpen)),
        113 => def(Switch, false, A::Door(D::BlazeClose)),
        122 => def(Switch, false, A::Plat(P::BlazeDWUS, 0)),
        127 => def(Switch, false, A::Stairs(StairKind::Turbo16)),
        131 => def(Switch, false, A::Floor(F::RaiseFloorTurbo)),
        133 => def(Switch, false, A::LockedDoor(D::BlazeOpen, Card::Bluecard)),
        135 => def(Switch, false, A::LockedDoor(D::BlazeOpen, Card::Redcard)),
        137 => def(Switch, false, A::LockedDoor(D::BlazeOpen, Card::Yellowcard)),
        140 => def(Switch, false, A::Floor(F::RaiseFloor512)),

        // Switch repeatable
        42 => def(Switch, true, A::Door(D::Close)),
        43 => def(Switch, true, A::Ceiling(C::LowerToFloor)),
        45 => def(Switch, true, A::Floor(F::LowerFloor)),
        60 => def(Switch, true, A::Floor(F::LowerFloorToLowest)),
        61 => def(Switch, true, A::Door(D::Open)),
        62 => def(Switch, true, A::Plat(P::DownWaitUpStay, 0)),
        63 => def(Switch, true, A::Door(D::Normal)),
        64 => def(Switch, true, A::Floor(F::RaiseFloor)),
        65 => def(Switch, true, A::Floor(F::RaiseFloorCrush)),
        66 => def(Switch, true, A::Plat(P::RaiseAndChange, 24)),
        67 => def(Switch, true, A::Plat(P::RaiseAndChange, 32)),
        68 => def(Switch, true, A::Plat(P::RaiseToNearestAndChange, 0)),
        69 => def(Switch, true, A::Floor(F::RaiseFloorToNearest)),
        70 => def(Switch, true, A::Floor(F::TurboLower)),
        99 => def(Switch, true, A::LockedDoor(D::BlazeOpen, Card::Bluecard)),
        114 => def(Switch, true, A::Door(D::BlazeRaise)),
        115 => def(Switch, true, A::Door(D::BlazeOpen)),
        116 => def(Switch, true, A::Door(D::BlazeClose)),
        123 => def(Switch, true, A::Plat(P::BlazeDWUS, 0)),
        132 => def(Switch, true, A::Floor(F::RaiseFloorTurbo)),
        134 => def(Switch, true, A::LockedDoor(D::BlazeOpen, Card::Redcard)),
        136 => def(Switch, true, A::LockedDoor(D::BlazeOpen, Card::Yellowcard)),
        138 => def(Switch, true, A::LightTurnOn(255)),
        139 => def(Switch, true, A::LightTurnOn(35)),

        // Gun
        24 => def(Gun, false, A::Floor(F::RaiseFloor)),
        46 => monsters_too(def(Gun, true, A::Door(D::Open))),
        47 => def(Gun, false, A::Plat(P::RaiseToNearestAndChange, 0)),
        197 => def(Gun, false, A::Exit { secret: false }),
        198 => def(Gun, false, A::Exit { secret: true }),

        _ => return None,
    };
    Some(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_triggers() {
        let d = lookup(1).unwrap();
        assert_eq!(d.trigger, TriggerKind::Push);
        assert!(d.repeat);
        assert_eq!(d.who, Who::Anyone);

        let d = lookup(31).unwrap();
        assert!(!d.repeat);
        assert_eq!(d.who, Who::Players);
    }

    #[test]
    fn monster_walk_lines() {
        for special in [39, 97, 125, 126, 4, 10, 88] {
            assert_ne!(lookup(special).unwrap().who, Who::Players, "special {special}");
        }
        assert_eq!(lookup(2).unwrap().who, Who::Players);
        assert_eq!(lookup(125).unwrap().who, Who::Monsters);
    }

    #[test]
    fn scroller_and_unknown_are_not_actions() {
        assert!(lookup(0).is_none());
        assert!(lookup(48).is_none());
        assert!(lookup(142).is_none());
    }

    #[test]
    fn gun_lines() {
        assert_eq!(lookup(46).unwrap().trigger, TriggerKind::Gun);
        assert!(lookup(46).unwrap().repeat);
        assert!(!lookup(24).unwrap().repeat);
    }
}
