//! Static thing and state tables.
//!
//! Only the kinds this core needs to exercise its rules are carried: the
//! player, a few monster classes, projectiles, the teleport landing marker and
//! a handful of pickups and decorations.

mod map_object_info;
mod sounds;
mod states;

pub use map_object_info::MOBJINFO;
pub use sounds::SfxName;
pub use states::STATES;

use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpriteNum {
    PLAY,
    POSS,
    TROO,
    SARG,
    BOSS,
    BOS2,
    BAR1,
    BEXP,
    BAL1,
    MISL,
    TFOG,
    PUFF,
    BLUD,
    POL5,
    COLU,
    STIM,
    MEDI,
    ARM1,
    BKEY,
    RKEY,
    YKEY,
    BSKU,
    RSKU,
    YSKU,
}

/// Functions run on entering a state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StateAction {
    None,
    /// Drop the solid flag so the corpse can be walked over
    Fall,
    Scream,
    XScream,
    Pain,
    /// Radius damage from the thing's position
    Explode,
}

#[derive(Debug, Clone, Copy)]
pub struct State {
    /// Sprite to use
    pub sprite: SpriteNum,
    /// The frame within this sprite to show for the state
    pub frame: u32,
    /// How many tics this state takes. -1 is forever
    pub tics: i32,
    pub action: StateAction,
    /// The state that should come after this. Can be looped.
    pub next_state: StateNum,
}

impl State {
    pub const fn new(
        sprite: SpriteNum,
        frame: u32,
        tics: i32,
        action: StateAction,
        next_state: StateNum,
    ) -> Self {
        Self {
            sprite,
            frame,
            tics,
            action,
            next_state,
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateNum {
    S_NULL,
    S_PLAY,
    S_PLAY_RUN1,
    S_PLAY_RUN2,
    S_PLAY_PAIN,
    S_PLAY_DIE1,
    S_PLAY_DIE2,
    S_PLAY_DIE3,
    S_PLAY_DIE4,
    S_PLAY_XDIE1,
    S_PLAY_XDIE2,
    S_PLAY_XDIE3,
    S_POSS_STND,
    S_POSS_STND2,
    S_POSS_RUN1,
    S_POSS_RUN2,
    S_POSS_PAIN,
    S_POSS_DIE1,
    S_POSS_DIE2,
    S_POSS_DIE3,
    S_POSS_DIE4,
    S_POSS_XDIE1,
    S_POSS_XDIE2,
    S_POSS_XDIE3,
    S_TROO_STND,
    S_TROO_STND2,
    S_TROO_RUN1,
    S_TROO_RUN2,
    S_TROO_PAIN,
    S_TROO_DIE1,
    S_TROO_DIE2,
    S_TROO_DIE3,
    S_TROO_DIE4,
    S_SARG_STND,
    S_SARG_STND2,
    S_SARG_RUN1,
    S_SARG_RUN2,
    S_SARG_PAIN,
    S_SARG_DIE1,
    S_SARG_DIE2,
    S_SARG_DIE3,
    S_BOSS_STND,
    S_BOSS_STND2,
    S_BOSS_RUN1,
    S_BOSS_RUN2,
    S_BOSS_PAIN,
    S_BOSS_DIE1,
    S_BOSS_DIE2,
    S_BOSS_DIE3,
    S_BOS2_STND,
    S_BOS2_STND2,
    S_BOS2_RUN1,
    S_BOS2_RUN2,
    S_BOS2_PAIN,
    S_BOS2_DIE1,
    S_BOS2_DIE2,
    S_BOS2_DIE3,
    S_BAR1,
    S_BAR2,
    S_BEXP,
    S_BEXP2,
    S_BEXP3,
    S_BEXP4,
    S_BEXP5,
    S_TBALL1,
    S_TBALL2,
    S_TBALLX1,
    S_TBALLX2,
    S_TBALLX3,
    S_ROCKET,
    S_EXPLODE1,
    S_EXPLODE2,
    S_EXPLODE3,
    S_TFOG,
    S_TFOG2,
    S_PUFF1,
    S_PUFF2,
    S_BLOOD1,
    S_BLOOD2,
    S_GIBS,
    S_COLU,
    S_STIM,
    S_MEDI,
    S_ARM1,
    S_ARM1A,
    S_BKEY,
    S_BKEY2,
    S_RKEY,
    S_RKEY2,
    S_YKEY,
    S_YKEY2,
    S_BSKULL,
    S_BSKULL2,
    S_RSKULL,
    S_RSKULL2,
    S_YSKULL,
    S_YSKULL2,
    NUMSTATES,
}

impl StateNum {
    #[inline]
    pub fn state(self) -> &'static State {
        &STATES[self as usize]
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapObjKind {
    MT_PLAYER,
    MT_POSSESSED,
    MT_TROOP,
    MT_SERGEANT,
    MT_BRUISER,
    MT_KNIGHT,
    MT_BARREL,
    MT_TROOPSHOT,
    MT_ROCKET,
    MT_TELEPORTMAN,
    MT_TFOG,
    MT_PUFF,
    MT_BLOOD,
    MT_GIBS,
    MT_COLUMN,
    MT_STIM,
    MT_MEDI,
    MT_GREENARMOR,
    MT_BLUECARD,
    MT_REDCARD,
    MT_YELLOWCARD,
    MT_BLUESKULL,
    MT_REDSKULL,
    MT_YELLOWSKULL,
    NUMMOBJTYPES,
}

impl MapObjKind {
    #[inline]
    pub fn info(self) -> &'static MapObjInfo {
        &MOBJINFO[self as usize]
    }

    /// Find the kind spawned by a `THINGS` record type
    pub fn from_doomednum(num: i16) -> Option<MapObjKind> {
        MOBJINFO
            .iter()
            .position(|i| num > 0 && i.doomednum == num as i32)
            .map(|i| ALL_KINDS[i])
    }
}

const ALL_KINDS: [MapObjKind; MapObjKind::NUMMOBJTYPES as usize] = [
    MapObjKind::MT_PLAYER,
    MapObjKind::MT_POSSESSED,
    MapObjKind::MT_TROOP,
    MapObjKind::MT_SERGEANT,
    MapObjKind::MT_BRUISER,
    MapObjKind::MT_KNIGHT,
    MapObjKind::MT_BARREL,
    MapObjKind::MT_TROOPSHOT,
    MapObjKind::MT_ROCKET,
    MapObjKind::MT_TELEPORTMAN,
    MapObjKind::MT_TFOG,
    MapObjKind::MT_PUFF,
    MapObjKind::MT_BLOOD,
    MapObjKind::MT_GIBS,
    MapObjKind::MT_COLUMN,
    MapObjKind::MT_STIM,
    MapObjKind::MT_MEDI,
    MapObjKind::MT_GREENARMOR,
    MapObjKind::MT_BLUECARD,
    MapObjKind::MT_REDCARD,
    MapObjKind::MT_YELLOWCARD,
    MapObjKind::MT_BLUESKULL,
    MapObjKind::MT_REDSKULL,
    MapObjKind::MT_YELLOWSKULL,
];

#[derive(Debug, Clone, Copy)]
pub struct MapObjInfo {
    pub doomednum: i32,
    pub spawnstate: StateNum,
    pub spawnhealth: i32,
    pub seestate: StateNum,
    pub seesound: SfxName,
    pub painstate: StateNum,
    pub painchance: i32,
    pub painsound: SfxName,
    pub deathstate: StateNum,
    pub xdeathstate: StateNum,
    pub deathsound: SfxName,
    pub speed: f32,
    pub radius: f32,
    pub height: f32,
    pub mass: i32,
    pub damage: i32,
    pub activesound: SfxName,
    pub flags: u32,
}

impl MapObjInfo {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        doomednum: i32,
        spawnstate: StateNum,
        spawnhealth: i32,
        seestate: StateNum,
        seesound: SfxName,
        painstate: StateNum,
        painchance: i32,
        painsound: SfxName,
        deathstate: StateNum,
        xdeathstate: StateNum,
        deathsound: SfxName,
        speed: f32,
        radius: f32,
        height: f32,
        mass: i32,
        damage: i32,
        activesound: SfxName,
        flags: u32,
    ) -> Self {
        Self {
            doomednum,
            spawnstate,
            spawnhealth,
            seestate,
            seesound,
            painstate,
            painchance,
            painsound,
            deathstate,
            xdeathstate,
            deathsound,
            speed,
            radius,
            height,
            mass,
            damage,
            activesound,
            flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_line_up() {
        assert_eq!(STATES.len(), StateNum::NUMSTATES as usize);
        assert_eq!(MOBJINFO.len(), MapObjKind::NUMMOBJTYPES as usize);
        for (i, k) in ALL_KINDS.iter().enumerate() {
            assert_eq!(*k as usize, i);
        }
        assert_eq!(
            MapObjKind::from_doomednum(3001),
            Some(MapObjKind::MT_TROOP)
        );
        assert_eq!(
            MapObjKind::from_doomednum(14),
            Some(MapObjKind::MT_TELEPORTMAN)
        );
        assert_eq!(MapObjKind::from_doomednum(1), None);
    }
}
