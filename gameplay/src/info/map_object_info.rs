use super::{MapObjInfo, MapObjKind, SfxName, StateNum};
use crate::thing::MapObjFlag;

const NUM_KINDS: usize = MapObjKind::NUMMOBJTYPES as usize;

pub const MOBJINFO: [MapObjInfo; NUM_KINDS] = [
    // MT_PLAYER
    MapObjInfo::new(
        -1,                     // doomednum
        StateNum::S_PLAY,       // spawnstate
        100,                    // spawnhealth
        StateNum::S_PLAY_RUN1,  // seestate
        SfxName::None,          // seesound
        StateNum::S_PLAY_PAIN,  // painstate
        255,                    // painchance
        SfxName::plpain,        // painsound
        StateNum::S_PLAY_DIE1,  // deathstate
        StateNum::S_PLAY_XDIE1, // xdeathstate
        SfxName::pldeth,        // deathsound
        0.0,                    // speed
        16.0,                   // radius
        56.0,                   // height
        100,                    // mass
        0,                      // damage
        SfxName::None,          // activesound
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::DropOff as u32
            | MapObjFlag::Pickup as u32
            | MapObjFlag::NotDeathmatch as u32, // flags
    ),
    // MT_POSSESSED
    MapObjInfo::new(
        3004,                   // doomednum
        StateNum::S_POSS_STND,  // spawnstate
        20,                     // spawnhealth
        StateNum::S_POSS_RUN1,  // seestate
        SfxName::posit1,        // seesound
        StateNum::S_POSS_PAIN,  // painstate
        200,                    // painchance
        SfxName::popain,        // painsound
        StateNum::S_POSS_DIE1,  // deathstate
        StateNum::S_POSS_XDIE1, // xdeathstate
        SfxName::podth1,        // deathsound
        8.0,                    // speed
        20.0,                   // radius
        56.0,                   // height
        100,                    // mass
        0,                      // damage
        SfxName::posact,        // activesound
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::CountKill as u32, // flags
    ),
    // MT_TROOP
    MapObjInfo::new(
        3001,                  // doomednum
        StateNum::S_TROO_STND, // spawnstate
        60,                    // spawnhealth
        StateNum::S_TROO_RUN1, // seestate
        SfxName::bgsit1,       // seesound
        StateNum::S_TROO_PAIN, // painstate
        200,                   // painchance
        SfxName::popain,       // painsound
        StateNum::S_TROO_DIE1, // deathstate
        StateNum::S_NULL,      // xdeathstate
        SfxName::bgdth1,       // deathsound
        8.0,                   // speed
        20.0,                  // radius
        56.0,                  // height
        100,                   // mass
        0,                     // damage
        SfxName::bgact,        // activesound
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::CountKill as u32, // flags
    ),
    // MT_SERGEANT
    MapObjInfo::new(
        3002,                  // doomednum
        StateNum::S_SARG_STND, // spawnstate
        150,                   // spawnhealth
        StateNum::S_SARG_RUN1, // seestate
        SfxName::sgtsit,       // seesound
        StateNum::S_SARG_PAIN, // painstate
        180,                   // painchance
        SfxName::dmpain,       // painsound
        StateNum::S_SARG_DIE1, // deathstate
        StateNum::S_NULL,      // xdeathstate
        SfxName::sgtdth,       // deathsound
        10.0,                  // speed
        30.0,                  // radius
        56.0,                  // height
        400,                   // mass
        0,                     // damage
        SfxName::dmact,        // activesound
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::CountKill as u32, // flags
    ),
    // MT_BRUISER
    MapObjInfo::new(
        3003,                  // doomednum
        StateNum::S_BOSS_STND, // spawnstate
        1000,                  // spawnhealth
        StateNum::S_BOSS_RUN1, // seestate
        SfxName::brssit,       // seesound
        StateNum::S_BOSS_PAIN, // painstate
        50,                    // painchance
        SfxName::dmpain,       // painsound
        StateNum::S_BOSS_DIE1, // deathstate
        StateNum::S_NULL,      // xdeathstate
        SfxName::brsdth,       // deathsound
        8.0,                   // speed
        24.0,                  // radius
        64.0,                  // height
        1000,                  // mass
        0,                     // damage
        SfxName::dmact,        // activesound
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::CountKill as u32, // flags
    ),
    // MT_KNIGHT
    MapObjInfo::new(
        69,                    // doomednum
        StateNum::S_BOS2_STND, // spawnstate
        500,                   // spawnhealth
        StateNum::S_BOS2_RUN1, // seestate
        SfxName::kntsit,       // seesound
        StateNum::S_BOS2_PAIN, // painstate
        50,                    // painchance
        SfxName::dmpain,       // painsound
        StateNum::S_BOS2_DIE1, // deathstate
        StateNum::S_NULL,      // xdeathstate
        SfxName::kntdth,       // deathsound
        8.0,                   // speed
        24.0,                  // radius
        64.0,                  // height
        1000,                  // mass
        0,                     // damage
        SfxName::dmact,        // activesound
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::CountKill as u32, // flags
    ),
    // MT_BARREL
    MapObjInfo::new(
        2035,             // doomednum
        StateNum::S_BAR1, // spawnstate
        20,               // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_BEXP, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::barexp,  // deathsound
        0.0,              // speed
        10.0,             // radius
        42.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::Solid as u32
            | MapObjFlag::Shootable as u32
            | MapObjFlag::NoBlood as u32, // flags
    ),
    // MT_TROOPSHOT
    MapObjInfo::new(
        -1,                  // doomednum
        StateNum::S_TBALL1,  // spawnstate
        1000,                // spawnhealth
        StateNum::S_NULL,    // seestate
        SfxName::firsht,     // seesound
        StateNum::S_NULL,    // painstate
        0,                   // painchance
        SfxName::None,       // painsound
        StateNum::S_TBALLX1, // deathstate
        StateNum::S_NULL,    // xdeathstate
        SfxName::firxpl,     // deathsound
        10.0,                // speed
        6.0,                 // radius
        8.0,                 // height
        100,                 // mass
        3,                   // damage
        SfxName::None,       // activesound
        MapObjFlag::NoBlockmap as u32
            | MapObjFlag::Missile as u32
            | MapObjFlag::DropOff as u32
            | MapObjFlag::NoGravity as u32, // flags
    ),
    // MT_ROCKET
    MapObjInfo::new(
        -1,                   // doomednum
        StateNum::S_ROCKET,   // spawnstate
        1000,                 // spawnhealth
        StateNum::S_NULL,     // seestate
        SfxName::rlaunc,      // seesound
        StateNum::S_NULL,     // painstate
        0,                    // painchance
        SfxName::None,        // painsound
        StateNum::S_EXPLODE1, // deathstate
        StateNum::S_NULL,     // xdeathstate
        SfxName::barexp,      // deathsound
        20.0,                 // speed
        11.0,                 // radius
        8.0,                  // height
        100,                  // mass
        20,                   // damage
        SfxName::None,        // activesound
        MapObjFlag::NoBlockmap as u32
            | MapObjFlag::Missile as u32
            | MapObjFlag::DropOff as u32
            | MapObjFlag::NoGravity as u32, // flags
    ),
    // MT_TELEPORTMAN
    MapObjInfo::new(
        14,               // doomednum
        StateNum::S_NULL, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::NoSector as u32
            | MapObjFlag::NoBlockmap as u32, // flags
    ),
    // MT_TFOG
    MapObjInfo::new(
        -1,               // doomednum
        StateNum::S_TFOG, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::NoBlockmap as u32
            | MapObjFlag::NoGravity as u32, // flags
    ),
    // MT_PUFF
    MapObjInfo::new(
        -1,                // doomednum
        StateNum::S_PUFF1, // spawnstate
        1000,              // spawnhealth
        StateNum::S_NULL,  // seestate
        SfxName::None,     // seesound
        StateNum::S_NULL,  // painstate
        0,                 // painchance
        SfxName::None,     // painsound
        StateNum::S_NULL,  // deathstate
        StateNum::S_NULL,  // xdeathstate
        SfxName::None,     // deathsound
        0.0,               // speed
        20.0,              // radius
        16.0,              // height
        100,               // mass
        0,                 // damage
        SfxName::None,     // activesound
        MapObjFlag::NoBlockmap as u32
            | MapObjFlag::NoGravity as u32, // flags
    ),
    // MT_BLOOD
    MapObjInfo::new(
        -1,                 // doomednum
        StateNum::S_BLOOD1, // spawnstate
        1000,               // spawnhealth
        StateNum::S_NULL,   // seestate
        SfxName::None,      // seesound
        StateNum::S_NULL,   // painstate
        0,                  // painchance
        SfxName::None,      // painsound
        StateNum::S_NULL,   // deathstate
        StateNum::S_NULL,   // xdeathstate
        SfxName::None,      // deathsound
        0.0,                // speed
        20.0,               // radius
        16.0,               // height
        100,                // mass
        0,                  // damage
        SfxName::None,      // activesound
        MapObjFlag::NoBlockmap as u32, // flags
    ),
    // MT_GIBS
    MapObjInfo::new(
        24,               // doomednum
        StateNum::S_GIBS, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        0,                // flags
    ),
    // MT_COLUMN
    MapObjInfo::new(
        2028,             // doomednum
        StateNum::S_COLU, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        16.0,             // radius
        48.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::Solid as u32, // flags
    ),
    // MT_STIM
    MapObjInfo::new(
        2011,             // doomednum
        StateNum::S_STIM, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::Special as u32, // flags
    ),
    // MT_MEDI
    MapObjInfo::new(
        2012,             // doomednum
        StateNum::S_MEDI, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::Special as u32, // flags
    ),
    // MT_GREENARMOR
    MapObjInfo::new(
        2018,             // doomednum
        StateNum::S_ARM1, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::Special as u32, // flags
    ),
    // MT_BLUECARD
    MapObjInfo::new(
        5,                // doomednum
        StateNum::S_BKEY, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::Special as u32
            | MapObjFlag::NotDeathmatch as u32, // flags
    ),
    // MT_REDCARD
    MapObjInfo::new(
        13,               // doomednum
        StateNum::S_RKEY, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::Special as u32
            | MapObjFlag::NotDeathmatch as u32, // flags
    ),
    // MT_YELLOWCARD
    MapObjInfo::new(
        6,                // doomednum
        StateNum::S_YKEY, // spawnstate
        1000,             // spawnhealth
        StateNum::S_NULL, // seestate
        SfxName::None,    // seesound
        StateNum::S_NULL, // painstate
        0,                // painchance
        SfxName::None,    // painsound
        StateNum::S_NULL, // deathstate
        StateNum::S_NULL, // xdeathstate
        SfxName::None,    // deathsound
        0.0,              // speed
        20.0,             // radius
        16.0,             // height
        100,              // mass
        0,                // damage
        SfxName::None,    // activesound
        MapObjFlag::Special as u32
            | MapObjFlag::NotDeathmatch as u32, // flags
    ),
    // MT_BLUESKULL
    MapObjInfo::new(
        40,                 // doomednum
        StateNum::S_BSKULL, // spawnstate
        1000,               // spawnhealth
        StateNum::S_NULL,   // seestate
        SfxName::None,      // seesound
        StateNum::S_NULL,   // painstate
        0,                  // painchance
        SfxName::None,      // painsound
        StateNum::S_NULL,   // deathstate
        StateNum::S_NULL,   // xdeathstate
        SfxName::None,      // deathsound
        0.0,                // speed
        20.0,               // radius
        16.0,               // height
        100,                // mass
        0,                  // damage
        SfxName::None,      // activesound
        MapObjFlag::Special as u32
            | MapObjFlag::NotDeathmatch as u32, // flags
    ),
    // MT_REDSKULL
    MapObjInfo::new(
        38,                 // doomednum
        StateNum::S_RSKULL, // spawnstate
        1000,               // spawnhealth
        StateNum::S_NULL,   // seestate
        SfxName::None,      // seesound
        StateNum::S_NULL,   // painstate
        0,                  // painchance
        SfxName::None,      // painsound
        StateNum::S_NULL,   // deathstate
        StateNum::S_NULL,   // xdeathstate
        SfxName::None,      // deathsound
        0.0,                // speed
        20.0,               // radius
        16.0,               // height
        100,                // mass
        0,                  // damage
        SfxName::None,      // activesound
        MapObjFlag::Special as u32
            | MapObjFlag::NotDeathmatch as u32, // flags
    ),
    // MT_YELLOWSKULL
    MapObjInfo::new(
        39,                 // doomednum
        StateNum::S_YSKULL, // spawnstate
        1000,               // spawnhealth
        StateNum::S_NULL,   // seestate
        SfxName::None,      // seesound
        StateNum::S_NULL,   // painstate
        0,                  // painchance
        SfxName::None,      // painsound
        StateNum::S_NULL,   // deathstate
        StateNum::S_NULL,   // xdeathstate
        SfxName::None,      // deathsound
        0.0,                // speed
        20.0,               // radius
        16.0,               // height
        100,                // mass
        0,                  // damage
        SfxName::None,      // activesound
        MapObjFlag::Special as u32
            | MapObjFlag::NotDeathmatch as u32, // flags
    ),
];
