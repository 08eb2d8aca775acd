use super::SpriteNum::*;
use super::StateAction as A;
use super::StateNum::*;
use super::{State, StateNum};

pub const STATES: [State; StateNum::NUMSTATES as usize] = [
    State::new(PLAY, 0, -1, A::None, S_NULL),           // S_NULL
    State::new(PLAY, 0, -1, A::None, S_NULL),           // S_PLAY
    State::new(PLAY, 0, 4, A::None, S_PLAY_RUN2),       // S_PLAY_RUN1
    State::new(PLAY, 1, 4, A::None, S_PLAY_RUN1),       // S_PLAY_RUN2
    State::new(PLAY, 6, 4, A::Pain, S_PLAY),            // S_PLAY_PAIN
    State::new(PLAY, 7, 10, A::None, S_PLAY_DIE2),      // S_PLAY_DIE1
    State::new(PLAY, 8, 10, A::Scream, S_PLAY_DIE3),    // S_PLAY_DIE2
    State::new(PLAY, 9, 10, A::Fall, S_PLAY_DIE4),      // S_PLAY_DIE3
    State::new(PLAY, 13, -1, A::None, S_NULL),          // S_PLAY_DIE4
    State::new(PLAY, 14, 5, A::XScream, S_PLAY_XDIE2),  // S_PLAY_XDIE1
    State::new(PLAY, 15, 5, A::Fall, S_PLAY_XDIE3),     // S_PLAY_XDIE2
    State::new(PLAY, 22, -1, A::None, S_NULL),          // S_PLAY_XDIE3
    State::new(POSS, 0, 10, A::None, S_POSS_STND2),     // S_POSS_STND
    State::new(POSS, 1, 10, A::None, S_POSS_STND),      // S_POSS_STND2
    State::new(POSS, 0, 4, A::None, S_POSS_RUN2),       // S_POSS_RUN1
    State::new(POSS, 1, 4, A::None, S_POSS_RUN1),       // S_POSS_RUN2
    State::new(POSS, 6, 3, A::Pain, S_POSS_RUN1),       // S_POSS_PAIN
    State::new(POSS, 7, 5, A::None, S_POSS_DIE2),       // S_POSS_DIE1
    State::new(POSS, 8, 5, A::Scream, S_POSS_DIE3),     // S_POSS_DIE2
    State::new(POSS, 9, 5, A::Fall, S_POSS_DIE4),       // S_POSS_DIE3
    State::new(POSS, 11, -1, A::None, S_NULL),          // S_POSS_DIE4
    State::new(POSS, 12, 5, A::XScream, S_POSS_XDIE2),  // S_POSS_XDIE1
    State::new(POSS, 13, 5, A::Fall, S_POSS_XDIE3),     // S_POSS_XDIE2
    State::new(POSS, 20, -1, A::None, S_NULL),          // S_POSS_XDIE3
    State::new(TROO, 0, 10, A::None, S_TROO_STND2),     // S_TROO_STND
    State::new(TROO, 1, 10, A::None, S_TROO_STND),      // S_TROO_STND2
    State::new(TROO, 0, 3, A::None, S_TROO_RUN2),       // S_TROO_RUN1
    State::new(TROO, 1, 3, A::None, S_TROO_RUN1),       // S_TROO_RUN2
    State::new(TROO, 7, 2, A::Pain, S_TROO_RUN1),       // S_TROO_PAIN
    State::new(TROO, 8, 8, A::None, S_TROO_DIE2),       // S_TROO_DIE1
    State::new(TROO, 9, 8, A::Scream, S_TROO_DIE3),     // S_TROO_DIE2
    State::new(TROO, 10, 6, A::Fall, S_TROO_DIE4),      // S_TROO_DIE3
    State::new(TROO, 12, -1, A::None, S_NULL),          // S_TROO_DIE4
    State::new(SARG, 0, 10, A::None, S_SARG_STND2),     // S_SARG_STND
    State::new(SARG, 1, 10, A::None, S_SARG_STND),      // S_SARG_STND2
    State::new(SARG, 0, 2, A::None, S_SARG_RUN2),       // S_SARG_RUN1
    State::new(SARG, 1, 2, A::None, S_SARG_RUN1),       // S_SARG_RUN2
    State::new(SARG, 7, 2, A::Pain, S_SARG_RUN1),       // S_SARG_PAIN
    State::new(SARG, 8, 8, A::Scream, S_SARG_DIE2),     // S_SARG_DIE1
    State::new(SARG, 10, 4, A::Fall, S_SARG_DIE3),      // S_SARG_DIE2
    State::new(SARG, 13, -1, A::None, S_NULL),          // S_SARG_DIE3
    State::new(BOSS, 0, 10, A::None, S_BOSS_STND2),     // S_BOSS_STND
    State::new(BOSS, 1, 10, A::None, S_BOSS_STND),      // S_BOSS_STND2
    State::new(BOSS, 0, 3, A::None, S_BOSS_RUN2),       // S_BOSS_RUN1
    State::new(BOSS, 1, 3, A::None, S_BOSS_RUN1),       // S_BOSS_RUN2
    State::new(BOSS, 7, 2, A::Pain, S_BOSS_RUN1),       // S_BOSS_PAIN
    State::new(BOSS, 8, 8, A::Scream, S_BOSS_DIE2),     // S_BOSS_DIE1
    State::new(BOSS, 10, 8, A::Fall, S_BOSS_DIE3),      // S_BOSS_DIE2
    State::new(BOSS, 14, -1, A::None, S_NULL),          // S_BOSS_DIE3
    State::new(BOS2, 0, 10, A::None, S_BOS2_STND2),     // S_BOS2_STND
    State::new(BOS2, 1, 10, A::None, S_BOS2_STND),      // S_BOS2_STND2
    State::new(BOS2, 0, 3, A::None, S_BOS2_RUN2),       // S_BOS2_RUN1
    State::new(BOS2, 1, 3, A::None, S_BOS2_RUN1),       // S_BOS2_RUN2
    State::new(BOS2, 7, 2, A::Pain, S_BOS2_RUN1),       // S_BOS2_PAIN
    State::new(BOS2, 8, 8, A::Scream, S_BOS2_DIE2),     // S_BOS2_DIE1
    State::new(BOS2, 10, 8, A::Fall, S_BOS2_DIE3),      // S_BOS2_DIE2
    State::new(BOS2, 14, -1, A::None, S_NULL),          // S_BOS2_DIE3
    State::new(BAR1, 0, 6, A::None, S_BAR2),            // S_BAR1
    State::new(BAR1, 1, 6, A::None, S_BAR1),            // S_BAR2
    State::new(BEXP, 0, 5, A::None, S_BEXP2),           // S_BEXP
    State::new(BEXP, 1, 5, A::Scream, S_BEXP3),         // S_BEXP2
    State::new(BEXP, 2, 5, A::None, S_BEXP4),           // S_BEXP3
    State::new(BEXP, 3, 10, A::Explode, S_BEXP5),       // S_BEXP4
    State::new(BEXP, 4, 10, A::None, S_NULL),           // S_BEXP5
    State::new(BAL1, 0, 4, A::None, S_TBALL2),          // S_TBALL1
    State::new(BAL1, 1, 4, A::None, S_TBALL1),          // S_TBALL2
    State::new(BAL1, 2, 6, A::None, S_TBALLX2),         // S_TBALLX1
    State::new(BAL1, 3, 6, A::None, S_TBALLX3),         // S_TBALLX2
    State::new(BAL1, 4, 6, A::None, S_NULL),            // S_TBALLX3
    State::new(MISL, 0, 1, A::None, S_ROCKET),          // S_ROCKET
    State::new(MISL, 1, 8, A::Explode, S_EXPLODE2),     // S_EXPLODE1
    State::new(MISL, 2, 6, A::None, S_EXPLODE3),        // S_EXPLODE2
    State::new(MISL, 3, 4, A::None, S_NULL),            // S_EXPLODE3
    State::new(TFOG, 0, 6, A::None, S_TFOG2),           // S_TFOG
    State::new(TFOG, 1, 6, A::None, S_NULL),            // S_TFOG2
    State::new(PUFF, 0, 4, A::None, S_PUFF2),           // S_PUFF1
    State::new(PUFF, 1, 4, A::None, S_NULL),            // S_PUFF2
    State::new(BLUD, 2, 8, A::None, S_BLOOD2),          // S_BLOOD1
    State::new(BLUD, 1, 8, A::None, S_NULL),            // S_BLOOD2
    State::new(POL5, 0, -1, A::None, S_NULL),           // S_GIBS
    State::new(COLU, 0, -1, A::None, S_NULL),           // S_COLU
    State::new(STIM, 0, -1, A::None, S_NULL),           // S_STIM
    State::new(MEDI, 0, -1, A::None, S_NULL),           // S_MEDI
    State::new(ARM1, 0, 6, A::None, S_ARM1A),           // S_ARM1
    State::new(ARM1, 1, 7, A::None, S_ARM1),            // S_ARM1A
    State::new(BKEY, 0, 10, A::None, S_BKEY2),          // S_BKEY
    State::new(BKEY, 1, 10, A::None, S_BKEY),           // S_BKEY2
    State::new(RKEY, 0, 10, A::None, S_RKEY2),          // S_RKEY
    State::new(RKEY, 1, 10, A::None, S_RKEY),           // S_RKEY2
    State::new(YKEY, 0, 10, A::None, S_YKEY2),          // S_YKEY
    State::new(YKEY, 1, 10, A::None, S_YKEY),           // S_YKEY2
    State::new(BSKU, 0, 10, A::None, S_BSKULL2),        // S_BSKULL
    State::new(BSKU, 1, 10, A::None, S_BSKULL),         // S_BSKULL2
    State::new(RSKU, 0, 10, A::None, S_RSKULL2),        // S_RSKULL
    State::new(RSKU, 1, 10, A::None, S_RSKULL),         // S_RSKULL2
    State::new(YSKU, 0, 10, A::None, S_YSKULL2),        // S_YSKULL
    State::new(YSKU, 1, 10, A::None, S_YSKULL),         // S_YSKULL2
];
