//! Environment and object interactions

use glam::Vec2;
use log::{debug, info};
use math::point_to_angle_2;

use super::{MapObjFlag, ThingId};
use crate::doom_def::{Card, MAXHEALTH};
use crate::events::{LevelEvent, SoundOrigin};
use crate::info::{MapObjKind, SfxName, StateAction, StateNum};
use crate::lang::english::*;
use crate::level::Level;
use crate::options::Skill;

pub const BONUSADD: i32 = 6;
/// Tics a monster keeps chasing whoever last hurt it
pub const BASETHRESHOLD: i32 = 100;
/// Blast radius used by the explode action
const EXPLODE_DAMAGE: i32 = 128;

impl Level {
    /// P_SetMobjState
    ///
    /// Enter `state`, running the action of every zero tic state on the way.
    /// Returns false if the thing was removed.
    pub fn set_state(&mut self, id: ThingId, mut state: StateNum) -> bool {
        loop {
            if state == StateNum::S_NULL {
                self.remove_thing(id);
                return false;
            }
            let st = state.state();
            let Some(thing) = self.things.get_mut(id) else {
                return false;
            };
            thing.state = state;
            thing.tics = st.tics;
            self.events.emit(LevelEvent::ThingSpriteChanged { thing: id, state });

            self.run_action(id, st.action);
            let Some(thing) = self.things.get(id) else {
                return false;
            };
            if thing.tics != 0 {
                return true;
            }
            state = st.next_state;
        }
    }

    fn run_action(&mut self, id: ThingId, action: StateAction) {
        let Some(thing) = self.things.get_mut(id) else {
            return;
        };
        match action {
            StateAction::None => {}
            StateAction::Fall => {
                // actor is on ground, it can be walked over
                thing.flags &= !(MapObjFlag::Solid as u32);
            }
            StateAction::Scream => {
                let sfx = if thing.is_player() {
                    if thing.health < -50 {
                        // IF THE PLAYER DIES LESS THAN -50% WITHOUT GIBBING
                        SfxName::pdiehi
                    } else {
                        SfxName::pldeth
                    }
                } else {
                    thing.info().deathsound
                };
                self.events.sound(sfx, SoundOrigin::Thing(id));
            }
            StateAction::XScream => {
                self.events.sound(SfxName::slop, SoundOrigin::Thing(id));
            }
            StateAction::Pain => {
                let sfx = thing.info().painsound;
                self.events.sound(sfx, SoundOrigin::Thing(id));
            }
            StateAction::Explode => {
                let source = thing.target;
                self.radius_attack(id, source, EXPLODE_DAMAGE);
            }
        }
    }

    /// P_DamageMobj
    ///
    /// - `inflictor` is the thing that caused the damage (creature or missile).
    ///   Can be `None` for slime, goo etc.
    /// - `source` is the thing to target after taking damage. Should be `None`
    ///   for things that can't be targeted (environmental).
    ///
    /// So if an imp's fireball hits a former human, `target` is the former
    /// human, `inflictor` the fireball and `source` the imp.
    pub fn damage(
        &mut self,
        target: ThingId,
        inflictor: Option<ThingId>,
        source: Option<ThingId>,
        mut damage: i32,
    ) {
        let push_from = inflictor
            .or(source)
            .and_then(|i| self.things.get(i))
            .map(|i| (i.xy, i.z));
        let source_kind = source.and_then(|s| self.things.get(s)).map(|s| s.kind);
        let in_exit_sector = self
            .thing_sector(target)
            .is_some_and(|s| self.map_data.sectors[s].special == 11);
        let baby = self.options.skill == Skill::Baby;

        let Some(thing) = self.things.get_mut(target) else {
            return;
        };
        if !thing.has_flag(MapObjFlag::Shootable) || thing.health <= 0 {
            return;
        }
        if thing.has_flag(MapObjFlag::SkullFly) {
            thing.momxy = Vec2::ZERO;
            thing.momz = 0.0;
        }
        if thing.is_player() && baby {
            // take half damage in trainer mode
            damage >>= 1;
        }

        // Some close combat weapons should not inflict thrust and push the
        // victim out of reach
        if let Some((from_xy, from_z)) = push_from {
            if !thing.has_flag(MapObjFlag::NoClip) {
                let mut angle = point_to_angle_2(thing.xy, from_xy);
                let mut thrust = damage as f32 * 12.5 / thing.info().mass as f32;
                // make fall forwards sometimes
                if damage < 40
                    && damage > thing.health
                    && thing.z - from_z > 64.0
                    && self.rng.p_random() & 1 != 0
                {
                    angle += std::f32::consts::PI;
                    thrust *= 4.0;
                }
                thing.momxy += angle.unit() * thrust;
            }
        }

        let health = thing.health;
        if let Some(player) = thing.player_mut() {
            // end of game hell hack
            if in_exit_sector && damage >= health {
                damage = health - 1;
            }
            if player.armortype != 0 {
                let mut saved = if player.armortype == 1 {
                    damage / 3
                } else {
                    damage / 2
                };
                if player.armorpoints <= saved {
                    // armour is used up
                    saved = player.armorpoints;
                    player.armortype = 0;
                }
                player.armorpoints -= saved;
                damage -= saved;
            }
            // teleport stomp does 10k points...
            player.damagecount = (player.damagecount + damage).min(100);
        }

        debug!("Applying {damage} damage to {:?}", target);
        thing.health -= damage;
        if thing.health <= 0 {
            self.kill(target, source);
            return;
        }

        let painchance = thing.info().painchance;
        let painstate = thing.info().painstate;
        let skullfly = thing.has_flag(MapObjFlag::SkullFly);
        if self.rng.p_random() < painchance && !skullfly {
            if let Some(thing) = self.things.get_mut(target) {
                // FIGHT!!!
                thing.flags |= MapObjFlag::JustHit as u32;
            }
            if !self.set_state(target, painstate) {
                return;
            }
        }

        let Some(thing) = self.things.get_mut(target) else {
            return;
        };
        // AWAKE AND READY!
        thing.reactiontime = 0;
        if thing.threshold == 0 {
            if let Some(source) = source {
                if source != target && source_kind.is_some() {
                    thing.target = Some(source);
                    thing.threshold = BASETHRESHOLD;
                    let info = thing.info();
                    if thing.state == info.spawnstate && info.seestate != StateNum::S_NULL {
                        self.set_state(target, info.seestate);
                    }
                }
            }
        }
    }

    /// P_KillMobj
    fn kill(&mut self, target: ThingId, source: Option<ThingId>) {
        let Some(thing) = self.things.get_mut(target) else {
            return;
        };
        thing.flags &= !(MapObjFlag::Shootable as u32
            | MapObjFlag::Float as u32
            | MapObjFlag::SkullFly as u32
            | MapObjFlag::NoGravity as u32);
        thing.flags |= MapObjFlag::Corpse as u32 | MapObjFlag::DropOff as u32;
        thing.height /= 4.0;
        let counts = thing.has_flag(MapObjFlag::CountKill);
        let was_player = thing.is_player();
        if was_player {
            info!("Killing player {:?}", target);
            thing.flags &= !(MapObjFlag::Solid as u32);
        }
        let info = thing.info();
        let state = if thing.health < -info.spawnhealth && info.xdeathstate != StateNum::S_NULL {
            info.xdeathstate
        } else {
            info.deathstate
        };

        if counts {
            // a kill by a player counts for that player, anything else for
            // the first player
            let killer = source
                .filter(|s| self.things.get(*s).is_some_and(|t| t.is_player()))
                .or(self.players[0]);
            if let Some(player) = killer
                .and_then(|k| self.things.get_mut(k))
                .and_then(|k| k.player_mut())
            {
                player.killcount += 1;
            }
        }

        if !self.set_state(target, state) {
            return;
        }
        let random = self.rng.p_random();
        if let Some(thing) = self.things.get_mut(target) {
            thing.tics = (thing.tics - (random & 3)).max(1);
        }
    }

    /// Interact with special pickups
    ///
    /// Doom function name `P_TouchSpecialThing`
    pub(crate) fn touch_special(&mut self, special: ThingId, toucher: ThingId) {
        let Some(item) = self.things.get(special) else {
            return;
        };
        let (kind, item_z, count_item) = (item.kind, item.z, item.has_flag(MapObjFlag::CountItem));
        let Some(thing) = self.things.get_mut(toucher) else {
            return;
        };
        let delta = item_z - thing.z;
        if delta > thing.height || delta < -8.0 {
            // out of reach
            return;
        }
        if thing.health <= 0 {
            // dead thing, like a gib or corpse
            return;
        }
        let health = thing.health;
        let Some(player) = thing.player_mut() else {
            return;
        };

        let mut new_health = health;
        let message = match kind {
            MapObjKind::MT_GREENARMOR => {
                if player.armorpoints >= 100 {
                    return;
                }
                player.armortype = 1;
                player.armorpoints = 100;
                GOTARMOR
            }
            MapObjKind::MT_STIM => {
                if health >= MAXHEALTH {
                    return;
                }
                new_health = (health + 10).min(MAXHEALTH);
                GOTSTIM
            }
            MapObjKind::MT_MEDI => {
                if health >= MAXHEALTH {
                    return;
                }
                new_health = (health + 25).min(MAXHEALTH);
                if health < 25 { GOTMEDINEED } else { GOTMEDIKIT }
            }
            MapObjKind::MT_BLUECARD => give_card(player, Card::Bluecard, GOTBLUECARD),
            MapObjKind::MT_YELLOWCARD => give_card(player, Card::Yellowcard, GOTYELWCARD),
            MapObjKind::MT_REDCARD => give_card(player, Card::Redcard, GOTREDCARD),
            MapObjKind::MT_BLUESKULL => give_card(player, Card::Blueskull, GOTBLUESKUL),
            MapObjKind::MT_YELLOWSKULL => give_card(player, Card::Yellowskull, GOTYELWSKUL),
            MapObjKind::MT_REDSKULL => give_card(player, Card::Redskull, GOTREDSKULL),
            _ => {
                debug!("P_SpecialThing: Unknown gettable thing {:?}", kind);
                return;
            }
        };
        player.message = Some(message.to_string());
        if count_item {
            player.itemcount += 1;
        }
        player.bonuscount += BONUSADD;
        if let Some(thing) = self.things.get_mut(toucher) {
            thing.health = new_health;
        }

        self.events.emit(LevelEvent::Message {
            player: toucher,
            text: message,
        });
        self.events.sound(SfxName::itemup, SoundOrigin::Thing(toucher));
        self.remove_thing(special);
    }
}

fn give_card(player: &mut super::PlayerData, card: Card, message: &'static str) -> &'static str {
    player.cards[card.index()] = true;
    message
}
