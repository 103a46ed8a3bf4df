//! Legal continuations of an input prefix.
//!
//! Option generation is read-only. Anything that depends on the outcome of
//! an earlier step (a demon's follow-up square, a spirit's destination) is
//! computed on a scratch copy that already has the earlier events applied.

use tracing::trace;

use super::engine::Pending;
use super::outcome::{InvalidReason, NextInput, NextInputKind};
use crate::core::{
    ActionEffect, Color, Consumable, Item, Location, Mana, Modifier, Mon, Position, Square,
};

impl ActionEffect {
    /// Prompt kind offered for an action with this effect.
    #[must_use]
    pub const fn input_kind(self) -> NextInputKind {
        match self {
            ActionEffect::Faint => NextInputKind::MysticAction,
            ActionEffect::FaintAndReplace => NextInputKind::DemonAction,
            ActionEffect::MoveTarget => NextInputKind::SpiritTargetCapture,
        }
    }
}

/// An awake drainer carrying nothing.
fn is_free_drainer(item: &Item) -> bool {
    item.is_bare_mon()
        && item
            .mon()
            .is_some_and(|mon| mon.capabilities().carries_mana && !mon.is_fainted())
}

impl Position {
    /// Sorted squares from which the active color can start a move.
    #[must_use]
    pub fn start_locations(&self) -> Vec<Location> {
        self.board
            .occupied_locations()
            .into_iter()
            .filter(|at| {
                self.check_start(*at)
                    .is_ok_and(|item| !self.second_input_options(*at, &item).is_empty())
            })
            .collect()
    }

    /// Validate the first input of a move and return the item there.
    pub(crate) fn check_start(&self, at: Location) -> Result<Item, InvalidReason> {
        let item = *self.board.item(at).ok_or(InvalidReason::NothingToMove)?;
        match item {
            Item::Mon { mon }
            | Item::MonWithMana { mon, .. }
            | Item::MonWithConsumable { mon, .. } => {
                if mon.color != self.active_color {
                    Err(InvalidReason::WrongColor)
                } else if mon.is_fainted() {
                    Err(InvalidReason::CooldownActive)
                } else {
                    Ok(item)
                }
            }
            Item::Mana {
                mana: Mana::Regular(color),
            } => {
                if color == self.active_color {
                    Ok(item)
                } else {
                    Err(InvalidReason::WrongColor)
                }
            }
            Item::Mana {
                mana: Mana::Supermana,
            }
            | Item::Consumable { .. } => Err(InvalidReason::NothingToMove),
        }
    }

    /// Every legal second input for the item standing at `start`.
    pub(crate) fn second_input_options(&self, start: Location, item: &Item) -> Vec<NextInput> {
        let mut options = Vec::new();
        let actor = Some(*item);

        let Some(mon) = item.mon() else {
            if self.can_move_mana() {
                for to in start.adjacent() {
                    if self.can_land(item, to) {
                        options.push(NextInput::at(NextInputKind::ManaMove, to, None));
                    }
                }
            }
            return options;
        };

        if self.can_move_mon() {
            for to in start.adjacent() {
                if self.can_land(item, to) {
                    options.push(NextInput::at(NextInputKind::MonMove, to, actor));
                }
            }
        }

        if let Some((pattern, effect)) = mon.capabilities().action {
            if self.can_act_from(start) {
                for to in pattern.targets(start) {
                    let allowed = match effect {
                        ActionEffect::Faint => self.is_attackable(to, mon.color),
                        ActionEffect::FaintAndReplace => {
                            self.board.is_empty_at(start.between(to))
                                && self.is_attackable(to, mon.color)
                                && self.demon_action_resolves(start, to)
                        }
                        ActionEffect::MoveTarget => {
                            self.is_spirit_target(to)
                                && self
                                    .board
                                    .item(to)
                                    .is_some_and(|target| !self.spirit_destinations(to, target).is_empty())
                        }
                    };
                    if allowed {
                        options.push(NextInput::at(effect.input_kind(), to, actor));
                    }
                }
            }
        }

        if item.carries_bomb() {
            for to in start.nearby(self.config.bomb_range) {
                if self.is_enemy_awake_mon(to, mon.color) {
                    options.push(NextInput::at(NextInputKind::BombAttack, to, actor));
                }
            }
        }

        trace!(
            at = %start,
            count = options.len(),
            "Generated second input options"
        );
        options
    }

    /// Options for the next input of a move that is waiting on a follow-up.
    pub(crate) fn follow_up_options(&self, pending: &Pending) -> Vec<NextInput> {
        match *pending {
            Pending::SelectConsumable { mover, .. } => [
                Modifier::SelectPotion,
                Modifier::SelectBomb,
                Modifier::Cancel,
            ]
            .into_iter()
            .map(|modifier| NextInput::choose(NextInputKind::SelectConsumable, modifier, Some(mover)))
            .collect(),
            Pending::DemonStep { demon, from } => self
                .demon_step_destinations(&demon, from)
                .into_iter()
                .map(|to| NextInput::at(NextInputKind::DemonAdditionalStep, to, Some(demon)))
                .collect(),
            Pending::SpiritMove { spirit, target, item } => self
                .spirit_destinations(target, &item)
                .into_iter()
                .map(|to| NextInput::at(NextInputKind::SpiritTargetMove, to, Some(spirit)))
                .collect(),
        }
    }

    // === Landing ===

    /// Whether `item`, lifted off the board, may be placed on `to`.
    ///
    /// Covers plain steps as well as the landing combinations: a free drainer
    /// onto mana, mana onto a free drainer, and a mon onto a consumable it
    /// is allowed to take.
    pub(crate) fn can_land(&self, item: &Item, to: Location) -> bool {
        if !to.is_valid() {
            return false;
        }
        let square = self.square(to);
        let occupant = self.board.item(to);

        match item.mon() {
            Some(mon) => {
                if !square.admits_mon(mon) {
                    return false;
                }
                if square == Square::SupermanaBase {
                    let carries_supermana = item.mana() == Some(&Mana::Supermana);
                    let takes_supermana = is_free_drainer(item)
                        && occupant == Some(&Item::Mana {
                            mana: Mana::Supermana,
                        });
                    if !carries_supermana && !takes_supermana {
                        return false;
                    }
                }
                match occupant {
                    None => true,
                    Some(Item::Mana { .. }) => is_free_drainer(item),
                    Some(Item::Consumable { consumable }) => {
                        item.is_bare_mon() || *consumable != Consumable::Bomb
                    }
                    Some(_) => false,
                }
            }
            None => match occupant {
                Some(target) => matches!(item, Item::Mana { .. }) && is_free_drainer(target),
                None => square.accepts_mana(),
            },
        }
    }

    /// Squares adjacent to `target` the spirit can push `item` onto.
    pub(crate) fn spirit_destinations(&self, target: Location, item: &Item) -> Vec<Location> {
        target
            .adjacent()
            .into_iter()
            .filter(|to| self.can_land(item, *to))
            .collect()
    }

    /// Squares adjacent to `from` where a displaced demon may finish.
    pub(crate) fn demon_step_destinations(&self, demon: &Item, from: Location) -> Vec<Location> {
        from.adjacent()
            .into_iter()
            .filter(|to| self.can_land(demon, *to))
            .collect()
    }

    // === Actions ===

    /// Actions need budget (or a potion), and can't start from a mon base.
    fn can_act_from(&self, start: Location) -> bool {
        self.can_use_action() && !self.square(start).is_mon_base()
    }

    fn is_enemy_awake_mon(&self, at: Location, attacker: Color) -> bool {
        self.board
            .item(at)
            .and_then(Item::mon)
            .is_some_and(|mon| mon.color != attacker && !mon.is_fainted())
    }

    /// An enemy mon that an action can reach.
    fn is_attackable(&self, at: Location, attacker: Color) -> bool {
        self.is_enemy_awake_mon(at, attacker)
            && self
                .board
                .item(at)
                .and_then(Item::mon)
                .is_some_and(|mon| !self.is_protected(at, mon))
    }

    /// Whether an awake angel of `mon`'s color stands next to `at`.
    pub(crate) fn is_protected(&self, at: Location, mon: &Mon) -> bool {
        at.adjacent().into_iter().any(|near| {
            self.board.item(near).and_then(Item::mon).is_some_and(|guard| {
                guard.color == mon.color
                    && guard.capabilities().protects_adjacent
                    && !guard.is_fainted()
            })
        })
    }

    /// Spirits can move anything except fainted mons and the free supermana.
    fn is_spirit_target(&self, at: Location) -> bool {
        match self.board.item(at) {
            None => false,
            Some(Item::Mana {
                mana: Mana::Supermana,
            }) => false,
            Some(item) => !item.mon().is_some_and(Mon::is_fainted),
        }
    }

    /// A demon action is only offered when the demon has somewhere to end up.
    fn demon_action_resolves(&self, from: Location, to: Location) -> bool {
        let mut scratch = self.clone();
        let Some(demon) = scratch.board.remove(from) else {
            return false;
        };
        scratch.faint_at(to);
        let can_step = demon
            .mon()
            .is_some_and(|mon| mon.capabilities().can_chain_step);
        !scratch.demon_needs_step(&demon, to)
            || (can_step && !scratch.demon_step_destinations(&demon, to).is_empty())
    }
}
