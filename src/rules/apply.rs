//! Board mutations performed while a move resolves.
//!
//! These run on a scratch copy of the position; the caller commits the copy
//! only once the whole input sequence has resolved. Each helper both updates
//! the scratch position and returns the events describing what it did.

use tracing::trace;

use super::engine::{Pending, Step};
use super::outcome::{InvalidReason, NextInputKind};
use crate::core::{Consumable, Input, Item, Location, Mana, Modifier, Position, Square};
use crate::events::Event;

impl Position {
    /// Carry out the move selected by the second input.
    pub(crate) fn perform(
        &mut self,
        kind: NextInputKind,
        from: Location,
        to: Location,
    ) -> Result<Step, InvalidReason> {
        let actor = *self.board.item(from).ok_or(InvalidReason::NothingToMove)?;

        match kind {
            NextInputKind::MonMove => {
                self.board.remove(from);
                self.mon_moves = self.mon_moves.saturating_add(1);
                let events = vec![Event::MonMove {
                    item: actor,
                    from,
                    to,
                }];
                Ok(self.land_into_step(actor, to, events))
            }
            NextInputKind::ManaMove => {
                let mana = *actor.mana().ok_or(InvalidReason::MalformedInput)?;
                self.board.remove(from);
                self.mana_moves = self.mana_moves.saturating_add(1);
                let events = vec![Event::ManaMove { mana, from, to }];
                Ok(self.land_into_step(actor, to, events))
            }
            NextInputKind::MysticAction => {
                let mystic = *actor.mon().ok_or(InvalidReason::MalformedInput)?;
                self.consume_action();
                let mut events = vec![Event::MysticAction { mystic, from, to }];
                events.extend(self.faint_at(to));
                Ok(Step::Done(events))
            }
            NextInputKind::DemonAction => {
                let demon = *actor.mon().ok_or(InvalidReason::MalformedInput)?;
                self.board.remove(from);
                self.consume_action();
                let mut events = vec![Event::DemonAction { demon, from, to }];
                events.extend(self.faint_at(to));
                if self.demon_needs_step(&actor, to) {
                    Ok(Step::Partial {
                        events,
                        pending: Pending::DemonStep {
                            demon: actor,
                            from: to,
                        },
                    })
                } else {
                    self.board.put(to, actor);
                    Ok(Step::Done(events))
                }
            }
            NextInputKind::SpiritTargetCapture => {
                let item = *self.board.item(to).ok_or(InvalidReason::UnreachableTarget)?;
                Ok(Step::Partial {
                    events: Vec::new(),
                    pending: Pending::SpiritMove {
                        spirit: actor,
                        target: to,
                        item,
                    },
                })
            }
            NextInputKind::BombAttack => {
                let by = *actor.mon().ok_or(InvalidReason::MalformedInput)?;
                self.board.put(from, Item::Mon { mon: by });
                let mut events = vec![
                    Event::BombAttack { by, from, to },
                    Event::BombExplosion { at: to },
                ];
                events.extend(self.faint_at(to));
                Ok(Step::Done(events))
            }
            NextInputKind::DemonAdditionalStep
            | NextInputKind::SpiritTargetMove
            | NextInputKind::SelectConsumable => Err(InvalidReason::MalformedInput),
        }
    }

    /// Resolve the input answering a pending follow-up.
    pub(crate) fn continue_pending(
        &mut self,
        pending: Pending,
        input: Input,
    ) -> Result<Step, InvalidReason> {
        match (pending, input) {
            (Pending::SelectConsumable { mover, at }, Input::Modifier(modifier)) => {
                let mon = *mover.mon().ok_or(InvalidReason::MalformedInput)?;
                match modifier {
                    Modifier::SelectPotion => {
                        self.potions[mon.color] = self.potions[mon.color].saturating_add(1);
                        Ok(Step::Done(vec![Event::PickupPotion { by: mover, at }]))
                    }
                    Modifier::SelectBomb => {
                        self.board.put(
                            at,
                            Item::MonWithConsumable {
                                mon,
                                consumable: Consumable::Bomb,
                            },
                        );
                        Ok(Step::Done(vec![Event::PickupBomb { by: mon, at }]))
                    }
                    Modifier::Cancel => Err(InvalidReason::Cancelled),
                }
            }
            (Pending::DemonStep { demon, from }, Input::Location(to)) => {
                let mon = *demon.mon().ok_or(InvalidReason::MalformedInput)?;
                let events = vec![Event::DemonAdditionalStep {
                    demon: mon,
                    from,
                    to,
                }];
                Ok(self.land_into_step(demon, to, events))
            }
            (Pending::SpiritMove { target, item, .. }, Input::Location(to)) => {
                self.board.remove(target);
                self.consume_action();
                let events = vec![Event::SpiritTargetMove {
                    item,
                    from: target,
                    to,
                }];
                Ok(self.land_into_step(item, to, events))
            }
            _ => Err(InvalidReason::MalformedInput),
        }
    }

    fn land_into_step(&mut self, item: Item, to: Location, mut events: Vec<Event>) -> Step {
        let (landing, pending) = self.land(item, to);
        events.extend(landing);
        match pending {
            Some(pending) => Step::Partial { events, pending },
            None => Step::Done(events),
        }
    }

    /// Put a lifted item down on `to`, applying pickups and scoring.
    ///
    /// Assumes `can_land(item, to)` held before the item was lifted.
    fn land(&mut self, item: Item, to: Location) -> (Vec<Event>, Option<Pending>) {
        let mut events = Vec::new();
        let on_pool = self.square(to).is_pool();

        match (self.board.item(to).copied(), item) {
            (None, Item::MonWithMana { mon, mana }) if on_pool => {
                self.board.put(to, Item::Mon { mon });
                events.push(self.score_mana(mana, to));
            }
            (None, Item::Mana { mana }) if on_pool => {
                events.push(self.score_mana(mana, to));
            }
            (None, _) => self.board.put(to, item),
            (Some(Item::Mana { mana }), Item::Mon { mon }) => {
                self.board.put(to, Item::MonWithMana { mon, mana });
                events.push(Event::PickupMana { mana, by: mon, at: to });
            }
            (Some(Item::Mon { mon }), Item::Mana { mana }) => {
                self.board.put(to, Item::MonWithMana { mon, mana });
                events.push(Event::PickupMana { mana, by: mon, at: to });
            }
            (Some(Item::Consumable { consumable }), _) => {
                let Some(&mon) = item.mon() else {
                    return (events, None);
                };
                match (consumable, item) {
                    (Consumable::Bomb, Item::Mon { mon }) => {
                        self.board.put(
                            to,
                            Item::MonWithConsumable {
                                mon,
                                consumable: Consumable::Bomb,
                            },
                        );
                        events.push(Event::PickupBomb { by: mon, at: to });
                    }
                    (Consumable::BombOrPotion, Item::Mon { .. }) => {
                        self.board.put(to, item);
                        return (events, Some(Pending::SelectConsumable { mover: item, at: to }));
                    }
                    _ => {
                        self.board.put(to, item);
                        self.potions[mon.color] = self.potions[mon.color].saturating_add(1);
                        events.push(Event::PickupPotion { by: item, at: to });
                    }
                }
            }
            (Some(_), _) => self.board.put(to, item),
        }

        (events, None)
    }

    fn score_mana(&mut self, mana: Mana, at: Location) -> Event {
        let color = self.active_color;
        self.scores[color] = self.scores[color].saturating_add(mana.score(color));
        trace!(color = %color, points = mana.score(color), "Mana scored");
        Event::ManaScored { mana, at }
    }

    /// Spend one action, drawing on potions once the budget is used up.
    fn consume_action(&mut self) {
        if self.actions_used < self.config.actions_per_turn {
            self.actions_used += 1;
        } else {
            let color = self.active_color;
            self.potions[color] = self.potions[color].saturating_sub(1);
        }
    }

    /// Faint the mon at `at`, sending it home and dropping what it carried.
    ///
    /// A carried bomb is lost. Dropped regular mana stays on the square; the
    /// supermana returns to its base. A mon fainting on its own base keeps
    /// any regular mana it was carrying, since the square stays occupied.
    pub(crate) fn faint_at(&mut self, at: Location) -> Vec<Event> {
        let mut events = Vec::new();
        let Some(item) = self.board.remove(at) else {
            return events;
        };
        let Some(&mon) = item.mon() else {
            self.board.put(at, item);
            return events;
        };

        let layout = self.board.layout();
        let base = layout.mon_base(&mon).unwrap_or(at);
        let mut fainted = mon;
        fainted.faint(self.config.faint_cooldown);
        events.push(Event::MonFainted { mon, from: at, to: base });

        let Some(&mana) = item.mana() else {
            self.board.put(base, Item::Mon { mon: fainted });
            return events;
        };

        let supermana_base = layout.supermana_base();
        if mana.is_supermana() && at != supermana_base {
            self.board.put(base, Item::Mon { mon: fainted });
            events.push(Event::ManaDropped { mana, at });
            self.board.put(supermana_base, Item::Mana { mana });
            events.push(Event::SupermanaBackToBase {
                from: at,
                to: supermana_base,
            });
        } else if base == at {
            self.board.put(base, Item::MonWithMana { mon: fainted, mana });
        } else {
            self.board.put(base, Item::Mon { mon: fainted });
            self.board.put(at, Item::Mana { mana });
            events.push(Event::ManaDropped { mana, at });
        }
        events
    }

    /// Whether a demon that just took `at` must step off again.
    pub(crate) fn demon_needs_step(&self, demon: &Item, at: Location) -> bool {
        let Some(mon) = demon.mon() else {
            return false;
        };
        let square = self.square(at);
        !self.board.is_empty_at(at)
            || square == Square::SupermanaBase
            || square.is_foreign_base_for(mon)
    }

    /// Append the events that follow a resolved move and hand over the turn
    /// when it is finished.
    pub(crate) fn finish_move(&mut self, events: &mut Vec<Event>) {
        if let Some(winner) = self.winner_color() {
            events.push(Event::GameOver { winner });
            return;
        }

        let mana_budget_spent =
            self.mana_moves > 0 && self.mana_moves >= self.config.mana_moves_per_turn;
        if mana_budget_spent || self.start_locations().is_empty() {
            self.next_turn(events);
        }
    }

    fn next_turn(&mut self, events: &mut Vec<Event>) {
        self.active_color = self.active_color.other();
        self.turn_number = self.turn_number.saturating_add(1);
        self.actions_used = 0;
        self.mana_moves = 0;
        self.mon_moves = 0;
        events.push(Event::NextTurn {
            color: self.active_color,
        });

        for at in self.board.mon_locations(self.active_color) {
            let Some(item) = self.board.item(at).copied() else {
                continue;
            };
            let Some(&mon) = item.mon() else {
                continue;
            };
            if !mon.is_fainted() {
                continue;
            }
            let mut recovering = mon;
            recovering.decrease_cooldown();
            self.board.put(at, item.with_mon(recovering));
            if !recovering.is_fainted() {
                events.push(Event::MonAwake {
                    mon: recovering,
                    at,
                });
            }
        }
    }
}
