//! Input resolution integration tests.

use mons_engine::core::{Consumable, Input, Item, Location, Mana, Modifier, Mon, MonKind};
use mons_engine::events::{kinds, EventKind};
use mons_engine::{Color, Event, InvalidReason, NextInputKind, Output, Position, RulesConfig};

fn l(i: i32, j: i32) -> Location {
    Location::new(i, j)
}

fn mon(kind: MonKind, color: Color) -> Item {
    Item::Mon {
        mon: Mon::awake(kind, color),
    }
}

fn mana(color: Color) -> Item {
    Item::Mana {
        mana: Mana::Regular(color),
    }
}

fn setup(items: Vec<(Location, Item)>, active: Color, turn: u32) -> Position {
    Position::with_items(RulesConfig::default(), items, active, turn)
}

fn event_kinds(output: &Output) -> Vec<EventKind> {
    kinds(output.events().expect("move should resolve"))
}

// =============================================================================
// Opening
// =============================================================================

/// Test the first white move ends the opening turn.
#[test]
fn test_opening_demon_step_hands_turn_to_black() {
    let mut game = Position::new();

    let output = game.process(&[l(10, 3), l(9, 3)], None);

    assert_eq!(event_kinds(&output), vec![EventKind::MonMove, EventKind::NextTurn]);
    assert_eq!(
        output.events().unwrap()[1],
        Event::NextTurn {
            color: Color::Black
        }
    );
    assert_eq!(game.active_color(), Color::Black);
    assert_eq!(game.turn_number(), 2);
    assert_eq!(game.item(l(9, 3)), Some(&mon(MonKind::Demon, Color::White)));
}

/// Test mana can't move on the opening turn.
#[test]
fn test_opening_turn_has_no_mana_moves() {
    let mut game = Position::new();
    assert_eq!(
        game.process(&[l(6, 3)], None),
        Output::InvalidInput(InvalidReason::NothingToMove)
    );
}

/// Test black gets a full turn after the opening.
#[test]
fn test_black_second_turn_budget() {
    let mut game = Position::new();
    game.process(&[l(10, 3), l(9, 3)], None);

    assert_eq!(game.available_move_kinds().as_array(), [5, 1, 1, 0]);

    for (from, to) in [((0, 7), (1, 7)), ((1, 7), (2, 7)), ((0, 3), (1, 3))] {
        let output = game.process(&[l(from.0, from.1), l(to.0, to.1)], None);
        assert_eq!(event_kinds(&output), vec![EventKind::MonMove]);
    }
    assert_eq!(game.active_color(), Color::Black);
    assert_eq!(game.mon_moves(), 3);
}

// =============================================================================
// Rejections
// =============================================================================

/// Test rejected inputs name the reason and leave the position untouched.
#[test]
fn test_rejections_leave_position_unchanged() {
    let mut game = Position::new();
    let before = game.fen();

    let cases = [
        (vec![l(0, 7)], InvalidReason::WrongColor),
        (vec![l(2, 2)], InvalidReason::NothingToMove),
        (vec![l(5, 5)], InvalidReason::NothingToMove),
        (vec![l(10, 3), l(7, 3)], InvalidReason::UnreachableTarget),
        (vec![l(10, 3), l(10, 4)], InvalidReason::UnreachableTarget),
    ];
    for (locations, reason) in cases {
        assert_eq!(game.process(&locations, None), Output::InvalidInput(reason));
        assert_eq!(game.fen(), before);
    }
}

/// Test a fainted mon can't start a move.
#[test]
fn test_fainted_mon_is_on_cooldown() {
    let mut game = setup(
        vec![(
            l(10, 6),
            Item::Mon {
                mon: Mon::new(MonKind::Spirit, Color::White, 1),
            },
        )],
        Color::White,
        3,
    );
    assert_eq!(
        game.process(&[l(10, 6)], None),
        Output::InvalidInput(InvalidReason::CooldownActive)
    );
}

/// Test a decided game rejects every input.
#[test]
fn test_game_over_rejects_input() {
    let mut game = Position::new().with_score(Color::Black, 5);
    assert_eq!(
        game.process(&[], None),
        Output::InvalidInput(InvalidReason::GameOver)
    );
    assert_eq!(
        game.process(&[l(10, 3), l(9, 3)], None),
        Output::InvalidInput(InvalidReason::GameOver)
    );
}

/// Test the string and structured entry points agree.
#[test]
fn test_string_and_structured_inputs_agree() {
    let mut structured = Position::new();
    let mut string = Position::new();

    let a = structured.process(&[l(10, 5), l(9, 5)], None);
    let b = string.process_fen("l10,5;l9,5");

    assert_eq!(a, b);
    assert_eq!(structured.fen(), string.fen());
}

// =============================================================================
// Consumables
// =============================================================================

/// Test a potion-only base is picked up without a prompt.
#[test]
fn test_potion_base_pickup() {
    let mut game = setup(
        vec![
            (l(6, 1), mon(MonKind::Spirit, Color::White)),
            (
                l(5, 0),
                Item::Consumable {
                    consumable: Consumable::Potion,
                },
            ),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(6, 1), l(5, 0)], None);

    assert_eq!(
        event_kinds(&output),
        vec![EventKind::MonMove, EventKind::PickupPotion]
    );
    assert_eq!(game.potions(Color::White), 1);
    assert_eq!(game.item(l(5, 0)), Some(&mon(MonKind::Spirit, Color::White)));
}

fn bomb_or_potion_setup() -> Position {
    setup(
        vec![
            (l(6, 0), mon(MonKind::Demon, Color::White)),
            (
                l(5, 0),
                Item::Consumable {
                    consumable: Consumable::BombOrPotion,
                },
            ),
        ],
        Color::White,
        2,
    )
}

/// Test a bomb-or-potion base prompts for a choice.
#[test]
fn test_bomb_or_potion_prompts() {
    let mut game = bomb_or_potion_setup();
    let before = game.fen();

    let output = game.process(&[l(6, 0), l(5, 0)], None);
    let prompts = output.options().expect("choice prompts");

    assert_eq!(prompts.len(), 3);
    assert!(prompts
        .iter()
        .all(|prompt| prompt.kind == NextInputKind::SelectConsumable));
    let modifiers: Vec<_> = prompts.iter().filter_map(|prompt| prompt.modifier).collect();
    assert_eq!(
        modifiers,
        vec![Modifier::SelectPotion, Modifier::SelectBomb, Modifier::Cancel]
    );
    assert_eq!(game.fen(), before);
}

/// Test choosing the bomb.
#[test]
fn test_bomb_or_potion_select_bomb() {
    let mut game = bomb_or_potion_setup();

    let output = game.process(&[l(6, 0), l(5, 0)], Some(Modifier::SelectBomb));

    assert_eq!(
        event_kinds(&output),
        vec![EventKind::MonMove, EventKind::PickupBomb]
    );
    assert!(game.item(l(5, 0)).is_some_and(Item::carries_bomb));
    assert_eq!(game.potions(Color::White), 0);
}

/// Test choosing the potion.
#[test]
fn test_bomb_or_potion_select_potion() {
    let mut game = bomb_or_potion_setup();

    let output = game.process(&[l(6, 0), l(5, 0)], Some(Modifier::SelectPotion));

    assert_eq!(
        event_kinds(&output),
        vec![EventKind::MonMove, EventKind::PickupPotion]
    );
    assert_eq!(game.potions(Color::White), 1);
}

/// Test cancelling the choice aborts the move.
#[test]
fn test_bomb_or_potion_cancel() {
    let mut game = bomb_or_potion_setup();
    let before = game.fen();

    let output = game.process(&[l(6, 0), l(5, 0)], Some(Modifier::Cancel));

    assert_eq!(output, Output::InvalidInput(InvalidReason::Cancelled));
    assert_eq!(game.fen(), before);
}

/// Test a mana carrier takes the potion automatically.
#[test]
fn test_carrier_takes_potion() {
    let mut game = setup(
        vec![
            (
                l(6, 0),
                Item::MonWithMana {
                    mon: Mon::awake(MonKind::Drainer, Color::White),
                    mana: Mana::Regular(Color::Black),
                },
            ),
            (
                l(5, 0),
                Item::Consumable {
                    consumable: Consumable::BombOrPotion,
                },
            ),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(6, 0), l(5, 0)], None);

    assert_eq!(
        event_kinds(&output),
        vec![EventKind::MonMove, EventKind::PickupPotion]
    );
    assert_eq!(game.potions(Color::White), 1);
}

// =============================================================================
// Mana
// =============================================================================

/// Test a drainer picks up mana and scores it in a pool.
#[test]
fn test_drainer_carries_mana_to_pool() {
    let mut game = setup(
        vec![
            (l(8, 2), mon(MonKind::Drainer, Color::White)),
            (l(9, 1), mana(Color::Black)),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(8, 2), l(9, 1)], None);
    assert_eq!(
        event_kinds(&output),
        vec![EventKind::MonMove, EventKind::PickupMana]
    );

    let output = game.process(&[l(9, 1), l(10, 0)], None);
    assert_eq!(
        event_kinds(&output),
        vec![EventKind::MonMove, EventKind::ManaScored]
    );
    assert_eq!(game.white_score(), 2);
    assert_eq!(game.item(l(10, 0)), Some(&mon(MonKind::Drainer, Color::White)));
}

/// Test a mana move into a pool scores and ends the turn.
#[test]
fn test_mana_move_scores_and_ends_turn() {
    let mut game = setup(vec![(l(9, 1), mana(Color::White))], Color::White, 2);

    let output = game.process(&[l(9, 1), l(10, 0)], None);

    assert_eq!(
        event_kinds(&output),
        vec![
            EventKind::ManaMove,
            EventKind::ManaScored,
            EventKind::NextTurn
        ]
    );
    assert_eq!(game.white_score(), 1);
    assert_eq!(game.active_color(), Color::Black);
    assert!(game.item(l(10, 0)).is_none());
}

/// Test mana can be pushed onto a drainer of either color.
#[test]
fn test_mana_move_onto_drainer() {
    let mut game = setup(
        vec![
            (l(7, 4), mana(Color::White)),
            (l(8, 4), mon(MonKind::Drainer, Color::Black)),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(7, 4), l(8, 4)], None);

    assert_eq!(
        event_kinds(&output),
        vec![
            EventKind::ManaMove,
            EventKind::PickupMana,
            EventKind::NextTurn
        ]
    );
    assert_eq!(
        game.item(l(8, 4)).and_then(Item::mana),
        Some(&Mana::Regular(Color::White))
    );
}

/// Test reaching the target score ends the game and freezes it.
#[test]
fn test_scoring_to_target_ends_game() {
    let mut game = setup(vec![(l(9, 1), mana(Color::White))], Color::White, 8)
        .with_score(Color::White, 4);

    let output = game.process(&[l(9, 1), l(10, 0)], None);

    assert_eq!(
        event_kinds(&output),
        vec![
            EventKind::ManaMove,
            EventKind::ManaScored,
            EventKind::GameOver
        ]
    );
    assert_eq!(
        output.events().unwrap()[2],
        Event::GameOver {
            winner: Color::White
        }
    );
    assert_eq!(game.winner_color(), Some(Color::White));
    assert_eq!(game.active_color(), Color::White);

    let frozen = game.fen();
    assert_eq!(
        game.process(&[], None),
        Output::InvalidInput(InvalidReason::GameOver)
    );
    assert_eq!(game.fen(), frozen);
}

// =============================================================================
// Actions
// =============================================================================

/// Test a mystic fainting a supermana carrier sends the supermana home.
#[test]
fn test_supermana_carrier_fainted_off_base() {
    let mut game = setup(
        vec![
            (l(6, 4), mon(MonKind::Mystic, Color::White)),
            (
                l(4, 2),
                Item::MonWithMana {
                    mon: Mon::awake(MonKind::Drainer, Color::Black),
                    mana: Mana::Supermana,
                },
            ),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(6, 4), l(4, 2)], None);

    assert_eq!(
        event_kinds(&output),
        vec![
            EventKind::MysticAction,
            EventKind::MonFainted,
            EventKind::ManaDropped,
            EventKind::SupermanaBackToBase,
        ]
    );
    assert_eq!(
        game.item(l(5, 5)),
        Some(&Item::Mana {
            mana: Mana::Supermana
        })
    );
    assert!(game.item(l(4, 2)).is_none());
    let drainer = game.item(l(0, 5)).and_then(Item::mon).copied().unwrap();
    assert!(drainer.is_fainted());
    assert_eq!(game.actions_used(), 1);
}

/// Test a bomb attack.
#[test]
fn test_bomb_attack() {
    let mut game = setup(
        vec![
            (
                l(5, 2),
                Item::MonWithConsumable {
                    mon: Mon::awake(MonKind::Angel, Color::White),
                    consumable: Consumable::Bomb,
                },
            ),
            (l(2, 2), mon(MonKind::Drainer, Color::Black)),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(5, 2), l(2, 2)], None);

    assert_eq!(
        event_kinds(&output),
        vec![
            EventKind::BombAttack,
            EventKind::BombExplosion,
            EventKind::MonFainted
        ]
    );
    assert_eq!(game.item(l(5, 2)), Some(&mon(MonKind::Angel, Color::White)));
    assert_eq!(game.actions_used(), 0);
}

/// Test a demon takes the square of the mon it faints.
#[test]
fn test_demon_action_replaces_target() {
    let mut game = setup(
        vec![
            (l(6, 2), mon(MonKind::Demon, Color::White)),
            (l(4, 2), mon(MonKind::Spirit, Color::Black)),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(6, 2), l(4, 2)], None);

    assert_eq!(
        event_kinds(&output),
        vec![EventKind::DemonAction, EventKind::MonFainted]
    );
    assert_eq!(game.item(l(4, 2)), Some(&mon(MonKind::Demon, Color::White)));
    assert!(game.item(l(6, 2)).is_none());
}

/// Test a demon landing on dropped mana must step off.
#[test]
fn test_demon_additional_step() {
    let mut game = setup(
        vec![
            (l(6, 2), mon(MonKind::Demon, Color::White)),
            (
                l(4, 2),
                Item::MonWithMana {
                    mon: Mon::awake(MonKind::Drainer, Color::Black),
                    mana: Mana::Regular(Color::White),
                },
            ),
        ],
        Color::White,
        2,
    );
    let before = game.fen();

    let output = game.process(&[l(6, 2), l(4, 2)], None);
    let steps = output.options().expect("step prompts");
    assert!(!steps.is_empty());
    assert!(steps
        .iter()
        .all(|prompt| prompt.kind == NextInputKind::DemonAdditionalStep));
    assert!(steps.iter().all(|prompt| prompt.location != Some(l(4, 2))));
    assert_eq!(game.fen(), before);

    let output = game.process(&[l(6, 2), l(4, 2), l(3, 2)], None);
    assert_eq!(
        event_kinds(&output),
        vec![
            EventKind::DemonAction,
            EventKind::MonFainted,
            EventKind::ManaDropped,
            EventKind::DemonAdditionalStep,
        ]
    );
    assert_eq!(game.item(l(3, 2)), Some(&mon(MonKind::Demon, Color::White)));
    assert_eq!(game.item(l(4, 2)), Some(&mana(Color::White)));
}

/// Test the spirit moves a target one step.
#[test]
fn test_spirit_moves_mana_onto_drainer() {
    let mut game = setup(
        vec![
            (l(5, 3), mon(MonKind::Spirit, Color::White)),
            (l(3, 3), mana(Color::Black)),
            (l(2, 3), mon(MonKind::Drainer, Color::White)),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(5, 3), l(3, 3)], None);
    let destinations = output.options().expect("destination prompts");
    assert!(destinations
        .iter()
        .any(|prompt| prompt.location == Some(l(2, 3))));

    let output = game.process(&[l(5, 3), l(3, 3), l(2, 3)], None);
    assert_eq!(
        event_kinds(&output),
        vec![EventKind::SpiritTargetMove, EventKind::PickupMana]
    );
    assert_eq!(
        game.item(l(2, 3)).and_then(Item::mana),
        Some(&Mana::Regular(Color::Black))
    );
}

/// Test a potion buys a second action.
#[test]
fn test_potion_extra_action() {
    let mut game = setup(
        vec![
            (l(6, 4), mon(MonKind::Mystic, Color::White)),
            (l(4, 2), mon(MonKind::Spirit, Color::Black)),
            (l(4, 6), mon(MonKind::Angel, Color::Black)),
        ],
        Color::White,
        2,
    )
    .with_potions(Color::White, 1);

    let output = game.process(&[l(6, 4), l(4, 2)], None);
    assert_eq!(event_kinds(&output)[0], EventKind::MysticAction);
    assert_eq!(game.potions(Color::White), 1);

    let output = game.process(&[l(6, 4), l(4, 6)], None);
    assert_eq!(event_kinds(&output)[0], EventKind::MysticAction);
    assert_eq!(game.potions(Color::White), 0);

    assert!(!game.can_use_action());
}

/// Test fainted mons recover at the start of their owner's turn.
#[test]
fn test_mon_awakes_on_owner_turn() {
    let spirit = Mon::new(MonKind::Spirit, Color::Black, 1);
    let mut game = setup(
        vec![
            (l(7, 4), mana(Color::White)),
            (l(0, 4), Item::Mon { mon: spirit }),
        ],
        Color::White,
        2,
    );

    let output = game.process(&[l(7, 4), l(8, 4)], None);

    let events = output.events().unwrap();
    assert_eq!(
        kinds(events),
        vec![EventKind::ManaMove, EventKind::NextTurn, EventKind::MonAwake]
    );
    assert_eq!(
        events[2],
        Event::MonAwake {
            mon: Mon::awake(MonKind::Spirit, Color::Black),
            at: l(0, 4)
        }
    );
}

/// Test a trailing cancel picks the carrier's action over its bomb.
#[test]
fn test_trailing_cancel_declines_bomb() {
    let bomber = Item::MonWithConsumable {
        mon: Mon::awake(MonKind::Mystic, Color::White),
        consumable: Consumable::Bomb,
    };
    let mut game = setup(
        vec![
            (l(6, 4), bomber),
            (l(4, 2), mon(MonKind::Spirit, Color::Black)),
        ],
        Color::White,
        2,
    );

    let output = game.process_fen("l6,4;l4,2;mc");

    assert_eq!(
        event_kinds(&output),
        vec![EventKind::MysticAction, EventKind::MonFainted]
    );
    assert!(game.item(l(6, 4)).is_some_and(Item::carries_bomb));
    assert_eq!(game.actions_used(), 1);

    let output = game.process_inputs(&[Input::Location(l(6, 4))]);
    let options = output.options().expect("carrier can still move");
    assert!(options
        .iter()
        .all(|option| option.kind != NextInputKind::MysticAction));
}

/// Test a declined bomb resolves the same through both entry points.
#[test]
fn test_declined_bomb_string_and_structured_agree() {
    let bomber = Item::MonWithConsumable {
        mon: Mon::awake(MonKind::Spirit, Color::White),
        consumable: Consumable::Bomb,
    };
    let start = setup(
        vec![(l(5, 3), bomber), (l(3, 3), mon(MonKind::Mystic, Color::Black))],
        Color::White,
        2,
    );

    let mut structured = start.clone();
    let mut string = start;
    let a = structured.process(&[l(5, 3), l(3, 3), l(2, 3)], None);
    let b = string.process_fen("l5,3;l3,3;l2,3");

    assert_eq!(event_kinds(&a), vec![EventKind::SpiritTargetMove]);
    assert_eq!(a, b);
    assert_eq!(structured.fen(), string.fen());
    assert!(structured.item(l(5, 3)).is_some_and(Item::carries_bomb));
}
