//! Canonical string form of a position.
//!
//! ## Layout
//!
//! Ten space-separated fields:
//!
//! ```text
//! <white_score> <black_score> <w|b> <actions_used> <mana_moves> <mon_moves>
//! <white_potions> <black_potions> <turn_number> <board>
//! ```
//!
//! The board is 11 rows joined by `/`. A row is a run of three-character
//! item tokens and `nDD` empty runs (two decimal digits) that together span
//! exactly 11 columns.
//!
//! ## Item tokens
//!
//! The first two characters are the mon, or `xx` for none: the kind letter
//! (`E` demon, `D` drainer, `A` angel, `S` spirit, `Y` mystic; uppercase for
//! white) followed by its cooldown digit. The third character is what else
//! is on the square: `x` nothing, `M`/`m` white/black mana, `U` supermana,
//! `P` potion, `B` bomb, `Q` bomb-or-potion.
//!
//! Decoding is strict: only the canonical form is accepted (empty runs are
//! never split). Any structural problem yields a [`DecodeError`] and
//! `decode(encode(p)) == p` for every position the engine can reach.

use rustc_hash::FxHashSet;

use crate::core::{
    Board, Color, ColorMap, Consumable, Item, Location, Mana, Mon, MonKind, Position,
    RulesConfig, BOARD_SIZE, MAX_COOLDOWN,
};
use crate::error::DecodeError;

const FIELD_COUNT: usize = 10;
const TOKEN_LEN: usize = 3;

/// Encode a position.
#[must_use]
pub fn encode(position: &Position) -> String {
    let fields = [
        position.scores[Color::White].to_string(),
        position.scores[Color::Black].to_string(),
        position.active_color.fen_char().to_string(),
        position.actions_used.to_string(),
        position.mana_moves.to_string(),
        position.mon_moves.to_string(),
        position.potions[Color::White].to_string(),
        position.potions[Color::Black].to_string(),
        position.turn_number.to_string(),
        encode_board(&position.board),
    ];
    fields.join(" ")
}

/// Decode a position under the standard rules.
pub fn decode(fen: &str) -> Result<Position, DecodeError> {
    decode_with_config(fen, RulesConfig::default())
}

/// Decode a position, attaching `config` to the result.
pub fn decode_with_config(fen: &str, config: RulesConfig) -> Result<Position, DecodeError> {
    let fields: Vec<&str> = fen.split(' ').collect();
    if fields.len() != FIELD_COUNT {
        return Err(DecodeError::FieldCount {
            found: fields.len(),
        });
    }

    let white_score = parse_number("white_score", fields[0])?;
    let black_score = parse_number("black_score", fields[1])?;
    let active_color = Color::from_fen(fields[2]).ok_or_else(|| DecodeError::InvalidColor {
        value: fields[2].to_string(),
    })?;
    let actions_used = parse_number("actions_used", fields[3])?;
    let mana_moves = parse_number("mana_moves", fields[4])?;
    let mon_moves = parse_number("mon_moves", fields[5])?;
    let white_potions = parse_number("white_potions", fields[6])?;
    let black_potions = parse_number("black_potions", fields[7])?;
    let turn_number = parse_number("turn_number", fields[8])?;
    if turn_number == 0 {
        return Err(DecodeError::ZeroTurn);
    }
    let board = decode_board(fields[9])?;

    Ok(Position {
        config,
        board,
        scores: ColorMap::new(white_score, black_score),
        potions: ColorMap::new(white_potions, black_potions),
        active_color,
        actions_used,
        mana_moves,
        mon_moves,
        turn_number,
    })
}

impl Position {
    /// Canonical string form. See [`crate::fen`].
    #[must_use]
    pub fn fen(&self) -> String {
        encode(self)
    }

    /// Decode a position under the standard rules.
    pub fn from_fen(fen: &str) -> Result<Position, DecodeError> {
        decode(fen)
    }

    /// Decode a position under custom rules.
    pub fn from_fen_with_config(fen: &str, config: RulesConfig) -> Result<Position, DecodeError> {
        decode_with_config(fen, config)
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, DecodeError> {
    let invalid = || DecodeError::InvalidNumber {
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

// === Board ===

fn encode_board(board: &Board) -> String {
    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|i| {
            let mut row = String::new();
            let mut empty_run = 0;
            for j in 0..BOARD_SIZE {
                match board.item(Location::new(i, j)) {
                    Some(item) => {
                        if empty_run > 0 {
                            row.push_str(&format!("n{empty_run:02}"));
                            empty_run = 0;
                        }
                        row.push_str(&encode_item(item));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                row.push_str(&format!("n{empty_run:02}"));
            }
            row
        })
        .collect();
    rows.join("/")
}

fn decode_board(text: &str) -> Result<Board, DecodeError> {
    let rows: Vec<&str> = text.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(DecodeError::RowCount { found: rows.len() });
    }

    let mut board = Board::new();
    let mut supermana_seen = false;
    let mut mons_seen: FxHashSet<(MonKind, Color)> = FxHashSet::default();

    for (row_index, row) in rows.iter().enumerate() {
        let chars: Vec<char> = row.chars().collect();
        let mut cursor = 0;
        let mut column: usize = 0;
        let mut after_empty_run = false;

        while cursor < chars.len() {
            let Some(token) = chars.get(cursor..cursor + TOKEN_LEN) else {
                return Err(invalid_token(row_index, &chars[cursor..]));
            };
            cursor += TOKEN_LEN;

            if token[0] == 'n' {
                // Adjacent empty runs must be written as one.
                let run = empty_run_length(token)
                    .filter(|_| !after_empty_run)
                    .ok_or_else(|| invalid_token(row_index, token))?;
                column += run;
                after_empty_run = true;
                continue;
            }
            after_empty_run = false;

            let item = decode_item(token).ok_or_else(|| invalid_token(row_index, token))?;
            if item.mana() == Some(&Mana::Supermana) {
                if supermana_seen {
                    return Err(DecodeError::DuplicateSupermana);
                }
                supermana_seen = true;
            }
            if let Some(mon) = item.mon() {
                if !mons_seen.insert((mon.kind, mon.color)) {
                    return Err(DecodeError::DuplicateMon {
                        kind: mon.kind,
                        color: mon.color,
                    });
                }
            }

            if column < BOARD_SIZE as usize {
                board.put(Location::new(row_index as i32, column as i32), item);
            }
            column += 1;
        }

        if column != BOARD_SIZE as usize {
            return Err(DecodeError::RowWidth {
                row: row_index,
                width: column,
            });
        }
    }

    Ok(board)
}

fn invalid_token(row: usize, token: &[char]) -> DecodeError {
    DecodeError::InvalidItemToken {
        row,
        token: token.iter().collect(),
    }
}

fn empty_run_length(token: &[char]) -> Option<usize> {
    let tens = token.get(1)?.to_digit(10)?;
    let ones = token.get(2)?.to_digit(10)?;
    let run = (tens * 10 + ones) as usize;
    (run > 0).then_some(run)
}

// === Items ===

fn encode_item(item: &Item) -> String {
    let mut token = String::with_capacity(TOKEN_LEN);
    match item.mon() {
        Some(mon) => {
            let letter = mon.kind.fen_char();
            token.push(match mon.color {
                Color::White => letter.to_ascii_uppercase(),
                Color::Black => letter,
            });
            token.push(char::from(b'0' + mon.cooldown.min(MAX_COOLDOWN)));
        }
        None => token.push_str("xx"),
    }
    token.push(match (item.mana(), item.consumable()) {
        (Some(Mana::Regular(Color::White)), _) => 'M',
        (Some(Mana::Regular(Color::Black)), _) => 'm',
        (Some(Mana::Supermana), _) => 'U',
        (None, Some(Consumable::Potion)) => 'P',
        (None, Some(Consumable::Bomb)) => 'B',
        (None, Some(Consumable::BombOrPotion)) => 'Q',
        (None, None) => 'x',
    });
    token
}

fn decode_item(token: &[char]) -> Option<Item> {
    let mon = match (token[0], token[1]) {
        ('x', 'x') => None,
        (letter, digit) => {
            let kind = MonKind::from_fen_char(letter)?;
            let color = if letter.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let cooldown = u8::try_from(digit.to_digit(10)?).ok()?;
            Some(Mon::new(kind, color, cooldown))
        }
    };

    enum Extra {
        Nothing,
        Mana(Mana),
        Consumable(Consumable),
    }

    let extra = match token[2] {
        'x' => Extra::Nothing,
        'M' => Extra::Mana(Mana::Regular(Color::White)),
        'm' => Extra::Mana(Mana::Regular(Color::Black)),
        'U' => Extra::Mana(Mana::Supermana),
        'P' => Extra::Consumable(Consumable::Potion),
        'B' => Extra::Consumable(Consumable::Bomb),
        'Q' => Extra::Consumable(Consumable::BombOrPotion),
        _ => return None,
    };

    match (mon, extra) {
        (Some(mon), Extra::Nothing) => Some(Item::Mon { mon }),
        (Some(mon), Extra::Mana(mana)) => Some(Item::MonWithMana { mon, mana }),
        (Some(mon), Extra::Consumable(consumable)) => {
            Some(Item::MonWithConsumable { mon, consumable })
        }
        (None, Extra::Mana(mana)) => Some(Item::Mana { mana }),
        (None, Extra::Consumable(consumable)) => Some(Item::Consumable { consumable }),
        (None, Extra::Nothing) => None,
    }
}
