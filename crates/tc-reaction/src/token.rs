//! Tokenizer for one side of a reaction equation.
//!
//! Token shapes:
//!
//! ```text
//! Coefficient  leading number of a term: 2, 0.5, .5
//! Formula      chemical formula: H2O, Ca(OH)2, [Fe(CN)6]
//! Phase        trailing parenthesized g | l | s | aq
//! Plus         '+'
//! ```
//!
//! A parenthesized group is read as a phase only when its content is a phase
//! code and it closes the formula, so `Ca(OH)2(s)` is formula `Ca(OH)2` with
//! phase `s`.

use tc_species::Phase;

use crate::error::{ReactionError, ReactionResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Coefficient(f64),
    Formula(String),
    Phase(Phase),
    Plus,
}

fn is_formula_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '(' | ')' | '[' | ']')
}

/// `"(aq)"` to `Some(Phase::Aqueous)`; anything else to `None`.
fn phase_group(text: &str) -> Option<Phase> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    match inner.to_ascii_lowercase().as_str() {
        "g" | "l" | "s" | "aq" => inner.parse().ok(),
        _ => None,
    }
}

/// Split a trailing phase group off a formula word.
fn split_phase(word: &str) -> (&str, Option<Phase>) {
    if let Some(open) = word.rfind('(') {
        if let Some(phase) = phase_group(&word[open..]) {
            return (&word[..open], Some(phase));
        }
    }
    (word, None)
}

pub fn tokenize(side: &str) -> ReactionResult<Vec<Token>> {
    let chars: Vec<char> = side.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    // a coefficient may only open a term
    let mut term_start = true;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '+' {
            tokens.push(Token::Plus);
            term_start = true;
            i += 1;
            continue;
        }

        if term_start && (c.is_ascii_digit() || c == '.') {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let value: f64 = text
                .parse()
                .map_err(|_| ReactionError::InvalidCoefficient { text: text.clone() })?;
            if !(value.is_finite() && value > 0.0) {
                return Err(ReactionError::InvalidCoefficient { text });
            }
            tokens.push(Token::Coefficient(value));
            term_start = false;
            continue;
        }

        if is_formula_char(c) {
            let start = i;
            while i < chars.len() && is_formula_char(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();

            // "H2O (g)": a detached phase group
            if let Some(phase) = phase_group(&word) {
                tokens.push(Token::Phase(phase));
            } else {
                let (formula, phase) = split_phase(&word);
                if !formula.starts_with(|c: char| c.is_ascii_alphabetic() || c == '(' || c == '[') {
                    return Err(ReactionError::Syntax {
                        near: word.clone(),
                        reason: "formula must start with an element symbol or bracket",
                    });
                }
                tokens.push(Token::Formula(formula.to_string()));
                if let Some(phase) = phase {
                    tokens.push(Token::Phase(phase));
                }
            }
            term_start = false;
            continue;
        }

        return Err(ReactionError::Syntax {
            near: chars[i..].iter().collect(),
            reason: "unexpected character",
        });
    }

    Ok(tokens)
}
