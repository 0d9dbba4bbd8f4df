//! Reaction equation grammar.
//!
//! ```text
//! reaction := side SEPARATOR side
//! side     := term ( '+' term )*
//! term     := Coefficient? Formula Phase?
//! ```
//!
//! The separator is detected by presence with priority `<=>`, `=>`, `=`.

use std::fmt;
use std::iter::Peekable;
use std::vec::IntoIter;

use serde::{Deserialize, Serialize};
use tc_species::Phase;

use crate::error::{ReactionError, ReactionResult};
use crate::token::{Token, tokenize};

/// Reaction separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactionMode {
    /// `<=>`
    Reversible,
    /// `=>`
    Forward,
    /// `=`
    Equilibrium,
}

impl ReactionMode {
    /// Detection order.
    pub const PRIORITY: [ReactionMode; 3] = [
        ReactionMode::Reversible,
        ReactionMode::Forward,
        ReactionMode::Equilibrium,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            ReactionMode::Reversible => "<=>",
            ReactionMode::Forward => "=>",
            ReactionMode::Equilibrium => "=",
        }
    }

    /// First separator present in `equation`.
    pub fn detect(equation: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|m| equation.contains(m.symbol()))
    }
}

impl fmt::Display for ReactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One parsed term before phase defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub formula: String,
    pub phase: Option<Phase>,
}

/// Parsed equation: mode plus left and right terms in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEquation {
    pub mode: ReactionMode,
    pub left: Vec<Term>,
    pub right: Vec<Term>,
}

pub fn parse_equation(equation: &str) -> ReactionResult<ParsedEquation> {
    let mode = ReactionMode::detect(equation).ok_or_else(|| ReactionError::MissingSeparator {
        equation: equation.to_string(),
    })?;

    let (left, right) = equation
        .split_once(mode.symbol())
        .ok_or_else(|| ReactionError::MissingSeparator {
            equation: equation.to_string(),
        })?;

    if [left, right].iter().any(|s| s.contains(['=', '<', '>'])) {
        return Err(ReactionError::MultipleSeparators {
            equation: equation.to_string(),
        });
    }

    Ok(ParsedEquation {
        mode,
        left: parse_side(left)?,
        right: parse_side(right)?,
    })
}

pub fn parse_side(side: &str) -> ReactionResult<Vec<Term>> {
    let mut tokens = tokenize(side)?.into_iter().peekable();
    let mut terms = vec![parse_term(&mut tokens, side)?];

    while let Some(token) = tokens.next() {
        match token {
            Token::Plus => terms.push(parse_term(&mut tokens, side)?),
            other => {
                return Err(ReactionError::Syntax {
                    near: format!("{other:?}"),
                    reason: "expected '+' between species",
                });
            }
        }
    }
    Ok(terms)
}

fn parse_term(tokens: &mut Peekable<IntoIter<Token>>, side: &str) -> ReactionResult<Term> {
    let coefficient = match tokens.peek() {
        Some(Token::Coefficient(c)) => {
            let c = *c;
            tokens.next();
            c
        }
        _ => 1.0,
    };

    let formula = match tokens.next() {
        Some(Token::Formula(f)) => f,
        _ => {
            return Err(ReactionError::Syntax {
                near: side.trim().to_string(),
                reason: "expected a species formula",
            });
        }
    };

    let phase = match tokens.peek() {
        Some(Token::Phase(p)) => {
            let p = *p;
            tokens.next();
            Some(p)
        }
        _ => None,
    };

    Ok(Term {
        coefficient,
        formula,
        phase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_priority() {
        assert_eq!(ReactionMode::detect("A <=> B"), Some(ReactionMode::Reversible));
        assert_eq!(ReactionMode::detect("A => B"), Some(ReactionMode::Forward));
        assert_eq!(ReactionMode::detect("A = B"), Some(ReactionMode::Equilibrium));
        assert_eq!(ReactionMode::detect("A + B"), None);
    }

    #[test]
    fn parses_both_sides() {
        let eq = parse_equation("CO(g) + H2O(g) <=> CO2(g) + H2(g)").unwrap();
        assert_eq!(eq.mode, ReactionMode::Reversible);
        assert_eq!(eq.left.len(), 2);
        assert_eq!(eq.right[0].formula, "CO2");
        assert_eq!(eq.right[1].phase, Some(Phase::Gas));
        assert_eq!(eq.left[0].coefficient, 1.0);
    }

    #[test]
    fn missing_phase_is_left_open() {
        let side = parse_side("2 CH4 + 3O2(g)").unwrap();
        assert_eq!(side[0].phase, None);
        assert_eq!(side[0].coefficient, 2.0);
        assert_eq!(side[1].phase, Some(Phase::Gas));
        assert_eq!(side[1].coefficient, 3.0);
    }

    #[test]
    fn syntax_errors() {
        assert!(matches!(
            parse_equation("H2 + O2"),
            Err(ReactionError::MissingSeparator { .. })
        ));
        assert!(matches!(
            parse_equation("A = B = C"),
            Err(ReactionError::MultipleSeparators { .. })
        ));
        assert!(matches!(
            parse_equation("H2 + => H2O"),
            Err(ReactionError::Syntax { .. })
        ));
        assert!(matches!(
            parse_equation("H2 O2 => H2O"),
            Err(ReactionError::Syntax { .. })
        ));
        assert!(matches!(
            parse_equation(" => H2O"),
            Err(ReactionError::Syntax { .. })
        ));
        assert!(matches!(
            parse_equation("H2(g) => (g)"),
            Err(ReactionError::Syntax { .. })
        ));
    }
}
