//! Reaction analysis: participants, stoichiometry, carbon counts, phase
//! classification and component resolution.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tc_species::{Component, Phase};

use crate::error::{ReactionError, ReactionResult};
use crate::parser::{ReactionMode, Term, parse_equation};

/// Options applied while turning parsed terms into participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Phase given to species written without one. When `None`, every
    /// species must carry an explicit phase.
    #[serde(default)]
    pub default_phase: Option<Phase>,
}

/// A reactant or product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Positive stoichiometric coefficient as written
    pub coefficient: f64,
    pub molecule: String,
    pub state: Phase,
    /// `"{molecule}-{state}"`, the stoichiometry key
    pub molecule_state: String,
}

impl Participant {
    fn from_term(term: Term, options: &ParseOptions) -> ReactionResult<Self> {
        let state = term
            .phase
            .or(options.default_phase)
            .ok_or_else(|| ReactionError::MissingPhase {
                species: term.formula.clone(),
            })?;
        Ok(Self {
            coefficient: term.coefficient,
            molecule_state: format!("{}-{}", term.formula, state),
            molecule: term.formula,
            state,
        })
    }

    /// Count of `C` not followed by a lowercase letter.
    ///
    /// Subscripts are not read: `C2H6` counts one.
    pub fn carbon_atoms(&self) -> usize {
        let chars: Vec<char> = self.molecule.chars().collect();
        chars
            .iter()
            .enumerate()
            .filter(|(i, c)| {
                **c == 'C' && !chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase())
            })
            .count()
    }
}

/// Immutable analysis of one reaction equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionAnalysis {
    pub equation: String,
    pub mode: ReactionMode,
    pub reactants: Vec<Participant>,
    pub products: Vec<Participant>,
    /// Signed coefficients keyed by `molecule_state`: reactants negative,
    /// products positive. A key on both sides keeps the product entry.
    pub stoichiometry: BTreeMap<String, f64>,
    /// Carbon atoms per `molecule_state`, scaled by coefficient
    pub carbon_count: BTreeMap<String, f64>,
    /// Distinct phase names joined by `-`, in order of appearance
    pub phase: String,
    /// Every participant matched a supplied component
    pub components_resolved: bool,
    /// Participants without a matching component
    pub unresolved: Vec<String>,
    /// Supplied components that take part in the reaction, by reaction id
    pub available_components: Vec<String>,
    /// Net mole change: Σ reactant coefficients − Σ product coefficients
    pub reaction_coefficients: f64,
}

impl ReactionAnalysis {
    /// Parse `equation` and resolve it against `components`.
    ///
    /// With no component list every participant is unresolved.
    pub fn parse(
        equation: &str,
        components: Option<&[Component]>,
        options: &ParseOptions,
    ) -> ReactionResult<Self> {
        let parsed = parse_equation(equation)?;
        let to_participants = |terms: Vec<Term>| -> ReactionResult<Vec<Participant>> {
            terms
                .into_iter()
                .map(|t| Participant::from_term(t, options))
                .collect()
        };
        let reactants = to_participants(parsed.left)?;
        let products = to_participants(parsed.right)?;

        let mut stoichiometry = BTreeMap::new();
        let mut carbon_count = BTreeMap::new();
        let signed = reactants
            .iter()
            .map(|p| (p, -1.0))
            .chain(products.iter().map(|p| (p, 1.0)));
        for (p, sign) in signed {
            stoichiometry.insert(p.molecule_state.clone(), sign * p.coefficient);
            carbon_count.insert(
                p.molecule_state.clone(),
                p.carbon_atoms() as f64 * p.coefficient,
            );
        }

        let mut phases: Vec<Phase> = Vec::new();
        for p in reactants.iter().chain(&products) {
            if !phases.contains(&p.state) {
                phases.push(p.state);
            }
        }
        let phase = phases
            .iter()
            .map(Phase::name)
            .collect::<Vec<_>>()
            .join("-");

        let supplied: BTreeSet<String> = components
            .unwrap_or_default()
            .iter()
            .map(Component::reaction_id)
            .collect();
        let mut unresolved = Vec::new();
        let mut available_components = Vec::new();
        for p in reactants.iter().chain(&products) {
            let list = if supplied.contains(&p.molecule_state) {
                &mut available_components
            } else {
                &mut unresolved
            };
            if !list.contains(&p.molecule_state) {
                list.push(p.molecule_state.clone());
            }
        }

        let reaction_coefficients = reactants.iter().map(|p| p.coefficient).sum::<f64>()
            - products.iter().map(|p| p.coefficient).sum::<f64>();

        if !unresolved.is_empty() {
            tracing::debug!(equation, ?unresolved, "reaction has unresolved components");
        }

        Ok(Self {
            equation: equation.to_string(),
            mode: parsed.mode,
            reactants,
            products,
            stoichiometry,
            carbon_count,
            phase,
            components_resolved: unresolved.is_empty(),
            unresolved,
            available_components,
            reaction_coefficients,
        })
    }

    /// Participant ids in order of appearance, reactants first.
    pub fn participant_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for p in self.reactants.iter().chain(&self.products) {
            if !ids.contains(&p.molecule_state.as_str()) {
                ids.push(&p.molecule_state);
            }
        }
        ids
    }
}
