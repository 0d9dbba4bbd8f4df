//! tc-reaction: reaction equations and reaction thermodynamics.
//!
//! - `token` / `parser`: reaction string to terms
//! - `analysis`: stoichiometry, carbon counts, phases, component resolution
//! - `thermo`: ΔH°, ΔS°, ΔG°, ΔCp°, Keq, Van't Hoff, sensitivities,
//!   equilibrium temperature
//! - `system`: the same operations evaluated from a coefficient store
//!
//! # Example
//!
//! ```
//! use tc_reaction::{ParseOptions, ReactionAnalysis};
//!
//! let rxn = ReactionAnalysis::parse("2 H2(g) + O2(g) => 2 H2O(g)", None, &ParseOptions::default())
//!     .unwrap();
//! assert_eq!(rxn.stoichiometry["H2O-g"], 2.0);
//! assert_eq!(rxn.reaction_coefficients, 1.0);
//! ```

pub mod analysis;
pub mod error;
pub mod parser;
pub mod system;
pub mod thermo;
pub mod token;

pub use analysis::{ParseOptions, Participant, ReactionAnalysis};
pub use error::{ReactionError, ReactionResult};
pub use parser::{ParsedEquation, ReactionMode, Term, parse_equation};
pub use system::ReactionSystem;
pub use thermo::{EquilibriumTemperature, ReactionThermo, Sensitivities};
