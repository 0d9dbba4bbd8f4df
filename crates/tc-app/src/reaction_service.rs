//! Reaction analysis and reaction thermodynamics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tc_core::timing::timed;
use tc_core::{Prop, Temperature};
use tc_reaction::{
    EquilibriumTemperature, ReactionAnalysis, ReactionMode, ReactionSystem, ReactionThermo,
    Sensitivities,
};
use tc_species::Property;

use crate::context::ThermoContext;
use crate::error::{AppError, AppResult};

/// How Keq is carried from the reference temperature to `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VantHoffMethod {
    /// Constant ΔH° at the reference temperature
    Shortcut,
    /// ΔH°(T) integrated from the reference temperature
    #[default]
    Exact,
}

impl fmt::Display for VantHoffMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortcut => write!(f, "shortcut"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

impl FromStr for VantHoffMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shortcut" => Ok(Self::Shortcut),
            "exact" => Ok(Self::Exact),
            _ => Err(AppError::InvalidInput(format!(
                "Van't Hoff method must be 'shortcut' or 'exact', got '{s}'"
            ))),
        }
    }
}

/// Standard reaction properties at one temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionReport {
    pub equation: String,
    pub mode: ReactionMode,
    pub temperature_k: f64,
    pub delta_h: Option<Prop>,
    pub delta_s: Option<Prop>,
    pub delta_g: Option<Prop>,
    pub delta_cp: Option<Prop>,
    pub equilibrium_constant: Option<Prop>,
}

/// Parse `equation` and resolve it against the store's components.
pub fn analyze_reaction(ctx: &ThermoContext<'_>, equation: &str) -> AppResult<ReactionAnalysis> {
    let analysis = ReactionAnalysis::parse(
        equation,
        Some(ctx.components()),
        &ctx.settings.parse_options(),
    )?;
    tracing::debug!(
        equation,
        mode = ?analysis.mode,
        resolved = analysis.components_resolved,
        "analyzed reaction"
    );
    Ok(analysis)
}

/// Bind `equation` to the store. Fails when a participant is not a known
/// component.
pub fn reaction_system(ctx: &ThermoContext<'_>, equation: &str) -> AppResult<ReactionSystem> {
    let analysis = analyze_reaction(ctx, equation)?;
    let thermo = ReactionThermo::new(analysis, ctx.settings.constants)?
        .with_bisection(ctx.settings.bisection)
        .with_quadrature(ctx.settings.quadrature);
    Ok(ReactionSystem::new(
        thermo,
        &ctx.data.store,
        ctx.components(),
        ctx.key(),
        ctx.settings.polynomial,
    ))
}

/// ΔH°, ΔS°, ΔG° or ΔCp° of `equation` at `t`.
pub fn reaction_property(
    ctx: &ThermoContext<'_>,
    equation: &str,
    prop: Property,
    t: &Temperature,
) -> AppResult<Option<Prop>> {
    timed("reaction_property", || {
        Ok(reaction_system(ctx, equation)?.delta(prop, t)?)
    })
}

pub fn reaction_report(
    ctx: &ThermoContext<'_>,
    equation: &str,
    t: &Temperature,
) -> AppResult<ReactionReport> {
    timed("reaction_report", || {
        let system = reaction_system(ctx, equation)?;
        let analysis = system.thermo().analysis();
        Ok(ReactionReport {
            equation: analysis.equation.clone(),
            mode: analysis.mode,
            temperature_k: t.kelvin(),
            delta_h: system.delta(Property::Enthalpy, t)?,
            delta_s: system.delta(Property::Entropy, t)?,
            delta_g: system.delta(Property::Gibbs, t)?,
            delta_cp: system.delta(Property::HeatCapacity, t)?,
            equilibrium_constant: system.equilibrium_constant(t)?,
        })
    })
}

pub fn equilibrium_constant(
    ctx: &ThermoContext<'_>,
    equation: &str,
    t: &Temperature,
) -> AppResult<Option<Prop>> {
    timed("equilibrium_constant", || {
        Ok(reaction_system(ctx, equation)?.equilibrium_constant(t)?)
    })
}

/// Keq at `t` extrapolated from the reference temperature.
pub fn vant_hoff(
    ctx: &ThermoContext<'_>,
    equation: &str,
    t: &Temperature,
    method: VantHoffMethod,
) -> AppResult<Option<Prop>> {
    timed("vant_hoff", || {
        let system = reaction_system(ctx, equation)?;
        let k = match method {
            VantHoffMethod::Shortcut => system.vant_hoff_shortcut(t)?,
            VantHoffMethod::Exact => system.vant_hoff_exact(t)?,
        };
        Ok(k)
    })
}

pub fn reaction_sensitivities(
    ctx: &ThermoContext<'_>,
    equation: &str,
    t: &Temperature,
) -> AppResult<Option<Sensitivities>> {
    timed("reaction_sensitivities", || {
        Ok(reaction_system(ctx, equation)?.sensitivities(t)?)
    })
}

/// Temperature in `bracket` where Keq equals `target` (ΔG° = 0 when
/// `target` is `None`).
pub fn equilibrium_temperature(
    ctx: &ThermoContext<'_>,
    equation: &str,
    target: Option<f64>,
    bracket: (Temperature, Temperature),
) -> AppResult<Option<EquilibriumTemperature>> {
    timed("equilibrium_temperature", || {
        let result = reaction_system(ctx, equation)?.equilibrium_temperature(target, bracket)?;
        match &result {
            Some(found) => tracing::info!(
                equation,
                temperature = %found.temperature,
                iterations = found.iterations,
                converged = found.converged,
                "equilibrium temperature found"
            ),
            None => tracing::info!(equation, "no equilibrium temperature in bracket"),
        }
        Ok(result)
    })
}
