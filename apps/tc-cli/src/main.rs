use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tc_app::{
    AppError, AppResult, Settings, StoreData, ThermoContext, VantHoffMethod, load_settings,
    load_store,
};
use tc_core::units::{Pressure, parse_pressure};
use tc_core::{Basis, Temperature};
use tc_species::{PolynomialType, Property, SweepType, TemperatureSweep};

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "thermochem CLI - NASA polynomial species, reaction and mixture properties", long_about = None)]
struct Cli {
    #[command(flatten)]
    inputs: Inputs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Inputs {
    /// Coefficient store YAML (defaults to the built-in reference set)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Settings YAML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Override the polynomial type (nasa7 or nasa9)
    #[arg(long, global = true)]
    polynomial: Option<PolynomialType>,
    /// Override the property basis (molar or mass)
    #[arg(long, global = true)]
    basis: Option<Basis>,
    /// Report operation timings through the log
    #[arg(long, global = true)]
    timing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Property of one species, at one temperature or along a sweep
    Species {
        /// Component name, formula or formula-state id
        component: String,
        /// enthalpy, entropy, gibbs or heat_capacity
        #[arg(short, long, default_value = "enthalpy")]
        property: Property,
        /// Temperature, e.g. "1000 K" or "25 C"
        #[arg(short, long, default_value = "298.15 K")]
        temperature: Temperature,
        /// Sweep from --temperature to this temperature
        #[arg(long)]
        to: Option<Temperature>,
        /// Number of sweep points
        #[arg(long, default_value_t = 10)]
        points: usize,
        /// Logarithmic sweep spacing
        #[arg(long)]
        log: bool,
    },
    /// Property of every species in the store
    Table {
        #[arg(short, long, default_value = "enthalpy")]
        property: Property,
        #[arg(short, long, default_value = "298.15 K")]
        temperature: Temperature,
    },
    /// Parse a reaction equation and show its stoichiometry
    Analyze {
        /// Equation, e.g. "CO(g) + H2O(g) <=> CO2(g) + H2(g)"
        equation: String,
    },
    /// Standard reaction properties and Keq at a temperature
    Reaction {
        equation: String,
        #[arg(short, long, default_value = "298.15 K")]
        temperature: Temperature,
    },
    /// Equilibrium constant, directly or by Van't Hoff extrapolation
    Keq {
        equation: String,
        #[arg(short, long, default_value = "298.15 K")]
        temperature: Temperature,
        /// Extrapolate from the reference temperature (shortcut or exact)
        #[arg(long)]
        vant_hoff: Option<VantHoffMethod>,
    },
    /// Temperature derivatives of ln K, ΔH and ΔS
    Sensitivities {
        equation: String,
        #[arg(short, long, default_value = "298.15 K")]
        temperature: Temperature,
    },
    /// Temperature at which Keq reaches a target (ΔG = 0 by default)
    EqTemp {
        equation: String,
        /// Lower bracket temperature
        #[arg(long)]
        low: Temperature,
        /// Upper bracket temperature
        #[arg(long)]
        high: Temperature,
        /// Target equilibrium constant
        #[arg(long)]
        target: Option<f64>,
    },
    /// Ideal mixture properties from the store's mole fractions
    Mixture {
        #[arg(short, long, default_value = "298.15 K")]
        temperature: Temperature,
        /// Absolute pressure, e.g. "1 atm" or "5 bar"
        #[arg(short = 'P', long, default_value = "101325 Pa", value_parser = parse_pressure)]
        pressure: Pressure,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.inputs.timing {
        tc_core::timing::enable_timing();
    }

    let (data, settings) = load_inputs(&cli.inputs)?;
    let ctx = ThermoContext::new(&data, &settings);

    match cli.command {
        Commands::Species {
            component,
            property,
            temperature,
            to,
            points,
            log,
        } => match to {
            Some(end) => {
                let sweep_type = if log {
                    SweepType::Logarithmic
                } else {
                    SweepType::Linear
                };
                let sweep = TemperatureSweep::new(temperature, end, points, sweep_type)?;
                print_json(&tc_app::species_series(&ctx, &component, property, &sweep)?)
            }
            None => print_json(&tc_app::species_property(
                &ctx,
                &component,
                property,
                &temperature,
            )?),
        },
        Commands::Table {
            property,
            temperature,
        } => print_json(&tc_app::species_table(&ctx, property, &temperature)?),
        Commands::Analyze { equation } => {
            print_json(&tc_app::analyze_reaction(&ctx, &equation)?)
        }
        Commands::Reaction {
            equation,
            temperature,
        } => print_json(&tc_app::reaction_report(&ctx, &equation, &temperature)?),
        Commands::Keq {
            equation,
            temperature,
            vant_hoff,
        } => {
            let k = match vant_hoff {
                Some(method) => tc_app::vant_hoff(&ctx, &equation, &temperature, method)?,
                None => tc_app::equilibrium_constant(&ctx, &equation, &temperature)?,
            };
            print_json(&k)
        }
        Commands::Sensitivities {
            equation,
            temperature,
        } => print_json(&tc_app::reaction_sensitivities(
            &ctx,
            &equation,
            &temperature,
        )?),
        Commands::EqTemp {
            equation,
            low,
            high,
            target,
        } => print_json(&tc_app::equilibrium_temperature(
            &ctx,
            &equation,
            target,
            (low, high),
        )?),
        Commands::Mixture {
            temperature,
            pressure,
        } => print_json(&tc_app::mixture_report(&ctx, &temperature, pressure)?),
    }
}

fn load_inputs(inputs: &Inputs) -> AppResult<(StoreData, Settings)> {
    let data = match &inputs.store {
        Some(path) => load_store(path)?,
        None => StoreData::builtin()?,
    };
    let mut settings = match &inputs.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    if let Some(poly) = inputs.polynomial {
        settings.polynomial = poly;
    }
    if let Some(basis) = inputs.basis {
        settings.basis = basis;
    }
    tracing::debug!(
        components = data.components.len(),
        records = data.store.len(),
        polynomial = %settings.polynomial,
        "inputs loaded"
    );
    Ok((data, settings))
}

/// Print `value` as pretty JSON; unavailable values print as `null`.
fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| AppError::Format {
        what: "JSON output",
        message: e.to_string(),
    })?;
    println!("{text}");
    Ok(())
}
