use clap::{Args, Parser, Subcommand, ValueEnum};
use mt_core::units::{MOLAR_VOLUME_UNIT, PRESSURE_UNIT};
use mt_eos::{
    EosResult, EosVariant, FluidCriticalProperties, FluidError, Isotherm, SweepDefinition,
    SweepType, compute_eos, filter_species_catalog, isotherm, isotherm_all_variants,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod fluid_file;

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Usage error: {what}")]
    Usage { what: String },
}

#[derive(Parser)]
#[command(name = "mt-cli")]
#[command(about = "moltherm CLI - cubic equations of state for pure fluids", long_about = None)]
struct Cli {
    /// Log solver decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one state at temperature and pressure or molar volume
    State {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Temperature [K]
        #[arg(long)]
        t: f64,
        /// Pressure [bar]
        #[arg(long)]
        p: Option<f64>,
        /// Molar volume [L/mol]
        #[arg(long)]
        v: Option<f64>,
        /// Equation of state (vdw, rk, rks, pr)
        #[arg(long, default_value = "pr")]
        eos: EosVariant,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Tabulate pressure against molar volume along an isotherm
    Isotherm {
        #[command(flatten)]
        fluid: FluidArgs,
        /// Temperature [K]
        #[arg(long)]
        t: f64,
        /// Smallest molar volume [L/mol]
        #[arg(long)]
        v_min: f64,
        /// Largest molar volume [L/mol]
        #[arg(long)]
        v_max: f64,
        /// Number of volumes
        #[arg(long, default_value_t = 50)]
        points: usize,
        /// Space volumes logarithmically instead of linearly
        #[arg(long)]
        log: bool,
        /// Equation of state (vdw, rk, rks, pr)
        #[arg(long, default_value = "pr", conflicts_with = "all")]
        eos: EosVariant,
        /// Run every equation of state
        #[arg(long)]
        all: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the built-in species catalog
    Species {
        /// Filter by name, formula or alias
        query: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct FluidArgs {
    /// Catalog species (name, formula or alias)
    #[arg(long)]
    fluid: Option<String>,
    /// YAML or JSON fluid definition file
    #[arg(long)]
    fluid_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Serialize)]
struct SpeciesRow {
    name: &'static str,
    formula: &'static str,
    tc: f64,
    pc: f64,
    omega: f64,
    molar_mass: f64,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::State {
            fluid,
            t,
            p,
            v,
            eos,
            format,
        } => cmd_state(&fluid, t, p, v, eos, format),
        Commands::Isotherm {
            fluid,
            t,
            v_min,
            v_max,
            points,
            log,
            eos,
            all,
            format,
        } => {
            let sweep_type = if log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            let sweep = SweepDefinition::new(v_min, v_max, points, sweep_type)?;
            let variants = if all { None } else { Some(eos) };
            cmd_isotherm(&fluid, t, &sweep, variants, format)
        }
        Commands::Species { query, format } => cmd_species(query.as_deref(), format),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_fluid(args: &FluidArgs) -> CliResult<FluidCriticalProperties> {
    match (&args.fluid, &args.fluid_file) {
        (_, Some(path)) => {
            let fluid = fluid_file::load_fluid(path)?;
            info!(fluid = fluid.name(), path = %path.display(), "loaded fluid definition");
            Ok(fluid)
        }
        (Some(name), None) => Ok(FluidCriticalProperties::lookup(name)?),
        (None, None) => Err(CliError::Usage {
            what: "one of --fluid or --fluid-file is required".to_string(),
        }),
    }
}

fn emit<T: Serialize>(value: &T, format: OutputFormat) -> CliResult<bool> {
    match format {
        OutputFormat::Text => Ok(false),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(true)
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
            Ok(true)
        }
    }
}

fn cmd_state(
    fluid_args: &FluidArgs,
    t: f64,
    p: Option<f64>,
    v: Option<f64>,
    variant: EosVariant,
    format: OutputFormat,
) -> CliResult<()> {
    let mut fluid = resolve_fluid(fluid_args)?;
    let result: EosResult = compute_eos(&mut fluid, t, p, v, variant)?;
    debug!(vc = ?fluid.vc(), "critical volume");

    if !emit(&result, format)? {
        println!("{fluid}");
        println!();
        println!("{result}");
    }
    Ok(())
}

fn cmd_isotherm(
    fluid_args: &FluidArgs,
    t: f64,
    sweep: &SweepDefinition,
    variant: Option<EosVariant>,
    format: OutputFormat,
) -> CliResult<()> {
    let fluid = resolve_fluid(fluid_args)?;
    let curves = match variant {
        Some(variant) => vec![isotherm(&fluid, t, sweep, variant)?],
        None => isotherm_all_variants(&fluid, t, sweep)?,
    };

    if !emit(&curves, format)? {
        println!("Isotherm for {} at {:.2} K, {}", fluid.name(), t, sweep);
        for curve in &curves {
            print_isotherm(curve);
        }
    }
    Ok(())
}

fn print_isotherm(curve: &Isotherm) {
    println!("\n{}:", curve.variant.label());
    println!(
        "  {:>14}  {:>14}",
        format!("V [{MOLAR_VOLUME_UNIT}]"),
        format!("P [{PRESSURE_UNIT}]")
    );
    for point in &curve.points {
        match point.pressure {
            Some(p) => println!("  {:>14.6}  {:>14.4}", point.molar_volume, p),
            None => println!("  {:>14.6}  {:>14}", point.molar_volume, "-"),
        }
    }
    println!(
        "  {} points, {} below the covolume",
        curve.num_successful, curve.num_failed
    );
}

fn cmd_species(query: Option<&str>, format: OutputFormat) -> CliResult<()> {
    let entries = filter_species_catalog(query.unwrap_or(""));
    let rows: Vec<SpeciesRow> = entries
        .iter()
        .map(|entry| {
            let data = entry.species.data();
            SpeciesRow {
                name: entry.display_name,
                formula: data.formula,
                tc: data.tc,
                pc: data.pc,
                omega: data.omega,
                molar_mass: data.molar_mass,
            }
        })
        .collect();

    if emit(&rows, format)? {
        return Ok(());
    }
    if rows.is_empty() {
        println!("No species match '{}'", query.unwrap_or(""));
        return Ok(());
    }
    println!(
        "  {:<18} {:<8} {:>9} {:>9} {:>7} {:>9}",
        "name", "formula", "Tc [K]", "Pc [bar]", "omega", "M [g/mol]"
    );
    for row in rows {
        println!(
            "  {:<18} {:<8} {:>9.2} {:>9.2} {:>7.3} {:>9.3}",
            row.name, row.formula, row.tc, row.pc, row.omega, row.molar_mass
        );
    }
    Ok(())
}
