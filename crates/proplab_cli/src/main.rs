//! Proplab CLI
//!
//! Browse the component catalog, edit properties and print live and code
//! previews from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use proplab_app::Playground;
use proplab_controls::{group_controls, BoundControl, ControlWidget};
use proplab_core::{format_number, PropValue, Registry};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod assign;
mod config;
mod doctor;

use config::ProplabConfig;

#[derive(Parser)]
#[command(name = "proplab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Proplab component playground", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./proplab.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Component selection shared by the editing commands
#[derive(clap::Args)]
struct Target {
    /// Component id (falls back to playground.default_component)
    id: Option<String>,

    /// Property assignment, applied in order through the controls
    #[arg(
        short,
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = assign::parse_assignment
    )]
    set: Vec<(String, String)>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available components
    List,

    /// Show the editing controls of a component
    Controls(Target),

    /// Print the code preview of a component
    Code(Target),

    /// Render the live preview of a component
    Preview(Target),

    /// Audit the component catalog
    Doctor,

    /// Show version and configuration information
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => ProplabConfig::load(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            ProplabConfig::load_from_dir(&cwd)?
        }
    };

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Controls(target) => cmd_controls(&target, &config),
        Commands::Code(target) => cmd_code(&target, &config),
        Commands::Preview(target) => cmd_preview(&target, &config),
        Commands::Doctor => cmd_doctor(&config),
        Commands::Info => cmd_info(&config),
    }
}

fn load_registry() -> Result<Registry> {
    proplab_catalog::builtin_registry().context("Failed to load the component catalog")
}

/// Select the target component and apply its assignments
fn open_session<'r>(
    registry: &'r Registry,
    target: &Target,
    config: &ProplabConfig,
) -> Result<Playground<'r>> {
    let id = target
        .id
        .as_deref()
        .or(config.playground.default_component.as_deref())
        .context("No component given and no playground.default_component configured")?;

    let mut playground = Playground::with_options(registry, config.serializer_options());
    playground
        .try_select(id)
        .context("Run `proplab list` to see the available components")?;
    assign::apply(&mut playground, &target.set)?;

    Ok(playground)
}

fn cmd_list() -> Result<()> {
    let registry = load_registry()?;
    let width = registry.component_ids().map(str::len).max().unwrap_or(0);
    for descriptor in registry.iter() {
        println!("{:<width$}  {}", descriptor.id, descriptor.description, width = width);
    }
    Ok(())
}

fn cmd_controls(target: &Target, config: &ProplabConfig) -> Result<()> {
    let registry = load_registry()?;
    let playground = open_session(&registry, target, config)?;
    let controls = playground.controls();

    info!(
        "{} controls for {}",
        controls.len(),
        playground.selected().unwrap_or_default()
    );

    for (group, members) in group_controls(&controls) {
        println!("{}", group);
        for control in members {
            println!(
                "  {:<26} {:<18} {}",
                control.key.as_str(),
                control.label,
                describe(control)
            );
        }
        println!();
    }
    Ok(())
}

/// Current value and editing range of a control
fn describe(control: &BoundControl) -> String {
    match &control.widget {
        ControlWidget::Toggle => {
            let on = control.value.as_bool().unwrap_or(false);
            format!("toggle  {}", on)
        }
        ControlWidget::Choice { options, multiple } => {
            let kind = if *multiple { "choices" } else { "choice" };
            let listed = options
                .iter()
                .map(|option| {
                    if option.label == option.key {
                        option.key.clone()
                    } else {
                        format!("{} ({})", option.key, option.label)
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            format!("{}  {}  [{}]", kind, control.selected_keys().join(","), listed)
        }
        ControlWidget::Number { min, max, step } => {
            let value = control.value.as_num().map(format_number).unwrap_or_default();
            let bound = |b: Option<f64>| b.map(format_number).unwrap_or_default();
            let mut range = format!("{}..{}", bound(*min), bound(*max));
            if let Some(step) = step {
                range.push_str(&format!(" step {}", format_number(*step)));
            }
            format!("number  {}  [{}]", value, range)
        }
        ControlWidget::Text { placeholder } => {
            let value = match &control.value {
                PropValue::Str(text) => format!("{:?}", text),
                _ => "(unset)".to_string(),
            };
            match placeholder {
                Some(hint) => format!("text    {}  ({})", value, hint),
                None => format!("text    {}", value),
            }
        }
    }
}

fn cmd_code(target: &Target, config: &ProplabConfig) -> Result<()> {
    let registry = load_registry()?;
    let playground = open_session(&registry, target, config)?;
    println!("{}", playground.code());
    Ok(())
}

fn cmd_preview(target: &Target, config: &ProplabConfig) -> Result<()> {
    let registry = load_registry()?;
    let playground = open_session(&registry, target, config)?;
    let preview = playground.preview().context("No component selected")?;
    println!("{}", preview.render());
    Ok(())
}

fn cmd_info(config: &ProplabConfig) -> Result<()> {
    let registry = load_registry()?;

    println!("Proplab");
    println!("=======");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Components: {}", registry.len());
    println!();
    println!("Configuration:");
    match &config.source {
        Some(path) => println!("  - file: {}", path.display()),
        None => println!("  - file: (defaults)"),
    }
    println!(
        "  - default component: {}",
        config.playground.default_component.as_deref().unwrap_or("(none)")
    );
    println!("  - indent: {}", config.codegen.indent);
    println!("  - content placeholder: {}", config.codegen.content_placeholder);
    println!("  - color: {}", config.display.color);

    Ok(())
}

fn cmd_doctor(config: &ProplabConfig) -> Result<()> {
    let categories = doctor::run_doctor(config);
    doctor::print_doctor_results(&categories, doctor::Palette::new(config.display.color));

    // Return error if there are critical issues
    let has_errors = categories
        .iter()
        .any(|c| c.status() == doctor::CheckStatus::Error);

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
