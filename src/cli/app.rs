//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use segduty::config::GlobalConfig;
use segduty::output::OutputMode;

/// segduty - Segregation-of-duties risk scoring
#[derive(Parser, Debug)]
#[command(
    name = "segduty",
    version,
    about = "Segregation-of-duties risk scoring for small organizations",
    long_about = "Score how financial-control duties are split between people.\n\n\
                  Tasks declare which other tasks they must never be held with.\n\
                  Scenarios assign tasks to roles; each scenario gets a 0-100 risk score\n\
                  and a prioritized list of recommendations."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Task catalog file (TOML) to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create .segduty.toml with the built-in roles and an empty scenario
    Init {
        /// Overwrite an existing workspace
        #[arg(short, long)]
        force: bool,
    },

    /// Score a scenario (or compare all scenarios)
    Score {
        /// Scenario key (defaults to the active scenario)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Compare every scenario
        #[arg(long, conflicts_with = "scenario")]
        all: bool,
    },

    /// Show prioritized recommendations for a scenario
    Recommend {
        /// Scenario key (defaults to the active scenario)
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// Assign a task to a role
    Assign {
        /// Task id
        task: String,

        /// Role id
        role: String,

        /// Scenario key (defaults to the active scenario)
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// Clear a task's assignment
    Unassign {
        /// Task id
        task: String,

        /// Scenario key (defaults to the active scenario)
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// List tasks with their current holders
    Tasks {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Scenario key (defaults to the active scenario)
        #[arg(short, long)]
        scenario: Option<String>,
    },

    /// Manage roles
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Manage scenarios
    Scenario {
        #[command(subcommand)]
        action: ScenarioAction,
    },

    /// Inspect the task catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Export scenarios, roles and risk analysis as JSON
    Export {
        /// Output file (defaults to segduty-risk-analysis-<millis>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change global configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum RoleAction {
    /// Add a custom role
    Add {
        /// Display name (the id is derived from it)
        name: String,

        /// Role type: board, staff, external
        #[arg(short = 't', long = "type", default_value = "staff")]
        role_type: String,
    },

    /// List roles with their workload
    List {
        /// Scenario key (defaults to the active scenario)
        #[arg(short, long)]
        scenario: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScenarioAction {
    /// List scenarios with their scores
    List,

    /// Make a scenario active
    Use {
        /// Scenario key
        key: String,
    },

    /// Copy a scenario
    Copy {
        /// Scenario key to copy
        key: String,
    },

    /// Rename a scenario
    Rename {
        /// Scenario key
        key: String,

        /// New display name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// Report conflicts declared on one side only
    Check,

    /// Print the catalog in TOML catalog-file layout
    Dump,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,

    /// Set a configuration value
    Set {
        /// One of: display.color, catalog.path, catalog.strict_symmetry
        key: String,

        /// New value (empty clears catalog.path)
        value: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();
    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    let catalog = cli.catalog.as_deref();

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Score { scenario, all }) => {
            let session = commands::Session::open(&config, catalog)?;
            if all {
                commands::compare(&session, output_mode)
            } else {
                commands::score(&session, scenario.as_deref(), output_mode)
            }
        },
        Some(Command::Recommend { scenario }) => {
            let session = commands::Session::open(&config, catalog)?;
            commands::recommend(&session, scenario.as_deref(), output_mode)
        },
        Some(Command::Assign {
            task,
            role,
            scenario,
        }) => {
            let session = commands::Session::open(&config, catalog)?;
            commands::assign(&session, &task, &role, scenario.as_deref(), output_mode)
        },
        Some(Command::Unassign { task, scenario }) => {
            let session = commands::Session::open(&config, catalog)?;
            commands::unassign(&session, &task, scenario.as_deref(), output_mode)
        },
        Some(Command::Tasks { category, scenario }) => {
            let session = commands::Session::open(&config, catalog)?;
            commands::tasks(&session, category.as_deref(), scenario.as_deref(), output_mode)
        },
        Some(Command::Role { action }) => {
            let session = commands::Session::open(&config, catalog)?;
            commands::role_cmd(&session, &action, output_mode)
        },
        Some(Command::Scenario { action }) => {
            let session = commands::Session::open(&config, catalog)?;
            commands::scenario_cmd(&session, &action, output_mode)
        },
        Some(Command::Catalog { action }) => {
            let session = commands::Session::open(&config, catalog)?;
            commands::catalog_cmd(&session, &action, output_mode)
        },
        Some(Command::Export { output }) => {
            let session = commands::Session::open(&config, catalog)?;
            commands::export(&session, output, output_mode)
        },
        Some(Command::Config { action }) => commands::config_cmd(config, &action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("segduty v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("segduty v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'segduty --help' for usage");
                println!("Run 'segduty init' to get started");
            }
            Ok(())
        },
    }
}
