//! jsonld-diff: structured diff for JSON-LD API model graphs
//!
//! Compares two JSON-LD documents node by node, ignoring serialization order.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use jsonld_diff::{
    cli,
    config::{self, AppConfig, DiffConfigBuilder, MultiDiffConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jsonld-diff")]
#[command(author = "Binarly.io")]
#[command(version)]
#[command(about = "Structured diff for JSON-LD API model graphs", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or changes without --fail-on-change)
    1  Changes detected with --fail-on-change
    3  Error occurred

EXAMPLES:
    # Summary of what changed between two API model dumps
    jsonld-diff diff v1.jsonld v2.jsonld

    # CI check that ignores source maps
    jsonld-diff diff v1.jsonld v2.jsonld --ignore sourcemaps --fail-on-change

    # Export JSON for processing
    jsonld-diff diff v1.jsonld v2.jsonld -o json > diff.json

    # Compare a baseline against several candidates
    jsonld-diff diff-multi base.jsonld candidate-*.jsonld -o changelog")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by `diff` and `diff-multi`
#[derive(Args)]
struct CompareArgs {
    /// Output format (auto selects summary)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Property key to skip in every node (repeatable, comma separated)
    #[arg(long = "ignore", value_delimiter = ',')]
    ignored_properties: Vec<String>,

    /// Do not compare `@context`
    #[arg(long)]
    no_context: bool,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

impl CompareArgs {
    /// CLI settings as a config layer to merge over the config file.
    fn overrides(&self, cli: &Cli) -> AppConfig {
        let mut builder = AppConfig::builder()
            .include_context(!self.no_context)
            .output_format(self.output)
            .output_file(self.output_file.clone())
            .no_color(cli.no_color)
            .fail_on_change(self.fail_on_change)
            .quiet(cli.quiet);
        for key in &self.ignored_properties {
            builder = builder.ignore_property(key.clone());
        }
        builder.build()
    }
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the left (baseline) document
    left: PathBuf,

    /// Path to the right (candidate) document
    right: PathBuf,

    #[command(flatten)]
    compare: CompareArgs,
}

/// Arguments for the `diff-multi` subcommand
#[derive(Parser)]
struct DiffMultiArgs {
    /// Path to the baseline document
    baseline: PathBuf,

    /// Paths to the documents compared against the baseline
    #[arg(required = true)]
    targets: Vec<PathBuf>,

    #[command(flatten)]
    compare: CompareArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two JSON-LD documents
    Diff(DiffArgs),

    /// Compare a baseline document against multiple targets (1:N comparison)
    DiffMulti(DiffMultiArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .jsonld-diff.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Diff(args) => {
            let overrides = args.compare.overrides(cli);
            let (app, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let config = DiffConfigBuilder::new()
                .with_app_config(app)
                .left_path(args.left.clone())
                .right_path(args.right.clone())
                .build()?;
            cli::run_diff(config)
        }

        Commands::DiffMulti(args) => {
            let overrides = args.compare.overrides(cli);
            let (app, _) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            let config = MultiDiffConfig::from_app_config(args.baseline.clone(), args.targets.clone(), app);
            cli::run_diff_multi(config)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "jsonld-diff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config_action(action, cli),
    }
}

fn run_config_action(action: &ConfigAction, cli: &Cli) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir().ok().map(|p| p.display().to_string()),
                config::default_config_path()
                    .and_then(|p| p.parent().map(|dir| dir.display().to_string())),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order, git root after the current directory):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in [".jsonld-diff.yaml", ".jsonld-diff.yml", "jsonld-diff.yaml"] {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".jsonld-diff.yaml");
            if target.exists() {
                anyhow::bail!("{} already exists. Remove it first to re-initialize.", target.display());
            }
            std::fs::write(&target, config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}
