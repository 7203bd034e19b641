//! numword CLI - translate digit sequences into word tokens.
//!
//! ```text
//! numword translate [--language NAME] [--strategy table|chain] [--no-fallback] INPUT...
//! numword demo [--absent]
//! ```
//!
//! Program output goes to stdout. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

use std::io::{Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use numword_config::{NumwordConfig, Strategy};
use numword_core::{Chain, Counter, Translator, resolve_status};

#[derive(Parser)]
#[command(name = "numword")]
#[command(about = "Translate digit sequences into word tokens")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate each input and print one line per input
    Translate {
        /// Character sequences to translate
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
        /// Built-in language (english, french) or a custom table name
        #[arg(short, long)]
        language: Option<String>,
        /// Translation strategy: table or chain
        #[arg(short, long)]
        strategy: Option<Strategy>,
        /// Leave unrecognised symbols as-is (chain strategy only)
        #[arg(long)]
        no_fallback: bool,
        /// Config file to use instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Resolve an optional value and print the status and counter
    Demo {
        /// Resolve an absent value instead of 1
        #[arg(long)]
        absent: bool,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Translate {
            inputs,
            language,
            strategy,
            no_fallback,
            config,
        } => run_translate(
            &inputs,
            language.as_deref(),
            strategy,
            no_fallback,
            config,
        ),
        Commands::Demo { absent } => run_demo(absent),
    }
}

fn load_config(explicit: Option<PathBuf>) -> Result<NumwordConfig> {
    let loaded = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            NumwordConfig::load_from(&path)
        }
        None => NumwordConfig::load(),
    };
    Ok(loaded.context("loading config")?.unwrap_or_default())
}

fn run_translate(
    inputs: &[String],
    language: Option<&str>,
    strategy: Option<Strategy>,
    no_fallback: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config)?;
    let name = language.or(config.language()).unwrap_or("english");
    let table = config
        .resolve_table(name)
        .with_context(|| format!("resolving language {name:?}"))?;
    let strategy = strategy.unwrap_or(config.strategy());
    tracing::debug!(language = name, strategy = strategy.as_str(), "translating");

    let lines: Vec<String> = match strategy {
        Strategy::Table => {
            if no_fallback {
                bail!("--no-fallback requires --strategy chain");
            }
            let translator = Translator::owned(table);
            inputs.iter().map(|input| translator.translate(input)).collect()
        }
        Strategy::Chain => {
            let builder = Chain::open_from_table(&table);
            let chain = if no_fallback {
                builder.build()
            } else {
                builder.with_fallback(table.default_token().clone())
            };
            inputs.iter().map(|input| chain.translate(input)).collect()
        }
    };

    let mut out = stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn run_demo(absent: bool) -> Result<()> {
    let mut counter = Counter::default();
    let value = if absent { None } else { Some(1) };
    let status = resolve_status(value, &mut counter);

    let mut out = stdout().lock();
    writeln!(out, "Status -> {status}")?;
    writeln!(out, "Value -> {}", counter.get())?;
    Ok(())
}
