//! # SoilSathi CLI (`sathi`)
//!
//! Query the SoilSathi knowledge base from the terminal, or serve it to the
//! advisory backend over HTTP.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sathi search "<query>"` | Ranked scheme and advisory entries |
//! | `sathi context "<query>"` | Prompt-context block for the query |
//! | `sathi detect "<text>"` | Marathi / Hindi / English classification |
//! | `sathi entries` | List the loaded knowledge base |
//! | `sathi get <id>` | Print one entry |
//! | `sathi serve` | Start the HTTP tool server |
//!
//! ## Examples
//!
//! ```bash
//! sathi search "PMFBY" --limit 1
//! sathi search "farm ponds" --region Vidarbha --lang mr --explain
//! sathi context "कर्जमुक्ती योजना" --json
//! sathi --config ./config/sathi.toml serve
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use soilsathi::config;
use soilsathi::{detect_language, get, kb, search, server, Language, RetrieveOptions};

/// SoilSathi knowledge-base retrieval.
#[derive(Parser)]
#[command(
    name = "sathi",
    about = "SoilSathi: scheme and advisory retrieval for farmer queries",
    version,
    long_about = "Ranks a local catalogue of government schemes and agronomy advisories \
    against farmer questions in English, Marathi, or Hindi, and formats the matches \
    as reference context for the advisory prompt."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/sathi.toml` when that file exists, otherwise
    /// built-in defaults are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (`-v` debug, `-vv` trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank knowledge-base entries for a query.
    Search {
        /// Farmer question or keywords.
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt-context block for a query.
    ///
    /// Detects the query language and, unless `--lang` is given, prefers
    /// entries written in that language.
    Context {
        /// Farmer question or keywords.
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print language, entries, and context as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify text as Marathi (mr), Hindi (hi), or English (en).
    Detect {
        /// Text to classify.
        text: String,
    },

    /// List every entry in the loaded knowledge base.
    Entries,

    /// Print a knowledge-base entry by id.
    Get {
        /// Entry id, e.g. `crop-insurance-pmfby`.
        id: String,
    },

    /// Start the HTTP tool server on `[server].bind`.
    Serve,
}

/// Ranking filters shared by `search` and `context`.
#[derive(Args)]
struct FilterArgs {
    /// Maximum number of results (default from `[retrieval].default_limit`).
    #[arg(long)]
    limit: Option<usize>,

    /// Region hint, e.g. `Marathwada`. Boosts, never filters.
    #[arg(long)]
    region: Option<String>,

    /// Preferred entry language (`mr`, `hi`, `en`). Repeatable.
    #[arg(long = "lang")]
    languages: Vec<Language>,

    /// Tag to boost, e.g. `drip`. Repeatable.
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Show how each score was assembled.
    #[arg(long)]
    explain: bool,
}

impl FilterArgs {
    fn into_options(self, cfg: &config::Config) -> RetrieveOptions {
        RetrieveOptions {
            limit: Some(self.limit.unwrap_or(cfg.retrieval.default_limit)),
            region_hint: self.region,
            preferred_languages: self.languages,
            tags: self.tags,
            explain: self.explain,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "soilsathi=info,sathi=info",
        1 => "soilsathi=debug,sathi=debug",
        _ => "soilsathi=trace,sathi=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Needs neither config nor knowledge base
    if let Commands::Detect { text } = &cli.command {
        println!("{}", detect_language(text));
        return Ok(());
    }

    let cfg = config::resolve_config(cli.config.as_deref())?;
    let knowledge = kb::load_knowledge_base(&cfg)?;

    match cli.command {
        Commands::Search {
            query,
            filters,
            json,
        } => {
            let opts = filters.into_options(&cfg);
            search::run_search(&knowledge, &query, &opts, json)?;
        }
        Commands::Context {
            query,
            filters,
            json,
        } => {
            let opts = filters.into_options(&cfg);
            search::run_context(&knowledge, &query, &opts, json)?;
        }
        Commands::Entries => {
            get::run_entries(&knowledge)?;
        }
        Commands::Get { id } => {
            get::run_get(&knowledge, &id)?;
        }
        Commands::Serve => {
            server::run_server(&cfg, knowledge).await?;
        }
        Commands::Detect { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
