//! dictum CLI Client
//!
//! Thin command-line interface over the session operations: parse
//! arguments, run one query, print the result.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use dictum::{Database, MatchingStrategy, Session};

/// dictum CLI
#[derive(Parser, Debug)]
#[command(name = "dictum-cli")]
#[command(about = "CLI for DICT dictionary servers")]
#[command(version)]
struct Args {
    /// DICT server hostname
    #[arg(short = 'H', long, default_value = "dict.org")]
    host: String,

    /// DICT server port
    #[arg(short, long, default_value_t = dictum::DEFAULT_PORT)]
    port: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch definitions for a word
    Define {
        /// The word to look up
        word: String,

        /// Database to search ("*" = all, "!" = first with a hit)
        #[arg(short, long, default_value = "*")]
        database: String,
    },

    /// List approximate matches for a word
    Match {
        /// The word pattern to match
        word: String,

        /// Matching strategy (e.g. exact, prefix)
        #[arg(short, long, default_value = "prefix")]
        strategy: String,

        /// Database to search ("*" = all, "!" = first with a hit)
        #[arg(short, long, default_value = "*")]
        database: String,
    },

    /// List the databases the server offers
    Databases,

    /// List the matching strategies the server supports
    Strategies,

    /// Show metadata about one database
    Info {
        /// Database name
        database: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> dictum::Result<()> {
    let mut session = Session::connect(&args.host, args.port)?;

    match args.command {
        Commands::Define { word, database } => {
            let database = Database::new(database, "");
            let definitions = session.definitions(&word, &database)?;
            if definitions.is_empty() {
                println!("No definitions found for \"{}\"", word);
            }
            for definition in definitions {
                println!("From {} [{}]:", definition.database(), definition.word());
                println!("{}", definition.text());
                println!();
            }
        }
        Commands::Match {
            word,
            strategy,
            database,
        } => {
            let database = Database::new(database, "");
            let strategy = MatchingStrategy::new(strategy, "");
            let matches = session.matches(&word, &strategy, &database)?;
            if matches.is_empty() {
                println!("No matches found for \"{}\"", word);
            }
            for matched in matches {
                println!("{}", matched);
            }
        }
        Commands::Databases => {
            for database in session.databases()?.values() {
                println!("{:<16} {}", database.name(), database.description());
            }
        }
        Commands::Strategies => {
            for strategy in session.strategies()? {
                println!("{:<16} {}", strategy.name(), strategy.description());
            }
        }
        Commands::Info { database } => {
            let database = Database::new(database, "");
            println!("{}", session.database_info(&database)?);
        }
    }

    session.close();
    Ok(())
}
