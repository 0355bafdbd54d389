//! `sqltfidf` — keyword TF-IDF profiles for SQL workload files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use sql_tfidf::{ReservedVocabulary, TfidfConfig, TfidfEngine, WeightedTerm};

#[derive(Parser)]
#[command(
    name = "sqltfidf",
    about = "Weight SQL reserved keywords per statement with TF-IDF"
)]
struct Cli {
    /// Engine configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read the input as a JSON array of statements instead of one per line.
    /// Lines split on '\n' only; a trailing '\r' stays part of the statement
    #[arg(long, global = true)]
    json_input: bool,

    /// Print debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the TF-IDF profile of every statement as JSON
    Profile {
        /// Workload file
        input: PathBuf,
    },

    /// Print the highest-weighted keywords of every statement
    Top {
        input: PathBuf,
        /// Keywords per statement
        #[arg(short, default_value_t = 3)]
        k: usize,
        /// Print a JSON array of ranked terms per statement
        #[arg(long)]
        json: bool,
    },

    /// Cosine similarity between two statements' profiles
    Similar {
        input: PathBuf,
        first: usize,
        second: usize,
    },

    /// List the reserved-word vocabulary
    Vocab,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &cli.config {
        Some(path) => TfidfConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TfidfConfig::default(),
    };
    let engine = TfidfEngine::new(config);

    match &cli.command {
        Command::Profile { input } => {
            let corpus = read_corpus(input, cli.json_input)?;
            let stats = engine.compute(&corpus);
            println!("{}", stats.to_json()?);
        }
        Command::Top { input, k, json } => {
            let corpus = read_corpus(input, cli.json_input)?;
            let stats = engine.compute(&corpus);
            let ranked = (0..stats.len())
                .map(|i| stats.top_terms(i, *k))
                .collect::<Result<Vec<Vec<WeightedTerm>>, _>>()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                for (i, terms) in ranked.iter().enumerate() {
                    let terms: Vec<String> = terms
                        .iter()
                        .map(|t| format!("{}={:.4}", t.term, t.weight))
                        .collect();
                    println!("{i}\t{}", terms.join(" "));
                }
            }
        }
        Command::Similar {
            input,
            first,
            second,
        } => {
            let corpus = read_corpus(input, cli.json_input)?;
            let stats = engine.compute(&corpus);
            if *first >= stats.len() || *second >= stats.len() {
                bail!("statement index out of range: corpus has {} statements", stats.len());
            }
            println!("{:.6}", stats.similarity(*first, *second)?);
        }
        Command::Vocab => {
            for word in ReservedVocabulary::global().iter() {
                println!("{word}");
            }
        }
    }

    Ok(())
}

fn read_corpus(path: &Path, json: bool) -> Result<Vec<String>> {
    sql_tfidf::read_corpus(path, json)
        .with_context(|| format!("reading workload {}", path.display()))
}
