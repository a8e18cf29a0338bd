use std::path::PathBuf;

use clap::Parser;
use nerloom_core::corpus::DEFAULT_KEEP_TOP;
use nerloom_core::ParserConfig;
use nerloom_trainer::{run_preparation, PrepareOptions, DEFAULT_CORPUS};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "prepare")]
#[command(about = "Turn a CoNLL NER corpus into indexed training sequences")]
#[command(version)]
struct Cli {
    /// Corpus file
    #[arg(default_value = DEFAULT_CORPUS)]
    path: PathBuf,

    /// Discard sentences shorter than this
    #[arg(long, default_value_t = 5)]
    min_length: usize,

    /// Discard sentences longer than this
    #[arg(long, default_value_t = 64)]
    max_length: usize,

    /// Number of most frequent words to keep
    #[arg(long, default_value_t = DEFAULT_KEEP_TOP, conflicts_with = "no_prune")]
    keep_top: usize,

    /// Keep every word instead of replacing rare ones with UNK
    #[arg(long)]
    no_prune: bool,

    /// Commit a last sentence that lacks a terminating blank line
    #[arg(long)]
    commit_trailing: bool,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> PrepareOptions {
        let keep_top = (!self.no_prune).then_some(self.keep_top);
        PrepareOptions {
            path: self.path.clone(),
            config: ParserConfig::new()
                .with_length_range(self.min_length, self.max_length)
                .with_keep_top(keep_top)
                .with_commit_trailing(self.commit_trailing),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dataset = match run_preparation(&cli.options()) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Preparation failed: {:#}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&dataset.summary()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
    }
}
