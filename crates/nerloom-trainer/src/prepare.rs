//! End-to-end preparation run: corpus file in, indexed dataset out.

use std::path::PathBuf;

use nerloom_core::ParserConfig;
use tracing::info;

use crate::data::{Dataset, Summary};

/// Corpus file loaded when none is given.
pub const DEFAULT_CORPUS: &str = "train.txt";

/// Inputs of a preparation run.
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    pub path: PathBuf,
    pub config: ParserConfig,
}

impl Default for PrepareOptions {
    /// `train.txt`, sentences of 5 to 64 tokens, top 20000 words kept.
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CORPUS),
            config: ParserConfig::new().with_length_range(5, 64),
        }
    }
}

/// Parse and index the corpus, keeping the result in memory.
pub fn run_preparation(options: &PrepareOptions) -> anyhow::Result<Dataset> {
    info!(
        min_length = options.config.min_length,
        max_length = options.config.max_length,
        keep_top = ?options.config.keep_top,
        "Preparing training data"
    );
    let dataset = Dataset::prepare(&options.path, &options.config)?;

    let Summary {
        vocabulary_size,
        label_count,
        tokens,
        ..
    } = dataset.summary();
    info!(
        examples = dataset.len(),
        tokens, vocabulary_size, label_count, "Training data ready"
    );

    Ok(dataset)
}
