//! Indexed training data built from a CoNLL corpus.

use std::path::Path;

use anyhow::Context;
use nerloom_core::{
    build_dictionaries, from_index, to_index, Corpus, CorpusParser, CorpusStats, Dictionaries,
    ParserConfig,
};
use serde::Serialize;
use tracing::info;

/// A single training example: word ids with aligned label ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub tokens: Vec<usize>,
    pub labels: Vec<usize>,
}

impl TrainingExample {
    pub fn new(tokens: Vec<usize>, labels: Vec<usize>) -> Self {
        Self { tokens, labels }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// What a preparation run produced, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(flatten)]
    pub corpus: CorpusStats,
    /// Word dictionary entries, `UNK` included, padding excluded.
    pub vocabulary_size: usize,
    /// Label dictionary entries, padding excluded.
    pub label_count: usize,
    /// Tokens across all examples.
    pub tokens: usize,
}

/// A corpus converted to id sequences, with the dictionaries that map back.
#[derive(Debug, Clone)]
pub struct Dataset {
    examples: Vec<TrainingExample>,
    dictionaries: Dictionaries,
    stats: CorpusStats,
}

impl Dataset {
    /// Parse the corpus at `path` and index it.
    pub fn prepare<P: AsRef<Path>>(path: P, config: &ParserConfig) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let corpus = CorpusParser::new(config.clone())
            .parse_file(path)
            .with_context(|| format!("failed to parse corpus {}", path.display()))?;
        Self::from_corpus(corpus)
    }

    /// Build dictionaries over `corpus` and index both sides of it.
    pub fn from_corpus(corpus: Corpus) -> anyhow::Result<Self> {
        let dictionaries = build_dictionaries(&corpus.sentences, &corpus.labels);
        let tokens =
            to_index(&corpus.sentences, &dictionaries.words).context("failed to index words")?;
        let labels =
            to_index(&corpus.labels, &dictionaries.labels).context("failed to index labels")?;

        let examples: Vec<TrainingExample> = tokens
            .into_iter()
            .zip(labels)
            .map(|(tokens, labels)| TrainingExample::new(tokens, labels))
            .collect();
        info!("Indexed {} training examples", examples.len());

        Ok(Self {
            examples,
            dictionaries,
            stats: corpus.stats,
        })
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Map an example back to its words and labels.
    pub fn decode(&self, example: &TrainingExample) -> anyhow::Result<(Vec<String>, Vec<String>)> {
        let words = from_index(std::slice::from_ref(&example.tokens), &self.dictionaries.words)
            .context("failed to decode word ids")?;
        let labels = from_index(std::slice::from_ref(&example.labels), &self.dictionaries.labels)
            .context("failed to decode label ids")?;

        let words = words.into_iter().next().unwrap_or_default();
        let labels = labels.into_iter().next().unwrap_or_default();
        Ok((words, labels))
    }

    pub fn summary(&self) -> Summary {
        Summary {
            corpus: self.stats.clone(),
            vocabulary_size: self.dictionaries.words.len(),
            label_count: self.dictionaries.labels.len(),
            tokens: self.examples.iter().map(TrainingExample::len).sum(),
        }
    }
}
