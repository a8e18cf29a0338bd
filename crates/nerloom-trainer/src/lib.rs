//! # nerloom Trainer
//!
//! Prepares indexed training data for NER sequence labeling: parses a
//! CoNLL corpus, builds the word and label dictionaries and converts every
//! sentence into id sequences.

pub mod data;
pub mod prepare;

pub use data::{Dataset, Summary, TrainingExample};
pub use prepare::{run_preparation, PrepareOptions, DEFAULT_CORPUS};
