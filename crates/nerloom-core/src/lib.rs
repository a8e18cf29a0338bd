//! # nerloom Core
//!
//! Turns a CoNLL-2003 style NER corpus into integer sequences ready for an
//! embedding lookup. Three stages run one after the other: the corpus parser
//! groups token lines into length-filtered sentences and prunes rare words,
//! the dictionary builder assigns ids to words and labels, and the indexer
//! maps string sequences to id sequences.
//!
//! ## Quick Start
//!
//! ```rust
//! use nerloom_core::{build_dictionaries, to_index, CorpusParser, ParserConfig};
//!
//! let input = "-DOCSTART- -X- -X- O\n\nJohn NNP B-NP B-PER\nlives VBZ B-VP O\n\n";
//! let parser = CorpusParser::new(ParserConfig::new().with_length_range(1, 64));
//! let corpus = parser.parse_str(input).unwrap();
//!
//! let dicts = build_dictionaries(&corpus.sentences, &corpus.labels);
//! let words = to_index(&corpus.sentences, &dicts.words).unwrap();
//! let labels = to_index(&corpus.labels, &dicts.labels).unwrap();
//!
//! assert_eq!(words, vec![vec![2, 3]]);
//! assert_eq!(labels, vec![vec![1, 2]]);
//! ```
pub mod corpus;
pub mod error;
pub mod tags;
pub mod vocab;

// Re-export primary API
pub use corpus::{
    parse, rank_by_frequency, Corpus, CorpusParser, CorpusStats, FrequencyTable, ParserConfig, UNK,
};
pub use error::{Error, Result};
pub use tags::{EntityTag, EntityType};
pub use vocab::{
    build_dictionaries, from_index, to_index, Dictionaries, Dictionary, TokenIndex, PAD_ID, UNK_ID,
};
