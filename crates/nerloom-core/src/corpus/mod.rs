pub mod frequency;
pub mod parser;

pub use frequency::{rank_by_frequency, FrequencyTable};
pub use parser::{
    parse, prune_rare_words, Corpus, CorpusParser, CorpusStats, ParserConfig, DEFAULT_KEEP_TOP,
    DOCSTART, UNK,
};
