//! # CoNLL Corpus Parser
//!
//! Reads a line-oriented token/tag file into sentences and aligned label
//! sequences.
//!
//! The expected layout is the CoNLL-2003 one:
//!
//! ```text
//! -DOCSTART- -X- -X- O
//!
//! EU NNP B-NP B-ORG
//! rejects VBZ B-VP O
//! German JJ B-NP B-MISC
//!
//! Peter NNP B-NP B-PER
//! Blackburn NNP I-NP I-PER
//!
//! ```
//!
//! The first line is a header and is never parsed. A blank line ends a
//! sentence. Token lines carry `word pos chunk label`; only the word and the
//! label are kept. The short `word label` form is accepted as well.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::corpus::frequency::FrequencyTable;
use crate::error::{Error, Result};
use crate::tags::EntityTag;

/// Placeholder substituted for words outside the kept vocabulary.
pub const UNK: &str = "UNK";

/// First field of the header line CoNLL-2003 files start with.
pub const DOCSTART: &str = "-DOCSTART-";

/// Default number of most frequent words kept when pruning.
pub const DEFAULT_KEEP_TOP: usize = 20_000;

/// Configuration for the corpus parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Sentences shorter than this are discarded
    pub min_length: usize,
    /// Sentences longer than this are discarded
    pub max_length: usize,
    /// Keep only this many most frequent words, `None` disables pruning
    pub keep_top: Option<usize>,
    /// Commit a final sentence that is not followed by a blank line
    pub commit_trailing: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: usize::MAX,
            keep_top: Some(DEFAULT_KEEP_TOP),
            commit_trailing: false,
        }
    }
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only sentences with `min..=max` tokens.
    pub fn with_length_range(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Set how many of the most frequent words survive pruning.
    pub fn with_keep_top(mut self, keep_top: Option<usize>) -> Self {
        self.keep_top = keep_top;
        self
    }

    /// Keep every word as-is.
    pub fn without_pruning(self) -> Self {
        self.with_keep_top(None)
    }

    /// Commit the last sentence even when the file lacks a final blank line.
    pub fn with_commit_trailing(mut self, enabled: bool) -> Self {
        self.commit_trailing = enabled;
        self
    }

    /// Whether a sentence of `len` tokens passes the length filter.
    pub fn admits(&self, len: usize) -> bool {
        self.min_length <= len && len <= self.max_length
    }
}

/// Summary figures collected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Committed sentences.
    pub sentences: usize,
    /// Sentences rejected by the length filter.
    pub discarded: usize,
    /// Shortest committed sentence, `None` if nothing was committed.
    pub min_sentence_length: Option<usize>,
    /// Longest committed sentence, `None` if nothing was committed.
    pub max_sentence_length: Option<usize>,
    /// Distinct words seen on token lines.
    pub unique_words: usize,
    /// Distinct labels seen on token lines.
    pub unique_labels: usize,
    /// Label occurrences outside the CoNLL-2003 tag set.
    pub unrecognized_labels: usize,
}

/// A parsed corpus: sentences with aligned labels and their frequencies.
///
/// `sentences[i].len() == labels[i].len()` holds for every `i`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub sentences: Vec<Vec<String>>,
    pub labels: Vec<Vec<String>>,
    /// Word counts over every token line, including discarded sentences.
    pub word_freqs: FrequencyTable,
    /// Label counts over every token line, including discarded sentences.
    pub label_freqs: FrequencyTable,
    pub stats: CorpusStats,
}

impl Corpus {
    /// Number of committed sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over `(words, labels)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&[String], &[String])> {
        self.sentences
            .iter()
            .zip(&self.labels)
            .map(|(words, labels)| (words.as_slice(), labels.as_slice()))
    }

    /// Split into the sentence and label collections.
    pub fn into_parts(self) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
        (self.sentences, self.labels)
    }

    /// Replace every word outside the `keep_top` most frequent with [`UNK`].
    ///
    /// Returns the number of replaced tokens.
    pub fn prune(&mut self, keep_top: usize) -> usize {
        prune_rare_words(&mut self.sentences, &self.word_freqs, keep_top)
    }

    fn commit(&mut self, words: Vec<String>, labels: Vec<String>) {
        let len = words.len();
        let stats = &mut self.stats;
        stats.min_sentence_length = Some(stats.min_sentence_length.map_or(len, |m| m.min(len)));
        stats.max_sentence_length = Some(stats.max_sentence_length.map_or(len, |m| m.max(len)));
        self.sentences.push(words);
        self.labels.push(labels);
    }
}

/// Replace words of `sentences` that are not among the `keep_top` highest
/// ranked entries of `freqs` with [`UNK`]. Labels are never touched.
pub fn prune_rare_words(
    sentences: &mut [Vec<String>],
    freqs: &FrequencyTable,
    keep_top: usize,
) -> usize {
    let kept = freqs.top(keep_top);
    let mut replaced = 0;
    for word in sentences.iter_mut().flatten() {
        if word.as_str() != UNK && !kept.contains(word.as_str()) {
            *word = UNK.to_string();
            replaced += 1;
        }
    }
    replaced
}

/// Parser for CoNLL-style NER corpora.
#[derive(Debug, Clone, Default)]
pub struct CorpusParser {
    config: ParserConfig,
}

impl CorpusParser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse the corpus file at `path`.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Corpus> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Parsing corpus");

        self.parse_reader(BufReader::new(file)).map_err(|err| match err {
            Error::Io(source) => Error::Read {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse a corpus held in memory.
    pub fn parse_str(&self, input: &str) -> Result<Corpus> {
        self.parse_reader(input.as_bytes())
    }

    /// Parse a corpus from any buffered reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Corpus> {
        let mut corpus = Corpus::default();
        let mut words: Vec<String> = Vec::new();
        let mut labels: Vec<String> = Vec::new();

        let mut lines = LossyLines::new(reader).enumerate();
        if let Some((_, header)) = lines.next() {
            let header = header?;
            if !header.starts_with(DOCSTART) {
                debug!(header = %header, "Unexpected header line, skipping it anyway");
            }
        }

        let mut after_header = true;
        for (idx, line) in lines {
            let line = line?;
            let blank = line.trim().is_empty();

            // The blank line closing the header block is not a sentence.
            if after_header {
                after_header = false;
                if blank {
                    continue;
                }
            }

            if blank {
                self.finish_sentence(&mut corpus, &mut words, &mut labels);
                continue;
            }

            let (word, label) = split_token_line(&line, idx + 1)?;
            corpus.word_freqs.observe(word);
            corpus.label_freqs.observe(label);
            if label.parse::<EntityTag>().is_err() {
                corpus.stats.unrecognized_labels += 1;
            }
            words.push(word.to_string());
            labels.push(label.to_string());
        }

        if !words.is_empty() {
            if self.config.commit_trailing {
                self.finish_sentence(&mut corpus, &mut words, &mut labels);
            } else {
                debug!(
                    tokens = words.len(),
                    "Dropping final sentence without terminating blank line"
                );
            }
        }

        corpus.stats.sentences = corpus.sentences.len();
        corpus.stats.unique_words = corpus.word_freqs.len();
        corpus.stats.unique_labels = corpus.label_freqs.len();
        log_summary(&corpus.stats);

        if let Some(keep_top) = self.config.keep_top {
            info!("Pruning non-frequent words, keeping top {}", keep_top);
            let replaced = corpus.prune(keep_top);
            debug!(replaced, "Replaced rare words with {}", UNK);
        }

        Ok(corpus)
    }

    fn finish_sentence(
        &self,
        corpus: &mut Corpus,
        words: &mut Vec<String>,
        labels: &mut Vec<String>,
    ) {
        let words = std::mem::take(words);
        let labels = std::mem::take(labels);

        if self.config.admits(words.len()) {
            corpus.commit(words, labels);
        } else if !words.is_empty() {
            corpus.stats.discarded += 1;
        }
    }
}

/// Parse `path` and return the committed sentences and label sequences.
///
/// `keep_top` of `None` disables pruning.
pub fn parse<P: AsRef<Path>>(
    path: P,
    min_length: usize,
    max_length: usize,
    keep_top: Option<usize>,
) -> Result<(Vec<Vec<String>>, Vec<Vec<String>>)> {
    let config = ParserConfig::new()
        .with_length_range(min_length, max_length)
        .with_keep_top(keep_top);
    let corpus = CorpusParser::new(config).parse_file(path)?;
    Ok(corpus.into_parts())
}

/// Line iterator that decodes each line as UTF-8, replacing invalid bytes
/// with U+FFFD instead of failing. Strips `\n` and `\r\n` terminators.
struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Pick the word and entity label out of a token line.
fn split_token_line(line: &str, line_no: usize) -> Result<(&str, &str)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.len() {
        2 => Ok((fields[0], fields[1])),
        n if n >= 4 => Ok((fields[0], fields[3])),
        n => Err(Error::MalformedLine {
            line: line_no,
            fields: n,
        }),
    }
}

fn log_summary(stats: &CorpusStats) {
    info!("Sentences: {}", stats.sentences);
    match (stats.min_sentence_length, stats.max_sentence_length) {
        (Some(min), Some(max)) => {
            info!("Max sentence length: {}", max);
            info!("Min sentence length: {}", min);
        }
        _ => info!("No sentence passed the length filter"),
    }
    info!("Unique words on corpus: {}", stats.unique_words);
    info!("Unique labels on corpus: {}", stats.unique_labels);
    if stats.unrecognized_labels > 0 {
        warn!(
            count = stats.unrecognized_labels,
            "Labels outside the CoNLL-2003 tag set"
        );
    }
}
