//! # Word and Label Dictionaries
//!
//! Assigns stable integer ids to the distinct words and labels of a corpus.
//! Id 0 is reserved for padding in both dictionaries. The word dictionary
//! also reserves id 1 for [`UNK`], so real words start at 2 and real labels
//! at 1. Ids follow first-seen order over the corpus.

use std::collections::HashMap;

use tracing::info;

use crate::corpus::UNK;

/// Id reserved for padding. Never assigned to a token.
pub const PAD_ID: usize = 0;

/// Id of [`UNK`] in the word dictionary.
pub const UNK_ID: usize = 1;

/// Bidirectional token <-> id mapping with contiguous ids starting at 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    ids: HashMap<String, usize>,
    // tokens[id - 1]
    tokens: Vec<String>,
}

impl Dictionary {
    /// Create an empty dictionary. The first inserted token gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary with [`UNK`] already mapped to [`UNK_ID`].
    pub fn with_unknown() -> Self {
        let mut dictionary = Self::new();
        dictionary.insert(UNK);
        dictionary
    }

    /// Id of `token`, assigning the next free id if it is new.
    pub fn insert(&mut self, token: &str) -> usize {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        self.tokens.push(token.to_string());
        let id = self.tokens.len();
        self.ids.insert(token.to_string(), id);
        id
    }

    pub fn id(&self, token: &str) -> Option<usize> {
        self.ids.get(token).copied()
    }

    pub fn token(&self, id: usize) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// Number of mapped tokens. Padding is not counted.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(idx, token)| (idx + 1, token.as_str()))
    }

    /// The forward table, token to id.
    pub fn to_id_map(&self) -> HashMap<String, usize> {
        self.ids.clone()
    }

    /// The inverse table, id to token.
    pub fn to_token_map(&self) -> HashMap<usize, String> {
        self.iter()
            .map(|(id, token)| (id, token.to_string()))
            .collect()
    }
}

/// Word and label dictionaries built from the same corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionaries {
    pub words: Dictionary,
    pub labels: Dictionary,
}

/// `(word_to_id, id_to_word, label_to_id, id_to_label)`.
pub type MappingTables = (
    HashMap<String, usize>,
    HashMap<usize, String>,
    HashMap<String, usize>,
    HashMap<usize, String>,
);

impl Dictionaries {
    /// Flatten into the four plain mapping tables.
    pub fn into_maps(self) -> MappingTables {
        (
            self.words.to_id_map(),
            self.words.to_token_map(),
            self.labels.to_id_map(),
            self.labels.to_token_map(),
        )
    }
}

/// Build the word and label dictionaries of an already pruned corpus.
pub fn build_dictionaries<W, L>(sentences: &[Vec<W>], labels: &[Vec<L>]) -> Dictionaries
where
    W: AsRef<str>,
    L: AsRef<str>,
{
    let mut words = Dictionary::with_unknown();
    for word in sentences.iter().flatten() {
        words.insert(word.as_ref());
    }

    let mut label_dict = Dictionary::new();
    for label in labels.iter().flatten() {
        label_dict.insert(label.as_ref());
    }

    info!("Unique words in data: {}", words.len());
    info!("Unique labels in data: {}", label_dict.len());

    Dictionaries {
        words,
        labels: label_dict,
    }
}
