//! Conversion between string sequences and id sequences.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::{Error, Result};
use crate::vocab::dictionary::Dictionary;

/// Anything that maps a token to its integer id.
pub trait TokenIndex {
    fn index_of(&self, token: &str) -> Option<usize>;
}

impl TokenIndex for Dictionary {
    fn index_of(&self, token: &str) -> Option<usize> {
        self.id(token)
    }
}

impl<S: BuildHasher> TokenIndex for HashMap<String, usize, S> {
    fn index_of(&self, token: &str) -> Option<usize> {
        self.get(token).copied()
    }
}

/// Replace every token of `sequences` with its id in `mapping`.
///
/// The output has the same shape as the input. The mapping must cover every
/// token, including [`UNK`](crate::corpus::UNK) if the corpus was pruned.
pub fn to_index<S, M>(sequences: &[Vec<S>], mapping: &M) -> Result<Vec<Vec<usize>>>
where
    S: AsRef<str>,
    M: TokenIndex + ?Sized,
{
    sequences
        .iter()
        .enumerate()
        .map(|(sequence, tokens)| {
            tokens
                .iter()
                .enumerate()
                .map(|(position, token)| {
                    let token = token.as_ref();
                    mapping.index_of(token).ok_or_else(|| Error::UnmappedToken {
                        token: token.to_string(),
                        sequence,
                        position,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// Turn id sequences back into tokens.
pub fn from_index(sequences: &[Vec<usize>], dictionary: &Dictionary) -> Result<Vec<Vec<String>>> {
    sequences
        .iter()
        .enumerate()
        .map(|(sequence, ids)| {
            ids.iter()
                .enumerate()
                .map(|(position, &id)| {
                    dictionary
                        .token(id)
                        .map(str::to_string)
                        .ok_or(Error::UnknownId {
                            id,
                            sequence,
                            position,
                        })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::dictionary::build_dictionaries;

    #[test]
    fn test_to_index_preserves_shape() {
        let sentences = vec![vec!["John", "lives", "in", "New", "York"], vec![], vec!["in"]];
        let labels = vec![vec!["B-PER", "O", "O", "B-LOC", "I-LOC"], vec![], vec!["O"]];
        let dicts = build_dictionaries(&sentences, &labels);

        let words = to_index(&sentences, &dicts.words).unwrap();
        assert_eq!(words, vec![vec![2, 3, 4, 5, 6], vec![], vec![4]]);

        let tags = to_index(&labels, &dicts.labels).unwrap();
        assert_eq!(tags, vec![vec![1, 2, 2, 3, 4], vec![], vec![2]]);
    }

    #[test]
    fn test_to_index_with_plain_map() {
        let mapping: HashMap<String, usize> =
            [("O".to_string(), 1), ("B-LOC".to_string(), 2)].into_iter().collect();
        let indexed = to_index(&[vec!["B-LOC", "O"]], &mapping).unwrap();
        assert_eq!(indexed, vec![vec![2, 1]]);
    }

    #[test]
    fn test_unmapped_token_fails() {
        let dicts = build_dictionaries(&[vec!["Berlin"]], &[vec!["B-LOC"]]);
        let err = to_index(&[vec!["Berlin"], vec!["in", "Munich"]], &dicts.words).unwrap_err();

        match err {
            Error::UnmappedToken {
                token,
                sequence,
                position,
            } => {
                assert_eq!(token, "in");
                assert_eq!(sequence, 1);
                assert_eq!(position, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_index_roundtrip() {
        let sentences = vec![vec!["EU", "rejects", "German", "call"]];
        let dicts = build_dictionaries(&sentences, &[vec!["B-ORG", "O", "B-MISC", "O"]]);

        let ids = to_index(&sentences, &dicts.words).unwrap();
        let decoded = from_index(&ids, &dicts.words).unwrap();
        assert_eq!(decoded, sentences);
    }

    #[test]
    fn test_from_index_rejects_padding() {
        let dicts = build_dictionaries(&[vec!["a"]], &[vec!["O"]]);
        let err = from_index(&[vec![2, 0]], &dicts.words).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownId {
                id: 0,
                sequence: 0,
                position: 1
            }
        ));
    }
}
