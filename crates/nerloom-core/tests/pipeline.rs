use std::io::Write;

use nerloom_core::{
    build_dictionaries, parse, to_index, CorpusParser, EntityTag, Error, ParserConfig, UNK, UNK_ID,
};
use tempfile::NamedTempFile;

const CONLL_SAMPLE: &str = "\
-DOCSTART- -X- -X- O

EU NNP B-NP B-ORG
rejects VBZ B-VP O
German JJ B-NP B-MISC
call NN I-NP O
to TO B-VP O
boycott VB I-VP O
British JJ B-NP B-MISC
lamb NN I-NP O
. . O O

Peter NNP B-NP B-PER
Blackburn NNP I-NP I-PER

BRUSSELS NNP B-NP B-LOC
1996-08-22 CD I-NP O

The DT B-NP O
European NNP I-NP B-ORG
Commission NNP I-NP I-ORG
said VBD B-VP O
on IN B-PP O
Thursday NNP B-NP O
it PRP B-NP O
disagreed VBD B-VP O
with IN B-PP O
German JJ B-NP B-MISC
advice NN I-NP O
to TO B-PP O
consumers NNS B-NP O
. . O O

";

fn write_corpus(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn end_to_end_example() {
    let file = write_corpus(
        "-DOCSTART- -X- -X- O\nJohn NNP B-NP B-PER\nlives VBZ B-VP O\nin IN B-PP O\nNew NNP B-NP B-LOC\nYork NNP I-NP I-LOC\n\n",
    );

    let (sentences, labels) = parse(file.path(), 1, 10, None).unwrap();
    assert_eq!(sentences, vec![vec!["John", "lives", "in", "New", "York"]]);
    assert_eq!(labels, vec![vec!["B-PER", "O", "O", "B-LOC", "I-LOC"]]);

    let (sentences, labels) = parse(file.path(), 10, 20, None).unwrap();
    assert!(sentences.is_empty());
    assert!(labels.is_empty());
}

#[test]
fn committed_sentences_respect_bounds_and_alignment() {
    let file = write_corpus(CONLL_SAMPLE);
    let (sentences, labels) = parse(file.path(), 3, 10, None).unwrap();

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences.len(), labels.len());
    for (words, tags) in sentences.iter().zip(&labels) {
        assert_eq!(words.len(), tags.len());
        assert!((3..=10).contains(&words.len()));
    }
}

#[test]
fn every_sample_label_is_a_conll_tag() {
    let file = write_corpus(CONLL_SAMPLE);
    let corpus = CorpusParser::new(ParserConfig::new().without_pruning())
        .parse_file(file.path())
        .unwrap();

    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.stats.unrecognized_labels, 0);
    for (_, tags) in corpus.iter() {
        for pair in tags.windows(2) {
            let from: EntityTag = pair[0].parse().unwrap();
            let to: EntityTag = pair[1].parse().unwrap();
            assert!(EntityTag::is_valid_transition(from, to));
        }
    }
}

#[test]
fn pruned_corpus_indexes_through_unknown() {
    let file = write_corpus(CONLL_SAMPLE);
    let corpus = CorpusParser::new(
        ParserConfig::new()
            .with_length_range(1, 64)
            .with_keep_top(Some(3)),
    )
    .parse_file(file.path())
    .unwrap();

    // "German", "to" and "." occur twice, everything else once.
    let kept: Vec<&str> = corpus.word_freqs.ranked().into_iter().take(3).collect();
    assert_eq!(kept, vec!["to", "German", "."]);

    let dicts = build_dictionaries(&corpus.sentences, &corpus.labels);
    assert_eq!(dicts.words.len(), 4);

    let indexed = to_index(&corpus.sentences, &dicts.words).unwrap();
    assert_eq!(indexed.len(), corpus.sentences.len());
    for (ids, words) in indexed.iter().zip(&corpus.sentences) {
        assert_eq!(ids.len(), words.len());
        for (&id, word) in ids.iter().zip(words) {
            assert_eq!(id == UNK_ID, word == UNK);
        }
    }
}

#[test]
fn dictionary_from_other_corpus_fails_indexing() {
    let file = write_corpus(CONLL_SAMPLE);
    let corpus = CorpusParser::new(ParserConfig::new().without_pruning())
        .parse_file(file.path())
        .unwrap();
    let foreign = build_dictionaries(&[vec!["EU"]], &[vec!["B-ORG"]]);

    let err = to_index(&corpus.sentences, &foreign.words).unwrap_err();
    assert!(matches!(err, Error::UnmappedToken { ref token, .. } if token == "rejects"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train.txt");

    let err = parse(&path, 5, 64, Some(20_000)).unwrap_err();
    match err {
        Error::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
