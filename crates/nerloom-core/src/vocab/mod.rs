pub mod dictionary;
pub mod indexer;

pub use dictionary::{build_dictionaries, Dictionaries, Dictionary, MappingTables, PAD_ID, UNK_ID};
pub use indexer::{from_index, to_index, TokenIndex};
