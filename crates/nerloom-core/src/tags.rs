//! # CoNLL-2003 Entity Tags
//!
//! The BIO (Begin-Inside-Outside) tag set used by the CoNLL-2003 shared task.
//! The parser does not enforce it; labels are kept as strings and tags that
//! fall outside this set are only counted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// BIO tags of the CoNLL-2003 named entity annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityTag {
    // Organization
    BeginOrg,
    InsideOrg,
    // Location
    BeginLoc,
    InsideLoc,
    // Person
    BeginPer,
    InsidePer,
    // Miscellaneous
    BeginMisc,
    InsideMisc,
    // Outside (not an entity)
    Outside,
}

impl EntityTag {
    /// Total number of distinct tags.
    pub const NUM_TAGS: usize = 9;

    /// Get all tags in annotation-guide order.
    pub fn all_tags() -> &'static [EntityTag] {
        &[
            EntityTag::BeginOrg,
            EntityTag::InsideOrg,
            EntityTag::BeginLoc,
            EntityTag::InsideLoc,
            EntityTag::BeginPer,
            EntityTag::InsidePer,
            EntityTag::BeginMisc,
            EntityTag::InsideMisc,
            EntityTag::Outside,
        ]
    }

    /// The label as written in the corpus.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityTag::BeginOrg => "B-ORG",
            EntityTag::InsideOrg => "I-ORG",
            EntityTag::BeginLoc => "B-LOC",
            EntityTag::InsideLoc => "I-LOC",
            EntityTag::BeginPer => "B-PER",
            EntityTag::InsidePer => "I-PER",
            EntityTag::BeginMisc => "B-MISC",
            EntityTag::InsideMisc => "I-MISC",
            EntityTag::Outside => "O",
        }
    }

    /// Check if this is a "Begin" tag.
    pub fn is_begin(&self) -> bool {
        matches!(
            self,
            EntityTag::BeginOrg | EntityTag::BeginLoc | EntityTag::BeginPer | EntityTag::BeginMisc
        )
    }

    /// Check if this is an "Inside" tag.
    pub fn is_inside(&self) -> bool {
        matches!(
            self,
            EntityTag::InsideOrg
                | EntityTag::InsideLoc
                | EntityTag::InsidePer
                | EntityTag::InsideMisc
        )
    }

    /// Get the entity type for this tag.
    pub fn entity_type(&self) -> Option<EntityType> {
        match self {
            EntityTag::BeginOrg | EntityTag::InsideOrg => Some(EntityType::Organization),
            EntityTag::BeginLoc | EntityTag::InsideLoc => Some(EntityType::Location),
            EntityTag::BeginPer | EntityTag::InsidePer => Some(EntityType::Person),
            EntityTag::BeginMisc | EntityTag::InsideMisc => Some(EntityType::Miscellaneous),
            EntityTag::Outside => None,
        }
    }

    /// Check if `to` may follow `from` in a BIO sequence.
    ///
    /// An inside tag must continue an entity of the same type.
    pub fn is_valid_transition(from: EntityTag, to: EntityTag) -> bool {
        if !to.is_inside() {
            return true;
        }
        from.entity_type().is_some() && from.entity_type() == to.entity_type()
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not part of the CoNLL-2003 tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity tag {:?}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for EntityTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityTag::all_tags()
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// Entity categories annotated in CoNLL-2003.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Organization,
    Location,
    Person,
    Miscellaneous,
}
