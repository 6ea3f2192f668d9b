//! The beatmap data aggregate parsed from a `.osu` file.

pub mod hit_object;
pub mod timing;

use std::collections::HashMap;

use super::command::{Rgb, Section, Value};

pub use self::{
    hit_object::HitObject,
    timing::{
        AnyTimingPoint, GreenTimingPoint, Inherited, RedTimingPoint, TimingPoint, TimingPoints,
        Uninherited,
    },
};

/// A beatmap, the whole chart data of a `.osu` file.
///
/// It is built up in one forward pass over the source and not modified by this crate afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The `v<digits>` token of the first line, such as `v14`.
    pub format_version: String,
    /// Section headers in the order they appeared, including unknown ones.
    pub sections: Vec<Section>,
    /// `[General]` fields, keyed by lower-cased name.
    pub general: KeyValues,
    /// `[Editor]` fields.
    pub editor: EditorSection,
    /// `[Metadata]` fields.
    pub metadata: MetadataSection,
    /// `[Difficulty]` fields, keyed by lower-cased name.
    pub difficulty: KeyValues,
    /// Raw lines of `[Events]`, each followed by `\n`.
    pub events: String,
    /// Timing points of `[TimingPoints]`.
    pub timing_points: TimingPoints,
    /// The combo colour palette. It is [`Rgb::DEFAULT_PALETTE`] unless the file has a `[Colours]` section.
    pub colours: Vec<Rgb>,
    /// Hit objects of `[HitObjects]` in file order.
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Creates an empty beatmap of the format version, with the default combo colours.
    #[must_use]
    pub fn new(format_version: impl Into<String>) -> Self {
        Self {
            format_version: format_version.into(),
            sections: vec![],
            general: KeyValues::default(),
            editor: EditorSection::default(),
            metadata: MetadataSection::default(),
            difficulty: KeyValues::default(),
            events: String::new(),
            timing_points: TimingPoints::default(),
            colours: Rgb::DEFAULT_PALETTE.to_vec(),
            hit_objects: vec![],
        }
    }

    /// Whether the section header appeared in the source.
    #[must_use]
    pub fn has_section(&self, section: &Section) -> bool {
        self.sections.contains(section)
    }
}

/// Fields of a key-value section, keyed by lower-cased and trimmed name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyValues(HashMap<String, Value>);

impl KeyValues {
    /// Gets the value of the field. `key` must be lower-cased.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets the value of the field, returning the older one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Iterates over the fields in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there is no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `[Editor]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorSection {
    /// Fields other than `Bookmarks`.
    pub fields: KeyValues,
    /// `Bookmarks: 1000,2000,...`, each item normalised.
    pub bookmarks: Vec<Value>,
}

/// `[Metadata]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataSection {
    /// Fields other than `Tags`.
    pub fields: KeyValues,
    /// `Tags: a b c`, split on single spaces.
    pub tags: Vec<String>,
}
