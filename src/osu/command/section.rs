//! Definitions of the section names in a `.osu` file.

use std::fmt;

/// A section opened by a `[Name]` header line. Names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `[General]`, key-value pairs.
    General,
    /// `[Editor]`, key-value pairs and the `Bookmarks` list.
    Editor,
    /// `[Metadata]`, key-value pairs and the `Tags` list.
    Metadata,
    /// `[Difficulty]`, key-value pairs.
    Difficulty,
    /// `[Events]`, captured verbatim.
    Events,
    /// `[TimingPoints]`, comma separated timing points.
    TimingPoints,
    /// `[Colours]`, `Name : r,g,b` combo colours.
    Colours,
    /// `[HitObjects]`, comma separated hit objects.
    HitObjects,
    /// Any other name, stored lower-cased. Its body lines are discarded.
    Unknown(String),
}

impl Section {
    /// Resolves a section from its bracketed name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "general" => Self::General,
            "editor" => Self::Editor,
            "metadata" => Self::Metadata,
            "difficulty" => Self::Difficulty,
            "events" => Self::Events,
            "timingpoints" => Self::TimingPoints,
            "colours" => Self::Colours,
            "hitobjects" => Self::HitObjects,
            _ => Self::Unknown(lower),
        }
    }

    /// The lower-cased name of the section.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::General => "general",
            Self::Editor => "editor",
            Self::Metadata => "metadata",
            Self::Difficulty => "difficulty",
            Self::Events => "events",
            Self::TimingPoints => "timingpoints",
            Self::Colours => "colours",
            Self::HitObjects => "hitobjects",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name())
    }
}
