//! Hit objects with their combo number and combo colour.

use crate::osu::command::{HitObjectType, Position, Rgb};

/// A hit object of `[HitObjects]`, `x,y,time,type,hitSound,...`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// Position in osu!pixels.
    pub position: Position,
    /// Hit time in milliseconds.
    pub time: i64,
    /// The raw type bit flags.
    pub object_type: HitObjectType,
    /// The raw hitsound bit flags.
    pub hitsound: i64,
    /// The combo colour, copied out of the palette when decoded.
    pub colour: Rgb,
    /// Index of [`Self::colour`] in the palette at decode time.
    pub colour_index: usize,
    /// 1-based number of this object in its combo.
    pub combo_index: u32,
    /// Fields after the hitsound, such as slider parameters and hit samples, untouched.
    pub extras: Vec<String>,
}

impl HitObject {
    /// Whether this object starts a combo on its own, by the new combo bit.
    #[must_use]
    pub const fn is_new_combo(&self) -> bool {
        self.object_type.is_new_combo()
    }
}
