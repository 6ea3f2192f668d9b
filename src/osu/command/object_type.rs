//! Bit flags of the `type` field of a hit object.

/// The raw `type` field of a hit object.
///
/// | bit | meaning |
/// |-----|---------|
/// | 0 | hit circle |
/// | 1 | slider |
/// | 2 | new combo |
/// | 3 | spinner |
/// | 4-6 | number of combo colours to skip |
/// | 7 | osu!mania hold note |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HitObjectType(pub u32);

impl HitObjectType {
    /// Hit circle.
    pub const CIRCLE: u32 = 1 << 0;
    /// Slider.
    pub const SLIDER: u32 = 1 << 1;
    /// Starts a new combo.
    pub const NEW_COMBO: u32 = 1 << 2;
    /// Spinner.
    pub const SPINNER: u32 = 1 << 3;
    /// Combo colour skip count, 3 bits.
    pub const COLOUR_SKIP: u32 = (1 << 4) | (1 << 5) | (1 << 6);
    /// osu!mania hold note.
    pub const HOLD: u32 = 1 << 7;

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether any bit of `flag` is set.
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        self.0 & flag != 0
    }

    /// Whether this is a hit circle.
    #[must_use]
    pub const fn is_circle(self) -> bool {
        self.has(Self::CIRCLE)
    }

    /// Whether this is a slider.
    #[must_use]
    pub const fn is_slider(self) -> bool {
        self.has(Self::SLIDER)
    }

    /// Whether the new combo bit is set.
    #[must_use]
    pub const fn is_new_combo(self) -> bool {
        self.has(Self::NEW_COMBO)
    }

    /// Whether this is a spinner.
    #[must_use]
    pub const fn is_spinner(self) -> bool {
        self.has(Self::SPINNER)
    }

    /// Whether this is an osu!mania hold note.
    #[must_use]
    pub const fn is_hold(self) -> bool {
        self.has(Self::HOLD)
    }

    /// How many combo colours to skip when this object starts a new combo, `0..=7`.
    #[must_use]
    pub const fn colour_skip(self) -> u32 {
        (self.0 & Self::COLOUR_SKIP) >> 4
    }
}

impl From<u32> for HitObjectType {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_flags() {
        let circle = HitObjectType(5);
        assert!(circle.is_circle());
        assert!(circle.is_new_combo());
        assert!(!circle.is_slider());
        assert_eq!(circle.colour_skip(), 0);

        let spinner = HitObjectType(12);
        assert!(spinner.is_spinner());
        assert!(spinner.is_new_combo());

        let skipping_slider = HitObjectType(2 | 4 | 48);
        assert!(skipping_slider.is_slider());
        assert_eq!(skipping_slider.colour_skip(), 3);
        assert_eq!(HitObjectType(112 | 128).colour_skip(), 7);
        assert!(HitObjectType(128).is_hold());
    }
}
