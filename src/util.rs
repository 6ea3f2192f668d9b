/// Rounds `value` to `places` decimal places, with ties away from zero.
#[must_use]
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Trait extension utility for [`str`].
pub(crate) trait StrExtension {
    /// Returns the longest prefix made only of ASCII letters.
    fn leading_letters(&self) -> &Self;
}

impl StrExtension for str {
    fn leading_letters(&self) -> &Self {
        let end = self
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(self.len());
        &self[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(120.0, 2), 120.0);
        assert_eq!(round_to(60000.0 / 333.33, 2), 180.0);
        assert_eq!(round_to(60000.0 / 461.538461538462, 2), 130.0);
        assert_eq!(round_to(1.0 / 0.75, 1), 1.3);
        assert_eq!(round_to(1.0 / 0.3, 1), 3.3);
    }

    #[test]
    fn test_leading_letters() {
        assert_eq!("TimingPoints]".leading_letters(), "TimingPoints");
        assert_eq!("General".leading_letters(), "General");
        assert_eq!("]".leading_letters(), "");
        assert_eq!("Events 2]".leading_letters(), "Events");
    }
}
