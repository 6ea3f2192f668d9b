//! Timing points and the lookup of the timing governing a moment.
//!
//! A timing point is either uninherited ("red"), which sets the tempo and meter, or inherited
//! ("green"), which scales the slider velocity of the current red point.

/// A timing point. Fields shared by both kinds are here, and the kind specific ones are in `payload`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint<P> {
    /// Start time in milliseconds.
    pub time: i64,
    /// Default sample set of the hit objects.
    pub sample_set: i64,
    /// Custom sample index of the hit objects.
    pub sample_index: i64,
    /// Volume percentage of the hit objects.
    pub volume: i64,
    /// Whether kiai time is enabled, bit 0 of the effects field.
    pub kiai: bool,
    /// Kind specific fields.
    pub payload: P,
}

/// Payload of an uninherited (red) timing point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uninherited {
    /// Beats in a measure.
    pub meter: i64,
    /// Duration of a beat in milliseconds.
    pub beat_length: f64,
    /// `60000 / beat_length`, rounded to 2 decimal places.
    pub bpm: f64,
}

/// Payload of an inherited (green) timing point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inherited {
    /// The raw value. A negative one is the inverse slider velocity multiplier as a percentage.
    pub bdsv: f64,
    /// Slider velocity multiplier, rounded to 1 decimal place.
    pub multiplier: f64,
}

/// An uninherited (red) timing point.
pub type RedTimingPoint = TimingPoint<Uninherited>;
/// An inherited (green) timing point.
pub type GreenTimingPoint = TimingPoint<Inherited>;

/// A decoded timing point of either kind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyTimingPoint {
    /// Uninherited.
    Red(RedTimingPoint),
    /// Inherited.
    Green(GreenTimingPoint),
}

impl AnyTimingPoint {
    /// Start time in milliseconds.
    #[must_use]
    pub const fn time(&self) -> i64 {
        match self {
            Self::Red(point) => point.time,
            Self::Green(point) => point.time,
        }
    }
}

/// Timing points of a beatmap, split by kind and kept in file order.
///
/// Each list is expected to be in non-decreasing time order as written in the file; it is not sorted.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoints {
    /// Uninherited points.
    pub red: Vec<RedTimingPoint>,
    /// Inherited points.
    pub green: Vec<GreenTimingPoint>,
}

impl TimingPoints {
    /// Appends the point to the list of its kind.
    pub fn push(&mut self, point: AnyTimingPoint) {
        match point {
            AnyTimingPoint::Red(point) => self.red.push(point),
            AnyTimingPoint::Green(point) => self.green.push(point),
        }
    }

    /// Finds the red timing point in effect at `time`.
    ///
    /// It is the last red point not after `time`. The first red point also governs everything
    /// before it, so this returns `None` only if there is no red point at all.
    #[must_use]
    pub fn timing_at(&self, time: i64) -> Option<&RedTimingPoint> {
        let mut candidate = self.red.first()?;
        for point in &self.red {
            if time < point.time {
                return Some(candidate);
            }
            candidate = point;
        }
        Some(candidate)
    }
}

impl super::Beatmap {
    /// Finds the red timing point in effect at `time`. See [`TimingPoints::timing_at`].
    #[must_use]
    pub fn timing_at(&self, time: i64) -> Option<&RedTimingPoint> {
        self.timing_points.timing_at(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(time: i64, beat_length: f64) -> RedTimingPoint {
        TimingPoint {
            time,
            sample_set: 1,
            sample_index: 0,
            volume: 100,
            kiai: false,
            payload: Uninherited {
                meter: 4,
                beat_length,
                bpm: 60000.0 / beat_length,
            },
        }
    }

    fn points() -> TimingPoints {
        TimingPoints {
            red: vec![red(100, 500.0), red(2000, 400.0), red(5000, 300.0)],
            green: vec![],
        }
    }

    #[test]
    fn finds_the_governing_point() {
        let points = points();
        assert_eq!(points.timing_at(100).map(|p| p.time), Some(100));
        assert_eq!(points.timing_at(1999).map(|p| p.time), Some(100));
        assert_eq!(points.timing_at(2000).map(|p| p.time), Some(2000));
        assert_eq!(points.timing_at(4999).map(|p| p.time), Some(2000));
        assert_eq!(points.timing_at(99999).map(|p| p.time), Some(5000));
    }

    #[test]
    fn first_point_governs_earlier_times() {
        assert_eq!(points().timing_at(-500).map(|p| p.time), Some(100));
    }

    #[test]
    fn no_red_points() {
        assert_eq!(TimingPoints::default().timing_at(0), None);
    }

    #[test]
    fn lookup_is_monotonic() {
        let points = points();
        let mut last = i64::MIN;
        for time in (-1000..7000).step_by(250) {
            let found = points.timing_at(time).map_or(i64::MIN, |p| p.time);
            assert!(last <= found, "{last} > {found} at {time}");
            last = found;
        }
    }
}
