//! Normalised field values of the key-value sections.

use std::fmt;

/// A value of a `Key: Value` line, coerced into an integer when the whole text is one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The trimmed text parsed entirely as an integer.
    Integer(i64),
    /// Any other trimmed text, including decimals such as `0.7`.
    Text(String),
}

impl Value {
    /// Trims `raw` and tries to read it as an integer, falling back to the trimmed text.
    ///
    /// ```
    /// use osu_rs::osu::command::Value;
    ///
    /// assert_eq!(Value::normalize(" 42 "), Value::Integer(42));
    /// assert_eq!(Value::normalize(" 0.7"), Value::Text("0.7".into()));
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .parse()
            .map_or_else(|_| Self::Text(trimmed.to_owned()), Self::Integer)
    }

    /// Returns the integer if this is [`Value::Integer`].
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this is [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
