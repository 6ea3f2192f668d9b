//! Parsing [`Beatmap`] from [`TokenStream`](super::lex::TokenStream).
//!
//! Raw [String] == [lex](super::lex) ==> [`TokenStream`](super::lex::TokenStream) == [parse](self) ==> [`Beatmap`] (in [`ParseOutput`])
//!
//! The parser makes one forward pass over the tokens. A `[Section]` token switches the active
//! section, and every body token is decoded by the decoder of the active section.

pub mod colour;
pub mod hit_object;
pub mod key_value;
pub mod timing_point;

use std::{fmt, str::FromStr};

use thiserror::Error;

use super::{
    ErrorPolicy, ParseConfig,
    command::{Section, SourceRangeMixin, SourceRangeMixinExt},
    lex::token::{Token, TokenWithRange},
    model::Beatmap,
};

use self::hit_object::ComboCursor;

/// A value derived by division while decoding a timing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DerivedValue {
    /// BPM of a red timing point, divided by the beat length.
    Bpm,
    /// Slider velocity multiplier of a green timing point, divided by the scaling percentage.
    SliderVelocity,
}

impl fmt::Display for DerivedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bpm => "BPM",
            Self::SliderVelocity => "slider velocity multiplier",
        })
    }
}

/// An error occurred when parsing the [`TokenStream`](super::lex::TokenStream).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// The first line is absent or has no `v<digits>` format version.
    #[error("expected format version `v<digits>` on the first line")]
    MissingHeader,
    /// A body line lacks the separator its section requires, or a field is not a valid number.
    #[error("malformed line in {section}: {reason}")]
    MalformedLine {
        /// The active section.
        section: Section,
        /// What was wrong.
        reason: String,
    },
    /// The divisor was zero.
    #[error("division by zero while computing {0}")]
    DivisionByZero(DerivedValue),
    /// A combo colour was requested from an empty palette, when `[Colours]` has no entries.
    #[error("combo colour requested from an empty colour palette")]
    EmptyPalette,
}

impl ParseError {
    pub(crate) fn malformed(section: Section, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            section,
            reason: reason.into(),
        }
    }
}

/// Type alias of `core::result::Result<T, ParseError>`
pub(crate) type Result<T> = core::result::Result<T, ParseError>;

/// A parse error with position information.
pub type ParseErrorWithRange = SourceRangeMixin<ParseError>;

/// Parses the field at `index` of a split line.
pub(crate) fn parse_field<T: FromStr>(
    fields: &[&str],
    index: usize,
    name: &str,
    section: Section,
) -> Result<T> {
    let raw = fields.get(index).ok_or_else(|| {
        ParseError::malformed(section.clone(), format!("missing field #{index} `{name}`"))
    })?;
    raw.trim().parse().map_err(|_| {
        ParseError::malformed(
            section,
            format!("field #{index} `{name}` is not a valid number: {raw:?}"),
        )
    })
}

/// Parses a time field in milliseconds, truncating a decimal part toward zero.
pub(crate) fn parse_time(fields: &[&str], index: usize, section: Section) -> Result<i64> {
    let value: f64 = parse_field(fields, index, "time", section.clone())?;
    if !value.is_finite() {
        return Err(ParseError::malformed(
            section,
            format!("field #{index} `time` is not finite: {value}"),
        ));
    }
    // Saturates outside of the `i64` range.
    Ok(value.trunc() as i64)
}

/// Finds the `v<digits>` token in the first line.
fn format_version(line: &str) -> Option<&str> {
    line.match_indices('v').find_map(|(index, _)| {
        let rest = &line[index + 1..];
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        (digits > 0).then(|| &line[index..=index + digits])
    })
}

/// Parse output of [`Beatmap::from_token_stream`].
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ParseOutput {
    /// The beatmap, or the error which aborted the parsing.
    pub beatmap: core::result::Result<Beatmap, ParseErrorWithRange>,
    /// Errors of the lines skipped under [`ErrorPolicy::Collect`].
    pub errors: Vec<ParseErrorWithRange>,
}

/// Cursor state owned by the parser during one pass.
#[derive(Debug, Default)]
struct ParseState {
    section: Option<Section>,
    combo: ComboCursor,
}

impl ParseState {
    fn enter(&mut self, section: &Section, beatmap: &mut Beatmap) {
        tracing::debug!(section = section.name(), "entering section");
        if !beatmap.has_section(section) {
            match section {
                Section::Colours => {
                    tracing::debug!("replacing the default colour palette");
                    beatmap.colours.clear();
                }
                Section::Unknown(name) => {
                    tracing::warn!(section = %name, "unknown section, its lines are discarded");
                }
                _ => {}
            }
            beatmap.sections.push(section.clone());
        }
        self.section = Some(section.clone());
    }

    fn on_body(&mut self, line: &str, beatmap: &mut Beatmap) -> Result<()> {
        let Some(section) = &self.section else {
            tracing::trace!(line, "line outside of any section");
            return Ok(());
        };
        match section {
            Section::General => key_value::parse_fields(line, &mut beatmap.general, Section::General),
            Section::Difficulty => {
                key_value::parse_fields(line, &mut beatmap.difficulty, Section::Difficulty)
            }
            Section::Editor => key_value::parse_editor(line, &mut beatmap.editor),
            Section::Metadata => key_value::parse_metadata(line, &mut beatmap.metadata),
            Section::Events => {
                beatmap.events.push_str(line);
                beatmap.events.push('\n');
                Ok(())
            }
            Section::TimingPoints => {
                let point = timing_point::parse_timing_point(line)?;
                tracing::trace!(?point, "timing point");
                beatmap.timing_points.push(point);
                Ok(())
            }
            Section::Colours => {
                beatmap.colours.push(colour::parse_colour(line)?);
                Ok(())
            }
            Section::HitObjects => {
                let (combo, object) =
                    hit_object::parse_hit_object(line, self.combo, &beatmap.colours)?;
                tracing::trace!(?object, "hit object");
                self.combo = combo;
                beatmap.hit_objects.push(object);
                Ok(())
            }
            Section::Unknown(_) => Ok(()),
        }
    }
}

impl Beatmap {
    /// Parses a token stream into [`Beatmap`].
    ///
    /// The first token must be the format header. A missing format version fails the whole
    /// parse regardless of [`ParseConfig::error_policy`].
    pub fn from_token_stream<'b, 'a: 'b>(
        token_iter: impl IntoIterator<Item = &'b TokenWithRange<'a>>,
        config: ParseConfig,
    ) -> ParseOutput {
        let mut tokens = token_iter.into_iter();
        let header = tokens.next();
        let version = header.and_then(|token| match token.content() {
            Token::FormatHeader(line) => format_version(line),
            _ => None,
        });
        let Some(version) = version else {
            let range = header.map_or(0..0, SourceRangeMixin::range);
            return ParseOutput {
                beatmap: Err(ParseError::MissingHeader.into_wrapper_range(range)),
                errors: vec![],
            };
        };

        let mut beatmap = Self::new(version);
        let mut state = ParseState::default();
        let mut errors = vec![];
        for token in tokens {
            let result = match token.content() {
                Token::Section(section) => {
                    state.enter(section, &mut beatmap);
                    Ok(())
                }
                Token::Body(line) => state.on_body(line, &mut beatmap),
                Token::FormatHeader(_) => Ok(()),
            };
            let Err(err) = result else {
                continue;
            };
            let err = err.into_wrapper(token);
            match config.error_policy {
                ErrorPolicy::Abort => {
                    return ParseOutput {
                        beatmap: Err(err),
                        errors,
                    };
                }
                ErrorPolicy::Collect => {
                    tracing::warn!(%err, "skipping line");
                    errors.push(err);
                }
            }
        }

        ParseOutput {
            beatmap: Ok(beatmap),
            errors,
        }
    }
}
