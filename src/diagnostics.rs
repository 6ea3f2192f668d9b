//! Fancy diagnostics support using `ariadne`.
//!
//! This module converts [`ParseErrorWithRange`](crate::osu::parse::ParseErrorWithRange), which
//! carries the byte span of the offending line, into an `ariadne::Report`. Ariadne handles the
//! row/column calculation from the byte offsets.
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(feature = "diagnostics")]
//! # {
//! use osu_rs::{
//!     diagnostics::emit_osu_errors,
//!     osu::{ErrorPolicy, default_config, parse_osu_with_config},
//! };
//!
//! let source = "osu file format v14\n[TimingPoints]\n0,0,4,1,0,100,1,0\n";
//! let output = parse_osu_with_config(source, default_config().error_policy(ErrorPolicy::Collect));
//!
//! // Output all errors
//! emit_osu_errors("test.osu", source, &output.errors);
//! # }
//! ```

#[cfg(feature = "diagnostics")]
use ariadne::{Color, Label, Report, ReportKind, Source};

#[cfg(feature = "diagnostics")]
use crate::osu::parse::{ParseError, ParseErrorWithRange};

/// Simple source container that holds the filename and source text.
///
/// ```rust
/// use osu_rs::diagnostics::SimpleSource;
///
/// let source_text = "osu file format v14\n";
/// let source = SimpleSource::new("test.osu", source_text);
/// assert_eq!(source.text(), source_text);
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
#[cfg(feature = "diagnostics")]
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// # Parameters
    /// * `src` - Source file container (used for filename, ariadne handles row/column calculation)
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for ParseErrorWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let filename = src.name().to_string();
        let range = self.range();
        let color = match self.content() {
            ParseError::MissingHeader => Color::Red,
            ParseError::DivisionByZero(_) | ParseError::EmptyPalette => Color::Magenta,
            _ => Color::Yellow,
        };
        Report::build(ReportKind::Error, (filename.clone(), range.clone()))
            .with_message(format!("parse: {}", self.content()))
            .with_label(
                Label::new((filename, range))
                    .with_message("while decoding this line")
                    .with_color(color),
            )
            .finish()
    }
}

/// Convenience method: batch render a list of parse errors to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete `.osu` source text
/// * `errors` - List of errors to display
#[cfg(feature = "diagnostics")]
pub fn emit_osu_errors<'a>(
    name: &'a str,
    source: &'a str,
    errors: impl IntoIterator<Item = &'a ParseErrorWithRange>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for error in errors {
        let report = error.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of parse errors without printing.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn collect_osu_reports<'a>(
    name: &'a str,
    source: &'a str,
    errors: impl IntoIterator<Item = &'a ParseErrorWithRange>,
) -> Vec<Report<'a, (String, std::ops::Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    errors.into_iter().map(|e| e.to_report(&simple)).collect()
}
