//! The parser module of the osu! beatmap (.osu) file.
//!
//! This module consists of two phases: lexical analyzing and parsing.
//!
//! `lex` module classifies each line of the source into a format header, a section header or a
//! body line, remembering its position in the source.
//!
//! `parse` module decodes the body lines by the active section into a [`model::Beatmap`], the
//! aggregate of all sections. Hit objects get their combo number and combo colour there.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input). A leading byte order mark is skipped.
//! - Do not support writing a beatmap back into text.
//! - Do not validate the beatmap beyond what decoding needs.

pub mod command;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;

use self::{
    lex::TokenStream,
    model::Beatmap,
    parse::{ParseErrorWithRange, ParseOutput},
};

/// What the parser does when a body line fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorPolicy {
    /// Stops at the first error and returns it.
    #[default]
    Abort,
    /// Reports the error, skips the line and goes on with the next one.
    Collect,
}

/// Configuration of the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParseConfig {
    /// What to do on a line which fails to decode.
    pub error_policy: ErrorPolicy,
}

impl ParseConfig {
    /// Sets the error policy.
    #[must_use]
    pub const fn error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}

/// The default configuration, which aborts on the first error.
#[must_use]
pub fn default_config() -> ParseConfig {
    ParseConfig::default()
}

/// Parses a `.osu` source into a [`Beatmap`], stopping at the first error.
///
/// # Errors
///
/// Returns the first [`parse::ParseError`] with the byte range of its line.
///
/// # Example
///
/// ```
/// use osu_rs::osu::{command::Value, parse_osu};
///
/// let source = "osu file format v14\n\n[Editor]\nBookmarks: 1000,2000,3000\n";
/// let beatmap = parse_osu(source).unwrap();
/// assert_eq!(beatmap.editor.bookmarks, vec![Value::Integer(1000), Value::Integer(2000), Value::Integer(3000)]);
/// ```
pub fn parse_osu(source: &str) -> Result<Beatmap, ParseErrorWithRange> {
    parse_osu_with_config(source, default_config()).beatmap
}

/// Parses a `.osu` source into a [`Beatmap`] with the configuration.
///
/// # Example
///
/// ```
/// use osu_rs::osu::{ErrorPolicy, command::Value, default_config, parse_osu_with_config};
///
/// let source = "osu file format v14\n[Difficulty]\nbroken line\nCircleSize: 4\n";
/// let output = parse_osu_with_config(source, default_config().error_policy(ErrorPolicy::Collect));
/// assert_eq!(output.errors.len(), 1);
/// assert_eq!(output.beatmap.unwrap().difficulty.get("circlesize"), Some(&Value::Integer(4)));
/// ```
pub fn parse_osu_with_config(source: &str, config: ParseConfig) -> ParseOutput {
    let tokens = TokenStream::parse_lex(source);
    Beatmap::from_token_stream(&tokens, config)
}
