//! Lexical analyzer of the `.osu` format.
//!
//! Raw [String] == [lex](self) ==> [`TokenStream`] == [parse](super::parse) ==> [`Beatmap`](super::model::Beatmap)
//!
//! The format is line oriented, so a token is a classified line: the format header on the first
//! line, a `[Section]` header, or a body line to be decoded by the active section.

mod cursor;
pub mod token;

use self::{
    cursor::Cursor,
    token::{Token, TokenWithRange},
};

/// A sequence of tokens of a `.osu` source, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenStream<'a> {
    tokens: Vec<TokenWithRange<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Analyzes and converts the `.osu` format text into [`TokenStream`].
    ///
    /// Blank and whitespace-only lines produce no token, except the first line which is always
    /// reported as [`Token::FormatHeader`].
    #[must_use]
    pub fn parse_lex(source: &'a str) -> Self {
        let mut cursor = Cursor::new(source);
        let mut tokens = vec![];
        while let Some((range, line)) = cursor.next_line_with_range() {
            let token = if cursor.line() == 1 {
                Token::FormatHeader(line)
            } else if line.trim().is_empty() {
                continue;
            } else {
                Token::classify(line)
            };
            tokens.push(TokenWithRange::new(token, range.start, range.end));
        }
        Self { tokens }
    }

    /// Returns the tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[TokenWithRange<'a>] {
        &self.tokens
    }

    /// Returns an iterator over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, TokenWithRange<'a>> {
        self.tokens.iter()
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no token was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for TokenStream<'a> {
    type Item = TokenWithRange<'a>;
    type IntoIter = std::vec::IntoIter<TokenWithRange<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s TokenStream<'a> {
    type Item = &'s TokenWithRange<'a>;
    type IntoIter = std::slice::Iter<'s, TokenWithRange<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
