//! Definitions of the token in the `.osu` format.

use crate::{
    osu::command::{Section, SourceRangeMixin},
    util::StrExtension,
};

/// A classified line of the `.osu` format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Token<'a> {
    /// The first line, such as `osu file format v14`. It is emitted even if the line is blank.
    FormatHeader(&'a str),
    /// `[Name]`. Opens a section, and the following body lines belong to it.
    Section(Section),
    /// Any other non-blank line, untrimmed.
    Body(&'a str),
}

/// A token with position information.
pub type TokenWithRange<'a> = SourceRangeMixin<Token<'a>>;

impl<'a> Token<'a> {
    /// Classifies a non-blank line after the first one.
    ///
    /// A line whose first non-whitespace character is `[` is a section header, named by the
    /// letters right after the bracket.
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        match line.trim_start().strip_prefix('[') {
            Some(rest) => Self::Section(Section::from_name(rest.leading_letters())),
            None => Self::Body(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_lines() {
        assert_eq!(
            Token::classify("[TimingPoints]"),
            Token::Section(Section::TimingPoints)
        );
        assert_eq!(
            Token::classify("  [Editor]  "),
            Token::Section(Section::Editor)
        );
        assert_eq!(
            Token::classify("[]"),
            Token::Section(Section::Unknown(String::new()))
        );
        assert_eq!(Token::classify("Mode: 0"), Token::Body("Mode: 0"));
        assert_eq!(
            Token::classify(" 0,\"bg.jpg\",0,0"),
            Token::Body(" 0,\"bg.jpg\",0,0")
        );
    }
}
