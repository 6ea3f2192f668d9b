//! This module handles the `Key: Value` lines of:
//!
//! - `[General]` and `[Difficulty]`, stored generically.
//! - `[Editor]`, where `Bookmarks` is a comma separated list.
//! - `[Metadata]`, where `Tags` is a space separated list.

use super::{ParseError, Result};
use crate::osu::{
    command::{Section, Value},
    model::{EditorSection, KeyValues, MetadataSection},
};

/// Splits the line on the first colon into the lower-cased key and the raw value.
fn split_line(line: &str, section: Section) -> Result<(String, &str)> {
    let (key, value) = line
        .split_once(':')
        .ok_or_else(|| ParseError::malformed(section, "expected `Key: Value`"))?;
    Ok((key.trim().to_lowercase(), value))
}

/// Parses a line into the generic fields.
pub fn parse_fields(line: &str, fields: &mut KeyValues, section: Section) -> Result<()> {
    let (key, value) = split_line(line, section)?;
    fields.insert(key, Value::normalize(value));
    Ok(())
}

/// Parses a line of `[Editor]`.
pub fn parse_editor(line: &str, editor: &mut EditorSection) -> Result<()> {
    let (key, value) = split_line(line, Section::Editor)?;
    if key == "bookmarks" {
        editor.bookmarks = value.split(',').map(Value::normalize).collect();
    } else {
        editor.fields.insert(key, Value::normalize(value));
    }
    Ok(())
}

/// Parses a line of `[Metadata]`.
pub fn parse_metadata(line: &str, metadata: &mut MetadataSection) -> Result<()> {
    let (key, value) = split_line(line, Section::Metadata)?;
    let value = Value::normalize(value);
    if key == "tags" {
        metadata.tags = value
            .to_string()
            .split(' ')
            .map(|tag| tag.trim().to_owned())
            .collect();
    } else {
        metadata.fields.insert(key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generic_fields() {
        let mut fields = KeyValues::default();
        parse_fields("AudioFilename: audio.mp3", &mut fields, Section::General).unwrap();
        parse_fields("AudioLeadIn: 0", &mut fields, Section::General).unwrap();
        parse_fields("StackLeniency: 0.7", &mut fields, Section::General).unwrap();
        parse_fields("  Mode :3", &mut fields, Section::General).unwrap();
        assert_eq!(fields.get("audiofilename"), Some(&Value::from("audio.mp3")));
        assert_eq!(fields.get("audioleadin"), Some(&Value::Integer(0)));
        assert_eq!(fields.get("stackleniency"), Some(&Value::from("0.7")));
        assert_eq!(fields.get("mode"), Some(&Value::Integer(3)));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn value_keeps_later_colons() {
        let mut fields = KeyValues::default();
        parse_fields("Title: Re:Zero", &mut fields, Section::General).unwrap();
        assert_eq!(fields.get("title"), Some(&Value::from("Re:Zero")));
    }

    #[test]
    fn missing_colon() {
        let mut fields = KeyValues::default();
        assert_eq!(
            parse_fields("HPDrainRate 5", &mut fields, Section::Difficulty),
            Err(ParseError::malformed(
                Section::Difficulty,
                "expected `Key: Value`"
            ))
        );
        assert!(fields.is_empty());
    }

    #[test]
    fn bookmarks() {
        let mut editor = EditorSection::default();
        parse_editor("Bookmarks: 1000,2000,3000", &mut editor).unwrap();
        parse_editor("DistanceSpacing: 1.2", &mut editor).unwrap();
        assert_eq!(
            editor.bookmarks,
            vec![Value::Integer(1000), Value::Integer(2000), Value::Integer(3000)]
        );
        assert_eq!(editor.fields.get("bookmarks"), None);
        assert_eq!(editor.fields.get("distancespacing"), Some(&Value::from("1.2")));
    }

    #[test]
    fn tags() {
        let mut metadata = MetadataSection::default();
        parse_metadata("Tags: touhou  remix ", &mut metadata).unwrap();
        parse_metadata("BeatmapID: 75", &mut metadata).unwrap();
        assert_eq!(metadata.tags, vec!["touhou", "", "remix"]);
        assert_eq!(metadata.fields.get("tags"), None);
        assert_eq!(metadata.fields.get("beatmapid"), Some(&Value::Integer(75)));
    }

    #[test]
    fn numeric_tag() {
        let mut metadata = MetadataSection::default();
        parse_metadata("Tags: 2012", &mut metadata).unwrap();
        assert_eq!(metadata.tags, vec!["2012"]);
    }
}
