//! Prelude module for the osu! beatmap parser.
//!
//! You can use `use osu_rs::osu::prelude::*;` to import all the public types at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_osu_errors};

pub use super::{
    ErrorPolicy, ParseConfig,
    command::{HitObjectType, Position, Rgb, Section, SourceRangeMixin, SourceRangeMixinExt, Value},
    default_config,
    lex::{
        TokenStream,
        token::{Token, TokenWithRange},
    },
    model::{
        AnyTimingPoint, Beatmap, EditorSection, GreenTimingPoint, HitObject, Inherited, KeyValues,
        MetadataSection, RedTimingPoint, TimingPoint, TimingPoints, Uninherited,
    },
    parse::{
        DerivedValue, ParseError, ParseErrorWithRange, ParseOutput, hit_object::ComboCursor,
    },
    parse_osu, parse_osu_with_config,
};
