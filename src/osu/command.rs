//! Leaf value types shared by the lexer, the parser and the model.

pub mod graphics;
pub mod mixin;
pub mod object_type;
pub mod section;
pub mod value;

pub use self::{
    graphics::{Position, Rgb},
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    object_type::HitObjectType,
    section::Section,
    value::Value,
};
