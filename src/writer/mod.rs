//! Appearance writing module.
//!
//! Components that turn field state into drawable bytes: the content
//! stream builder (operator vocabulary and serialization) and the form
//! field widgets built on top of it.

pub mod content_stream;
pub mod form_fields;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use form_fields::{PaintColor, ResolvedStyle, TextFieldFlags, TextFieldWidget};
