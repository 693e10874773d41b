//! Interactive text field widgets and their appearance synthesis.
//!
//! This module implements the field model for text input fields per
//! ISO 32000-1:2008 Section 12.7 (Interactive Forms), the resolution of
//! their optional style sub-records, and the rendering pipeline that keeps
//! each widget's normal appearance (`/AP /N`) in sync with its state.
//!
//! # Pipeline
//!
//! ```text
//! TextFieldWidget (value, /MK, /BS, flags)
//!     ↓ resolve_widget_style
//! ResolvedStyle (background, border color, border width)
//!     ↓ render_appearance_stream
//! operator bytes (fill, strokes, /Tx BMC clip bracket)
//!     ↓ build_form_xobject + ObjectStore::add_object
//! Form XObject reference
//!     ↓ bind_normal_appearance
//! widget /AP /N
//! ```

mod appearance;
mod field_flags;
mod style;
mod text_field;

pub use appearance::{bind_normal_appearance, build_form_xobject, render_appearance_stream};
pub use field_flags::{PendingFlags, TextFieldFlags};
pub use style::{resolve_widget_style, PaintColor, ResolvedStyle};
pub use text_field::TextFieldWidget;
