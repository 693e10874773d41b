//! # pdf_formfill
//!
//! Appearance-stream synthesis for interactive PDF text form fields.
//!
//! Given a text field's current value, appearance characteristics (`/MK`),
//! border style (`/BS`) and placement rectangle, this crate renders a
//! self-contained Form XObject drawing the field's background, border and
//! form-field clip bracket, registers it as a document object, and links it
//! under the widget annotation's `/AP /N` slot so viewers show the field's
//! current state without regenerating it from field properties.
//!
//! ## Core behaviors
//!
//! - **Style defaulting**: `/MK /BG` and `/MK /BC` are optional numeric
//!   arrays whose length picks the color space (1 gray, 3 RGB, 4 CMYK, any
//!   other length paints nothing); `/BS /W` defaults to 0. Absent style
//!   data is never an error.
//! - **Synchronous rendering**: every value or style setter re-renders and
//!   re-links the appearance before returning. Flag edits accumulate as
//!   pending set/clear bits and reach `/Ff` via the save hook.
//! - **Save hook**: [`writer::form_fields::TextFieldWidget::prepare_for_save`]
//!   reconciles pending flags and renders once more unconditionally, so
//!   the persisted appearance is never stale.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_formfill::document::ObjectStore;
//! use pdf_formfill::geometry::Rect;
//! use pdf_formfill::writer::form_fields::{PaintColor, TextFieldWidget};
//!
//! # fn main() -> pdf_formfill::Result<()> {
//! let mut store = ObjectStore::new();
//!
//! let mut field = TextFieldWidget::new("email", Rect::new(72.0, 700.0, 200.0, 20.0))
//!     .with_background_color(PaintColor::Rgb(1.0, 1.0, 1.0))
//!     .with_border_color(PaintColor::Gray(0.0))
//!     .with_border_width(1);
//!
//! field.set_value(&mut store, "user@example.com")?;
//! field.prepare_for_save(&mut store)?;
//!
//! let appearance = field.appearance_ref().expect("linked after save hook");
//! assert!(store.get(appearance).is_some());
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod geometry;
pub mod object;
pub mod writer;

pub use error::{Error, Result};
