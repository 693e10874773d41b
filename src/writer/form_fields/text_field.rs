//! Text field widget for PDF forms.
//!
//! Implements text input fields per ISO 32000-1:2008 Section 12.7.4.3,
//! including synthesis of the widget's normal appearance. Every value or
//! style mutation re-renders the appearance synchronously and re-links it
//! under `/AP /N`; flag edits are the one exception, accumulating as
//! pending bits until the save path reconciles them.
//!
//! # Example
//!
//! ```
//! use pdf_formfill::document::ObjectStore;
//! use pdf_formfill::geometry::Rect;
//! use pdf_formfill::writer::form_fields::{PaintColor, TextFieldWidget};
//!
//! # fn main() -> pdf_formfill::Result<()> {
//! let mut store = ObjectStore::new();
//! let mut field = TextFieldWidget::new("username", Rect::new(72.0, 700.0, 200.0, 20.0))
//!     .with_background_color(PaintColor::Rgb(1.0, 1.0, 1.0))
//!     .with_border_width(1);
//!
//! field.set_value(&mut store, "john_doe")?;
//! assert!(field.appearance_ref().is_some());
//! # Ok(())
//! # }
//! ```

use crate::document::ObjectStore;
use crate::error::Result;
use crate::geometry::Rect;
use crate::object::{Object, ObjectRef};
use crate::writer::form_fields::appearance::{
    bind_normal_appearance, build_form_xobject, render_appearance_stream,
};
use crate::writer::form_fields::field_flags::{PendingFlags, TextFieldFlags};
use crate::writer::form_fields::style::{resolve_widget_style, PaintColor};
use std::collections::HashMap;

/// A text input field widget (merged field/widget dictionary).
///
/// The widget owns its annotation dictionary; style data lives in the
/// nested `/MK` and `/BS` sub-records exactly as it would on disk, and the
/// appearance renderer reads it back from there on every pass.
#[derive(Debug, Clone)]
pub struct TextFieldWidget {
    /// Field name (unique identifier)
    name: String,
    /// Bounding rectangle for the widget
    rect: Rect,
    /// Merged field/widget annotation dictionary
    dict: HashMap<String, Object>,
    /// Font name for default appearance
    font_name: String,
    /// Font size for default appearance
    font_size: f32,
    /// Text color (RGB, 0.0-1.0)
    text_color: (f32, f32, f32),
    /// Persisted flags plus pending edits
    flags: PendingFlags,
    /// Reference of the currently linked normal appearance
    appearance_ref: Option<ObjectRef>,
}

impl TextFieldWidget {
    /// Create a new text field.
    ///
    /// The field starts with no background, no border color and border
    /// width 0, matching the defaulting rules the style resolver applies to
    /// absent sub-records. Construction does not render; the first setter
    /// call or the save hook produces the first appearance.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique field name (used for form submission)
    /// * `rect` - Position and size of the field
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        let name = name.into();
        let mut dict = HashMap::new();

        dict.insert("Type".to_string(), Object::Name("Annot".to_string()));
        dict.insert("Subtype".to_string(), Object::Name("Widget".to_string()));
        dict.insert("FT".to_string(), Object::Name("Tx".to_string()));
        dict.insert("T".to_string(), Object::String(name.as_bytes().to_vec()));
        dict.insert(
            "Rect".to_string(),
            Object::Array(vec![
                Object::Real(rect.left() as f64),
                Object::Real(rect.bottom() as f64),
                Object::Real(rect.right() as f64),
                Object::Real(rect.top() as f64),
            ]),
        );
        // Print flag
        dict.insert("F".to_string(), Object::Integer(4));

        let mut widget = Self {
            name,
            rect,
            dict,
            font_name: "Helv".to_string(),
            font_size: 12.0,
            text_color: (0.0, 0.0, 0.0),
            flags: PendingFlags::default(),
            appearance_ref: None,
        };
        widget.refresh_default_appearance();
        widget
    }

    // === Builder-style construction (no rendering) ===

    /// Set the current value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.dict
            .insert("V".to_string(), Object::String(value.into().into_bytes()));
        self
    }

    /// Set maximum character length.
    pub fn with_max_length(mut self, max_len: i64) -> Self {
        self.dict.insert("MaxLen".to_string(), Object::Integer(max_len));
        self
    }

    /// Set the font for the default appearance.
    ///
    /// # Arguments
    ///
    /// * `name` - Font name (e.g., "Helv", "Cour", "TiRo")
    /// * `size` - Font size in points
    pub fn with_font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self.refresh_default_appearance();
        self
    }

    /// Set text color (RGB, 0.0-1.0).
    pub fn with_text_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.text_color = (r, g, b);
        self.refresh_default_appearance();
        self
    }

    /// Set background color (`/MK /BG`).
    pub fn with_background_color(mut self, color: PaintColor) -> Self {
        self.set_mk_color("BG", color);
        self
    }

    /// Set border color (`/MK /BC`).
    pub fn with_border_color(mut self, color: PaintColor) -> Self {
        self.set_mk_color("BC", color);
        self
    }

    /// Set border width (`/BS /W`).
    pub fn with_border_width(mut self, width: i64) -> Self {
        self.set_bs_width(width);
        self
    }

    /// Make this a multiline text field.
    pub fn multiline(mut self) -> Self {
        self.flags.edit(TextFieldFlags::MULTILINE, true);
        self
    }

    /// Make this a password field (displays asterisks).
    pub fn password(mut self) -> Self {
        self.flags.edit(TextFieldFlags::PASSWORD, true);
        self
    }

    /// Make the field read-only.
    pub fn read_only(mut self) -> Self {
        self.flags.edit(TextFieldFlags::READ_ONLY, true);
        self
    }

    /// Make the field required.
    pub fn required(mut self) -> Self {
        self.flags.edit(TextFieldFlags::REQUIRED, true);
        self
    }

    // === Mutating setters (render synchronously) ===

    /// Set the text value and re-render the appearance.
    pub fn set_value(&mut self, store: &mut ObjectStore, value: impl Into<String>) -> Result<()> {
        self.dict
            .insert("V".to_string(), Object::String(value.into().into_bytes()));
        self.render_appearance(store)
    }

    /// Set the maximum length and re-render the appearance.
    pub fn set_max_length(&mut self, store: &mut ObjectStore, max_len: i64) -> Result<()> {
        self.dict.insert("MaxLen".to_string(), Object::Integer(max_len));
        self.render_appearance(store)
    }

    /// Set the font and re-render the appearance.
    pub fn set_font(
        &mut self,
        store: &mut ObjectStore,
        name: impl Into<String>,
        size: f32,
    ) -> Result<()> {
        self.font_name = name.into();
        self.font_size = size;
        self.refresh_default_appearance();
        self.render_appearance(store)
    }

    /// Set the text color and re-render the appearance.
    pub fn set_text_color(
        &mut self,
        store: &mut ObjectStore,
        r: f32,
        g: f32,
        b: f32,
    ) -> Result<()> {
        self.text_color = (r, g, b);
        self.refresh_default_appearance();
        self.render_appearance(store)
    }

    /// Set the background color and re-render the appearance.
    pub fn set_background_color(
        &mut self,
        store: &mut ObjectStore,
        color: PaintColor,
    ) -> Result<()> {
        self.set_mk_color("BG", color);
        self.render_appearance(store)
    }

    /// Set the border color and re-render the appearance.
    pub fn set_border_color(&mut self, store: &mut ObjectStore, color: PaintColor) -> Result<()> {
        self.set_mk_color("BC", color);
        self.render_appearance(store)
    }

    /// Set the border width and re-render the appearance.
    pub fn set_border_width(&mut self, store: &mut ObjectStore, width: i64) -> Result<()> {
        self.set_bs_width(width);
        self.render_appearance(store)
    }

    // === Flag edits (deferred; rendered via the save path) ===

    /// Set or clear the multiline flag.
    pub fn set_multiline(&mut self, value: bool) {
        self.flags.edit(TextFieldFlags::MULTILINE, value);
    }

    /// Set or clear the password flag.
    pub fn set_password(&mut self, value: bool) {
        self.flags.edit(TextFieldFlags::PASSWORD, value);
    }

    /// Set or clear the read-only flag.
    pub fn set_read_only(&mut self, value: bool) {
        self.flags.edit(TextFieldFlags::READ_ONLY, value);
    }

    /// Set or clear the required flag.
    pub fn set_required(&mut self, value: bool) {
        self.flags.edit(TextFieldFlags::REQUIRED, value);
    }

    // === Readers ===

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the widget's bounding rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the current text value (empty if unset).
    pub fn value(&self) -> String {
        self.dict
            .get("V")
            .and_then(Object::as_string)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }

    /// Get the maximum length, if set.
    pub fn max_length(&self) -> Option<i64> {
        self.dict.get("MaxLen").and_then(Object::as_integer)
    }

    /// Get the effective flag mask (persisted plus pending edits).
    pub fn flags(&self) -> TextFieldFlags {
        self.flags.effective()
    }

    /// Whether the field accepts multiple lines.
    pub fn is_multiline(&self) -> bool {
        self.flags.contains(TextFieldFlags::MULTILINE)
    }

    /// Whether the field masks its input.
    pub fn is_password(&self) -> bool {
        self.flags.contains(TextFieldFlags::PASSWORD)
    }

    /// Reference of the currently linked normal appearance, if any.
    pub fn appearance_ref(&self) -> Option<ObjectRef> {
        self.appearance_ref
    }

    /// The merged field/widget dictionary.
    pub fn dict(&self) -> &HashMap<String, Object> {
        &self.dict
    }

    // === Rendering pipeline ===

    /// Re-render the appearance stream and re-link it under `/AP /N`.
    ///
    /// Resolves style fresh from the widget dictionary, renders one new
    /// stream, registers it as a Form XObject and overwrites the
    /// normal-appearance link. On failure the previous link is retained.
    pub fn render_appearance(&mut self, store: &mut ObjectStore) -> Result<()> {
        let style = resolve_widget_style(&self.dict);
        let content = render_appearance_stream(self.rect, &style)?;
        log::debug!(
            "rendered appearance for '{}': {} bytes, border width {}",
            self.name,
            content.len(),
            style.border_width
        );

        let stream_ref = store.add_object(build_form_xobject(self.rect, content));
        bind_normal_appearance(&mut self.dict, stream_ref);
        self.appearance_ref = Some(stream_ref);
        Ok(())
    }

    /// Save hook: reconcile pending flags into `/Ff`, then render once more.
    ///
    /// Runs unconditionally so the persisted appearance reflects the final
    /// in-memory state even when mutations bypassed the setter-triggered
    /// renders (deferred flag edits in particular).
    pub fn prepare_for_save(&mut self, store: &mut ObjectStore) -> Result<()> {
        let merged = self.flags.reconcile();
        if merged.is_empty() {
            self.dict.remove("Ff");
        } else {
            self.dict
                .insert("Ff".to_string(), Object::Integer(merged.bits() as i64));
        }
        self.render_appearance(store)
    }

    // === Internal helpers ===

    /// Write a color array into the `/MK` sub-record, creating it on demand.
    fn set_mk_color(&mut self, key: &str, color: PaintColor) {
        let mk = self
            .dict
            .entry("MK".to_string())
            .or_insert_with(|| Object::Dictionary(HashMap::new()));
        if mk.as_dict_mut().is_none() {
            *mk = Object::Dictionary(HashMap::new());
        }
        if let Some(mk_dict) = mk.as_dict_mut() {
            let components: Vec<Object> =
                color.components().into_iter().map(Object::Real).collect();
            mk_dict.insert(key.to_string(), Object::Array(components));
        }
    }

    /// Write the border width into the `/BS` sub-record.
    fn set_bs_width(&mut self, width: i64) {
        let bs = self
            .dict
            .entry("BS".to_string())
            .or_insert_with(|| Object::Dictionary(HashMap::new()));
        if bs.as_dict_mut().is_none() {
            *bs = Object::Dictionary(HashMap::new());
        }
        if let Some(bs_dict) = bs.as_dict_mut() {
            bs_dict.insert("W".to_string(), Object::Integer(width));
            // Solid border
            bs_dict.insert("S".to_string(), Object::Name("S".to_string()));
        }
    }

    /// Rebuild the default appearance string (`/DA`).
    fn refresh_default_appearance(&mut self) {
        let (r, g, b) = self.text_color;
        let da = format!("/{} {} Tf {} {} {} rg", self.font_name, self.font_size, r, g, b);
        self.dict.insert("DA".to_string(), Object::String(da.into_bytes()));
    }
}
