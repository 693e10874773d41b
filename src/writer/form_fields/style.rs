//! Widget style resolution.
//!
//! Reads the optional appearance-characteristics (`/MK`) and border-style
//! (`/BS`) sub-records of a widget annotation and produces a fully defaulted
//! style record. Absence at any nesting level is a normal input state: no
//! lookup in this module ever fails, it only defaults.
//!
//! Style is resolved fresh on every render pass; resolved records are never
//! cached across renders.

use crate::object::Object;
use std::collections::HashMap;

/// A device color, tagged by the component count of its source array.
///
/// Components are carried verbatim; no range validation or clamping happens
/// here or downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintColor {
    /// One component: DeviceGray
    Gray(f64),
    /// Three components: DeviceRGB
    Rgb(f64, f64, f64),
    /// Four components: DeviceCMYK
    Cmyk(f64, f64, f64, f64),
}

impl PaintColor {
    /// Interpret a component slice by its length.
    ///
    /// 1 component is grayscale, 3 is RGB, 4 is CMYK. Any other length has
    /// no color-space interpretation and resolves to no paint.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [g] => Some(PaintColor::Gray(*g)),
            [r, g, b] => Some(PaintColor::Rgb(*r, *g, *b)),
            [c, m, y, k] => Some(PaintColor::Cmyk(*c, *m, *y, *k)),
            _ => None,
        }
    }

    /// The raw component values, in color-space order.
    pub fn components(&self) -> Vec<f64> {
        match *self {
            PaintColor::Gray(g) => vec![g],
            PaintColor::Rgb(r, g, b) => vec![r, g, b],
            PaintColor::Cmyk(c, m, y, k) => vec![c, m, y, k],
        }
    }
}

/// Fully defaulted widget style, derived from `/MK` and `/BS`.
///
/// Derived data only: recomputed from the widget dictionary on every render.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedStyle {
    /// Background color (`/MK /BG`), if paintable.
    pub background: Option<PaintColor>,
    /// Border color (`/MK /BC`), if paintable.
    pub border_color: Option<PaintColor>,
    /// Border width (`/BS /W`), verbatim; absent entries default to 0.
    pub border_width: i64,
}

/// Resolve a widget annotation's style sub-records.
///
/// `/MK /BG` and `/MK /BC` are optional numeric arrays; numeric entries
/// (integer or real) are collected and the resulting length picks the color
/// space. `/BS /W` is an optional integer taken verbatim, with no clamping
/// against the widget's box size.
pub fn resolve_widget_style(dict: &HashMap<String, Object>) -> ResolvedStyle {
    let mk = dict.get("MK").and_then(Object::as_dict);

    let background = mk
        .and_then(|mk| mk.get("BG"))
        .and_then(Object::as_array)
        .and_then(|arr| PaintColor::from_components(&numeric_components(arr)));

    let border_color = mk
        .and_then(|mk| mk.get("BC"))
        .and_then(Object::as_array)
        .and_then(|arr| PaintColor::from_components(&numeric_components(arr)));

    let border_width = dict
        .get("BS")
        .and_then(Object::as_dict)
        .and_then(|bs| bs.get("W"))
        .and_then(Object::as_integer)
        .unwrap_or(0);

    ResolvedStyle {
        background,
        border_color,
        border_width,
    }
}

/// Collect the numeric entries of a color array, skipping anything else.
fn numeric_components(array: &[Object]) -> Vec<f64> {
    array.iter().filter_map(Object::as_number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_with_mk(key: &str, components: Vec<Object>) -> HashMap<String, Object> {
        let mut mk = HashMap::new();
        mk.insert(key.to_string(), Object::Array(components));
        let mut dict = HashMap::new();
        dict.insert("MK".to_string(), Object::Dictionary(mk));
        dict
    }

    #[test]
    fn test_paint_color_component_counts() {
        assert_eq!(PaintColor::from_components(&[0.5]), Some(PaintColor::Gray(0.5)));
        assert_eq!(
            PaintColor::from_components(&[1.0, 1.0, 1.0]),
            Some(PaintColor::Rgb(1.0, 1.0, 1.0))
        );
        assert_eq!(
            PaintColor::from_components(&[0.0, 0.1, 0.2, 0.3]),
            Some(PaintColor::Cmyk(0.0, 0.1, 0.2, 0.3))
        );
        assert_eq!(PaintColor::from_components(&[]), None);
        assert_eq!(PaintColor::from_components(&[0.1, 0.2]), None);
        assert_eq!(PaintColor::from_components(&[0.1, 0.2, 0.3, 0.4, 0.5]), None);
    }

    #[test]
    fn test_components_round_trip() {
        for color in [
            PaintColor::Gray(0.5),
            PaintColor::Rgb(1.0, 0.0, 0.25),
            PaintColor::Cmyk(0.0, 0.1, 0.2, 0.3),
        ] {
            assert_eq!(PaintColor::from_components(&color.components()), Some(color));
        }
    }

    #[test]
    fn test_out_of_range_components_pass_through() {
        assert_eq!(
            PaintColor::from_components(&[2.5, -1.0, 7.0]),
            Some(PaintColor::Rgb(2.5, -1.0, 7.0))
        );
    }

    #[test]
    fn test_missing_mk_defaults_everything() {
        let style = resolve_widget_style(&HashMap::new());
        assert_eq!(style.background, None);
        assert_eq!(style.border_color, None);
        assert_eq!(style.border_width, 0);
    }

    #[test]
    fn test_background_rgb() {
        let dict = widget_with_mk(
            "BG",
            vec![Object::Real(1.0), Object::Real(1.0), Object::Real(1.0)],
        );
        let style = resolve_widget_style(&dict);
        assert_eq!(style.background, Some(PaintColor::Rgb(1.0, 1.0, 1.0)));
        assert_eq!(style.border_color, None);
    }

    #[test]
    fn test_border_color_gray() {
        let dict = widget_with_mk("BC", vec![Object::Real(0.25)]);
        let style = resolve_widget_style(&dict);
        assert_eq!(style.border_color, Some(PaintColor::Gray(0.25)));
    }

    #[test]
    fn test_unsupported_component_count_is_no_paint() {
        let dict = widget_with_mk("BG", vec![Object::Real(0.1), Object::Real(0.2)]);
        let style = resolve_widget_style(&dict);
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_integer_components_count() {
        let dict = widget_with_mk(
            "BG",
            vec![Object::Integer(1), Object::Integer(1), Object::Integer(1)],
        );
        let style = resolve_widget_style(&dict);
        assert_eq!(style.background, Some(PaintColor::Rgb(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_non_numeric_entries_are_skipped() {
        let dict = widget_with_mk(
            "BG",
            vec![
                Object::Real(0.5),
                Object::Name("bogus".to_string()),
                Object::Real(0.5),
                Object::Real(0.5),
            ],
        );
        let style = resolve_widget_style(&dict);
        assert_eq!(style.background, Some(PaintColor::Rgb(0.5, 0.5, 0.5)));
    }

    #[test]
    fn test_border_width_verbatim() {
        let mut bs = HashMap::new();
        bs.insert("W".to_string(), Object::Integer(500));
        let mut dict = HashMap::new();
        dict.insert("BS".to_string(), Object::Dictionary(bs));

        // Far wider than any sensible box; resolver passes it through.
        let style = resolve_widget_style(&dict);
        assert_eq!(style.border_width, 500);
    }

    #[test]
    fn test_border_style_without_width_defaults_to_zero() {
        let mut dict = HashMap::new();
        dict.insert("BS".to_string(), Object::Dictionary(HashMap::new()));
        let style = resolve_widget_style(&dict);
        assert_eq!(style.border_width, 0);
    }

    #[test]
    fn test_mistyped_mk_is_treated_as_absent() {
        let mut dict = HashMap::new();
        dict.insert("MK".to_string(), Object::Integer(4));
        let style = resolve_widget_style(&dict);
        assert_eq!(style.background, None);
        assert_eq!(style.border_color, None);
    }
}
