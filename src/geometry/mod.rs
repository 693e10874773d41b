//! Geometric primitives.
//!
//! Widget placement rectangles live in page space; appearance rendering
//! translates them to a local origin, so only the dimensions matter to the
//! operator stream while the corner coordinates matter to the annotation's
//! `/Rect` entry.

/// A rectangle in document space.
///
/// Dimensions are never negative at the model level; callers must not
/// construct a rectangle with negative width or height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the lower-left corner
    pub x: f32,
    /// Y coordinate of the lower-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_formfill::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 40.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}
