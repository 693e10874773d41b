//! PDF content stream builder.
//!
//! Builds the operator sequences that make up a field appearance stream,
//! according to PDF specification ISO 32000-1:2008 Sections 8.5 (paths),
//! 8.6 (colour) and 14.6 (marked content).
//!
//! The builder accumulates operations and serializes them one per line.
//! Serialization is the only fallible step; a write failure aborts the
//! render that requested it.

use crate::error::Result;
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Set fill color gray (g)
    SetFillColorGray(f64),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f64, f64, f64),
    /// Set fill color CMYK (k)
    SetFillColorCMYK(f64, f64, f64, f64),
    /// Set stroke color gray (G)
    SetStrokeColorGray(f64),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f64, f64, f64),
    /// Set stroke color CMYK (K)
    SetStrokeColorCMYK(f64, f64, f64, f64),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Rectangle (re)
    Rectangle(f32, f32, f32, f32),
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,
    /// End path without filling/stroking (n)
    EndPath,
    /// Clip using non-zero winding rule (W)
    Clip,
    /// Begin marked content with a bare tag (BMC)
    BeginMarkedContent(String),
    /// End marked content (EMC)
    EndMarkedContent,
}

/// Accumulates content stream operations and serializes them to bytes.
#[derive(Debug, Clone, Default)]
pub struct ContentStreamBuilder {
    operations: Vec<ContentStreamOp>,
}

impl ContentStreamBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw operation.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Save the graphics state (q).
    pub fn save_state(&mut self) -> &mut Self {
        self.op(ContentStreamOp::SaveState)
    }

    /// Add a rectangle path (re).
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    /// Fill the current path (f).
    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    /// End the current path without painting (n).
    pub fn end_path(&mut self) -> &mut Self {
        self.op(ContentStreamOp::EndPath)
    }

    /// Intersect the clip region with the current path (W).
    pub fn clip(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Clip)
    }

    /// Stroke a single line segment (m, l, S).
    pub fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x1, y1));
        self.op(ContentStreamOp::LineTo(x2, y2));
        self.op(ContentStreamOp::Stroke)
    }

    /// Begin a marked-content range with a bare tag (BMC).
    pub fn begin_marked_content(&mut self, tag: impl Into<String>) -> &mut Self {
        self.op(ContentStreamOp::BeginMarkedContent(tag.into()))
    }

    /// End the current marked-content range (EMC).
    pub fn end_marked_content(&mut self) -> &mut Self {
        self.op(ContentStreamOp::EndMarkedContent)
    }

    /// Number of accumulated operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether no operations have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }

        Ok(buf)
    }

    /// Write a single operation to the buffer.
    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
        match op {
            ContentStreamOp::SaveState => write!(w, "q"),
            ContentStreamOp::SetFillColorGray(g) => write!(w, "{} g", g),
            ContentStreamOp::SetFillColorRGB(r, g, b) => write!(w, "{} {} {} rg", r, g, b),
            ContentStreamOp::SetFillColorCMYK(c, m, y, k) => {
                write!(w, "{} {} {} {} k", c, m, y, k)
            },
            ContentStreamOp::SetStrokeColorGray(g) => write!(w, "{} G", g),
            ContentStreamOp::SetStrokeColorRGB(r, g, b) => write!(w, "{} {} {} RG", r, g, b),
            ContentStreamOp::SetStrokeColorCMYK(c, m, y, k) => {
                write!(w, "{} {} {} {} K", c, m, y, k)
            },
            ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", x, y),
            ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", x, y),
            ContentStreamOp::Rectangle(x, y, w_val, h) => {
                write!(w, "{} {} {} {} re", x, y, w_val, h)
            },
            ContentStreamOp::Stroke => write!(w, "S"),
            ContentStreamOp::Fill => write!(w, "f"),
            ContentStreamOp::EndPath => write!(w, "n"),
            ContentStreamOp::Clip => write!(w, "W"),
            ContentStreamOp::BeginMarkedContent(tag) => write!(w, "/{} BMC", tag),
            ContentStreamOp::EndMarkedContent => write!(w, "EMC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_str(builder: &ContentStreamBuilder) -> String {
        String::from_utf8(builder.build().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_builder() {
        let builder = ContentStreamBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.build().unwrap().is_empty());
    }

    #[test]
    fn test_filled_rectangle() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .op(ContentStreamOp::SetFillColorRGB(1.0, 1.0, 1.0))
            .rect(0.0, 0.0, 100.0, 40.0)
            .fill();

        assert_eq!(build_str(&builder), "1 1 1 rg\n0 0 100 40 re\nf\n");
    }

    #[test]
    fn test_stroke_line() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .op(ContentStreamOp::SetStrokeColorGray(0.0))
            .stroke_line(0.0, 0.0, 0.0, 40.0);

        assert_eq!(build_str(&builder), "0 G\n0 0 m\n0 40 l\nS\n");
    }

    #[test]
    fn test_cmyk_operators() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .op(ContentStreamOp::SetFillColorCMYK(0.0, 0.1, 0.2, 0.3))
            .op(ContentStreamOp::SetStrokeColorCMYK(1.0, 0.0, 0.0, 0.0));

        assert_eq!(build_str(&builder), "0 0.1 0.2 0.3 k\n1 0 0 0 K\n");
    }

    #[test]
    fn test_marked_content_and_clip() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .begin_marked_content("Tx")
            .save_state()
            .end_path()
            .save_state()
            .rect(2.0, 2.0, 96.0, 36.0)
            .clip()
            .end_path()
            .end_marked_content();

        assert_eq!(
            build_str(&builder),
            "/Tx BMC\nq\nn\nq\n2 2 96 36 re\nW\nn\nEMC\n"
        );
    }

    #[test]
    fn test_negative_rectangle_dimensions_serialize() {
        // Inset clip rectangles can go negative when the border is wider
        // than half the box; serialization must pass the values through.
        let mut builder = ContentStreamBuilder::new();
        builder.rect(30.0, 30.0, -20.0, -20.0).clip().end_path();

        assert_eq!(build_str(&builder), "30 30 -20 -20 re\nW\nn\n");
    }
}
