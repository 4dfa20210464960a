//! SVG document assembly.
//!
//! The serialization format is fixed because the strategy chain makes
//! decisions on the document's character length: single-quoted attributes,
//! one rect per line, `fill='black'` on every rect.

use std::fmt::Write;

/// An axis-aligned black rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Rect {
    fn render(&self, doc: &mut String) {
        let _ = write!(
            doc,
            "<rect x='{}' y='{}' width='{}' height='{}' fill='black' />",
            self.x, self.y, self.width, self.height
        );
    }
}

/// Serialize rects into a complete SVG document.
///
/// The viewport is `width` x `height` with `shape-rendering='crispEdges'`
/// so rect edges stay hard at any zoom. Rects are joined with newlines;
/// an empty rect list yields a well-formed document with a blank body
/// line.
pub(super) fn render_document(width: u32, height: u32, rects: &[Rect]) -> String {
    let mut doc = String::with_capacity(112 + rects.len() * 56);
    let _ = write!(
        doc,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' shape-rendering='crispEdges'>\n"
    );
    for (i, rect) in rects.iter().enumerate() {
        if i > 0 {
            doc.push('\n');
        }
        rect.render(&mut doc);
    }
    doc.push_str("\n</svg>");
    doc
}
