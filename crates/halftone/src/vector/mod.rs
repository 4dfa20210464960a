//! Vector export: turn a dithered raster into a size-bounded SVG.
//!
//! Four encoding strategies, tried in order of fidelity. The quadtree
//! result is always computed first and its character length drives the
//! choice:
//!
//! 1. **Quadtree** leaves, when the document stays at or under 50,000
//!    characters.
//! 2. **Connected components** (bounding boxes), when the quadtree
//!    document is too large.
//! 3. **Row runs** (per-row RLE), when components alone would exceed
//!    10,000 rects.
//! 4. **Downsampled cells**, when the quadtree document lands between
//!    20,000 and 50,000 characters.
//!
//! The rect serialization format is fixed (see [`svg`]) because the
//! thresholds are measured against it.

mod quadtree;
pub(crate) mod regions;
mod svg;

use crate::buffer::PixelBuffer;
use tracing::debug;

/// Documents longer than this abandon the quadtree strategy.
const QUADTREE_MAX_CHARS: usize = 50_000;

/// Quadtree documents above this length are re-encoded from downsampled
/// cells even though they fit the hard cap.
const DOWNSAMPLE_MIN_CHARS: usize = 20_000;

/// Component count beyond which bounding boxes fall back to row runs.
const MAX_COMPONENT_RECTS: usize = 10_000;

/// Encode a dithered raster as an SVG document of black rects.
///
/// Expects a binary-ish buffer where the red channel carries the tone;
/// values below 128 count as ink. The output document length is bounded
/// by the strategy chain, so arbitrarily detailed inputs still export.
///
/// # Example
///
/// ```
/// use halftone::{encode_svg, PixelBuffer};
///
/// let buffer = PixelBuffer::filled(16, 16, [0, 0, 0, 255]).unwrap();
/// let svg = encode_svg(&buffer);
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("fill='black'"));
/// ```
pub fn encode_svg(buffer: &PixelBuffer) -> String {
    let width = buffer.width();
    let height = buffer.height();

    let quadtree_doc = svg::render_document(width, height, &quadtree::decompose(buffer));
    if quadtree_doc.len() > QUADTREE_MAX_CHARS {
        let components = regions::connected_components(buffer);
        if components.len() > MAX_COMPONENT_RECTS {
            let runs = regions::row_runs(buffer);
            debug!(strategy = "row-runs", rects = runs.len(), "encoding svg");
            return svg::render_document(width, height, &runs);
        }
        debug!(
            strategy = "components",
            rects = components.len(),
            "encoding svg"
        );
        return svg::render_document(width, height, &components);
    }

    if quadtree_doc.len() > DOWNSAMPLE_MIN_CHARS {
        let cells = regions::downsample_cells(buffer);
        debug!(strategy = "downsample", rects = cells.len(), "encoding svg");
        return svg::render_document(width, height, &cells);
    }

    debug!(
        strategy = "quadtree",
        chars = quadtree_doc.len(),
        "encoding svg"
    );
    quadtree_doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_buffer(width: u32, height: u32, dark_at: impl Fn(u32, u32) -> bool) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = if dark_at(x, y) { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn test_small_uniform_image_uses_quadtree() {
        let svg = encode_svg(&binary_buffer(32, 32, |_, _| true));
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains("width='32' height='32'"));
    }

    #[test]
    fn test_all_light_image_has_no_rects() {
        let svg = encode_svg(&binary_buffer(32, 32, |_, _| false));
        assert_eq!(svg.matches("<rect").count(), 0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_dense_checkerboard_falls_back_to_components() {
        // 8-pixel checkerboard at 512x512: the quadtree resolves every
        // cell into a uniform leaf, 2048 dark rects, far past the 50,000
        // character cap. The cells only touch at corners, so 4-connected
        // flood fill keeps them as 2048 separate components.
        let buffer = binary_buffer(512, 512, |x, y| ((x / 8) + (y / 8)) % 2 == 0);
        let svg = encode_svg(&buffer);
        assert_eq!(svg.matches("<rect").count(), 2048);
        assert!(svg.contains("width='8' height='8'"));
    }

    #[test]
    fn test_midsize_checkerboard_takes_downsample_path() {
        // 16-pixel checkerboard at 512x512: 512 quadtree rects, roughly
        // 31,000 characters, which lands between the downsample floor and
        // the quadtree cap. The downsample scale for 512x512 is 5.
        let buffer = binary_buffer(512, 512, |x, y| ((x / 16) + (y / 16)) % 2 == 0);
        let svg = encode_svg(&buffer);
        assert!(svg.contains("width='5' height='5'"));
        assert!(svg.matches("<rect").count() <= 102 * 102);
    }

    #[test]
    fn test_many_components_fall_back_to_row_runs() {
        // Top half: 8-pixel checkerboard, which alone pushes the quadtree
        // document past its cap. Bottom half: isolated single dark pixels
        // on an every-other-pixel grid, over 130,000 components, far past
        // the component cap. The chain must land on row runs.
        let buffer = binary_buffer(1024, 1024, |x, y| {
            if y < 512 {
                ((x / 8) + (y / 8)) % 2 == 0
            } else {
                x % 2 == 0 && y % 2 == 0
            }
        });
        let svg = encode_svg(&buffer);
        assert!(svg.contains("height='1'"), "row runs emit height-1 rects");
        // Single-pixel runs separated by one light pixel merge, so each
        // dark bottom-half row collapses to one full-width rect.
        assert!(svg.contains("width='1023' height='1'"));
    }
}
