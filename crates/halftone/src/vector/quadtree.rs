//! Quadtree decomposition of a binary raster.
//!
//! The tree recursively splits the image into quadrants until a region is
//! tonally uniform or hits the minimum leaf size. Only uniformly dark
//! leaves produce geometry; a minimum-size leaf that is still mixed emits
//! nothing, which is what gives the quadtree strategy its lossy,
//! blocky character on fine detail.

use super::svg::Rect;
use crate::buffer::PixelBuffer;

/// Regions at or below this edge length stop splitting.
pub(super) const MIN_LEAF_SIZE: u32 = 8;

/// Red-channel values below this count as dark.
pub(super) const DARK_THRESHOLD: u8 = 128;

#[derive(Debug)]
enum RegionKind {
    /// Terminal region; `dark` means uniformly dark.
    Leaf { dark: bool },
    /// Four quadrants in top-left, top-right, bottom-left, bottom-right
    /// order.
    Split(Box<[Region; 4]>),
}

#[derive(Debug)]
struct Region {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    kind: RegionKind,
}

/// Decompose the buffer and collect the dark leaves as rects.
pub(super) fn decompose(buffer: &PixelBuffer) -> Vec<Rect> {
    let root = build(buffer, 0, 0, buffer.width(), buffer.height());
    let mut rects = Vec::new();
    collect(&root, &mut rects);
    rects
}

fn build(buffer: &PixelBuffer, x: u32, y: u32, width: u32, height: u32) -> Region {
    let uniform = is_uniform(buffer, x, y, width, height);
    if uniform || width <= MIN_LEAF_SIZE || height <= MIN_LEAF_SIZE {
        let dark = uniform && buffer.data()[buffer.index(x, y)] < DARK_THRESHOLD;
        return Region {
            x,
            y,
            width,
            height,
            kind: RegionKind::Leaf { dark },
        };
    }

    // Floor halves; the remainder goes to the trailing quadrants.
    let half_w = width / 2;
    let half_h = height / 2;
    let children = Box::new([
        build(buffer, x, y, half_w, half_h),
        build(buffer, x + half_w, y, width - half_w, half_h),
        build(buffer, x, y + half_h, half_w, height - half_h),
        build(buffer, x + half_w, y + half_h, width - half_w, height - half_h),
    ]);
    Region {
        x,
        y,
        width,
        height,
        kind: RegionKind::Split(children),
    }
}

/// A region is uniform when every pixel falls on the same side of the dark
/// threshold as its first pixel.
fn is_uniform(buffer: &PixelBuffer, x: u32, y: u32, width: u32, height: u32) -> bool {
    let first_dark = buffer.data()[buffer.index(x, y)] < DARK_THRESHOLD;
    for dy in 0..height {
        for dx in 0..width {
            let dark = buffer.data()[buffer.index(x + dx, y + dy)] < DARK_THRESHOLD;
            if dark != first_dark {
                return false;
            }
        }
    }
    true
}

fn collect(region: &Region, rects: &mut Vec<Rect>) {
    match &region.kind {
        RegionKind::Leaf { dark: true } => rects.push(Rect {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
        }),
        RegionKind::Leaf { dark: false } => {}
        RegionKind::Split(children) => {
            for child in children.iter() {
                collect(child, rects);
            }
        }
    }
}
