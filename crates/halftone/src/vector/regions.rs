//! Fallback geometry extraction for rasters the quadtree handles poorly.
//!
//! Three coarser strategies, each trading fidelity for fewer rects:
//! connected-component bounding boxes, per-row run-length rects, and
//! block-averaged downsampling.

use super::quadtree::DARK_THRESHOLD;
use super::svg::Rect;
use crate::buffer::PixelBuffer;
use std::collections::VecDeque;

/// Bounding boxes of the 4-connected dark components, in scan order of
/// their first-visited pixel.
///
/// Overlapping boxes are fine; the boxes approximate each component's
/// shape, they do not tile the image.
pub(crate) fn connected_components(buffer: &PixelBuffer) -> Vec<Rect> {
    let width = buffer.width();
    let height = buffer.height();
    let mut visited = vec![false; buffer.pixel_count()];
    let mut rects = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let flat = (y * width + x) as usize;
            if visited[flat] || buffer.data()[buffer.index(x, y)] >= DARK_THRESHOLD {
                continue;
            }

            // BFS flood fill tracking the component's bounding box.
            let (mut min_x, mut max_x) = (x, x);
            let (mut min_y, mut max_y) = (y, y);
            let mut queue = VecDeque::new();
            visited[flat] = true;
            queue.push_back((x, y));
            while let Some((cx, cy)) = queue.pop_front() {
                min_x = min_x.min(cx);
                max_x = max_x.max(cx);
                min_y = min_y.min(cy);
                max_y = max_y.max(cy);

                let neighbors = [
                    (cx.wrapping_add(1), cy),
                    (cx.wrapping_sub(1), cy),
                    (cx, cy.wrapping_add(1)),
                    (cx, cy.wrapping_sub(1)),
                ];
                for (nx, ny) in neighbors {
                    if nx >= width || ny >= height {
                        continue;
                    }
                    let nflat = (ny * width + nx) as usize;
                    if visited[nflat] || buffer.data()[buffer.index(nx, ny)] >= DARK_THRESHOLD {
                        continue;
                    }
                    visited[nflat] = true;
                    queue.push_back((nx, ny));
                }
            }

            rects.push(Rect {
                x: min_x,
                y: min_y,
                width: max_x - min_x + 1,
                height: max_y - min_y + 1,
            });
        }
    }
    rects
}

/// Per-row run-length encoding: one height-1 rect per dark run, with runs
/// separated by a single light pixel merged into one.
pub(crate) fn row_runs(buffer: &PixelBuffer) -> Vec<Rect> {
    let width = buffer.width();
    let height = buffer.height();
    let mut rects = Vec::new();

    for y in 0..height {
        // Collect (start, end-exclusive) dark runs on this row.
        let mut runs: Vec<(u32, u32)> = Vec::new();
        let mut x = 0;
        while x < width {
            while x < width && buffer.data()[buffer.index(x, y)] >= DARK_THRESHOLD {
                x += 1;
            }
            if x >= width {
                break;
            }
            let start = x;
            while x < width && buffer.data()[buffer.index(x, y)] < DARK_THRESHOLD {
                x += 1;
            }
            runs.push((start, x));
        }

        // Bridge one-pixel gaps.
        let mut merged: Vec<(u32, u32)> = Vec::new();
        for run in runs {
            match merged.last_mut() {
                Some(last) if run.0 <= last.1 + 1 => last.1 = last.1.max(run.1),
                _ => merged.push(run),
            }
        }

        for (start, end) in merged {
            rects.push(Rect {
                x: start,
                y,
                width: end - start,
                height: 1,
            });
        }
    }
    rects
}

/// Block-averaged downsampling: one `scale` x `scale` rect per dark cell.
///
/// The scale targets roughly ten thousand cells regardless of input size;
/// cell coordinates are multiplied back up so the geometry stays in the
/// original coordinate space.
pub(crate) fn downsample_cells(buffer: &PixelBuffer) -> Vec<Rect> {
    let width = buffer.width();
    let height = buffer.height();
    let scale = (((width as f64 * height as f64) / 10_000.0).sqrt().floor() as u32).max(1);
    let scaled_w = (width / scale).max(1);
    let scaled_h = (height / scale).max(1);

    let mut rects = Vec::new();
    for cy in 0..scaled_h {
        for cx in 0..scaled_w {
            let mut sum: u64 = 0;
            let mut count: u64 = 0;
            for dy in 0..scale {
                let y = cy * scale + dy;
                if y >= height {
                    break;
                }
                for dx in 0..scale {
                    let x = cx * scale + dx;
                    if x >= width {
                        break;
                    }
                    sum += buffer.data()[buffer.index(x, y)] as u64;
                    count += 1;
                }
            }
            if count > 0 && sum < DARK_THRESHOLD as u64 * count {
                rects.push(Rect {
                    x: cx * scale,
                    y: cy * scale,
                    width: scale,
                    height: scale,
                });
            }
        }
    }
    rects
}
