//! Cross-stage pipeline tests.
//!
//! Unit tests inside each module cover the stages in isolation; this
//! module exercises full preprocess-dither-vectorize runs.

use crate::options::{DitherAlgorithm, DitherOptions};
use crate::vector::regions;
use crate::{encode_svg, process, HalftoneError, PixelBuffer};
use pretty_assertions::assert_eq;

#[test]
fn test_light_gray_image_dithers_to_white() {
    // 200 gray stays above the binary cutoff even after diffusion pushes
    // negative error around, so every pixel lands on white.
    let buffer = PixelBuffer::filled(2, 2, [200, 200, 200, 255]).unwrap();
    let options = DitherOptions::new().palette_size(2);
    let out = process(buffer, &options).unwrap();
    for pixel in out.data().chunks_exact(4) {
        assert_eq!(pixel, &[255, 255, 255, 255]);
    }
}

#[test]
fn test_invalid_options_fail_before_any_work() {
    let buffer = PixelBuffer::filled(2, 2, [0, 0, 0, 255]).unwrap();
    let options = DitherOptions::new().glow(150.0);
    let err = process(buffer, &options).unwrap_err();
    assert!(matches!(err, HalftoneError::Config(_)));
}

#[test]
fn test_seeded_pipeline_is_deterministic() {
    let make = || {
        let mut data = Vec::new();
        for i in 0..(32 * 32) {
            let v = (i % 256) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
        PixelBuffer::new(32, 32, data).unwrap()
    };
    let options = DitherOptions::new()
        .noise(40.0)
        .noise_seed(Some(99))
        .palette_size(2)
        .serpentine(true);

    let a = process(make(), &options).unwrap();
    let b = process(make(), &options).unwrap();
    assert_eq!(a, b);

    let svg_a = encode_svg(&a);
    let svg_b = encode_svg(&b);
    assert_eq!(svg_a, svg_b);
}

#[test]
fn test_every_algorithm_runs_end_to_end() {
    for algorithm in DitherAlgorithm::ALL {
        let buffer = PixelBuffer::filled(24, 24, [140, 150, 160, 255]).unwrap();
        let options = DitherOptions::new()
            .algorithm(algorithm)
            .palette_size(2)
            .brightness(10.0)
            .detail_enhancement(2.0);
        let out = process(buffer, &options).unwrap();
        let svg = encode_svg(&out);
        assert!(svg.starts_with("<svg"), "{algorithm}: bad svg start");
        assert!(svg.ends_with("</svg>"), "{algorithm}: bad svg end");
    }
}

#[test]
fn test_dark_image_exports_single_rect() {
    let buffer = PixelBuffer::filled(32, 32, [10, 10, 10, 255]).unwrap();
    let options = DitherOptions::new().palette_size(2);
    let out = process(buffer, &options).unwrap();
    let svg = encode_svg(&out);
    assert_eq!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='32' height='32' shape-rendering='crispEdges'>\n\
         <rect x='0' y='0' width='32' height='32' fill='black' />\n\
         </svg>"
    );
}

#[test]
fn test_row_runs_cover_a_fully_dark_image() {
    // The RLE fallback emits exactly one full-width rect per row.
    let buffer = PixelBuffer::filled(40, 12, [0, 0, 0, 255]).unwrap();
    let rects = regions::row_runs(&buffer);
    assert_eq!(rects.len(), 12);
    for (y, rect) in rects.iter().enumerate() {
        assert_eq!(rect.y, y as u32);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 1);
    }
}

#[test]
fn test_serpentine_only_differs_on_odd_rows_end_to_end() {
    let make = || {
        let mut data = Vec::new();
        for _ in 0..2 {
            for x in 0..8u32 {
                let v = (x * 30).min(255) as u8;
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::new(8, 2, data).unwrap()
    };
    let base = DitherOptions::new().palette_size(2);
    let plain = process(make(), &base).unwrap();
    let snake = process(make(), &base.clone().serpentine(true)).unwrap();

    let row = 8 * 4;
    assert_eq!(&plain.data()[..row], &snake.data()[..row]);
    assert_ne!(&plain.data()[row..], &snake.data()[row..]);
}

#[test]
fn test_pixelation_then_dither_keeps_dimensions() {
    let buffer = PixelBuffer::filled(30, 20, [128, 128, 128, 255]).unwrap();
    let options = DitherOptions::new()
        .pixelation_scale(7)
        .algorithm(DitherAlgorithm::Bayer);
    let out = process(buffer, &options).unwrap();
    assert_eq!(out.width(), 30);
    assert_eq!(out.height(), 20);
}
