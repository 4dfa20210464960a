//! Error-diffusion kernel tables.
//!
//! A [`Kernel`] lists the neighbors that receive a share of each pixel's
//! quantization error, as `(dx, dy, weight)` offsets relative to the pixel
//! being processed, plus the divisor that normalizes the weights. Offsets
//! only point forward in scan order (`dy > 0`, or `dy == 0` with `dx > 0`).

/// An error-diffusion weight table.
#[derive(Debug, Clone, Copy)]
pub(super) struct Kernel {
    /// `(dx, dy, weight)` per receiving neighbor.
    pub entries: &'static [(i32, i32, u8)],
    /// Normalizing divisor for the weights.
    pub divisor: u8,
}

/// Floyd-Steinberg: the classic 4-neighbor kernel, divisor 16.
pub(super) const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
};

/// Atkinson: six equal weights over divisor 8, deliberately diffusing only
/// three quarters of the error for a lighter, higher-contrast result.
pub(super) const ATKINSON: Kernel = Kernel {
    entries: &[(1, 0, 1), (2, 0, 1), (-1, 1, 1), (0, 1, 1), (1, 1, 1), (0, 2, 1)],
    divisor: 8,
};

/// Burkes: two-row kernel, divisor 32.
pub(super) const BURKES: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
};

/// Sierra (three-row): divisor 32.
pub(super) const SIERRA: Kernel = Kernel {
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
};

/// Sierra Lite: the cheapest member of the family, divisor 4.
pub(super) const SIERRA_LITE: Kernel = Kernel {
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
};

/// Stucki: three-row kernel, divisor 42.
pub(super) const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};
