//! Grid dimensions and the ghost-bordered flat index layout.

use crate::error::ConfigError;

/// Dimensions of a simulation grid.
///
/// A grid of `width * height` interior cells is stored with a one-cell
/// ghost border on every side, so every field buffer holds
/// `(width + 2) * (height + 2)` values laid out row-major:
///
/// ```text
/// index(x, y) = x + y * (width + 2)
///
///   x = 0          ghost column
///   x = 1..=width  interior
///   x = width + 1  ghost column
/// ```
///
/// and likewise for `y` with `height`.
///
/// # Examples
///
/// ```
/// use swirl_core::GridDims;
///
/// let dims = GridDims::new(4, 3).unwrap();
/// assert_eq!(dims.len(), 6 * 5);
/// assert_eq!(dims.index(1, 1), 7);
/// assert!(dims.is_interior(4, 3));
/// assert!(!dims.is_interior(5, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Largest accepted width or height.
    pub const MAX_DIM: u32 = 1 << 16;

    /// Create grid dimensions, rejecting empty or oversized grids.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        (width as usize + 2)
            .checked_mul(height as usize + 2)
            .ok_or(ConfigError::CellCountOverflow { width, height })?;
        Ok(Self { width, height })
    }

    /// Number of interior columns.
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Number of interior rows.
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Row stride of the bordered layout (`width + 2`).
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize + 2
    }

    /// Total bordered cell count, `(width + 2) * (height + 2)`.
    pub fn len(&self) -> usize {
        self.stride() * (self.height as usize + 2)
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of interior cells, `width * height`.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Flat index of `(x, y)` in the bordered layout.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.stride()
    }

    /// Whether `(x, y)` is an interior (non-ghost) cell.
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        (1..=self.width()).contains(&x) && (1..=self.height()).contains(&y)
    }
}
