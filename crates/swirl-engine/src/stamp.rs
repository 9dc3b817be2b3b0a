//! Circular injection stamps.
//!
//! A stamp covers every interior cell within `radius` of a floored
//! centre point. Stamps are clipped to the interior, so a point near (or
//! beyond) the edge simply covers fewer cells.

use swirl_core::GridDims;

/// Default ink radius: half of `ceil(area / 1500)`.
pub fn default_ink_radius(dims: GridDims) -> f32 {
    (dims.area() as f32 / 1500.0).ceil() * 0.5
}

/// Default velocity radius: half of `area / 2500`.
pub fn default_velocity_radius(dims: GridDims) -> f32 {
    dims.area() as f32 / 2500.0 * 0.5
}

/// The set of interior cells covered by a circular stamp.
///
/// # Examples
///
/// ```
/// use swirl_core::GridDims;
/// use swirl_engine::Stamp;
///
/// let dims = GridDims::new(10, 10).unwrap();
/// // Radius 1 around (5, 5): the centre plus its four neighbours.
/// assert_eq!(Stamp::new(dims, 5.7, 5.2, 1.0).cells().count(), 5);
/// // Radius 0 covers the centre only.
/// assert_eq!(Stamp::new(dims, 5.0, 5.0, 0.0).cells().count(), 1);
/// // Entirely outside: nothing.
/// assert_eq!(Stamp::new(dims, -9.0, 5.0, 2.0).cells().count(), 0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Stamp {
    cx: f64,
    cy: f64,
    radius_sq: f64,
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
}

impl Stamp {
    /// Stamp centred on `(px, py)` (floored to a cell) with `radius`.
    ///
    /// A non-finite centre or a negative/NaN radius yields an empty stamp.
    pub fn new(dims: GridDims, px: f32, py: f32, radius: f32) -> Self {
        if !px.is_finite() || !py.is_finite() || !(radius >= 0.0) {
            return Self::empty();
        }
        // Bounds are clipped in f64 so far-off centres never reach i64.
        let cx = px.floor() as f64;
        let cy = py.floor() as f64;
        let r = radius as f64;
        Self {
            cx,
            cy,
            radius_sq: r * r,
            min_x: (cx - r).floor().max(1.0) as i64,
            max_x: (cx + r).floor().min(dims.width() as f64) as i64,
            min_y: (cy - r).floor().max(1.0) as i64,
            max_y: (cy + r).floor().min(dims.height() as f64) as i64,
        }
    }

    fn empty() -> Self {
        Self {
            cx: 0.0,
            cy: 0.0,
            radius_sq: 0.0,
            min_x: 1,
            max_x: 0,
            min_y: 1,
            max_y: 0,
        }
    }

    /// Covered cells as `(x, y)` interior coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.min_x..=self.max_x).flat_map(move |x| {
            (self.min_y..=self.max_y).filter_map(move |y| {
                let dx = x as f64 - self.cx;
                let dy = y as f64 - self.cy;
                (dx * dx + dy * dy <= self.radius_sq).then_some((x as usize, y as usize))
            })
        })
    }

    /// Whether the stamp covers no cells.
    pub fn is_empty(&self) -> bool {
        self.cells().next().is_none()
    }
}
