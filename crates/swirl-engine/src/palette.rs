//! Cyclic colour gradients for ink injection.

use smallvec::SmallVec;
use swirl_core::ConfigError;

/// One colour stop: a component per channel.
pub type Stop = SmallVec<[f32; 4]>;

/// A cyclic list of colour stops sampled by a continuous phase.
///
/// Integer phases land exactly on stops; fractional phases interpolate
/// linearly toward the next stop, wrapping from the last back to the first.
///
/// # Examples
///
/// ```
/// use swirl_engine::Palette;
///
/// let p = Palette::new(vec![vec![0.0f32, 100.0], vec![10.0, 0.0]]).unwrap();
/// assert_eq!(p.sample(0.5).as_slice(), &[5.0, 50.0]);
/// assert_eq!(p.sample(1.0).as_slice(), &[10.0, 0.0]);
/// assert_eq!(p.sample(2.0).as_slice(), &[0.0, 100.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    stops: Vec<Stop>,
}

impl Palette {
    /// Build a palette from stops of equal, non-zero length.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPalette`] for an empty list, empty stops,
    /// stops of unequal length, or non-finite components.
    pub fn new<S: AsRef<[f32]>>(stops: Vec<S>) -> Result<Self, ConfigError> {
        let Some(first) = stops.first() else {
            return Err(ConfigError::InvalidPalette {
                reason: "palette has no stops".to_string(),
            });
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(ConfigError::InvalidPalette {
                reason: "stops have no components".to_string(),
            });
        }
        for (i, stop) in stops.iter().enumerate() {
            let stop = stop.as_ref();
            if stop.len() != width {
                return Err(ConfigError::InvalidPalette {
                    reason: format!("stop {i} has {} components, expected {width}", stop.len()),
                });
            }
            if stop.iter().any(|c| !c.is_finite()) {
                return Err(ConfigError::InvalidPalette {
                    reason: format!("stop {i} has a non-finite component"),
                });
            }
        }
        Ok(Self {
            stops: stops
                .iter()
                .map(|s| SmallVec::from_slice(s.as_ref()))
                .collect(),
        })
    }

    /// Light blue to light pink, for three colour channels.
    pub fn pastel() -> Self {
        Self {
            stops: vec![
                SmallVec::from_slice(&[191.0, 236.0, 255.0]),
                SmallVec::from_slice(&[255.0, 204.0, 234.0]),
            ],
        }
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Components per stop.
    pub fn components(&self) -> usize {
        self.stops[0].len()
    }

    /// Colour at phase `t`, each component rounded to the nearest integer.
    ///
    /// Halves round up toward positive infinity (`-2.5` becomes `-2.0`),
    /// unlike [`f32::round`], which rounds them away from zero.
    ///
    /// Negative phases wrap. A non-finite phase samples the first stop.
    pub fn sample(&self, t: f32) -> Stop {
        let t = if t.is_finite() { t } else { 0.0 };
        let n = self.stops.len() as i64;
        let base = t.floor();
        let idx = (base as i64).rem_euclid(n) as usize;
        let next = (idx + 1) % self.stops.len();
        let f = t - base;
        self.stops[idx]
            .iter()
            .zip(&self.stops[next])
            .map(|(&a, &b)| (a + (b - a) * f + 0.5).floor())
            .collect()
    }
}
