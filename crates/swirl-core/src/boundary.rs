//! Boundary kinds for ghost-cell enforcement.

use std::fmt;

/// Selects how ghost cells are derived from the adjacent interior cells.
///
/// Scalars are mirrored on every edge. A velocity component is negated on
/// the walls it points into, so no flow passes through the wall:
///
/// | Kind | left/right ghosts | top/bottom ghosts |
/// |------|-------------------|-------------------|
/// | `Scalar` | mirror | mirror |
/// | `HorizontalVelocity` | negate | mirror |
/// | `VerticalVelocity` | mirror | negate |
///
/// Corner ghosts are always the average of their two edge neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Density, ink, pressure, divergence (code 0).
    Scalar,
    /// The x component of velocity (code 1).
    HorizontalVelocity,
    /// The y component of velocity (code 2).
    VerticalVelocity,
}

impl BoundaryKind {
    /// Numeric code used in the classic formulation (0, 1, 2).
    pub fn code(self) -> u8 {
        match self {
            Self::Scalar => 0,
            Self::HorizontalVelocity => 1,
            Self::VerticalVelocity => 2,
        }
    }

    /// Whether left/right ghosts are negated.
    #[inline]
    pub fn negates_x(self) -> bool {
        self == Self::HorizontalVelocity
    }

    /// Whether top/bottom ghosts are negated.
    #[inline]
    pub fn negates_y(self) -> bool {
        self == Self::VerticalVelocity
    }
}

impl TryFrom<u8> for BoundaryKind {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Scalar),
            1 => Ok(Self::HorizontalVelocity),
            2 => Ok(Self::VerticalVelocity),
            other => Err(other),
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::HorizontalVelocity => write!(f, "u"),
            Self::VerticalVelocity => write!(f, "v"),
        }
    }
}
