/// Specifies the direction of a transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward transform, using the `e^(-2πi·k/N)` kernel.
    Forward,
    /// Inverse transform, using the `e^(+2πi·k/N)` kernel.
    ///
    /// The output is not scaled by `1 / N`.
    Inverse,
}

impl Direction {
    /// Selects the inverse direction if `inverse` is true.
    #[inline]
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            Self::Inverse
        } else {
            Self::Forward
        }
    }

    /// Returns true if the transform is a forward transform.
    #[inline]
    pub fn is_forward(&self) -> bool {
        match self {
            Self::Forward => true,
            Self::Inverse => false,
        }
    }

    /// Returns the opposite direction.
    #[inline]
    pub fn inverse(&self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Inverse => write!(f, "inverse"),
        }
    }
}
