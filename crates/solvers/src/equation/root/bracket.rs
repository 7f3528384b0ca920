use thiserror::Error;

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Residuals at the endpoints have the same sign.
    #[error(
        "no sign change: g({left}) = {left_residual}, g({right}) = {right_residual}"
    )]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    pub(super) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// A point and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Point {
    pub(super) x: f64,
    pub(super) residual: f64,
}

impl Point {
    pub(super) fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }

    pub(super) fn sign(&self) -> Sign {
        Sign::of(self.residual)
    }

    /// Returns whichever point has the smaller residual magnitude.
    pub(super) fn better(self, other: Self) -> Self {
        if other.residual.abs() < self.residual.abs() {
            other
        } else {
            self
        }
    }
}

/// Ordered finite bounds for a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

/// Two evaluated points whose residuals differ in sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    pub(super) left: Point,
    pub(super) right: Point,
}

impl Bracket {
    /// Creates a bracket from two evaluated points.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if the residuals share a sign.
    pub(super) fn new(left: Point, right: Point) -> Result<Self, BracketError> {
        if left.sign() == right.sign() {
            return Err(BracketError::NoSignChange {
                left: left.x,
                right: right.x,
                left_residual: left.residual,
                right_residual: right.residual,
            });
        }

        Ok(Self { left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert_eq!(Bounds::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn bracket_requires_sign_change() {
        let err = Bracket::new(Point::new(0.0, -3.0), Point::new(1.0, -4.0))
            .expect_err("same sign");

        let BracketError::NoSignChange {
            left_residual,
            right_residual,
            ..
        } = err
        else {
            panic!("expected no sign change, got {err:?}");
        };
        assert_relative_eq!(left_residual, -3.0);
        assert_relative_eq!(right_residual, -4.0);
    }

    #[test]
    fn zero_counts_as_positive() {
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert!(Bracket::new(Point::new(0.0, 0.0), Point::new(1.0, -1.0)).is_ok());
    }

    #[test]
    fn better_prefers_smaller_residual() {
        let a = Point::new(1.0, -0.5);
        let b = Point::new(2.0, 0.25);
        assert_eq!(a.better(b), b);
        assert_eq!(b.better(a), b);
    }
}
