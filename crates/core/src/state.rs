/// A value that an ODE solver can integrate.
///
/// A state exposes its scalar components (used for error norms, finiteness
/// checks and shape checks) and supports the single linear operation that
/// explicit integrators need:
///
/// ```text
/// next = self + scale * other
/// ```
///
/// The rate of a state has the same type as the state. For variable-size
/// states such as `Vec<f64>`, solvers reject a rate whose component count
/// differs from the state's before calling [`State::scaled_add`].
pub trait State: Clone {
    /// Returns the scalar components of the state.
    fn components(&self) -> &[f64];

    /// Returns `self + scale * other`.
    #[must_use]
    fn scaled_add(&self, scale: f64, other: &Self) -> Self;

    /// Returns the number of scalar components.
    fn dim(&self) -> usize {
        self.components().len()
    }
}

impl State for f64 {
    fn components(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn scaled_add(&self, scale: f64, other: &Self) -> Self {
        self + scale * other
    }
}

impl<const N: usize> State for [f64; N] {
    fn components(&self) -> &[f64] {
        self.as_slice()
    }

    fn scaled_add(&self, scale: f64, other: &Self) -> Self {
        std::array::from_fn(|i| self[i] + scale * other[i])
    }
}

impl State for Vec<f64> {
    fn components(&self) -> &[f64] {
        self.as_slice()
    }

    fn scaled_add(&self, scale: f64, other: &Self) -> Self {
        self.iter()
            .zip(other.iter())
            .map(|(s, o)| s + scale * o)
            .collect()
    }
}
