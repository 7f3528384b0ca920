use super::{
    Config, StepKind,
    bracket::{Bracket, Point},
};

/// Iteration state for Brent's method.
///
/// `b` is the best point so far and `c` the contrapoint, so `[b, c]` always
/// brackets a root with `|g(b)| <= |g(c)|`. `a` is the previous `b`.
/// `d` is the last step and `e` the one before it.
#[derive(Debug, Clone, Copy)]
pub(super) struct Brent {
    a: Point,
    b: Point,
    c: Point,
    d: f64,
    e: f64,
}

impl Brent {
    pub(super) fn new(bracket: Bracket) -> Self {
        let Bracket { left, right } = bracket;
        let width = right.x - left.x;

        let mut brent = Self {
            a: left,
            b: right,
            c: right,
            d: width,
            e: width,
        };
        brent.orient();
        brent
    }

    /// Restores the invariants after `b` changes.
    fn orient(&mut self) {
        if self.b.sign() == self.c.sign() {
            self.c = self.a;
            self.d = self.b.x - self.a.x;
            self.e = self.d;
        }
        if self.c.residual.abs() < self.b.residual.abs() {
            self.a = self.b;
            self.b = self.c;
            self.c = self.a;
        }
    }

    fn tolerance(&self, config: &Config) -> f64 {
        let scale = self.b.x.abs();
        2.0 * f64::EPSILON * scale + 0.5 * (config.x_abs_tol() + config.x_rel_tol() * scale)
    }

    fn half_width(&self) -> f64 {
        0.5 * (self.c.x - self.b.x)
    }

    /// Returns true if the bracket or the best residual meets tolerance.
    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.half_width().abs() <= self.tolerance(config)
            || self.b.residual.abs() <= config.residual_tol()
    }

    /// Returns the current bracket, ordered.
    pub(super) fn bracket(&self) -> [f64; 2] {
        let (b, c) = (self.b.x, self.c.x);
        [b.min(c), b.max(c)]
    }

    /// Returns the end of the bracket with the smaller residual.
    pub(super) fn current(&self) -> Point {
        self.b
    }

    /// Returns the best point evaluated so far, inside the bracket or not.
    pub(super) fn best(&self) -> Point {
        self.b.better(self.a)
    }

    /// Chooses the next point to evaluate.
    ///
    /// Interpolation is used only when it lands well inside the bracket and
    /// the step shrinks faster than half the step two iterations back.
    /// Otherwise the bracket is bisected. Steps never fall below the
    /// tolerance.
    pub(super) fn propose(&mut self, config: &Config) -> (f64, StepKind) {
        let tol = self.tolerance(config);
        let xm = self.half_width();
        let (a, b, c) = (self.a, self.b, self.c);

        let mut kind = StepKind::Bisection;

        if self.e.abs() >= tol && a.residual.abs() > b.residual.abs() {
            let s = b.residual / a.residual;

            #[allow(clippy::float_cmp)]
            let (mut p, mut q) = if a.x == c.x {
                kind = StepKind::Secant;
                (2.0 * xm * s, 1.0 - s)
            } else {
                kind = StepKind::InverseQuadratic;
                let q = a.residual / c.residual;
                let r = b.residual / c.residual;
                (
                    s * (2.0 * xm * q * (q - r) - (b.x - a.x) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }

            let limit = (3.0 * xm * q - (tol * q).abs()).min((self.e * q).abs());
            if 2.0 * p < limit {
                self.e = self.d;
                self.d = p / q;
            } else {
                kind = StepKind::Bisection;
                self.d = xm;
                self.e = self.d;
            }
        } else {
            self.d = xm;
            self.e = self.d;
        }

        let step = if self.d.abs() > tol {
            self.d
        } else {
            tol.copysign(xm)
        };

        (b.x + step, kind)
    }

    /// Moves the best point to a newly evaluated one.
    pub(super) fn advance(&mut self, point: Point) {
        self.a = self.b;
        self.b = point;
        self.orient();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bracket(left: (f64, f64), right: (f64, f64)) -> Bracket {
        Bracket::new(Point::new(left.0, left.1), Point::new(right.0, right.1))
            .expect("valid bracket")
    }

    #[test]
    fn best_point_starts_with_smaller_residual() {
        let brent = Brent::new(bracket((0.0, -1.0), (2.0, 3.0)));
        assert_relative_eq!(brent.best().x, 0.0);
        assert_eq!(brent.bracket(), [0.0, 2.0]);
    }

    #[test]
    fn secant_step_is_exact_for_linear_residual() {
        // g(x) = 2x - 1
        let mut brent = Brent::new(bracket((0.0, -1.0), (2.0, 3.0)));

        let (x, kind) = brent.propose(&Config::default());

        assert_eq!(kind, StepKind::Secant);
        assert_relative_eq!(x, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn advance_keeps_sign_change() {
        // g(x) = x^2 - 2
        let g = |x: f64| x * x - 2.0;
        let mut brent = Brent::new(bracket((0.0, g(0.0)), (2.0, g(2.0))));
        let config = Config::default();

        for _ in 0..5 {
            let (x, _) = brent.propose(&config);
            brent.advance(Point::new(x, g(x)));

            let [left, right] = brent.bracket();
            assert!(g(left) * g(right) <= 0.0);
        }
    }

    #[test]
    fn converges_on_sqrt_two() {
        let g = |x: f64| x * x - 2.0;
        let mut brent = Brent::new(bracket((1.0, g(1.0)), (2.0, g(2.0))));
        let config = Config::default();

        let mut iters = 0;
        while !brent.is_converged(&config) {
            let (x, _) = brent.propose(&config);
            brent.advance(Point::new(x, g(x)));
            iters += 1;
            assert!(iters < 20, "should converge quickly");
        }

        assert_relative_eq!(brent.best().x, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn falls_back_to_bisection_for_flat_residual() {
        // A step residual defeats interpolation, so the bracket halves.
        let g = |x: f64| if x < 0.3 { -1.0 } else { 1.0 };
        let mut brent = Brent::new(bracket((0.0, g(0.0)), (1.0, g(1.0))));
        let config = Config::default();

        let mut kinds = Vec::new();
        for _ in 0..10 {
            let (x, kind) = brent.propose(&config);
            brent.advance(Point::new(x, g(x)));
            kinds.push(kind);
        }

        assert!(kinds.iter().all(|k| *k == StepKind::Bisection));
        let [left, right] = brent.bracket();
        assert!(left < 0.3 && right >= 0.3);
        assert!(right - left < 1e-2);
    }
}
