/// Target bracket width for bisection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    pub fn new(epsilon: f64) -> Tolerance {
        assert!(epsilon > 0.0);
        assert!(epsilon.is_finite());
        Tolerance { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Bisection steps needed to shrink a bracket of `width` down to epsilon.
    ///
    /// Computed up front as ceil(log2(width / epsilon)), so the solver needs no
    /// per-iteration convergence test.  Brackets already narrower than epsilon
    /// take zero steps.
    ///
    /// The logs are taken separately so a subnormal epsilon or a huge width
    /// cannot overflow the ratio.  A width that overflowed to infinity counts
    /// as 2^(MAX_EXP + 1), above any difference of two finite floats.
    pub fn iterations_for(&self, width: f64) -> usize {
        let log_width = if width.is_finite() {
            width.abs().log2()
        } else {
            f64::from(f64::MAX_EXP + 1)
        };
        let n = (log_width - self.epsilon.log2()).ceil();
        if n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    /// Decimal places matching this tolerance, i.e. -log10(epsilon) rounded to
    /// the nearest integer and clamped at zero.
    pub fn decimals(&self) -> u32 {
        let d = (-self.epsilon.log10()).round();
        if d > 0.0 {
            d as u32
        } else {
            0
        }
    }
}

/// Precision applied to reported roots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rounding {
    /// Report the raw estimate.
    Exact,
    /// Round to this many decimal places.
    Decimals(u32),
}

impl Rounding {
    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            Rounding::Exact => x,
            Rounding::Decimals(places) => {
                let scale = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
                let rounded = (x * scale).round() / scale;
                // collapse -0.0 so a root at the origin reads as 0
                if rounded.is_finite() {
                    rounded + 0.0
                } else {
                    x
                }
            }
        }
    }
}
