/// Root finding error conditions.
///
/// To help with diagnostics, these errors carry the relevant `x` position and
/// function value where one exists.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RootError {
    /// Refinement was requested on an interval whose endpoint values do not
    /// enclose a sign change.
    #[error("root is not bracketed: f({a}) = {f_a}, f({b}) = {f_b}")]
    InvalidBracket { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// The divergence guard tripped: the midpoint magnitude exceeded both
    /// endpoint magnitudes.  Typically a pole, not a root.
    #[error("spurious root near x = {x}: |f| grew to {f_x} at the midpoint")]
    SpuriousRoot { x: f64, f_x: f64 },

    /// The function evaluated to NaN or an infinity.
    #[error("non-finite function value f({x}) = {value}")]
    NonFinite { x: f64, value: f64 },

    /// The scan cursor cannot advance because `x + step` rounds back to `x`.
    #[error("scan step {step} is too small to advance past x = {x}")]
    StepTooSmall { x: f64, step: f64 },
}

impl RootError {
    /// Whether the error only condemns a single candidate bracket.  The
    /// multi-root driver discards such candidates and keeps scanning.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            RootError::InvalidBracket { .. } | RootError::SpuriousRoot { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_errors() {
        let invalid = RootError::InvalidBracket {
            a: 0.0,
            b: 1.0,
            f_a: 1.0,
            f_b: 2.0,
        };
        let spurious = RootError::SpuriousRoot { x: 0.5, f_x: 3.0 };
        assert!(invalid.is_local());
        assert!(spurious.is_local());

        let nan = RootError::NonFinite {
            x: 0.0,
            value: f64::NAN,
        };
        let stuck = RootError::StepTooSmall { x: 1e20, step: 1e-6 };
        assert!(!nan.is_local());
        assert!(!stuck.is_local());
    }

    #[test]
    fn test_display() {
        let e = RootError::InvalidBracket {
            a: -10.0,
            b: -5.0,
            f_a: 100.0,
            f_b: 25.0,
        };
        assert_eq!(
            e.to_string(),
            "root is not bracketed: f(-10) = 100, f(-5) = 25"
        );
    }
}
