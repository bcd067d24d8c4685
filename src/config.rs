use crate::solver::Guard;
use crate::tolerance::{Rounding, Tolerance};

/// Settings for a multi-root search.
///
/// Built from the tolerance; everything else defaults from it:
///
/// * scan step: epsilon itself (fine, and slow over wide intervals)
/// * rounding: `-log10(epsilon)` decimal places
/// * guard: `Guard::Divergence`
///
/// At the default step every bracket is already about epsilon wide, so
/// bisection takes no steps and the guard never fires: a pole is returned as
/// a root.  Use `with_step` with a step well above epsilon to have poles
/// rejected.
///
/// ```
/// use rootsweep::config::SearchConfig;
/// use rootsweep::solver::Guard;
/// use rootsweep::tolerance::Rounding;
///
/// let config = SearchConfig::new(1e-6)
///     .with_step(0.01)
///     .with_rounding(Rounding::Exact)
///     .with_guard(Guard::Off);
/// assert_eq!(config.step(), 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    tolerance: Tolerance,
    step: Option<f64>,
    rounding: Rounding,
    guard: Guard,
}

impl SearchConfig {
    pub fn new(epsilon: f64) -> SearchConfig {
        let tolerance = Tolerance::new(epsilon);
        SearchConfig {
            tolerance,
            step: None,
            rounding: Rounding::Decimals(tolerance.decimals()),
            guard: Guard::Divergence,
        }
    }

    /// Scan with a step decoupled from the tolerance.
    pub fn with_step(mut self, step: f64) -> SearchConfig {
        assert!(step > 0.0);
        assert!(step.is_finite());
        self.step = Some(step);
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> SearchConfig {
        self.rounding = rounding;
        self
    }

    pub fn with_guard(mut self, guard: Guard) -> SearchConfig {
        self.guard = guard;
        self
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    pub fn step(&self) -> f64 {
        self.step.unwrap_or(self.tolerance.epsilon())
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn guard(&self) -> Guard {
        self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_tolerance() {
        let c = SearchConfig::new(1e-4);
        assert_eq!(c.tolerance().epsilon(), 1e-4);
        assert_eq!(c.step(), 1e-4);
        assert_eq!(c.rounding(), Rounding::Decimals(4));
        assert_eq!(c.guard(), Guard::Divergence);
    }

    #[test]
    fn test_overrides() {
        let c = SearchConfig::new(1e-6)
            .with_step(0.05)
            .with_rounding(Rounding::Decimals(2))
            .with_guard(Guard::Off);
        assert_eq!(c.tolerance().epsilon(), 1e-6);
        assert_eq!(c.step(), 0.05);
        assert_eq!(c.rounding(), Rounding::Decimals(2));
        assert_eq!(c.guard(), Guard::Off);
    }

    #[test]
    #[should_panic]
    fn test_zero_step() {
        let _ = SearchConfig::new(1e-6).with_step(0.0);
    }

    #[test]
    #[should_panic]
    fn test_nan_step() {
        let _ = SearchConfig::new(1e-6).with_step(f64::NAN);
    }

    #[test]
    #[should_panic]
    fn test_bad_tolerance() {
        let _ = SearchConfig::new(-1e-6);
    }
}
