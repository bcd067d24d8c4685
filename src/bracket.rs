//! Locating brackets that enclose a sign change.
//!
//! The scanner walks an interval in fixed steps and stops at the first pair of
//! probes whose function values straddle zero.  For a continuous function the
//! Intermediate Value Theorem guarantees a root inside.  Without a continuity
//! guarantee it might be a singularity instead; the bisection guard in
//! `solver` exists to catch that.
//!
//! Roots closer together than the step can be missed entirely (an even number
//! of crossings leaves the sign unchanged) or merged into one bracket.  That
//! is the price of a fixed step: shrink the step to resolve them.

use log::trace;

use crate::error::RootError;
use crate::wrap::RealFnEval;

/// Bounds represents the closed interval [a,b].
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    pub a: f64,
    pub b: f64,
}

impl Bounds {
    pub fn new(a: f64, b: f64) -> Bounds {
        assert!(a <= b);
        assert!(a.is_finite() && b.is_finite());
        Bounds { a, b }
    }

    pub fn middle(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    pub fn size(&self) -> f64 {
        self.b - self.a
    }

    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }
}

/// Whether `f(x1) * f(x2) <= 0`, i.e. the values have opposite signs or one of
/// them is exactly zero.
///
/// The product is never formed: two tiny values of equal sign would underflow
/// to zero and fake a bracket.
pub fn straddles_zero(lhs: f64, rhs: f64) -> bool {
    lhs == 0.0 || rhs == 0.0 || (lhs < 0.0) != (rhs < 0.0)
}

/// Outcome of a single scan.
#[derive(Clone, Debug, PartialEq)]
pub enum Scan {
    /// Bracket whose endpoint values straddle zero.
    Bracket(Bounds),
    /// The cursor reached the upper bound without a sign change.
    Exhausted,
}

/// Evaluate f(x), rejecting NaN and infinities.
pub(crate) fn eval_finite<F>(f: &F, x: f64) -> Result<f64, RootError>
where
    F: RealFnEval,
{
    let value = f.eval_f(x);
    if !value.is_finite() {
        return Err(RootError::NonFinite { x, value });
    }
    Ok(value)
}

/// Scans from `start` towards `bound` in steps of `step` and returns the first
/// bracket containing a sign change.
///
/// The sign test runs before the bound test, so the final probe may land up to
/// one step past `bound`; the function must be evaluable there.  Each step
/// reuses the previous probe's value, costing a single new evaluation.
pub fn first_bracket<F>(f: &F, start: f64, bound: f64, step: f64) -> Result<Scan, RootError>
where
    F: RealFnEval,
{
    assert!(step > 0.0 && step.is_finite());

    let mut x1 = start;
    let mut f1 = eval_finite(f, x1)?;
    let mut x2 = advance(x1, step)?;
    let mut f2 = eval_finite(f, x2)?;

    while !straddles_zero(f1, f2) {
        if x1 >= bound {
            trace!("scan exhausted at x={}", x1);
            return Ok(Scan::Exhausted);
        }
        x1 = x2;
        f1 = f2;
        x2 = advance(x1, step)?;
        f2 = eval_finite(f, x2)?;
    }

    trace!("bracket [{}, {}] f=({}, {})", x1, x2, f1, f2);
    Ok(Scan::Bracket(Bounds { a: x1, b: x2 }))
}

/// Next cursor position, refusing to stall when the step is below the
/// resolution of `x`.
fn advance(x: f64, step: f64) -> Result<f64, RootError> {
    let next = x + step;
    if next <= x {
        return Err(RootError::StepTooSmall { x, step });
    }
    Ok(next)
}

/// Iterator over successive brackets in an interval.
///
/// Every scan after the first restarts at the previous bracket's right
/// endpoint, so the cursor only moves forward.  Iteration ends when the
/// interval is exhausted or after the first error is yielded.
pub struct BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    f: &'a F,
    cursor: f64,
    bound: f64,
    step: f64,
    done: bool,
}

impl<'a, F> BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    pub fn new(f: &'a F, bounds: Bounds, step: f64) -> BracketGenerator<'a, F> {
        assert!(step > 0.0 && step.is_finite());
        BracketGenerator {
            f,
            cursor: bounds.a,
            bound: bounds.b,
            step,
            done: false,
        }
    }

    /// Left end of the next scan.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }
}

impl<'a, F> Iterator for BracketGenerator<'a, F>
where
    F: 'a + RealFnEval,
{
    type Item = Result<Bounds, RootError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match first_bracket(self.f, self.cursor, self.bound, self.step) {
            Ok(Scan::Bracket(b)) => {
                self.cursor = b.b;
                Some(Ok(b))
            }
            Ok(Scan::Exhausted) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
