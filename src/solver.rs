//! Root refinement by guarded bisection, and the multi-root driver built on
//! top of it.
//!
//! # Examples
//! Refining a single bracket:
//!
//! ```
//! use rootsweep::bracket::Bounds;
//! use rootsweep::solver::{bisection, Guard};
//! use rootsweep::tolerance::Tolerance;
//! use rootsweep::wrap::RealFn;
//!
//! // function... no derivatives needed!
//! let in_f = |x: f64| -x*x + 2.0*x + 1.0;
//! let f = RealFn::new(&in_f);
//!
//! let tol = Tolerance::new(1e-9);
//! let found = bisection(&f, &Bounds::new(2.0, 3.0), Guard::Divergence, &tol).expect("root");
//!
//! // root at x=1+sqrt(2)
//! assert!((found.root - 2.41421356237).abs() < 1e-9);
//! assert_eq!(found.iterations, 30);
//! ```

mod driver;

pub use self::driver::{find_roots, survey, Candidate, Outcome};

use log::trace;

use crate::bracket::{eval_finite, straddles_zero, Bounds};
use crate::error::RootError;
use crate::tolerance::Tolerance;
use crate::wrap::RealFnEval;

/// Divergence guard mode for bisection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Abort when the midpoint magnitude exceeds both endpoint magnitudes.
    /// A genuine crossing shrinks |f| towards the root; a pole grows it.
    Divergence,
    /// Bisect blindly.  A pole is then reported as a root.
    Off,
}

/// A refined root estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct Bisection {
    pub root: f64,
    /// Midpoint evaluations performed.  Zero when an endpoint was an exact
    /// zero.
    pub iterations: usize,
    /// Width of the final bracket; at most epsilon unless the loop exited on
    /// an exact zero or on adjacent floats.
    pub width: f64,
}

/// Root finding via Bisection Method.
///
/// The iteration count is fixed up front from the bracket width and the
/// tolerance, ceil(log2(width / epsilon)), so the final bracket is no wider
/// than epsilon.  It always converges given a valid starting bracket, but the
/// speed of convergence is linear.
///
/// An exact zero at either endpoint is returned immediately.  Endpoints whose
/// values do not straddle zero give `InvalidBracket` without evaluating any
/// midpoint.
///
/// The loop also ends early once the endpoints are adjacent floats, so a
/// tolerance finer than the float spacing near the root still terminates.
pub fn bisection<F>(
    f: &F,
    bounds: &Bounds,
    guard: Guard,
    tolerance: &Tolerance,
) -> Result<Bisection, RootError>
where
    F: RealFnEval,
{
    let mut x1 = bounds.a;
    let mut x2 = bounds.b;

    let mut f1 = eval_finite(f, x1)?;
    if f1 == 0.0 {
        return Ok(Bisection {
            root: x1,
            iterations: 0,
            width: 0.0,
        });
    }
    let mut f2 = eval_finite(f, x2)?;
    if f2 == 0.0 {
        return Ok(Bisection {
            root: x2,
            iterations: 0,
            width: 0.0,
        });
    }

    // ensure we started with valid bracket
    if !straddles_zero(f1, f2) {
        return Err(RootError::InvalidBracket {
            a: x1,
            b: x2,
            f_a: f1,
            f_b: f2,
        });
    }

    let n = tolerance.iterations_for(x2 - x1);
    for i in 0..n {
        let x3 = 0.5 * (x1 + x2);

        // endpoints are adjacent floats: epsilon is below the resolution here
        if x3 <= x1 || x3 >= x2 {
            trace!("bracket [{}, {}] cannot shrink after {} iterations", x1, x2, i);
            return Ok(Bisection {
                root: x3,
                iterations: i,
                width: x2 - x1,
            });
        }

        let f3 = eval_finite(f, x3)?;

        if guard == Guard::Divergence && f3.abs() > f1.abs() && f3.abs() > f2.abs() {
            trace!("divergence at x={} after {} iterations", x3, i + 1);
            return Err(RootError::SpuriousRoot { x: x3, f_x: f3 });
        }

        if f3 == 0.0 {
            return Ok(Bisection {
                root: x3,
                iterations: i + 1,
                width: x2 - x1,
            });
        }

        // keep the endpoints on opposite sides of zero
        if (f2 < 0.0) != (f3 < 0.0) {
            x1 = x3;
            f1 = f3;
        } else {
            x2 = x3;
            f2 = f3;
        }
    }

    Ok(Bisection {
        root: 0.5 * (x1 + x2),
        iterations: n,
        width: x2 - x1,
    })
}
