//! Enumerate the real roots of a scalar function on an interval.
//!
//! The search walks the interval in fixed steps looking for sign changes
//! (`bracket`), narrows each bracket by bisection (`solver`), and collects
//! the results left to right (`solver::find_roots`).  No derivatives are
//! needed.
//!
//! Functions have to be wrapped before use.  See the `wrap` module for how to
//! do this.  They must be pure: the scanner reuses earlier evaluations.
//!
//! # Examples
//! All roots of a cubic:
//!
//! ```
//! use rootsweep::bracket::Bounds;
//! use rootsweep::config::SearchConfig;
//! use rootsweep::solver::find_roots;
//! use rootsweep::wrap::RealFn;
//!
//! let in_f = |x: f64| x*x*x - x;
//! let f = RealFn::new(&in_f);
//!
//! // scan in steps of 0.01, bisect down to 1e-6, round to 6 decimals
//! let config = SearchConfig::new(1e-6).with_step(0.01);
//! let roots = find_roots(&f, &Bounds::new(-2.0, 2.0), &config).expect("roots");
//!
//! assert_eq!(roots, vec![-1.0, 0.0, 1.0]);
//! ```
//!
//! Seeing why a bracket was thrown away.  The divergence guard inspects
//! bisection midpoints, so it only works when the scan step is coarser than
//! epsilon; at the default step a pole is reported as a root.
//!
//! ```
//! use rootsweep::bracket::Bounds;
//! use rootsweep::config::SearchConfig;
//! use rootsweep::solver::{survey, Outcome};
//! use rootsweep::wrap::RealFn;
//! use rootsweep::RootError;
//!
//! // tan(x) changes sign across its pole at pi/2
//! let in_f = |x: f64| x.tan();
//! let f = RealFn::new(&in_f);
//!
//! let config = SearchConfig::new(1e-6).with_step(0.01);
//! let candidates = survey(&f, &Bounds::new(1.0, 2.0), &config).expect("survey");
//!
//! assert_eq!(candidates.len(), 1);
//! assert!(matches!(
//!     candidates[0].outcome,
//!     Outcome::Rejected(RootError::SpuriousRoot { .. })
//! ));
//! ```

pub mod bracket;
pub mod config;
mod error;
pub mod solver;
pub mod tolerance;
pub mod wrap;

pub use error::RootError;
