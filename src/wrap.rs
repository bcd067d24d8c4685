//! Adapters exposing user functions to the scanner and solvers.
//!
//! The function must be pure: the same `x` always gives the same `f(x)`.
//! Nothing here can check that, and the scanner relies on it when it reuses
//! the previous probe's value.

use std::cell::Cell;

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Wraps function to implement RealFnEval.
pub struct RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub f: &'a F,
}

impl<'a, F> RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F) -> RealFn<'a, F> {
        RealFn { f }
    }
}

impl<'a, F> RealFnEval for RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Wraps another evaluator and counts how often it is called.
pub struct Counted<'a, F>
where
    F: 'a + RealFnEval,
{
    inner: &'a F,
    calls: Cell<usize>,
}

impl<'a, F> Counted<'a, F>
where
    F: 'a + RealFnEval,
{
    pub fn new(inner: &'a F) -> Counted<'a, F> {
        Counted {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of evaluations since construction or the last `reset`.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }
}

impl<'a, F> RealFnEval for Counted<'a, F>
where
    F: 'a + RealFnEval,
{
    fn eval_f(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.eval_f(x)
    }
}
