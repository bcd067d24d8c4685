use log::debug;

use super::bisection;
use crate::bracket::{first_bracket, Bounds, Scan};
use crate::config::SearchConfig;
use crate::error::RootError;
use crate::wrap::RealFnEval;

/// Fate of one bracket found by the scanner.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Refined and rounded root.
    Accepted(f64),
    /// Refinement failed with a bracket-local error (`InvalidBracket` or
    /// `SpuriousRoot`).
    Rejected(RootError),
    /// The scan restarted on an exact zero already reported; the rounded
    /// value is kept for diagnostics only.
    Duplicate(f64),
}

/// A scanned bracket and what became of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub bracket: Bounds,
    pub outcome: Outcome,
}

/// Finds all roots of `f` on `bounds` that the scan step can resolve.
///
/// Roots come back rounded per the config and strictly ascending.  Brackets
/// whose refinement fails are silently dropped; use `survey` to see them.
pub fn find_roots<F>(f: &F, bounds: &Bounds, config: &SearchConfig) -> Result<Vec<f64>, RootError>
where
    F: RealFnEval,
{
    let roots = survey(f, bounds, config)?
        .into_iter()
        .filter_map(|c| match c.outcome {
            Outcome::Accepted(x) => Some(x),
            _ => None,
        })
        .collect();
    Ok(roots)
}

/// Scans `bounds` left to right and refines every bracket found, reporting
/// each candidate with its outcome.
///
/// After a bracket is found the cursor moves to its right endpoint whether or
/// not refinement succeeds, so no region is scanned twice.  Non-finite
/// function values and a stalled cursor abort the whole search.
pub fn survey<F>(f: &F, bounds: &Bounds, config: &SearchConfig) -> Result<Vec<Candidate>, RootError>
where
    F: RealFnEval,
{
    let step = config.step();
    let rounding = config.rounding();
    debug!(
        "searching [{}, {}] step={} epsilon={}",
        bounds.a,
        bounds.b,
        step,
        config.tolerance().epsilon()
    );

    let mut candidates = Vec::new();
    let mut cursor = bounds.a;
    let mut last_root: Option<f64> = None;

    while let Scan::Bracket(bracket) = first_bracket(f, cursor, bounds.b, step)? {
        cursor = bracket.b;

        let outcome = match bisection(f, &bracket, config.guard(), config.tolerance()) {
            Ok(found) if last_root == Some(found.root) => {
                debug!("duplicate root x={} in {:?}", found.root, bracket);
                Outcome::Duplicate(rounding.apply(found.root))
            }
            Ok(found) => {
                let x = rounding.apply(found.root);
                debug!(
                    "root x={} after {} iterations in {:?}",
                    x, found.iterations, bracket
                );
                last_root = Some(found.root);
                Outcome::Accepted(x)
            }
            Err(e) if e.is_local() => {
                debug!("rejected {:?}: {}", bracket, e);
                Outcome::Rejected(e)
            }
            Err(e) => return Err(e),
        };
        candidates.push(Candidate { bracket, outcome });
    }

    debug!("search done, {} candidates", candidates.len());
    Ok(candidates)
}
