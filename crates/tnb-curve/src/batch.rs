//! Parallel evaluation of independent curves.
//!
//! Frame propagation within one chain is sequential, so parallelism is
//! only applied across chains.

use rayon::prelude::*;
use tnb_core::Result;
use tnb_math::Point3;

use crate::curve::{eval_bezier, eval_bspline, Curve};

fn eval_batch<P, F>(polygons: &[P], steps: u32, eval: F) -> Result<Vec<Curve>>
where
    P: AsRef<[Point3]> + Sync,
    F: Fn(&[Point3], u32) -> Result<Curve> + Sync,
{
    let results: Vec<Result<Curve>> = polygons
        .par_iter()
        .map(|points| eval(points.as_ref(), steps))
        .collect();
    // Sequential collect so the reported error is the first in input order.
    results.into_iter().collect()
}

/// Evaluate many Bezier chains in parallel, returning curves in input order.
pub fn eval_bezier_batch<P>(polygons: &[P], steps: u32) -> Result<Vec<Curve>>
where
    P: AsRef<[Point3]> + Sync,
{
    eval_batch(polygons, steps, eval_bezier)
}

/// Evaluate many B-splines in parallel, returning curves in input order.
pub fn eval_bspline_batch<P>(polygons: &[P], steps: u32) -> Result<Vec<Curve>>
where
    P: AsRef<[Point3]> + Sync,
{
    eval_batch(polygons, steps, eval_bspline)
}
