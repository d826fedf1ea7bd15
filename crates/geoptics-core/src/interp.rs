//! Piecewise-linear interpolation over tabulated spectra.
//!
//! Spectra are sampled at grid points chosen by the simulation engine, which
//! may lie slightly outside the tabulated range. Outside its domain the graph
//! returns the boundary value (the convention of Geant4's
//! `G4PhysicsVector::Value`), or zero when built with
//! [`GraphOptions::zero_outside`].

use log::debug;
use thiserror::Error;

use crate::units::{Quantity, QuantityArray, Unit, UnitError};

/// Errors from building or evaluating an [`InterpolatingGraph`].
#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("x and y have different lengths ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("Need at least 2 data points, got {0}")]
    TooFewPoints(usize),

    #[error("Duplicate x value {0} with differing y values")]
    DuplicateX(f64),

    #[error("Negative value {y} at x = {x}")]
    NegativeValue { x: f64, y: f64 },

    #[error("Non-finite data point ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Construction options for [`InterpolatingGraph`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GraphOptions {
    pub min_x: Option<Quantity>,
    pub max_x: Option<Quantity>,
    pub zero_outside: bool,
}

impl GraphOptions {
    /// Drop points below `min_x` before building. The bound must have the
    /// dimension of the graph's x values.
    pub fn min_x(mut self, min_x: Quantity) -> Self {
        self.min_x = Some(min_x);
        self
    }

    /// Drop points above `max_x` before building.
    pub fn max_x(mut self, max_x: Quantity) -> Self {
        self.max_x = Some(max_x);
        self
    }

    pub fn zero_outside(mut self) -> Self {
        self.zero_outside = true;
        self
    }
}

/// Linear interpolant over unit-tagged `(x, y)` points.
#[derive(Debug, Clone)]
pub struct InterpolatingGraph {
    xs: Vec<f64>,
    ys: Vec<f64>,
    x_unit: Unit,
    y_unit: Unit,
    zero_outside: bool,
}

impl InterpolatingGraph {
    pub fn new(x: &QuantityArray, y: &QuantityArray) -> Result<Self, InterpolationError> {
        Self::with_options(x, y, GraphOptions::default())
    }

    /// Build a graph, sorting the points by x.
    ///
    /// Repeated identical points are merged; a repeated x with a different y
    /// is rejected.
    pub fn with_options(
        x: &QuantityArray,
        y: &QuantityArray,
        options: GraphOptions,
    ) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        // bounds must share the dimension of x: E = hc/λ would reverse them
        let x_unit = x.unit();
        let lo = options.min_x.map(|q| q.to(x_unit).map(|q| q.value())).transpose()?;
        let hi = options.max_x.map(|q| q.to(x_unit).map(|q| q.value())).transpose()?;

        let mut points: Vec<(f64, f64)> = Vec::with_capacity(x.len());
        for (&px, &py) in x.values().iter().zip(y.values()) {
            if !px.is_finite() || !py.is_finite() {
                return Err(InterpolationError::NonFinite { x: px, y: py });
            }
            if lo.is_some_and(|lo| px < lo) || hi.is_some_and(|hi| px > hi) {
                continue;
            }
            if py < 0.0 {
                return Err(InterpolationError::NegativeValue { x: px, y: py });
            }
            points.push((px, py));
        }

        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut xs: Vec<f64> = Vec::with_capacity(points.len());
        let mut ys: Vec<f64> = Vec::with_capacity(points.len());
        for (px, py) in points {
            if let (Some(&last_x), Some(&last_y)) = (xs.last(), ys.last()) {
                if last_x == px {
                    if last_y == py {
                        continue;
                    }
                    return Err(InterpolationError::DuplicateX(px));
                }
            }
            xs.push(px);
            ys.push(py);
        }

        if xs.len() < 2 {
            return Err(InterpolationError::TooFewPoints(xs.len()));
        }
        debug!(
            "built graph with {} points over [{}, {}] {}",
            xs.len(),
            xs[0],
            xs[xs.len() - 1],
            x_unit
        );

        Ok(Self {
            xs,
            ys,
            x_unit,
            y_unit: y.unit(),
            zero_outside: options.zero_outside,
        })
    }

    pub fn x_unit(&self) -> Unit {
        self.x_unit
    }

    pub fn y_unit(&self) -> Unit {
        self.y_unit
    }

    /// Tabulated `[min, max]` in the graph's x unit.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluate at a bare x expressed in [`Self::x_unit`].
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let (min, max) = self.domain();
        if x < min || x > max {
            if self.zero_outside {
                return 0.0;
            }
            return if x < min { self.ys[0] } else { self.ys[n - 1] };
        }

        // Binary search for the enclosing interval
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] > x {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let h = self.xs[hi] - self.xs[lo];
        let b = (x - self.xs[lo]) / h;
        self.ys[lo] + b * (self.ys[hi] - self.ys[lo])
    }

    /// Evaluate at a quantity, converting wavelength ⇄ energy if needed.
    pub fn at(&self, x: Quantity) -> Result<Quantity, InterpolationError> {
        let x = x.to_spectral(self.x_unit)?;
        Ok(Quantity::new(self.eval(x.value()), self.y_unit))
    }

    /// Evaluate at every point of `x`.
    pub fn sample(&self, x: &QuantityArray) -> Result<QuantityArray, InterpolationError> {
        let x = x.to_spectral(self.x_unit)?;
        Ok(QuantityArray::new(
            x.values().iter().map(|&v| self.eval(v)).collect(),
            self.y_unit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn graph(xs: &[f64], ys: &[f64]) -> Result<InterpolatingGraph, InterpolationError> {
        InterpolatingGraph::new(
            &QuantityArray::new(xs.to_vec(), Unit::NANOMETER),
            &QuantityArray::new(ys.to_vec(), Unit::PER_CENTIMETER),
        )
    }

    #[test]
    fn test_graph_passes_through_data_points() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 3.0, 5.0, 4.0, 1.0];
        let g = graph(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            let result = g.eval(*x);
            assert!(
                (result - y).abs() < 1e-12,
                "Graph({}) = {} but expected {}",
                x,
                result,
                y
            );
        }
    }

    #[test]
    fn test_unsorted_input_and_clamping() {
        let g = graph(&[200.0, 100.0], &[4.0, 2.0]).unwrap();
        assert_relative_eq!(g.eval(150.0), 3.0);
        assert_relative_eq!(g.eval(50.0), 2.0);
        assert_relative_eq!(g.eval(1000.0), 4.0);
        assert_eq!(g.domain(), (100.0, 200.0));
    }

    #[test]
    fn test_zero_outside() {
        let g = InterpolatingGraph::with_options(
            &QuantityArray::new(vec![100.0, 200.0], Unit::NANOMETER),
            &QuantityArray::dimensionless(vec![1.0, 1.0]),
            GraphOptions::default().zero_outside(),
        )
        .unwrap();
        assert_eq!(g.eval(99.0), 0.0);
        assert_eq!(g.eval(150.0), 1.0);
        assert_eq!(g.eval(201.0), 0.0);
    }

    #[test]
    fn test_duplicates() {
        let g = graph(&[1.0, 2.0, 2.0, 3.0], &[1.0, 2.0, 2.0, 3.0]).unwrap();
        assert_eq!(g.domain(), (1.0, 3.0));
        assert!(matches!(
            graph(&[1.0, 2.0, 2.0], &[1.0, 2.0, 5.0]),
            Err(InterpolationError::DuplicateX(x)) if x == 2.0
        ));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            graph(&[1.0, 2.0], &[1.0]),
            Err(InterpolationError::LengthMismatch { x: 2, y: 1 })
        ));
        assert!(matches!(
            graph(&[1.0], &[1.0]),
            Err(InterpolationError::TooFewPoints(1))
        ));
        assert!(matches!(
            graph(&[1.0, 2.0], &[1.0, -1.0]),
            Err(InterpolationError::NegativeValue { .. })
        ));
        assert!(matches!(
            graph(&[1.0, f64::NAN], &[1.0, 1.0]),
            Err(InterpolationError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_min_max_filter() {
        let g = InterpolatingGraph::with_options(
            &QuantityArray::new(vec![100.0, 110.0, 120.0, 130.0], Unit::NANOMETER),
            &QuantityArray::dimensionless(vec![1.0, 2.0, 3.0, 4.0]),
            GraphOptions::default()
                .min_x(Quantity::new(105.0, Unit::NANOMETER))
                .max_x(Quantity::new(0.125, Unit::MICROMETER)),
        )
        .unwrap();
        assert_eq!(g.domain(), (110.0, 120.0));
    }

    #[test]
    fn test_bounds_must_match_x_dimension() {
        let x = QuantityArray::new(vec![2.0, 4.0, 6.0, 8.0], Unit::ELECTRONVOLT);
        let y = QuantityArray::dimensionless(vec![1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(
            InterpolatingGraph::with_options(
                &x,
                &y,
                GraphOptions::default().min_x(Quantity::new(200.0, Unit::NANOMETER)),
            ),
            Err(InterpolationError::Unit(UnitError::Incompatible { .. }))
        ));

        let g = InterpolatingGraph::with_options(
            &x,
            &y,
            GraphOptions::default().min_x(Quantity::new(0.003, Unit::KILOELECTRONVOLT)),
        )
        .unwrap();
        assert_eq!(g.domain(), (4.0, 8.0));
    }

    #[test]
    fn test_evaluate_in_energy() {
        let g = graph(&[100.0, 200.0], &[2.0, 4.0]).unwrap();
        let e = Quantity::new(150.0, Unit::NANOMETER)
            .to_spectral(Unit::ELECTRONVOLT)
            .unwrap();
        let v = g.at(e).unwrap();
        assert_relative_eq!(v.value(), 3.0, max_relative = 1e-12);
        assert_eq!(v.unit(), Unit::PER_CENTIMETER);
        assert!(g.at(Quantity::new(1.0, Unit::KELVIN)).is_err());
    }
}
