//! Spectra and the sampling grids handed to the simulation engine.
//!
//! Geant4 property vectors must be given in ascending photon energy, which
//! is descending wavelength. The helpers here always produce grids in that
//! order.

use serde::Serialize;
use uom::si::energy::electronvolt;
use uom::si::f64::Length;

use crate::interp::{GraphOptions, InterpolatingGraph, InterpolationError};
use crate::units::{wavelength_to_energy, Dimension, QuantityArray, Unit, UnitError, HC_EV_NM};

/// Default number of points in a sampling grid.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Paired `(x, y)` arrays, e.g. a wavelength and the property at it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrum {
    pub x: QuantityArray,
    pub y: QuantityArray,
}

impl Spectrum {
    pub fn new(x: QuantityArray, y: QuantityArray) -> Self {
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn graph(&self) -> Result<InterpolatingGraph, InterpolationError> {
        InterpolatingGraph::new(&self.x, &self.y)
    }

    pub fn graph_with(&self, options: GraphOptions) -> Result<InterpolatingGraph, InterpolationError> {
        InterpolatingGraph::with_options(&self.x, &self.y, options)
    }
}

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample `count` wavelengths between `start` and `end` with equally spaced
/// photon energies.
///
/// The returned wavelengths (in nm) are ordered by ascending energy, so the
/// first element is the longest wavelength.
pub fn sample_wavelengths(start: Length, end: Length, count: usize) -> QuantityArray {
    let (short, long) = if start <= end { (start, end) } else { (end, start) };
    let e_lo = wavelength_to_energy(long).get::<electronvolt>();
    let e_hi = wavelength_to_energy(short).get::<electronvolt>();
    let wavelengths = linspace(e_lo, e_hi, count)
        .into_iter()
        .map(|e| HC_EV_NM / e)
        .collect();
    QuantityArray::new(wavelengths, Unit::NANOMETER)
}

/// Convert wavelengths into strictly ascending photon energies (eV).
///
/// Energies equal after conversion are kept once.
pub fn sample_energies(wavelengths: &QuantityArray) -> Result<QuantityArray, UnitError> {
    if wavelengths.dimension() != Dimension::Length {
        return Err(UnitError::Incompatible {
            from: wavelengths.unit().symbol().to_string(),
            to: Unit::NANOMETER.symbol().to_string(),
        });
    }
    let mut energies = wavelengths.to_spectral(Unit::ELECTRONVOLT)?.into_values();
    energies.sort_by(f64::total_cmp);
    energies.dedup();
    Ok(QuantityArray::new(energies, Unit::ELECTRONVOLT))
}

/// Rescale an emission spectrum expressed as a density per wavelength for
/// sampling in energy, using $d\lambda \propto \lambda(E)^2 dE$.
///
/// Returns the photon energies and the rescaled (dimensionless) density.
pub fn spectral_density(
    wavelengths: &QuantityArray,
    density: &QuantityArray,
) -> Result<(QuantityArray, QuantityArray), UnitError> {
    if density.dimension() != Dimension::Dimensionless {
        return Err(UnitError::Incompatible {
            from: density.unit().symbol().to_string(),
            to: Unit::DIMENSIONLESS.symbol().to_string(),
        });
    }
    let lambda = wavelengths.to(Unit::NANOMETER)?;
    let l0 = lambda.values().first().copied().unwrap_or(1.0);
    let scaled = density
        .values()
        .iter()
        .zip(lambda.values())
        .map(|(s, l)| s * l * l / (l0 * l0))
        .collect();
    Ok((
        wavelengths.to_spectral(Unit::ELECTRONVOLT)?,
        QuantityArray::new(scaled, Unit::DIMENSIONLESS),
    ))
}
