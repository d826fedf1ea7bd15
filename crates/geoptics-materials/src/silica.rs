//! Fused silica (SiO2, e.g. Suprasil).
//!
//! I. H. Malitson, "Interspecimen comparison of the refractive index of fused
//! silica", J. Opt. Soc. Am. 55 (1965).

use geoptics_core::store::{Pluggable, PluggableEntry};
use uom::si::f64::Length;
use uom::si::length::micrometer;

const SELLMEIER: [(f64, f64); 3] = [
    (0.696_166_3, 0.068_404_3),
    (0.407_942_6, 0.116_241_4),
    (0.897_479_4, 9.896_161),
];

fn sellmeier(wavelength: Length) -> f64 {
    let l2 = wavelength.get::<micrometer>().powi(2);
    let sum: f64 = SELLMEIER.iter().map(|(b, c)| b * l2 / (l2 - c * c)).sum();
    (1.0 + sum).sqrt()
}

/// Sellmeier refractive index at room temperature.
pub static SILICA_REFRACTIVE_INDEX: Pluggable<Length, f64> =
    Pluggable::new(module_path!(), "silica_refractive_index", sellmeier);

pub fn silica_refractive_index(wavelength: Length) -> f64 {
    SILICA_REFRACTIVE_INDEX.call(wavelength)
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&SILICA_REFRACTIVE_INDEX];
