//! Nylon from the Borexino scintillator containment vessels.
//!
//! - M. Agostini et al., "The Monte Carlo simulation of the Borexino
//!   detector", Astropart. Phys. 97 (2018).
//! - J. Benziger et al., "The nylon scintillator containment vessels for the
//!   Borexino solar neutrino experiment", NIM A 582 (2007).

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::Dimension;
use geoptics_core::Spectrum;

use crate::data::load_spectrum;
use crate::error::MaterialError;

/// Near-UV refractive index.
pub static NYLON_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "nylon_refractive_index", |()| 1.53);

pub fn nylon_refractive_index() -> f64 {
    NYLON_REFRACTIVE_INDEX.call(())
}

pub static NYLON_ABSORPTION: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "nylon_absorption", |()| {
        let spectrum = load_spectrum("nylon_absorption.dat")?;
        if spectrum.y.dimension() != Dimension::Length {
            return Err(MaterialError::InvalidParameter(format!(
                "nylon absorption must be a length, found '{}'",
                spectrum.y.unit()
            )));
        }
        Ok(spectrum)
    });

pub fn nylon_absorption() -> Result<Spectrum, MaterialError> {
    NYLON_ABSORPTION.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&NYLON_REFRACTIVE_INDEX, &NYLON_ABSORPTION];
