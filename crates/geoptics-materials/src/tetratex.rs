//! Tetratex (ePTFE) reflector.
//!
//! M. Janecek, "Reflectivity spectra for commonly used reflectors",
//! IEEE Trans. Nucl. Sci. 59 (2012).

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::Spectrum;

use crate::data::load_spectrum;
use crate::error::MaterialError;

/// Two superimposed 160 um layers. The installed foil is 254 um thick, so
/// its reflectivity is marginally lower.
pub static TETRATEX_REFLECTIVITY: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "tetratex_reflectivity", |()| {
        Ok(load_spectrum("tetratex_reflectivity.dat")?)
    });

pub fn tetratex_reflectivity() -> Result<Spectrum, MaterialError> {
    TETRATEX_REFLECTIVITY.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&TETRATEX_REFLECTIVITY];
