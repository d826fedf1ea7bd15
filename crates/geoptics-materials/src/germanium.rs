//! Germanium detector surfaces.

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::Spectrum;

use crate::data::load_spectrum;
use crate::error::MaterialError;

/// Lithium-doped dead-layer germanium at room temperature (A. Wegmann,
/// PhD thesis, Heidelberg 2017).
pub static GERMANIUM_REFLECTIVITY: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "germanium_reflectivity", |()| {
        Ok(load_spectrum("ge_reflectivity.dat")?)
    });

pub fn germanium_reflectivity() -> Result<Spectrum, MaterialError> {
    GERMANIUM_REFLECTIVITY.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&GERMANIUM_REFLECTIVITY];
