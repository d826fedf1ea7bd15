//! Copper.

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::Spectrum;

use crate::data::load_spectrum;
use crate::error::MaterialError;

pub static COPPER_REFLECTIVITY: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "copper_reflectivity", |()| {
        Ok(load_spectrum("cu_reflectivity.dat")?)
    });

pub fn copper_reflectivity() -> Result<Spectrum, MaterialError> {
    COPPER_REFLECTIVITY.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&COPPER_REFLECTIVITY];
