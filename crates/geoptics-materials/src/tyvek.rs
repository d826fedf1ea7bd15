//! Tyvek reflector.
//!
//! M. Janecek, "Reflectivity spectra for commonly used reflectors",
//! IEEE Trans. Nucl. Sci. 59 (2012).

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::Spectrum;

use crate::data::load_spectrum;
use crate::error::MaterialError;

/// Slightly more conservative than the published measurement.
pub static TYVEK_REFLECTIVITY: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "tyvek_reflectivity", |()| {
        Ok(load_spectrum("tyvek_reflectivity.dat")?)
    });

pub fn tyvek_reflectivity() -> Result<Spectrum, MaterialError> {
    TYVEK_REFLECTIVITY.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&TYVEK_REFLECTIVITY];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflectivity_is_a_fraction() {
        let refl = tyvek_reflectivity().unwrap();
        assert!(refl.y.values().iter().all(|&r| (0.0..=1.0).contains(&r)));
    }
}
