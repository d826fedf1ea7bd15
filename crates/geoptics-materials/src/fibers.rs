//! Saint-Gobain BCF-91A wavelength-shifting fibers.
//!
//! All values are from the manufacturer's data sheet unless noted.

use geoptics_core::scintillation::{ParticleKind, ScintConfig, ScintParticle};
use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::{Dimension, Quantity, QuantityArray, Unit};
use geoptics_core::Spectrum;
use uom::si::f64::Length;
use uom::si::length::millimeter;

use crate::data::load_spectrum;
use crate::error::MaterialError;

pub static FIBER_CLADDING2_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "fiber_cladding2_refractive_index", |()| 1.42);

pub fn fiber_cladding2_refractive_index() -> f64 {
    FIBER_CLADDING2_REFRACTIVE_INDEX.call(())
}

pub static FIBER_CLADDING1_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "fiber_cladding1_refractive_index", |()| 1.49);

pub fn fiber_cladding1_refractive_index() -> f64 {
    FIBER_CLADDING1_REFRACTIVE_INDEX.call(())
}

pub static FIBER_CORE_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "fiber_core_refractive_index", |()| 1.6);

pub fn fiber_core_refractive_index() -> f64 {
    FIBER_CORE_REFRACTIVE_INDEX.call(())
}

/// Measured WLS absorption length at 400 nm.
pub fn default_wls_abs_at_400nm() -> Length {
    Length::new::<millimeter>(0.7)
}

fn wls_absorption(abs_at_400nm: Length) -> Result<Spectrum, MaterialError> {
    // arbitrary units, derived numerically from the data-sheet absorption
    // spectrum for a 1 mm thick fiber
    let spectrum = load_spectrum("psfibers_wlsabslength.dat")?;
    if spectrum.y.dimension() != Dimension::Dimensionless {
        return Err(MaterialError::InvalidParameter(format!(
            "fiber absorption table must be dimensionless, found '{}'",
            spectrum.y.unit()
        )));
    }
    let at_400 = spectrum.graph()?.at(Quantity::new(400.0, Unit::NANOMETER))?.value();
    if at_400 <= 0.0 {
        return Err(MaterialError::InvalidParameter(
            "fiber absorption table vanishes at 400 nm".to_string(),
        ));
    }
    let scale = abs_at_400nm.get::<millimeter>() / at_400;
    let y = QuantityArray::new(
        spectrum.y.values().iter().map(|v| v * scale).collect(),
        Unit::MILLIMETER,
    );
    Ok(Spectrum::new(spectrum.x, y))
}

/// WLS absorption length, rescaled to `abs_at_400nm` at 400 nm.
pub static FIBER_WLS_ABSORPTION: Pluggable<Length, Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "fiber_wls_absorption", wls_absorption);

pub fn fiber_wls_absorption(abs_at_400nm: Length) -> Result<Spectrum, MaterialError> {
    FIBER_WLS_ABSORPTION.call(abs_at_400nm)
}

pub static FIBER_WLS_EMISSION: Pluggable<(), Result<Spectrum, MaterialError>> = Pluggable::new(
    module_path!(),
    "fiber_wls_emission",
    |()| Ok(load_spectrum("psfibers_wlscomponent.dat")?),
);

pub fn fiber_wls_emission() -> Result<Spectrum, MaterialError> {
    FIBER_WLS_EMISSION.call(())
}

pub static FIBER_WLS_TIMECONSTANT: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "fiber_wls_timeconstant",
    |()| Quantity::new(12.0, Unit::NANOSECOND),
);

pub fn fiber_wls_timeconstant() -> Quantity {
    FIBER_WLS_TIMECONSTANT.call(())
}

/// Macroscopic absorption length of a 1 mm fiber.
pub static FIBER_ABSORPTION_LENGTH: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "fiber_absorption_length",
    |()| Quantity::new(3.5, Unit::METER),
);

pub fn fiber_absorption_length() -> Quantity {
    FIBER_ABSORPTION_LENGTH.call(())
}

/// [`fiber_absorption_length`] times an empirical factor for the longer
/// path inside a 1 mm square fiber.
pub static FIBER_ABSORPTION_PATH_LENGTH: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "fiber_absorption_path_length",
    |()| fiber_absorption_length().scale(1.21),
);

pub fn fiber_absorption_path_length() -> Quantity {
    FIBER_ABSORPTION_PATH_LENGTH.call(())
}

pub static FIBER_CORE_SCINT_LIGHT_YIELD: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "fiber_core_scint_light_yield",
    |()| Quantity::new(8000.0, Unit::PER_MEGAELECTRONVOLT),
);

pub fn fiber_core_scint_light_yield() -> Quantity {
    FIBER_CORE_SCINT_LIGHT_YIELD.call(())
}

/// Electron-only scintillation response.
pub static FIBER_CORE_SCINTILLATION_PARAMS: Pluggable<(), ScintConfig> =
    Pluggable::new(module_path!(), "fiber_core_scintillation_params", |()| ScintConfig {
        flat_top: fiber_core_scint_light_yield(),
        fano_factor: None,
        particles: vec![ScintParticle::new(ParticleKind::Electron, 1.0, None)],
    });

pub fn fiber_core_scintillation_params() -> ScintConfig {
    FIBER_CORE_SCINTILLATION_PARAMS.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[
    &FIBER_CLADDING2_REFRACTIVE_INDEX,
    &FIBER_CLADDING1_REFRACTIVE_INDEX,
    &FIBER_CORE_REFRACTIVE_INDEX,
    &FIBER_WLS_ABSORPTION,
    &FIBER_WLS_EMISSION,
    &FIBER_WLS_TIMECONSTANT,
    &FIBER_ABSORPTION_LENGTH,
    &FIBER_ABSORPTION_PATH_LENGTH,
    &FIBER_CORE_SCINT_LIGHT_YIELD,
    &FIBER_CORE_SCINTILLATION_PARAMS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wls_absorption_rescaled_at_400nm() {
        let s = fiber_wls_absorption(default_wls_abs_at_400nm()).unwrap();
        assert_eq!(s.y.unit(), Unit::MILLIMETER);
        let at = s.graph().unwrap().at(Quantity::new(400.0, Unit::NANOMETER)).unwrap();
        assert_relative_eq!(at.value(), 0.7, max_relative = 1e-12);

        let doubled = fiber_wls_absorption(Length::new::<millimeter>(1.4)).unwrap();
        assert_relative_eq!(doubled.y.values()[0], 2.0 * s.y.values()[0], max_relative = 1e-12);
    }

    #[test]
    fn test_path_length_correction() {
        assert_relative_eq!(fiber_absorption_path_length().value(), 3.5 * 1.21, max_relative = 1e-12);
        assert_eq!(fiber_absorption_path_length().unit(), Unit::METER);
    }

    #[test]
    fn test_scintillation_params() {
        let cfg = fiber_core_scintillation_params();
        assert_eq!(cfg.particles.len(), 1);
        assert_eq!(cfg.flat_top.value(), 8000.0);
    }
}
