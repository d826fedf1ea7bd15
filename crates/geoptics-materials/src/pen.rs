//! Polyethylene naphthalate (PEN) plastic scintillator and wavelength shifter.
//!
//! - L. Manzanillas et al., "Optical properties of low background PEN
//!   structural components for the LEGEND-200 experiment", JINST 17 (2022).
//! - N. Hong et al., "Mueller matrix characterization of flexible plastic
//!   substrates", Appl. Surf. Sci. 421 (2017).
//! - I. Ouchi et al., "Features of fluorescence spectra of polyethylene
//!   2,6-naphthalate films", J. Appl. Polym. Sci. 105 (2007).
//! - B. Hackett et al., "Light response of poly(ethylene 2,6-naphthalate) to
//!   neutrons", NIM A (2024).

use geoptics_core::scintillation::{ParticleKind, ScintConfig, ScintParticle};
use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::{Dimension, Quantity, QuantityArray, Unit};
use geoptics_core::Spectrum;

use crate::data::load_spectrum;
use crate::error::MaterialError;

/// Quantum efficiency at LAr temperature.
pub static PEN_QUANTUM_EFFICIENCY: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "pen_quantum_efficiency", |()| 0.69);

pub fn pen_quantum_efficiency() -> f64 {
    PEN_QUANTUM_EFFICIENCY.call(())
}

pub static PEN_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "pen_refractive_index", |()| 1.51);

pub fn pen_refractive_index() -> f64 {
    PEN_REFRACTIVE_INDEX.call(())
}

pub static PEN_SCINT_TIMECONSTANT: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "pen_scint_timeconstant",
    |()| Quantity::new(25.3, Unit::NANOSECOND),
);

pub fn pen_scint_timeconstant() -> Quantity {
    PEN_SCINT_TIMECONSTANT.call(())
}

/// Light yield for electrons.
pub static PEN_SCINT_LIGHT_YIELD: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "pen_scint_light_yield",
    |()| Quantity::new(5440.0, Unit::PER_MEGAELECTRONVOLT),
);

pub fn pen_scint_light_yield() -> Quantity {
    PEN_SCINT_LIGHT_YIELD.call(())
}

/// Emission at 128 nm excitation and 87 K. Points below 375 nm continue
/// the measurement to zero and are not measured.
pub static PEN_WLS_EMISSION: Pluggable<(), Result<Spectrum, MaterialError>> = Pluggable::new(
    module_path!(),
    "pen_wls_emission",
    |()| Ok(load_spectrum("pen_wlscomponent.dat")?),
);

pub fn pen_wls_emission() -> Result<Spectrum, MaterialError> {
    PEN_WLS_EMISSION.call(())
}

/// Bulk absorption length.
pub static PEN_ABSORPTION: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "pen_absorption", |()| {
        let spectrum = load_spectrum("pen_abslength.dat")?;
        if spectrum.y.dimension() != Dimension::Length {
            return Err(MaterialError::InvalidParameter(format!(
                "PEN absorption must be a length, found '{}'",
                spectrum.y.unit()
            )));
        }
        Ok(spectrum)
    });

pub fn pen_absorption() -> Result<Spectrum, MaterialError> {
    PEN_ABSORPTION.call(())
}

/// Improvised step function: strongly absorbing between 71 and 380 nm
/// (range from Ouchi 2006), 1 km elsewhere.
pub static PEN_WLS_ABSORPTION: Pluggable<(), Spectrum> =
    Pluggable::new(module_path!(), "pen_wls_absorption", |()| {
        Spectrum::new(
            QuantityArray::new(vec![70.0, 71.0, 380.0, 381.0], Unit::NANOMETER),
            QuantityArray::new(vec![1e3, 2e-8, 2e-8, 1e3], Unit::METER),
        )
    });

pub fn pen_wls_absorption() -> Spectrum {
    PEN_WLS_ABSORPTION.call(())
}

/// Measured electron yield; the other particle types are an ad-hoc guess
/// from Birks' constant and typical LET ranges.
pub static PEN_SCINTILLATION_PARAMS: Pluggable<(), ScintConfig> =
    Pluggable::new(module_path!(), "pen_scintillation_params", |()| ScintConfig {
        flat_top: pen_scint_light_yield(),
        fano_factor: None,
        particles: vec![
            ScintParticle::new(ParticleKind::Electron, 1.0, None),
            ScintParticle::new(ParticleKind::Proton, 0.5, None),
            ScintParticle::new(ParticleKind::Alpha, 0.1, None),
            ScintParticle::new(ParticleKind::Ion, 0.05, None),
        ],
    });

pub fn pen_scintillation_params() -> ScintConfig {
    PEN_SCINTILLATION_PARAMS.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[
    &PEN_QUANTUM_EFFICIENCY,
    &PEN_REFRACTIVE_INDEX,
    &PEN_SCINT_TIMECONSTANT,
    &PEN_SCINT_LIGHT_YIELD,
    &PEN_WLS_EMISSION,
    &PEN_ABSORPTION,
    &PEN_WLS_ABSORPTION,
    &PEN_SCINTILLATION_PARAMS,
];
