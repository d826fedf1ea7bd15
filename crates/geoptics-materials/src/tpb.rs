//! Tetraphenyl butadiene (TPB) wavelength shifter.
//!
//! - V. M. Gehman et al., "Fluorescence efficiency and visible re-emission
//!   spectrum of tetraphenyl butadiene films", JINST 8 (2013) P09006.
//! - C. Benson et al., "Measurements of the intrinsic quantum efficiency and
//!   absorption length of tetraphenyl butadiene thin films in the vacuum
//!   ultraviolet regime", EPJC 78 (2018).
//! - G. R. Araujo et al., "The ArDM experiment", EPJC 82 (2022).
//! - A. Francini et al., "VUV-Vis optical characterization of
//!   tetraphenyl-butadiene films", JINST 8 (2013).

use std::str::FromStr;

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::{Dimension, Quantity, Unit};
use geoptics_core::Spectrum;

use crate::data::load_spectrum;
use crate::error::MaterialError;

/// Emission spectrum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TpbEmission {
    /// TPB evaporated on a VM2000 reflector.
    #[default]
    Vm2000,
    /// TPB embedded in a polystyrene matrix.
    PolystyreneMatrix,
}

impl FromStr for TpbEmission {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" | "vm2000" => Ok(TpbEmission::Vm2000),
            "polystyrene_matrix" => Ok(TpbEmission::PolystyreneMatrix),
            other => Err(MaterialError::UnknownMethod(other.to_string())),
        }
    }
}

/// Quantum efficiency at LAr temperature (Araujo 2022); Benson (2018)
/// reports about 0.6 at room temperature.
pub static TPB_QUANTUM_EFFICIENCY: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "tpb_quantum_efficiency", |()| 0.85);

pub fn tpb_quantum_efficiency() -> f64 {
    TPB_QUANTUM_EFFICIENCY.call(())
}

pub static TPB_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "tpb_refractive_index", |()| 1.635);

pub fn tpb_refractive_index() -> f64 {
    TPB_REFRACTIVE_INDEX.call(())
}

/// Arbitrarily small.
pub static TPB_WLS_TIMECONSTANT: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "tpb_wls_timeconstant",
    |()| Quantity::new(0.01, Unit::NANOSECOND),
);

pub fn tpb_wls_timeconstant() -> Quantity {
    TPB_WLS_TIMECONSTANT.call(())
}

pub static TPB_WLS_EMISSION: Pluggable<(), Result<Spectrum, MaterialError>> = Pluggable::new(
    module_path!(),
    "tpb_wls_emission",
    |()| Ok(load_spectrum("tpb_vm2000_wlscomponent.dat")?),
);

pub fn tpb_wls_emission() -> Result<Spectrum, MaterialError> {
    TPB_WLS_EMISSION.call(())
}

/// Emission in a polystyrene matrix: the main peak shifts and the
/// vibronic structure is lost.
pub static TPB_POLYSTYRENE_WLS_EMISSION: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(
        module_path!(),
        "tpb_polystyrene_wls_emission",
        |()| Ok(load_spectrum("tpb_polystyrene_wlscomponent.dat")?),
    );

pub fn tpb_polystyrene_wls_emission() -> Result<Spectrum, MaterialError> {
    TPB_POLYSTYRENE_WLS_EMISSION.call(())
}

/// Emission spectrum for a given variant.
pub fn tpb_emission(variant: TpbEmission) -> Result<Spectrum, MaterialError> {
    match variant {
        TpbEmission::Vm2000 => tpb_wls_emission(),
        TpbEmission::PolystyreneMatrix => tpb_polystyrene_wls_emission(),
    }
}

/// Absorption length of TPB evaporated on UV-transmitting acrylic.
pub static TPB_WLS_ABSORPTION: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "tpb_wls_absorption", |()| {
        let spectrum = load_spectrum("tpb_wlsabslength.dat")?;
        if spectrum.y.dimension() != Dimension::Length {
            return Err(MaterialError::InvalidParameter(format!(
                "TPB absorption must be a length, found '{}'",
                spectrum.y.unit()
            )));
        }
        Ok(spectrum)
    });

pub fn tpb_wls_absorption() -> Result<Spectrum, MaterialError> {
    TPB_WLS_ABSORPTION.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[
    &TPB_QUANTUM_EFFICIENCY,
    &TPB_REFRACTIVE_INDEX,
    &TPB_WLS_TIMECONSTANT,
    &TPB_WLS_EMISSION,
    &TPB_POLYSTYRENE_WLS_EMISSION,
    &TPB_WLS_ABSORPTION,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(tpb_quantum_efficiency(), 0.85);
        assert_eq!(tpb_refractive_index(), 1.635);
        assert_eq!(tpb_wls_timeconstant(), Quantity::new(0.01, Unit::NANOSECOND));
    }

    #[test]
    fn test_tables_load() {
        let abs = tpb_wls_absorption().unwrap();
        assert_eq!(abs.x.unit(), Unit::NANOMETER);
        assert_eq!(abs.y.dimension(), Dimension::Length);
        for variant in [TpbEmission::Vm2000, TpbEmission::PolystyreneMatrix] {
            let em = tpb_emission(variant).unwrap();
            assert_eq!(em.y.dimension(), Dimension::Dimensionless);
        }
    }
}
