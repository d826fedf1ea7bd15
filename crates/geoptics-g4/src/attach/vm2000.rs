//! VM2000 foil and its border surface towards the water.

use geoptics_core::scintillation::ParticleKind;
use geoptics_core::units::{Quantity, QuantityArray, Unit};
use geoptics_materials::vm2000::{
    vm2000_absorption_length, vm2000_parameters, vm2000_refractive_index,
    vm2000_scint_timeconstant,
};

use super::attach_flat;
use crate::error::AttachError;
use crate::scint::def_scint_particle;
use crate::writer::PropertyWriter;

const RANGE_NM: [f64; 2] = [100.0, 600.0];

pub fn attach_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_flat(writer, "RINDEX", RANGE_NM, vm2000_refractive_index(), Unit::DIMENSIONLESS)
}

pub fn attach_absorption_length(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let length = vm2000_absorption_length();
    attach_flat(writer, "ABSLENGTH", RANGE_NM, length.value(), length.unit())
}

/// Zero yield for every particle except electrons.
pub fn attach_particle_scintillation_yields(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let zero = Quantity::new(0.0, Unit::PER_ELECTRONVOLT);
    for kind in [
        ParticleKind::Alpha,
        ParticleKind::Deuteron,
        ParticleKind::Ion,
        ParticleKind::Proton,
        ParticleKind::Triton,
    ] {
        def_scint_particle(writer, kind, zero, 0.0, None)?;
    }
    Ok(())
}

pub fn attach_reflectivity(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let p = vm2000_parameters()?;
    writer.add_vec("REFLECTIVITY", &p.energies, &p.reflectivity)
}

pub fn attach_efficiency(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let p = vm2000_parameters()?;
    writer.add_vec("EFFICIENCY", &p.energies, &p.efficiency)
}

pub fn attach_wls(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let p = vm2000_parameters()?;
    writer.add_vec("WLSABSLENGTH", &p.energies, &p.wls_absorption)?;
    writer.add_vec("WLSCOMPONENT", &p.energies, &p.wls_emission)?;
    writer.add_const("WLSTIMECONSTANT", vm2000_scint_timeconstant())
}

/// Fully transmitting border: light reaches the foil itself.
pub fn attach_border_params(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let p = vm2000_parameters()?;
    let n = p.energies.len();
    writer.add_vec("REFLECTIVITY", &p.energies, &QuantityArray::dimensionless(vec![0.0; n]))?;
    writer.add_vec("EFFICIENCY", &p.energies, &QuantityArray::dimensionless(vec![0.0; n]))?;
    writer.add_vec("TRANSMITTANCE", &p.energies, &QuantityArray::dimensionless(vec![1.0; n]))
}
