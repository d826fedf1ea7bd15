//! Polyethylene naphthalate.

use geoptics_core::spectrum::{sample_wavelengths, DEFAULT_SAMPLE_COUNT};
use geoptics_core::units::{nm, Quantity, Unit};
use geoptics_materials::pen::{
    pen_absorption, pen_quantum_efficiency, pen_refractive_index, pen_scint_timeconstant,
    pen_scintillation_params, pen_wls_absorption, pen_wls_emission,
};

use super::{attach_flat, MeanPhotons, RINDEX_RANGE_NM};
use crate::error::AttachError;
use crate::g4gps::{sample_from_350nm, zero_boundaries};
use crate::scint::def_scint_by_particle_type;
use crate::writer::PropertyWriter;

const WLS_SAMPLES: usize = 800;

pub fn attach_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_flat(writer, "RINDEX", RINDEX_RANGE_NM, pen_refractive_index(), Unit::DIMENSIONLESS)
}

/// Bulk `ABSLENGTH`, with the shortest wavelength set to 1 km.
pub fn attach_attenuation(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let mut absorption = pen_absorption()?;
    let shortest = absorption
        .x
        .values()
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    if let Some(i) = shortest {
        let far = Quantity::new(1e3, Unit::METER).value_in(absorption.y.unit())?;
        absorption.y.values_mut()[i] = far;
    }
    writer.add_vec_spectral("ABSLENGTH", &absorption.x, &absorption.y)
}

pub fn attach_wls(writer: &mut PropertyWriter<'_>, mean_photons: MeanPhotons) -> Result<(), AttachError> {
    let absorption = pen_wls_absorption();
    let lambda = sample_wavelengths(nm(350.0), nm(650.0), WLS_SAMPLES);
    let mut emission = sample_from_350nm(&pen_wls_emission()?, &lambda)?;
    zero_boundaries(emission.values_mut());

    writer.add_vec_spectral("WLSABSLENGTH", &absorption.x, &absorption.y)?;
    writer.add_vec_spectral("WLSCOMPONENT", &lambda, &emission)?;
    writer.add_const("WLSTIMECONSTANT", pen_scint_timeconstant())?;
    mean_photons.attach(writer, pen_quantum_efficiency)
}

/// Scintillation with the WLS emission spectrum. The Fano factor is
/// unknown, so the resolution scale is 1.
pub fn attach_scintillation(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let lambda = sample_wavelengths(nm(350.0), nm(650.0), DEFAULT_SAMPLE_COUNT);
    let mut emission = sample_from_350nm(&pen_wls_emission()?, &lambda)?;
    zero_boundaries(emission.values_mut());

    writer.add_vec_spectral("SCINTILLATIONCOMPONENT1", &lambda, &emission)?;
    writer.add_const("SCINTILLATIONTIMECONSTANT1", pen_scint_timeconstant())?;
    writer.add_const_value("RESOLUTIONSCALE", 1.0)?;
    def_scint_by_particle_type(writer, &pen_scintillation_params())
}
