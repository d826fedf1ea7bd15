//! Wavelength-shifting fibers: core and two claddings.

use geoptics_core::spectrum::{sample_wavelengths, DEFAULT_SAMPLE_COUNT};
use geoptics_core::units::{nm, QuantityArray, Unit};
use geoptics_materials::fibers::{
    fiber_absorption_length, fiber_absorption_path_length, fiber_cladding1_refractive_index,
    fiber_cladding2_refractive_index, fiber_core_refractive_index,
    fiber_core_scintillation_params, fiber_wls_absorption, fiber_wls_emission,
    fiber_wls_timeconstant,
};
use uom::si::f64::Length;

use super::{attach_flat, RINDEX_RANGE_NM};
use crate::error::AttachError;
use crate::g4gps::{sample_from_350nm, zero_boundaries};
use crate::scint::def_scint_by_particle_type;
use crate::writer::PropertyWriter;

pub fn attach_cladding1_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_flat(writer, "RINDEX", RINDEX_RANGE_NM, fiber_cladding1_refractive_index(), Unit::DIMENSIONLESS)
}

pub fn attach_cladding2_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_flat(writer, "RINDEX", RINDEX_RANGE_NM, fiber_cladding2_refractive_index(), Unit::DIMENSIONLESS)
}

pub fn attach_core_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_flat(writer, "RINDEX", RINDEX_RANGE_NM, fiber_core_refractive_index(), Unit::DIMENSIONLESS)
}

/// WLS absorption scaled to `wls_abs_at_400nm`, emission and time constant.
pub fn attach_core_wls(writer: &mut PropertyWriter<'_>, wls_abs_at_400nm: Length) -> Result<(), AttachError> {
    let lambda = sample_wavelengths(nm(112.0), nm(650.0), DEFAULT_SAMPLE_COUNT);
    let absorption = fiber_wls_absorption(wls_abs_at_400nm)?.graph()?.sample(&lambda)?;
    let mut emission = fiber_wls_emission()?.graph()?.sample(&lambda)?;
    zero_boundaries(emission.values_mut());

    writer.add_vec_spectral("WLSABSLENGTH", &lambda, &absorption)?;
    writer.add_vec_spectral("WLSCOMPONENT", &lambda, &emission)?;
    writer.add_const("WLSTIMECONSTANT", fiber_wls_timeconstant())
}

/// Flat `ABSLENGTH`; `geometrical` selects the length corrected for the
/// path inside a square fiber over the data-sheet value.
pub fn attach_core_absorption(writer: &mut PropertyWriter<'_>, geometrical: bool) -> Result<(), AttachError> {
    let lambda = sample_wavelengths(nm(112.0), nm(650.0), DEFAULT_SAMPLE_COUNT);
    let length = if geometrical {
        fiber_absorption_path_length()
    } else {
        fiber_absorption_length()
    };
    let absorption = QuantityArray::filled(length, lambda.len());
    writer.add_vec_spectral("ABSLENGTH", &lambda, &absorption)
}

/// Scintillation of the core for electrons, with the WLS emission spectrum.
pub fn attach_core_scintillation(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let lambda = sample_wavelengths(nm(350.0), nm(650.0), DEFAULT_SAMPLE_COUNT);
    let mut emission = sample_from_350nm(&fiber_wls_emission()?, &lambda)?;
    zero_boundaries(emission.values_mut());

    writer.add_vec_spectral("SCINTILLATIONCOMPONENT1", &lambda, &emission)?;
    // the scintillation time constant is unknown
    writer.add_const("SCINTILLATIONTIMECONSTANT1", fiber_wls_timeconstant())?;
    writer.add_const_value("RESOLUTIONSCALE", 1.0)?;
    def_scint_by_particle_type(writer, &fiber_core_scintillation_params())
}
