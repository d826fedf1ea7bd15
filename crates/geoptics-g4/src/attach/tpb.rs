//! Tetraphenyl butadiene.

use geoptics_core::spectrum::{sample_wavelengths, spectral_density};
use geoptics_core::units::{nm, Unit};
use geoptics_core::GraphOptions;
use geoptics_materials::tpb::{
    tpb_emission, tpb_quantum_efficiency, tpb_refractive_index, tpb_wls_absorption,
    tpb_wls_timeconstant, TpbEmission,
};

use super::{attach_flat, MeanPhotons, RINDEX_RANGE_NM};
use crate::error::AttachError;
use crate::writer::PropertyWriter;

const WLS_SAMPLES: usize = 800;

pub fn attach_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_flat(writer, "RINDEX", RINDEX_RANGE_NM, tpb_refractive_index(), Unit::DIMENSIONLESS)
}

/// `WLSABSLENGTH`, `WLSCOMPONENT`, `WLSTIMECONSTANT` and optionally
/// `WLSMEANNUMBERPHOTONS`.
pub fn attach_wls(
    writer: &mut PropertyWriter<'_>,
    mean_photons: MeanPhotons,
    emission: TpbEmission,
) -> Result<(), AttachError> {
    let lambda = sample_wavelengths(nm(112.0), nm(650.0), WLS_SAMPLES);
    let absorption = tpb_wls_absorption()?.graph()?.sample(&lambda)?;
    let component = tpb_emission(emission)?
        .graph_with(GraphOptions::default().zero_outside())?
        .sample(&lambda)?;

    // emission is a density in wavelength
    let (energies, component) = spectral_density(&lambda, &component)?;
    writer.add_vec_spectral("WLSABSLENGTH", &lambda, &absorption)?;
    writer.add_vec("WLSCOMPONENT", &energies, &component)?;
    writer.add_const("WLSTIMECONSTANT", tpb_wls_timeconstant())?;
    mean_photons.attach(writer, tpb_quantum_efficiency)
}
