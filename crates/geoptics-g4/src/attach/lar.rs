//! Liquid argon.

use geoptics_core::spectrum::{sample_wavelengths, spectral_density, DEFAULT_SAMPLE_COUNT};
use geoptics_core::units::{nm, Quantity, QuantityArray};
use geoptics_materials::lar::{
    default_flat_top_yield, lar_calculate_attenuation, lar_emission_spectrum, lar_lifetimes,
    lar_refractive_index, lar_scintillation_params, AttenuationConfig, DielectricMethod,
    TripletLifetime,
};

use crate::error::AttachError;
use crate::g4gps::zero_boundaries;
use crate::scint::def_scint_by_particle_type;
use crate::writer::PropertyWriter;

/// `RINDEX` over 112–650 nm.
pub fn attach_rindex(writer: &mut PropertyWriter<'_>, method: DielectricMethod) -> Result<(), AttachError> {
    let lambda = sample_wavelengths(nm(112.0), nm(650.0), DEFAULT_SAMPLE_COUNT);
    let rindex = lambda
        .values()
        .iter()
        .map(|&l| lar_refractive_index(nm(l), method))
        .collect::<Result<Vec<_>, _>>()?;
    writer.add_vec_spectral("RINDEX", &lambda, &QuantityArray::dimensionless(rindex))
}

/// `RAYLEIGH` and `ABSLENGTH` (each only if enabled).
///
/// Returns the Rayleigh and absorption lengths at the scintillation peak.
pub fn attach_attenuation(
    writer: &mut PropertyWriter<'_>,
    config: AttenuationConfig,
) -> Result<(Quantity, Quantity), AttachError> {
    let att = lar_calculate_attenuation(config)?;
    if let Some(rayleigh) = &att.rayleigh {
        writer.add_vec_spectral("RAYLEIGH", &att.wavelengths, rayleigh)?;
    }
    if let Some(absorption) = &att.absorption {
        writer.add_vec_spectral("ABSLENGTH", &att.wavelengths, absorption)?;
    }
    Ok((att.peak_rayleigh, att.peak_absorption))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScintillationOptions {
    pub flat_top_yield: Quantity,
    pub triplet_lifetime: TripletLifetime,
    pub third_continuum: bool,
}

impl Default for ScintillationOptions {
    fn default() -> Self {
        Self {
            flat_top_yield: default_flat_top_yield(),
            triplet_lifetime: TripletLifetime::default(),
            third_continuum: false,
        }
    }
}

/// Emission spectrum, lifetimes, resolution scale and per-particle yields.
pub fn attach_scintillation(
    writer: &mut PropertyWriter<'_>,
    options: &ScintillationOptions,
) -> Result<(), AttachError> {
    let lambda = sample_wavelengths(nm(116.0), nm(400.0), DEFAULT_SAMPLE_COUNT);
    let mut emission = lar_emission_spectrum(&lambda, options.third_continuum)?;
    zero_boundaries(emission.values_mut());

    let (energies, density) = spectral_density(&lambda, &emission)?;
    writer.add_vec("SCINTILLATIONCOMPONENT1", &energies, &density)?;
    writer.alias("SCINTILLATIONCOMPONENT2", "SCINTILLATIONCOMPONENT1")?;

    let lifetimes = lar_lifetimes(options.triplet_lifetime);
    writer.add_const("SCINTILLATIONTIMECONSTANT1", lifetimes.singlet)?;
    writer.add_const("SCINTILLATIONTIMECONSTANT2", lifetimes.triplet)?;

    let params = lar_scintillation_params(options.flat_top_yield);
    // Geant4 uses σ = RESOLUTIONSCALE·√mean, the Fano factor is σ²/mean
    let fano = params.fano_factor.unwrap_or(1.0);
    writer.add_const_value("RESOLUTIONSCALE", fano.sqrt())?;
    def_scint_by_particle_type(writer, &params)
}
