//! Reflective surfaces.
//!
//! Tyvek and Tetratex take a global scale applied to the measured
//! reflectivity, to tune reflector performance without new data.

use geoptics_core::Spectrum;
use geoptics_materials::copper::copper_reflectivity;
use geoptics_materials::germanium::germanium_reflectivity;
use geoptics_materials::tetratex::tetratex_reflectivity;
use geoptics_materials::tyvek::tyvek_reflectivity;

use crate::error::AttachError;
use crate::writer::PropertyWriter;

fn attach_scaled(writer: &mut PropertyWriter<'_>, refl: Spectrum, scale: f64) -> Result<(), AttachError> {
    writer.add_vec_spectral("REFLECTIVITY", &refl.x, &refl.y.scale(scale))
}

pub fn attach_tyvek_border_params(writer: &mut PropertyWriter<'_>, reflectivity_scale: f64) -> Result<(), AttachError> {
    attach_scaled(writer, tyvek_reflectivity()?, reflectivity_scale)
}

pub fn attach_tetratex_reflectivity(writer: &mut PropertyWriter<'_>, reflectivity_scale: f64) -> Result<(), AttachError> {
    attach_scaled(writer, tetratex_reflectivity()?, reflectivity_scale)
}

pub fn attach_germanium_reflectivity(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_scaled(writer, germanium_reflectivity()?, 1.0)
}

pub fn attach_copper_reflectivity(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_scaled(writer, copper_reflectivity()?, 1.0)
}
