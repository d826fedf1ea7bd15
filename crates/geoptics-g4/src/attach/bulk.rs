//! Passive bulk materials: nylon, Ultem, water, silicon and fused silica.

use geoptics_core::spectrum::{sample_wavelengths, DEFAULT_SAMPLE_COUNT};
use geoptics_core::units::{nm, QuantityArray, Unit};
use geoptics_materials::nylon::{nylon_absorption, nylon_refractive_index};
use geoptics_materials::silica::silica_refractive_index;
use geoptics_materials::silicon::silicon_complex_rindex;
use geoptics_materials::ultem::{ultem_absorption, ultem_refractive_index};
use geoptics_materials::water::{water_absorption, water_refractive_index};

use super::{attach_flat, RINDEX_RANGE_NM};
use crate::error::AttachError;
use crate::writer::PropertyWriter;

pub fn attach_nylon_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_flat(writer, "RINDEX", RINDEX_RANGE_NM, nylon_refractive_index(), Unit::DIMENSIONLESS)
}

pub fn attach_nylon_absorption(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let abs = nylon_absorption()?;
    writer.add_vec_spectral("ABSLENGTH", &abs.x, &abs.y)
}

pub fn attach_ultem_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let r = ultem_refractive_index()?;
    writer.add_vec_spectral("RINDEX", &r.x, &r.y)
}

pub fn attach_ultem_absorption(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let abs = ultem_absorption()?;
    writer.add_vec_spectral("ABSLENGTH", &abs.x, &abs.y)
}

pub fn attach_water_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    attach_flat(writer, "RINDEX", [100.0, 600.0], water_refractive_index(), Unit::DIMENSIONLESS)
}

pub fn attach_water_absorption(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let abs = water_absorption();
    writer.add_vec_spectral("ABSLENGTH", &abs.x, &abs.y)
}

/// `REALRINDEX` and `IMAGINARYRINDEX`, for dielectric-metal boundaries.
pub fn attach_silicon_complex_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let rindex = silicon_complex_rindex()?;
    writer.add_vec_spectral("REALRINDEX", &rindex.wavelengths, &rindex.real())?;
    writer.add_vec_spectral("IMAGINARYRINDEX", &rindex.wavelengths, &rindex.imag())
}

pub fn attach_silica_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let lambda = sample_wavelengths(nm(200.0), nm(650.0), DEFAULT_SAMPLE_COUNT);
    let r = QuantityArray::dimensionless(lambda.values().iter().map(|&l| silica_refractive_index(nm(l))).collect());
    writer.add_vec_spectral("RINDEX", &lambda, &r)
}
