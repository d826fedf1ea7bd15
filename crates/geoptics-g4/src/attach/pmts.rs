//! Photomultiplier components.

use geoptics_core::units::{QuantityArray, Unit};
use geoptics_materials::pmts::{
    pmt_acryl_absorption_length, pmt_acryl_refractive_index, pmt_air_absorption_length,
    pmt_air_refractive_index, pmt_borosilicate_absorption_length,
    pmt_borosilicate_refractive_index, pmt_photocathode_collection_efficiency,
    pmt_photocathode_efficiency, pmt_photocathode_reflectivity, pmt_steel_efficiency,
    pmt_steel_reflectivity,
};

use crate::error::AttachError;
use crate::writer::PropertyWriter;

fn energy_pair() -> QuantityArray {
    QuantityArray::new(vec![1.0, 6.0], Unit::ELECTRONVOLT)
}

fn flat(writer: &mut PropertyWriter<'_>, name: &str, value: f64) -> Result<(), AttachError> {
    writer.add_vec(name, &energy_pair(), &QuantityArray::dimensionless(vec![value; 2]))
}

pub fn attach_acryl_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    flat(writer, "RINDEX", pmt_acryl_refractive_index())
}

pub fn attach_acryl_absorption_length(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let abs = pmt_acryl_absorption_length();
    writer.add_vec("ABSLENGTH", &abs.x, &abs.y)
}

pub fn attach_air_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    flat(writer, "RINDEX", pmt_air_refractive_index())
}

pub fn attach_air_absorption_length(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let abs = QuantityArray::filled(pmt_air_absorption_length(), 2);
    writer.add_vec("ABSLENGTH", &energy_pair(), &abs)
}

pub fn attach_borosilicate_rindex(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    flat(writer, "RINDEX", pmt_borosilicate_refractive_index())
}

pub fn attach_borosilicate_absorption_length(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let abs = pmt_borosilicate_absorption_length();
    writer.add_vec("ABSLENGTH", &abs.x, &abs.y)
}

pub fn attach_steel_reflectivity(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    flat(writer, "REFLECTIVITY", pmt_steel_reflectivity())
}

pub fn attach_steel_efficiency(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    flat(writer, "EFFICIENCY", pmt_steel_efficiency())
}

pub fn attach_photocathode_reflectivity(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let refl = pmt_photocathode_reflectivity()?;
    writer.add_vec_spectral("REFLECTIVITY", &refl.x, &refl.y)
}

/// Detection efficiency: quantum efficiency (in percent) times collection
/// efficiency.
pub fn attach_photocathode_efficiency(writer: &mut PropertyWriter<'_>) -> Result<(), AttachError> {
    let qe = pmt_photocathode_efficiency()?;
    let efficiency = qe.y.scale(pmt_photocathode_collection_efficiency() / 100.0);
    writer.add_vec_spectral("EFFICIENCY", &qe.x, &efficiency)
}
