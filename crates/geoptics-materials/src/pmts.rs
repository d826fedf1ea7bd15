//! PMT components, mainly based on the ETEL 9354KB data sheet.

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::{Quantity, QuantityArray, Unit};
use geoptics_core::Spectrum;

use crate::data::load_spectrum;
use crate::error::MaterialError;

fn energy_pair(lo: f64, hi: f64, unit: Unit) -> Spectrum {
    Spectrum::new(
        QuantityArray::new(vec![1.0, 6.0], Unit::ELECTRONVOLT),
        QuantityArray::new(vec![lo, hi], unit),
    )
}

pub static PMT_ACRYL_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "pmt_acryl_refractive_index", |()| 1.489);

pub fn pmt_acryl_refractive_index() -> f64 {
    PMT_ACRYL_REFRACTIVE_INDEX.call(())
}

/// Estimate.
pub static PMT_ACRYL_ABSORPTION_LENGTH: Pluggable<(), Spectrum> = Pluggable::new(
    module_path!(),
    "pmt_acryl_absorption_length",
    |()| energy_pair(2.5, 3.5, Unit::METER),
);

pub fn pmt_acryl_absorption_length() -> Spectrum {
    PMT_ACRYL_ABSORPTION_LENGTH.call(())
}

pub static PMT_AIR_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "pmt_air_refractive_index", |()| 1.0);

pub fn pmt_air_refractive_index() -> f64 {
    PMT_AIR_REFRACTIVE_INDEX.call(())
}

pub static PMT_AIR_ABSORPTION_LENGTH: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "pmt_air_absorption_length",
    |()| Quantity::new(100.0, Unit::METER),
);

pub fn pmt_air_absorption_length() -> Quantity {
    PMT_AIR_ABSORPTION_LENGTH.call(())
}

pub static PMT_BOROSILICATE_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "pmt_borosilicate_refractive_index", |()| 1.49);

pub fn pmt_borosilicate_refractive_index() -> f64 {
    PMT_BOROSILICATE_REFRACTIVE_INDEX.call(())
}

/// Estimate.
pub static PMT_BOROSILICATE_ABSORPTION_LENGTH: Pluggable<(), Spectrum> = Pluggable::new(
    module_path!(),
    "pmt_borosilicate_absorption_length",
    |()| energy_pair(2.0, 3.0, Unit::METER),
);

pub fn pmt_borosilicate_absorption_length() -> Spectrum {
    PMT_BOROSILICATE_ABSORPTION_LENGTH.call(())
}

pub static PMT_STEEL_REFLECTIVITY: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "pmt_steel_reflectivity", |()| 0.9);

pub fn pmt_steel_reflectivity() -> f64 {
    PMT_STEEL_REFLECTIVITY.call(())
}

pub static PMT_STEEL_EFFICIENCY: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "pmt_steel_efficiency", |()| 1.0);

pub fn pmt_steel_efficiency() -> f64 {
    PMT_STEEL_EFFICIENCY.call(())
}

pub static PMT_PHOTOCATHODE_COLLECTION_EFFICIENCY: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "pmt_photocathode_collection_efficiency", |()| 0.85);

pub fn pmt_photocathode_collection_efficiency() -> f64 {
    PMT_PHOTOCATHODE_COLLECTION_EFFICIENCY.call(())
}

/// Quantum efficiency in percent.
pub static PMT_PHOTOCATHODE_EFFICIENCY: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(
        module_path!(),
        "pmt_photocathode_efficiency",
        |()| Ok(load_spectrum("pmt_qe.dat")?),
    );

pub fn pmt_photocathode_efficiency() -> Result<Spectrum, MaterialError> {
    PMT_PHOTOCATHODE_EFFICIENCY.call(())
}

/// Fresnel reflectance of the borosilicate window at normal incidence,
/// minus 0.01, on the wavelengths of the QE table.
pub static PMT_PHOTOCATHODE_REFLECTIVITY: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "pmt_photocathode_reflectivity", |()| {
        let qe = load_spectrum("pmt_qe.dat")?;
        let n = pmt_borosilicate_refractive_index();
        let max = ((1.0 - n) / (1.0 + n)).powi(2);
        let y = QuantityArray::filled(Quantity::dimensionless(max - 0.01), qe.len());
        Ok(Spectrum::new(qe.x, y))
    });

pub fn pmt_photocathode_reflectivity() -> Result<Spectrum, MaterialError> {
    PMT_PHOTOCATHODE_REFLECTIVITY.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[
    &PMT_ACRYL_REFRACTIVE_INDEX,
    &PMT_ACRYL_ABSORPTION_LENGTH,
    &PMT_AIR_REFRACTIVE_INDEX,
    &PMT_AIR_ABSORPTION_LENGTH,
    &PMT_BOROSILICATE_REFRACTIVE_INDEX,
    &PMT_BOROSILICATE_ABSORPTION_LENGTH,
    &PMT_STEEL_REFLECTIVITY,
    &PMT_STEEL_EFFICIENCY,
    &PMT_PHOTOCATHODE_COLLECTION_EFFICIENCY,
    &PMT_PHOTOCATHODE_EFFICIENCY,
    &PMT_PHOTOCATHODE_REFLECTIVITY,
];
