//! Attachment adapters, one module per catalog material.
//!
//! Every `attach_*` function writes one group of properties through a
//! [`PropertyWriter`]. [`material_tables`] applies the default set of a
//! catalog material to fresh in-memory tables, one per Geant4 material or
//! surface.

pub mod bulk;
pub mod fibers;
pub mod lar;
pub mod pen;
pub mod pmts;
pub mod surfaces;
pub mod tpb;
pub mod vm2000;

use geoptics_core::units::{QuantityArray, Unit};
use geoptics_materials::Material;

use crate::error::AttachError;
use crate::sink::{PropertySink, PropertyTable};
use crate::writer::PropertyWriter;

/// Mean number of photons emitted per absorbed photon of a wavelength
/// shifter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MeanPhotons {
    /// Do not attach `WLSMEANNUMBERPHOTONS`.
    Disabled,
    /// Use the material's quantum efficiency.
    #[default]
    QuantumEfficiency,
    Custom(f64),
}

impl MeanPhotons {
    pub(crate) fn attach(self, writer: &mut PropertyWriter<'_>, qe: impl FnOnce() -> f64) -> Result<(), AttachError> {
        let value = match self {
            MeanPhotons::Disabled => return Ok(()),
            MeanPhotons::QuantumEfficiency => qe(),
            MeanPhotons::Custom(v) => v,
        };
        writer.add_const_value("WLSMEANNUMBERPHOTONS", value)
    }
}

/// A constant property over a wavelength interval (nm).
pub(crate) fn attach_flat(
    writer: &mut PropertyWriter<'_>,
    name: &str,
    wavelengths_nm: [f64; 2],
    value: f64,
    unit: Unit,
) -> Result<(), AttachError> {
    let x = QuantityArray::new(wavelengths_nm.to_vec(), Unit::NANOMETER);
    let y = QuantityArray::new(vec![value; 2], unit);
    writer.add_vec_spectral(name, &x, &y)
}

/// Wavelength interval used for constant refractive indices.
pub(crate) const RINDEX_RANGE_NM: [f64; 2] = [650.0, 115.0];

fn table(name: &str, f: impl FnOnce(&mut PropertyWriter<'_>) -> Result<(), AttachError>) -> Result<PropertyTable, AttachError> {
    let mut table = PropertyTable::new(name);
    {
        let sink: &mut dyn PropertySink = &mut table;
        let mut writer = PropertyWriter::new(sink);
        f(&mut writer)?;
    }
    Ok(table)
}

/// Attach the default property set of `material`.
///
/// Materials made of several Geant4 materials or surfaces yield one table
/// each.
pub fn material_tables(material: Material) -> Result<Vec<PropertyTable>, AttachError> {
    let tables = match material {
        Material::Lar => vec![table("lar", |w| {
            lar::attach_rindex(w, Default::default())?;
            lar::attach_attenuation(w, Default::default())?;
            lar::attach_scintillation(w, &Default::default())
        })?],
        Material::Tpb => vec![table("tpb", |w| {
            tpb::attach_rindex(w)?;
            tpb::attach_wls(w, MeanPhotons::default(), Default::default())
        })?],
        Material::Pen => vec![table("pen", |w| {
            pen::attach_rindex(w)?;
            pen::attach_attenuation(w)?;
            pen::attach_wls(w, MeanPhotons::default())?;
            pen::attach_scintillation(w)
        })?],
        Material::Fibers => vec![
            table("fiber_core", |w| {
                fibers::attach_core_rindex(w)?;
                fibers::attach_core_wls(w, geoptics_materials::fibers::default_wls_abs_at_400nm())?;
                fibers::attach_core_absorption(w, true)?;
                fibers::attach_core_scintillation(w)
            })?,
            table("fiber_cladding1", fibers::attach_cladding1_rindex)?,
            table("fiber_cladding2", fibers::attach_cladding2_rindex)?,
        ],
        Material::Pmts => vec![
            table("pmt_acryl", |w| {
                pmts::attach_acryl_rindex(w)?;
                pmts::attach_acryl_absorption_length(w)
            })?,
            table("pmt_air", |w| {
                pmts::attach_air_rindex(w)?;
                pmts::attach_air_absorption_length(w)
            })?,
            table("pmt_borosilicate", |w| {
                pmts::attach_borosilicate_rindex(w)?;
                pmts::attach_borosilicate_absorption_length(w)
            })?,
            table("pmt_steel", |w| {
                pmts::attach_steel_reflectivity(w)?;
                pmts::attach_steel_efficiency(w)
            })?,
            table("pmt_photocathode", |w| {
                pmts::attach_photocathode_reflectivity(w)?;
                pmts::attach_photocathode_efficiency(w)
            })?,
        ],
        Material::Vm2000 => vec![
            table("vm2000", |w| {
                vm2000::attach_rindex(w)?;
                vm2000::attach_absorption_length(w)?;
                vm2000::attach_particle_scintillation_yields(w)?;
                vm2000::attach_reflectivity(w)?;
                vm2000::attach_efficiency(w)?;
                vm2000::attach_wls(w)
            })?,
            table("vm2000_border", vm2000::attach_border_params)?,
        ],
        Material::Tyvek => vec![table("tyvek", |w| surfaces::attach_tyvek_border_params(w, 1.0))?],
        Material::Tetratex => vec![table("tetratex", |w| surfaces::attach_tetratex_reflectivity(w, 1.0))?],
        Material::Germanium => vec![table("germanium", surfaces::attach_germanium_reflectivity)?],
        Material::Copper => vec![table("copper", surfaces::attach_copper_reflectivity)?],
        Material::Nylon => vec![table("nylon", |w| {
            bulk::attach_nylon_rindex(w)?;
            bulk::attach_nylon_absorption(w)
        })?],
        Material::Ultem => vec![table("ultem", |w| {
            bulk::attach_ultem_rindex(w)?;
            bulk::attach_ultem_absorption(w)
        })?],
        Material::Water => vec![table("water", |w| {
            bulk::attach_water_rindex(w)?;
            bulk::attach_water_absorption(w)
        })?],
        Material::Silicon => vec![table("silicon", bulk::attach_silicon_complex_rindex)?],
        Material::Silica => vec![table("silica", bulk::attach_silica_rindex)?],
    };
    Ok(tables)
}
