//! Index of the material catalog.

use std::fmt;
use std::str::FromStr;

use geoptics_core::store::{self, Pluggable, PluggableEntry, StoreError};
use geoptics_core::Spectrum;
use log::info;
use serde::Serialize;

use crate::error::MaterialError;
use crate::{
    copper, fibers, germanium, lar, nylon, pen, pmts, silica, silicon, tetratex, tpb, tyvek,
    ultem, vm2000, water,
};

/// A material (or group of components) of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Lar,
    Tpb,
    Pen,
    Fibers,
    Pmts,
    Vm2000,
    Tyvek,
    Tetratex,
    Nylon,
    Ultem,
    Water,
    Germanium,
    Copper,
    Silicon,
    Silica,
}

impl Material {
    pub const ALL: [Material; 15] = [
        Material::Lar,
        Material::Tpb,
        Material::Pen,
        Material::Fibers,
        Material::Pmts,
        Material::Vm2000,
        Material::Tyvek,
        Material::Tetratex,
        Material::Nylon,
        Material::Ultem,
        Material::Water,
        Material::Germanium,
        Material::Copper,
        Material::Silicon,
        Material::Silica,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Material::Lar => "lar",
            Material::Tpb => "tpb",
            Material::Pen => "pen",
            Material::Fibers => "fibers",
            Material::Pmts => "pmts",
            Material::Vm2000 => "vm2000",
            Material::Tyvek => "tyvek",
            Material::Tetratex => "tetratex",
            Material::Nylon => "nylon",
            Material::Ultem => "ultem",
            Material::Water => "water",
            Material::Germanium => "germanium",
            Material::Copper => "copper",
            Material::Silicon => "silicon",
            Material::Silica => "silica",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Material::Lar => "liquid argon",
            Material::Tpb => "tetraphenyl butadiene wavelength shifter",
            Material::Pen => "polyethylene naphthalate",
            Material::Fibers => "BCF-91A wavelength-shifting fibers",
            Material::Pmts => "photomultiplier components",
            Material::Vm2000 => "VM2000 reflective foil",
            Material::Tyvek => "Tyvek reflector",
            Material::Tetratex => "Tetratex reflector",
            Material::Nylon => "Borexino nylon",
            Material::Ultem => "Ultem (PEI)",
            Material::Water => "high-purity water",
            Material::Germanium => "germanium detector surface",
            Material::Copper => "copper",
            Material::Silicon => "silicon",
            Material::Silica => "fused silica",
        }
    }

    /// Property functions defined for this material.
    pub fn pluggables(&self) -> &'static [&'static dyn PluggableEntry] {
        match self {
            Material::Lar => lar::PLUGGABLES,
            Material::Tpb => tpb::PLUGGABLES,
            Material::Pen => pen::PLUGGABLES,
            Material::Fibers => fibers::PLUGGABLES,
            Material::Pmts => pmts::PLUGGABLES,
            Material::Vm2000 => vm2000::PLUGGABLES,
            Material::Tyvek => tyvek::PLUGGABLES,
            Material::Tetratex => tetratex::PLUGGABLES,
            Material::Nylon => nylon::PLUGGABLES,
            Material::Ultem => ultem::PLUGGABLES,
            Material::Water => water::PLUGGABLES,
            Material::Germanium => germanium::PLUGGABLES,
            Material::Copper => copper::PLUGGABLES,
            Material::Silicon => silicon::PLUGGABLES,
            Material::Silica => silica::PLUGGABLES,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        Material::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or(MaterialError::UnknownMaterial(s))
    }
}

/// Every property function of the catalog.
pub fn pluggables() -> impl Iterator<Item = &'static dyn PluggableEntry> {
    Material::ALL
        .into_iter()
        .flat_map(|m| m.pluggables().iter().copied())
}

/// Enter every catalog property into the registry ledger, so that
/// name-based overrides can target functions that were never called.
pub fn register_all() {
    for entry in pluggables() {
        store::register(entry);
    }
}

/// Replace a tabulated property by name with a fixed spectrum, e.g. one read
/// from a user-supplied data file.
///
/// The new table must use the units of the original one and form a valid
/// graph: no repeated x with different y, no negative values.
pub fn replace_table(name: &str, spectrum: Spectrum) -> Result<(), MaterialError> {
    spectrum.graph()?;
    let entry = store::lookup(name)?;
    let any = entry.as_any();
    if let Some(p) = any.downcast_ref::<Pluggable<(), Result<Spectrum, MaterialError>>>() {
        check_units(name, &(p.original_impl())(())?, &spectrum)?;
        p.replace_implementation(move |()| Ok(spectrum.clone()));
    } else if let Some(p) = any.downcast_ref::<Pluggable<(), Spectrum>>() {
        check_units(name, &(p.original_impl())(()), &spectrum)?;
        p.replace_implementation(move |()| spectrum.clone());
    } else {
        return Err(StoreError::SignatureMismatch {
            name: entry.qualified_name(),
            expected: "a spectrum",
        }
        .into());
    }
    info!("replaced table {}", name);
    Ok(())
}

fn check_units(name: &str, original: &Spectrum, new: &Spectrum) -> Result<(), MaterialError> {
    if original.x.dimension() != new.x.dimension() || original.y.dimension() != new.y.dimension() {
        return Err(MaterialError::InvalidParameter(format!(
            "table for {name} must have units like '{} {}', found '{} {}'",
            original.x.unit(),
            original.y.unit(),
            new.x.unit(),
            new.y.unit()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_material_names_roundtrip() {
        for m in Material::ALL {
            assert_eq!(m.name().parse::<Material>().unwrap(), m);
        }
        assert_eq!("LAr".parse::<Material>().unwrap(), Material::Lar);
        assert!("unobtainium".parse::<Material>().is_err());
    }

    #[test]
    fn test_property_names_are_unique() {
        let names: Vec<&str> = pluggables().map(|p| p.name()).collect();
        let unique: BTreeSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        assert!(unique.contains("fiber_core_refractive_index"));
        assert!(unique.contains("lar_calculate_attenuation"));
    }

    #[test]
    fn test_qualified_names_follow_modules() {
        for m in Material::ALL {
            for p in m.pluggables() {
                assert!(p.module().starts_with("geoptics_materials::"));
                assert!(p.qualified_name().ends_with(p.name()));
            }
        }
    }
}
