//! Unit-checked writing of properties into a [`PropertySink`].

use geoptics_core::units::{Dimension, Quantity, QuantityArray, Unit};
use log::{debug, warn};

use crate::error::AttachError;
use crate::sink::PropertySink;

const DIMENSIONLESS_PROPERTIES: &[&str] = &[
    "RINDEX",
    "WLSCOMPONENT",
    "REFLECTIVITY",
    "REALRINDEX",
    "IMAGINARYRINDEX",
    "SPECULARLOBECONSTANT",
    "SPECULARSPIKECONSTANT",
    "BACKSCATTERCONSTANT",
    "EFFICIENCY",
];

const LENGTH_PROPERTIES: &[&str] = &["ABSLENGTH", "WLSABSLENGTH", "RAYLEIGH"];

/// Unit name understood by GDML readers (Geant4 11.1 and later for `nm`/`um`).
pub fn gdml_unit(unit: Unit) -> &'static str {
    match unit.symbol() {
        "dimensionless" => "",
        "nm" => "nanometer",
        "um" => "micrometer",
        other => other,
    }
}

/// Wraps a sink and translates unit-tagged values into plain numbers and
/// GDML unit names.
pub struct PropertyWriter<'a> {
    sink: &'a mut dyn PropertySink,
}

impl<'a> PropertyWriter<'a> {
    pub fn new(sink: &'a mut dyn PropertySink) -> Self {
        Self { sink }
    }

    /// Add a property vector over photon energies, reordered by ascending
    /// energy. Identical repeated points are merged; a repeated energy with a
    /// different value is an error.
    pub fn add_vec(
        &mut self,
        name: &str,
        energies: &QuantityArray,
        values: &QuantityArray,
    ) -> Result<(), AttachError> {
        if energies.dimension() != Dimension::Energy {
            return Err(AttachError::NotAnEnergy {
                name: name.to_string(),
                unit: energies.unit().symbol().to_string(),
            });
        }
        if energies.len() != values.len() {
            return Err(AttachError::LengthMismatch {
                name: name.to_string(),
                energies: energies.len(),
                values: values.len(),
            });
        }

        let value_dim = values.dimension();
        if LENGTH_PROPERTIES.contains(&name) && value_dim != Dimension::Length {
            warn!("Wrong unit {} for property {}", values.unit(), name);
        }
        if DIMENSIONLESS_PROPERTIES.contains(&name) && value_dim != Dimension::Dimensionless {
            warn!("Wrong unit {} for property {}", values.unit(), name);
        }

        let mut pairs: Vec<(f64, f64)> = energies
            .values()
            .iter()
            .copied()
            .zip(values.values().iter().copied())
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        // energies must be strictly ascending: merge repeats, reject conflicts
        let mut e: Vec<f64> = Vec::with_capacity(pairs.len());
        let mut v: Vec<f64> = Vec::with_capacity(pairs.len());
        for (pe, pv) in pairs {
            if let (Some(&last_e), Some(&last_v)) = (e.last(), v.last()) {
                if last_e == pe {
                    if last_v == pv {
                        continue;
                    }
                    return Err(AttachError::DuplicateEnergy {
                        name: name.to_string(),
                        energy: pe,
                    });
                }
            }
            e.push(pe);
            v.push(pv);
        }

        let eunit = gdml_unit(energies.unit());
        let vunit = gdml_unit(values.unit());
        debug!("{}: {} points, {} -> {}", name, e.len(), eunit, vunit);
        self.sink.add_vec_property(name, &e, eunit, &v, vunit)
    }

    /// Like [`Self::add_vec`], with x given as wavelengths (or energies).
    pub fn add_vec_spectral(
        &mut self,
        name: &str,
        x: &QuantityArray,
        values: &QuantityArray,
    ) -> Result<(), AttachError> {
        let energies = x.to_spectral(Unit::ELECTRONVOLT)?;
        self.add_vec(name, &energies, values)
    }

    pub fn add_const(&mut self, name: &str, value: Quantity) -> Result<(), AttachError> {
        if name == "SCINTILLATIONYIELD" {
            warn!("{} cannot be used with scintillation by particle type", name);
        }
        self.sink.add_const_property(name, value.value(), gdml_unit(value.unit()))
    }

    pub fn add_const_value(&mut self, name: &str, value: f64) -> Result<(), AttachError> {
        self.add_const(name, Quantity::dimensionless(value))
    }

    pub fn alias(&mut self, name: &str, existing: &str) -> Result<(), AttachError> {
        self.sink.alias_property(name, existing)
    }
}
