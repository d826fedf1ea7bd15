//! Receivers of material properties.
//!
//! A [`PropertySink`] is the narrow interface this crate needs from a
//! geometry toolkit: a Geant4 material property table, or the property table
//! of an optical surface. Implementations bridge to the toolkit's own
//! objects; [`PropertyTable`] keeps everything in memory and serialises to
//! JSON.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::AttachError;

/// A Geant4-style material or surface property table.
///
/// Units are GDML unit names (`eV`, `nanometer`, `cm`, ...). An empty unit
/// marks a dimensionless value.
pub trait PropertySink {
    /// Add a property vector. `energies` are strictly ascending.
    fn add_vec_property(
        &mut self,
        name: &str,
        energies: &[f64],
        energy_unit: &str,
        values: &[f64],
        value_unit: &str,
    ) -> Result<(), AttachError>;

    fn add_const_property(&mut self, name: &str, value: f64, unit: &str) -> Result<(), AttachError>;

    /// Make `name` refer to the already defined vector `existing`.
    fn alias_property(&mut self, name: &str, existing: &str) -> Result<(), AttachError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VecProperty {
    pub energy_unit: String,
    pub energies: Vec<f64>,
    pub value_unit: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstProperty {
    pub value: f64,
    pub unit: String,
}

/// In-memory [`PropertySink`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyTable {
    pub name: String,
    pub vectors: BTreeMap<String, VecProperty>,
    pub constants: BTreeMap<String, ConstProperty>,
    /// Alias name -> name of the vector it refers to.
    pub aliases: BTreeMap<String, String>,
}

impl PropertyTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Look up a vector property, following aliases.
    pub fn vector(&self, name: &str) -> Option<&VecProperty> {
        let target = self.aliases.get(name).map_or(name, String::as_str);
        self.vectors.get(target)
    }

    pub fn constant(&self, name: &str) -> Option<&ConstProperty> {
        self.constants.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty() && self.constants.is_empty() && self.aliases.is_empty()
    }

    /// Names of all defined properties, aliases included.
    pub fn property_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .vectors
            .keys()
            .chain(self.constants.keys())
            .chain(self.aliases.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }
}

impl PropertySink for PropertyTable {
    fn add_vec_property(
        &mut self,
        name: &str,
        energies: &[f64],
        energy_unit: &str,
        values: &[f64],
        value_unit: &str,
    ) -> Result<(), AttachError> {
        if energies.len() != values.len() {
            return Err(AttachError::LengthMismatch {
                name: name.to_string(),
                energies: energies.len(),
                values: values.len(),
            });
        }
        self.aliases.remove(name);
        self.vectors.insert(
            name.to_string(),
            VecProperty {
                energy_unit: energy_unit.to_string(),
                energies: energies.to_vec(),
                value_unit: value_unit.to_string(),
                values: values.to_vec(),
            },
        );
        Ok(())
    }

    fn add_const_property(&mut self, name: &str, value: f64, unit: &str) -> Result<(), AttachError> {
        self.constants.insert(
            name.to_string(),
            ConstProperty {
                value,
                unit: unit.to_string(),
            },
        );
        Ok(())
    }

    fn alias_property(&mut self, name: &str, existing: &str) -> Result<(), AttachError> {
        if !self.vectors.contains_key(existing) {
            return Err(AttachError::UndefinedProperty {
                name: name.to_string(),
                existing: existing.to_string(),
            });
        }
        self.aliases.insert(name.to_string(), existing.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_follows_target() {
        let mut table = PropertyTable::new("lar");
        table
            .add_vec_property("SCINTILLATIONCOMPONENT1", &[1.0, 2.0], "eV", &[0.5, 0.7], "")
            .unwrap();
        table
            .alias_property("SCINTILLATIONCOMPONENT2", "SCINTILLATIONCOMPONENT1")
            .unwrap();
        assert_eq!(
            table.vector("SCINTILLATIONCOMPONENT2"),
            table.vector("SCINTILLATIONCOMPONENT1")
        );
        assert_eq!(
            table.property_names(),
            vec!["SCINTILLATIONCOMPONENT1", "SCINTILLATIONCOMPONENT2"]
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut table = PropertyTable::new("x");
        assert!(matches!(
            table.add_vec_property("RINDEX", &[1.0, 2.0], "eV", &[1.0], ""),
            Err(AttachError::LengthMismatch { energies: 2, values: 1, .. })
        ));
        assert!(matches!(
            table.alias_property("A", "B"),
            Err(AttachError::UndefinedProperty { .. })
        ));
        assert!(table.is_empty());
    }
}
