//! Errors returned while attaching properties.

use geoptics_core::scintillation::ScintError;
use geoptics_core::{InterpolationError, UnitError};
use geoptics_materials::MaterialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttachError {
    #[error("Property {name}: {energies} energies but {values} values")]
    LengthMismatch {
        name: String,
        energies: usize,
        values: usize,
    },

    #[error("Property {name}: energy {energy} appears twice with different values")]
    DuplicateEnergy { name: String, energy: f64 },

    #[error("Property {name}: x values must be photon energies, found unit '{unit}'")]
    NotAnEnergy { name: String, unit: String },

    #[error("Property {name}: expected a yield per energy, found unit '{unit}'")]
    NotAYield { name: String, unit: String },

    #[error("Cannot alias {name} to undefined property {existing}")]
    UndefinedProperty { name: String, existing: String },

    #[error("Material error: {0}")]
    Material(#[from] MaterialError),

    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    #[error("Scintillation error: {0}")]
    Scintillation(#[from] ScintError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
