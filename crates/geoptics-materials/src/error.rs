//! Errors returned by material property functions.

use geoptics_core::{DataError, InterpolationError, StoreError, UnitError};
use thiserror::Error;

/// Errors from material property functions.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Wavelength {wavelength_nm} nm is outside the valid range [{min}, {max}] nm")]
    OutOfRange {
        wavelength_nm: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("Unknown method '{0}'")]
    UnknownMethod(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
