//! # GeOptics Core
//!
//! Building blocks shared by the optical material catalog and its Geant4
//! adapters.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`units`] | Unit-tagged quantities, wavelength ⇄ energy conversion |
//! | [`datafile`] | Parsing of `# <unit> <unit>` data tables |
//! | [`interp`] | Piecewise-linear interpolation with a boundary policy |
//! | [`spectrum`] | Spectra and ascending-energy sampling grids |
//! | [`store`] | Runtime-replaceable property functions |
//! | [`scintillation`] | Scintillation yield configuration and photon sampling |
//!
//! ## Conventions
//!
//! Wavelengths are in nm and photon energies in eV unless a [`units::Unit`]
//! says otherwise. Property tables destined for Geant4 are always ordered by
//! ascending photon energy.

pub mod datafile;
pub mod interp;
pub mod scintillation;
pub mod spectrum;
pub mod store;
pub mod units;

pub use datafile::{parse_spectrum, parse_table, read_data_path, DataError};
pub use interp::{GraphOptions, InterpolatingGraph, InterpolationError};
pub use spectrum::{sample_energies, sample_wavelengths, spectral_density, Spectrum};
pub use store::{Pluggable, PluggableEntry, StoreError};
pub use units::{Dimension, Quantity, QuantityArray, Unit, UnitError};
