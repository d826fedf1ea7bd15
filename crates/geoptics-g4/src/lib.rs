//! # GeOptics G4
//!
//! Adapters that write the optical catalog into Geant4 material and surface
//! property tables, and export emission spectra for the General Particle
//! Source.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sink`] | The property-table interface and an in-memory implementation |
//! | [`writer`] | Unit checks, GDML unit names, ascending-energy ordering |
//! | [`scint`] | Scintillation yields by particle type |
//! | [`attach`] | One adapter module per catalog material |
//! | [`g4gps`] | Emission spectra as GPS histograms |
//!
//! ```
//! use geoptics_g4::attach::material_tables;
//! use geoptics_materials::Material;
//!
//! let tables = material_tables(Material::Water).unwrap();
//! assert!(tables[0].vector("ABSLENGTH").is_some());
//! ```

pub mod attach;
pub mod error;
pub mod g4gps;
pub mod scint;
pub mod sink;
pub mod writer;

pub use attach::{material_tables, MeanPhotons};
pub use error::AttachError;
pub use g4gps::{write_spectrum_file, GpsFormat, GpsSpectrum};
pub use sink::{ConstProperty, PropertySink, PropertyTable, VecProperty};
pub use writer::PropertyWriter;
