//! # GeOptics Materials
//!
//! Optical properties of the materials used in a liquid-argon
//! instrumented detector, each exposed as a replaceable property function.
//!
//! ## Modules
//!
//! | Module | Material |
//! |--------|----------|
//! | [`lar`] | Liquid argon: refractive index, attenuation, scintillation |
//! | [`tpb`] | Tetraphenyl butadiene wavelength shifter |
//! | [`pen`] | Polyethylene naphthalate scintillator and shifter |
//! | [`fibers`] | BCF-91A wavelength-shifting fibers |
//! | [`pmts`] | Photomultiplier window, photocathode and housing |
//! | [`vm2000`] | VM2000 reflective foil |
//! | [`tyvek`], [`tetratex`] | Reflectors |
//! | [`germanium`], [`copper`] | Detector and structural surfaces |
//! | [`nylon`], [`ultem`] | Structural plastics |
//! | [`water`] | Muon veto water |
//! | [`silicon`], [`silica`] | SiPMs and fused silica |
//!
//! Every property is a [`geoptics_core::Pluggable`] static with an accessor
//! function of the same name in lower case:
//!
//! ```
//! use geoptics_materials::fibers::fiber_core_refractive_index;
//!
//! assert_eq!(fiber_core_refractive_index(), 1.6);
//! ```
//!
//! [`catalog`] indexes all of them by material and can enter them into the
//! registry ledger in one go.

pub mod catalog;
pub mod copper;
pub mod data;
pub mod error;
pub mod fibers;
pub mod germanium;
pub mod lar;
pub mod nylon;
pub mod pen;
pub mod pmts;
pub mod silica;
pub mod silicon;
pub mod tetratex;
pub mod tpb;
pub mod tyvek;
pub mod ultem;
pub mod vm2000;
pub mod water;

pub use catalog::{pluggables, register_all, replace_table, Material};
pub use data::{load_spectrum, read_data_file};
pub use error::MaterialError;
