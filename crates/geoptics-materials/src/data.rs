//! Bundled data tables.
//!
//! Tables are compiled into the crate and parsed on first access. Parsed
//! spectra are cached per file name for the lifetime of the process.

use std::collections::BTreeMap;
use std::sync::Arc;

use geoptics_core::datafile::{parse_spectrum, DataError};
use geoptics_core::Spectrum;
use log::debug;
use parking_lot::Mutex;

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../data/", $name)))),*]
    };
}

/// `(file name, contents)` of every bundled table.
pub const BUNDLED: &[(&str, &str)] = bundled![
    "cu_reflectivity.dat",
    "ge_reflectivity.dat",
    "lar_emission_heindl2010.dat",
    "nylon_absorption.dat",
    "pen_abslength.dat",
    "pen_wlscomponent.dat",
    "pmt_qe.dat",
    "psfibers_wlsabslength.dat",
    "psfibers_wlscomponent.dat",
    "si_rindex_imag.dat",
    "si_rindex_real.dat",
    "tetratex_reflectivity.dat",
    "tpb_polystyrene_wlscomponent.dat",
    "tpb_vm2000_wlscomponent.dat",
    "tpb_wlsabslength.dat",
    "tyvek_reflectivity.dat",
    "ultem_rindex.dat",
    "ultem_rindex_imag.dat",
    "vm2000_em_spec.dat",
];

static CACHE: Mutex<BTreeMap<&'static str, Arc<Spectrum>>> = Mutex::new(BTreeMap::new());

/// Names of all bundled tables.
pub fn bundled_names() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(name, _)| *name)
}

/// Read a bundled two-column table by file name.
///
/// Fails with [`DataError::NotFound`] for names that are not bundled, and
/// with a format error if the table does not parse.
pub fn read_data_file(name: &str) -> Result<Arc<Spectrum>, DataError> {
    let (key, content) = BUNDLED
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(|| DataError::NotFound(name.to_string()))?;

    let mut cache = CACHE.lock();
    if let Some(spectrum) = cache.get(key) {
        return Ok(Arc::clone(spectrum));
    }
    let (x, y) = parse_spectrum(key, content)?;
    debug!("cached bundled table {} ({} rows)", key, x.len());
    let spectrum = Arc::new(Spectrum::new(x, y));
    cache.insert(key, Arc::clone(&spectrum));
    Ok(spectrum)
}

/// Owned copy of a bundled table, for property functions that modify it.
pub fn load_spectrum(name: &str) -> Result<Spectrum, DataError> {
    Ok(read_data_file(name)?.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bundled_tables_parse() {
        for name in bundled_names() {
            let spectrum = read_data_file(name)
                .unwrap_or_else(|e| panic!("bundled table {} failed to parse: {}", name, e));
            assert!(spectrum.len() >= 2, "{} has too few rows", name);
            assert!(
                spectrum.x.values().windows(2).all(|w| w[0] < w[1]),
                "{} must be strictly ascending",
                name
            );
        }
    }

    #[test]
    fn test_missing_table() {
        assert!(matches!(
            read_data_file("unobtainium.dat"),
            Err(DataError::NotFound(_))
        ));
    }

    #[test]
    fn test_cache_returns_same_table() {
        let a = read_data_file("pmt_qe.dat").unwrap();
        let b = read_data_file("pmt_qe.dat").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
