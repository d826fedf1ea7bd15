//! TOML configuration: property overrides and output settings.
//!
//! ```toml
//! [overrides]
//! lar_fano_factor = 0.2
//! fiber_wls_timeconstant = "10 ns"
//!
//! [tables]
//! tyvek_reflectivity = "measurements/tyvek.dat"
//!
//! [g4gps]
//! sample_count = 400
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geoptics_core::datafile::read_data_path;
use geoptics_core::spectrum::DEFAULT_SAMPLE_COUNT;
use geoptics_core::store;
use geoptics_core::{Quantity, Spectrum};
use geoptics_materials::{register_all, replace_table};
use log::info;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// Property name -> replacement constant.
    #[serde(default)]
    pub overrides: BTreeMap<String, OverrideValue>,
    /// Property name -> data file replacing a tabulated property.
    #[serde(default)]
    pub tables: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pub g4gps: G4gpsConfig,
}

/// A plain number (in the unit of the original value) or `"<value> <unit>"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Number(f64),
    Quantity(String),
}

#[derive(Debug, Deserialize)]
pub struct G4gpsConfig {
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
}

impl Default for G4gpsConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
        }
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

/// Load and parse a TOML configuration file.
pub fn load_config(path: &Path) -> Result<CliConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read configuration {}", path.display()))?;
    let config: CliConfig =
        toml::from_str(&content).with_context(|| format!("invalid configuration {}", path.display()))?;
    Ok(config)
}

/// Install the configured overrides in the property registry.
///
/// Relative table paths are resolved against `base_dir`.
pub fn apply_overrides(config: &CliConfig, base_dir: &Path) -> Result<()> {
    register_all();

    for (name, value) in &config.overrides {
        match value {
            OverrideValue::Number(v) => store::replace_constant(name, *v),
            OverrideValue::Quantity(s) => {
                let q: Quantity = s
                    .parse()
                    .with_context(|| format!("override {name}: cannot parse '{s}'"))?;
                store::replace_quantity(name, q)
            }
        }
        .with_context(|| format!("cannot override {name}"))?;
        info!("override {} = {:?}", name, value);
    }

    for (name, path) in &config.tables {
        let path = base_dir.join(path);
        let (x, y) = read_data_path(&path).with_context(|| format!("table for {name}"))?;
        replace_table(name, Spectrum::new(x, y))
            .with_context(|| format!("cannot replace {name} with {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [overrides]
            lar_fano_factor = 0.2
            pen_quantum_efficiency = 1
            fiber_wls_timeconstant = "10 ns"

            [g4gps]
            sample_count = 400
            "#,
        )
        .unwrap();
        assert_eq!(config.overrides["lar_fano_factor"], OverrideValue::Number(0.2));
        assert_eq!(config.overrides["pen_quantum_efficiency"], OverrideValue::Number(1.0));
        assert_eq!(
            config.overrides["fiber_wls_timeconstant"],
            OverrideValue::Quantity("10 ns".to_string())
        );
        assert_eq!(config.g4gps.sample_count, 400);
        assert!(config.tables.is_empty());
    }

    #[test]
    fn test_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert!(config.overrides.is_empty());
        assert_eq!(config.g4gps.sample_count, 200);
    }

    #[test]
    fn test_apply_overrides() {
        use geoptics_core::units::Unit;
        use geoptics_materials::{fibers, lar, tyvek};

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tyvek.dat"),
            "# nm dimensionless\n300 0.5\n400 0.7\n500 0.9\n",
        )
        .unwrap();
        let path = dir.path().join("geoptics.toml");
        std::fs::write(
            &path,
            r#"
            [overrides]
            lar_fano_factor = 0.2
            fiber_wls_timeconstant = "0.5 us"

            [tables]
            tyvek_reflectivity = "tyvek.dat"
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        apply_overrides(&config, dir.path()).unwrap();

        assert_eq!(lar::lar_fano_factor(), 0.2);
        let tau = fibers::fiber_wls_timeconstant();
        assert_eq!(tau.unit(), Unit::NANOSECOND);
        assert!((tau.value() - 500.0).abs() < 1e-9);
        let table = tyvek::tyvek_reflectivity().unwrap();
        assert_eq!(table.x.values(), &[300.0, 400.0, 500.0]);
        assert_eq!(table.y.values(), &[0.5, 0.7, 0.9]);

        let unknown: CliConfig = toml::from_str("[overrides]\nno_such_property = 1.0").unwrap();
        let err = apply_overrides(&unknown, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("no_such_property"));

        store::reset_all_to_original();
        assert_eq!(lar::lar_fano_factor(), 0.11);
    }

    #[test]
    fn test_missing_file() {
        assert!(load_config(Path::new("/nonexistent/geoptics.toml")).is_err());
    }
}
