//! Command implementations.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use geoptics_core::PluggableEntry;
use geoptics_g4::{material_tables, write_spectrum_file, GpsFormat, GpsSpectrum};
use geoptics_materials::Material;

/// Write an emission spectrum for the General Particle Source.
pub fn run_g4gps(spectrum: GpsSpectrum, format: GpsFormat, output: &Path, sample_count: usize) -> Result<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_spectrum_file(output, spectrum, format, sample_count)
        .with_context(|| format!("cannot write {} to {}", spectrum, output.display()))?;
    println!("Emission spectrum written to: {}", output.display());
    Ok(())
}

/// List the catalog with every property function. Replaced properties are
/// marked with `*`.
pub fn write_materials<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available materials:")?;
    for material in Material::ALL {
        writeln!(out)?;
        writeln!(out, "  {:<10} {}", material.name(), material.description())?;
        for p in material.pluggables() {
            let mark = if p.is_original() { ' ' } else { '*' };
            writeln!(out, "   {} {}", mark, p.name())?;
        }
    }
    Ok(())
}

/// Attach all properties of `material` to in-memory tables and write them
/// as JSON.
pub fn export_material(material: Material, path: &Path) -> Result<()> {
    let tables = material_tables(material).with_context(|| format!("cannot attach {material}"))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&tables)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    std::fs::write(path, json)?;

    println!("{} tables of {} written to: {}", tables.len(), material, path.display());
    Ok(())
}
