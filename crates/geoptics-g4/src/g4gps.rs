//! Emission spectra for the Geant4 General Particle Source.
//!
//! The output can be used in a Geant4 macro like this:
//!
//! ```text
//! /gps/ene/type     Arb
//! /gps/ene/diffspec true
//! /gps/hist/type    arb
//! /gps/hist/file    <filename>
//! /gps/hist/inter   Lin
//! ```
//!
//! or, written as a macro, be executed directly.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geoptics_core::spectrum::sample_wavelengths;
use geoptics_core::units::{nm, Quantity, QuantityArray, Unit};
use geoptics_core::GraphOptions;
use geoptics_materials::{fibers, lar, pen};
use log::{info, warn};

use crate::error::AttachError;

/// Histogram size limit of `G4SPSEneDistribution`.
pub const MAX_GPS_POINTS: usize = 1024;

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GpsFormat {
    /// A macro with `/gps/hist/point` commands.
    #[default]
    Macro,
    /// Two whitespace-separated columns for `/gps/hist/file`.
    ArbFile,
}

/// Emission spectra that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsSpectrum {
    LarEmission,
    PenEmission,
    FiberEmission,
}

impl GpsSpectrum {
    pub const ALL: [GpsSpectrum; 3] = [
        GpsSpectrum::LarEmission,
        GpsSpectrum::PenEmission,
        GpsSpectrum::FiberEmission,
    ];

    /// Name written into the macro header.
    pub fn quantity_name(&self) -> &'static str {
        match self {
            GpsSpectrum::LarEmission => "lar_emissions_spectrum",
            GpsSpectrum::PenEmission => "pen_emissions_spectrum",
            GpsSpectrum::FiberEmission => "fiber_emissions_spectrum",
        }
    }

    /// Sample the spectrum with `sample_count` equally spaced energies.
    ///
    /// Returns wavelengths and intensities; the intensity vanishes at both
    /// ends of the range.
    pub fn sample(&self, sample_count: usize) -> Result<(QuantityArray, QuantityArray), AttachError> {
        let (lambda, mut intensity) = match self {
            GpsSpectrum::LarEmission => {
                let lambda = sample_wavelengths(nm(116.0), nm(141.0), sample_count);
                let em = lar::lar_emission_spectrum(&lambda, false)?;
                (lambda, em)
            }
            GpsSpectrum::PenEmission => {
                let lambda = sample_wavelengths(nm(350.0), nm(650.0), sample_count);
                let em = sample_from_350nm(&pen::pen_wls_emission()?, &lambda)?;
                (lambda, em)
            }
            GpsSpectrum::FiberEmission => {
                let lambda = sample_wavelengths(nm(350.0), nm(650.0), sample_count);
                let em = sample_from_350nm(&fibers::fiber_wls_emission()?, &lambda)?;
                (lambda, em)
            }
        };
        zero_boundaries(intensity.values_mut());
        Ok((lambda, intensity))
    }
}

impl fmt::Display for GpsSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GpsSpectrum::LarEmission => "lar-emission",
            GpsSpectrum::PenEmission => "pen-emission",
            GpsSpectrum::FiberEmission => "fiber-emission",
        };
        f.write_str(name)
    }
}

pub(crate) fn sample_from_350nm(
    spectrum: &geoptics_core::Spectrum,
    lambda: &QuantityArray,
) -> Result<QuantityArray, AttachError> {
    let graph = spectrum.graph_with(GraphOptions::default().min_x(Quantity::new(350.0, Unit::NANOMETER)))?;
    Ok(graph.sample(lambda)?)
}

pub(crate) fn zero_boundaries(values: &mut [f64]) {
    if let Some(first) = values.first_mut() {
        *first = 0.0;
    }
    if let Some(last) = values.last_mut() {
        *last = 0.0;
    }
}

/// `(energy in MeV, intensity)` pairs in ascending energy.
pub fn emission_points(
    wavelengths: &QuantityArray,
    intensity: &QuantityArray,
) -> Result<Vec<(f64, f64)>, AttachError> {
    if wavelengths.len() != intensity.len() {
        return Err(AttachError::LengthMismatch {
            name: "g4gps".to_string(),
            energies: wavelengths.len(),
            values: intensity.len(),
        });
    }
    let energies = wavelengths.to_spectral(Unit::MEGAELECTRONVOLT)?;
    let mut points: Vec<(f64, f64)> = energies
        .values()
        .iter()
        .copied()
        .zip(intensity.values().iter().copied())
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    if points.len() > MAX_GPS_POINTS {
        warn!("G4GeneralParticleSource spectrum can only have {} bins", MAX_GPS_POINTS);
    }
    Ok(points)
}

pub fn write_emission_spectrum<W: Write>(
    out: &mut W,
    format: GpsFormat,
    points: &[(f64, f64)],
    quantity_name: &str,
) -> std::io::Result<()> {
    match format {
        GpsFormat::ArbFile => {
            for (e, v) in points {
                writeln!(out, "{:.18e} {:.18e}", e, v)?;
            }
        }
        GpsFormat::Macro => {
            writeln!(out, "# {} | geoptics\n", quantity_name)?;
            writeln!(out, "/gps/ene/type     Arb")?;
            writeln!(out, "/gps/ene/diffspec true")?;
            writeln!(out, "/gps/hist/type    arb\n")?;
            for (e, v) in points {
                writeln!(out, "/gps/hist/point   {} {}", e, v)?;
            }
            writeln!(out, "\n/gps/hist/inter   Lin")?;
        }
    }
    Ok(())
}

/// Sample `spectrum` and write it to `path`.
pub fn write_spectrum_file(
    path: &Path,
    spectrum: GpsSpectrum,
    format: GpsFormat,
    sample_count: usize,
) -> Result<(), AttachError> {
    let (lambda, intensity) = spectrum.sample(sample_count)?;
    let points = emission_points(&lambda, &intensity)?;
    let mut out = BufWriter::new(File::create(path)?);
    write_emission_spectrum(&mut out, format, &points, spectrum.quantity_name())?;
    out.flush()?;
    info!("wrote {} points of {} to {}", points.len(), spectrum, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_ascending_in_mev() {
        let lambda = QuantityArray::new(vec![400.0, 200.0], Unit::NANOMETER);
        let s = QuantityArray::dimensionless(vec![1.0, 2.0]);
        let p = emission_points(&lambda, &s).unwrap();
        assert!(p[0].0 < p[1].0);
        assert_eq!(p[0].1, 1.0);
        assert!((p[1].0 - 6.199e-6).abs() < 1e-9);
    }

    #[test]
    fn test_macro_layout() {
        let mut buf = Vec::new();
        write_emission_spectrum(&mut buf, GpsFormat::Macro, &[(1e-6, 0.5), (2e-6, 0.0)], "test").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# test | geoptics");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "/gps/ene/type     Arb");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "/gps/hist/point   0.000001 0.5");
        assert_eq!(*lines.last().unwrap(), "/gps/hist/inter   Lin");
    }

    #[test]
    fn test_arb_file_layout() {
        let mut buf = Vec::new();
        write_emission_spectrum(&mut buf, GpsFormat::ArbFile, &[(1e-6, 0.5)], "test").unwrap();
        let text = String::from_utf8(buf).unwrap();
        let cols: Vec<f64> = text.split_whitespace().map(|t| t.parse().unwrap()).collect();
        assert_eq!(cols, vec![1e-6, 0.5]);
    }

    #[test]
    fn test_sampled_spectra_vanish_at_edges() {
        for spectrum in GpsSpectrum::ALL {
            let (lambda, s) = spectrum.sample(200).unwrap();
            assert_eq!(lambda.len(), 200);
            assert_eq!(s.values()[0], 0.0);
            assert_eq!(s.values()[199], 0.0);
            assert!(s.values().iter().any(|&v| v > 0.0), "{spectrum} is empty");
        }
    }
}
