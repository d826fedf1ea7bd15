//! GeOptics command-line interface.
//!
//! ```sh
//! geoptics g4gps --type arb-file lar-emission lar.dat
//! geoptics materials
//! geoptics --config overrides.toml export fibers fibers.json
//! ```

mod config;
mod runner;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use geoptics_g4::{GpsFormat, GpsSpectrum};
use geoptics_materials::Material;

#[derive(Parser)]
#[command(name = "geoptics")]
#[command(about = "Optical material properties for Geant4 simulations")]
#[command(version)]
struct Cli {
    /// TOML file with property overrides.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an emission spectrum for the Geant4 General Particle Source.
    G4gps {
        /// Output layout.
        #[arg(long = "type", value_enum, default_value_t = FormatArg::Macro)]
        format: FormatArg,
        spectrum: SpectrumArg,
        output: PathBuf,
    },
    /// List the materials and their property functions.
    Materials,
    /// Write all properties of a material as JSON.
    Export {
        /// Material name, e.g. "lar" or "fibers".
        material: String,
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpectrumArg {
    #[value(alias = "lar_emission")]
    LarEmission,
    #[value(alias = "pen_emission")]
    PenEmission,
    #[value(alias = "fiber_emission")]
    FiberEmission,
}

impl From<SpectrumArg> for GpsSpectrum {
    fn from(arg: SpectrumArg) -> Self {
        match arg {
            SpectrumArg::LarEmission => GpsSpectrum::LarEmission,
            SpectrumArg::PenEmission => GpsSpectrum::PenEmission,
            SpectrumArg::FiberEmission => GpsSpectrum::FiberEmission,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Macro,
    #[value(alias = "arb_file")]
    ArbFile,
}

impl From<FormatArg> for GpsFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Macro => GpsFormat::Macro,
            FormatArg::ArbFile => GpsFormat::ArbFile,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => {
            let cfg = config::load_config(path)?;
            let base = path.parent().unwrap_or(Path::new("."));
            config::apply_overrides(&cfg, base)?;
            cfg
        }
        None => config::CliConfig::default(),
    };

    match cli.command {
        Commands::G4gps {
            format,
            spectrum,
            output,
        } => runner::run_g4gps(spectrum.into(), format.into(), &output, cfg.g4gps.sample_count),
        Commands::Materials => runner::write_materials(&mut std::io::stdout().lock()),
        Commands::Export { material, output } => {
            let material: Material = material.parse().context("see `geoptics materials`")?;
            runner::export_material(material, &output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_aliases() {
        let cli = Cli::try_parse_from(["geoptics", "g4gps", "--type", "arb_file", "lar_emission", "lar.dat"]).unwrap();
        match cli.command {
            Commands::G4gps { format, spectrum, .. } => {
                assert_eq!(GpsFormat::from(format), GpsFormat::ArbFile);
                assert_eq!(GpsSpectrum::from(spectrum), GpsSpectrum::LarEmission);
            }
            _ => panic!("expected g4gps"),
        }

        let cli = Cli::try_parse_from(["geoptics", "g4gps", "pen-emission", "pen.mac"]).unwrap();
        match cli.command {
            Commands::G4gps { format, spectrum, .. } => {
                assert_eq!(GpsFormat::from(format), GpsFormat::Macro);
                assert_eq!(GpsSpectrum::from(spectrum), GpsSpectrum::PenEmission);
            }
            _ => panic!("expected g4gps"),
        }

        assert!(Cli::try_parse_from(["geoptics", "g4gps", "--type", "xml", "lar-emission", "x"]).is_err());
    }
}
