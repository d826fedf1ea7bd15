//! Liquid argon (LAr).
//!
//! ## References
//!
//! - T. Heindl et al., "The scintillation of liquid argon", EPL 91.6 (2010).
//! - T. Doke et al., "Estimation of Fano factors in liquid argon, krypton,
//!   xenon and xenon-doped liquid argon", NIM 134 (1976) 353.
//! - A. Bideau-Mehu et al., "Measurement of refractive indices of neon,
//!   argon, krypton and xenon in the 253.7-140.4 nm wavelength range", JQSRT
//!   25.5 (1981).
//! - G. M. Seidel et al., "Rayleigh scattering in rare-gas liquids", NIM A
//!   489 (2002).
//! - M. Babicz et al., "A measurement of the group velocity of scintillation
//!   light in liquid argon", JINST 15 (2020) P09009.
//! - A. Hitachi et al., "Effect of ionization density on the time dependence
//!   of luminescence from liquid argon and xenon", Phys. Rev. B 27 (1983).
//! - M. Schwarz, "Tracing impurities and illuminating their impact", PhD
//!   thesis, TUM (2024).

use std::f64::consts::PI;
use std::str::FromStr;

use geoptics_core::interp::GraphOptions;
use geoptics_core::scintillation::{ParticleKind, ScintConfig, ScintParticle};
use geoptics_core::spectrum::{sample_wavelengths, DEFAULT_SAMPLE_COUNT};
use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::{nm, Quantity, QuantityArray, Unit};
use log::warn;
use serde::Serialize;
use uom::si::f64::{Length, ThermodynamicTemperature};
use uom::si::length::{meter, micrometer, nanometer};
use uom::si::thermodynamic_temperature::kelvin;

use crate::data::read_data_file;
use crate::error::MaterialError;

/// Wavelength of the LAr scintillation peak (nm).
pub const PEAK_WAVELENGTH_NM: f64 = 126.8;

/// Parametrisation of the LAr dielectric constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DielectricMethod {
    /// Measurement in LAr by Babicz et al. (2020).
    #[default]
    Cern2020,
    /// Gaseous argon data by Bideau-Mehu et al., density-corrected.
    BideauMehu,
}

impl FromStr for DielectricMethod {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cern2020" => Ok(DielectricMethod::Cern2020),
            "bideau-mehu" => Ok(DielectricMethod::BideauMehu),
            other => Err(MaterialError::UnknownMethod(other.to_string())),
        }
    }
}

/// Shape of the wavelength-dependent absorption length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AbsorptionCurve {
    /// Exponential guess connecting the VUV peak and the visible range.
    /// Not normalised; must be rescaled to the intended peak value.
    #[default]
    Default,
    /// Two-component model of the LEGEND-200 argon measured with LLAMA:
    /// 5.6 cm at 126.8 nm rising to 1000 cm at 133 nm and above.
    Legend200LlamaTwoComponents,
}

impl FromStr for AbsorptionCurve {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(AbsorptionCurve::Default),
            "legend200-llama-two-components" => Ok(AbsorptionCurve::Legend200LlamaTwoComponents),
            other => Err(MaterialError::UnknownMethod(other.to_string())),
        }
    }
}

/// Source of the attenuation length at the scintillation peak.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AttenuationSource {
    #[default]
    Legend200Llama,
    Length(Length),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TripletLifetime {
    #[default]
    Legend200Llama,
    Microseconds(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RayleighSetting {
    #[default]
    Enabled,
    Disabled,
    /// Rescale the Rayleigh length to this value at the peak.
    Length(Length),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AbsorptionSetting {
    /// Derive the peak absorption length from the attenuation and Rayleigh lengths.
    #[default]
    Enabled,
    Disabled,
    /// Use this absorption length at the peak.
    Length(Length),
    /// Use an absolutely scaled absorption curve; ignores the attenuation source.
    Curve(AbsorptionCurve),
}

/// Inputs of [`lar_calculate_attenuation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuationConfig {
    pub temperature: ThermodynamicTemperature,
    pub dielectric_method: DielectricMethod,
    pub attenuation: AttenuationSource,
    pub rayleigh: RayleighSetting,
    pub absorption: AbsorptionSetting,
}

impl Default for AttenuationConfig {
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<kelvin>(88.8),
            dielectric_method: DielectricMethod::default(),
            attenuation: AttenuationSource::default(),
            rayleigh: RayleighSetting::default(),
            absorption: AbsorptionSetting::default(),
        }
    }
}

/// Attenuation-related properties sampled over 112–650 nm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attenuation {
    pub peak_rayleigh: Quantity,
    pub peak_absorption: Quantity,
    pub wavelengths: QuantityArray,
    pub rayleigh: Option<QuantityArray>,
    pub absorption: Option<QuantityArray>,
    pub attenuation: QuantityArray,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScintLifetimes {
    pub singlet: Quantity,
    pub triplet: Quantity,
}

impl ScintLifetimes {
    pub fn as_array(&self) -> [Quantity; 2] {
        [self.singlet, self.triplet]
    }
}

/// Dielectric constant from the Bideau-Mehu Sellmeier formula for gaseous
/// argon, converted to Clausius-Mossotti form and density-corrected to LAr.
///
/// Not meaningful below 110 nm.
pub fn lar_dielectric_constant_bideau_mehu(lambda: Length) -> Result<f64, MaterialError> {
    let lambda_nm = lambda.get::<nanometer>();
    if lambda_nm < 110.0 {
        return Err(MaterialError::OutOfRange {
            wavelength_nm: lambda_nm,
            min: 110.0,
            max: f64::INFINITY,
        });
    }
    let l2 = lambda.get::<micrometer>().powi(2);

    // n - 1
    let mut eps = 1.2055e-2
        * (0.2075 * l2 / (91.012 * l2 - 1.0)
            + 0.0415 * l2 / (87.892 * l2 - 1.0)
            + 4.3330 * l2 / (214.02 * l2 - 1.0));
    eps *= 2.0 / 3.0;
    // Ar gas -> LAr density
    eps *= 1.396 / 1.66e-3;

    Ok((1.0 + 2.0 * eps) / (1.0 - eps))
}

/// Dielectric constant measured in LAr by Babicz et al. (2020), valid
/// between 107.6 nm and 907.3 nm.
pub fn lar_dielectric_constant_cern2020(lambda: Length) -> Result<f64, MaterialError> {
    const UV: f64 = 106.6;
    const IR: f64 = 908.3;

    let l = lambda.get::<nanometer>();
    if l < UV + 1.0 || l > IR - 1.0 {
        return Err(MaterialError::OutOfRange {
            wavelength_nm: l,
            min: UV + 1.0,
            max: IR - 1.0,
        });
    }
    let l2 = l * l;
    let x = 0.334 + 0.100 * l2 / (l2 - UV * UV) + 0.008 * l2 / (l2 - IR * IR);

    Ok((3.0 + 2.0 * x) / (3.0 - x))
}

pub static LAR_DIELECTRIC_CONSTANT: Pluggable<(Length, DielectricMethod), Result<f64, MaterialError>> =
    Pluggable::new(module_path!(), "lar_dielectric_constant", |(lambda, method)| match method {
        DielectricMethod::Cern2020 => lar_dielectric_constant_cern2020(lambda),
        DielectricMethod::BideauMehu => lar_dielectric_constant_bideau_mehu(lambda),
    });

pub fn lar_dielectric_constant(lambda: Length, method: DielectricMethod) -> Result<f64, MaterialError> {
    LAR_DIELECTRIC_CONSTANT.call((lambda, method))
}

pub static LAR_REFRACTIVE_INDEX: Pluggable<(Length, DielectricMethod), Result<f64, MaterialError>> =
    Pluggable::new(module_path!(), "lar_refractive_index", |(lambda, method)| {
        Ok(lar_dielectric_constant(lambda, method)?.sqrt())
    });

pub fn lar_refractive_index(lambda: Length, method: DielectricMethod) -> Result<f64, MaterialError> {
    LAR_REFRACTIVE_INDEX.call((lambda, method))
}

fn emission_spectrum(
    (lambda, third_continuum): (QuantityArray, bool),
) -> Result<QuantityArray, MaterialError> {
    let heindl = read_data_file("lar_emission_heindl2010.dat")?;
    // avoid the fluctuations of the measurement below 115 nm
    let graph = heindl.graph_with(
        GraphOptions::default()
            .min_x(Quantity::new(115.0, Unit::NANOMETER))
            .max_x(Quantity::new(150.0, Unit::NANOMETER)),
    )?;
    let mut spectrum = graph.sample(&lambda)?;
    if !third_continuum {
        return Ok(spectrum);
    }

    let center = 200.0;
    let sigma = 50.0;
    let amplitude = 0.2 * spectrum.max().map_or(0.0, |q| q.value());
    let lambda_nm = lambda.to(Unit::NANOMETER)?;
    for (s, l) in spectrum.values_mut().iter_mut().zip(lambda_nm.values()) {
        *s += amplitude * (-0.5 * ((l - center) / sigma).powi(2)).exp();
    }
    Ok(spectrum)
}

/// Emission spectrum adapted from Heindl et al. (2010), restricted to
/// 115–150 nm, with an optional Gaussian third continuum around 200 nm.
pub static LAR_EMISSION_SPECTRUM: Pluggable<(QuantityArray, bool), Result<QuantityArray, MaterialError>> =
    Pluggable::new(module_path!(), "lar_emission_spectrum", emission_spectrum);

pub fn lar_emission_spectrum(lambda: &QuantityArray, third_continuum: bool) -> Result<QuantityArray, MaterialError> {
    LAR_EMISSION_SPECTRUM.call((lambda.clone(), third_continuum))
}

/// Fano factor (Doke 1976).
pub static LAR_FANO_FACTOR: Pluggable<(), f64> = Pluggable::new(module_path!(), "lar_fano_factor", |()| 0.11);

pub fn lar_fano_factor() -> f64 {
    LAR_FANO_FACTOR.call(())
}

fn rayleigh(
    (lambda, temperature, method): (Length, ThermodynamicTemperature, DielectricMethod),
) -> Result<Quantity, MaterialError> {
    // isothermal compressibility, 2.18e-10 cm²/dyn
    const KAPPA: f64 = 2.18e-9;
    const BOLTZMANN: f64 = 1.380658e-23;

    let eps = lar_dielectric_constant(lambda, method)?;
    if eps < 1.000_000_01 {
        return Err(MaterialError::InvalidParameter(format!(
            "dielectric constant {} too close to unity",
            eps
        )));
    }

    let l = lambda.get::<meter>();
    let mut inv_l = ((eps - 1.0) * (eps + 2.0)).powi(2);
    inv_l *= KAPPA * temperature.get::<kelvin>() * BOLTZMANN;
    inv_l /= l.powi(4);
    inv_l *= (2.0 / 3.0 * PI).powi(3);

    if !(1e-4..=1e10).contains(&inv_l) {
        return Err(MaterialError::InvalidParameter(format!(
            "Rayleigh length {} m outside of [0.1 nm, 10 km]",
            1.0 / inv_l
        )));
    }
    Ok(Quantity::new(100.0 / inv_l, Unit::CENTIMETER))
}

/// Rayleigh scattering length following Seidel et al. (2002), about 90 cm
/// at 128 nm with the CERN-2020 dielectric constant.
pub static LAR_RAYLEIGH: Pluggable<
    (Length, ThermodynamicTemperature, DielectricMethod),
    Result<Quantity, MaterialError>,
> = Pluggable::new(module_path!(), "lar_rayleigh", rayleigh);

pub fn lar_rayleigh(
    lambda: Length,
    temperature: ThermodynamicTemperature,
    method: DielectricMethod,
) -> Result<Quantity, MaterialError> {
    LAR_RAYLEIGH.call((lambda, temperature, method))
}

fn abs_length((lambda, curve): (Length, AbsorptionCurve)) -> Quantity {
    let l = lambda.get::<nanometer>();
    let cm = match curve {
        AbsorptionCurve::Default => {
            let l = l.max(141.0);
            (5.976e-12 * (0.223 * l).exp()).min(1e5)
        }
        AbsorptionCurve::Legend200LlamaTwoComponents => {
            const SHORT: f64 = 5.6;
            const LONG: f64 = 1000.0;
            const THRESHOLD: f64 = 133.0;

            let b = (LONG / SHORT).ln() / (THRESHOLD - PEAK_WAVELENGTH_NM);
            let a = SHORT / (b * PEAK_WAVELENGTH_NM).exp();
            if l < THRESHOLD {
                a * (b * l).exp()
            } else {
                LONG
            }
        }
    };
    Quantity::new(cm, Unit::CENTIMETER)
}

/// Wavelength dependence of the absorption length.
pub static LAR_ABS_LENGTH: Pluggable<(Length, AbsorptionCurve), Quantity> =
    Pluggable::new(module_path!(), "lar_abs_length", abs_length);

pub fn lar_abs_length(lambda: Length, curve: AbsorptionCurve) -> Quantity {
    LAR_ABS_LENGTH.call((lambda, curve))
}

/// Attenuation length at the peak in the LEGEND-200 argon (LLAMA).
pub static LAR_PEAK_ATTENUATION_LENGTH: Pluggable<AttenuationSource, Quantity> =
    Pluggable::new(module_path!(), "lar_peak_attenuation_length", |source| match source {
        AttenuationSource::Legend200Llama => Quantity::new(33.0, Unit::CENTIMETER),
        AttenuationSource::Length(l) => Quantity::from_length(l),
    });

pub fn lar_peak_attenuation_length(source: AttenuationSource) -> Quantity {
    LAR_PEAK_ATTENUATION_LENGTH.call(source)
}

fn calculate_attenuation(config: AttenuationConfig) -> Result<Attenuation, MaterialError> {
    if config.rayleigh == RayleighSetting::Disabled && config.absorption == AbsorptionSetting::Disabled {
        return Err(MaterialError::InvalidParameter(
            "cannot disable Rayleigh scattering and absorption at the same time".to_string(),
        ));
    }
    if let (AbsorptionSetting::Length(_), RayleighSetting::Length(_), AttenuationSource::Length(_)) =
        (config.absorption, config.rayleigh, config.attenuation)
    {
        warn!("attenuation, absorption and Rayleigh length are all fixed; the attenuation length is ignored");
    }
    if let AbsorptionSetting::Curve(curve) = config.absorption {
        warn!("absorption curve {:?} selected; the attenuation source is ignored", curve);
    }

    let peak = nm(PEAK_WAVELENGTH_NM);
    let wavelengths = sample_wavelengths(nm(112.0), nm(650.0), DEFAULT_SAMPLE_COUNT);
    let lengths: Vec<Length> = wavelengths.values().iter().map(|&v| nm(v)).collect();

    let mut rayleigh = QuantityArray::new(
        lengths
            .iter()
            .map(|&l| {
                Ok(lar_rayleigh(l, config.temperature, config.dielectric_method)?
                    .value_in(Unit::CENTIMETER)?)
            })
            .collect::<Result<Vec<_>, MaterialError>>()?,
        Unit::CENTIMETER,
    );
    let mut peak_rayleigh =
        lar_rayleigh(peak, config.temperature, config.dielectric_method)?.to(Unit::CENTIMETER)?;
    if let RayleighSetting::Length(target) = config.rayleigh {
        let target = Quantity::from_length(target).to(Unit::CENTIMETER)?;
        rayleigh = rayleigh.scale(target.value() / peak_rayleigh.value());
        peak_rayleigh = target;
    }

    let (peak_absorption, absorption) = match config.absorption {
        AbsorptionSetting::Curve(curve) => {
            let peak_abs = lar_abs_length(peak, curve).to(Unit::CENTIMETER)?;
            let values = lengths
                .iter()
                .map(|&l| lar_abs_length(l, curve).value_in(Unit::CENTIMETER))
                .collect::<Result<Vec<_>, _>>()?;
            (peak_abs, QuantityArray::new(values, Unit::CENTIMETER))
        }
        setting => {
            let peak_att = lar_peak_attenuation_length(config.attenuation).value_in(Unit::CENTIMETER)?;
            // absorption and Rayleigh scattering add up inversely to the attenuation
            let mut peak_abs = 1.0 / (1.0 / peak_att - 1.0 / peak_rayleigh.value());
            if let AbsorptionSetting::Length(l) = setting {
                peak_abs = Quantity::from_length(l).value_in(Unit::CENTIMETER)?;
            }
            if !(peak_abs.is_finite() && peak_abs > 0.0) {
                return Err(MaterialError::InvalidParameter(format!(
                    "attenuation length {} cm must be shorter than the Rayleigh length {} cm",
                    peak_att,
                    peak_rayleigh.value()
                )));
            }

            let scale = peak_abs / lar_abs_length(peak, AbsorptionCurve::Default).value_in(Unit::CENTIMETER)?;
            let values = lengths
                .iter()
                .map(|&l| Ok(lar_abs_length(l, AbsorptionCurve::Default).value_in(Unit::CENTIMETER)? * scale))
                .collect::<Result<Vec<_>, MaterialError>>()?;
            (
                Quantity::new(peak_abs, Unit::CENTIMETER),
                QuantityArray::new(values, Unit::CENTIMETER),
            )
        }
    };

    let (rayleigh, absorption, attenuation) = match (config.rayleigh, config.absorption) {
        (RayleighSetting::Disabled, _) => (None, Some(absorption.clone()), absorption),
        (_, AbsorptionSetting::Disabled) => (Some(rayleigh.clone()), None, rayleigh),
        _ => {
            let att = rayleigh
                .values()
                .iter()
                .zip(absorption.values())
                .map(|(r, a)| 1.0 / (1.0 / r + 1.0 / a))
                .collect();
            (
                Some(rayleigh),
                Some(absorption),
                QuantityArray::new(att, Unit::CENTIMETER),
            )
        }
    };

    Ok(Attenuation {
        peak_rayleigh,
        peak_absorption,
        wavelengths,
        rayleigh,
        absorption,
        attenuation,
    })
}

/// Rayleigh, absorption and total attenuation lengths over 112–650 nm.
///
/// By default the absorption length at the peak is derived from the measured
/// attenuation length and the calculated Rayleigh length; the default
/// absorption curve is then scaled to that value.
pub static LAR_CALCULATE_ATTENUATION: Pluggable<AttenuationConfig, Result<Attenuation, MaterialError>> =
    Pluggable::new(module_path!(), "lar_calculate_attenuation", calculate_attenuation);

pub fn lar_calculate_attenuation(config: AttenuationConfig) -> Result<Attenuation, MaterialError> {
    LAR_CALCULATE_ATTENUATION.call(config)
}

/// Singlet (Hitachi 1983) and triplet (LLAMA) lifetimes.
pub static LAR_LIFETIMES: Pluggable<TripletLifetime, ScintLifetimes> =
    Pluggable::new(module_path!(), "lar_lifetimes", |method| {
        let triplet_us = match method {
            TripletLifetime::Legend200Llama => 1.16,
            TripletLifetime::Microseconds(us) => us,
        };
        ScintLifetimes {
            singlet: Quantity::new(5.95, Unit::NANOSECOND),
            triplet: Quantity::new(triplet_us, Unit::MICROSECOND),
        }
    });

pub fn lar_lifetimes(method: TripletLifetime) -> ScintLifetimes {
    LAR_LIFETIMES.call(method)
}

/// Default flat-top yield, roughly one photon per 32 eV.
pub fn default_flat_top_yield() -> Quantity {
    Quantity::new(31250.0, Unit::PER_MEGAELECTRONVOLT)
}

/// Scintillation yields relative to the flat-top yield.
///
/// Electrons 0.8 (excitation ratio 0.23), alphas 0.7 (1.0), nuclear recoils
/// 0.3 (0.75). The proton excitation ratio is unknown and taken from
/// electrons.
pub static LAR_SCINTILLATION_PARAMS: Pluggable<Quantity, ScintConfig> =
    Pluggable::new(module_path!(), "lar_scintillation_params", |flat_top| ScintConfig {
        flat_top,
        fano_factor: Some(lar_fano_factor()),
        particles: vec![
            ScintParticle::new(ParticleKind::Electron, 0.8, Some(0.23)),
            ScintParticle::new(ParticleKind::Alpha, 0.7, Some(1.0)),
            ScintParticle::new(ParticleKind::Ion, 0.3, Some(0.75)),
            ScintParticle::new(ParticleKind::Proton, 0.8, Some(0.23)),
        ],
    });

pub fn lar_scintillation_params(flat_top: Quantity) -> ScintConfig {
    LAR_SCINTILLATION_PARAMS.call(flat_top)
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[
    &LAR_DIELECTRIC_CONSTANT,
    &LAR_REFRACTIVE_INDEX,
    &LAR_EMISSION_SPECTRUM,
    &LAR_FANO_FACTOR,
    &LAR_RAYLEIGH,
    &LAR_ABS_LENGTH,
    &LAR_PEAK_ATTENUATION_LENGTH,
    &LAR_CALCULATE_ATTENUATION,
    &LAR_LIFETIMES,
    &LAR_SCINTILLATION_PARAMS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dielectric_constants_at_128nm() {
        let eps_bm = lar_dielectric_constant_bideau_mehu(nm(128.0)).unwrap();
        assert_relative_eq!(eps_bm, 1.99281, epsilon = 1e-4);
        let eps_cern = lar_dielectric_constant_cern2020(nm(128.0)).unwrap();
        assert_relative_eq!(eps_cern, 1.84646, epsilon = 1e-4);
        assert_relative_eq!(
            lar_refractive_index(nm(128.0), DielectricMethod::Cern2020).unwrap(),
            eps_cern.sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_dielectric_validity_ranges() {
        assert!(matches!(
            lar_dielectric_constant_bideau_mehu(nm(100.0)),
            Err(MaterialError::OutOfRange { .. })
        ));
        assert!(lar_dielectric_constant_cern2020(nm(107.0)).is_err());
        assert!(lar_dielectric_constant_cern2020(nm(907.5)).is_err());
        assert!(lar_dielectric_constant_cern2020(nm(650.0)).is_ok());
    }

    #[test]
    fn test_method_names() {
        assert_eq!("bideau-mehu".parse::<DielectricMethod>().unwrap(), DielectricMethod::BideauMehu);
        assert!("sellmeier".parse::<DielectricMethod>().is_err());
        assert_eq!(
            "legend200-llama-two-components".parse::<AbsorptionCurve>().unwrap(),
            AbsorptionCurve::Legend200LlamaTwoComponents
        );
    }

    #[test]
    fn test_rayleigh_length_near_peak() {
        let t = ThermodynamicTemperature::new::<kelvin>(90.0);
        let r = lar_rayleigh(nm(128.0), t, DielectricMethod::Cern2020).unwrap();
        assert_eq!(r.unit(), Unit::CENTIMETER);
        assert_relative_eq!(r.value(), 101.75, max_relative = 1e-3);
    }

    #[test]
    fn test_abs_length_curves() {
        let d = lar_abs_length(nm(100.0), AbsorptionCurve::Default);
        assert_relative_eq!(d.value(), 270.35, max_relative = 1e-3);
        assert_eq!(lar_abs_length(nm(1000.0), AbsorptionCurve::Default).value(), 1e5);

        let two = AbsorptionCurve::Legend200LlamaTwoComponents;
        assert_relative_eq!(lar_abs_length(nm(PEAK_WAVELENGTH_NM), two).value(), 5.6, max_relative = 1e-12);
        assert_eq!(lar_abs_length(nm(133.0), two).value(), 1000.0);
        assert_eq!(lar_abs_length(nm(400.0), two).value(), 1000.0);
    }

    #[test]
    fn test_emission_spectrum_restricted_range() {
        let lambda = QuantityArray::new(vec![100.0, 127.0, 200.0], Unit::NANOMETER);
        let plain = lar_emission_spectrum(&lambda, false).unwrap();
        assert_eq!(plain.unit(), Unit::DIMENSIONLESS);
        assert!(plain.values()[1] > plain.values()[0]);

        let third = lar_emission_spectrum(&lambda, true).unwrap();
        let max = plain.max().unwrap().value();
        assert_relative_eq!(third.values()[2] - plain.values()[2], 0.2 * max, max_relative = 1e-12);
    }

    #[test]
    fn test_lifetimes() {
        let lt = lar_lifetimes(TripletLifetime::default());
        assert_eq!(lt.singlet, Quantity::new(5.95, Unit::NANOSECOND));
        assert_eq!(lt.triplet, Quantity::new(1.16, Unit::MICROSECOND));
        let custom = lar_lifetimes(TripletLifetime::Microseconds(1.3));
        assert_eq!(custom.triplet.value(), 1.3);
    }

    #[test]
    fn test_attenuation_two_component_curve() {
        let config = AttenuationConfig {
            absorption: AbsorptionSetting::Curve(AbsorptionCurve::Legend200LlamaTwoComponents),
            ..AttenuationConfig::default()
        };
        let att = lar_calculate_attenuation(config).unwrap();
        assert_relative_eq!(att.peak_absorption.value(), 5.6, max_relative = 1e-9);
        let absorption = att.absorption.unwrap();
        assert_eq!(absorption.values()[0], 1000.0, "first sample is 650 nm");
        assert_eq!(att.wavelengths.len(), DEFAULT_SAMPLE_COUNT);
    }

    #[test]
    fn test_attenuation_default_reproduces_peak() {
        let att = lar_calculate_attenuation(AttenuationConfig::default()).unwrap();
        let inv = 1.0 / att.peak_rayleigh.value() + 1.0 / att.peak_absorption.value();
        assert_relative_eq!(1.0 / inv, 33.0, max_relative = 1e-9);
        assert!(att
            .attenuation
            .values()
            .iter()
            .zip(att.rayleigh.as_ref().unwrap().values())
            .all(|(a, r)| a <= r));
    }

    #[test]
    fn test_attenuation_disabled_components() {
        let no_rayleigh = AttenuationConfig {
            rayleigh: RayleighSetting::Disabled,
            ..AttenuationConfig::default()
        };
        let att = lar_calculate_attenuation(no_rayleigh).unwrap();
        assert!(att.rayleigh.is_none());
        assert_eq!(Some(&att.attenuation), att.absorption.as_ref());

        let nothing = AttenuationConfig {
            rayleigh: RayleighSetting::Disabled,
            absorption: AbsorptionSetting::Disabled,
            ..AttenuationConfig::default()
        };
        assert!(lar_calculate_attenuation(nothing).is_err());
    }
}
