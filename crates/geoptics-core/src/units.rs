//! Unit-tagged quantities.
//!
//! Values read from data files carry a [`Unit`] parsed from the file header,
//! so the unit of a column is only known at runtime. Typed conversions that
//! are fixed at compile time (wavelength ⇄ photon energy, lifetimes,
//! temperatures) use [`uom`] quantities instead.
//!
//! Converting between a wavelength and a photon energy is never done by
//! [`Quantity::to`]; it requires the spectroscopy context,
//! [`Quantity::to_spectral`], which applies $E = hc/\lambda$.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use uom::si::energy::electronvolt;
use uom::si::f64::{Energy, Length, ThermodynamicTemperature, Time};
use uom::si::length::{meter, nanometer};
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::time::{nanosecond, second};

/// $hc$ in eV·nm.
pub const HC_EV_NM: f64 = 1239.841_984_332;

/// Errors from unit parsing and conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UnitError {
    #[error("Unknown unit symbol '{0}'")]
    UnknownUnit(String),

    #[error("Cannot convert '{from}' to '{to}': incompatible dimensions")]
    Incompatible { from: String, to: String },

    #[error("Invalid quantity '{0}'")]
    InvalidQuantity(String),
}

/// Physical dimension of a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    Dimensionless,
    Length,
    InverseLength,
    Energy,
    InverseEnergy,
    Time,
    Temperature,
}

/// A unit with a fixed scale relative to its dimension's base unit.
///
/// Base units are m, 1/m, eV, 1/eV, s and K.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    symbol: &'static str,
    dimension: Dimension,
    #[serde(skip)]
    scale: f64,
}

impl Unit {
    pub const DIMENSIONLESS: Unit = Unit::new("dimensionless", Dimension::Dimensionless, 1.0);

    pub const NANOMETER: Unit = Unit::new("nm", Dimension::Length, 1e-9);
    pub const MICROMETER: Unit = Unit::new("um", Dimension::Length, 1e-6);
    pub const MILLIMETER: Unit = Unit::new("mm", Dimension::Length, 1e-3);
    pub const CENTIMETER: Unit = Unit::new("cm", Dimension::Length, 1e-2);
    pub const METER: Unit = Unit::new("m", Dimension::Length, 1.0);
    pub const KILOMETER: Unit = Unit::new("km", Dimension::Length, 1e3);

    pub const PER_NANOMETER: Unit = Unit::new("1/nm", Dimension::InverseLength, 1e9);
    pub const PER_MICROMETER: Unit = Unit::new("1/um", Dimension::InverseLength, 1e6);
    pub const PER_MILLIMETER: Unit = Unit::new("1/mm", Dimension::InverseLength, 1e3);
    pub const PER_CENTIMETER: Unit = Unit::new("1/cm", Dimension::InverseLength, 1e2);
    pub const PER_METER: Unit = Unit::new("1/m", Dimension::InverseLength, 1.0);

    pub const ELECTRONVOLT: Unit = Unit::new("eV", Dimension::Energy, 1.0);
    pub const KILOELECTRONVOLT: Unit = Unit::new("keV", Dimension::Energy, 1e3);
    pub const MEGAELECTRONVOLT: Unit = Unit::new("MeV", Dimension::Energy, 1e6);
    pub const GIGAELECTRONVOLT: Unit = Unit::new("GeV", Dimension::Energy, 1e9);

    pub const PER_ELECTRONVOLT: Unit = Unit::new("1/eV", Dimension::InverseEnergy, 1.0);
    pub const PER_KILOELECTRONVOLT: Unit = Unit::new("1/keV", Dimension::InverseEnergy, 1e-3);
    pub const PER_MEGAELECTRONVOLT: Unit = Unit::new("1/MeV", Dimension::InverseEnergy, 1e-6);

    pub const NANOSECOND: Unit = Unit::new("ns", Dimension::Time, 1e-9);
    pub const MICROSECOND: Unit = Unit::new("us", Dimension::Time, 1e-6);
    pub const MILLISECOND: Unit = Unit::new("ms", Dimension::Time, 1e-3);
    pub const SECOND: Unit = Unit::new("s", Dimension::Time, 1.0);

    pub const KELVIN: Unit = Unit::new("K", Dimension::Temperature, 1.0);

    const fn new(symbol: &'static str, dimension: Dimension, scale: f64) -> Self {
        Self {
            symbol,
            dimension,
            scale,
        }
    }

    /// Parse a unit symbol as written in data file headers and config files.
    pub fn parse(symbol: &str) -> Result<Unit, UnitError> {
        let unit = match symbol.trim() {
            "" | "1" | "dimensionless" => Unit::DIMENSIONLESS,
            "nm" | "nanometer" => Unit::NANOMETER,
            "um" | "µm" | "μm" | "micrometer" => Unit::MICROMETER,
            "mm" | "millimeter" => Unit::MILLIMETER,
            "cm" | "centimeter" => Unit::CENTIMETER,
            "m" | "meter" => Unit::METER,
            "km" | "kilometer" => Unit::KILOMETER,
            "1/nm" => Unit::PER_NANOMETER,
            "1/um" | "1/µm" | "1/μm" => Unit::PER_MICROMETER,
            "1/mm" => Unit::PER_MILLIMETER,
            "1/cm" => Unit::PER_CENTIMETER,
            "1/m" => Unit::PER_METER,
            "eV" => Unit::ELECTRONVOLT,
            "keV" => Unit::KILOELECTRONVOLT,
            "MeV" => Unit::MEGAELECTRONVOLT,
            "GeV" => Unit::GIGAELECTRONVOLT,
            "1/eV" => Unit::PER_ELECTRONVOLT,
            "1/keV" => Unit::PER_KILOELECTRONVOLT,
            "1/MeV" => Unit::PER_MEGAELECTRONVOLT,
            "ns" => Unit::NANOSECOND,
            "us" | "µs" | "μs" => Unit::MICROSECOND,
            "ms" => Unit::MILLISECOND,
            "s" => Unit::SECOND,
            "K" => Unit::KELVIN,
            other => return Err(UnitError::UnknownUnit(other.to_string())),
        };
        Ok(unit)
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Multiplicative factor from `self` to `target` (same dimension only).
    pub fn factor_to(&self, target: Unit) -> Result<f64, UnitError> {
        if self.dimension != target.dimension {
            return Err(self.incompatible(target));
        }
        Ok(self.scale / target.scale)
    }

    fn incompatible(&self, target: Unit) -> UnitError {
        UnitError::Incompatible {
            from: self.symbol.to_string(),
            to: target.symbol.to_string(),
        }
    }

    /// Convert a single value within the spectroscopy context.
    ///
    /// Same-dimension conversions are plain rescalings; length ⇄ energy go
    /// through $E = hc/\lambda$.
    fn convert_spectral(&self, value: f64, target: Unit) -> Result<f64, UnitError> {
        match (self.dimension, target.dimension) {
            (a, b) if a == b => Ok(value * self.scale / target.scale),
            (Dimension::Length, Dimension::Energy) => {
                let lambda_nm = value * self.scale / Unit::NANOMETER.scale;
                Ok(HC_EV_NM / lambda_nm / target.scale)
            }
            (Dimension::Energy, Dimension::Length) => {
                let energy_ev = value * self.scale;
                Ok(HC_EV_NM / energy_ev * Unit::NANOMETER.scale / target.scale)
            }
            _ => Err(self.incompatible(target)),
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

/// A scalar value with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::DIMENSIONLESS)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    /// Convert to another unit of the same dimension.
    pub fn to(&self, unit: Unit) -> Result<Quantity, UnitError> {
        Ok(Quantity::new(self.value * self.unit.factor_to(unit)?, unit))
    }

    /// Convert within the spectroscopy context (length ⇄ energy allowed).
    pub fn to_spectral(&self, unit: Unit) -> Result<Quantity, UnitError> {
        Ok(Quantity::new(self.unit.convert_spectral(self.value, unit)?, unit))
    }

    /// Numeric value expressed in `unit`.
    pub fn value_in(&self, unit: Unit) -> Result<f64, UnitError> {
        Ok(self.to(unit)?.value)
    }

    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity::new(self.value * factor, self.unit)
    }

    pub fn from_length(length: Length) -> Quantity {
        Quantity::new(length.get::<nanometer>(), Unit::NANOMETER)
    }

    pub fn from_energy(energy: Energy) -> Quantity {
        Quantity::new(energy.get::<electronvolt>(), Unit::ELECTRONVOLT)
    }

    pub fn from_time(time: Time) -> Quantity {
        Quantity::new(time.get::<nanosecond>(), Unit::NANOSECOND)
    }

    pub fn as_length(&self) -> Result<Length, UnitError> {
        Ok(Length::new::<meter>(self.value_in(Unit::METER)?))
    }

    pub fn as_energy(&self) -> Result<Energy, UnitError> {
        Ok(Energy::new::<electronvolt>(self.value_in(Unit::ELECTRONVOLT)?))
    }

    pub fn as_time(&self) -> Result<Time, UnitError> {
        Ok(Time::new::<second>(self.value_in(Unit::SECOND)?))
    }

    pub fn as_temperature(&self) -> Result<ThermodynamicTemperature, UnitError> {
        Ok(ThermodynamicTemperature::new::<kelvin>(
            self.value_in(Unit::KELVIN)?,
        ))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.dimension == Dimension::Dimensionless {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// Parses `"<value>"` or `"<value> <unit>"`, e.g. `"12 ns"` or `"1/MeV"`-style units
/// written as `"8000 1/MeV"`.
impl FromStr for Quantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let value: f64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| UnitError::InvalidQuantity(s.to_string()))?;
        let unit = match parts.next() {
            Some(symbol) => Unit::parse(symbol)?,
            None => Unit::DIMENSIONLESS,
        };
        if parts.next().is_some() {
            return Err(UnitError::InvalidQuantity(s.to_string()));
        }
        Ok(Quantity::new(value, unit))
    }
}

/// A one-dimensional array of values sharing one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityArray {
    values: Vec<f64>,
    unit: Unit,
}

impl QuantityArray {
    pub fn new(values: Vec<f64>, unit: Unit) -> Self {
        Self { values, unit }
    }

    pub fn dimensionless(values: Vec<f64>) -> Self {
        Self::new(values, Unit::DIMENSIONLESS)
    }

    /// `len` copies of one quantity.
    pub fn filled(quantity: Quantity, len: usize) -> Self {
        Self::new(vec![quantity.value; len], quantity.unit)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Quantity> {
        self.values.get(index).map(|&v| Quantity::new(v, self.unit))
    }

    pub fn iter(&self) -> impl Iterator<Item = Quantity> + '_ {
        self.values.iter().map(|&v| Quantity::new(v, self.unit))
    }

    pub fn to(&self, unit: Unit) -> Result<QuantityArray, UnitError> {
        let factor = self.unit.factor_to(unit)?;
        Ok(QuantityArray::new(
            self.values.iter().map(|v| v * factor).collect(),
            unit,
        ))
    }

    pub fn to_spectral(&self, unit: Unit) -> Result<QuantityArray, UnitError> {
        let values = self
            .values
            .iter()
            .map(|&v| self.unit.convert_spectral(v, unit))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(QuantityArray::new(values, unit))
    }

    pub fn scale(&self, factor: f64) -> QuantityArray {
        self.map(|v| v * factor)
    }

    /// Apply `f` to every value, keeping the unit.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> QuantityArray {
        QuantityArray::new(self.values.iter().map(|&v| f(v)).collect(), self.unit)
    }

    /// Largest value, or `None` for an empty array.
    pub fn max(&self) -> Option<Quantity> {
        self.values
            .iter()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
            .map(|v| Quantity::new(v, self.unit))
    }

    pub fn min(&self) -> Option<Quantity> {
        self.values
            .iter()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
            .map(|v| Quantity::new(v, self.unit))
    }
}

/// Construct a [`Length`] from nanometres.
pub fn nm(value: f64) -> Length {
    Length::new::<nanometer>(value)
}

/// Photon energy for a vacuum wavelength, $E = hc/\lambda$.
pub fn wavelength_to_energy(wavelength: Length) -> Energy {
    Energy::new::<electronvolt>(HC_EV_NM / wavelength.get::<nanometer>())
}

/// Vacuum wavelength for a photon energy, $\lambda = hc/E$.
pub fn energy_to_wavelength(energy: Energy) -> Length {
    Length::new::<nanometer>(HC_EV_NM / energy.get::<electronvolt>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_known_units() {
        assert_eq!(Unit::parse("nm").unwrap(), Unit::NANOMETER);
        assert_eq!(Unit::parse("µm").unwrap(), Unit::MICROMETER);
        assert_eq!(Unit::parse("1/cm").unwrap(), Unit::PER_CENTIMETER);
        assert_eq!(Unit::parse("dimensionless").unwrap(), Unit::DIMENSIONLESS);
        assert!(matches!(
            Unit::parse("furlong"),
            Err(UnitError::UnknownUnit(s)) if s == "furlong"
        ));
    }

    #[test]
    fn test_plain_conversion_rejects_wavelength_to_energy() {
        let q = Quantity::new(400.0, Unit::NANOMETER);
        assert_relative_eq!(q.value_in(Unit::MILLIMETER).unwrap(), 4e-4, epsilon = 1e-15);
        assert!(q.to(Unit::ELECTRONVOLT).is_err());
    }

    #[test]
    fn test_spectral_round_trip() {
        let q = Quantity::new(400.0, Unit::NANOMETER);
        let e = q.to_spectral(Unit::ELECTRONVOLT).unwrap();
        assert_relative_eq!(e.value(), 3.0996, epsilon = 1e-4);
        let back = e.to_spectral(Unit::NANOMETER).unwrap();
        assert_relative_eq!(back.value(), 400.0, max_relative = 1e-12);

        let typed = energy_to_wavelength(wavelength_to_energy(nm(400.0)));
        assert_relative_eq!(typed.get::<nanometer>(), 400.0, max_relative = 1e-12);
    }

    #[test]
    fn test_spectral_conversion_across_scales() {
        let q = Quantity::new(0.128, Unit::MICROMETER);
        let e = q.to_spectral(Unit::KILOELECTRONVOLT).unwrap();
        assert_relative_eq!(e.value(), HC_EV_NM / 128.0 / 1e3, max_relative = 1e-12);
        assert!(q.to_spectral(Unit::NANOSECOND).is_err());
    }

    #[test]
    fn test_quantity_from_str() {
        let q: Quantity = "12 ns".parse().unwrap();
        assert_eq!(q, Quantity::new(12.0, Unit::NANOSECOND));
        let d: Quantity = "1.6".parse().unwrap();
        assert_eq!(d.unit(), Unit::DIMENSIONLESS);
        assert!("twelve ns".parse::<Quantity>().is_err());
        assert!("1 ns extra".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_array_extrema() {
        let a = QuantityArray::new(vec![3.0, 1.0, 2.0], Unit::METER);
        assert_eq!(a.max().unwrap().value(), 3.0);
        assert_eq!(a.min().unwrap().value(), 1.0);
        assert!(QuantityArray::dimensionless(vec![]).max().is_none());
    }
}
