//! High-purity water of the muon veto tank.
//!
//! Absorption from J. D. Mason, M. T. Cone and E. S. Fry, "Ultraviolet
//! (250-550 nm) absorption spectrum of pure water", Appl. Opt. 55 (2016).

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::{QuantityArray, Unit};
use geoptics_core::Spectrum;

pub static WATER_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "water_refractive_index", |()| 1.33);

pub fn water_refractive_index() -> f64 {
    WATER_REFRACTIVE_INDEX.call(())
}

pub static WATER_ABSORPTION: Pluggable<(), Spectrum> =
    Pluggable::new(module_path!(), "water_absorption", |()| {
        let wavelengths = vec![
            600.0, 550.0, 500.0, 450.0, 400.0, 350.0, 300.0, 250.0, 200.0, 150.0, 100.0,
        ];
        let lengths = vec![
            10e3, 20e3, 50e3, 100e3, 100e3, 100e3, 90e3, 20e3, 1e3, 0.001, 0.0001,
        ];
        Spectrum::new(
            QuantityArray::new(wavelengths, Unit::NANOMETER),
            QuantityArray::new(lengths, Unit::MILLIMETER),
        )
    });

pub fn water_absorption() -> Spectrum {
    WATER_ABSORPTION.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&WATER_REFRACTIVE_INDEX, &WATER_ABSORPTION];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geoptics_core::units::Quantity;

    #[test]
    fn test_absorption_clear_window() {
        let g = water_absorption().graph().unwrap();
        let at = g.at(Quantity::new(400.0, Unit::NANOMETER)).unwrap();
        assert_relative_eq!(at.to(Unit::METER).unwrap().value(), 100.0, max_relative = 1e-12);
        assert_eq!(g.eval(100.0), 0.0001);
    }
}
