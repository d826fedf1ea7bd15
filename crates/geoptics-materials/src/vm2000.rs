//! VM2000 reflective wavelength-shifting film lining the water tank.
//!
//! Reflectivity from Ch. Geis et al., "Optical response of highly reflective
//! film used in the water Cherenkov muon veto of the XENON1T dark matter
//! experiment", JINST 12 (2017) P06017. WLS properties follow the values
//! used in earlier GERDA simulations.

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::{Quantity, QuantityArray, Unit, HC_EV_NM};
use geoptics_core::GraphOptions;

use crate::data::read_data_file;
use crate::error::MaterialError;

const ENERGY_POINTS: usize = 251;
const WLS_YIELD: f64 = 0.075;
/// Path length through the foil used for the WLS mean free path.
const FOIL_PATH_M: f64 = 1.0e-3;

/// Mean free path (in m) that absorbs the fraction `yield_value` of the
/// light over the foil path.
pub fn vm2000_calculate_wls_mfp(yield_value: f64) -> Quantity {
    if yield_value == 0.0 {
        return Quantity::new(10.0, Unit::METER);
    }
    if yield_value == 1.0 {
        return Quantity::new(0.01e-3, Unit::METER);
    }
    Quantity::new(-FOIL_PATH_M / (1.0 - yield_value).ln(), Unit::METER)
}

/// Tabulated VM2000 optical response on a common energy grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Vm2000Parameters {
    /// Photon energies in eV; ascending.
    pub energies: QuantityArray,
    pub reflectivity: QuantityArray,
    pub efficiency: QuantityArray,
    pub wls_absorption: QuantityArray,
    pub wls_emission: QuantityArray,
}

pub static VM2000_REFRACTIVE_INDEX: Pluggable<(), f64> =
    Pluggable::new(module_path!(), "vm2000_refractive_index", |()| 1.15);

pub fn vm2000_refractive_index() -> f64 {
    VM2000_REFRACTIVE_INDEX.call(())
}

pub static VM2000_ABSORPTION_LENGTH: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "vm2000_absorption_length",
    |()| Quantity::new(50.0, Unit::METER),
);

pub fn vm2000_absorption_length() -> Quantity {
    VM2000_ABSORPTION_LENGTH.call(())
}

fn parameters() -> Result<Vm2000Parameters, MaterialError> {
    let e_low = HC_EV_NM / 650.0;
    let e_high = HC_EV_NM / 115.0;
    let step = (e_high - e_low) / (ENERGY_POINTS - 2) as f64;

    let mut energies = vec![1.8];
    energies.extend((1..ENERGY_POINTS).map(|i| e_low + i as f64 * step));

    let e_370 = HC_EV_NM / 370.0;
    let reflectivity = energies
        .iter()
        .map(|&e| if e < e_370 { 0.95 } else { 0.12 })
        .collect();

    let absorbing = vm2000_calculate_wls_mfp(WLS_YIELD).value();
    let mut wls_absorption: Vec<f64> = energies
        .iter()
        .map(|&e| if e > 3.35 { absorbing } else { 1.0 })
        .collect();

    let emission = read_data_file("vm2000_em_spec.dat")?;
    let graph = emission.graph_with(GraphOptions::default().zero_outside())?;
    let energies = QuantityArray::new(energies, Unit::ELECTRONVOLT);
    let mut wls_emission = graph.sample(&energies)?.to(Unit::DIMENSIONLESS)?.into_values();

    // the fixed first point shares the response of its neighbour
    wls_absorption[0] = wls_absorption[1];
    wls_emission[0] = wls_emission[1];

    Ok(Vm2000Parameters {
        efficiency: QuantityArray::dimensionless(vec![0.0; energies.len()]),
        reflectivity: QuantityArray::dimensionless(reflectivity),
        wls_absorption: QuantityArray::new(wls_absorption, Unit::METER),
        wls_emission: QuantityArray::dimensionless(wls_emission),
        energies,
    })
}

/// Reflectivity, efficiency and WLS response of the foil.
pub static VM2000_PARAMETERS: Pluggable<(), Result<Vm2000Parameters, MaterialError>> =
    Pluggable::new(module_path!(), "vm2000_parameters", |()| parameters());

pub fn vm2000_parameters() -> Result<Vm2000Parameters, MaterialError> {
    VM2000_PARAMETERS.call(())
}

pub static VM2000_SCINT_TIMECONSTANT: Pluggable<(), Quantity> = Pluggable::new(
    module_path!(),
    "vm2000_scint_timeconstant",
    |()| Quantity::new(0.5, Unit::NANOSECOND),
);

pub fn vm2000_scint_timeconstant() -> Quantity {
    VM2000_SCINT_TIMECONSTANT.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[
    &VM2000_REFRACTIVE_INDEX,
    &VM2000_ABSORPTION_LENGTH,
    &VM2000_PARAMETERS,
    &VM2000_SCINT_TIMECONSTANT,
];
