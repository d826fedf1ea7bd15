//! Silicon.
//!
//! H. R. Philipp and E. A. Taft, "Optical constants of silicon in the region
//! 1 to 10 eV", Phys. Rev. 120 (1960).

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::QuantityArray;
use num_complex::Complex64;

use crate::data::load_spectrum;
use crate::error::MaterialError;

/// Complex refractive index `n + iκ` on the measured wavelengths.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexRefractiveIndex {
    pub wavelengths: QuantityArray,
    pub values: Vec<Complex64>,
}

impl ComplexRefractiveIndex {
    pub fn real(&self) -> QuantityArray {
        QuantityArray::dimensionless(self.values.iter().map(|c| c.re).collect())
    }

    pub fn imag(&self) -> QuantityArray {
        QuantityArray::dimensionless(self.values.iter().map(|c| c.im).collect())
    }
}

pub static SILICON_COMPLEX_RINDEX: Pluggable<(), Result<ComplexRefractiveIndex, MaterialError>> =
    Pluggable::new(module_path!(), "silicon_complex_rindex", |()| {
        let real = load_spectrum("si_rindex_real.dat")?;
        let imag = load_spectrum("si_rindex_imag.dat")?;
        if real.x != imag.x {
            return Err(MaterialError::InvalidParameter(
                "silicon real and imaginary tables use different wavelengths".to_string(),
            ));
        }
        let values = real
            .y
            .values()
            .iter()
            .zip(imag.y.values())
            .map(|(&re, &im)| Complex64::new(re, im))
            .collect();
        Ok(ComplexRefractiveIndex {
            wavelengths: real.x,
            values,
        })
    });

pub fn silicon_complex_rindex() -> Result<ComplexRefractiveIndex, MaterialError> {
    SILICON_COMPLEX_RINDEX.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&SILICON_COMPLEX_RINDEX];
