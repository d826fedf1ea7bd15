//! Ultem (polyetherimide, PEI) structural components.
//!
//! Based on the complex refractive index reported for PEI by X. Zhang et
//! al., "Complex refractive indices measurements of polymers in visible and
//! near-infrared bands", Appl. Opt. 59 (2020). Points below 400 nm are an
//! ad-hoc extension.

use std::f64::consts::PI;

use geoptics_core::store::{Pluggable, PluggableEntry};
use geoptics_core::units::{QuantityArray, Unit};
use geoptics_core::Spectrum;
use nalgebra::{DMatrix, DVector};

use crate::data::load_spectrum;
use crate::error::MaterialError;

const SMOOTHING_WINDOW: usize = 30;
const SMOOTHING_ORDER: usize = 3;
const SMOOTH_ABOVE_NM: f64 = 500.0;
const MAX_WAVELENGTH_NM: f64 = 650.0;
const EXTENSION_NM: [f64; 2] = [350.0, 375.0];

/// Savitzky-Golay convolution kernel: the weights that evaluate a least-squares
/// polynomial of degree `order`, fitted to `window` equally spaced samples, at
/// the window center.
///
/// An even window has no center sample; the fit is evaluated halfway between
/// the two middle samples.
fn savgol_coeffs(window: usize, order: usize) -> Result<Vec<f64>, MaterialError> {
    if order >= window {
        return Err(MaterialError::InvalidParameter(format!(
            "polynomial order {order} must be less than the window length {window}"
        )));
    }
    let center = (window as f64 - 1.0) / 2.0;
    // a[k][j] = x_j^k
    let a = DMatrix::from_fn(order + 1, window, |k, j| (j as f64 - center).powi(k as i32));
    let gram = &a * a.transpose();
    let cholesky = gram.cholesky().ok_or_else(|| {
        MaterialError::InvalidParameter(format!("singular Savitzky-Golay fit for window {window}"))
    })?;
    let mut e0 = DVector::<f64>::zeros(order + 1);
    e0[0] = 1.0;
    // minimum-norm solution of a c = e0
    let c = a.transpose() * cholesky.solve(&e0);
    Ok(c.iter().copied().collect())
}

/// Index into `0..n` after reflecting about the end samples without repeating
/// them: `d c b | a b c d | c b a`.
fn mirror(k: isize, n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let period = 2 * (n as isize - 1);
    let m = k.rem_euclid(period);
    if m > n as isize - 1 {
        (period - m) as usize
    } else {
        m as usize
    }
}

/// Savitzky-Golay smoothing with mirrored edges.
fn savgol_filter(values: &[f64], window: usize, order: usize) -> Result<Vec<f64>, MaterialError> {
    let n = values.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let coeffs = savgol_coeffs(window, order)?;
    let offset = ((window - 1) / 2) as isize;
    Ok((0..n as isize)
        .map(|i| {
            coeffs
                .iter()
                .enumerate()
                .map(|(j, c)| c * values[mirror(i + j as isize - offset, n)])
                .sum::<f64>()
        })
        .collect())
}

fn refractive_index() -> Result<Spectrum, MaterialError> {
    let table = load_spectrum("ultem_rindex.dat")?;
    let lambda = table.x.to(Unit::NANOMETER)?.into_values();
    let mut r = table.y.values().to_vec();

    let smoothed = savgol_filter(&r, SMOOTHING_WINDOW, SMOOTHING_ORDER)?;
    for (i, &l) in lambda.iter().enumerate() {
        if l > SMOOTH_ABOVE_NM {
            r[i] = smoothed[i];
        }
    }

    let (x, y): (Vec<f64>, Vec<f64>) = EXTENSION_NM
        .iter()
        .copied()
        .zip([1.684, 1.667])
        .chain(lambda.into_iter().zip(r))
        .filter(|&(l, _)| l <= MAX_WAVELENGTH_NM)
        .unzip();
    Ok(Spectrum::new(
        QuantityArray::new(x, Unit::NANOMETER),
        QuantityArray::dimensionless(y),
    ))
}

fn absorption() -> Result<Spectrum, MaterialError> {
    let table = load_spectrum("ultem_rindex_imag.dat")?;
    let lambda = table.x.to(Unit::NANOMETER)?.into_values();
    let kappa = table.y.values();
    let first = kappa.first().copied().ok_or_else(|| {
        MaterialError::InvalidParameter("empty Ultem extinction table".to_string())
    })?;

    let (x, k): (Vec<f64>, Vec<f64>) = EXTENSION_NM
        .iter()
        .map(|&l| (l, first))
        .chain(
            lambda
                .into_iter()
                .zip(kappa.iter().copied())
                .filter(|&(l, _)| l <= MAX_WAVELENGTH_NM),
        )
        .unzip();

    // α = λ / (4πκ)
    let alpha = x
        .iter()
        .zip(&k)
        .map(|(l, k)| l * 1e-6 / (4.0 * PI * k))
        .collect();
    Ok(Spectrum::new(
        QuantityArray::new(x, Unit::NANOMETER),
        QuantityArray::new(alpha, Unit::MILLIMETER),
    ))
}

/// Real refractive index, smoothed above 500 nm.
pub static ULTEM_REFRACTIVE_INDEX: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "ultem_refractive_index", |()| refractive_index());

pub fn ultem_refractive_index() -> Result<Spectrum, MaterialError> {
    ULTEM_REFRACTIVE_INDEX.call(())
}

/// Absorption length derived from the extinction coefficient.
pub static ULTEM_ABSORPTION: Pluggable<(), Result<Spectrum, MaterialError>> =
    Pluggable::new(module_path!(), "ultem_absorption", |()| absorption());

pub fn ultem_absorption() -> Result<Spectrum, MaterialError> {
    ULTEM_ABSORPTION.call(())
}

pub static PLUGGABLES: &[&dyn PluggableEntry] = &[&ULTEM_REFRACTIVE_INDEX, &ULTEM_ABSORPTION];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_savgol_reference_kernels() {
        let expected = [-3.0, 12.0, 17.0, 12.0, -3.0].map(|c| c / 35.0);
        for (c, e) in savgol_coeffs(5, 3).unwrap().iter().zip(expected) {
            assert_relative_eq!(*c, e, epsilon = 1e-12);
        }
        let expected = [-2.0, 3.0, 6.0, 7.0, 6.0, 3.0, -2.0].map(|c| c / 21.0);
        for (c, e) in savgol_coeffs(7, 2).unwrap().iter().zip(expected) {
            assert_relative_eq!(*c, e, epsilon = 1e-12);
        }
        // even window: cubic midpoint interpolation
        let expected = [-1.0, 9.0, 9.0, -1.0].map(|c| c / 16.0);
        for (c, e) in savgol_coeffs(4, 2).unwrap().iter().zip(expected) {
            assert_relative_eq!(*c, e, epsilon = 1e-12);
        }

        let c = savgol_coeffs(SMOOTHING_WINDOW, SMOOTHING_ORDER).unwrap();
        assert_eq!(c.len(), 30);
        assert_relative_eq!(c.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        for j in 0..15 {
            assert_relative_eq!(c[j], c[29 - j], epsilon = 1e-12);
        }
        assert!(savgol_coeffs(3, 3).is_err());
    }

    #[test]
    fn test_mirror_edges() {
        let idx: Vec<usize> = (-3..7).map(|k| mirror(k, 4)).collect();
        assert_eq!(idx, vec![3, 2, 1, 0, 1, 2, 3, 2, 1, 0]);
        assert_eq!(mirror(-5, 1), 0);
    }

    #[test]
    fn test_savgol_keeps_cubics() {
        let cubic = |t: f64| 1.0 + 0.5 * t - 0.02 * t * t + 0.001 * t * t * t;
        let values: Vec<f64> = (0..60).map(|i| cubic(i as f64)).collect();
        let s = savgol_filter(&values, SMOOTHING_WINDOW, SMOOTHING_ORDER).unwrap();
        assert_eq!(s.len(), 60);
        // windows that stay inside the data reproduce the cubic, evaluated
        // between the two middle samples
        for i in 14..=44 {
            assert_relative_eq!(s[i], cubic(i as f64 + 0.5), max_relative = 1e-9);
        }

        let flat = savgol_filter(&[1.7; 40], SMOOTHING_WINDOW, SMOOTHING_ORDER).unwrap();
        for v in flat {
            assert_relative_eq!(v, 1.7, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_refractive_index_extension_and_cut() {
        let n = ultem_refractive_index().unwrap();
        let x = n.x.values();
        assert_eq!(&x[..2], &[350.0, 375.0]);
        assert_eq!(&n.y.values()[..2], &[1.684, 1.667]);
        assert!(x.iter().all(|&l| l <= 650.0));
        assert_eq!(*x.last().unwrap(), 650.0);
    }

    #[test]
    fn test_absorption_from_kappa() {
        let a = ultem_absorption().unwrap();
        assert_eq!(a.y.unit(), Unit::MILLIMETER);
        assert_eq!(a.len(), 53);
        // the extension reuses κ at 400 nm
        let k400 = 2.02e-5;
        assert_relative_eq!(a.y.values()[0], 350e-6 / (4.0 * PI * k400), max_relative = 1e-12);
        assert_relative_eq!(a.y.values()[2], 400e-6 / (4.0 * PI * k400), max_relative = 1e-12);
    }
}
