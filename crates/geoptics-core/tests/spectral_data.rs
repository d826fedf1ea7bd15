//! Integration test: loading, interpolating and resampling spectral tables.

use std::io::Write;

use approx::assert_relative_eq;
use geoptics_core::datafile::{read_data_path, DataError};
use geoptics_core::interp::InterpolatingGraph;
use geoptics_core::spectrum::{sample_energies, sample_wavelengths};
use geoptics_core::units::{energy_to_wavelength, nm, wavelength_to_energy, Quantity, QuantityArray, Unit};
use uom::si::length::nanometer;

fn write_table(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_read_two_column_file() {
    let file = write_table("# nm 1/cm\n100.0 2.0\n200.0 4.0\n");
    let (x, y) = read_data_path(file.path()).unwrap();

    assert_eq!(x.values(), &[100.0, 200.0]);
    assert_eq!(x.unit(), Unit::NANOMETER);
    assert_eq!(y.values(), &[2.0, 4.0]);
    assert_eq!(y.unit(), Unit::PER_CENTIMETER);
}

#[test]
fn test_interpolate_midpoint_and_clamp() {
    let file = write_table("# nm 1/cm\n100.0 2.0\n200.0 4.0\n");
    let (x, y) = read_data_path(file.path()).unwrap();
    let graph = InterpolatingGraph::new(&x, &y).unwrap();

    assert_relative_eq!(graph.eval(150.0), 3.0);
    assert_relative_eq!(
        graph.eval(50.0),
        graph.eval(100.0),
        epsilon = 0.0
    );
    assert_relative_eq!(graph.eval(250.0), 4.0);

    // the same point expressed in another length unit
    let at = graph.at(Quantity::new(0.15, Unit::MICROMETER)).unwrap();
    assert_relative_eq!(at.value(), 3.0, max_relative = 1e-12);
}

#[test]
fn test_unsorted_file_is_sorted() {
    let file = write_table("# nm 1\n# measured values\n300 3\n100 1 # lowest\n\n200 2\n");
    let (x, y) = read_data_path(file.path()).unwrap();
    assert_eq!(x.values(), &[100.0, 200.0, 300.0]);
    assert_eq!(y.values(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_malformed_files() {
    let missing_header = write_table("100.0 2.0\n200.0 4.0\n");
    assert!(matches!(
        read_data_path(missing_header.path()),
        Err(DataError::MalformedHeader { .. })
    ));

    let bad_row = write_table("# nm 1/cm\n100.0 2.0\n200.0 four\n");
    assert!(matches!(
        read_data_path(bad_row.path()),
        Err(DataError::MalformedRow { line: 3, .. })
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        read_data_path(&dir.path().join("absent.dat")),
        Err(DataError::NotFound(_))
    ));
}

#[test]
fn test_wavelength_energy_round_trip() {
    let lambda = nm(400.0);
    let back = energy_to_wavelength(wavelength_to_energy(lambda));
    assert_relative_eq!(back.get::<nanometer>(), 400.0, max_relative = 1e-12);

    let q = Quantity::new(400.0, Unit::NANOMETER);
    let e = q.to_spectral(Unit::ELECTRONVOLT).unwrap();
    assert_relative_eq!(
        e.to_spectral(Unit::NANOMETER).unwrap().value(),
        400.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_sampling_helper_orders_by_energy() {
    let wavelengths = QuantityArray::new(vec![400.0, 500.0, 600.0], Unit::NANOMETER);
    let energies = sample_energies(&wavelengths).unwrap();
    let expected: Vec<f64> = [600.0, 500.0, 400.0]
        .iter()
        .map(|l| 1239.841984332 / l)
        .collect();

    assert_eq!(energies.unit(), Unit::ELECTRONVOLT);
    for (e, x) in energies.values().iter().zip(&expected) {
        assert_relative_eq!(*e, *x, max_relative = 1e-12);
    }
    assert!(energies.values().windows(2).all(|w| w[0] < w[1]));

    let grid = sample_wavelengths(nm(116.0), nm(141.0), 50)
        .to_spectral(Unit::ELECTRONVOLT)
        .unwrap();
    assert!(grid.values().windows(2).all(|w| w[0] < w[1]));
}
