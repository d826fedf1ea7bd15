use std::fs;

use geoptics_g4::g4gps::MAX_GPS_POINTS;
use geoptics_g4::{write_spectrum_file, GpsFormat, GpsSpectrum};

#[test]
fn test_write_macro_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lar.mac");
    write_spectrum_file(&path, GpsSpectrum::LarEmission, GpsFormat::Macro, 200).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# lar_emissions_spectrum | geoptics"));
    assert_eq!(text.lines().filter(|l| l.starts_with("/gps/hist/point")).count(), 200);
    assert!(text.trim_end().ends_with("/gps/hist/inter   Lin"));
}

#[test]
fn test_write_arb_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pen.dat");
    write_spectrum_file(&path, GpsSpectrum::PenEmission, GpsFormat::ArbFile, 100).unwrap();

    let rows: Vec<(f64, f64)> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| {
            let mut cols = l.split_whitespace().map(|c| c.parse::<f64>().unwrap());
            (cols.next().unwrap(), cols.next().unwrap())
        })
        .collect();
    assert_eq!(rows.len(), 100);
    // 650 nm in MeV
    assert!(rows[0].0 > 1.9e-6 && rows[0].0 < 1.91e-6);
    assert!(rows.windows(2).all(|w| w[0].0 < w[1].0));
    assert_eq!(rows[0].1, 0.0);
}

#[test]
fn test_format_names() {
    assert_eq!(GpsFormat::default(), GpsFormat::Macro);
    assert_eq!(GpsSpectrum::FiberEmission.to_string(), "fiber-emission");
}

#[test]
fn test_too_many_points_still_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fiber.mac");
    write_spectrum_file(&path, GpsSpectrum::FiberEmission, GpsFormat::Macro, MAX_GPS_POINTS + 1).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text.lines().filter(|l| l.starts_with("/gps/hist/point")).count(),
        MAX_GPS_POINTS + 1
    );
}
