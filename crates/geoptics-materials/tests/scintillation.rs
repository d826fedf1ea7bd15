//! Sampling scintillation photons from catalog parameters.

use geoptics_core::scintillation::{
    precompute_scintillation_params, scintillate, scintillate_local, ParticleKind, Step,
};
use geoptics_materials::{fibers, lar, pen};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_scintillate_lar() {
    let params = precompute_scintillation_params(
        &lar::lar_scintillation_params(lar::default_flat_top_yield()),
        &lar::lar_lifetimes(lar::TripletLifetime::Legend200Llama).as_array(),
    )
    .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    // 31.25 photons/keV * 0.8 * 10 keV = 250
    let e = scintillate_local(&params, ParticleKind::Electron, 10.0, &mut rng);
    assert!((200..300).contains(&e.len()), "got {}", e.len());
    // 31.25 * 0.3 * 10 keV ≈ 94
    let ion = scintillate_local(&params, ParticleKind::Ion, 10.0, &mut rng);
    assert!((60..130).contains(&ion.len()), "got {}", ion.len());

    let step = Step {
        x0_m: [0.0, 0.0, 0.0],
        x1_m: Some([0.0, 0.0, 1.0]),
        v0_mpns: 0.1,
        v1_mpns: 0.09,
        t0_ns: 1234.5,
    };
    let photons = scintillate(&params, &step, ParticleKind::Electron, -1, 1000.0, &mut rng);
    assert!(photons.len() > 20_000);
    assert!(photons.iter().all(|p| p.time_ns >= 1234.5 && (0.0..=1.0).contains(&p.position_m[2])));
}

#[test]
fn test_scintillate_point_like() {
    let params = precompute_scintillation_params(
        &lar::lar_scintillation_params(lar::default_flat_top_yield()),
        &lar::lar_lifetimes(lar::TripletLifetime::Legend200Llama).as_array(),
    )
    .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let step = Step::point([0.0, 0.0, 0.0], 1234.5);
    let photons = scintillate(&params, &step, ParticleKind::Ion, -1, 1000.0, &mut rng);
    assert!(!photons.is_empty());
    assert!(photons.iter().all(|p| p.position_m == [0.0, 0.0, 0.0]));
}

#[test]
fn test_scintillate_single_component_materials() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let pen_params = precompute_scintillation_params(
        &pen::pen_scintillation_params(),
        &[pen::pen_scint_timeconstant()],
    )
    .unwrap();
    // 5.44 photons/keV * 100 keV
    let e = scintillate_local(&pen_params, ParticleKind::Electron, 100.0, &mut rng);
    assert!((400..700).contains(&e.len()), "got {}", e.len());
    // unlisted particles fall back to the electron yield
    assert_eq!(
        pen_params.mean_photons(ParticleKind::Triton, 1.0),
        pen_params.mean_photons(ParticleKind::Electron, 1.0)
    );

    let fiber_params = precompute_scintillation_params(
        &fibers::fiber_core_scintillation_params(),
        &[fibers::fiber_wls_timeconstant()],
    )
    .unwrap();
    assert!((fiber_params.flat_top_per_kev() - 8.0).abs() < 1e-12);
}
