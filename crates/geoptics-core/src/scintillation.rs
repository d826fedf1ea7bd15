//! Scintillation yield configuration and photon generation.
//!
//! The yield model follows Geant4's `G4Scintillation` with
//! `ScintillationByParticleType`: a flat-top yield per deposited energy is
//! scaled by a particle-dependent factor, and the photons are distributed
//! over one or two exponential time components (singlet/triplet).
//!
//! [`precompute_scintillation_params`] turns a material's [`ScintConfig`]
//! into plain numbers once; [`scintillate_local`] and [`scintillate`] then
//! sample photons for individual steps.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};
use serde::Serialize;
use thiserror::Error;

use crate::units::{Quantity, Unit, UnitError};

/// Errors from validating a scintillation configuration.
#[derive(Debug, Error)]
pub enum ScintError {
    #[error("Either all or none of the particles must define an excitation ratio")]
    InconsistentExcitationRatio,

    #[error("Expected {expected} time component(s), got {got}")]
    TimeComponentMismatch { expected: usize, got: usize },

    #[error("Missing electron scintillation component (used as fallback for all other particles)")]
    MissingElectron,

    #[error("Invalid Fano factor {0}")]
    InvalidFanoFactor(f64),

    #[error("Unknown particle type '{0}'")]
    UnknownParticle(String),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Particle types known to Geant4's scintillation-by-particle-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Electron,
    Proton,
    Deuteron,
    Triton,
    Alpha,
    Ion,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 6] = [
        ParticleKind::Electron,
        ParticleKind::Proton,
        ParticleKind::Deuteron,
        ParticleKind::Triton,
        ParticleKind::Alpha,
        ParticleKind::Ion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParticleKind::Electron => "electron",
            ParticleKind::Proton => "proton",
            ParticleKind::Deuteron => "deuteron",
            ParticleKind::Triton => "triton",
            ParticleKind::Alpha => "alpha",
            ParticleKind::Ion => "ion",
        }
    }

    /// Prefix used in Geant4 property names, e.g. `ELECTRONSCINTILLATIONYIELD`.
    pub fn g4_name(&self) -> &'static str {
        match self {
            ParticleKind::Electron => "ELECTRON",
            ParticleKind::Proton => "PROTON",
            ParticleKind::Deuteron => "DEUTERON",
            ParticleKind::Triton => "TRITON",
            ParticleKind::Alpha => "ALPHA",
            ParticleKind::Ion => "ION",
        }
    }

    fn index(&self) -> usize {
        match self {
            ParticleKind::Electron => 0,
            ParticleKind::Proton => 1,
            ParticleKind::Deuteron => 2,
            ParticleKind::Triton => 3,
            ParticleKind::Alpha => 4,
            ParticleKind::Ion => 5,
        }
    }
}

impl FromStr for ParticleKind {
    type Err = ScintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParticleKind::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScintError::UnknownParticle(s.to_string()))
    }
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Yield of one particle type relative to the flat-top yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScintParticle {
    pub kind: ParticleKind,
    pub yield_factor: f64,
    /// Fraction of photons in the fast (first) time component.
    pub exc_ratio: Option<f64>,
}

impl ScintParticle {
    pub fn new(kind: ParticleKind, yield_factor: f64, exc_ratio: Option<f64>) -> Self {
        Self {
            kind,
            yield_factor,
            exc_ratio,
        }
    }
}

/// Scintillation yield parameters of a material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScintConfig {
    /// Photons per deposited energy (unit 1/energy).
    pub flat_top: Quantity,
    pub fano_factor: Option<f64>,
    pub particles: Vec<ScintParticle>,
}

impl ScintConfig {
    pub fn get_particle(&self, kind: ParticleKind) -> Option<&ScintParticle> {
        self.particles.iter().find(|p| p.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ParticleYield {
    yield_factor: f64,
    fractions: Vec<f64>,
}

/// Plain-number form of a [`ScintConfig`] plus its time components.
#[derive(Debug, Clone, PartialEq)]
pub struct ScintParams {
    flat_top_per_kev: f64,
    fano: f64,
    time_components_ns: Vec<f64>,
    particles: Vec<ParticleYield>,
}

impl ScintParams {
    pub fn flat_top_per_kev(&self) -> f64 {
        self.flat_top_per_kev
    }

    pub fn fano(&self) -> f64 {
        self.fano
    }

    pub fn time_components_ns(&self) -> &[f64] {
        &self.time_components_ns
    }

    /// Mean photon count for an energy deposition.
    pub fn mean_photons(&self, particle: ParticleKind, edep_kev: f64) -> f64 {
        self.flat_top_per_kev * self.particles[particle.index()].yield_factor * edep_kev
    }
}

/// Validate `config` and convert it for fast sampling.
///
/// # Arguments
/// * `config` - The material's scintillation configuration.
/// * `time_components` - One lifetime, or two (singlet, triplet) when the
///   particles define excitation ratios.
///
/// Particle types missing from `config` fall back to the electron entry.
pub fn precompute_scintillation_params(
    config: &ScintConfig,
    time_components: &[Quantity],
) -> Result<ScintParams, ScintError> {
    let with_exc = config
        .particles
        .iter()
        .filter(|p| p.exc_ratio.is_some())
        .count();
    if with_exc != 0 && with_exc != config.particles.len() {
        return Err(ScintError::InconsistentExcitationRatio);
    }
    let two_components = with_exc > 0;
    let expected = 1 + usize::from(two_components);
    if time_components.len() != expected {
        return Err(ScintError::TimeComponentMismatch {
            expected,
            got: time_components.len(),
        });
    }

    let electron = config
        .get_particle(ParticleKind::Electron)
        .ok_or(ScintError::MissingElectron)?;

    let particles = ParticleKind::ALL
        .iter()
        .map(|kind| {
            let p = config.get_particle(*kind).unwrap_or(electron);
            let fractions = match p.exc_ratio {
                Some(r) if two_components => vec![r, 1.0 - r],
                _ => vec![1.0],
            };
            ParticleYield {
                yield_factor: p.yield_factor,
                fractions,
            }
        })
        .collect();

    let time_components_ns = time_components
        .iter()
        .map(|t| t.value_in(Unit::NANOSECOND))
        .collect::<Result<Vec<_>, _>>()?;

    let fano = config.fano_factor.unwrap_or(1.0);
    if !(fano.is_finite() && fano >= 0.0) {
        return Err(ScintError::InvalidFanoFactor(fano));
    }

    Ok(ScintParams {
        flat_top_per_kev: config.flat_top.value_in(Unit::PER_KILOELECTRONVOLT)?,
        fano,
        time_components_ns,
        particles,
    })
}

/// Sample the photons of one energy deposition.
///
/// Returns the emission delay of each photon in ns, relative to the
/// deposition. The photon count is Gaussian with $\sigma = \sqrt{F \cdot \mu}$
/// for means above 10 and Poisson below, as in Geant4.
pub fn scintillate_local<R: Rng + ?Sized>(
    params: &ScintParams,
    particle: ParticleKind,
    edep_kev: f64,
    rng: &mut R,
) -> Vec<f64> {
    let part = &params.particles[particle.index()];
    let mean = params.flat_top_per_kev * part.yield_factor * edep_kev;

    let num_photons: i64 = if mean > 10.0 {
        let sigma = (params.fano * mean).sqrt();
        match Normal::new(mean, sigma) {
            Ok(normal) => (normal.sample(rng) + 0.5) as i64,
            Err(_) => mean.round() as i64,
        }
    } else if mean > 0.0 {
        match Poisson::new(mean) {
            Ok(poisson) => {
                let n: f64 = poisson.sample(rng);
                n as i64
            }
            Err(_) => 0,
        }
    } else {
        0
    };
    if num_photons <= 0 {
        return Vec::new();
    }
    let num_photons = num_photons as usize;

    // Photons per time component; the last one takes the rounding remainder.
    let mut counts: Vec<usize> = part
        .fractions
        .iter()
        .map(|f| (num_photons as f64 * f) as usize)
        .collect();
    let assigned: usize = counts[..counts.len() - 1].iter().sum();
    if let Some(last) = counts.last_mut() {
        *last = num_photons.saturating_sub(assigned);
    }

    let mut times = Vec::with_capacity(num_photons);
    for (count, tau) in counts.iter().zip(&params.time_components_ns) {
        for _ in 0..*count {
            let u: f64 = rng.gen();
            times.push(-tau * (1.0 - u).ln());
        }
    }
    times
}

/// One step of a charged or neutral particle through the scintillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Pre-step position (m).
    pub x0_m: [f64; 3],
    /// Post-step position (m); `None` for a point-like deposition.
    pub x1_m: Option<[f64; 3]>,
    /// Velocities before and after the step (m/ns).
    pub v0_mpns: f64,
    pub v1_mpns: f64,
    /// Global time at the start of the step (ns).
    pub t0_ns: f64,
}

impl Step {
    pub fn point(x0_m: [f64; 3], t0_ns: f64) -> Self {
        Self {
            x0_m,
            x1_m: None,
            v0_mpns: 0.0,
            v1_mpns: 0.0,
            t0_ns,
        }
    }
}

/// A generated scintillation photon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScintPhoton {
    pub time_ns: f64,
    pub position_m: [f64; 3],
}

/// Sample scintillation photons along `step`.
///
/// Charged particles emit uniformly along the step; neutral ones at the
/// post-step point. Photon times include the flight time to the emission
/// point, the step's global start time and the scintillation delay.
pub fn scintillate<R: Rng + ?Sized>(
    params: &ScintParams,
    step: &Step,
    particle: ParticleKind,
    charge: i32,
    edep_kev: f64,
    rng: &mut R,
) -> Vec<ScintPhoton> {
    let delays = scintillate_local(params, particle, edep_kev, rng);

    delays
        .into_iter()
        .map(|dt| match step.x1_m {
            None => ScintPhoton {
                time_ns: step.t0_ns + dt,
                position_m: step.x0_m,
            },
            Some(x1) => {
                let lambda: f64 = if charge != 0 { rng.gen() } else { 1.0 };
                let x0 = step.x0_m;
                let d = [x1[0] - x0[0], x1[1] - x0[1], x1[2] - x0[2]];
                let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
                let flight = len / (step.v0_mpns + lambda * (step.v1_mpns - step.v0_mpns) / 2.0);
                ScintPhoton {
                    time_ns: flight + step.t0_ns + dt,
                    position_m: [
                        x0[0] + lambda * d[0],
                        x0[1] + lambda * d[1],
                        x0[2] + lambda * d[2],
                    ],
                }
            }
        })
        .collect()
}
