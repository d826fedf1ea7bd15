//! Scintillation by particle type.
//!
//! Since Geant4 11.0, `G4Scintillation` with `ScintillationByParticleType`
//! reads an integrated yield per particle, `<PARTICLE>SCINTILLATIONYIELD`,
//! tabulated over the deposited energy. A linear function of the energy
//! represents a constant yield.

use geoptics_core::scintillation::{ParticleKind, ScintConfig};
use geoptics_core::units::{Dimension, Quantity, QuantityArray, Unit};

use crate::error::AttachError;
use crate::writer::PropertyWriter;

/// Integrated yield `E * yield` at 1 eV and 10 MeV.
pub fn scint_yield_vector(yield_per_energy: Quantity) -> Result<(QuantityArray, QuantityArray), AttachError> {
    if yield_per_energy.dimension() != Dimension::InverseEnergy {
        return Err(AttachError::NotAYield {
            name: "SCINTILLATIONYIELD".to_string(),
            unit: yield_per_energy.unit().symbol().to_string(),
        });
    }
    let per_ev = yield_per_energy.value_in(Unit::PER_ELECTRONVOLT)?;
    let energies = vec![1.0, 10e6];
    let values = energies.iter().map(|e| e * per_ev).collect();
    Ok((
        QuantityArray::new(energies, Unit::ELECTRONVOLT),
        QuantityArray::dimensionless(values),
    ))
}

/// Define one particle type.
pub fn def_scint_particle(
    writer: &mut PropertyWriter<'_>,
    particle: ParticleKind,
    flat_top: Quantity,
    yield_factor: f64,
    exc_ratio: Option<f64>,
) -> Result<(), AttachError> {
    let prefix = particle.g4_name();
    let (e, y) = scint_yield_vector(flat_top.scale(yield_factor))?;
    writer.add_vec(&format!("{prefix}SCINTILLATIONYIELD"), &e, &y)?;
    match exc_ratio {
        None => writer.add_const_value(&format!("{prefix}SCINTILLATIONYIELD1"), 1.0),
        Some(r) => {
            writer.add_const_value(&format!("{prefix}SCINTILLATIONYIELD1"), r)?;
            writer.add_const_value(&format!("{prefix}SCINTILLATIONYIELD2"), 1.0 - r)
        }
    }
}

/// Define every particle of `config`.
pub fn def_scint_by_particle_type(
    writer: &mut PropertyWriter<'_>,
    config: &ScintConfig,
) -> Result<(), AttachError> {
    for p in &config.particles {
        def_scint_particle(writer, p.kind, config.flat_top, p.yield_factor, p.exc_ratio)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::PropertyTable;
    use approx::assert_relative_eq;
    use geoptics_core::scintillation::ScintParticle;

    #[test]
    fn test_yield_vector_is_linear() {
        let (e, y) = scint_yield_vector(Quantity::new(8000.0, Unit::PER_MEGAELECTRONVOLT)).unwrap();
        assert_eq!(e.values(), &[1.0, 1e7]);
        assert_relative_eq!(y.values()[0], 0.008, max_relative = 1e-12);
        assert_relative_eq!(y.values()[1], 80000.0, max_relative = 1e-12);

        assert!(matches!(
            scint_yield_vector(Quantity::new(1.0, Unit::NANOSECOND)),
            Err(AttachError::NotAYield { .. })
        ));
    }

    #[test]
    fn test_two_component_particles() {
        let config = ScintConfig {
            flat_top: Quantity::new(31250.0, Unit::PER_MEGAELECTRONVOLT),
            fano_factor: Some(0.11),
            particles: vec![
                ScintParticle::new(ParticleKind::Electron, 0.8, Some(0.23)),
                ScintParticle::new(ParticleKind::Alpha, 0.7, Some(1.0)),
            ],
        };
        let mut table = PropertyTable::new("lar");
        let mut w = PropertyWriter::new(&mut table);
        def_scint_by_particle_type(&mut w, &config).unwrap();

        let e = table.vector("ELECTRONSCINTILLATIONYIELD").unwrap();
        assert_relative_eq!(e.values[1], 1e7 * 0.03125 * 0.8, max_relative = 1e-12);
        assert_eq!(table.constant("ELECTRONSCINTILLATIONYIELD1").unwrap().value, 0.23);
        assert_relative_eq!(table.constant("ELECTRONSCINTILLATIONYIELD2").unwrap().value, 0.77);
        assert_eq!(table.constant("ALPHASCINTILLATIONYIELD2").unwrap().value, 0.0);
    }

    #[test]
    fn test_single_component_particle() {
        let mut table = PropertyTable::new("pen");
        let mut w = PropertyWriter::new(&mut table);
        def_scint_particle(&mut w, ParticleKind::Ion, Quantity::new(5440.0, Unit::PER_MEGAELECTRONVOLT), 0.05, None)
            .unwrap();
        assert_eq!(table.constant("IONSCINTILLATIONYIELD1").unwrap().value, 1.0);
        assert!(table.constant("IONSCINTILLATIONYIELD2").is_none());
    }
}
