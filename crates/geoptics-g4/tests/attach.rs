use approx::assert_relative_eq;
use geoptics_g4::attach::{fibers, lar, material_tables, tpb, MeanPhotons};
use geoptics_g4::{PropertyTable, PropertyWriter};
use geoptics_materials::tpb::TpbEmission;
use geoptics_materials::Material;

fn find<'a>(tables: &'a [PropertyTable], name: &str) -> &'a PropertyTable {
    tables.iter().find(|t| t.name == name).unwrap()
}

#[test]
fn test_every_material_attaches() {
    for material in Material::ALL {
        let tables = material_tables(material).unwrap();
        assert!(!tables.is_empty(), "{material}");
        for table in &tables {
            assert!(!table.is_empty(), "{} is empty", table.name);
            for (name, p) in &table.vectors {
                assert_eq!(p.energy_unit, "eV", "{}/{name}", table.name);
                assert_eq!(p.energies.len(), p.values.len());
                assert!(
                    p.energies.windows(2).all(|w| w[0] <= w[1]),
                    "{}/{name} is not ordered by energy",
                    table.name
                );
            }
        }
    }
}

#[test]
fn test_lar_table() {
    let tables = material_tables(Material::Lar).unwrap();
    let lar = find(&tables, "lar");

    let rindex = lar.vector("RINDEX").unwrap();
    assert_eq!(rindex.energies.len(), 200);
    assert!(rindex.values.iter().all(|&n| n > 1.2 && n < 2.0));

    assert_eq!(
        lar.vector("SCINTILLATIONCOMPONENT2"),
        lar.vector("SCINTILLATIONCOMPONENT1")
    );
    let component = lar.vector("SCINTILLATIONCOMPONENT1").unwrap();
    assert_eq!(component.values[0], 0.0);
    assert_eq!(*component.values.last().unwrap(), 0.0);

    let res = lar.constant("RESOLUTIONSCALE").unwrap();
    assert_relative_eq!(res.value, 0.11f64.sqrt(), max_relative = 1e-12);
    assert_eq!(lar.constant("SCINTILLATIONTIMECONSTANT1").unwrap().unit, "ns");

    let electron = lar.vector("ELECTRONSCINTILLATIONYIELD").unwrap();
    assert_eq!(electron.energies, vec![1.0, 1e7]);
    assert!(lar.constant("ELECTRONSCINTILLATIONYIELD1").is_some());
}

#[test]
fn test_tpb_mean_photons() {
    let mut table = PropertyTable::new("tpb");
    let mut w = PropertyWriter::new(&mut table);
    tpb::attach_wls(&mut w, MeanPhotons::Disabled, TpbEmission::default()).unwrap();
    assert!(table.constant("WLSMEANNUMBERPHOTONS").is_none());
    assert_eq!(table.vector("WLSCOMPONENT").unwrap().energies.len(), 800);

    let mut table = PropertyTable::new("tpb");
    let mut w = PropertyWriter::new(&mut table);
    tpb::attach_wls(&mut w, MeanPhotons::Custom(0.9), TpbEmission::default()).unwrap();
    assert_eq!(table.constant("WLSMEANNUMBERPHOTONS").unwrap().value, 0.9);
}

#[test]
fn test_fiber_absorption_choice() {
    let mut table = PropertyTable::new("fiber_core");
    fibers::attach_core_absorption(&mut PropertyWriter::new(&mut table), false).unwrap();
    let plain = table.vector("ABSLENGTH").unwrap().values[0];

    fibers::attach_core_absorption(&mut PropertyWriter::new(&mut table), true).unwrap();
    let geometrical = table.vector("ABSLENGTH").unwrap().values[0];
    assert_relative_eq!(geometrical / plain, 1.21, max_relative = 1e-12);
}

#[test]
fn test_lar_attenuation_returns_peak_lengths() {
    let mut table = PropertyTable::new("lar");
    let (rayleigh, absorption) =
        lar::attach_attenuation(&mut PropertyWriter::new(&mut table), Default::default()).unwrap();
    assert!(rayleigh.value() > 0.0);
    assert!(absorption.value() > 0.0);
    assert!(table.vector("RAYLEIGH").is_some());
}

#[test]
fn test_vm2000_tables() {
    let tables = material_tables(Material::Vm2000).unwrap();
    let foil = find(&tables, "vm2000");
    assert_eq!(foil.vector("REFLECTIVITY").unwrap().energies.len(), 251);
    assert_eq!(
        foil.vector("ALPHASCINTILLATIONYIELD").unwrap().values,
        vec![0.0, 0.0]
    );
    assert!(foil.vector("ELECTRONSCINTILLATIONYIELD").is_none());

    let border = find(&tables, "vm2000_border");
    assert!(border.vector("TRANSMITTANCE").unwrap().values.iter().all(|&t| t == 1.0));
}

#[test]
fn test_pmt_photocathode_efficiency_is_fractional() {
    let tables = material_tables(Material::Pmts).unwrap();
    let cathode = find(&tables, "pmt_photocathode");
    let eff = cathode.vector("EFFICIENCY").unwrap();
    assert!(eff.values.iter().all(|&e| (0.0..=1.0).contains(&e)));
    assert_eq!(tables.len(), 5);
}

#[test]
fn test_silicon_has_complex_rindex() {
    let tables = material_tables(Material::Silicon).unwrap();
    let si = &tables[0];
    let re = si.vector("REALRINDEX").unwrap();
    let im = si.vector("IMAGINARYRINDEX").unwrap();
    assert_eq!(re.energies, im.energies);
}

#[test]
fn test_tables_serialize_to_json() {
    let tables = material_tables(Material::Fibers).unwrap();
    let json = serde_json::to_value(&tables).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["name"], "fiber_core");
    assert_eq!(arr[0]["constants"]["WLSTIMECONSTANT"]["unit"], "ns");
    assert_eq!(arr[1]["vectors"]["RINDEX"]["values"][0], 1.49);
}
