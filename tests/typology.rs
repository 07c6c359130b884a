use woning_retrofit_toolbox::typology::{resolve_typology, BuildingDescriptor, Dimensions, Typology};

fn building(label: &str) -> BuildingDescriptor {
    BuildingDescriptor {
        residence_id: "r-1".into(),
        grondgebonden: false,
        portiekflat: false,
        galerieflat: false,
        type_label: label.into(),
        build_period: "1970-1980".into(),
        dimensions: Dimensions {
            width_m: 6.0,
            depth_m: 10.0,
        },
        units: 1,
        corner: false,
    }
}

#[test]
fn label_matching_is_case_insensitive() {
    assert_eq!(resolve_typology("PortiekFlat"), Typology::Portiek);
    assert_eq!(resolve_typology("Galerijflat"), Typology::Gallerij);
    assert_eq!(resolve_typology("GALLERIJWONING"), Typology::Gallerij);
}

#[test]
fn portiek_wins_over_galerij() {
    assert_eq!(resolve_typology("galerij/portiek mix"), Typology::Portiek);
    assert_eq!(resolve_typology("portiek met galerij"), Typology::Portiek);
}

#[test]
fn unmatched_and_empty_labels_default_to_grondgebonden() {
    assert_eq!(resolve_typology(""), Typology::Grondgebonden);
    assert_eq!(resolve_typology("rijtjeshuis"), Typology::Grondgebonden);
    assert_eq!(resolve_typology("flat"), Typology::Grondgebonden);
}

#[test]
fn keys_round_trip_and_accept_galerij_spelling() {
    for t in [Typology::Grondgebonden, Typology::Portiek, Typology::Gallerij] {
        assert_eq!(Typology::from_key(t.key()), Some(t));
    }
    assert_eq!(Typology::from_key("galerij"), Some(Typology::Gallerij));
    assert_eq!(Typology::from_key("Portiek"), Some(Typology::Portiek));
    assert_eq!(Typology::from_key("hoogbouw"), None);
}

#[test]
fn descriptor_prefers_label_over_flags() {
    let mut b = building("Galerijflat");
    b.portiekflat = true;
    assert_eq!(b.typology(), Typology::Gallerij);
    assert_eq!(b.type_label_or_flags(), "Galerijflat");
}

#[test]
fn descriptor_uses_flags_when_label_blank() {
    let mut b = building("  ");
    b.galerieflat = true;
    assert_eq!(b.typology(), Typology::Gallerij);
    assert_eq!(b.type_label_or_flags(), "gallerij");

    b.portiekflat = true;
    assert_eq!(b.typology(), Typology::Portiek);

    let plain = building("");
    assert_eq!(plain.typology(), Typology::Grondgebonden);
}

#[test]
fn floor_area_is_width_times_depth() {
    assert!((building("").dimensions.floor_area_m2() - 60.0).abs() < 1e-12);
}
