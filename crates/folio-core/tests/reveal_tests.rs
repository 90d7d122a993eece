use folio_core::*;

#[test]
fn first_intersection_reveals_and_detaches() {
    let mut card = RevealCard::new(0);
    assert_eq!(card.visibility(), Visibility::Hidden);
    assert_eq!(card.on_intersection(false), Transition::Unchanged);
    assert!(!card.is_revealed());
    assert_eq!(card.on_intersection(true), Transition::Revealed);
    assert!(card.is_revealed());
}

#[test]
fn revealed_is_terminal() {
    let mut card = RevealCard::new(3);
    card.on_intersection(true);
    for report in [false, true, false, false, true] {
        assert_eq!(card.on_intersection(report), Transition::Unchanged);
        assert_eq!(card.visibility(), Visibility::Revealed);
    }
}

#[test]
fn slide_direction_alternates_by_position() {
    let dirs: Vec<SlideDirection> = (0..4).map(SlideDirection::for_index).collect();
    assert_eq!(
        dirs,
        vec![
            SlideDirection::Left,
            SlideDirection::Right,
            SlideDirection::Left,
            SlideDirection::Right
        ]
    );
}

#[test]
fn class_name_tracks_visibility() {
    let mut even = RevealCard::new(2);
    assert_eq!(even.class_name(), "card slide-left");
    even.on_intersection(true);
    assert_eq!(even.class_name(), "card slide-left revealed");

    let odd = RevealCard::new(1);
    assert_eq!(odd.class_name(), "card slide-right");
    assert_eq!(odd.index(), 1);
}

#[test]
fn every_project_gets_a_card() {
    assert_eq!(PROJECTS.len(), 4);
    let cards: Vec<RevealCard> = (0..PROJECTS.len()).map(RevealCard::new).collect();
    assert!(cards.iter().all(|c| !c.is_revealed()));
    assert!(PROJECTS.iter().all(|p| !p.title.is_empty() && !p.tags.is_empty()));
}

#[test]
fn default_config_is_valid() {
    let config = FolioConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.reveal.threshold, 0.15);
    assert_eq!(config.starfield.count, 120);
}

#[test]
fn invalid_sub_config_is_reported() {
    let config = FolioConfig {
        trail: TrailParams {
            size_min: 4.0,
            size_max: 1.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, FolioError::InvalidRange { name: "particle size", .. }));
    assert!(err.to_string().contains("particle size"));
}
