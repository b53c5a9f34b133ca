//! Region, subregion and UI text lookups.

use std::collections::HashMap;

use country_quiz_rust::localization::{
    LocaleTables, Localizer, CANONICAL_REGIONS, ENGLISH, INDONESIAN,
};

#[test]
fn unknown_names_come_back_unchanged() {
    let localizer = Localizer::default();

    for language in [ENGLISH, INDONESIAN, "fr", ""] {
        assert_eq!(localizer.translate_region("Atlantis", language), "Atlantis");
        assert_eq!(
            localizer.translate_subregion("Lower Atlantis", language),
            "Lower Atlantis"
        );
        assert_eq!(localizer.translate_region("", language), "");
    }
}

#[test]
fn known_names_are_translated() {
    let localizer = Localizer::default();

    assert_eq!(localizer.translate_region("Europe", INDONESIAN), "Eropa");
    assert_eq!(localizer.translate_region("Europe", ENGLISH), "Europe");
    assert_eq!(
        localizer.translate_subregion("South-Eastern Asia", INDONESIAN),
        "Asia Tenggara"
    );
}

#[test]
fn region_and_subregion_tables_are_separate() {
    let localizer = Localizer::default();

    assert_eq!(
        localizer.translate_region("Northern Africa", INDONESIAN),
        "Northern Africa"
    );
    assert_eq!(localizer.translate_subregion("Africa", INDONESIAN), "Africa");
}

#[test]
fn unknown_language_falls_back_to_english() {
    let localizer = Localizer::default();

    assert!(!localizer.has_language("de"));
    assert_eq!(localizer.translate_region("Americas", "de"), "Americas");
    assert_eq!(localizer.text("playAgain", "de"), "Play Again");
    assert_eq!(localizer.format_population(1234567, "de"), "1,234,567");
}

#[test]
fn registered_language_needs_no_other_changes() {
    let mut localizer = Localizer::default();
    let mut regions = HashMap::new();
    regions.insert("Europe".to_string(), "Europa".to_string());
    let mut texts = HashMap::new();
    texts.insert("score".to_string(), "Puntuación".to_string());

    localizer.register(
        "es",
        LocaleTables {
            regions,
            texts,
            thousands_separator: '.',
            ..Default::default()
        },
    );

    assert!(localizer.has_language("es"));
    assert_eq!(localizer.translate_region("Europe", "es"), "Europa");
    assert_eq!(localizer.translate_region("Asia", "es"), "Asia");
    assert_eq!(localizer.text("score", "es"), "Puntuación");
    assert_eq!(localizer.text("gameOver", "es"), "Game Over");
    assert_eq!(localizer.format_population(45000, "es"), "45.000");
}

#[test]
fn region_lists_follow_canonical_order() {
    let localizer = Localizer::default();

    assert_eq!(
        localizer.translated_regions(INDONESIAN),
        vec!["Afrika", "Amerika", "Asia", "Eropa", "Oseania"]
    );
    assert_eq!(
        localizer.translated_regions(ENGLISH),
        CANONICAL_REGIONS.to_vec()
    );

    let subregions = localizer.translated_subregions(INDONESIAN);
    assert_eq!(subregions.len(), 24);
    assert_eq!(subregions[0], "Afrika Utara");
    assert_eq!(localizer.translated_subregions(ENGLISH)[0], "Northern Africa");
}

#[test]
fn outcome_labels_exist_in_both_languages() {
    let localizer = Localizer::default();

    for key in ["perfect", "excellent", "goodJob", "tryAgain"] {
        assert_ne!(localizer.text(key, ENGLISH), key);
        assert_ne!(localizer.text(key, INDONESIAN), key);
        assert_ne!(localizer.text(key, ENGLISH), localizer.text(key, INDONESIAN));
    }
}
