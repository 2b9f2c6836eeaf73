use ndc_core::sanitize;
use ndc_core::sanitize::is_printable_ascii;
use proptest::prelude::*;

#[test]
fn folds_accents_and_spells_symbols() {
    assert_eq!(sanitize("João & Cia°"), "Joao e Cia graus");
    assert_eq!(sanitize("AÇÃO Ñandú"), "ACAO Nandu");
    assert_eq!(sanitize("contato@unimed"), "contatoatunimed");
    assert_eq!(sanitize("a\\b"), "a/b");
}

#[test]
fn ordinals_and_quotes_are_removed() {
    assert_eq!(sanitize("1º andar, 2ª via"), "1 andar, 2 via");
    assert_eq!(sanitize("m² e m³"), "m e m");
    assert_eq!(sanitize("\u{201C}aspas\u{201D}"), "aspas");
}

#[test]
fn whitespace_only_becomes_empty() {
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize("   "), "");
    assert_eq!(sanitize(" x "), " x ");
}

#[test]
fn unknown_characters_are_dropped() {
    assert_eq!(sanitize("Preço €10 ✓"), "Preco 10 ");
}

proptest! {
    #[test]
    fn plain_ascii_is_unchanged(text in "[A-Za-z0-9 .,;:/()*+=?!#$%_-]{1,40}") {
        prop_assume!(!text.trim().is_empty());
        prop_assert_eq!(sanitize(&text), text);
    }

    #[test]
    fn output_is_printable_ascii(text in "\\PC{0,40}") {
        prop_assert!(sanitize(&text).chars().all(is_printable_ascii));
    }
}
