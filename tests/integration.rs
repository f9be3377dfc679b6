// SPDX-License-Identifier: MPL-2.0
use iced_retouch::backend::EditError;
use iced_retouch::error::Error;
use iced_retouch::i18n::fluent::I18n;

#[test]
fn language_round_trip_with_unsupported_candidate() {
    let mut i18n = I18n::default();
    assert_eq!(i18n.tr("crop-apply"), "Apply Crop");

    i18n.set_locale_tag("ko");
    assert_eq!(i18n.tr("crop-apply"), "자르기 적용");

    // Unsupported locales are silently ignored; Korean stays active.
    i18n.set_locale_tag("fr");
    assert_eq!(i18n.current_locale().to_string(), "ko");
    assert_eq!(i18n.tr("crop-apply"), "자르기 적용");

    i18n.set_locale_tag("en");
    assert_eq!(i18n.tr("crop-apply"), "Apply Crop");
}

#[test]
fn cli_language_override() {
    let i18n = I18n::new(Some("ja".to_string()));
    assert_eq!(i18n.current_locale().to_string(), "ja");
    assert_eq!(i18n.tr("crop-apply"), "クロップを適用");
}

#[test]
fn every_locale_serves_the_panel_strings() {
    let mut i18n = I18n::default();
    for locale in i18n.available_locales.clone() {
        i18n.set_locale(locale.clone());
        for key in [
            "app-title",
            "tab-retouch",
            "tab-adjust",
            "tab-filters",
            "tab-crop",
            "crop-title",
            "crop-description",
            "aspect-ratio-label",
            "crop-ratio-free",
            "crop-apply",
            "generate",
            "adjustment-apply",
            "filter-apply",
            "upload-image",
            "ai-working",
            "error-occurred",
            "try-again",
        ] {
            let value = i18n.tr(key);
            assert!(!value.is_empty(), "empty value for {key} under {locale}");
            assert_ne!(value, key, "missing translation for {key} under {locale}");
        }
    }
}

#[test]
fn backend_errors_convert_into_the_crate_error() {
    let edit_error = EditError::GenerationFailed("quota exceeded".to_string());
    let key = edit_error.i18n_key();
    let error: Error = edit_error.into();
    assert!(format!("{error}").contains("quota exceeded"));

    // The key survives the conversion path and resolves in every locale.
    let mut i18n = I18n::default();
    for locale in i18n.available_locales.clone() {
        i18n.set_locale(locale);
        assert_ne!(i18n.tr(key), key);
    }
}
