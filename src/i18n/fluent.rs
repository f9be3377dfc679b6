// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale adopted when nothing else matches. The English table is the
/// superset every other table falls back to.
pub const FALLBACK_LOCALE: &str = "en";

/// Owner of the active locale and the per-locale Fluent bundles.
///
/// There is exactly one writer (the application's update loop) and many
/// readers (view functions borrowing `&I18n`), so a language switch
/// re-renders every consumer on the next frame.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

impl I18n {
    /// Loads the embedded translation tables and resolves the initial locale.
    ///
    /// The CLI override wins when it names a supported locale; otherwise the
    /// provisional default is English. System-locale detection runs
    /// asynchronously after startup (see [`detect_system_locale`]) so the
    /// first frame never waits on the OS.
    ///
    /// # Panics
    ///
    /// Panics when an embedded `.ftl` file is malformed or the English table
    /// is missing. Both are build defects, not runtime conditions.
    pub fn new(cli_lang: Option<String>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let source =
                            String::from_utf8_lossy(content.data.as_ref()).to_string();
                        let res = FluentResource::try_new(source)
                            .expect("Failed to parse embedded FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle
                            .add_resource(res)
                            .expect("Failed to add FTL resource to bundle.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        available_locales.sort_by_key(|locale| locale.to_string());

        let fallback_locale: LanguageIdentifier = FALLBACK_LOCALE
            .parse()
            .expect("fallback locale tag must parse");
        assert!(
            bundles.contains_key(&fallback_locale),
            "embedded localization assets are missing the English fallback table"
        );

        let current_locale = cli_lang
            .and_then(|tag| tag.parse::<LanguageIdentifier>().ok())
            .filter(|locale| bundles.contains_key(locale))
            .unwrap_or_else(|| fallback_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            fallback_locale,
        }
    }

    /// The locale currently used for lookups.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches to `locale` when it is supported; any other value is a
    /// silent no-op. The UI only ever offers valid choices, so there is
    /// nothing to report.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// String-typed variant of [`set_locale`](Self::set_locale) for callers
    /// holding a raw tag. Unparseable or unsupported input is dropped.
    pub fn set_locale_tag(&mut self, candidate: &str) {
        if let Ok(locale) = candidate.parse::<LanguageIdentifier>() {
            self.set_locale(locale);
        }
    }

    /// Maps a raw locale tag from the environment (e.g. `ja-JP`, `en_US`)
    /// to a supported locale by truncating to the primary subtag.
    pub fn supported_tag(&self, raw: &str) -> Option<LanguageIdentifier> {
        let locale = primary_subtag(raw).parse::<LanguageIdentifier>().ok()?;
        self.bundles.contains_key(&locale).then_some(locale)
    }

    /// Resolves `key` to a displayable string.
    ///
    /// Resolution order: the active locale's table, then the English table,
    /// then the key itself verbatim. Never fails.
    pub fn tr(&self, key: &str) -> String {
        if let Some(value) = self.lookup(&self.current_locale, key) {
            return value;
        }
        if self.current_locale != self.fallback_locale {
            if let Some(value) = self.lookup(&self.fallback_locale, key) {
                return value;
            }
        }
        key.to_string()
    }

    /// The language's self-name for the switcher dropdown, falling back to
    /// the bare tag when no `language-name-*` entry exists.
    pub fn native_name(&self, locale: &LanguageIdentifier) -> String {
        let key = format!("language-name-{}", locale);
        let name = self.tr(&key);
        if name == key {
            locale.to_string()
        } else {
            name
        }
    }

    fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let msg = bundle.get_message(key)?;
        let pattern = msg.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

/// Truncates a locale tag to its primary subtag (`ja-JP` -> `ja`).
/// Both BCP-47 (`-`) and POSIX (`_`) separators occur in the wild.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Reads the OS-reported locale. Run from an async task at startup; the
/// result is fire-and-forget, so a missing answer just leaves the
/// provisional default active.
pub fn detect_system_locale() -> Option<String> {
    sys_locale::get_locale()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keys every supported table is expected to serve, directly or through
    // the English fallback.
    const CORE_KEYS: &[&str] = &[
        "app-title",
        "crop-title",
        "crop-description",
        "aspect-ratio-label",
        "crop-ratio-free",
        "crop-apply",
        "generate",
        "error-occurred",
        "try-again",
        "ai-working",
        "upload-image",
    ];

    #[test]
    fn loads_exactly_the_supported_locales() {
        let i18n = I18n::default();
        let tags: Vec<String> = i18n
            .available_locales
            .iter()
            .map(|locale| locale.to_string())
            .collect();
        assert_eq!(tags, vec!["en", "ja", "ko"]);
    }

    #[test]
    fn default_locale_is_english() {
        let i18n = I18n::default();
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn cli_override_adopts_supported_locale() {
        let i18n = I18n::new(Some("ko".to_string()));
        assert_eq!(i18n.current_locale().to_string(), "ko");
    }

    #[test]
    fn cli_override_with_unsupported_locale_falls_back() {
        let i18n = I18n::new(Some("fr".to_string()));
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn core_keys_resolve_to_nonempty_strings_in_every_locale() {
        let mut i18n = I18n::default();
        let locales = i18n.available_locales.clone();
        for locale in locales {
            i18n.set_locale(locale.clone());
            for key in CORE_KEYS {
                let value = i18n.tr(key);
                assert!(
                    !value.is_empty(),
                    "empty translation for {} under {}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn set_locale_tag_ignores_unsupported_candidates() {
        let mut i18n = I18n::default();
        i18n.set_locale_tag("ko");
        assert_eq!(i18n.current_locale().to_string(), "ko");

        for candidate in ["fr", "zz", "not a tag", ""] {
            i18n.set_locale_tag(candidate);
            assert_eq!(
                i18n.current_locale().to_string(),
                "ko",
                "locale changed for {:?}",
                candidate
            );
        }
    }

    #[test]
    fn tr_returns_locale_specific_string() {
        let mut i18n = I18n::default();
        assert_eq!(i18n.tr("crop-apply"), "Apply Crop");

        i18n.set_locale_tag("ko");
        assert_eq!(i18n.tr("crop-apply"), "자르기 적용");

        i18n.set_locale_tag("ja");
        assert_eq!(i18n.tr("crop-apply"), "クロップを適用");
    }

    #[test]
    fn tr_falls_back_to_english_for_keys_missing_from_locale() {
        let mut i18n = I18n::default();
        i18n.set_locale_tag("ja");
        // language-name-* entries only exist in the English table.
        assert_eq!(i18n.tr("language-name-en"), "English");
    }

    #[test]
    fn tr_returns_key_verbatim_when_absent_everywhere() {
        let mut i18n = I18n::default();
        i18n.set_locale_tag("ko");
        assert_eq!(i18n.tr("no-such-key"), "no-such-key");
    }

    #[test]
    fn native_names_come_from_the_english_table() {
        let i18n = I18n::default();
        let ja: LanguageIdentifier = "ja".parse().expect("valid tag");
        let ko: LanguageIdentifier = "ko".parse().expect("valid tag");
        assert_eq!(i18n.native_name(&ja), "日本語");
        assert_eq!(i18n.native_name(&ko), "한국어");
    }

    #[test]
    fn primary_subtag_strips_region() {
        assert_eq!(primary_subtag("ja-JP"), "ja");
        assert_eq!(primary_subtag("en_US"), "en");
        assert_eq!(primary_subtag("ko"), "ko");
    }

    #[test]
    fn supported_tag_truncates_and_filters() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.supported_tag("ja-JP").map(|l| l.to_string()),
            Some("ja".to_string())
        );
        assert_eq!(
            i18n.supported_tag("en_US").map(|l| l.to_string()),
            Some("en".to_string()),
            "POSIX-style separators must be handled"
        );
        assert_eq!(
            i18n.supported_tag("en-US").map(|l| l.to_string()),
            Some("en".to_string())
        );
        assert!(i18n.supported_tag("fr-FR").is_none());
    }
}
