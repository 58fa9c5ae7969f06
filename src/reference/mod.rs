//! Static lookup tables mapping human-readable country and language
//! names to the lowercase codes the search API expects.
//!
//! The tables are fixed reference data built into the binary; the maps
//! over them are constructed once on first use and never mutated. Name
//! lookups are case-insensitive. Reverse lookups translate the codes
//! the API attaches to articles back into display names.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Country display name -> ISO 3166-1 alpha-2 code (lowercase).
const COUNTRIES: &[(&str, &str)] = &[
    ("Argentina", "ar"),
    ("Australia", "au"),
    ("Austria", "at"),
    ("Bangladesh", "bd"),
    ("Belgium", "be"),
    ("Brazil", "br"),
    ("Bulgaria", "bg"),
    ("Canada", "ca"),
    ("Chile", "cl"),
    ("China", "cn"),
    ("Colombia", "co"),
    ("Croatia", "hr"),
    ("Czechia", "cz"),
    ("Denmark", "dk"),
    ("Egypt", "eg"),
    ("Estonia", "ee"),
    ("Finland", "fi"),
    ("France", "fr"),
    ("Germany", "de"),
    ("Greece", "gr"),
    ("Hong Kong", "hk"),
    ("Hungary", "hu"),
    ("India", "in"),
    ("Indonesia", "id"),
    ("Ireland", "ie"),
    ("Israel", "il"),
    ("Italy", "it"),
    ("Japan", "jp"),
    ("Kenya", "ke"),
    ("Latvia", "lv"),
    ("Lithuania", "lt"),
    ("Malaysia", "my"),
    ("Mexico", "mx"),
    ("Morocco", "ma"),
    ("Netherlands", "nl"),
    ("New Zealand", "nz"),
    ("Nigeria", "ng"),
    ("Norway", "no"),
    ("Pakistan", "pk"),
    ("Peru", "pe"),
    ("Philippines", "ph"),
    ("Poland", "pl"),
    ("Portugal", "pt"),
    ("Romania", "ro"),
    ("Russia", "ru"),
    ("Saudi Arabia", "sa"),
    ("Serbia", "rs"),
    ("Singapore", "sg"),
    ("Slovakia", "sk"),
    ("Slovenia", "si"),
    ("South Africa", "za"),
    ("South Korea", "kr"),
    ("Spain", "es"),
    ("Sweden", "se"),
    ("Switzerland", "ch"),
    ("Taiwan", "tw"),
    ("Thailand", "th"),
    ("Turkey", "tr"),
    ("Ukraine", "ua"),
    ("United Arab Emirates", "ae"),
    ("United Kingdom", "gb"),
    ("United States", "us"),
    ("Venezuela", "ve"),
    ("Vietnam", "vn"),
];

/// Language display name -> ISO 639-1 code.
const LANGUAGES: &[(&str, &str)] = &[
    ("Arabic", "ar"),
    ("Bengali", "bn"),
    ("Bulgarian", "bg"),
    ("Chinese", "zh"),
    ("Croatian", "hr"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("Dutch", "nl"),
    ("English", "en"),
    ("Estonian", "et"),
    ("Finnish", "fi"),
    ("French", "fr"),
    ("German", "de"),
    ("Greek", "el"),
    ("Hebrew", "he"),
    ("Hindi", "hi"),
    ("Hungarian", "hu"),
    ("Indonesian", "id"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Latvian", "lv"),
    ("Lithuanian", "lt"),
    ("Norwegian", "no"),
    ("Persian", "fa"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Romanian", "ro"),
    ("Russian", "ru"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Spanish", "es"),
    ("Swedish", "sv"),
    ("Thai", "th"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
    ("Urdu", "ur"),
    ("Vietnamese", "vi"),
];

static COUNTRY_BY_NAME: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    COUNTRIES
        .iter()
        .map(|(name, code)| (name.to_lowercase(), *code))
        .collect()
});

static COUNTRY_BY_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRIES.iter().map(|(name, code)| (*code, *name)).collect());

static LANGUAGE_BY_NAME: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    LANGUAGES
        .iter()
        .map(|(name, code)| (name.to_lowercase(), *code))
        .collect()
});

static LANGUAGE_BY_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGES.iter().map(|(name, code)| (*code, *name)).collect());

/// Code for a country name, case-insensitive.
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRY_BY_NAME.get(&name.to_lowercase()).copied()
}

/// Display name for a country code.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_BY_CODE.get(code.to_lowercase().as_str()).copied()
}

/// Code for a language name, case-insensitive.
pub fn language_code(name: &str) -> Option<&'static str> {
    LANGUAGE_BY_NAME.get(&name.to_lowercase()).copied()
}

/// Display name for a language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGE_BY_CODE.get(code.to_lowercase().as_str()).copied()
}

/// Resolve a country filter argument that may be a name or a code.
pub fn resolve_country(arg: &str) -> Option<&'static str> {
    country_code(arg).or_else(|| {
        let lower = arg.to_lowercase();
        COUNTRY_BY_CODE.get_key_value(lower.as_str()).map(|(k, _)| *k)
    })
}

/// Resolve a language filter argument that may be a name or a code.
pub fn resolve_language(arg: &str) -> Option<&'static str> {
    language_code(arg).or_else(|| {
        let lower = arg.to_lowercase();
        LANGUAGE_BY_CODE.get_key_value(lower.as_str()).map(|(k, _)| *k)
    })
}

/// Country entries sorted by display name.
pub fn country_entries() -> Vec<(&'static str, &'static str)> {
    let mut entries = COUNTRIES.to_vec();
    entries.sort_by_key(|(name, _)| *name);
    entries
}

/// Language entries sorted by display name.
pub fn language_entries() -> Vec<(&'static str, &'static str)> {
    let mut entries = LANGUAGES.to_vec();
    entries.sort_by_key(|(name, _)| *name);
    entries
}
