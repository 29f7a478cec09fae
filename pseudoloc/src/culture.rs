//! Culture codes in resource file names.
//!
//! Localized siblings of a neutral resource are named `<stem>.<culture>.<ext>`
//! (`Strings.resx` -> `Strings.fr-FR.resx`). These helpers find that marker and decide whether
//! a file is a neutral source that should be pseudo-localized.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use unic_langid::LanguageIdentifier;

/// ISO 639-1 codes, plus the three-letter codes used where no two-letter code exists.
const KNOWN_LANGUAGES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu", // three-letter
    "arn", "chr", "dsb", "fil", "gsw", "haw", "hsb", "kok", "moh", "nso", "prs", "quc", "qut",
    "quz", "sah", "sma", "smj", "smn", "sms", "syr", "tzm", "zgh",
];

/// ISO 3166-1 alpha-2 regions, plus the UN M.49 areas that appear in culture names
/// (`es-419`, `en-029`).
const KNOWN_REGIONS: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
    "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
    "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
    "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
    "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
    "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
    "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
    "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW", "001", "029", "150", "419",
];

lazy_static! {
    static ref LANGUAGE_SET: HashSet<&'static str> = KNOWN_LANGUAGES.iter().copied().collect();
    static ref REGION_SET: HashSet<&'static str> = KNOWN_REGIONS.iter().copied().collect();
}

/// Returns the culture marker of a resource file name: the last dotted segment of its stem,
/// trimmed of spaces and dots and lowercased. `None` when the stem has no such segment.
///
/// # Example
/// ```rust
/// use pseudoloc::culture::locale_marker;
/// assert_eq!(locale_marker("Strings.fr-FR.resx").as_deref(), Some("fr-fr"));
/// assert_eq!(locale_marker("Strings.resx"), None);
/// ```
pub fn locale_marker<P: AsRef<Path>>(path: P) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let (_, marker) = stem.rsplit_once('.')?;
    let marker = marker.trim_matches(|c| c == ' ' || c == '.').to_lowercase();
    (!marker.is_empty()).then_some(marker)
}

/// True when `code` names a known culture: either a bare known language (`fr`) or a
/// known language with a known region (`fr-FR`, `sr-Latn-RS`, `es-419`).
pub fn is_known_culture(code: &str) -> bool {
    let Ok(langid) = code.parse::<LanguageIdentifier>() else {
        return false;
    };
    if !LANGUAGE_SET.contains(langid.language.as_str()) {
        return false;
    }
    if !code.contains(['-', '_']) {
        return true;
    }
    langid
        .region
        .is_some_and(|region| REGION_SET.contains(region.as_str()))
}

/// Decides whether the file at `path` is a neutral resource to pseudo-localize into `lang`.
///
/// Files without a marker are neutral. A file whose marker equals `lang`
/// (case-insensitively) or names a known culture is already localized and is skipped.
pub fn is_neutral_resource<P: AsRef<Path>>(path: P, lang: &str) -> bool {
    match locale_marker(path) {
        None => true,
        Some(marker) => !marker.eq_ignore_ascii_case(lang) && !is_known_culture(&marker),
    }
}

/// Path of the `lang` sibling of `source`: `<dir>/<stem>.<lang>.<ext>`.
pub fn localized_sibling<P: AsRef<Path>>(source: P, lang: &str) -> PathBuf {
    let source = source.as_ref();
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match source.extension() {
        Some(ext) => format!("{}.{}.{}", stem, lang, ext.to_string_lossy()),
        None => format!("{}.{}", stem, lang),
    };
    source.with_file_name(file_name)
}
