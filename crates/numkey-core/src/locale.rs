//! Minimal locale handling: the keypad only needs the decimal separator.

use std::env;

/// Languages whose default decimal separator is a comma.
const COMMA_LANGUAGES: &[&str] = &[
    "af", "bg", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fr", "gl", "hr", "hu",
    "id", "is", "it", "lt", "lv", "mk", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk",
    "sl", "sq", "sr", "sv", "tr", "uk", "vi",
];

/// Regions that use a point even though their language usually does not.
const POINT_REGIONS: &[(&str, &str)] = &[("es", "MX"), ("es", "US"), ("de", "CH"), ("it", "CH")];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    decimal_separator: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl Locale {
    /// Builds a locale from a BCP 47 or POSIX style tag (`de-DE`, `pt_BR.UTF-8`).
    pub fn new(tag: &str) -> Self {
        let tag = normalize_tag(tag);
        let decimal_separator = separator_for(&tag).to_string();
        Self {
            tag,
            decimal_separator,
        }
    }

    /// Locale of the running process, from `LC_ALL`, `LC_NUMERIC` or `LANG`.
    pub fn current() -> Self {
        for var in ["LC_ALL", "LC_NUMERIC", "LANG"] {
            if let Ok(v) = env::var(var) {
                let v = v.trim();
                if v.is_empty() || v == "C" || v == "POSIX" {
                    continue;
                }
                log::debug!("locale from {var}: {v}");
                return Self::new(v);
            }
        }
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }
}

fn normalize_tag(tag: &str) -> String {
    // drop codeset and modifier: "de_DE.UTF-8@euro" -> "de-DE"
    let base = tag.split(['.', '@']).next().unwrap_or(tag);
    let base = base.replace('_', "-");
    if base.is_empty() {
        "en-US".to_string()
    } else {
        base
    }
}

fn separator_for(tag: &str) -> &'static str {
    let mut parts = tag.split('-');
    let lang = parts.next().unwrap_or("").to_ascii_lowercase();
    let region = parts
        .find(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|p| p.to_ascii_uppercase());

    if let Some(region) = region.as_deref()
        && POINT_REGIONS
            .iter()
            .any(|(l, r)| *l == lang.as_str() && *r == region)
    {
        return ".";
    }
    if COMMA_LANGUAGES.contains(&lang.as_str()) {
        ","
    } else {
        "."
    }
}
