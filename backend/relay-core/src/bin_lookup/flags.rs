use models::DEFAULT_FLAG;

use std::collections::HashMap;

const BUILTIN_FLAGS: &[(&str, &str)] = &[
    ("FRANCE", "🇫🇷"),
    ("UNITED STATES", "🇺🇸"),
    ("BRAZIL", "🇧🇷"),
    ("NAMIBIA", "🇳🇦"),
    ("INDIA", "🇮🇳"),
    ("GERMANY", "🇩🇪"),
    ("THAILAND", "🇹🇭"),
    ("MEXICO", "🇲🇽"),
    ("RUSSIA", "🇷🇺"),
];

/// Country name to emoji flag mapping.
///
/// Built once at startup and shared read-only behind an `Arc`. Keys are upper-case.
#[derive(Debug, Clone)]
pub struct FlagTable {
    flags: HashMap<String, String>,
}

impl FlagTable {
    pub fn builtin() -> Self {
        let flags = BUILTIN_FLAGS
            .iter()
            .map(|(country, flag)| (country.to_string(), flag.to_string()))
            .collect();

        Self { flags }
    }

    /// Add or replace entries. Country names are upper-cased.
    pub fn with_extra(mut self, extra: &HashMap<String, String>) -> Self {
        for (country, flag) in extra {
            self.flags
                .insert(country.trim().to_uppercase(), flag.trim().to_string());
        }
        self
    }

    /// Flag for an upper-case country name, or the white flag.
    pub fn lookup(&self, country: &str) -> &str {
        self.flags
            .get(country)
            .map(String::as_str)
            .unwrap_or(DEFAULT_FLAG)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl Default for FlagTable {
    fn default() -> Self {
        Self::builtin()
    }
}
