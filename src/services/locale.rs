/// Regions whose catalog is requested in Spanish
const SPANISH_SPEAKING_REGIONS: &[&str] = &[
    "AR", "MX", "ES", "CO", "CL", "PE", "VE", "EC", "BO", "PY", "UY", "CR", "PA", "GT", "HN",
    "SV", "NI", "DO", "CU", "PR",
];

/// Region and language a request is served in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub region: String,
    pub language: String,
}

/// Fallbacks for requests that leave region or language out
#[derive(Debug, Clone)]
pub struct LocaleDefaults {
    pub region: String,
    pub language: String,
}

impl LocaleDefaults {
    pub fn new(region: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            language: language.into(),
        }
    }

    /// Fills in a missing region from the defaults and a missing language from
    /// the region
    pub fn resolve(&self, region: &str, language: &str) -> Locale {
        let region = match region.trim() {
            "" => self.region.clone(),
            given => given.to_uppercase(),
        };

        let language = match language.trim() {
            "" => self.language_for_region(&region),
            given => given.to_string(),
        };

        Locale { region, language }
    }

    fn language_for_region(&self, region: &str) -> String {
        if SPANISH_SPEAKING_REGIONS.contains(&region) {
            format!("es-{}", region)
        } else if region == "BR" {
            "pt-BR".to_string()
        } else {
            self.language.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> LocaleDefaults {
        LocaleDefaults::new("US", "en-US")
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let locale = defaults().resolve("es", "es-ES");
        assert_eq!(locale.region, "ES");
        assert_eq!(locale.language, "es-ES");
    }

    #[test]
    fn test_language_derived_from_spanish_region() {
        assert_eq!(defaults().resolve("MX", "").language, "es-MX");
        assert_eq!(defaults().resolve("ar", " ").language, "es-AR");
    }

    #[test]
    fn test_brazil_gets_portuguese() {
        assert_eq!(defaults().resolve("BR", "").language, "pt-BR");
    }

    #[test]
    fn test_everything_missing_uses_defaults() {
        assert_eq!(
            defaults().resolve("", ""),
            Locale {
                region: "US".to_string(),
                language: "en-US".to_string()
            }
        );
        assert_eq!(defaults().resolve("FR", "").language, "en-US");
    }
}
