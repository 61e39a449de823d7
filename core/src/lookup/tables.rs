/// Finite string mapping with a documented fallback.
pub struct LookupTable<V: 'static> {
    entries: &'static [(&'static str, V)],
    fallback: V,
}

impl<V: Copy + 'static> LookupTable<V> {
    pub const fn new(entries: &'static [(&'static str, V)], fallback: V) -> Self {
        Self { entries, fallback }
    }

    /// Exact match on the trimmed key, ignoring ASCII case.
    pub fn get(&self, key: &str) -> V {
        self.find(key).unwrap_or(self.fallback)
    }

    pub fn find(&self, key: &str) -> Option<V> {
        let key = key.trim();
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, value)| *value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

pub const GENERIC_GEOGRAPHIC_SCOPE: &str = "Regional spread with potential for cross-border transmission";

pub static GEOGRAPHIC_SCOPE: LookupTable<&str> = LookupTable::new(
    &[
        ("USA", "Metropolitan area with potential for interstate spread"),
        ("Japan", "Urban center with high population density"),
        ("China", "Multi-province spread with national implications"),
        ("India", "Densely populated region with inter-state travel exposure"),
        ("Brazil", "Urban and peri-urban zones with regional travel links"),
        ("UK", "Metropolitan area with international travel connections"),
        ("Germany", "Regional cluster within the Schengen travel area"),
        ("South Africa", "Provincial outbreak with cross-border migration routes"),
        ("Nigeria", "Urban hub with regional trade corridor exposure"),
        ("Australia", "State-level outbreak with controlled entry points"),
    ],
    GENERIC_GEOGRAPHIC_SCOPE,
);

pub const GENERIC_COMORBIDITIES: &[&str] = &[
    "Immunocompromised conditions",
    "Chronic diseases",
    "Advanced age",
];

const SARS_COV_2_COMORBIDITIES: &[&str] = &[
    "Cardiovascular disease",
    "Diabetes",
    "Chronic respiratory disease",
    "Obesity",
];
const H1N1_COMORBIDITIES: &[&str] = &[
    "Asthma",
    "Pregnancy",
    "Chronic lung disease",
    "Immunosuppression",
];
const H5N1_COMORBIDITIES: &[&str] = &[
    "Direct poultry exposure",
    "Chronic respiratory disease",
    "Immunosuppression",
];
const MERS_COMORBIDITIES: &[&str] = &[
    "Diabetes",
    "Chronic kidney disease",
    "Cardiac disease",
    "Chronic lung disease",
];
const EBOLA_COMORBIDITIES: &[&str] = &[
    "Malnutrition",
    "Delayed care access",
    "Co-infection with malaria",
];
const ZIKA_COMORBIDITIES: &[&str] = &["Pregnancy", "Prior flavivirus infection"];

pub static COMORBIDITY_FACTORS: LookupTable<&[&str]> = LookupTable::new(
    &[
        ("SARS-CoV-2", SARS_COV_2_COMORBIDITIES),
        ("H1N1", H1N1_COMORBIDITIES),
        ("H5N1", H5N1_COMORBIDITIES),
        ("MERS-CoV", MERS_COMORBIDITIES),
        ("Ebola", EBOLA_COMORBIDITIES),
        ("Zika", ZIKA_COMORBIDITIES),
    ],
    GENERIC_COMORBIDITIES,
);

pub const GENERIC_SEASONAL_PATTERN: &str = "Seasonal pattern under investigation";

pub static SEASONAL_PATTERN: LookupTable<&str> = LookupTable::new(
    &[
        ("SARS-CoV-2", "Year-round transmission with winter peaks"),
        ("H1N1", "Seasonal peaks during winter months"),
        ("H5N1", "Peaks aligned with migratory bird seasons"),
        ("MERS-CoV", "Sporadic with spring clusters"),
        ("Ebola", "No clear seasonal pattern"),
        ("Zika", "Peaks during rainy season with mosquito activity"),
    ],
    GENERIC_SEASONAL_PATTERN,
);

pub fn geographic_scope(country: &str) -> &'static str {
    GEOGRAPHIC_SCOPE.get(country)
}

pub fn comorbidity_factors(virus_name: &str) -> Vec<String> {
    COMORBIDITY_FACTORS
        .get(virus_name)
        .iter()
        .map(|factor| factor.to_string())
        .collect()
}

pub fn seasonal_pattern(virus_name: &str) -> &'static str {
    SEASONAL_PATTERN.get(virus_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_country_resolves_scope() {
        assert_eq!(
            geographic_scope("USA"),
            "Metropolitan area with potential for interstate spread"
        );
        assert_eq!(geographic_scope(" usa "), geographic_scope("USA"));
    }

    #[test]
    fn unmapped_keys_use_fallbacks() {
        assert_eq!(geographic_scope("Atlantis"), GENERIC_GEOGRAPHIC_SCOPE);
        assert_eq!(seasonal_pattern("X-99"), GENERIC_SEASONAL_PATTERN);
        assert_eq!(comorbidity_factors("X-99"), GENERIC_COMORBIDITIES);
    }

    #[test]
    fn table_keys_are_unique() {
        for keys in [
            GEOGRAPHIC_SCOPE.keys().collect::<Vec<_>>(),
            SEASONAL_PATTERN.keys().collect::<Vec<_>>(),
        ] {
            let mut lowered: Vec<String> = keys.iter().map(|k| k.to_ascii_lowercase()).collect();
            lowered.sort();
            lowered.dedup();
            assert_eq!(lowered.len(), keys.len());
        }
    }

    #[test]
    fn virus_tables_cover_the_same_viruses() {
        let seasonal: Vec<_> = SEASONAL_PATTERN.keys().collect();
        let comorbid: Vec<_> = COMORBIDITY_FACTORS.keys().collect();
        assert_eq!(seasonal, comorbid);
    }
}
