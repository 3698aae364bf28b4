use std::collections::BTreeMap;

/// Reduce text to lower-case ASCII letters and digits
///
/// Separators are removed rather than collapsed, so `lapu-lapu`,
/// `lapu lapu` and `lapulapu` all normalize to `lapulapu`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// A named set of aliases for one place, stored normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    pub name: String,
    aliases: Vec<String>,
}

impl SynonymGroup {
    pub fn new<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = normalize(alias.as_ref());
            if !alias.is_empty() && !normalized.contains(&alias) {
                normalized.push(alias);
            }
        }

        Self { name: name.into(), aliases: normalized }
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn has_alias(&self, normalized_keyword: &str) -> bool {
        self.aliases.iter().any(|alias| alias == normalized_keyword)
    }

    fn mentioned_in(&self, normalized_address: &str) -> bool {
        self.aliases.iter().any(|alias| normalized_address.contains(alias.as_str()))
    }
}

/// Read-only synonym table, built once at startup and shared by reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
}

impl SynonymTable {
    pub fn new(groups: Vec<SynonymGroup>) -> Self {
        Self { groups }
    }

    /// Build from a `group -> aliases` map, as found in configuration
    pub fn from_map(map: &BTreeMap<String, Vec<String>>) -> Self {
        Self::new(
            map.iter()
                .map(|(name, aliases)| SynonymGroup::new(name.clone(), aliases))
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    /// Default groups for the Metro Cebu area
    pub fn default_groups() -> BTreeMap<String, Vec<String>> {
        let mut map = BTreeMap::new();
        map.insert(
            "lapulapu".to_string(),
            vec!["lapu-lapu", "lapu lapu", "lapulapu", "lapulapu city"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        map.insert(
            "airport".to_string(),
            vec!["airport", "opon", "mcac", "mactan"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        map
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::from_map(&Self::default_groups())
    }
}

/// Check whether a free-text keyword refers to an address
///
/// A direct normalized substring match wins first. Otherwise, when the
/// keyword is an alias of some group, the address matches if it mentions
/// any alias of that group.
pub fn keyword_matches_address(keyword: &str, address: &str, synonyms: &SynonymTable) -> bool {
    let keyword = normalize(keyword);
    let address = normalize(address);

    if address.contains(keyword.as_str()) {
        return true;
    }

    synonyms
        .groups
        .iter()
        .any(|group| group.has_alias(&keyword) && group.mentioned_in(&address))
}
