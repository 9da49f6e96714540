use super::pattern::matches_ignore_case;
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, BTreeSet};

/// Rule set selecting services by pattern, explicit include and exclude.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GroupDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patterns: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub includes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excludes: Vec<String>,
}

/// Contents of `container-groups.yml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GroupConfiguration {
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: BTreeMap<String, GroupDefinition>,
}

impl GroupConfiguration {
    pub fn get(&self, name: &str) -> Option<&GroupDefinition> {
        self.groups.get(name)
    }

    /// Groups in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &GroupDefinition)> {
        self.groups.iter()
    }
}

impl GroupDefinition {
    /// Selects the members of `inventory` this group refers to.
    ///
    /// Patterns are matched case-insensitively, includes must name an
    /// inventory entry exactly, and excludes are applied last so they always
    /// win. The result is sorted and free of duplicates.
    pub fn resolve<S: AsRef<str>>(&self, inventory: &[S]) -> Vec<String> {
        let names: Vec<&str> = inventory.iter().map(|name| name.as_ref()).collect();
        let mut matched: BTreeSet<&str> = BTreeSet::new();

        for &candidate in &names {
            if self
                .patterns
                .iter()
                .any(|pattern| matches_ignore_case(candidate, pattern))
            {
                matched.insert(candidate);
            }
        }

        for include in &self.includes {
            if let Some(&candidate) = names.iter().find(|name| **name == include.as_str()) {
                matched.insert(candidate);
            }
        }

        for exclude in &self.excludes {
            matched.remove(exclude.as_str());
        }

        matched.into_iter().map(str::to_string).collect()
    }
}

/// Treats an explicit YAML `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
