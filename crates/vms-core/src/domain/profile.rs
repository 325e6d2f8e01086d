use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free skill tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(Vec<String>);

impl Skills {
    /// Build from a fetched list, dropping blanks and repeats.
    pub fn from_list(list: impl IntoIterator<Item = String>) -> Self {
        let mut skills = Self::default();
        for skill in list {
            skills.add(&skill);
        }
        skills
    }

    /// Add a tag. Input is trimmed; blank or already-present tags are ignored.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.contains(skill) {
            return false;
        }
        self.0.push(skill.to_string());
        true
    }

    /// Remove a tag by value. Returns whether it was present.
    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|s| s != skill);
        self.0.len() != before
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_dedupes() {
        let mut skills = Skills::default();
        assert!(skills.add("  First Aid "));
        assert!(!skills.add("First Aid"));
        assert!(!skills.add("   "));
        assert!(skills.add("Driving"));
        assert_eq!(skills.as_slice(), ["First Aid", "Driving"]);
    }

    #[test]
    fn test_remove() {
        let mut skills = Skills::from_list(vec!["Driving".into(), "Driving".into()]);
        assert_eq!(skills.len(), 1);
        assert!(skills.remove("Driving"));
        assert!(!skills.remove("Driving"));
        assert!(skills.is_empty());
    }
}
