use std::collections::HashMap;

use crate::consts::SUN_NAME;

// One line of trivia per body, shown when the body is selected.
const FACTS: &[(&str, &str)] = &[
    ("Mercury", "Land mass: Low, Mostly made of: Rock, Metal"),
    (
        "Venus",
        "Land mass: High, Mostly made of: Carbon dioxide, Nitrogen",
    ),
    ("Earth", "Land mass: High, Mostly made of: Nitrogen, Oxygen"),
    (
        "Mars",
        "Land mass: Medium, Mostly made of: Carbon dioxide, Nitrogen",
    ),
    ("Jupiter", "Massive, Mostly made of: Hydrogen, Helium"),
    ("Saturn", "Large, Mostly made of: Hydrogen, Helium"),
    ("Uranus", "Ice giant, Mostly made of: Water, Methane, Ammonia"),
    ("Neptune", "Ice giant, Mostly made of: Water, Methane, Ammonia"),
    (SUN_NAME, "Solar System"),
];

/// Read-only lookup from body name to its descriptive caption.
#[derive(Debug, Clone)]
pub struct FactTable {
    entries: HashMap<&'static str, &'static str>,
}

impl FactTable {
    pub fn new() -> Self {
        Self::from_entries(FACTS.iter().copied())
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut map = HashMap::new();
        for (name, fact) in entries {
            assert!(!fact.is_empty(), "Empty fact for {}", name);
            let previous = map.insert(name, fact);
            assert!(previous.is_none(), "Duplicate fact for {}", name);
        }
        FactTable { entries: map }
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).copied()
    }

    /// Panics if `name` has no entry; scenes check coverage up front.
    pub fn lookup(&self, name: &str) -> &'static str {
        self.entries[name]
    }

    pub fn covers(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FactTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let facts = FactTable::new();
        assert_eq!(facts.len(), 9);
        assert_eq!(facts.lookup(SUN_NAME), "Solar System");
        assert_eq!(
            facts.lookup("Earth"),
            "Land mass: High, Mostly made of: Nitrogen, Oxygen"
        );
        assert_eq!(facts.get("Pluto"), None);
        assert!(!facts.covers("earth"));
    }

    #[test]
    #[should_panic]
    fn test_lookup_unknown() {
        FactTable::new().lookup("Pluto");
    }

    #[test]
    #[should_panic(expected = "Duplicate fact")]
    fn test_duplicate_entries() {
        FactTable::from_entries(vec![("A", "first"), ("A", "second")]);
    }
}
