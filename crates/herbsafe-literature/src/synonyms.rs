//! Synonym table for fallback searches
//!
//! Maps an ingredient name to the alias queries tried, in order, when the
//! name itself has no hits. Keys are matched case-insensitively after
//! trimming.

use std::collections::HashMap;

/// Ordered alias lists keyed by ingredient name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl SynonymTable {
    /// Create an empty table (no fallback for any name)
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: Tinospora cordifolia and its common name Giloy
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register_pair("Tinospora cordifolia", "Giloy");
        table
    }

    /// Build a table from a name -> aliases map, on top of the built-in entries
    pub fn from_map<I, K, V>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let mut table = Self::with_defaults();
        for (name, aliases) in map {
            table.register(name.as_ref(), aliases);
        }
        table
    }

    /// Replace the aliases for `name`
    ///
    /// Blank aliases and aliases equal to the name are dropped, as are
    /// repeats.
    pub fn register<A>(&mut self, name: &str, aliases: A)
    where
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let key = normalize(name);
        let mut cleaned: Vec<String> = Vec::new();
        for alias in aliases {
            let alias: String = alias.into();
            let alias = alias.trim().to_string();
            if alias.is_empty() || normalize(&alias) == key {
                continue;
            }
            if !cleaned.iter().any(|a| normalize(a) == normalize(&alias)) {
                cleaned.push(alias);
            }
        }

        if cleaned.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, cleaned);
        }
    }

    /// Register `a` and `b` as aliases of each other
    pub fn register_pair(&mut self, a: &str, b: &str) {
        self.register(a, [b]);
        self.register(b, [a]);
    }

    /// Aliases to try for `name`, in order (empty if none)
    pub fn aliases_for(&self, name: &str) -> &[String] {
        self.entries
            .get(&normalize(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of names with aliases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
