//! Composer name normalization
//!
//! Maps alternate spellings and abbreviations of a composer's name to one
//! canonical form. The table is plain configuration: built once, then only
//! read, so it can be shared across threads without synchronization.

use super::SearchError;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone)]
struct ComposerEntry {
    canonical: String,
    canonical_lower: String,
    aliases: BTreeSet<String>,
}

/// Ordered mapping from canonical composer names to their known aliases.
///
/// Lookup walks entries in insertion order, first match wins. Alias sets of
/// different composers must be disjoint, `from_entries` refuses tables
/// where they overlap.
#[derive(Debug, Clone, Default)]
pub struct ComposerAliasTable {
    entries: Vec<ComposerEntry>,
}

const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    (
        "Ludwig van Beethoven",
        &["beethoven", "l.v. beethoven", "van beethoven"],
    ),
    (
        "Wolfgang Amadeus Mozart",
        &["mozart", "w.a. mozart", "amadeus"],
    ),
    ("Johann Sebastian Bach", &["bach", "j.s. bach", "js bach"]),
    (
        "Frédéric Chopin",
        &["chopin", "f. chopin", "frederic chopin"],
    ),
    ("Franz Schubert", &["schubert", "f. schubert"]),
    ("Claude Debussy", &["debussy", "c. debussy"]),
    (
        "Pyotr Ilyich Tchaikovsky",
        &["tchaikovsky", "tchaikowsky", "p.i. tchaikovsky"],
    ),
];

impl ComposerAliasTable {
    /// An empty table: every query is returned unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default alias table shipped with the crate.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ALIASES
            .iter()
            .map(|(canonical, aliases)| ComposerEntry {
                canonical: canonical.to_string(),
                canonical_lower: canonical.to_lowercase(),
                aliases: aliases.iter().map(|a| a.to_lowercase()).collect(),
            })
            .collect();
        ComposerAliasTable { entries }
    }

    /// Builds a table from `(canonical, aliases)` pairs, keeping their order.
    ///
    /// Aliases are compared case-insensitively. Fails if a canonical name is
    /// repeated or if any alias (or canonical name) resolves to more than one
    /// composer.
    pub fn from_entries<I, C, A, S>(entries: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = (C, A)>,
        C: Into<String>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = ComposerAliasTable::new();
        // lowercase name or alias -> canonical name that owns it
        let mut owners: HashMap<String, String> = HashMap::new();

        for (canonical, aliases) in entries {
            let canonical: String = canonical.into();
            let canonical_lower = canonical.trim().to_lowercase();
            if canonical_lower.is_empty() {
                return Err(SearchError::AliasConflict(
                    "canonical composer name is empty".to_string(),
                ));
            }
            if table
                .entries
                .iter()
                .any(|e| e.canonical_lower == canonical_lower)
            {
                return Err(SearchError::AliasConflict(format!(
                    "composer \"{canonical}\" is listed more than once"
                )));
            }

            let aliases: BTreeSet<String> = aliases
                .into_iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect();

            for name in aliases.iter().chain(std::iter::once(&canonical_lower)) {
                if let Some(owner) = owners.get(name) {
                    if *owner != canonical {
                        return Err(SearchError::AliasConflict(format!(
                            "\"{name}\" refers to both \"{owner}\" and \"{canonical}\""
                        )));
                    }
                }
                owners.insert(name.clone(), canonical.clone());
            }

            table.entries.push(ComposerEntry {
                canonical,
                canonical_lower,
                aliases,
            });
        }

        Ok(table)
    }

    /// Resolves a query to a canonical composer name.
    ///
    /// Returns the query unchanged when it is neither a known alias nor a
    /// canonical name.
    pub fn normalize<'a>(&'a self, query: &'a str) -> &'a str {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.canonical_lower == query_lower || e.aliases.contains(&query_lower))
            .map(|e| e.canonical.as_str())
            .unwrap_or(query)
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.canonical.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
