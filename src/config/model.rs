//! Serde data structures for the endpoint configuration file.
//!
//! Contains [`Config`] (the root), [`Snippets`] and [`FullEndpoints`].
//! Every list defaults to empty so a partial file still loads. Tables
//! and keys other than these are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub snippets: Snippets,

    #[serde(default)]
    pub full: FullEndpoints,
}

/// Partial path fragments combined into candidate endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Snippets {
    #[serde(default)]
    pub versions: Vec<String>,

    #[serde(default)]
    pub resources: Vec<String>,
}

/// Fully-formed endpoint paths probed as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FullEndpoints {
    #[serde(default)]
    pub known: Vec<String>,
}

impl Config {
    /// Number of `version + resource` candidates the generator will yield.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        let versions = &self.snippets.versions;
        let resources = &self.snippets.resources;
        let empty_versions = versions.iter().filter(|v| v.is_empty()).count();
        let empty_resources = resources.iter().filter(|r| r.is_empty()).count();
        versions.len() * resources.len() - empty_versions * empty_resources
    }

    /// Total number of probes a scan issues.
    #[must_use]
    pub fn total_probes(&self) -> usize {
        self.combination_count() + self.full.known.len()
    }
}
