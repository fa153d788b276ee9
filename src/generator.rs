//! Candidate path generation from version and resource snippets.
//!
//! [`generate_combinations`] walks `versions × resources` in row-major
//! order (versions outer, resources inner) and concatenates each pair
//! with no separator. The pair where both sides are empty is skipped.
//! The iterator borrows the config and builds each string on demand, so
//! calling it again replays the same sequence.

use crate::config::model::Config;

#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    versions: &'a [String],
    resources: &'a [String],
    version_idx: usize,
    resource_idx: usize,
}

#[must_use]
pub fn generate_combinations(config: &Config) -> Combinations<'_> {
    Combinations {
        versions: &config.snippets.versions,
        resources: &config.snippets.resources,
        version_idx: 0,
        resource_idx: 0,
    }
}

impl Iterator for Combinations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.resources.is_empty() {
            return None;
        }

        while let Some(version) = self.versions.get(self.version_idx) {
            let resource = &self.resources[self.resource_idx];

            self.resource_idx += 1;
            if self.resource_idx == self.resources.len() {
                self.resource_idx = 0;
                self.version_idx += 1;
            }

            if version.is_empty() && resource.is_empty() {
                continue;
            }
            return Some(format!("{version}{resource}"));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::Snippets;

    fn config(versions: &[&str], resources: &[&str]) -> Config {
        Config {
            snippets: Snippets {
                versions: versions.iter().map(|s| (*s).to_string()).collect(),
                resources: resources.iter().map(|s| (*s).to_string()).collect(),
            },
            ..Config::default()
        }
    }

    #[test]
    fn skips_only_the_empty_pair() {
        let config = config(&["/v1", ""], &["/users", ""]);
        let combos: Vec<String> = generate_combinations(&config).collect();
        assert_eq!(combos, vec!["/v1/users", "/v1", "/users"]);
    }

    #[test]
    fn row_major_order() {
        let config = config(&["/v1", "/v2"], &["/a", "/b", "/c"]);
        let combos: Vec<String> = generate_combinations(&config).collect();
        assert_eq!(
            combos,
            vec!["/v1/a", "/v1/b", "/v1/c", "/v2/a", "/v2/b", "/v2/c"]
        );
    }

    #[test]
    fn no_separator_is_inserted() {
        let config = config(&["/api/v1/"], &["users"]);
        let combos: Vec<String> = generate_combinations(&config).collect();
        assert_eq!(combos, vec!["/api/v1/users"]);
    }

    #[test]
    fn empty_side_yields_nothing() {
        assert_eq!(generate_combinations(&config(&[], &["/users"])).count(), 0);
        assert_eq!(generate_combinations(&config(&["/v1"], &[])).count(), 0);
        assert_eq!(generate_combinations(&config(&[""], &[""])).count(), 0);
    }

    #[test]
    fn duplicates_are_kept() {
        let config = config(&["/v1", "/v1"], &["/x"]);
        let combos: Vec<String> = generate_combinations(&config).collect();
        assert_eq!(combos, vec!["/v1/x", "/v1/x"]);
    }

    #[test]
    fn restartable_with_same_order() {
        let config = config(&["", "/v1", "/v2"], &["", "/a"]);
        let first: Vec<String> = generate_combinations(&config).collect();
        let second: Vec<String> = generate_combinations(&config).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["/a", "/v1", "/v1/a", "/v2", "/v2/a"]);
        assert_eq!(first.len(), config.combination_count());
    }

    #[test]
    fn every_non_empty_pair_appears_once() {
        let versions = ["", "/v1", "/v2", ""];
        let resources = ["/a", "", "/b"];
        let config = config(&versions, &resources);
        let combos: Vec<String> = generate_combinations(&config).collect();

        let mut expected = Vec::new();
        for v in versions {
            for r in resources {
                if !(v.is_empty() && r.is_empty()) {
                    expected.push(format!("{v}{r}"));
                }
            }
        }
        assert_eq!(combos, expected);
    }

    #[test]
    fn lazy_iteration_can_stop_early() {
        let config = config(&["/v1", "/v2"], &["/a", "/b"]);
        let mut combos = generate_combinations(&config);
        assert_eq!(combos.next().as_deref(), Some("/v1/a"));
        assert_eq!(combos.next().as_deref(), Some("/v1/b"));
    }
}
