//! Dependency graph: adjacency built once per analysis call, cycle
//! detection, and blocked counts.

use std::collections::{HashMap, HashSet};

/// Immutable per-call view of the depends-on graph.
///
/// Built fresh from a normalized batch: keys in batch order, declared
/// dependency edges, and a precomputed blocked-count (in-degree from the
/// dependent side). Dependencies naming keys outside the batch are leaves.
#[derive(Debug)]
pub struct DependencyGraph {
    /// Batch-order keys; also the deterministic DFS root order.
    keys: Vec<String>,
    edges: HashMap<String, Vec<String>>,
    blocked: HashMap<String, usize>,
}

impl DependencyGraph {
    /// Build from `(key, declared dependencies)` pairs in batch order.
    ///
    /// A duplicate mention within one record counts once toward the
    /// blocked count; on duplicate keys the later record's edges win.
    pub fn build<'a>(entries: impl IntoIterator<Item = (&'a str, &'a [String])>) -> Self {
        let mut keys = Vec::new();
        let mut edges: HashMap<String, Vec<String>> = HashMap::new();
        let mut blocked: HashMap<String, usize> = HashMap::new();

        for (key, deps) in entries {
            if !edges.contains_key(key) {
                keys.push(key.to_string());
            }
            edges.insert(key.to_string(), deps.to_vec());

            let mut seen: HashSet<&str> = HashSet::new();
            for dep in deps {
                if seen.insert(dep.as_str()) {
                    *blocked.entry(dep.clone()).or_insert(0) += 1;
                }
            }
        }

        Self { keys, edges, blocked }
    }

    /// How many other records declare `key` as a dependency.
    pub fn blocked_count(&self, key: &str) -> usize {
        self.blocked.get(key).copied().unwrap_or(0)
    }

    /// Find the first cycle in batch-root order, if any.
    ///
    /// Iterative DFS with an explicit stack so adversarially deep chains
    /// cannot blow the call stack. Returns the cycle chain including the
    /// repeated node, e.g. `"a -> b -> a"`.
    pub fn detect_cycle(&self) -> Option<String> {
        let mut visited: HashSet<&str> = HashSet::new();

        for root in &self.keys {
            if visited.contains(root.as_str()) {
                continue;
            }
            if let Some(chain) = self.dfs_from(root, &mut visited) {
                return Some(chain.join(" -> "));
            }
        }

        None
    }

    fn dfs_from<'a>(
        &'a self,
        root: &'a str,
        visited: &mut HashSet<&'a str>,
    ) -> Option<Vec<&'a str>> {
        // Frame: node plus the index of the next child edge to follow.
        let mut stack: Vec<(&'a str, usize)> = vec![(root, 0)];
        let mut path: Vec<&str> = vec![root];
        let mut on_path: HashSet<&str> = HashSet::from([root]);
        visited.insert(root);

        while let Some((node, child_idx)) = stack.last_mut() {
            let deps = self.edges.get(*node).map(Vec::as_slice).unwrap_or(&[]);

            let Some(dep) = deps.get(*child_idx) else {
                // Node exhausted; backtrack.
                stack.pop();
                if let Some(done) = path.pop() {
                    on_path.remove(done);
                }
                continue;
            };
            *child_idx += 1;

            if on_path.contains(dep.as_str()) {
                let mut chain = path.clone();
                chain.push(dep.as_str());
                return Some(chain);
            }
            if visited.contains(dep.as_str()) {
                continue;
            }

            visited.insert(dep.as_str());
            on_path.insert(dep.as_str());
            path.push(dep.as_str());
            stack.push((dep.as_str(), 0));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(&str, &[&str])]) -> DependencyGraph {
        let owned: Vec<(String, Vec<String>)> = entries
            .iter()
            .map(|(k, deps)| {
                (
                    k.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        DependencyGraph::build(
            owned
                .iter()
                .map(|(k, deps)| (k.as_str(), deps.as_slice())),
        )
    }

    #[test]
    fn test_no_cycle_in_chain() {
        let g = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
        assert_eq!(g.detect_cycle(), None);
    }

    #[test]
    fn test_two_node_cycle() {
        let g = graph(&[("a", &["b"]), ("b", &["a"])]);
        assert_eq!(g.detect_cycle(), Some("a -> b -> a".to_string()));
    }

    #[test]
    fn test_self_cycle() {
        let g = graph(&[("a", &["a"])]);
        assert_eq!(g.detect_cycle(), Some("a -> a".to_string()));
    }

    #[test]
    fn test_three_node_cycle_reported_from_first_root() {
        let g = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
        assert_eq!(g.detect_cycle(), Some("a -> b -> c -> a".to_string()));
    }

    #[test]
    fn test_diamond_share_is_not_a_cycle() {
        // a depends on b and c, both depend on d.
        let g = graph(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"]), ("d", &[])]);
        assert_eq!(g.detect_cycle(), None);
    }

    #[test]
    fn test_dangling_dependency_is_leaf() {
        let g = graph(&[("a", &["ghost"])]);
        assert_eq!(g.detect_cycle(), None);
        assert_eq!(g.blocked_count("ghost"), 1);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let names: Vec<String> = (0..10_000).map(|i| format!("t{i}")).collect();
        let entries: Vec<(String, Vec<String>)> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let deps = if i + 1 < names.len() {
                    vec![names[i + 1].clone()]
                } else {
                    vec![]
                };
                (name.clone(), deps)
            })
            .collect();
        let g = DependencyGraph::build(
            entries.iter().map(|(k, d)| (k.as_str(), d.as_slice())),
        );
        assert_eq!(g.detect_cycle(), None);
    }

    #[test]
    fn test_blocked_count_dedupes_within_record() {
        let g = graph(&[("a", &["c", "c"]), ("b", &["c"]), ("c", &[])]);
        assert_eq!(g.blocked_count("c"), 2);
        assert_eq!(g.blocked_count("a"), 0);
    }
}
