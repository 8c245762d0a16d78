//! Unused-key guard.
//!
//! "Consumed pointers" are JSON Pointer prefixes that code actually reads. A
//! leaf under any consumed prefix is consumed; every other leaf is reported
//! as unused. Callers pick whether unused keys warn or fail.
//!
//! "/catalog/path" consumes itself but not "/catalog/paths".

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusedKeyReport {
    /// Consumed JSON-pointer prefixes used for this analysis (sorted, unique)
    pub consumed_prefixes: Vec<String>,
    /// Unused leaf pointers (sorted)
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// Every pointer [`crate::DineConfig`] reads. Keep in sync with `settings.rs`.
pub fn consumed_pointers() -> &'static [&'static str] {
    &[
        "/venue/name",
        "/venue/table_count",
        "/kitchen/serving_overhead_minutes",
        "/countdown/tick_millis",
        "/catalog/path",
    ]
}

/// How many unused pointers a `Fail` error names.
const ERROR_PREVIEW: usize = 12;

/// Produce an unused-key report.
/// `Fail` returns an error when unused keys exist; `Warn` always returns the report.
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<UnusedKeyReport> {
    let consumed: BTreeSet<&str> = consumed_pointers().iter().copied().collect();

    let unused: BTreeSet<String> = leaf_pointers(config_json)
        .into_iter()
        .map(|p| if p.is_empty() { "/".to_string() } else { p })
        .filter(|leaf| !consumed.iter().any(|c| is_prefix_pointer(c, leaf)))
        .collect();

    let report = UnusedKeyReport {
        consumed_prefixes: consumed.into_iter().map(String::from).collect(),
        unused_leaf_pointers: unused.into_iter().collect(),
    };

    if policy == UnusedKeyPolicy::Fail && !report.is_clean() {
        let shown: Vec<&str> = report
            .unused_leaf_pointers
            .iter()
            .take(ERROR_PREVIEW)
            .map(String::as_str)
            .collect();
        bail!(
            "CONFIG_UNUSED_KEYS: {} config key(s) are not read by the session: {}",
            report.unused_leaf_pointers.len(),
            shown.join(", ")
        );
    }

    Ok(report)
}

/// `prefix` equals `leaf` or is a whole-segment ancestor of it.
fn is_prefix_pointer(prefix: &str, leaf: &str) -> bool {
    leaf.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// JSON pointers of every scalar in `v`, relative to `v` (the root itself is "").
fn leaf_pointers(v: &Value) -> Vec<String> {
    match v {
        Value::Object(map) => map
            .iter()
            .flat_map(|(key, child)| {
                let token = key.replace('~', "~0").replace('/', "~1");
                leaf_pointers(child)
                    .into_iter()
                    .map(move |rest| format!("/{token}{rest}"))
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .flat_map(|(i, child)| {
                leaf_pointers(child)
                    .into_iter()
                    .map(move |rest| format!("/{i}{rest}"))
            })
            .collect(),
        _ => vec![String::new()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_requires_segment_boundary() {
        assert!(is_prefix_pointer("/catalog/path", "/catalog/path"));
        assert!(is_prefix_pointer("/venue", "/venue/name"));
        assert!(!is_prefix_pointer("/catalog/path", "/catalog/paths"));
    }

    #[test]
    fn pointer_tokens_are_escaped() {
        let v = serde_json::json!({"a/b": {"c~d": 1}});
        assert_eq!(leaf_pointers(&v), vec!["/a~1b/c~0d".to_string()]);
    }

    #[test]
    fn arrays_are_indexed_and_empty_containers_have_no_leaves() {
        let v = serde_json::json!({"tables": [4, {"seats": 2}], "empty": {}, "none": []});
        assert_eq!(
            leaf_pointers(&v),
            vec!["/tables/0".to_string(), "/tables/1/seats".to_string()]
        );
    }

    #[test]
    fn scalar_root_reports_as_slash() {
        let report = report_unused_keys(&serde_json::json!(5), UnusedKeyPolicy::Warn).unwrap();
        assert_eq!(report.unused_leaf_pointers, vec!["/".to_string()]);
    }
}
