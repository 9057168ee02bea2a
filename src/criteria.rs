//! Match criteria: which elements start a new record.
//!
//! Criteria are resolved once from the raw options and are read-only
//! afterwards, so the matching dimensions (depth filter, name-set filter)
//! cannot drift apart mid-scan.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, SplitError};

/// A qualified element name: optional namespace URI plus local name.
///
/// Equality is exact on both fields. An absent namespace matches only an
/// absent namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI, if the element is in a namespace.
    pub namespace: Option<String>,
    /// Local part of the element name.
    pub local: String,
}

impl QName {
    /// Create a name with no namespace.
    #[must_use]
    pub fn unqualified(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    /// Create a namespaced name.
    #[must_use]
    pub fn qualified(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }
}

impl fmt::Display for QName {
    /// Clark notation: `{namespace}local`, or just `local` without namespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

/// Resolved, immutable matching configuration.
///
/// A record-opening element must sit at `required_depth` (when configured)
/// and carry one of `candidate_names` (when non-empty). Depth gates first;
/// names only restrict further at an admitted depth.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    /// Nesting depth at which records start, with the root's direct
    /// children at depth 1.
    pub required_depth: Option<usize>,
    /// Qualified names eligible to start a record.
    pub candidate_names: HashSet<QName>,
}

impl MatchCriteria {
    /// Resolve criteria from the raw configuration surface.
    ///
    /// The candidate set is the union of the single element/namespace pair
    /// (when a non-empty local name was supplied) and every pair from the
    /// comma-separated alternating namespace,local-name list. An empty
    /// namespace half means "no namespace".
    ///
    /// When the resulting set is empty and no depth was supplied, the depth
    /// defaults to 1 so the engine always has at least one active matching
    /// dimension.
    ///
    /// # Errors
    /// * [`SplitError::UnpairedNamespaceElement`] if the list has an odd
    ///   number of entries
    /// * [`SplitError::InvalidDepth`] if a depth of 0 was supplied
    pub fn resolve(
        element: Option<&str>,
        namespace: Option<&str>,
        namespace_element_list: Option<&str>,
        depth: Option<usize>,
    ) -> Result<Self> {
        let mut candidate_names = HashSet::new();

        if let Some(local) = element.filter(|e| !e.is_empty()) {
            let ns = namespace.filter(|n| !n.is_empty()).map(String::from);
            candidate_names.insert(QName {
                namespace: ns,
                local: local.to_string(),
            });
        }

        if let Some(list) = namespace_element_list.filter(|l| !l.is_empty()) {
            let entries: Vec<&str> = list.split(',').collect();
            if entries.len() % 2 != 0 {
                return Err(SplitError::UnpairedNamespaceElement(list.to_string()));
            }
            for pair in entries.chunks(2) {
                let ns = (!pair[0].is_empty()).then(|| pair[0].to_string());
                candidate_names.insert(QName {
                    namespace: ns,
                    local: pair[1].to_string(),
                });
            }
        }

        let required_depth = match depth {
            Some(0) => return Err(SplitError::InvalidDepth(0)),
            Some(d) => Some(d),
            None if candidate_names.is_empty() => Some(1),
            None => None,
        };

        Ok(Self {
            required_depth,
            candidate_names,
        })
    }

    /// Decide whether an element-open event starts a new record.
    ///
    /// `depth` is the element's own depth (the root's direct children are
    /// at depth 1).
    #[must_use]
    pub fn matches(&self, name: &QName, depth: usize) -> bool {
        if let Some(required) = self.required_depth {
            if depth != required {
                return false;
            }
        }
        if !self.candidate_names.is_empty() {
            return self.candidate_names.contains(name);
        }
        // No names configured: resolution guarantees a depth was, and it
        // passed above. Both-empty criteria never match.
        self.required_depth.is_some()
    }
}
