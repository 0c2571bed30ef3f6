//! Materialized-path handling for collection genealogies.
//!
//! A genealogy is stored as `/`-joined segments ending with the node's own
//! segment. Top-level nodes are rooted: their text starts with `/`, which
//! parses to an empty first segment. Keeping that marker as a segment lets
//! `to_string()` reproduce the stored text exactly.

use crate::config::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered segments of a materialized path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Genealogy {
    segments: Vec<String>,
}

impl Genealogy {
    /// Parse stored genealogy text. `None` and `""` both mean no segments.
    pub fn parse(text: Option<&str>) -> Self {
        match text {
            None | Some("") => Self::default(),
            Some(text) => Self {
                segments: text
                    .split(CatalogConfig::GENEALOGY_SEPARATOR)
                    .map(str::to_string)
                    .collect(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The node's own path component, if it has one.
    pub fn own_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Everything above the node's own segment.
    ///
    /// A prefix holding only the root marker is reported as empty.
    pub fn parent_prefix(&self) -> Genealogy {
        let prefix = match self.segments.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        };
        if prefix.iter().all(String::is_empty) {
            return Self::default();
        }
        Self {
            segments: prefix.to_vec(),
        }
    }

    /// Append one segment beneath this genealogy.
    pub fn child(&self, segment: &str) -> Genealogy {
        let mut segments = if self.segments.is_empty() {
            vec![String::new()]
        } else {
            self.segments.clone()
        };
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Genealogy a node ends up with once re-parented under `parent`.
    ///
    /// The node keeps its own final segment. A node with no genealogy has no
    /// segment to carry, so it takes the parent's genealogy verbatim.
    pub fn relocated_under(node: &Genealogy, parent: &Genealogy) -> Genealogy {
        match node.own_segment() {
            Some(own) => parent.child(own),
            None => parent.clone(),
        }
    }

    /// Display form used in reports: `None` when there are no segments.
    pub fn display_or_absent(&self) -> String {
        if self.is_empty() {
            crate::config::ReportConfig::ABSENT_GENEALOGY.to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Genealogy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{}", CatalogConfig::GENEALOGY_SEPARATOR)?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl From<String> for Genealogy {
    fn from(text: String) -> Self {
        Genealogy::parse(Some(&text))
    }
}

impl From<Genealogy> for String {
    fn from(genealogy: Genealogy) -> Self {
        genealogy.to_string()
    }
}
