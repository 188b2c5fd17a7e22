use serde::{Deserialize, Serialize};
use tally_core::errors::TallyError;
use tally_core::serde::from_yaml_slice;

/// Order of suites in a merged report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuiteOrder {
    /// Order in which each suite name was first handed to the merger.
    #[default]
    FirstSeen,
    /// Lexicographic by suite name, independent of arrival order.
    SuiteName,
}

/// Policy controlling the merge stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergePolicy {
    /// Suite ordering in the merged report.
    #[serde(default)]
    pub order: SuiteOrder,
    /// Concatenate suites that share a name. When disabled a repeated name
    /// is a merge error.
    #[serde(default = "MergePolicy::default_combine_duplicates")]
    pub combine_duplicates: bool,
}

impl MergePolicy {
    const fn default_combine_duplicates() -> bool {
        true
    }

    /// Decodes a policy from YAML, filling omitted fields with defaults.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self, TallyError> {
        from_yaml_slice(bytes)
    }
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            order: SuiteOrder::default(),
            combine_duplicates: Self::default_combine_duplicates(),
        }
    }
}
