use serde::{Deserialize, Serialize};
use tally_core::errors::{ErrorInfo, TallyError};
use tally_core::serde::from_yaml_slice;

/// Knobs controlling how much evidence a failing check renders.
///
/// The defaults reproduce the unbounded behaviour: array checks print every
/// compared element and containment checks preview the first three elements
/// of the searched range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticPolicy {
    /// Maximum number of elements rendered per sequence (and per matrix
    /// row) by array checks. `None` renders everything.
    #[serde(default)]
    pub max_rendered_elements: Option<usize>,
    /// Number of haystack elements previewed by containment checks.
    #[serde(default = "DiagnosticPolicy::default_preview_elements")]
    pub preview_elements: usize,
}

impl DiagnosticPolicy {
    const fn default_preview_elements() -> usize {
        3
    }

    /// Policy used when a sink does not provide one.
    pub const fn standard() -> Self {
        Self {
            max_rendered_elements: None,
            preview_elements: Self::default_preview_elements(),
        }
    }

    /// Decodes a policy from YAML, filling omitted fields with defaults.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self, TallyError> {
        let policy: Self = from_yaml_slice(bytes)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Rejects caps that would hide every element.
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.max_rendered_elements == Some(0) {
            return Err(TallyError::Check(
                ErrorInfo::new(
                    "zero-render-cap",
                    "max_rendered_elements must be at least 1 when set",
                )
                .with_hint("omit the field to render every element"),
            ));
        }
        Ok(())
    }

    /// Number of elements to render out of `count` under this policy.
    pub fn rendered_len(&self, count: usize) -> usize {
        self.max_rendered_elements
            .map_or(count, |cap| cap.min(count))
    }
}

impl Default for DiagnosticPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) static STANDARD_POLICY: DiagnosticPolicy = DiagnosticPolicy::standard();
