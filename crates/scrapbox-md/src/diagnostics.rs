//! Non-fatal conversion warnings

/// Something the converter skipped while still producing output
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    #[error("Unknown block type: \"{kind}\"")]
    UnsupportedBlock { kind: String },

    #[error("Unsupported node type: \"{kind}\"")]
    UnsupportedNode { kind: String },

    #[error("Invalid table \"{file_name}\": no rows")]
    EmptyTable { file_name: String },
}

/// Collects warnings in the order they occur.
///
/// Each warning is also reported through `tracing` at warn level.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::warn!(%warning, "skipped during markdown conversion");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
