// Copyright 2025 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Binary states: named boolean flags with multiple contributing sources.
//!
//! See [`BinaryStateful`] for the per-widget registry, and
//! [`WidgetMut`](crate::core::WidgetMut) for the operations which propagate
//! through the widget tree.

mod binary_state;
mod binary_stateful;
mod propagation;

pub use binary_state::BinaryState;
pub use binary_stateful::{BinaryStateful, SOURCE_ID_IMPOSED, is_imposed_source};

/// An invalid source id was passed to a behavior.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source id is empty.
    #[error("source id must not be empty")]
    Empty,
    /// The source id collides with the reserved imposed source.
    #[error("source id '{0}' is reserved for imposed state")]
    Reserved(String),
}

/// Check that `source_id` can be used as a caller-chosen source.
pub fn validate_source(source_id: &str) -> Result<(), SourceError> {
    if source_id.is_empty() {
        return Err(SourceError::Empty);
    }
    if is_imposed_source(source_id) {
        return Err(SourceError::Reserved(source_id.to_string()));
    }
    Ok(())
}
