//! Health engine error types

use rig_types::{ComponentId, ComponentValidationError};
use thiserror::Error;

/// Health engine errors
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("component not found: {0}")]
    ComponentNotFound(ComponentId),

    #[error("invalid component definition: {0}")]
    InvalidComponent(#[from] ComponentValidationError),

    #[error("metrics source failure for {component_id}: {reason}")]
    SourceFailure {
        component_id: ComponentId,
        reason: String,
    },
}

/// Result type for health engine operations
pub type HealthResult<T> = std::result::Result<T, HealthError>;
