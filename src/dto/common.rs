use serde::Serialize;
use utoipa::ToSchema;

/// Generic acknowledgement body for mutations with no richer payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    /// Always `true`; failures are reported through the error body instead.
    pub success: bool,
}

impl SuccessResponse {
    /// Acknowledge a successfully applied mutation.
    pub fn ok() -> Self {
        Self { success: true }
    }
}
