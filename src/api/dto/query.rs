//! Query parameter DTOs.

use serde::Deserialize;
use validator::Validate;

/// Query parameters for `GET /api/owners`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnersQuery {
    /// Last name prefix; all owners are returned when absent.
    #[validate(length(max = 80))]
    pub last_name: Option<String>,
}
