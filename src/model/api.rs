use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::settings::SiteSettingsDto;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Response body of a successful settings write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettingsUpdatedDto {
    pub message: String,
    pub settings: SiteSettingsDto,
}
