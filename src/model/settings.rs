use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::forum::ForumCategoryDto;

/// Theme colors. Values are stored as given; no color syntax is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorsDto {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub featured_card: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinksDto {
    pub discord: String,
    pub twitter: String,
    pub youtube: String,
    pub twitch: String,
    pub steam: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscordIntegrationDto {
    #[serde(deserialize_with = "deserialize_truthy")]
    pub enabled: bool,
    pub client_id: String,
    pub client_secret: String,
    pub bot_token: String,
    pub guild_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SteamIntegrationDto {
    #[serde(deserialize_with = "deserialize_truthy")]
    pub enabled: bool,
    pub api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GoogleIntegrationDto {
    #[serde(deserialize_with = "deserialize_truthy")]
    pub enabled: bool,
    pub client_id: String,
    pub client_secret: String,
}

/// Every integration block, as returned to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct IntegrationsDto {
    pub discord: DiscordIntegrationDto,
    pub steam: SteamIntegrationDto,
    pub google: GoogleIntegrationDto,
}

/// Integration blocks in a write. Each provider is its own namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateIntegrationsDto {
    pub discord: Option<DiscordIntegrationDto>,
    pub steam: Option<SteamIntegrationDto>,
    pub google: Option<GoogleIntegrationDto>,
}

/// Outgoing mail parameters. A `port` of 0 means "not configured".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailSettingsDto {
    pub host: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: i32,
    pub user: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesDto {
    pub registration: bool,
    pub email_verification: bool,
    pub server_listing: bool,
    pub forum: bool,
    pub event_calendar: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoDto {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: String,
}

/// A gallery image. `id` is echoed back by clients so unchanged images keep their row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// The full nested settings document.
///
/// Every namespace is always populated; unset values appear as `""`, `false` or `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsDto {
    pub site_name: String,
    pub site_description: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
    pub colors: ColorsDto,
    pub gallery_images: Vec<GalleryImageDto>,
    pub social_links: SocialLinksDto,
    pub contact_email: String,
    pub integrations: IntegrationsDto,
    pub email_settings: EmailSettingsDto,
    pub features: FeaturesDto,
    pub seo: SeoDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forum_categories: Option<Vec<ForumCategoryDto>>,
}

/// A settings write.
///
/// Merge rule: a top-level key that is absent (or null) leaves the stored values
/// untouched. A namespace object that is present replaces *all* of its sub-fields,
/// so a sub-field missing from a present namespace is cleared to its default.
/// Send the whole namespace when changing any part of it.
///
/// A namespace of the wrong JSON type (for example `"colors": "red"`) rejects the
/// whole request with 400 Bad Request; nothing is written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteSettingsDto {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image: Option<String>,
    pub contact_email: Option<String>,
    pub colors: Option<ColorsDto>,
    /// When present, the gallery is reconciled to exactly this list.
    pub gallery_images: Option<Vec<GalleryImageDto>>,
    pub social_links: Option<SocialLinksDto>,
    pub integrations: Option<UpdateIntegrationsDto>,
    pub email_settings: Option<EmailSettingsDto>,
    pub features: Option<FeaturesDto>,
    pub seo: Option<SeoDto>,
}

#[cfg(test)]
impl From<SiteSettingsDto> for UpdateSiteSettingsDto {
    /// A write that stores exactly the given document. Forum categories are not part
    /// of a settings write and are dropped.
    fn from(dto: SiteSettingsDto) -> Self {
        Self {
            site_name: Some(dto.site_name),
            site_description: Some(dto.site_description),
            hero_title: Some(dto.hero_title),
            hero_subtitle: Some(dto.hero_subtitle),
            hero_image: Some(dto.hero_image),
            contact_email: Some(dto.contact_email),
            colors: Some(dto.colors),
            gallery_images: Some(dto.gallery_images),
            social_links: Some(dto.social_links),
            integrations: Some(UpdateIntegrationsDto {
                discord: Some(dto.integrations.discord),
                steam: Some(dto.integrations.steam),
                google: Some(dto.integrations.google),
            }),
            email_settings: Some(dto.email_settings),
            features: Some(dto.features),
            seo: Some(dto.seo),
        }
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

/// Accepts a port as a number or numeric string; anything outside 1..=65535 becomes 0.
fn deserialize_port<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let port = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    Ok(port
        .filter(|p| (1..=65535).contains(p))
        .and_then(|p| i32::try_from(p).ok())
        .unwrap_or(0))
}
