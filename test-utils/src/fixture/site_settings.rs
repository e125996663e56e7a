//! Site settings fixtures for creating in-memory settings rows.
//!
//! Every column is populated so that round-trip tests cover all namespaces.

use chrono::{TimeZone, Utc};
use entity::site_settings;

/// Primary key of the singleton settings row.
pub const SETTINGS_ID: i32 = 1;

/// Default test site name.
pub const DEFAULT_SITE_NAME: &str = "Test Portal";

/// Default primary theme color.
pub const DEFAULT_COLOR_PRIMARY: &str = "#3b82f6";

/// Default SMTP port.
pub const DEFAULT_SMTP_PORT: i32 = 587;

/// Creates a fully populated settings model with default values.
///
/// # Returns
/// - `site_settings::Model` - In-memory settings row with id `SETTINGS_ID`
pub fn entity() -> site_settings::Model {
    entity_builder().build()
}

/// Creates a settings builder for customization.
///
/// # Returns
/// - `SiteSettingsEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> SiteSettingsEntityBuilder {
    SiteSettingsEntityBuilder::default()
}

/// Builder for customized settings rows.
///
/// Only the fields tests commonly vary have setters; the rest keep fixture values.
pub struct SiteSettingsEntityBuilder {
    model: site_settings::Model,
}

impl Default for SiteSettingsEntityBuilder {
    fn default() -> Self {
        let timestamp = Utc
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default();

        Self {
            model: site_settings::Model {
                id: SETTINGS_ID,
                site_name: Some(DEFAULT_SITE_NAME.to_string()),
                site_description: Some("A place to play together".to_string()),
                hero_title: Some("Welcome".to_string()),
                hero_subtitle: Some("Join the community".to_string()),
                hero_image: Some("https://cdn.example.com/hero.png".to_string()),
                color_primary: Some(DEFAULT_COLOR_PRIMARY.to_string()),
                color_secondary: Some("#64748b".to_string()),
                color_accent: Some("#f59e0b".to_string()),
                color_background: Some("#0f172a".to_string()),
                color_surface: Some("#1e293b".to_string()),
                color_text: Some("#f8fafc".to_string()),
                color_featured_card: Some("#7c3aed".to_string()),
                contact_email: Some("admin@example.com".to_string()),
                social_discord: Some("https://discord.gg/example".to_string()),
                social_twitter: Some("https://twitter.com/example".to_string()),
                social_youtube: Some("https://youtube.com/@example".to_string()),
                social_twitch: Some("https://twitch.tv/example".to_string()),
                social_steam: Some("https://steamcommunity.com/groups/example".to_string()),
                integration_discord_enabled: true,
                integration_discord_client_id: Some("discord-client".to_string()),
                integration_discord_client_secret: Some("discord-secret".to_string()),
                integration_discord_bot_token: Some("discord-bot-token".to_string()),
                integration_discord_guild_id: Some("123456789".to_string()),
                integration_steam_enabled: true,
                integration_steam_api_key: Some("steam-key".to_string()),
                integration_google_enabled: false,
                integration_google_client_id: Some("google-client".to_string()),
                integration_google_client_secret: Some("google-secret".to_string()),
                smtp_host: Some("smtp.example.com".to_string()),
                smtp_port: Some(DEFAULT_SMTP_PORT),
                smtp_user: Some("mailer".to_string()),
                smtp_password: Some("mailer-password".to_string()),
                from_email: Some("noreply@example.com".to_string()),
                from_name: Some("Test Portal".to_string()),
                feature_registration: true,
                feature_email_verification: true,
                feature_server_listing: true,
                feature_forum: true,
                feature_event_calendar: false,
                seo_title: Some("Test Portal | Home".to_string()),
                seo_description: Some("Community gaming portal".to_string()),
                seo_keywords: Some("gaming,community".to_string()),
                seo_og_image: Some("https://cdn.example.com/og.png".to_string()),
                created_at: timestamp,
                updated_at: timestamp,
            },
        }
    }
}

impl SiteSettingsEntityBuilder {
    /// Sets the site name.
    pub fn site_name(mut self, site_name: impl Into<String>) -> Self {
        self.model.site_name = Some(site_name.into());
        self
    }

    /// Sets the primary theme color.
    pub fn color_primary(mut self, color: impl Into<String>) -> Self {
        self.model.color_primary = Some(color.into());
        self
    }

    /// Sets the Discord integration flag.
    pub fn discord_enabled(mut self, enabled: bool) -> Self {
        self.model.integration_discord_enabled = enabled;
        self
    }

    /// Sets the forum feature flag.
    pub fn feature_forum(mut self, enabled: bool) -> Self {
        self.model.feature_forum = enabled;
        self
    }

    /// Clears every optional column, leaving flags and timestamps untouched.
    ///
    /// Useful for checking how null columns are presented to clients.
    pub fn blank(mut self) -> Self {
        let m = &mut self.model;
        for field in [
            &mut m.site_name,
            &mut m.site_description,
            &mut m.hero_title,
            &mut m.hero_subtitle,
            &mut m.hero_image,
            &mut m.color_primary,
            &mut m.color_secondary,
            &mut m.color_accent,
            &mut m.color_background,
            &mut m.color_surface,
            &mut m.color_text,
            &mut m.color_featured_card,
            &mut m.contact_email,
            &mut m.social_discord,
            &mut m.social_twitter,
            &mut m.social_youtube,
            &mut m.social_twitch,
            &mut m.social_steam,
            &mut m.integration_discord_client_id,
            &mut m.integration_discord_client_secret,
            &mut m.integration_discord_bot_token,
            &mut m.integration_discord_guild_id,
            &mut m.integration_steam_api_key,
            &mut m.integration_google_client_id,
            &mut m.integration_google_client_secret,
            &mut m.smtp_host,
            &mut m.smtp_user,
            &mut m.smtp_password,
            &mut m.from_email,
            &mut m.from_name,
            &mut m.seo_title,
            &mut m.seo_description,
            &mut m.seo_keywords,
            &mut m.seo_og_image,
        ] {
            *field = None;
        }
        m.smtp_port = None;
        self
    }

    /// Builds the settings model.
    pub fn build(self) -> site_settings::Model {
        self.model
    }
}
