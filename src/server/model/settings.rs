//! Settings aggregate domain model and the shape translator.
//!
//! The settings row is stored flat (`color_primary`, `smtp_host`, ...) while clients
//! read and write a nested document (`colors.primary`, `emailSettings.host`, ...).
//! `to_flat` and `to_nested` translate between the two and are pure.

use chrono::{DateTime, Utc};
use entity::site_settings;
use sea_orm::{ActiveValue, IntoActiveModel};

use crate::{
    model::settings::{
        ColorsDto, DiscordIntegrationDto, EmailSettingsDto, FeaturesDto, GoogleIntegrationDto,
        IntegrationsDto, SeoDto, SiteSettingsDto, SocialLinksDto, SteamIntegrationDto,
        UpdateSiteSettingsDto,
    },
    server::{
        error::AppError,
        model::{
            forum::ForumCategory,
            gallery::{GalleryImage, GalleryImageData},
        },
    },
};

/// Primary key of the one and only settings row.
pub const SETTINGS_ROW_ID: i32 = 1;

pub const DEFAULT_SITE_NAME: &str = "Community Portal";
pub const DEFAULT_SMTP_PORT: i32 = 587;

const DEFAULT_COLORS: [(&str, &str); 7] = [
    ("primary", "#6366f1"),
    ("secondary", "#8b5cf6"),
    ("accent", "#f59e0b"),
    ("background", "#0f172a"),
    ("surface", "#1e293b"),
    ("text", "#f1f5f9"),
    ("featured_card", "#312e81"),
];

fn default_color(name: &str) -> Option<String> {
    DEFAULT_COLORS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Empty strings are stored as NULL.
fn text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn port(value: i32) -> Option<i32> {
    (value > 0).then_some(value)
}

/// Builds the settings row created on first access.
///
/// Every column is `Set` so the model can be inserted as is.
pub fn default_model(now: DateTime<Utc>) -> site_settings::ActiveModel {
    use ActiveValue::Set;

    site_settings::ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        site_name: Set(Some(DEFAULT_SITE_NAME.to_string())),
        site_description: Set(None),
        hero_title: Set(None),
        hero_subtitle: Set(None),
        hero_image: Set(None),
        color_primary: Set(default_color("primary")),
        color_secondary: Set(default_color("secondary")),
        color_accent: Set(default_color("accent")),
        color_background: Set(default_color("background")),
        color_surface: Set(default_color("surface")),
        color_text: Set(default_color("text")),
        color_featured_card: Set(default_color("featured_card")),
        contact_email: Set(None),
        social_discord: Set(None),
        social_twitter: Set(None),
        social_youtube: Set(None),
        social_twitch: Set(None),
        social_steam: Set(None),
        integration_discord_enabled: Set(false),
        integration_discord_client_id: Set(None),
        integration_discord_client_secret: Set(None),
        integration_discord_bot_token: Set(None),
        integration_discord_guild_id: Set(None),
        integration_steam_enabled: Set(false),
        integration_steam_api_key: Set(None),
        integration_google_enabled: Set(false),
        integration_google_client_id: Set(None),
        integration_google_client_secret: Set(None),
        smtp_host: Set(None),
        smtp_port: Set(Some(DEFAULT_SMTP_PORT)),
        smtp_user: Set(None),
        smtp_password: Set(None),
        from_email: Set(None),
        from_name: Set(None),
        feature_registration: Set(true),
        feature_email_verification: Set(false),
        feature_server_listing: Set(true),
        feature_forum: Set(true),
        feature_event_calendar: Set(false),
        seo_title: Set(None),
        seo_description: Set(None),
        seo_keywords: Set(None),
        seo_og_image: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Translates a nested settings write into a flat row update.
///
/// Starts from `current` (all columns unchanged) or, when no row exists yet, from
/// `default_model`. Only the namespaces present in `patch` are written; within a
/// present namespace every column is written, so missing sub-fields become NULL or
/// `false`. `updated_at` is always bumped to `now`.
///
/// `patch.gallery_images` is ignored here; the gallery lives in its own table.
///
/// # Arguments
/// - `patch` - The nested write
/// - `current` - The stored row, if any
/// - `now` - Timestamp recorded as `updated_at`
///
/// # Returns
/// - `site_settings::ActiveModel` - Row with changed columns `Set`
pub fn to_flat(
    patch: &UpdateSiteSettingsDto,
    current: Option<&site_settings::Model>,
    now: DateTime<Utc>,
) -> site_settings::ActiveModel {
    use ActiveValue::Set;

    let mut row = match current {
        Some(model) => model.clone().into_active_model(),
        None => default_model(now),
    };

    if let Some(v) = &patch.site_name {
        row.site_name = Set(text(v));
    }
    if let Some(v) = &patch.site_description {
        row.site_description = Set(text(v));
    }
    if let Some(v) = &patch.hero_title {
        row.hero_title = Set(text(v));
    }
    if let Some(v) = &patch.hero_subtitle {
        row.hero_subtitle = Set(text(v));
    }
    if let Some(v) = &patch.hero_image {
        row.hero_image = Set(text(v));
    }
    if let Some(v) = &patch.contact_email {
        row.contact_email = Set(text(v));
    }

    if let Some(colors) = &patch.colors {
        row.color_primary = Set(text(&colors.primary));
        row.color_secondary = Set(text(&colors.secondary));
        row.color_accent = Set(text(&colors.accent));
        row.color_background = Set(text(&colors.background));
        row.color_surface = Set(text(&colors.surface));
        row.color_text = Set(text(&colors.text));
        row.color_featured_card = Set(text(&colors.featured_card));
    }

    if let Some(social) = &patch.social_links {
        row.social_discord = Set(text(&social.discord));
        row.social_twitter = Set(text(&social.twitter));
        row.social_youtube = Set(text(&social.youtube));
        row.social_twitch = Set(text(&social.twitch));
        row.social_steam = Set(text(&social.steam));
    }

    if let Some(integrations) = &patch.integrations {
        if let Some(discord) = &integrations.discord {
            row.integration_discord_enabled = Set(discord.enabled);
            row.integration_discord_client_id = Set(text(&discord.client_id));
            row.integration_discord_client_secret = Set(text(&discord.client_secret));
            row.integration_discord_bot_token = Set(text(&discord.bot_token));
            row.integration_discord_guild_id = Set(text(&discord.guild_id));
        }
        if let Some(steam) = &integrations.steam {
            row.integration_steam_enabled = Set(steam.enabled);
            row.integration_steam_api_key = Set(text(&steam.api_key));
        }
        if let Some(google) = &integrations.google {
            row.integration_google_enabled = Set(google.enabled);
            row.integration_google_client_id = Set(text(&google.client_id));
            row.integration_google_client_secret = Set(text(&google.client_secret));
        }
    }

    if let Some(email) = &patch.email_settings {
        row.smtp_host = Set(text(&email.host));
        row.smtp_port = Set(port(email.port));
        row.smtp_user = Set(text(&email.user));
        row.smtp_password = Set(text(&email.password));
        row.from_email = Set(text(&email.from_email));
        row.from_name = Set(text(&email.from_name));
    }

    if let Some(features) = &patch.features {
        row.feature_registration = Set(features.registration);
        row.feature_email_verification = Set(features.email_verification);
        row.feature_server_listing = Set(features.server_listing);
        row.feature_forum = Set(features.forum);
        row.feature_event_calendar = Set(features.event_calendar);
    }

    if let Some(seo) = &patch.seo {
        row.seo_title = Set(text(&seo.title));
        row.seo_description = Set(text(&seo.description));
        row.seo_keywords = Set(text(&seo.keywords));
        row.seo_og_image = Set(text(&seo.og_image));
    }

    row.updated_at = Set(now);
    row
}

/// Translates the flat row and its children into the nested document.
///
/// NULL columns are presented as `""` or `0`. Forum categories are only included
/// when `categories` is `Some`.
pub fn to_nested(
    model: site_settings::Model,
    gallery: Vec<GalleryImage>,
    categories: Option<Vec<ForumCategory>>,
) -> SiteSettingsDto {
    let s = |value: Option<String>| value.unwrap_or_default();

    SiteSettingsDto {
        site_name: s(model.site_name),
        site_description: s(model.site_description),
        hero_title: s(model.hero_title),
        hero_subtitle: s(model.hero_subtitle),
        hero_image: s(model.hero_image),
        colors: ColorsDto {
            primary: s(model.color_primary),
            secondary: s(model.color_secondary),
            accent: s(model.color_accent),
            background: s(model.color_background),
            surface: s(model.color_surface),
            text: s(model.color_text),
            featured_card: s(model.color_featured_card),
        },
        gallery_images: gallery.into_iter().map(GalleryImage::into_dto).collect(),
        social_links: SocialLinksDto {
            discord: s(model.social_discord),
            twitter: s(model.social_twitter),
            youtube: s(model.social_youtube),
            twitch: s(model.social_twitch),
            steam: s(model.social_steam),
        },
        contact_email: s(model.contact_email),
        integrations: IntegrationsDto {
            discord: DiscordIntegrationDto {
                enabled: model.integration_discord_enabled,
                client_id: s(model.integration_discord_client_id),
                client_secret: s(model.integration_discord_client_secret),
                bot_token: s(model.integration_discord_bot_token),
                guild_id: s(model.integration_discord_guild_id),
            },
            steam: SteamIntegrationDto {
                enabled: model.integration_steam_enabled,
                api_key: s(model.integration_steam_api_key),
            },
            google: GoogleIntegrationDto {
                enabled: model.integration_google_enabled,
                client_id: s(model.integration_google_client_id),
                client_secret: s(model.integration_google_client_secret),
            },
        },
        email_settings: EmailSettingsDto {
            host: s(model.smtp_host),
            port: model.smtp_port.unwrap_or(0),
            user: s(model.smtp_user),
            password: s(model.smtp_password),
            from_email: s(model.from_email),
            from_name: s(model.from_name),
        },
        features: FeaturesDto {
            registration: model.feature_registration,
            email_verification: model.feature_email_verification,
            server_listing: model.feature_server_listing,
            forum: model.feature_forum,
            event_calendar: model.feature_event_calendar,
        },
        seo: SeoDto {
            title: s(model.seo_title),
            description: s(model.seo_description),
            keywords: s(model.seo_keywords),
            og_image: s(model.seo_og_image),
        },
        forum_categories: categories
            .map(|categories| categories.into_iter().map(ForumCategory::into_dto).collect()),
    }
}

/// The settings aggregate: the row, its gallery and optionally the forum taxonomy.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub row: site_settings::Model,
    /// Ordered by position.
    pub gallery: Vec<GalleryImage>,
    pub forum_categories: Option<Vec<ForumCategory>>,
}

impl SiteSettings {
    pub fn into_dto(self) -> SiteSettingsDto {
        to_nested(self.row, self.gallery, self.forum_categories)
    }
}

/// Parameters for a settings write.
#[derive(Debug, Clone)]
pub struct UpdateSettingsParams {
    /// Scalar namespaces; `gallery_images` has been taken out.
    pub patch: UpdateSiteSettingsDto,
    /// When `Some`, the gallery is reconciled to exactly this list.
    pub gallery_images: Option<Vec<GalleryImageData>>,
}

impl UpdateSettingsParams {
    /// Splits the gallery list off the write and validates it.
    ///
    /// # Returns
    /// - `Ok(UpdateSettingsParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - A gallery image has an empty url
    pub fn from_dto(mut dto: UpdateSiteSettingsDto) -> Result<Self, AppError> {
        let gallery_images = dto
            .gallery_images
            .take()
            .map(GalleryImageData::from_dtos)
            .transpose()?;

        Ok(Self {
            patch: dto,
            gallery_images,
        })
    }
}
