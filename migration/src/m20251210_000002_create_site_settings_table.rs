use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The primary key is not auto-incremented: the single settings row
        // always uses the same id, so a second insert conflicts instead of
        // creating a duplicate.
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(integer(SiteSettings::Id).primary_key())
                    .col(string_null(SiteSettings::SiteName))
                    .col(text_null(SiteSettings::SiteDescription))
                    .col(string_null(SiteSettings::HeroTitle))
                    .col(text_null(SiteSettings::HeroSubtitle))
                    .col(string_null(SiteSettings::HeroImage))
                    .col(string_null(SiteSettings::ColorPrimary))
                    .col(string_null(SiteSettings::ColorSecondary))
                    .col(string_null(SiteSettings::ColorAccent))
                    .col(string_null(SiteSettings::ColorBackground))
                    .col(string_null(SiteSettings::ColorSurface))
                    .col(string_null(SiteSettings::ColorText))
                    .col(string_null(SiteSettings::ColorFeaturedCard))
                    .col(string_null(SiteSettings::ContactEmail))
                    .col(string_null(SiteSettings::SocialDiscord))
                    .col(string_null(SiteSettings::SocialTwitter))
                    .col(string_null(SiteSettings::SocialYoutube))
                    .col(string_null(SiteSettings::SocialTwitch))
                    .col(string_null(SiteSettings::SocialSteam))
                    .col(boolean(SiteSettings::IntegrationDiscordEnabled).default(false))
                    .col(string_null(SiteSettings::IntegrationDiscordClientId))
                    .col(string_null(SiteSettings::IntegrationDiscordClientSecret))
                    .col(string_null(SiteSettings::IntegrationDiscordBotToken))
                    .col(string_null(SiteSettings::IntegrationDiscordGuildId))
                    .col(boolean(SiteSettings::IntegrationSteamEnabled).default(false))
                    .col(string_null(SiteSettings::IntegrationSteamApiKey))
                    .col(boolean(SiteSettings::IntegrationGoogleEnabled).default(false))
                    .col(string_null(SiteSettings::IntegrationGoogleClientId))
                    .col(string_null(SiteSettings::IntegrationGoogleClientSecret))
                    .col(string_null(SiteSettings::SmtpHost))
                    .col(integer_null(SiteSettings::SmtpPort))
                    .col(string_null(SiteSettings::SmtpUser))
                    .col(string_null(SiteSettings::SmtpPassword))
                    .col(string_null(SiteSettings::FromEmail))
                    .col(string_null(SiteSettings::FromName))
                    .col(boolean(SiteSettings::FeatureRegistration).default(true))
                    .col(boolean(SiteSettings::FeatureEmailVerification).default(false))
                    .col(boolean(SiteSettings::FeatureServerListing).default(true))
                    .col(boolean(SiteSettings::FeatureForum).default(true))
                    .col(boolean(SiteSettings::FeatureEventCalendar).default(false))
                    .col(string_null(SiteSettings::SeoTitle))
                    .col(text_null(SiteSettings::SeoDescription))
                    .col(string_null(SiteSettings::SeoKeywords))
                    .col(string_null(SiteSettings::SeoOgImage))
                    .col(timestamp_with_time_zone(SiteSettings::CreatedAt))
                    .col(timestamp_with_time_zone(SiteSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiteSettings {
    Table,
    Id,
    SiteName,
    SiteDescription,
    HeroTitle,
    HeroSubtitle,
    HeroImage,
    ColorPrimary,
    ColorSecondary,
    ColorAccent,
    ColorBackground,
    ColorSurface,
    ColorText,
    ColorFeaturedCard,
    ContactEmail,
    SocialDiscord,
    SocialTwitter,
    SocialYoutube,
    SocialTwitch,
    SocialSteam,
    IntegrationDiscordEnabled,
    IntegrationDiscordClientId,
    IntegrationDiscordClientSecret,
    IntegrationDiscordBotToken,
    IntegrationDiscordGuildId,
    IntegrationSteamEnabled,
    IntegrationSteamApiKey,
    IntegrationGoogleEnabled,
    IntegrationGoogleClientId,
    IntegrationGoogleClientSecret,
    SmtpHost,
    SmtpPort,
    SmtpUser,
    SmtpPassword,
    FromEmail,
    FromName,
    FeatureRegistration,
    FeatureEmailVerification,
    FeatureServerListing,
    FeatureForum,
    FeatureEventCalendar,
    SeoTitle,
    SeoDescription,
    SeoKeywords,
    SeoOgImage,
    CreatedAt,
    UpdatedAt,
}
