use sea_orm::entity::prelude::*;

/// The singleton settings row. Its primary key is always `SETTINGS_ROW_ID`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub site_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub site_description: Option<String>,

    pub hero_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hero_subtitle: Option<String>,
    pub hero_image: Option<String>,

    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub color_accent: Option<String>,
    pub color_background: Option<String>,
    pub color_surface: Option<String>,
    pub color_text: Option<String>,
    pub color_featured_card: Option<String>,

    pub contact_email: Option<String>,

    pub social_discord: Option<String>,
    pub social_twitter: Option<String>,
    pub social_youtube: Option<String>,
    pub social_twitch: Option<String>,
    pub social_steam: Option<String>,

    pub integration_discord_enabled: bool,
    pub integration_discord_client_id: Option<String>,
    pub integration_discord_client_secret: Option<String>,
    pub integration_discord_bot_token: Option<String>,
    pub integration_discord_guild_id: Option<String>,
    pub integration_steam_enabled: bool,
    pub integration_steam_api_key: Option<String>,
    pub integration_google_enabled: bool,
    pub integration_google_client_id: Option<String>,
    pub integration_google_client_secret: Option<String>,

    pub smtp_host: Option<String>,
    pub smtp_port: Option<i32>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub from_email: Option<String>,
    pub from_name: Option<String>,

    pub feature_registration: bool,
    pub feature_email_verification: bool,
    pub feature_server_listing: bool,
    pub feature_forum: bool,
    pub feature_event_calendar: bool,

    pub seo_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub seo_og_image: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gallery_image::Entity")]
    GalleryImage,
    #[sea_orm(has_many = "super::forum_category::Entity")]
    ForumCategory,
}

impl Related<super::gallery_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GalleryImage.def()
    }
}

impl Related<super::forum_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ForumCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
