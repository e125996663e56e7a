pub use super::forum_category::Entity as ForumCategory;
pub use super::forum_category_permission::Entity as ForumCategoryPermission;
pub use super::gallery_image::Entity as GalleryImage;
pub use super::site_settings::Entity as SiteSettings;
pub use super::user::Entity as User;
