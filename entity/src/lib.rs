//! SeaORM entities for the portal configuration store.

pub mod prelude;

pub mod forum_category;
pub mod forum_category_permission;
pub mod gallery_image;
pub mod site_settings;
pub mod user;
