//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let admin = factory::user::create_admin(&db).await?;
//!     let settings = factory::site_settings::create_settings(&db).await?;
//!     let category = factory::forum_category::create_category(&db, settings.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let category = factory::forum_category::ForumCategoryFactory::new(&db, settings.id)
//!     .name("Announcements")
//!     .sort_order(0)
//!     .build()
//!     .await?;
//!
//! factory::forum_category_permission::ForumCategoryPermissionFactory::new(&db, category.id)
//!     .role("guest")
//!     .can_view(true)
//!     .build()
//!     .await?;
//! ```

pub mod forum_category;
pub mod forum_category_permission;
pub mod gallery_image;
pub mod helpers;
pub mod site_settings;
pub mod user;

pub use forum_category::create_category;
pub use forum_category_permission::create_permission;
pub use gallery_image::create_gallery_image;
pub use site_settings::create_settings;
pub use user::{create_admin, create_user};
