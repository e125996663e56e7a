pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_user_table;
mod m20251210_000002_create_site_settings_table;
mod m20251210_000003_create_gallery_image_table;
mod m20251210_000004_create_forum_category_table;
mod m20251210_000005_create_forum_category_permission_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_user_table::Migration),
            Box::new(m20251210_000002_create_site_settings_table::Migration),
            Box::new(m20251210_000003_create_gallery_image_table::Migration),
            Box::new(m20251210_000004_create_forum_category_table::Migration),
            Box::new(m20251210_000005_create_forum_category_permission_table::Migration),
        ]
    }
}
