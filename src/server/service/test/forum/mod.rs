use crate::{
    model::forum::{ForumCategoriesDto, ForumCategoryDto, ForumCategoryPermissionDto},
    server::{
        error::AppError, model::forum::SyncForumCategoriesParams,
        service::forum::ForumCategoryService,
    },
};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_all;

fn permission(role: &str) -> ForumCategoryPermissionDto {
    ForumCategoryPermissionDto {
        role: role.to_string(),
        can_view: true,
        can_post: role != "guest",
        can_reply: role != "guest",
        can_moderate: role == "moderator",
    }
}

fn category(id: Option<i32>, name: &str, sort_order: i32, roles: &[&str]) -> ForumCategoryDto {
    ForumCategoryDto {
        id,
        name: name.to_string(),
        description: None,
        sort_order,
        permissions: roles.iter().map(|r| permission(r)).collect(),
    }
}

fn params(categories: Vec<ForumCategoryDto>) -> SyncForumCategoriesParams {
    SyncForumCategoriesParams::from_dto(ForumCategoriesDto { categories }).unwrap()
}
