use crate::server::{
    error::AppError,
    model::page::{CreatePageParams, UpdatePageParams},
    service::page::PageService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_published_by_slug;
mod update;

fn new_page(slug: &str) -> CreatePageParams {
    CreatePageParams {
        title: "About the league".to_string(),
        slug: slug.to_string(),
        body: "Founded in 1998".to_string(),
        published: true,
    }
}
