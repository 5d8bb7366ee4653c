//! Blog listing and single-post route handlers.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::AppResult;
use crate::routing::RouteName;
use crate::state::AppState;

use super::helpers::{page_title, render_not_found, render_page};

pub(super) async fn blog_index(State(state): State<AppState>) -> AppResult<Response> {
    let blog = state.content().blog();

    let mut context = tera::Context::new();
    context.insert("featured_post", &blog.featured_post);
    context.insert("posts", &blog.blog_posts);

    Ok(render_page(&state, RouteName::Blog, &page_title("Blog"), context)?.into_response())
}

/// Single post, looked up by slug.
///
/// Unknown slugs render the styled not-found page with a 404 status, they
/// are not an error condition.
pub(super) async fn blog_single(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    let Some(post) = state.content().post_by_slug(&slug) else {
        return Ok(render_not_found(&state));
    };

    let mut context = tera::Context::new();
    context.insert("post", post);

    let page = render_page(
        &state,
        RouteName::BlogSingle,
        &page_title(&post.title),
        context,
    )?;
    Ok(page.into_response())
}
