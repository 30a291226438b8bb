//! API module
//!
//! Contains HTTP request handlers for the articles resource and the router
//! that wires them together.

pub mod articles;
pub mod request_id;
pub mod utils;

use axum::{middleware, routing::get, Router};
use utils::RouterState;

/// Build the `/articles` routes over the given service
///
/// Single-article routes run [`articles::resolve_article`] first, so their
/// handlers only ever see an article that exists.
pub fn routes(service: RouterState) -> Router {
    let single_article = Router::new()
        .route(
            "/articles/:article_id",
            get(articles::get_article)
                .delete(articles::delete_article)
                .patch(articles::update_article),
        )
        .route_layer(middleware::from_fn_with_state(
            service.clone(),
            articles::resolve_article,
        ));

    Router::new()
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .merge(single_article)
        .with_state(service)
}
