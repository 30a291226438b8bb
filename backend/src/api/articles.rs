//! Article API handlers
//!
//! Contains HTTP request handlers for article CRUD operations and the
//! lookup middleware shared by the single-article routes.

use crate::api::utils::{into_text, is_truthy, join_location, JsonBody, RouterState};
use crate::articles::{Article, ArticleId, ArticleUpdate, NewArticle};
use crate::error::AppError;
use crate::sanitize::escape_html;
use axum::{
    extract::{OriginalUri, Path, Request, State},
    http::{header, HeaderName, StatusCode},
    middleware::Next,
    response::{Json, Response},
    Extension,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Article as returned to clients
///
/// `title` and `content` are HTML-escaped; the other fields are verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleResponse {
    /// Unique identifier for the article
    pub id: ArticleId,
    /// Category or tag
    pub style: String,
    /// Escaped headline
    pub title: String,
    /// Escaped body text
    pub content: String,
    /// Publication time
    pub date_published: DateTime<Utc>,
}

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            style: article.style.clone(),
            title: escape_html(&article.title),
            content: escape_html(&article.content),
            date_published: article.date_published,
        }
    }
}

/// Create article request
///
/// Fields are raw JSON values; `null` deserializes to `None`. Any other
/// key in the body, `date_published` included, is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateArticleRequest {
    /// Headline (required)
    pub title: Option<Value>,
    /// Body text (required)
    pub content: Option<Value>,
    /// Category or tag (required)
    pub style: Option<Value>,
}

impl CreateArticleRequest {
    /// Check required fields in declaration order
    pub fn validate(self) -> Result<NewArticle, AppError> {
        let required = |value: Option<Value>, field: &'static str| {
            value.map(into_text).ok_or(AppError::MissingField(field))
        };

        Ok(NewArticle {
            title: required(self.title, "title")?,
            content: required(self.content, "content")?,
            style: required(self.style, "style")?,
        })
    }
}

/// Update article request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequest {
    /// New headline (optional)
    pub title: Option<Value>,
    /// New body text (optional)
    pub content: Option<Value>,
    /// New category or tag (optional)
    pub style: Option<Value>,
}

impl UpdateArticleRequest {
    /// Keep only truthy fields
    pub fn into_changes(self) -> ArticleUpdate {
        let truthy = |value: Option<Value>| value.filter(is_truthy).map(into_text);
        ArticleUpdate::from_fields(truthy(self.title), truthy(self.content), truthy(self.style))
    }
}

/// Resolve `:article_id` before any single-article handler runs
///
/// Stops the request with 404 when the article does not exist; otherwise
/// the resolved [`Article`] is available to the handler as an
/// `Extension<Article>`.
pub async fn resolve_article(
    State(service): State<RouterState>,
    Path(article_id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id: ArticleId = article_id
        .parse()
        .map_err(|_| AppError::ArticleNotFound)?;

    let article = service
        .get_by_id(id)
        .await?
        .ok_or(AppError::ArticleNotFound)?;

    request.extensions_mut().insert(article);
    Ok(next.run(request).await)
}

/// GET /articles - List all articles
pub async fn list_articles(
    State(service): State<RouterState>,
) -> Result<Json<Vec<ArticleResponse>>, AppError> {
    let articles = service.list().await?;
    Ok(Json(articles.iter().map(ArticleResponse::from).collect()))
}

/// POST /articles - Create a new article
pub async fn create_article(
    State(service): State<RouterState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(request): JsonBody<CreateArticleRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ArticleResponse>), AppError> {
    let new_article = request.validate()?;

    let article = service.insert(&new_article).await?;
    let location = join_location(uri.path(), article.id);

    tracing::info!(article_id = article.id, location = %location, "Article created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ArticleResponse::from(&article)),
    ))
}

/// GET /articles/:article_id - Get a specific article
pub async fn get_article(Extension(article): Extension<Article>) -> Json<ArticleResponse> {
    Json(ArticleResponse::from(&article))
}

/// DELETE /articles/:article_id - Delete an article
pub async fn delete_article(
    State(service): State<RouterState>,
    Extension(article): Extension<Article>,
) -> Result<StatusCode, AppError> {
    if service.delete(article.id).await? == 0 {
        return Err(AppError::ArticleNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /articles/:article_id - Update some fields of an article
pub async fn update_article(
    State(service): State<RouterState>,
    Extension(article): Extension<Article>,
    JsonBody(request): JsonBody<UpdateArticleRequest>,
) -> Result<StatusCode, AppError> {
    let changes = request.into_changes();
    if changes.is_empty() {
        return Err(AppError::EmptyUpdate);
    }

    // Row can disappear between the lookup and the update
    if service.update(article.id, &changes).await? == 0 {
        return Err(AppError::ArticleNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
