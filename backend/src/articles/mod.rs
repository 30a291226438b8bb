//! Articles module
//!
//! Handles article storage using an SQLite database.

pub mod db;
pub mod models;

pub use db::ArticlesService;
pub use models::{Article, ArticleId, ArticleUpdate, NewArticle};
