//! Article data models
//!
//! Defines the stored article row and the field sets used to create and
//! update it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Storage-assigned article identifier
pub type ArticleId = i64;

/// A persisted article
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Article {
    /// Unique identifier, generated on insert
    pub id: ArticleId,
    /// Headline, may contain untrusted markup
    pub title: String,
    /// Body text, may contain untrusted markup
    pub content: String,
    /// Category or tag of the article
    pub style: String,
    /// When the article was published
    pub date_published: DateTime<Utc>,
}

/// Fields required to insert an article
///
/// `date_published` is left to the column default.
#[derive(Debug, Clone)]
pub struct NewArticle {
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Category or tag
    pub style: String,
}

/// Partial set of fields to change on an existing article
///
/// `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleUpdate {
    /// New headline
    pub title: Option<String>,
    /// New body text
    pub content: Option<String>,
    /// New category or tag
    pub style: Option<String>,
}

impl ArticleUpdate {
    /// Build an update from raw request values, dropping empty strings
    pub fn from_fields(
        title: Option<String>,
        content: Option<String>,
        style: Option<String>,
    ) -> Self {
        let keep = |value: Option<String>| value.filter(|v| !v.is_empty());
        Self {
            title: keep(title),
            content: keep(content),
            style: keep(style),
        }
    }

    /// True when no column would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.style.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_drops_empty_strings() {
        let update = ArticleUpdate::from_fields(Some(String::new()), None, Some("News".into()));
        assert_eq!(update.title, None);
        assert_eq!(update.content, None);
        assert_eq!(update.style.as_deref(), Some("News"));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_all_blank_is_empty() {
        let update = ArticleUpdate::from_fields(Some(String::new()), None, Some(String::new()));
        assert!(update.is_empty());
        assert!(ArticleUpdate::default().is_empty());
    }
}
