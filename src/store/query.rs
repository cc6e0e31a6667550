//! # Article List Query
//!
//! Sorting and filtering for the article listing. Column names reach the SQL
//! text only through [`SortColumn::as_sql`], so every identifier comes from a
//! closed set; filter values are always bound.

/// Columns the article list may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    /// All sortable columns
    pub const ALL: [SortColumn; 7] = [
        SortColumn::ArticleId,
        SortColumn::Title,
        SortColumn::Topic,
        SortColumn::Author,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::CommentCount,
    ];

    /// Public name, as accepted in `sort_by`
    pub fn name(&self) -> &'static str {
        match self {
            SortColumn::ArticleId => "article_id",
            SortColumn::Title => "title",
            SortColumn::Topic => "topic",
            SortColumn::Author => "author",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::CommentCount => "comment_count",
        }
    }

    /// Look up a column by its public name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.name() == name)
    }

    /// SQL expression used in ORDER BY
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortColumn::ArticleId => "articles.article_id",
            SortColumn::Title => "articles.title",
            SortColumn::Topic => "articles.topic",
            SortColumn::Author => "articles.author",
            SortColumn::CreatedAt => "articles.created_at",
            SortColumn::Votes => "articles.votes",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse `asc` / `desc`, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Parameters for `fetch_all_articles`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl ArticleListQuery {
    /// ORDER BY clause body. Ties fall back to the primary key in the same
    /// direction so results are stable.
    pub fn order_clause(&self) -> String {
        let direction = self.order.as_sql();
        if self.sort_by == SortColumn::ArticleId {
            format!("{} {}", self.sort_by.as_sql(), direction)
        } else {
            format!(
                "{} {}, articles.article_id {}",
                self.sort_by.as_sql(),
                direction,
                direction
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_newest_first() {
        let query = ArticleListQuery::default();
        assert_eq!(
            query.order_clause(),
            "articles.created_at DESC, articles.article_id DESC"
        );
    }

    #[test]
    fn test_column_names_round_trip() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::from_name(column.name()), Some(column));
        }
        assert_eq!(SortColumn::from_name("password"), None);
        assert_eq!(SortColumn::from_name("votes; DROP TABLE articles"), None);
    }

    #[test]
    fn test_order_is_case_insensitive() {
        assert_eq!(SortOrder::from_name("ASC"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::from_name("Desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::from_name("up"), None);
    }

    #[test]
    fn test_primary_key_sort_has_no_tiebreak() {
        let query = ArticleListQuery {
            sort_by: SortColumn::ArticleId,
            order: SortOrder::Asc,
            topic: None,
        };
        assert_eq!(query.order_clause(), "articles.article_id ASC");
    }
}
