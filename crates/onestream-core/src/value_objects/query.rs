//! Canonical stream listing query
//!
//! Every alias the HTTP surface accepts is folded into [`StreamQuery`] before
//! it reaches a repository. Sorting is restricted to the [`SortField`]
//! allow-list, so column names never come from caller input.

use std::fmt;
use std::str::FromStr;

/// Columns a stream listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Title,
    TokensPrice,
    DateExpiration,
    CreatedAt,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Title,
        SortField::TokensPrice,
        SortField::DateExpiration,
        SortField::CreatedAt,
    ];

    /// Public (query string) name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TokensPrice => "tokens_price",
            Self::DateExpiration => "date_expiration",
            Self::CreatedAt => "created_at",
        }
    }

    /// Column name in the `streams` table
    pub fn column(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TokensPrice => "tokens_price",
            Self::DateExpiration => "date_expiration",
            Self::CreatedAt => "created_at",
        }
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|f| f.as_str() == s).ok_or(())
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl StreamSort {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse a JSON:API style sort value (`-field` means descending)
    pub fn parse_signed(value: &str) -> Option<Self> {
        let (direction, name) = match value.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest),
            None => (SortDirection::Asc, value),
        };
        name.parse().ok().map(|field| Self::new(field, direction))
    }
}

/// Newest first
impl Default for StreamSort {
    fn default() -> Self {
        Self::new(SortField::CreatedAt, SortDirection::Desc)
    }
}

/// Filter, sort and page window for a stream listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamQuery {
    /// Substring matched against title or description
    pub search: Option<String>,
    pub stream_type_id: Option<i64>,
    pub sort: StreamSort,
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
}

impl StreamQuery {
    pub const DEFAULT_PER_PAGE: u32 = 15;

    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page)
    }
}

impl Default for StreamQuery {
    fn default() -> Self {
        Self {
            search: None,
            stream_type_id: None,
            sort: StreamSort::default(),
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}
