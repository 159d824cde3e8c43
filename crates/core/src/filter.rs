//! Movie search filters.
//!
//! A [`MovieFilter`] is built from the raw `searchString` / `selectedGenre`
//! query parameters and rendered by the repository layer into a single SQL
//! statement, so every filter is applied before the rows are materialized.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Optional title substring and genre filters for the movie listing.
///
/// Blank inputs (empty or whitespace-only) mean "no filter". Both filters
/// compose with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    search: Option<String>,
    genre: Option<String>,
}

impl MovieFilter {
    pub fn new(search: Option<&str>, genre: Option<&str>) -> Self {
        Self {
            search: non_blank(search),
            genre: non_blank(genre),
        }
    }

    /// The raw title search string, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// The exact genre to match, if any.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// `true` when no stored movie can match. Stored text never contains
    /// NUL, and PostgreSQL rejects it as a query parameter.
    pub fn matches_nothing(&self) -> bool {
        [&self.search, &self.genre]
            .into_iter()
            .flatten()
            .any(|v| v.contains('\0'))
    }

    /// Case-insensitive `ILIKE` pattern for the title filter.
    ///
    /// User-supplied wildcards are escaped so they match literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinedex_core::filter::MovieFilter;
    /// let filter = MovieFilter::new(Some("ghost"), None);
    /// assert_eq!(filter.title_pattern(), Some("%ghost%".to_string()));
    /// ```
    pub fn title_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)))
    }
}

/// Escape `%`, `_` and the escape character itself for use inside a
/// `LIKE` / `ILIKE` pattern with `ESCAPE '\'`.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
