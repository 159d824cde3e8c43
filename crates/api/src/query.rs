//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the movie listing (`?searchString=&selectedGenre=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieIndexParams {
    pub search_string: Option<String>,
    pub selected_genre: Option<String>,
}
