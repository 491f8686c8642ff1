use super::movie_copy::MovieCopyResponse;
use database::services::catalog::{MovieChanges, MovieWithCopies, NewMovie};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub director: String,
    pub genre_id: i32,
    pub copies: Vec<MovieCopyResponse>,
}

impl From<MovieWithCopies> for MovieResponse {
    fn from((movie, copies): MovieWithCopies) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            year: movie.year,
            director: movie.director,
            genre_id: movie.genre_id,
            copies: copies.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MovieCreate {
    pub title: String,
    pub description: String,
    pub year: i32,
    pub director: String,
    pub genre_id: i32,
    /// Number of copies to create alongside the movie
    #[serde(default)]
    pub stock: u32,
}

impl MovieCreate {
    pub fn into_parts(self) -> (NewMovie, u32) {
        let movie = NewMovie {
            title: self.title,
            description: self.description,
            year: self.year,
            director: self.director,
            genre_id: self.genre_id,
        };
        (movie, self.stock)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub genre_id: Option<i32>,
    /// When present, copies are added or removed until exactly this many exist
    pub stock: Option<u32>,
}

impl MovieUpdate {
    pub fn into_parts(self) -> (MovieChanges, Option<u32>) {
        let changes = MovieChanges {
            title: self.title,
            description: self.description,
            year: self.year,
            director: self.director,
            genre_id: self.genre_id,
        };
        (changes, self.stock)
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieQueryParams {
    /// Only movies whose title contains this text
    pub title: Option<String>,
}
