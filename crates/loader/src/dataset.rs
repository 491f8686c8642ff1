use chrono::NaiveDateTime;
use database::entities::{clients, genres, movie_copies, movie_rent_details, movie_rents, movies};
use models::rent::{RentState, TransitionError};
use serde::{Deserialize, de::DeserializeOwned};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Default location of the JSON dataset files
pub const DEFAULT_DATASET_DIR: &str = "./datasets";

pub const GENRE_FILE: &str = "genre.json";
pub const MOVIE_FILE: &str = "movie.json";
pub const MOVIE_COPY_FILE: &str = "moviecopy.json";
pub const CLIENT_FILE: &str = "client.json";
pub const MOVIE_RENT_FILE: &str = "movierent.json";
pub const MOVIE_RENT_DETAIL_FILE: &str = "movierentdetail.json";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("movie rent {id}: {source}")]
    InvalidRent { id: i32, source: TransitionError },
}

/// A rent row as stored in `movierent.json`. `is_closed` may be omitted and
/// is then derived from `closed_datetime`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRentRow {
    pub id: i32,
    pub client_id: i32,
    pub creation_datetime: NaiveDateTime,
    pub closed_datetime: Option<NaiveDateTime>,
    pub is_closed: Option<bool>,
}

impl MovieRentRow {
    pub fn into_model(self) -> Result<movie_rents::Model, DatasetError> {
        let is_closed = self.is_closed.unwrap_or(self.closed_datetime.is_some());
        let (is_closed, closed_datetime) = RentState::from_columns(is_closed, self.closed_datetime)
            .map_err(|source| DatasetError::InvalidRent {
                id: self.id,
                source,
            })?
            .into_columns();

        Ok(movie_rents::Model {
            id: self.id,
            client_id: self.client_id,
            creation_datetime: self.creation_datetime,
            closed_datetime,
            is_closed,
        })
    }
}

/// Every table of the store, read from one directory
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub genres: Vec<genres::Model>,
    pub movies: Vec<movies::Model>,
    pub movie_copies: Vec<movie_copies::Model>,
    pub clients: Vec<clients::Model>,
    pub movie_rents: Vec<movie_rents::Model>,
    pub movie_rent_details: Vec<movie_rent_details::Model>,
}

impl Dataset {
    /// Reads and validates all six files before anything touches the database
    pub fn read(dir: &Path) -> Result<Self, DatasetError> {
        let movie_rents = read_rows::<MovieRentRow>(&dir.join(MOVIE_RENT_FILE))?
            .into_iter()
            .map(MovieRentRow::into_model)
            .collect::<Result<_, _>>()?;

        Ok(Self {
            genres: read_rows(&dir.join(GENRE_FILE))?,
            movies: read_rows(&dir.join(MOVIE_FILE))?,
            movie_copies: read_rows(&dir.join(MOVIE_COPY_FILE))?,
            clients: read_rows(&dir.join(CLIENT_FILE))?,
            movie_rents,
            movie_rent_details: read_rows(&dir.join(MOVIE_RENT_DETAIL_FILE))?,
        })
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_owned(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rent(json: &str) -> Result<movie_rents::Model, DatasetError> {
        serde_json::from_str::<MovieRentRow>(json).unwrap().into_model()
    }

    #[test]
    fn test_open_rent_without_flag() {
        let model =
            rent(r#"{"id": 1, "client_id": 2, "creation_datetime": "2024-03-01T10:00:00"}"#)
                .unwrap();

        assert!(!model.is_closed);
        assert!(model.closed_datetime.is_none());
    }

    #[test]
    fn test_closed_flag_derived_from_timestamp() {
        let model = rent(
            r#"{"id": 1, "client_id": 2, "creation_datetime": "2024-03-01T10:00:00",
                "closed_datetime": "2024-03-04T18:30:00"}"#,
        )
        .unwrap();

        assert!(model.is_closed);
    }

    #[test]
    fn test_closed_flag_without_timestamp_is_rejected() {
        let err = rent(
            r#"{"id": 7, "client_id": 2, "creation_datetime": "2024-03-01T10:00:00",
                "is_closed": true}"#,
        )
        .unwrap_err();

        assert!(matches!(err, DatasetError::InvalidRent { id: 7, .. }));
    }

    #[test]
    fn test_read_missing_directory() {
        let err = Dataset::read(Path::new("./no-such-dataset-dir")).unwrap_err();

        assert!(matches!(err, DatasetError::Read { .. }));
    }
}
