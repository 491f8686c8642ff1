use chrono::NaiveDateTime;
use database::{
    entities::movie_rent_details,
    services::rental::{NewRent, RentChanges, RentWithDetails},
};
use models::rent_detail::DetailEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieRentResponse {
    pub id: i32,
    pub client_id: i32,
    pub creation_datetime: NaiveDateTime,
    pub closed_datetime: Option<NaiveDateTime>,
    pub is_closed: bool,
    pub details: Vec<MovieRentDetailResponse>,
}

impl From<RentWithDetails> for MovieRentResponse {
    fn from((rent, details): RentWithDetails) -> Self {
        Self {
            id: rent.id,
            client_id: rent.client_id,
            creation_datetime: rent.creation_datetime,
            closed_datetime: rent.closed_datetime,
            is_closed: rent.is_closed,
            details: details.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieRentDetailResponse {
    pub id: i32,
    pub movie_rent_id: i32,
    pub movie_copy_id: i32,
}

impl From<movie_rent_details::Model> for MovieRentDetailResponse {
    fn from(detail: movie_rent_details::Model) -> Self {
        Self {
            id: detail.id,
            movie_rent_id: detail.movie_rent_id,
            movie_copy_id: detail.movie_copy_id,
        }
    }
}

/// A line item as submitted by clients. Items without an id are new.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MovieRentDetailPayload {
    pub id: Option<i32>,
    pub movie_copy_id: i32,
}

impl From<MovieRentDetailPayload> for DetailEntry {
    fn from(payload: MovieRentDetailPayload) -> Self {
        DetailEntry::new(payload.id, payload.movie_copy_id)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MovieRentCreate {
    pub client_id: i32,
    #[serde(default)]
    pub details: Vec<MovieRentDetailPayload>,
}

impl From<MovieRentCreate> for NewRent {
    fn from(rent: MovieRentCreate) -> Self {
        Self {
            client_id: rent.client_id,
            details: rent.details.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MovieRentUpdate {
    pub client_id: Option<i32>,
    pub is_closed: Option<bool>,
    /// The full list of line items the rent should keep
    pub details: Vec<MovieRentDetailPayload>,
}

impl From<MovieRentUpdate> for RentChanges {
    fn from(rent: MovieRentUpdate) -> Self {
        Self {
            client_id: rent.client_id,
            is_closed: rent.is_closed,
            details: rent.details.into_iter().map(Into::into).collect(),
        }
    }
}
