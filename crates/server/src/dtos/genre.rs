use database::{entities::genres, repository::set_if};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<genres::Model> for GenreResponse {
    fn from(genre: genres::Model) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            description: genre.description,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenreCreate {
    pub name: String,
    pub description: String,
}

impl From<GenreCreate> for genres::ActiveModel {
    fn from(genre: GenreCreate) -> Self {
        Self {
            id: NotSet,
            name: Set(genre.name),
            description: Set(genre.description),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenreUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<GenreUpdate> for genres::ActiveModel {
    fn from(genre: GenreUpdate) -> Self {
        Self {
            id: NotSet,
            name: set_if(genre.name),
            description: set_if(genre.description),
        }
    }
}
