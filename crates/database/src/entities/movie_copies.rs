use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single physical copy of a movie
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie_copies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movie_id: i32,
    pub code: Option<String>, // Shelf or barcode label
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movies::Entity",
        from = "Column::MovieId",
        to = "super::movies::Column::Id"
    )]
    Movie,
    #[sea_orm(has_many = "super::movie_rent_details::Entity")]
    RentDetails,
}

impl Related<super::movies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::movie_rent_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RentDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
