use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Line item linking a rent to one movie copy
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie_rent_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movie_rent_id: i32,
    pub movie_copy_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie_rents::Entity",
        from = "Column::MovieRentId",
        to = "super::movie_rents::Column::Id",
        on_delete = "Cascade"
    )]
    MovieRent,
    #[sea_orm(
        belongs_to = "super::movie_copies::Entity",
        from = "Column::MovieCopyId",
        to = "super::movie_copies::Column::Id"
    )]
    MovieCopy,
}

impl Related<super::movie_rents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieRent.def()
    }
}

impl Related<super::movie_copies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCopy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
