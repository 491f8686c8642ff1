use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub license_number: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_rents::Entity")]
    MovieRents,
}

impl Related<super::movie_rents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieRents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
