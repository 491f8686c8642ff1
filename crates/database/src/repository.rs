use crate::{
    entities::{clients, genres, movie_copies, movie_rent_details, movie_rents, movies},
    error::ServiceError,
};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait,
    ActiveValue::{self, NotSet, Set},
    ConnectionTrait, EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryOrder, Value,
};
use std::marker::PhantomData;

/// Upper bound on rows or ids bound into a single statement.
/// Stores cap bind parameters per statement (SQLite 32766, PostgreSQL 65535).
pub const BATCH_SIZE: usize = 1000;

/// Sets the column only when a value was supplied
pub fn set_if<T: Into<Value>>(value: Option<T>) -> ActiveValue<T> {
    value.map_or(NotSet, Set)
}

/// Human readable entity name used in error messages
pub trait Label {
    const LABEL: &'static str;
}

impl Label for genres::Entity {
    const LABEL: &'static str = "Genre";
}

impl Label for movies::Entity {
    const LABEL: &'static str = "Movie";
}

impl Label for movie_copies::Entity {
    const LABEL: &'static str = "Movie copy";
}

impl Label for clients::Entity {
    const LABEL: &'static str = "Client";
}

impl Label for movie_rents::Entity {
    const LABEL: &'static str = "Movie Rent";
}

impl Label for movie_rent_details::Entity {
    const LABEL: &'static str = "Movie Rent detail";
}

/// Uniform CRUD access to any entity keyed by an `i32` id.
///
/// Every operation runs on the connection or transaction it is given; the
/// repository never opens or commits a transaction of its own.
pub struct Repository<E>(PhantomData<E>);

pub type GenreRepository = Repository<genres::Entity>;
pub type MovieRepository = Repository<movies::Entity>;
pub type MovieCopyRepository = Repository<movie_copies::Entity>;
pub type ClientRepository = Repository<clients::Entity>;
pub type MovieRentRepository = Repository<movie_rents::Entity>;
pub type MovieRentDetailRepository = Repository<movie_rent_details::Entity>;

impl<E> Repository<E>
where
    E: EntityTrait + Label,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub async fn get<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id).one(conn).await?)
    }

    /// Like [`Repository::get`] but a missing row is an error
    pub async fn require<C: ConnectionTrait>(
        conn: &C,
        id: i32,
    ) -> Result<E::Model, ServiceError> {
        Self::get(conn, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::LABEL, id))
    }

    pub async fn exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool, ServiceError> {
        Ok(Self::get(conn, id).await?.is_some())
    }

    /// All rows, ordered by id
    pub async fn get_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<E::Model>, ServiceError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        Ok(query.all(conn).await?)
    }

    /// Inserts a new row. Any id on `model` is discarded so the store assigns one.
    pub async fn add<C: ConnectionTrait>(
        conn: &C,
        mut model: E::ActiveModel,
    ) -> Result<E::Model, ServiceError> {
        for key in E::PrimaryKey::iter() {
            model.not_set(key.into_column());
        }

        Ok(model.insert(conn).await?)
    }

    /// Writes the set fields of `model` to the row with the given id.
    /// A model with nothing set just returns the stored row.
    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i32,
        mut model: E::ActiveModel,
    ) -> Result<E::Model, ServiceError> {
        if !model.is_changed() {
            return Self::require(conn, id).await;
        }

        if !Self::exists(conn, id).await? {
            return Err(ServiceError::not_found(E::LABEL, id));
        }

        for key in E::PrimaryKey::iter() {
            model.set(key.into_column(), Value::Int(Some(id)));
        }

        Ok(model.update(conn).await?)
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: i32) -> Result<(), ServiceError> {
        let result = E::delete_by_id(id).exec(conn).await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(E::LABEL, id));
        }

        Ok(())
    }
}
