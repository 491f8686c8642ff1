use crate::{
    entities::{movie_copies, movie_rent_details, movies},
    error::ServiceError,
    repository::{BATCH_SIZE, GenreRepository, MovieRepository, set_if},
};
use log::{debug, info};
use models::stock::{self, CopySlot, StockAdjustment};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::{HashMap, HashSet};

pub type MovieWithCopies = (movies::Model, Vec<movie_copies::Model>);

/// Fields of a movie about to be created
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub year: i32,
    pub director: String,
    pub genre_id: i32,
}

impl IntoActiveModel<movies::ActiveModel> for NewMovie {
    fn into_active_model(self) -> movies::ActiveModel {
        movies::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            description: Set(self.description),
            year: Set(self.year),
            director: Set(self.director),
            genre_id: Set(self.genre_id),
        }
    }
}

/// Movie fields to overwrite; `None` leaves the stored value alone
#[derive(Debug, Clone, Default)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub genre_id: Option<i32>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.genre_id.is_none()
    }
}

impl IntoActiveModel<movies::ActiveModel> for MovieChanges {
    fn into_active_model(self) -> movies::ActiveModel {
        movies::ActiveModel {
            id: NotSet,
            title: set_if(self.title),
            description: set_if(self.description),
            year: set_if(self.year),
            director: set_if(self.director),
            genre_id: set_if(self.genre_id),
        }
    }
}

pub struct CatalogService;

impl CatalogService {
    /// Adds or removes copies of `movie_id` until exactly `desired` exist.
    ///
    /// Fails with [`ServiceError::NotFound`] when the movie does not exist.
    /// Copies referenced by any rental line item are never removed; when
    /// that makes the target unreachable the call fails with
    /// [`ServiceError::Conflict`] before anything is written. Returns the ids
    /// of the copies that exist afterwards, ascending.
    pub async fn reconcile_stock(
        txn: &DatabaseTransaction,
        movie_id: i32,
        desired: u32,
    ) -> Result<Vec<i32>, ServiceError> {
        MovieRepository::require(txn, movie_id).await?;
        let copy_ids = Self::copy_ids_of(txn, movie_id).await?;

        let mut referenced = HashSet::new();
        for batch in copy_ids.chunks(BATCH_SIZE) {
            let rows = movie_rent_details::Entity::find()
                .select_only()
                .column(movie_rent_details::Column::MovieCopyId)
                .filter(movie_rent_details::Column::MovieCopyId.is_in(batch.iter().copied()))
                .distinct()
                .into_tuple::<i32>()
                .all(txn)
                .await?;
            referenced.extend(rows);
        }

        let slots: Vec<CopySlot> = copy_ids
            .iter()
            .map(|&id| CopySlot {
                id,
                referenced: referenced.contains(&id),
            })
            .collect();

        match stock::plan(&slots, desired)? {
            StockAdjustment::Unchanged => {
                debug!("Stock of movie {movie_id} already at {desired}");
                return Ok(copy_ids);
            }
            StockAdjustment::Add(count) => {
                let mut remaining = count as usize;
                while remaining > 0 {
                    let batch = remaining.min(BATCH_SIZE);
                    let new_copies = (0..batch).map(|_| movie_copies::ActiveModel {
                        id: NotSet,
                        movie_id: Set(movie_id),
                        code: Set(None),
                    });
                    movie_copies::Entity::insert_many(new_copies)
                        .exec(txn)
                        .await?;
                    remaining -= batch;
                }

                info!("Added {count} copies to movie {movie_id}");
            }
            StockAdjustment::Remove(ids) => {
                let removed = ids.len();
                for batch in ids.chunks(BATCH_SIZE) {
                    movie_copies::Entity::delete_many()
                        .filter(movie_copies::Column::Id.is_in(batch.iter().copied()))
                        .exec(txn)
                        .await?;
                }

                info!("Removed {removed} copies from movie {movie_id}");
            }
        }

        Self::copy_ids_of(txn, movie_id).await
    }

    /// Creates a movie together with `stock` fresh copies
    pub async fn create_movie(
        db: &DatabaseConnection,
        movie: NewMovie,
        stock: u32,
    ) -> Result<MovieWithCopies, ServiceError> {
        let txn = db.begin().await?;

        Self::ensure_genre(&txn, movie.genre_id).await?;
        let created = MovieRepository::add(&txn, movie.into_active_model()).await?;
        Self::reconcile_stock(&txn, created.id, stock).await?;
        let copies = Self::copies_of(&txn, created.id).await?;

        txn.commit().await?;
        Ok((created, copies))
    }

    /// Updates a movie and, when `stock` is given, reconciles its copies
    pub async fn update_movie(
        db: &DatabaseConnection,
        id: i32,
        changes: MovieChanges,
        stock: Option<u32>,
    ) -> Result<MovieWithCopies, ServiceError> {
        let txn = db.begin().await?;

        let existing = MovieRepository::require(&txn, id).await?;
        if let Some(genre_id) = changes.genre_id {
            Self::ensure_genre(&txn, genre_id).await?;
        }

        let updated = if changes.is_empty() {
            existing
        } else {
            MovieRepository::update(&txn, id, changes.into_active_model()).await?
        };

        if let Some(stock) = stock {
            Self::reconcile_stock(&txn, id, stock).await?;
        }
        let copies = Self::copies_of(&txn, id).await?;

        txn.commit().await?;
        Ok((updated, copies))
    }

    /// Removes every copy of the movie, then the movie itself
    pub async fn delete_movie(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
        let txn = db.begin().await?;

        MovieRepository::require(&txn, id).await?;
        Self::reconcile_stock(&txn, id, 0).await?;
        MovieRepository::delete(&txn, id).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Get a single movie with its copies
    pub async fn get_movie(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<MovieWithCopies>, ServiceError> {
        let Some(movie) = MovieRepository::get(db, id).await? else {
            return Ok(None);
        };

        let copies = Self::copies_of(db, id).await?;
        Ok(Some((movie, copies)))
    }

    /// List movies with their copies, optionally filtered by a title substring
    pub async fn list_movies(
        db: &DatabaseConnection,
        title: Option<String>,
    ) -> Result<Vec<MovieWithCopies>, ServiceError> {
        let mut query = movies::Entity::find().order_by_asc(movies::Column::Id);
        if let Some(title) = title
            && !title.is_empty()
        {
            query = query.filter(movies::Column::Title.contains(title));
        }

        let movies = query.all(db).await?;
        if movies.is_empty() {
            return Ok(vec![]);
        }

        let movie_ids: Vec<i32> = movies.iter().map(|m| m.id).collect();

        // Build lookup map
        let mut copies_by_movie: HashMap<i32, Vec<movie_copies::Model>> = HashMap::new();
        for batch in movie_ids.chunks(BATCH_SIZE) {
            let copies = movie_copies::Entity::find()
                .filter(movie_copies::Column::MovieId.is_in(batch.iter().copied()))
                .order_by_asc(movie_copies::Column::Id)
                .all(db)
                .await?;
            for copy in copies {
                copies_by_movie.entry(copy.movie_id).or_default().push(copy);
            }
        }

        Ok(movies
            .into_iter()
            .map(|movie| {
                let copies = copies_by_movie.remove(&movie.id).unwrap_or_default();
                (movie, copies)
            })
            .collect())
    }

    pub async fn copies_of<C: ConnectionTrait>(
        conn: &C,
        movie_id: i32,
    ) -> Result<Vec<movie_copies::Model>, ServiceError> {
        Ok(movie_copies::Entity::find()
            .filter(movie_copies::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_copies::Column::Id)
            .all(conn)
            .await?)
    }

    async fn copy_ids_of<C: ConnectionTrait>(
        conn: &C,
        movie_id: i32,
    ) -> Result<Vec<i32>, ServiceError> {
        Ok(movie_copies::Entity::find()
            .select_only()
            .column(movie_copies::Column::Id)
            .filter(movie_copies::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_copies::Column::Id)
            .into_tuple::<i32>()
            .all(conn)
            .await?)
    }

    async fn ensure_genre<C: ConnectionTrait>(conn: &C, genre_id: i32) -> Result<(), ServiceError> {
        if GenreRepository::exists(conn, genre_id).await? {
            Ok(())
        } else {
            Err(ServiceError::Validation(format!(
                "Genre {genre_id} does not exist"
            )))
        }
    }
}
