use crate::{
    entities::{movie_copies, movie_rent_details, movie_rents},
    error::ServiceError,
    repository::{BATCH_SIZE, ClientRepository, MovieRentRepository},
};
use chrono::{NaiveDateTime, Utc};
use log::{debug, info};
use models::{
    rent::RentState,
    rent_detail::{self, DetailEntry, StoredDetail},
};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};

pub type RentWithDetails = (movie_rents::Model, Vec<movie_rent_details::Model>);

#[derive(Debug, Clone)]
pub struct NewRent {
    pub client_id: i32,
    pub details: Vec<DetailEntry>,
}

/// Replacement state for an open rent
#[derive(Debug, Clone)]
pub struct RentChanges {
    pub client_id: Option<i32>,
    /// `Some(true)` closes the rent; `Some(false)` keeps it open
    pub is_closed: Option<bool>,
    /// The complete list of line items the rent should end up with
    pub details: Vec<DetailEntry>,
}

pub struct RentalService;

impl RentalService {
    /// Makes the stored line items of `rent_id` match `submitted`.
    ///
    /// Entries carrying an id already stored for this rent are kept (and
    /// updated if their copy changed), every other entry is inserted, and
    /// stored line items missing from `submitted` are deleted. All writes go
    /// through `txn`; the caller decides whether they are committed.
    pub async fn reconcile_details(
        txn: &DatabaseTransaction,
        rent_id: i32,
        submitted: &[DetailEntry],
    ) -> Result<Vec<movie_rent_details::Model>, ServiceError> {
        MovieRentRepository::require(txn, rent_id).await?;
        Self::ensure_copies_exist(txn, submitted).await?;

        let current: Vec<StoredDetail> = Self::details_of(txn, rent_id)
            .await?
            .into_iter()
            .map(|detail| StoredDetail {
                id: detail.id,
                movie_copy_id: detail.movie_copy_id,
            })
            .collect();

        let diff = rent_detail::diff(&current, submitted)?;
        if diff.is_noop() {
            debug!("Line items of rent {rent_id} unchanged");
            return Self::details_of(txn, rent_id).await;
        }

        for update in &diff.update {
            movie_rent_details::ActiveModel {
                id: Set(update.id),
                movie_rent_id: NotSet,
                movie_copy_id: Set(update.movie_copy_id),
            }
            .update(txn)
            .await?;
        }

        for batch in diff.insert.chunks(BATCH_SIZE) {
            let rows = batch
                .iter()
                .map(|&movie_copy_id| movie_rent_details::ActiveModel {
                    id: NotSet,
                    movie_rent_id: Set(rent_id),
                    movie_copy_id: Set(movie_copy_id),
                });
            movie_rent_details::Entity::insert_many(rows)
                .exec(txn)
                .await?;
        }

        for batch in diff.delete.chunks(BATCH_SIZE) {
            movie_rent_details::Entity::delete_many()
                .filter(movie_rent_details::Column::Id.is_in(batch.iter().copied()))
                .exec(txn)
                .await?;
        }

        info!(
            "Reconciled rent {rent_id}: {} updated, {} inserted, {} deleted",
            diff.update.len(),
            diff.insert.len(),
            diff.delete.len()
        );

        Self::details_of(txn, rent_id).await
    }

    /// Marks the rent closed now. Closing a closed rent changes nothing.
    pub async fn close(
        txn: &DatabaseTransaction,
        rent_id: i32,
    ) -> Result<movie_rents::Model, ServiceError> {
        let rent = MovieRentRepository::require(txn, rent_id).await?;
        let state = RentState::from_columns(rent.is_closed, rent.closed_datetime)?;

        if state.is_closed() {
            debug!("Rent {rent_id} is already closed");
            return Ok(rent);
        }

        let (is_closed, closed_datetime) = state.close(now()).into_columns();
        let mut active = rent.into_active_model();
        active.is_closed = Set(is_closed);
        active.closed_datetime = Set(closed_datetime);

        let closed = active.update(txn).await?;
        info!("Closed rent {rent_id}");
        Ok(closed)
    }

    /// Opens a rent for a client with the given line items
    pub async fn create_rent(
        db: &DatabaseConnection,
        rent: NewRent,
    ) -> Result<RentWithDetails, ServiceError> {
        let txn = db.begin().await?;

        Self::ensure_client(&txn, rent.client_id).await?;
        let created = MovieRentRepository::add(
            &txn,
            movie_rents::ActiveModel {
                id: NotSet,
                client_id: Set(rent.client_id),
                creation_datetime: Set(now()),
                closed_datetime: Set(None),
                is_closed: Set(false),
            },
        )
        .await?;
        let details = Self::reconcile_details(&txn, created.id, &rent.details).await?;

        txn.commit().await?;
        Ok((created, details))
    }

    /// Replaces the client and line items of an open rent, closing it if asked
    pub async fn update_rent(
        db: &DatabaseConnection,
        id: i32,
        changes: RentChanges,
    ) -> Result<RentWithDetails, ServiceError> {
        let txn = db.begin().await?;

        let current = MovieRentRepository::require(&txn, id).await?;
        let target = RentState::from_columns(current.is_closed, current.closed_datetime)?
            .apply(changes.is_closed, now())?;

        if let Some(client_id) = changes.client_id
            && client_id != current.client_id
        {
            Self::ensure_client(&txn, client_id).await?;
            MovieRentRepository::update(
                &txn,
                id,
                movie_rents::ActiveModel {
                    client_id: Set(client_id),
                    ..Default::default()
                },
            )
            .await?;
        }

        let details = Self::reconcile_details(&txn, id, &changes.details).await?;
        let rent = if target.is_closed() {
            Self::close(&txn, id).await?
        } else {
            MovieRentRepository::require(&txn, id).await?
        };

        txn.commit().await?;
        Ok((rent, details))
    }

    pub async fn close_rent(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<movie_rents::Model, ServiceError> {
        let txn = db.begin().await?;
        let rent = Self::close(&txn, id).await?;
        txn.commit().await?;
        Ok(rent)
    }

    /// Deletes a rent along with all of its line items
    pub async fn delete_rent(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
        let txn = db.begin().await?;

        MovieRentRepository::require(&txn, id).await?;
        movie_rent_details::Entity::delete_many()
            .filter(movie_rent_details::Column::MovieRentId.eq(id))
            .exec(&txn)
            .await?;
        MovieRentRepository::delete(&txn, id).await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn get_rent(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<RentWithDetails>, ServiceError> {
        let Some(rent) = MovieRentRepository::get(db, id).await? else {
            return Ok(None);
        };

        let details = Self::details_of(db, id).await?;
        Ok(Some((rent, details)))
    }

    pub async fn list_rents(db: &DatabaseConnection) -> Result<Vec<RentWithDetails>, ServiceError> {
        let rents = MovieRentRepository::get_all(db).await?;
        if rents.is_empty() {
            return Ok(vec![]);
        }

        let rent_ids: Vec<i32> = rents.iter().map(|r| r.id).collect();

        // Build lookup map
        let mut details_by_rent: HashMap<i32, Vec<movie_rent_details::Model>> = HashMap::new();
        for batch in rent_ids.chunks(BATCH_SIZE) {
            let details = movie_rent_details::Entity::find()
                .filter(movie_rent_details::Column::MovieRentId.is_in(batch.iter().copied()))
                .order_by_asc(movie_rent_details::Column::Id)
                .all(db)
                .await?;
            for detail in details {
                details_by_rent
                    .entry(detail.movie_rent_id)
                    .or_default()
                    .push(detail);
            }
        }

        Ok(rents
            .into_iter()
            .map(|rent| {
                let details = details_by_rent.remove(&rent.id).unwrap_or_default();
                (rent, details)
            })
            .collect())
    }

    pub async fn details_of<C: ConnectionTrait>(
        conn: &C,
        rent_id: i32,
    ) -> Result<Vec<movie_rent_details::Model>, ServiceError> {
        Ok(movie_rent_details::Entity::find()
            .filter(movie_rent_details::Column::MovieRentId.eq(rent_id))
            .order_by_asc(movie_rent_details::Column::Id)
            .all(conn)
            .await?)
    }

    /// Rejects line items pointing at copies that do not exist
    async fn ensure_copies_exist<C: ConnectionTrait>(
        conn: &C,
        submitted: &[DetailEntry],
    ) -> Result<(), ServiceError> {
        let requested: BTreeSet<i32> = submitted.iter().map(DetailEntry::movie_copy_id).collect();
        if requested.is_empty() {
            return Ok(());
        }

        let requested_ids: Vec<i32> = requested.iter().copied().collect();
        let mut found = BTreeSet::new();
        for batch in requested_ids.chunks(BATCH_SIZE) {
            let rows = movie_copies::Entity::find()
                .select_only()
                .column(movie_copies::Column::Id)
                .filter(movie_copies::Column::Id.is_in(batch.iter().copied()))
                .into_tuple::<i32>()
                .all(conn)
                .await?;
            found.extend(rows);
        }

        let missing: Vec<i32> = requested.difference(&found).copied().collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(format!(
                "Movie copies do not exist: {missing:?}"
            )))
        }
    }

    async fn ensure_client<C: ConnectionTrait>(conn: &C, client_id: i32) -> Result<(), ServiceError> {
        if ClientRepository::exists(conn, client_id).await? {
            Ok(())
        } else {
            Err(ServiceError::Validation(format!(
                "Client {client_id} does not exist"
            )))
        }
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
