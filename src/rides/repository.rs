use crate::db::{queries, DbPool};
use crate::error::RideError;
use crate::models::ride::{NewRide, Ride};

use super::validation::Pagination;

/// Persistence boundary for the ride table. Owns the pool handle and is
/// the sole writer; constructed once and injected into the handlers.
#[derive(Clone)]
pub struct RideRepository {
    pool: DbPool,
}

impl RideRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts a validated ride, then reads the stored row back by its
    /// fresh id. The insert does not echo column data, and since rides are
    /// never deleted the read-back cannot miss once the insert commits.
    pub async fn create(&self, ride: &NewRide) -> Result<Ride, RideError> {
        let result = sqlx::query(queries::INSERT_RIDE)
            .bind(ride.start_lat)
            .bind(ride.start_long)
            .bind(ride.end_lat)
            .bind(ride.end_long)
            .bind(&ride.rider_name)
            .bind(&ride.driver_name)
            .bind(&ride.driver_vehicle)
            .execute(&self.pool)
            .await?;

        let ride = sqlx::query_as::<_, Ride>(queries::SELECT_RIDE_BY_ID)
            .bind(result.last_insert_rowid())
            .fetch_one(&self.pool)
            .await?;

        Ok(ride)
    }

    /// Returns rides in insertion order, windowed by LIMIT/OFFSET when a
    /// pagination window is given. An empty result set reports not-found,
    /// which callers can tell apart from a malformed window.
    pub async fn list(&self, pagination: Option<Pagination>) -> Result<Vec<Ride>, RideError> {
        let rides = match pagination {
            Some(window) => {
                sqlx::query_as::<_, Ride>(queries::SELECT_RIDES_PAGE)
                    .bind(window.limit())
                    .bind(window.offset())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, Ride>(queries::SELECT_ALL_RIDES)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        if rides.is_empty() {
            return Err(RideError::NotFound);
        }

        Ok(rides)
    }

    /// Exact-match lookup, always through a bound parameter.
    pub async fn get_by_id(&self, id: i64) -> Result<Ride, RideError> {
        sqlx::query_as::<_, Ride>(queries::SELECT_RIDE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RideError::NotFound)
    }
}
