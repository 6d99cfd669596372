use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres, Row};
use tokio::sync::RwLock;

use crate::config::validate_table_name;
use crate::entities::Ride;
use crate::error::Error;

/// Write side of the ride store, keyed by ride id.
#[async_trait]
pub trait RideStore {
    /// Writes the ride, replacing any record with the same id.
    async fn put_ride(&self, ride: &Ride) -> Result<(), Error>;

    async fn find_ride(&self, ride_id: &str) -> Result<Option<Ride>, Error>;
}

pub struct PgStore {
    pool: Pool<Postgres>,
    table: String,
}

impl PgStore {
    #[tracing::instrument(name = "PgStore::new", skip(db_uri))]
    pub async fn new(db_uri: &str, max_connections: u32, table: &str) -> Result<Self, Error> {
        validate_table_name(table)?;

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Self::with_pool(pool, table).await
    }

    pub async fn with_pool(pool: Pool<Postgres>, table: &str) -> Result<Self, Error> {
        validate_table_name(table)?;

        // rides (KV store)
        pool.execute(
            format!(
                "CREATE TABLE IF NOT EXISTS {} (ride_id VARCHAR PRIMARY KEY, data JSONB NOT NULL)",
                table
            )
            .as_str(),
        )
        .await?;

        Ok(Self {
            pool,
            table: table.into(),
        })
    }
}

#[async_trait]
impl RideStore for PgStore {
    #[tracing::instrument(skip(self, ride), fields(ride_id = %ride.ride_id))]
    async fn put_ride(&self, ride: &Ride) -> Result<(), Error> {
        let query = format!(
            "INSERT INTO {} (ride_id, data) VALUES ($1, $2) ON CONFLICT (ride_id) DO UPDATE SET data = EXCLUDED.data",
            self.table
        );

        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(
                sqlx::query(&query)
                    .bind(&ride.ride_id)
                    .bind(Json(ride)),
            )
            .await?;

        tracing::debug!("put_ride({:?}) -> {:?}", ride, result);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_ride(&self, ride_id: &str) -> Result<Option<Ride>, Error> {
        let query = format!("SELECT data FROM {} WHERE ride_id = $1", self.table);

        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query(&query).bind(ride_id))
            .await?;

        match maybe_result {
            Some(result) => {
                let Json(ride): Json<Ride> = result.try_get("data")?;
                Ok(Some(ride))
            }
            None => Ok(None),
        }
    }
}

/// In-process store for local runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rides: RwLock<HashMap<String, Ride>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rides.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rides.read().await.is_empty()
    }
}

#[async_trait]
impl RideStore for MemoryStore {
    #[tracing::instrument(skip(self, ride), fields(ride_id = %ride.ride_id))]
    async fn put_ride(&self, ride: &Ride) -> Result<(), Error> {
        self.rides
            .write()
            .await
            .insert(ride.ride_id.clone(), ride.clone());

        tracing::debug!("put_ride({:?})", ride);

        Ok(())
    }

    async fn find_ride(&self, ride_id: &str) -> Result<Option<Ride>, Error> {
        Ok(self.rides.read().await.get(ride_id).cloned())
    }
}
