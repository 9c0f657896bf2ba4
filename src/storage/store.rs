//! SQLite store access.
//!
//! The store is opened and closed around every logical write; no connection
//! is held across a run.

use std::path::PathBuf;

use log::{debug, error};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};

use crate::dns::DnsRecord;
use crate::error_handling::StorageError;
use crate::geoip::GeoRecord;
use crate::whois::WhoisRecord;

use super::schema::ALL_TABLES;

/// Handle to the SQLite file of one workspace.
#[derive(Debug, Clone)]
pub struct Store {
    db_path: PathBuf,
}

impl Store {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Opens a connection, creating the database file if it doesn't exist.
    pub async fn connect(&self) -> Result<SqliteConnection, StorageError> {
        SqliteConnectOptions::new()
            .filename(&self.db_path)
            .create_if_missing(true)
            .connect()
            .await
            .map_err(|e| {
                error!("Failed to open database {}: {e}", self.db_path.display());
                StorageError::SqlError(e)
            })
    }

    /// Creates any missing tables. Existing tables and rows are left untouched.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;
        for statement in ALL_TABLES {
            sqlx::query(statement).execute(&mut conn).await?;
        }
        conn.close().await?;
        debug!("Schema ready at {}", self.db_path.display());
        Ok(())
    }

    pub async fn upsert_whois(&self, record: &WhoisRecord) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;
        sqlx::query(
            "INSERT OR REPLACE INTO whois_data (domain, registrar, whois_server, creation_date, expiration_date)
            VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&record.domain)
        .bind(&record.registrar)
        .bind(&record.whois_server)
        .bind(&record.creation_date)
        .bind(&record.expiration_date)
        .execute(&mut conn)
        .await?;
        conn.close().await?;
        Ok(())
    }

    pub async fn upsert_geolocation(&self, record: &GeoRecord) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;
        sqlx::query(
            "INSERT OR REPLACE INTO ip_geolocation (ip, country, region, city, latitude, longitude)
            VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.ip)
        .bind(&record.country)
        .bind(&record.region)
        .bind(&record.city)
        .bind(record.latitude)
        .bind(record.longitude)
        .execute(&mut conn)
        .await?;
        conn.close().await?;
        Ok(())
    }

    /// Upserts all records of one lookup in a single transaction.
    pub async fn upsert_dns(&self, records: &[DnsRecord]) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;
        let mut tx = conn.begin().await?;
        for record in records {
            sqlx::query(
                "INSERT OR REPLACE INTO dns_lookup (domain, record_type, ttl, address)
                VALUES (?, ?, ?, ?)",
            )
            .bind(&record.domain)
            .bind(&record.record_type)
            .bind(i64::from(record.ttl))
            .bind(&record.address)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        conn.close().await?;
        Ok(())
    }

    pub async fn upsert_module_output(
        &self,
        module: &str,
        domain: &str,
        data: &str,
    ) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;
        sqlx::query("INSERT OR REPLACE INTO recon_ng_data (module, domain, data) VALUES (?, ?, ?)")
            .bind(module)
            .bind(domain)
            .bind(data)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }
}
