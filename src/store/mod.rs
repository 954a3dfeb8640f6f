//! # Record Store
//!
//! Single-table persistence for city weather records.
//!
//! Each operation opens a fresh connection to the SQLite file, runs
//! exactly one parameterized statement, and releases the connection when
//! it drops. No pooling, no transactions spanning operations: a logical
//! operation is always a single atomic statement.
//!
//! Name uniqueness is enforced by the engine's UNIQUE constraint rather
//! than a separate existence check, so there is no check-then-act window
//! between concurrent writers.

mod errors;
mod record;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

pub use errors::{StoreError, StoreResult};
pub use record::{City, CityListItem, Measurements};

/// Store for city weather records backed by a SQLite file
pub struct CityStore {
    path: PathBuf,
}

impl CityStore {
    /// Create a store for the database at `path`. No connection is held.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn connect(&self) -> StoreResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Create the `cities` table if it does not exist. Safe to call on
    /// every startup.
    pub fn init(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE NOT NULL,
                wind_speed REAL,
                precipitation_mm REAL,
                temperature REAL
            );
            "#,
        )?;
        Ok(())
    }

    /// All records in rowid order, id and name only
    pub fn list(&self) -> StoreResult<Vec<CityListItem>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name FROM cities")?;
        let rows = stmt.query_map([], |row| {
            Ok(CityListItem {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut cities = Vec::new();
        for city in rows {
            cities.push(city?);
        }
        Ok(cities)
    }

    /// Look up one record by id
    pub fn get(&self, id: i64) -> StoreResult<Option<City>> {
        let conn = self.connect()?;
        let city = conn
            .query_row(
                "SELECT id, name, wind_speed, precipitation_mm, temperature
                 FROM cities WHERE id = ?1",
                params![id],
                |row| {
                    Ok(City {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        wind_speed: row.get(2)?,
                        precipitation_mm: row.get(3)?,
                        temperature: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(city)
    }

    /// Insert a new record and return its assigned id.
    ///
    /// Fails with [`StoreError::NameExists`] when the UNIQUE constraint
    /// on `name` rejects the row.
    pub fn insert(&self, name: &str, measurements: &Measurements) -> StoreResult<i64> {
        let conn = self.connect()?;
        let result = conn.execute(
            "INSERT INTO cities (name, wind_speed, precipitation_mm, temperature)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                name,
                measurements.wind_speed,
                measurements.precipitation_mm,
                measurements.temperature
            ],
        );

        match result {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::NameExists(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the three measurement fields of one record.
    ///
    /// Returns the affected-row count; zero means no record has this id.
    /// `id` and `name` are never touched.
    pub fn update(&self, id: i64, measurements: &Measurements) -> StoreResult<usize> {
        let conn = self.connect()?;
        let rows = conn.execute(
            "UPDATE cities
             SET wind_speed = ?1, precipitation_mm = ?2, temperature = ?3
             WHERE id = ?4",
            params![
                measurements.wind_speed,
                measurements.precipitation_mm,
                measurements.temperature,
                id
            ],
        )?;
        Ok(rows)
    }

    /// Delete one record. Returns the affected-row count; zero means
    /// no record has this id.
    pub fn delete(&self, id: i64) -> StoreResult<usize> {
        let conn = self.connect()?;
        let rows = conn.execute("DELETE FROM cities WHERE id = ?1", params![id])?;
        Ok(rows)
    }
}
