//! SQLite-backed item store.
//!
//! # Design
//! `ItemStore` owns its `rusqlite::Connection`. The handle is constructed at
//! startup and handed to the HTTP layer as shared state, so there is no
//! process-wide lookup. Every caller-supplied value (id, description, status)
//! is bound as a statement parameter — nothing caller-influenced is spliced
//! into statement text. Each operation issues exactly one statement, except
//! [`ItemStore::init`], which runs its drop/create/seed sequence in one
//! transaction.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StoreError;
use crate::item::Item;

/// Descriptions seeded by [`ItemStore::init`], inserted in this order with
/// `done = false`.
pub const SEED_TASKS: [&str; 4] = [
    "Deploy the to-do service",
    "Move the list to the cloud",
    "Celebrate",
    "Clean off my desk",
];

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS todos (
    taskId INTEGER PRIMARY KEY AUTOINCREMENT,
    task VARCHAR(200) NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE
)";
const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS todos";
const LIST_SQL: &str = "SELECT taskId, task, completed FROM todos ORDER BY taskId";
const SELECT_SQL: &str = "SELECT task, completed FROM todos WHERE taskId = ?1";
const INSERT_SQL: &str = "INSERT INTO todos (task, completed) VALUES (?1, FALSE)";
const UPDATE_SQL: &str = "UPDATE todos SET completed = ?1 WHERE taskId = ?2";
const DELETE_SQL: &str = "DELETE FROM todos WHERE taskId = ?1";

/// SQLite-backed store for to-do items.
#[derive(Debug)]
pub struct ItemStore {
    conn: Connection,
}

impl ItemStore {
    /// Open (or create) the database at `path`. The table is created if
    /// missing, so a fresh database serves immediately.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path)?)
    }

    /// In-memory database, for tests and ephemeral runs.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(CREATE_TABLE_SQL, [])?;
        Ok(Self { conn })
    }

    /// All items, ordered by id ascending. Empty when none exist.
    pub fn list(&self) -> Result<Vec<Item>, StoreError> {
        tracing::debug!(statement = LIST_SQL, "list items");
        let mut stmt = self.conn.prepare(LIST_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(Item {
                id: row.get(0)?,
                description: row.get(1)?,
                done: row.get(2)?,
            })
        })?;
        let mut items = Vec::new();
        for item in rows {
            items.push(item?);
        }
        Ok(items)
    }

    /// The item with the given id, or `None` when no row matches.
    pub fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        tracing::debug!(statement = SELECT_SQL, id, "get item");
        let item = self
            .conn
            .query_row(SELECT_SQL, params![id], |row| {
                Ok(Item {
                    id,
                    description: row.get(0)?,
                    done: row.get(1)?,
                })
            })
            .optional()?;
        Ok(item)
    }

    /// Insert a new item with `done = false` and return it with the
    /// store-assigned id.
    pub fn create(&self, description: &str) -> Result<Item, StoreError> {
        tracing::debug!(statement = INSERT_SQL, description, "create item");
        self.conn.execute(INSERT_SQL, params![description])?;
        Ok(Item {
            id: self.conn.last_insert_rowid(),
            description: description.to_string(),
            done: false,
        })
    }

    /// Set the done flag. Silently a no-op when the id does not exist.
    pub fn set_done(&self, id: i64, done: bool) -> Result<(), StoreError> {
        tracing::debug!(statement = UPDATE_SQL, id, done, "update status");
        self.conn.execute(UPDATE_SQL, params![done, id])?;
        Ok(())
    }

    /// Remove the item. Silently a no-op when the id does not exist.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        tracing::debug!(statement = DELETE_SQL, id, "delete item");
        self.conn.execute(DELETE_SQL, params![id])?;
        Ok(())
    }

    /// Drop the table. Idempotent: dropping a missing table succeeds.
    pub fn drop_table(&self) -> Result<(), StoreError> {
        tracing::debug!(statement = DROP_TABLE_SQL, "drop table");
        self.conn.execute(DROP_TABLE_SQL, [])?;
        Ok(())
    }

    /// Drop, recreate, and seed the table with [`SEED_TASKS`], all in one
    /// transaction.
    pub fn init(&mut self) -> Result<(), StoreError> {
        tracing::debug!("reinitialize table");
        let tx = self.conn.transaction()?;
        tx.execute(DROP_TABLE_SQL, [])?;
        tx.execute(CREATE_TABLE_SQL, [])?;
        for task in SEED_TASKS {
            tx.execute(INSERT_SQL, params![task])?;
        }
        tx.commit()?;
        Ok(())
    }
}
