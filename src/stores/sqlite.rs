//! Implements a SQLite backed storage.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, db::initialize, stores::Storage};

/// Stores a record in a SQLite database under a fixed key.
#[derive(Debug)]
pub struct SQLiteStorage {
    connection: Connection,
    key: String,
}

impl SQLiteStorage {
    /// Create a new storage for the SQLite `connection` that reads and writes the row `key`.
    ///
    /// This function will modify the database by adding the storage table if it
    /// does not exist.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database cannot be initialized.
    pub fn new(connection: Connection, key: &str) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection,
            key: key.to_owned(),
        })
    }

    /// Open or create the database file at `path` and use the row `key`.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the file cannot be opened or initialized.
    pub fn open(path: impl AsRef<Path>, key: &str) -> Result<Self, Error> {
        let connection = Connection::open(path)?;

        Self::new(connection, key)
    }
}

impl Storage for SQLiteStorage {
    fn load(&self) -> Result<Option<String>, Error> {
        let value = self
            .connection
            .query_row(
                "SELECT value FROM storage WHERE key = :key",
                &[(":key", &self.key)],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn save(&mut self, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (&self.key, value),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::stores::{SQLiteStorage, Storage};

    fn get_test_storage(key: &str) -> SQLiteStorage {
        let connection = Connection::open_in_memory().unwrap();
        SQLiteStorage::new(connection, key).expect("Could not create storage")
    }

    #[test]
    fn load_is_none_before_first_save() {
        let storage = get_test_storage("transactions");

        assert_eq!(storage.load(), Ok(None));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let mut storage = get_test_storage("transactions");

        storage.save("[1]").unwrap();
        storage.save("[2]").unwrap();

        assert_eq!(storage.load(), Ok(Some("[2]".to_owned())));
    }

    #[test]
    fn keys_do_not_share_values() {
        let connection = Connection::open_in_memory().unwrap();
        let mut storage = SQLiteStorage::new(connection, "a").unwrap();
        storage.save("for a").unwrap();

        let other = SQLiteStorage {
            connection: storage.connection,
            key: "b".to_owned(),
        };

        assert_eq!(other.load(), Ok(None));
    }
}
