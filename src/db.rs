//! Sets up the SQLite database that backs [SQLiteStorage](crate::SQLiteStorage).

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::Error;

/// Create the tables used by the application if they do not exist yet.
///
/// The database holds a single key-value table. Each row is one durable,
/// string-keyed record.
///
/// # Errors
/// Returns an [Error::SqlError] if the table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_storage_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

fn create_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}
