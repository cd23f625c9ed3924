use crate::cache::error::CacheError;
use rusqlite::{Connection, Transaction};

const CURRENT_SCHEMA_VERSION: i32 = 1;

pub fn run_migrations(conn: &mut Connection) -> Result<(), CacheError> {
    let mut version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|source| CacheError::Migration { version: 0, source })?;

    if version > CURRENT_SCHEMA_VERSION {
        return Err(CacheError::SchemaTooNew {
            found: version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    if version == CURRENT_SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction().map_err(|source| CacheError::Migration {
        version: version + 1,
        source,
    })?;

    while version < CURRENT_SCHEMA_VERSION {
        let next_version = version + 1;
        apply_migration(&tx, next_version).map_err(|source| CacheError::Migration {
            version: next_version,
            source,
        })?;
        version = next_version;
    }

    tx.pragma_update(None, "user_version", CURRENT_SCHEMA_VERSION)
        .and_then(|_| tx.commit())
        .map_err(|source| CacheError::Migration {
            version: CURRENT_SCHEMA_VERSION,
            source,
        })
}

fn apply_migration(tx: &Transaction<'_>, version: i32) -> Result<(), rusqlite::Error> {
    match version {
        1 => tx.execute_batch(include_str!("schemas/schema_v1.sql")),
        _ => Ok(()),
    }
}
