use std::path::Path;

use rusqlite::Connection;
use tracing;

use super::DatabaseError;

/// Schema version the crate was built against. `run_migrations` brings
/// any older store up to this version without touching existing rows.
pub const SCHEMA_VERSION: i64 = 2;

/// Open a SQLite connection to the given path and run migrations
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_current_version(conn);

    let migrations: Vec<(i64, &str)> = vec![
        (1, include_str!("../../resources/migrations/001_initial.sql")),
        (2, include_str!("../../resources/migrations/002_staff_groups.sql")),
    ];

    for (version, sql) in migrations {
        if version > current_version {
            tracing::info!("Running migration v{version}");
            conn.execute_batch(sql).map_err(|e| DatabaseError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        }
    }

    Ok(())
}

/// Get the current schema version (0 if no schema exists yet)
fn get_current_version(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT MAX(version) FROM schema_version",
        [],
        |row| row.get::<_, i64>(0),
    )
    .unwrap_or(0)
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_initializes_all_tables() {
        let conn = open_memory_database().unwrap();
        // schema_version + doctors
        let count = count_tables(&conn).unwrap();
        assert_eq!(count, 2, "Expected 2 tables, got {count}");
    }

    #[test]
    fn schema_version_is_current() {
        let conn = open_memory_database().unwrap();
        let version: i64 = conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn migration_idempotent() {
        let conn = open_memory_database().unwrap();
        // Run migrations again — should not error
        let result = run_migrations(&conn);
        assert!(result.is_ok());
    }

    #[test]
    fn foreign_keys_enabled() {
        let conn = open_memory_database().unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn doctors_indices_present() {
        let conn = open_memory_database().unwrap();
        let names: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='index' AND tbl_name='doctors' AND name LIKE 'idx_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        for expected in [
            "idx_doctors_id_number",
            "idx_doctors_name",
            "idx_doctors_staff_group",
            "idx_doctors_has_specialty",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing index {expected}");
        }
    }

    #[test]
    fn opens_on_disk_and_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinicavida.db");

        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO doctors (name, id_number, birth_date, has_specialty, specialty, staff_group, email)
             VALUES ('Laura Gómez', 'CC-1001', '1985-03-12', 0, NULL, 'urgencias', '')",
            [],
        )
        .unwrap();
        drop(conn);

        // Reopen: migrations are a no-op, data is still there
        let conn = open_database(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn upgrade_from_v1_preserves_records() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("../../resources/migrations/001_initial.sql"))
            .unwrap();
        conn.execute(
            "INSERT INTO doctors (name, id_number, birth_date, has_specialty, specialty)
             VALUES ('Carlos Pérez', 'CC-2002', '1979-11-30', 1, 'Oncología')",
            [],
        )
        .unwrap();

        run_migrations(&conn).unwrap();

        let (group, email): (String, String) = conn
            .query_row(
                "SELECT staff_group, email FROM doctors WHERE id_number = 'CC-2002'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(group, "urgencias");
        assert_eq!(email, "");

        let version: i64 = conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }
}
