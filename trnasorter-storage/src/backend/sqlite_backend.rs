/// SQLite record store
///
/// One `sorted` table holds the accepted records, one `sorter_stats` row is
/// appended per run.
use rusqlite::{params, params_from_iter, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::{RecordRow, RecordStore, STATS_COLUMN_NAMES};
use trnasorter_core::types::STATS_COLUMNS;
use trnasorter_core::{ClassificationResult, SorterError, SorterResult, SorterStats};

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS sorted (
    id TEXT NOT NULL,
    seq TEXT NOT NULL,
    trailer TEXT,
    t_loop TEXT NOT NULL,
    acceptor TEXT NOT NULL,
    full_length TEXT NOT NULL,
    seq_length INTEGER NOT NULL,
    trailer_length INTEGER NOT NULL,
    anticodon TEXT
);
CREATE TABLE IF NOT EXISTS sorter_stats (
    run_id INTEGER PRIMARY KEY AUTOINCREMENT,
    total_seqs INTEGER NOT NULL,
    total_rejected INTEGER NOT NULL,
    total_passed INTEGER NOT NULL,
    num_trailer INTEGER NOT NULL,
    total_full_length INTEGER NOT NULL,
    no_divergence INTEGER NOT NULL,
    t_loop_divergence INTEGER NOT NULL,
    div_at_0 INTEGER NOT NULL,
    div_at_1 INTEGER NOT NULL,
    div_at_2 INTEGER NOT NULL,
    div_at_3 INTEGER NOT NULL,
    div_at_8 INTEGER NOT NULL,
    acceptor_divergence INTEGER NOT NULL,
    div_at_neg_1 INTEGER NOT NULL,
    div_at_neg_2 INTEGER NOT NULL,
    div_at_neg_3 INTEGER NOT NULL,
    t_loop_seq_rejected INTEGER NOT NULL,
    acceptor_seq_rejected INTEGER NOT NULL,
    both_rejected INTEGER NOT NULL,
    short_rejected INTEGER NOT NULL
);
";

const INSERT_RECORD: &str = "INSERT INTO sorted
    (id, seq, trailer, t_loop, acceptor, full_length, seq_length, trailer_length, anticodon)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

const SELECT_RECORDS: &str = "SELECT id, seq, trailer, t_loop, acceptor, full_length,
    seq_length, trailer_length, anticodon FROM sorted ORDER BY rowid";

fn db_error(err: rusqlite::Error) -> SorterError {
    SorterError::Database(err.to_string())
}

/// SQLite-backed [`RecordStore`]
pub struct SqliteStore {
    conn: Option<Connection>,
    path: PathBuf,
    in_batch: bool,
}

impl SqliteStore {
    /// Open or create the database at `path` and make sure both tables exist
    pub fn open<P: AsRef<Path>>(path: P) -> SorterResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(db_error)?;
        conn.execute_batch(CREATE_TABLES).map_err(db_error)?;
        info!("Opened record store at {}", path.display());
        Ok(Self {
            conn: Some(conn),
            path,
            in_batch: false,
        })
    }

    /// Open a database written by an earlier run, read-only
    pub fn open_existing<P: AsRef<Path>>(path: P) -> SorterResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(SorterError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("database not found: {}", path.display()),
            )));
        }
        let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(db_error)?;
        Ok(Self {
            conn: Some(conn),
            path,
            in_batch: false,
        })
    }

    pub fn open_in_memory() -> SorterResult<Self> {
        let conn = Connection::open_in_memory().map_err(db_error)?;
        conn.execute_batch(CREATE_TABLES).map_err(db_error)?;
        Ok(Self {
            conn: Some(conn),
            path: PathBuf::from(":memory:"),
            in_batch: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn conn(&self) -> SorterResult<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            SorterError::Database(format!("store {} is closed", self.path.display()))
        })
    }

    pub fn record_count(&self) -> SorterResult<u64> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM sorted", [], |row| row.get(0))
            .map_err(db_error)?;
        Ok(count as u64)
    }

    /// All stored records in insertion order
    pub fn records(&self) -> SorterResult<Vec<RecordRow>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_RECORDS).map_err(db_error)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RecordRow {
                    id: row.get(0)?,
                    seq: row.get(1)?,
                    trailer: row.get(2)?,
                    t_loop: row.get(3)?,
                    acceptor: row.get(4)?,
                    full_length: row.get(5)?,
                    seq_length: row.get(6)?,
                    trailer_length: row.get(7)?,
                    anticodon: row.get(8)?,
                })
            })
            .map_err(db_error)?;

        let records = rows.collect::<Result<Vec<_>, _>>().map_err(db_error)?;
        Ok(records)
    }

    /// Statistics of the most recent run, if any run finished
    pub fn latest_statistics(&self) -> SorterResult<Option<SorterStats>> {
        let sql = format!(
            "SELECT {} FROM sorter_stats ORDER BY run_id DESC LIMIT 1",
            STATS_COLUMN_NAMES.join(", ")
        );
        self.conn()?
            .query_row(&sql, [], |row| {
                let mut values = [0u64; STATS_COLUMNS];
                for (i, value) in values.iter_mut().enumerate() {
                    *value = row.get::<_, i64>(i)? as u64;
                }
                Ok(SorterStats::from_row(values))
            })
            .optional()
            .map_err(db_error)
    }
}

impl RecordStore for SqliteStore {
    fn insert_record(&mut self, result: &ClassificationResult, id: &str) -> SorterResult<()> {
        let row = RecordRow::from_result(result, id);
        let mut stmt = self.conn()?.prepare_cached(INSERT_RECORD).map_err(db_error)?;
        stmt.execute(params![
            row.id,
            row.seq,
            row.trailer,
            row.t_loop,
            row.acceptor,
            row.full_length,
            row.seq_length,
            row.trailer_length,
            row.anticodon,
        ])
        .map_err(db_error)?;
        Ok(())
    }

    fn insert_statistics(&mut self, stats: &SorterStats) -> SorterResult<()> {
        let placeholders = vec!["?"; STATS_COLUMNS].join(", ");
        let sql = format!(
            "INSERT INTO sorter_stats ({}) VALUES ({})",
            STATS_COLUMN_NAMES.join(", "),
            placeholders
        );
        self.conn()?
            .execute(&sql, params_from_iter(stats.as_row().iter().map(|v| *v as i64)))
            .map_err(db_error)?;
        debug!("Stored run statistics: {} sequences", stats.total_seqs);
        Ok(())
    }

    fn close(&mut self) -> SorterResult<()> {
        match self.conn.take() {
            Some(conn) => {
                conn.close().map_err(|(_, e)| db_error(e))?;
                info!("Closed record store at {}", self.path.display());
                Ok(())
            }
            None => Err(SorterError::Database(format!(
                "store {} is already closed",
                self.path.display()
            ))),
        }
    }

    fn begin_batch(&mut self) -> SorterResult<()> {
        self.conn()?.execute_batch("BEGIN").map_err(db_error)?;
        self.in_batch = true;
        Ok(())
    }

    fn commit_batch(&mut self) -> SorterResult<()> {
        if self.in_batch {
            self.conn()?.execute_batch("COMMIT").map_err(db_error)?;
            self.in_batch = false;
        }
        Ok(())
    }

    fn rollback_batch(&mut self) -> SorterResult<()> {
        if self.in_batch {
            self.in_batch = false;
            self.conn()?.execute_batch("ROLLBACK").map_err(db_error)?;
        }
        Ok(())
    }
}
