//! SQLite-backed song store.
//!
//! A single connection guarded by a mutex serves every request. Each call runs
//! inside its own transaction: reads are rolled back when dropped, writes are
//! committed as a unit.

use super::schema::SONG_SCHEMA;
use super::trait_def::{Page, PageRequest, SongStore};
use crate::song::{validate_song, AuditInfo, Category, Song, SongId};
use crate::sqlite_persistence::open_schema;
use anyhow::{anyhow, bail, Context, Result};
use rusqlite::{params, types::Type, Connection, OptionalExtension, ToSql, Transaction};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

const SONG_COLUMNS: &str =
    "id, title, description, duration, artist_name, category, created_at, updated_at";

/// SQLite-backed song store.
#[derive(Clone)]
pub struct SqliteSongStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSongStore {
    /// Open (or create) the song database at `db_path`, bringing its schema
    /// to the latest version.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        let mut conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open song database {:?}", db_path))?;

        open_schema(&mut conn, &SONG_SCHEMA)
            .with_context(|| format!("Failed to prepare song database {:?}", db_path))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let song_count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))?;
        info!("Opened song catalog {:?}: {} songs", db_path, song_count);

        Ok(SqliteSongStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Song database connection lock is poisoned"))
    }

    fn parse_song_row(row: &rusqlite::Row) -> rusqlite::Result<Song> {
        let category_name: String = row.get(5)?;
        let category = Category::from_name(&category_name).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Unknown category '{}'", category_name).into(),
            )
        })?;
        Ok(Song {
            id: Some(SongId(row.get(0)?)),
            title: row.get(1)?,
            description: row.get(2)?,
            duration: row.get(3)?,
            artist_name: row.get(4)?,
            category,
            audit: Some(AuditInfo {
                created_at: row.get(6)?,
                updated_at: row.get(7)?,
            }),
        })
    }

    fn get_song_inner(tx: &Transaction, id: SongId) -> Result<Option<Song>> {
        let song = tx
            .query_row(
                &format!("SELECT {} FROM songs WHERE id = ?1", SONG_COLUMNS),
                params![id.0],
                Self::parse_song_row,
            )
            .optional()?;
        Ok(song)
    }

    /// Count and fetch one window of the songs matching `filter`.
    fn find_page(
        &self,
        filter: Option<(&str, &dyn ToSql)>,
        page: PageRequest,
    ) -> Result<Page<Song>> {
        let (where_clause, args): (String, Vec<&dyn ToSql>) = match filter {
            Some((column, value)) => (format!("WHERE {} = ?1", column), vec![value]),
            None => (String::new(), vec![]),
        };

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let total_items: i64 = tx.query_row(
            &format!("SELECT COUNT(*) FROM songs {}", where_clause),
            args.as_slice(),
            |r| r.get(0),
        )?;

        let limit = page.limit();
        let offset = page.offset();
        let mut window_args = args.clone();
        window_args.push(&limit);
        window_args.push(&offset);
        let sql = format!(
            "SELECT {} FROM songs {} ORDER BY id {} LIMIT ?{} OFFSET ?{}",
            SONG_COLUMNS,
            where_clause,
            page.direction.as_sql(),
            args.len() + 1,
            args.len() + 2
        );
        let items = {
            let mut stmt = tx.prepare(&sql)?;
            let rows = stmt.query_map(window_args.as_slice(), Self::parse_song_row)?;
            rows.collect::<Result<Vec<_>, _>>()
                .context("Failed to read songs")?
        };

        Ok(Page {
            items,
            page: page.page,
            size: page.size,
            total_items: total_items as u64,
        })
    }
}

impl SongStore for SqliteSongStore {
    fn find_all(&self, page: PageRequest) -> Result<Page<Song>> {
        self.find_page(None, page)
    }

    fn find_by_category(&self, category: Category, page: PageRequest) -> Result<Page<Song>> {
        let name = category.as_str();
        let filter: (&str, &dyn ToSql) = ("category", &name);
        self.find_page(Some(filter), page)
    }

    fn find_by_artist_name(&self, artist_name: &str, page: PageRequest) -> Result<Page<Song>> {
        let filter: (&str, &dyn ToSql) = ("artist_name", &artist_name);
        self.find_page(Some(filter), page)
    }

    fn find_by_id(&self, id: SongId) -> Result<Option<Song>> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        let song = Self::get_song_inner(&tx, id)?;
        Ok(song)
    }

    fn save(&self, song: &Song) -> Result<Option<Song>> {
        if let Err(errors) = validate_song(song) {
            bail!("Refusing to save invalid song: {}", errors);
        }

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let id = match song.id {
            None => {
                tx.execute(
                    "INSERT INTO songs (title, description, duration, artist_name, category) \
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        song.title,
                        song.description,
                        song.duration,
                        song.artist_name,
                        song.category.as_str(),
                    ],
                )
                .context("Failed to insert song")?;
                SongId(tx.last_insert_rowid())
            }
            Some(id) => {
                let updated = tx
                    .execute(
                        "UPDATE songs SET title = ?1, description = ?2, duration = ?3, \
                         artist_name = ?4, category = ?5, \
                         updated_at = cast(strftime('%s','now') as int) \
                         WHERE id = ?6",
                        params![
                            song.title,
                            song.description,
                            song.duration,
                            song.artist_name,
                            song.category.as_str(),
                            id.0,
                        ],
                    )
                    .with_context(|| format!("Failed to update song {}", id))?;
                if updated == 0 {
                    debug!("Song {} vanished before update", id);
                    return Ok(None);
                }
                id
            }
        };

        let saved = Self::get_song_inner(&tx, id)?
            .with_context(|| format!("Song {} missing right after save", id))?;
        tx.commit()?;
        Ok(Some(saved))
    }

    fn delete_by_id(&self, id: SongId) -> Result<bool> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        let deleted = tx
            .execute("DELETE FROM songs WHERE id = ?1", params![id.0])
            .with_context(|| format!("Failed to delete song {}", id))?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    fn count(&self) -> Result<u64> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))?;
        Ok(count as u64)
    }
}
