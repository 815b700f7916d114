use imagedrop_core::{AppError, StoredFile};
use sqlx::{PgPool, Postgres};

/// Repository for stored-file metadata
///
/// The store assigns `id` and `uploaded_at` on insert; records are never
/// updated or deleted, so the only read is the newest-first listing.
#[derive(Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a metadata record for a blob already written to the sink.
    /// Returns the full row, including the store-assigned id and timestamp.
    pub async fn insert(
        &self,
        filename: &str,
        path: &str,
        size: i64,
        mimetype: &str,
    ) -> Result<StoredFile, AppError> {
        let record = sqlx::query_as::<Postgres, StoredFile>(
            r#"
            INSERT INTO files (filename, path, size, mimetype)
            VALUES ($1, $2, $3, $4)
            RETURNING id, filename, path, size, mimetype, uploaded_at
            "#,
        )
        .bind(filename)
        .bind(path)
        .bind(size)
        .bind(mimetype)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::MetadataPersist)?;

        tracing::debug!(
            id = %record.id,
            filename = %record.filename,
            size_bytes = record.size,
            "File metadata inserted"
        );

        Ok(record)
    }

    /// All stored files, newest first. `id` breaks ties between equal
    /// timestamps so repeated listings are identical.
    pub async fn list_all(&self) -> Result<Vec<StoredFile>, AppError> {
        sqlx::query_as::<Postgres, StoredFile>(
            r#"
            SELECT id, filename, path, size, mimetype, uploaded_at
            FROM files
            ORDER BY uploaded_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::MetadataRead)
    }
}
