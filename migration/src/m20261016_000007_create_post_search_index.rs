use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

/// Name of the SQLite FTS5 shadow index over `post(title, content)`.
pub const POST_FTS_TABLE: &str = "post_fts";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for statement in post_search_index_statements(manager.get_database_backend()) {
            db.execute_unprepared(statement).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let statements: &[&str] = match manager.get_database_backend() {
            DatabaseBackend::Postgres => &[
                "DROP INDEX IF EXISTS idx_post_title_fts",
                "DROP INDEX IF EXISTS idx_post_content_fts",
            ],
            DatabaseBackend::Sqlite => &[
                "DROP TRIGGER IF EXISTS post_fts_after_insert",
                "DROP TRIGGER IF EXISTS post_fts_after_delete",
                "DROP TRIGGER IF EXISTS post_fts_after_update",
                "DROP TABLE IF EXISTS post_fts",
            ],
            DatabaseBackend::MySql => &[
                "ALTER TABLE post DROP INDEX idx_post_title_fts",
                "ALTER TABLE post DROP INDEX idx_post_content_fts",
            ],
            _ => &[],
        };

        for statement in statements {
            db.execute_unprepared(statement).await?;
        }

        Ok(())
    }
}

/// DDL creating the full-text index for post search on the given backend.
///
/// SQLite keeps an external-content FTS5 table in sync through triggers, so the
/// `post` table must already exist when these run.
fn post_search_index_statements(backend: DatabaseBackend) -> Vec<&'static str> {
    match backend {
        DatabaseBackend::Postgres => vec![
            "CREATE INDEX IF NOT EXISTS idx_post_title_fts ON post \
             USING GIN (to_tsvector('simple', title))",
            "CREATE INDEX IF NOT EXISTS idx_post_content_fts ON post \
             USING GIN (to_tsvector('simple', content))",
        ],
        DatabaseBackend::Sqlite => vec![
            "CREATE VIRTUAL TABLE IF NOT EXISTS post_fts USING fts5(\
             title, content, content='post', content_rowid='id')",
            "CREATE TRIGGER IF NOT EXISTS post_fts_after_insert AFTER INSERT ON post BEGIN \
             INSERT INTO post_fts(rowid, title, content) VALUES (new.id, new.title, new.content); \
             END",
            "CREATE TRIGGER IF NOT EXISTS post_fts_after_delete AFTER DELETE ON post BEGIN \
             INSERT INTO post_fts(post_fts, rowid, title, content) \
             VALUES ('delete', old.id, old.title, old.content); \
             END",
            "CREATE TRIGGER IF NOT EXISTS post_fts_after_update AFTER UPDATE OF title, content ON post BEGIN \
             INSERT INTO post_fts(post_fts, rowid, title, content) \
             VALUES ('delete', old.id, old.title, old.content); \
             INSERT INTO post_fts(rowid, title, content) VALUES (new.id, new.title, new.content); \
             END",
        ],
        DatabaseBackend::MySql => vec![
            "CREATE FULLTEXT INDEX idx_post_title_fts ON post (title)",
            "CREATE FULLTEXT INDEX idx_post_content_fts ON post (content)",
        ],
        _ => vec![],
    }
}
