use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY,
            email           TEXT NOT NULL UNIQUE,
            password_hash   TEXT NOT NULL,
            handle          TEXT NOT NULL UNIQUE,
            bio             TEXT NOT NULL DEFAULT '',
            favorite_snack  TEXT NOT NULL DEFAULT '',
            karma           INTEGER NOT NULL DEFAULT 0,
            karma_bonus     INTEGER NOT NULL DEFAULT 0,
            is_suspended    INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS confessions (
            id              INTEGER PRIMARY KEY,
            user_id         INTEGER NOT NULL REFERENCES users(id),
            content         TEXT NOT NULL,
            mood            TEXT NOT NULL DEFAULT '',
            location        TEXT NOT NULL DEFAULT '',
            tagged_users    TEXT NOT NULL DEFAULT '',
            upvotes         INTEGER NOT NULL DEFAULT 0,
            downvotes       INTEGER NOT NULL DEFAULT 0,
            is_flagged      INTEGER NOT NULL DEFAULT 0,
            is_deleted      INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_confessions_created
            ON confessions(created_at);

        CREATE TABLE IF NOT EXISTS comments (
            id              INTEGER PRIMARY KEY,
            confession_id   INTEGER NOT NULL REFERENCES confessions(id),
            user_id         INTEGER NOT NULL REFERENCES users(id),
            content         TEXT NOT NULL,
            is_flagged      INTEGER NOT NULL DEFAULT 0,
            is_deleted      INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_comments_confession
            ON comments(confession_id, created_at);

        CREATE TABLE IF NOT EXISTS votes (
            id              INTEGER PRIMARY KEY,
            user_id         INTEGER NOT NULL REFERENCES users(id),
            confession_id   INTEGER NOT NULL REFERENCES confessions(id),
            vote_type       TEXT NOT NULL CHECK (vote_type IN ('upvote', 'downvote')),
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(user_id, confession_id)
        );

        CREATE INDEX IF NOT EXISTS idx_votes_confession
            ON votes(confession_id);

        CREATE TABLE IF NOT EXISTS flags (
            id              INTEGER PRIMARY KEY,
            user_id         INTEGER NOT NULL REFERENCES users(id),
            content_type    TEXT NOT NULL CHECK (content_type IN ('confession', 'comment')),
            content_id      INTEGER NOT NULL,
            reason          TEXT NOT NULL DEFAULT '',
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_flags_target
            ON flags(content_type, content_id);

        -- The response bot owns its comments through a real, login-proof row
        INSERT OR IGNORE INTO users (id, email, password_hash, handle, is_suspended)
            VALUES (0, 'bot@confessly.invalid', '!', 'Confessor Bot', 1);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
