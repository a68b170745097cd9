use crate::Database;
use crate::ledger::plan_vote;
use crate::models::{
    CommentRow, ConfessionRow, ExportCommentRow, FlaggedRow, ReconcileReport, UserExportRows,
    UserRow, VoteOutcome,
};
use anyhow::{Result, anyhow};
use confessly_types::models::{ContentType, VoteAction, VoteType};
use rusqlite::{Connection, Row};
use tracing::{debug, warn};

const USER_COLUMNS: &str =
    "id, email, password_hash, handle, bio, favorite_snack, karma, is_suspended, created_at";

const CONFESSION_COLUMNS: &str = "id, user_id, content, mood, location, tagged_users, upvotes, downvotes, is_flagged, created_at";

impl Database {
    // -- Users --

    /// Inserts a user and returns its id, or `None` when the email or handle
    /// is already taken.
    pub fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        handle: &str,
        bio: &str,
        favorite_snack: &str,
    ) -> Result<Option<i64>> {
        self.with_conn_mut(|conn| {
            let inserted = conn.execute(
                "INSERT INTO users (email, password_hash, handle, bio, favorite_snack) VALUES (?1, ?2, ?3, ?4, ?5)",
                (email, password_hash, handle, bio, favorite_snack),
            );
            match inserted {
                Ok(_) => Ok(Some(conn.last_insert_rowid())),
                Err(e) if is_constraint_violation(&e) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "email", &email))
    }

    pub fn get_user_by_handle(&self, handle: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "handle", &handle))
    }

    pub fn get_user_by_id(&self, id: i64) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "id", &id))
    }

    /// Grants karma outside the vote ledger. The grant is remembered in
    /// `karma_bonus` so reconciliation keeps it.
    pub fn grant_karma(&self, user_id: i64, amount: i64) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE users SET karma = karma + ?1, karma_bonus = karma_bonus + ?1 WHERE id = ?2",
                (amount, user_id),
            )?;
            Ok(())
        })
    }

    pub fn set_suspended(&self, user_id: i64, suspended: bool) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE users SET is_suspended = ?1 WHERE id = ?2",
                (suspended, user_id),
            )?;
            Ok(())
        })
    }

    // -- Confessions --

    pub fn create_confession(
        &self,
        user_id: i64,
        content: &str,
        mood: &str,
        location: &str,
        tagged_users: &str,
    ) -> Result<ConfessionRow> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO confessions (user_id, content, mood, location, tagged_users) VALUES (?1, ?2, ?3, ?4, ?5)",
                (user_id, content, mood, location, tagged_users),
            )?;
            let id = conn.last_insert_rowid();
            query_confession(conn, id)?.ok_or_else(|| anyhow!("Confession {} vanished after insert", id))
        })
    }

    /// Visible (not deleted) confession by id.
    pub fn get_confession(&self, id: i64) -> Result<Option<ConfessionRow>> {
        self.with_conn(|conn| query_confession(conn, id))
    }

    /// Newest first. Ties on the second-resolution timestamp fall back to id.
    pub fn list_confessions(&self, limit: u32, offset: u32) -> Result<Vec<ConfessionRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {CONFESSION_COLUMNS} FROM confessions
                 WHERE is_deleted = 0
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?1 OFFSET ?2"
            ))?;
            let rows = stmt
                .query_map((limit, offset), confession_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Votes --

    /// Applies one vote request: the vote row, the confession counters, and
    /// the author's karma change together or not at all.
    /// Returns `None` when the confession does not exist or was deleted.
    pub fn cast_vote(
        &self,
        user_id: i64,
        confession_id: i64,
        vote: VoteType,
    ) -> Result<Option<VoteOutcome>> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let author_id: Option<i64> = tx
                .query_row(
                    "SELECT user_id FROM confessions WHERE id = ?1 AND is_deleted = 0",
                    [confession_id],
                    |row| row.get(0),
                )
                .optional()?;
            let Some(author_id) = author_id else {
                return Ok(None);
            };

            let existing: Option<String> = tx
                .query_row(
                    "SELECT vote_type FROM votes WHERE user_id = ?1 AND confession_id = ?2",
                    (user_id, confession_id),
                    |row| row.get(0),
                )
                .optional()?;
            let existing = existing
                .map(|v| v.parse::<VoteType>())
                .transpose()
                .map_err(|e| anyhow!("Corrupt vote row for confession {}: {}", confession_id, e))?;

            let plan = plan_vote(existing, vote);

            match plan.action {
                VoteAction::Added => {
                    tx.execute(
                        "INSERT INTO votes (user_id, confession_id, vote_type) VALUES (?1, ?2, ?3)",
                        (user_id, confession_id, vote.as_str()),
                    )?;
                }
                VoteAction::Removed => {
                    tx.execute(
                        "DELETE FROM votes WHERE user_id = ?1 AND confession_id = ?2",
                        (user_id, confession_id),
                    )?;
                }
                VoteAction::Changed => {
                    tx.execute(
                        "UPDATE votes SET vote_type = ?1 WHERE user_id = ?2 AND confession_id = ?3",
                        (vote.as_str(), user_id, confession_id),
                    )?;
                }
            }

            for (column_vote, step) in [(plan.decrement, -1i64), (plan.increment, 1i64)] {
                if let Some(v) = column_vote {
                    let column = v.counter_column();
                    tx.execute(
                        &format!("UPDATE confessions SET {column} = {column} + ?1 WHERE id = ?2"),
                        (step, confession_id),
                    )?;
                }
            }

            tx.execute(
                "UPDATE users SET karma = karma + ?1 WHERE id = ?2",
                (plan.karma_delta, author_id),
            )?;

            let (upvotes, downvotes): (i64, i64) = tx.query_row(
                "SELECT upvotes, downvotes FROM confessions WHERE id = ?1",
                [confession_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?;

            tx.commit()?;

            debug!(
                confession_id,
                user_id,
                action = ?plan.action,
                karma_delta = plan.karma_delta,
                "vote applied"
            );

            Ok(Some(VoteOutcome {
                action: plan.action,
                vote_type: vote,
                previous: plan.previous,
                karma_delta: plan.karma_delta,
                author_id,
                upvotes,
                downvotes,
            }))
        })
    }

    /// Current vote of a user on a confession, if any.
    pub fn get_vote(&self, user_id: i64, confession_id: i64) -> Result<Option<VoteType>> {
        self.with_conn(|conn| {
            let v: Option<String> = conn
                .query_row(
                    "SELECT vote_type FROM votes WHERE user_id = ?1 AND confession_id = ?2",
                    (user_id, confession_id),
                    |row| row.get(0),
                )
                .optional()?;
            v.map(|s| s.parse::<VoteType>().map_err(|e| anyhow!("Corrupt vote row: {}", e)))
                .transpose()
        })
    }

    /// (upvotes, downvotes) counted from the vote rows themselves.
    pub fn vote_tally(&self, confession_id: i64) -> Result<(i64, i64)> {
        self.with_conn(|conn| {
            let tally = conn.query_row(
                "SELECT
                    COALESCE(SUM(vote_type = 'upvote'), 0),
                    COALESCE(SUM(vote_type = 'downvote'), 0)
                 FROM votes WHERE confession_id = ?1",
                [confession_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?;
            Ok(tally)
        })
    }

    /// Rebuilds confession counters and user karma from the vote rows.
    pub fn reconcile_counters(&self) -> Result<ReconcileReport> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let confessions_fixed = tx.execute(
                "WITH tally AS (
                    SELECT c.id AS cid,
                           (SELECT COUNT(*) FROM votes v WHERE v.confession_id = c.id AND v.vote_type = 'upvote') AS up,
                           (SELECT COUNT(*) FROM votes v WHERE v.confession_id = c.id AND v.vote_type = 'downvote') AS down
                    FROM confessions c
                 )
                 UPDATE confessions
                 SET upvotes = (SELECT up FROM tally WHERE cid = confessions.id),
                     downvotes = (SELECT down FROM tally WHERE cid = confessions.id)
                 WHERE id IN (
                    SELECT cid FROM tally t JOIN confessions c ON c.id = t.cid
                    WHERE c.upvotes != t.up OR c.downvotes != t.down
                 )",
                [],
            )?;

            let users_fixed = tx.execute(
                "WITH earned AS (
                    SELECT u.id AS uid,
                           u.karma_bonus + COALESCE((
                               SELECT SUM(CASE v.vote_type WHEN 'upvote' THEN 1 ELSE -1 END)
                               FROM votes v JOIN confessions c ON v.confession_id = c.id
                               WHERE c.user_id = u.id
                           ), 0) AS karma
                    FROM users u
                 )
                 UPDATE users
                 SET karma = (SELECT karma FROM earned WHERE uid = users.id)
                 WHERE id IN (
                    SELECT uid FROM earned e JOIN users u ON u.id = e.uid
                    WHERE u.karma != e.karma
                 )",
                [],
            )?;

            tx.commit()?;

            if confessions_fixed > 0 || users_fixed > 0 {
                warn!(confessions_fixed, users_fixed, "vote counters were out of sync");
            }

            Ok(ReconcileReport {
                confessions_fixed,
                users_fixed,
            })
        })
    }

    // -- Comments --

    pub fn create_comment(
        &self,
        confession_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<CommentRow> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO comments (confession_id, user_id, content) VALUES (?1, ?2, ?3)",
                (confession_id, user_id, content),
            )?;
            let id = conn.last_insert_rowid();
            let row = conn.query_row(
                "SELECT id, confession_id, user_id, content, created_at FROM comments WHERE id = ?1",
                [id],
                comment_from_row,
            )?;
            Ok(row)
        })
    }

    /// Visible comments on a confession, oldest first.
    pub fn get_comments(&self, confession_id: i64) -> Result<Vec<CommentRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, confession_id, user_id, content, created_at FROM comments
                 WHERE confession_id = ?1 AND is_deleted = 0
                 ORDER BY created_at ASC, id ASC",
            )?;
            let rows = stmt
                .query_map([confession_id], comment_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Flags & moderation --

    /// Records a report and marks the target flagged. Returns `false` when
    /// the target does not exist or is already deleted, including a comment
    /// whose confession was deleted.
    pub fn flag_content(
        &self,
        user_id: i64,
        content_type: ContentType,
        content_id: i64,
        reason: &str,
    ) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let table = content_type.table();

            // A comment under a removed confession counts as removed too.
            let visible_sql = match content_type {
                ContentType::Confession => {
                    "SELECT id FROM confessions WHERE id = ?1 AND is_deleted = 0"
                }
                ContentType::Comment => {
                    "SELECT cm.id FROM comments cm
                     JOIN confessions c ON c.id = cm.confession_id
                     WHERE cm.id = ?1 AND cm.is_deleted = 0 AND c.is_deleted = 0"
                }
            };
            let exists: Option<i64> = tx
                .query_row(visible_sql, [content_id], |row| row.get(0))
                .optional()?;
            if exists.is_none() {
                return Ok(false);
            }

            tx.execute(
                "INSERT INTO flags (user_id, content_type, content_id, reason) VALUES (?1, ?2, ?3, ?4)",
                (user_id, content_type.as_str(), content_id, reason),
            )?;
            tx.execute(
                &format!("UPDATE {table} SET is_flagged = 1 WHERE id = ?1"),
                [content_id],
            )?;

            tx.commit()?;
            Ok(true)
        })
    }

    /// Flagged, non-deleted confessions and comments, newest first, with
    /// every non-empty report reason joined by commas. Comments under a
    /// deleted confession are left out.
    pub fn get_flagged_content(&self) -> Result<Vec<FlaggedRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT 'confession' AS type, c.id AS id, c.content AS content,
                        c.created_at AS created_at,
                        GROUP_CONCAT(NULLIF(f.reason, '')) AS flag_reasons
                 FROM confessions c
                 LEFT JOIN flags f ON f.content_type = 'confession' AND f.content_id = c.id
                 WHERE c.is_flagged = 1 AND c.is_deleted = 0
                 GROUP BY c.id
                 UNION ALL
                 SELECT 'comment' AS type, cm.id AS id, cm.content AS content,
                        cm.created_at AS created_at,
                        GROUP_CONCAT(NULLIF(f.reason, '')) AS flag_reasons
                 FROM comments cm
                 JOIN confessions parent ON parent.id = cm.confession_id
                 LEFT JOIN flags f ON f.content_type = 'comment' AND f.content_id = cm.id
                 WHERE cm.is_flagged = 1 AND cm.is_deleted = 0 AND parent.is_deleted = 0
                 GROUP BY cm.id
                 ORDER BY created_at DESC, id DESC",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(FlaggedRow {
                        content_type: row.get(0)?,
                        id: row.get(1)?,
                        content: row.get(2)?,
                        created_at: row.get(3)?,
                        flag_reasons: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Soft delete. Returns `false` when nothing visible had that id.
    pub fn soft_delete(&self, content_type: ContentType, id: i64) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let changed = conn.execute(
                &format!(
                    "UPDATE {} SET is_deleted = 1 WHERE id = ?1 AND is_deleted = 0",
                    content_type.table()
                ),
                [id],
            )?;
            Ok(changed > 0)
        })
    }

    // -- Export --

    pub fn get_user_data(&self, user_id: i64) -> Result<Option<UserExportRows>> {
        self.with_conn(|conn| {
            let Some(profile) = query_user(conn, "id", &user_id)? else {
                return Ok(None);
            };

            let mut stmt = conn.prepare(&format!(
                "SELECT {CONFESSION_COLUMNS} FROM confessions
                 WHERE user_id = ?1 AND is_deleted = 0
                 ORDER BY created_at ASC, id ASC"
            ))?;
            let confessions = stmt
                .query_map([user_id], confession_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            let mut stmt = conn.prepare(
                "SELECT cm.content, cm.created_at, c.content
                 FROM comments cm
                 JOIN confessions c ON cm.confession_id = c.id
                 WHERE cm.user_id = ?1 AND cm.is_deleted = 0
                 ORDER BY cm.created_at ASC, cm.id ASC",
            )?;
            let comments = stmt
                .query_map([user_id], |row| {
                    Ok(ExportCommentRow {
                        content: row.get(0)?,
                        created_at: row.get(1)?,
                        confession_content: row.get(2)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(Some(UserExportRows {
                profile,
                confessions,
                comments,
            }))
        })
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn query_user(
    conn: &Connection,
    column: &str,
    value: &dyn rusqlite::types::ToSql,
) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?1"))?;
    let row = stmt.query_row([value], user_from_row).optional()?;
    Ok(row)
}

fn query_confession(conn: &Connection, id: i64) -> Result<Option<ConfessionRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CONFESSION_COLUMNS} FROM confessions WHERE id = ?1 AND is_deleted = 0"
    ))?;
    let row = stmt.query_row([id], confession_from_row).optional()?;
    Ok(row)
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        handle: row.get(3)?,
        bio: row.get(4)?,
        favorite_snack: row.get(5)?,
        karma: row.get(6)?,
        is_suspended: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn confession_from_row(row: &Row<'_>) -> rusqlite::Result<ConfessionRow> {
    Ok(ConfessionRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        content: row.get(2)?,
        mood: row.get(3)?,
        location: row.get(4)?,
        tagged_users: row.get(5)?,
        upvotes: row.get(6)?,
        downvotes: row.get(7)?,
        is_flagged: row.get(8)?,
        created_at: row.get(9)?,
    })
}

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<CommentRow> {
    Ok(CommentRow {
        id: row.get(0)?,
        confession_id: row.get(1)?,
        user_id: row.get(2)?,
        content: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confessly_types::models::BOT_USER_ID;

    fn db_with_users(n: usize) -> (Database, Vec<i64>) {
        let db = Database::open_in_memory().unwrap();
        let ids = (0..n)
            .map(|i| {
                db.create_user(&format!("u{i}@example.com"), "hash", &format!("user_{i}"), "", "")
                    .unwrap()
                    .unwrap()
            })
            .collect();
        (db, ids)
    }

    fn karma(db: &Database, id: i64) -> i64 {
        db.get_user_by_id(id).unwrap().unwrap().karma
    }

    fn counters(db: &Database, id: i64) -> (i64, i64) {
        let c = db.get_confession(id).unwrap().unwrap();
        (c.upvotes, c.downvotes)
    }

    #[test]
    fn bot_row_is_seeded_and_suspended() {
        let db = Database::open_in_memory().unwrap();
        let bot = db.get_user_by_id(BOT_USER_ID).unwrap().unwrap();
        assert!(bot.is_suspended);
        assert_eq!(bot.karma, 0);
    }

    #[test]
    fn first_human_user_gets_id_one() {
        let (_db, ids) = db_with_users(2);
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn duplicate_email_or_handle_is_rejected() {
        let (db, _) = db_with_users(1);
        assert!(db.create_user("u0@example.com", "h", "other", "", "").unwrap().is_none());
        assert!(db.create_user("new@example.com", "h", "user_0", "", "").unwrap().is_none());
        assert!(db.create_user("new@example.com", "h", "fresh", "", "").unwrap().is_some());
    }

    #[test]
    fn vote_cycle_keeps_counters_and_karma_in_step() {
        let (db, ids) = db_with_users(2);
        let (author, voter) = (ids[0], ids[1]);
        let c = db.create_confession(author, "secret", "", "", "").unwrap();

        let added = db.cast_vote(voter, c.id, VoteType::Up).unwrap().unwrap();
        assert_eq!(added.action, VoteAction::Added);
        assert_eq!((added.upvotes, added.downvotes), (1, 0));
        assert_eq!(karma(&db, author), 1);

        let changed = db.cast_vote(voter, c.id, VoteType::Down).unwrap().unwrap();
        assert_eq!(changed.action, VoteAction::Changed);
        assert_eq!(changed.previous, Some(VoteType::Up));
        assert_eq!(changed.karma_delta, -2);
        assert_eq!((changed.upvotes, changed.downvotes), (0, 1));
        assert_eq!(karma(&db, author), -1);

        let removed = db.cast_vote(voter, c.id, VoteType::Down).unwrap().unwrap();
        assert_eq!(removed.action, VoteAction::Removed);
        assert_eq!((removed.upvotes, removed.downvotes), (0, 0));
        assert_eq!(karma(&db, author), 0);
        assert_eq!(db.get_vote(voter, c.id).unwrap(), None);
    }

    #[test]
    fn counters_match_vote_rows_after_mixed_sequences() {
        let (db, ids) = db_with_users(4);
        let author = ids[0];
        let c = db.create_confession(author, "pineapple on pizza", "guilty", "", "").unwrap();

        let script = [
            (1, VoteType::Up),
            (2, VoteType::Up),
            (3, VoteType::Down),
            (1, VoteType::Down),
            (2, VoteType::Up),
            (3, VoteType::Up),
            (1, VoteType::Down),
            (3, VoteType::Down),
            (2, VoteType::Down),
        ];
        for (voter, vote) in script {
            db.cast_vote(ids[voter], c.id, vote).unwrap().unwrap();
            let tally = db.vote_tally(c.id).unwrap();
            assert_eq!(counters(&db, c.id), tally);
            assert_eq!(karma(&db, author), tally.0 - tally.1);
        }
        assert_eq!(db.reconcile_counters().unwrap(), ReconcileReport::default());
    }

    #[test]
    fn repeating_a_vote_restores_prior_state() {
        let (db, ids) = db_with_users(3);
        let c = db.create_confession(ids[0], "x", "", "", "").unwrap();
        db.cast_vote(ids[2], c.id, VoteType::Down).unwrap();
        let before = (counters(&db, c.id), karma(&db, ids[0]));

        for vote in [VoteType::Up, VoteType::Down] {
            db.cast_vote(ids[1], c.id, vote).unwrap();
            db.cast_vote(ids[1], c.id, vote).unwrap();
            assert_eq!((counters(&db, c.id), karma(&db, ids[0])), before);
        }
    }

    #[test]
    fn voting_on_missing_or_deleted_confession_is_none() {
        let (db, ids) = db_with_users(2);
        assert!(db.cast_vote(ids[1], 999, VoteType::Up).unwrap().is_none());

        let c = db.create_confession(ids[0], "gone soon", "", "", "").unwrap();
        assert!(db.soft_delete(ContentType::Confession, c.id).unwrap());
        assert!(db.cast_vote(ids[1], c.id, VoteType::Up).unwrap().is_none());
        assert_eq!(karma(&db, ids[0]), 0);
    }

    #[test]
    fn reconcile_repairs_drift_and_keeps_grants() {
        let (db, ids) = db_with_users(2);
        let c = db.create_confession(ids[0], "drift", "", "", "").unwrap();
        db.cast_vote(ids[1], c.id, VoteType::Up).unwrap();
        db.grant_karma(ids[0], 150).unwrap();

        db.with_conn_mut(|conn| {
            conn.execute("UPDATE confessions SET upvotes = 7, downvotes = 3 WHERE id = ?1", [c.id])?;
            conn.execute("UPDATE users SET karma = 5 WHERE id = ?1", [ids[0]])?;
            Ok(())
        })
        .unwrap();

        let report = db.reconcile_counters().unwrap();
        assert_eq!(report, ReconcileReport { confessions_fixed: 1, users_fixed: 1 });
        assert_eq!(counters(&db, c.id), (1, 0));
        assert_eq!(karma(&db, ids[0]), 151);
    }

    #[test]
    fn listing_hides_deleted_and_pages_newest_first() {
        let (db, ids) = db_with_users(1);
        let made: Vec<i64> = (0..5)
            .map(|i| db.create_confession(ids[0], &format!("c{i}"), "", "", "").unwrap().id)
            .collect();
        db.soft_delete(ContentType::Confession, made[4]).unwrap();

        let first = db.list_confessions(2, 0).unwrap();
        assert_eq!(first.iter().map(|c| c.id).collect::<Vec<_>>(), vec![made[3], made[2]]);
        let second = db.list_confessions(2, 2).unwrap();
        assert_eq!(second.iter().map(|c| c.id).collect::<Vec<_>>(), vec![made[1], made[0]]);
    }

    #[test]
    fn flagging_marks_target_and_collects_reasons() {
        let (db, ids) = db_with_users(2);
        let c = db.create_confession(ids[0], "spicy", "", "", "").unwrap();
        let cm = db.create_comment(c.id, ids[1], "rude").unwrap();

        assert!(db.flag_content(ids[1], ContentType::Confession, c.id, "spam").unwrap());
        assert!(db.flag_content(ids[0], ContentType::Confession, c.id, "").unwrap());
        assert!(db.flag_content(ids[0], ContentType::Confession, c.id, "mean").unwrap());
        assert!(db.flag_content(ids[0], ContentType::Comment, cm.id, "").unwrap());
        assert!(!db.flag_content(ids[0], ContentType::Comment, 4242, "").unwrap());

        assert!(db.get_confession(c.id).unwrap().unwrap().is_flagged);

        let flagged = db.get_flagged_content().unwrap();
        assert_eq!(flagged.len(), 2);
        let confession = flagged.iter().find(|f| f.content_type == "confession").unwrap();
        let reasons = confession.flag_reasons.clone().unwrap();
        assert!(reasons.contains("spam") && reasons.contains("mean"));
        let comment = flagged.iter().find(|f| f.content_type == "comment").unwrap();
        assert_eq!(comment.flag_reasons, None);

        assert!(db.soft_delete(ContentType::Comment, cm.id).unwrap());
        assert!(!db.soft_delete(ContentType::Comment, cm.id).unwrap());
        assert_eq!(db.get_flagged_content().unwrap().len(), 1);
    }

    #[test]
    fn flagged_listing_works_when_empty() {
        let (db, _) = db_with_users(1);
        assert!(db.get_flagged_content().unwrap().is_empty());
    }

    #[test]
    fn comments_under_deleted_confession_leave_moderation() {
        let (db, ids) = db_with_users(2);
        let c = db.create_confession(ids[0], "soon gone", "", "", "").unwrap();
        let flagged = db.create_comment(c.id, ids[1], "flag me").unwrap();
        let later = db.create_comment(c.id, ids[1], "flag me later").unwrap();
        assert!(db.flag_content(ids[0], ContentType::Comment, flagged.id, "rude").unwrap());
        assert_eq!(db.get_flagged_content().unwrap().len(), 1);

        assert!(db.soft_delete(ContentType::Confession, c.id).unwrap());

        assert!(db.get_flagged_content().unwrap().is_empty());
        assert!(!db.flag_content(ids[0], ContentType::Comment, later.id, "").unwrap());
    }

    #[test]
    fn bot_comments_satisfy_foreign_keys() {
        let (db, ids) = db_with_users(1);
        let c = db.create_confession(ids[0], "help", "anxious", "", "").unwrap();
        let reply = db.create_comment(c.id, BOT_USER_ID, "breathe").unwrap();
        assert_eq!(reply.user_id, BOT_USER_ID);
        assert_eq!(db.get_comments(c.id).unwrap().len(), 1);
    }

    #[test]
    fn export_contains_own_content_only() {
        let (db, ids) = db_with_users(2);
        let mine = db.create_confession(ids[0], "mine", "proud", "home", "@me").unwrap();
        db.create_confession(ids[1], "theirs", "", "", "").unwrap();
        db.create_comment(mine.id, ids[0], "replying to myself").unwrap();
        db.create_comment(mine.id, ids[1], "someone else").unwrap();

        let data = db.get_user_data(ids[0]).unwrap().unwrap();
        assert_eq!(data.profile.handle, "user_0");
        assert_eq!(data.confessions.len(), 1);
        assert_eq!(data.confessions[0].content, "mine");
        assert_eq!(data.comments.len(), 1);
        assert_eq!(data.comments[0].confession_content, "mine");

        assert!(db.get_user_data(777).unwrap().is_none());
    }
}
