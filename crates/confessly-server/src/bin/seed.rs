//! Fills a database with demo users, confessions, votes and comments.
//!
//! Safe to rerun: users that already exist are skipped, and content is only
//! posted into an empty feed.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};

use confessly_api::auth::hash_password_blocking;
use confessly_bot::Responder;
use confessly_db::Database;
use confessly_types::models::{BOT_USER_ID, VoteType};

const DEMO_PASSWORD: &str = "password123";
const MODERATOR_BONUS: i64 = 150;

struct DemoUser {
    email: &'static str,
    handle: &'static str,
    bio: &'static str,
    favorite_snack: &'static str,
}

const USERS: [DemoUser; 5] = [
    DemoUser {
        email: "alice@example.com",
        handle: "alice_wonder",
        bio: "Just a curious soul exploring life.",
        favorite_snack: "Chocolate cookies",
    },
    DemoUser {
        email: "bob@example.com",
        handle: "bob_builder",
        bio: "Can we fix it? Yes we can!",
        favorite_snack: "Pizza slices",
    },
    DemoUser {
        email: "charlie@example.com",
        handle: "charlie_brown",
        bio: "Good grief, life is complicated.",
        favorite_snack: "Peanuts",
    },
    DemoUser {
        email: "diana@example.com",
        handle: "wonder_diana",
        bio: "Fighting for truth and justice.",
        favorite_snack: "Greek yogurt",
    },
    DemoUser {
        email: "moderator@example.com",
        handle: "mod_supreme",
        bio: "Keeping the peace in Confessly.",
        favorite_snack: "Energy bars",
    },
];

const MODERATOR: usize = 4;

/// (author index, content, mood, location, tagged users)
const CONFESSIONS: [(usize, &str, &str, &str, &str); 8] = [
    (
        0,
        "I secretly love pineapple on pizza and I'm tired of pretending I don't.",
        "Guilty",
        "Kitchen",
        "@pizza_lovers",
    ),
    (
        1,
        "I once built a sandcastle so impressive that I took credit for my 5-year-old nephew's work.",
        "Regretful",
        "Beach",
        "",
    ),
    (
        2,
        "I talk to my plants and I genuinely believe they understand me. Sometimes I ask them for life advice.",
        "Hopeful",
        "Garden",
        "@plant_parents",
    ),
    (
        3,
        "I've been wearing the same 'lucky' socks to every job interview for the past 3 years. They're falling apart but I can't stop.",
        "Anxious",
        "Closet",
        "",
    ),
    (
        0,
        "I judge people based on how they load the dishwasher. There's a right way and a wrong way, and most people are wrong.",
        "Frustrated",
        "Kitchen",
        "@clean_freaks",
    ),
    (
        1,
        "I pretend to understand wine when I'm at fancy restaurants, but honestly, it all tastes like grape juice to me.",
        "Embarrassed",
        "Restaurant",
        "",
    ),
    (
        2,
        "I've been learning Spanish for 5 years using an app, but I still can't order food in Spanish without pointing at the menu.",
        "Frustrated",
        "Language App",
        "@language_learners",
    ),
    (
        3,
        "I have a playlist called 'Songs I'd Never Admit I Like' and it's longer than my public playlists.",
        "Guilty",
        "Spotify",
        "@music_lovers",
    ),
];

/// (voter index, confession index, vote)
const VOTES: [(usize, usize, VoteType); 13] = [
    (1, 0, VoteType::Up),
    (2, 0, VoteType::Up),
    (3, 0, VoteType::Up),
    (0, 1, VoteType::Up),
    (2, 1, VoteType::Up),
    (0, 2, VoteType::Up),
    (1, 2, VoteType::Up),
    (3, 2, VoteType::Up),
    (0, 3, VoteType::Down),
    (1, 4, VoteType::Up),
    (2, 5, VoteType::Up),
    (3, 6, VoteType::Up),
    (0, 7, VoteType::Up),
];

/// (commenter index, confession index, content)
const COMMENTS: [(usize, usize, &str); 5] = [
    (1, 0, "Finally someone said it! Pineapple pizza is amazing!"),
    (2, 0, "I'm with you on this one. Sweet and salty perfection."),
    (3, 2, "My plants are better listeners than most humans."),
    (0, 3, "Lucky socks are real! Don't let anyone tell you otherwise."),
    (1, 7, "We all have guilty pleasure songs. Nothing wrong with that!"),
];

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confessly_seed=info,confessly_db=info".into()),
        )
        .init();

    let db_path: PathBuf = std::env::var("CONFESSLY_DB_PATH")
        .unwrap_or_else(|_| "confessly.db".into())
        .into();
    let db = Database::open(&db_path)?;

    let user_ids = seed_users(&db)?;

    if !db.list_confessions(1, 0)?.is_empty() {
        info!("Feed already has confessions, skipping content");
        return Ok(());
    }

    let confession_ids = seed_content(&db, &user_ids)?;
    seed_bot_replies(&db, &confession_ids)?;

    info!("Database seeded. Every demo account uses password '{}'", DEMO_PASSWORD);
    for user in &USERS {
        info!("  {} ({})", user.email, user.handle);
    }
    Ok(())
}

fn seed_users(db: &Database) -> anyhow::Result<Vec<i64>> {
    let mut ids = Vec::with_capacity(USERS.len());

    for (index, user) in USERS.iter().enumerate() {
        let hash = hash_password_blocking(DEMO_PASSWORD)?;
        let created =
            db.create_user(user.email, &hash, user.handle, user.bio, user.favorite_snack)?;

        let id = match created {
            Some(id) => {
                info!(user_id = id, "Created user {}", user.handle);
                if index == MODERATOR {
                    db.grant_karma(id, MODERATOR_BONUS)?;
                    info!("Granted {} karma to {}", MODERATOR_BONUS, user.handle);
                }
                id
            }
            None => {
                info!("User {} already exists, skipping", user.handle);
                db.get_user_by_email(user.email)?
                    .with_context(|| {
                        format!("handle {} is taken by a different account", user.handle)
                    })?
                    .id
            }
        };
        ids.push(id);
    }

    Ok(ids)
}

fn seed_content(db: &Database, user_ids: &[i64]) -> anyhow::Result<Vec<i64>> {
    let mut confession_ids = Vec::with_capacity(CONFESSIONS.len());
    for (author, content, mood, location, tagged) in CONFESSIONS {
        let row = db.create_confession(user_ids[author], content, mood, location, tagged)?;
        info!(confession_id = row.id, "Created confession ({})", mood);
        confession_ids.push(row.id);
    }

    // Through the ledger, so counters and karma move together.
    for (voter, confession, vote) in VOTES {
        match db.cast_vote(user_ids[voter], confession_ids[confession], vote)? {
            Some(outcome) => info!(
                confession_id = confession_ids[confession],
                action = ?outcome.action,
                "Cast {}",
                vote
            ),
            None => warn!(confession_id = confession_ids[confession], "Vote target vanished"),
        }
    }

    for (author, confession, content) in COMMENTS {
        db.create_comment(confession_ids[confession], user_ids[author], content)?;
        info!(confession_id = confession_ids[confession], "Created comment");
    }

    Ok(confession_ids)
}

fn seed_bot_replies(db: &Database, confession_ids: &[i64]) -> anyhow::Result<()> {
    let responder = Responder::new()?;
    let mut rng = rand::rng();

    for (&id, (_, content, mood, _, _)) in confession_ids.iter().zip(CONFESSIONS) {
        match responder.respond(Some(mood), content, &mut rng) {
            Some(reply) => {
                db.create_comment(id, BOT_USER_ID, reply)?;
                info!(confession_id = id, "Bot replied");
            }
            None => info!(confession_id = id, "Bot stayed quiet"),
        }
    }

    Ok(())
}
