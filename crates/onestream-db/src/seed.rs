//! Demo data
//!
//! Idempotent inserts of the default stream types, a handful of demo users
//! and sample streams. Rows that already exist are left untouched.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::{info, instrument};

use onestream_common::{hash_password, AppError};
use onestream_core::value_objects::StreamId;

pub const DEMO_STREAM_TYPES: [&str; 5] = ["Sports", "E-Book", "Podcast", "Arts", "Music"];

/// Plain-text password shared by every demo user
pub const DEMO_PASSWORD: &str = "password";

const DEMO_USERS: [(&str, &str); 5] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Mike Johnson", "mike@example.com"),
    ("Sarah Wilson", "sarah@example.com"),
    ("David Brown", "david@example.com"),
];

struct DemoStream {
    title: &'static str,
    description: &'static str,
    tokens_price: i64,
    stream_type: &'static str,
    expires_in_days: i64,
}

const DEMO_STREAMS: [DemoStream; 10] = [
    DemoStream {
        title: "Live Football Match: Barcelona vs Real Madrid",
        description: "Watch the epic El Clasico match live with expert commentary and analysis.",
        tokens_price: 150,
        stream_type: "Sports",
        expires_in_days: 3,
    },
    DemoStream {
        title: "Complete Guide to Rust Web Development",
        description: "A comprehensive e-book covering web services from basics to advanced topics including testing and deployment.",
        tokens_price: 200,
        stream_type: "E-Book",
        expires_in_days: 30,
    },
    DemoStream {
        title: "Tech Talk: Future of AI",
        description: "Industry experts discuss the latest trends and future implications of artificial intelligence.",
        tokens_price: 75,
        stream_type: "Podcast",
        expires_in_days: 7,
    },
    DemoStream {
        title: "Digital Art Masterclass",
        description: "Learn advanced digital art techniques from professional artists.",
        tokens_price: 120,
        stream_type: "Arts",
        expires_in_days: 14,
    },
    DemoStream {
        title: "Jazz Concert: Miles Davis Tribute",
        description: "An exclusive tribute concert featuring renowned jazz musicians.",
        tokens_price: 180,
        stream_type: "Music",
        expires_in_days: 2,
    },
    DemoStream {
        title: "Championship Boxing: Heavyweight Title Fight",
        description: "Heavyweight championship bout with pre-fight analysis and post-fight interviews.",
        tokens_price: 250,
        stream_type: "Sports",
        expires_in_days: 1,
    },
    DemoStream {
        title: "React.js Complete Course",
        description: "Hooks, context, state management and modern patterns in one course.",
        tokens_price: 300,
        stream_type: "E-Book",
        expires_in_days: 60,
    },
    DemoStream {
        title: "Startup Stories Podcast",
        description: "Inspiring stories from successful entrepreneurs.",
        tokens_price: 50,
        stream_type: "Podcast",
        expires_in_days: 21,
    },
    DemoStream {
        title: "Watercolor Painting Workshop",
        description: "Create beautiful landscapes with step-by-step guidance.",
        tokens_price: 90,
        stream_type: "Arts",
        expires_in_days: 10,
    },
    DemoStream {
        title: "Classical Symphony Orchestra Performance",
        description: "A classical music performance by a world-renowned symphony orchestra.",
        tokens_price: 220,
        stream_type: "Music",
        expires_in_days: 5,
    },
];

/// Rows inserted by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub stream_types: u64,
    pub users: u64,
    pub streams: u64,
}

fn db_error(e: sqlx::Error) -> AppError {
    AppError::Database(e.to_string())
}

/// Insert the demo data set
#[instrument(skip(pool))]
pub async fn seed_demo_data(pool: &PgPool) -> Result<SeedSummary, AppError> {
    let mut summary = SeedSummary::default();

    for name in DEMO_STREAM_TYPES {
        summary.stream_types += sqlx::query(
            "INSERT INTO stream_types (name) VALUES ($1) ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .execute(pool)
        .await
        .map_err(db_error)?
        .rows_affected();
    }

    let password_hash = hash_password(DEMO_PASSWORD)?;
    for (name, email) in DEMO_USERS {
        summary.users += sqlx::query(
            r"
            INSERT INTO users (name, email, password, email_verified_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(name)
        .bind(email)
        .bind(&password_hash)
        .execute(pool)
        .await
        .map_err(db_error)?
        .rows_affected();
    }

    let now = Utc::now().naive_utc();
    for stream in &DEMO_STREAMS {
        summary.streams += sqlx::query(
            r"
            INSERT INTO streams (id, title, description, tokens_price, stream_type_id, date_expiration)
            SELECT $1, $2, $3, $4, (SELECT id FROM stream_types WHERE name = $5), $6
            WHERE NOT EXISTS (SELECT 1 FROM streams WHERE title = $2 AND deleted_at IS NULL)
            ",
        )
        .bind(StreamId::generate().into_inner())
        .bind(stream.title)
        .bind(stream.description)
        .bind(stream.tokens_price)
        .bind(stream.stream_type)
        .bind(now + Duration::days(stream.expires_in_days))
        .execute(pool)
        .await
        .map_err(db_error)?
        .rows_affected();
    }

    info!(
        stream_types = summary.stream_types,
        users = summary.users,
        streams = summary.streams,
        "Demo data seeded"
    );
    Ok(summary)
}
