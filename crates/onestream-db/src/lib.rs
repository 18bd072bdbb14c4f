//! # onestream-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the stream listing query builder
//! - Demo data seeding
//!
//! ## Usage
//!
//! ```rust,ignore
//! use onestream_db::{create_pool, run_migrations, PgStreamRepository, PoolConfig};
//! use onestream_core::{StreamQuery, StreamRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!
//!     let streams = PgStreamRepository::new(pool);
//!     let page = streams.list(&StreamQuery::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod seed;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgStreamRepository, PgStreamTypeRepository, PgUserRepository, StreamQueryBuilder,
};
pub use seed::{seed_demo_data, SeedSummary};
