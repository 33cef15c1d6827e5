//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let account = factory::create_account(&db, 1, 10, 500).await?;
//!     let giveaway = factory::create_giveaway(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let giveaway = factory::giveaway::GiveawayFactory::new(&db)
//!     .prize("Nitro")
//!     .winners_count(3)
//!     .forced_winner(42)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Create ledger accounts
//! - `giveaway` - Create giveaway records
//! - `helpers` - Unique id generation

pub mod account;
pub mod giveaway;
pub mod helpers;

pub use account::create_account;
pub use giveaway::create_giveaway;
