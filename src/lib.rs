//! Stellar store - generic asynchronous CRUD layer over a SQLite store
//!
//! ```no_run
//! use stellar_store::{Database, KpIndex, Page, Repository, StoreSettings};
//! use stellar_store::repositories::{Create, List};
//!
//! # async fn run() -> Result<(), stellar_store::StoreError> {
//! let db = Database::connect(&StoreSettings::from_env()?).await?;
//! db.create_table::<KpIndex>().await?;
//!
//! let mut session = db.session().await?;
//! let mut repo = Repository::<KpIndex>::new(&mut session);
//! let time_tag = chrono::NaiveDate::from_ymd_opt(2025, 6, 3)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 0)
//!     .unwrap();
//! let saved = repo.add(&KpIndex::new(time_tag, 1)).await?;
//! let first_page = repo.list(Page::new(0, 10)).await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod entities;
pub mod repositories;

// Re-export of the main types
pub use self::core::{Database, Session, StoreError, StoreResult, StoreSettings, init_tracing};
pub use entities::{Changes, Entity, Field, FieldKind, FieldValue, KpIndex};
pub use repositories::{Page, Repository};
