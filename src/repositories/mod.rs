//! Repositories module
//!
//! `Repository<E>` implements the operation traits for any type that
//! implements [`Entity`](crate::entities::Entity). A repository is built on
//! top of a caller-supplied session for one unit of work and dropped after it.

// ************************* A NOTE ON SQLX ************************* //

/*
   The queries here cannot use `sqlx::query!`/`query_as!`: those macros check
   one concrete SQL string against a live database at compile time, while the
   repository is generic and builds its SQL from the entity descriptor.
   We use `QueryBuilder` and bind every value with `push_bind`.

   Number of Rows   Method               Used by
   None             .execute(...)        delete (rows_affected tells us if the id existed)
   Zero or One      .fetch_optional(...) get, update (pre-check)
   Exactly One      .fetch_one(...)      add, update (with RETURNING *), count
   Multiple         .fetch_all(...)      list
*/

pub mod generic;
pub mod page;
pub mod traits;

pub use generic::Repository;
pub use page::Page;
pub use traits::{Create, Delete, List, Read, Update};
