#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;
use stellar_store::{Database, KpIndex, StoreResult};

/// Wraps the test pool and creates the `kp_index` table
pub async fn setup(pool: &SqlitePool) -> StoreResult<Database> {
    let db = Database::from_pool(pool.clone());
    db.create_table::<KpIndex>().await?;
    Ok(db)
}

/// Timestamp on `year-month-day` at `hour:minute`
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

/// Row count read straight from the table, bypassing the repository
pub async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM kp_index")
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

/// Row read straight from the table, bypassing the repository
pub async fn fetch_raw(pool: &SqlitePool, id: i64) -> Option<KpIndex> {
    sqlx::query_as::<_, KpIndex>("SELECT * FROM kp_index WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .expect("Failed to read row")
}
