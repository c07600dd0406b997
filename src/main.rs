use stellar_store::{Database, KpIndex, Repository, StoreSettings, init_tracing};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        error!("Store initialization failed: {}", e);
        std::process::exit(1);
    }
}

/// Creates the tables of every known entity and reports what is stored
async fn run() -> Result<(), stellar_store::StoreError> {
    let settings = StoreSettings::from_env()?;
    settings.log_summary();

    let db = Database::connect(&settings).await?;
    db.create_table::<KpIndex>().await?;

    {
        let mut session = db.session().await?;
        let rows = Repository::<KpIndex>::new(&mut session).count().await?;
        info!(table = "kp_index", rows, "Store ready");
    }

    db.close().await;
    Ok(())
}
