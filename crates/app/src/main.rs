use std::sync::Arc;

use migration::{Migrator, MigratorTrait};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "libretto={level},telegram_bot={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    tracing::info!("Connecting to database...");
    let database = sea_orm::Database::connect(settings.database.url()).await?;
    Migrator::up(&database, None).await?;

    let ledger = engine::Ledger::builder().database(database).build();

    let bot = telegram_bot::Bot::builder()
        .token(&settings.telegram.token)
        .ledger(Arc::new(ledger))
        .build()?;
    bot.run().await;

    Ok(())
}
