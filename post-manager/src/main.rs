use anyhow::Result;

use post_manager::{config::Settings, App};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;

    // Logging is initialized in App::run() once the settings are known
    App::new(settings).run().await?;

    Ok(())
}
