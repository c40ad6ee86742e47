// toolbelt CLI entry point

use toolbelt_cli::CommandRouter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    CommandRouter::route().await?;
    Ok(())
}
