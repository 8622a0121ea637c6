use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    forca::cli::run_cli().await
}
