#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    wavescope::app::run().await
}
