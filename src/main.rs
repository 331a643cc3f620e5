use crate::prelude::Result;

mod cmd;
pub mod conf;
mod error;
pub mod pkg;
mod prelude;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    cmd::run().await?;
    Ok(())
}
