use deephistory::server;
use deephistory::util::trace::initialize_tracer;
use deephistory::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads `.env` as well, so it must precede the tracer's `RUST_LOG` lookup.
    let config = Config::from_env()?;

    initialize_tracer();

    server::run(config).await?;
    Ok(())
}
