//! filebeam entry point.

mod args;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match args::parse(&argv) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("ERROR: {e}");
            eprintln!("{}", args::USAGE);
            std::process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        peer = %parsed.endpoint,
        file = %parsed.file.display(),
        "starting push"
    );

    let config = filebeam_connection::TransferConfig::default();
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(filebeam_connection::push_file(
        parsed.endpoint,
        &parsed.file,
        &config,
    ))?;

    Ok(())
}
