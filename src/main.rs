use std::time::Duration;

use clap::Parser;

use country_list::cli::Cli;
use country_list::client::CountryClient;
use country_list::logging::init_tracing;
use country_list::repository::CountryRepository;
use country_list::ui::runtime;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config.logging.level, &config.log_file_path())?;

    let url = config.source.parsed_url()?;
    tracing::info!("Using countries endpoint {}", url);
    let client = CountryClient::new(
        url,
        config.source.timeout(),
        config.source.connect_timeout(),
    )?;

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("country-fetch")
        .enable_all()
        .build()?;

    let result = runtime::run(
        CountryRepository::new(client),
        tokio_runtime.handle().clone(),
        &config.ui,
    );
    tokio_runtime.shutdown_timeout(Duration::from_secs(1));
    result?;
    Ok(())
}
