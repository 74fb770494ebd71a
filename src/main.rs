use std::net::TcpListener;

use env_logger::Env;
use company_scout::{
    configuration::get_configuration, services::CompanyScraper, startup::run,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Listening on http://{}", address);

    let company_scraper =
        CompanyScraper::new(configuration.fetcher, configuration.business_summary);

    run(listener, company_scraper, configuration.output)?.await?;

    Ok(())
}
