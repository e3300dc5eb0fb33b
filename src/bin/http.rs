#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use mopp_schedule::{PortalConfig, http_api, load_dataset_from_json, logging, mock};

    let config = PortalConfig::from_env()?;
    logging::init_tracing(config.log_json);

    let store = match &config.fixtures {
        Some(path) => load_dataset_from_json(path)?,
        None => mock::demo_store()?,
    };

    println!(
        "mopp-scheduling HTTP API listening on http://{}",
        config.http_addr
    );
    let state = http_api::AppState::new(store).with_default_language(config.default_language);
    http_api::serve(config.http_addr, state).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
