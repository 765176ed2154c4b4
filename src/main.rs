use anyhow::Result;
use config::Config;

mod config;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = Config::from_env();
    log::info!("Resolved directus-sync settings for {}", config.directus_url);
    log::debug!("Dumping to {}", config.dump_path.display());

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
