use env_logger::Env;
use pazar::{configuration::get_configuration, services::run_login_suite};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    run_login_suite(&configuration).await?;
    log::info!("All login scenarios passed");

    Ok(())
}
