use env_logger::Env;
use pazar::{configuration::get_configuration, services::run_price_report};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let report = run_price_report(&configuration).await;
    println!("{}", report);
}
