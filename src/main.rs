use std::sync::Arc;

use wildrydes::config::Config;
use wildrydes::db::PgStore;
use wildrydes::engine::Engine;
use wildrydes::error::Error;
use wildrydes::external::DiscountClient;
use wildrydes::server::serve;
use wildrydes::telemetry::{init_logging, Telemetry};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    init_logging(config.log_level);

    let store = PgStore::new(
        &config.database_url,
        config.database_max_connections,
        &config.rides_table,
    )
    .await?;

    let mut engine = Engine::new(Arc::new(store)).with_telemetry(Telemetry::new(&config.telemetry));

    if let Some(url) = &config.discount_url {
        tracing::info!("discounts enabled via {}", url);
        engine = engine.with_discounts(Arc::new(DiscountClient::new(url.clone())));
    }

    serve(engine, config.bind_addr).await
}
