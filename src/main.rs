// main.rs

use std::process::exit;

use tracing::{error, info};
use walletconf::{Config, logging};

fn main() {
    logging::init();

    // The loader itself never kills the process; that call is made here.
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {e:#}");
            exit(1)
        },
    };

    let base = config.base();
    info!("Environment: {}", base.env);
    info!("Services: {}", base.services.join(", "));

    let subs = config.subsystem();
    info!("Db: {} (pool {})", subs.db.url, subs.db.max_conn);
    info!("Redis clusters: {}", subs.redis.clusters.len());

    let coin = config.coin();
    info!("Coin: {} ({} decimals)", coin.name, coin.decimal);

    let msgs = config.messages();
    info!(
        "Messages: {} errors, {} warnings, {} information, {} debugs",
        msgs.errors.len(),
        msgs.warnings.len(),
        msgs.information.len(),
        msgs.debugs.len(),
    );

    let cmds = config.commands();
    info!("Command templates: unknown={:?} help={:?} version={:?}", cmds.unknown, cmds.help, cmds.version);
}
