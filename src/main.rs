use std::time::Duration;

use anyhow::Result;
use clap::Parser as _;
use zbus::Connection;

mod args;
mod dbus;
mod detect;
mod poller;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = args::Args::parse();
    args.init_tracing_subscriber();
    let allowed_players = args.player.clone();

    let connection = Connection::session().await?;
    tracing::info!("Connected to session bus - watching players for advertisements");
    poller::poll_loop(
        connection,
        Duration::from_secs_f64(args.poll_every),
        args.restore_volume,
        allowed_players,
    )
    .await
}
