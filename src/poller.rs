use std::time::Duration;

use anyhow::{Context as _, Result};
use tokio::time::{interval, MissedTickBehavior};
use zbus::{names::OwnedBusName, Connection};

use crate::{
    dbus::{matches_players, mpris_players, track_title, PlayerProxy},
    detect::{decide, is_advertisement, VolumeAction},
};

/// Poll all players forever, muting and unmuting them as advertisements
/// come and go
pub async fn poll_loop(
    conn: Connection,
    poll_interval: Duration,
    restore_volume: f64,
    allowed_players: Vec<String>,
) -> Result<()> {
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        if let Err(e) = poll_cycle(&conn, restore_volume, &allowed_players).await {
            tracing::warn!(?e, "Failed to enumerate players for this cycle");
        }
    }
}

/// One poll cycle: enumerate players and apply the mute decision to each in
/// turn. A failing player is skipped without affecting the others.
async fn poll_cycle(
    conn: &Connection,
    restore_volume: f64,
    allowed_players: &[String],
) -> Result<()> {
    for bus_name in mpris_players(conn).await? {
        if !matches_players(&bus_name, allowed_players) {
            tracing::debug!(%bus_name, "Player not in allowed list, skipping");
            continue;
        }
        if let Err(e) = poll_player(conn, &bus_name, restore_volume).await {
            tracing::debug!(?e, %bus_name, "Skipping player for this cycle");
        }
    }
    Ok(())
}

async fn poll_player(
    conn: &Connection,
    bus_name: &OwnedBusName,
    restore_volume: f64,
) -> Result<()> {
    let player = PlayerProxy::builder(conn)
        .destination(bus_name)?
        .build()
        .await
        .context("Failed to create player proxy")?;

    let metadata = player
        .metadata()
        .await
        .context("Failed to get player metadata")?;
    let Some(title) = track_title(&metadata) else {
        // No title, nothing to decide on
        return Ok(());
    };
    let volume = player
        .volume()
        .await
        .context("Failed to get player volume")?;

    if let VolumeAction::Set(target) = decide(title, volume, restore_volume) {
        if is_advertisement(title) {
            tracing::info!(%bus_name, title, "Advertisement detected - muting");
        } else {
            tracing::info!(%bus_name, title, "Content resumed - unmuting");
        }
        // A failed set is reported but never fails the cycle
        if let Err(e) = player.set_volume(target).await {
            tracing::error!(?e, %bus_name, "Failed to set player volume");
        }
    }
    Ok(())
}
