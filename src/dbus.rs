#[cfg(test)]
mod tests;

use std::{collections::HashMap, ops::Deref as _};

use anyhow::{Context as _, Result};
use zbus::{
    fdo::DBusProxy,
    names::OwnedBusName,
    proxy,
    zvariant::{OwnedValue, Value},
    Connection,
};

/// Namespace prefix under which MPRIS-compliant players register on the bus
pub const MPRIS_PREFIX: &str = "org.mpris.MediaPlayer2.";

#[proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait Player {
    #[zbus(property)]
    fn metadata(&self) -> zbus::Result<HashMap<String, OwnedValue>>;

    #[zbus(property)]
    fn volume(&self) -> zbus::Result<f64>;

    #[zbus(property)]
    fn set_volume(&self, volume: f64) -> zbus::Result<()>;
}

/// Return all MPRIS players currently registered on the bus
pub async fn mpris_players(conn: &Connection) -> Result<Vec<OwnedBusName>> {
    let proxy = DBusProxy::new(conn)
        .await
        .context("Failed to create DBusProxy")?;

    Ok(proxy
        .list_names()
        .await
        .context("Failed to list currently-owned names on DBus")?
        .into_iter()
        .filter(|name| name.starts_with(MPRIS_PREFIX))
        .collect())
}

/// Check whether a player bus name is covered by the `--player` allowlist
pub fn matches_players(name: &OwnedBusName, allowed_players: &[String]) -> bool {
    allowed_players.iter().any(|allowed| {
        if allowed == "all" {
            return true;
        }
        name.strip_prefix(MPRIS_PREFIX)
            .is_some_and(|suffix| suffix.eq_ignore_ascii_case(allowed))
    })
}

/// Extract the track title from an MPRIS metadata map, or [`None`] if absent
/// or not a string
pub fn track_title(metadata: &HashMap<String, OwnedValue>) -> Option<&str> {
    match metadata.get("xesam:title")?.deref() {
        Value::Str(s) => Some(s.as_str()),
        _ => None,
    }
}
