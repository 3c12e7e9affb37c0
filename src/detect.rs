//! Advertisement detection and the mute/unmute decision.


/// Volume a muted player is set to, and the level the "currently muted"
/// inference compares against.
pub const MUTED_VOLUME: f64 = 0.0;

/// Check whether a track title looks like an advertisement break
pub fn is_advertisement(title: &str) -> bool {
    title.to_lowercase().contains("advertisement")
}

/// Volume adjustment to apply to a player on one poll cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeAction {
    Set(f64),
    Keep,
}

/// Decide the volume adjustment for a player from its current track title
/// and volume.
///
/// A player whose volume sits exactly at `0.0` is assumed to have been muted
/// by a previous cycle. This is a heuristic, not an invariant: a player the
/// user paused at zero volume is indistinguishable from one we muted, and
/// will be unmuted as well.
#[allow(clippy::float_cmp)]
pub fn decide(title: &str, volume: f64, restore_volume: f64) -> VolumeAction {
    if is_advertisement(title) {
        VolumeAction::Set(MUTED_VOLUME)
    } else if volume == MUTED_VOLUME {
        VolumeAction::Set(restore_volume)
    } else {
        VolumeAction::Keep
    }
}
