//! Selection of the next element to upgrade.
//!
//! Upgrading a `<burger-menu>` rewrites its inner markup, which replaces any
//! nested `<burger-menu>` with a fresh node. A list queried before the upgrade
//! still holds the old, now detached, node. Callers therefore pick one element
//! at a time and query again after each upgrade.

#[cfg(test)]
#[path = "upgrade_test.rs"]
mod upgrade_test;

/// First candidate that is still in the document and not yet upgraded.
pub fn next_pending<T>(
    candidates: impl IntoIterator<Item = T>,
    is_connected: impl Fn(&T) -> bool,
    is_upgraded: impl Fn(&T) -> bool,
) -> Option<T> {
    candidates
        .into_iter()
        .find(|candidate| is_connected(candidate) && !is_upgraded(candidate))
}
