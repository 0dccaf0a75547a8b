//! Connectivity banner state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Driven only by the browser's `online`/`offline` window events. There is no
//! offline queue behind it: `Syncing` and `SyncError` have banner copy but no
//! event path enters them.

#[cfg(test)]
#[path = "network_test.rs"]
mod network_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    #[default]
    Online,
    Offline,
    Syncing,
    SyncError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkState {
    pub status: Connectivity,
    /// Transient "back online" notice after an offline period.
    pub show_reconnected: bool,
    /// Bumped on every reconnect so a stale dismiss timer is ignored.
    reconnect_generation: u64,
}

impl NetworkState {
    #[must_use]
    pub fn with_status(online: bool) -> Self {
        Self { status: if online { Connectivity::Online } else { Connectivity::Offline }, ..Self::default() }
    }

    pub fn go_offline(&mut self) {
        self.status = Connectivity::Offline;
        self.show_reconnected = false;
    }

    /// Returns the generation the caller must pass to `dismiss_reconnected`
    /// when its timer fires, or `None` if nothing needs dismissing.
    pub fn go_online(&mut self) -> Option<u64> {
        let was_offline = self.status == Connectivity::Offline;
        self.status = Connectivity::Online;
        if !was_offline {
            return None;
        }
        self.reconnect_generation += 1;
        self.show_reconnected = true;
        Some(self.reconnect_generation)
    }

    pub fn dismiss_reconnected(&mut self, generation: u64) {
        if generation == self.reconnect_generation {
            self.show_reconnected = false;
        }
    }

    /// Banner text, or `None` when nothing should be shown.
    #[must_use]
    pub fn banner(&self) -> Option<(&'static str, &'static str)> {
        match self.status {
            Connectivity::Offline => Some(("network-banner--offline", "You're offline. Changes won't be saved until you reconnect.")),
            Connectivity::Syncing => Some(("network-banner--syncing", "Syncing your changes…")),
            Connectivity::SyncError => Some(("network-banner--error", "Some changes couldn't be synced. Please retry.")),
            Connectivity::Online if self.show_reconnected => Some(("network-banner--online", "Back online")),
            Connectivity::Online => None,
        }
    }
}
