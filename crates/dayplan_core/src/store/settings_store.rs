//! Settings store.
//!
//! # Responsibility
//! - Own the singleton accessibility record with partial-merge updates.
//! - Keep the `settings-storage` slot in sync after every update.
//! - Drive the presentation hook at the two required moments.
//!
//! # Invariants
//! - The apply hook runs exactly once after successful rehydration and
//!   exactly once after every update, after the merge and the slot write.
//! - Updates never change fields the caller did not name.

use super::{load_slot, persist_slot, ChangeNotifier, StoreResult, SubscriberId};
use crate::model::settings::{Settings, SettingsUpdate};
use crate::storage::{SnapshotStorage, SETTINGS_SLOT};
use log::info;

/// Presentation-side hook that projects settings onto the environment
/// (root font size, contrast/dyslexia/theme flags).
///
/// The concrete style mutation lives outside the core; implementations
/// only observe the merged record.
pub trait ApplySettings {
    fn apply(&self, settings: &Settings);
}

/// Hook for sessions without a presentation layer (CLI probes, tests).
pub struct NoopApplySettings;

impl ApplySettings for NoopApplySettings {
    fn apply(&self, _settings: &Settings) {}
}

pub struct SettingsStore<S: SnapshotStorage> {
    settings: Settings,
    storage: S,
    presenter: Box<dyn ApplySettings>,
    notifier: ChangeNotifier,
}

impl<S: SnapshotStorage> SettingsStore<S> {
    /// Rehydrates settings from the slot, or starts from defaults.
    ///
    /// The presentation hook is applied once before this returns, so the
    /// environment reflects persisted preferences from the first frame.
    pub fn load(storage: S, presenter: Box<dyn ApplySettings>) -> StoreResult<Self> {
        let settings: Settings = load_slot(&storage, SETTINGS_SLOT)?.unwrap_or_default();
        presenter.apply(&settings);
        info!(
            "event=store_load module=settings_store status=ok slot={SETTINGS_SLOT} font_size={} theme={:?}",
            settings.base_font_size, settings.theme
        );
        Ok(Self {
            settings,
            storage,
            presenter,
            notifier: ChangeNotifier::new(),
        })
    }

    /// Current settings record.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merges the given fields, persists, re-applies, and notifies.
    pub fn update(&mut self, update: SettingsUpdate) {
        self.settings.merge(&update);
        persist_slot(&self.storage, SETTINGS_SLOT, &self.settings);
        self.presenter.apply(&self.settings);
        self.notifier.emit();
    }

    /// Registers a change callback fired after every update.
    pub fn subscribe(&mut self, listener: Box<dyn Fn()>) -> SubscriberId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
