//! Persisted theme preference

use crate::config::ThemeConfig;
use crate::error::CoreResult;
use crate::theme::Theme;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Durable per-browser key/value storage holding raw strings
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStorage {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `value` under `key`
    fn write(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// Document-level side effects of the active theme
#[cfg_attr(test, mockall::automock)]
pub trait ThemeEffects {
    /// Activate theme-scoped styling for `theme`
    fn apply(&self, theme: Theme);

    /// Lock root scrolling now and release it after `duration`
    fn lock_for_transition(&self, duration: Duration);
}

/// Owner of the current theme.
///
/// Reads the stored preference once when loaded and writes it back on every
/// change. Nothing is written until the user actually picks a theme.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S, E> {
    storage: S,
    effects: E,
    key: String,
    transition_lock: Duration,
    current: Theme,
}

impl<S, E> PreferenceStore<S, E>
where
    S: PreferenceStorage,
    E: ThemeEffects,
{
    /// Load the stored preference, falling back to [`Theme::Minimal`]
    pub fn load(storage: S, effects: E, config: &ThemeConfig) -> Self {
        let stored = match storage.read(&config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "could not read theme preference");
                None
            }
        };
        let current = Theme::from_stored(stored.as_deref());
        debug!(theme = %current, "loaded theme preference");

        effects.apply(current);

        Self {
            storage,
            effects,
            key: config.storage_key.clone(),
            transition_lock: config.transition_lock(),
            current,
        }
    }

    #[must_use]
    pub const fn get(&self) -> Theme {
        self.current
    }

    /// Switch to `theme`, persist it and run the document side effects
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;

        if let Err(err) = self.storage.write(&self.key, theme.as_str()) {
            warn!(%err, "could not persist theme preference");
        }

        self.effects.apply(theme);
        self.effects.lock_for_transition(self.transition_lock);
        info!(theme = %theme, "theme changed");
    }

    /// Switch to the theme named `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidThemeValue`](crate::CoreError::InvalidThemeValue)
    /// if `raw` names no theme. The current theme is left untouched.
    pub fn set_raw(&mut self, raw: &str) -> CoreResult<Theme> {
        let theme = raw.parse::<Theme>()?;
        self.set(theme);
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use mockall::predicate::eq;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.0.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        fn value(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn read(&self, key: &str) -> CoreResult<Option<String>> {
            Ok(self.value(key))
        }

        fn write(&self, key: &str, value: &str) -> CoreResult<()> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingEffects {
        applied: Rc<RefCell<Vec<Theme>>>,
        locks: Rc<RefCell<Vec<Duration>>>,
    }

    impl ThemeEffects for RecordingEffects {
        fn apply(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }

        fn lock_for_transition(&self, duration: Duration) {
            self.locks.borrow_mut().push(duration);
        }
    }

    fn config() -> ThemeConfig {
        ThemeConfig::default()
    }

    #[test]
    fn empty_storage_starts_minimal_without_writing() {
        let storage = MemoryStorage::default();
        let store = PreferenceStore::load(storage.clone(), RecordingEffects::default(), &config());

        assert_eq!(store.get(), Theme::Minimal);
        assert_eq!(storage.value("theme"), None);
    }

    #[test]
    fn unrecognized_stored_value_starts_minimal() {
        let storage = MemoryStorage::with("theme", "sepia");
        let store = PreferenceStore::load(storage.clone(), RecordingEffects::default(), &config());

        assert_eq!(store.get(), Theme::Minimal);
        assert_eq!(storage.value("theme").as_deref(), Some("sepia"));
    }

    #[test]
    fn stored_value_is_restored_and_applied() {
        let effects = RecordingEffects::default();
        let store = PreferenceStore::load(
            MemoryStorage::with("theme", "dark"),
            effects.clone(),
            &config(),
        );

        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(*effects.applied.borrow(), vec![Theme::Dark]);
        assert!(effects.locks.borrow().is_empty());
    }

    #[test]
    fn every_set_is_readable_and_persisted() {
        let storage = MemoryStorage::default();
        let mut store = PreferenceStore::load(storage.clone(), RecordingEffects::default(), &config());

        let sequence = [
            Theme::Dark,
            Theme::Colorful,
            Theme::Colorful,
            Theme::Minimal,
            Theme::Dark,
        ];
        for theme in sequence {
            store.set(theme);
            assert_eq!(store.get(), theme);
            assert_eq!(storage.value("theme").as_deref(), Some(theme.as_str()));
        }
    }

    #[test]
    fn set_applies_attribute_and_locks_scrolling() {
        let effects = RecordingEffects::default();
        let mut store = PreferenceStore::load(MemoryStorage::default(), effects.clone(), &config());

        store.set(Theme::Colorful);

        assert_eq!(
            *effects.applied.borrow(),
            vec![Theme::Minimal, Theme::Colorful]
        );
        assert_eq!(*effects.locks.borrow(), vec![Duration::from_millis(300)]);
    }

    #[test]
    fn invalid_raw_value_is_rejected_and_ignored() {
        let storage = MemoryStorage::default();
        let mut store = PreferenceStore::load(storage.clone(), RecordingEffects::default(), &config());
        store.set(Theme::Dark);

        let err = store.set_raw("solarized").unwrap_err();

        assert_eq!(err, CoreError::invalid_theme("solarized"));
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(storage.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn raw_value_is_parsed_and_set() {
        let mut store =
            PreferenceStore::load(MemoryStorage::default(), RecordingEffects::default(), &config());
        assert_eq!(store.set_raw("colorful"), Ok(Theme::Colorful));
        assert_eq!(store.get(), Theme::Colorful);
    }

    #[test]
    fn storage_failures_never_fail_the_store() {
        let mut storage = MockPreferenceStorage::new();
        storage
            .expect_read()
            .withf(|key| key == "theme")
            .returning(|_| Err(CoreError::storage("SecurityError")));
        storage
            .expect_write()
            .withf(|key, value| key == "theme" && value == "dark")
            .times(1)
            .returning(|_, _| Err(CoreError::storage("QuotaExceededError")));

        let mut effects = MockThemeEffects::new();
        effects.expect_apply().times(2).return_const(());
        effects
            .expect_lock_for_transition()
            .with(eq(Duration::from_millis(300)))
            .times(1)
            .return_const(());

        let mut store = PreferenceStore::load(storage, effects, &config());
        assert_eq!(store.get(), Theme::Minimal);

        store.set(Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn custom_storage_key_is_used() {
        let storage = MemoryStorage::with("showcase-theme", "colorful");
        let config = ThemeConfig {
            storage_key: "showcase-theme".to_string(),
            ..ThemeConfig::default()
        };
        let mut store = PreferenceStore::load(storage.clone(), RecordingEffects::default(), &config);
        assert_eq!(store.get(), Theme::Colorful);

        store.set(Theme::Dark);
        assert_eq!(storage.value("showcase-theme").as_deref(), Some("dark"));
        assert_eq!(storage.value("theme"), None);
    }
}
