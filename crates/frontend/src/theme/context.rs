//! Theme context definition

use crate::services::{DocumentThemeEffects, LocalPreferenceStorage};
use showcase_core::Theme;
use showcase_core::config::ThemeConfig;
use showcase_core::preferences::PreferenceStore;
use std::rc::Rc;
use tracing::warn;
use yew::prelude::*;

type BrowserPreferenceStore = PreferenceStore<LocalPreferenceStorage, DocumentThemeEffects>;

#[derive(Debug, Clone)]
pub struct ThemeContext {
    store: BrowserPreferenceStore,
}

impl ThemeContext {
    /// Read the saved preference and apply it to the document
    pub fn load(config: &ThemeConfig) -> Self {
        Self {
            store: PreferenceStore::load(LocalPreferenceStorage, DocumentThemeEffects, config),
        }
    }

    pub const fn theme(&self) -> Theme {
        self.store.get()
    }
}

impl PartialEq for ThemeContext {
    fn eq(&self, other: &Self) -> bool {
        self.theme() == other.theme()
    }
}

pub enum ThemeAction {
    /// Raw `<select>` value; unknown names leave the theme as it is
    SetRaw(String),
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let ThemeAction::SetRaw(raw) = action;
        let mut next = (*self).clone();
        if let Err(err) = next.store.set_raw(&raw) {
            warn!(%err, "ignoring theme selection");
            return self;
        }
        Rc::new(next)
    }
}
