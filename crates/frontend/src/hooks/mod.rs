//! Custom hooks for the application

use showcase_core::SiteConfig;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Site configuration provided by the app root, or the built-in defaults
#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

/// Flag that flips to `false` once the calling component unmounts.
///
/// Async work spawned by a component checks it before touching state.
#[hook]
pub fn use_is_mounted() -> Rc<Cell<bool>> {
    let mounted = use_memo((), |_| Cell::new(true));
    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| move || mounted.set(false));
    }
    mounted
}
