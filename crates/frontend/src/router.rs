//! Client-side routes

use crate::pages::{AboutPage, ContactPage, HomePage};
use showcase_core::nav::NavTarget;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Self::Home,
            NavTarget::About => Self::About,
            NavTarget::Contact => Self::Contact,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_match_route_paths() {
        for target in NavTarget::ALL {
            assert_eq!(Route::from(target).to_path(), target.path());
        }
    }

    #[test]
    fn known_paths_are_recognized() {
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
