//! Fixed navigation header: brand, page links, theme selector and mobile menu

use crate::router::Route;
use crate::theme::{use_current_theme, use_set_theme};
use showcase_core::Theme;
use showcase_core::copy::HEADER;
use showcase_core::nav::{MenuState, NavTarget};
use web_sys::{Element, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

const MENU_OPEN_ICON: &str = "M4 6h16M4 12h16M4 18h16";
const MENU_CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

#[function_component(Header)]
pub fn header() -> Html {
    let theme = use_current_theme();
    let set_theme = use_set_theme();
    let route = use_route::<Route>();
    let menu = use_state(MenuState::default);

    // Back/forward and programmatic navigation collapse the mobile menu
    {
        let menu = menu.clone();
        use_effect_with(route, move |_| {
            menu.set(menu.after_navigation());
        });
    }

    let on_theme_change = Callback::from(move |e: Event| {
        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
            set_theme.emit(select.value());
        }
    });

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    // A tapped link collapses it too, including the link of the current page
    // where the route does not change
    let close_on_link = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            let on_link = e
                .target_dyn_into::<Element>()
                .and_then(|target| target.closest("a").ok().flatten())
                .is_some();
            if on_link {
                menu.set(menu.after_navigation());
            }
        })
    };

    let nav_links = |mobile: bool| -> Html {
        NavTarget::ALL
            .into_iter()
            .map(|target| {
                let target_route = Route::from(target);
                let active = route == Some(target_route);
                let base = if mobile {
                    "block px-3 py-2 rounded-md text-sm"
                } else {
                    "px-3 py-2 rounded-md transition-all duration-200 text-sm lg:text-base"
                };
                let state = match (active, mobile) {
                    (true, _) => "bg-primary text-white",
                    (false, true) => "text-app hover:text-primary hover:bg-primary/10",
                    (false, false) => "text-app hover:text-primary hover:bg-card",
                };
                html! {
                    <Link<Route> key={target.path()} to={target_route} classes={classes!(base, state)}>
                        { target.label() }
                    </Link<Route>>
                }
            })
            .collect()
    };

    let brand = HEADER.get(theme).brand;

    html! {
        <header class="fixed top-0 left-0 w-full bg-card backdrop-blur-sm z-50 border-b border-theme font-theme h-16">
            <div class="max-w-7xl mx-auto flex items-center justify-between p-4 h-full">
                <Link<Route> to={Route::Home} classes={classes!("text-xl", "sm:text-2xl", "font-bold", "text-primary", "hover:text-accent", "transition-colors")}>
                    { brand }
                </Link<Route>>

                <nav class="hidden md:flex space-x-4 lg:space-x-6">
                    { nav_links(false) }
                </nav>

                <div class="flex items-center space-x-2">
                    <select
                        aria-label="Theme"
                        onchange={on_theme_change}
                        class="p-2 bg-card text-app border border-theme rounded-md focus:outline-none focus:ring-2 focus:ring-primary font-theme text-xs sm:text-sm"
                    >
                        { for Theme::ALL.into_iter().map(|option| html! {
                            <option key={option.as_str()} value={option.as_str()} selected={option == theme} class="bg-card">
                                { option.label() }
                            </option>
                        }) }
                    </select>

                    <button
                        class="md:hidden p-2 text-app hover:text-primary"
                        aria-label="Toggle menu"
                        aria-expanded={menu.is_open().to_string()}
                        onclick={toggle_menu}
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d={if menu.is_open() { MENU_CLOSE_ICON } else { MENU_OPEN_ICON }}
                            />
                        </svg>
                    </button>
                </div>
            </div>

            if menu.is_open() {
                <div class="md:hidden bg-card border-t border-theme">
                    <nav class="p-4 space-y-2" onclick={close_on_link}>
                        { nav_links(true) }
                    </nav>
                </div>
            }
        </header>
    }
}
