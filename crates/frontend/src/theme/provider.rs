//! Theme provider component

use super::context::ThemeContext;
use crate::hooks::use_site_config;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let config = use_site_config();
    let theme = use_reducer(move || ThemeContext::load(&config.theme));

    html! {
        <ContextProvider<UseReducerHandle<ThemeContext>> context={theme}>
            { props.children.clone() }
        </ContextProvider<UseReducerHandle<ThemeContext>>>
    }
}
