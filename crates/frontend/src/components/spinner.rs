//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Small inline variant for buttons
    #[prop_or_default]
    pub inline: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    if props.inline {
        return html! {
            <span class="w-4 h-4 border-2 border-white border-t-transparent rounded-full mr-2 animate-spin" />
        };
    }

    html! {
        <div class="flex items-center justify-center min-h-[400px]" role="status">
            <div class="w-8 h-8 border-2 border-primary border-t-transparent rounded-full animate-spin" />
            if let Some(text) = &props.text {
                <span class="ml-3 text-app font-theme">{ text.clone() }</span>
            }
        </div>
    }
}
