use crate::components::ContactDetails;
use crate::theme::use_current_theme;
use showcase_core::copy::{ABOUT, COMPANY, InfoIcons};
use yew::prelude::*;

const COMPANY_ICONS: InfoIcons = InfoIcons {
    address: "🏢",
    phone: "📞",
    email: "✉️",
    website: "🌐",
};

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let theme = use_current_theme();
    let copy = ABOUT.get(theme);

    html! {
        <div class={classes!("space-y-8", "mt-10", copy.container_class)}>
            <section class="space-y-4">
                <h1 class={classes!("font-bold", "text-primary", copy.title_class)}>{ copy.title }</h1>
                <p class={classes!("text-secondary", "leading-relaxed", copy.intro_class)}>{ copy.intro }</p>
            </section>

            <section class="space-y-6">
                <h2 class={classes!("font-semibold", "text-app", copy.heading_class)}>
                    { copy.features_heading }
                </h2>
                <div class={classes!("grid", "gap-4", "sm:gap-6", copy.features_grid_class)}>
                    { for copy.features.iter().map(|feature| html! {
                        <div key={feature.title} class={classes!("bg-card", "p-4", "sm:p-6", "space-y-3", "transition-transform", copy.feature_card_class)}>
                            <h3 class={classes!("font-semibold", "text-primary", copy.feature_title_class)}>
                                { feature.title }
                            </h3>
                            <p class="text-secondary text-xs sm:text-sm leading-relaxed">{ feature.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section>
                <div class="bg-card p-6 sm:p-8 space-y-4 text-left">
                    <h2 class={classes!("font-semibold", "text-primary", copy.heading_class)}>
                        { copy.company_heading }
                    </h2>
                    <div class="space-y-4 text-app">
                        <p class="text-sm sm:text-base">
                            <strong>{ COMPANY.name }</strong>
                            { " specializes in cutting-edge web applications, UI/UX design, responsive development, and performance optimization." }
                        </p>
                        <div class={classes!("grid", "gap-6", copy.company_grid_class)}>
                            <ContactDetails icons={COMPANY_ICONS} />
                        </div>
                        <div class="pt-4 border-t border-theme">
                            <p class="text-xs sm:text-sm text-secondary">{ COMPANY.registration }</p>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
