//! Home page: hero section and the featured products grid

use crate::components::{LoadingSpinner, ProductCard};
use crate::hooks::use_site_config;
use crate::services::{GlooDelay, HttpCatalogSource};
use crate::theme::use_current_theme;
use showcase_core::catalog::{
    AttemptTicket, CatalogLoadState, CatalogSession, ProductSummary, fetch_catalog,
};
use showcase_core::config::CatalogConfig;
use showcase_core::copy::{HOME, HOME_HEADING, LOADING_LABEL};
use showcase_core::{CatalogError, Theme};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let theme = use_current_theme();
    let config = use_site_config();

    html! { <Home {theme} catalog={config.catalog.clone()} /> }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub theme: Theme,
    pub catalog: CatalogConfig,
}

pub struct Home {
    session: CatalogSession,
}

pub enum Msg {
    Settled(AttemptTicket, Result<Vec<ProductSummary>, CatalogError>),
    Retry,
}

impl Home {
    fn start(ctx: &Context<Self>, ticket: AttemptTicket) {
        let link = ctx.link().clone();
        let config = ctx.props().catalog.clone();

        spawn_local(async move {
            let source = HttpCatalogSource::new(config.base_url.clone());
            let result = fetch_catalog(&source, &GlooDelay, &config).await;
            link.send_message(Msg::Settled(ticket, result));
        });
    }

    fn view_failed(ctx: &Context<Self>, reason: &'static str) -> Html {
        let on_retry = ctx.link().callback(|_: MouseEvent| Msg::Retry);

        html! {
            <div class="flex flex-col items-center justify-center min-h-[400px] text-center px-4" role="alert">
                <h2 class="text-2xl font-semibold text-red-500 mb-2">{ "Oops!" }</h2>
                <p class="text-app mb-4">{ reason }</p>
                <button
                    onclick={on_retry}
                    class="px-6 py-2 bg-primary text-white rounded-md hover:bg-accent transition-colors"
                >
                    { "Retry" }
                </button>
            </div>
        }
    }

    fn view_ready(theme: Theme, products: &[ProductSummary]) -> Html {
        let copy = HOME.get(theme);

        html! {
            <div class="space-y-8 mt-10">
                <section class="text-center py-8">
                    <h1 class={classes!("font-bold", "text-primary", "mb-4", copy.heading_class)}>
                        { HOME_HEADING }
                    </h1>
                    <p class={classes!("text-secondary", "max-w-2xl", "mx-auto", copy.subtitle_class)}>
                        { copy.subtitle }
                    </p>
                    <button class="mt-6 px-8 py-3 bg-primary text-white rounded-full font-medium hover:bg-accent transition-colors">
                        { copy.cta_label }
                    </button>
                </section>

                <section>
                    <h2 class={classes!("font-bold", "text-app", "mb-6", copy.section_heading_class)}>
                        { "Featured Products" }
                    </h2>
                    <div class={copy.grid_class}>
                        { for products.iter().map(|product| html! {
                            <ProductCard key={product.id} product={product.clone()} {theme} />
                        }) }
                    </div>
                </section>
            </div>
        }
    }
}

impl Component for Home {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut session = CatalogSession::new();
        if let Some(ticket) = session.begin() {
            Self::start(ctx, ticket);
        }
        Self { session }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Settled(ticket, result) => self.session.settle(ticket, result),
            Msg::Retry => match self.session.retry() {
                Some(ticket) => {
                    Self::start(ctx, ticket);
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.session.state() {
            CatalogLoadState::Loading => html! { <LoadingSpinner text={LOADING_LABEL} /> },
            CatalogLoadState::Failed(err) => Self::view_failed(ctx, err.user_message()),
            CatalogLoadState::Ready(products) => Self::view_ready(ctx.props().theme, products),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.session.dispose();
    }
}
