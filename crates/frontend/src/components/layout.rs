//! Theme-specific page chrome around the routed content

use crate::hooks::use_site_config;
use crate::services::viewport_width;
use crate::theme::use_current_theme;
use gloo::events::EventListener;
use showcase_core::copy::SIDEBAR_FEATURES;
use showcase_core::layout::{LayoutKind, SidePanel};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let theme = use_current_theme();

    let body = match LayoutKind::for_theme(theme) {
        LayoutKind::Sidebar => html! {
            <SidebarLayout>{ props.children.clone() }</SidebarLayout>
        },
        LayoutKind::CenteredColumn => html! {
            <div class="bg-app min-h-screen">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                    { props.children.clone() }
                </div>
            </div>
        },
        LayoutKind::FullBleed => html! {
            <div class="bg-app min-h-screen">
                <div class="p-4 sm:p-6 lg:p-8">
                    { props.children.clone() }
                </div>
            </div>
        },
    };

    html! {
        <div class="text-app font-theme min-h-screen pt-16">
            { body }
        </div>
    }
}

enum PanelAction {
    Resized(f64),
    Open,
    Close,
}

#[derive(Clone, Copy, PartialEq)]
struct PanelState {
    panel: SidePanel,
    breakpoint_px: u32,
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            PanelAction::Resized(width) => {
                if !next.panel.on_resize(width, next.breakpoint_px) {
                    return self;
                }
            }
            PanelAction::Open => next.panel.open(),
            PanelAction::Close => next.panel.close(),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[derive(Properties, PartialEq)]
struct SidebarLayoutProps {
    children: Html,
}

#[function_component(SidebarLayout)]
fn sidebar_layout(props: &SidebarLayoutProps) -> Html {
    let breakpoint_px = use_site_config().layout.narrow_breakpoint_px;
    let panel = use_reducer(move || PanelState {
        panel: SidePanel::new(viewport_width().unwrap_or_default(), breakpoint_px),
        breakpoint_px,
    });

    {
        let panel = panel.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    if let Some(width) = viewport_width() {
                        panel.dispatch(PanelAction::Resized(width));
                    }
                })
            });
            move || drop(listener)
        });
    }

    let open = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.dispatch(PanelAction::Open))
    };
    let close = {
        let panel = panel.clone();
        Callback::from(move |()| panel.dispatch(PanelAction::Close))
    };
    let close_on_click = close.reform(|_: MouseEvent| ());

    html! {
        <div class="min-h-screen bg-app">
            if panel.panel.shows_overlay() {
                <div class="fixed inset-0 bg-black/50 z-40 md:hidden" onclick={close_on_click} />
                <aside class="fixed left-0 top-0 h-full w-80 bg-card border-r border-theme z-50 overflow-y-auto">
                    <SidebarContent on_close={close} />
                </aside>
            }

            <div class="flex min-h-screen">
                if panel.panel.is_docked() {
                    <aside class="w-80 bg-card border-r border-theme flex-shrink-0 overflow-y-auto">
                        <SidebarContent />
                    </aside>
                }

                <main class="flex-1 overflow-x-hidden">
                    if !panel.panel.is_docked() {
                        <div class="sticky top-16 bg-card border-b border-theme p-4 z-30">
                            <button
                                onclick={open}
                                aria-label="Open side panel"
                                class="p-2 text-primary hover:bg-primary/10 rounded-md"
                            >
                                <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                                </svg>
                            </button>
                        </div>
                    }

                    <div class="p-4 sm:p-6 lg:p-8">
                        { props.children.clone() }
                    </div>
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarContentProps {
    #[prop_or_default]
    on_close: Option<Callback<()>>,
}

#[function_component(SidebarContent)]
fn sidebar_content(props: &SidebarContentProps) -> Html {
    html! {
        <div class="p-6 space-y-6">
            if let Some(on_close) = &props.on_close {
                <div class="flex justify-between items-center pb-4 border-b border-theme">
                    <h3 class="text-lg font-bold text-primary">{ "Navigation" }</h3>
                    <button
                        onclick={on_close.reform(|_: MouseEvent| ())}
                        aria-label="Close side panel"
                        class="p-2 text-secondary hover:text-primary"
                    >
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        </svg>
                    </button>
                </div>
            }

            <div class="space-y-4">
                <h3 class="text-lg font-bold text-primary">{ "Dark Theme Features" }</h3>
                <div class="space-y-3">
                    { for SIDEBAR_FEATURES.iter().map(|feature| html! {
                        <div key={feature.title} class="p-4 bg-primary/10 rounded-lg">
                            <h4 class="font-semibold text-app mb-2">{ feature.title }</h4>
                            <p class="text-sm text-secondary">{ feature.body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
