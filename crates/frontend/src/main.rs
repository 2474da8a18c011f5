use showcase_core::SiteConfig;
use showcase_frontend::{App, AppProps};
use std::rc::Rc;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    let config = SiteConfig::from_build_env().unwrap_or_else(|err| {
        warn!(%err, "invalid build configuration, using defaults");
        SiteConfig::default()
    });

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}
