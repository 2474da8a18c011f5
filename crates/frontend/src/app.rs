use crate::components::{Header, Layout};
use crate::router::{Route, switch};
use crate::theme::ThemeProvider;
use showcase_core::SiteConfig;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <ThemeProvider>
                <BrowserRouter>
                    <Header />
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </BrowserRouter>
            </ThemeProvider>
        </ContextProvider<Rc<SiteConfig>>>
    }
}
