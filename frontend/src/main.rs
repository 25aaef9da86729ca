use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod anchors;
mod config;
mod consent;
mod debounce;
mod dom;
mod error;
mod faq;
mod scroll;
mod validation;
mod components {
    pub mod contact_form;
    pub mod cookie_banner;
    pub mod faq;
}
mod pages {
    pub mod home;
    pub mod privacy;
}

use components::cookie_banner::CookieBanner;
use config::SiteConfig;
use pages::{
    home::Home,
    privacy::{NotFound, PrivacyPolicy},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, config: &SiteConfig) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home config={config.clone()} /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy config={config.clone()} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Nexus Health Operations"}
                </Link<Route>>
                <div class="nav-right">
                    <a class="nav-link" href="#services">{"Services"}</a>
                    <a class="nav-link" href="#faq">{"FAQ"}</a>
                    <a class="nav-link nav-contact" href="#contact">{"Contact"}</a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 950;
                    background: rgba(26, 26, 26, 0.9);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                }

                .nav-contact {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let config = use_state(SiteConfig::load);

    // Document-wide anchor handling, bound once for the app's lifetime.
    use_effect_with_deps(
        move |_| {
            let binding = match anchors::bind() {
                Ok(binding) => Some(binding),
                Err(e) => {
                    warn!("Smooth scrolling disabled: {}", e);
                    None
                }
            };
            move || drop(binding)
        },
        (),
    );

    let render = {
        let config = (*config).clone();
        move |routes: Route| switch(routes, &config)
    };

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={render} />
            <CookieBanner config={(*config).clone()} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
