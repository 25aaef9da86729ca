use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SiteConfig;
use crate::consent::{record_choice, BannerStage, BrowserConsentStore, ConsentChoice, ConsentStore};
use crate::Route;

pub const COOKIE_BANNER_ID: &str = "cookieBanner";

#[derive(Properties, PartialEq)]
pub struct CookieBannerProps {
    pub config: SiteConfig,
}

#[function_component(CookieBanner)]
pub fn cookie_banner(props: &CookieBannerProps) -> Html {
    let store = BrowserConsentStore::new(props.config.consent_storage_key.clone());
    let stage = {
        let store = store.clone();
        use_state(move || BannerStage::initial(store.load()))
    };

    {
        let stage_setter = stage.setter();
        let (reveal_ms, show_ms, transition_ms) = (
            props.config.cookie_banner_delay_ms,
            props.config.cookie_banner_show_delay_ms,
            props.config.transition_ms,
        );
        use_effect_with_deps(
            move |current: &BannerStage| {
                let timeout = current
                    .scheduled(reveal_ms, show_ms, transition_ms)
                    .map(move |(next, delay)| {
                        Timeout::new(delay, move || {
                            debug!("Cookie banner stage: {:?}", next);
                            stage_setter.set(next);
                        })
                    });
                // Unmounting or a stage change cancels the pending timer.
                move || drop(timeout)
            },
            *stage,
        );
    }

    let respond = |choice: ConsentChoice| {
        let stage = stage.clone();
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            stage.set(record_choice(&store, *stage, choice));
        })
    };
    let on_accept = respond(ConsentChoice::Accepted);
    let on_decline = respond(ConsentChoice::Declined);

    let style = if stage.in_layout() { "display: block;" } else { "display: none;" };
    let class = classes!(
        "cookie-banner",
        (*stage == BannerStage::Shown).then(|| "show"),
        (*stage == BannerStage::Hiding).then(|| "hide"),
    );

    html! {
        <div
            id={COOKIE_BANNER_ID}
            {class}
            {style}
            role="dialog"
            aria-label="Cookie consent"
            aria-live="polite"
        >
            <div class="cookie-content">
                <p>
                    {"We use cookies to understand how visitors use our site and to improve it. "}
                    <Link<Route> to={Route::Privacy} classes="cookie-link">
                        {"Learn more"}
                    </Link<Route>>
                </p>
                <div class="cookie-actions">
                    <button class="cookie-btn cookie-accept" onclick={on_accept}>{"Accept"}</button>
                    <button class="cookie-btn cookie-decline" onclick={on_decline}>{"Decline"}</button>
                </div>
            </div>
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    left: 1rem;
                    right: 1rem;
                    bottom: 1rem;
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 1.25rem 1.5rem;
                    background: rgba(26, 26, 26, 0.95);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 12px;
                    color: #eee;
                    z-index: 1000;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }

                .cookie-banner.show {
                    opacity: 1;
                    transform: translateY(0);
                }

                .cookie-banner.hide {
                    opacity: 0;
                    transform: translateY(20px);
                }

                .cookie-content {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                }

                .cookie-link {
                    color: #7EB2FF;
                }

                .cookie-actions {
                    display: flex;
                    gap: 0.75rem;
                }

                .cookie-btn {
                    padding: 0.6rem 1.2rem;
                    border-radius: 6px;
                    border: 1px solid #1E90FF;
                    cursor: pointer;
                    font-size: 0.95rem;
                }

                .cookie-accept {
                    background: #1E90FF;
                    color: #fff;
                }

                .cookie-decline {
                    background: transparent;
                    color: #1E90FF;
                }
                "#}
            </style>
        </div>
    }
}
