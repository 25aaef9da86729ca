use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SiteConfig;
use crate::consent::{BrowserConsentStore, ConsentStore};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PrivacyPolicyProps {
    pub config: SiteConfig,
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(props: &PrivacyPolicyProps) -> Html {
    let store = BrowserConsentStore::new(props.config.consent_storage_key.clone());
    let current = use_state(|| store.load());
    let reset_done = use_state(|| false);

    let on_reset = {
        let current = current.clone();
        let reset_done = reset_done.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match store.clear() {
                Ok(()) => {
                    info!("Cookie preference cleared");
                    current.set(store.load());
                    reset_done.set(true);
                }
                Err(err) => warn!("Could not clear cookie preference: {}", err),
            }
        })
    };

    html! {
        <div class="legal-content privacy-policy">
            <div>
                <h1>{"Privacy & Cookies"}</h1>

                <section>
                    <h2>{"1. What we collect"}</h2>
                    <p>{"When you use the contact form we receive the details you enter:"}</p>
                    <ul>
                        <li>{"Name and work email, so we can reply"}</li>
                        <li>{"Phone number and organization, if you choose to share them"}</li>
                        <li>{"Your message and the service you asked about"}</li>
                    </ul>
                    <p>{"Form submissions are delivered by our form processing provider and are not stored on this website."}</p>
                </section>

                <section>
                    <h2>{"2. Cookies"}</h2>
                    <p>{"We only set analytics cookies after you accept them in the cookie banner. Your choice is kept in your browser's local storage so we don't ask again."}</p>
                    <p>{format!("Current choice: {}", *current)}</p>
                    <button class="reset-consent" onclick={on_reset}>{"Reset cookie preference"}</button>
                    {
                        if *reset_done {
                            html! { <p class="reset-note">{"Done. You'll be asked again on your next visit."}</p> }
                        } else {
                            html! {}
                        }
                    }
                </section>

                <section>
                    <h2>{"3. Your rights"}</h2>
                    <p>{"You can ask us to access, correct or delete any information you sent through the contact form."}</p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            </div>

            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: #1a1a1a;
                    padding: 6rem 2rem 4rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .legal-content > div {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 3rem;
                    max-width: 800px;
                    margin: 0 auto;
                }

                .legal-content h1 {
                    font-size: 2rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 2.5rem;
                    text-align: center;
                }

                .legal-content section {
                    background: rgba(0, 0, 0, 0.2);
                    border-radius: 12px;
                    padding: 2rem;
                    margin: 1.5rem auto;
                }

                .legal-content h2 {
                    color: #7EB2FF;
                    font-size: 1.4rem;
                    margin-bottom: 1.25rem;
                }

                .legal-content p, .legal-content li {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .reset-consent {
                    padding: 0.6rem 1.2rem;
                    border-radius: 6px;
                    border: 1px solid #1E90FF;
                    background: transparent;
                    color: #1E90FF;
                    cursor: pointer;
                }

                .legal-links {
                    margin-top: 2rem;
                    text-align: center;
                }

                .legal-links a {
                    color: #1E90FF;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for doesn't exist."}</p>
                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
