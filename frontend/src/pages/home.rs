use log::warn;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::config::SiteConfig;
use crate::scroll::{self, FLOATING_CTA_ID};

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "What does Nexus Health Operations do?".into(),
            answer: html! {
                <p>{"We run the back-office work that keeps clinics and hospital groups moving: revenue cycle, credentialing, staffing and compliance reviews, delivered by a dedicated operations team."}</p>
            },
        },
        FaqEntry {
            question: "How long does onboarding take?".into(),
            answer: html! {
                <p>{"Most practices are fully onboarded within four to six weeks. We start with a discovery call, map your current workflows and run in parallel with your team before taking over."}</p>
            },
        },
        FaqEntry {
            question: "Do you work with our existing EHR?".into(),
            answer: html! {
                <p>{"Yes. Our team works inside the systems you already use, including Epic, athenahealth, eClinicalWorks and NextGen. No migration is required."}</p>
            },
        },
        FaqEntry {
            question: "How is patient data protected?".into(),
            answer: html! {
                <>
                    <p>{"All staff complete HIPAA training and work from managed devices with access limited to what each engagement requires."}</p>
                    <p>{"We sign a Business Associate Agreement with every client before any data is shared."}</p>
                </>
            },
        },
        FaqEntry {
            question: "How is pricing structured?".into(),
            answer: html! {
                <p>{"Revenue cycle work is priced as a percentage of collections. Other services are billed monthly per provider. Send us a message and we'll put together a quote."}</p>
            },
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: SiteConfig,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    {
        let config = props.config.clone();
        use_effect_with_deps(
            move |_| {
                let binding = match scroll::bind(&config) {
                    Ok(binding) => Some(binding),
                    Err(e) => {
                        warn!("Scroll animations disabled: {}", e);
                        None
                    }
                };
                move || drop(binding)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <section class="hero" id="top">
                <h1>{"Healthcare operations, handled."}</h1>
                <p class="hero-subtitle">
                    {"Nexus Health Operations takes billing, credentialing and staffing off your plate so your clinicians can focus on patients."}
                </p>
                <a class="hero-cta" href="#contact">{"Talk to our team"}</a>
            </section>

            <section class="services" id="services">
                <h2 class="animate-on-scroll">{"What we take care of"}</h2>
                <div class="services-grid">
                    <div class="service-card animate-on-scroll">
                        <h3>{"Revenue Cycle"}</h3>
                        <p>{"Claims, denials and patient billing managed end to end, with weekly reporting."}</p>
                    </div>
                    <div class="service-card animate-on-scroll">
                        <h3>{"Credentialing"}</h3>
                        <p>{"Payer enrollment and re-credentialing tracked so no provider lapses."}</p>
                    </div>
                    <div class="service-card animate-on-scroll">
                        <h3>{"Staffing"}</h3>
                        <p>{"Front desk and operations staff who already know healthcare workflows."}</p>
                    </div>
                    <div class="service-card animate-on-scroll">
                        <h3>{"Compliance"}</h3>
                        <p>{"Audit preparation and policy reviews against current CMS and HIPAA rules."}</p>
                    </div>
                </div>
            </section>

            <section class="results" id="results">
                <h2 class="animate-on-scroll">{"Results our clients see"}</h2>
                <div class="stats-grid">
                    <div class="stat animate-on-scroll">
                        <span class="stat-value">{"98%"}</span>
                        <span class="stat-label">{"clean claim rate"}</span>
                    </div>
                    <div class="stat animate-on-scroll">
                        <span class="stat-value">{"32 days"}</span>
                        <span class="stat-label">{"average A/R reduced to"}</span>
                    </div>
                    <div class="stat animate-on-scroll">
                        <span class="stat-value">{"140+"}</span>
                        <span class="stat-label">{"practices supported"}</span>
                    </div>
                </div>
            </section>

            <section class="faq-section" id="faq">
                <h2 class="animate-on-scroll">{"Frequently asked questions"}</h2>
                <div class="animate-on-scroll">
                    <FaqAccordion group="general" items={faq_entries()} />
                </div>
            </section>

            <section class="contact-section" id="contact" tabindex="-1">
                <h2 class="animate-on-scroll">{"Get in touch"}</h2>
                <p class="contact-intro">{"Tell us a little about your organization and we'll reply within one business day."}</p>
                <ContactForm endpoint={props.config.form_endpoint.clone()} />
            </section>

            <footer class="site-footer">
                <a href="#top">{"Back to top"}</a>
            </footer>

            <a id={FLOATING_CTA_ID} class="floating-cta" href="#contact" aria-hidden="true">
                {"Book a consultation"}
            </a>

            <style>
                {r#"
                .landing-page {
                    color: #fff;
                    background: #1a1a1a;
                }

                .landing-page section {
                    scroll-margin-top: 72px;
                    padding: 6rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .landing-page h2 {
                    font-size: 2.2rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .hero {
                    min-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #aaa;
                    max-width: 640px;
                    margin-bottom: 2.5rem;
                }

                .hero-cta,
                .floating-cta {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }

                .services-grid,
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .service-card,
                .stat {
                    padding: 2rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                }

                .service-card p {
                    color: #aaa;
                    line-height: 1.6;
                }

                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .stat-value {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #7EB2FF;
                }

                .stat-label {
                    color: #aaa;
                }

                .contact-intro {
                    text-align: center;
                    color: #aaa;
                    margin-bottom: 2rem;
                }

                .site-footer {
                    padding: 2rem;
                    text-align: center;
                }

                .site-footer a {
                    color: #7EB2FF;
                }

                .animate-on-scroll {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .animate-on-scroll.animated {
                    opacity: 1;
                    transform: translateY(0);
                }

                .floating-cta {
                    position: fixed;
                    right: 2rem;
                    bottom: 2rem;
                    z-index: 900;
                    opacity: 0;
                    pointer-events: none;
                    transform: translateY(20px);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                }

                .floating-cta.visible {
                    opacity: 1;
                    pointer-events: auto;
                    transform: translateY(0);
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }

                    .floating-cta {
                        right: 1rem;
                        bottom: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
