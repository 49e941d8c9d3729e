use log::info;
use yew::prelude::*;

use crate::browser::{current_url, open_in_new_tab};
use crate::config::REGISTRATION_DEADLINE;
use crate::content;
use crate::pages::{
    about::About, footer::Footer, hero::Hero, quiz::QuizSection, registration::Registration,
};
use crate::share::{linkedin_share_url, whatsapp_share_url, LINKEDIN_TEXT, WHATSAPP_TEXT};

/// Rules shared by the sections and the registration modal.
const BASE_STYLES: &str = r#"
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.muted {
    color: #6b7280;
}
.progress {
    height: 0.5rem;
    background: #ede9fe;
    border-radius: 999px;
    overflow: hidden;
    margin-bottom: 1.5rem;
}
.progress-fill {
    height: 100%;
    background: linear-gradient(90deg, #7c3aed, #f97316);
    transition: width 0.3s ease;
}
.btn-primary, .btn-outline {
    padding: 0.75rem 1.75rem;
    border-radius: 0.5rem;
    font-size: 1rem;
    cursor: pointer;
}
.btn-primary {
    background: linear-gradient(135deg, #7c3aed, #f97316);
    color: #ffffff;
    border: none;
}
.btn-primary:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.btn-outline {
    background: transparent;
    border: 1px solid #7c3aed;
    color: #7c3aed;
}
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let registration_open = use_state(|| false);

    let open_registration = {
        let registration_open = registration_open.clone();
        Callback::from(move |_: ()| {
            info!("Opening registration");
            registration_open.set(true);
        })
    };
    let close_registration = {
        let registration_open = registration_open.clone();
        Callback::from(move |_: ()| registration_open.set(false))
    };

    html! {
        <div class="home">
            <Hero on_register={open_registration.clone()} />
            <About />
            <RegisterEarly />
            <QuizSection />
            <RegisterCta on_register={open_registration} />
            <Footer />
            <Registration open={*registration_open} on_close={close_registration} />
            <style>{BASE_STYLES}</style>
            <style>
                {r#"
                .home {
                    min-height: 100vh;
                }
                .early {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #fff7ed, #f5f3ff);
                    color: #1f1f3a;
                    text-align: center;
                }
                .early h2 {
                    font-size: 2.75rem;
                    color: #7c3aed;
                }
                .early-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 3rem auto;
                }
                .early-card {
                    background: #ffffff;
                    border-radius: 1.25rem;
                    padding: 2rem;
                    box-shadow: 0 8px 28px rgba(124, 58, 237, 0.12);
                    transition: transform 0.3s ease;
                }
                .early-card:hover {
                    transform: scale(1.05);
                }
                .early-icon {
                    font-size: 3.5rem;
                }
                .share-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .btn-share {
                    padding: 0.9rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 1rem;
                    cursor: pointer;
                    border: 1px solid #7c3aed;
                }
                .btn-share.whatsapp {
                    background: #f97316;
                    color: #ffffff;
                    border: none;
                }
                .btn-share.linkedin {
                    background: #ffffff;
                    color: #7c3aed;
                }
                .cta {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(135deg, #4c1d95, #7c3aed 50%, #f97316);
                    color: #ffffff;
                    text-align: center;
                }
                .cta-box {
                    max-width: 42rem;
                    margin: 2rem auto;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .cta-date {
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .spots {
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-top: 1rem;
                }
                .spots strong {
                    font-size: 1.5rem;
                    color: #fdba74;
                }
                .btn-cta {
                    font-size: 1.5rem;
                    padding: 1.25rem 3rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #ffffff;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .btn-cta:hover {
                    transform: scale(1.1);
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(RegisterEarly)]
fn register_early() -> Html {
    let site = content::site();

    let share_whatsapp = Callback::from(|_: MouseEvent| {
        open_in_new_tab(&whatsapp_share_url(WHATSAPP_TEXT, &current_url()));
    });
    let share_linkedin = Callback::from(|_: MouseEvent| {
        open_in_new_tab(&linkedin_share_url(LINKEDIN_TEXT, &current_url()));
    });

    html! {
        <section class="early">
            <h2>{"Why Register Early?"}</h2>
            <p class="muted">{"Join the innovation revolution and unlock exclusive benefits for early registrants!"}</p>
            <div class="early-grid">
                { for site.early_bird_benefits.iter().map(|b| html! {
                    <div class="early-card">
                        <div class="early-icon">{&b.icon}</div>
                        <h3>{&b.title}</h3>
                        <p class="muted">{&b.description}</p>
                    </div>
                }) }
            </div>
            <h3>{"Spread the Innovation!"}</h3>
            <div class="share-row">
                <button class="btn-share whatsapp" onclick={share_whatsapp}>{"Share on WhatsApp"}</button>
                <button class="btn-share linkedin" onclick={share_linkedin}>{"Share on LinkedIn"}</button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct RegisterCtaProps {
    on_register: Callback<()>,
}

#[function_component(RegisterCta)]
fn register_cta(props: &RegisterCtaProps) -> Html {
    let onclick = {
        let on_register = props.on_register.clone();
        Callback::from(move |_: MouseEvent| on_register.emit(()))
    };

    html! {
        <section id="register" class="cta">
            <h2>{"⚠️ Last Chance to Register!"}</h2>
            <div class="cta-box">
                <h3>{"📅 Registration Deadline"}</h3>
                <div class="cta-date">{REGISTRATION_DEADLINE}</div>
                <p>{"Don't miss your chance to be part of this transformative innovation journey. Limited seats available!"}</p>
                <div class="spots">
                    <strong>{"Only 15 spots left!"}</strong>
                    <div>{"Join 35+ teams already registered"}</div>
                </div>
            </div>
            <button class="btn-cta" {onclick}>{"🚀 Register Now Before It Closes"}</button>
            <p>{"Secure your spot today and turn your innovative ideas into reality!"}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_styles_cover_the_modal_controls() {
        for selector in [".muted {", ".progress {", ".progress-fill {", ".btn-primary {", ".btn-outline {"] {
            assert!(BASE_STYLES.contains(selector), "missing {}", selector);
        }
    }
}
