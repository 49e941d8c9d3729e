use yew::prelude::*;

use crate::browser::scroll_to_section;
use crate::config::{self, ORGANIZER, PROGRAM_NAME};
use crate::content;
use crate::countdown::use_countdown;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_register: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let left = use_countdown(config::event_start());
    let site = content::site();

    let on_register = {
        let on_register = props.on_register.clone();
        Callback::from(move |_: MouseEvent| on_register.emit(()))
    };
    let on_learn_more = Callback::from(|_: MouseEvent| scroll_to_section("about"));

    html! {
        <section id="hero" class="hero">
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <div class="hero-logo">{ORGANIZER}</div>
                <h1>{"Turn Your Ideas into Reality "}<span class="bounce">{"🚀"}</span></h1>
                <p class="hero-pitch">
                    {"Introducing "}<strong>{PROGRAM_NAME}</strong>
                    {"—a 1-month hybrid training program to help you prototype and build your dream product with AIC RAISE's FAB LAB!"}
                </p>

                <div class="glass countdown">
                    <h3>{"📅 Event Starts In:"}</h3>
                    <div class="countdown-grid">
                        { for left.units().into_iter().map(|(unit, value)| html! {
                            <div class="countdown-cell" key={unit}>
                                <div class="countdown-value">{format!("{:02}", value)}</div>
                                <div class="countdown-unit">{unit}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-highlights">
                    { for site.hero_highlights.iter().map(|chip| html! {
                        <div class="glass hero-chip">
                            <span class="chip-icon">{&chip.icon}</span>
                            <p>{&chip.text}</p>
                        </div>
                    }) }
                </div>

                <div class="hero-actions">
                    <button class="btn-hero" onclick={on_register}>{"🚀 Register Now"}</button>
                    <button class="btn-glass" onclick={on_learn_more}>{"⏰ Learn More"}</button>
                </div>

                <div class="glass hero-info">
                    <div>
                        <div class="info-label">{"Eligibility:"}</div>
                        <div>{"Students (16–23 yrs) & Recent Graduates (≤3 yrs)"}</div>
                    </div>
                    <div>
                        <div class="info-label">{"Fee:"}</div>
                        <div>{format!("₹2999 per team (max {} members)", config::MAX_TEAM_MEMBERS)}</div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #4c1d95, #7c3aed 50%, #f97316);
                    overflow: hidden;
                    color: #ffffff;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 72rem;
                    padding: 6rem 1.5rem;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .hero-logo {
                    position: absolute;
                    top: 2rem;
                    left: 2rem;
                    font-weight: 700;
                    font-size: 1.5rem;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 700;
                    margin: 0;
                }
                .bounce {
                    display: inline-block;
                    animation: bounce 1s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-25%); }
                }
                .hero-pitch {
                    font-size: 1.4rem;
                    max-width: 56rem;
                    margin: 0 auto;
                    opacity: 0.9;
                }
                .glass {
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(10px);
                    border-radius: 1rem;
                    padding: 1.5rem;
                }
                .countdown {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .countdown-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .countdown-value {
                    background: linear-gradient(135deg, #7c3aed, #f97316);
                    border-radius: 0.5rem;
                    padding: 1rem;
                    font-size: 2rem;
                    font-weight: 700;
                }
                .countdown-unit {
                    margin-top: 0.5rem;
                    text-transform: capitalize;
                    opacity: 0.8;
                }
                .hero-highlights {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .hero-chip {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-align: left;
                    transition: transform 0.3s ease;
                }
                .hero-chip:hover {
                    transform: scale(1.05);
                }
                .chip-icon {
                    font-size: 1.5rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .btn-hero, .btn-glass {
                    font-size: 1.25rem;
                    padding: 1rem 2.5rem;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    border: none;
                    color: #ffffff;
                    transition: transform 0.3s ease;
                }
                .btn-hero {
                    background: linear-gradient(135deg, #f97316, #7c3aed);
                }
                .btn-glass {
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .btn-hero:hover, .btn-glass:hover {
                    transform: translateY(-2px);
                }
                .hero-info {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .info-label {
                    font-weight: 600;
                    color: #fdba74;
                }
                @media (max-width: 768px) {
                    .hero-logo {
                        position: static;
                        margin: 0 auto;
                    }
                    .countdown-value {
                        font-size: 1.5rem;
                        padding: 0.75rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
