use yew::prelude::*;

use crate::config::{MAX_TEAM_MEMBERS, PROGRAM_NAME, REGISTRATION_DEADLINE};
use crate::content;

#[function_component(About)]
pub fn about() -> Html {
    let site = content::site();

    html! {
        <section id="about" class="about">
            <div class="about-inner">
                <div class="section-head">
                    <span class="badge">{"About the Program"}</span>
                    <h2>{format!("Why Choose {}?", PROGRAM_NAME)}</h2>
                    <p>
                        {"A comprehensive hybrid training program designed to transform your innovative ideas into tangible prototypes with expert guidance and state-of-the-art resources."}
                    </p>
                </div>

                <div class="feature-grid">
                    { for site.program_features.iter().map(|f| html! {
                        <div class="card feature-card">
                            <div class="feature-icon">{&f.icon}</div>
                            <div class="feature-label">{&f.label}</div>
                            <div class="muted">{&f.value}</div>
                        </div>
                    }) }
                </div>

                <div class="highlight-grid">
                    { for site.highlights.iter().map(|h| html! {
                        <div class="card highlight-card">
                            <div class="highlight-icon">{&h.icon}</div>
                            <h3>{&h.title}</h3>
                            <p class="muted">{&h.description}</p>
                        </div>
                    }) }
                </div>

                <div class="two-col">
                    <div class="card eligibility">
                        <h3>{"👥 Eligibility"}</h3>
                        <ul>
                            { for site.eligibility.iter().map(|line| html! { <li>{line}</li> }) }
                        </ul>
                    </div>
                    <div class="card fee">
                        <h3>{"💰 Investment"}</h3>
                        <div class="fee-amount">{"₹2,999"}</div>
                        <div>{format!("per team (maximum {} members)", MAX_TEAM_MEMBERS)}</div>
                        <div class="fee-list">
                            { for site.fee_includes.iter().map(|line| html! { <div>{format!("✓ {}", line)}</div> }) }
                        </div>
                    </div>
                </div>

                <h3 class="testimonials-title">{"What Our Participants Say"}</h3>
                <div class="testimonial-grid">
                    { for site.testimonials.iter().map(|t| html! {
                        <div class="card testimonial">
                            <div class="testimonial-head">
                                <span class="avatar">{&t.avatar}</span>
                                <div>
                                    <div class="feature-label">{&t.name}</div>
                                    <div class="muted small">{&t.role}</div>
                                </div>
                            </div>
                            <div class="stars">{stars(t.rating)}</div>
                            <p class="muted quote">{format!("\"{}\"", t.content)}</p>
                        </div>
                    }) }
                </div>

                <div class="deadline-banner">
                    <h3>{"📅 Registration Deadline"}</h3>
                    <div class="deadline-date">{REGISTRATION_DEADLINE}</div>
                    <p>{"Don't miss your chance to be part of this transformative journey!"}</p>
                    <span class="pill">{"📍 Limited seats available - Register now!"}</span>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(to bottom, #ffffff, #f5f3ff);
                    color: #1f1f3a;
                }
                .about-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .section-head {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-head h2 {
                    font-size: 2.75rem;
                    color: #7c3aed;
                    margin: 1rem 0 1.5rem;
                }
                .section-head p {
                    font-size: 1.25rem;
                    color: #6b7280;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .badge {
                    background: #ffedd5;
                    color: #c2410c;
                    border-radius: 999px;
                    padding: 0.5rem 1.5rem;
                    font-size: 1.1rem;
                }
                .card {
                    background: #ffffff;
                    border-radius: 1rem;
                    box-shadow: 0 4px 16px rgba(124, 58, 237, 0.08);
                    padding: 1.5rem;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .card:hover {
                    transform: scale(1.03);
                    box-shadow: 0 8px 28px rgba(124, 58, 237, 0.18);
                }
                .small {
                    font-size: 0.85rem;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                    text-align: center;
                }
                .feature-icon, .highlight-icon {
                    font-size: 1.75rem;
                    margin-bottom: 0.75rem;
                }
                .feature-label {
                    font-weight: 600;
                    color: #7c3aed;
                }
                .highlight-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .highlight-card {
                    border-left: 4px solid #7c3aed;
                }
                .highlight-card h3 {
                    color: #7c3aed;
                }
                .two-col {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .eligibility h3 {
                    color: #7c3aed;
                    font-size: 1.5rem;
                }
                .eligibility li {
                    margin: 0.75rem 0;
                }
                .fee {
                    background: linear-gradient(135deg, #f97316, #ea580c);
                    color: #ffffff;
                }
                .fee-amount {
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .fee-list {
                    margin-top: 1rem;
                    font-size: 0.9rem;
                    opacity: 0.85;
                }
                .testimonials-title {
                    text-align: center;
                    font-size: 2rem;
                    color: #7c3aed;
                    margin-bottom: 2.5rem;
                }
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .testimonial-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .avatar {
                    font-size: 2rem;
                }
                .stars {
                    color: #facc15;
                    margin-bottom: 0.75rem;
                }
                .quote {
                    font-style: italic;
                }
                .deadline-banner {
                    background: linear-gradient(135deg, #7c3aed, #f97316);
                    color: #ffffff;
                    text-align: center;
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .deadline-date {
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .pill {
                    display: inline-block;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    padding: 0.75rem 1.5rem;
                    margin-top: 1rem;
                }
                "#}
            </style>
        </section>
    }
}

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_star_per_rating_point() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(0), "");
    }
}
