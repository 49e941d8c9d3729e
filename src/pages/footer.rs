use yew::prelude::*;

use crate::browser::open_in_new_tab;
use crate::config::{EVENT_DATE, ORGANIZER, REGISTRATION_DEADLINE};
use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = content::site();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-logo">{ORGANIZER}</div>
                    <h3>{"Contact Information"}</h3>
                    <div>{format!("✉️ {}", site.contact.email)}</div>
                    <div>{format!("📞 {}", site.contact.phone)}</div>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <div><a href="#hero">{"Home"}</a></div>
                    <div><a href="#about">{"About Program"}</a></div>
                    <div><a href="#quiz">{"Innovation Quiz"}</a></div>
                    <div><a href="#register">{"Register Now"}</a></div>
                </div>
                <div>
                    <h3>{"Connect With Us"}</h3>
                    <div class="social-row">
                        { for site.social_links.iter().map(|link| {
                            let url = link.url.clone();
                            let onclick = Callback::from(move |_: MouseEvent| open_in_new_tab(&url));
                            html! {
                                <button class="btn-social" title={link.label.clone()} {onclick}>{&link.icon}</button>
                            }
                        }) }
                    </div>
                    <p class="footer-note">{"Join our community and stay updated with the latest innovations!"}</p>
                </div>
            </div>

            <div class="footer-dates">
                <div>
                    <div class="date-label">{"Registration Deadline"}</div>
                    <div class="date-value">{REGISTRATION_DEADLINE}</div>
                </div>
                <div>
                    <div class="date-label">{"Event Date"}</div>
                    <div class="date-value">{EVENT_DATE}</div>
                </div>
            </div>

            <div class="footer-bottom">
                <span>{format!("© 2025 {0}. All rights reserved. | Powered by {0} Innovation Center", ORGANIZER)}</span>
                <span>{"Made with ❤️ for innovators and entrepreneurs"}</span>
            </div>
            <style>
                {r#"
                .footer {
                    background: linear-gradient(90deg, #7c3aed, #f97316);
                    color: #ffffff;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer a {
                    color: #ffffff;
                    text-decoration: none;
                    line-height: 2;
                }
                .footer a:hover {
                    color: #fdba74;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto 2rem;
                }
                .footer-logo {
                    font-size: 1.75rem;
                    font-weight: 700;
                }
                .social-row {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .btn-social {
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #ffffff;
                    cursor: pointer;
                }
                .footer-note {
                    font-size: 0.85rem;
                    opacity: 0.8;
                }
                .footer-dates {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    max-width: 72rem;
                    margin: 0 auto 2rem;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 1.5rem;
                }
                .date-label {
                    color: #fdba74;
                    font-weight: 600;
                }
                .date-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    max-width: 72rem;
                    margin: 0 auto;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    padding-top: 1.5rem;
                    font-size: 0.85rem;
                    opacity: 0.8;
                }
                "#}
            </style>
        </footer>
    }
}
