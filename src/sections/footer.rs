use chrono::{Datelike, Local};
use gloo_console::{error, log};
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

const FOOTER_GROUPS: &[(&str, &[(&str, &str)])] = &[
    (
        "Company",
        &[
            ("Our story", "#founders"),
            ("How it works", "#solution"),
            ("The problem", "#problem"),
        ],
    ),
    (
        "Resources",
        &[
            ("FAQ", "#faq"),
            ("Measuring guide", "#solution"),
            ("First run", "#subscribe"),
        ],
    ),
    (
        "Community",
        &[
            ("Fit stories", "#founders"),
            ("Ateliers, join us", "mailto:ateliers@fitlane.co"),
            ("Refer a friend", "#subscribe"),
        ],
    ),
    (
        "Contact",
        &[
            ("hello@fitlane.co", "mailto:hello@fitlane.co"),
            ("Press", "mailto:press@fitlane.co"),
            ("Tallinn, Estonia", "#founders"),
        ],
    ),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "https://instagram.com/fitlane.co"),
    ("TikTok", "https://tiktok.com/@fitlane.co"),
    ("Pinterest", "https://pinterest.com/fitlaneco"),
];

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let success = success.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let address = email.trim().to_string();
            if !is_valid_email(&address) {
                success.set(None);
                error.set(Some(
                    "That doesn't look like an email address. Mind checking it?".to_string(),
                ));
                return;
            }

            is_submitting.set(true);
            error.set(None);
            success.set(None);

            let email = email.clone();
            let error = error.clone();
            let success = success.clone();
            let is_submitting = is_submitting.clone();
            spawn_local(async move {
                log!("Submitting launch list signup");
                match Request::post(&format!("{}/api/subscribe", config::get_backend_url()))
                    .header("Content-Type", "application/json")
                    .json(&json!({ "email": address }))
                    .expect("Failed to serialize subscribe request")
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            success.set(Some("You're on the list. Watch your inbox.".to_string()));
                            email.set(String::new());
                        } else {
                            match response.json::<ErrorResponse>().await {
                                Ok(body) => error.set(Some(body.error)),
                                Err(_) => error.set(Some(
                                    "Something went wrong on our side. Please try again.".to_string(),
                                )),
                            }
                        }
                    }
                    Err(e) => {
                        error!("Subscribe request failed:", e.to_string());
                        error.set(Some(
                            "Couldn't reach the server. Please try again.".to_string(),
                        ));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let year = Local::now().year();

    html! {
        <footer class="footer-section">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-orb">{"fl"}</span>
                        <h3>{"fitlane"}</h3>
                        <p>{"Clothes cut for your body, sewn to order by workshops we trust."}</p>
                        <a href="#hero" class="footer-cta">{"Find your fit"}</a>
                    </div>
                    {
                        FOOTER_GROUPS.iter().map(|(heading, links)| {
                            html! {
                                <div class="footer-card">
                                    <h4>{*heading}</h4>
                                    <ul>
                                        {
                                            links.iter().map(|(label, href)| {
                                                html! {
                                                    <li><a href={*href}>{*label}</a></li>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div id="subscribe" class="footer-subscribe">
                    <h3>{"Be first in line"}</h3>
                    <p>{"The first run is small. Leave your email and we'll hold you a spot."}</p>
                    <form class="subscribe-form" {onsubmit}>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            {oninput}
                            disabled={*is_submitting}
                        />
                        <button type="submit" disabled={*is_submitting}>
                            {if *is_submitting { "Joining..." } else { "Join the list" }}
                        </button>
                    </form>
                    {
                        if let Some(message) = (*error).as_ref() {
                            html! { <p class="subscribe-error">{message.clone()}</p> }
                        } else if let Some(message) = (*success).as_ref() {
                            html! { <p class="subscribe-success">{message.clone()}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="footer-bottom">
                    <span>{format!("© {} fitlane", year)}</span>
                    <div class="footer-socials">
                        {
                            SOCIAL_LINKS.iter().map(|(label, href)| {
                                html! {
                                    <a href={*href} target="_blank" rel="noopener">{*label}</a>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .footer-section {
                    background: #0A0080;
                    color: #FFFDFB;
                    padding: 4rem 2rem 2rem;
                }

                .footer-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 1.6fr 1fr 1fr 1fr 1fr;
                    gap: 2.2rem;
                    margin-bottom: 3rem;
                }

                .footer-orb {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #EBBAB9;
                    color: #0A0080;
                    font-weight: 700;
                }

                .footer-brand h3 {
                    margin: 0.8rem 0 0.5rem;
                    font-size: 1.3rem;
                }

                .footer-brand p {
                    margin: 0 0 1.2rem;
                    color: rgba(255, 253, 251, 0.7);
                    font-size: 0.92rem;
                    line-height: 1.55;
                    max-width: 16rem;
                }

                .footer-cta {
                    display: inline-block;
                    padding: 0.7rem 1.6rem;
                    border-radius: 999px;
                    background: #EBBAB9;
                    color: #0A0080;
                    text-decoration: none;
                    font-weight: 700;
                }

                .footer-card h4 {
                    margin: 0 0 1rem;
                    font-size: 0.8rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #EBBAB9;
                }

                .footer-card ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }

                .footer-card a {
                    color: rgba(255, 253, 251, 0.85);
                    text-decoration: none;
                    font-size: 0.92rem;
                }

                .footer-card a:hover {
                    color: #EBBAB9;
                }

                .footer-subscribe {
                    border-top: 1px solid rgba(255, 253, 251, 0.15);
                    padding: 2.5rem 0;
                    text-align: center;
                }

                .footer-subscribe h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.4rem;
                }

                .footer-subscribe p {
                    margin: 0 0 1.5rem;
                    color: rgba(255, 253, 251, 0.7);
                }

                .subscribe-form {
                    display: flex;
                    justify-content: center;
                    gap: 0.8rem;
                    flex-wrap: wrap;
                }

                .subscribe-form input {
                    width: min(320px, 100%);
                    padding: 0.85rem 1.2rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 253, 251, 0.3);
                    background: rgba(255, 253, 251, 0.08);
                    color: #FFFDFB;
                    font-size: 0.95rem;
                }

                .subscribe-form input::placeholder {
                    color: rgba(255, 253, 251, 0.45);
                }

                .subscribe-form button {
                    padding: 0.85rem 1.8rem;
                    border-radius: 999px;
                    border: none;
                    background: #EBBAB9;
                    color: #0A0080;
                    font-weight: 700;
                    cursor: pointer;
                }

                .subscribe-form button:disabled,
                .subscribe-form input:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .subscribe-error {
                    margin: 1rem 0 0;
                    color: #FFB4A9;
                    font-size: 0.9rem;
                }

                .subscribe-success {
                    margin: 1rem 0 0;
                    color: #A5D6A7;
                    font-size: 0.9rem;
                }

                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    border-top: 1px solid rgba(255, 253, 251, 0.15);
                    padding-top: 1.5rem;
                    font-size: 0.85rem;
                    color: rgba(255, 253, 251, 0.7);
                }

                .footer-socials {
                    display: flex;
                    gap: 1.2rem;
                }

                .footer-socials a {
                    color: rgba(255, 253, 251, 0.85);
                    text-decoration: none;
                }

                .footer-socials a:hover {
                    color: #EBBAB9;
                }

                @media (max-width: 968px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (max-width: 600px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("ada@fitlane.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("x+launch@domain.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@missing-local.org"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("two@@signs.co"));
        assert!(!is_valid_email("spaces in@address.co"));
        assert!(!is_valid_email("nodot@domain"));
        assert!(!is_valid_email("dot@.leading.co"));
        assert!(!is_valid_email("dot@trailing."));
    }
}
