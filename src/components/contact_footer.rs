use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::chat::lead::{check_email, check_message, check_name, Inquiry, InquirySource};
use crate::config::{OFFICE_ADDRESS, OFFICE_PHONE, SUPPORT_EMAIL};
use crate::error::ApiError;
use crate::utils::scroll_to_section;

const SENT_NOTICE: &str = "Thank you! Your message has been sent. We'll get back to you soon.";
const SEND_FALLBACK: &str = "Sorry, your message could not be sent. Please try again later.";

const FOOTER_SERVICES: &[&str] = &[
    "Fleet Management Solutions",
    "Electric Vehicle Infrastructure",
    "Smart Mobility Platforms",
    "Sustainable Transport Consulting",
    "Software as a Service (SaaS)",
];

/// First failing check across the three contact fields, in form order.
pub fn check_contact(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    check_name(name)?;
    check_email(email)?;
    check_message(message)
}

/// The relay's own rejection text when it gave one, otherwise the apology.
pub fn send_failure_notice(error: &ApiError) -> String {
    match error {
        ApiError::Rejected { message, .. } if !message.is_empty() => message.clone(),
        _ => SEND_FALLBACK.to_string(),
    }
}

#[derive(Clone, PartialEq)]
enum Notice {
    Sent,
    Failed(String),
}

#[function_component]
pub fn ContactFooter() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let notice = use_state(|| None::<Notice>);
    let is_sending = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let notice = notice.clone();
        let is_sending = is_sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }
            if let Err(problem) = check_contact(&name, &email, &message) {
                notice.set(Some(Notice::Failed(problem.to_string())));
                return;
            }

            let inquiry = Inquiry {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                message: message.trim().to_string(),
                source: InquirySource::ContactForm,
            };
            is_sending.set(true);
            notice.set(None);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let notice = notice.clone();
            let is_sending = is_sending.clone();
            spawn_local(async move {
                match api::relay_inquiry(&inquiry).await {
                    Ok(()) => {
                        log!("Contact form sent");
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        notice.set(Some(Notice::Sent));
                    }
                    Err(e) => {
                        gloo_console::error!("Contact form failed:", e.to_string());
                        notice.set(Some(Notice::Failed(send_failure_notice(&e))));
                    }
                }
                is_sending.set(false);
            });
        })
    };

    let get_in_touch = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let quick_link = |id: &'static str, label: &'static str| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
        });
        html! { <li><a href={format!("#{}", id)} {onclick}>{label}</a></li> }
    };

    html! {
        <div class="contact-footer">
            <section id="contact" class="contact">
                <div class="section-header">
                    <h2>{"Contact Us"}</h2>
                    <p>{"Get in touch with us for more information about our services."}</p>
                </div>
                <div class="contact-grid">
                    <form class="contact-form" onsubmit={on_submit}>
                        <label for="contact-name">{"Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            value={(*name).clone()}
                            oninput={on_name}
                            required={true}
                        />
                        <label for="contact-email">{"Email Address"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email}
                            required={true}
                        />
                        <label for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            rows="4"
                            value={(*message).clone()}
                            oninput={on_message}
                            required={true}
                        />
                        if let Some(current) = &*notice {
                            {
                                match current {
                                    Notice::Sent => html! { <div class="form-notice success">{SENT_NOTICE}</div> },
                                    Notice::Failed(text) => html! { <div class="form-notice error">{text}</div> },
                                }
                            }
                        }
                        <button type="submit" class="btn primary full" disabled={*is_sending}>
                            { if *is_sending { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                    <div class="contact-details">
                        <div class="contact-item">
                            <span class="contact-icon">{"📍"}</span>
                            <div>
                                <h4>{"Our Office"}</h4>
                                <p>{OFFICE_ADDRESS}</p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">{"✉"}</span>
                            <div>
                                <h4>{"Email Us"}</h4>
                                <p><a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a></p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">{"📞"}</span>
                            <div>
                                <h4>{"Call Us"}</h4>
                                <p>{OFFICE_PHONE}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{"AUTOSAAS"}</h3>
                        <p>
                            {"Pioneering the future of sustainable transportation in Africa through innovative energy solutions and smart mobility systems."}
                        </p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { quick_link("home", "Home") }
                            { quick_link("about", "About Us") }
                            { quick_link("services", "Services") }
                            { quick_link("contact", "Contact") }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Our Services"}</h4>
                        <ul>
                            { for FOOTER_SERVICES.iter().map(|s| quick_link("services", *s)) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Contact Information"}</h4>
                        <p>{"📍 "}{OFFICE_ADDRESS}</p>
                        <p>{"✉ "}{SUPPORT_EMAIL}</p>
                        <p>{"📞 "}{OFFICE_PHONE}</p>
                        <button class="btn primary" onclick={get_in_touch}>{"Get In Touch"}</button>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 AUTOSAAS. All rights reserved."}</p>
                </div>
            </footer>
            <style>
                {r#"
                .contact-footer { background: #f3f4f6; padding-top: 5rem; }
                .contact { max-width: 80rem; margin: 0 auto 5rem; padding: 0 1.5rem; }
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 3rem;
                }
                .contact-form {
                    background: white;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.06);
                    display: flex;
                    flex-direction: column;
                }
                .contact-form label { font-size: 0.875rem; font-weight: 500; color: #374151; }
                .contact-form input,
                .contact-form textarea {
                    margin: 0.25rem 0 1.5rem;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    font: inherit;
                }
                .form-notice { padding: 0.75rem; border-radius: 0.5rem; margin-bottom: 1rem; font-size: 0.875rem; }
                .form-notice.success { background: #f0fdf4; color: #166534; border: 1px solid #bbf7d0; }
                .form-notice.error { background: #fef2f2; color: #991b1b; border: 1px solid #fecaca; }
                .contact-details { display: flex; flex-direction: column; gap: 2rem; }
                .contact-item { display: flex; align-items: center; gap: 1rem; }
                .contact-item h4 { margin: 0; font-size: 1.125rem; color: #111827; }
                .contact-item p { margin: 0; color: #4b5563; }
                .contact-icon { font-size: 2rem; }
                .site-footer { background: #111827; color: white; padding: 4rem 1.5rem 2rem; }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto 3rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 2rem;
                }
                .footer-brand { color: #4ade80; font-size: 1.5rem; }
                .site-footer p { color: #d1d5db; font-size: 0.875rem; line-height: 1.6; }
                .site-footer ul { list-style: none; padding: 0; }
                .site-footer li { margin-bottom: 0.5rem; }
                .site-footer a { color: #d1d5db; text-decoration: none; }
                .site-footer a:hover { color: #4ade80; }
                .footer-bottom { border-top: 1px solid #374151; padding-top: 2rem; text-align: center; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_checks_run_in_field_order() {
        assert_eq!(
            check_contact("A", "bad", "short"),
            Err("Please provide a valid name (at least 2 characters).")
        );
        assert_eq!(
            check_contact("Ada", "bad", "short"),
            Err("Please provide a valid email address.")
        );
        assert_eq!(
            check_contact("Ada", "ada@example.com", "short"),
            Err("Please provide a more detailed message (at least 10 characters).")
        );
    }

    #[test]
    fn transport_failures_show_the_apology() {
        let offline = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(send_failure_notice(&offline), SEND_FALLBACK);
        assert_eq!(send_failure_notice(&ApiError::NotConfigured("FORM_RELAY_URL")), SEND_FALLBACK);
        assert_eq!(send_failure_notice(&ApiError::Decode("eof".into())), SEND_FALLBACK);
    }

    #[test]
    fn server_rejection_text_is_shown() {
        let rejected = ApiError::Rejected { status: 422, message: "Email is invalid".into() };
        assert_eq!(send_failure_notice(&rejected), "Email is invalid");
        let blank = ApiError::Rejected { status: 500, message: String::new() };
        assert_eq!(send_failure_notice(&blank), SEND_FALLBACK);
    }

    #[test]
    fn complete_contact_details_pass() {
        assert!(check_contact("Ada", "ada@example.com", "Tell me about fleet tools").is_ok());
    }
}
