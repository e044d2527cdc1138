use yew::prelude::*;

use crate::config::{SUPPORT_EMAIL, SUPPORT_PHONE};
use crate::scholarship::callback_modal::PaymentCallbackModal;
use crate::scholarship::form::ScholarshipForm;
use crate::utils::scroll_to_section;

const INSTAGRAM_URL: &str = "https://www.instagram.com/automosaas/";
const FACEBOOK_URL: &str = "https://www.facebook.com/people/Automatons-Mobility-and-Software-Services/61579161457339/?sk=about";

const DETAILS: &[(&str, &str, &[&str])] = &[
    ("📄", "Eligibility Criteria", &[
        "Age: 18 years and above",
        "Academic: BSc or HND from accredited Nigerian institution",
        "Must meet entry criteria of partner institutions",
    ]),
    ("👥", "Application Process", &[
        "Apply through official online portal",
        "Deadlines months before sessions",
        "No documents needed initially",
        "Shortlisted candidates provide proof",
    ]),
    ("🧠", "Selection Process", &[
        "General knowledge assessments",
        "Logic-based evaluations",
        "Merit-based selection",
        "Matched with preferred institutions",
    ]),
    ("🔄", "Renewal Terms", &[
        "Based on academic performance",
        "Continued commitment required",
        "Personal development focus",
        "Societal contribution expected",
    ]),
];

const SPONSORSHIP: &[&str] = &[
    "Tuition and academic fees",
    "Visa, travel, and accommodation",
    "Welfare support",
    "Institutional bonuses and admin fees",
];

const DISBURSEMENT: &[&str] = &[
    "Upfront payments to institutions",
    "Student allocation-based funding",
    "Transparent coordination",
    "Efficient processing",
];

fn checklist(items: &[&str]) -> Html {
    html! {
        <ul class="checklist">
            { for items.iter().map(|item| html! { <li><span class="check">{"✓"}</span>{*item}</li> }) }
        </ul>
    }
}

#[function_component]
pub fn Scholarship() -> Html {
    let apply_now = Callback::from(|_: MouseEvent| scroll_to_section("apply"));

    html! {
        <div class="scholarship-page">
            <section id="scholarship-hero" class="scholarship-hero">
                <img src="/scholar-banner.png" alt="Diverse students in graduation gowns" />
                <div class="scholarship-hero-shade"></div>
                <div class="scholarship-hero-copy">
                    <h1>{"Empowering Nigeria's Future Leaders"}</h1>
                    <p>
                        {"Apply for the AUTOSAAS Initiative Scholarship and pursue your master's degree in Europe or America."}
                    </p>
                    <button class="btn primary large" onclick={apply_now}>{"Apply Now"}</button>
                </div>
            </section>

            <section class="scholarship-block split">
                <img src="/student-studying.png" alt="Student studying" />
                <div>
                    <h2>{"About the AUTOSAAS Initiative"}</h2>
                    <p>{"We are proud to present our give-back-to-community and youth empowerment program, the AUTOSAAS Initiative."}</p>
                    <p>{"Our mission is to empower aspiring Nigerian students by providing access to quality higher education through need-based scholarships."}</p>
                    <p>{"We are committed to breaking financial and systemic barriers that hinder academic excellence, fostering a new generation of leaders equipped to transform Nigeria's future."}</p>
                </div>
            </section>

            <section class="scholarship-block tinted">
                <h2>{"Scholarship Details"}</h2>
                <div class="card-grid four">
                    { for DETAILS.iter().map(|(icon, title, items)| html! {
                        <div class="detail-card">
                            <div class="detail-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <ul>
                                { for items.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <section class="scholarship-block centered">
                <h2>{"Funding & Enrollment Fee"}</h2>
                <p>
                    {"We cover tuition, visa processing, logistics, and institutional incentives to ensure your educational journey is fully supported."}
                </p>
            </section>

            <section class="scholarship-block tinted">
                <h2>{"Award & Disbursement"}</h2>
                <div class="card-grid two">
                    <div class="detail-card">
                        <div class="detail-icon">{"🏅"}</div>
                        <h3>{"Scope of Sponsorship"}</h3>
                        { checklist(SPONSORSHIP) }
                    </div>
                    <div class="detail-card">
                        <div class="detail-icon">{"💵"}</div>
                        <h3>{"Disbursement Strategy"}</h3>
                        { checklist(DISBURSEMENT) }
                    </div>
                </div>
            </section>

            <section class="scholarship-block split">
                <div>
                    <h2>{"🤝 Institutional Partnerships"}</h2>
                    <p>{"We seek strategic partnerships with universities to facilitate seamless enrollment, visa processing, and logistics."}</p>
                    <p>{"We offer co-branding opportunities and cover all related expenses, including incentives for designated school agents."}</p>
                    <p>{"Let's elevate your institution's profile as a champion of educational equity in Nigeria."}</p>
                </div>
                <img src="/handshake.png" alt="University campus handshake" />
            </section>

            <section id="apply" class="scholarship-block tinted">
                <ScholarshipForm />
            </section>

            <section class="scholarship-block centered">
                <h2>{"Contact Us"}</h2>
                <div class="card-grid three">
                    <a class="contact-card" href={format!("mailto:{}", SUPPORT_EMAIL)}>
                        <div class="detail-icon">{"✉"}</div>
                        <h3>{"Email"}</h3>
                        <p>{SUPPORT_EMAIL}</p>
                    </a>
                    <div class="contact-card">
                        <div class="detail-icon">{"📞"}</div>
                        <h3>{"Phone"}</h3>
                        <p>{SUPPORT_PHONE}</p>
                    </div>
                    <div class="contact-card">
                        <div class="detail-icon">{"📍"}</div>
                        <h3>{"Location"}</h3>
                        <p>{"Nigeria"}</p>
                    </div>
                </div>
                <div class="social-links">
                    <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a href={FACEBOOK_URL} target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                </div>
            </section>

            <PaymentCallbackModal />
            <style>
                {r#"
                .scholarship-hero {
                    position: relative;
                    height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .scholarship-hero img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .scholarship-hero-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.5); }
                .scholarship-hero-copy { position: relative; text-align: center; color: white; padding: 0 1.5rem; max-width: 48rem; }
                .scholarship-hero-copy h1 { font-size: 3rem; margin-bottom: 1.5rem; }
                .scholarship-hero-copy p { font-size: 1.25rem; margin-bottom: 2rem; }
                .scholarship-block { max-width: 80rem; margin: 0 auto; padding: 4rem 1.5rem; }
                .scholarship-block h2 { font-size: 2.25rem; color: #111827; text-align: center; margin-bottom: 2rem; }
                .scholarship-block p { color: #4b5563; line-height: 1.7; }
                .scholarship-block.tinted { background: #f9fafb; max-width: none; }
                .scholarship-block.tinted > * { max-width: 80rem; margin-left: auto; margin-right: auto; }
                .scholarship-block.centered { text-align: center; }
                .scholarship-block.split {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .scholarship-block.split h2 { text-align: left; }
                .scholarship-block.split img { width: 100%; border-radius: 1rem; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15); }
                .detail-card, .contact-card {
                    background: white;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                    text-decoration: none;
                    color: inherit;
                }
                .detail-card ul { list-style: none; padding: 0; color: #4b5563; font-size: 0.9rem; line-height: 1.8; }
                .detail-icon { font-size: 2.5rem; color: #16a34a; margin-bottom: 1rem; }
                .checklist { list-style: none; padding: 0; }
                .checklist li { display: flex; gap: 0.5rem; margin-bottom: 0.5rem; }
                .checklist .check { color: #16a34a; font-weight: 700; }
                .social-links { display: flex; justify-content: center; gap: 1.5rem; margin-top: 2rem; }
                .social-links a { color: #16a34a; font-weight: 600; }
                "#}
            </style>
        </div>
    }
}
