use yew::prelude::*;

use crate::utils::scroll_to_section;

const IMPACT_AREAS: &[(&str, &str, &str)] = &[
    ("⚡", "Smart Energy", "Intelligent power management systems"),
    ("🌿", "Clean Transport", "Zero-emission mobility solutions"),
    ("👥", "Community", "Empowering local communities"),
    ("🌍", "Global Reach", "Connecting Africa to the world"),
];

const VALUES: &[(&str, &str, &str)] = &[
    ("🌱", "Sustainability First", "Every solution we create prioritizes environmental impact and long-term sustainability for our planet and future generations."),
    ("📈", "Innovation Driven", "We leverage cutting-edge technology and innovative thinking to solve complex transportation and energy challenges across Africa."),
    ("🛡", "Reliability & Trust", "Our commitment to delivering reliable, secure, and trustworthy solutions builds lasting partnerships with our clients and communities."),
    ("❤", "Community Impact", "We believe in creating solutions that not only advance technology but also uplift communities and improve quality of life."),
];

#[function_component]
pub fn About() -> Html {
    let contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <section id="about" class="about">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"About AUTOSAAS"}</h2>
                    <p>
                        {"We are pioneering the future of sustainable transportation in Africa through innovative energy solutions, smart mobility systems, and transformative technology that connects communities while protecting our environment."}
                    </p>
                </div>

                <div class="about-story">
                    <div>
                        <h3>{"Our Story"}</h3>
                        <p>
                            {"AUTOSAAS was founded with a bold vision to transform Africa's transportation landscape, addressing the continent's unique mobility challenges while unlocking its immense potential for sustainable development."}
                        </p>
                        <p>
                            {"As a startup, we recognized that traditional transportation models are inadequate for Africa's rapid urbanization and environmental goals. We're building innovative solutions that bridge the gap between cutting-edge technology and practical, accessible transport systems."}
                        </p>
                        <p>
                            {"We're committed to becoming a key player in Africa's clean mobility revolution, working on everything from AI-powered fleet management systems to comprehensive sustainable energy solutions that will power the future of transportation across the continent."}
                        </p>
                        <button class="btn primary" onclick={contact.clone()}>{"Contact Us Now ›"}</button>
                    </div>
                    <div class="impact-panel">
                        <h4>{"Our Impact Areas"}</h4>
                        <div class="impact-grid">
                            { for IMPACT_AREAS.iter().map(|(icon, title, text)| html! {
                                <div class="impact-card">
                                    <div class="impact-icon">{*icon}</div>
                                    <h5>{*title}</h5>
                                    <p>{*text}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <h3 class="values-title">{"Our Core Values"}</h3>
                <div class="card-grid four">
                    { for VALUES.iter().map(|(icon, title, text)| html! {
                        <div class="value-card">
                            <div class="value-icon">{*icon}</div>
                            <h4>{*title}</h4>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>

                <div class="about-cta">
                    <h3>{"Ready to Transform Transportation Together?"}</h3>
                    <p>{"Join us in shaping the future of sustainable mobility across Africa and beyond."}</p>
                    <button class="btn light" onclick={contact}>{"Contact Us Now ›"}</button>
                </div>
            </div>
            <style>
                {r#"
                .about { padding: 5rem 0; background: linear-gradient(135deg, #f9fafb, #eff6ff); }
                .about-story {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 4rem;
                    margin-bottom: 5rem;
                }
                .about-story h3 { font-size: 1.875rem; color: #111827; }
                .about-story p { color: #4b5563; font-size: 1.1rem; line-height: 1.7; }
                .impact-panel {
                    background: linear-gradient(135deg, #dcfce7, #dbeafe);
                    border-radius: 1.5rem;
                    padding: 2rem;
                }
                .impact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .impact-card { background: rgba(255, 255, 255, 0.8); border-radius: 0.75rem; padding: 1rem; text-align: center; }
                .impact-icon { font-size: 2rem; }
                .values-title { text-align: center; font-size: 1.875rem; margin-bottom: 3rem; }
                .value-card {
                    background: white;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                    text-align: center;
                }
                .value-icon { font-size: 2rem; margin-bottom: 1rem; }
                .value-card p { font-size: 0.875rem; color: #4b5563; line-height: 1.6; }
                .about-cta {
                    margin-top: 5rem;
                    text-align: center;
                    background: linear-gradient(90deg, #16a34a, #2563eb);
                    border-radius: 1.5rem;
                    padding: 3rem;
                    color: white;
                }
                "#}
            </style>
        </section>
    }
}
