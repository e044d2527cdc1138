use yew::prelude::*;

use crate::config::COMPANY_NAME;
use crate::utils::scroll_to_section;

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("⚡", "Smart Energy", "AI-driven energy management"),
    ("🌿", "Green Future", "100% sustainable transport"),
    ("💻", "Software as a service (SAAS)", "Transformative digital solution"),
    ("🧠", "Renewable Energy Consulting Services", "Transition into green energy solutions tailored for impact."),
];

#[function_component]
pub fn Hero() -> Html {
    let get_started = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let learn_more = Callback::from(|_: MouseEvent| scroll_to_section("about"));

    html! {
        <section id="home" class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <h1>
                        {"Driving the Future of "}
                        <span class="accent">{"Clean Transport"}</span>
                    </h1>
                    <p>
                        {format!("{} is revolutionizing Africa's movement through sustainable mobility solutions, renewable energy innovation, and transformative digital technologies.", COMPANY_NAME)}
                    </p>
                    <div class="hero-actions">
                        <button class="btn primary" onclick={get_started}>{"Get Started →"}</button>
                        <button class="btn outline" onclick={learn_more}>{"Learn More"}</button>
                    </div>
                </div>
                <div class="hero-panel">
                    <div class="hero-cards">
                        { for HIGHLIGHTS.iter().map(|(icon, title, text)| html! {
                            <div class="hero-card">
                                <div class="hero-card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                    <div class="hero-banner">
                        <h3>{"Africa's Future"}</h3>
                        <p>{"Leading the continent's clean mobility revolution"}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #f0fdf4, #eff6ff);
                    padding: 5rem 1.5rem 0;
                }
                .hero-grid {
                    max-width: 80rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy h1 { font-size: 3.5rem; color: #111827; margin-bottom: 1.5rem; }
                .hero-copy .accent { color: #16a34a; }
                .hero-copy p { font-size: 1.25rem; color: #4b5563; line-height: 1.7; margin-bottom: 2rem; }
                .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
                .hero-panel {
                    background: linear-gradient(135deg, #dcfce7, #dbeafe);
                    border-radius: 1.5rem;
                    padding: 2rem;
                }
                .hero-cards { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .hero-card {
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                    transition: transform 0.2s;
                }
                .hero-card:hover { transform: scale(1.05); }
                .hero-card-icon { font-size: 2.5rem; margin-bottom: 0.75rem; }
                .hero-card h3 { font-size: 1rem; color: #111827; margin-bottom: 0.5rem; }
                .hero-card p { font-size: 0.875rem; color: #4b5563; }
                .hero-banner {
                    margin-top: 2rem;
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 1rem;
                    padding: 0.5rem;
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}
