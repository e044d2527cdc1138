use yew::prelude::*;

const REASONS: &[(&str, &str, &str)] = &[
    ("⚡", "Innovative by Design", "We blend creativity with technical depth, building solutions that are both groundbreaking and practical."),
    ("🚀", "Agile Delivery", "Our rapid development cycles and commitment to continuous improvement ensure we deliver value quickly and efficiently."),
    ("☑", "Future-Focused", "We design technologies that not only meet your current needs but also evolve with your vision for the future."),
];

#[function_component]
pub fn WhyChooseUs() -> Html {
    html! {
        <section class="why-us">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Why Choose Us?"}</h2>
                    <p>
                        {"Discover the advantages of partnering with a team that is dedicated to innovation, agility, and your long-term success."}
                    </p>
                </div>
                <div class="card-grid three">
                    { for REASONS.iter().map(|(icon, title, text)| html! {
                        <div class="reason-card">
                            <div class="reason-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .why-us { padding: 5rem 0; background: white; }
                .reason-card {
                    background: linear-gradient(135deg, #f9fafb, #eff6ff);
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                    transition: transform 0.2s;
                }
                .reason-card:hover { transform: scale(1.05); }
                .reason-icon {
                    width: 4rem;
                    height: 4rem;
                    background: white;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.08);
                    margin-bottom: 1.5rem;
                }
                .reason-card h3 { font-size: 1.5rem; color: #111827; }
                .reason-card p { color: #4b5563; line-height: 1.6; }
                "#}
            </style>
        </section>
    }
}
