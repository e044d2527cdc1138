use yew::prelude::*;

const PILLARS: &[(&str, &str)] = &[
    ("Innovation", "Pioneering breakthrough technologies in clean energy transport"),
    ("Integrity", "Building trust through transparent and ethical business practices"),
    ("Sustainability", "Ensuring our solutions benefit both people and planet"),
    ("Community", "Empowering local communities through accessible technology"),
];

const FOCUS: &[(&str, &str)] = &[
    ("🎯", "Bridge Energy & Transport"),
    ("💡", "Smart Solutions"),
    ("❤", "Community Focus"),
    ("🌍", "Sustainable Future"),
];

#[function_component]
pub fn VisionMission() -> Html {
    html! {
        <div class="vision-mission">
            <section id="vision" class="vm-block">
                <div>
                    <h2>{"👁 Our Vision"}</h2>
                    <p class="vm-lead">
                        {"To lead Africa's clean mobility revolution, creating a sustainable transportation ecosystem that serves as a model for the world."}
                    </p>
                    <div class="vm-tiles">
                        <div class="vm-tile blue">
                            <h4>{"Continental Leadership"}</h4>
                            <p>{"Setting the standard for clean transport across Africa"}</p>
                        </div>
                        <div class="vm-tile green">
                            <h4>{"Global Impact"}</h4>
                            <p>{"Inspiring worldwide adoption of sustainable mobility"}</p>
                        </div>
                    </div>
                </div>
                <div class="vm-visual">
                    <div class="vm-orbit"><div class="vm-core">{"👁"}</div></div>
                </div>
            </section>

            <section id="mission" class="vm-block">
                <div class="vm-visual">
                    <div class="vm-focus">
                        { for FOCUS.iter().map(|(icon, title)| html! {
                            <div class="vm-focus-card">
                                <div class="vm-focus-icon">{*icon}</div>
                                <h4>{*title}</h4>
                            </div>
                        }) }
                    </div>
                </div>
                <div>
                    <h2>{"🎯 Our Mission"}</h2>
                    <p class="vm-lead">
                        {"Bridging transportation and energy through sustainable technology and forward-thinking design, making clean mobility accessible to all."}
                    </p>
                    { for PILLARS.iter().map(|(title, text)| html! {
                        <div class="vm-pillar">
                            <span class="vm-dot"></span>
                            <div>
                                <h4>{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .vision-mission { padding: 5rem 0; background: white; }
                .vm-block {
                    max-width: 80rem;
                    margin: 0 auto 5rem;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .vm-block h2 { font-size: 2.25rem; color: #111827; }
                .vm-lead { font-size: 1.25rem; color: #4b5563; line-height: 1.7; margin-bottom: 2rem; }
                .vm-tiles { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1.5rem; }
                .vm-tile { border-radius: 0.75rem; padding: 1.5rem; }
                .vm-tile.blue { background: #eff6ff; }
                .vm-tile.green { background: #f0fdf4; }
                .vm-visual {
                    background: linear-gradient(135deg, #dbeafe, #dcfce7);
                    border-radius: 1.5rem;
                    padding: 2rem;
                    min-height: 16rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .vm-orbit {
                    width: 12rem;
                    height: 12rem;
                    border: 4px solid rgba(37, 99, 235, 0.2);
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: vm-spin 20s linear infinite;
                }
                .vm-core {
                    width: 8rem;
                    height: 8rem;
                    background: #2563eb;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                }
                @keyframes vm-spin { to { transform: rotate(360deg); } }
                .vm-focus { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; width: 100%; }
                .vm-focus-card {
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    text-align: center;
                }
                .vm-focus-icon { font-size: 2.5rem; }
                .vm-pillar { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1.5rem; }
                .vm-pillar h4 { margin: 0 0 0.25rem; }
                .vm-pillar p { margin: 0; color: #4b5563; }
                .vm-dot { width: 0.5rem; height: 0.5rem; background: #16a34a; border-radius: 50%; margin-top: 0.6rem; flex-shrink: 0; }
                "#}
            </style>
        </div>
    }
}
