use yew::prelude::*;

use crate::components::modal::Modal;
use crate::utils::scroll_to_section;

#[derive(Debug, PartialEq)]
pub struct SaasSolution {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub overview: &'static str,
    pub benefits: &'static [&'static str],
    pub solutions: &'static [SaasSolution],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌿",
        title: "Green Energy Research",
        summary: "Our pioneering research aims to redefine energy efficiency and transform transport in Africa.",
        features: &["Foundational R&D", "Core Research", "Academic Partnerships", "Innovative Methods"],
        overview: "At AUTOSAAS, our green energy research stands at the heart of our mission to become Africa's trailblazer in clean, sustainable transportation. Our pioneering work delves into the dynamic relationship between pressure, speed, and flow rate within energy systems. By exploring innovative methods to decouple these interdependencies in closed-loop systems, we aim to redefine the limits of energy efficiency and transform the future of transport on the continent and beyond.",
        benefits: &["Position as a leader", "Innovative edge", "Sustainability goals alignment", "Enhanced energy efficiency"],
        solutions: &[],
    },
    Service {
        icon: "⚡",
        title: "Sustainable Green Energy Implementation",
        summary: "Implementing next-gen sustainable energy solutions for real-world transport systems.",
        features: &["Infrastructure Design", "Renewable Energy Integration", "Smart Energy Management", "Community Engagement"],
        overview: "At AUTOSAAS, our journey starts with green energy. We are pushing the envelope on infrastructure design and renewable energy integration, developing prototypes that incorporate our closed-loop energy principles. Through strategic partnerships, we aim to power fleet operations and begin urban corridor projects. From energy audits to AI-based monitoring tools, our commitment is to provide reliable, eco-efficient transport solutions that redefine boundaries.",
        benefits: &["Eco-efficient transport", "Community and policy engagement", "Scalable and impactful solutions", "Innovative design"],
        solutions: &[],
    },
    Service {
        icon: "📱",
        title: "Smart Mobility Solutions",
        summary: "Merging sustainability with innovation to reshape how Africa moves.",
        features: &["AI-Driven Fleet Management", "Eco-Connected Vehicles", "MaaS Platforms", "Smart Infrastructure"],
        overview: "At AUTOSAAS, our Smart Mobility Solutions merge sustainability with innovation to reshape how Africa moves. We harness data, technology, and green infrastructure to create transportation systems that are efficient, intelligent, and user-focused. Key solutions include AI-driven fleet management, eco-connected vehicles, and MaaS platforms that unify public transit, ride-sharing, and more.",
        benefits: &["Efficiency and innovation", "User-focused systems", "Integration ease", "Real-time data insights"],
        solutions: &[],
    },
    Service {
        icon: "🧠",
        title: "Renewable Energy Consulting Services",
        summary: "Empowering Africa to transition into green energy solutions tailored for impact.",
        features: &["Energy Audits", "System Design", "Policy Advisory", "Capacity Building"],
        overview: "At AUTOSAAS, we don't just build sustainable systems, we help others do the same. Our Renewable Energy Consulting Services empower governments, businesses, and innovators across Africa to transition into green energy solutions tailored for impact. We offer energy audits, system design and integration, policy advisory, and capacity building to help Africa leapfrog into a clean energy future.",
        benefits: &["Collaborative design", "Regulatory guidance", "Community engagement", "Cutting-edge innovation"],
        solutions: &[],
    },
    Service {
        icon: "💻",
        title: "Software Development Services (SaaS)",
        summary: "Delivering transformative digital solutions with a human-centric approach.",
        features: &["Agentic AI", "Custom Development", "Cloud Solutions", "Enterprise Platforms"],
        overview: "At AUTOSAAS, we fuse cutting-edge technology with human-centric design to deliver transformative digital solutions. Our services are designed to unlock new levels of efficiency, insight, and innovation for businesses of all sizes. Our Software as a Service offerings include custom software development, agentic AI solutions, and scalable backend systems tailored to meet your needs.",
        benefits: &["Innovative tech solutions", "Tailored experiences", "Operational efficiency", "Future-focused services"],
        solutions: &[
            SaasSolution { name: "E-commerce Platforms", description: "Complete online marketplace solutions for transportation services" },
            SaasSolution { name: "E-learning Systems", description: "Driver training and certification platforms" },
            SaasSolution { name: "ERP Solutions", description: "Enterprise resource planning for transportation companies" },
            SaasSolution { name: "CMS Platforms", description: "Content management systems for transport websites" },
            SaasSolution { name: "Payment Automation", description: "Secure, automated payment processing systems" },
            SaasSolution { name: "Customer Relationship Management", description: "CRM systems optimized for transportation businesses" },
            SaasSolution { name: "Inventory Management", description: "Vehicle and parts inventory tracking systems" },
            SaasSolution { name: "Business Intelligence", description: "Advanced analytics and reporting platforms" },
        ],
    },
];

#[function_component]
pub fn Services() -> Html {
    // Index into SERVICES of the card whose details are open.
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };
    let get_started = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    let detail = (*selected).and_then(|i| SERVICES.get(i));

    html! {
        <section id="services" class="services">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p>
                        {"Comprehensive transportation solutions spanning sustainable mobility, smart infrastructure, AI-powered optimization, and custom software development for the future of African transportation."}
                    </p>
                </div>

                <div class="card-grid three">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        let open = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(i)))
                        };
                        html! {
                            <div class="service-card">
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.summary}</p>
                                <ul class="dot-list">
                                    { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                                </ul>
                                <button class="btn outline full" onclick={open}>{"Learn More"}</button>
                            </div>
                        }
                    }) }
                </div>

                <div class="services-cta">
                    <h3>{"Ready to Transform Your Business?"}</h3>
                    <p>{"Let's discuss how our solutions can drive your organization forward."}</p>
                    <button class="btn primary" onclick={get_started}>{"Get Started Today"}</button>
                </div>
            </div>

            <Modal
                is_open={detail.is_some()}
                title={detail.map(|s| s.title).unwrap_or_default()}
                on_close={close.clone()}
            >
                if let Some(index) = *selected {
                    <ServiceDetail service_index={index} on_close={close} />
                }
            </Modal>
            <style>
                {r#"
                .services { padding: 5rem 0; background: linear-gradient(135deg, #f9fafb, #eff6ff); }
                .service-card {
                    background: white;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .service-card:hover { transform: scale(1.02); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12); }
                .service-icon { font-size: 3rem; margin-bottom: 1.5rem; }
                .service-card h3 { font-size: 1.5rem; color: #111827; margin: 0 0 1rem; }
                .service-card p { color: #4b5563; line-height: 1.6; }
                .service-card .btn { margin-top: auto; }
                .services-cta { text-align: center; margin-top: 4rem; }
                .services-cta h3 { font-size: 1.875rem; }
                .services-cta p { font-size: 1.25rem; color: #4b5563; margin-bottom: 2rem; }
                .service-detail h4 { font-size: 1.125rem; color: #111827; margin: 1.5rem 0 0.75rem; }
                .service-detail p { color: #4b5563; line-height: 1.7; }
                .solution-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1rem; }
                .solution-card { background: #f9fafb; border-radius: 0.5rem; padding: 1rem; }
                .solution-card h5 { margin: 0 0 0.5rem; }
                .solution-card p { margin: 0; font-size: 0.875rem; }
                .detail-actions {
                    display: flex;
                    justify-content: flex-end;
                    gap: 1rem;
                    padding-top: 1.5rem;
                    margin-top: 1.5rem;
                    border-top: 1px solid #e5e7eb;
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceDetailProps {
    service_index: usize,
    on_close: Callback<()>,
}

#[function_component]
fn ServiceDetail(props: &ServiceDetailProps) -> Html {
    let Some(service) = SERVICES.get(props.service_index) else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let get_quote = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            scroll_to_section("contact");
        })
    };

    html! {
        <div class="service-detail">
            <div class="detail-header">
                <span class="service-icon">{service.icon}</span>
                <p>{service.summary}</p>
            </div>

            <h4>{"Detailed Overview"}</h4>
            <p>{service.overview}</p>

            <h4>{"Key Features"}</h4>
            <ul class="dot-list">
                { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
            </ul>

            <h4>{"Benefits & Outcomes"}</h4>
            <ul class="dot-list blue">
                { for service.benefits.iter().map(|b| html! { <li>{*b}</li> }) }
            </ul>

            if !service.solutions.is_empty() {
                <h4>{"SaaS Solutions"}</h4>
                <div class="solution-grid">
                    { for service.solutions.iter().map(|s| html! {
                        <div class="solution-card">
                            <h5>{s.name}</h5>
                            <p>{s.description}</p>
                        </div>
                    }) }
                </div>
            }

            <div class="detail-actions">
                <button class="btn outline" onclick={close}>{"Close"}</button>
                <button class="btn primary" onclick={get_quote}>{"Get Quote"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_software_service_lists_saas_solutions() {
        let with_solutions: Vec<_> = SERVICES
            .iter()
            .filter(|s| !s.solutions.is_empty())
            .map(|s| s.title)
            .collect();
        assert_eq!(with_solutions, vec!["Software Development Services (SaaS)"]);
        assert_eq!(SERVICES[4].solutions.len(), 8);
    }

    #[test]
    fn every_service_has_four_features_and_benefits() {
        for service in SERVICES {
            assert_eq!(service.features.len(), 4, "{}", service.title);
            assert_eq!(service.benefits.len(), 4, "{}", service.title);
        }
    }
}
