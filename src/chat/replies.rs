//! Canned replies for the chat assistant.
//!
//! Each topic owns a keyword list. A message is answered by the first topic
//! whose keywords appear anywhere in the lower-cased text.

pub struct Topic {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

pub const GREETING: &str = "Hello! I'm your AI assistant for Automatons mobility and software services (AUTOSAAS). I can help you with information about our sustainable transportation solutions, green energy research, smart mobility, and software development services. How can I assist you today?";

// FAQ entries come first so that direct questions beat the broader topics.
pub static TOPICS: &[Topic] = &[
    Topic {
        keywords: &["hours", "time", "open", "close", "when", "operating", "business hours"],
        reply: "Our business hours are Monday to Friday, 8:00 AM to 6:00 PM (EAT). We respond to emails within 24 hours and are always available for urgent inquiries.",
    },
    Topic {
        keywords: &["location", "address", "where", "office", "find", "based", "nairobi"],
        reply: "We are located at 1234 Main Street, Nairobi, Kenya. You can visit us during our business hours or contact us online for virtual consultations.",
    },
    Topic {
        keywords: &["contact", "phone", "email", "call", "reach", "talk", "speak"],
        reply: "You can contact us at autosaasinfo@gmail.com or call +2348159450874. Would you like me to help you send a message to our team?",
    },
    Topic {
        keywords: &["services", "what do you", "offer", "provide", "help with", "solutions"],
        reply: "We offer comprehensive services including:\n\n• Green Energy Research & Implementation\n• Smart Mobility Solutions\n• Renewable Energy Consulting\n• Software Development Services (SaaS)\n• Sustainable Transportation Solutions\n\nWhich service interests you most?",
    },
    Topic {
        keywords: &["price", "cost", "pricing", "expensive", "budget", "quote", "rates"],
        reply: "Our pricing varies based on the service and scope of work. We offer competitive rates and flexible packages. Would you like me to connect you with our team for a personalized quote?",
    },
    Topic {
        keywords: &["about", "company", "who are you", "automosaas", "autosaas", "team", "history"],
        reply: "Automatons mobility and software services (AUTOSAAS) is revolutionizing Africa's movement through sustainable mobility solutions, renewable energy innovation, and transformative digital technologies.",
    },
    Topic {
        keywords: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening", "greetings"],
        reply: "Hello! Welcome to Automatons mobility and software services (AUTOSAAS). I'm here to help you learn about our sustainable transportation solutions, green energy research, smart mobility, and software development services. What would you like to know?",
    },
    Topic {
        keywords: &["bye", "goodbye", "thanks", "thank you", "see you", "farewell"],
        reply: "Thank you for your interest in Automatons mobility and software services (AUTOSAAS)! Feel free to reach out anytime at autosaasinfo@gmail.com or call +2348159450874. Have a great day!",
    },
    Topic {
        keywords: &["green energy", "renewable", "solar", "wind", "clean energy", "sustainable energy", "environment"],
        reply: "Our Green Energy Research division is pioneering innovative solutions to transform transportation in Africa. We focus on:\n\n• Renewable energy integration for transportation\n• Smart energy management systems\n• Sustainable infrastructure design\n• Energy efficiency optimization\n• Solar and wind power solutions\n\nWould you like to know more about our specific green energy implementation services?",
    },
    Topic {
        keywords: &["smart mobility", "transport", "fleet", "vehicle", "mobility", "logistics", "traffic", "route"],
        reply: "Our Smart Mobility Solutions combine sustainability with innovation to reshape how Africa moves. We offer:\n\n• AI-driven fleet management systems\n• Eco-connected vehicles\n• Mobility-as-a-Service (MaaS) platforms\n• Intelligent route optimization\n• Real-time tracking and monitoring\n• Traffic management solutions\n\nHow can we help optimize your transportation needs?",
    },
    Topic {
        keywords: &[
            "software", "saas", "software as a service", "development", "platform", "system",
            "application", "e-commerce", "erp", "web app", "mobile app",
        ],
        reply: "We provide comprehensive Software Development Services with a human-centric approach:\n\n• Custom E-commerce platforms\n• E-learning management systems\n• Enterprise Resource Planning (ERP)\n• Web and mobile applications\n• Cloud-based SaaS solutions\n• API development and integration\n\nWhat type of software solution are you looking for?",
    },
    Topic {
        keywords: &["consulting", "consultant", "advice", "audit", "assessment", "strategy", "planning"],
        reply: "Our Renewable Energy Consulting service empowers Africa's transition to green energy. We provide:\n\n• Comprehensive energy audits\n• System design and planning\n• Policy advisory services\n• Capacity building programs\n• Implementation support\n• ROI analysis and projections\n\nWould you like to discuss your specific consulting needs?",
    },
    Topic {
        keywords: &["technology", "innovation", "ai", "artificial intelligence", "digital", "automation", "iot", "data"],
        reply: "Technology and innovation are at the heart of everything we do at Automatons mobility and software services (AUTOSAAS). We leverage cutting-edge technologies including:\n\n• Artificial Intelligence and Machine Learning\n• Internet of Things (IoT) solutions\n• Big Data analytics\n• Blockchain for transparency\n• Cloud computing infrastructure\n\nWhich technology aspect interests you most?",
    },
    Topic {
        keywords: &["africa", "kenya", "nairobi", "local", "regional", "african market"],
        reply: "We're proud to be based in Nairobi, Kenya, and focused on solving Africa's unique transportation and energy challenges. Our solutions are specifically designed for:\n\n• African infrastructure conditions\n• Local regulatory compliance\n• Regional market needs\n• Cultural and economic factors\n• Climate considerations\n\nHow can we help with your African operations?",
    },
    Topic {
        keywords: &["help", "support", "assistance", "problem", "issue", "question", "information"],
        reply: "I'm here to help! I can provide information about:\n\n• Our services and solutions\n• Pricing and quotes\n• Contact information\n• Business hours and location\n• Technical details about our offerings\n• How to get started with our services\n\nWhat specific information would you like to know?",
    },
    Topic {
        keywords: &["partner", "partnership", "collaborate", "work together", "joint venture", "cooperation"],
        reply: "We're always interested in strategic partnerships and collaborations! We work with:\n\n• Technology companies\n• Government agencies\n• NGOs and development organizations\n• Research institutions\n• Other sustainability-focused businesses\n\nWould you like to discuss potential partnership opportunities?",
    },
    Topic {
        keywords: &["investment", "funding", "investor", "capital", "finance", "money"],
        reply: "We're open to discussing investment opportunities and funding partnerships. Our growth areas include:\n\n• Expansion across Africa\n• Technology development\n• Infrastructure projects\n• Research and development\n\nWould you like to connect with our business development team?",
    },
];

pub static DEFAULT_REPLIES: &[&str] = &[
    "I'd be happy to help you with more information about Automatons mobility and software services (AUTOSAAS). Could you please be more specific about what you'd like to know?",
    "That's an interesting question! Could you tell me more about what specific aspect of our services you're interested in?",
    "I want to make sure I give you the most relevant information. Are you asking about our green energy solutions, smart mobility, software development, or consulting services?",
    "Thanks for your question! I can help you with information about our services, pricing, contact details, or any other questions you might have. What would you like to know?",
    "I'm here to assist you with information about Automatons mobility and software services (AUTOSAAS). Feel free to ask about our sustainable transportation solutions, technology services, or how we can help your business!",
];

const CONTACT_KEYWORDS: &[&str] = &[
    "contact", "message", "email", "send", "speak", "talk", "quote", "connect", "reach out",
];

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

/// First topic whose keywords occur in `message`, if any.
pub fn topic_reply(message: &str) -> Option<&'static str> {
    let message = message.to_lowercase();
    TOPICS
        .iter()
        .find(|topic| contains_any(&message, topic.keywords))
        .map(|topic| topic.reply)
}

pub fn default_reply(seed: usize) -> &'static str {
    DEFAULT_REPLIES[seed % DEFAULT_REPLIES.len()]
}

pub fn rule_based_reply(message: &str, seed: usize) -> &'static str {
    topic_reply(message).unwrap_or_else(|| default_reply(seed))
}

pub fn is_contact_request(message: &str) -> bool {
    contains_any(&message.to_lowercase(), CONTACT_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_wins_over_later_topics() {
        // "office" is a location keyword, "nairobi" is also an Africa keyword
        let reply = topic_reply("Where is your office in Nairobi?").unwrap();
        assert!(reply.starts_with("We are located at"));
    }

    #[test]
    fn matching_ignores_case() {
        let reply = topic_reply("Do you use SOLAR panels").unwrap();
        assert!(reply.starts_with("Our Green Energy Research division"));
    }

    #[test]
    fn multi_word_keywords_match() {
        let reply = topic_reply("is a joint venture possible").unwrap();
        assert!(reply.starts_with("We're always interested in strategic partnerships"));
    }

    #[test]
    fn unmatched_message_falls_back_to_default() {
        assert_eq!(topic_reply("zzz"), None);
        assert_eq!(rule_based_reply("zzz", 7), DEFAULT_REPLIES[2]);
        assert_eq!(default_reply(0), DEFAULT_REPLIES[0]);
        assert_eq!(default_reply(DEFAULT_REPLIES.len()), DEFAULT_REPLIES[0]);
    }

    #[test]
    fn contact_requests_are_detected() {
        assert!(is_contact_request("I want to SEND a note"));
        assert!(is_contact_request("can someone reach out to me"));
        assert!(!is_contact_request("what are your prices"));
    }

    #[test]
    fn every_topic_has_keywords_and_reply() {
        for topic in TOPICS {
            assert!(!topic.keywords.is_empty());
            assert!(!topic.reply.is_empty());
        }
    }
}
