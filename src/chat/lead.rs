use serde::Serialize;

use crate::utils::is_valid_email;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_MESSAGE_LENGTH: usize = 10;

pub const START_PROMPT: &str = "I'd be happy to help you connect with our team! Let me collect some details to send your message.\n\nWhat's your name?";
pub const CANCELLED_REPLY: &str = "No problem! Your message was not sent. Is there anything else I can help you with regarding our services?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquirySource {
    ChatAssistant,
    ContactForm,
}

impl InquirySource {
    pub fn subject(self) -> &'static str {
        match self {
            InquirySource::ChatAssistant => "New Inquiry from AI Chat Assistant",
            InquirySource::ContactForm => "New Inquiry from Website Contact Form",
        }
    }

    fn signature(self) -> &'static str {
        match self {
            InquirySource::ChatAssistant => "--- Sent via AI Chat Assistant ---",
            InquirySource::ContactForm => "--- Sent via Website Contact Form ---",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    pub source: InquirySource,
}

/// Body accepted by the form relay.
#[derive(Serialize, Debug, PartialEq)]
pub struct RelayPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl Inquiry {
    pub fn payload(&self) -> RelayPayload {
        RelayPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: format!("{}\n\n{}", self.message, self.source.signature()),
            subject: self.source.subject().to_string(),
        }
    }
}

pub fn check_name(name: &str) -> Result<(), &'static str> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err("Please provide a valid name (at least 2 characters).");
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), &'static str> {
    if !is_valid_email(email.trim()) {
        return Err("Please provide a valid email address.");
    }
    Ok(())
}

pub fn check_message(message: &str) -> Result<(), &'static str> {
    if message.trim().chars().count() < MIN_MESSAGE_LENGTH {
        return Err("Please provide a more detailed message (at least 10 characters).");
    }
    Ok(())
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer.starts_with("yes")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadStep {
    Name,
    Email,
    Message,
    Confirm,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LeadReply {
    /// Stay in the flow and show this text.
    Prompt(String),
    /// Flow finished, the inquiry should be relayed.
    Send(Inquiry),
    /// Flow finished without sending.
    Cancelled,
}

/// Collects name, email and message one answer at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadCapture {
    step: LeadStep,
    name: String,
    email: String,
    message: String,
}

impl Default for LeadCapture {
    fn default() -> Self {
        Self {
            step: LeadStep::Name,
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }
}

impl LeadCapture {
    pub fn step(&self) -> LeadStep {
        self.step
    }

    pub fn handle(&mut self, input: &str) -> LeadReply {
        let input = input.trim();
        match self.step {
            LeadStep::Name => match check_name(input) {
                Err(reason) => LeadReply::Prompt(reason.to_string()),
                Ok(()) => {
                    self.name = input.to_string();
                    self.step = LeadStep::Email;
                    LeadReply::Prompt("Thank you! What's your email address?".to_string())
                }
            },
            LeadStep::Email => match check_email(input) {
                Err(reason) => LeadReply::Prompt(reason.to_string()),
                Ok(()) => {
                    self.email = input.to_string();
                    self.step = LeadStep::Message;
                    LeadReply::Prompt(
                        "Perfect! What message would you like to send to our team?".to_string(),
                    )
                }
            },
            LeadStep::Message => match check_message(input) {
                Err(reason) => LeadReply::Prompt(reason.to_string()),
                Ok(()) => {
                    self.message = input.to_string();
                    self.step = LeadStep::Confirm;
                    LeadReply::Prompt(format!(
                        "Great! Here's your message summary:\n\n📝 Name: {}\n📧 Email: {}\n💬 Message: {}\n\nWould you like me to send this message to our team? Type 'yes' to confirm or 'no' to cancel.",
                        self.name, self.email, self.message
                    ))
                }
            },
            LeadStep::Confirm => {
                if is_affirmative(input) {
                    LeadReply::Send(Inquiry {
                        name: self.name.clone(),
                        email: self.email.clone(),
                        message: self.message.clone(),
                        source: InquirySource::ChatAssistant,
                    })
                } else {
                    LeadReply::Cancelled
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadCapture {
        let mut lead = LeadCapture::default();
        lead.handle("Amaka");
        lead.handle("amaka@example.com");
        lead.handle("I would like a quote for fleet tracking.");
        lead
    }

    #[test]
    fn walks_through_all_steps() {
        let mut lead = LeadCapture::default();
        assert_eq!(lead.step(), LeadStep::Name);
        assert!(matches!(lead.handle("  Amaka "), LeadReply::Prompt(_)));
        assert_eq!(lead.step(), LeadStep::Email);
        lead.handle("amaka@example.com");
        assert_eq!(lead.step(), LeadStep::Message);
        match lead.handle("I would like a quote for fleet tracking.") {
            LeadReply::Prompt(summary) => {
                assert!(summary.contains("Amaka"));
                assert!(summary.contains("amaka@example.com"));
                assert!(summary.contains("fleet tracking"));
            }
            other => panic!("unexpected reply {:?}", other),
        }
        assert_eq!(lead.step(), LeadStep::Confirm);
    }

    #[test]
    fn invalid_answers_do_not_advance() {
        let mut lead = LeadCapture::default();
        assert_eq!(
            lead.handle("A"),
            LeadReply::Prompt("Please provide a valid name (at least 2 characters).".into())
        );
        assert_eq!(lead.step(), LeadStep::Name);

        lead.handle("Amaka");
        lead.handle("not-an-email");
        assert_eq!(lead.step(), LeadStep::Email);

        lead.handle("amaka@example.com");
        lead.handle("too short");
        assert_eq!(lead.step(), LeadStep::Message);
    }

    #[test]
    fn yes_sends_the_inquiry() {
        let mut lead = filled();
        match lead.handle("Yes please") {
            LeadReply::Send(inquiry) => {
                assert_eq!(inquiry.name, "Amaka");
                assert_eq!(inquiry.email, "amaka@example.com");
                assert_eq!(inquiry.source, InquirySource::ChatAssistant);
            }
            other => panic!("unexpected reply {:?}", other),
        }
        assert!(matches!(filled().handle("Y"), LeadReply::Send(_)));
    }

    #[test]
    fn anything_else_cancels() {
        assert_eq!(filled().handle("no"), LeadReply::Cancelled);
        assert_eq!(filled().handle("not today, sorry"), LeadReply::Cancelled);
        assert_eq!(filled().handle("maybe"), LeadReply::Cancelled);
    }

    #[test]
    fn payload_carries_subject_and_signature() {
        let inquiry = Inquiry {
            name: "Tunde".into(),
            email: "tunde@example.com".into(),
            message: "Please call me back".into(),
            source: InquirySource::ChatAssistant,
        };
        let body = serde_json::to_value(inquiry.payload()).unwrap();
        assert_eq!(body["_subject"], "New Inquiry from AI Chat Assistant");
        assert_eq!(
            body["message"],
            "Please call me back\n\n--- Sent via AI Chat Assistant ---"
        );
        assert_eq!(body["name"], "Tunde");
    }
}
