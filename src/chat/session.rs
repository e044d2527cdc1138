use std::collections::VecDeque;

use thiserror::Error;

use crate::chat::lead::{Inquiry, LeadCapture, LeadReply, CANCELLED_REPLY, START_PROMPT};
use crate::chat::replies::{is_contact_request, rule_based_reply, GREETING};

pub const MAX_MESSAGE_LENGTH: usize = 1000;
pub const RATE_LIMIT_MS: f64 = 1000.0;
pub const CONTEXT_WINDOW: usize = 9;

pub const SENT_REPLY: &str = "Your message has been sent successfully! Our team will get back to you within 24 hours.\n\nIs there anything else I can help you with?";
pub const NOT_SENT_REPLY: &str = "There was an issue sending your message. Please try again or contact us directly at autosaasinfo@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a message")]
    Empty,
    #[error("Message too long. Maximum 1000 characters allowed.")]
    TooLong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub author: Author,
    pub is_error: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContextEntry {
    pub role: &'static str,
    pub content: String,
}

/// What the widget has to do after a user message.
#[derive(Clone, Debug, PartialEq)]
pub enum BotAction {
    Reply(String),
    Relay(Inquiry),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    context: VecDeque<ContextEntry>,
    lead: Option<LeadCapture>,
    last_sent_at: Option<f64>,
    next_id: u32,
}

impl Default for ChatSession {
    fn default() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            context: VecDeque::with_capacity(CONTEXT_WINDOW),
            lead: None,
            last_sent_at: None,
            next_id: 0,
        };
        session.push(GREETING.to_string(), Author::Bot, false);
        session
    }
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn context(&self) -> impl Iterator<Item = &ContextEntry> {
        self.context.iter()
    }

    pub fn is_collecting_details(&self) -> bool {
        self.lead.is_some()
    }

    pub fn validate_input(input: &str) -> Result<(), InputError> {
        if input.trim().is_empty() {
            return Err(InputError::Empty);
        }
        if input.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(InputError::TooLong);
        }
        Ok(())
    }

    /// Accepts a message sent at `now_ms` unless the previous accepted one is
    /// less than `RATE_LIMIT_MS` old.
    pub fn check_rate_limit(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_sent_at {
            if now_ms - last < RATE_LIMIT_MS {
                return false;
            }
        }
        self.last_sent_at = Some(now_ms);
        true
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(text.into(), Author::User, false);
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(text.into(), Author::Bot, false);
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(text.into(), Author::Bot, true);
    }

    fn push(&mut self, text: String, author: Author, is_error: bool) {
        if !is_error {
            if self.context.len() == CONTEXT_WINDOW {
                self.context.pop_front();
            }
            self.context.push_back(ContextEntry {
                role: match author {
                    Author::Bot => "assistant",
                    Author::User => "user",
                },
                content: text.clone(),
            });
        }
        self.messages.push(ChatMessage { id: self.next_id, text, author, is_error });
        self.next_id += 1;
    }

    /// Decides the bot's answer. `seed` picks among the generic replies.
    pub fn respond(&mut self, input: &str, seed: usize) -> BotAction {
        if let Some(mut lead) = self.lead.take() {
            return match lead.handle(input) {
                LeadReply::Prompt(text) => {
                    self.lead = Some(lead);
                    BotAction::Reply(text)
                }
                LeadReply::Send(inquiry) => BotAction::Relay(inquiry),
                LeadReply::Cancelled => BotAction::Reply(CANCELLED_REPLY.to_string()),
            };
        }

        if is_contact_request(input) {
            self.lead = Some(LeadCapture::default());
            return BotAction::Reply(START_PROMPT.to_string());
        }

        BotAction::Reply(rule_based_reply(input, seed).to_string())
    }

    pub fn relay_reply(sent: bool) -> &'static str {
        if sent {
            SENT_REPLY
        } else {
            NOT_SENT_REPLY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::lead::LeadStep;

    #[test]
    fn starts_with_greeting() {
        let session = ChatSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].author, Author::Bot);
        assert_eq!(session.messages()[0].text, GREETING);
    }

    #[test]
    fn rejects_blank_and_oversized_input() {
        assert_eq!(ChatSession::validate_input("   "), Err(InputError::Empty));
        let long = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert_eq!(ChatSession::validate_input(&long), Err(InputError::TooLong));
        assert!(ChatSession::validate_input(&"a".repeat(MAX_MESSAGE_LENGTH)).is_ok());
        assert_eq!(
            InputError::TooLong.to_string(),
            "Message too long. Maximum 1000 characters allowed."
        );
    }

    #[test]
    fn rate_limit_refuses_quick_follow_ups() {
        let mut session = ChatSession::default();
        assert!(session.check_rate_limit(10_000.0));
        assert!(!session.check_rate_limit(10_500.0));
        // the refused attempt does not reset the window
        assert!(session.check_rate_limit(11_000.0));
    }

    #[test]
    fn context_keeps_most_recent_entries() {
        let mut session = ChatSession::default();
        for i in 0..20 {
            session.push_user(format!("message {}", i));
        }
        session.push_error("boom");
        let context: Vec<_> = session.context().collect();
        assert_eq!(context.len(), CONTEXT_WINDOW);
        assert_eq!(context.last().unwrap().content, "message 19");
        assert_eq!(context.first().unwrap().content, "message 11");
        assert_eq!(session.messages().len(), 22);
    }

    #[test]
    fn contact_request_starts_lead_capture() {
        let mut session = ChatSession::default();
        assert_eq!(
            session.respond("I want to talk to someone", 0),
            BotAction::Reply(START_PROMPT.to_string())
        );
        assert!(session.is_collecting_details());

        // while collecting, answers feed the lead flow instead of the FAQ table
        let reply = session.respond("Chinedu", 0);
        assert_eq!(reply, BotAction::Reply("Thank you! What's your email address?".into()));
        assert_eq!(session.lead.as_ref().map(|l| l.step()), Some(LeadStep::Email));
    }

    #[test]
    fn confirmed_lead_is_relayed_and_collection_ends() {
        let mut session = ChatSession::default();
        session.respond("please contact me", 0);
        session.respond("Chinedu", 0);
        session.respond("chinedu@example.com", 0);
        session.respond("Interested in your fleet management product", 0);
        match session.respond("yes", 0) {
            BotAction::Relay(inquiry) => assert_eq!(inquiry.email, "chinedu@example.com"),
            other => panic!("unexpected action {:?}", other),
        }
        assert!(!session.is_collecting_details());
    }

    #[test]
    fn declined_lead_is_cancelled() {
        let mut session = ChatSession::default();
        session.respond("send a message", 0);
        session.respond("Chinedu", 0);
        session.respond("chinedu@example.com", 0);
        session.respond("Interested in your fleet management product", 0);
        assert_eq!(session.respond("no", 0), BotAction::Reply(CANCELLED_REPLY.to_string()));
        assert!(!session.is_collecting_details());
    }

    #[test]
    fn other_messages_get_rule_based_replies() {
        let mut session = ChatSession::default();
        match session.respond("What are your prices?", 0) {
            BotAction::Reply(text) => assert!(text.starts_with("Our pricing varies")),
            other => panic!("unexpected action {:?}", other),
        }
        assert!(!session.is_collecting_details());
    }

    #[test]
    fn relay_outcome_messages() {
        assert_eq!(ChatSession::relay_reply(true), SENT_REPLY);
        assert_eq!(ChatSession::relay_reply(false), NOT_SENT_REPLY);
    }
}
