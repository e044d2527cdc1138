use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use web_sys::js_sys::{Date, Math};
use web_sys::{Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::api;
use crate::chat::session::{Author, BotAction, ChatMessage, ChatSession, MAX_MESSAGE_LENGTH};
use crate::config::COMPANY_NAME;
use crate::error::ApiError;

pub enum ChatWidgetMsg {
    Toggle,
    Input(String),
    Send,
    Respond(BotAction),
    RelayFinished(Result<(), ApiError>),
    ClearRateLimit,
}

/// Scroll only when the message list changed since the last scroll.
fn should_autoscroll(scrolled_count: Option<usize>, message_count: usize) -> bool {
    scrolled_count != Some(message_count)
}

pub struct ChatWidget {
    open: bool,
    session: ChatSession,
    input: String,
    typing: bool,
    error: Option<String>,
    rate_limited: bool,
    rate_limit_timer: Option<Timeout>,
    focus_input: bool,
    /// Message count at the last auto-scroll. Reset when the window closes.
    scrolled_count: Option<usize>,
    messages_end: NodeRef,
    input_ref: NodeRef,
}

impl ChatWidget {
    /// 500 to 1500 ms, so replies do not land instantly.
    fn typing_delay() -> u32 {
        500 + (Math::random() * 1000.0) as u32
    }

    fn render_message(message: &ChatMessage) -> Html {
        let bubble = match (message.is_error, message.author) {
            (true, _) => "chat-bubble error",
            (false, Author::Bot) => "chat-bubble bot",
            (false, Author::User) => "chat-bubble user",
        };
        let row = match message.author {
            Author::Bot => "chat-row left",
            Author::User => "chat-row right",
        };
        html! {
            <div key={message.id} class={row}>
                <div class={bubble}>
                    <span class="chat-avatar">
                        { if message.author == Author::Bot { "🤖" } else { "👤" } }
                    </span>
                    <div class="chat-text">{ &message.text }</div>
                </div>
            </div>
        }
    }
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            session: ChatSession::default(),
            input: String::new(),
            typing: false,
            error: None,
            rate_limited: false,
            rate_limit_timer: None,
            focus_input: false,
            scrolled_count: None,
            messages_end: NodeRef::default(),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.open = !self.open;
                self.focus_input = self.open;
                self.scrolled_count = None;
                true
            }
            ChatWidgetMsg::Input(value) => {
                self.input = value;
                self.error = None;
                true
            }
            ChatWidgetMsg::Send => {
                if self.typing || self.rate_limited {
                    return false;
                }
                if let Err(e) = ChatSession::validate_input(&self.input) {
                    self.error = Some(e.to_string());
                    return true;
                }
                if !self.session.check_rate_limit(Date::now()) {
                    self.rate_limited = true;
                    let link = ctx.link().clone();
                    self.rate_limit_timer = Some(Timeout::new(1_000, move || {
                        link.send_message(ChatWidgetMsg::ClearRateLimit)
                    }));
                    return true;
                }

                self.error = None;
                let text = std::mem::take(&mut self.input);
                self.session.push_user(text.clone());
                self.typing = true;

                let action = self.session.respond(&text, (Math::random() * 1000.0) as usize);
                let delay = Self::typing_delay();
                ctx.link().send_future(async move {
                    TimeoutFuture::new(delay).await;
                    ChatWidgetMsg::Respond(action)
                });
                true
            }
            ChatWidgetMsg::Respond(BotAction::Reply(text)) => {
                self.typing = false;
                self.session.push_bot(text);
                true
            }
            ChatWidgetMsg::Respond(BotAction::Relay(inquiry)) => {
                ctx.link().send_future(async move {
                    ChatWidgetMsg::RelayFinished(api::relay_inquiry(&inquiry).await)
                });
                false
            }
            ChatWidgetMsg::RelayFinished(result) => {
                self.typing = false;
                match result {
                    Ok(()) => {
                        info!("Chat inquiry sent");
                        self.session.push_bot(ChatSession::relay_reply(true));
                    }
                    Err(e @ ApiError::NotConfigured(_)) => {
                        error!("Form relay error: {}", e);
                        self.session.push_error(ChatSession::relay_reply(false));
                    }
                    Err(e) => {
                        error!("Form relay error: {}", e);
                        self.session.push_bot(ChatSession::relay_reply(false));
                    }
                }
                true
            }
            ChatWidgetMsg::ClearRateLimit => {
                self.rate_limited = false;
                self.rate_limit_timer = None;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !self.open {
            return;
        }
        let count = self.session.messages().len();
        if should_autoscroll(self.scrolled_count, count) {
            if let Some(end) = self.messages_end.cast::<Element>() {
                let mut options = ScrollIntoViewOptions::new();
                options.behavior(ScrollBehavior::Smooth);
                end.scroll_into_view_with_scroll_into_view_options(&options);
            }
            self.scrolled_count = Some(count);
        }
        if self.focus_input {
            if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            self.focus_input = false;
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_: MouseEvent| ChatWidgetMsg::Toggle);
        let oninput = ctx.link().callback(|e: InputEvent| {
            ChatWidgetMsg::Input(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                Some(ChatWidgetMsg::Send)
            } else {
                None
            }
        });
        let onsend = ctx.link().callback(|_: MouseEvent| ChatWidgetMsg::Send);
        let input_locked = self.rate_limited || self.typing;

        html! {
            <div class="chat-widget">
                if self.open {
                    <div class="chat-window">
                        <div class="chat-header">
                            <div>
                                <h3>{"AI Assistant"}</h3>
                                <p>{COMPANY_NAME}</p>
                            </div>
                            <button class="chat-close" title="Close chat" onclick={toggle.clone()}>{"✕"}</button>
                        </div>

                        if let Some(error) = &self.error {
                            <div class="chat-error">{error}</div>
                        }

                        <div class="chat-messages">
                            { for self.session.messages().iter().map(Self::render_message) }
                            if self.typing {
                                <div class="chat-row left">
                                    <div class="chat-bubble bot typing">
                                        <span class="dot"></span>
                                        <span class="dot"></span>
                                        <span class="dot"></span>
                                    </div>
                                </div>
                            }
                            <div ref={self.messages_end.clone()}></div>
                        </div>

                        <div class="chat-input">
                            <div class="chat-input-row">
                                <input
                                    ref={self.input_ref.clone()}
                                    type="text"
                                    value={self.input.clone()}
                                    {oninput}
                                    {onkeypress}
                                    placeholder={if self.rate_limited { "Please wait..." } else { "Type your message..." }}
                                    disabled={input_locked}
                                    maxlength={MAX_MESSAGE_LENGTH.to_string()}
                                />
                                <button
                                    class="chat-send"
                                    title="Send message"
                                    onclick={onsend}
                                    disabled={self.input.trim().is_empty() || input_locked}
                                >
                                    {"➤"}
                                </button>
                            </div>
                            <div class="chat-counter">
                                {format!("{}/{}", self.input.chars().count(), MAX_MESSAGE_LENGTH)}
                            </div>
                        </div>
                    </div>
                } else {
                    <button class="chat-toggle" title="Chat with our AI assistant" onclick={toggle}>{"💬"}</button>
                }
                <style>
                    {r#"
                    .chat-widget {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                    }
                    .chat-toggle {
                        background: #16a34a;
                        color: white;
                        border: none;
                        border-radius: 50%;
                        width: 56px;
                        height: 56px;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                    }
                    .chat-window {
                        width: 20rem;
                        height: 24rem;
                        background: white;
                        border-radius: 0.5rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1rem;
                    }
                    .chat-header {
                        background: #16a34a;
                        color: white;
                        padding: 1rem;
                        border-radius: 0.5rem 0.5rem 0 0;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .chat-header h3 { margin: 0; font-size: 1rem; }
                    .chat-header p { margin: 0; font-size: 0.7rem; opacity: 0.9; }
                    .chat-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                    .chat-error {
                        margin: 0.5rem;
                        padding: 0.5rem 1rem;
                        background: #fee2e2;
                        border: 1px solid #fca5a5;
                        color: #b91c1c;
                        font-size: 0.85rem;
                        border-radius: 0.5rem;
                    }
                    .chat-messages {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1rem;
                    }
                    .chat-row { display: flex; margin-bottom: 1rem; }
                    .chat-row.left { justify-content: flex-start; }
                    .chat-row.right { justify-content: flex-end; }
                    .chat-bubble {
                        max-width: 16rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        display: flex;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .chat-bubble.bot { background: #f3f4f6; color: #1f2937; }
                    .chat-bubble.user { background: #16a34a; color: white; }
                    .chat-bubble.error { background: #fee2e2; color: #991b1b; border: 1px solid #fca5a5; }
                    .chat-text { white-space: pre-line; line-height: 1.5; }
                    .typing .dot {
                        width: 8px;
                        height: 8px;
                        background: #9ca3af;
                        border-radius: 50%;
                        animation: chat-bounce 1s infinite;
                    }
                    .typing .dot:nth-child(2) { animation-delay: 0.1s; }
                    .typing .dot:nth-child(3) { animation-delay: 0.2s; }
                    @keyframes chat-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-4px); }
                    }
                    .chat-input { border-top: 1px solid #e5e7eb; padding: 1rem; }
                    .chat-input-row { display: flex; gap: 0.5rem; }
                    .chat-input input {
                        flex: 1;
                        padding: 0.5rem 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                    }
                    .chat-input input:disabled { opacity: 0.5; cursor: not-allowed; }
                    .chat-send {
                        background: #16a34a;
                        color: white;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.5rem 0.75rem;
                        cursor: pointer;
                    }
                    .chat-send:disabled { opacity: 0.5; cursor: not-allowed; }
                    .chat-counter { font-size: 0.75rem; color: #6b7280; margin-top: 0.25rem; }
                    "#}
                </style>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolls_on_open_and_new_messages_only() {
        assert!(should_autoscroll(None, 1));
        assert!(!should_autoscroll(Some(1), 1));
        assert!(should_autoscroll(Some(1), 2));
    }
}
