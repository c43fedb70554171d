use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chat::client::{self, ChatMessage, ChatRequest, Sender, GREETING};
use crate::chat::transcript::{Transcript, TranscriptAction};
use crate::i18n::t;
use crate::prefs::context::{use_preferences, PreferencesAction};
use crate::prefs::cookies::{CookieCategory, CookiePreferences};
use crate::prefs::storage::BrowserStorage;

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let prefs = use_preferences();
    let lang = prefs.as_ref().map(|p| p.language).unwrap_or_default();
    let cookies = prefs.as_ref().and_then(|p| p.cookies);
    let chat_allowed = cookies.map(|c| c.is_enabled(CookieCategory::Functional)).unwrap_or(false);

    let transcript = use_reducer(Transcript::default);
    let input = use_state(String::new);
    let messages_ref = use_node_ref();

    {
        let greet_deps = (transcript.open, lang);
        let transcript = transcript.clone();
        use_effect_with_deps(
            move |(open, lang)| {
                if *open {
                    transcript.dispatch(TranscriptAction::Greet(ChatMessage::bot(GREETING.get(*lang))));
                }
                || ()
            },
            greet_deps,
        );
    }

    // keep the newest message in view
    {
        let messages_ref = messages_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(list) = messages_ref.cast::<web_sys::Element>() {
                    list.set_scroll_top(list.scroll_height());
                }
                || ()
            },
            (transcript.messages.len(), transcript.pending),
        );
    }

    let toggle = {
        let transcript = transcript.clone();
        Callback::from(move |_: MouseEvent| transcript.dispatch(TranscriptAction::Toggle))
    };
    let close = {
        let transcript = transcript.clone();
        Callback::from(move |_: MouseEvent| transcript.dispatch(TranscriptAction::Close))
    };

    let send = {
        let transcript = transcript.clone();
        let input = input.clone();
        Callback::from(move |_: ()| {
            if !transcript.can_send(&input) {
                return;
            }
            let text = input.trim().to_string();
            input.set(String::new());
            transcript.dispatch(TranscriptAction::Sent(ChatMessage::user(text.clone())));

            let request = ChatRequest::new(text, client::session_id(&BrowserStorage));
            let transcript = transcript.clone();
            info!("Sending chat message");
            spawn_local(async move {
                let reply = client::reply_or_apology(request, lang).await;
                transcript.dispatch(TranscriptAction::Replied(ChatMessage::bot(reply)));
            });
        })
    };

    let on_submit = {
        let send = send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit(());
        })
    };
    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let enable_chat = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(prefs) = &prefs {
                let mut choice = prefs.cookies.unwrap_or_else(CookiePreferences::necessary_only);
                choice.set(CookieCategory::Functional, true);
                prefs.dispatch(PreferencesAction::SaveCookies(choice));
            }
        })
    };

    html! {
        <div class={classes!("chat-widget", transcript.open.then_some("open"))}>
            <style>{CHAT_STYLE}</style>
            if transcript.open {
                <div class="chat-panel" role="dialog" aria-label="Chat">
                    <div class="chat-header">
                        <div>
                            <strong>{ t("Brandt Logistik Chat", "Brandt Logistik chat").get(lang) }</strong>
                            <span class="chat-status">{ t("Antwort in Sekunden", "Replies in seconds").get(lang) }</span>
                        </div>
                        <button class="chat-close" aria-label="Close" onclick={close}>{"✕"}</button>
                    </div>
                    if chat_allowed {
                        <div class="chat-messages" ref={messages_ref}>
                            { for transcript.messages.iter().map(|message| {
                                let class = match message.from {
                                    Sender::User => "user",
                                    Sender::Bot => "bot",
                                };
                                html! {
                                    <div class={classes!("chat-message", class)}>
                                        <div class="message-bubble">{ &message.text }</div>
                                        <time class="message-time">{ message.sent_at.format("%H:%M").to_string() }</time>
                                    </div>
                                }
                            }) }
                            if transcript.pending {
                                <div class="chat-message bot">
                                    <div class="message-bubble typing">
                                        <div class="typing-indicator">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </div>
                                    </div>
                                </div>
                            }
                        </div>
                        <form class="chat-input" onsubmit={on_submit}>
                            <input
                                type="text"
                                value={(*input).clone()}
                                oninput={on_input}
                                placeholder={t("Ihre Nachricht…", "Your message…").get(lang)}
                                aria-label={t("Nachricht", "Message").get(lang)}
                            />
                            <button type="submit" disabled={!transcript.can_send(&input)}>
                                { t("Senden", "Send").get(lang) }
                            </button>
                        </form>
                    } else {
                        <div class="chat-consent">
                            <p>{ t(
                                "Der Chat überträgt Ihre Nachrichten an einen externen Dienst. Bitte erlauben Sie dafür funktionale Cookies.",
                                "The chat sends your messages to an external service. Please allow functional cookies to use it.",
                            ).get(lang) }</p>
                            <button class="btn btn-primary" onclick={enable_chat}>
                                { t("Chat aktivieren", "Enable chat").get(lang) }
                            </button>
                        </div>
                    }
                </div>
            }
            <button
                class="chat-toggle"
                aria-label={t("Chat öffnen", "Open chat").get(lang)}
                onclick={toggle}
            >
                { if transcript.open { "✕" } else { "💬" } }
            </button>
        </div>
    }
}

const CHAT_STYLE: &str = r#"
.chat-widget {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    z-index: 60;
    display: flex;
    flex-direction: column;
    align-items: flex-end;
    gap: 0.75rem;
}
.chat-toggle {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    border: none;
    background: #f28c28;
    color: #0c1b2e;
    font-size: 1.5rem;
    cursor: pointer;
    box-shadow: 0 6px 20px rgba(0, 0, 0, 0.25);
}
.chat-panel {
    width: min(360px, calc(100vw - 3rem));
    height: 480px;
    background: #fff;
    border-radius: 12px;
    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.25);
    display: flex;
    flex-direction: column;
    overflow: hidden;
}
.chat-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem;
    background: #0c1b2e;
    color: #fff;
}
.chat-status {
    display: block;
    font-size: 0.75rem;
    color: rgba(255, 255, 255, 0.7);
}
.chat-close {
    background: none;
    border: none;
    color: #fff;
    cursor: pointer;
}
.chat-messages {
    flex: 1;
    overflow-y: auto;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    background: #f5f7fa;
}
.chat-message {
    display: flex;
    flex-direction: column;
    max-width: 80%;
}
.chat-message.user {
    align-self: flex-end;
    align-items: flex-end;
}
.chat-message.bot {
    align-self: flex-start;
}
.message-bubble {
    padding: 0.6rem 0.9rem;
    border-radius: 12px;
    white-space: pre-wrap;
    line-height: 1.4;
}
.chat-message.user .message-bubble {
    background: #0c1b2e;
    color: #fff;
}
.chat-message.bot .message-bubble {
    background: #fff;
    color: #1f2933;
    border: 1px solid #e4e7eb;
}
.message-time {
    font-size: 0.7rem;
    color: #7b8794;
    margin-top: 0.2rem;
}
.typing-indicator {
    display: flex;
    gap: 4px;
}
.typing-indicator span {
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: #9aa5b1;
    animation: typing 1.2s infinite ease-in-out;
}
.typing-indicator span:nth-child(2) { animation-delay: 0.2s; }
.typing-indicator span:nth-child(3) { animation-delay: 0.4s; }
@keyframes typing {
    0%, 80%, 100% { opacity: 0.3; }
    40% { opacity: 1; }
}
.chat-input {
    display: flex;
    border-top: 1px solid #e4e7eb;
}
.chat-input input {
    flex: 1;
    border: none;
    padding: 0.9rem;
    font-size: 0.95rem;
}
.chat-input button {
    border: none;
    background: #f28c28;
    color: #0c1b2e;
    font-weight: 600;
    padding: 0 1.1rem;
    cursor: pointer;
}
.chat-input button:disabled {
    opacity: 0.5;
    cursor: default;
}
.chat-consent {
    flex: 1;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    justify-content: center;
    gap: 1rem;
    color: #3e4c59;
}
"#;
