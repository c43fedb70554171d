use std::rc::Rc;

use yew::Reducible;

use crate::chat::client::ChatMessage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    pub open: bool,
}

pub enum TranscriptAction {
    Toggle,
    Close,
    /// Visitor sent a message; a reply is now awaited.
    Sent(ChatMessage),
    Replied(ChatMessage),
    Greet(ChatMessage),
}

impl Transcript {
    /// Blank input is ignored and only one request may be in flight.
    pub fn can_send(&self, input: &str) -> bool {
        !self.pending && !input.trim().is_empty()
    }
}

impl Reducible for Transcript {
    type Action = TranscriptAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TranscriptAction::Toggle => next.open = !next.open,
            TranscriptAction::Close => next.open = false,
            TranscriptAction::Sent(message) => {
                next.messages.push(message);
                next.pending = true;
            }
            TranscriptAction::Replied(message) => {
                next.messages.push(message);
                next.pending = false;
            }
            TranscriptAction::Greet(message) => {
                if next.messages.is_empty() {
                    next.messages.push(message);
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::client::Sender;

    #[test]
    fn send_then_reply_clears_pending() {
        let t = Rc::new(Transcript::default());
        let t = t.reduce(TranscriptAction::Sent(ChatMessage::user("Preis Bremen–Ulm?")));
        assert!(t.pending);
        let t = t.reduce(TranscriptAction::Replied(ChatMessage::bot("Gern, ab 490 €.")));
        assert!(!t.pending);
        let senders: Vec<_> = t.messages.iter().map(|m| m.from).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot]);
    }

    #[test]
    fn greeting_only_on_empty_transcript() {
        let t = Rc::new(Transcript::default());
        let t = t.reduce(TranscriptAction::Greet(ChatMessage::bot("Moin!")));
        let t = t.reduce(TranscriptAction::Greet(ChatMessage::bot("Moin!")));
        assert_eq!(t.messages.len(), 1);
    }

    #[test]
    fn sending_needs_text_and_an_idle_transcript() {
        let t = Rc::new(Transcript::default());
        assert!(t.can_send("Hallo"));
        assert!(!t.can_send(""));
        assert!(!t.can_send("  \n\t "));
        let t = t.reduce(TranscriptAction::Sent(ChatMessage::user("Hallo")));
        assert!(!t.can_send("Noch eine Frage"));
        let t = t.reduce(TranscriptAction::Replied(ChatMessage::bot("Gern.")));
        assert!(t.can_send("Noch eine Frage"));
    }

    #[test]
    fn toggle_and_close() {
        let t = Rc::new(Transcript::default()).reduce(TranscriptAction::Toggle);
        assert!(t.open);
        let t = t.reduce(TranscriptAction::Close);
        assert!(!t.open);
    }
}
