use serde::Serialize;

use crate::catalog::model::Message;

/// Messages exchanged between the viewer and one other participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation<'a> {
    /// The other participant's user id, or `all` for broadcasts.
    pub participant_id: &'a str,
    pub messages: Vec<&'a Message>,
    /// Unread messages addressed to the viewer.
    pub unread: usize,
}

impl<'a> Conversation<'a> {
    #[must_use]
    pub fn last_message(&self) -> Option<&'a Message> {
        self.messages.last().copied()
    }
}

/// ## Summary
/// Groups `messages` by the participant other than `viewer_id`.
///
/// Conversations appear in the order their first message appears, and each
/// keeps its messages in source order. Every message lands in exactly one group.
#[must_use]
pub fn conversations<'a>(messages: &'a [Message], viewer_id: &str) -> Vec<Conversation<'a>> {
    let mut grouped: Vec<Conversation<'a>> = Vec::new();

    for message in messages {
        let other = if message.sender_id == viewer_id {
            message.receiver_id.as_str()
        } else {
            message.sender_id.as_str()
        };
        let unread = usize::from(!message.read && message.receiver_id == viewer_id);

        match grouped.iter_mut().find(|c| c.participant_id == other) {
            Some(conversation) => {
                conversation.messages.push(message);
                conversation.unread += unread;
            }
            None => grouped.push(Conversation {
                participant_id: other,
                messages: vec![message],
                unread,
            }),
        }
    }

    grouped
}
