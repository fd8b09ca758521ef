use chrono::NaiveDateTime;
use salvo::{Depot, Response, Router, handler, writing::Json};
use serde::Serialize;

use campus_service::portal::messages::conversations;

use super::signed_in_context;
use crate::middleware::page_access::PageAccess;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversationSummary<'a> {
    participant_id: &'a str,
    participant_name: String,
    message_count: usize,
    unread: usize,
    last_subject: Option<&'a str>,
    last_timestamp: Option<NaiveDateTime>,
}

/// ## Summary
/// GET /app/messages/conversations - The signed-in user's messages grouped
/// by the other participant.
#[handler]
async fn list_conversations(depot: &mut Depot, res: &mut Response) {
    let Some((user, catalog)) = signed_in_context(depot, res) else {
        return;
    };

    let summaries: Vec<ConversationSummary<'_>> = conversations(&catalog.messages, &user.id)
        .into_iter()
        .map(|conversation| {
            let last = conversation.last_message();
            ConversationSummary {
                participant_id: conversation.participant_id,
                participant_name: catalog
                    .user(conversation.participant_id)
                    .map_or_else(|| "Everyone".to_string(), |u| u.full_name()),
                message_count: conversation.messages.len(),
                unread: conversation.unread,
                last_subject: last.map(|m| m.subject.as_str()),
                last_timestamp: last.map(|m| m.timestamp),
            }
        })
        .collect();

    tracing::debug!(count = summaries.len(), "Conversations listed");
    res.render(Json(summaries));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("messages/conversations")
        .hoop(PageAccess::page("/messages"))
        .get(list_conversations)
}
