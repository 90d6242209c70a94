//! Message polls.

use crate::channel::message::ReactionEmoji;
use crate::util::Timestamp;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A poll attached to a message.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Poll {
    pub question: PollMedia,
    #[serde(default)]
    pub answers: Vec<PollAnswer>,
    /// When voting closes; `None` on creation payloads.
    pub expiry: Option<Timestamp>,
    #[serde(default)]
    pub allow_multiselect: bool,
    pub layout_type: PollLayoutType,
    /// Vote tallies; may trail the true counts while the poll is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<PollResults>,
}

/// Text with an optional emoji, used for questions and answers.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PollMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ReactionEmoji>,
}

/// One selectable answer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PollAnswer {
    pub answer_id: u32,
    pub poll_media: PollMedia,
}

/// Layout of a poll.
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum PollLayoutType {
    #[default]
    Default = 1,
}

/// Tallied votes of a poll.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PollResults {
    pub is_finalized: bool,
    #[serde(default)]
    pub answer_counts: Vec<PollAnswerCount>,
}

/// Vote count for one answer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PollAnswerCount {
    pub id: u32,
    pub count: u64,
    /// Whether the current user voted for this answer.
    pub me_voted: bool,
}

#[cfg(test)]
mod tests {
    use super::Poll;
    use serde_json::json;

    #[test]
    fn poll_with_results_decodes() {
        let poll: Poll = serde_json::from_value(json!({
            "question": {"text": "lunch?"},
            "answers": [
                {"answer_id": 1, "poll_media": {"text": "pizza"}},
                {"answer_id": 2, "poll_media": {"text": "sushi", "emoji": {"name": "🍣"}}},
            ],
            "expiry": "2021-08-10T11:16:37+00:00",
            "allow_multiselect": false,
            "layout_type": 1,
            "results": {
                "is_finalized": true,
                "answer_counts": [
                    {"id": 1, "count": 3, "me_voted": false},
                ],
            },
        }))
        .unwrap();

        assert_eq!(poll.answers.len(), 2);
        assert_eq!(
            poll.answers[1].poll_media.emoji.as_ref().unwrap().name.as_deref(),
            Some("🍣")
        );
        let results = poll.results.unwrap();
        assert!(results.is_finalized);
        assert_eq!(results.answer_counts[0].count, 3);
    }
}
