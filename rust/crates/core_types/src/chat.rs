//! Canned replies for the "talk to students" page.

/// Reply for questions about exams.
pub const EXAM_REPLY: &str = "📅 The exams will start from next Monday. All the best!";
/// Reply for questions about holidays.
pub const HOLIDAY_REPLY: &str = "🏖️ No holidays this week. Please refer to the academic calendar.";
/// Reply for anything else.
pub const DEFAULT_REPLY: &str =
    "🤖 I'm here to help! Please ask something related to your academics.";

/// Pick the canned reply for a question.
///
/// Matching is case-insensitive substring containment; "exam" wins over
/// "holiday" when both appear.
pub fn reply(question: &str) -> &'static str {
    let lower = question.to_lowercase();
    if lower.contains("exam") {
        EXAM_REPLY
    } else if lower.contains("holiday") {
        HOLIDAY_REPLY
    } else {
        DEFAULT_REPLY
    }
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered chat transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a question and its reply.
    ///
    /// Blank questions are ignored and return `None`.
    pub fn ask(&mut self, question: &str) -> Option<&'static str> {
        if question.trim().is_empty() {
            return None;
        }

        let answer = reply(question);
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: question.to_string(),
        });
        self.messages.push(ChatMessage {
            speaker: Speaker::Bot,
            text: answer.to_string(),
        });
        Some(answer)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_matches_keywords_case_insensitively() {
        assert_eq!(reply("When is the EXAM?"), EXAM_REPLY);
        assert_eq!(reply("any Holidays soon"), HOLIDAY_REPLY);
        assert_eq!(reply("what is my cgpa"), DEFAULT_REPLY);
    }

    #[test]
    fn test_exam_takes_precedence_over_holiday() {
        assert_eq!(reply("holiday before the exams?"), EXAM_REPLY);
    }

    #[test]
    fn test_conversation_appends_question_then_reply() {
        let mut chat = Conversation::new();

        assert_eq!(chat.ask("exam dates"), Some(EXAM_REPLY));
        assert_eq!(chat.ask("hello"), Some(DEFAULT_REPLY));

        let speakers: Vec<Speaker> = chat.messages().iter().map(|m| m.speaker).collect();
        assert_eq!(
            speakers,
            vec![Speaker::User, Speaker::Bot, Speaker::User, Speaker::Bot]
        );
        assert_eq!(chat.messages()[0].text, "exam dates");
        assert_eq!(chat.messages()[3].text, DEFAULT_REPLY);
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let mut chat = Conversation::new();

        assert_eq!(chat.ask("   "), None);
        assert!(chat.messages().is_empty());
    }
}
