use async_trait::async_trait;

use super::interface::{Tutor, TutorReply};

/// Stand-in tutor that acknowledges the learner's message with a canned
/// correction template.
pub struct PlaceholderTutor;

#[async_trait]
impl Tutor for PlaceholderTutor {
    async fn reply(
        &self,
        language: &str,
        level: &str,
        user_message: &str,
    ) -> Result<TutorReply, anyhow::Error> {
        Ok(TutorReply {
            reply: format!(
                "You are learning {language} at {level} level. \
                 You said: '{user_message}'. \
                 Here is a corrected and improved version."
            ),
            tip: "Practice daily by speaking full sentences.".to_string(),
        })
    }
}
