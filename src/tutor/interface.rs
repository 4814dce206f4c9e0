use async_trait::async_trait;

/// A tutoring turn: the teacher's reply plus a study tip.
#[derive(Debug, Clone)]
pub struct TutorReply {
    pub reply: String,
    pub tip: String,
}

/// Conversational language-tutoring capability.
#[async_trait]
pub trait Tutor: Send + Sync {
    /// Produce a tutoring reply to `user_message` for a learner of
    /// `language` at the given proficiency `level`.
    async fn reply(
        &self,
        language: &str,
        level: &str,
        user_message: &str,
    ) -> Result<TutorReply, anyhow::Error>;
}
