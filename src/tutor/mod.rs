pub mod interface;
pub mod placeholder;

pub use interface::{Tutor, TutorReply};
pub use placeholder::PlaceholderTutor;
