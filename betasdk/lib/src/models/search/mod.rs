//! Microsoft Search answers (`#microsoft.graph.search.*`).

mod answers;
mod enums;

pub use answers::{AnswerKeyword, AnswerVariant, AnySearchAnswer, Bookmark, Qna, SearchAnswer};
pub use enums::{AnswerState, DevicePlatformType};
