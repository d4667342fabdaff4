pub mod quiz;
pub mod quiz_question;
pub mod quiz_template;
pub mod score;
pub use quiz::{NavigationState, Quiz};
pub use quiz_question::ResolvedQuestion;
pub use quiz_template::{QuestionTemplate, QuizTemplate};
pub use score::Score;
