pub mod quiz_handler;

pub use quiz_handler::{configure, health_check, load_quiz, submit_quiz};
