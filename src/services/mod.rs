pub mod interpolation;
pub mod question_resolver;
pub mod quiz_builder;
pub mod quiz_delegate;
pub mod score_calculator;
