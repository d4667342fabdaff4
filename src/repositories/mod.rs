pub mod knowledge_graph;
pub mod quiz_template_repository;

pub use knowledge_graph::{KnowledgeGraph, SparqlHttpClient};
pub use quiz_template_repository::{
    template_source_from_config, FileQuizTemplateSource, HttpQuizTemplateSource,
    QuizTemplateSource,
};
