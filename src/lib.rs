pub mod dlq;
pub mod domain;
pub mod engine;
pub mod frequency;
pub mod ingestion;
pub mod output;
pub mod rules;
pub mod store;
