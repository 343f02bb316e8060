//! Keyword matching engine
//!
//! Data flows one way: normalizer, phrase extractor, classifier, scorer.

pub mod analyzer;
pub mod classifier;
pub mod keyword;
pub mod normalizer;
pub mod phrases;
pub mod scorer;
pub mod vocabulary;
