//! # SoilSathi Core
//!
//! Shared, WASM-safe retrieval logic for SoilSathi: the knowledge-base data
//! model, the compiled-in scheme catalogue, text sanitizing, script-language
//! detection, lexical scoring, and prompt-context formatting.
//!
//! This crate contains no tokio, filesystem I/O, or other native-only
//! dependencies. Every operation is a synchronous in-memory computation.
//!
//! ```text
//! query ─▶ language::detect_language ─▶ search::retrieve ─▶ context::build_context_text
//!                                            │
//!                                   knowledge::KnowledgeBase
//! ```

pub mod context;
pub mod error;
pub mod knowledge;
pub mod language;
pub mod models;
pub mod search;
pub mod text;

pub use context::{build_context_text, retrieve_knowledge_context, KnowledgeContext};
pub use error::KnowledgeError;
pub use knowledge::KnowledgeBase;
pub use language::detect_language;
pub use models::{KnowledgeEntry, Language, ScoredEntry};
pub use search::{retrieve, RetrieveOptions, ScoreBreakdown, DEFAULT_LIMIT};
