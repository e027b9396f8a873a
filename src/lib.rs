//! # SoilSathi
//!
//! Local knowledge-base retrieval for the SoilSathi farmer advisory.
//!
//! A farmer's question (English, Marathi, or Hindi) is matched against a
//! small catalogue of government schemes and agronomy advisories. The ranked
//! entries are rendered as a reference block that the advisory backend
//! prepends to its generative-AI prompt.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────────┐   ┌──────────────┐
//! │ config.toml  │──▶│  KnowledgeBase      │──▶│  retrieve()  │
//! │ + entries    │   │  builtin + file     │   │  + context   │
//! └──────────────┘   └─────────────────────┘   └──────┬───────┘
//!                                                     │
//!                                   ┌─────────────────┤
//!                                   ▼                 ▼
//!                              ┌──────────┐     ┌──────────┐
//!                              │   CLI    │     │   HTTP   │
//!                              │ (sathi)  │     │  tools   │
//!                              └──────────┘     └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! sathi search "drip irrigation subsidy" --region Maharashtra
//! sathi context "कर्जमुक्ती योजना"
//! sathi detect "किसान ऋण"
//! sathi serve
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`kb`] | Builtin catalogue plus optional entries file |
//! | [`search`] | `search` and `context` commands |
//! | [`get`] | `get` and `entries` commands |
//! | [`traits`] | `Tool` trait, built-in tools, `ToolRegistry` |
//! | [`server`] | HTTP tool server (Axum) with CORS |
//!
//! The retrieval algorithm itself lives in the `soilsathi-core` crate and is
//! re-exported here.

pub mod config;
pub mod get;
pub mod kb;
pub mod search;
pub mod server;
pub mod traits;

pub use soilsathi_core::{
    build_context_text, detect_language, retrieve, retrieve_knowledge_context, KnowledgeBase,
    KnowledgeContext, KnowledgeEntry, KnowledgeError, Language, RetrieveOptions, ScoreBreakdown,
    ScoredEntry,
};
pub use traits::{Tool, ToolContext, ToolRegistry};
