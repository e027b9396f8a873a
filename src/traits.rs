//! Tool extension trait and the built-in knowledge-base tools.
//!
//! Every HTTP-callable operation is a [`Tool`] held in a [`ToolRegistry`].
//! The server dispatches `POST /tools/{name}` to the matching tool, so
//! custom Rust tools sit alongside the built-ins with no extra routing.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 ToolRegistry                 │
//! │  retrieve · context · detect_language        │
//! │  get · entries · (custom tools)              │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//!              server::router() → HTTP API
//! ```

use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;

use soilsathi_core::{
    detect_language, retrieve, retrieve_knowledge_context, KnowledgeBase, KnowledgeEntry,
    Language, RetrieveOptions, ScoredEntry,
};

use crate::config::Config;

/// Client-side failures a tool can report. The server maps these to 4xx
/// responses; any other error is a 500.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("{0}")]
    NotFound(String),
}

// ═══════════════════════════════════════════════════════════════════════
// Tool Trait
// ═══════════════════════════════════════════════════════════════════════

/// An operation exposed over `POST /tools/{name}`.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use anyhow::Result;
/// use serde_json::{json, Value};
/// use soilsathi::traits::{Tool, ToolContext};
///
/// pub struct EntryCountTool;
///
/// #[async_trait]
/// impl Tool for EntryCountTool {
///     fn name(&self) -> &str { "entry_count" }
///     fn description(&self) -> &str { "Number of knowledge-base entries" }
///
///     fn parameters_schema(&self) -> Value {
///         json!({ "type": "object", "properties": {} })
///     }
///
///     async fn execute(&self, _params: Value, ctx: &ToolContext) -> Result<Value> {
///         Ok(json!({ "count": ctx.knowledge().len() }))
///     }
/// }
/// ```
#[async_trait]
pub trait Tool: Send + Sync {
    /// Route segment and registry key, e.g. `"retrieve"`.
    fn name(&self) -> &str;

    /// One-line description shown in `GET /tools/list`.
    fn description(&self) -> &str;

    /// Built-in tools are flagged in the tool list.
    fn is_builtin(&self) -> bool {
        false
    }

    /// JSON Schema (`type: "object"`) describing the parameters.
    fn parameters_schema(&self) -> Value;

    /// Run the tool. The returned value is wrapped in `{ "result": ... }`.
    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value>;
}

// ═══════════════════════════════════════════════════════════════════════
// ToolContext
// ═══════════════════════════════════════════════════════════════════════

/// Shared read-only state handed to every tool call.
#[derive(Clone)]
pub struct ToolContext {
    config: Arc<Config>,
    knowledge: Arc<KnowledgeBase>,
}

impl ToolContext {
    pub fn new(config: Arc<Config>, knowledge: Arc<KnowledgeBase>) -> Self {
        Self { config, knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Rank entries for `query`. Equivalent to `POST /tools/retrieve`.
    pub fn retrieve(&self, query: &str, opts: &RetrieveOptions) -> Vec<ScoredEntry<'_>> {
        retrieve(&self.knowledge, query, opts)
    }

    /// Fill in the configured default limit when the caller gave none.
    fn options(&self, params: &QueryParams) -> RetrieveOptions {
        RetrieveOptions {
            limit: Some(params.limit.unwrap_or(self.config.retrieval.default_limit)),
            region_hint: params.region.clone(),
            preferred_languages: params.languages.clone(),
            tags: params.tags.clone(),
            explain: params.explain,
        }
    }
}

/// Parameters shared by the `retrieve` and `context` tools.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryParams {
    pub query: String,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub explain: bool,
}

fn query_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": { "type": "string", "description": "Farmer question or keywords" },
            "limit": { "type": "integer", "minimum": 0, "description": "Max results" },
            "region": { "type": "string", "description": "Locality used as a ranking boost" },
            "languages": {
                "type": "array",
                "items": { "type": "string", "enum": ["mr", "hi", "en"] },
                "description": "Preferred entry languages"
            },
            "tags": { "type": "array", "items": { "type": "string" } },
            "explain": { "type": "boolean", "default": false }
        },
        "required": ["query"]
    })
}

/// Deserialize tool parameters, reporting failures as [`ToolError::InvalidParams`].
pub fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_json::from_value(params).map_err(|e| ToolError::InvalidParams(e.to_string()).into())
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Tool Implementations
// ═══════════════════════════════════════════════════════════════════════

/// Ranked knowledge-base entries for a query.
pub struct RetrieveTool;

#[async_trait]
impl Tool for RetrieveTool {
    fn name(&self) -> &str {
        "retrieve"
    }

    fn description(&self) -> &str {
        "Rank government scheme and advisory entries for a query"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        query_schema()
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let params: QueryParams = parse_params(params)?;
        let opts = ctx.options(&params);
        let results = ctx.retrieve(&params.query, &opts);
        tracing::debug!(query = %params.query, hits = results.len(), "retrieve");
        Ok(json!({ "results": results }))
    }
}

/// Language detection, retrieval, and prompt-context formatting in one call.
pub struct ContextTool;

#[async_trait]
impl Tool for ContextTool {
    fn name(&self) -> &str {
        "context"
    }

    fn description(&self) -> &str {
        "Build retrieval-augmented prompt context for a farmer query"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        query_schema()
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let params: QueryParams = parse_params(params)?;
        let opts = ctx.options(&params);
        let knowledge = retrieve_knowledge_context(ctx.knowledge(), &params.query, &opts);
        tracing::debug!(
            query = %params.query,
            language = %knowledge.language,
            hits = knowledge.entries.len(),
            "context"
        );
        Ok(serde_json::to_value(&knowledge)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DetectParams {
    text: String,
}

/// Marathi / Hindi / English classification.
pub struct DetectLanguageTool;

#[async_trait]
impl Tool for DetectLanguageTool {
    fn name(&self) -> &str {
        "detect_language"
    }

    fn description(&self) -> &str {
        "Classify text as Marathi (mr), Hindi (hi), or English (en)"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "text": { "type": "string" }
            },
            "required": ["text"]
        })
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<Value> {
        let params: DetectParams = parse_params(params)?;
        Ok(json!({ "language": detect_language(&params.text) }))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetParams {
    id: String,
}

/// One entry by id.
pub struct GetTool;

#[async_trait]
impl Tool for GetTool {
    fn name(&self) -> &str {
        "get"
    }

    fn description(&self) -> &str {
        "Retrieve a knowledge-base entry by id"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "Entry id" }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let params: GetParams = parse_params(params)?;
        let entry = ctx
            .knowledge()
            .get(&params.id)
            .ok_or_else(|| ToolError::NotFound(format!("entry not found: {}", params.id)))?;
        Ok(serde_json::to_value(entry)?)
    }
}

/// Compact listing row returned by the `entries` tool.
#[derive(Debug, Serialize)]
pub struct EntrySummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub updated: &'a str,
    pub languages: &'a [Language],
}

impl<'a> From<&'a KnowledgeEntry> for EntrySummary<'a> {
    fn from(e: &'a KnowledgeEntry) -> Self {
        Self {
            id: &e.id,
            title: &e.title,
            updated: &e.updated,
            languages: &e.languages,
        }
    }
}

/// The whole knowledge base, in ranking tie-break order.
pub struct EntriesTool;

#[async_trait]
impl Tool for EntriesTool {
    fn name(&self) -> &str {
        "entries"
    }

    fn description(&self) -> &str {
        "List all knowledge-base entries"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    async fn execute(&self, _params: Value, ctx: &ToolContext) -> Result<Value> {
        let entries: Vec<EntrySummary<'_>> =
            ctx.knowledge().entries().iter().map(EntrySummary::from).collect();
        Ok(json!({ "entries": entries }))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════

/// Ordered collection of tools.
///
/// ```rust
/// use soilsathi::traits::ToolRegistry;
///
/// let mut tools = ToolRegistry::with_builtins();
/// // tools.register(Box::new(MyTool));
/// assert!(tools.find("retrieve").is_some());
/// ```
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registry holding `retrieve`, `context`, `detect_language`, `get`, and `entries`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RetrieveTool));
        registry.register(Box::new(ContextTool));
        registry.register(Box::new(DetectLanguageTool));
        registry.register(Box::new(GetTool));
        registry.register(Box::new(EntriesTool));
        registry
    }

    /// Register a tool. A later tool with a duplicate name is never reached
    /// by [`find`](Self::find).
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(tool);
    }

    pub fn tools(&self) -> &[Box<dyn Tool>] {
        &self.tools
    }

    pub fn find(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
