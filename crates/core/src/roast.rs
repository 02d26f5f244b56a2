//! Roast generation for a batch of todos.
//!
//! One provider call is made per todo. Results are returned in input order and a failed call only
//! affects its own position, which receives [`FALLBACK_ROAST`]. The batch as a whole only fails
//! when the input itself is unusable.

use crate::config::CoreConfig;
use crate::constants::{FALLBACK_ROAST, ROAST_PROMPT_TEMPLATE};
use crate::error::{RoastError, RoastResult};
use crate::provider::RoastProvider;
use futures::stream::{self, StreamExt};
use roaster_anthropic::AnthropicClient;
use serde_json::Value;
use std::sync::Arc;

/// Builds the provider prompt for a single todo.
pub fn prompt_for(todo: &str) -> String {
    ROAST_PROMPT_TEMPLATE.replace("{todo}", todo)
}

/// Pulls the `todos` array out of a decoded request body.
///
/// Elements that are not strings are kept and rendered as text, so `3` becomes `"3"` and `null`
/// becomes `"null"`.
///
/// # Errors
/// Returns `RoastError::MalformedBody` if the body is `null`.
/// Returns `RoastError::InvalidBatch` if `todos` is missing, is not an array, or is empty.
pub fn todos_from_body(body: &Value) -> RoastResult<Vec<String>> {
    if body.is_null() {
        return Err(RoastError::MalformedBody);
    }

    let items = body
        .get("todos")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(RoastError::InvalidBatch)?;

    Ok(items.iter().map(template_text).collect())
}

/// Renders a non-string element as text: `null` as `"null"`, integral floats without a fraction,
/// arrays comma-joined with empty slots for `null`, and objects as `"[object Object]"`.
fn template_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => template_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Service turning todo lists into roast lists.
#[derive(Clone)]
pub struct RoastService {
    provider: Arc<dyn RoastProvider>,
    concurrency: usize,
}

impl RoastService {
    /// Creates a service over `provider` with at most `concurrency` calls in flight.
    ///
    /// A concurrency of `0` is treated as `1`.
    pub fn new(provider: Arc<dyn RoastProvider>, concurrency: usize) -> Self {
        Self {
            provider,
            concurrency: concurrency.max(1),
        }
    }

    /// Builds a service backed by the Messages API client described by `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> RoastResult<Self> {
        let client = AnthropicClient::new(cfg.client_options())?;
        Ok(Self::new(Arc::new(client), cfg.concurrency()))
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Produces one roast per todo.
    ///
    /// The returned vector has the same length as `todos`, and `roasts[i]` belongs to `todos[i]`.
    /// With a concurrency of 1 the provider is called strictly one todo after another.
    ///
    /// # Errors
    /// Returns `RoastError::InvalidBatch` if `todos` is empty. Provider failures never surface
    /// here; they are replaced by the fallback roast.
    pub async fn generate(&self, todos: &[String]) -> RoastResult<Vec<String>> {
        if todos.is_empty() {
            return Err(RoastError::InvalidBatch);
        }

        let total = todos.len();
        let pending: Vec<_> = todos
            .iter()
            .enumerate()
            .map(|(index, todo)| self.roast_one(index, total, todo))
            .collect();
        let roasts: Vec<String> = stream::iter(pending)
            .buffered(self.concurrency)
            .collect()
            .await;

        debug_assert_eq!(roasts.len(), total);
        Ok(roasts)
    }

    async fn roast_one(&self, index: usize, total: usize, todo: &str) -> String {
        tracing::info!("roasting todo {}/{}", index + 1, total);
        match self.provider.complete(&prompt_for(todo)).await {
            Ok(text) => text.unwrap_or_default().trim().to_string(),
            Err(e) => {
                tracing::error!("Error roasting {:?}: {}", todo, e);
                FALLBACK_ROAST.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use roaster_anthropic::{ProviderError, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn todo_of(prompt: &str) -> String {
        let start = prompt.find("Todo: \"").expect("prompt has todo") + "Todo: \"".len();
        let end = prompt[start..].find("\"\n").expect("todo is quoted") + start;
        prompt[start..end].to_string()
    }

    fn provider_failure() -> ProviderError {
        ProviderError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "overloaded".into(),
        }
    }

    /// Roasts everything except todos containing "FAIL"; records every prompt it sees.
    #[derive(Default)]
    struct ScriptedProvider {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RoastProvider for ScriptedProvider {
        async fn complete(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let todo = todo_of(prompt);
            if todo.contains("FAIL") {
                return Err(provider_failure());
            }
            if todo.contains("SILENT") {
                return Ok(None);
            }
            Ok(Some(format!("\n  You still haven't done {todo}?  \n")))
        }
    }

    /// Sleeps longer for earlier todos and tracks how many calls overlap.
    #[derive(Default)]
    struct SlowProvider {
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    #[async_trait]
    impl RoastProvider for SlowProvider {
        async fn complete(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            let todo = todo_of(prompt);
            let delay: u64 = todo.trim_start_matches("task ").parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(40 - delay * 10)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(Some(todo))
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prompt_embeds_literal_todo() {
        let prompt = prompt_for("learn \"Rust\"");
        assert!(prompt.starts_with("You're a hilariously brutal AI roast bot."));
        assert!(prompt.contains("Todo: \"learn \"Rust\"\""));
        assert!(prompt.ends_with("Roast:"));
    }

    #[test]
    fn todos_from_body_accepts_string_arrays() {
        let body = serde_json::json!({ "todos": ["a", " b "], "extra": 1 });
        assert_eq!(todos_from_body(&body).unwrap(), strings(&["a", " b "]));
    }

    #[test]
    fn todos_from_body_renders_non_string_elements() {
        let body = serde_json::json!({
            "todos": ["gym", 3, 2.5, 4.0, null, true, [1, null, "x"], { "k": "v" }]
        });
        assert_eq!(
            todos_from_body(&body).unwrap(),
            strings(&["gym", "3", "2.5", "4", "null", "true", "1,,x", "[object Object]"])
        );
    }

    #[test]
    fn todos_from_body_rejects_unusable_input() {
        for body in [
            serde_json::json!({}),
            serde_json::json!({ "todos": null }),
            serde_json::json!({ "todos": "call mom" }),
            serde_json::json!({ "todos": [] }),
            serde_json::json!(["a"]),
            serde_json::json!(7),
        ] {
            assert!(
                matches!(todos_from_body(&body), Err(RoastError::InvalidBatch)),
                "expected InvalidBatch for {body}"
            );
        }
    }

    #[test]
    fn todos_from_body_treats_null_body_as_malformed() {
        assert!(matches!(
            todos_from_body(&Value::Null),
            Err(RoastError::MalformedBody)
        ));
    }

    #[tokio::test]
    async fn generate_preserves_length_and_order() {
        let service = RoastService::new(Arc::new(ScriptedProvider::default()), 1);
        let todos = strings(&["gym", "taxes", "gym"]);

        let roasts = service.generate(&todos).await.unwrap();
        assert_eq!(
            roasts,
            strings(&[
                "You still haven't done gym?",
                "You still haven't done taxes?",
                "You still haven't done gym?",
            ])
        );
        assert!(roasts.iter().all(|r| r != FALLBACK_ROAST));
    }

    #[tokio::test]
    async fn generate_calls_provider_once_per_todo_without_caching() {
        let provider = Arc::new(ScriptedProvider::default());
        let service = RoastService::new(provider.clone(), 1);

        service.generate(&strings(&["same", "same"])).await.unwrap();
        service.generate(&strings(&["same"])).await.unwrap();

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 3);
        assert!(prompts.iter().all(|p| todo_of(p) == "same"));
    }

    #[tokio::test]
    async fn generate_substitutes_fallback_for_failed_item_only() {
        let service = RoastService::new(Arc::new(ScriptedProvider::default()), 1);
        let todos = strings(&["laundry", "FAIL this", "dentist"]);

        let roasts = service.generate(&todos).await.unwrap();
        assert_eq!(roasts.len(), 3);
        assert_eq!(roasts[0], "You still haven't done laundry?");
        assert_eq!(roasts[1], FALLBACK_ROAST);
        assert_eq!(roasts[2], "You still haven't done dentist?");
    }

    #[tokio::test]
    async fn generate_survives_every_item_failing() {
        let service = RoastService::new(Arc::new(ScriptedProvider::default()), 2);
        let roasts = service
            .generate(&strings(&["FAIL 1", "FAIL 2"]))
            .await
            .unwrap();
        assert_eq!(roasts, vec![FALLBACK_ROAST.to_string(); 2]);
    }

    #[tokio::test]
    async fn generate_treats_missing_text_as_empty() {
        let service = RoastService::new(Arc::new(ScriptedProvider::default()), 1);
        let roasts = service.generate(&strings(&["SILENT"])).await.unwrap();
        assert_eq!(roasts, vec![String::new()]);
    }

    #[tokio::test]
    async fn generate_rejects_empty_batch() {
        let service = RoastService::new(Arc::new(ScriptedProvider::default()), 1);
        let err = service.generate(&[]).await.unwrap_err();
        assert!(matches!(err, RoastError::InvalidBatch));
    }

    #[tokio::test]
    async fn sequential_mode_never_overlaps_calls() {
        let provider = Arc::new(SlowProvider::default());
        let service = RoastService::new(provider.clone(), 1);

        let todos = strings(&["task 0", "task 1", "task 2", "task 3"]);
        let roasts = service.generate(&todos).await.unwrap();

        assert_eq!(roasts, todos);
        assert_eq!(provider.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_mode_keeps_input_order() {
        let provider = Arc::new(SlowProvider::default());
        let service = RoastService::new(provider.clone(), 4);

        let todos = strings(&["task 0", "task 1", "task 2", "task 3"]);
        let roasts = service.generate(&todos).await.unwrap();

        assert_eq!(roasts, todos);
        assert!(provider.max_in_flight.load(Ordering::SeqCst) > 1);
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let service = RoastService::new(Arc::new(ScriptedProvider::default()), 0);
        assert_eq!(service.concurrency(), 1);
    }
}
