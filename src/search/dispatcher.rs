use crate::error::AcquisitionError;
use crate::models::SearchResult;
use crate::providers::{GenerationRequest, GenerativeModel};
use crate::search::{fallback, parser, prompt};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Turns a college name into a `SearchResult`, live or canned
#[derive(Clone)]
pub struct SearchService {
    model: Option<Arc<dyn GenerativeModel>>,
}

impl SearchService {
    pub fn new(model: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self { model }
    }

    pub fn is_live(&self) -> bool {
        self.model.is_some()
    }

    /// Search near `college`. Never fails: every error becomes the fallback result.
    pub async fn search(&self, college: &str) -> SearchResult {
        let Some(model) = &self.model else {
            warn!("No API key configured, returning fallback data");
            return fallback::search_result(college);
        };

        match self.fetch(model.as_ref(), college).await {
            Ok(result) => {
                let unrecognized = result.hostels.iter().filter(|l| !l.kind.is_known()).count();
                if unrecognized > 0 {
                    warn!("{} listings carry an unrecognized type", unrecognized);
                }
                info!(
                    "✅ {} returned {} listings for {:?}",
                    model.model_name(),
                    result.hostels.len(),
                    college
                );
                result
            }
            Err(e) => {
                error!("Model search failed for {:?}: {}", college, e);
                fallback::search_result(college)
            }
        }
    }

    async fn fetch(
        &self,
        model: &dyn GenerativeModel,
        college: &str,
    ) -> Result<SearchResult, AcquisitionError> {
        let request = GenerationRequest::json(
            prompt::search_prompt(college),
            prompt::search_result_schema(),
        );
        let text = model.generate(&request).await?;
        parser::parse_search_result(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Replays a fixed outcome and records the requests it saw
    struct ScriptedModel {
        reply: Result<String, fn() -> AcquisitionError>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedModel {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: fn() -> AcquisitionError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(err),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl GenerativeModel for ScriptedModel {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, AcquisitionError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    fn live(model: &Arc<ScriptedModel>) -> SearchService {
        SearchService::new(Some(model.clone() as Arc<dyn GenerativeModel>))
    }

    fn live_payload() -> String {
        json!({
            "locationSummary": "Leafy and quiet. Good bus links.",
            "hostels": [{
                "id": "x9",
                "name": "Ridge House",
                "type": "Apartment",
                "pricePerMonth": 14000,
                "currency": "INR",
                "distance": "1 km",
                "rating": 4.3,
                "reviewCount": 9,
                "amenities": [],
                "description": "Ten minutes on foot.",
                "availability": 2
            }],
            "marketInsights": []
        })
        .to_string()
    }

    #[tokio::test]
    async fn offline_returns_fallback_for_any_input() {
        let service = SearchService::new(None);
        for name in ["", "Delhi University"] {
            let result = service.search(name).await;
            assert!(!result.hostels.is_empty());
            assert_eq!(result.market_insights.len(), 6);
            assert_eq!(result, fallback::search_result(name));
        }
    }

    #[tokio::test]
    async fn live_result_is_passed_through() {
        let model = ScriptedModel::ok(&live_payload());
        let service = live(&model);

        let result = service.search("IISc").await;
        assert_eq!(result.hostels[0].name, "Ridge House");
        assert!(result.market_insights.is_empty());

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].prompt.contains("IISc"));
        assert!(seen[0].response_schema.is_some());
    }

    #[tokio::test]
    async fn transport_failure_falls_back() {
        let model = ScriptedModel::failing(|| AcquisitionError::Transport("connection reset".into()));
        let service = live(&model);
        assert_eq!(
            service.search("VIT Vellore").await,
            fallback::search_result("VIT Vellore")
        );
    }

    #[tokio::test]
    async fn empty_and_malformed_replies_fall_back() {
        let empty = live(&ScriptedModel::failing(|| AcquisitionError::EmptyResponse));
        assert_eq!(empty.search("JNU").await, fallback::search_result("JNU"));

        let garbage = live(&ScriptedModel::ok("{\"hostels\": 3}"));
        assert_eq!(garbage.search("JNU").await, fallback::search_result("JNU"));
    }

    #[tokio::test]
    async fn calls_model_once_without_retry() {
        let model = ScriptedModel::failing(|| AcquisitionError::Status {
            status: 503,
            body: "overloaded".into(),
        });
        let service = live(&model);
        service.search("Anna University").await;
        assert_eq!(model.seen.lock().unwrap().len(), 1);
    }
}
