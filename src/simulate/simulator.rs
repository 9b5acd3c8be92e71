//! Injection and selection simulation

use super::models::{ResultSet, SimulationRequest};
use crate::providers::SearchProvider;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs one simulation: base results from the configured provider, optional
/// injection, then the agent's selection.
pub struct Simulator {
    provider: Arc<dyn SearchProvider>,
}

impl Simulator {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Execute a simulation. Always returns a well-formed `ResultSet`;
    /// provider failures become the zero-entry error shape.
    pub async fn run(&self, request: &SimulationRequest) -> ResultSet {
        info!(
            query = %request.query,
            objective = %request.objective,
            provider = self.provider.name(),
            "running search simulation"
        );

        let outcome = match self.provider.search(&request.query).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "provider failed");
                return ResultSet::failed(&request.query, e.to_string());
            }
        };

        let mut results = outcome.results;

        // Splice in the injected result. Empty title or url means no
        // injection, silently. Ranks of existing entries are left untouched.
        if let Some(injected) = request.injected.as_ref().filter(|r| r.is_actionable()) {
            let index = injected.insertion_index(results.len());
            debug!(
                insert_rank = injected.insert_rank,
                index, "injecting custom result"
            );
            results.insert(index, injected.to_result());
        }

        // The simulated agent always picks the first positional entry,
        // regardless of relevance score or custom-result flag.
        let selected_result_index = if results.is_empty() { None } else { Some(0) };

        ResultSet {
            query: request.query.clone(),
            total_results: results.len(),
            search_time: outcome.search_time_ms,
            selected_result_index,
            results,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{MockProvider, ProviderOutcome, ProviderError};
    use crate::simulate::{InjectedResult, SimulationRequest, INJECTED_RELEVANCE_SCORE};
    use async_trait::async_trait;

    fn mock_simulator() -> Simulator {
        Simulator::new(Arc::new(MockProvider::new()))
    }

    fn injected_at(rank: i64) -> InjectedResult {
        InjectedResult::new("My Custom Result", "https://example.com", "desc", rank)
    }

    #[tokio::test]
    async fn test_injection_lands_at_requested_position() {
        let simulator = mock_simulator();

        // every valid rank in [1, N+1] puts the record at index rank-1
        for rank in 1..=4i64 {
            let request =
                SimulationRequest::new("fedora hats", "buy a hat").with_injected(injected_at(rank));
            let set = simulator.run(&request).await;

            assert_eq!(set.total_results, 4);
            let index = (rank - 1) as usize;
            assert_eq!(set.results[index].title, "My Custom Result");
            assert!(set.results[index].is_custom_result);
            assert_eq!(set.results[index].rank, rank);
        }
    }

    #[tokio::test]
    async fn test_out_of_range_rank_appends() {
        let simulator = mock_simulator();
        let request = SimulationRequest::new("fedora hats", "").with_injected(injected_at(99));
        let set = simulator.run(&request).await;

        assert_eq!(set.total_results, 4);
        let last = set.results.last().unwrap();
        assert!(last.is_custom_result);
        assert_eq!(last.rank, 99);
        assert_eq!(last.result_id, "injected_99");
    }

    #[tokio::test]
    async fn test_nonpositive_rank_inserts_at_front() {
        let simulator = mock_simulator();
        let request = SimulationRequest::new("fedora hats", "").with_injected(injected_at(0));
        let set = simulator.run(&request).await;

        assert_eq!(set.total_results, 4);
        assert!(set.results[0].is_custom_result);
        assert_eq!(set.results[0].rank, 0);
    }

    #[tokio::test]
    async fn test_blank_injection_is_ignored() {
        let simulator = mock_simulator();

        for injected in [
            InjectedResult::new("", "https://example.com", "d", 1),
            InjectedResult::new("Title", "", "d", 1),
        ] {
            let request = SimulationRequest::new("fedora hats", "").with_injected(injected);
            let set = simulator.run(&request).await;

            assert_eq!(set.total_results, 3);
            assert!(set.results.iter().all(|r| !r.is_custom_result));
        }
    }

    #[tokio::test]
    async fn test_selection_is_always_first_entry() {
        let simulator = mock_simulator();

        let plain = SimulationRequest::new("fedora hats", "");
        assert_eq!(simulator.run(&plain).await.selected_result_index, Some(0));

        let with_bait = SimulationRequest::new("fedora hats", "").with_injected(injected_at(2));
        assert_eq!(
            simulator.run(&with_bait).await.selected_result_index,
            Some(0)
        );
    }

    #[tokio::test]
    async fn test_injected_score_and_id() {
        let simulator = mock_simulator();
        let request = SimulationRequest::new("fedora hats", "").with_injected(injected_at(2));
        let set = simulator.run(&request).await;

        let injected = set.results.iter().find(|r| r.is_custom_result).unwrap();
        assert_eq!(injected.relevance_score, INJECTED_RELEVANCE_SCORE);
        assert_eq!(injected.result_id, "injected_2");
    }

    #[tokio::test]
    async fn test_existing_ranks_not_renumbered() {
        let simulator = mock_simulator();
        let request = SimulationRequest::new("fedora hats", "").with_injected(injected_at(2));
        let set = simulator.run(&request).await;

        // base ranks stay 1,2,3 with the injected rank 2 spliced between,
        // so rank 2 appears twice — faithful, observable output
        let ranks: Vec<i64> = set.results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 2, 3]);
    }

    #[tokio::test]
    async fn test_rank_one_injection_is_selected() {
        let simulator = mock_simulator();
        let request = SimulationRequest::new("fedora hats", "find the best hat")
            .with_injected(injected_at(1));
        let set = simulator.run(&request).await;

        assert_eq!(set.selected_result_index, Some(0));
        let selected = set.selected_result().unwrap();
        assert!(selected.is_custom_result);
        assert_eq!(selected.title, "My Custom Result");
    }

    struct FailingProvider;

    #[async_trait]
    impl SearchProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn search(&self, _query: &str) -> Result<ProviderOutcome, ProviderError> {
            Err(ProviderError::Network("connection refused".to_string()))
        }
    }

    struct EmptyProvider;

    #[async_trait]
    impl SearchProvider for EmptyProvider {
        fn name(&self) -> &str {
            "empty"
        }

        async fn search(&self, _query: &str) -> Result<ProviderOutcome, ProviderError> {
            Ok(ProviderOutcome::new(Vec::new(), 7))
        }
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_response_shape() {
        let simulator = Simulator::new(Arc::new(FailingProvider));
        let request = SimulationRequest::new("fedora hats", "").with_injected(injected_at(1));
        let set = simulator.run(&request).await;

        assert_eq!(set.total_results, 0);
        assert!(set.results.is_empty());
        assert!(set.selected_result_index.is_none());
        assert!(set.error.as_deref().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_injection_into_empty_base_sequence() {
        let simulator = Simulator::new(Arc::new(EmptyProvider));
        let request = SimulationRequest::new("obscure query", "").with_injected(injected_at(3));
        let set = simulator.run(&request).await;

        // out-of-range rank appends, which for an empty base means index 0
        assert_eq!(set.total_results, 1);
        assert!(set.results[0].is_custom_result);
        assert_eq!(set.selected_result_index, Some(0));
    }

    #[tokio::test]
    async fn test_empty_sequence_selects_nothing() {
        let simulator = Simulator::new(Arc::new(EmptyProvider));
        let set = simulator.run(&SimulationRequest::new("obscure query", "")).await;

        assert_eq!(set.total_results, 0);
        assert!(set.selected_result_index.is_none());
        assert!(set.error.is_none());
    }
}
