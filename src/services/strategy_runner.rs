//! Strategy runner.
//!
//! Fans a dataset slice out over a list of retrieval strategies, one request
//! per (item, strategy) pair, and streams the normalized records to a sink.
//!
//! Requests are issued with bounded concurrency, but records are always
//! yielded in plan order (items outer, strategies inner): completion order
//! never leaks into the output file.

use std::pin::pin;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::errors::HarnessResult;
use crate::domain::models::{CallOutcome, QaItem, RunRecord};
use crate::domain::ports::{ChatRequest, ChatService, RecordSink, RunObserver};

/// Label used in summaries for records sent without a strategy.
pub const UNLABELLED_STRATEGY: &str = "default";

/// One planned request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCase {
    pub item: QaItem,
    pub strategy: Option<String>,
}

/// Cartesian product of items and strategies, items outer.
///
/// A strategy of `None` sends the request without a strategy label.
pub fn plan<'a, I>(items: I, strategies: &[Option<String>]) -> Vec<RunCase>
where
    I: IntoIterator<Item = &'a QaItem>,
{
    items
        .into_iter()
        .flat_map(|item| {
            strategies.iter().map(move |strategy| RunCase {
                item: item.clone(),
                strategy: strategy.clone(),
            })
        })
        .collect()
}

/// Per-strategy success/failure counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StrategyTally {
    pub strategy: String,
    pub succeeded: usize,
    pub failed: usize,
}

/// What a finished run did.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// In first-seen strategy order
    pub per_strategy: Vec<StrategyTally>,
}

impl RunSummary {
    fn new(run_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            run_id,
            started_at: now,
            finished_at: now,
            total: 0,
            succeeded: 0,
            failed: 0,
            per_strategy: Vec::new(),
        }
    }

    fn tally(&mut self, record: &RunRecord) {
        let label = record.strategy.as_deref().unwrap_or(UNLABELLED_STRATEGY);
        let index = match self.per_strategy.iter().position(|t| t.strategy == label) {
            Some(index) => index,
            None => {
                self.per_strategy.push(StrategyTally {
                    strategy: label.to_string(),
                    ..Default::default()
                });
                self.per_strategy.len() - 1
            }
        };

        self.total += 1;
        if record.is_success() {
            self.succeeded += 1;
            self.per_strategy[index].succeeded += 1;
        } else {
            self.failed += 1;
            self.per_strategy[index].failed += 1;
        }
    }
}

/// Executes run cases against a [`ChatService`].
pub struct StrategyRunner {
    service: Arc<dyn ChatService>,
    concurrency: usize,
}

impl StrategyRunner {
    /// `concurrency` is clamped to at least one request in flight.
    pub fn new(service: Arc<dyn ChatService>, concurrency: usize) -> Self {
        Self {
            service,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Lazily execute `cases`, yielding one record per case in plan order.
    pub fn records(&self, cases: Vec<RunCase>) -> impl Stream<Item = RunRecord> + Send + '_ {
        stream::iter(cases)
            .map(move |case| {
                let service = Arc::clone(&self.service);
                async move { execute(service.as_ref(), case).await }
            })
            .buffered(self.concurrency)
    }

    /// Execute every case and append each record to `sink` as soon as it is
    /// available. Only sink failures abort the run.
    pub async fn run(
        &self,
        cases: Vec<RunCase>,
        sink: &mut dyn RecordSink,
        observer: &dyn RunObserver,
    ) -> HarnessResult<RunSummary> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "run",
            %run_id,
            cases = cases.len(),
            concurrency = self.concurrency
        );

        async move {
            let mut summary = RunSummary::new(run_id);
            let mut records = pin!(self.records(cases));

            while let Some(record) = records.next().await {
                sink.append(&record).await?;
                observer.on_record(&record);
                summary.tally(&record);
            }

            summary.finished_at = Utc::now();
            info!(
                total = summary.total,
                succeeded = summary.succeeded,
                failed = summary.failed,
                "run complete"
            );
            Ok(summary)
        }
        .instrument(span)
        .await
    }
}

async fn execute(service: &dyn ChatService, case: RunCase) -> RunRecord {
    let strategy = case.strategy.as_deref();
    let request = ChatRequest::new(case.item.question.as_str(), strategy);

    debug!(id = %case.item.id, strategy = ?strategy, "sending question");
    let outcome = service.ask(&request).await;

    if let CallOutcome::Failure { error } = &outcome {
        warn!(
            id = %case.item.id,
            strategy = ?strategy,
            status = %error.status(),
            error = %error.message(),
            "request failed"
        );
    }

    RunRecord::new(&case.item, strategy, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CallFailure, Category};
    use crate::domain::ports::{MemorySink, NullObserver};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Fails every question listed in `failing`, answers the rest.
    struct ScriptedService {
        failing: Vec<String>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedService {
        fn new(failing: &[&str]) -> Self {
            Self {
                failing: failing.iter().map(|s| (*s).to_string()).collect(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatService for ScriptedService {
        async fn ask(&self, request: &ChatRequest) -> CallOutcome {
            self.seen.lock().unwrap().push(request.clone());
            if self.failing.contains(&request.message) {
                CallOutcome::failure(CallFailure::Transport {
                    message: "connection refused".to_string(),
                })
            } else {
                CallOutcome::success(200, format!("answer: {}", request.message))
            }
        }
    }

    /// Answers later questions faster than earlier ones.
    struct ReverseLatencyService;

    #[async_trait]
    impl ChatService for ReverseLatencyService {
        async fn ask(&self, request: &ChatRequest) -> CallOutcome {
            let delay = 40u64.saturating_sub(request.message.len() as u64 * 5);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            CallOutcome::success(200, request.message.clone())
        }
    }

    fn items() -> Vec<QaItem> {
        vec![
            QaItem::new("single_metric_1", "q1", Category::SingleMetric),
            QaItem::new("growth_1", "q22", Category::GrowthRate),
            QaItem::new("qual_1", "q333", Category::Qualitative),
        ]
    }

    fn strategies(labels: &[&str]) -> Vec<Option<String>> {
        labels.iter().map(|s| Some((*s).to_string())).collect()
    }

    #[test]
    fn test_plan_is_items_outer_strategies_inner() {
        let items = items();
        let cases = plan(&items[..2], &strategies(&["baseline", "hybrid-0.6"]));
        let pairs: Vec<(&str, Option<&str>)> = cases
            .iter()
            .map(|c| (c.item.id.as_str(), c.strategy.as_deref()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("single_metric_1", Some("baseline")),
                ("single_metric_1", Some("hybrid-0.6")),
                ("growth_1", Some("baseline")),
                ("growth_1", Some("hybrid-0.6")),
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_is_recorded_and_run_continues() {
        let service = Arc::new(ScriptedService::new(&["q22"]));
        let runner = StrategyRunner::new(service.clone(), 1);
        let mut sink = MemorySink::default();

        let summary = runner
            .run(plan(&items(), &[None]), &mut sink, &NullObserver)
            .await
            .unwrap();

        assert_eq!(sink.records.len(), 3);
        assert!(sink.records[0].is_success());
        assert!(!sink.records[1].is_success());
        assert_eq!(sink.records[1].id, "growth_1");
        assert!(sink.records[2].is_success());
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(service.seen.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_every_pair_recorded_when_all_fail() {
        let service = Arc::new(ScriptedService::new(&["q1", "q22", "q333"]));
        let runner = StrategyRunner::new(service, 2);
        let mut sink = MemorySink::default();

        let summary = runner
            .run(
                plan(&items(), &strategies(&["baseline", "dense-only"])),
                &mut sink,
                &NullObserver,
            )
            .await
            .unwrap();

        assert_eq!(sink.records.len(), 6);
        assert_eq!(summary.failed, 6);
        assert_eq!(summary.per_strategy.len(), 2);
        assert_eq!(summary.per_strategy[0].strategy, "baseline");
        assert_eq!(summary.per_strategy[0].failed, 3);
    }

    #[tokio::test]
    async fn test_concurrent_run_keeps_plan_order() {
        let runner = StrategyRunner::new(Arc::new(ReverseLatencyService), 4);
        let mut sink = MemorySink::default();
        let cases = plan(&items(), &strategies(&["baseline", "hybrid-0.6"]));
        let expected: Vec<(String, Option<String>)> = cases
            .iter()
            .map(|c| (c.item.id.clone(), c.strategy.clone()))
            .collect();

        runner.run(cases, &mut sink, &NullObserver).await.unwrap();

        let actual: Vec<(String, Option<String>)> = sink
            .records
            .iter()
            .map(|r| (r.id.clone(), r.strategy.clone()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_request_carries_strategy_and_empty_history() {
        let service = Arc::new(ScriptedService::new(&[]));
        let runner = StrategyRunner::new(service.clone(), 1);
        let mut sink = MemorySink::default();

        runner
            .run(plan(&items()[..1], &strategies(&["hybrid-0.6"])), &mut sink, &NullObserver)
            .await
            .unwrap();

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen[0].strategy.as_deref(), Some("hybrid-0.6"));
        assert!(seen[0].chat_history.is_empty());
    }

    #[test]
    fn test_zero_concurrency_clamped() {
        let runner = StrategyRunner::new(Arc::new(ScriptedService::new(&[])), 0);
        assert_eq!(runner.concurrency(), 1);
    }
}
