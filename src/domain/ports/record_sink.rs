use async_trait::async_trait;

use crate::domain::errors::HarnessResult;
use crate::domain::models::RunRecord;

/// Destination for run records.
///
/// `append` must make the record durable-visible before returning, so a run
/// killed between two appends leaves only complete records behind.
#[async_trait]
pub trait RecordSink: Send {
    async fn append(&mut self, record: &RunRecord) -> HarnessResult<()>;
}

/// Observer notified after each record has been appended.
pub trait RunObserver: Send + Sync {
    fn on_record(&self, record: &RunRecord);
}

/// Observer that ignores every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RunObserver for NullObserver {
    fn on_record(&self, _record: &RunRecord) {}
}

/// In-memory sink, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<RunRecord>,
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn append(&mut self, record: &RunRecord) -> HarnessResult<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
