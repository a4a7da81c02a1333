use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportOrdersError {
    #[error("No order ids supplied")]
    EmptyOrderIds,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// CSV snapshot of the named orders. Ids that match nothing are skipped;
/// an empty id list is the one input that errors.
#[async_trait]
pub trait ExportOrdersUseCase: Send + Sync {
    async fn execute(&self, order_ids: Vec<Uuid>) -> Result<String, ExportOrdersError>;
}
