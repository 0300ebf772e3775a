use thiserror::Error;

#[derive(Error, Debug)]
/// Analytics error
pub enum AnalyticsError {
    #[error("ItemReader from: {0}")]
    ItemReader(String),

    #[error("ItemProcessor from: {0}")]
    ItemProcessor(String),

    #[error("ItemWriter from: {0}")]
    ItemWriter(String),

    #[error("Error occurred in step: {0}")]
    Step(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Parallel computation failed: {0}")]
    Parallel(String),

    #[error("Sum of squares up to {0} overflows u64")]
    Overflow(u64),
}
