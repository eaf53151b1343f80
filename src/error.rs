//! 错误类型
//!
//! 网络配置校验失败、配置文件读取失败等情况统一用 `Error` 表示。
//! 随机数预算耗尽不属于错误，见 `sim::BudgetExhausted`。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("network has no queues")]
    NoQueues,

    #[error("queue {queue}: num_servers must be at least 1")]
    NoServers { queue: usize },

    #[error("queue {queue}: capacity must be at least 1")]
    ZeroCapacity { queue: usize },

    #[error("queue {queue}: invalid {what} range [{min}, {max})")]
    InvalidRange {
        queue: usize,
        what: &'static str,
        min: f64,
        max: f64,
    },

    #[error("arrival #{index}: queue {queue} is not in 1..={queues}")]
    ArrivalQueueOutOfRange {
        index: usize,
        queue: usize,
        queues: usize,
    },

    #[error("arrival #{index}: invalid time {time}")]
    InvalidArrivalTime { index: usize, time: f64 },

    #[error("routing table has {got} entries, expected one per queue ({expected})")]
    RoutingSizeMismatch { got: usize, expected: usize },

    #[error("queue {queue}: no routing destinations")]
    EmptyRoutes { queue: usize },

    #[error("queue {queue}: destination {dest} is neither -1 nor a queue index")]
    DestinationOutOfRange { queue: usize, dest: i64 },

    #[error("queue {queue}: invalid routing weight {weight}")]
    InvalidWeight { queue: usize, weight: f64 },

    #[error("queue {queue}: routing weights sum to zero")]
    ZeroTotalWeight { queue: usize },

    #[error("queue {queue}: routing weights overflow when summed")]
    WeightOverflow { queue: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid network config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
