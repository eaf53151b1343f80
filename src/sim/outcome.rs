//! 仿真结果
//!
//! 一次运行结束后对外可见的全部数据。

use serde::{Deserialize, Serialize};

/// 运行结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// 事件队列为空，正常结束
    QueueEmpty,
    /// 随机数预算耗尽，当前事件的剩余处理被放弃
    BudgetExhausted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimOutcome {
    /// 停止时的仿真时钟（最后一个被取出事件的时间戳）
    pub final_time: f64,
    /// 每个队列各占用状态的累计时间，长度 capacity + 1
    pub queue_time_in_state: Vec<Vec<f64>>,
    pub queue_lost_customers: Vec<u64>,
    /// 经由 -1 离开网络的顾客数
    pub total_completed: u64,
    pub random_used: u64,
    pub termination: Termination,
}

impl SimOutcome {
    pub fn total_lost(&self) -> u64 {
        self.queue_lost_customers.iter().sum()
    }

    /// 队列 `queue` 的直方图总时间。
    pub fn total_time(&self, queue: usize) -> f64 {
        self.queue_time_in_state[queue].iter().sum()
    }

    /// 各状态的时间占比；总时间为 0 时返回空。
    pub fn state_probabilities(&self, queue: usize) -> Vec<f64> {
        let total = self.total_time(queue);
        if total <= 0.0 {
            return Vec::new();
        }
        self.queue_time_in_state[queue]
            .iter()
            .map(|t| t / total)
            .collect()
    }
}
