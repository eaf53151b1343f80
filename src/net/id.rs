//! 标识符类型
//!
//! 队列编号与路由目的地。

use std::fmt;

/// 队列标识符（0 起始下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueueId(pub usize);

impl fmt::Display for QueueId {
    // 报告里队列从 Q1 开始编号
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0 + 1)
    }
}

/// 路由结果：进入另一个队列，或离开网络。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Queue(QueueId),
    Exit,
}

impl Destination {
    /// 外部表示中代表离开网络的哨兵值。
    pub const EXIT_SENTINEL: i64 = -1;

    /// 把外部的 `-1` / 下标表示转换为 `Destination`；`queues` 为队列总数。
    pub fn from_raw(raw: i64, queues: usize) -> Option<Destination> {
        if raw == Self::EXIT_SENTINEL {
            return Some(Destination::Exit);
        }
        usize::try_from(raw)
            .ok()
            .filter(|&idx| idx < queues)
            .map(|idx| Destination::Queue(QueueId(idx)))
    }
}
