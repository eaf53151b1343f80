//! 事件
//!
//! 只有两种事件：到达与离开。用封闭枚举表示，处理时穷尽匹配。

use crate::net::QueueId;

/// 仿真事件，携带它所属的队列。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Arrival(QueueId),
    Departure(QueueId),
}

impl Event {
    pub fn queue(self) -> QueueId {
        match self {
            Event::Arrival(q) | Event::Departure(q) => q,
        }
    }

    /// 同一时刻的排序等级：到达先于离开。
    pub fn kind_rank(self) -> u8 {
        match self {
            Event::Arrival(_) => 0,
            Event::Departure(_) => 1,
        }
    }
}
