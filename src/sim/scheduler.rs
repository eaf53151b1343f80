//! 事件调度器
//!
//! 按时间排序的待处理事件集合。时钟不在这里，由 `Simulation` 持有。

use super::event::Event;
use super::scheduled_event::ScheduledEvent;
use super::time::SimTime;
use std::collections::BinaryHeap;
use tracing::trace;

#[derive(Debug, Default)]
pub struct Scheduler {
    next_seq: u64,
    q: BinaryHeap<ScheduledEvent>,
}

impl Scheduler {
    /// 调度事件在指定时间执行
    #[tracing::instrument(level = "trace", skip(self), fields(schedule_at = at.0))]
    pub fn schedule(&mut self, at: SimTime, ev: Event) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(ScheduledEvent { at, seq, ev });
        trace!(seq, queue_size = self.q.len(), "事件已加入队列");
    }

    /// 取出最早的事件。
    pub fn pop(&mut self) -> Option<ScheduledEvent> {
        self.q.pop()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// 丢弃所有待处理事件（预算耗尽时使用）。
    pub fn clear(&mut self) {
        self.q.clear();
    }
}
