//! 仿真时间类型
//!
//! 连续时间：到达间隔与服务时长都是实数，因此用 `f64` 表示。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Add;

/// 仿真时间（无量纲实数）。
///
/// 为了能放进 `BinaryHeap`，用 `f64::total_cmp` 提供全序。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// 从 `earlier` 到 `self` 经过的时间，`self` 不晚于 `earlier` 时为 0。
    pub fn since(self, earlier: SimTime) -> f64 {
        if self > earlier { self.0 - earlier.0 } else { 0.0 }
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<f64> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}
