//! 概率路由表
//!
//! 每个队列对应一组 (目的地, 权重)。顾客离开时按权重做一次
//! 类别抽样；权重无需归一化，只看相对大小。

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::id::{Destination, QueueId};
use crate::error::{Error, Result};
use crate::sim::{BudgetExhausted, Variates};

/// 外部路由条目：`[目的地下标或 -1, 权重]`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Route(pub i64, pub f64);

impl Route {
    pub fn exit(weight: f64) -> Self {
        Route(Destination::EXIT_SENTINEL, weight)
    }

    pub fn to(queue: usize, weight: f64) -> Self {
        Route(queue as i64, weight)
    }
}

#[derive(Debug, Clone)]
struct Choices {
    dests: Vec<Destination>,
    weights: Vec<f64>,
    /// 累积权重，抽样时二分查找
    cum_weights: Vec<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    per_queue: Vec<Choices>,
}

impl RoutingTable {
    /// 校验并构建路由表；`routes[i]` 为队列 i 的出边。
    pub fn new(routes: &[Vec<Route>], queues: usize) -> Result<Self> {
        if routes.len() != queues {
            return Err(Error::RoutingSizeMismatch {
                got: routes.len(),
                expected: queues,
            });
        }

        let mut per_queue = Vec::with_capacity(queues);
        for (queue, list) in routes.iter().enumerate() {
            if list.is_empty() {
                return Err(Error::EmptyRoutes { queue });
            }
            let mut dests = Vec::with_capacity(list.len());
            let mut weights = Vec::with_capacity(list.len());
            let mut cum_weights = Vec::with_capacity(list.len());
            let mut total = 0.0;
            for &Route(raw, weight) in list {
                let dest = Destination::from_raw(raw, queues)
                    .ok_or(Error::DestinationOutOfRange { queue, dest: raw })?;
                if !weight.is_finite() || weight < 0.0 {
                    return Err(Error::InvalidWeight { queue, weight });
                }
                total += weight;
                dests.push(dest);
                weights.push(weight);
                cum_weights.push(total);
            }
            if !total.is_finite() {
                return Err(Error::WeightOverflow { queue });
            }
            if total <= 0.0 {
                return Err(Error::ZeroTotalWeight { queue });
            }
            per_queue.push(Choices {
                dests,
                weights,
                cum_weights,
            });
        }

        Ok(Self { per_queue })
    }

    /// 队列 `from` 的 (目的地, 权重) 列表。
    pub fn destinations(&self, from: QueueId) -> impl Iterator<Item = (Destination, f64)> + '_ {
        let c = &self.per_queue[from.0];
        c.dests.iter().copied().zip(c.weights.iter().copied())
    }

    /// 为从 `from` 离开的顾客选择去向，恰好消耗一次抽样。
    pub fn resolve_destination(
        &self,
        from: QueueId,
        variates: &mut Variates,
    ) -> std::result::Result<Destination, BudgetExhausted> {
        let c = &self.per_queue[from.0];
        let idx = variates.choose_cumulative(&c.cum_weights)?;
        let dest = c.dests[idx];
        trace!(%from, ?dest, "路由决策");
        Ok(dest)
    }
}
