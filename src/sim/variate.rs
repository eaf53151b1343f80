//! 随机变量生成与抽样预算
//!
//! 整个仿真只有一条随机流，每次抽样（连续均匀或按权重选择目的地）
//! 恰好消耗一个随机数，并计入全局预算。预算用完时抽样返回
//! `BudgetExhausted`，且不会推进随机流。

use rand::SeedableRng;
use rand::distributions::{Distribution, Standard};
use rand_chacha::ChaChaRng;
use thiserror::Error;

use crate::queue::UniformRange;

/// 抽样预算已耗尽：仿真应立即停止。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("random draw budget of {max} exhausted")]
pub struct BudgetExhausted {
    pub max: u64,
}

/// 带预算计数的随机流。
#[derive(Debug, Clone)]
pub struct Variates {
    rng: ChaChaRng,
    used: u64,
    max: u64,
}

impl Variates {
    /// `seed` 为 `None` 时使用不可复现的随机流。
    pub fn new(seed: Option<u64>, max: u64) -> Self {
        let rng = match seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::from_entropy(),
        };
        Self { rng, used: 0, max }
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// 在 [0, 1) 上抽一个数，先检查预算。
    fn draw(&mut self) -> Result<f64, BudgetExhausted> {
        if self.used >= self.max {
            return Err(BudgetExhausted { max: self.max });
        }
        self.used += 1;
        Ok(Standard.sample(&mut self.rng))
    }

    /// 连续均匀分布 U[min, max)；`min == max` 时返回常数，但仍消耗一次抽样。
    pub fn uniform(&mut self, range: UniformRange) -> Result<f64, BudgetExhausted> {
        let u = self.draw()?;
        if range.min == range.max {
            return Ok(range.min);
        }
        Ok(range.min + (range.max - range.min) * u)
    }

    /// 按累积权重选择一个下标，无论候选多少都只消耗一次抽样。
    ///
    /// `cum_weights` 必须非空、单调不减且最后一项大于 0（由 `RoutingTable` 保证）。
    pub fn choose_cumulative(&mut self, cum_weights: &[f64]) -> Result<usize, BudgetExhausted> {
        let u = self.draw()?;
        let total = cum_weights.last().copied().unwrap_or(0.0);
        let x = u * total;
        let idx = cum_weights.partition_point(|&c| c <= x);
        Ok(idx.min(cum_weights.len().saturating_sub(1)))
    }
}
