//! 网络配置
//!
//! 一次仿真运行的完整输入，可以从 JSON 文件读取。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::net::Route;
use crate::queue::QueueParams;

pub const DEFAULT_MAX_RANDOM: u64 = 100_000;

/// 初始外部到达：`[队列编号（从 1 开始）, 时间]`，不消耗随机数预算。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialArrival(pub usize, pub f64);

/// 一次仿真运行的输入。
///
/// ```json
/// {
///     "arrivals": [[1, 2.0]],
///     "queues": [
///         { "servers": 1, "capacity": 5,
///           "arrival": { "min": 1.0, "max": 2.0 },
///           "service": { "min": 1.5, "max": 3.0 } }
///     ],
///     "routing": [ [[-1, 1.0]] ],
///     "seed": 42,
///     "max_random": 100000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub arrivals: Vec<InitialArrival>,
    pub queues: Vec<QueueParams>,
    /// `routing[i]` 为队列 i 的 `[目的地（从 0 开始）或 -1, 权重]` 列表
    pub routing: Vec<Vec<Route>>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_max_random")]
    pub max_random: u64,
}

fn default_max_random() -> u64 {
    DEFAULT_MAX_RANDOM
}

impl NetworkConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
