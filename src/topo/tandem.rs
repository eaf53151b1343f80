//! 串联队列

use super::PresetOpts;
use crate::net::Route;
use crate::queue::{QueueParams, UniformRange};
use crate::sim::{InitialArrival, NetworkConfig};

/// 构建串联网络
///
/// 拓扑结构：外部到达 -> Q1 -> Q2 -> 离开。Q2 没有外部到达。
pub fn build_tandem(opts: &PresetOpts) -> NetworkConfig {
    NetworkConfig {
        arrivals: vec![InitialArrival(1, 2.0)],
        queues: vec![
            QueueParams::from_tuple(1, 5, 1.0, 2.0, 1.5, 3.0),
            QueueParams {
                servers: 1,
                capacity: 5,
                arrival: None,
                service: UniformRange::new(2.0, 4.0),
            },
        ],
        routing: vec![vec![Route::to(1, 1.0)], vec![Route::exit(1.0)]],
        seed: opts.seed,
        max_random: opts.max_random,
    }
}
