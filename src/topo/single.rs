//! 单队列 G/G/1/5

use super::PresetOpts;
use crate::net::Route;
use crate::queue::QueueParams;
use crate::sim::{InitialArrival, NetworkConfig};

/// 构建单队列网络
///
/// 到达 U(1,2)，服务 U(1.5,3)，服务完成后直接离开。
pub fn build_single(opts: &PresetOpts) -> NetworkConfig {
    NetworkConfig {
        arrivals: vec![InitialArrival(1, 2.0)],
        queues: vec![QueueParams::from_tuple(1, 5, 1.0, 2.0, 1.5, 3.0)],
        routing: vec![vec![Route::exit(1.0)]],
        seed: opts.seed,
        max_random: opts.max_random,
    }
}
