//! 三队列混合网络（含反馈与自环）

use super::PresetOpts;
use crate::net::Route;
use crate::queue::QueueParams;
use crate::sim::{InitialArrival, NetworkConfig};

/// 构建三队列网络
///
/// - Q1：1 台，容量近似无限，到达 U(2,4)，服务 U(1,2)；0.8 -> Q2，0.2 -> Q3
/// - Q2：2 台，容量 5，服务 U(4,8)；0.3 -> Q1，0.5 -> Q2，0.2 离开
/// - Q3：2 台，容量 10，服务 U(5,15)；0.7 -> Q3，0.3 离开
pub fn build_multi(opts: &PresetOpts) -> NetworkConfig {
    NetworkConfig {
        arrivals: vec![InitialArrival(1, 2.0)],
        queues: vec![
            QueueParams::from_tuple(1, 99_999, 2.0, 4.0, 1.0, 2.0),
            QueueParams::from_tuple(2, 5, 0.0, 0.0, 4.0, 8.0),
            QueueParams::from_tuple(2, 10, 0.0, 0.0, 5.0, 15.0),
        ],
        routing: vec![
            vec![Route::to(1, 0.8), Route::to(2, 0.2)],
            vec![Route::to(0, 0.3), Route::to(1, 0.5), Route::exit(0.2)],
            vec![Route::to(2, 0.7), Route::exit(0.3)],
        ],
        seed: opts.seed,
        max_random: opts.max_random,
    }
}
