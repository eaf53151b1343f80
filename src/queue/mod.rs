//! 排队站
//!
//! 静态参数（`QueueParams`）与运行时状态（`Queue`）。

mod params;
mod station;

pub use params::{QueueParams, UniformRange};
pub use station::Queue;
