//! 排队网络拓扑
//!
//! 队列标识与概率路由表。

mod id;
mod routing;

pub use id::{Destination, QueueId};
pub use routing::{Route, RoutingTable};
