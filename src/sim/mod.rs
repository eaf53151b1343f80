//! 仿真核心模块
//!
//! 此模块包含事件驱动仿真的核心组件，如仿真时间、事件、调度器、
//! 随机数预算与仿真驱动。

// 子模块声明
mod config;
mod event;
mod outcome;
mod scheduled_event;
mod scheduler;
mod simulation;
mod time;
mod variate;

// 重新导出公共接口
pub use config::{DEFAULT_MAX_RANDOM, InitialArrival, NetworkConfig};
pub use event::Event;
pub use outcome::{SimOutcome, Termination};
pub use scheduled_event::ScheduledEvent;
pub use scheduler::Scheduler;
pub use simulation::{Simulation, Step, simulate};
pub use time::SimTime;
pub use variate::{BudgetExhausted, Variates};
