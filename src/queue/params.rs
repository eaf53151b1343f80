//! 队列静态参数

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 连续均匀分布的上下界 [min, max)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub min: f64,
    pub max: f64,
}

impl UniformRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_zero(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    fn validate(&self, queue: usize, what: &'static str) -> Result<()> {
        let ok = self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                queue,
                what,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// 一个服务站的配置：服务台数、容量、外部到达间隔与服务时长。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueParams {
    pub servers: u32,
    pub capacity: u32,
    /// 外部到达间隔；`None` 或 `{0, 0}` 表示只接收路由过来的顾客。
    #[serde(default)]
    pub arrival: Option<UniformRange>,
    pub service: UniformRange,
}

impl QueueParams {
    /// 按 (servers, capacity, arrival_min, arrival_max, service_min, service_max) 顺序构造。
    pub fn from_tuple(
        servers: u32,
        capacity: u32,
        arrival_min: f64,
        arrival_max: f64,
        service_min: f64,
        service_max: f64,
    ) -> Self {
        Self {
            servers,
            capacity,
            arrival: Some(UniformRange::new(arrival_min, arrival_max)),
            service: UniformRange::new(service_min, service_max),
        }
    }

    /// 真正生效的外部到达过程。
    pub fn arrival_process(&self) -> Option<UniformRange> {
        self.arrival.filter(|r| !r.is_zero())
    }

    /// 校验参数；`queue` 为 0 起始的队列下标，仅用于报错。
    pub fn validate(&self, queue: usize) -> Result<()> {
        if self.servers == 0 {
            return Err(Error::NoServers { queue });
        }
        if self.capacity == 0 {
            return Err(Error::ZeroCapacity { queue });
        }
        if let Some(arrival) = self.arrival_process() {
            arrival.validate(queue, "arrival")?;
        }
        self.service.validate(queue, "service")
    }
}
