//! 服务站状态
//!
//! 有限容量、多服务台的队列。只维护计数与状态时间直方图，
//! 顾客本身不单独建模。

use super::params::QueueParams;

#[derive(Debug, Clone)]
pub struct Queue {
    params: QueueParams,
    n_in_system: u32,
    servers_busy: u32,
    lost_customers: u64,
    /// 下标为系统内顾客数，长度 capacity + 1
    time_in_state: Vec<f64>,
}

impl Queue {
    pub fn new(params: QueueParams) -> Self {
        Self {
            params,
            n_in_system: 0,
            servers_busy: 0,
            lost_customers: 0,
            time_in_state: vec![0.0; params.capacity as usize + 1],
        }
    }

    pub fn params(&self) -> &QueueParams {
        &self.params
    }

    pub fn n_in_system(&self) -> u32 {
        self.n_in_system
    }

    pub fn servers_busy(&self) -> u32 {
        self.servers_busy
    }

    pub fn lost_customers(&self) -> u64 {
        self.lost_customers
    }

    pub fn time_in_state(&self) -> &[f64] {
        &self.time_in_state
    }

    pub fn is_full(&self) -> bool {
        self.n_in_system == self.params.capacity
    }

    pub fn has_idle_server(&self) -> bool {
        self.servers_busy < self.params.servers
    }

    /// 顾客到达：未满则接纳并返回 true，否则计为损失并返回 false。
    pub fn add_customer(&mut self) -> bool {
        if self.is_full() {
            self.lost_customers += 1;
            false
        } else {
            self.n_in_system += 1;
            true
        }
    }

    pub fn remove_customer(&mut self) {
        assert!(self.n_in_system > 0, "remove_customer on empty queue");
        self.n_in_system -= 1;
    }

    pub fn start_service(&mut self) {
        assert!(
            self.has_idle_server() && self.servers_busy < self.n_in_system,
            "start_service without a waiting customer and a free server"
        );
        self.servers_busy += 1;
    }

    pub fn end_service(&mut self) {
        assert!(self.servers_busy > 0, "end_service with no busy server");
        self.servers_busy -= 1;
    }

    /// 有顾客在等待且有空闲服务台。
    pub fn needs_service_start(&self) -> bool {
        self.n_in_system > self.servers_busy && self.has_idle_server()
    }

    /// 把 `dt` 计入当前占用状态。
    pub fn accrue(&mut self, dt: f64) {
        self.time_in_state[self.n_in_system as usize] += dt;
    }
}
