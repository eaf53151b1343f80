//! 仿真驱动
//!
//! `Simulation` 持有一次运行的全部状态：时钟、事件调度器、随机流与
//! 预算、各队列状态以及离开网络的顾客计数。主循环不断取出最早的事件，
//! 先把经过的时间计入所有队列的当前占用状态，再执行事件逻辑。
//!
//! 任何一次抽样遇到预算耗尽都会以 `BudgetExhausted` 向上返回，
//! 主循环据此放弃当前事件剩余的处理并清空调度器。已经做过的状态
//! 修改保留不动（例如顾客已从源队列移除但尚未被路由）。

use tracing::{debug, info};

use super::config::{InitialArrival, NetworkConfig};
use super::event::Event;
use super::outcome::{SimOutcome, Termination};
use super::scheduler::Scheduler;
use super::time::SimTime;
use super::variate::{BudgetExhausted, Variates};
use crate::error::{Error, Result};
use crate::net::{Destination, QueueId, Route, RoutingTable};
use crate::queue::{Queue, QueueParams};

/// `step` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 事件已完整处理
    Processed(Event),
    /// 运行已结束（可能是本次取出的事件触发了预算耗尽）
    Finished(Termination),
}

#[derive(Debug)]
pub struct Simulation {
    now: SimTime,
    queues: Vec<Queue>,
    routing: RoutingTable,
    scheduler: Scheduler,
    variates: Variates,
    total_completed: u64,
    events_processed: u64,
    termination: Option<Termination>,
}

impl Simulation {
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        Self::from_parts(
            &config.arrivals,
            &config.queues,
            config.seed,
            config.max_random,
            &config.routing,
        )
    }

    /// 校验输入并把初始到达放入调度器（不消耗预算）。
    pub fn from_parts(
        arrivals: &[InitialArrival],
        queue_params: &[QueueParams],
        seed: Option<u64>,
        max_random: u64,
        network: &[Vec<Route>],
    ) -> Result<Self> {
        if queue_params.is_empty() {
            return Err(Error::NoQueues);
        }
        for (idx, params) in queue_params.iter().enumerate() {
            params.validate(idx)?;
        }
        let routing = RoutingTable::new(network, queue_params.len())?;

        let mut scheduler = Scheduler::default();
        for (index, &InitialArrival(queue, time)) in arrivals.iter().enumerate() {
            if queue == 0 || queue > queue_params.len() {
                return Err(Error::ArrivalQueueOutOfRange {
                    index,
                    queue,
                    queues: queue_params.len(),
                });
            }
            if !time.is_finite() || time < 0.0 {
                return Err(Error::InvalidArrivalTime { index, time });
            }
            scheduler.schedule(SimTime(time), Event::Arrival(QueueId(queue - 1)));
        }

        Ok(Self {
            now: SimTime::ZERO,
            queues: queue_params.iter().copied().map(Queue::new).collect(),
            routing,
            scheduler,
            variates: Variates::new(seed, max_random),
            total_completed: 0,
            events_processed: 0,
            termination: None,
        })
    }

    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }

    pub fn queue(&self, id: QueueId) -> &Queue {
        &self.queues[id.0]
    }

    pub fn routing(&self) -> &RoutingTable {
        &self.routing
    }

    pub fn total_completed(&self) -> u64 {
        self.total_completed
    }

    pub fn random_used(&self) -> u64 {
        self.variates.used()
    }

    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    pub fn pending_events(&self) -> usize {
        self.scheduler.len()
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// 处理一个事件。
    pub fn step(&mut self) -> Step {
        if let Some(t) = self.termination {
            return Step::Finished(t);
        }
        let Some(item) = self.scheduler.pop() else {
            self.termination = Some(Termination::QueueEmpty);
            return Step::Finished(Termination::QueueEmpty);
        };

        // 即使本事件随后因预算耗尽而中止，时钟也已推进到它的时间戳
        self.advance_to(item.at);
        self.events_processed += 1;

        debug!(
            event_num = self.events_processed,
            now = self.now.0,
            event = ?item.ev,
            remaining_queue = self.scheduler.len(),
            "执行事件"
        );

        match self.handle(item.ev) {
            Ok(()) => Step::Processed(item.ev),
            Err(BudgetExhausted { max }) => {
                debug!(
                    now = self.now.0,
                    max_random = max,
                    dropped_events = self.scheduler.len(),
                    "随机数预算耗尽，停止仿真"
                );
                self.scheduler.clear();
                self.termination = Some(Termination::BudgetExhausted);
                Step::Finished(Termination::BudgetExhausted)
            }
        }
    }

    /// 运行直到事件队列为空或预算耗尽。
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> SimOutcome {
        info!(
            queues = self.queues.len(),
            initial_events = self.scheduler.len(),
            max_random = self.variates.max(),
            "▶️  开始运行仿真"
        );

        let termination = loop {
            if let Step::Finished(t) = self.step() {
                break t;
            }
        };

        info!(
            total_events = self.events_processed,
            final_time = self.now.0,
            random_used = self.variates.used(),
            total_completed = self.total_completed,
            ?termination,
            "✅ 仿真完成"
        );

        self.outcome(termination)
    }

    fn outcome(&self, termination: Termination) -> SimOutcome {
        SimOutcome {
            final_time: self.now.0,
            queue_time_in_state: self.queues.iter().map(|q| q.time_in_state().to_vec()).collect(),
            queue_lost_customers: self.queues.iter().map(Queue::lost_customers).collect(),
            total_completed: self.total_completed,
            random_used: self.variates.used(),
            termination,
        }
    }

    /// 把 [now, at) 计入每个队列当前的占用状态，然后推进时钟。
    fn advance_to(&mut self, at: SimTime) {
        let dt = at.since(self.now);
        if dt > 0.0 {
            for q in &mut self.queues {
                q.accrue(dt);
            }
            self.now = at;
        }
    }

    fn handle(&mut self, ev: Event) -> std::result::Result<(), BudgetExhausted> {
        match ev {
            Event::Arrival(q) => self.on_arrival(q),
            Event::Departure(q) => self.on_departure(q),
        }
    }

    fn on_arrival(&mut self, q: QueueId) -> std::result::Result<(), BudgetExhausted> {
        let accepted = self.queues[q.0].add_customer();

        // 被拒绝的顾客不影响本队列继续产生外部到达
        if let Some(range) = self.queues[q.0].params().arrival_process() {
            let gap = self.variates.uniform(range)?;
            self.scheduler.schedule(self.now + gap, Event::Arrival(q));
        }

        if accepted && self.queues[q.0].has_idle_server() {
            self.begin_service(q)?;
        }
        Ok(())
    }

    fn on_departure(&mut self, q: QueueId) -> std::result::Result<(), BudgetExhausted> {
        let origin = &mut self.queues[q.0];
        origin.remove_customer();
        origin.end_service();

        match self.routing.resolve_destination(q, &mut self.variates)? {
            Destination::Exit => self.total_completed += 1,
            Destination::Queue(dest) => {
                let accepted = self.queues[dest.0].add_customer();
                if accepted && self.queues[dest.0].has_idle_server() {
                    self.begin_service(dest)?;
                }
            }
        }

        if self.queues[q.0].needs_service_start() {
            self.begin_service(q)?;
        }
        Ok(())
    }

    /// 抽取服务时长，占用一个服务台并调度离开事件。
    fn begin_service(&mut self, q: QueueId) -> std::result::Result<(), BudgetExhausted> {
        let queue = &mut self.queues[q.0];
        let duration = self.variates.uniform(queue.params().service)?;
        queue.start_service();
        self.scheduler.schedule(self.now + duration, Event::Departure(q));
        Ok(())
    }
}

/// 一次性入口：构建、运行并返回结果。
pub fn simulate(
    arrivals: &[InitialArrival],
    queue_params: &[QueueParams],
    seed: Option<u64>,
    max_random: u64,
    network: &[Vec<Route>],
) -> Result<SimOutcome> {
    let mut sim = Simulation::from_parts(arrivals, queue_params, seed, max_random, network)?;
    Ok(sim.run())
}
