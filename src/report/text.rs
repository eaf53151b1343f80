use std::fmt::Write;

use crate::net::QueueId;
use crate::queue::QueueParams;
use crate::sim::{SimOutcome, Termination};

const RULE: &str = "--------------------------------------------------";
const BANNER: &str = "==================================================";

/// 渲染文本报告。`params` 与 `outcome` 中的队列一一对应。
pub fn render_text(params: &[QueueParams], outcome: &SimOutcome) -> String {
    let mut out = String::new();
    // 写入 String 不会失败
    let _ = write_report(&mut out, params, outcome);
    out
}

fn write_report(out: &mut String, params: &[QueueParams], outcome: &SimOutcome) -> std::fmt::Result {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{:=^50}", " REPORT ")?;
    writeln!(out, "{BANNER}")?;

    for (idx, p) in params.iter().enumerate() {
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "{}: {} servers, capacity {}",
            QueueId(idx),
            p.servers,
            p.capacity
        )?;
        if let Some(arrival) = p.arrival_process() {
            writeln!(out, "Arrivals: U({}, {})", arrival.min, arrival.max)?;
        }
        writeln!(out, "Service: U({}, {})", p.service.min, p.service.max)?;
        writeln!(out, "{RULE}")?;

        let times = &outcome.queue_time_in_state[idx];
        let probs = outcome.state_probabilities(idx);
        if !probs.is_empty() {
            writeln!(out, "{:>6} {:>10} {:>13}", "State", "Time", "Probability")?;
            for (state, (&t, &prob)) in times.iter().zip(probs.iter()).enumerate() {
                if t > 0.0 {
                    writeln!(out, "{state:>6} {t:>10.2} {:>12.2}%", prob * 100.0)?;
                }
            }
        }
        writeln!(out, "Lost customers: {}", outcome.queue_lost_customers[idx])?;
        writeln!(out)?;
    }

    let termination = match outcome.termination {
        Termination::QueueEmpty => "event queue empty",
        Termination::BudgetExhausted => "random budget exhausted",
    };
    writeln!(out, "{RULE}")?;
    writeln!(out, "Completed customers: {}", outcome.total_completed)?;
    writeln!(out, "Random numbers used: {}", outcome.random_used)?;
    writeln!(out, "Stopped: {termination}")?;
    writeln!(out, "Simulation time: {:.2}", outcome.final_time)?;
    writeln!(out, "{RULE}")?;
    Ok(())
}
