use crate::net::Route;
use crate::queue::{QueueParams, UniformRange};
use crate::report::render_text;
use crate::sim::{InitialArrival, Simulation};
use crate::topo::{Preset, PresetOpts};

#[test]
fn text_report_lists_states_losses_and_clock() {
    let params = vec![QueueParams {
        servers: 1,
        capacity: 1,
        arrival: None,
        service: UniformRange::new(10.0, 10.0),
    }];
    let outcome = Simulation::from_parts(
        &[
            InitialArrival(1, 1.0),
            InitialArrival(1, 2.0),
            InitialArrival(1, 3.0),
        ],
        &params,
        Some(1),
        100,
        &[vec![Route::exit(1.0)]],
    )
    .expect("valid network")
    .run();

    let text = render_text(&params, &outcome);
    assert!(text.contains("REPORT"));
    assert!(text.contains("Q1: 1 servers, capacity 1"));
    assert!(!text.contains("Arrivals:"));
    assert!(text.contains("Service: U(10, 10)"));
    // 状态 0 占 1/11，状态 1 占 10/11
    assert!(text.contains("9.09%"));
    assert!(text.contains("90.91%"));
    assert!(text.contains("Lost customers: 2"));
    assert!(text.contains("Completed customers: 1"));
    assert!(text.contains("Random numbers used: 2"));
    assert!(text.contains("Stopped: event queue empty"));
    assert!(text.contains("Simulation time: 11.00"));
}

#[test]
fn text_report_covers_every_queue_and_skips_empty_states() {
    let cfg = Preset::Multi.build(&PresetOpts {
        seed: Some(42),
        max_random: 2_000,
    });
    let outcome = Simulation::new(&cfg).expect("valid preset").run();
    let text = render_text(&cfg.queues, &outcome);

    for name in ["Q1: 1 servers", "Q2: 2 servers", "Q3: 2 servers"] {
        assert!(text.contains(name), "missing {name}");
    }
    assert!(text.contains("Arrivals: U(2, 4)"));
    assert!(text.contains("Stopped: random budget exhausted"));
    // Q1 容量 99999，只会打印出现过的状态
    let rows = text
        .lines()
        .filter(|l| l.trim_end().ends_with('%'))
        .count();
    assert!(rows < 200, "printed {rows} state rows");
}
