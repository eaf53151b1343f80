use crate::error::Error;
use crate::net::{Destination, QueueId, Route, RoutingTable};
use crate::sim::Variates;

#[test]
fn destination_from_raw_handles_sentinel_and_bounds() {
    assert_eq!(Destination::from_raw(-1, 2), Some(Destination::Exit));
    assert_eq!(Destination::from_raw(0, 2), Some(Destination::Queue(QueueId(0))));
    assert_eq!(Destination::from_raw(1, 2), Some(Destination::Queue(QueueId(1))));
    assert_eq!(Destination::from_raw(2, 2), None);
    assert_eq!(Destination::from_raw(-2, 2), None);
}

#[test]
fn routing_table_rejects_malformed_entries() {
    let err = RoutingTable::new(&[vec![Route::exit(1.0)]], 2).unwrap_err();
    assert!(matches!(err, Error::RoutingSizeMismatch { got: 1, expected: 2 }));

    let err = RoutingTable::new(&[vec![]], 1).unwrap_err();
    assert!(matches!(err, Error::EmptyRoutes { queue: 0 }));

    let err = RoutingTable::new(&[vec![Route::exit(1.0)], vec![Route::to(2, 1.0)]], 2).unwrap_err();
    assert!(matches!(err, Error::DestinationOutOfRange { queue: 1, dest: 2 }));

    let err = RoutingTable::new(&[vec![Route(-3, 1.0)]], 1).unwrap_err();
    assert!(matches!(err, Error::DestinationOutOfRange { dest: -3, .. }));

    let err = RoutingTable::new(&[vec![Route::exit(-0.5)]], 1).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { queue: 0, .. }));

    let err = RoutingTable::new(&[vec![Route::exit(f64::NAN)]], 1).unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { .. }));

    let err = RoutingTable::new(&[vec![Route::exit(0.0), Route::to(0, 0.0)]], 1).unwrap_err();
    assert!(matches!(err, Error::ZeroTotalWeight { queue: 0 }));
}

#[test]
fn resolve_destination_costs_exactly_one_draw() {
    let rt = RoutingTable::new(&[vec![Route::exit(1.0)]], 1).expect("valid table");
    let mut v = Variates::new(Some(1), 10);

    assert_eq!(rt.resolve_destination(QueueId(0), &mut v), Ok(Destination::Exit));
    assert_eq!(v.used(), 1);

    let rt = RoutingTable::new(
        &[vec![Route::to(0, 0.2), Route::to(1, 0.3), Route::exit(0.5)], vec![Route::exit(1.0)]],
        2,
    )
    .expect("valid table");
    rt.resolve_destination(QueueId(0), &mut v).expect("within budget");
    assert_eq!(v.used(), 2);
}

#[test]
fn resolve_destination_fails_without_budget() {
    let rt = RoutingTable::new(&[vec![Route::exit(1.0)]], 1).expect("valid table");
    let mut v = Variates::new(Some(1), 0);
    assert!(rt.resolve_destination(QueueId(0), &mut v).is_err());
    assert_eq!(v.used(), 0);
}

#[test]
fn zero_weight_destination_is_never_chosen() {
    let rt = RoutingTable::new(&[vec![Route::to(0, 0.0), Route::exit(1.0)]], 1).expect("valid table");
    let mut v = Variates::new(Some(11), 500);
    for _ in 0..500 {
        assert_eq!(rt.resolve_destination(QueueId(0), &mut v), Ok(Destination::Exit));
    }
}

#[test]
fn weights_act_as_relative_frequencies() {
    // 未归一化的权重 4:1
    let rt = RoutingTable::new(&[vec![Route::to(0, 4.0), Route::exit(1.0)]], 1).expect("valid table");
    let mut v = Variates::new(Some(2024), 10_000);
    let mut back = 0_u32;
    for _ in 0..10_000 {
        if rt.resolve_destination(QueueId(0), &mut v) == Ok(Destination::Queue(QueueId(0))) {
            back += 1;
        }
    }
    let frac = f64::from(back) / 10_000.0;
    assert!((0.75..0.85).contains(&frac), "unexpected frequency {frac}");
}

#[test]
fn destinations_lists_entries_in_order() {
    let rt = RoutingTable::new(&[vec![Route::to(0, 0.3), Route::exit(0.7)]], 1).expect("valid table");
    let list: Vec<_> = rt.destinations(QueueId(0)).collect();
    assert_eq!(
        list,
        vec![(Destination::Queue(QueueId(0)), 0.3), (Destination::Exit, 0.7)]
    );
}

#[test]
fn routing_table_rejects_weights_whose_sum_overflows() {
    // 单个权重有限，但总和溢出为 inf 后抽样只会落在最后一项
    let err = RoutingTable::new(&[vec![Route::to(0, f64::MAX), Route::exit(f64::MAX)]], 1)
        .unwrap_err();
    assert!(matches!(err, Error::WeightOverflow { queue: 0 }));

    let rt = RoutingTable::new(&[vec![Route::to(0, f64::MAX / 4.0), Route::exit(f64::MAX / 4.0)]], 1)
        .expect("large but finite total");
    let mut v = Variates::new(Some(17), 2_000);
    let mut back = 0_u32;
    for _ in 0..2_000 {
        if rt.resolve_destination(QueueId(0), &mut v) == Ok(Destination::Queue(QueueId(0))) {
            back += 1;
        }
    }
    assert!((800..1_200).contains(&back), "picked first destination {back}/2000 times");
}
