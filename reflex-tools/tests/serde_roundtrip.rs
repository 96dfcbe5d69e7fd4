#![cfg(feature = "serde")]

use reflex_tools::{TraceEvent, TraceLog};

#[test]
fn trace_log_json_roundtrip() {
    let log = TraceLog {
        events: vec![
            TraceEvent::new(1, "bt.episode.enter").with_node(3),
            TraceEvent::new(4, "bt.episode.exit").with_node(3).with_detail(1),
            TraceEvent::new(5, "driver.cycle").with_detail(42),
        ],
    };

    let json = serde_json::to_string(&log).expect("serialize");
    let roundtrip: TraceLog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, log);
}
