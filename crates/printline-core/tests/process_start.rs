//! Elapsed time counts from process start, not from the first log call

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use printline_core::console::Console;
use printline_core::sink::MemorySink;
use regex::Regex;

#[test]
fn test_elapsed_includes_time_before_first_use() {
    thread::sleep(Duration::from_millis(2100));

    let sink = Arc::new(MemorySink::new());
    let console = Console::builder().sink(sink.clone()).build();
    console.system_log("hello");

    let pattern =
        Regex::new(r"^\[\d{2}:\d{2}:\d{2}\]\[(\d{2}):(\d{2}):(\d{2})\] hello\n$").unwrap();
    let lines = sink.lines();
    let caps = pattern.captures(&lines[0]).expect("system log line layout");
    let elapsed_secs: u64 = caps[1].parse::<u64>().unwrap() * 3600
        + caps[2].parse::<u64>().unwrap() * 60
        + caps[3].parse::<u64>().unwrap();

    assert!(elapsed_secs >= 2, "elapsed field too small: {:?}", lines[0]);
}
