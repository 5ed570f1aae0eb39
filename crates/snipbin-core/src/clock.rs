use jiff::Timestamp;

/// The current time, truncated to whole seconds.
///
/// Snippet timestamps travel as epoch seconds, so anything the service stamps
/// must already be at that precision to survive a store/fetch cycle unchanged.
pub fn now() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_second(now.as_second()).unwrap_or(now)
}
