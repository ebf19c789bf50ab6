use std::time::Duration;

/// Stand-in for a network round trip: the catalogue and accounts are local,
/// but callers still observe the configured delay.
pub async fn simulate_network(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    log::debug!("Simulating network latency of {}ms", delay.as_millis());
    tokio::time::sleep(delay).await;
}
