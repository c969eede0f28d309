use focusgate_jobs::BlocklistRefreshJob;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockUpdatePort;

#[tokio::test(start_paused = true)]
async fn test_first_tick_is_consumed_at_startup() {
    let updater = Arc::new(MockUpdatePort::new());
    let job = Arc::new(BlocklistRefreshJob::new(updater.clone()).with_interval(60));
    job.start().await;

    sleep(Duration::from_secs(1)).await;
    assert_eq!(updater.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_runs_once_per_interval() {
    let updater = Arc::new(MockUpdatePort::new());
    let job = Arc::new(BlocklistRefreshJob::new(updater.clone()).with_interval(60));
    job.start().await;

    sleep(Duration::from_secs(61)).await;
    assert_eq!(updater.call_count(), 1);

    sleep(Duration::from_secs(60)).await;
    assert_eq!(updater.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_failed_update_does_not_stop_the_job() {
    let updater = Arc::new(MockUpdatePort::new());
    updater.set_should_fail(true).await;
    let job = Arc::new(BlocklistRefreshJob::new(updater.clone()).with_interval(60));
    job.start().await;

    sleep(Duration::from_secs(121)).await;
    assert_eq!(updater.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_stops_the_job() {
    let updater = Arc::new(MockUpdatePort::new());
    let token = CancellationToken::new();
    let job = Arc::new(
        BlocklistRefreshJob::new(updater.clone())
            .with_interval(60)
            .with_cancellation(token.clone()),
    );
    job.start().await;

    sleep(Duration::from_secs(61)).await;
    assert_eq!(updater.call_count(), 1);

    token.cancel();
    sleep(Duration::from_secs(300)).await;
    assert_eq!(updater.call_count(), 1);
}
