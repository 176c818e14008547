use crate::controller::actor::WeakControllerClient;
use crate::controller::time::{Clock, RealClock};
use tokio::time::{Duration, Instant};

/// CycleTimerTask asks the controller for a cycle every `interval`. It exits once the controller's
/// event loop is gone.
pub(super) struct CycleTimerTask<C: Clock = RealClock> {
    interval: Duration,
    next_tick: Instant,
    actor_client: WeakControllerClient,
    clock: C,
}

impl CycleTimerTask {
    pub(super) fn spawn(interval: Duration, actor_client: WeakControllerClient) {
        tokio::task::spawn(CycleTimerTask::new(interval, actor_client, RealClock).run());
    }
}

impl<C: Clock + Send + Sync + 'static> CycleTimerTask<C> {
    fn new(interval: Duration, actor_client: WeakControllerClient, clock: C) -> Self {
        // First deadline is fixed here, not when the task is first polled.
        CycleTimerTask {
            interval,
            next_tick: clock.now() + interval,
            actor_client,
            clock,
        }
    }

    async fn run(mut self) {
        loop {
            self.clock.sleep_until(self.next_tick).await;
            self.next_tick += self.interval;

            if self.actor_client.periodic_tick().is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::test_utils::TestUtilActor;
    use crate::controller::time;
    use crate::controller::ControllerClient;

    #[tokio::test]
    async fn ticks_once_per_interval() {
        let interval = Duration::from_millis(100);
        let (strong_client, rx) = ControllerClient::new(10);
        let mut actor = TestUtilActor::new(rx);
        let (mock_clock, mut mock_clock_controller) = time::mocked_clock();

        tokio::task::spawn(CycleTimerTask::new(interval, strong_client.weak(), mock_clock).run());
        actor.assert_no_event().await;

        let one_ns = Duration::from_nanos(1);
        mock_clock_controller.advance(interval - one_ns);
        actor.assert_no_event().await;

        mock_clock_controller.advance(one_ns);
        actor.assert_periodic_tick().await;
        actor.assert_no_event().await;

        for _ in 0..3 {
            mock_clock_controller.advance(interval / 2);
            actor.assert_no_event().await;
            mock_clock_controller.advance(interval / 2);
            actor.assert_periodic_tick().await;
        }
    }

    #[tokio::test]
    async fn exits_once_controller_is_gone() {
        let interval = Duration::from_millis(100);
        let (strong_client, rx) = ControllerClient::new(10);
        let (mock_clock, mut mock_clock_controller) = time::mocked_clock();

        let task = tokio::task::spawn(CycleTimerTask::new(interval, strong_client.weak(), mock_clock).run());
        drop(strong_client);
        drop(rx);

        mock_clock_controller.advance(interval);
        tokio::time::timeout(Duration::from_secs(5), task)
            .await
            .expect("Timer task should exit")
            .unwrap();
    }
}
