#[cfg(test)]
use tokio::sync::watch;
#[cfg(test)]
use tokio::time::Duration;
use tokio::time::Instant;

/// Source of time for the cycle timer. Tests swap in `MockClock` to step time by hand.
#[async_trait::async_trait]
pub(crate) trait Clock: Clone {
    fn now(&self) -> Instant;
    async fn sleep_until(&mut self, deadline: Instant);
}

#[derive(Copy, Clone)]
pub(crate) struct RealClock;

#[async_trait::async_trait]
impl Clock for RealClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now()
    }

    async fn sleep_until(&mut self, deadline: Instant) {
        tokio::time::sleep_until(deadline).await;
    }
}

#[cfg(test)]
pub(crate) fn mocked_clock() -> (MockClock, MockClockController) {
    let now = Instant::now();
    let (tx, rx) = watch::channel(now);
    let clock = MockClock { current_time: rx };
    let controller = MockClockController {
        current_time: tx,
        started_at: now,
    };

    (clock, controller)
}

/// Time only moves when the paired `MockClockController` advances it.
#[cfg(test)]
#[derive(Clone)]
pub(crate) struct MockClock {
    current_time: watch::Receiver<Instant>,
}

#[cfg(test)]
#[async_trait::async_trait]
impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self.current_time.borrow()
    }

    async fn sleep_until(&mut self, deadline: Instant) {
        while *self.current_time.borrow() < deadline {
            self.current_time
                .changed()
                .await
                .expect("MockClockController dropped while a sleeper was waiting");
        }
    }
}

#[cfg(test)]
pub(crate) struct MockClockController {
    current_time: watch::Sender<Instant>,
    started_at: Instant,
}

#[cfg(test)]
impl MockClockController {
    pub(crate) fn current_time(&self) -> Instant {
        *self.current_time.borrow()
    }

    pub(crate) fn elapsed_time(&self) -> Duration {
        self.current_time() - self.started_at
    }

    /// Advance in steps smaller than what you want to observe. A sleeper only promises to wake
    /// at or after its deadline, so one big step wakes it once, far past the deadline.
    pub(crate) fn advance(&mut self, duration: Duration) {
        let new_now = self.current_time() + duration;
        self.current_time.send(new_now).expect("MockClock dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn mock_clock_wakes_sleepers_only_when_advanced() {
        let tick = Duration::from_millis(500);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let (mut mock_clock, mut controller) = mocked_clock();
        let start = controller.current_time();

        tokio::spawn(async move {
            let mut next_wake = start;
            loop {
                next_wake += tick;
                mock_clock.sleep_until(next_wake).await;
                if tx.send(()).is_err() {
                    return;
                }
            }
        });

        controller.advance(tick / 2);
        tokio::time::timeout(tick * 2, rx.recv())
            .await
            .expect_err("Expected timeout");

        controller.advance(tick);
        rx.recv().await.unwrap();
        tokio::time::timeout(tick * 2, rx.recv())
            .await
            .expect_err("Expected timeout");

        assert_eq!(controller.elapsed_time(), tick * 3 / 2);
    }
}
