use crate::controller::actor::Event;
use std::time::Duration;
use tokio::sync::mpsc;

/// Stands in for the controller's event loop and asserts on what lands in its queue.
pub(super) struct TestUtilActor {
    rx: mpsc::Receiver<Event>,
    timeout: Duration,
}

impl TestUtilActor {
    pub(super) fn new(rx: mpsc::Receiver<Event>) -> Self {
        TestUtilActor {
            rx,
            timeout: Duration::from_millis(10),
        }
    }

    pub(super) async fn assert_periodic_tick(&mut self) {
        let event = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .expect("Unexpected timeout");
        match event {
            Some(Event::PeriodicTick) => {}
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    pub(super) async fn assert_no_event(&mut self) {
        tokio::time::timeout(self.timeout, self.rx.recv())
            .await
            .expect_err("Expected timeout");
    }
}
