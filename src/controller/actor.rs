use crate::controller::{Controller, CycleError, CycleReport};
use crate::coordination::CoordinationStore;
use std::error::Error;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug)]
pub(super) enum Event {
    // Timer driven. Dropped when the queue is full, since a cycle is already pending.
    PeriodicTick,
    TriggerCycle(String, Callback<CycleReport, CycleError>),
}

#[derive(Debug)]
pub(super) struct Callback<O: Debug, E: Error>(oneshot::Sender<Result<O, E>>);

impl<O: Debug, E: Error> Callback<O, E> {
    pub fn send(self, message: Result<O, E>) {
        let _ = self.0.send(message);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("controller event loop has stopped")]
    ControllerStopped,
    #[error(transparent)]
    Cycle(#[from] CycleError),
}

/// ControllerClient is the handle to a running controller. The controller's event loop stops once
/// every `ControllerClient` is dropped.
#[derive(Clone)]
pub struct ControllerClient {
    sender: mpsc::Sender<Event>,
}

/// WeakControllerClient doesn't keep the event loop alive.
#[derive(Clone)]
pub(super) struct WeakControllerClient {
    sender: mpsc::WeakSender<Event>,
}

impl ControllerClient {
    pub(super) fn new(queue_size: usize) -> (Self, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(queue_size);

        (ControllerClient { sender: tx }, rx)
    }

    pub(super) fn weak(&self) -> WeakControllerClient {
        WeakControllerClient {
            sender: self.sender.downgrade(),
        }
    }

    /// Runs one cycle named `event_name` after any cycle already queued, and returns its outcome.
    pub async fn trigger_cycle(&self, event_name: impl Into<String>) -> Result<CycleReport, TriggerError> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(Event::TriggerCycle(event_name.into(), Callback(tx)))
            .await
            .map_err(|_| TriggerError::ControllerStopped)?;

        let result = rx.await.map_err(|_| TriggerError::ControllerStopped)?;
        Ok(result?)
    }
}

#[derive(Debug, PartialEq)]
pub(super) struct ControllerStopped;

impl WeakControllerClient {
    pub(super) fn periodic_tick(&self) -> Result<(), ControllerStopped> {
        let sender = self.sender.upgrade().ok_or(ControllerStopped)?;
        match sender.try_send(Event::PeriodicTick) {
            Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => Ok(()),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(ControllerStopped),
        }
    }
}

/// ControllerActor owns the controller and runs its cycles one at a time, in queue order.
pub(super) struct ControllerActor<S: CoordinationStore> {
    logger: slog::Logger,
    receiver: mpsc::Receiver<Event>,
    controller: Controller<S>,
}

impl<S: CoordinationStore> ControllerActor<S> {
    pub(super) fn new(logger: slog::Logger, receiver: mpsc::Receiver<Event>, controller: Controller<S>) -> Self {
        ControllerActor {
            logger,
            receiver,
            controller,
        }
    }

    pub(super) async fn run_event_loop(mut self) {
        while let Some(event) = self.receiver.recv().await {
            self.handle_event(event).await;
        }
        slog::info!(self.logger, "Controller event loop stopped");
    }

    async fn handle_event(&mut self, event: Event) {
        match event {
            Event::PeriodicTick => {
                // Failures are logged by the controller; the next tick retries.
                let _ = self.controller.run_cycle("periodic").await;
            }
            Event::TriggerCycle(event_name, callback) => {
                let result = self.controller.run_cycle(&event_name).await;
                callback.send(result);
            }
        }
    }
}
