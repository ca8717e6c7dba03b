//! Tokio-backed carousel host and event loop.

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::{
    runtime::Handle,
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use super::{
    controller::{Carousel, CarouselCommand},
    host::{CarouselHost, TimerId},
    CarouselState,
};
use crate::error::CarouselError;

/// Host running each timer as a tokio task.
///
/// A firing timer only sends its id on the channel returned by
/// [`TokioHost::new`]; the event loop owning the carousel applies it.
/// Dropping the host aborts every task it spawned.
pub struct TokioHost {
    next_id: u64,
    timers: HashMap<TimerId, JoinHandle<()>>,
    fired: mpsc::UnboundedSender<TimerId>,
    reduced_motion: bool,
}

impl TokioHost {
    /// Creates a host and the receiver its timers fire into.
    pub fn new(reduced_motion: bool) -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (fired, receiver) = mpsc::unbounded_channel();
        let host = Self {
            next_id: 0,
            timers: HashMap::new(),
            fired,
            reduced_motion,
        };
        (host, receiver)
    }

    /// Number of timer tasks not yet cancelled.
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    fn runtime() -> Result<Handle, CarouselError> {
        Handle::try_current().map_err(|e| CarouselError::TimerUnavailable {
            reason: e.to_string(),
        })
    }

    fn allocate_id(&mut self) -> TimerId {
        self.next_id += 1;
        TimerId::new(self.next_id)
    }
}

impl CarouselHost for TokioHost {
    fn schedule_once(&mut self, delay: Duration) -> Result<TimerId, CarouselError> {
        let handle = Self::runtime()?;
        let id = self.allocate_id();
        let fired = self.fired.clone();
        let task = handle.spawn(async move {
            time::sleep(delay).await;
            let _ = fired.send(id);
        });
        self.timers.insert(id, task);
        Ok(id)
    }

    fn schedule_repeating(&mut self, period: Duration) -> Result<TimerId, CarouselError> {
        let handle = Self::runtime()?;
        let id = self.allocate_id();
        let fired = self.fired.clone();
        let period = period.max(Duration::from_millis(1));
        let task = handle.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if fired.send(id).is_err() {
                    break;
                }
            }
        });
        self.timers.insert(id, task);
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.timers.remove(&id) {
            task.abort();
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

impl Drop for TokioHost {
    fn drop(&mut self) {
        for (_, task) in self.timers.drain() {
            task.abort();
        }
    }
}

/// Drives a carousel until the command channel closes or `Quit` arrives.
///
/// Commands and timer firings are applied one at a time. When both are
/// waiting, pending commands are applied first, so a pause or a manual move
/// always lands before an advance that was queued alongside it. `on_change`
/// runs after mounting and after every change of visible state. The carousel is unmounted before returning, so
/// no timer outlives the loop.
pub async fn run_carousel<F>(
    mut carousel: Carousel<TokioHost>,
    mut fired: mpsc::UnboundedReceiver<TimerId>,
    mut commands: mpsc::Receiver<CarouselCommand>,
    mut on_change: F,
) -> CarouselState
where
    F: FnMut(&Carousel<TokioHost>),
{
    if let Err(e) = carousel.mount() {
        error!("Carousel autoplay unavailable: {e}");
    }
    on_change(&carousel);

    loop {
        tokio::select! {
            biased;

            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("Command channel closed");
                    break;
                };
                if command == CarouselCommand::Quit {
                    break;
                }
                match carousel.apply(command) {
                    Ok(()) => on_change(&carousel),
                    Err(e @ CarouselError::TimerUnavailable { .. }) => {
                        error!("Carousel autoplay unavailable: {e}");
                        on_change(&carousel);
                    }
                    Err(e) => warn!("Ignoring {command:?}: {e}"),
                }
            }
            Some(id) = fired.recv() => {
                if carousel.on_timer(id) {
                    on_change(&carousel);
                }
            }
        }
    }

    let state = carousel.unmount();
    info!("Carousel stopped on slide {}", state.current_index + 1);
    state
}
