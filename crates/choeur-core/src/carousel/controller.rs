//! Carousel state machine.

use std::mem;

use log::{debug, error};

use super::{
    host::{CarouselHost, TimerId},
    CarouselConfig, CarouselState, PlayState, SlideList,
};
use crate::error::CarouselError;

/// Where autoplay scheduling stands.
///
/// Each non-idle phase owns exactly one host timer, so a carousel never has
/// two timers alive at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    /// No timer scheduled
    Idle,
    /// Waiting for the start delay to elapse
    ScheduledToStart(TimerId),
    /// Recurring interval advancing the slides
    Running(TimerId),
}

/// User interactions with the carousel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Previous,
    Next,
    GoTo(usize),
    TogglePlayPause,
    SetAutoplay(bool),
    Quit,
}

/// A mounted carousel instance.
///
/// The carousel owns its host; dropping it (or calling
/// [`unmount`](Self::unmount)) cancels any pending timer.
pub struct Carousel<H: CarouselHost> {
    slides: SlideList,
    config: CarouselConfig,
    host: H,
    state: CarouselState,
    phase: AutoplayPhase,
    autoplay_error: Option<CarouselError>,
}

impl<H: CarouselHost> Carousel<H> {
    /// Creates a paused carousel on the first slide. No timer is scheduled
    /// until [`mount`](Self::mount).
    pub fn new(slides: SlideList, config: CarouselConfig, host: H) -> Self {
        Self {
            slides,
            config,
            host,
            state: CarouselState {
                current_index: 0,
                play_state: PlayState::Paused,
            },
            phase: AutoplayPhase::Idle,
            autoplay_error: None,
        }
    }

    /// Establishes the initial play state: playing when autoplay is
    /// configured and the host does not prefer reduced motion.
    ///
    /// # Errors
    ///
    /// Returns `CarouselError::TimerUnavailable` if autoplay should start but
    /// the host cannot schedule timers. The carousel stays paused and
    /// remains navigable.
    pub fn mount(&mut self) -> Result<(), CarouselError> {
        debug!(
            "Mounting carousel with {} slides (autoplay: {})",
            self.slides.len(),
            self.config.autoplay
        );
        if !self.config.autoplay {
            self.pause();
            return Ok(());
        }
        if self.host.prefers_reduced_motion() {
            debug!("Reduced motion preferred, mounting paused");
            self.pause();
            return Ok(());
        }
        self.play()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn phase(&self) -> AutoplayPhase {
        self.phase
    }

    pub fn slides(&self) -> &SlideList {
        &self.slides
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// The error that last prevented autoplay from starting, if any.
    pub fn autoplay_error(&self) -> Option<&CarouselError> {
        self.autoplay_error.as_ref()
    }

    /// Shows the next slide and stops autoplay.
    pub fn next(&mut self) {
        self.pause();
        self.state.current_index = (self.state.current_index + 1) % self.slides.len();
        debug!("Manual navigation to slide {}", self.state.current_index);
    }

    /// Shows the previous slide and stops autoplay.
    pub fn previous(&mut self) {
        self.pause();
        let len = self.slides.len();
        self.state.current_index = (self.state.current_index + len - 1) % len;
        debug!("Manual navigation to slide {}", self.state.current_index);
    }

    /// Jumps to slide `index` without touching the play state.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::SlideOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.state.current_index = index;
        Ok(())
    }

    /// Flips between playing and paused.
    pub fn toggle_play_pause(&mut self) -> Result<(), CarouselError> {
        match self.state.play_state {
            PlayState::Playing => {
                self.pause();
                Ok(())
            }
            PlayState::Paused => self.play(),
        }
    }

    /// Mirrors a change of the autoplay setting onto the play state.
    pub fn set_autoplay(&mut self, autoplay: bool) -> Result<(), CarouselError> {
        self.config.autoplay = autoplay;
        match (autoplay, self.state.play_state) {
            (true, PlayState::Paused) => self.play(),
            (false, PlayState::Playing) => {
                self.pause();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Applies a user command. `Quit` is left to the caller.
    pub fn apply(&mut self, command: CarouselCommand) -> Result<(), CarouselError> {
        match command {
            CarouselCommand::Previous => {
                self.previous();
                Ok(())
            }
            CarouselCommand::Next => {
                self.next();
                Ok(())
            }
            CarouselCommand::GoTo(index) => self.go_to(index),
            CarouselCommand::TogglePlayPause => self.toggle_play_pause(),
            CarouselCommand::SetAutoplay(autoplay) => self.set_autoplay(autoplay),
            CarouselCommand::Quit => Ok(()),
        }
    }

    /// Handles a fired host timer.
    ///
    /// Returns true when the visible state changed. Ids that do not match the
    /// current phase belong to cancelled timers and are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        let phase = self.phase;
        match phase {
            AutoplayPhase::ScheduledToStart(pending) if pending == id => {
                self.host.cancel(pending);
                self.phase = AutoplayPhase::Idle;
                match self.host.schedule_repeating(self.config.interval()) {
                    Ok(interval) => {
                        debug!("Autoplay running on {interval}");
                        self.phase = AutoplayPhase::Running(interval);
                        false
                    }
                    Err(e) => {
                        error!("Autoplay could not start: {e}");
                        self.autoplay_error = Some(e);
                        self.state.play_state = PlayState::Paused;
                        true
                    }
                }
            }
            AutoplayPhase::Running(active) if active == id => {
                self.state.current_index = (self.state.current_index + 1) % self.slides.len();
                true
            }
            _ => {
                debug!("Ignoring stale {id}");
                false
            }
        }
    }

    /// Cancels pending timers and returns the final state.
    pub fn unmount(mut self) -> CarouselState {
        self.stop_autoplay();
        debug!("Carousel unmounted on slide {}", self.state.current_index);
        self.state
    }

    /// Enters `Playing`. Under reduced motion no timer is scheduled and the
    /// phase stays `Idle`, so the carousel never advances on its own.
    fn play(&mut self) -> Result<(), CarouselError> {
        self.stop_autoplay();
        if self.host.prefers_reduced_motion() {
            debug!("Reduced motion preferred, playing without timers");
            self.state.play_state = PlayState::Playing;
            self.autoplay_error = None;
            return Ok(());
        }

        match self.host.schedule_once(self.config.start_delay()) {
            Ok(id) => {
                debug!("Autoplay scheduled to start on {id}");
                self.phase = AutoplayPhase::ScheduledToStart(id);
                self.state.play_state = PlayState::Playing;
                self.autoplay_error = None;
                Ok(())
            }
            Err(e) => {
                error!("Autoplay could not be scheduled: {e}");
                self.state.play_state = PlayState::Paused;
                self.autoplay_error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn pause(&mut self) {
        self.stop_autoplay();
        self.state.play_state = PlayState::Paused;
    }

    fn stop_autoplay(&mut self) {
        match mem::replace(&mut self.phase, AutoplayPhase::Idle) {
            AutoplayPhase::ScheduledToStart(id) | AutoplayPhase::Running(id) => {
                debug!("Cancelling {id}");
                self.host.cancel(id);
            }
            AutoplayPhase::Idle => {}
        }
    }
}

impl<H: CarouselHost> Drop for Carousel<H> {
    fn drop(&mut self) {
        self.stop_autoplay();
    }
}
