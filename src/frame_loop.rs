use fps_counter::FPSCounter;
use winit::event::{Event, WindowEvent};
use winit::event_loop::ControlFlow;

use crate::error::Error;

/// What the loop cares about in a windowing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The window's close button (or the platform equivalent) was used.
    Close,
    /// All pending events were drained; time to draw.
    Frame,
    Idle,
}

impl Signal {
    pub fn from_event<T>(event: &Event<T>) -> Self {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => Signal::Close,
            Event::MainEventsCleared => Signal::Frame,
            _ => Signal::Idle,
        }
    }
}

/// Close flag and frame bookkeeping for the render loop.
pub struct FrameLoop {
    should_close: bool,
    frames: u64,
    fps_counter: FPSCounter,
    failure: Option<Error>,
}

impl FrameLoop {
    pub fn new() -> Self {
        FrameLoop {
            should_close: false,
            frames: 0,
            fps_counter: FPSCounter::new(),
            failure: None,
        }
    }

    #[cfg(test)]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    #[cfg(test)]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Ends the loop, yielding the frame count or the error that stopped it.
    pub fn finish(self) -> Result<u64, Error> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.frames),
        }
    }

    /// Advances the loop by one signal. `frame` draws and presents, and is
    /// only called for `Signal::Frame` while the close flag is unset.
    pub fn step<F>(&mut self, signal: Signal, frame: F) -> ControlFlow
    where
        F: FnOnce() -> Result<(), Error>,
    {
        match signal {
            Signal::Close => {
                log::info!("close requested after {} frames", self.frames);
                self.should_close = true;
            }
            Signal::Frame if !self.should_close => match frame() {
                Ok(()) => {
                    self.frames += 1;
                    log::trace!("frame {}: {} fps", self.frames, self.fps_counter.tick());
                }
                Err(err) => {
                    log::error!("failed to present frame: {}", err);
                    self.should_close = true;
                    self.failure = Some(err);
                }
            },
            _ => {}
        }

        if self.should_close {
            ControlFlow::Exit
        } else {
            ControlFlow::Poll
        }
    }
}
