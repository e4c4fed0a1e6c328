//! Window, OpenGL context and function pointer acquisition.
//!
//! Each step returns owned values, so a failure part way through drops
//! whatever was already acquired (window, event loop) before the error
//! reaches the caller.

use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use std::panic;
use winit::dpi::{PhysicalSize, Size};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::config::Config;
use crate::error::Error;
use crate::renderer::GlBackend;

pub type GlWindow = WindowedContext<PossiblyCurrent>;

/// Starts the windowing system. winit aborts with a panic when no display
/// backend is available, which is reported as an initialisation error.
pub fn create_event_loop() -> Result<EventLoop<()>, Error> {
    start(EventLoop::<()>::new)
}

fn start<T, F>(init: F) -> Result<T, Error>
where
    F: FnOnce() -> T + panic::UnwindSafe,
{
    panic::catch_unwind(init).map_err(|_| Error::Initialization)
}

pub fn create(config: &Config, event_loop: &EventLoop<()>) -> Result<GlWindow, Error> {
    let wb = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(Size::Physical(PhysicalSize::new(
            config.width,
            config.height,
        )))
        .with_visible(false);

    let (major, minor) = config.gl_version;
    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (major, minor)))
        .with_gl_profile(GlProfile::Core)
        .build_windowed(wb, event_loop)?;

    let context = unsafe { context.make_current() }.map_err(|(_, err)| err)?;
    context.window().set_visible(true);
    log::info!(
        "created {}x{} window with OpenGL {}.{} core context",
        config.width,
        config.height,
        major,
        minor
    );

    Ok(context)
}

pub fn load_functions(context: &GlWindow) -> Result<GlBackend, Error> {
    GlBackend::load(|symbol| context.get_proc_address(symbol))
}
