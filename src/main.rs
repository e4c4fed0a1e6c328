mod config;
mod context;
mod error;
mod frame_loop;
mod renderer;

use config::Config;
use error::Error;
use frame_loop::{FrameLoop, Signal};
use renderer::Renderer;

use std::process;
use winit::platform::desktop::EventLoopExtDesktop;

const BANNER: &str = "OpenGL Triangle Demo\nLearning the basics of the OpenGL API";

fn main() {
    env_logger::init();
    println!("{}", BANNER);

    if let Err(err) = run(&Config::DEFAULT) {
        log::error!("{}", err);
        println!("Error: {}", err);
        process::exit(1);
    }
}

/// Runs the demo until the window is closed.
///
/// Locals drop in reverse order on every return path: GPU objects while the
/// context is still current, then the window, then the event loop.
fn run(config: &Config) -> Result<(), Error> {
    let mut event_loop = context::create_event_loop()?;
    let window = context::create(config, &event_loop)?;
    let backend = context::load_functions(&window)?;
    let renderer = Renderer::new(&backend, config)?;

    let mut frame_loop = FrameLoop::new();
    event_loop.run_return(|event, _, control_flow| {
        let signal = Signal::from_event(&event);
        *control_flow = frame_loop.step(signal, || {
            renderer.render();
            window.swap_buffers()?;
            Ok(())
        });
    });

    let frames = frame_loop.finish()?;
    log::info!("window closed after {} frames", frames);
    Ok(())
}
