use glutin::{ContextError, CreationError};
use thiserror::Error;

use crate::renderer::ShaderStage;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to initialise the windowing system")]
    Initialization,

    #[error("window creation failed: {0}")]
    WindowCreation(#[from] CreationError),

    #[error("OpenGL context error: {0}")]
    Context(#[from] ContextError),

    #[error("failed to load OpenGL function `{0}`")]
    Loader(&'static str),

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("shader program failed to link: {log}")]
    ShaderLink { log: String },
}
