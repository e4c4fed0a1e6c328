use super::backend::{Backend, ShaderStage};
use crate::error::Error;

/// A successfully compiled shader stage. Deleted on drop, which after a link
/// only flags it; the program keeps its own copy.
struct Shader<'a, B: Backend> {
    backend: &'a B,
    shader: B::Shader,
}

impl<'a, B: Backend> Shader<'a, B> {
    fn compile(backend: &'a B, stage: ShaderStage, source: &str) -> Result<Self, Error> {
        let shader = Shader {
            backend,
            shader: backend.create_shader(stage),
        };
        backend.shader_source(shader.shader, source);
        backend.compile_shader(shader.shader);

        if !backend.shader_compile_status(shader.shader) {
            let log = backend.shader_info_log(shader.shader);
            return Err(Error::ShaderCompile { stage, log });
        }
        log::debug!("compiled {} shader {:?}", stage, shader.shader);

        Ok(shader)
    }
}

impl<'a, B: Backend> Drop for Shader<'a, B> {
    fn drop(&mut self) {
        self.backend.delete_shader(self.shader);
    }
}

/// A linked vertex + fragment program, ready to draw with.
pub struct Pipeline<'a, B: Backend> {
    backend: &'a B,
    pub program: B::Program,
}

impl<'a, B: Backend> Pipeline<'a, B> {
    /// Compiles the vertex stage, then the fragment stage, then links them.
    /// The first failure aborts the build; everything created up to that
    /// point is deleted before the error is returned.
    pub fn new(backend: &'a B, vs_source: &str, fs_source: &str) -> Result<Self, Error> {
        let vs = Shader::compile(backend, ShaderStage::Vertex, vs_source)?;
        let fs = Shader::compile(backend, ShaderStage::Fragment, fs_source)?;

        Self::link(backend, &[vs, fs])
    }

    fn link(backend: &'a B, stages: &[Shader<'a, B>]) -> Result<Self, Error> {
        let pipeline = Pipeline {
            backend,
            program: backend.create_program(),
        };
        for stage in stages {
            backend.attach_shader(pipeline.program, stage.shader);
        }
        backend.link_program(pipeline.program);

        if !backend.program_link_status(pipeline.program) {
            let log = backend.program_info_log(pipeline.program);
            return Err(Error::ShaderLink { log });
        }
        log::debug!("linked shader program {:?}", pipeline.program);

        Ok(pipeline)
    }

    pub fn bind(&self) {
        self.backend.use_program(self.program);
    }
}

impl<'a, B: Backend> Drop for Pipeline<'a, B> {
    fn drop(&mut self) {
        self.backend.delete_program(self.program);
    }
}
