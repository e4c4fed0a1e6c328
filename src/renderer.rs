mod backend;
mod buffer;
#[cfg(test)]
mod mock;
mod pipeline;
mod vertex;
mod vertex_array;

pub use backend::{GlBackend, ShaderStage};

use backend::Backend;
use buffer::VertexBuffer;
use pipeline::Pipeline;
use vertex::TRIANGLE;
use vertex_array::VertexArray;

use crate::config::Config;
use crate::error::Error;

const VERTEX_SHADER: &str = include_str!("data/triangle.vert");
const FRAGMENT_SHADER: &str = include_str!("data/triangle.frag");

const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Owns every GPU object the demo creates.
///
/// Fields drop in declaration order: program, vertex array, then buffer.
pub struct Renderer<'a, B: Backend> {
    pipeline: Pipeline<'a, B>,
    vertex_array: VertexArray<'a, B>,
    vertex_buffer: VertexBuffer<'a, B>,
    backend: &'a B,
}

impl<'a, B> Renderer<'a, B>
where
    B: Backend,
{
    pub fn new(backend: &'a B, config: &Config) -> Result<Self, Error> {
        backend.viewport(config.width as i32, config.height as i32);

        let vertex_buffer = VertexBuffer::new(backend, &TRIANGLE);
        let vertex_array = VertexArray::new(backend, &vertex_buffer);
        let pipeline = Pipeline::new(backend, VERTEX_SHADER, FRAGMENT_SHADER)?;
        log::info!("shader pipeline ready");

        Ok(Renderer {
            pipeline,
            vertex_array,
            vertex_buffer,
            backend,
        })
    }

    pub fn render(&self) {
        self.backend.clear_color(CLEAR_COLOR);
        self.backend.clear();

        self.pipeline.bind();
        self.vertex_array.bind();
        self.backend
            .draw_triangles(0, self.vertex_buffer.vertex_count as i32);
    }
}
