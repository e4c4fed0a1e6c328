use super::backend::Backend;
use super::vertex::{self, Vertex};

/// A GPU array buffer filled once and never written again.
pub struct VertexBuffer<'a, B: Backend> {
    backend: &'a B,
    pub buf: B::Buffer,
    pub vertex_count: usize,
}

impl<'a, B: Backend> VertexBuffer<'a, B> {
    pub fn new(backend: &'a B, content: &[Vertex]) -> Self {
        assert_ne!(content.len(), 0);
        let data = vertex::flatten(content);

        let buf = backend.create_buffer();
        backend.upload_static(buf, &data);
        log::debug!("uploaded {} floats to vertex buffer {:?}", data.len(), buf);

        VertexBuffer {
            backend,
            buf,
            vertex_count: content.len(),
        }
    }
}

impl<'a, B: Backend> Drop for VertexBuffer<'a, B> {
    fn drop(&mut self) {
        self.backend.delete_buffer(self.buf);
    }
}
