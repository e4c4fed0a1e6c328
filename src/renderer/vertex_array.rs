use super::backend::Backend;
use super::buffer::VertexBuffer;
use super::vertex::Vertex;

/// Maps the vertex buffer's bytes onto the shader's `a_Pos` input.
pub struct VertexArray<'a, B: Backend> {
    backend: &'a B,
    pub array: B::VertexArray,
}

impl<'a, B: Backend> VertexArray<'a, B> {
    pub fn new(backend: &'a B, buffer: &VertexBuffer<'a, B>) -> Self {
        let array = backend.create_vertex_array();
        backend.bind_vertex_array(array);
        backend.bind_buffer(buffer.buf);
        backend.vertex_attrib_f32(
            Vertex::POS_LOCATION,
            Vertex::POS_COMPONENTS,
            Vertex::STRIDE,
            Vertex::POS_OFFSET,
        );

        VertexArray { backend, array }
    }

    pub fn bind(&self) {
        self.backend.bind_vertex_array(self.array);
    }
}

impl<'a, B: Backend> Drop for VertexArray<'a, B> {
    fn drop(&mut self) {
        self.backend.delete_vertex_array(self.array);
    }
}
