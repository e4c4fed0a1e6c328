use std::mem;

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[allow(non_snake_case)]
pub struct Vertex {
    a_Pos: [f32; 3],
}

impl Vertex {
    /// Shader input slot of `a_Pos`.
    pub const POS_LOCATION: u32 = 0;
    pub const POS_COMPONENTS: i32 = 3;
    pub const POS_OFFSET: usize = 0;
    pub const STRIDE: i32 = mem::size_of::<Vertex>() as i32;
}

pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        a_Pos: [-0.5, -0.5, 0.0],
    },
    Vertex {
        a_Pos: [0.5, -0.5, 0.0],
    },
    Vertex {
        a_Pos: [0.0, 0.5, 0.0],
    },
];

/// Lays vertices out as the tightly packed floats the GPU buffer holds.
pub fn flatten(vertices: &[Vertex]) -> Vec<f32> {
    vertices
        .iter()
        .flat_map(|vertex| vertex.a_Pos.iter().copied())
        .collect()
}
