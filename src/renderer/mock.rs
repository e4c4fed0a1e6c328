use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::backend::{Backend, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateBuffer(u32),
    BindBuffer(u32),
    UploadStatic(u32, Vec<f32>),
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(u32),
    VertexAttrib {
        location: u32,
        components: i32,
        stride: i32,
        offset: usize,
    },
    DeleteVertexArray(u32),
    CreateShader(u32, ShaderStage),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(u32),
    DeleteProgram(u32),
    Viewport(i32, i32),
    ClearColor([f32; 4]),
    Clear,
    DrawTriangles(i32, i32),
}

/// Records every call and hands out increasing object names starting at 1.
#[derive(Default)]
pub struct MockBackend {
    next_name: Cell<u32>,
    calls: RefCell<Vec<Call>>,
    stages: RefCell<HashMap<u32, ShaderStage>>,
    fail_compile: Option<ShaderStage>,
    fail_link: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_compile(stage: ShaderStage) -> Self {
        MockBackend {
            fail_compile: Some(stage),
            ..Self::default()
        }
    }

    pub fn failing_link() -> Self {
        MockBackend {
            fail_link: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| pred(call)).count()
    }

    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls.borrow().iter().position(|c| c == call)
    }

    /// Names created but never deleted, across every object kind.
    pub fn live_objects(&self) -> Vec<u32> {
        let calls = self.calls.borrow();
        let mut live = Vec::new();
        for call in calls.iter() {
            match *call {
                Call::CreateBuffer(n)
                | Call::CreateVertexArray(n)
                | Call::CreateShader(n, _)
                | Call::CreateProgram(n) => live.push(n),
                Call::DeleteBuffer(n)
                | Call::DeleteVertexArray(n)
                | Call::DeleteShader(n)
                | Call::DeleteProgram(n) => live.retain(|&l| l != n),
                _ => {}
            }
        }
        live
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn name(&self) -> u32 {
        let name = self.next_name.get() + 1;
        self.next_name.set(name);
        name
    }
}

impl Backend for MockBackend {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;

    fn create_buffer(&self) -> u32 {
        let name = self.name();
        self.record(Call::CreateBuffer(name));
        name
    }

    fn bind_buffer(&self, buffer: u32) {
        self.record(Call::BindBuffer(buffer));
    }

    fn upload_static(&self, buffer: u32, data: &[f32]) {
        self.record(Call::UploadStatic(buffer, data.to_vec()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> u32 {
        let name = self.name();
        self.record(Call::CreateVertexArray(name));
        name
    }

    fn bind_vertex_array(&self, vertex_array: u32) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn vertex_attrib_f32(&self, location: u32, components: i32, stride: i32, offset: usize) {
        self.record(Call::VertexAttrib {
            location,
            components,
            stride,
            offset,
        });
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn create_shader(&self, stage: ShaderStage) -> u32 {
        let name = self.name();
        self.stages.borrow_mut().insert(name, stage);
        self.record(Call::CreateShader(name, stage));
        name
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.record(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.fail_compile != self.stages.borrow().get(&shader).copied()
    }

    fn shader_info_log(&self, shader: u32) -> String {
        match self.stages.borrow().get(&shader) {
            Some(stage) => format!("0:1(1): error: broken {} stage", stage),
            None => String::new(),
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> u32 {
        let name = self.name();
        self.record(Call::CreateProgram(name));
        name
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: u32) -> String {
        "error: vertex output does not match fragment input".to_owned()
    }

    fn use_program(&self, program: u32) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear_color(&self, color: [f32; 4]) {
        self.record(Call::ClearColor(color));
    }

    fn clear(&self) {
        self.record(Call::Clear);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles(first, count));
    }
}
