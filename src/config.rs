/// Fixed startup parameters for the window and GL context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    /// Requested (major, minor) OpenGL version, core profile.
    pub gl_version: (u8, u8),
}

impl Config {
    pub const DEFAULT: Config = Config {
        title: "OpenGL Triangle",
        width: 1280,
        height: 720,
        gl_version: (3, 3),
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
