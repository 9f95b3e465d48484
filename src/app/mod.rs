pub mod render;
pub mod show;

pub use render::OutputFormat;
pub use show::show_resources;
