mod list;
mod render;

pub use list::{run_list, ListOptions};
pub use render::run_render;
