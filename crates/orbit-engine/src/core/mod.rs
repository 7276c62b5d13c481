pub mod time;
pub mod scene;
pub mod render_loop;
