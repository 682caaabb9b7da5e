pub mod app;
pub mod bullet;
pub mod input;
pub mod render;
pub mod session;
pub mod setup;
pub mod theme;
pub mod wrap;

pub use app::run;
