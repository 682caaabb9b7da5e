pub mod settings;
pub mod task;
pub mod task_list;

pub use settings::*;
pub use task::*;
pub use task_list::*;
