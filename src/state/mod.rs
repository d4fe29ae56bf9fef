//! Application state module

mod app_state;
mod forms;
mod modal;
mod page;

pub use app_state::*;
pub use forms::*;
pub use modal::*;
pub use page::*;
