pub mod enums;
pub mod item;
pub mod task;
pub mod task_form;
pub mod task_list;

pub use enums::{Category, Focus, UiMode};
pub use item::{Board, Item, ItemId};
pub use task::{Task, TaskId};
pub use task_form::{FormField, TaskForm};
pub use task_list::{TaskList, TaskRowEvent};
