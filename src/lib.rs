pub mod drop_out_stack;
pub mod error;
pub mod history;

pub use crate::drop_out_stack::{Drain, DropOutStack, IntoIter};
pub use crate::error::StackError;
