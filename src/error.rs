use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// `pop` or `peek` on a stack holding no elements.
    #[error("container is empty")]
    EmptyContainer,

    #[error("invalid capacity {capacity}: must be greater than zero")]
    InvalidCapacity { capacity: usize },
}
