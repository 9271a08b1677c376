use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("State not found: {type_name}")]
    StateNotFound { type_name: &'static str },
}

impl StateError {
    pub fn state_not_found(type_name: &'static str) -> Self {
        Self::StateNotFound { type_name }
    }
}
