pub mod error;
pub mod use_cases;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AuthError;
pub use use_cases::{
    get_user::GetUserUseCase, login::LoginUseCase, register::RegisterUseCase,
};
pub use workflow::{AuthWorkflow, DEFAULT_STORE_TIMEOUT, WorkflowConfig};
