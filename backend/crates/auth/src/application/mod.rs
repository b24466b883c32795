//! Auth Application Layer - Use Cases

pub mod sign_in;
pub mod sign_up;

pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
