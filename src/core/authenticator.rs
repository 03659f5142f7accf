pub mod login_error;

pub use login_error::{LoginError, LoginResult};
