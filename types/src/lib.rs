pub mod account;
pub mod directory;
pub mod employee;
mod error;
pub mod form;
pub mod session;

pub use account::AccountDirectory;
pub use directory::{EmployeeDirectory, StatusCounts};
pub use employee::{Employee, EmploymentStatus};
pub use error::{Error, Result};
pub use form::{EmployeeFormData, FieldErrors, FormTab};
pub use session::{Credentials, UserSession, decode_session, encode_session};

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
