//! User account entities.

pub mod model;
pub mod role;

pub use model::UserAccount;
pub use role::UserRole;
