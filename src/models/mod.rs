pub mod app_user;
pub mod collection;
pub mod user;

pub use app_user::*;
pub use collection::*;
pub use user::*;
