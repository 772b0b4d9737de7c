mod categories;
mod contact;
mod health_check;

pub use categories::*;
pub use contact::*;
pub use health_check::*;
