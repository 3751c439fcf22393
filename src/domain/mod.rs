pub mod login;
pub mod price;
pub mod report;

pub use login::*;
pub use price::*;
pub use report::*;
