mod credentials;
mod ticket_create;
mod ticket_redeem;

pub use credentials::*;
pub use ticket_create::*;
pub use ticket_redeem::*;
