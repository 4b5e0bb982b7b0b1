pub mod dice;
pub mod error;
pub mod lottery;

pub use dice::Die;
pub use lottery::TicketItem;
