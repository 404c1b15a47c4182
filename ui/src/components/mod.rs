pub mod artists;
pub mod footer;
pub mod poster;
pub mod simple;
pub mod waitlist;

pub use artists::*;
pub use footer::*;
pub use poster::*;
pub use simple::*;
pub use waitlist::*;
