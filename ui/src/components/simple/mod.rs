mod button;
mod spinner;

pub use button::*;
pub use spinner::*;
