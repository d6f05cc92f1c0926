mod action;
mod definition;
mod dictionary;
mod event;
mod outcome;

pub use action::*;
pub use definition::*;
pub use dictionary::*;
pub use event::*;
pub use outcome::*;
