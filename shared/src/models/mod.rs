pub mod catalog;
pub mod message;
pub mod settings;

pub use catalog::*;
pub use message::*;
pub use settings::*;
