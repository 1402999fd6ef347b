mod category;
mod message;
mod product;

pub use category::*;
pub use message::*;
pub use product::*;
