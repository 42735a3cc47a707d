pub mod display;
pub mod price;
pub mod reference;

pub use display::*;
pub use price::*;
pub use reference::*;
