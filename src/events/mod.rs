pub mod pointer;
pub mod viewport;

pub use pointer::wire_ambient_pointer;
pub use viewport::{wire_ambient_scroll, wire_resize};
