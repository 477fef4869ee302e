pub mod transport;

pub use transport::{HttpReply, Transport};
