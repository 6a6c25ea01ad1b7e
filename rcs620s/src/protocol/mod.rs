//! Frame codec and command/response encoding for the RC-S620/S protocol.

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::dcs;
pub use commands::Command;
pub use frame::Frame;
pub use responses::Response;
