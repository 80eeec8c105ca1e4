pub mod device;
pub mod session;
pub mod token;

pub use device::{DeviceInfo, MetaDetails};
pub use session::Session;
pub use token::Token;
