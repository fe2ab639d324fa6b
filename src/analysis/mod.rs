pub mod analysis;
pub mod draws;
pub mod outs;
pub mod report;
pub mod request;
pub mod texture;

pub use analysis::*;
pub use draws::*;
pub use outs::*;
pub use report::*;
pub use request::*;
pub use texture::*;
