pub mod homepage;
pub mod layout;

pub use layout::page;
