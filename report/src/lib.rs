pub mod names;
pub mod order;
pub mod page;
pub mod reputation;
pub mod status;
