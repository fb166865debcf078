pub mod client;
pub mod lol;
