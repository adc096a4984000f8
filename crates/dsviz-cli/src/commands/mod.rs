pub mod demo;
pub mod play;
pub mod print;
pub mod trace;
