pub mod err;
pub mod trace;
