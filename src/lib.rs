pub mod cga;
pub mod error;
pub mod viewer;
