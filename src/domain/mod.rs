pub mod branch;
pub mod change;
pub mod repository;
pub mod summary;
