pub mod models;
pub mod poll;
pub mod ports;
pub mod reputation;
pub mod services;
pub mod tokener;

#[cfg(test)]
pub mod testing;
