pub mod ledger;
pub mod repository;
