pub mod answer;
pub mod bounty;
pub mod question;
pub mod user;
pub mod vote;
