pub mod answer;
pub mod bounty;
pub mod question;
pub mod status;
pub mod user;
pub mod vote;
