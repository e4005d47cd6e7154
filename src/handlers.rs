pub mod answer;
pub mod bounty;
pub mod question;
pub mod user;
pub mod vote;

use crate::actix_web::web::Data;
use crate::impls::ledger::memory::MemoryLedger;
use crate::impls::repository::qoverflow::QOverflow;

pub type Api = Data<QOverflow>;
pub type Books = Data<MemoryLedger>;
