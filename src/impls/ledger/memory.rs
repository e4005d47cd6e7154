use crate::core::models::{bounty::Bounty, question::Question, question::StatusVoteKind};
use crate::core::ports::ledger::{BallotCommon, BountyCommon, PollLockCommon, SnapshotCommon};
use crate::error::Error;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{Mutex as PollMutex, OwnedMutexGuard};

#[derive(Debug, Default)]
struct State {
    snapshots: HashMap<String, Question>,
    ballots: HashSet<(String, String, StatusVoteKind)>,
    bounties: HashMap<String, Bounty>,
    polls: HashMap<String, Arc<PollMutex<()>>>,
}

/// Process-wide ledger shared by every worker. Cloning hands out another
/// handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    state: Arc<Mutex<State>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, Error> {
        self.state.lock().map_err(|_| Error::BusinessError("ledger lock poisoned".into()))
    }
}

impl SnapshotCommon for MemoryLedger {
    async fn snapshot(&mut self, question_id: &str) -> Result<Option<Question>, Error> {
        Ok(self.state()?.snapshots.get(question_id).cloned())
    }

    async fn store_snapshot(&mut self, question: Question) -> Result<(), Error> {
        self.state()?.snapshots.insert(question.question_id.clone(), question);
        Ok(())
    }

    async fn drop_snapshot(&mut self, question_id: &str) -> Result<(), Error> {
        let mut state = self.state()?;
        state.snapshots.remove(question_id);
        state.ballots.retain(|(qid, _, _)| qid != question_id);
        Ok(())
    }
}

impl BallotCommon for MemoryLedger {
    async fn has_ballot(&mut self, question_id: &str, username: &str, kind: StatusVoteKind) -> Result<bool, Error> {
        Ok(self.state()?.ballots.contains(&(question_id.to_owned(), username.to_owned(), kind)))
    }

    async fn insert_ballot(&mut self, question_id: &str, username: &str, kind: StatusVoteKind) -> Result<bool, Error> {
        Ok(self.state()?.ballots.insert((question_id.to_owned(), username.to_owned(), kind)))
    }

    async fn clear_ballots(&mut self, question_id: &str) -> Result<(), Error> {
        self.state()?.ballots.retain(|(qid, _, _)| qid != question_id);
        Ok(())
    }
}

impl PollLockCommon for MemoryLedger {
    type Guard = OwnedMutexGuard<()>;

    async fn lock_poll(&mut self, question_id: &str) -> Result<Self::Guard, Error> {
        let poll = self.state()?.polls.entry(question_id.to_owned()).or_default().clone();
        Ok(poll.lock_owned().await)
    }
}

impl BountyCommon for MemoryLedger {
    async fn get_bounty(&mut self, question_id: &str) -> Result<Option<Bounty>, Error> {
        Ok(self.state()?.bounties.get(question_id).cloned())
    }

    async fn put_bounty(&mut self, bounty: Bounty) -> Result<(), Error> {
        self.state()?.bounties.insert(bounty.question_id.clone(), bounty);
        Ok(())
    }
}
