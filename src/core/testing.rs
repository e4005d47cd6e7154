use crate::core::models::{
    answer::{Answer, Insert as AnswerInsert},
    question::{Question, QuestionStatus},
    user::{PointsPatch, User},
    vote::{Operation, Subject, VoteDirection, VotePatch, VoteRecord},
};
use crate::core::ports::repository::{AnswerCommon, QuestionCommon, UserCommon, VoteCommon};
use crate::error::Error;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct FakeState {
    questions: HashMap<String, Question>,
    answers: HashMap<String, Vec<Answer>>,
    users: HashMap<String, i64>,
    votes: HashMap<(Subject, String), VoteDirection>,
    tallies: HashMap<Subject, (u32, u32)>,
    status_patches: Vec<(String, QuestionStatus)>,
    fail_votes: bool,
    fail_status: bool,
    slow: bool,
}

/// In-memory stand-in for the remote API. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn add_question(&self, question_id: &str, creator: &str) {
        self.put_question(Question {
            question_id: question_id.into(),
            creator: creator.into(),
            ..Default::default()
        });
    }

    pub fn put_question(&self, question: Question) {
        self.state().questions.insert(question.question_id.clone(), question);
    }

    pub fn remove_question(&self, question_id: &str) {
        self.state().questions.remove(question_id);
    }

    pub fn question(&self, question_id: &str) -> Question {
        self.state().questions[question_id].clone()
    }

    pub fn add_answer(&self, question_id: &str, answer_id: &str, creator: &str) {
        self.state().answers.entry(question_id.into()).or_default().push(Answer {
            answer_id: answer_id.into(),
            creator: creator.into(),
            ..Default::default()
        });
    }

    pub fn add_user(&self, username: &str, points: i64) {
        self.state().users.insert(username.into(), points);
    }

    pub fn points(&self, username: &str) -> i64 {
        self.state().users.get(username).copied().unwrap_or_default()
    }

    pub fn tally(&self, subject: &Subject) -> (u32, u32) {
        self.state().tallies.get(subject).copied().unwrap_or_default()
    }

    pub fn status_patches(&self) -> Vec<(String, QuestionStatus)> {
        self.state().status_patches.clone()
    }

    pub fn fail_votes(&self, fail: bool) {
        self.state().fail_votes = fail;
    }

    pub fn fail_status(&self, fail: bool) {
        self.state().fail_status = fail;
    }

    /// Makes question reads and status writes yield to other tasks first.
    pub fn slow(&self, slow: bool) {
        self.state().slow = slow;
    }

    async fn pause(&self) {
        let slow = self.state().slow;
        if slow {
            tokio::task::yield_now().await;
        }
    }
}

impl QuestionCommon for FakeApi {
    async fn get(&mut self, question_id: &str) -> Result<Question, Error> {
        self.pause().await;
        self.state()
            .questions
            .get(question_id)
            .cloned()
            .ok_or_else(|| Error::api(404, "question not found"))
    }

    async fn update_status(&mut self, question_id: &str, status: QuestionStatus) -> Result<(), Error> {
        self.pause().await;
        let mut state = self.state();
        if state.fail_status {
            return Err(Error::api(500, "status update failed"));
        }
        state.status_patches.push((question_id.into(), status));
        if let Some(q) = state.questions.get_mut(question_id) {
            q.status = status;
        }
        Ok(())
    }
}

impl VoteCommon for FakeApi {
    async fn get_vote(&mut self, subject: &Subject, username: &str) -> Result<Option<VoteRecord>, Error> {
        Ok(self
            .state()
            .votes
            .get(&(subject.clone(), username.to_owned()))
            .map(|target| VoteRecord { target: *target }))
    }

    async fn update_vote(&mut self, subject: &Subject, username: &str, patch: VotePatch) -> Result<(), Error> {
        let mut guard = self.state();
        let state = &mut *guard;
        if state.fail_votes {
            return Err(Error::api(503, "vote update failed"));
        }
        let key = (subject.clone(), username.to_owned());
        let tally = state.tallies.entry(subject.clone()).or_default();
        let counter = match patch.target {
            VoteDirection::Up => &mut tally.0,
            VoteDirection::Down => &mut tally.1,
        };
        match patch.operation {
            Operation::Increment => {
                *counter += 1;
                state.votes.insert(key, patch.target);
            }
            Operation::Decrement => {
                *counter = counter.saturating_sub(1);
                state.votes.remove(&key);
            }
        }
        Ok(())
    }
}

impl AnswerCommon for FakeApi {
    async fn query(&mut self, question_id: &str) -> Result<Vec<Answer>, Error> {
        Ok(self.state().answers.get(question_id).cloned().unwrap_or_default())
    }

    async fn insert(&mut self, question_id: &str, answer: AnswerInsert) -> Result<Answer, Error> {
        let mut state = self.state();
        let answers = state.answers.entry(question_id.into()).or_default();
        let created = Answer {
            answer_id: format!("a{}", answers.len() + 1),
            creator: answer.creator,
            text: answer.text,
            ..Default::default()
        };
        answers.push(created.clone());
        Ok(created)
    }

    async fn accept(&mut self, question_id: &str, answer_id: &str) -> Result<(), Error> {
        let mut state = self.state();
        let answer = state
            .answers
            .get_mut(question_id)
            .and_then(|answers| answers.iter_mut().find(|a| a.answer_id == answer_id))
            .ok_or_else(|| Error::api(404, "answer not found"))?;
        answer.accepted = true;
        if let Some(q) = state.questions.get_mut(question_id) {
            q.has_accepted_answer = true;
        }
        Ok(())
    }
}

impl UserCommon for FakeApi {
    async fn get(&mut self, username: &str) -> Result<User, Error> {
        let points = *self.state().users.get(username).ok_or_else(|| Error::api(404, "user not found"))?;
        Ok(User {
            username: username.into(),
            points,
            ..Default::default()
        })
    }

    async fn update_points(&mut self, username: &str, patch: PointsPatch) -> Result<(), Error> {
        let mut state = self.state();
        let points = state.users.entry(username.into()).or_default();
        match patch.operation {
            Operation::Increment => *points += patch.amount as i64,
            Operation::Decrement => *points -= patch.amount as i64,
        }
        Ok(())
    }
}
