use crate::core::models::{
    answer::{Answer, Insert as AnswerInsert},
    question::{Question, QuestionStatus},
    user::{PointsPatch, User},
    vote::{Subject, VotePatch, VoteRecord},
};
use crate::error::Error;

pub trait QuestionCommon {
    async fn get(&mut self, question_id: &str) -> Result<Question, Error>;
    async fn update_status(&mut self, question_id: &str, status: QuestionStatus) -> Result<(), Error>;
}

pub trait VoteCommon {
    async fn get_vote(&mut self, subject: &Subject, username: &str) -> Result<Option<VoteRecord>, Error>;
    async fn update_vote(&mut self, subject: &Subject, username: &str, patch: VotePatch) -> Result<(), Error>;
}

pub trait AnswerCommon {
    async fn query(&mut self, question_id: &str) -> Result<Vec<Answer>, Error>;
    async fn insert(&mut self, question_id: &str, answer: AnswerInsert) -> Result<Answer, Error>;
    async fn accept(&mut self, question_id: &str, answer_id: &str) -> Result<(), Error>;

    async fn get(&mut self, question_id: &str, answer_id: &str) -> Result<Answer, Error> {
        self.query(question_id)
            .await?
            .into_iter()
            .find(|a| a.answer_id == answer_id)
            .ok_or_else(|| Error::NotFound(format!("answer {}", answer_id)))
    }
}

pub trait UserCommon {
    async fn get(&mut self, username: &str) -> Result<User, Error>;
    async fn update_points(&mut self, username: &str, patch: PointsPatch) -> Result<(), Error>;
}

pub trait Common: QuestionCommon + VoteCommon + AnswerCommon + UserCommon {}

impl<T> Common for T where T: QuestionCommon + VoteCommon + AnswerCommon + UserCommon {}

pub trait Store: Common {}

impl<T> Store for T where T: Common {}
