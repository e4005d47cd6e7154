use crate::core::models::vote::Operation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub points: i64,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub username: String,
    pub points: i64,
    pub level: u8,
}

/// Body of `PATCH /users/{username}/points`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsPatch {
    pub operation: Operation,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsChange {
    pub username: String,
    pub delta: i64,
}

impl PointsChange {
    pub fn new(username: impl Into<String>, delta: i64) -> Self {
        Self { username: username.into(), delta }
    }

    pub fn patch(&self) -> PointsPatch {
        PointsPatch {
            operation: if self.delta < 0 { Operation::Decrement } else { Operation::Increment },
            amount: self.delta.unsigned_abs() as u32,
        }
    }
}

pub fn level(points: i64) -> u8 {
    match points {
        p if p < 15 => 1,
        p if p < 50 => 2,
        p if p < 125 => 3,
        p if p < 1000 => 4,
        p if p < 3000 => 5,
        p if p < 10000 => 6,
        _ => 7,
    }
}
