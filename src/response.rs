use crate::serde::Serialize;

/// Acknowledgement in the same shape the remote API uses.
#[derive(Debug, Serialize)]
pub struct Success {
    success: bool,
}

impl Success {
    pub fn new() -> Self {
        Success { success: true }
    }
}
