use serde::{Serialize, Deserialize};

pub const VOTE_ACCEPTED_MESSAGE: &str = "Vote recorded successfully!";
pub const VOTE_REJECTED_MESSAGE: &str = "Vote failed: invalid option ID";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VotingOption {
    pub id: String,
    pub text: String,
}

impl VotingOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Point-in-time copy of one option's tally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionResult {
    pub option_id: String,
    pub option_text: String,
    pub votes: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetVotingOptionsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetVotingOptionsResponse {
    pub topic: String,
    pub options: Vec<VotingOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    #[serde(default, alias = "option_id")]
    pub option_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub success: bool,
    pub message: String,
}

impl VoteResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: VOTE_ACCEPTED_MESSAGE.into(),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: VOTE_REJECTED_MESSAGE.into(),
        }
    }
}

impl From<bool> for VoteResponse {
    fn from(recorded: bool) -> Self {
        if recorded { Self::accepted() } else { Self::rejected() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetResultsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetResultsResponse {
    pub results: Vec<OptionResult>,
}

impl GetResultsResponse {
    pub fn total_votes(&self) -> u64 {
        self.results.iter().map(|r| u64::from(r.votes)).sum()
    }
}
