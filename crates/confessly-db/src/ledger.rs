//! Vote transition rules, kept free of storage so they can be checked alone.

use confessly_types::models::{VoteAction, VoteType};

/// Everything a vote request changes: the vote row, at most one counter
/// down and one counter up, and the author's karma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotePlan {
    pub action: VoteAction,
    pub previous: Option<VoteType>,
    pub decrement: Option<VoteType>,
    pub increment: Option<VoteType>,
    pub karma_delta: i64,
}

pub fn plan_vote(existing: Option<VoteType>, requested: VoteType) -> VotePlan {
    match existing {
        None => VotePlan {
            action: VoteAction::Added,
            previous: None,
            decrement: None,
            increment: Some(requested),
            karma_delta: requested.karma(),
        },
        Some(prev) if prev == requested => VotePlan {
            action: VoteAction::Removed,
            previous: Some(prev),
            decrement: Some(requested),
            increment: None,
            karma_delta: -requested.karma(),
        },
        Some(prev) => VotePlan {
            action: VoteAction::Changed,
            previous: Some(prev),
            decrement: Some(prev),
            increment: Some(requested),
            karma_delta: 2 * requested.karma(),
        },
    }
}
