//! Program Author: sshmatrix, for Antitoken
//! Program Description: Vote program's state enumeration
//! Version: 0.1.0
//! License: MIT
//! Created: 17 Oct 2026
//! Last Modified: 17 Oct 2026
//! Repository: https://github.com/antitokens/solana-collider
//! Contact: dev@antitoken.pro

// state.rs
use crate::utils::VoteError;
use anchor_lang::prelude::*;

/// Voting state for a single URL, stored at the URL's derived address.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct VoteState {
    pub score: i64,       // Upvotes minus downvotes
    pub total_votes: u64, // Upvotes plus downvotes
    pub created_at: i64,  // Unix timestamp at initialisation
    pub bump: u8,         // Bump of the derived address
}

impl VoteState {
    pub const LEN: usize = 8 // Discriminator
        + VoteState::INIT_SPACE;

    pub fn new(created_at: i64, bump: u8) -> Self {
        Self {
            score: 0,
            total_votes: 0,
            created_at,
            bump,
        }
    }

    /// Returns the state after one vote in `direction`.
    ///
    /// Both counters are computed before anything is returned, so a failed
    /// vote leaves no partial update behind.
    pub fn apply(&self, direction: VoteDirection) -> Result<VoteState> {
        let total_votes = self
            .total_votes
            .checked_add(1)
            .ok_or(VoteError::CounterOverflow)?;

        let score = match direction {
            VoteDirection::Up => self.score.checked_add(1).ok_or(VoteError::ScoreOverflow)?,
            VoteDirection::Down => self
                .score
                .checked_sub(1)
                .ok_or(VoteError::ScoreUnderflow)?,
        };

        Ok(VoteState {
            score,
            total_votes,
            ..self.clone()
        })
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}
