//! Program Author: sshmatrix, for Antitoken
//! Program Description: Vote program's utils
//! Version: 0.1.0
//! License: MIT
//! Created: 17 Oct 2026
//! Last Modified: 17 Oct 2026
//! Repository: https://github.com/antitokens/solana-collider
//! Contact: dev@antitoken.pro

// utils.rs
use crate::state::VoteDirection;
use anchor_lang::prelude::*;
use chrono::{DateTime, Utc};
use solana_program::pubkey::MAX_SEED_LEN;

pub const MAX_URL_LENGTH: usize = MAX_SEED_LEN; // URL is the only seed
pub const BUMP_SEARCH_START: u8 = u8::MAX; // Bumps are tried 255 -> 0

#[error_code]
pub enum VoteError {
    #[msg("URL cannot be empty or longer than 32 bytes")]
    InvalidUrl,
    #[msg("Vote account already initialised")]
    AccountAlreadyInitialized,
    #[msg("Account does not exist")]
    AccountNotFound,
    #[msg("Vote account does not match the URL")]
    AccountMismatch,
    #[msg("No valid bump found for the URL")]
    DerivationExhausted,
    #[msg("Total vote counter overflow")]
    CounterOverflow,
    #[msg("Score overflow")]
    ScoreOverflow,
    #[msg("Score underflow")]
    ScoreUnderflow,
    #[msg("Payer cannot be the vote account")]
    InvalidPayer,
    #[msg("Clock timestamp must be positive")]
    InvalidTimestamp,
}

// Event emitted when a vote account is created
#[event]
pub struct VoteAccountCreated {
    pub url: String,
    pub vote_account: Pubkey,
    pub payer: Pubkey,
    pub created_at: i64,
}

// Event emitted when a vote is cast
#[event]
pub struct VoteCast {
    pub url: String,
    pub vote_account: Pubkey,
    pub direction: VoteDirection,
    pub new_score: i64,
    pub total_votes: u64,
}

/// Rejects empty URLs and URLs that do not fit in a single seed.
pub fn validate_url(url: &str) -> Result<()> {
    require!(!url.is_empty(), VoteError::InvalidUrl);
    require!(url.len() <= MAX_URL_LENGTH, VoteError::InvalidUrl);
    Ok(())
}

/// Derives the vote account address for `url` under `program_id`.
///
/// The raw URL bytes are the only seed. Returns the first bump, counting
/// down from 255, whose address is off the ed25519 curve. Empty input is
/// accepted here; handlers reject it before deriving.
pub fn derive_vote_address(url: &[u8], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    require!(url.len() <= MAX_SEED_LEN, VoteError::InvalidUrl);
    find_bump(|bump| Pubkey::create_program_address(&[url, &[bump]], program_id).ok())
}

/// Bounded bump search. `candidate` maps a bump to an address, or `None` if
/// that bump lands on the curve.
pub fn find_bump<F>(mut candidate: F) -> Result<(Pubkey, u8)>
where
    F: FnMut(u8) -> Option<Pubkey>,
{
    for bump in (0..=BUMP_SEARCH_START).rev() {
        if let Some(address) = candidate(bump) {
            return Ok((address, bump));
        }
    }
    err!(VoteError::DerivationExhausted)
}

// Renders a unix timestamp as ISO-8601 UTC for logs
pub fn format_timestamp(unix_timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(unix_timestamp, 0)
        .map(|time| time.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| unix_timestamp.to_string())
}
