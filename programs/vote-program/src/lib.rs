//! Program Author: sshmatrix, for Antitoken
//! Program Description: Vote program core
//! Version: 0.1.0
//! License: MIT
//! Created: 17 Oct 2026
//! Last Modified: 17 Oct 2026
//! Repository: https://github.com/antitokens/solana-collider
//! Contact: dev@antitoken.pro

use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod store;
pub mod utils;

declare_id!("BazyiLGuNP3L6Pmex7w1ReP3gfVisRs4Krm2qwN1bRsf");

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Vote Program",
    project_url: "https://antitoken.pro",
    contacts: "email:dev@antitoken.pro",
    policy: "Report vulnerabilities privately to dev@antitoken.pro"
}

/// Upvote/downvote scores per URL. Each URL owns one vote account at the
/// program address derived from the URL bytes.
#[program]
pub mod vote_program {
    use super::*;
    use crate::instructions::initialize;
    use crate::instructions::vote;

    pub fn initialize(ctx: Context<Initialize>, url: String) -> Result<()> {
        initialize::initialize(ctx, url)
    }

    pub fn upvote(ctx: Context<Vote>, url: String) -> Result<()> {
        vote::upvote(ctx, url)
    }

    pub fn downvote(ctx: Context<Vote>, url: String) -> Result<()> {
        vote::downvote(ctx, url)
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: Derived from the URL and created by the handler
    #[account(mut)]
    pub vote_account: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Vote<'info> {
    /// CHECK: Re-derived from the URL and deserialised by the handler
    #[account(mut)]
    pub vote_account: UncheckedAccount<'info>,
}

// Re-export common types for convenience
pub use instructions::{cast_vote, initialize_vote_state};
pub use state::{VoteDirection, VoteState};
pub use store::{AccountStore, MemoryStore, VoteStore};
pub use utils::{derive_vote_address, VoteAccountCreated, VoteCast, VoteError};
