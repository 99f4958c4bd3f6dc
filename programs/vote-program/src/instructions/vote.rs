//! Program Author: sshmatrix, for Antitoken
//! Program Description: Vote program's upvote and downvote
//! Version: 0.1.0
//! License: MIT
//! Created: 17 Oct 2026
//! Last Modified: 17 Oct 2026
//! Repository: https://github.com/antitokens/solana-collider
//! Contact: dev@antitoken.pro

use crate::state::{VoteDirection, VoteState};
use crate::store::{AccountStore, VoteStore};
use crate::utils::*;
use crate::Vote;
use anchor_lang::prelude::*;

pub fn upvote(ctx: Context<Vote>, url: String) -> Result<()> {
    process_vote(ctx, url, VoteDirection::Up)
}

pub fn downvote(ctx: Context<Vote>, url: String) -> Result<()> {
    process_vote(ctx, url, VoteDirection::Down)
}

fn process_vote(ctx: Context<Vote>, url: String, direction: VoteDirection) -> Result<()> {
    let vote_account = ctx.accounts.vote_account.key();
    let mut store = AccountStore::new(ctx.program_id, ctx.accounts.vote_account.to_account_info());

    let state = cast_vote(&mut store, ctx.program_id, &url, &vote_account, direction)?;

    msg!(
        "{:?} for {}: score {}, total votes {}",
        direction,
        url,
        state.score,
        state.total_votes
    );
    emit!(VoteCast {
        url,
        vote_account,
        direction,
        new_score: state.score,
        total_votes: state.total_votes,
    });

    Ok(())
}

/// Applies one vote to the record for `url`.
///
/// The address is re-derived from `url` on every call and must match both
/// `vote_account` and the bump stored at creation. The new record is written
/// in a single store call.
pub fn cast_vote<S: VoteStore>(
    store: &mut S,
    program_id: &Pubkey,
    url: &str,
    vote_account: &Pubkey,
    direction: VoteDirection,
) -> Result<VoteState> {
    validate_url(url)?;

    let (address, bump) = derive_vote_address(url.as_bytes(), program_id)?;
    require_keys_eq!(address, *vote_account, VoteError::AccountMismatch);

    let current = store.load(&address)?.ok_or(VoteError::AccountNotFound)?;
    require_eq!(current.bump, bump, VoteError::AccountMismatch);

    let next = current.apply(direction)?;
    store.store(&address, &next)?;

    Ok(next)
}
