//! Program Author: sshmatrix, for Antitoken
//! Program Description: Vote program's initialisation
//! Version: 0.1.0
//! License: MIT
//! Created: 17 Oct 2026
//! Last Modified: 17 Oct 2026
//! Repository: https://github.com/antitokens/solana-collider
//! Contact: dev@antitoken.pro

use crate::state::VoteState;
use crate::store::{AccountStore, VoteStore};
use crate::utils::*;
use crate::Initialize;
use anchor_lang::prelude::*;

pub fn initialize(ctx: Context<Initialize>, url: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let payer = ctx.accounts.payer.key();
    let vote_account = ctx.accounts.vote_account.key();

    let mut store = AccountStore::new(ctx.program_id, ctx.accounts.vote_account.to_account_info())
        .with_funding(
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        );
    let state =
        initialize_vote_state(&mut store, ctx.program_id, &url, &payer, &vote_account, now)?;

    msg!(
        "Vote account {} created for {} at {}",
        vote_account,
        url,
        format_timestamp(state.created_at)
    );
    emit!(VoteAccountCreated {
        url,
        vote_account,
        payer,
        created_at: state.created_at,
    });

    Ok(())
}

/// Creates the zeroed vote record for `url` at `vote_account`.
///
/// `vote_account` must be the address derived from `url`, and `now` becomes
/// the immutable creation time.
pub fn initialize_vote_state<S: VoteStore>(
    store: &mut S,
    program_id: &Pubkey,
    url: &str,
    payer: &Pubkey,
    vote_account: &Pubkey,
    now: i64,
) -> Result<VoteState> {
    validate_url(url)?;
    require_keys_neq!(*payer, *vote_account, VoteError::InvalidPayer);
    require!(now > 0, VoteError::InvalidTimestamp);

    let (address, bump) = derive_vote_address(url.as_bytes(), program_id)?;
    require_keys_eq!(address, *vote_account, VoteError::AccountMismatch);

    let state = VoteState::new(now, bump);
    store.create(payer, &address, &[url.as_bytes(), &[bump]], &state)?;

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const URL: &str = "https://example.com";
    const NOW: i64 = 1736899200;

    struct Setup {
        program_id: Pubkey,
        payer: Pubkey,
        store: MemoryStore,
    }

    impl Setup {
        fn new() -> Self {
            let program_id = Pubkey::new_unique();
            Self {
                program_id,
                payer: Pubkey::new_unique(),
                store: MemoryStore::new(program_id),
            }
        }

        fn address(&self, url: &str) -> Pubkey {
            Pubkey::find_program_address(&[url.as_bytes()], &self.program_id).0
        }

        fn initialize(&mut self, url: &str, now: i64) -> Result<VoteState> {
            let vote_account = self.address(url);
            initialize_vote_state(
                &mut self.store,
                &self.program_id,
                url,
                &self.payer,
                &vote_account,
                now,
            )
        }
    }

    #[test]
    fn test_successful_initialisation() {
        let mut setup = Setup::new();
        let (address, bump) = Pubkey::find_program_address(&[URL.as_bytes()], &setup.program_id);

        let state = setup.initialize(URL, NOW).unwrap();

        assert_eq!(state.score, 0);
        assert_eq!(state.total_votes, 0);
        assert!(state.created_at > 0);
        assert_eq!(state.created_at, NOW);
        assert_eq!(state.bump, bump);
        assert_eq!(setup.store.load(&address).unwrap(), Some(state));
        assert!(setup.store.rent_paid(&setup.payer) > 0);
    }

    #[test]
    fn test_double_initialisation() {
        let mut setup = Setup::new();
        setup.initialize(URL, NOW).unwrap();

        let result = setup.initialize(URL, NOW + 60);

        assert_eq!(
            result.unwrap_err(),
            Error::from(VoteError::AccountAlreadyInitialized)
        );
        let stored = setup.store.load(&setup.address(URL)).unwrap().unwrap();
        assert_eq!(stored.created_at, NOW);
        assert_eq!(setup.store.len(), 1);
    }

    #[test]
    fn test_empty_url() {
        let mut setup = Setup::new();

        let result = setup.initialize("", NOW);

        assert_eq!(result.unwrap_err(), Error::from(VoteError::InvalidUrl));
        assert!(setup.store.is_empty());
    }

    #[test]
    fn test_url_too_long() {
        let mut setup = Setup::new();
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let vote_account = Pubkey::new_unique();

        let result = initialize_vote_state(
            &mut setup.store,
            &setup.program_id,
            &url,
            &setup.payer,
            &vote_account,
            NOW,
        );

        assert_eq!(result.unwrap_err(), Error::from(VoteError::InvalidUrl));
        assert!(setup.store.is_empty());
    }

    #[test]
    fn test_mismatched_vote_account() {
        let mut setup = Setup::new();
        let other = setup.address("https://another-example.com");

        let result = initialize_vote_state(
            &mut setup.store,
            &setup.program_id,
            URL,
            &setup.payer,
            &other,
            NOW,
        );

        assert_eq!(result.unwrap_err(), Error::from(VoteError::AccountMismatch));
        assert!(setup.store.is_empty());
    }

    #[test]
    fn test_payer_is_vote_account() {
        let mut setup = Setup::new();
        let vote_account = setup.address(URL);

        let result = initialize_vote_state(
            &mut setup.store,
            &setup.program_id,
            URL,
            &vote_account,
            &vote_account,
            NOW,
        );

        assert_eq!(result.unwrap_err(), Error::from(VoteError::InvalidPayer));
    }

    #[test]
    fn test_non_positive_timestamp() {
        let mut setup = Setup::new();

        assert_eq!(
            setup.initialize(URL, 0).unwrap_err(),
            Error::from(VoteError::InvalidTimestamp)
        );
        assert_eq!(
            setup.initialize(URL, -1).unwrap_err(),
            Error::from(VoteError::InvalidTimestamp)
        );
        assert!(setup.store.is_empty());
    }

    #[test]
    fn test_independent_urls() {
        let mut setup = Setup::new();
        setup.initialize(URL, NOW).unwrap();
        setup.initialize("https://another-example.com", NOW).unwrap();

        assert_eq!(setup.store.len(), 2);
        assert_ne!(setup.address(URL), setup.address("https://another-example.com"));
    }
}
