//! Program Author: sshmatrix, for Antitoken
//! Program Description: Vote program's account storage
//! Version: 0.1.0
//! License: MIT
//! Created: 17 Oct 2026
//! Last Modified: 17 Oct 2026
//! Repository: https://github.com/antitokens/solana-collider
//! Contact: dev@antitoken.pro

// store.rs
use crate::state::VoteState;
use crate::utils::VoteError;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use std::collections::BTreeMap;

/// Storage of vote records keyed by derived address.
///
/// Handlers only read and write records through this interface, so the same
/// transition logic runs against on-chain accounts and against
/// [`MemoryStore`].
pub trait VoteStore {
    /// Returns the record at `address`, or `None` if the program owns nothing there.
    fn load(&self, address: &Pubkey) -> Result<Option<VoteState>>;

    /// Creates the record at `address`, funded by `payer`. `seeds` must
    /// reproduce `address`. Fails if a record already exists.
    fn create(
        &mut self,
        payer: &Pubkey,
        address: &Pubkey,
        seeds: &[&[u8]],
        state: &VoteState,
    ) -> Result<()>;

    /// Overwrites an existing record.
    fn store(&mut self, address: &Pubkey, state: &VoteState) -> Result<()>;
}

// Accounts needed to fund and allocate a new vote account
pub struct Funding<'info> {
    pub payer: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

/// [`VoteStore`] over the vote account passed to the instruction.
pub struct AccountStore<'info> {
    program_id: Pubkey,
    vote_account: AccountInfo<'info>,
    funding: Option<Funding<'info>>,
}

impl<'info> AccountStore<'info> {
    pub fn new(program_id: &Pubkey, vote_account: AccountInfo<'info>) -> Self {
        Self {
            program_id: *program_id,
            vote_account,
            funding: None,
        }
    }

    pub fn with_funding(
        mut self,
        payer: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
    ) -> Self {
        self.funding = Some(Funding {
            payer,
            system_program,
        });
        self
    }

    fn check_address(&self, address: &Pubkey) -> Result<()> {
        require_keys_eq!(*self.vote_account.key, *address, VoteError::AccountMismatch);
        Ok(())
    }

    fn is_initialised(&self) -> bool {
        self.vote_account.owner == &self.program_id && !self.vote_account.data_is_empty()
    }

    fn write(&self, state: &VoteState) -> Result<()> {
        let mut data = self.vote_account.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        state.try_serialize(&mut writer)
    }

    // Funds, allocates and assigns the vote account to this program
    fn allocate(&self, funding: &Funding<'info>, seeds: &[&[u8]]) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[seeds];
        let required = Rent::get()?.minimum_balance(VoteState::LEN);
        let current = self.vote_account.lamports();

        if current == 0 {
            return create_account(
                CpiContext::new_with_signer(
                    funding.system_program.clone(),
                    CreateAccount {
                        from: funding.payer.clone(),
                        to: self.vote_account.clone(),
                    },
                    signer_seeds,
                ),
                required,
                VoteState::LEN as u64,
                &self.program_id,
            );
        }

        // Someone already sent lamports to the address, so top it up instead
        let shortfall = required.saturating_sub(current);
        if shortfall > 0 {
            transfer(
                CpiContext::new(
                    funding.system_program.clone(),
                    Transfer {
                        from: funding.payer.clone(),
                        to: self.vote_account.clone(),
                    },
                ),
                shortfall,
            )?;
        }
        allocate(
            CpiContext::new_with_signer(
                funding.system_program.clone(),
                Allocate {
                    account_to_allocate: self.vote_account.clone(),
                },
                signer_seeds,
            ),
            VoteState::LEN as u64,
        )?;
        assign(
            CpiContext::new_with_signer(
                funding.system_program.clone(),
                Assign {
                    account_to_assign: self.vote_account.clone(),
                },
                signer_seeds,
            ),
            &self.program_id,
        )
    }
}

impl<'info> VoteStore for AccountStore<'info> {
    fn load(&self, address: &Pubkey) -> Result<Option<VoteState>> {
        self.check_address(address)?;
        if !self.is_initialised() {
            return Ok(None);
        }

        let data = self.vote_account.try_borrow_data()?;
        let mut bytes: &[u8] = &data;
        VoteState::try_deserialize(&mut bytes).map(Some)
    }

    fn create(
        &mut self,
        payer: &Pubkey,
        address: &Pubkey,
        seeds: &[&[u8]],
        state: &VoteState,
    ) -> Result<()> {
        self.check_address(address)?;
        if self.is_initialised() {
            return err!(VoteError::AccountAlreadyInitialized);
        }

        let funding = self
            .funding
            .as_ref()
            .ok_or_else(|| error!(anchor_lang::error::ErrorCode::AccountNotEnoughKeys))?;
        require_keys_eq!(*funding.payer.key, *payer, VoteError::InvalidPayer);

        self.allocate(funding, seeds)?;
        self.write(state)
    }

    fn store(&mut self, address: &Pubkey, state: &VoteState) -> Result<()> {
        self.check_address(address)?;
        require!(self.is_initialised(), VoteError::AccountNotFound);
        self.write(state)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredAccount {
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
}

/// In-memory [`VoteStore`] holding the same bytes the chain would.
///
/// `transact` gives the all-or-nothing behaviour of a transaction: writes
/// made by a failing closure are discarded.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    program_id: Pubkey,
    rent: Rent,
    accounts: BTreeMap<Pubkey, StoredAccount>,
    rent_paid: BTreeMap<Pubkey, u64>,
}

impl MemoryStore {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            rent: Rent::default(),
            accounts: BTreeMap::new(),
            rent_paid: BTreeMap::new(),
        }
    }

    pub fn account(&self, address: &Pubkey) -> Option<&StoredAccount> {
        self.accounts.get(address)
    }

    // Total lamports debited from `payer` for account rent
    pub fn rent_paid(&self, payer: &Pubkey) -> u64 {
        self.rent_paid.get(payer).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn transact<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let accounts = self.accounts.clone();
        let rent_paid = self.rent_paid.clone();

        let result = f(self);
        if result.is_err() {
            self.accounts = accounts;
            self.rent_paid = rent_paid;
        }
        result
    }
}

fn serialize(state: &VoteState) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(VoteState::LEN);
    state.try_serialize(&mut data)?;
    Ok(data)
}

impl VoteStore for MemoryStore {
    fn load(&self, address: &Pubkey) -> Result<Option<VoteState>> {
        match self.accounts.get(address) {
            Some(account) if account.owner == self.program_id => {
                let mut bytes = account.data.as_slice();
                VoteState::try_deserialize(&mut bytes).map(Some)
            }
            _ => Ok(None),
        }
    }

    fn create(
        &mut self,
        payer: &Pubkey,
        address: &Pubkey,
        seeds: &[&[u8]],
        state: &VoteState,
    ) -> Result<()> {
        require_keys_neq!(*payer, *address, VoteError::InvalidPayer);

        let derived = Pubkey::create_program_address(seeds, &self.program_id)
            .map_err(|_| error!(VoteError::AccountMismatch))?;
        require_keys_eq!(derived, *address, VoteError::AccountMismatch);

        if self.load(address)?.is_some() {
            return err!(VoteError::AccountAlreadyInitialized);
        }

        let lamports = self.rent.minimum_balance(VoteState::LEN);
        let account = StoredAccount {
            owner: self.program_id,
            lamports,
            data: serialize(state)?,
        };
        self.accounts.insert(*address, account);
        *self.rent_paid.entry(*payer).or_default() += lamports;

        Ok(())
    }

    fn store(&mut self, address: &Pubkey, state: &VoteState) -> Result<()> {
        let program_id = self.program_id;
        let account = self
            .accounts
            .get_mut(address)
            .filter(|account| account.owner == program_id)
            .ok_or(VoteError::AccountNotFound)?;
        account.data = serialize(state)?;
        Ok(())
    }
}
