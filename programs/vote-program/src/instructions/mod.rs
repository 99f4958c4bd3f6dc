//! Program Author: sshmatrix, for Antitoken
//! Program Description: Vote program's instruction set
//! Version: 0.1.0
//! License: MIT
//! Created: 17 Oct 2026
//! Last Modified: 17 Oct 2026
//! Repository: https://github.com/antitokens/solana-collider
//! Contact: dev@antitoken.pro

// instructions/mod.rs
pub mod initialize;
pub mod vote;

// Re-export the storage-level handlers
pub use initialize::initialize_vote_state;
pub use vote::cast_vote;
