//! nestegg-domain
//!
//! Pure domain models for the household ledger (transactions, budgets,
//! savings goals, mortgage, superannuation, insurance, profile).
//! No I/O, no storage. Only data types and core enums.

pub mod budget;
pub mod goal;
pub mod id;
pub mod insurance;
pub mod ledger;
pub mod mortgage;
pub mod profile;
pub mod superannuation;
pub mod transaction;

pub use budget::*;
pub use goal::*;
pub use id::*;
pub use insurance::*;
pub use ledger::*;
pub use mortgage::*;
pub use profile::*;
pub use superannuation::*;
pub use transaction::*;
