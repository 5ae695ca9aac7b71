pub mod txn;
pub mod txn_policy;

pub use txn::with_txn;
