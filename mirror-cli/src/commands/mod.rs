//! CLI command implementations

pub mod branches;
pub mod checkout;
pub mod mirror;

pub use branches::BranchesArgs;
pub use checkout::CheckoutArgs;
pub use mirror::MirrorArgs;
