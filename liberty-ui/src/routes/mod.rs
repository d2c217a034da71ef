mod transfer;
pub use transfer::*;

mod deposit;
pub use deposit::*;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// ETH to GETH, a plain value transfer
    #[default]
    Transfer,
    /// GETH to ETH through the bridge contract
    Deposit,
}
