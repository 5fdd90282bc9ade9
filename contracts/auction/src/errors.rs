use soroban_sdk::contracterror;

/// Error codes for the sealed-bid auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// No auction generation exists for the asset identity or index
    AuctionNotFound = 1,
    /// No live commitment for the bidder in this generation
    BidNotFound = 2,
    /// An unsettled auction already exists for the asset identity
    AuctionAlreadyExists = 3,
    /// The current ledger time is outside the window for this operation
    TimingViolation = 4,
    /// Commitment is zero or does not match the revealed bid
    InvalidCommitment = 5,
    /// Revealed bid exceeds the escrowed collateral
    InsufficientCollateral = 6,
    /// A token or NFT transfer was rejected by the collaborator contract
    TransferFailure = 7,
    /// Caller may not perform this operation
    Unauthorized = 8,
    /// Unrevealed commitments remain
    NotReady = 9,
    /// Bid or reveal period is zero or overflows the clock
    InvalidPeriod = 10,
    /// Amount is zero or negative where a positive value is required
    InvalidAmount = 11,
    /// Bid has already been revealed
    AlreadyRevealed = 12,
    /// Auction has already been settled
    AuctionAlreadySettled = 13,
    /// Collateral of an unrevealed bid is forfeited and cannot be withdrawn
    CollateralForfeited = 14,
    /// Pagination parameters are out of range
    InvalidPagination = 15,
    /// Arithmetic overflow
    Overflow = 16,
}
