use soroban_sdk::{contractevent, Address};

/// Event emitted when a new auction generation is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u32,
    pub index: u64,
    pub seller: Address,
    pub payment_token: Address,
    pub start_time: u64,
    pub end_of_bidding_period: u64,
    pub end_of_reveal_period: u64,
    pub reserve_price: i128,
}

/// Event emitted when a bidder commits or replaces a sealed bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidCommitted {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u32,
    pub index: u64,
    pub bidder: Address,
    pub collateral: i128,
}

/// Event emitted when a sealed bid is opened
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRevealed {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u32,
    pub index: u64,
    pub bidder: Address,
    pub bid_value: i128,
}

/// Event emitted on every custody change caused by settlement
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetTransferred {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u32,
    pub from: Address,
    pub to: Address,
}

/// Event emitted when a losing bidder reclaims collateral
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralWithdrawn {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u32,
    pub index: u64,
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an unrevealed bid's collateral goes to the seller
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidForfeited {
    #[topic]
    pub nft: Address,
    #[topic]
    pub token_id: u32,
    pub index: u64,
    pub bidder: Address,
    pub amount: i128,
}
