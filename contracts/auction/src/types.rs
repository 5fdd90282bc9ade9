use soroban_sdk::{contracttype, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Active = 0,
    Settled = 1,
}

/// One auction generation for an asset identity `(nft, token_id)`.
///
/// A new generation is written for every auction created on the same asset;
/// older generations stay resolvable by their `index` and are never written
/// again once `status` is `Settled`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub nft: Address,
    pub token_id: u32,
    pub index: u64,
    pub payment_token: Address,
    pub seller: Address,
    pub created_at: u64,
    pub start_time: u64,
    pub end_of_bidding_period: u64,
    pub end_of_reveal_period: u64,
    pub num_unrevealed_bids: u32,
    pub reserve_price: i128,
    pub highest_bid: i128,
    pub second_highest_bid: i128,
    /// Equal to `seller` until a revealed bid clears the reserve.
    pub highest_bidder: Address,
    pub forfeited_collateral: i128,
    pub status: AuctionStatus,
}

impl Auction {
    pub fn has_winner(&self) -> bool {
        self.highest_bidder != self.seller
    }

    pub fn is_settled(&self) -> bool {
        self.status == AuctionStatus::Settled
    }

    pub fn is_bidding_open(&self, now: u64) -> bool {
        now >= self.start_time && now <= self.end_of_bidding_period
    }

    pub fn is_reveal_open(&self, now: u64) -> bool {
        now >= self.end_of_bidding_period && now < self.end_of_reveal_period
    }

    pub fn is_reveal_over(&self, now: u64) -> bool {
        now > self.end_of_reveal_period
    }

    /// Applies a revealed bid to the running top-two ranking. An equal bid
    /// never displaces the current leader.
    pub fn rank(&mut self, bidder: &Address, bid_value: i128) {
        if bid_value > self.highest_bid {
            self.second_highest_bid = self.highest_bid;
            self.highest_bid = bid_value;
            self.highest_bidder = bidder.clone();
        } else if bid_value > self.second_highest_bid {
            self.second_highest_bid = bid_value;
        }
    }
}

/// Sealed bid of one bidder in one auction generation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub commitment: BytesN<32>,
    pub collateral: i128,
    pub revealed: bool,
}

impl Bid {
    /// The zero sentinel: never committed, withdrawn or forfeited.
    pub fn empty(env: &Env) -> Self {
        Bid {
            commitment: zero_commitment(env),
            collateral: 0,
            revealed: false,
        }
    }

    pub fn is_live(&self) -> bool {
        self.commitment.to_array() != [0u8; 32]
    }
}

/// Entry of the creation log, in creation order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionRef {
    pub nft: Address,
    pub token_id: u32,
    pub index: u64,
}

#[contracttype]
pub enum DataKey {
    AuctionCounter,
    AuctionLog(u64),
    LatestIndex(Address, u32),
    Auction(Address, u32, u64),
    Bid(Address, u32, u64, Address),
}

pub fn zero_commitment(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}
