use crate::types::{Auction, AuctionRef, Bid, DataKey};
use soroban_sdk::{Address, Env};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Creation Log ==========

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0)
}

/// Appends `entry` to the creation log and returns its 1-based position.
pub fn append_auction_log(env: &Env, entry: &AuctionRef) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &counter);

    let key = DataKey::AuctionLog(counter);
    env.storage().persistent().set(&key, entry);
    extend_persistent_ttl(env, &key);
    counter
}

pub fn get_auction_log(env: &Env, position: u64) -> Option<AuctionRef> {
    let key = DataKey::AuctionLog(position);
    let entry = env.storage().persistent().get::<_, AuctionRef>(&key);
    if entry.is_some() {
        extend_persistent_ttl(env, &key);
    }
    entry
}

// ========== Generations ==========

pub fn get_latest_index(env: &Env, nft: &Address, token_id: u32) -> u64 {
    let key = DataKey::LatestIndex(nft.clone(), token_id);
    let index = env.storage().persistent().get::<_, u64>(&key);
    match index {
        Some(index) => {
            extend_persistent_ttl(env, &key);
            index
        }
        None => 0,
    }
}

pub fn get_auction(env: &Env, nft: &Address, token_id: u32, index: u64) -> Option<Auction> {
    let key = DataKey::Auction(nft.clone(), token_id, index);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        extend_persistent_ttl(env, &key);
    }
    auction
}

pub fn get_latest_auction(env: &Env, nft: &Address, token_id: u32) -> Option<Auction> {
    match get_latest_index(env, nft, token_id) {
        0 => None,
        index => get_auction(env, nft, token_id, index),
    }
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.nft.clone(), auction.token_id, auction.index);
    env.storage().persistent().set(&key, auction);
    extend_persistent_ttl(env, &key);

    let latest_key = DataKey::LatestIndex(auction.nft.clone(), auction.token_id);
    if get_latest_index(env, &auction.nft, auction.token_id) < auction.index {
        env.storage().persistent().set(&latest_key, &auction.index);
        extend_persistent_ttl(env, &latest_key);
    }
}

// ========== Bids ==========

pub fn get_bid(env: &Env, nft: &Address, token_id: u32, index: u64, bidder: &Address) -> Bid {
    let key = DataKey::Bid(nft.clone(), token_id, index, bidder.clone());
    match env.storage().persistent().get::<_, Bid>(&key) {
        Some(bid) => {
            extend_persistent_ttl(env, &key);
            bid
        }
        None => Bid::empty(env),
    }
}

pub fn save_bid(env: &Env, auction: &Auction, bidder: &Address, bid: &Bid) {
    let key = DataKey::Bid(
        auction.nft.clone(),
        auction.token_id,
        auction.index,
        bidder.clone(),
    );
    env.storage().persistent().set(&key, bid);
    extend_persistent_ttl(env, &key);
}

pub fn remove_bid(env: &Env, auction: &Auction, bidder: &Address) {
    let key = DataKey::Bid(
        auction.nft.clone(),
        auction.token_id,
        auction.index,
        bidder.clone(),
    );
    env.storage().persistent().remove(&key);
}
