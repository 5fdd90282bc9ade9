
use crate::{SealedBidAuction, SealedBidAuctionClient};
use nft::{MockNft, MockNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, BytesN, Env,
};

pub const TOKEN_ID: u32 = 7;
pub const INITIAL_BALANCE: i128 = 1_000;
pub const RESERVE_PRICE: i128 = 1;

pub const NOW: u64 = 1_000;
pub const START_TIME: u64 = 1_100;
pub const BID_PERIOD: u64 = 3_600;
pub const REVEAL_PERIOD: u64 = 3_600;
pub const END_OF_BIDDING: u64 = START_TIME + BID_PERIOD;
pub const END_OF_REVEAL: u64 = END_OF_BIDDING + REVEAL_PERIOD;

pub struct Setup {
    pub env: Env,
    pub client: SealedBidAuctionClient<'static>,
    pub seller: Address,
    pub alice: Address,
    pub bob: Address,
    pub carol: Address,
    pub nft: MockNftClient<'static>,
    pub token: token::TokenClient<'static>,
}

pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let contract_id = env.register(SealedBidAuction, ());
    let client = SealedBidAuctionClient::new(&env, &contract_id);

    let seller = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);

    let nft_id = env.register(MockNft, ());
    let nft = MockNftClient::new(&env, &nft_id);
    nft.mint(&seller, &TOKEN_ID);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&alice, &INITIAL_BALANCE);
    token_admin_client.mint(&bob, &INITIAL_BALANCE);
    token_admin_client.mint(&carol, &INITIAL_BALANCE);

    Setup {
        env,
        client,
        seller,
        alice,
        bob,
        carol,
        nft,
        token: token_client,
    }
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().set_timestamp(timestamp);
}

/// Opens the default auction: seller, reserve 1, bidding from `START_TIME`.
pub fn create_auction(s: &Setup) -> u64 {
    create_auction_from(s, &s.seller, START_TIME)
}

pub fn create_auction_from(s: &Setup, seller: &Address, start_time: u64) -> u64 {
    s.client.create_auction(
        seller,
        &s.nft.address,
        &TOKEN_ID,
        &s.token.address,
        &start_time,
        &BID_PERIOD,
        &REVEAL_PERIOD,
        &RESERVE_PRICE,
    )
}

pub fn nonce(env: &Env, seed: u8) -> BytesN<32> {
    BytesN::from_array(env, &[seed; 32])
}

pub fn commitment_for(s: &Setup, bid_value: i128, seed: u8) -> BytesN<32> {
    let index = s.client.get_latest_index(&s.nft.address, &TOKEN_ID);
    s.client.compute_commitment(
        &nonce(&s.env, seed),
        &bid_value,
        &s.nft.address,
        &TOKEN_ID,
        &index,
    )
}

pub fn commit(s: &Setup, bidder: &Address, bid_value: i128, seed: u8, collateral: i128) {
    let commitment = commitment_for(s, bid_value, seed);
    s.client
        .commit_bid(bidder, &s.nft.address, &TOKEN_ID, &commitment, &collateral);
}

pub fn reveal(s: &Setup, bidder: &Address, bid_value: i128, seed: u8) {
    s.client
        .reveal_bid(bidder, &s.nft.address, &TOKEN_ID, &bid_value, &nonce(&s.env, seed));
}
