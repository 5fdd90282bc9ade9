#![no_std]

mod commitment;
mod errors;
mod escrow;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use escrow::{NonFungibleClient, NonFungibleInterface};
pub use types::{Auction, AuctionRef, AuctionStatus, Bid};

use events::{
    AssetTransferred, AuctionCreated, BidCommitted, BidForfeited, BidRevealed,
    CollateralWithdrawn,
};
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};

/// Largest page returned by `get_auction_history`
const MAX_PAGE_SIZE: u32 = 50;

/// Sealed-bid second-price auction for non-fungible assets.
///
/// Bidders commit `sha256(nonce || bid || asset || index)` together with
/// collateral during the bidding window, open their bids during the reveal
/// window, and the highest revealed bidder wins while paying the second
/// highest bid. Every auction on the same asset is a separate generation
/// addressed by its index.
#[contract]
pub struct SealedBidAuction;

#[contractimpl]
impl SealedBidAuction {
    // ========================================================================
    // CREATION
    // ========================================================================

    /// Take custody of `token_id` and open a new auction generation for it.
    ///
    /// Bidding runs over `[start_time, start_time + bid_period]` and reveals
    /// over `[end_of_bidding_period, end_of_bidding_period + reveal_period)`.
    ///
    /// # Errors
    /// * `Error::TimingViolation` - `start_time` is not strictly in the future
    /// * `Error::InvalidPeriod` - a period is zero or the schedule overflows
    /// * `Error::InvalidAmount` - `reserve_price` is negative
    /// * `Error::AuctionAlreadyExists` - the asset has an unsettled auction
    /// * `Error::TransferFailure` - the seller could not hand over the asset
    pub fn create_auction(
        env: Env,
        seller: Address,
        nft: Address,
        token_id: u32,
        payment_token: Address,
        start_time: u64,
        bid_period: u64,
        reveal_period: u64,
        reserve_price: i128,
    ) -> Result<u64, Error> {
        seller.require_auth();
        storage::extend_instance_ttl(&env);

        let now = env.ledger().timestamp();
        if start_time <= now {
            return Err(Error::TimingViolation);
        }

        if bid_period == 0 || reveal_period == 0 {
            return Err(Error::InvalidPeriod);
        }

        if reserve_price < 0 {
            return Err(Error::InvalidAmount);
        }

        let index = match storage::get_latest_auction(&env, &nft, token_id) {
            Some(previous) if !previous.is_settled() => {
                return Err(Error::AuctionAlreadyExists);
            }
            Some(previous) => previous.index + 1,
            None => 1,
        };

        let end_of_bidding_period = start_time
            .checked_add(bid_period)
            .ok_or(Error::InvalidPeriod)?;
        let end_of_reveal_period = end_of_bidding_period
            .checked_add(reveal_period)
            .ok_or(Error::InvalidPeriod)?;

        let auction = Auction {
            nft: nft.clone(),
            token_id,
            index,
            payment_token: payment_token.clone(),
            seller: seller.clone(),
            created_at: now,
            start_time,
            end_of_bidding_period,
            end_of_reveal_period,
            num_unrevealed_bids: 0,
            reserve_price,
            highest_bid: reserve_price,
            second_highest_bid: reserve_price,
            highest_bidder: seller.clone(),
            forfeited_collateral: 0,
            status: AuctionStatus::Active,
        };

        storage::save_auction(&env, &auction);
        storage::append_auction_log(
            &env,
            &AuctionRef {
                nft: nft.clone(),
                token_id,
                index,
            },
        );

        escrow::transfer_nft(&env, &nft, &seller, &env.current_contract_address(), token_id)?;

        log!(&env, "auction created", nft, token_id, index);

        AuctionCreated {
            nft,
            token_id,
            index,
            seller,
            payment_token,
            start_time,
            end_of_bidding_period,
            end_of_reveal_period,
            reserve_price,
        }
        .publish(&env);

        Ok(index)
    }

    // ========================================================================
    // BIDDING
    // ========================================================================

    /// Commit a sealed bid backed by `collateral` of the payment token.
    ///
    /// Committing again before bidding closes replaces the commitment; the
    /// previous collateral is refunded and the new amount escrowed.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - no auction exists for the asset
    /// * `Error::TimingViolation` - outside the bidding window
    /// * `Error::InvalidCommitment` - `commitment` is all zeros
    /// * `Error::InvalidAmount` - `collateral` is not positive
    /// * `Error::Unauthorized` - the seller tried to bid
    /// * `Error::AlreadyRevealed` - the existing bid was already opened
    pub fn commit_bid(
        env: Env,
        bidder: Address,
        nft: Address,
        token_id: u32,
        commitment: BytesN<32>,
        collateral: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();
        storage::extend_instance_ttl(&env);

        let mut auction =
            storage::get_latest_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)?;

        if !auction.is_bidding_open(env.ledger().timestamp()) {
            return Err(Error::TimingViolation);
        }

        if commitment == types::zero_commitment(&env) {
            return Err(Error::InvalidCommitment);
        }

        if collateral <= 0 {
            return Err(Error::InvalidAmount);
        }

        if bidder == auction.seller {
            return Err(Error::Unauthorized);
        }

        let previous = storage::get_bid(&env, &nft, token_id, auction.index, &bidder);
        // Bidding and reveal windows share their boundary second.
        if previous.revealed {
            return Err(Error::AlreadyRevealed);
        }

        if !previous.is_live() {
            auction.num_unrevealed_bids = auction
                .num_unrevealed_bids
                .checked_add(1)
                .ok_or(Error::Overflow)?;
            storage::save_auction(&env, &auction);
        }

        storage::save_bid(
            &env,
            &auction,
            &bidder,
            &Bid {
                commitment,
                collateral,
                revealed: false,
            },
        );

        if previous.is_live() {
            escrow::release_funds(&env, &auction.payment_token, &bidder, previous.collateral)?;
        }
        escrow::lock_funds(&env, &auction.payment_token, &bidder, collateral)?;

        log!(&env, "bid committed", bidder, auction.index, collateral);

        BidCommitted {
            nft,
            token_id,
            index: auction.index,
            bidder,
            collateral,
        }
        .publish(&env);

        Ok(())
    }

    /// Open a previously committed bid.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - no auction exists for the asset
    /// * `Error::TimingViolation` - outside the reveal window
    /// * `Error::BidNotFound` - the bidder has no live commitment
    /// * `Error::AlreadyRevealed` - the bid was already opened
    /// * `Error::InvalidAmount` - `bid_value` is negative
    /// * `Error::InvalidCommitment` - `(nonce, bid_value)` does not match
    /// * `Error::InsufficientCollateral` - `bid_value` exceeds the collateral
    pub fn reveal_bid(
        env: Env,
        bidder: Address,
        nft: Address,
        token_id: u32,
        bid_value: i128,
        nonce: BytesN<32>,
    ) -> Result<(), Error> {
        bidder.require_auth();
        storage::extend_instance_ttl(&env);

        let mut auction =
            storage::get_latest_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)?;

        if !auction.is_reveal_open(env.ledger().timestamp()) {
            return Err(Error::TimingViolation);
        }

        let mut bid = storage::get_bid(&env, &nft, token_id, auction.index, &bidder);
        if !bid.is_live() {
            return Err(Error::BidNotFound);
        }

        if bid.revealed {
            return Err(Error::AlreadyRevealed);
        }

        if bid_value < 0 {
            return Err(Error::InvalidAmount);
        }

        let expected = commitment::compute(&env, &nonce, bid_value, &nft, token_id, auction.index);
        if expected != bid.commitment {
            return Err(Error::InvalidCommitment);
        }

        if bid_value > bid.collateral {
            return Err(Error::InsufficientCollateral);
        }

        bid.revealed = true;
        auction.num_unrevealed_bids = auction
            .num_unrevealed_bids
            .checked_sub(1)
            .ok_or(Error::Overflow)?;
        auction.rank(&bidder, bid_value);

        storage::save_bid(&env, &auction, &bidder, &bid);
        storage::save_auction(&env, &auction);

        log!(&env, "bid revealed", bidder, auction.index, bid_value);

        BidRevealed {
            nft,
            token_id,
            index: auction.index,
            bidder,
            bid_value,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // SETTLEMENT
    // ========================================================================

    /// Settle the current auction for the asset.
    ///
    /// With a winner, the asset goes to the highest bidder, the seller is paid
    /// the second highest bid and the winner gets back the rest of its
    /// collateral. Without one, the asset returns to the seller.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - no auction exists for the asset
    /// * `Error::AuctionAlreadySettled` - settlement already happened
    /// * `Error::TimingViolation` - the reveal window has not ended
    /// * `Error::NotReady` - some commitments are neither revealed nor forfeited;
    ///   each remaining one can be cleared with `forfeit_bid`
    pub fn end_auction(env: Env, nft: Address, token_id: u32) -> Result<(), Error> {
        storage::extend_instance_ttl(&env);

        let mut auction =
            storage::get_latest_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)?;

        if auction.is_settled() {
            return Err(Error::AuctionAlreadySettled);
        }

        if !auction.is_reveal_over(env.ledger().timestamp()) {
            return Err(Error::TimingViolation);
        }

        if auction.num_unrevealed_bids > 0 {
            return Err(Error::NotReady);
        }

        auction.status = AuctionStatus::Settled;
        storage::save_auction(&env, &auction);

        let custody = env.current_contract_address();

        if auction.has_winner() {
            let winner = auction.highest_bidder.clone();
            let winning_bid = storage::get_bid(&env, &nft, token_id, auction.index, &winner);
            let excess = winning_bid
                .collateral
                .checked_sub(auction.second_highest_bid)
                .ok_or(Error::Overflow)?;

            escrow::transfer_nft(&env, &nft, &custody, &winner, token_id)?;
            escrow::release_funds(
                &env,
                &auction.payment_token,
                &auction.seller,
                auction.second_highest_bid,
            )?;
            escrow::release_funds(&env, &auction.payment_token, &winner, excess)?;

            log!(&env, "auction settled", auction.index, winner, auction.second_highest_bid);

            AssetTransferred {
                nft,
                token_id,
                from: auction.seller,
                to: winner,
            }
            .publish(&env);
        } else {
            escrow::transfer_nft(&env, &nft, &custody, &auction.seller, token_id)?;

            log!(&env, "auction closed without sale", auction.index);

            AssetTransferred {
                nft,
                token_id,
                from: custody,
                to: auction.seller,
            }
            .publish(&env);
        }

        Ok(())
    }

    /// Return a losing bidder's collateral for generation `auction_index`.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - no such generation
    /// * `Error::TimingViolation` - the reveal window has not ended
    /// * `Error::Unauthorized` - `bidder` won that generation
    /// * `Error::BidNotFound` - nothing left to withdraw
    /// * `Error::CollateralForfeited` - the bid was never revealed
    pub fn withdraw_collateral(
        env: Env,
        bidder: Address,
        nft: Address,
        token_id: u32,
        auction_index: u64,
    ) -> Result<(), Error> {
        bidder.require_auth();
        storage::extend_instance_ttl(&env);

        let auction = storage::get_auction(&env, &nft, token_id, auction_index)
            .ok_or(Error::AuctionNotFound)?;

        if !auction.is_reveal_over(env.ledger().timestamp()) {
            return Err(Error::TimingViolation);
        }

        if bidder == auction.highest_bidder {
            return Err(Error::Unauthorized);
        }

        let bid = storage::get_bid(&env, &nft, token_id, auction_index, &bidder);
        if !bid.is_live() {
            return Err(Error::BidNotFound);
        }

        if !bid.revealed {
            return Err(Error::CollateralForfeited);
        }

        if bid.collateral <= 0 {
            return Err(Error::InvalidAmount);
        }

        storage::remove_bid(&env, &auction, &bidder);
        escrow::release_funds(&env, &auction.payment_token, &bidder, bid.collateral)?;

        log!(&env, "collateral withdrawn", bidder, auction_index, bid.collateral);

        CollateralWithdrawn {
            nft,
            token_id,
            index: auction_index,
            bidder,
            amount: bid.collateral,
        }
        .publish(&env);

        Ok(())
    }

    /// Void a commitment that was not revealed in time. Its collateral is paid
    /// to the seller and it stops blocking `end_auction`. Callable by anyone.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - no such generation
    /// * `Error::AuctionAlreadySettled` - settlement already happened
    /// * `Error::TimingViolation` - the reveal window has not ended
    /// * `Error::BidNotFound` - `bidder` has no live commitment
    /// * `Error::AlreadyRevealed` - the bid was revealed and is not forfeitable
    pub fn forfeit_bid(
        env: Env,
        nft: Address,
        token_id: u32,
        auction_index: u64,
        bidder: Address,
    ) -> Result<(), Error> {
        storage::extend_instance_ttl(&env);

        let mut auction = storage::get_auction(&env, &nft, token_id, auction_index)
            .ok_or(Error::AuctionNotFound)?;

        if auction.is_settled() {
            return Err(Error::AuctionAlreadySettled);
        }

        if !auction.is_reveal_over(env.ledger().timestamp()) {
            return Err(Error::TimingViolation);
        }

        let bid = storage::get_bid(&env, &nft, token_id, auction_index, &bidder);
        if !bid.is_live() {
            return Err(Error::BidNotFound);
        }

        if bid.revealed {
            return Err(Error::AlreadyRevealed);
        }

        auction.num_unrevealed_bids = auction
            .num_unrevealed_bids
            .checked_sub(1)
            .ok_or(Error::Overflow)?;
        auction.forfeited_collateral = auction
            .forfeited_collateral
            .checked_add(bid.collateral)
            .ok_or(Error::Overflow)?;

        storage::remove_bid(&env, &auction, &bidder);
        storage::save_auction(&env, &auction);

        escrow::release_funds(&env, &auction.payment_token, &auction.seller, bid.collateral)?;

        log!(&env, "bid forfeited", bidder, auction_index, bid.collateral);

        BidForfeited {
            nft,
            token_id,
            index: auction_index,
            bidder,
            amount: bid.collateral,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Latest auction generation for the asset
    pub fn get_auction(env: Env, nft: Address, token_id: u32) -> Result<Auction, Error> {
        storage::get_latest_auction(&env, &nft, token_id).ok_or(Error::AuctionNotFound)
    }

    /// Auction generation `index` for the asset
    pub fn get_auction_at(
        env: Env,
        nft: Address,
        token_id: u32,
        index: u64,
    ) -> Result<Auction, Error> {
        storage::get_auction(&env, &nft, token_id, index).ok_or(Error::AuctionNotFound)
    }

    /// Index of the latest generation, 0 if the asset was never auctioned
    pub fn get_latest_index(env: Env, nft: Address, token_id: u32) -> u64 {
        storage::get_latest_index(&env, &nft, token_id)
    }

    /// Bid record, or the zero sentinel when there is none
    pub fn get_bid(env: Env, nft: Address, token_id: u32, index: u64, bidder: Address) -> Bid {
        storage::get_bid(&env, &nft, token_id, index, &bidder)
    }

    /// Total number of auctions ever created
    pub fn get_auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    /// Auctions in creation order, skipping the first `start`.
    pub fn get_auction_history(env: Env, start: u64, limit: u32) -> Result<Vec<Auction>, Error> {
        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(Error::InvalidPagination);
        }

        let count = storage::get_auction_counter(&env);
        if start > count {
            return Err(Error::InvalidPagination);
        }

        let end = count.min(start + limit as u64);
        let mut auctions = Vec::new(&env);
        for position in (start + 1)..=end {
            let entry = storage::get_auction_log(&env, position).ok_or(Error::AuctionNotFound)?;
            let auction = storage::get_auction(&env, &entry.nft, entry.token_id, entry.index)
                .ok_or(Error::AuctionNotFound)?;
            auctions.push_back(auction);
        }
        Ok(auctions)
    }

    /// Commitment a bidder must submit to later reveal `bid_value` with `nonce`
    pub fn compute_commitment(
        env: Env,
        nonce: BytesN<32>,
        bid_value: i128,
        nft: Address,
        token_id: u32,
        index: u64,
    ) -> BytesN<32> {
        commitment::compute(&env, &nonce, bid_value, &nft, token_id, index)
    }
}

#[cfg(test)]
mod test;
