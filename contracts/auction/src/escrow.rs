use crate::errors::Error;
use soroban_sdk::{contractclient, token, Address, Env};

/// Custody interface the auctioned asset contract must expose.
#[contractclient(name = "NonFungibleClient")]
pub trait NonFungibleInterface {
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
    fn owner_of(env: Env, token_id: u32) -> Address;
}

pub fn transfer_nft(
    env: &Env,
    nft: &Address,
    from: &Address,
    to: &Address,
    token_id: u32,
) -> Result<(), Error> {
    let client = NonFungibleClient::new(env, nft);
    match client.try_transfer(from, to, &token_id) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}

/// Pulls `amount` of the payment token from `from` into the contract.
pub fn lock_funds(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    transfer_token(env, token, from, &env.current_contract_address(), amount)
}

/// Pays `amount` of the payment token out of the contract to `to`.
pub fn release_funds(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Ok(());
    }
    transfer_token(env, token, &env.current_contract_address(), to, amount)
}

fn transfer_token(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token_client = token::TokenClient::new(env, token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}
