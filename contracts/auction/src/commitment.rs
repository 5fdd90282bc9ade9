use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Computes the sealed-bid commitment
/// `sha256(nonce || bid_value || xdr(nft) || token_id || index)`,
/// with integers encoded big-endian.
pub fn compute(
    env: &Env,
    nonce: &BytesN<32>,
    bid_value: i128,
    nft: &Address,
    token_id: u32,
    index: u64,
) -> BytesN<32> {
    let mut preimage = Bytes::from(nonce.clone());
    preimage.extend_from_array(&bid_value.to_be_bytes());
    preimage.append(&nft.clone().to_xdr(env));
    preimage.extend_from_array(&token_id.to_be_bytes());
    preimage.extend_from_array(&index.to_be_bytes());
    env.crypto().sha256(&preimage).to_bytes()
}
