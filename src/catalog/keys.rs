//! Account keys, muxed accounts and signers.
//!
//! Ed25519 keys are carried as raw [`Uint256`] values on the wire; the StrKey
//! text forms (`G...`, `M...`) are handled by `stellar-strkey`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{BoundedBytes, Coerce, Hash, Uint256};

xdr_enum! {
    pub enum CryptoKeyType {
        Ed25519 = 0 => "ED25519",
        PreAuthTx = 1 => "PRE_AUTH_TX",
        HashX = 2 => "HASH_X",
        Ed25519SignedPayload = 3 => "ED25519_SIGNED_PAYLOAD",
        MuxedEd25519 = 0x100 => "MUXED_ED25519",
    }
}

xdr_enum! {
    pub enum PublicKeyType {
        Ed25519 = 0 => "PUBLIC_KEY_TYPE_ED25519",
    }
}

xdr_enum! {
    pub enum SignerKeyType {
        Ed25519 = 0 => "SIGNER_KEY_TYPE_ED25519",
        PreAuthTx = 1 => "SIGNER_KEY_TYPE_PRE_AUTH_TX",
        HashX = 2 => "SIGNER_KEY_TYPE_HASH_X",
        Ed25519SignedPayload = 3 => "SIGNER_KEY_TYPE_ED25519_SIGNED_PAYLOAD",
    }
}

xdr_union! {
    /// An ed25519 public key.
    pub enum PublicKey : PublicKeyType {
        Ed25519(Uint256) = Ed25519,
    }
}

/// Accounts are identified by their master public key.
pub type AccountId = PublicKey;

impl PublicKey {
    pub fn from_ed25519(bytes: [u8; 32]) -> Self {
        PublicKey::Ed25519(Uint256(bytes))
    }

    pub fn ed25519(&self) -> &[u8; 32] {
        match self {
            PublicKey::Ed25519(key) => &key.0,
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strkey = stellar_strkey::ed25519::PublicKey(*self.ed25519());
        f.write_str(&strkey.to_string())
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        stellar_strkey::ed25519::PublicKey::from_string(s)
            .map(|key| PublicKey::from_ed25519(key.0))
            .map_err(|err| Error::invalid_input(format!("`{s}` is not an account id: {err}")))
    }
}

impl Coerce<PublicKey> for &str {
    fn coerce(self) -> Result<PublicKey> {
        self.parse()
    }
}

impl Coerce<PublicKey> for String {
    fn coerce(self) -> Result<PublicKey> {
        self.parse()
    }
}

/// An account with a 64-bit sub-account id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuxedAccountMed25519 {
    pub id: u64,
    pub ed25519: Uint256,
}

xdr_union! {
    /// A payment source or destination, plain (`G...`) or muxed (`M...`).
    pub enum MuxedAccount : CryptoKeyType, partial {
        Ed25519(Uint256) = Ed25519,
        MuxedEd25519(MuxedAccountMed25519) = MuxedEd25519,
    }
}

impl MuxedAccount {
    /// The underlying account, without the multiplexing id.
    pub fn account_id(&self) -> AccountId {
        match self {
            MuxedAccount::Ed25519(key) => PublicKey::Ed25519(*key),
            MuxedAccount::MuxedEd25519(med) => PublicKey::Ed25519(med.ed25519),
        }
    }

    pub fn id(&self) -> Option<u64> {
        match self {
            MuxedAccount::Ed25519(_) => None,
            MuxedAccount::MuxedEd25519(med) => Some(med.id),
        }
    }
}

impl From<AccountId> for MuxedAccount {
    fn from(account: AccountId) -> Self {
        match account {
            PublicKey::Ed25519(key) => MuxedAccount::Ed25519(key),
        }
    }
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuxedAccount::Ed25519(_) => fmt::Display::fmt(&self.account_id(), f),
            MuxedAccount::MuxedEd25519(med) => {
                let strkey = stellar_strkey::ed25519::MuxedAccount {
                    ed25519: med.ed25519.0,
                    id: med.id,
                };
                f.write_str(&strkey.to_string())
            }
        }
    }
}

impl FromStr for MuxedAccount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('M') {
            return stellar_strkey::ed25519::MuxedAccount::from_string(s)
                .map(|key| {
                    MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
                        id: key.id,
                        ed25519: Uint256(key.ed25519),
                    })
                })
                .map_err(|err| {
                    Error::invalid_input(format!("`{s}` is not a muxed account: {err}"))
                });
        }
        s.parse::<AccountId>().map(MuxedAccount::from)
    }
}

impl Coerce<MuxedAccount> for &str {
    fn coerce(self) -> Result<MuxedAccount> {
        self.parse()
    }
}

impl Coerce<MuxedAccount> for String {
    fn coerce(self) -> Result<MuxedAccount> {
        self.parse()
    }
}

impl Coerce<MuxedAccount> for AccountId {
    fn coerce(self) -> Result<MuxedAccount> {
        Ok(self.into())
    }
}

/// Signer key that authorizes by an ed25519 signature over a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedPayloadSigner {
    pub ed25519: Uint256,
    pub payload: BoundedBytes<64>,
}

xdr_union! {
    pub enum SignerKey : SignerKeyType {
        Ed25519(Uint256) = Ed25519,
        PreAuthTx(Hash) = PreAuthTx,
        HashX(Hash) = HashX,
        Ed25519SignedPayload(SignedPayloadSigner) = Ed25519SignedPayload,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

impl_validate!(MuxedAccountMed25519, SignedPayloadSigner, Signer);
