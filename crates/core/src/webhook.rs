//! Signature gate for the source-control push webhook.
//!
//! The sender signs the raw request body with a pre-shared secret and puts
//! the result in the `X-Hub-Signature` header as `<algorithm>=<hexdigest>`.
//! [`verify_signature`] recomputes the HMAC over the exact bytes received and
//! compares it in constant time. Only the algorithms listed in
//! [`SUPPORTED_ALGORITHMS`] are accepted; any other name is rejected.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

/// Name of the request header carrying the signature.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature";

/// Hash functions the gate knows how to key an HMAC with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    Sha1,
    Sha256,
    Sha512,
}

/// Fixed lookup table from header algorithm name to [`SignatureAlgorithm`].
pub const SUPPORTED_ALGORITHMS: [(&str, SignatureAlgorithm); 3] = [
    ("sha1", SignatureAlgorithm::Sha1),
    ("sha256", SignatureAlgorithm::Sha256),
    ("sha512", SignatureAlgorithm::Sha512),
];

impl SignatureAlgorithm {
    /// Resolve a header algorithm name. Names are matched exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        SUPPORTED_ALGORITHMS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, algorithm)| *algorithm)
    }

    /// The name used in the signature header.
    pub fn name(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha256 => "sha256",
            SignatureAlgorithm::Sha512 => "sha512",
        }
    }

    /// Constant-time check of `expected` against HMAC(secret, body).
    fn verify(self, secret: &[u8], body: &[u8], expected: &[u8]) -> bool {
        match self {
            SignatureAlgorithm::Sha1 => verify_mac::<Hmac<Sha1>>(secret, body, expected),
            SignatureAlgorithm::Sha256 => verify_mac::<Hmac<Sha256>>(secret, body, expected),
            SignatureAlgorithm::Sha512 => verify_mac::<Hmac<Sha512>>(secret, body, expected),
        }
    }

    /// Lowercase hex HMAC of `body` keyed with `secret`.
    fn hex_digest(self, secret: &[u8], body: &[u8]) -> String {
        match self {
            SignatureAlgorithm::Sha1 => mac_hex::<Hmac<Sha1>>(secret, body),
            SignatureAlgorithm::Sha256 => mac_hex::<Hmac<Sha256>>(secret, body),
            SignatureAlgorithm::Sha512 => mac_hex::<Hmac<Sha512>>(secret, body),
        }
    }
}

/// Reasons a webhook request is refused. Every variant maps to 401.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("signature header is missing")]
    MissingHeader,

    #[error("no webhook secret is configured")]
    MissingSecret,

    #[error("signature header is malformed")]
    Malformed,

    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("signature does not match payload")]
    Mismatch,
}

/// Check a webhook request's signature header against its raw body.
///
/// `header` is the raw `X-Hub-Signature` value (if any), `body` the request
/// body exactly as received, and `secret` the configured shared secret.
/// The header is split on the first `=`; the left side selects the hash and
/// the right side must be the lowercase hex HMAC of `body`.
///
/// Returns the algorithm that verified the payload, or why it was refused.
pub fn verify_signature(
    header: Option<&str>,
    body: &[u8],
    secret: Option<&[u8]>,
) -> Result<SignatureAlgorithm, SignatureError> {
    let header = header.ok_or(SignatureError::MissingHeader)?;
    let secret = secret.ok_or(SignatureError::MissingSecret)?;

    let (name, claimed) = header.split_once('=').ok_or(SignatureError::Malformed)?;
    let algorithm = SignatureAlgorithm::from_name(name)
        .ok_or_else(|| SignatureError::UnsupportedAlgorithm(name.to_string()))?;

    // The sender emits lowercase hex; anything else can never equal our digest.
    if claimed.is_empty() || !claimed.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(SignatureError::Malformed);
    }
    let claimed = hex::decode(claimed).map_err(|_| SignatureError::Malformed)?;

    if algorithm.verify(secret, body, &claimed) {
        Ok(algorithm)
    } else {
        Err(SignatureError::Mismatch)
    }
}

/// Build the header value a sender would attach for `body`.
pub fn sign(algorithm: SignatureAlgorithm, secret: &[u8], body: &[u8]) -> String {
    format!("{}={}", algorithm.name(), algorithm.hex_digest(secret, body))
}

fn verify_mac<M: Mac + KeyInit>(secret: &[u8], body: &[u8], expected: &[u8]) -> bool {
    let Ok(mut mac) = <M as KeyInit>::new_from_slice(secret) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(expected).is_ok()
}

fn mac_hex<M: Mac + KeyInit>(secret: &[u8], body: &[u8]) -> String {
    let Ok(mut mac) = <M as KeyInit>::new_from_slice(secret) else {
        return String::new();
    };
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}
