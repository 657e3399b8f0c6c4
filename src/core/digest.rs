use ring::digest::{self, SHA1_FOR_LEGACY_USE_ONLY, SHA256, SHA512};
use serde::Serialize;
use std::sync::Arc;

use crate::core::md5::md5_hex;
use crate::core::ports::ShaProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl AlgorithmId {
    /// Canonical order used when all algorithms are requested.
    pub const ALL: [AlgorithmId; 4] = [
        AlgorithmId::Md5,
        AlgorithmId::Sha1,
        AlgorithmId::Sha256,
        AlgorithmId::Sha512,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlgorithmId::Md5 => "MD5",
            AlgorithmId::Sha1 => "SHA1",
            AlgorithmId::Sha256 => "SHA256",
            AlgorithmId::Sha512 => "SHA512",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(AlgorithmId),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaAlgorithm {
    Sha1,
    Sha256,
    Sha512,
}

// ===== ring adapter =====

pub struct RingShaProvider;

impl ShaProvider for RingShaProvider {
    fn digest(&self, algo: ShaAlgorithm, data: &[u8]) -> Vec<u8> {
        let alg = match algo {
            ShaAlgorithm::Sha1 => &SHA1_FOR_LEGACY_USE_ONLY,
            ShaAlgorithm::Sha256 => &SHA256,
            ShaAlgorithm::Sha512 => &SHA512,
        };
        digest::digest(alg, data).as_ref().to_vec()
    }
}

// ===== Dispatcher =====

#[derive(Debug, Clone, Serialize)]
pub struct DigestRow {
    pub label: &'static str,
    pub hex: String,
}

pub struct DigestDispatcher {
    sha: Arc<dyn ShaProvider>,
}

impl DigestDispatcher {
    pub fn new(sha: Arc<dyn ShaProvider>) -> Self {
        Self { sha }
    }

    /// One labeled lowercase-hex row per requested algorithm, in request
    /// order. The salt is appended verbatim after the text with no
    /// delimiter, matching the original tool's documented output; this is
    /// deliberately not a hardened salting scheme. Callers do not invoke
    /// the dispatcher on empty text.
    pub fn compute(&self, text: &str, salt: &str, selection: Selection) -> Vec<DigestRow> {
        let salted = format!("{text}{salt}");
        let algos: Vec<AlgorithmId> = match selection {
            Selection::All => AlgorithmId::ALL.to_vec(),
            Selection::Single(a) => vec![a],
        };
        algos
            .into_iter()
            .map(|algo| DigestRow {
                label: algo.label(),
                hex: self.digest_one(algo, salted.as_bytes()),
            })
            .collect()
    }

    fn digest_one(&self, algo: AlgorithmId, data: &[u8]) -> String {
        let sha = match algo {
            AlgorithmId::Md5 => return md5_hex(data),
            AlgorithmId::Sha1 => ShaAlgorithm::Sha1,
            AlgorithmId::Sha256 => ShaAlgorithm::Sha256,
            AlgorithmId::Sha512 => ShaAlgorithm::Sha512,
        };
        hex::encode(self.sha.digest(sha, data))
    }
}
