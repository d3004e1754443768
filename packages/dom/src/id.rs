use crc32fast::Hasher;

/// Derive a stable document seed from a document name using CRC32.
pub fn document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for nodes within a document.
///
/// Ids are `{seed}-{count}`; the seed is the CRC32 of the document name so
/// two documents never hand out colliding ids. Uniqueness against ids loaded
/// from a persisted blob is the store's responsibility (it re-rolls on
/// collision).
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            seed: document_seed(name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
