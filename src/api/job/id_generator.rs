use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Builder;

use super::error::GenerationError;

/// Source of job identifiers
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> Result<String, GenerationError>;
}

/// Random (version 4) UUIDs drawn from the operating system's entropy source
///
/// Ids are rendered in the canonical lowercase 8-4-4-4-12 form.
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate_id(&self) -> Result<String, GenerationError> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| GenerationError(Box::new(e)))?;

        // Forces the version nibble to 4 and the variant bits to 10
        let id = Builder::from_random_bytes(bytes).into_uuid();
        Ok(id.hyphenated().to_string())
    }
}
