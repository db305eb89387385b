use crate::error::{AppError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Validates `sha256=<hex>` signatures over the raw request body.
pub struct HmacValidator {
    secret: String,
    header_name: String,
}

impl HmacValidator {
    pub fn new(secret: String, header_name: String) -> Self {
        Self {
            secret,
            header_name,
        }
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn validate(&self, body: &[u8], signature_header: &str) -> Result<()> {
        let signature = signature_header
            .strip_prefix("sha256=")
            .ok_or(AppError::InvalidSignatureFormat)?;

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| AppError::Config("Invalid HMAC secret".to_string()))?;
        mac.update(body);
        let computed = hex::encode(mac.finalize().into_bytes());

        // Constant-time comparison
        let matches: bool = computed.as_bytes().ct_eq(signature.as_bytes()).into();

        if matches {
            Ok(())
        } else {
            tracing::warn!("Webhook signature mismatch on header {}", self.header_name);
            Err(AppError::HmacValidation)
        }
    }
}
