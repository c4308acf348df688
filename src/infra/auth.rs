use log::warn;

use crate::api::commands::Role;
use crate::api::errors::ApiError;

/// Вход в роль дилера по общему статическому коду.
/// Любой, кто не ввёл код, остаётся зрителем.
#[derive(Clone, Debug)]
pub struct AccessGate {
    dealer_code: String,
}

impl AccessGate {
    pub fn new(dealer_code: impl Into<String>) -> Self {
        Self {
            dealer_code: dealer_code.into(),
        }
    }

    /// Проверить введённый код.
    pub fn verify(&self, code: &str) -> Result<Role, ApiError> {
        if code == self.dealer_code {
            Ok(Role::Dealer)
        } else {
            warn!("invalid dealer access code entered");
            Err(ApiError::Unauthorized)
        }
    }
}
