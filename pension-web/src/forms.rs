//! Form input handling for the Register and Contribute pages.
//!
//! These only turn raw input into typed drafts; nothing here is submitted
//! anywhere or priced.

use thiserror::Error;

use crate::services::wallet::WalletAccount;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("Connect your wallet first")]
    WalletRequired,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl RegistrationDraft {
    pub fn parse(
        name: &str,
        email: &str,
        account: Option<&WalletAccount>,
    ) -> Result<Self, FormError> {
        let name = required("Name", name)?;
        let email = required("Email", email)?;
        let account = account.ok_or(FormError::WalletRequired)?;

        Ok(Self {
            name,
            email,
            address: account.address.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContributionDraft {
    pub amount: f64,
    pub address: String,
}

impl ContributionDraft {
    /// Accepts a positive, finite decimal amount (`,` is not a separator).
    pub fn parse(amount: &str, account: Option<&WalletAccount>) -> Result<Self, FormError> {
        let raw = required("Amount", amount)?;
        let amount = raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or(FormError::InvalidAmount(raw))?;
        let account = account.ok_or(FormError::WalletRequired)?;

        Ok(Self {
            amount,
            address: account.address.clone(),
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> WalletAccount {
        WalletAccount {
            address: "0x52908400098527886e0f7030069857d2e4169ee7".to_string(),
            chain_id: 11155111,
        }
    }

    #[test]
    fn test_registration_draft() {
        let draft = RegistrationDraft::parse("  Ada ", "ada@example.com", Some(&account()))
            .expect("valid registration");
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.address, account().address);
    }

    #[test]
    fn test_registration_requires_fields_and_wallet() {
        assert_eq!(
            RegistrationDraft::parse("", "ada@example.com", Some(&account())),
            Err(FormError::Required("Name"))
        );
        assert_eq!(
            RegistrationDraft::parse("Ada", "   ", Some(&account())),
            Err(FormError::Required("Email"))
        );
        assert_eq!(
            RegistrationDraft::parse("Ada", "ada@example.com", None),
            Err(FormError::WalletRequired)
        );
    }

    #[test]
    fn test_contribution_draft() {
        let draft = ContributionDraft::parse("0.25", Some(&account())).expect("valid amount");
        assert_eq!(draft.amount, 0.25);
    }

    #[test]
    fn test_contribution_rejects_bad_amounts() {
        for raw in ["0", "-1", "abc", "NaN", "inf", "1,5"] {
            assert_eq!(
                ContributionDraft::parse(raw, Some(&account())),
                Err(FormError::InvalidAmount(raw.to_string())),
                "{raw}"
            );
        }
        assert_eq!(
            ContributionDraft::parse("", Some(&account())),
            Err(FormError::Required("Amount"))
        );
        assert_eq!(
            ContributionDraft::parse("1", None),
            Err(FormError::WalletRequired)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Required("Name").to_string(), "Name is required");
        assert_eq!(
            FormError::InvalidAmount("x".into()).to_string(),
            "'x' is not a valid amount"
        );
    }
}
