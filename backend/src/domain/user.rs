//! User data model.
//!
//! Every field is a validated newtype so service functions never see raw
//! transport strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Minimum allowed length for a display name.
pub const DISPLAY_NAME_MIN: usize = 3;
/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 32;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The display name was blank.
    #[error("display name must not be empty")]
    EmptyDisplayName,
    /// The display name was shorter than [`DISPLAY_NAME_MIN`].
    #[error("display name must be at least {min} characters")]
    DisplayNameTooShort {
        /// Minimum length in characters.
        min: usize,
    },
    /// The display name was longer than [`DISPLAY_NAME_MAX`].
    #[error("display name must be at most {max} characters")]
    DisplayNameTooLong {
        /// Maximum length in characters.
        max: usize,
    },
    /// The display name contained punctuation or symbols.
    #[error("display name may only contain letters, numbers, spaces, or underscores")]
    DisplayNameInvalidCharacters,
    /// The email address was blank.
    #[error("email must not be empty")]
    EmptyEmail,
    /// The email address was not of the form `local@domain.tld`.
    #[error("email must look like name@example.com")]
    InvalidEmail,
}

impl UserValidationError {
    /// Name of the request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::EmptyDisplayName
            | Self::DisplayNameTooShort { .. }
            | Self::DisplayNameTooLong { .. }
            | Self::DisplayNameInvalidCharacters => "displayName",
            Self::EmptyEmail | Self::InvalidEmail => "email",
        }
    }
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier from text.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Human readable display name for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`]. Surrounding whitespace is
    /// trimmed before the checks run.
    pub fn new(display_name: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = display_name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }

        let length = trimmed.chars().count();
        if length < DISPLAY_NAME_MIN {
            return Err(UserValidationError::DisplayNameTooShort {
                min: DISPLAY_NAME_MIN,
            });
        }
        if length > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }

        let allowed = |c: char| c.is_alphanumeric() || c == ' ' || c == '_';
        if !trimmed.chars().all(allowed) {
            return Err(UserValidationError::DisplayNameInvalidCharacters);
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Email address, normalised to lower case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    ///
    /// # Examples
    /// ```
    /// use outcome_service::domain::EmailAddress;
    ///
    /// let email = EmailAddress::new(" Ada@Example.COM ").expect("valid email");
    /// assert_eq!(email.as_ref(), "ada@example.com");
    /// assert!(EmailAddress::new("ada@localhost").is_err());
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(UserValidationError::InvalidEmail);
        };
        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');
        if local.is_empty() || !domain_ok || trimmed.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_lowercase()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated attributes supplied when creating or replacing a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    display_name: DisplayName,
    email: EmailAddress,
}

impl UserDraft {
    /// Bundle already validated fields.
    #[must_use]
    pub const fn new(display_name: DisplayName, email: EmailAddress) -> Self {
        Self {
            display_name,
            email,
        }
    }

    /// Validate raw request fields.
    pub fn try_from_parts(
        display_name: &str,
        email: &str,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(DisplayName::new(display_name)?, EmailAddress::new(email)?))
    }

    /// Requested display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Requested email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Give the draft an identity.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            display_name: self.display_name,
            email: self.email,
        }
    }
}

/// Application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    display_name: DisplayName,
    email: EmailAddress,
}

impl User {
    /// Assemble a user from validated parts.
    #[must_use]
    pub const fn new(id: UserId, display_name: DisplayName, email: EmailAddress) -> Self {
        Self {
            id,
            display_name,
            email,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name shown to other users.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Contact email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    //! Validation coverage for user value types.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("Ada Lovelace")]
    #[case("  grace_hopper  ")]
    #[case("Zoë 42")]
    fn display_name_accepts_valid_values(#[case] raw: &str) {
        let name = DisplayName::new(raw).expect("valid display name");
        assert_eq!(name.as_ref(), raw.trim());
    }

    #[rstest]
    #[case("   ", UserValidationError::EmptyDisplayName)]
    #[case("Al", UserValidationError::DisplayNameTooShort { min: DISPLAY_NAME_MIN })]
    #[case(
        "abcdefghijklmnopqrstuvwxyzabcdefg",
        UserValidationError::DisplayNameTooLong { max: DISPLAY_NAME_MAX }
    )]
    #[case("Ada!", UserValidationError::DisplayNameInvalidCharacters)]
    fn display_name_rejects_invalid_values(
        #[case] raw: &str,
        #[case] expected: UserValidationError,
    ) {
        assert_eq!(DisplayName::new(raw), Err(expected));
    }

    #[rstest]
    #[case("", UserValidationError::EmptyEmail)]
    #[case("ada", UserValidationError::InvalidEmail)]
    #[case("@example.com", UserValidationError::InvalidEmail)]
    #[case("ada@example", UserValidationError::InvalidEmail)]
    #[case("ada@.example.com", UserValidationError::InvalidEmail)]
    #[case("ada@example.com.", UserValidationError::InvalidEmail)]
    #[case("ada@ex@ample.com", UserValidationError::InvalidEmail)]
    #[case("ada lovelace@example.com", UserValidationError::InvalidEmail)]
    fn email_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(EmailAddress::new(raw), Err(expected));
    }

    #[rstest]
    fn validation_errors_name_their_field() {
        assert_eq!(UserValidationError::InvalidEmail.field(), "email");
        assert_eq!(
            UserValidationError::DisplayNameTooShort { min: 3 }.field(),
            "displayName"
        );
        assert_eq!(UserValidationError::InvalidId.field(), "id");
    }

    #[rstest]
    fn user_id_rejects_non_uuid() {
        assert_eq!(UserId::new("42"), Err(UserValidationError::InvalidId));
    }

    #[rstest]
    fn user_serialises_with_camel_case_keys() {
        let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
        let draft =
            UserDraft::try_from_parts("Ada Lovelace", "Ada@Example.com").expect("valid draft");
        let value = serde_json::to_value(draft.into_user(id)).expect("serialise user");
        assert_eq!(
            value,
            json!({
                "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "displayName": "Ada Lovelace",
                "email": "ada@example.com",
            })
        );
    }

    #[rstest]
    fn user_deserialisation_revalidates_fields() {
        let result = serde_json::from_value::<User>(json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "displayName": "!!",
            "email": "ada@example.com",
        }));
        assert!(result.is_err());
    }
}
