//! Contact form enquiry.

use super::email::Email;

/// A message submitted through the storefront contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEnquiry {
    /// Sender name.
    pub name: String,
    /// Sender email; this is what shows up in the admin listing.
    pub email: Email,
    /// Message body.
    pub message: String,
}

impl ContactEnquiry {
    /// The enquiry the suite submits by default.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            name: "Some One".to_string(),
            email: Email::from_trusted("someone@somewhere.tt"),
            message: "This is some comment".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_email_is_valid() {
        let sample = ContactEnquiry::sample();
        assert_eq!(sample.email, Email::parse("someone@somewhere.tt").unwrap());
        assert_eq!(sample.name, "Some One");
        assert_eq!(sample.message, "This is some comment");
    }
}
