//! Shipping details.

use crate::domain::checkout::errors::CheckoutError;

/// Country used when the shopper does not pick one.
pub const DEFAULT_COUNTRY: &str = "India";

/// Shipping method recorded on every order.
pub const STANDARD_SHIPPING: &str = "Standard Shipping";

/// Where and to whom an order is shipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

impl Default for ShippingDetails {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl ShippingDetails {
    /// Single-line address stored on the order.
    pub fn formatted_address(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.address, self.city, self.state, self.pincode, self.country
        )
    }

    /// Check the fields the storefront form marks as required.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingShippingDetail`] naming the first blank field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CheckoutError::MissingShippingDetail(*field)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn details() -> ShippingDetails {
        ShippingDetails {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9999999999".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            ..ShippingDetails::default()
        }
    }

    #[test]
    fn formats_address_on_one_line() {
        assert_eq!(
            details().formatted_address(),
            "12 MG Road, Bengaluru, Karnataka 560001, India"
        );
    }

    #[test]
    fn validate_accepts_complete_details() {
        assert!(details().validate().is_ok());
    }

    #[test]
    fn validate_names_first_blank_field() {
        let mut details = details();
        details.city = "  ".to_string();
        details.pincode = String::new();

        let result = details.validate();

        assert!(
            matches!(result, Err(CheckoutError::MissingShippingDetail("city"))),
            "expected missing city, got {result:?}"
        );
    }

    #[test]
    fn phone_is_optional() {
        let mut details = details();
        details.phone = String::new();

        assert!(details.validate().is_ok());
    }
}
