//! Card field values and their length caps.

/// Maximum number of characters accepted for the card number
pub const CARD_NUMBER_MAX_LEN: usize = 16;
/// Maximum number of characters accepted for the holder name
pub const HOLDER_NAME_MAX_LEN: usize = 20;
/// Maximum number of characters accepted for the CVC
pub const CVC_MAX_LEN: usize = 4;

/// Free-text fields whose updates are length-clamped.
///
/// The expiration month and year are not listed here: they come from
/// enumerated selectors and are stored without a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CardNumber,
    HolderName,
    Cvc,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::CardNumber, Field::HolderName, Field::Cvc];

    /// Length cap in characters
    pub fn max_len(self) -> usize {
        match self {
            Field::CardNumber => CARD_NUMBER_MAX_LEN,
            Field::HolderName => HOLDER_NAME_MAX_LEN,
            Field::Cvc => CVC_MAX_LEN,
        }
    }

    /// Whether `value` fits within this field's cap.
    pub fn accepts(self, value: &str) -> bool {
        value.chars().count() <= self.max_len()
    }
}

/// The five values entered through the form.
///
/// Fields are private: the only way to change them is through
/// [`crate::CardForm`], which enforces the length caps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    card_number: String,
    holder_name: String,
    expiration_month: String,
    expiration_year: String,
    cvc: String,
}

impl FieldValues {
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn expiration_month(&self) -> &str {
        &self.expiration_month
    }

    /// Two-digit year suffix, or empty when no year is selected
    pub fn expiration_year(&self) -> &str {
        &self.expiration_year
    }

    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    /// Current value of a clamped field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::HolderName => &self.holder_name,
            Field::Cvc => &self.cvc,
        }
    }

    /// Store `value` if it fits the cap. Returns whether it was stored.
    pub(crate) fn set_clamped(&mut self, field: Field, value: &str) -> bool {
        if !field.accepts(value) {
            return false;
        }
        let slot = match field {
            Field::CardNumber => &mut self.card_number,
            Field::HolderName => &mut self.holder_name,
            Field::Cvc => &mut self.cvc,
        };
        value.clone_into(slot);
        true
    }

    pub(crate) fn set_expiration_month(&mut self, month: String) {
        self.expiration_month = month;
    }

    pub(crate) fn set_expiration_year(&mut self, year: String) {
        self.expiration_year = year;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_match_form_limits() {
        assert_eq!(Field::CardNumber.max_len(), 16);
        assert_eq!(Field::HolderName.max_len(), 20);
        assert_eq!(Field::Cvc.max_len(), 4);
    }

    #[test]
    fn accepts_counts_characters_not_bytes() {
        // 20 chars, 40 bytes
        let name = "é".repeat(20);
        assert!(Field::HolderName.accepts(&name));
        assert!(!Field::HolderName.accepts(&format!("{}x", name)));
    }

    #[test]
    fn set_clamped_keeps_prior_value_on_overflow() {
        let mut values = FieldValues::default();
        assert!(values.set_clamped(Field::Cvc, "123"));
        assert!(!values.set_clamped(Field::Cvc, "12345"));
        assert_eq!(values.cvc(), "123");
    }

    #[test]
    fn set_clamped_accepts_empty() {
        let mut values = FieldValues::default();
        values.set_clamped(Field::CardNumber, "42");
        assert!(values.set_clamped(Field::CardNumber, ""));
        assert_eq!(values.card_number(), "");
    }

    #[test]
    fn get_reads_each_field() {
        let mut values = FieldValues::default();
        values.set_clamped(Field::CardNumber, "4242");
        values.set_clamped(Field::HolderName, "ADA LOVELACE");
        values.set_clamped(Field::Cvc, "987");
        assert_eq!(values.get(Field::CardNumber), "4242");
        assert_eq!(values.get(Field::HolderName), "ADA LOVELACE");
        assert_eq!(values.get(Field::Cvc), "987");
    }
}
