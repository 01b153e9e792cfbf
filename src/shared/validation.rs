use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating category identifiers
    /// Must start with an uppercase letter, followed by up to 15 letters, digits or hyphens
    /// - Valid: "U11", "U13", "SENIORS", "U9-MIXTE"
    /// - Invalid: "u11", "11U", "U 11", "", "U11_"
    pub static ref CATEGORY_REGEX: Regex = Regex::new(r"^[A-Z][A-Za-z0-9-]{0,15}$").unwrap();
}
