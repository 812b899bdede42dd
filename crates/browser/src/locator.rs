//! XPath locators.

use std::fmt;

/// An XPath expression addressing one element on the current page.
///
/// The constructors cover the shapes the VamShop templates need: an element
/// by `id`, an element by exact text node, and raw expressions for the rest.
///
/// ```
/// use vamshop_e2e_browser::Locator;
///
/// assert_eq!(
///     Locator::by_id("input", "UserUsername").as_str(),
///     r#"//input[@id="UserUsername"]"#
/// );
/// assert_eq!(
///     Locator::with_text("button", " Login").as_str(),
///     r#"//button[text()=" Login"]"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    /// Use a raw XPath expression.
    #[must_use]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    /// `//tag[@id="id"]`
    #[must_use]
    pub fn by_id(tag: &str, id: &str) -> Self {
        Self(format!("//{tag}[@id={}]", xpath_literal(id)))
    }

    /// `//tag[text()="text"]`
    ///
    /// The match is exact, including the leading space VamShop puts before
    /// button labels that follow an icon.
    #[must_use]
    pub fn with_text(tag: &str, text: &str) -> Self {
        Self(format!("//{tag}[text()={}]", xpath_literal(text)))
    }

    /// The expression as passed to the driver.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quote a value as an XPath 1.0 string literal.
///
/// XPath 1.0 has no escape sequences, so a value holding both quote kinds is
/// split and rejoined with `concat()`.
#[must_use]
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    if !value.contains('\'') {
        return format!("'{value}'");
    }

    let parts: Vec<String> = value
        .split('"')
        .map(|part| format!("\"{part}\""))
        .collect();
    format!("concat({})", parts.join(", '\"', "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_plain() {
        assert_eq!(xpath_literal("Samsung Galaxy S4"), "\"Samsung Galaxy S4\"");
    }

    #[test]
    fn test_literal_with_double_quote() {
        assert_eq!(xpath_literal(r#"13" Laptop"#), r#"'13" Laptop'"#);
    }

    #[test]
    fn test_literal_with_single_quote() {
        assert_eq!(xpath_literal("Kid's Watch"), "\"Kid's Watch\"");
    }

    #[test]
    fn test_literal_with_both_quotes() {
        assert_eq!(
            xpath_literal(r#"Bob's 13" Tab"#),
            r#"concat("Bob's 13", '"', " Tab")"#
        );
    }

    #[test]
    fn test_by_id_and_text() {
        assert_eq!(
            Locator::by_id("textarea", "message").as_str(),
            r#"//textarea[@id="message"]"#
        );
        assert_eq!(
            Locator::with_text("h2", "Thank You").to_string(),
            r#"//h2[text()="Thank You"]"#
        );
    }
}
