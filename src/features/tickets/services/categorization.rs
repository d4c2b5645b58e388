use crate::features::tickets::models::InquiryCategory;

/// Keyword table checked in order; the first category with a matching keyword wins.
pub const CATEGORY_RULES: &[(InquiryCategory, &[&str])] = &[
    (InquiryCategory::Sales, &["money", "price", "refund"]),
    (InquiryCategory::Technical, &["error", "bug", "login", "fail"]),
    (InquiryCategory::Logistics, &["ship", "order", "delivery"]),
];

/// Infer the inquiry category of a ticket from its title.
///
/// Matching is case-insensitive substring containment, so "shipping" hits
/// `ship` and "failed" hits `fail`. Titles matching no rule are `General`.
pub fn categorize(title: &str) -> InquiryCategory {
    let title = title.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(InquiryCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_keywords() {
        assert_eq!(categorize("Refund my order please"), InquiryCategory::Sales);
        assert_eq!(categorize("REFUND"), InquiryCategory::Sales);
        assert_eq!(categorize("What is the price?"), InquiryCategory::Sales);
        assert_eq!(categorize("Where is my money"), InquiryCategory::Sales);
    }

    #[test]
    fn test_sales_wins_over_lower_priorities() {
        assert_eq!(
            categorize("refund after login error on my delivery"),
            InquiryCategory::Sales
        );
        assert_eq!(categorize("Bug in price display"), InquiryCategory::Sales);
    }

    #[test]
    fn test_technical_keywords() {
        assert_eq!(categorize("Login error on checkout"), InquiryCategory::Technical);
        assert_eq!(categorize("Found a BUG"), InquiryCategory::Technical);
        assert_eq!(categorize("Payment failed"), InquiryCategory::Technical);
    }

    #[test]
    fn test_technical_wins_over_logistics() {
        assert_eq!(categorize("bug in order page"), InquiryCategory::Technical);
    }

    #[test]
    fn test_logistics_keywords() {
        assert_eq!(categorize("Where is my delivery"), InquiryCategory::Logistics);
        assert_eq!(categorize("Cancel my Order"), InquiryCategory::Logistics);
        assert_eq!(categorize("Shipping to Canada?"), InquiryCategory::Logistics);
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(categorize("How do I change my avatar"), InquiryCategory::General);
        assert_eq!(categorize(""), InquiryCategory::General);
        assert_eq!(categorize("   "), InquiryCategory::General);
    }

    #[test]
    fn test_substring_not_whole_word() {
        // "disorder" contains "order", "debugging" contains "bug"
        assert_eq!(categorize("disorder"), InquiryCategory::Logistics);
        assert_eq!(categorize("debugging tips"), InquiryCategory::Technical);
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<InquiryCategory> = CATEGORY_RULES.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                InquiryCategory::Sales,
                InquiryCategory::Technical,
                InquiryCategory::Logistics,
            ]
        );
    }
}
