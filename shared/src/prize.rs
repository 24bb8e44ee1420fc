use serde::{Deserialize, Serialize};

use crate::locale::Translations;

/// Identifier of the consolation entry that never earns a promo code.
pub const NO_LUCK_ID: &str = "no-luck";
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

/// One wheel segment's prize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub id: String,
    pub label: String,
    pub color: String,
    pub text_color: Option<String>,
}

impl Prize {
    pub fn new(id: &str, label: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            color: color.to_string(),
            text_color: None,
        }
    }

    pub fn with_text_color(mut self, color: &str) -> Self {
        self.text_color = Some(color.to_string());
        self
    }

    pub fn is_no_luck(&self) -> bool {
        self.id == NO_LUCK_ID
    }

    pub fn text_color(&self) -> &str {
        self.text_color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR)
    }
}

/// The fixed eight-prize catalog, labelled in the active language.
///
/// Order matters: it is the clockwise segment order starting at the pointer.
pub fn prize_catalog(t: &Translations) -> Vec<Prize> {
    let p = &t.prizes;
    vec![
        Prize::new("discount-10", p.discount_10, "#EF4444").with_text_color("#FFFFFF"), // Red
        Prize::new("free-shipping", p.free_shipping, "#F59E0B").with_text_color("#FFFFFF"), // Amber
        Prize::new("discount-20", p.discount_20, "#10B981").with_text_color("#FFFFFF"), // Emerald
        Prize::new("gift-50", p.gift_card_50, "#3B82F6").with_text_color("#FFFFFF"), // Blue
        Prize::new("discount-30", p.discount_30, "#8B5CF6").with_text_color("#FFFFFF"), // Violet
        Prize::new("mystery", p.mystery, "#EC4899").with_text_color("#FFFFFF"), // Pink
        Prize::new(NO_LUCK_ID, p.no_luck, "#6B7280").with_text_color("#FFFFFF"), // Gray
        Prize::new("gift-100", p.gift_card_100, "#14B8A6").with_text_color("#FFFFFF"), // Teal
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{translations, Locale};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique_and_stable() {
        let en = prize_catalog(translations(Locale::En));
        let vi = prize_catalog(translations(Locale::Vi));

        let ids: HashSet<_> = en.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), en.len());

        let en_ids: Vec<_> = en.iter().map(|p| &p.id).collect();
        let vi_ids: Vec<_> = vi.iter().map(|p| &p.id).collect();
        assert_eq!(en_ids, vi_ids);
        assert_eq!(en[3].id, "gift-50");
        assert_eq!(vi[3].label, "Thẻ Quà $50");
    }

    #[test]
    fn test_exactly_one_no_luck_entry() {
        let catalog = prize_catalog(translations(Locale::En));
        assert_eq!(catalog.iter().filter(|p| p.is_no_luck()).count(), 1);
    }

    #[test]
    fn test_text_color_default() {
        let prize = Prize::new("x", "X", "#000000");
        assert_eq!(prize.text_color(), DEFAULT_TEXT_COLOR);
        assert_eq!(prize.with_text_color("#111111").text_color(), "#111111");
    }
}
