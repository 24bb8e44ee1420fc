use serde::{Deserialize, Serialize};

/// Languages the widget ships strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Vi,
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl Locale {
    /// Toggle order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Exact two-letter tag only; anything else is unsupported.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Vi => "Tiếng Việt",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇬🇧",
            Locale::Vi => "🇻🇳",
        }
    }

    /// The locale after this one, wrapping around.
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    pub fn translations(self) -> &'static Translations {
        translations(self)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CommonText {
    pub loading: &'static str,
    pub error: &'static str,
    pub close: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavText {
    pub home: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HeroText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email_placeholder: &'static str,
    pub spin_button: &'static str,
    pub terms_text: &'static str,
    pub terms_link: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct WheelText {
    pub spinning: &'static str,
    pub you_won: &'static str,
    pub try_again: &'static str,
    pub email_required: &'static str,
    pub invalid_email: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PrizeText {
    pub discount_10: &'static str,
    pub discount_20: &'static str,
    pub discount_30: &'static str,
    pub free_shipping: &'static str,
    pub gift_card_50: &'static str,
    pub gift_card_100: &'static str,
    pub no_luck: &'static str,
    pub mystery: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ResultText {
    pub title: &'static str,
    pub message: &'static str,
    pub code: &'static str,
    pub copy_code: &'static str,
    pub copied: &'static str,
    pub shop_now: &'static str,
    pub no_luck_title: &'static str,
    pub no_luck_message: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FooterText {
    pub rights: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ValidationText {
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub email_too_long: &'static str,
}

/// Every display string of the widget for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub common: CommonText,
    pub nav: NavText,
    pub hero: HeroText,
    pub wheel: WheelText,
    pub prizes: PrizeText,
    pub result: ResultText,
    pub footer: FooterText,
    pub validation: ValidationText,
}

pub fn translations(locale: Locale) -> &'static Translations {
    match locale {
        Locale::En => &EN,
        Locale::Vi => &VI,
    }
}

static EN: Translations = Translations {
    common: CommonText {
        loading: "Loading...",
        error: "Something went wrong",
        close: "Close",
    },
    nav: NavText {
        home: "Home",
        language: "Switch Language",
        theme: "Toggle theme",
    },
    hero: HeroText {
        title: "Spin the Wheel & Win!",
        subtitle: "Enter your email for a chance to win exclusive prizes and discounts",
        email_placeholder: "Enter your email address",
        spin_button: "Spin the Wheel",
        terms_text: "By participating, you agree to our",
        terms_link: "Terms & Conditions",
    },
    wheel: WheelText {
        spinning: "Spinning...",
        you_won: "You won:",
        try_again: "Try Again",
        email_required: "Email is required to spin",
        invalid_email: "Please enter a valid email address",
    },
    prizes: PrizeText {
        discount_10: "10% Off",
        discount_20: "20% Off",
        discount_30: "30% Off",
        free_shipping: "Free Shipping",
        gift_card_50: "$50 Gift Card",
        gift_card_100: "$100 Gift Card",
        no_luck: "Better Luck Next Time",
        mystery: "Mystery Prize",
    },
    result: ResultText {
        title: "🎉 Congratulations!",
        message: "Your prize has been sent to your email!",
        code: "Promo Code:",
        copy_code: "Copy Code",
        copied: "Copied!",
        shop_now: "Shop Now",
        no_luck_title: "😔 Not This Time",
        no_luck_message: "Don't worry! Check your email for other exclusive offers.",
    },
    footer: FooterText {
        rights: "All rights reserved",
        privacy: "Privacy Policy",
        terms: "Terms of Service",
        contact: "Contact Us",
    },
    validation: ValidationText {
        email_required: "Email address is required",
        email_invalid: "Please enter a valid email address",
        email_too_long: "Email address is too long",
    },
};

static VI: Translations = Translations {
    common: CommonText {
        loading: "Đang tải...",
        error: "Đã có lỗi xảy ra",
        close: "Đóng",
    },
    nav: NavText {
        home: "Trang chủ",
        language: "Đổi ngôn ngữ",
        theme: "Đổi giao diện",
    },
    hero: HeroText {
        title: "Quay Số Trúng Thưởng!",
        subtitle: "Nhập email để có cơ hội nhận quà tặng và ưu đãi độc quyền",
        email_placeholder: "Nhập địa chỉ email của bạn",
        spin_button: "Quay Ngay",
        terms_text: "Bằng việc tham gia, bạn đồng ý với",
        terms_link: "Điều khoản & Điều kiện",
    },
    wheel: WheelText {
        spinning: "Đang quay...",
        you_won: "Bạn đã trúng:",
        try_again: "Thử Lại",
        email_required: "Vui lòng nhập email để quay",
        invalid_email: "Vui lòng nhập email hợp lệ",
    },
    prizes: PrizeText {
        discount_10: "Giảm 10%",
        discount_20: "Giảm 20%",
        discount_30: "Giảm 30%",
        free_shipping: "Miễn Phí Ship",
        gift_card_50: "Thẻ Quà $50",
        gift_card_100: "Thẻ Quà $100",
        no_luck: "Chúc Bạn May Mắn Lần Sau",
        mystery: "Phần Quà Bí Ẩn",
    },
    result: ResultText {
        title: "🎉 Chúc Mừng!",
        message: "Phần thưởng đã được gửi đến email của bạn!",
        code: "Mã Khuyến Mãi:",
        copy_code: "Sao Chép Mã",
        copied: "Đã Sao Chép!",
        shop_now: "Mua Sắm Ngay",
        no_luck_title: "😔 Chưa May Mắn Lần Này",
        no_luck_message: "Đừng lo! Kiểm tra email để nhận các ưu đãi độc quyền khác.",
    },
    footer: FooterText {
        rights: "Bản quyền thuộc về",
        privacy: "Chính Sách Bảo Mật",
        terms: "Điều Khoản Dịch Vụ",
        contact: "Liên Hệ",
    },
    validation: ValidationText {
        email_required: "Vui lòng nhập địa chỉ email",
        email_invalid: "Vui lòng nhập email hợp lệ",
        email_too_long: "Địa chỉ email quá dài",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Locale::En.next(), Locale::Vi);
        assert_eq!(Locale::Vi.next(), Locale::En);
    }

    #[test]
    fn test_dictionaries_differ() {
        let en = translations(Locale::En);
        let vi = translations(Locale::Vi);
        assert_ne!(en, vi);
        assert_eq!(en.prizes.gift_card_100, "$100 Gift Card");
        assert_eq!(vi.prizes.free_shipping, "Miễn Phí Ship");
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_serde_uses_tag() {
        assert_eq!(serde_json::to_string(&Locale::Vi).unwrap(), "\"vi\"");
        let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
