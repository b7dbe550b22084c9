use crossterm::style::{Color, Stylize};

pub(crate) const ACCENT: Color = Color::Rgb {
    r: 137,
    g: 180,
    b: 250,
};
pub(crate) const GREEN: Color = Color::Rgb {
    r: 166,
    g: 227,
    b: 161,
};
pub(crate) const RED: Color = Color::Rgb {
    r: 243,
    g: 139,
    b: 168,
};
pub(crate) const TEXT_DIM: Color = Color::Rgb {
    r: 127,
    g: 132,
    b: 156,
};

/// Terminal styling that collapses to plain text when disabled.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    enabled: bool,
}

impl Theme {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub(crate) fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.with(ACCENT).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn income(&self, text: &str) -> String {
        self.paint(text, GREEN)
    }

    pub(crate) fn expense(&self, text: &str) -> String {
        self.paint(text, RED)
    }

    pub(crate) fn dim(&self, text: &str) -> String {
        self.paint(text, TEXT_DIM)
    }

    /// Green when `val` is non-negative, red otherwise.
    pub(crate) fn signed(&self, val: rust_decimal::Decimal, text: &str) -> String {
        if val.is_sign_negative() && !val.is_zero() {
            self.expense(text)
        } else {
            self.income(text)
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
