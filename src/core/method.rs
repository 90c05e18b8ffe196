//! Payment methods and per-method totals.

use serde::Serialize;
use std::fmt;
use std::ops::{AddAssign, Index, IndexMut};

/// Channel through which income was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card payment through the terminal
    Card,
    /// Cash fare
    Cash,
    /// Fare paid through a ride-hailing app
    App,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [Self; 3] = [Self::Card, Self::Cash, Self::App];

    /// Tag stored in the `category` column for income rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
            Self::App => "app",
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Tarjeta",
            Self::Cash => "Efectivo",
            Self::App => "App T3",
        }
    }

    /// Infers a method from a stored category tag.
    ///
    /// Matching ignores case and surrounding whitespace. `app_t3` is the tag older
    /// rows used for app fares.
    #[must_use]
    pub fn from_category(category: &str) -> Option<Self> {
        match category.trim().to_ascii_lowercase().as_str() {
            "card" => Some(Self::Card),
            "cash" => Some(Self::Cash),
            "app" | "app_t3" => Some(Self::App),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accumulated amount per payment method. Every method is always present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MethodTotals {
    /// Total for [`PaymentMethod::Card`]
    pub card: f64,
    /// Total for [`PaymentMethod::Cash`]
    pub cash: f64,
    /// Total for [`PaymentMethod::App`]
    pub app: f64,
}

impl MethodTotals {
    /// Sum over all methods.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.card + self.cash + self.app
    }

    /// Iterates `(method, total)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PaymentMethod, f64)> + '_ {
        PaymentMethod::ALL.into_iter().map(|method| (method, self[method]))
    }
}

impl Index<PaymentMethod> for MethodTotals {
    type Output = f64;

    fn index(&self, method: PaymentMethod) -> &f64 {
        match method {
            PaymentMethod::Card => &self.card,
            PaymentMethod::Cash => &self.cash,
            PaymentMethod::App => &self.app,
        }
    }
}

impl IndexMut<PaymentMethod> for MethodTotals {
    fn index_mut(&mut self, method: PaymentMethod) -> &mut f64 {
        match method {
            PaymentMethod::Card => &mut self.card,
            PaymentMethod::Cash => &mut self.cash,
            PaymentMethod::App => &mut self.app,
        }
    }
}

impl AddAssign for MethodTotals {
    fn add_assign(&mut self, other: Self) {
        for method in PaymentMethod::ALL {
            self[method] += other[method];
        }
    }
}
