//! Discount Classes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of discount a function is currently allowed to apply.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountClass {
    /// Reductions on the order subtotal.
    Order,

    /// Reductions on individual cart lines.
    Product,

    /// Reductions on delivery options.
    Shipping,
}

impl DiscountClass {
    /// Every class, in declaration order.
    pub const ALL: [DiscountClass; 3] = [Self::Order, Self::Product, Self::Shipping];

    const fn bit(self) -> u8 {
        match self {
            Self::Order => 0b001,
            Self::Product => 0b010,
            Self::Shipping => 0b100,
        }
    }
}

/// Set of eligible discount classes, stored as a bitset.
///
/// On the wire this is a list of class names such as `["ORDER", "SHIPPING"]`.
/// Duplicates collapse and the set always iterates in declaration order.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<DiscountClass>", into = "Vec<DiscountClass>")]
pub struct DiscountClasses(u8);

impl DiscountClasses {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a class to the set.
    pub fn insert(&mut self, class: DiscountClass) {
        self.0 |= class.bit();
    }

    /// Check if the class is in the set.
    pub const fn contains(self, class: DiscountClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Check if the set has no classes.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the classes in the set.
    pub fn iter(self) -> impl Iterator<Item = DiscountClass> {
        DiscountClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl fmt::Debug for DiscountClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<DiscountClass> for DiscountClasses {
    fn from_iter<I: IntoIterator<Item = DiscountClass>>(iter: I) -> Self {
        let mut classes = Self::empty();

        for class in iter {
            classes.insert(class);
        }

        classes
    }
}

impl<const N: usize> From<[DiscountClass; N]> for DiscountClasses {
    fn from(classes: [DiscountClass; N]) -> Self {
        classes.into_iter().collect()
    }
}

impl From<Vec<DiscountClass>> for DiscountClasses {
    fn from(classes: Vec<DiscountClass>) -> Self {
        classes.into_iter().collect()
    }
}

impl From<DiscountClasses> for Vec<DiscountClass> {
    fn from(classes: DiscountClasses) -> Self {
        classes.iter().collect()
    }
}
