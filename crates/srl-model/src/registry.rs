//! Endpoint Registry.
//!
//! Every record category the API exposes, with the path suffix used to build
//! its URL, the scope its cached results are stored under, and the label the
//! GUI shows on its status button.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::student::StudentId;

/// Static description of one record endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointDescriptor {
    /// Unique key, also used as the display key in the GUI.
    pub key: &'static str,
    /// Path segment appended after the student ID. Empty for the bare
    /// student resource.
    pub path_suffix: &'static str,
    /// Cache namespace for this endpoint's results.
    pub cache_scope: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

impl EndpointDescriptor {
    /// Cache key for this endpoint and student.
    #[must_use]
    pub fn cache_key(&self, student: StudentId) -> CacheKey {
        CacheKey {
            scope: self.cache_scope,
            student,
        }
    }
}

/// Identity of a cached result: the endpoint's scope plus the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub scope: &'static str,
    pub student: StudentId,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.student)
    }
}

/// A record category.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    AllDetails,
    Basic,
    Payment,
    FeeDetails,
    Cards,
    FeeInstallments,
    PaymentHistory,
    Concessions,
    PocketMoney,
    Transport,
    Books,
    Cancellations,
    AdditionalDetails,
    CampusDetails,
    OtherFeeHeads,
    PocketMoneyIssues,
    SelectedClasses,
    UniformPrints,
}

const DESCRIPTORS: [EndpointDescriptor; Category::ALL.len()] = [
    endpoint("allDetails", "", "studentAllDetails", "All Details"),
    endpoint("basic", "basic", "studentBasic", "Basic Details"),
    endpoint("payment", "payment", "studentPayment", "Payment"),
    endpoint("feeDetails", "fee-details", "studentFeeDetails", "Fee Details"),
    endpoint("cards", "cards", "studentCards", "Cards"),
    endpoint(
        "feeInstallments",
        "fee-installments",
        "studentFeeInstallments",
        "Fee Installments",
    ),
    endpoint(
        "paymentHistory",
        "payment-history",
        "studentPaymentHistory",
        "Payment History",
    ),
    endpoint("concessions", "concessions", "studentConcessions", "Concessions"),
    endpoint("pocketMoney", "pocket-money", "studentPocketMoney", "Pocket Money"),
    endpoint("transport", "transport", "studentTransport", "Transport"),
    endpoint("books", "books", "studentBooks", "Books"),
    endpoint(
        "cancellations",
        "cancellations",
        "studentCancellations",
        "Cancellations",
    ),
    endpoint(
        "additionalDetails",
        "additional-details",
        "studentAdditionalDetails",
        "Additional Details",
    ),
    endpoint(
        "campusDetails",
        "campus-details",
        "studentCampusDetails",
        "Campus Details",
    ),
    endpoint(
        "otherFeeHeads",
        "other-fee-heads",
        "studentOtherFeeHeads",
        "Other Fee Heads",
    ),
    endpoint(
        "pocketMoneyIssues",
        "pocket-money-issues",
        "studentPocketMoneyIssues",
        "Pocket Money Issues",
    ),
    endpoint(
        "selectedClasses",
        "selected-classes",
        "studentSelectedClasses",
        "Selected Classes",
    ),
    endpoint(
        "uniformPrints",
        "uniform-prints",
        "studentUniformPrints",
        "Uniform Prints",
    ),
];

const fn endpoint(
    key: &'static str,
    path_suffix: &'static str,
    cache_scope: &'static str,
    label: &'static str,
) -> EndpointDescriptor {
    EndpointDescriptor {
        key,
        path_suffix,
        cache_scope,
        label,
    }
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 18] = [
        Category::AllDetails,
        Category::Basic,
        Category::Payment,
        Category::FeeDetails,
        Category::Cards,
        Category::FeeInstallments,
        Category::PaymentHistory,
        Category::Concessions,
        Category::PocketMoney,
        Category::Transport,
        Category::Books,
        Category::Cancellations,
        Category::AdditionalDetails,
        Category::CampusDetails,
        Category::OtherFeeHeads,
        Category::PocketMoneyIssues,
        Category::SelectedClasses,
        Category::UniformPrints,
    ];

    /// Categories served by every deployment of the API.
    pub const CORE: [Category; 12] = [
        Category::AllDetails,
        Category::Basic,
        Category::Payment,
        Category::FeeDetails,
        Category::Cards,
        Category::FeeInstallments,
        Category::PaymentHistory,
        Category::Concessions,
        Category::PocketMoney,
        Category::Transport,
        Category::Books,
        Category::Cancellations,
    ];

    #[must_use]
    pub fn descriptor(self) -> &'static EndpointDescriptor {
        &DESCRIPTORS[self as usize]
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    #[must_use]
    pub fn path_suffix(self) -> &'static str {
        self.descriptor().path_suffix
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    #[must_use]
    pub fn cache_scope(self) -> &'static str {
        self.descriptor().cache_scope
    }

    /// Whether this category only exists on newer API deployments.
    #[must_use]
    pub fn is_extended(self) -> bool {
        !Self::CORE.contains(&self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The set of categories a lookup fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRegistry {
    categories: Vec<Category>,
}

impl EndpointRegistry {
    /// Core categories only.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            categories: Category::CORE.to_vec(),
        }
    }

    /// Core and extended categories.
    #[must_use]
    pub fn extended() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Look up a category in this registry by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Category> {
        self.iter().find(|category| category.key() == key)
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::extended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_matches_enum_order() {
        for (index, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category as usize, index);
            assert_eq!(category.descriptor(), &DESCRIPTORS[index]);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("feeDetails".parse::<Category>(), Ok(Category::FeeDetails));
        assert!("fee-details".parse::<Category>().is_err());
    }
}
