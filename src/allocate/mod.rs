use crate::models::{Allocation, Category};

/// Split `income` across `categories`, one allocation per category in order.
///
/// Each amount is `income * percentage / 100` truncated toward zero. Remainders
/// lost to truncation are not redistributed, and percentages are used as given.
pub(crate) fn allocate(income: i64, categories: &[Category]) -> Vec<Allocation> {
    categories
        .iter()
        .map(|category| Allocation {
            category: category.clone(),
            amount: share(income, category.percentage),
        })
        .collect()
}

/// `percentage` percent of `income`, truncated toward zero.
pub(crate) fn share(income: i64, percentage: u8) -> i64 {
    // widened so the product never overflows; only percentages above 100 can saturate
    let amount = i128::from(income) * i128::from(percentage) / 100;
    i64::try_from(amount).unwrap_or(if amount < 0 { i64::MIN } else { i64::MAX })
}
