//! Binary search over a name-sorted item sequence.

use core::cmp::Ordering;

use crate::item::SupplyItem;

/// Locate `name` in `items`, returning the matching item and its index, or
/// `None` when absent.
///
/// Precondition: `items` is sorted ascending by `name` (case-sensitive
/// ordinal comparison), as the store upholds between mutations. The
/// precondition is not re-checked here; on unsorted input the result may be
/// wrong or missing, but the search never panics. O(log n).
pub fn find_by_name<'a>(items: &'a [SupplyItem], name: &str) -> Option<(usize, &'a SupplyItem)> {
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].name.as_str().cmp(name) {
            Ordering::Equal => return Some((mid, &items[mid])),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
