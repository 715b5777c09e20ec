//! Divide-and-conquer merge sort over item sequences.
//!
//! The store re-sorts after every structural change, so this is the routine
//! that upholds the name-order invariant the binary search relies on.

/// Sort `items` ascending by the key produced by `key`, returning a new
/// vector. The input is left untouched.
///
/// Splits at the midpoint, sorts each half recursively, then merges by
/// repeatedly taking the lesser-keyed front element; ties take the right
/// half's element. O(n log n) time, O(n) auxiliary space per merge level.
/// Sequences of length 0 or 1 are returned unchanged.
pub fn merge_sort_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_halves(items, &mut key)
}

fn sort_halves<T, K, F>(items: &[T], key: &mut F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = sort_halves(&items[..mid], key);
    let right = sort_halves(&items[mid..], key);
    merge(&left, &right, key)
}

fn merge<T, K, F>(left: &[T], right: &[T], key: &mut F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if key(&left[i]) < key(&right[j]) {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
