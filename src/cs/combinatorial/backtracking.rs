use log::trace;

/// Backtracking enumeration of permutations.
///
/// Every position of the input carries a "used" marker while a growable buffer
/// holds the arrangement built so far. At each depth the unused positions are
/// tried left to right; after the recursive call returns, the choice is undone
/// (the item is popped and its marker cleared) before the next position is tried.
///
/// # Examples
/// ```
/// use anagrams::cs::combinatorial::backtracking::permutations;
/// let data = vec![1, 2, 3];
/// let perms = permutations(&data);
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![1, 2, 3]);
/// assert_eq!(perms[5], vec![3, 2, 1]);
/// ```

/// Returns all permutations of the input slice, in backtracking order.
///
/// # Example
/// ```
/// use anagrams::cs::combinatorial::backtracking::permutations;
///
/// let items = vec!['a', 'b', 'c'];
/// let perms = permutations(&items);
/// assert_eq!(perms, vec![
///     vec!['a', 'b', 'c'],
///     vec!['a', 'c', 'b'],
///     vec!['b', 'a', 'c'],
///     vec!['b', 'c', 'a'],
///     vec!['c', 'a', 'b'],
///     vec!['c', 'b', 'a'],
/// ]);
/// ```
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut results = Vec::with_capacity(factorial_hint(items.len()));
    for_each_permutation(items, |arrangement| results.push(arrangement.to_vec()));
    results
}

/// Calls `visit` once for every permutation of `items`.
///
/// The slice handed to `visit` is the internal buffer and is only valid for the
/// duration of the call. An empty input yields a single empty arrangement.
pub fn for_each_permutation<T, F>(items: &[T], mut visit: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let mut used = vec![false; items.len()];
    let mut current = Vec::with_capacity(items.len());
    backtrack(items, &mut used, &mut current, &mut visit);
}

fn backtrack<T, F>(items: &[T], used: &mut [bool], current: &mut Vec<T>, visit: &mut F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    if current.len() == items.len() {
        visit(current.as_slice());
        return;
    }
    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(items[i].clone());
        trace!("depth {}: chose position {}", current.len(), i);
        backtrack(items, used, current, visit);
        current.pop();
        used[i] = false;
    }
}

const MAX_CAPACITY_HINT: usize = 1 << 16;

// Up-front capacity for n! results, capped so large inputs grow on demand.
fn factorial_hint(n: usize) -> usize {
    (2..=n)
        .try_fold(1usize, |acc, k| acc.checked_mul(k))
        .map_or(0, |count| count.min(MAX_CAPACITY_HINT))
}
