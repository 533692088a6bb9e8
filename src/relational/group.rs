use std::{collections::BTreeMap, ops::AddAssign};

/// Group `rows` by `key` and sum `value` within each group.
///
/// Groups come back in ascending key order. Only keys present in `rows`
/// produce a group.
pub fn group_sum<T, K, V, FK, FV>(
    rows: impl IntoIterator<Item = T>,
    key: FK,
    value: FV,
) -> BTreeMap<K, V>
where
    K: Ord,
    V: Default + AddAssign,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> V,
{
    let mut groups: BTreeMap<K, V> = BTreeMap::new();
    for row in rows {
        *groups.entry(key(&row)).or_default() += value(&row);
    }
    groups
}
