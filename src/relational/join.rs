use std::{collections::HashMap, hash::Hash};

/// Index `rows` by key, keeping every row for a repeated key in input order.
fn index_by<'a, R, K, F>(rows: &'a [R], key: F) -> HashMap<K, Vec<&'a R>>
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    let mut index: HashMap<K, Vec<&R>> = HashMap::with_capacity(rows.len());
    for row in rows {
        index.entry(key(row)).or_default().push(row);
    }
    index
}

/// Hash join keeping only left rows that match at least one right row.
///
/// Output follows left input order; a left row matching several right rows
/// is emitted once per match, in right input order.
pub fn inner_join<'l, 'r, L, R, K, FL, FR>(
    left: &'l [L],
    right: &'r [R],
    left_key: FL,
    right_key: FR,
) -> Vec<(&'l L, &'r R)>
where
    K: Eq + Hash,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
{
    let index = index_by(right, right_key);
    let mut out = Vec::with_capacity(left.len());
    for l in left {
        if let Some(matches) = index.get(&left_key(l)) {
            out.extend(matches.iter().map(|r| (l, *r)));
        }
    }
    out
}

/// Hash join keeping every left row; unmatched rows (including rows whose
/// key is `None`) are paired with `None`.
pub fn left_join<'l, 'r, L, R, K, FL, FR>(
    left: &'l [L],
    right: &'r [R],
    left_key: FL,
    right_key: FR,
) -> Vec<(&'l L, Option<&'r R>)>
where
    K: Eq + Hash,
    FL: Fn(&L) -> Option<K>,
    FR: Fn(&R) -> K,
{
    let index = index_by(right, right_key);
    let mut out = Vec::with_capacity(left.len());
    for l in left {
        match left_key(l).and_then(|k| index.get(&k)) {
            Some(matches) => out.extend(matches.iter().map(|r| (l, Some(*r)))),
            None => out.push((l, None)),
        }
    }
    out
}
