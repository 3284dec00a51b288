//! Argument predicates shared by the field expressions.

use std::collections::HashMap;

pub(crate) fn is_between_inclusive(value: i32, lower: i32, upper: i32) -> bool {
    (lower..=upper).contains(&value)
}

/// Exactly one argument, within bounds.
pub(crate) fn is_single_within(args: &[i32], lower: i32, upper: i32) -> bool {
    matches!(args, [value] if is_between_inclusive(*value, lower, upper))
}

/// Exactly two arguments, both within bounds.
pub(crate) fn is_pair_within(args: &[i32], lower: i32, upper: i32) -> bool {
    matches!(args, [first, second]
        if is_between_inclusive(*first, lower, upper) && is_between_inclusive(*second, lower, upper))
}

/// Non-empty, every argument within bounds.
pub(crate) fn is_list_within(args: &[i32], lower: i32, upper: i32) -> bool {
    !args.is_empty() && args.iter().all(|&v| is_between_inclusive(v, lower, upper))
}

/// Even, non-empty, every argument within bounds, and no value given more than
/// twice. Values are counted as given, so weekday 0 and 7 are distinct here.
pub(crate) fn is_multi_range_list(args: &[i32], lower: i32, upper: i32) -> bool {
    if args.is_empty() || args.len() % 2 != 0 || !is_list_within(args, lower, upper) {
        return false;
    }
    let mut frequency: HashMap<i32, usize> = HashMap::new();
    for &value in args {
        *frequency.entry(value).or_default() += 1;
    }
    frequency.values().all(|&count| count <= 2)
}
