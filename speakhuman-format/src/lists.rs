//! List joining

use speakhuman_i18n::{active, fill};
use std::fmt::Display;

/// Join items into a phrase with the active locale's conjunction.
///
/// English uses the serial (Oxford) comma for three or more items.
///
/// # Example
///
/// ```
/// use speakhuman_format::lists::natural_list;
///
/// assert_eq!(natural_list::<&str>(&[]), "");
/// assert_eq!(natural_list(&["a"]), "a");
/// assert_eq!(natural_list(&["a", "b"]), "a and b");
/// assert_eq!(natural_list(&["a", "b", "c"]), "a, b, and c");
/// assert_eq!(natural_list(&[1, 2, 3]), "1, 2, and 3");
/// ```
pub fn natural_list<T: Display>(items: &[T]) -> String {
    let catalog = active();
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => {
            let (first, second) = (first.to_string(), second.to_string());
            fill(
                catalog.text("list.pair"),
                &[("first", first.as_str()), ("second", second.as_str())],
            )
        }
        [head @ .., last] => {
            let head = head
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let last = last.to_string();
            fill(
                catalog.text("list.serial"),
                &[("head", head.as_str()), ("last", last.as_str())],
            )
        }
    }
}
