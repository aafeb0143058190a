//! Predicate, combinator and modifier helpers

use super::encode::encode_value;
use super::fragment::Fragment;
use std::fmt::Display;

fn predicate(op: &str, field: &str, value: &dyn Display) -> Fragment {
    let value = value.to_string();
    if field.is_empty() || value.is_empty() {
        return Fragment::empty();
    }
    Fragment::raw(format!("{}({},{})", op, field, encode_value(field, &value)))
}

fn combine<I>(op: &str, fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let parts: Vec<String> = fragments
        .into_iter()
        .filter(|f| !f.as_ref().is_empty())
        .map(|f| f.as_ref().to_string())
        .collect();

    if parts.is_empty() {
        return Fragment::empty();
    }
    Fragment::raw(format!("{}({})", op, parts.join(",")))
}

/// `eq(field,value)`
pub fn eq(field: &str, value: impl Display) -> Fragment {
    predicate("eq", field, &value)
}

/// `ne(field,value)`
pub fn ne(field: &str, value: impl Display) -> Fragment {
    predicate("ne", field, &value)
}

/// `gt(field,value)`
pub fn gt(field: &str, value: impl Display) -> Fragment {
    predicate("gt", field, &value)
}

/// `lt(field,value)`
pub fn lt(field: &str, value: impl Display) -> Fragment {
    predicate("lt", field, &value)
}

/// `in(field,v1,v2,...)`; empty when `values` is empty.
pub fn in_<I>(field: &str, values: I) -> Fragment
where
    I: IntoIterator,
    I::Item: Display,
{
    let encoded: Vec<String> = values
        .into_iter()
        .map(|v| v.to_string())
        .filter(|v| !v.is_empty())
        .map(|v| encode_value(field, &v))
        .collect();

    if field.is_empty() || encoded.is_empty() {
        return Fragment::empty();
    }
    Fragment::raw(format!("in({},{})", field, encoded.join(",")))
}

/// `keyword(value)` full-text match
pub fn keyword(value: impl Display) -> Fragment {
    let value = value.to_string();
    if value.is_empty() {
        return Fragment::empty();
    }
    Fragment::raw(format!("keyword({})", urlencoding::encode(&value)))
}

/// `and(...)` over the non-empty fragments
pub fn and<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    combine("and", fragments)
}

/// `or(...)` over the non-empty fragments
pub fn or<I>(fragments: I) -> Fragment
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    combine("or", fragments)
}

/// Open range on one field: `and(gt(field,low),lt(field,high))`
pub fn between(field: &str, low: impl Display, high: impl Display) -> Fragment {
    and([gt(field, low), lt(field, high)])
}

/// `select(f1,f2,...)`; empty field names are skipped.
pub fn select<I>(fields: I) -> Fragment
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let fields: Vec<String> = fields
        .into_iter()
        .map(|f| f.as_ref().trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();

    if fields.is_empty() {
        return Fragment::empty();
    }
    Fragment::raw(format!("select({})", fields.join(",")))
}

/// `sort(expr)`; the expression is passed through untouched.
pub fn sort(expr: &str) -> Fragment {
    if expr.trim().is_empty() {
        return Fragment::empty();
    }
    Fragment::raw(format!("sort({})", expr))
}

/// `limit(n)`
pub fn limit(n: u64) -> Fragment {
    Fragment::raw(format!("limit({})", n))
}

/// The bulk delivery marker `http_download=true`
pub fn http_download(enabled: bool) -> Fragment {
    if enabled {
        Fragment::raw("http_download=true")
    } else {
        Fragment::empty()
    }
}

/// One `eq` per entry, in iteration order.
pub fn obj_to_eq<I, K, V>(criteria: I) -> Vec<Fragment>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    criteria
        .into_iter()
        .map(|(field, value)| eq(field.as_ref(), value))
        .collect()
}

/// `and` of one `eq` per entry
pub fn build_and_from<I, K, V>(criteria: I) -> Fragment
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    and(obj_to_eq(criteria))
}
