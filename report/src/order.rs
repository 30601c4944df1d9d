/// Sorts player names ascending, ignoring case.
///
/// Names that only differ in case keep their relative input order.
pub fn display_order<S>(names: &[S]) -> Vec<String>
where
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = names.iter().map(|n| n.as_ref().to_owned()).collect();
    sorted.sort_by_cached_key(|n| n.to_lowercase());
    sorted
}
