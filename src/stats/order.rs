/// True if every element is `<=` its successor.
///
/// Sequences with fewer than two elements are sorted. Only adjacent pairs
/// where the successor compares strictly less break the order, so a NaN
/// never makes a sequence unsorted.
pub fn is_sorted<'a, T, I>(data: I) -> bool
where
    T: PartialOrd + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut iter = data.into_iter();
    let Some(mut prev) = iter.next() else {
        return true;
    };
    for next in iter {
        if next < prev {
            return false;
        }
        prev = next;
    }
    true
}
