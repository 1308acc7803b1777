use crate::error::{check_parallel, Result};

/// Sort `(time, value)` pairs into time order.
///
/// Both vectors are reordered together so that `times` is non-descending.
/// The sort is stable: observations with equal times keep their input order.
///
/// # Errors
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the vectors
/// differ in length; they are untouched in that case.
pub fn sort_by_time(times: &mut Vec<f64>, values: &mut Vec<f64>) -> Result<()> {
    sort_columns([times, values])
}

/// Sort `(time, value, error)` triples into time order.
///
/// Produces the same ordering of `times` and `values` as [`sort_by_time`]
/// given the same inputs.
pub fn sort_by_time_with_errors(
    times: &mut Vec<f64>,
    values: &mut Vec<f64>,
    errors: &mut Vec<f64>,
) -> Result<()> {
    sort_columns([times, values, errors])
}

/// Pack the columns into rows keyed by `columns[0]`, sort the rows, and
/// unpack into fresh vectors. The caller's vectors are only assigned after
/// every fresh vector is complete.
fn sort_columns<const N: usize>(columns: [&mut Vec<f64>; N]) -> Result<()> {
    let slices: [&[f64]; N] = std::array::from_fn(|c| columns[c].as_slice());
    let len = check_parallel("sort_by_time", &slices)?;

    let mut rows: Vec<[f64; N]> = (0..len)
        .map(|i| std::array::from_fn(|c| slices[c][i]))
        .collect();
    rows.sort_by(|a, b| a[0].total_cmp(&b[0]));

    let mut sorted: [Vec<f64>; N] = std::array::from_fn(|_| Vec::with_capacity(len));
    for row in &rows {
        for (column, &x) in sorted.iter_mut().zip(row) {
            column.push(x);
        }
    }

    for (column, fresh) in columns.into_iter().zip(sorted) {
        *column = fresh;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::ErrorKind;
    use crate::stats::is_sorted;

    fn mock(len: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let times = (0..len).map(|i| 10.0 * (0.1 * i as f64).sin()).collect();
        let values = (0..len).map(|i| 10.0 * (0.1 * i as f64).cos()).collect();
        let errors = (0..len).map(|i| 0.1 + 0.001 * i as f64).collect();
        (times, values, errors)
    }

    #[test]
    fn sorts_pairs_jointly() {
        let mut times = vec![3.0, 1.0, 2.0];
        let mut values = vec![30.0, 10.0, 20.0];

        sort_by_time(&mut times, &mut values).unwrap();

        assert_eq!(times, vec![1.0, 2.0, 3.0]);
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut times = vec![2.0, 1.0, 2.0, 1.0];
        let mut values = vec![1.0, 2.0, 3.0, 4.0];

        sort_by_time(&mut times, &mut values).unwrap();

        assert_eq!(times, vec![1.0, 1.0, 2.0, 2.0]);
        assert_eq!(values, vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn mid_sized_triples_stay_aligned() {
        let (mut times, mut values, mut errors) = mock(200);
        let mut rows: Vec<(f64, f64, f64)> = times
            .iter()
            .zip(&values)
            .zip(&errors)
            .map(|((&t, &v), &e)| (t, v, e))
            .collect();

        sort_by_time_with_errors(&mut times, &mut values, &mut errors).unwrap();

        assert!(is_sorted(&times));
        for ((&t, &v), &e) in times.iter().zip(&values).zip(&errors) {
            let pos = rows
                .iter()
                .position(|&r| r == (t, v, e))
                .expect("sorted row was not in the input");
            rows.swap_remove(pos);
        }
        assert!(rows.is_empty());
    }

    #[test]
    fn two_and_three_column_orderings_agree() {
        let (times, values, errors) = mock(200);
        let (mut t2, mut v2) = (times.clone(), values.clone());
        let (mut t3, mut v3, mut e3) = (times, values, errors);

        sort_by_time(&mut t2, &mut v2).unwrap();
        sort_by_time_with_errors(&mut t3, &mut v3, &mut e3).unwrap();

        assert_eq!(t2, t3);
        assert_eq!(v2, v3);
    }

    #[test]
    fn two_and_three_column_orderings_agree_on_ties() {
        // Rounded to whole days: every time repeats several times.
        let (times, values, errors) = mock(200);
        let times: Vec<f64> = times.iter().map(|t| t.round()).collect();
        let (mut t2, mut v2) = (times.clone(), values.clone());
        let (mut t3, mut v3, mut e3) = (times, values, errors);

        sort_by_time(&mut t2, &mut v2).unwrap();
        sort_by_time_with_errors(&mut t3, &mut v3, &mut e3).unwrap();

        assert!(t2.windows(2).any(|w| w[0] == w[1]));
        assert_eq!(t2, t3);
        assert_eq!(v2, v3);

        // mock() errors grow with the input index, so within each run of
        // equal times they must still be increasing.
        for i in 1..t3.len() {
            if t3[i] == t3[i - 1] {
                assert!(e3[i - 1] < e3[i]);
            }
        }
    }

    #[test]
    fn empty_and_ragged() {
        let mut times: Vec<f64> = Vec::new();
        let mut values: Vec<f64> = Vec::new();
        sort_by_time(&mut times, &mut values).unwrap();
        assert!(times.is_empty());

        let mut times = vec![2.0, 1.0];
        let mut values = vec![1.0];
        let err = sort_by_time(&mut times, &mut values).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(times, vec![2.0, 1.0]);
    }

    proptest! {
        #[test]
        fn sorted_times_after_sort(
            pairs in prop::collection::vec((-1.0e9f64..1.0e9, -1.0e3f64..1.0e3), 0..128),
        ) {
            let (mut times, mut values): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            sort_by_time(&mut times, &mut values).unwrap();
            prop_assert!(is_sorted(&times));
        }
    }
}
