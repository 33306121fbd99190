use crate::Seq;

/// Returns the arithmetic mean of the elements, or `0.0` for an empty sequence.
///
/// ```rust
/// use seqtools::{average, source_iter};
///
/// assert_eq!(2.5, average(source_iter([1u8, 2, 3, 4])));
/// assert_eq!(0.0, average(source_iter(Vec::<f32>::new())));
/// ```
pub fn average<S>(seq: S) -> f64
where
    S: Seq,
    S::Item: Into<f64>,
{
    average_by(seq, Into::into)
}

/// Returns the mean of `func` applied to each element, or `0.0` for an empty sequence.
pub fn average_by<S, Func>(seq: S, mut func: Func) -> f64
where
    S: Seq,
    Func: FnMut(S::Item) -> f64,
{
    let mut sum = 0.0;
    let mut count = 0_usize;
    seq.drive(|item| {
        sum += (func)(item);
        count += 1;
        true
    });
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}
