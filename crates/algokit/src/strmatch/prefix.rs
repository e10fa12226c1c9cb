/// Prefix function of `s`.
///
/// Post: `result[i]` is the largest `k <= i` with `s[..k] == s[i + 1 - k..=i]`.
/// Runs in amortized O(n): `k` grows by at most one per index and every
/// fallback step shrinks it.
pub fn prefix_function<T: PartialEq>(s: &[T]) -> Vec<usize> {
    let mut table = vec![0usize; s.len()];
    for i in 1..s.len() {
        let mut k = table[i - 1];
        while k > 0 && s[i] != s[k] {
            k = table[k - 1];
        }
        if s[i] == s[k] {
            k += 1;
        }
        table[i] = k;
    }
    table
}
