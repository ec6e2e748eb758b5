//! Normalized string-edit distance and similarity ranking.
//!
//! Used to suggest close matches when a member lookup fails: every
//! function-like name on the container is ranked against the query and the
//! best few are attached to the error.

/// Computes the unit-cost edit distance (insert, delete, substitute)
/// between `a` and `b`, normalized by the longer length so the result is
/// always in `0.0..=1.0`. Two empty strings have distance zero.
pub fn distance(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let longest = a_chars.len().max(b_chars.len());
    if longest == 0 {
        return 0.0;
    }

    // Keep the shorter string on the row axis so only two rows of that
    // width are ever allocated.
    let (rows, cols) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut previous: Vec<usize> = (0..=rows.len()).collect();
    let mut current: Vec<usize> = vec![0; rows.len() + 1];

    for (i, col_char) in cols.iter().enumerate() {
        current[0] = i + 1;
        for (j, row_char) in rows.iter().enumerate() {
            let substitution = previous[j] + usize::from(col_char != row_char);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[rows.len()] as f64 / longest as f64
}

/// Orders `candidates` by ascending distance from `query`. The sort is
/// stable, so candidates at equal distance keep their original order.
pub fn rank<'a>(query: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    let mut ranked: Vec<(f64, &str)> = candidates
        .iter()
        .map(|candidate| (distance(query, candidate), *candidate))
        .collect();
    ranked.sort_by(|x, y| x.0.total_cmp(&y.0));
    ranked.into_iter().map(|(_, candidate)| candidate).collect()
}
