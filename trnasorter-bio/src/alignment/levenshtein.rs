/// Unit-cost edit distance (insert, delete, substitute)
pub fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row over `b`
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;

            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[b.len()]
}
