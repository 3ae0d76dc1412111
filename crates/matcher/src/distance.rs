/// Levenshtein distance between `a` and `b`, counted in `char`s.
///
/// Fills a `(len(b) + 1) x (len(a) + 1)` grid where cell `(i, j)` holds the
/// distance between the first `i` chars of `b` and the first `j` chars of
/// `a`. The grid lives only for the duration of the call.
///
/// No normalization is applied; callers fold their inputs first if they
/// want case- or accent-insensitive distances.
///
/// ```rust
/// use matcher::edit_distance;
///
/// assert_eq!(edit_distance("rvi", "ravi"), 1);
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let cols = a.len() + 1;
    let rows = b.len() + 1;
    let mut grid = vec![0usize; rows * cols];

    for (j, cell) in grid.iter_mut().take(cols).enumerate() {
        *cell = j;
    }
    for (i, cell) in grid.iter_mut().step_by(cols).enumerate() {
        *cell = i;
    }

    for i in 1..rows {
        for j in 1..cols {
            let here = i * cols + j;
            let diagonal = grid[here - cols - 1];
            grid[here] = if b[i - 1] == a[j - 1] {
                diagonal
            } else {
                let left = grid[here - 1];
                let above = grid[here - cols];
                1 + diagonal.min(left).min(above)
            };
        }
    }

    grid[rows * cols - 1]
}
