//! Display cap resolution.
//!
//! Given per-column natural widths and a screen budget, [`resolve_max_width`]
//! picks the single width at which fields must be truncated so rows fit on
//! screen. The allocation is greedy smallest-first: columns are committed at
//! their natural width in ascending order, and the moment the remaining
//! (wider) columns can no longer all fit at the current width, the leftover
//! budget is split evenly among them.
//!
//! Narrow columns are therefore never penalized for wide neighbors; the cap
//! only bites the columns that actually overflow.

use crate::COLUMN_GAP;

/// Resolves the uniform display cap for a table.
///
/// `screen_width` is the total budget in character cells; `natural` holds
/// the longest field length of each column. Each of the `n` columns pays
/// for a [`COLUMN_GAP`] on output, leaving `screen_width - gap * (n - 1)`
/// cells of raw text budget (`n - 1` separating gaps; the trailing gap
/// falls outside the budget).
///
/// The cap is returned as a signed width. When every column fits at its
/// natural width the cap is `screen_width` itself, which no single field
/// can reach, so nothing truncates. When the screen cannot even hold the
/// gaps the cap is zero or negative; [`RowFormatter`](crate::RowFormatter)
/// renders marker-only fields in that case. Pure arithmetic, no failure
/// modes.
pub fn resolve_max_width(screen_width: usize, natural: &[usize]) -> isize {
    let n = natural.len();
    let gap = COLUMN_GAP.len() as isize;
    let limit = screen_width as isize - gap * (n as isize - 1);

    let mut sorted = natural.to_vec();
    sorted.sort_unstable();

    let mut used: isize = 0;
    for (i, &width) in sorted.iter().enumerate() {
        let remaining = (n - i) as isize;
        if used + remaining * width as isize > limit {
            // Narrower columns already took their full width; the leftover
            // budget is shared evenly by everything still unplaced. Floor
            // division so a negative budget stays negative.
            return (limit - used).div_euclid(remaining);
        }
        used += width as isize;
    }

    screen_width as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_columns_fitting_returns_screen_width() {
        assert_eq!(resolve_max_width(80, &[3, 3, 3]), 80);
    }

    #[test]
    fn exact_fit_still_returns_screen_width() {
        // 3 + 3 + 3 raw plus two gaps of 2 is exactly 13.
        assert_eq!(resolve_max_width(13, &[3, 3, 3]), 13);
    }

    #[test]
    fn single_wide_column_gets_the_whole_budget() {
        assert_eq!(resolve_max_width(10, &[50]), 10);
    }

    #[test]
    fn wide_column_shrinks_before_narrow_ones() {
        // limit 10; the 2-cell column commits in full, the wide one gets
        // the remaining 8.
        assert_eq!(resolve_max_width(12, &[2, 10]), 8);
        assert_eq!(resolve_max_width(12, &[10, 2]), 8);
    }

    #[test]
    fn leftover_budget_splits_evenly_among_wide_columns() {
        // limit 10; the 1-cell column commits, (10 - 1) / 2 = 4 each for
        // the two overflowing columns.
        assert_eq!(resolve_max_width(14, &[1, 8, 9]), 4);
    }

    #[test]
    fn zero_columns_return_screen_width() {
        assert_eq!(resolve_max_width(80, &[]), 80);
    }

    #[test]
    fn gap_overhead_alone_can_exhaust_the_screen() {
        // Four columns need three gaps = 6 cells; a 3-cell screen leaves a
        // negative budget and a non-positive cap.
        assert!(resolve_max_width(3, &[5, 5, 5, 5]) <= 0);
    }

    #[test]
    fn zero_screen_width_yields_non_positive_cap() {
        assert!(resolve_max_width(0, &[4, 4]) <= 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn capped_total_stays_within_budget(
            natural in proptest::collection::vec(0usize..200, 1..12),
            screen_width in 0usize..400,
        ) {
            let n = natural.len() as isize;
            let limit = screen_width as isize - 2 * (n - 1);
            let max = resolve_max_width(screen_width, &natural);

            if max < screen_width as isize {
                // Truncation engaged: capping every column must not exceed
                // the raw budget by more than one rounding unit per column.
                let capped: isize = natural
                    .iter()
                    .map(|&w| (w as isize).min(max).max(0))
                    .sum();
                prop_assert!(capped <= limit.max(0) + n);
            }
        }

        #[test]
        fn fitting_tables_are_never_capped(
            natural in proptest::collection::vec(0usize..40, 1..8),
        ) {
            let n = natural.len();
            let screen_width = natural.iter().sum::<usize>() + 2 * (n - 1);
            prop_assert_eq!(
                resolve_max_width(screen_width, &natural),
                screen_width as isize
            );
        }

        #[test]
        fn cap_never_exceeds_screen_width(
            natural in proptest::collection::vec(0usize..200, 0..12),
            screen_width in 0usize..400,
        ) {
            prop_assert!(resolve_max_width(screen_width, &natural) <= screen_width as isize);
        }

        #[test]
        fn column_order_is_irrelevant(
            natural in proptest::collection::vec(0usize..100, 1..10),
            screen_width in 0usize..200,
        ) {
            let mut reversed = natural.clone();
            reversed.reverse();
            prop_assert_eq!(
                resolve_max_width(screen_width, &natural),
                resolve_max_width(screen_width, &reversed)
            );
        }
    }
}
