//! Display projection: what the navigation chrome should show for a cursor.
//!
//! [`render`] is pure. Writing the result into a document is the job of
//! [`crate::controls::apply`].

use serde::Serialize;

use crate::cursor::Cursor;

/// Declarative description of the chrome for one cursor position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    /// Index of the visible panel and of the single active indicator dot.
    pub active_index: usize,
    pub total: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// `"{active_index + 1} / {total}"`.
    pub counter_label: String,
    /// Progress in percent, `(active_index + 1) * 100 / total`.
    pub progress_percent: f64,
    /// `progress_percent` as a CSS width, e.g. `"40%"`.
    pub progress_width: String,
}

impl DisplayModel {
    /// Fraction of the deck seen so far, in `(0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        self.progress_percent / 100.0
    }

    /// Whether indicator dot `index` carries the active flag.
    pub fn is_dot_active(&self, index: usize) -> bool {
        index == self.active_index
    }
}

/// 1-based counter text for a 0-based index.
pub fn counter_label(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

/// Progress through the deck in percent.
pub fn progress_percent(index: usize, total: usize) -> f64 {
    (index + 1) as f64 * 100.0 / total as f64
}

/// Project a cursor onto its display model.
pub fn render(cursor: &Cursor) -> DisplayModel {
    let (index, total) = (cursor.current(), cursor.total());
    let percent = progress_percent(index, total);
    DisplayModel {
        active_index: index,
        total,
        prev_disabled: cursor.is_first(),
        next_disabled: cursor.is_last(),
        counter_label: counter_label(index, total),
        progress_percent: percent,
        progress_width: format!("{percent}%"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize, total: usize) -> DisplayModel {
        let mut c = Cursor::new(total).unwrap();
        c.go_to(index);
        render(&c)
    }

    #[test]
    fn first_slide() {
        let m = at(0, 5);
        assert!(m.prev_disabled);
        assert!(!m.next_disabled);
        assert_eq!(m.counter_label, "1 / 5");
        assert_eq!(m.progress_width, "20%");
    }

    #[test]
    fn last_slide() {
        let m = at(4, 5);
        assert!(!m.prev_disabled);
        assert!(m.next_disabled);
        assert_eq!(m.counter_label, "5 / 5");
        assert_eq!(m.progress_width, "100%");
        assert!((m.progress_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_slide_disables_both() {
        let m = at(0, 1);
        assert!(m.prev_disabled);
        assert!(m.next_disabled);
        assert_eq!(m.counter_label, "1 / 1");
        assert_eq!(m.progress_width, "100%");
    }

    #[test]
    fn thirds_keep_full_precision() {
        assert_eq!(at(0, 3).progress_width, "33.333333333333336%");
        assert_eq!(at(1, 3).progress_width, "66.66666666666667%");
    }

    #[test]
    fn exactly_one_dot_active() {
        let m = at(2, 6);
        let active: Vec<usize> = (0..6).filter(|&i| m.is_dot_active(i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn render_is_idempotent() {
        let c = Cursor::new(7).unwrap();
        assert_eq!(render(&c), render(&c));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn model_matches_cursor(total in 1usize..200, raw in 0usize..200) {
                let i = raw % total;
                let m = at(i, total);
                prop_assert_eq!(m.active_index, i);
                prop_assert_eq!(m.prev_disabled, i == 0);
                prop_assert_eq!(m.next_disabled, i == total - 1);
                prop_assert_eq!(m.counter_label, format!("{} / {}", i + 1, total));
                let expected = (i + 1) as f64 / total as f64 * 100.0;
                prop_assert!((m.progress_percent - expected).abs() < 1e-9);
                prop_assert!(m.progress_width.ends_with('%'));
            }
        }
    }
}
