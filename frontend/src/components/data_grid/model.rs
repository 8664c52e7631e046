use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
    ops::Range,
};

use super::column::Column;

pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(value) => value.clone(),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Numbers compare numerically, everything else as case-folded text.
    /// Empty cells sort before any value.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (CellValue::Empty, _) => Ordering::Less,
            (_, CellValue::Empty) => Ordering::Greater,
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => {
                let (a, b) = (self.as_text(), other.as_text());
                a.to_lowercase()
                    .cmp(&b.to_lowercase())
                    .then_with(|| a.cmp(&b))
            }
        }
    }

    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.as_text()
            .to_lowercase()
            .contains(&needle.trim().to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// How repeated header clicks move through sort states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCycle {
    /// ascending, descending, unsorted
    #[default]
    TriState,
    /// ascending, descending, ascending
    Toggle,
}

impl SortCycle {
    fn next(self, current: Option<SortDirection>) -> Option<SortDirection> {
        match (current, self) {
            (None, _) => Some(SortDirection::Asc),
            (Some(SortDirection::Asc), _) => Some(SortDirection::Desc),
            (Some(SortDirection::Desc), SortCycle::TriState) => None,
            (Some(SortDirection::Desc), SortCycle::Toggle) => Some(SortDirection::Asc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    None,
    Some,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    Error(String),
    Loading,
    Empty,
    Rows,
}

/// Error beats loading, loading beats the empty message, which beats rows.
pub fn display_mode(error: Option<&str>, loading: bool, row_count: usize) -> DisplayMode {
    if let Some(message) = error {
        DisplayMode::Error(message.to_string())
    } else if loading {
        DisplayMode::Loading
    } else if row_count == 0 {
        DisplayMode::Empty
    } else {
        DisplayMode::Rows
    }
}

/// Interactive state of one grid instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub sorting: Vec<SortKey>,
    pub filters: BTreeMap<String, String>,
    pub hidden: BTreeSet<String>,
    pub selection: BTreeSet<String>,
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, &[])
    }
}

impl GridState {
    pub fn new(page_size: usize, hidden_columns: &[String]) -> Self {
        Self {
            sorting: Vec::new(),
            filters: BTreeMap::new(),
            hidden: hidden_columns.iter().cloned().collect(),
            selection: BTreeSet::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    // Sorting

    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sorting
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// Advances `column` through `cycle`. Without `multi` every other sort key
    /// is dropped; with it the column keeps or takes its place in the list.
    pub fn toggle_sort(&mut self, column: &str, cycle: SortCycle, multi: bool) {
        let next = cycle.next(self.sort_direction(column));
        if multi {
            match (self.sorting.iter().position(|key| key.column == column), next) {
                (Some(idx), Some(direction)) => self.sorting[idx].direction = direction,
                (Some(idx), None) => {
                    self.sorting.remove(idx);
                }
                (None, Some(direction)) => self.sorting.push(SortKey {
                    column: column.to_string(),
                    direction,
                }),
                (None, None) => {}
            }
        } else {
            self.sorting = next
                .map(|direction| {
                    vec![SortKey {
                        column: column.to_string(),
                        direction,
                    }]
                })
                .unwrap_or_default();
        }
        self.page_index = 0;
    }

    // Filtering

    pub fn filter_value(&self, column: &str) -> String {
        self.filters.get(column).cloned().unwrap_or_default()
    }

    /// An empty value removes the filter for `column`.
    pub fn set_filter(&mut self, column: &str, value: &str) {
        if value.trim().is_empty() {
            self.filters.remove(column);
        } else {
            self.filters.insert(column.to_string(), value.to_string());
        }
        self.page_index = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page_index = 0;
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    // Visibility

    pub fn is_visible(&self, column: &str) -> bool {
        !self.hidden.contains(column)
    }

    pub fn set_visible(&mut self, column: &str, visible: bool) {
        if visible {
            self.hidden.remove(column);
        } else {
            self.hidden.insert(column.to_string());
        }
    }

    pub fn toggle_visibility(&mut self, column: &str) {
        let visible = self.is_visible(column);
        self.set_visible(column, !visible);
    }

    // Pagination

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, total: usize) {
        if self.can_next(total) {
            self.page_index += 1;
        }
    }

    pub fn last_page(&mut self, total: usize) {
        self.page_index = self.page_count(total) - 1;
    }

    /// Changes the page size keeping the first row of the current page in view.
    pub fn set_page_size(&mut self, size: usize) {
        let size = size.max(1);
        let top_row = self.page_index * self.page_size;
        self.page_size = size;
        self.page_index = top_row / size;
    }

    pub fn clamp_page(&mut self, total: usize) {
        self.page_index = self.page_index.min(self.page_count(total) - 1);
    }

    // Selection

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn set_row_selected(&mut self, id: &str, selected: bool) {
        if selected {
            self.selection.insert(id.to_string());
        } else {
            self.selection.remove(id);
        }
    }

    pub fn toggle_row(&mut self, id: &str) {
        let selected = self.is_selected(id);
        self.set_row_selected(id, !selected);
    }

    pub fn set_page_selected(&mut self, page_ids: &[String], selected: bool) {
        for id in page_ids {
            self.set_row_selected(id, selected);
        }
    }

    pub fn page_selection(&self, page_ids: &[String]) -> PageSelection {
        let count = page_ids.iter().filter(|id| self.is_selected(id)).count();
        match count {
            0 => PageSelection::None,
            n if n == page_ids.len() => PageSelection::All,
            _ => PageSelection::Some,
        }
    }

    /// Drops selected ids that are no longer among `present` rows and pulls
    /// the page index back into range.
    pub fn sync_rows(&mut self, present: &BTreeSet<String>) {
        self.selection.retain(|id| present.contains(id));
        self.clamp_page(present.len());
    }
}

fn matches_filters<T: 'static>(row: &T, columns: &[Column<T>], filters: &BTreeMap<String, String>) -> bool {
    filters.iter().all(|(column_id, needle)| {
        columns
            .iter()
            .find(|column| column.id == *column_id)
            .map(|column| column.value(row).contains_ignore_case(needle))
            .unwrap_or(true)
    })
}

fn compare_rows<T: 'static>(a: &T, b: &T, columns: &[Column<T>], sorting: &[SortKey]) -> Ordering {
    for key in sorting {
        let Some(column) = columns.iter().find(|column| column.id == key.column) else {
            continue;
        };
        let ordering = column.value(a).sort_cmp(&column.value(b));
        let ordering = match key.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Rows surviving every filter, in sort order (stable for ties).
pub fn row_model<'a, T: 'static>(rows: &'a [T], columns: &[Column<T>], state: &GridState) -> Vec<&'a T> {
    let mut model: Vec<&T> = rows
        .iter()
        .filter(|row| matches_filters(*row, columns, &state.filters))
        .collect();
    if !state.sorting.is_empty() {
        model.sort_by(|a, b| compare_rows(*a, *b, columns, &state.sorting));
    }
    model
}

pub fn page_rows<'a, 'b, T>(model: &'b [&'a T], state: &GridState) -> &'b [&'a T] {
    &model[state.page_range(model.len())]
}

pub fn filtered_selected<'a, T>(
    model: &[&'a T],
    state: &GridState,
    row_id: &dyn Fn(&T) -> String,
) -> Vec<&'a T> {
    model
        .iter()
        .copied()
        .filter(|row| state.is_selected(&row_id(*row)))
        .collect()
}

/// The selection if any filtered row is selected, otherwise every filtered row.
pub fn export_rows<'a, T>(
    model: &[&'a T],
    state: &GridState,
    row_id: &dyn Fn(&T) -> String,
) -> Vec<&'a T> {
    let selected = filtered_selected(model, state, row_id);
    if selected.is_empty() {
        model.to_vec()
    } else {
        selected
    }
}

pub fn row_ids<T>(rows: &[&T], row_id: &dyn Fn(&T) -> String) -> Vec<String> {
    rows.iter().map(|row| row_id(*row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: u32,
        name: &'static str,
        dept: &'static str,
        age: f64,
    }

    fn people() -> Vec<Person> {
        vec![
            Person { id: 1, name: "budi", dept: "IT", age: 30.0 },
            Person { id: 2, name: "Ani", dept: "Finance", age: 25.0 },
            Person { id: 3, name: "citra", dept: "IT", age: 41.0 },
            Person { id: 4, name: "Dewi", dept: "HR", age: 25.0 },
        ]
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::text("name", "Name", |p: &Person| p.name.to_string()),
            Column::text("dept", "Department", |p: &Person| p.dept.to_string()),
            Column::number("age", "Age", |p: &Person| p.age),
        ]
    }

    fn id_of(p: &Person) -> String {
        p.id.to_string()
    }

    fn ids(model: &[&Person]) -> Vec<u32> {
        model.iter().map(|p| p.id).collect()
    }

    #[test]
    fn display_mode_precedence() {
        assert_eq!(
            display_mode(Some("boom"), true, 0),
            DisplayMode::Error("boom".into())
        );
        assert_eq!(display_mode(Some("boom"), false, 5), DisplayMode::Error("boom".into()));
        assert_eq!(display_mode(None, true, 0), DisplayMode::Loading);
        assert_eq!(display_mode(None, true, 3), DisplayMode::Loading);
        assert_eq!(display_mode(None, false, 0), DisplayMode::Empty);
        assert_eq!(display_mode(None, false, 3), DisplayMode::Rows);
    }

    #[test]
    fn tri_state_sort_cycles_through_unsorted() {
        let rows = people();
        let cols = columns();
        let mut state = GridState::default();

        state.toggle_sort("name", SortCycle::TriState, false);
        assert_eq!(ids(&row_model(&rows, &cols, &state)), vec![2, 1, 3, 4]);
        state.toggle_sort("name", SortCycle::TriState, false);
        assert_eq!(ids(&row_model(&rows, &cols, &state)), vec![4, 3, 1, 2]);
        state.toggle_sort("name", SortCycle::TriState, false);
        assert!(state.sorting.is_empty());
        assert_eq!(ids(&row_model(&rows, &cols, &state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn toggle_sort_never_unsorts() {
        let mut state = GridState::default();
        state.toggle_sort("name", SortCycle::Toggle, false);
        state.toggle_sort("name", SortCycle::Toggle, false);
        state.toggle_sort("name", SortCycle::Toggle, false);
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Asc));
    }

    #[test]
    fn numbers_sort_numerically_and_multi_sort_breaks_ties() {
        let rows = people();
        let cols = columns();
        let mut state = GridState::default();
        state.toggle_sort("age", SortCycle::TriState, false);
        state.toggle_sort("name", SortCycle::TriState, true);
        state.toggle_sort("name", SortCycle::TriState, true);
        assert_eq!(state.sorting.len(), 2);
        // age asc, ties (Ani, Dewi) by name desc
        assert_eq!(ids(&row_model(&rows, &cols, &state)), vec![4, 2, 1, 3]);

        state.toggle_sort("dept", SortCycle::TriState, false);
        assert_eq!(state.sorting.len(), 1);
    }

    #[test]
    fn sorting_resets_page() {
        let mut state = GridState {
            page_index: 3,
            ..GridState::default()
        };
        state.toggle_sort("name", SortCycle::TriState, false);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn filters_are_case_insensitive_substrings_combined_with_and() {
        let rows = people();
        let cols = columns();
        let mut state = GridState::default();

        state.set_filter("dept", "it");
        assert_eq!(ids(&row_model(&rows, &cols, &state)), vec![1, 3]);
        state.set_filter("name", "CIT");
        assert_eq!(ids(&row_model(&rows, &cols, &state)), vec![3]);
        state.set_filter("age", "4");
        assert_eq!(ids(&row_model(&rows, &cols, &state)), vec![3]);
    }

    #[test]
    fn clearing_filter_restores_all_rows() {
        let rows = people();
        let cols = columns();
        let mut state = GridState::default();
        state.set_filter("name", "dew");
        assert_eq!(row_model(&rows, &cols, &state).len(), 1);
        state.set_filter("name", "");
        assert!(!state.has_filters());
        assert_eq!(row_model(&rows, &cols, &state).len(), rows.len());

        state.set_filter("dept", "hr");
        state.clear_filters();
        assert_eq!(row_model(&rows, &cols, &state).len(), rows.len());
    }

    #[test]
    fn visibility_round_trip_keeps_column() {
        let mut state = GridState::new(10, &["age".to_string()]);
        assert!(!state.is_visible("age"));
        state.toggle_visibility("age");
        assert!(state.is_visible("age"));
        state.toggle_visibility("name");
        state.toggle_visibility("name");
        assert!(state.is_visible("name"));
    }

    #[test]
    fn pages_partition_the_filtered_rows() {
        for page_size in PAGE_SIZES {
            for total in [0usize, 1, 9, 10, 11, 49, 50, 51, 99, 100, 137] {
                let mut state = GridState::new(page_size, &[]);
                let mut seen = 0;
                for page in 0..state.page_count(total) {
                    state.page_index = page;
                    let range = state.page_range(total);
                    assert!(range.len() <= page_size);
                    seen += range.len();
                }
                assert_eq!(seen, total, "page_size={page_size} total={total}");
            }
        }
    }

    #[test]
    fn navigation_is_bounded() {
        let mut state = GridState::default();
        assert!(!state.can_previous());
        assert!(state.can_next(25));
        state.next_page(25);
        state.next_page(25);
        state.next_page(25);
        assert_eq!(state.page_index, 2);
        assert!(!state.can_next(25));
        state.previous_page();
        assert_eq!(state.page_index, 1);
        state.last_page(25);
        assert_eq!(state.page_index, 2);
        state.first_page();
        assert_eq!(state.page_index, 0);
        state.previous_page();
        assert_eq!(state.page_index, 0);
        assert!(!state.can_next(0));
        assert_eq!(state.page_count(0), 1);
    }

    #[test]
    fn page_size_change_keeps_top_row() {
        let mut state = GridState {
            page_index: 3,
            ..GridState::default()
        };
        state.set_page_size(20);
        assert_eq!(state.page_index, 1);
        state.set_page_size(50);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn select_page_then_filter_excludes_hidden_rows() {
        let rows = people();
        let cols = columns();
        let mut state = GridState::default();
        let model = row_model(&rows, &cols, &state);
        let page_ids = row_ids(page_rows(&model, &state), &id_of);
        state.set_page_selected(&page_ids, true);
        assert_eq!(state.page_selection(&page_ids), PageSelection::All);

        state.set_filter("dept", "IT");
        let model = row_model(&rows, &cols, &state);
        assert_eq!(ids(&filtered_selected(&model, &state, &id_of)), vec![1, 3]);

        state.sync_rows(&row_ids(&model, &id_of).into_iter().collect());
        assert_eq!(state.selection.len(), 2);
        state.set_filter("dept", "");
        let model = row_model(&rows, &cols, &state);
        assert_eq!(filtered_selected(&model, &state, &id_of).len(), 2);
    }

    #[test]
    fn partial_page_selection_is_reported() {
        let mut state = GridState::default();
        let page_ids = vec!["1".to_string(), "2".to_string()];
        assert_eq!(state.page_selection(&page_ids), PageSelection::None);
        state.toggle_row("2");
        assert_eq!(state.page_selection(&page_ids), PageSelection::Some);
        state.toggle_row("2");
        assert!(!state.is_selected("2"));
    }

    #[test]
    fn export_prefers_selection_then_filtered_rows() {
        let rows = people();
        let cols = columns();
        let mut state = GridState::default();
        state.set_filter("dept", "it");
        let model = row_model(&rows, &cols, &state);
        assert_eq!(ids(&export_rows(&model, &state, &id_of)), vec![1, 3]);

        state.set_row_selected("3", true);
        assert_eq!(ids(&export_rows(&model, &state, &id_of)), vec![3]);

        // A selected row outside the filter does not count.
        state.set_row_selected("3", false);
        state.set_row_selected("2", true);
        assert_eq!(ids(&export_rows(&model, &state, &id_of)), vec![1, 3]);
    }

    #[test]
    fn sync_rows_clamps_page_after_shrink() {
        let mut state = GridState {
            page_index: 4,
            ..GridState::default()
        };
        state.selection.insert("gone".into());
        state.sync_rows(&["a".to_string()].into_iter().collect());
        assert_eq!(state.page_index, 0);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn cell_values_render_and_compare() {
        assert_eq!(CellValue::Number(3.0).as_text(), "3");
        assert_eq!(CellValue::Number(2.5).as_text(), "2.5");
        assert_eq!(CellValue::text(""), CellValue::Empty);
        assert_eq!(
            CellValue::Number(9.0).sort_cmp(&CellValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::text("9").sort_cmp(&CellValue::text("10")),
            Ordering::Greater
        );
        assert_eq!(CellValue::Empty.sort_cmp(&CellValue::text("a")), Ordering::Less);
        assert!(CellValue::text("Tepat Waktu").contains_ignore_case(" waktu "));
    }
}
