use super::model::{CellValue, SortCycle};
use leptos::*;
use std::rc::Rc;

pub type Accessor<T> = Rc<dyn Fn(&T) -> CellValue>;
pub type CellRenderer<T> = Rc<dyn Fn(&T) -> View>;

/// One grid column: how to read a comparable value out of a row and,
/// optionally, how to render the cell.
pub struct Column<T> {
    pub id: String,
    pub header: String,
    pub accessor: Option<Accessor<T>>,
    pub cell: Option<CellRenderer<T>>,
    pub sortable: bool,
    pub hideable: bool,
    pub filterable: bool,
    pub sort_cycle: SortCycle,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
            hideable: self.hideable,
            filterable: self.filterable,
            sort_cycle: self.sort_cycle,
        }
    }
}

impl<T: 'static> Column<T> {
    /// Display-only column such as row actions.
    pub fn display(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: None,
            cell: None,
            sortable: false,
            hideable: false,
            filterable: false,
            sort_cycle: SortCycle::default(),
        }
    }

    pub fn accessor(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        Self {
            accessor: Some(Rc::new(accessor)),
            hideable: true,
            filterable: true,
            ..Self::display(id, header)
        }
    }

    pub fn text(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> String + 'static,
    ) -> Self {
        Self::accessor(id, header, move |row| CellValue::text(accessor(row)))
    }

    pub fn number(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> f64 + 'static,
    ) -> Self {
        Self::accessor(id, header, move |row| CellValue::Number(accessor(row)))
    }

    pub fn sortable(mut self, cycle: SortCycle) -> Self {
        self.sortable = true;
        self.sort_cycle = cycle;
        self
    }

    pub fn hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable && self.accessor.is_some();
        self
    }

    pub fn with_cell(mut self, cell: impl Fn(&T) -> View + 'static) -> Self {
        self.cell = Some(Rc::new(cell));
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        self.accessor
            .as_ref()
            .map(|accessor| accessor(row))
            .unwrap_or(CellValue::Empty)
    }

    pub fn render(&self, row: &T) -> View {
        match &self.cell {
            Some(cell) => cell(row),
            None => self.value(row).as_text().into_view(),
        }
    }

    /// Column id as shown in menus, underscores read as spaces.
    pub fn label(&self) -> String {
        self.id.replace('_', " ")
    }
}
