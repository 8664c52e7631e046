use super::{
    column::Column,
    model::{
        display_mode, export_rows, filtered_selected, row_model, DisplayMode, GridState,
        PageSelection, SortDirection, DEFAULT_PAGE_SIZE, PAGE_SIZES,
    },
};
use leptos::{ev::MouseEvent, *};
use std::{collections::BTreeSet, rc::Rc};

pub type RowId<T> = Rc<dyn Fn(&T) -> String>;

/// Presentation switches and callbacks for a [`DataTable`].
pub struct GridConfig<T: 'static> {
    pub title: String,
    pub description: Option<String>,
    pub show_search: bool,
    pub show_column_toggle: bool,
    pub show_pagination: bool,
    pub show_selection: bool,
    pub show_export: bool,
    pub page_size: usize,
    pub search_placeholder: String,
    pub empty_message: String,
    pub hidden_columns: Vec<String>,
    pub row_id: RowId<T>,
    pub on_export: Option<Callback<Vec<T>>>,
    pub on_selection_change: Option<Callback<Vec<T>>>,
}

impl<T: 'static> Clone for GridConfig<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            description: self.description.clone(),
            show_search: self.show_search,
            show_column_toggle: self.show_column_toggle,
            show_pagination: self.show_pagination,
            show_selection: self.show_selection,
            show_export: self.show_export,
            page_size: self.page_size,
            search_placeholder: self.search_placeholder.clone(),
            empty_message: self.empty_message.clone(),
            hidden_columns: self.hidden_columns.clone(),
            row_id: self.row_id.clone(),
            on_export: self.on_export,
            on_selection_change: self.on_selection_change,
        }
    }
}

impl<T: 'static> GridConfig<T> {
    pub fn new(row_id: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            title: "Data Table".into(),
            description: None,
            show_search: true,
            show_column_toggle: true,
            show_pagination: true,
            show_selection: true,
            show_export: true,
            page_size: DEFAULT_PAGE_SIZE,
            search_placeholder: "Search...".into(),
            empty_message: "No data found.".into(),
            hidden_columns: Vec::new(),
            row_id: Rc::new(row_id),
            on_export: None,
            on_selection_change: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn hide_column(mut self, column: impl Into<String>) -> Self {
        self.hidden_columns.push(column.into());
        self
    }

    pub fn without_selection(mut self) -> Self {
        self.show_selection = false;
        self
    }

    pub fn without_search(mut self) -> Self {
        self.show_search = false;
        self
    }

    pub fn on_export(mut self, callback: Callback<Vec<T>>) -> Self {
        self.on_export = Some(callback);
        self
    }

    pub fn on_selection_change(mut self, callback: Callback<Vec<T>>) -> Self {
        self.on_selection_change = Some(callback);
        self
    }
}

pub(crate) fn selection_summary(selected: usize, total: usize) -> String {
    format!("{selected} of {total} row(s) selected.")
}

pub(crate) fn page_summary(page_index: usize, page_count: usize) -> String {
    format!("Page {} of {}", page_index + 1, page_count)
}

/// A lone filter takes the configured search placeholder, otherwise each
/// input names its column.
pub(crate) fn filter_placeholder(label: &str, filter_count: usize, search_placeholder: &str) -> String {
    if filter_count == 1 {
        search_placeholder.to_string()
    } else {
        format!("Filter by {label}...")
    }
}

const TH_CLASS: &str = "h-10 px-3 text-left align-middle text-xs font-semibold uppercase tracking-wide text-fg-muted";
const TD_CLASS: &str = "px-3 py-2 align-middle text-sm text-fg";
const NAV_BUTTON_CLASS: &str = "inline-flex h-8 w-8 items-center justify-center rounded-md border border-border text-sm text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50 disabled:cursor-not-allowed";

/// Sortable, filterable, paginated table over any row type.
/// Rows after filters and sorting, recomputed only when the rows or the grid
/// state change.
fn filtered_rows<T>(
    rows: Signal<Vec<T>>,
    columns: StoredValue<Vec<Column<T>>>,
    state: RwSignal<GridState>,
) -> Memo<Vec<T>>
where
    T: Clone + PartialEq + 'static,
{
    create_memo(move |_| {
        rows.with(|rows| {
            state.with(|state| {
                columns.with_value(|cols| row_model(rows, cols, state).into_iter().cloned().collect())
            })
        })
    })
}

#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    config: GridConfig<T>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] actions: Option<View>,
) -> impl IntoView
where
    T: Clone + PartialEq + 'static,
{
    let state = create_rw_signal(GridState::new(config.page_size, &config.hidden_columns));
    let columns = store_value(columns);
    let row_id = store_value(config.row_id.clone());
    let error = Signal::derive(move || error.get());
    let (menu_open, set_menu_open) = create_signal(false);
    let GridConfig {
        show_search,
        show_column_toggle,
        show_pagination,
        show_selection,
        show_export,
        on_export,
        on_selection_change,
        ..
    } = config.clone();
    let empty_message = store_value(config.empty_message.clone());
    let config = store_value(config);

    let filtered = filtered_rows(rows, columns, state);
    let filtered_count = Signal::derive(move || filtered.with(Vec::len));

    // Keep selection and page index consistent with the current row set.
    create_effect(move |_| {
        let present: BTreeSet<String> =
            filtered.with(|rows| rows.iter().map(|row| row_id.with_value(|id| id(row))).collect());
        let stale = state.with_untracked(|state| {
            let mut synced = state.clone();
            synced.sync_rows(&present);
            synced != *state
        });
        if stale {
            state.update(|state| state.sync_rows(&present));
        }
    });

    let selected_rows = move || {
        filtered.with(|rows| {
            let refs: Vec<&T> = rows.iter().collect();
            state.with(|state| {
                row_id.with_value(|id| {
                    filtered_selected(&refs, state, id.as_ref())
                        .into_iter()
                        .cloned()
                        .collect::<Vec<T>>()
                })
            })
        })
    };
    let selected_count = Signal::derive(move || {
        filtered.with(|rows| {
            state.with(|state| {
                rows.iter()
                    .filter(|row| row_id.with_value(|id| state.is_selected(&id(*row))))
                    .count()
            })
        })
    });

    if let Some(callback) = on_selection_change {
        create_effect(move |previous: Option<Vec<String>>| {
            let ids: Vec<String> = selected_rows()
                .iter()
                .map(|row| row_id.with_value(|id| id(row)))
                .collect();
            if previous.is_some_and(|previous| previous != ids) {
                callback.call(untrack(selected_rows));
            }
            ids
        });
    }

    let page_rows = move || {
        filtered.with(|rows| {
            let range = state.with(|state| state.page_range(rows.len()));
            rows[range].to_vec()
        })
    };
    let page_ids = move || {
        page_rows()
            .iter()
            .map(|row| row_id.with_value(|id| id(row)))
            .collect::<Vec<String>>()
    };
    let page_selection = move || {
        let ids = page_ids();
        state.with(|state| state.page_selection(&ids))
    };

    let visible_columns = move || {
        columns.with_value(|cols| {
            state.with(|state| {
                cols.iter()
                    .filter(|column| state.is_visible(&column.id))
                    .cloned()
                    .collect::<Vec<Column<T>>>()
            })
        })
    };

    let mode = move || display_mode(error.get().as_deref(), loading.get(), filtered_count.get());

    let header_cells = move || {
        visible_columns()
            .into_iter()
            .map(|column| {
                if column.sortable {
                    let id = column.id.clone();
                    let indicator_id = column.id.clone();
                    let cycle = column.sort_cycle;
                    view! {
                        <th class=TH_CLASS>
                            <button
                                type="button"
                                class="inline-flex items-center gap-1 hover:text-fg"
                                on:click=move |ev: MouseEvent| {
                                    state.update(|state| state.toggle_sort(&id, cycle, ev.shift_key()))
                                }
                            >
                                {column.header.clone()}
                                <span aria-hidden="true">
                                    {move || {
                                        state
                                            .with(|state| state.sort_direction(&indicator_id))
                                            .map(SortDirection::indicator)
                                            .unwrap_or("↕")
                                    }}
                                </span>
                            </button>
                        </th>
                    }
                    .into_view()
                } else {
                    view! { <th class=TH_CLASS>{column.header.clone()}</th> }.into_view()
                }
            })
            .collect_view()
    };

    let body_rows = move || {
        let columns = visible_columns();
        let colspan = columns.len() + usize::from(show_selection);
        match mode() {
            DisplayMode::Error(_) => ().into_view(),
            DisplayMode::Loading => view! {
                <tr>
                    <td colspan=colspan class="h-24 text-center text-sm text-fg-muted">
                        "Loading data..."
                    </td>
                </tr>
            }
            .into_view(),
            DisplayMode::Empty => view! {
                <tr>
                    <td colspan=colspan class="h-24 text-center text-sm text-fg-muted">
                        {empty_message.get_value()}
                    </td>
                </tr>
            }
            .into_view(),
            DisplayMode::Rows => page_rows()
                .into_iter()
                .map(|row| {
                    let id = row_id.with_value(|row_id| row_id(&row));
                    let checked_id = id.clone();
                    let selected_id = id.clone();
                    let cells = columns
                        .iter()
                        .map(|column| view! { <td class=TD_CLASS>{column.render(&row)}</td> })
                        .collect_view();
                    view! {
                        <tr
                            class="border-b border-border hover:bg-surface-muted"
                            class:bg-surface-muted=move || state.with(|state| state.is_selected(&selected_id))
                        >
                            {show_selection.then(|| view! {
                                <td class="w-10 px-3">
                                    <input
                                        type="checkbox"
                                        aria-label="Select row"
                                        prop:checked=move || state.with(|state| state.is_selected(&checked_id))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            state.update(|state| state.set_row_selected(&id, checked));
                                        }
                                    />
                                </td>
                            })}
                            {cells}
                        </tr>
                    }
                })
                .collect_view(),
        }
    };

    let filter_inputs = move || {
        let filterable: Vec<(String, String)> = columns.with_value(|cols| {
            cols.iter()
                .filter(|column| column.filterable)
                .map(|column| (column.id.clone(), column.label()))
                .collect()
        });
        let count = filterable.len();
        filterable
            .into_iter()
            .map(|(id, label)| {
                let value_id = id.clone();
                let placeholder =
                    config.with_value(|config| filter_placeholder(&label, count, &config.search_placeholder));
                view! {
                    <input
                        type="text"
                        class="h-9 w-full max-w-xs rounded-md border border-border bg-surface px-3 text-sm text-fg placeholder:text-fg-muted"
                        placeholder=placeholder
                        prop:value=move || state.with(|state| state.filter_value(&value_id))
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|state| state.set_filter(&id, &value));
                        }
                    />
                }
            })
            .collect_view()
    };

    let column_menu = move || {
        columns.with_value(|cols| {
            cols.iter()
                .filter(|column| column.hideable)
                .map(|column| {
                    let id = column.id.clone();
                    let checked_id = column.id.clone();
                    view! {
                        <label class="flex items-center gap-2 px-3 py-1.5 text-sm text-fg capitalize hover:bg-action-ghost-bg-hover">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|state| state.is_visible(&checked_id))
                                on:change=move |_| state.update(|state| state.toggle_visibility(&id))
                            />
                            {column.label()}
                        </label>
                    }
                })
                .collect_view()
        })
    };

    let export_enabled = show_export && on_export.is_some();
    let export = move |_| {
        let Some(callback) = on_export else {
            return;
        };
        let rows = untrack(|| {
            filtered.with(|rows| {
                let refs: Vec<&T> = rows.iter().collect();
                state.with(|state| {
                    row_id.with_value(|id| {
                        export_rows(&refs, state, id.as_ref())
                            .into_iter()
                            .cloned()
                            .collect::<Vec<T>>()
                    })
                })
            })
        });
        callback.call(rows);
    };

    let toolbar = move || {
        view! {
            <div class="flex flex-wrap items-center gap-2 py-4">
                {show_search.then(|| view! {
                    <div class="flex flex-1 flex-wrap items-center gap-2">
                        {filter_inputs()}
                        <Show when=move || state.with(GridState::has_filters)>
                            <button
                                type="button"
                                class="h-9 rounded-md px-3 text-sm text-fg-muted hover:bg-action-ghost-bg-hover"
                                on:click=move |_| state.update(GridState::clear_filters)
                            >
                                "Clear"
                            </button>
                        </Show>
                    </div>
                })}
                <div class="ml-auto flex items-center gap-2">
                    {show_column_toggle.then(|| view! {
                        <div class="relative">
                            <button
                                type="button"
                                class="h-9 rounded-md border border-border px-3 text-sm text-fg hover:bg-action-ghost-bg-hover"
                                aria-expanded=move || menu_open.get().to_string()
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                "Columns"
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="absolute right-0 z-10 mt-1 min-w-[10rem] rounded-md border border-border bg-surface-elevated py-1 shadow-lg">
                                    {column_menu}
                                </div>
                            </Show>
                        </div>
                    })}
                    {export_enabled.then(|| view! {
                        <button
                            type="button"
                            class="h-9 rounded-md border border-border px-3 text-sm text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                            disabled=move || loading.get()
                            on:click=export
                        >
                            "Export"
                        </button>
                    })}
                </div>
            </div>
        }
    };

    let selection_header = move || {
        show_selection.then(|| view! {
            <th class="w-10 px-3">
                <input
                    type="checkbox"
                    aria-label="Select all"
                    prop:checked=move || page_selection() == PageSelection::All
                    prop:indeterminate=move || page_selection() == PageSelection::Some
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        let ids = untrack(page_ids);
                        state.update(|state| state.set_page_selected(&ids, checked));
                    }
                />
            </th>
        })
    };

    let page_count = move || state.with(|state| state.page_count(filtered_count.get()));
    let footer = move || {
        show_pagination.then(|| view! {
            <div class="flex flex-wrap items-center justify-between gap-4 px-2 py-4">
                <div class="flex-1 text-sm text-fg-muted">
                    {move || show_selection.then(|| selection_summary(selected_count.get(), filtered_count.get()))}
                </div>
                <div class="flex items-center gap-6">
                    <div class="flex items-center gap-2">
                        <p class="text-sm font-medium text-fg">"Rows per page"</p>
                        <select
                            class="h-8 rounded-md border border-border bg-surface px-2 text-sm"
                            prop:value=move || state.with(|state| state.page_size.to_string())
                            on:change=move |ev| {
                                if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                    state.update(|state| state.set_page_size(size));
                                }
                            }
                        >
                            {PAGE_SIZES
                                .iter()
                                .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="text-sm font-medium text-fg">
                        {move || page_summary(state.with(|state| state.page_index), page_count())}
                    </div>
                    <div class="flex items-center gap-1">
                        <button
                            type="button"
                            class=NAV_BUTTON_CLASS
                            aria-label="Go to first page"
                            disabled=move || !state.with(GridState::can_previous)
                            on:click=move |_| state.update(GridState::first_page)
                        >
                            "«"
                        </button>
                        <button
                            type="button"
                            class=NAV_BUTTON_CLASS
                            aria-label="Go to previous page"
                            disabled=move || !state.with(GridState::can_previous)
                            on:click=move |_| state.update(GridState::previous_page)
                        >
                            "‹"
                        </button>
                        <button
                            type="button"
                            class=NAV_BUTTON_CLASS
                            aria-label="Go to next page"
                            disabled=move || !state.with(|state| state.can_next(filtered_count.get()))
                            on:click=move |_| {
                                let total = filtered_count.get_untracked();
                                state.update(|state| state.next_page(total));
                            }
                        >
                            "›"
                        </button>
                        <button
                            type="button"
                            class=NAV_BUTTON_CLASS
                            aria-label="Go to last page"
                            disabled=move || !state.with(|state| state.can_next(filtered_count.get()))
                            on:click=move |_| {
                                let total = filtered_count.get_untracked();
                                state.update(|state| state.last_page(total));
                            }
                        >
                            "»"
                        </button>
                    </div>
                </div>
            </div>
        })
    };

    let (title, description) =
        config.with_value(|config| (config.title.clone(), config.description.clone()));

    view! {
        <div class="rounded-lg border border-border bg-surface-elevated shadow-sm">
            <div class="flex flex-wrap items-start justify-between gap-4 border-b border-border px-6 py-4">
                <div>
                    <h2 class="text-lg font-semibold text-fg">{title}</h2>
                    {description.map(|description| view! {
                        <p class="mt-1 text-sm text-fg-muted">{description}</p>
                    })}
                </div>
                {actions}
            </div>
            <div class="px-6">
                <Show
                    when=move || error.with(Option::is_none)
                    fallback=move || view! {
                        <div class="py-10 text-center">
                            <p class="text-sm text-status-error-text">
                                {move || error.get().map(|message| format!("Error loading data: {message}"))}
                            </p>
                        </div>
                    }
                >
                    {toolbar()}
                    <div class="overflow-x-auto rounded-md border border-border">
                        <table class="w-full caption-bottom">
                            <thead class="border-b border-border bg-surface-muted">
                                <tr>
                                    {selection_header()}
                                    {header_cells}
                                </tr>
                            </thead>
                            <tbody>{body_rows}</tbody>
                        </table>
                    </div>
                    {footer()}
                </Show>
            </div>
        </div>
    }
}
