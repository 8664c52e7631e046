use crate::{
    api::AttendanceRecord,
    components::{
        common::{Badge, StatusBadge},
        data_grid::{CellValue, Column, SortCycle},
    },
    pages::employee_detail::utils::{format_record_date, is_today},
    utils::{status::BadgeVariant, time::format_time_in},
};
use chrono::NaiveDate;
use chrono_tz::Tz;
use leptos::*;

fn optional(value: &Option<String>) -> CellValue {
    value
        .as_deref()
        .map(CellValue::text)
        .unwrap_or(CellValue::Empty)
}

fn clock_cell(raw: Option<String>, tz: Tz, dot_class: &'static str) -> View {
    let recorded = raw.is_some();
    let text = format_time_in(raw.as_deref(), tz);
    view! {
        <div class="flex items-center gap-2">
            <span class=format!(
                "h-2 w-2 rounded-full {}",
                if recorded { dot_class } else { "bg-gray-300" }
            )></span>
            <span class="font-mono text-sm">{text}</span>
        </div>
    }
    .into_view()
}

/// Log grid for one employee; only the date column is searchable.
pub fn attendance_columns(today: NaiveDate, tz: Tz) -> Vec<Column<AttendanceRecord>> {
    vec![
        Column::text("employee_name", "Employee Name", |r: &AttendanceRecord| {
            r.employee_name.clone()
        })
        .sortable(SortCycle::Toggle)
        .filterable(false),
        Column::text("departement_name", "Department", |r: &AttendanceRecord| {
            r.departement_name.clone()
        })
        .sortable(SortCycle::Toggle)
        .filterable(false)
        .with_cell(|r: &AttendanceRecord| {
            let name = r.departement_name.clone();
            view! { <Badge variant=BadgeVariant::Secondary>{name}</Badge> }.into_view()
        }),
        Column::text("date_attendance", "Date", |r: &AttendanceRecord| {
            r.date_attendance.clone()
        })
        .sortable(SortCycle::Toggle)
        .with_cell(move |r: &AttendanceRecord| {
            let today_row = is_today(r, today, tz);
            let formatted = format_record_date(&r.date_attendance, tz);
            view! {
                <div class="flex flex-col">
                    <span class=if today_row { "font-medium text-action-primary-bg" } else { "font-medium" }>
                        {formatted}
                    </span>
                    <Show when=move || today_row>
                        <Badge variant=BadgeVariant::Default class="mt-1 w-fit">"Today"</Badge>
                    </Show>
                </div>
            }
            .into_view()
        }),
        Column::accessor("clock_in", "Clock In", |r: &AttendanceRecord| optional(&r.clock_in))
            .sortable(SortCycle::Toggle)
            .filterable(false)
            .with_cell(move |r: &AttendanceRecord| clock_cell(r.clock_in.clone(), tz, "bg-green-500")),
        Column::accessor("clock_out", "Clock Out", |r: &AttendanceRecord| optional(&r.clock_out))
            .sortable(SortCycle::Toggle)
            .filterable(false)
            .with_cell(move |r: &AttendanceRecord| clock_cell(r.clock_out.clone(), tz, "bg-red-500")),
        Column::display("status_clock_in", "Clock In Status").with_cell(move |r: &AttendanceRecord| {
            view! { <StatusBadge status=r.clock_in_status(tz) /> }.into_view()
        }),
        Column::display("status_clock_out", "Clock Out Status").with_cell(move |r: &AttendanceRecord| {
            view! { <StatusBadge status=r.clock_out_status(tz) /> }.into_view()
        }),
    ]
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::data_grid::{DataTable, GridConfig};
    use crate::test_support::{helpers::record, ssr::render_to_string};
    use chrono_tz::Asia::Jakarta;

    #[test]
    fn renders_status_badges_and_today_marker() {
        let html = render_to_string(|| {
            let mut late = record(
                "a1",
                "2025-01-02T00:00:00",
                Some("2025-01-02T08:30:00"),
                None,
            );
            late.is_late = true;
            let rows = Signal::derive(move || vec![late.clone()]);
            let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
            view! {
                <DataTable
                    rows=rows
                    columns=attendance_columns(today, Jakarta)
                    config=GridConfig::new(|r: &AttendanceRecord| r.attendance_id.clone())
                />
            }
        });
        assert!(html.contains("Terlambat"));
        assert!(html.contains("Belum Absen"));
        assert!(html.contains("Today"));
        assert!(html.contains("Thu, 02 Jan 2025"));
        assert!(html.contains("08:30"));
    }

    #[test]
    fn only_date_column_is_filterable() {
        let columns = attendance_columns(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), Jakarta);
        let filterable: Vec<_> = columns
            .iter()
            .filter(|c| c.filterable)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(filterable, vec!["date_attendance"]);
    }
}
