//! Performance benchmarks for the rostering KPI engine.
//!
//! The hot paths are the monthly/yearly statistics computations and the
//! calendar grid builder, measured against a full year of roster data.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

use roster_engine::calculation::{StatisticsEngine, schedule_by_date};
use roster_engine::config::HolidayTable;
use roster_engine::models::{Company, Employee, ScheduleEntry, Shift};

fn engine() -> StatisticsEngine {
    StatisticsEngine::new(
        Company {
            name: "Acme Logistics".to_string(),
            sunday_is_workday: false,
        },
        HolidayTable::default(),
    )
}

fn employee() -> Employee {
    Employee {
        name: "Alex".to_string(),
        max_hours_per_week: Decimal::from(40),
        absences: vec![],
    }
}

fn shift(name: &str, start: (u32, u32), end: (u32, u32)) -> Shift {
    Shift {
        name: name.to_string(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0),
    }
}

/// Three shifts a day across a full year, roughly a busy single-employee
/// roster plus coworker noise.
fn year_entries(year: i32) -> Vec<ScheduleEntry> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
    let templates = [
        shift("EarlyShift", (6, 0), (14, 0)),
        shift("LateShift", (14, 0), (22, 0)),
        shift("NightShift", (22, 0), (6, 0)),
    ];
    first
        .iter_days()
        .take_while(|d| *d <= last)
        .flat_map(|d| {
            templates.iter().map(move |t| ScheduleEntry {
                date: d,
                shift: t.clone(),
            })
        })
        .collect()
}

fn bench_monthly_statistics(c: &mut Criterion) {
    let e = engine();
    let worker = employee();
    let entries = year_entries(2025);

    c.bench_function("monthly_statistics_full_year_input", |b| {
        b.iter(|| {
            e.monthly_statistics(black_box(&worker), black_box(&entries), 2025, 6)
                .unwrap()
        })
    });
}

fn bench_yearly_statistics(c: &mut Criterion) {
    let e = engine();
    let worker = employee();
    let entries = year_entries(2025);

    c.bench_function("yearly_statistics_full_year_input", |b| {
        b.iter(|| {
            e.yearly_statistics(black_box(&worker), black_box(&entries), 2025)
                .unwrap()
        })
    });
}

fn bench_month_grid(c: &mut Criterion) {
    let e = engine();
    let entries = year_entries(2025);
    let by_date = schedule_by_date(&entries);
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    c.bench_function("month_grid_june_2025", |b| {
        b.iter(|| e.month_grid(2025, 6, black_box(&by_date), today).unwrap())
    });
}

criterion_group!(
    benches,
    bench_monthly_statistics,
    bench_yearly_statistics,
    bench_month_grid
);
criterion_main!(benches);
