use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jma_collector::models::value::real_or_default;
use jma_collector::models::{sort_by_key, Station, WeatherRecord};
use jma_collector::parsers::{HourlyTableParser, RowContext};
use jma_collector::writers::CsvWriter;

// Create a JMA-style hourly page for benchmarking
fn create_hourly_page(rows: u32) -> String {
    let mut page = String::from(
        "<html><body><table id=\"tablefix1\"><tr><th>時</th></tr><tr><th>現地</th></tr>",
    );
    for hour in 1..=rows {
        page.push_str(&format!(
            "<tr><td>{}</td><td>1015.2</td><td>1018.6</td><td>0.5 )</td><td>17.1</td>\
             <td>12.0</td><td>14.0</td><td>70</td><td>3.2</td><td>北東</td><td>0.4</td>\
             <td>0.52</td><td>--</td><td>--</td><td><img alt=\"晴れ\" src=\"F10.gif\"></td>\
             <td>5</td><td>20.0</td></tr>",
            (hour - 1) % 24 + 1
        ));
    }
    page.push_str("</table></body></html>");
    page
}

fn create_records(days: u32) -> Vec<WeatherRecord> {
    let base_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let mut records = Vec::new();
    for day in (0..days).rev() {
        let date = base_date + chrono::Duration::days(day as i64);
        for hour in (1..=24).rev() {
            let mut record = WeatherRecord::empty(Station::default(), date, hour);
            record.temperature = 15.0 + hour as f64 * 0.1;
            record.weather_text = "くもり".to_string();
            records.push(record);
        }
    }
    records
}

fn benchmark_table_parser(c: &mut Criterion) {
    let parser = HourlyTableParser::new().unwrap();
    let ctx = RowContext {
        station: Station::default(),
        date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    };

    let mut group = c.benchmark_group("hourly_table_parser");
    for rows in [24u32, 240].iter() {
        let page = create_hourly_page(*rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &page, |b, page| {
            b.iter(|| {
                let records = parser.parse_page(black_box(page), &ctx).unwrap();
                black_box(records.len())
            })
        });
    }
    group.finish();
}

fn benchmark_value_normalization(c: &mut Criterion) {
    let values = ["1015.2", "0.5 )", "--", "///", "12.3]", "×", "-3.4"];

    c.bench_function("real_or_default", |b| {
        b.iter(|| {
            let total: f64 = values.iter().map(|v| real_or_default(black_box(v))).sum();
            black_box(total)
        })
    });
}

fn benchmark_sort_and_write(c: &mut Criterion) {
    let records = create_records(365);

    c.bench_function("sort_and_write_year", |b| {
        b.iter(|| {
            let mut records = records.clone();
            sort_by_key(&mut records);
            let mut buffer = Vec::with_capacity(records.len() * 96);
            CsvWriter::new().write_to(&records, &mut buffer).unwrap();
            black_box(buffer.len())
        })
    });
}

criterion_group!(
    benches,
    benchmark_table_parser,
    benchmark_value_normalization,
    benchmark_sort_and_write
);
criterion_main!(benches);
