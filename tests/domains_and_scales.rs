use gtv_heatmap::palette::TEMPERATURE_COLORS;
use gtv_heatmap::storage;
use gtv_heatmap::{MonthlyVariance, build_color_scale, compute_domains};

fn sample() -> gtv_heatmap::Dataset {
    storage::load_json(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.json")).unwrap()
}

#[test]
fn records_lie_inside_domains() {
    let data = sample();
    let d = data.domains();
    assert_eq!((d.min_year, d.max_year), (1850, 1855));
    assert_eq!(d.year_count, 6);
    assert!((d.min_temp - (8.66 - 0.8)).abs() < 1e-9);
    assert!((d.max_temp - (8.66 + 1.2)).abs() < 1e-9);
    for r in &data.monthly_variance {
        assert!(d.min_year <= r.year && r.year <= d.max_year);
        assert!((1..=12).contains(&r.month));
        let t = r.temperature(data.base_temperature);
        assert!(d.min_temp <= t && t <= d.max_temp);
    }
}

#[test]
fn domains_count_distinct_years_with_gaps() {
    let recs = [
        MonthlyVariance { year: 1900, month: 1, variance: 0.0 },
        MonthlyVariance { year: 1900, month: 2, variance: 1.0 },
        MonthlyVariance { year: 1910, month: 1, variance: -1.0 },
    ];
    let d = compute_domains(&recs, 10.0);
    assert_eq!((d.min_year, d.max_year, d.year_count), (1900, 1910, 2));
    assert_eq!((d.min_temp, d.max_temp), (9.0, 11.0));
}

#[test]
fn eleven_buckets_between_five_and_fifteen() {
    let s = build_color_scale(5.0, 15.0, &TEMPERATURE_COLORS);
    assert_eq!(s.boundaries.len(), 10);
    let step = 10.0 / 11.0;
    for (i, b) in s.boundaries.iter().enumerate() {
        let expected = 5.0 + (i + 1) as f64 * step;
        assert!((b - expected).abs() < 1e-12);
    }
    assert!((s.boundaries[0] - 5.91).abs() < 0.01);
    assert!((s.boundaries[1] - 6.82).abs() < 0.01);
    assert!((s.boundaries[9] - 14.09).abs() < 0.01);
    assert!(s.boundaries.windows(2).all(|w| w[0] < w[1]));
    assert!(s.boundaries.windows(2).all(|w| (w[1] - w[0] - 0.909).abs() < 0.001));
}

#[test]
fn colors_follow_bucket_order() {
    let s = build_color_scale(5.0, 15.0, &TEMPERATURE_COLORS);
    assert_eq!(s.color(4.0), TEMPERATURE_COLORS[0]);
    assert_eq!(s.color(5.5), TEMPERATURE_COLORS[0]);
    assert_eq!(s.color(6.0), TEMPERATURE_COLORS[1]);
    assert_eq!(s.color(10.0), TEMPERATURE_COLORS[5]);
    assert_eq!(s.color(14.5), TEMPERATURE_COLORS[10]);
    assert_eq!(s.color(99.0), TEMPERATURE_COLORS[10]);
}
