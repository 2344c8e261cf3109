use gtv_heatmap::models::{Dataset, MonthlyVariance};
use gtv_heatmap::stats::{monthly_summary, yearly_means};

fn mv(year: i32, month: u8, variance: f64) -> MonthlyVariance {
    MonthlyVariance { year, month, variance }
}

#[test]
fn monthly_stats_use_absolute_temperature() {
    // January: 10 + [1, 2, 3, 4] -> median (12+13)/2
    // February: 10 + [-1, 0, 5] -> median 10
    let data = Dataset {
        base_temperature: 10.0,
        monthly_variance: vec![
            mv(2000, 1, 1.0),
            mv(2001, 1, 2.0),
            mv(2002, 1, 3.0),
            mv(2003, 1, 4.0),
            mv(2000, 2, -1.0),
            mv(2001, 2, 0.0),
            mv(2002, 2, 5.0),
        ],
    };
    let got = monthly_summary(&data);
    assert_eq!(got.len(), 2);

    let jan = &got[0];
    assert_eq!(jan.month, 1);
    assert_eq!(jan.count, 4);
    assert_eq!(jan.min, Some(11.0));
    assert_eq!(jan.max, Some(14.0));
    assert!((jan.mean.unwrap() - 12.5).abs() < 1e-9);
    assert!((jan.median.unwrap() - 12.5).abs() < 1e-9);

    let feb = &got[1];
    assert_eq!(feb.month, 2);
    assert_eq!(feb.count, 3);
    assert_eq!(feb.median, Some(10.0));

    let years = yearly_means(&data);
    assert_eq!(years[0], (2000, 10.0));
    assert_eq!(years[3], (2003, 14.0));
}
