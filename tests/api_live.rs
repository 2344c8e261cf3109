// Live network tests; run with: cargo test --features online
#![cfg(feature = "online")]

use gtv_heatmap::Client;

#[test]
fn fetch_public_dataset() {
    let data = Client::default().fetch().unwrap();
    assert!(data.base_temperature > 0.0);
    let d = data.domains();
    assert!(d.min_year <= 1753);
    assert!(d.max_year >= 2015);
    assert!(data.monthly_variance.len() > 3000);
}

#[test]
fn not_found_is_error() {
    let client = Client::new("https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/does-not-exist.json").unwrap();
    let err = client.fetch().unwrap_err();
    assert!(format!("{:#}", err).contains("HTTP"));
}
