//! The `/prices` descriptor offers every region exactly once, label as name and key as value.
use lostark_market_bot::commands::prices;
use lostark_market_bot::market::Region;
use serde_json::Value;

fn descriptor() -> Value {
    serde_json::to_value(prices::register()).expect("descriptor serializes")
}

#[test]
fn region_choices_follow_region_order() {
    let json = descriptor();
    let options = json["options"].as_array().expect("options array");
    let region = options
        .iter()
        .find(|opt| opt["name"] == "region")
        .expect("region option present");
    let choices = region["choices"].as_array().expect("choices array");

    assert_eq!(choices.len(), Region::ALL.len());
    for (choice, region) in choices.iter().zip(Region::ALL) {
        assert_eq!(choice["name"], region.label());
        assert_eq!(choice["value"], region.key());
    }
}

#[test]
fn descriptor_declares_two_required_string_options() {
    let json = descriptor();
    assert_eq!(json["name"], "prices");
    assert_eq!(json["description"], "Get the current prices of Lost Ark Market Online");

    let options = json["options"].as_array().expect("options array");
    let names: Vec<&str> = options.iter().filter_map(|opt| opt["name"].as_str()).collect();
    assert_eq!(names, ["region", "item"]);
    for opt in options {
        // 3 is Discord's STRING option type.
        assert_eq!(opt["type"], 3);
        assert_eq!(opt["required"], true);
    }
}

#[test]
fn region_keys_round_trip_through_from_str() {
    for region in Region::ALL {
        assert_eq!(region.key().parse::<Region>(), Ok(region));
    }
    assert_eq!("euc".parse::<Region>(), Ok(Region::EuropeCentral));
    assert!("Mars".parse::<Region>().is_err());
}
