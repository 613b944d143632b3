//! Wire names and small helpers on the shared models.

use std::str::FromStr;

use carescore_core::error::CoreError;
use carescore_core::models::assessment::BradenScores;
use carescore_core::models::patient::CareSetting;
use carescore_core::models::recommendation::{sort_by_priority, Icon, Priority, Recommendation};
use carescore_core::models::risk::{BradenRisk, CapriniRisk, WellsProbability};
use carescore_core::models::trend::Trend;

#[test]
fn tiers_serialize_in_camel_case() {
    assert_eq!(serde_json::to_string(&BradenRisk::VeryHigh).expect("json"), "\"veryHigh\"");
    assert_eq!(serde_json::to_string(&CapriniRisk::VeryLow).expect("json"), "\"veryLow\"");
    assert_eq!(serde_json::to_string(&WellsProbability::Likely).expect("json"), "\"likely\"");
    assert_eq!(BradenRisk::VeryHigh.as_str(), "veryHigh");
}

#[test]
fn priority_icon_and_trend_wire_names() {
    assert_eq!(serde_json::to_string(&Priority::Critical).expect("json"), "\"critical\"");
    assert_eq!(serde_json::to_string(&Icon::AlertTriangle).expect("json"), "\"alert-triangle\"");
    assert_eq!(serde_json::to_string(&Icon::UserMd).expect("json"), "\"user-md\"");
    assert_eq!(serde_json::to_string(&Trend::Deteriorating).expect("json"), "\"deteriorating\"");
}

#[test]
fn care_setting_parses_both_spellings() {
    assert_eq!(CareSetting::from_str("homeCare").expect("parse"), CareSetting::HomeCare);
    assert_eq!(CareSetting::from_str("nursing_home").expect("parse"), CareSetting::NursingHome);
    assert!(matches!(
        CareSetting::from_str("hospice"),
        Err(CoreError::UnknownVariant { kind: "care setting", .. })
    ));
    assert_eq!(CareSetting::default(), CareSetting::Hospital);
}

#[test]
fn unscored_subscales_are_reported_missing() {
    let scores = BradenScores {
        sensory_perception: 3,
        mobility: 2,
        ..BradenScores::default()
    };
    assert!(!scores.is_complete());
    assert_eq!(scores.missing(), vec!["moisture", "activity", "nutrition", "friction_shear"]);
    assert_eq!(scores.total(), 5);
    assert_eq!(scores.get("mobility"), Some(2));
    assert_eq!(scores.get("unknown"), None);
}

#[test]
fn priority_sort_is_stable() {
    let rec = |category: &str, priority| Recommendation::new(category, priority, "do it", "because", Icon::Clock);
    let mut recs = vec![
        rec("a", Priority::Low),
        rec("b", Priority::High),
        rec("c", Priority::Critical),
        rec("d", Priority::High),
        rec("e", Priority::Medium),
    ];
    sort_by_priority(&mut recs);
    let order: Vec<&str> = recs.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(order, vec!["c", "b", "d", "e", "a"]);
}
