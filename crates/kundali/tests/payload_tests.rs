use chrono::{NaiveDate, NaiveTime};
use kundali::payload::{parse_compatibility, parse_full_chart, PayloadError};
use kundali::{
    ChartProjector, ChartStyle, EngineSettings, KutaKey, KutaMatching, Planet, Sign, StatusColor,
};

const FULL_CHART: &str = r#"{
    "birth_details": {"dob": "1992-11-03", "time": "06:45", "timezone": "Asia/Kolkata",
                      "latitude": 19.07, "longitude": 72.87},
    "planets": {
        "Ascendant": {"sign": "Sc", "degree": 215.4, "house": 1, "code": "As"},
        "Sun": {"sign": "Li", "degree": 197.1, "house": 12, "is_combust": false, "code": "Su"},
        "Moon": {"sign": "Cp", "degree": 281.9, "house": 3, "code": "Mo"},
        "Mercury": {"sign": "Li", "degree": 205.0, "house": 12, "is_combust": true, "code": "Me"},
        "Saturn": {"sign": "Cp", "degree": 290.2, "house": 3, "is_retrograde": true, "code": "Sa"},
        "Chiron": {"sign": "Ca", "degree": 101.0, "house": 9, "code": "Ch"}
    },
    "nakshatra": {
        "Moon": {"nakshatra": "Shravana", "nakshatra_num": 22, "pada": 1,
                 "lord": "Moon", "pada_lord": "Mars"},
        "Saturn": {"nakshatra": "Dhanishta", "nakshatra_num": 23, "pada": 7,
                   "lord": "Mars", "pada_lord": "Saturn"}
    },
    "houses": {"1": {"sign_num": 8, "lord": "Mars", "occupants": [], "bhava_bala": 6.1,
                     "rank": 3, "ashtakavarga": 28}},
    "divisional_charts": {
        "Moon": {"sign": "Ar", "house": "6"},
        "Sun": {"sign": "", "house": ""},
        "Chiron": {"sign": "Ge", "house": "8"}
    }
}"#;

const COMPATIBILITY: &str = r#"{
    "kutas": [
        {"name": "Varna", "points": 1, "maxPoints": 1, "description": "Boy's varna is higher."},
        {"name": "Vashya", "points": 2, "maxPoints": 2, "description": ""},
        {"name": "Tara", "points": 1.5, "maxPoints": 3, "description": ""},
        {"name": "Yoni", "points": 2, "maxPoints": 4, "description": ""},
        {"name": "Maitri", "points": 5, "maxPoints": 5, "description": ""},
        {"name": "Gana", "points": 6, "maxPoints": 6, "description": ""},
        {"name": "Bhakoot", "points": 0, "maxPoints": 7, "description": ""},
        {"name": "Nadi", "points": 8, "maxPoints": 8, "description": ""}
    ],
    "doshaSummary": {
        "details": {
            "bhakoot_dosha": {"present": true, "cancelled": true, "reasonShort": "Same sign lord"}
        }
    }
}"#;

#[test]
fn test_full_chart_adapter() {
    let response = parse_full_chart(FULL_CHART).unwrap();
    let output = response.to_chart_data();

    assert_eq!(output.ascendant, Some(Sign::Scorpio));
    assert_eq!(output.skipped, vec!["Chiron".to_string()]);
    assert_eq!(output.chart.d1.len(), 5);

    let moon = &output.chart.d1[&Planet::Moon];
    assert_eq!(moon.nakshatra.as_deref(), Some("Shravana"));
    assert_eq!(moon.pada, Some(1));
    let saturn = &output.chart.d1[&Planet::Saturn];
    assert!(saturn.retrograde);
    assert_eq!(saturn.nakshatra.as_deref(), Some("Dhanishta"));
    assert_eq!(saturn.pada, None);
    assert!(output.chart.d1[&Planet::Mercury].combust);

    let d9_moon = output.chart.d9[&Planet::Moon];
    assert_eq!(d9_moon.house, Some(6));
    assert_eq!(d9_moon.sign, Some(Sign::Aries));
    let d9_sun = output.chart.d9[&Planet::Sun];
    assert_eq!(d9_sun.house, None);
    assert_eq!(d9_sun.sign, None);

    let birth = output.birth.unwrap();
    assert_eq!(birth.date, NaiveDate::from_ymd_opt(1992, 11, 3).unwrap());
    assert_eq!(birth.time, NaiveTime::from_hms_opt(6, 45, 0));
}

#[test]
fn test_adapter_feeds_projector() {
    let output = parse_full_chart(FULL_CHART).unwrap().to_chart_data();
    let settings = EngineSettings::default();
    let ascendant = output.ascendant.map(|s| s.code());
    let rendered =
        ChartProjector::new(&settings).project(&output.chart, ascendant, ChartStyle::NorthIndian);
    let north = rendered.as_north().unwrap();

    assert_eq!(north.houses[0].sign, Sign::Scorpio);
    assert_eq!(north.houses[11].sign, Sign::Libra);
    let twelfth: Vec<&str> = north.houses[11].planets.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(twelfth, vec!["Su", "Me"]);
}

#[test]
fn test_ascendant_from_planet_when_houses_missing() {
    let json = r#"{"planets": {"Ascendant": {"sign": "Le", "degree": 130.0, "house": 1}}}"#;
    let output = parse_full_chart(json).unwrap().to_chart_data();
    assert_eq!(output.ascendant, Some(Sign::Leo));
    assert!(output.birth.is_none());
}

#[test]
fn test_compatibility_evaluation() {
    let response = parse_compatibility(COMPATIBILITY).unwrap();
    let report = response.evaluate(&EngineSettings::default());

    assert_eq!(report.factors.len(), 8);
    let bhakoot = report.factors.iter().find(|f| f.key == KutaKey::Bhakoot).unwrap();
    assert!(bhakoot.dosha_cancelled);
    assert_eq!(bhakoot.adjusted_score, Some(7.0));
    assert_eq!(bhakoot.status, StatusColor::Green);

    assert_eq!(report.summary.raw_total, 25.5);
    assert_eq!(report.summary.total, 32.5);
    assert!(report.summary.recommended);
    assert_eq!(report.summary.status, StatusColor::Green);
}

#[test]
fn test_exact_matching_from_settings() {
    let json = r#"{"kutas": [
        {"name": "Graha Maitri", "points": 5, "maxPoints": 5, "description": ""},
        {"name": "maitri", "points": 4, "maxPoints": 5, "description": ""}
    ]}"#;
    let response = parse_compatibility(json).unwrap();
    let settings = EngineSettings {
        kuta_matching: KutaMatching::Exact,
        ..Default::default()
    };
    let report = response.evaluate(&settings);
    assert_eq!(report.factors.len(), 1);
    assert_eq!(report.factors[0].score, 4.0);
}

#[test]
fn test_snake_case_max_points_accepted() {
    let json = r#"{"kutas": [{"name": "Nadi", "points": 0, "max_points": 8}]}"#;
    let response = parse_compatibility(json).unwrap();
    assert_eq!(response.kutas[0].max_points, 8.0);
    assert!(response.dosha_summary.is_none());
}

#[test]
fn test_missing_kutas_is_invalid_json() {
    let err = parse_compatibility(r#"{"dosha_summary": null}"#).unwrap_err();
    assert!(matches!(err, PayloadError::InvalidJson(_)));
}
