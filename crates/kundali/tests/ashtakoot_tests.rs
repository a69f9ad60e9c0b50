use kundali::ashtakoot::{
    aggregate, narrative, AshtakootScorer, DoshaDetail, KutaDetail, KutaKey, Rating, StatusColor,
};
use kundali::{score_factors, EngineSettings};
use std::collections::HashMap;

fn kuta(name: &str, points: f64, max_points: f64) -> KutaDetail {
    KutaDetail {
        name: name.to_string(),
        points,
        max_points,
        description: format!("{} description", name),
    }
}

fn perfect_kutas() -> Vec<KutaDetail> {
    vec![
        kuta("Varna", 1.0, 1.0),
        kuta("Vashya", 2.0, 2.0),
        kuta("Tara", 3.0, 3.0),
        kuta("Yoni", 4.0, 4.0),
        kuta("Maitri", 5.0, 5.0),
        kuta("Gana", 6.0, 6.0),
        kuta("Bhakoot", 7.0, 7.0),
        kuta("Nadi", 8.0, 8.0),
    ]
}

fn dosha(present: bool, cancelled: bool, reason: Option<&str>) -> DoshaDetail {
    DoshaDetail {
        present,
        cancelled,
        reason_short: reason.map(str::to_string),
    }
}

#[test]
fn test_nadi_zero_is_red() {
    let view = AshtakootScorer::default()
        .classify(&kuta("Nadi", 0.0, 8.0), None)
        .unwrap();
    assert_eq!(view.status, StatusColor::Red);
    assert!(view.critical_failure);
}

#[test]
fn test_varna_full_is_green() {
    let view = AshtakootScorer::default()
        .classify(&kuta("Varna", 6.0, 6.0), None)
        .unwrap();
    assert_eq!(view.status, StatusColor::Green);
    assert_eq!(view.label, "Work & Ego");
    assert_eq!(view.icon, "briefcase.fill");
}

#[test]
fn test_cancellation_restores_max() {
    let scorer = AshtakootScorer::default();
    let view = scorer
        .classify(&kuta("Yoni", 1.0, 4.0), Some(&dosha(true, true, Some("Friendly lords"))))
        .unwrap();
    assert_eq!(view.adjusted_score, Some(4.0));
    assert_eq!(view.effective_score(), 4.0);
    assert_eq!(view.status, StatusColor::Green);
    assert_eq!(view.cancellation_reason.as_deref(), Some("Friendly lords"));
    assert!(view.narrative.contains("Friendly lords"));
}

#[test]
fn test_active_dosha_zeroes_score() {
    let scorer = AshtakootScorer::default();
    let view = scorer
        .classify(&kuta("Yoni", 3.0, 4.0), Some(&dosha(true, false, None)))
        .unwrap();
    assert_eq!(view.adjusted_score, Some(0.0));
    assert_eq!(view.score, 3.0);
    assert_eq!(view.status, StatusColor::Red);
    assert!(!view.critical_failure);
}

#[test]
fn test_aggregate_sums_raw_scores_without_doshas() {
    let kutas = vec![
        kuta("Varna", 1.0, 1.0),
        kuta("Vashya", 0.5, 2.0),
        kuta("Tara", 1.5, 3.0),
        kuta("Yoni", 2.0, 4.0),
        kuta("Maitri", 4.0, 5.0),
        kuta("Gana", 0.0, 6.0),
        kuta("Bhakoot", 7.0, 7.0),
        kuta("Nadi", 8.0, 8.0),
    ];
    let views = AshtakootScorer::default().score(&kutas, None);
    assert_eq!(views.len(), 8);
    let summary = aggregate(&views);
    assert_eq!(summary.total, 24.0);
    assert_eq!(summary.raw_total, 24.0);
    assert_eq!(summary.max, 36.0);
}

#[test]
fn test_all_perfect_is_green() {
    let views = AshtakootScorer::default().score(&perfect_kutas(), None);
    let summary = aggregate(&views);
    assert_eq!(summary.total, 36.0);
    assert_eq!(summary.max, 36.0);
    assert_eq!(summary.status, StatusColor::Green);
    assert_eq!(summary.rating, Rating::Excellent);
    assert_eq!(summary.stars, 5);
    assert!(views.iter().all(|v| v.status == StatusColor::Green));
}

#[test]
fn test_nadi_zero_overrides_aggregate() {
    let mut kutas = perfect_kutas();
    kutas[7] = kuta("Nadi", 0.0, 8.0);
    let views = AshtakootScorer::default().score(&kutas, None);
    let summary = aggregate(&views);
    assert_eq!(summary.total, 28.0);
    assert_eq!(summary.status, StatusColor::Red);
    assert!(!summary.recommended);
    assert_eq!(summary.critical_failures, vec![KutaKey::Nadi]);
}

#[test]
fn test_cancelled_nadi_dosha_does_not_block() {
    let mut kutas = perfect_kutas();
    kutas[7] = kuta("Nadi", 0.0, 8.0);
    let mut doshas = HashMap::new();
    doshas.insert("nadi_dosha".to_string(), dosha(true, true, None));

    let views = score_factors(&kutas, Some(&doshas), &EngineSettings::default());
    let nadi = views.iter().find(|v| v.key == KutaKey::Nadi).unwrap();
    assert_eq!(nadi.status, StatusColor::Green);
    assert_eq!(nadi.cancellation_reason.as_deref(), Some("Cancelled"));

    let summary = aggregate(&views);
    assert_eq!(summary.total, 36.0);
    assert_eq!(summary.raw_total, 28.0);
    assert_eq!(summary.status, StatusColor::Green);
    assert!(summary.recommended);
}

#[test]
fn test_active_bhakoot_dosha_is_critical() {
    let mut doshas = HashMap::new();
    doshas.insert("bhakoot".to_string(), dosha(true, false, None));
    let views = score_factors(&perfect_kutas(), Some(&doshas), &EngineSettings::default());
    let summary = aggregate(&views);
    assert_eq!(summary.total, 29.0);
    assert_eq!(summary.critical_failures, vec![KutaKey::Bhakoot]);
    assert_eq!(summary.rating, Rating::NotRecommended);
    assert_eq!(summary.status, StatusColor::Red);
}

#[test]
fn test_bhakoot_zero_turns_green_total_red() {
    let mut kutas = perfect_kutas();
    kutas[6] = kuta("Bhakoot", 0.0, 7.0);
    let views = AshtakootScorer::default().score(&kutas, None);
    let summary = aggregate(&views);

    // 29 / 36 clears the 0.8 green threshold on its own
    assert_eq!(summary.total, 29.0);
    assert!(summary.total / summary.max >= 0.8);
    assert_eq!(summary.critical_failures, vec![KutaKey::Bhakoot]);
    assert_eq!(summary.status, StatusColor::Red);
    assert!(!summary.recommended);
}

#[test]
fn test_missing_factors_are_omitted() {
    let kutas = vec![kuta("Gana", 6.0, 6.0), kuta("Mahendra", 4.0, 4.0)];
    let views = AshtakootScorer::default().score(&kutas, None);
    assert_eq!(views.len(), 1);
    let summary = aggregate(&views);
    assert_eq!(summary.max, 6.0);
}

#[test]
fn test_scoring_is_idempotent() {
    let scorer = AshtakootScorer::default();
    let first = scorer.score(&perfect_kutas(), None);
    let second = scorer.score(&perfect_kutas(), None);
    assert_eq!(first, second);
    assert_eq!(narrative(&first[0]), first[0].narrative);
}
