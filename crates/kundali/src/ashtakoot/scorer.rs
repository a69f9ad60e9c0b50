use crate::ashtakoot::narrative;
use crate::ashtakoot::types::{AshtakootFactorView, DoshaDetail, KutaDetail, KutaKey, StatusColor};
use crate::settings::{EngineSettings, KutaMatching};
use std::collections::HashMap;

/// Status colour for one factor, first matching rule wins:
///
/// 1. dosha present and cancelled: green
/// 2. dosha present and active: red
/// 3. Nadi or Bhakoot with a raw score of zero: red
/// 4. full marks, or at least 80% on a factor worth 5 or more: green
/// 5. zero or under 25%: red
/// 6. otherwise yellow
///
/// A non-positive maximum counts as a ratio of zero.
pub fn status_for(
    key: KutaKey,
    score: f64,
    max_score: f64,
    dosha_present: bool,
    dosha_cancelled: bool,
) -> StatusColor {
    if dosha_present {
        return if dosha_cancelled {
            StatusColor::Green
        } else {
            StatusColor::Red
        };
    }
    if key.is_critical() && score == 0.0 {
        return StatusColor::Red;
    }
    ratio_status(score, max_score)
}

/// Rules 4-6 of [`status_for`] on a bare score ratio.
pub fn ratio_status(score: f64, max_score: f64) -> StatusColor {
    let ratio = if max_score > 0.0 { score / max_score } else { 0.0 };
    if ratio == 1.0 || (ratio >= 0.8 && max_score >= 5.0) {
        StatusColor::Green
    } else if ratio == 0.0 || ratio < 0.25 {
        StatusColor::Red
    } else {
        StatusColor::Yellow
    }
}

/// Find the dosha entry for `key`, trying `"<key>"` then `"<key>_dosha"`,
/// ignoring case.
pub fn lookup_dosha<'a>(
    doshas: &'a HashMap<String, DoshaDetail>,
    key: KutaKey,
) -> Option<&'a DoshaDetail> {
    let suffixed = format!("{}_dosha", key.key());
    let find = |wanted: &str| {
        doshas
            .get(wanted)
            .or_else(|| {
                doshas
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
                    .map(|(_, detail)| detail)
            })
    };
    find(key.key()).or_else(|| find(&suffixed))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AshtakootScorer {
    matching: KutaMatching,
}

impl AshtakootScorer {
    pub fn new(matching: KutaMatching) -> Self {
        Self { matching }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(settings.kuta_matching)
    }

    /// Canonical factor for a service record, if its name matches one.
    pub fn key_for(&self, name: &str) -> Option<KutaKey> {
        KutaKey::ALL
            .into_iter()
            .find(|key| key.matches(name, self.matching))
    }

    /// Build the view for one record. Records that match no factor yield
    /// `None` rather than a zero-valued placeholder.
    pub fn classify(
        &self,
        kuta: &KutaDetail,
        dosha: Option<&DoshaDetail>,
    ) -> Option<AshtakootFactorView> {
        let key = self.key_for(&kuta.name)?;
        Some(build_view(key, kuta, dosha))
    }

    /// One view per factor found in `kutas`, in canonical order. For each
    /// factor the first matching record wins; missing factors are omitted.
    pub fn score(
        &self,
        kutas: &[KutaDetail],
        doshas: Option<&HashMap<String, DoshaDetail>>,
    ) -> Vec<AshtakootFactorView> {
        KutaKey::ALL
            .into_iter()
            .filter_map(|key| {
                let Some(kuta) = kutas.iter().find(|k| key.matches(&k.name, self.matching)) else {
                    log::debug!("no kuta record for {}", key.key());
                    return None;
                };
                let dosha = doshas.and_then(|map| lookup_dosha(map, key));
                Some(build_view(key, kuta, dosha))
            })
            .collect()
    }
}

/// Score `kutas` using the matching policy from `settings`.
pub fn score_factors(
    kutas: &[KutaDetail],
    doshas: Option<&HashMap<String, DoshaDetail>>,
    settings: &EngineSettings,
) -> Vec<AshtakootFactorView> {
    AshtakootScorer::from_settings(settings).score(kutas, doshas)
}

fn build_view(key: KutaKey, kuta: &KutaDetail, dosha: Option<&DoshaDetail>) -> AshtakootFactorView {
    let dosha_present = dosha.map_or(false, |d| d.present);
    let dosha_cancelled = dosha_present && dosha.map_or(false, |d| d.cancelled);

    let adjusted_score = dosha_present.then(|| {
        if dosha_cancelled {
            kuta.max_points
        } else {
            0.0
        }
    });
    let cancellation_reason = if dosha_cancelled {
        Some(
            dosha
                .and_then(|d| d.reason_short.clone())
                .unwrap_or_else(|| "Cancelled".to_string()),
        )
    } else {
        None
    };

    let status = status_for(
        key,
        kuta.points,
        kuta.max_points,
        dosha_present,
        dosha_cancelled,
    );
    let mut view = AshtakootFactorView {
        key,
        label: key.label().to_string(),
        icon: key.icon().to_string(),
        score: kuta.points,
        max_score: kuta.max_points,
        status,
        dosha_present,
        dosha_cancelled,
        adjusted_score,
        narrative: narrative::compose(
            key,
            status,
            dosha_present,
            dosha_cancelled,
            cancellation_reason.as_deref(),
        ),
        cancellation_reason,
        description: kuta.description.clone(),
        critical_failure: false,
    };
    view.critical_failure = view.is_critical_failure();
    view
}
