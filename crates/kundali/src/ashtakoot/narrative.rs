//! Human-readable text for factor views.

use crate::ashtakoot::types::{AshtakootFactorView, KutaKey, StatusColor};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // The service writes descriptions from a generic "Boy"/"Girl" viewpoint.
    static ref PARTNER_PLACEHOLDER: Regex = Regex::new(r"\b(Boy|Girl)('s|:| )").unwrap();
}

pub fn template(key: KutaKey) -> &'static str {
    match key {
        KutaKey::Varna => "Varna measures how the partners' work ethic and sense of ego align.",
        KutaKey::Vashya => "Vashya describes the balance of influence and mutual attraction.",
        KutaKey::Tara => "Tara compares birth stars to gauge shared fortune and destiny.",
        KutaKey::Yoni => "Yoni reflects physical and intimate compatibility.",
        KutaKey::Maitri => "Maitri looks at the friendship between the Moon sign lords.",
        KutaKey::Gana => "Gana compares temperament and everyday behaviour.",
        KutaKey::Bhakoot => "Bhakoot weighs emotional bonding, love and family prosperity.",
        KutaKey::Nadi => "Nadi relates to health and the vitality of future generations.",
    }
}

const DEFAULT_CANCELLATION: &str = "other chart factors";

/// Template sentence followed by the dosha outcome or, without a dosha, the
/// compatibility level implied by `status`.
pub fn compose(
    key: KutaKey,
    status: StatusColor,
    dosha_present: bool,
    dosha_cancelled: bool,
    cancellation_reason: Option<&str>,
) -> String {
    let tail = match (dosha_present, dosha_cancelled) {
        (true, true) => format!(
            " The dosha here is cancelled ({}), so full points are restored.",
            cancellation_reason
                .filter(|r| !r.trim().is_empty())
                .unwrap_or(DEFAULT_CANCELLATION)
        ),
        (true, false) => {
            " An active dosha is present and this factor contributes no points.".to_string()
        }
        (false, _) => match status {
            StatusColor::Green => " Compatibility here is excellent.".to_string(),
            StatusColor::Yellow => " Compatibility here is moderate.".to_string(),
            StatusColor::Red => " Compatibility here is challenging.".to_string(),
        },
    };
    format!("{}{}", template(key), tail)
}

pub fn narrative(view: &AshtakootFactorView) -> String {
    compose(
        view.key,
        view.status,
        view.dosha_present,
        view.dosha_cancelled,
        view.cancellation_reason.as_deref(),
    )
}

/// Replace "Boy:", "Boy's", "Boy " (and the Girl forms) with partner names.
pub fn personalize(text: &str, boy_name: &str, girl_name: &str) -> String {
    PARTNER_PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let name = if &caps[1] == "Boy" { boy_name } else { girl_name };
            format!("{}{}", name, &caps[2])
        })
        .into_owned()
}
