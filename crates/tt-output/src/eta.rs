//! Human-readable ETA text.

use tt_core::Language;

const SECS_PER_DAY: i64 = 86_400;

/// Unit labels for one display language.
struct UnitLabels {
    seconds: &'static str,
    minutes: &'static str,
}

fn unit_labels(lang: Language) -> UnitLabels {
    match lang {
        Language::Ar => UnitLabels { seconds: "ثانية", minutes: "دقيقة" },
        Language::Fr => UnitLabels { seconds: "s", minutes: "min" },
        Language::En => UnitLabels { seconds: "sec", minutes: "min" },
    }
}

/// Duration text for an ETA.
///
/// Under a minute this is `"<s> <seconds>"`; otherwise `"<m> <minutes>"`,
/// followed by `" <s> <seconds>"` unless the remainder is zero.
///
/// ```rust
/// use tt_core::Language;
/// use tt_output::format_eta;
///
/// assert_eq!(format_eta(45, Language::En), "45 sec");
/// assert_eq!(format_eta(120, Language::En), "2 min");
/// assert_eq!(format_eta(125, Language::En), "2 min 5 sec");
/// ```
pub fn format_eta(seconds: u32, lang: Language) -> String {
    let labels = unit_labels(lang);
    if seconds < 60 {
        return format!("{seconds} {}", labels.seconds);
    }
    let (mins, secs) = (seconds / 60, seconds % 60);
    if secs > 0 {
        format!("{mins} {} {secs} {}", labels.minutes, labels.seconds)
    } else {
        format!("{mins} {}", labels.minutes)
    }
}

/// 24-hour `HH:MM` (UTC) of `now_unix_secs + eta_seconds`.
pub fn arrival_clock(now_unix_secs: i64, eta_seconds: u32) -> String {
    let of_day = (now_unix_secs + eta_seconds as i64).rem_euclid(SECS_PER_DAY);
    format!("{:02}:{:02}", of_day / 3_600, of_day % 3_600 / 60)
}
