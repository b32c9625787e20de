// --- File: crates/slotwise_engine/src/classify.rs ---
use slotwise_config::ScheduleConfig;

/// One entry of the label classification table. Rules are evaluated in
/// order; the first rule that fires decides the event's class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelRule {
    /// Case-insensitive exact match drops the event entirely.
    ExactIgnore(Vec<String>),
    /// Case-insensitive exact match turns an all-day event into a
    /// full-day block. Ignored for timed events.
    ExactBlock(Vec<String>),
    /// Substring match against any keyword turns an all-day event into a
    /// full-day block. Also matched with inter-word spaces removed, so
    /// "OOO" catches "Out of office". Ignored for timed events.
    ContainsAny(Vec<String>),
}

/// How a raw event participates in the busy computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    /// Excluded entirely.
    Ignored,
    /// All-day event blocking every civil day it spans.
    FullDayBlock,
    /// Normal timed event, buffered on both sides.
    Timed,
}

/// Builds the standard rule table from deployment configuration:
/// ignore list first, then the exact block list, then keyword heuristics.
pub fn rules_from_config(schedule: &ScheduleConfig) -> Vec<LabelRule> {
    vec![
        LabelRule::ExactIgnore(schedule.ignore_titles.clone()),
        LabelRule::ExactBlock(schedule.block_day_titles.clone()),
        LabelRule::ContainsAny(schedule.block_day_keywords.clone()),
    ]
}

/// Classifies one event label against the rule table.
///
/// All-day events are never partially blocking: either some rule marks them
/// as a full-day block, or they are dropped. Timed events pass through
/// unless an ignore rule catches them.
pub fn classify(label: &str, all_day: bool, rules: &[LabelRule]) -> EventClass {
    let lower = label.to_lowercase();
    let compact: String = lower.split_whitespace().collect();

    for rule in rules {
        match rule {
            LabelRule::ExactIgnore(titles) => {
                if titles.iter().any(|t| t.to_lowercase() == lower) {
                    return EventClass::Ignored;
                }
            }
            LabelRule::ExactBlock(titles) => {
                if all_day && titles.iter().any(|t| t.to_lowercase() == lower) {
                    return EventClass::FullDayBlock;
                }
            }
            LabelRule::ContainsAny(keywords) => {
                if all_day
                    && keywords.iter().any(|k| {
                        let k = k.to_lowercase();
                        lower.contains(&k) || compact.contains(&k)
                    })
                {
                    return EventClass::FullDayBlock;
                }
            }
        }
    }

    if all_day {
        EventClass::Ignored
    } else {
        EventClass::Timed
    }
}
