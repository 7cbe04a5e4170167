//! Targeting criteria normalization for `ads.getTargetingStats`.

use serde_json::{Map, Value};

pub const DEFAULT_AGE_FROM: i64 = 12;
pub const DEFAULT_AGE_TO: i64 = 65;

const AGE_FROM: &str = "age_from";
const AGE_TO: &str = "age_to";
const BIRTHDAY: &str = "birthday";

/// Prepares criteria for sending.
///
/// An age range given by one bound gets the default for the other one, and a
/// list of birthday flags collapses into their sum (the API takes a bit mask).
pub fn prepare_criteria(mut settings: Map<String, Value>) -> Map<String, Value> {
    if settings.is_empty() {
        return settings;
    }
    fill_default_age(&mut settings);
    sum_birthday(&mut settings);
    settings
}

fn fill_default_age(settings: &mut Map<String, Value>) {
    let has_from = settings.get(AGE_FROM).is_some_and(is_positive);
    let has_to = settings.get(AGE_TO).is_some_and(is_positive);

    if has_from && !has_to {
        settings.insert(AGE_TO.to_string(), Value::from(DEFAULT_AGE_TO));
    } else if !has_from && has_to {
        settings.insert(AGE_FROM.to_string(), Value::from(DEFAULT_AGE_FROM));
    }
}

fn sum_birthday(settings: &mut Map<String, Value>) {
    let sum = match settings.get(BIRTHDAY) {
        Some(Value::Array(flags)) if !flags.is_empty() => flags
            .iter()
            .map(as_number)
            .fold(0i64, |acc, flag| acc.saturating_add(flag)),
        _ => return,
    };
    settings.insert(BIRTHDAY.to_string(), Value::from(sum));
}

fn as_number(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Bool(b) => *b as i64,
        _ => 0,
    }
}

fn is_positive(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(|f| f > 0.0),
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(|f| f > 0.0),
        _ => false,
    }
}
