//! Text helpers shared by every message the bot renders.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Prefixes Discord markdown control characters (`* | _ ~ \``) with a backslash.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '|' | '_' | '~' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Collapses every run of whitespace into a single space.
pub fn shrink_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Keeps at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Picks the Russian noun form for `number`.
///
/// `forms` is `[many, one, few]`, e.g. `["дней", "день", "дня"]` gives
/// 0 дней, 1 день, 2 дня, 5 дней, 11 дней, 21 день.
pub fn russify_number<'a>(number: u64, forms: [&'a str; 3]) -> &'a str {
    let [many, one, few] = forms;
    if (10..=20).contains(&(number % 100)) {
        return many;
    }
    match number % 10 {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}

/// Localised "last seen" text for a character.
///
/// Uses the largest non-zero unit among days, hours, minutes and seconds.
///
/// # Arguments
/// - `last_seen_at` - Last online/offline transition, `None` if never seen
/// - `now` - Current time
///
/// # Returns
/// - `String` - e.g. `заходил(а) 3 дня назад`, `заходил(а) только что` or `не в сети`
pub fn offline_time(last_seen_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(last_seen_at) = last_seen_at else {
        return "не в сети".to_string();
    };

    let seconds_total = (now - last_seen_at).num_seconds().max(0) as u64;
    let days = seconds_total / 86_400;
    let hours = seconds_total / 3_600 % 24;
    let minutes = seconds_total / 60 % 60;
    let seconds = seconds_total % 60;

    let (value, forms) = if days > 0 {
        (days, ["дней", "день", "дня"])
    } else if hours > 0 {
        (hours, ["часов", "час", "часа"])
    } else if minutes > 0 {
        (minutes, ["минут", "минуту", "минуты"])
    } else if seconds > 0 {
        (seconds, ["секунд", "секунду", "секунды"])
    } else {
        return "заходил(а) только что".to_string();
    };

    format!("заходил(а) {value} {} назад", russify_number(value, forms))
}

/// Converts HSV (all components in `[0, 1]`) to RGB bytes.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let to_byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

/// Random pastel colour used for embeds that have no fixed colour.
pub fn random_color() -> (u8, u8, u8) {
    let hue = rand::rng().random::<f64>();
    hsv_to_rgb(hue, 0.6, 0.95)
}
