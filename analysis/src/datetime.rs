use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::ParseError;

pub static MONTHS: phf::Map<&'static str, u32> = phf::phf_map! {
    "января" => 1,
    "февраля" => 2,
    "марта" => 3,
    "апреля" => 4,
    "мая" => 5,
    "июня" => 6,
    "июля" => 7,
    "августа" => 8,
    "сентября" => 9,
    "октября" => 10,
    "ноября" => 11,
    "декабря" => 12,
};

/// Day words and how many calendar days they lie in the past.
pub static DAYS_AGO: phf::Map<&'static str, u64> = phf::phf_map! {
    "Сегодня" => 0,
    "Вчера" => 1,
    "Позавчера" => 2,
};

pub const AGO: &str = "назад";
pub const MINUTES_UNIT: &str = "мин";

/// Resolves the tokens between fight id and anchor against `now`.
///
/// Accepted shapes:
/// - `<day word> HH:MM`
/// - `N <unit> назад [..]`, only minute units move the clock, see [`ago`]
/// - `DD <month> YYYY HH:MM`
pub fn resolve(span: &[&str], now: NaiveDateTime) -> Result<NaiveDateTime, ParseError> {
    match span {
        [day_word, time] => {
            let days = DAYS_AGO
                .get(*day_word)
                .ok_or_else(|| ParseError::date(span))?;
            let time = parse_time(time).ok_or_else(|| ParseError::date(span))?;
            let date = now
                .date()
                .checked_sub_days(chrono::Days::new(*days))
                .ok_or_else(|| ParseError::date(span))?;

            Ok(date.and_time(time))
        }
        [amount, unit, ago_word] | [amount, unit, ago_word, _] if *ago_word == AGO => {
            ago(amount, unit, now).ok_or_else(|| ParseError::date(span))
        }
        [day, month, year, time] => {
            let month = MONTHS
                .get(month.to_lowercase().as_str())
                .copied()
                .ok_or_else(|| ParseError::UnknownMonth((*month).to_owned()))?;
            let day: u32 = day.parse().map_err(|_| ParseError::date(span))?;
            let year: i32 = year.parse().map_err(|_| ParseError::date(span))?;

            let date =
                NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ParseError::date(span))?;
            let time = parse_time(time).ok_or_else(|| ParseError::date(span))?;

            Ok(date.and_time(time))
        }
        _ => Err(ParseError::date(span)),
    }
}

/// `N минут назад` moves the time of day back by N minutes, the date stays
/// the reference date even past midnight. Any other unit ("hours ago") keeps
/// the reference time.
fn ago(amount: &str, unit: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let amount: u32 = amount.parse().ok()?;
    let now = truncate_to_minute(now);

    if !unit.contains(MINUTES_UNIT) {
        return Some(now);
    }

    let earlier = now.checked_sub_signed(chrono::TimeDelta::try_minutes(i64::from(amount))?)?;
    Some(now.date().and_time(earlier.time()))
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let (hour, minute) = raw.split_once(':')?;
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|at| at.with_nanosecond(0))
        .unwrap_or(at)
}
