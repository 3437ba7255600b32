use analysis::datetime::resolve;
use analysis::ParseError;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn day_words() {
    let now = at(2024, 3, 1, 18, 30, 0);

    assert_eq!(Ok(at(2024, 3, 1, 14, 5, 0)), resolve(&["Сегодня", "14:05"], now));
    assert_eq!(Ok(at(2024, 2, 29, 23, 59, 0)), resolve(&["Вчера", "23:59"], now));
    assert_eq!(Ok(at(2024, 2, 28, 0, 0, 0)), resolve(&["Позавчера", "00:00"], now));
}

#[test]
fn minutes_ago() {
    let now = at(2024, 3, 10, 18, 30, 45);

    assert_eq!(
        Ok(at(2024, 3, 10, 17, 48, 0)),
        resolve(&["42", "минуты", "назад"], now)
    );
}

/// Known limitation: minutes only move the time of day. Past midnight the
/// date stays the reference date.
#[test]
fn minutes_ago_keeps_reference_date() {
    let now = at(2024, 3, 10, 0, 10, 30);

    assert_eq!(
        Ok(at(2024, 3, 10, 23, 28, 0)),
        resolve(&["42", "минуты", "назад"], now)
    );
    assert_eq!(
        Ok(at(2024, 3, 10, 0, 5, 0)),
        resolve(&["5", "минут", "назад", "·"], now)
    );
}

/// Known limitation: only minute offsets move the clock. "N hours ago"
/// resolves to the reference time truncated to the minute.
#[test]
fn hours_ago_keeps_reference_time() {
    let now = at(2024, 3, 10, 15, 47, 12);

    assert_eq!(
        Ok(at(2024, 3, 10, 15, 47, 0)),
        resolve(&["3", "часа", "назад"], now)
    );
}

#[test]
fn absolute_dates() {
    let now = at(2024, 3, 10, 18, 30, 0);

    assert_eq!(
        Ok(at(2024, 3, 12, 9, 0, 0)),
        resolve(&["12", "марта", "2024", "09:00"], now)
    );
    assert_eq!(
        Ok(at(2023, 1, 1, 0, 0, 0)),
        resolve(&["1", "Января", "2023", "00:00"], now)
    );
    assert_eq!(
        Ok(at(2023, 12, 31, 23, 55, 0)),
        resolve(&["31", "декабря", "2023", "23:55"], now)
    );
}

#[test]
fn unknown_month() {
    let now = at(2024, 3, 10, 18, 30, 0);

    assert_eq!(
        Err(ParseError::UnknownMonth("мартобря".to_owned())),
        resolve(&["1", "мартобря", "2024", "09:00"], now)
    );
}

#[test]
fn impossible_dates() {
    let now = at(2024, 3, 10, 18, 30, 0);

    assert_eq!(
        Err(ParseError::DateParse {
            span: "30 февраля 2024 10:00".to_owned()
        }),
        resolve(&["30", "февраля", "2024", "10:00"], now)
    );
    assert_eq!(
        Err(ParseError::DateParse {
            span: "12 марта 2024 9h00".to_owned()
        }),
        resolve(&["12", "марта", "2024", "9h00"], now)
    );
    assert_eq!(
        Err(ParseError::DateParse {
            span: "Сегодня 25:00".to_owned()
        }),
        resolve(&["Сегодня", "25:00"], now)
    );
}

#[test]
fn unexpected_shapes() {
    let now = at(2024, 3, 10, 18, 30, 0);

    for span in [
        &["14:05"][..],
        &["Завтра", "10:00"][..],
        &["1", "2", "3", "4", "5"][..],
        &["много", "минут", "назад"][..],
        &[][..],
    ] {
        let result = resolve(span, now);
        assert_eq!(
            Err(ParseError::DateParse {
                span: span.join(" ")
            }),
            result,
            "{:?}",
            span
        );
    }
}
