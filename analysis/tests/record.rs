use analysis::record;
use analysis::{ParseError, SchemaError};
use common::{FightResult, MatchRecord, Side};
use pretty_assertions::assert_eq;

fn reference() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn today_win() {
    let line = "123 Сегодня 14:05 CS ranked mix | 5 v 5 de_dust2 A Победа 10/5 1.5";

    let result = record::parse_line(line, reference()).unwrap();

    let expected = MatchRecord {
        fight_id: "123".to_owned(),
        date: date(2024, 3, 10),
        time: time(14, 5),
        game_type: "CS ranked mix".to_owned(),
        team_size: "5v5".to_owned(),
        map_name: "de_dust2".to_owned(),
        side: Side::Terrorist,
        result: FightResult::Win,
        kills: 10,
        deaths: 5,
        skill_delta: 1.5,
        split_marker: "".to_owned(),
        experience_gained: "".to_owned(),
    };
    assert_eq!(expected, result);
}

#[test]
fn absolute_date_split_loss() {
    let line = "456 12 марта 2024 09:00 CS unranked mix | 2 v 2 de_nuke B Поражение 3/8 -2.0 (split) 100";

    let result = record::parse_line(line, reference()).unwrap();

    let expected = MatchRecord {
        fight_id: "456".to_owned(),
        date: date(2024, 3, 12),
        time: time(9, 0),
        game_type: "CS unranked mix".to_owned(),
        team_size: "2v2".to_owned(),
        map_name: "de_nuke".to_owned(),
        side: Side::CounterTerrorist,
        result: FightResult::Loss,
        kills: 3,
        deaths: 8,
        skill_delta: -2.0,
        split_marker: "(split)".to_owned(),
        experience_gained: "100".to_owned(),
    };
    assert_eq!(expected, result);
}

#[test]
fn experience_without_split_marker() {
    let line = "#7 Вчера 22:00 CS 1.6 mix | 5 x 5 de_aztec B Победа 20/10 0.8 14";

    let result = record::parse_line(line, reference()).unwrap();

    assert_eq!(date(2024, 3, 9), result.date);
    assert_eq!("", result.split_marker);
    assert_eq!("14", result.experience_gained);
}

#[test]
fn split_marker_without_experience() {
    let line = "#7 Вчера 22:00 CS 1.6 mix | 5 x 5 de_aztec B Победа 20/10 0.8 (1/3)";

    let result = record::parse_line(line, reference()).unwrap();

    assert_eq!("(1/3)", result.split_marker);
    assert_eq!("", result.experience_gained);
}

#[test]
fn malformed_numbers_default_to_zero() {
    let line = "#8 Сегодня 10:00 CS 1.6 mix | 5 x 5 de_aztec A Поражение 7:3 minus";

    let result = record::parse_line(line, reference()).unwrap();

    assert_eq!(FightResult::Loss, result.result);
    assert_eq!((0, 0), (result.kills, result.deaths));
    assert_eq!(0.0, result.skill_delta);
}

#[test]
fn missing_skill_defaults_to_zero() {
    let line = "#8 Сегодня 10:00 CS 1.6 mix | 5 x 5 de_aztec A Победа 7/3";

    let result = record::parse_line(line, reference()).unwrap();

    assert_eq!((7, 3), (result.kills, result.deaths));
    assert_eq!(0.0, result.skill_delta);
}

#[test]
fn undecided_fights_carry_no_numbers() {
    let no_result = "#9 Сегодня 11:00 CS 1.6 mix | 5 x 5 de_dust2 A Не состоялся 10/5 1.5 (1/3) 12";
    let error = "#10 Сегодня 11:30 CS 1.6 mix | 5 x 5 de_dust2 B Ошибка 10/5 1.5";

    for (line, expected) in [
        (no_result, FightResult::NoResult),
        (error, FightResult::ErrorResult),
    ] {
        let result = record::parse_line(line, reference()).unwrap();

        assert_eq!(expected, result.result);
        assert_eq!(0, result.kills);
        assert_eq!(0, result.deaths);
        assert_eq!(0.0, result.skill_delta);
        assert_eq!("", result.split_marker);
        assert_eq!("", result.experience_gained);
    }
}

#[test]
fn missing_anchor() {
    let line = "#11 Сегодня 11:00 de_dust2 A Победа 10/5 1.5";

    let result = record::parse_line(line, reference());

    assert_eq!(
        Err(ParseError::Schema(SchemaError::MissingAnchor("CS"))),
        result
    );
}

#[test]
fn missing_required_fields() {
    let no_map = "#12 Сегодня 11:00 CS 1.6 mix | 5 x 5";
    assert_eq!(
        Err(ParseError::Schema(SchemaError::MissingField {
            field: "map_name",
            index: 10,
        })),
        record::parse_line(no_map, reference())
    );

    let no_result = "#12 Сегодня 11:00 CS 1.6 mix | 5 x 5 de_dust2 A";
    assert_eq!(
        Err(ParseError::Schema(SchemaError::MissingField {
            field: "result",
            index: 12,
        })),
        record::parse_line(no_result, reference())
    );

    let short_size = "#12 Сегодня 11:00 CS 1.6 mix | 5 x";
    assert_eq!(
        Err(ParseError::Schema(SchemaError::MissingField {
            field: "team_size",
            index: 9,
        })),
        record::parse_line(short_size, reference())
    );
}

#[test]
fn unknown_result_label() {
    let line = "#13 Сегодня 11:00 CS 1.6 mix | 5 x 5 de_dust2 A Ничья 10/10 0.0";

    assert_eq!(
        Err(ParseError::Schema(SchemaError::UnknownResult(
            "Ничья".to_owned()
        ))),
        record::parse_line(line, reference())
    );
}

#[test]
fn date_errors_surface() {
    let unknown_month = "#14 1 мартобря 2024 09:00 CS 1.6 mix | 5 x 5 de_dust2 A Победа 1/1 0.1";
    assert_eq!(
        Err(ParseError::UnknownMonth("мартобря".to_owned())),
        record::parse_line(unknown_month, reference())
    );

    let bad_span = "#15 Завтра 09:00 CS 1.6 mix | 5 x 5 de_dust2 A Победа 1/1 0.1";
    assert_eq!(
        Err(ParseError::DateParse {
            span: "Завтра 09:00".to_owned()
        }),
        record::parse_line(bad_span, reference())
    );
}

#[test]
fn deterministic() {
    let line = "#16 42 минуты назад CS 1.6 mix | 5 x 5 de_dust2 A Победа 21/12 2.4 (1/3) 15";

    let first = record::parse_line(line, reference()).unwrap();
    let second = record::parse_line(line, reference()).unwrap();

    assert_eq!(first, second);
    assert_eq!(time(17, 48), first.time);
}
