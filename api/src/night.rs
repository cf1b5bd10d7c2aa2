//! Labels for event dates. A descente runs overnight, so an event dated
//! `D` is shown as the night from `D` to `D + 1`.

use chrono::Datelike;
use chrono::NaiveDate;

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

fn day(date: NaiveDate) -> String {
    match date.day() {
        1 => "1er".to_string(),
        d => d.to_string(),
    }
}

/// `2019-12-21` → `Nuit du 21 au 22 décembre 2019`.
///
/// Month and year are only repeated on the left side when the night
/// crosses them.
pub fn night_of(date: NaiveDate) -> String {
    let Some(next) = date.succ_opt() else {
        return format!("Nuit du {} {} {}", day(date), month_name(date), date.year());
    };

    let left = if date.year() != next.year() {
        format!("{} {} {}", day(date), month_name(date), date.year())
    } else if date.month() != next.month() {
        format!("{} {}", day(date), month_name(date))
    } else {
        day(date)
    };

    format!(
        "Nuit du {left} au {} {} {}",
        day(next),
        month_name(next),
        next.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_month() {
        assert_eq!(night_of(date(2019, 12, 21)), "Nuit du 21 au 22 décembre 2019");
    }

    #[test]
    fn month_rollover() {
        assert_eq!(
            night_of(date(2020, 1, 31)),
            "Nuit du 31 janvier au 1er février 2020"
        );
    }

    #[test]
    fn year_rollover() {
        assert_eq!(
            night_of(date(2019, 12, 31)),
            "Nuit du 31 décembre 2019 au 1er janvier 2020"
        );
    }

    #[test]
    fn leap_day() {
        assert_eq!(night_of(date(2024, 2, 28)), "Nuit du 28 au 29 février 2024");
        assert_eq!(night_of(date(2024, 2, 29)), "Nuit du 29 février au 1er mars 2024");
    }

    #[test]
    fn first_of_month_starts_with_1er() {
        assert_eq!(night_of(date(2021, 8, 1)), "Nuit du 1er au 2 août 2021");
    }
}
