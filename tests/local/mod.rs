use jiff::ToSpan;
use jiff_wallclock::{
    civil::{DayOfWeek, Interval, LocalDate, LocalDateTime, LocalTime, Month},
    tz::TimeZone,
    DateTime, MutableDateTime,
};

#[test]
fn time_of_day() -> crate::Result {
    let time = LocalTime::new(14, 30, 0, 0)?;
    assert_eq!(time.to_second_of_day(), 52_200);
    assert_eq!(time.to_millisecond_of_day(), 52_200_000);
    assert_eq!(time.to_microsecond_of_day(), 52_200_000_000);
    assert_eq!(LocalTime::midnight().to_microsecond_of_day(), 0);
    Ok(())
}

#[test]
fn dates_carry_out_of_range_days() -> crate::Result {
    assert_eq!(
        LocalDate::new(2023, Month::February, 29)?.to_string(),
        "2023-03-01",
    );
    assert_eq!(
        LocalDate::new(2024, Month::February, 29)?.to_string(),
        "2024-02-29",
    );
    assert_eq!(LocalDate::new(2023, 4, 31)?.to_string(), "2023-05-01");
    assert_eq!(LocalDate::new(2023, 12, 32)?.to_string(), "2024-01-01");
    // The month itself is validated.
    assert!(LocalDate::new(2023, 13, 1).unwrap_err().is_invalid_component());
    Ok(())
}

#[test]
fn derived_date_fields() -> crate::Result {
    let date = LocalDate::new(2016, Month::March, 1)?;
    assert_eq!(date.day_of_week(), DayOfWeek::Tuesday);
    assert_eq!(date.day_of_week().number(), 2);
    assert_eq!(date.day_of_year(), 61);
    assert!(date.is_leap_year());
    assert!(!LocalDate::new(1900, 1, 1)?.is_leap_year());
    assert!(LocalDate::new(2000, 1, 1)?.is_leap_year());
    Ok(())
}

#[test]
fn composition() -> crate::Result {
    let date = LocalDate::new(2013, 2, 3)?;
    let time = LocalTime::new(21, 3, 45, 123_456)?;
    let dt = date.at_time(time);
    assert_eq!(dt, time.at_date(date));
    assert_eq!(dt, date.at(21, 3, 45, 123_456)?);
    assert_eq!(dt, time.at(2013, Month::February, 3)?);
    assert_eq!(dt, LocalDateTime::new(2013, 2, 3, 21, 3, 45, 123_456)?);
    assert_eq!(dt.to_date(), date);
    assert_eq!(dt.to_time(), time);
    assert_eq!(dt.to_string(), "2013-02-03T21:03:45.123456");
    Ok(())
}

#[test]
fn extracted_from_wall_clock_values() -> crate::Result {
    let tokyo = TimeZone::get("Asia/Tokyo")?;
    let wall = DateTime::parse_in("2013-02-03 23:30:00", &tokyo)?;
    // Local values keep the wall clock reading, not the UTC one.
    assert_eq!(LocalDate::from(&wall).to_string(), "2013-02-03");
    assert_eq!(LocalTime::from(&wall).to_string(), "23:30:00.000000");

    let mutable = MutableDateTime::from(&wall);
    assert_eq!(LocalDateTime::from(&mutable), LocalDateTime::from(&wall));
    Ok(())
}

#[test]
fn interval_arithmetic() -> crate::Result {
    let date = LocalDate::new(2013, 1, 31)?;
    assert_eq!(date.checked_add(1.month())?.to_string(), "2013-02-28");
    assert_eq!(date.checked_sub(1.year())?.to_string(), "2012-01-31");

    let start = LocalDateTime::new(2013, 3, 30, 12, 0, 0, 0)?;
    let end = start.checked_add(1.day().hours(2))?;
    assert_eq!(end.to_string(), "2013-03-31T14:00:00.000000");
    let span = start.compare_to(end, false)?;
    assert_eq!((span.get_days(), span.get_hours()), (1, 2));
    let span = end.compare_to(start, false)?;
    assert_eq!((span.get_days(), span.get_hours()), (-1, -2));
    let span = end.compare_to(start, true)?;
    assert_eq!((span.get_days(), span.get_hours()), (1, 2));
    assert!(start < end);

    let late = LocalTime::new(23, 0, 0, 0)?;
    assert_eq!(late.checked_add(90.minutes())?.to_string(), "00:30:00.000000");
    Ok(())
}

#[test]
fn parsing() -> crate::Result {
    let dt: LocalDateTime = "2013-02-03 21:03:45".parse()?;
    assert_eq!(dt.to_string(), "2013-02-03T21:03:45.000000");
    let date: LocalDate = "2013-02-03T21:03:45+09:00".parse()?;
    assert_eq!(date.to_string(), "2013-02-03");
    let time: LocalTime = "2013-02-03T21:03:45Z".parse()?;
    assert_eq!(time.to_string(), "21:03:45.000000");
    assert!("yesterday at noon".parse::<LocalDate>().is_err());
    Ok(())
}

quickcheck::quickcheck! {
    fn prop_datetime_and_date_agree_on_year(seconds: i64) -> bool {
        // Keep within the range Jiff supports.
        let seconds = seconds % 253_402_207_200;
        let dt = DateTime::from_timestamp(seconds, &TimeZone::utc()).unwrap();
        let local = LocalDateTime::from(&dt);
        local.to_date().year() == LocalDate::from(&dt).year()
            && local.to_time() == LocalTime::from(&dt)
    }
}
