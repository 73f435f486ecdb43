use jiff::Timestamp;
use jiff_wallclock::{
    civil::DayOfWeek,
    clock::{FixedClock, Session},
    fmt::Format,
    tz::TimeZone,
    DateTime, MutableDateTime, WallClock,
};

fn utc(input: &str) -> DateTime {
    DateTime::parse_in(input, &TimeZone::utc()).unwrap()
}

#[test]
fn weekday_numbering() {
    let days = [
        ("2014-01-06", 1, DayOfWeek::Monday),
        ("2014-01-07", 2, DayOfWeek::Tuesday),
        ("2014-01-08", 3, DayOfWeek::Wednesday),
        ("2014-01-09", 4, DayOfWeek::Thursday),
        ("2014-01-10", 5, DayOfWeek::Friday),
        ("2014-01-11", 6, DayOfWeek::Saturday),
        ("2014-01-12", 7, DayOfWeek::Sunday),
    ];
    for (input, number, day) in days {
        let dt = utc(input);
        assert_eq!(dt.weekday(), number, "{input}");
        assert_eq!(dt.day_of_week(), day, "{input}");
        assert_eq!(dt.format("N").unwrap(), number.to_string());
    }
    assert!(utc("2014-01-12").is_sunday());
    assert!(!utc("2014-01-12").is_monday());
}

#[test]
fn days_of_the_same_week() -> crate::Result {
    for day in 6..=12 {
        let dt = utc(&format!("2014-01-{day:02} 13:14:15"));
        let monday = dt.monday()?;
        assert_eq!(monday.as_db(), "2014-01-06 00:00:00");
        assert_eq!(monday.weekday(), 1);
        assert_eq!(monday.monday()?, monday);
        assert_eq!(dt.wednesday()?.as_db(), "2014-01-08 00:00:00");
        assert_eq!(dt.sunday()?.as_db(), "2014-01-12 00:00:00");
        assert_eq!(dt.sunday()?.weekday(), 7);
    }
    Ok(())
}

#[test]
fn monday_is_idempotent_across_a_year_boundary() -> crate::Result {
    // 2014-12-29 through 2015-01-04 is ISO week 1 of 2015.
    let dt = utc("2015-01-01 08:00:00");
    let monday = dt.monday()?;
    assert_eq!(monday.as_db(), "2014-12-29 00:00:00");
    assert_eq!(monday.monday()?, monday);
    assert_eq!(dt.week(), 1);
    assert_eq!(monday.week(), 1);
    assert_eq!(dt.sunday()?.as_db(), "2015-01-04 00:00:00");
    Ok(())
}

#[test]
fn tomorrow_and_yesterday() -> crate::Result {
    let dt = utc("2013-02-10 21:21:21");
    let tomorrow = dt.tomorrow()?;
    let yesterday = dt.yesterday()?;
    assert_eq!(tomorrow.as_db(), "2013-02-11 00:00:00");
    assert_eq!(yesterday.as_db(), "2013-02-09 00:00:00");

    assert!(yesterday < dt && dt < tomorrow);
    let all = [dt.clone(), yesterday.clone(), tomorrow.clone()];
    assert_eq!(all.iter().min(), Some(&yesterday));
    assert_eq!(all.iter().max(), Some(&tomorrow));

    let end_of_year = utc("2012-12-31 23:59:59").tomorrow()?;
    assert_eq!(end_of_year.as_db(), "2013-01-01 00:00:00");
    let leap = utc("2012-03-01 00:00:00").yesterday()?;
    assert_eq!(leap.as_db(), "2012-02-29 00:00:00");
    Ok(())
}

#[test]
fn now_is_memoized() {
    let now = DateTime::now();
    assert!(DateTime::ptr_eq(&now, &DateTime::now()));

    let yesterday = now.yesterday().unwrap();
    let tomorrow = now.tomorrow().unwrap();
    assert!(yesterday < now && now < tomorrow);
    assert!(now.is_today());
    assert!(tomorrow.is_future());
    assert!(yesterday.is_past());
    assert!(DateTime::right_now() >= now);

    // Mutable copies don't disturb the shared value.
    let mut copy = MutableDateTime::now();
    assert_eq!(copy, now);
    copy.set_year(2000).unwrap();
    assert_ne!(copy, DateTime::now());
    assert_eq!(DateTime::now(), now);
}

#[test]
fn sessions_with_a_fixed_clock() -> crate::Result {
    let ts = Timestamp::from_second(1_392_067_281)?;
    let session = Session::new(FixedClock::new(ts));
    let now = session.now();
    assert!(DateTime::ptr_eq(&now, &session.now()));
    let now = now.utc()?;
    assert_eq!(now.as_db(), "2014-02-10 21:21:21");
    assert!(now.is_past());
    assert!(!now.is_today());
    Ok(())
}

#[test]
fn time_zone_conversions() -> crate::Result {
    let paris = TimeZone::get("Europe/Paris")?;
    let dt = DateTime::parse_in("2013-02-03 21:03:45", &paris)?;

    let utc = dt.utc()?;
    assert!(utc.is_utc());
    assert!(!dt.is_utc());
    assert_eq!(utc, dt);
    assert_eq!(utc.as_db(), "2013-02-03 20:03:45");
    assert_eq!(utc.timestamp(), dt.timestamp());

    let tokyo = dt.in_time_zone(&TimeZone::get("Asia/Tokyo")?)?;
    assert_eq!(tokyo.as_db(), "2013-02-04 05:03:45");
    assert_eq!(tokyo, dt);

    assert!(dt.local()?.is_local());
    assert_eq!(dt.local()?, dt);
    Ok(())
}

#[test]
fn dst() -> crate::Result {
    let paris = TimeZone::get("Europe/Paris")?;
    let winter = DateTime::parse_in("2013-02-03 12:00:00", &paris)?;
    let summer = DateTime::parse_in("2013-07-03 12:00:00", &paris)?;
    assert!(!winter.is_dst());
    assert!(summer.is_dst());
    assert_eq!(summer.format("I T")?, "1 CEST");
    assert!(!utc("2013-07-03 12:00:00").is_dst());
    Ok(())
}

#[test]
fn zero_offsets_in_named_formats() -> crate::Result {
    let dt = utc("2013-11-04 20:21:22");
    assert_eq!(dt.as_rfc822(), "Mon, 04 Nov 13 20:21:22 GMT");
    assert_eq!(dt.as_rfc1123(), "Mon, 04 Nov 2013 20:21:22 GMT");
    assert_eq!(dt.as_iso8601(), "2013-11-04T20:21:22Z");
    assert_eq!(dt.as_rfc2822(), "Mon, 04 Nov 2013 20:21:22 +0000");
    assert_eq!(dt.as_atom(), "2013-11-04T20:21:22+00:00");

    let paris = dt.in_time_zone(&TimeZone::get("Europe/Paris")?)?;
    assert_eq!(paris.as_rfc822(), "Mon, 04 Nov 13 21:21:22 +0100");
    assert_eq!(paris.as_rfc1123(), "Mon, 04 Nov 2013 21:21:22 +0100");
    assert_eq!(paris.as_iso8601(), "2013-11-04T21:21:22+0100");
    assert_eq!(
        paris.format_as(Format::Cookie)?,
        "Monday, 04-Nov-2013 21:21:22 CET"
    );
    Ok(())
}

#[test]
fn cross_variant_comparisons() -> crate::Result {
    let immutable = utc("2013-02-03 21:03:45");
    let mutable = immutable.to_mutable();
    assert_eq!(immutable, mutable);
    assert_eq!(mutable, immutable);
    let later = immutable.tomorrow()?.to_mutable();
    assert!(immutable < later);
    assert!(later > immutable);
    assert_eq!(DateTime::from(later.clone()), later);
    Ok(())
}
