use jiff_wallclock::{tz::TimeZone, DateTime, WallClock};

#[test]
fn interning_is_case_insensitive_for_utc() -> crate::Result {
    let lower = TimeZone::get("utc")?;
    let upper = TimeZone::get("UTC")?;
    assert!(TimeZone::ptr_eq(&lower, &upper));
    assert_eq!(lower.name(), "UTC");
    assert!(TimeZone::ptr_eq(&lower, &TimeZone::utc()));
    Ok(())
}

#[test]
fn interning_named_zones() -> crate::Result {
    let _ = env_logger::try_init();

    let a = TimeZone::get("America/New_York")?;
    let b: TimeZone = "America/New_York".parse()?;
    assert!(TimeZone::ptr_eq(&a, &b));

    let jiff_tz = jiff::tz::TimeZone::get("America/New_York")?;
    let from_jiff = TimeZone::from(jiff_tz);
    assert!(TimeZone::ptr_eq(&a, &from_jiff));

    // Every datetime in a zone shares the interned value.
    let dt = DateTime::parse_in("2013-02-03 21:03:45", &a)?;
    assert!(TimeZone::ptr_eq(&dt.timezone(), &a));
    Ok(())
}

#[test]
fn threads_agree_on_the_interned_value() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| TimeZone::get("Pacific/Auckland")))
        .collect();
    let zones: Vec<TimeZone> =
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    for tz in &zones {
        assert!(TimeZone::ptr_eq(tz, &zones[0]));
    }
}

#[test]
fn unnamed_zones_keep_their_rules() -> crate::Result {
    let pst = jiff::tz::TimeZone::posix("PST8PDT,M3.2.0,M11.1.0")?;
    let est = jiff::tz::TimeZone::posix("EST5EDT,M3.2.0,M11.1.0")?;
    let east = DateTime::from(
        jiff::civil::date(2024, 1, 15).at(4, 0, 0, 0).to_zoned(est)?,
    );
    let west = DateTime::from(
        jiff::civil::date(2024, 1, 15).at(4, 0, 0, 0).to_zoned(pst)?,
    );
    assert_ne!(east.timezone(), west.timezone());
    let offset = west.timezone().offset_at(west.as_zoned().timestamp());
    assert_eq!(offset, jiff::tz::offset(-8));

    let rezoned = west.in_time_zone(&west.timezone())?;
    assert_eq!(rezoned.hour(), 4);
    assert_eq!(rezoned, west);
    assert_eq!(east.in_time_zone(&east.timezone())?.hour(), 4);
    Ok(())
}

#[test]
fn offsets() -> crate::Result {
    assert_eq!(TimeZone::utc().offset(), 0);
    assert_eq!(TimeZone::get("+09:30")?.offset(), 9 * 3600 + 1800);
    assert_eq!(TimeZone::get("Asia/Kolkata")?.offset(), 5 * 3600 + 1800);

    let paris = TimeZone::get("Europe/Paris")?;
    let winter = "2013-01-15T12:00:00Z".parse::<jiff::Timestamp>()?;
    assert_eq!(paris.offset_at(winter).seconds(), 3600);
    Ok(())
}

#[test]
fn unknown_zones() {
    let err = TimeZone::get("Nowhere/Special").unwrap_err();
    assert!(err.to_string().contains("Nowhere/Special"));
    assert!("+25:00".parse::<TimeZone>().is_err());
}

#[test]
fn location_of_utc_is_unknown() {
    let location = TimeZone::utc().location();
    assert!(location.is_unknown());
    assert_eq!(location.country_code(), "??");
    assert_eq!(location.latitude(), 0.0);
    assert_eq!(location.longitude(), 0.0);
}

#[cfg(feature = "serde")]
#[test]
fn json() -> crate::Result {
    let tz = TimeZone::get("Europe/Paris")?;
    let json = serde_json::to_string(&tz).unwrap();
    assert_eq!(json, r#""Europe/Paris""#);
    let got: TimeZone = serde_json::from_str(&json).unwrap();
    assert!(TimeZone::ptr_eq(&got, &tz));
    assert!(serde_json::from_str::<TimeZone>(r#""Nope/Nope""#).is_err());
    Ok(())
}
