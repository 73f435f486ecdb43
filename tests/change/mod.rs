use jiff_wallclock::{
    tz::TimeZone, Change, DateTime, MutableDateTime, WallClock,
};

fn utc(input: &str) -> DateTime {
    DateTime::parse_in(input, &TimeZone::utc()).unwrap()
}

#[test]
fn cascade_resets_finer_fields() -> crate::Result {
    let dt = utc("2001-01-01 01:01:01");

    let changed = dt.with(&Change::new().hour(2).cascade(true))?;
    assert_eq!(changed.as_db(), "2001-01-01 02:00:00");

    // An explicit zero is a value, not an absent field.
    let changed = dt.with(&Change::new().minute(0).cascade(true))?;
    assert_eq!(changed.as_db(), "2001-01-01 01:00:00");
    let changed = dt.with(&Change::new().hour(0).cascade(true))?;
    assert_eq!(changed.as_db(), "2001-01-01 00:00:00");

    // Explicit finer fields win over the cascade.
    let change = Change::new().hour(2).second(30).cascade(true);
    assert_eq!(dt.with(&change)?.as_db(), "2001-01-01 02:00:30");

    let changed = dt.with(&Change::new().hour(2))?;
    assert_eq!(changed.as_db(), "2001-01-01 02:01:01");
    Ok(())
}

#[test]
fn unspecified_fields_keep_their_value() -> crate::Result {
    let dt = utc("2013-02-03 21:03:45");
    assert_eq!(
        dt.with(&Change::new().year(2014))?.as_db(),
        "2014-02-03 21:03:45"
    );
    assert_eq!(
        dt.with(&Change::new().day(9))?.as_db(),
        "2013-02-09 21:03:45"
    );
    assert_eq!(
        dt.with(&Change::new().minute(30))?.as_db(),
        "2013-02-03 21:30:45"
    );
    Ok(())
}

#[test]
fn overflow_carries() -> crate::Result {
    let dt = utc("2001-01-01 01:01:01");
    let cases = [
        (Change::new().hour(25), "2001-01-02 01:01:01"),
        (Change::new().minute(61), "2001-01-01 02:01:01"),
        (Change::new().second(-1), "2001-01-01 01:00:59"),
        (Change::new().hour(-1), "2000-12-31 23:01:01"),
        (Change::new().month(13), "2002-01-01 01:01:01"),
        (Change::new().month(0), "2000-12-01 01:01:01"),
        (Change::new().day(0), "2000-12-31 01:01:01"),
        (Change::new().month(2).day(30), "2001-03-02 01:01:01"),
        (
            Change::new().year(2004).month(2).day(30),
            "2004-03-01 01:01:01",
        ),
    ];
    for (change, expected) in cases {
        assert_eq!(dt.with(&change)?.as_db(), expected, "{change:?}");
    }
    Ok(())
}

#[test]
fn out_of_range_year_fails() {
    let dt = utc("2001-01-01 01:01:01");
    let err = dt.with(&Change::new().year(10_000).month(1)).unwrap_err();
    assert!(err.is_range());
    let err = dt.with(&Change::new().year(i64::MAX)).unwrap_err();
    assert!(!err.is_property_not_defined());
}

#[test]
fn unknown_fields_are_ignored() -> crate::Result {
    let change = Change::from_fields([("hour", 2), ("fortnight", 3)]);
    assert_eq!(change, Change::new().hour(2));
    assert!(Change::from_fields([("fortnight", 3)]).is_empty());

    let dt = utc("2001-01-01 01:01:01");
    let changed = dt.with(&change.cascade(true))?;
    assert_eq!(changed.as_db(), "2001-01-01 02:00:00");
    Ok(())
}

#[test]
fn keeps_time_zone_across_dst() -> crate::Result {
    let paris = TimeZone::get("Europe/Paris")?;
    let winter = DateTime::parse_in("2013-02-03 21:03:45", &paris)?;
    let summer = winter.with(&Change::new().month(7))?;
    assert_eq!(summer.timezone(), paris);
    assert_eq!(summer.as_db(), "2013-07-03 21:03:45");
    assert_eq!(summer.as_iso8601(), "2013-07-03T21:03:45+0200");
    Ok(())
}

#[test]
fn mutable_changes_in_place() -> crate::Result {
    let mut dt = MutableDateTime::parse_in(
        "2001-01-01 01:01:01",
        &TimeZone::utc(),
    )?;
    let frozen = dt.to_immutable();
    dt.change(&Change::new().hour(2).cascade(true))?;
    assert_eq!(dt.as_db(), "2001-01-01 02:00:00");
    assert_eq!(frozen.as_db(), "2001-01-01 01:01:01");

    dt.set_year(2010)?.set_month(6)?.set_day(15)?;
    assert_eq!(dt.as_db(), "2010-06-15 02:00:00");

    // A failed change leaves the value untouched.
    assert!(dt.set_year(i64::MAX).is_err());
    assert_eq!(dt.as_db(), "2010-06-15 02:00:00");
    Ok(())
}

#[test]
fn immutable_and_mutable_agree() -> crate::Result {
    let change = Change::new().month(14).hour(30).cascade(true);
    let immutable = utc("2013-02-03 21:03:45").with(&change)?;
    let mut mutable = utc("2013-02-03 21:03:45").to_mutable();
    mutable.change(&change)?;
    assert_eq!(immutable, mutable);
    assert_eq!(immutable.as_db(), mutable.as_db());
    assert_eq!(immutable.as_db(), "2014-02-04 06:00:00");
    Ok(())
}

quickcheck::quickcheck! {
    fn prop_empty_change_is_identity(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8
    ) -> bool {
        let db = format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            1 + year % 9999,
            1 + month % 12,
            1 + day % 28,
            hour % 24,
            minute % 60,
            second % 60,
        );
        let dt = utc(&db);
        dt.with(&Change::new()).unwrap().as_db() == db
            && dt.with(&Change::new().cascade(true)).unwrap().as_db() == db
    }
}
