use jiff_wallclock::{
    tz::TimeZone, DateTime, FieldValue, MutableDateTime, Property, WallClock,
};

fn utc(input: &str) -> DateTime {
    DateTime::parse_in(input, &TimeZone::utc()).unwrap()
}

#[test]
fn reading_fields() -> crate::Result {
    let dt = utc("2013-11-04 20:21:22");
    let read = |name: &str| dt.get_field(name).unwrap();
    assert_eq!(read("year"), FieldValue::Int(2013));
    assert_eq!(read("month"), FieldValue::Int(11));
    assert_eq!(read("day"), FieldValue::Int(4));
    assert_eq!(read("hour"), FieldValue::Int(20));
    assert_eq!(read("minute"), FieldValue::Int(21));
    assert_eq!(read("second"), FieldValue::Int(22));
    assert_eq!(read("quarter"), FieldValue::Int(4));
    assert_eq!(read("week"), FieldValue::Int(45));
    assert_eq!(read("weekday"), FieldValue::Int(1));
    assert_eq!(read("year_day"), FieldValue::Int(308));
    assert_eq!(read("timestamp"), FieldValue::Int(1_383_596_482));
    assert_eq!(read("is_monday"), FieldValue::Bool(true));
    assert_eq!(read("is_sunday"), FieldValue::Bool(false));
    assert_eq!(read("is_empty"), FieldValue::Bool(false));
    assert_eq!(read("is_utc"), FieldValue::Bool(true));
    assert_eq!(read("tz"), FieldValue::TimeZone(TimeZone::utc()));
    assert_eq!(read("zone"), read("timezone"));
    assert_eq!(read("as_db"), FieldValue::from("2013-11-04 20:21:22"));

    let tomorrow = read("tomorrow").to_datetime().unwrap();
    assert_eq!(tomorrow.as_db(), "2013-11-05 00:00:00");
    assert!(matches!(read("tomorrow"), FieldValue::Immutable(_)));
    assert!(matches!(read("mutable"), FieldValue::Mutable(_)));

    let mutable = dt.to_mutable();
    assert!(matches!(mutable.get_field("sunday")?, FieldValue::Mutable(_)));
    assert!(matches!(
        mutable.get_field("immutable")?,
        FieldValue::Immutable(_)
    ));
    Ok(())
}

#[test]
fn every_name_is_readable() {
    let dt = utc("2013-11-04 20:21:22");
    let mutable = dt.to_mutable();
    for name in Property::names() {
        assert!(dt.get_field(name).is_ok(), "{name}");
        assert!(mutable.get_field(name).is_ok(), "{name}");
    }
}

#[test]
fn unknown_names_are_not_defined() {
    let mut dt = utc("2013-11-04 20:21:22");
    let mut mutable = dt.to_mutable();
    for name in ["fortnight", "Year", "", "as_iso9999", "is_caturday"] {
        assert!(dt.get_field(name).unwrap_err().is_property_not_defined());
        assert!(
            mutable.get_field(name).unwrap_err().is_property_not_defined(),
        );
        let err = dt.set_field(name, FieldValue::Int(1)).unwrap_err();
        assert!(err.is_property_not_defined(), "{name}");
        let err = mutable.set_field(name, FieldValue::Int(1)).unwrap_err();
        assert!(err.is_property_not_defined(), "{name}");
    }
    insta::assert_snapshot!(
        dt.get_field("fortnight").unwrap_err(),
        @"property `fortnight` is not defined",
    );
}

#[test]
fn derived_fields_are_not_writable() {
    let mut dt = utc("2013-11-04 20:21:22");
    let mut mutable = dt.to_mutable();
    let mut writable = vec![];
    for name in Property::names() {
        let property = Property::from_name(name).unwrap();
        let err = dt.set_field(name, FieldValue::Int(1)).unwrap_err();
        assert!(err.is_property_not_writable(), "{name}");
        if property.is_writable() {
            writable.push(name);
            continue;
        }
        let err = mutable.set_field(name, FieldValue::Int(1)).unwrap_err();
        assert!(err.is_property_not_writable(), "{name}");
    }
    assert_eq!(
        writable,
        [
            "timestamp", "year", "month", "day", "hour", "minute", "second",
            "timezone", "zone", "tz",
        ],
    );
    assert_eq!(dt.as_db(), "2013-11-04 20:21:22");
    assert_eq!(mutable.as_db(), "2013-11-04 20:21:22");
    insta::assert_snapshot!(
        mutable.set_field("quarter", FieldValue::Int(2)).unwrap_err(),
        @"property `quarter` is not writable",
    );
}

#[test]
fn writing_fields() -> crate::Result {
    let mut dt =
        MutableDateTime::parse_in("2013-11-04 20:21:22", &TimeZone::utc())?;
    dt.set_field("year", FieldValue::Int(2014))?;
    dt.set_field("month", 2.into())?;
    dt.set_field("day", 30.into())?;
    assert_eq!(dt.as_db(), "2014-03-02 20:21:22");

    dt.set_field("hour", 25.into())?;
    assert_eq!(dt.as_db(), "2014-03-03 01:21:22");

    dt.set_field("timestamp", 0.into())?;
    assert_eq!(dt.as_db(), "1970-01-01 00:00:00");

    dt.set_field("timezone", "Europe/Paris".into())?;
    assert_eq!(dt.as_db(), "1970-01-01 01:00:00");
    assert_eq!(dt.timestamp(), 0);

    dt.set_field("tz", TimeZone::utc().into())?;
    assert!(dt.is_utc());
    Ok(())
}

#[test]
fn writing_the_wrong_kind_of_value() -> crate::Result {
    let mut dt =
        MutableDateTime::parse_in("2013-11-04 20:21:22", &TimeZone::utc())?;
    let err = dt.set_field("year", "2014".into()).unwrap_err();
    assert!(!err.is_property_not_defined());
    assert!(!err.is_property_not_writable());
    insta::assert_snapshot!(
        err,
        @r#"property `year` requires an integer, but got Str("2014")"#,
    );
    let err = dt.set_field("zone", FieldValue::Bool(true)).unwrap_err();
    assert!(err.to_string().contains("requires a time zone"));
    let err = dt.set_field("zone", "Mars/Olympus_Mons".into()).unwrap_err();
    assert!(err.to_string().contains("failed to find time zone"));
    assert_eq!(dt.as_db(), "2013-11-04 20:21:22");
    Ok(())
}
