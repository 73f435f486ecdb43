use jiff_wallclock::{
    fmt::{self, Format},
    tz::TimeZone,
    Change, DateTime, MutableDateTime, WallClock,
};

#[test]
fn none_renders_as_zero_date() {
    let dt = DateTime::none();
    assert!(dt.is_empty());
    assert_eq!(dt.as_date(), "0000-00-00");
    assert_eq!(dt.as_db(), "0000-00-00 00:00:00");
    assert_eq!(dt.to_string(), "");
    assert_eq!(dt.format(fmt::DB).unwrap(), "0000-00-00 00:00:00");
    assert_eq!(dt.format(fmt::DATE).unwrap(), "0000-00-00");
}

#[test]
fn other_formats_render_the_normalized_value() {
    let dt = DateTime::none();
    assert_eq!(dt.as_rss(), "Wed, 30 Nov -0001 00:00:00 +0000");
    assert_eq!(dt.as_number(), "-00011130000000");
    assert_eq!(dt.as_time(), "00:00:00");
    assert_eq!(dt.format("Y-m-d").unwrap(), "0000-00-00");
    assert_eq!(dt.format("Y/m/d").unwrap(), "-0001/11/30");
    assert_eq!(dt.year(), -1);
    assert_eq!(dt.month(), 11);
    assert_eq!(dt.day(), 30);
    assert_eq!(dt.timestamp(), -62169984000);
    assert_eq!(dt.as_cookie(), "Wednesday, 30-Nov--0001 00:00:00 UTC");
    assert_eq!(dt.weekday(), 3);
    assert!(dt.is_wednesday());
}

#[test]
fn none_in_keeps_zone() -> crate::Result {
    let paris = TimeZone::get("Europe/Paris")?;
    let dt = DateTime::none_in(&paris)?;
    assert!(dt.is_empty());
    assert_eq!(dt.timezone(), paris);
    assert_eq!(dt.as_db(), "0000-00-00 00:00:00");
    assert_eq!(dt.format_as(Format::Date)?, "0000-00-00");

    let utc = dt.utc()?;
    assert!(utc.is_empty());
    assert!(utc.is_utc());
    assert_eq!(utc, DateTime::none());
    Ok(())
}

#[test]
fn parsing_the_zero_date() -> crate::Result {
    let utc = TimeZone::utc();
    assert!(DateTime::parse_in("0000-00-00", &utc)?.is_empty());
    assert!(DateTime::parse_in("0000-00-00 00:00:00", &utc)?.is_empty());
    assert!(MutableDateTime::parse_in("0000-00-00", &utc)?.is_empty());
    assert!(!DateTime::parse_in("0001-01-01", &utc)?.is_empty());
    Ok(())
}

#[test]
fn changing_the_empty_date() -> crate::Result {
    let dt = DateTime::none();
    assert!(dt.with(&Change::new())?.is_empty());

    let changed = dt.with(&Change::new().year(2014))?;
    assert!(!changed.is_empty());
    assert_eq!(changed.as_db(), "2014-11-30 00:00:00");

    let mut dt = MutableDateTime::none();
    assert!(dt.is_empty());
    dt.set_year(2014)?;
    assert!(!dt.is_empty());
    assert!(DateTime::none().is_empty());
    Ok(())
}

#[test]
fn navigation_leaves_the_empty_date() -> crate::Result {
    let tomorrow = DateTime::none().tomorrow()?;
    assert!(!tomorrow.is_empty());
    assert_eq!(tomorrow.as_db(), "-0001-12-01 00:00:00");
    Ok(())
}

#[test]
fn shared_and_default() {
    assert!(DateTime::ptr_eq(&DateTime::none(), &DateTime::none()));
    assert!(DateTime::default().is_empty());
    assert!(MutableDateTime::default().is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn json() {
    #[derive(Debug, serde::Deserialize, serde::Serialize)]
    struct Row {
        created: DateTime,
        deleted: DateTime,
    }

    let utc = TimeZone::utc();
    let row = Row {
        created: DateTime::parse_in("2013-11-04 20:21:22", &utc).unwrap(),
        deleted: DateTime::none(),
    };
    let json = serde_json::to_string(&row).unwrap();
    assert_eq!(
        json,
        r#"{"created":"2013-11-04T20:21:22Z","deleted":""}"#,
    );
    let got: Row = serde_json::from_str(&json).unwrap();
    assert_eq!(got.created, row.created);
    assert!(got.created.is_utc());
    assert!(got.deleted.is_empty());

    let got: MutableDateTime = serde_json::from_str(r#""""#).unwrap();
    assert!(got.is_empty());
}
