use jiff_wallclock::{
    localize, tz::TimeZone, DateTime, MutableDateTime, WallClock,
};

// The localizer is process-wide, so everything touching it lives in one test.
#[test]
fn global_localizer() -> crate::Result {
    let _ = env_logger::try_init();

    let dt = DateTime::parse_in("2013-11-04 20:21:22", &TimeZone::utc())?;

    assert!(localize::defined().is_none());
    let err = dt.localize("fr").unwrap_err();
    assert!(err.is_localizer_not_configured());
    insta::assert_snapshot!(
        err,
        @"no localizer has been defined, use `localize::define` to define one",
    );

    let previous = localize::define(|dt: &DateTime, locale: &str| {
        format!("{locale}: {}", dt.as_date())
    });
    assert!(previous.is_none());
    assert!(localize::defined().is_some());
    assert_eq!(dt.localize("fr")?, "fr: 2013-11-04");
    assert_eq!(dt.localize_default()?, "en: 2013-11-04");
    assert_eq!(DateTime::none().localize("de")?, "de: 0000-00-00");
    let mutable = MutableDateTime::from(&dt);
    assert_eq!(mutable.localize("es")?, "es: 2013-11-04");

    // The slot isn't locked while a localizer runs, so it can look at it.
    let previous = localize::define(|dt: &DateTime, _: &str| {
        let defined = localize::defined().is_some();
        format!("{} {defined}", dt.as_time())
    });
    assert!(previous.is_some());
    assert_eq!(dt.localize("fr")?, "20:21:22 true");

    let removed = localize::undefine();
    assert!(removed.is_some());
    assert!(localize::undefine().is_none());
    assert!(dt.localize("fr").unwrap_err().is_localizer_not_configured());
    Ok(())
}

#[test]
fn explicit_localizer() {
    let dt = DateTime::parse_in("2013-11-04 20:21:22", &TimeZone::utc())
        .unwrap();
    let day_count = |dt: &DateTime, _: &str| dt.year_day();
    assert_eq!(dt.localize_with(&day_count, "en"), 308);

    struct Shouty;

    impl localize::Localize for Shouty {
        type Output = String;

        fn localize(&self, dt: &DateTime, locale: &str) -> String {
            format!("{}!", dt.as_rfc850()).to_uppercase() + locale
        }
    }

    assert_eq!(
        dt.localize_with(&Shouty, "!"),
        "MONDAY, 04-NOV-13 20:21:22 UTC!!",
    );
}
