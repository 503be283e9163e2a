use mal_scraper::{scrape, Error, MediaPage};

const NO_PANEL: &str = "<html><body><h1>Not a catalog page</h1><p>Hello</p></body></html>";

#[test]
fn every_accessor_reports_malformed_document() {
    let page = MediaPage::new("https://myanimelist.net/anime/1/X", NO_PANEL).expect("valid url");

    assert!(matches!(page.titles(), Err(Error::MalformedDocument)));
    assert!(matches!(page.poster_image(), Err(Error::MalformedDocument)));
    assert!(matches!(page.subtype(), Err(Error::MalformedDocument)));
    assert!(matches!(page.synopsis(), Err(Error::MalformedDocument)));
    assert!(matches!(page.background(), Err(Error::MalformedDocument)));
    assert!(matches!(page.genres(), Err(Error::MalformedDocument)));
    assert!(matches!(page.abbreviated_titles(), Err(Error::MalformedDocument)));
    assert!(matches!(page.status(), Err(Error::MalformedDocument)));
    assert!(matches!(page.start_date(), Err(Error::MalformedDocument)));
    assert!(matches!(page.episode_count(), Err(Error::MalformedDocument)));
    assert!(matches!(page.age_rating(), Err(Error::MalformedDocument)));
    assert!(matches!(page.field("Type"), Err(Error::MalformedDocument)));
    assert!(matches!(page.record(), Err(Error::MalformedDocument)));
}

#[test]
fn malformed_result_is_stable_across_calls() {
    let page = MediaPage::new("https://myanimelist.net/anime/1/X", NO_PANEL).expect("valid url");
    assert_eq!(page.subtype(), Err(Error::MalformedDocument));
    assert_eq!(page.subtype(), Err(Error::MalformedDocument));
}

#[test]
fn empty_document_is_malformed() {
    assert_eq!(scrape("https://myanimelist.net/anime/1/X", ""), Err(Error::MalformedDocument));
}

#[test]
fn url_without_family_is_rejected() {
    let result = MediaPage::new("https://myanimelist.net/people/1/Someone", NO_PANEL);
    match result {
        Err(Error::UnknownFamily(url)) => assert!(url.contains("people")),
        other => panic!("expected Err(UnknownFamily), got {other:?}"),
    }
}

#[test]
fn unparseable_url_is_rejected() {
    let result = MediaPage::new("not a url", NO_PANEL);
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn unclosed_markup_does_not_panic() {
    let html = r#"<div class="leftside"><div><span class="dark_text">Type:</span> <a>TV"#;
    let page = MediaPage::new("https://myanimelist.net/anime/1/X", html).expect("valid url");
    assert_eq!(page.subtype(), Ok(mal_scraper::Subtype::Tv));
    assert!(page.record().is_ok());
}

#[test]
fn label_without_value_is_absent() {
    let html = r#"<div class="leftside"><div><span class="dark_text">Episodes:</span></div>
        <div><span class="dark_text">Aired:</span> Not available</div></div>"#;
    let page = MediaPage::new("https://myanimelist.net/anime/1/X", html).expect("valid url");
    assert_eq!(page.episode_count(), Ok(None));
    assert_eq!(page.start_date(), Ok(None));
    assert_eq!(page.end_date(), Ok(None));
}
