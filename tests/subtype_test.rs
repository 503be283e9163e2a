use mal_scraper::{classify_type, Family, MediaPage, Subtype};

#[test]
fn movie_page_is_movie() {
    let html = include_str!("fixtures/anime_detail_movie.html");
    let page = MediaPage::new("https://myanimelist.net/anime/306/Your_Name", html).expect("valid url");
    assert_eq!(page.subtype(), Ok(Subtype::Movie));
}

#[test]
fn tv_page_is_tv() {
    let html = include_str!("fixtures/anime_detail_tv.html");
    let page = MediaPage::new("https://myanimelist.net/anime/306/Abenobashi", html).expect("valid url");
    assert_eq!(page.subtype(), Ok(Subtype::Tv));
}

#[test]
fn novel_page_is_novel() {
    let html = include_str!("fixtures/manga_detail_empty.html");
    let page = MediaPage::new("https://myanimelist.net/manga/109855/Mamono_Friends", html)
        .expect("valid url");
    assert_eq!(page.subtype(), Ok(Subtype::Novel));
}

#[test]
fn manga_page_is_manga() {
    let html = include_str!("fixtures/manga_detail_ongoing.html");
    let page = MediaPage::new("https://myanimelist.net/manga/13/One_Piece", html).expect("valid url");
    assert_eq!(page.subtype(), Ok(Subtype::Manga));
}

#[test]
fn missing_type_field_is_unknown() {
    let html = r#"<div class="leftside"><div><span class="dark_text">Status:</span> Finished</div></div>"#;
    let page = MediaPage::new("https://myanimelist.net/anime/9/X", html).expect("valid url");
    assert_eq!(page.subtype(), Ok(Subtype::Unknown));
}

#[test]
fn type_from_other_family_is_unknown() {
    let html = r#"<div class="leftside"><div><span class="dark_text">Type:</span> Manga</div></div>"#;
    let page = MediaPage::new("https://myanimelist.net/anime/9/X", html).expect("valid url");
    assert_eq!(page.subtype(), Ok(Subtype::Unknown));
}

#[test]
fn classify_type_is_case_insensitive() {
    assert_eq!(classify_type(Family::Anime, Some("OVA")), Subtype::Ova);
    assert_eq!(classify_type(Family::Anime, Some("ONA")), Subtype::Unknown);
    assert_eq!(classify_type(Family::Manga, Some("Light Novel")), Subtype::Novel);
    assert_eq!(classify_type(Family::Manga, Some("One-shot")), Subtype::OneShot);
    assert_eq!(classify_type(Family::Manga, None), Subtype::Unknown);
}
