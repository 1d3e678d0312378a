use phishdrill::catalogs::{self, CatalogKind};
use phishdrill_core::catalog::Category;

#[test]
fn registry_lists_three_catalogs() {
    assert_eq!(catalogs::all().len(), 3);
    assert_eq!(
        catalogs::all()
            .iter()
            .filter(|c| c.kind == CatalogKind::Questions)
            .count(),
        2
    );
}

#[test]
fn phishing_catalog_spans_the_message_categories() {
    let catalog = catalogs::load_questions("phishing").unwrap();
    assert_eq!(catalog.len(), 11);

    for category in [
        Category::Email,
        Category::LoginPage,
        Category::Contest,
        Category::Message,
    ] {
        assert!(
            catalog.questions.iter().any(|q| q.category == category),
            "no {category} item"
        );
    }

    // every deceptive item explains itself with red flags
    for question in &catalog.questions {
        assert_eq!(question.ground_truth, !question.flags.is_empty(), "{}", question.id);
        assert!((1..=3).contains(&question.difficulty), "{}", question.id);
    }
}

#[test]
fn imagery_catalog_is_hinted_throughout() {
    let catalog = catalogs::load_questions("imagery").unwrap();
    assert_eq!(catalog.len(), 7);
    assert!(catalog.questions.iter().all(|q| q.hint.is_some()));
    assert!(
        catalog
            .questions
            .iter()
            .all(|q| q.category == Category::Image)
    );
}

#[test]
fn unknown_catalog_name_is_reported() {
    let err = catalogs::load_questions("no-such-catalog").unwrap_err();
    assert!(err.to_string().contains("no-such-catalog"));
}
