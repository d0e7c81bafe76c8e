use terrain_site_i18n::{
    Document, ElementContent, LocalizationStore, Locale, MemoryDocument, MemoryPreferences, SiteConfig,
    TranslationTable,
};

fn bundled_store(preferences: MemoryPreferences) -> anyhow::Result<LocalizationStore<MemoryPreferences>> {
    Ok(LocalizationStore::new(
        TranslationTable::bundled()?,
        SiteConfig::default(),
        preferences,
    ))
}

fn landing_page() -> MemoryDocument {
    let mut document = MemoryDocument::new();
    document.push_bound("h1", "hero-title", "JAXA terrain");
    document.push_bound("a", "hero-cta", "");
    document.push_bound("a", "hero-cta-secondary", "");
    document.push_bound("p", "feature-4-desc", "");
    document.push_bound("textarea", "hero-title", "");
    document.push_bound("span", "not-yet-translated", "placeholder");
    document.push("button", "日本語", [("data-lang", "ja")]);
    document.push("button", "English", [("data-lang", "en")]);
    document
}

#[test]
fn first_visit_renders_japanese_then_switches_to_english() -> anyhow::Result<()> {
    let mut document = MemoryDocument::new();
    let cta = document.push_bound("a", "hero-cta", "");
    let mut store = bundled_store(MemoryPreferences::new())?;

    store.initialize(&mut document);
    assert_eq!(document.visual_lines(cta), vec!["始める"]);
    assert_eq!(document.root_language(), Some("ja"));

    store.set_language(&mut document, "en");
    assert_eq!(document.visual_lines(cta), vec!["Get Started"]);
    assert_eq!(document.root_language(), Some("en"));

    let preferences = store.into_preferences();
    assert_eq!(preferences.get("lang"), Some("en"));
    Ok(())
}

#[test]
fn repeated_render_is_idempotent() -> anyhow::Result<()> {
    let mut store = bundled_store(MemoryPreferences::new())?;
    store.set_language(&mut MemoryDocument::new(), "en");

    let mut once = landing_page();
    let first = store.render(&mut once);
    let mut twice = landing_page();
    store.render(&mut twice);
    let second = store.render(&mut twice);

    assert_eq!(first, second);
    assert_eq!(element_states(&once), element_states(&twice));
    assert_eq!(once.root_language(), twice.root_language());
    Ok(())
}

fn element_states(document: &MemoryDocument) -> Vec<(ElementContent, Option<String>)> {
    document
        .elements_with_attribute("data-i18n")
        .into_iter()
        .map(|id| {
            let element = document.element(id);
            (element.content.clone(), element.value.clone())
        })
        .collect()
}

#[test]
fn every_translated_key_is_applied_in_every_locale() -> anyhow::Result<()> {
    let table = TranslationTable::bundled()?;
    for locale in Locale::all() {
        let messages = table
            .messages(locale)
            .ok_or_else(|| anyhow::anyhow!("missing locale {locale}"))?;

        let mut document = MemoryDocument::new();
        let bound: Vec<_> = messages
            .keys()
            .map(|key| (key.clone(), document.push_bound("div", key, "")))
            .collect();

        let mut store = bundled_store(MemoryPreferences::new())?;
        store.initialize(&mut document);
        let report = store.set_language(&mut document, locale.code());
        assert!(report.missing.is_empty());
        assert_eq!(report.applied, messages.len());

        for (key, id) in bound {
            let expected = &messages[&key];
            let content = &document.element(id).content;
            if expected.contains('\n') {
                assert_eq!(content, &ElementContent::Markup(expected.replace('\n', "<br>")));
            } else {
                assert_eq!(content, &ElementContent::Text(expected.clone()));
            }
        }
    }
    Ok(())
}

#[test]
fn missing_key_leaves_prior_content_untouched() -> anyhow::Result<()> {
    let mut document = MemoryDocument::new();
    let orphan = document.push_bound("span", "not-yet-translated", "placeholder");
    let mut store = bundled_store(MemoryPreferences::new())?;

    let report = store.initialize(&mut document);
    assert_eq!(report.missing, vec!["not-yet-translated".to_string()]);
    assert_eq!(document.writes(), 0);
    assert_eq!(
        document.element(orphan).content,
        ElementContent::Text("placeholder".into())
    );
    Ok(())
}

#[test]
fn reload_restores_persisted_language() -> anyhow::Result<()> {
    let mut document = landing_page();
    let mut store = bundled_store(MemoryPreferences::new())?;
    store.initialize(&mut document);
    store.set_language(&mut document, "en");

    let mut reloaded_page = landing_page();
    let mut reloaded = bundled_store(store.into_preferences())?;
    reloaded.initialize(&mut reloaded_page);
    assert_eq!(reloaded.active_language().locale(), Some(Locale::En));
    assert_eq!(reloaded_page.root_language(), Some("en"));
    Ok(())
}

#[test]
fn line_breaks_render_as_lines_except_in_inputs() -> anyhow::Result<()> {
    let table = TranslationTable::new().with_locale(Locale::Ja, [("split", "A\nB")]);
    let mut document = MemoryDocument::new();
    let heading = document.push_bound("h2", "split", "");
    let field = document.push_bound("input", "split", "");
    let mut store = LocalizationStore::new(table, SiteConfig::default(), MemoryPreferences::new());

    store.initialize(&mut document);
    assert_eq!(document.visual_lines(heading), vec!["A", "B"]);
    assert_eq!(document.element(field).value.as_deref(), Some("A\nB"));
    Ok(())
}

#[test]
fn custom_attribute_names_are_honoured() -> anyhow::Result<()> {
    let config = SiteConfig::from_json(
        r#"{ "key_attribute": "data-t", "toggle_attribute": "data-switch", "storage_key": "site.lang" }"#,
    )?;
    let mut document = MemoryDocument::new();
    let cta = document.push("a", "", [("data-t", "hero-cta")]);
    let en = document.push("button", "EN", [("data-switch", "en")]);
    let mut store = LocalizationStore::new(TranslationTable::bundled()?, config, MemoryPreferences::new());

    store.initialize(&mut document);
    store.set_language(&mut document, "en");
    assert_eq!(document.visual_lines(cta), vec!["Get Started"]);
    assert!(document.has_class(en, "active"));
    assert_eq!(store.into_preferences().get("site.lang"), Some("en"));
    Ok(())
}
