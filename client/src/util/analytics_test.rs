use super::*;

#[test]
fn loader_src_targets_gtag_with_id() {
    assert_eq!(
        loader_src(MEASUREMENT_ID),
        "https://www.googletagmanager.com/gtag/js?id=G-SNZ7G7X9F0"
    );
}

#[test]
fn loader_src_drops_query_breaking_characters() {
    assert_eq!(
        loader_src("G-ABC&x=<y>"),
        "https://www.googletagmanager.com/gtag/js?id=G-ABCxy"
    );
}

#[test]
fn config_snippet_bootstraps_data_layer() {
    let snippet = config_snippet(MEASUREMENT_ID);
    assert!(snippet.starts_with("window.dataLayer = window.dataLayer || [];"));
    assert!(snippet.contains("gtag('js', new Date());"));
    assert!(snippet.contains("gtag('config', \"G-SNZ7G7X9F0\");"));
}

#[test]
fn config_snippet_escapes_hostile_id() {
    let snippet = config_snippet("\");</script><script>alert(1)//");
    assert!(!snippet.contains("</script>"));
    assert!(snippet.contains(r#"gtag('config', "\");<\/script><script>alert(1)//");"#));
}
