/// Host HTML-fragment parsing capability.
///
/// Given markup, returns the text a browser would render for it: tags and
/// attributes dropped, entities decoded, script and style bodies excluded.
pub trait HtmlTextExtractor: Send + Sync {
    fn text_content(&self, markup: &str) -> String;
}
