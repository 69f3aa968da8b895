pub mod html;
pub mod sections;

use crate::app::render::html::escape;
use crate::catalog::Catalog;
use crate::core::page::PageState;

/// 依照內容目錄與頁面狀態輸出整頁 HTML，區塊順序固定
pub struct PageRenderer<'a> {
    catalog: &'a Catalog,
}

impl<'a> PageRenderer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn render(&self, state: &PageState) -> String {
        let catalog = self.catalog;
        let body = [
            sections::navigation(catalog, state),
            sections::hero(catalog),
            sections::about(catalog),
            sections::services(catalog),
            sections::service_details(catalog),
            sections::portfolio(catalog),
            sections::why_choose_me(catalog),
            sections::testimonials(catalog, state),
            sections::process(catalog),
            sections::pricing(catalog),
            sections::faq(catalog),
            sections::contact(catalog, state),
            sections::footer(catalog),
        ]
        .join("\n");

        tracing::debug!("🖨️ Rendered page ({} bytes)", body.len());

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{} | {}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape(&catalog.profile.brand),
            escape(&catalog.profile.tagline),
            body
        )
    }
}
