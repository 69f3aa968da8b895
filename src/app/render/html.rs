use std::borrow::Cow;

/// HTML 跳脫，文字節點與屬性值都適用
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// 外部連結（新分頁開啟）
pub fn external_link(href: &str, class: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" class="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape(href),
        class,
        escape(label)
    )
}

pub fn icon(class: &str) -> String {
    format!(r#"<span class="icon {}" aria-hidden="true"></span>"#, class)
}

pub fn section_heading(title: &str, subtitle: Option<&str>) -> String {
    match subtitle {
        Some(subtitle) => format!(
            r#"<h2 class="section-title">{}</h2><p class="section-subtitle">{}</p>"#,
            escape(title),
            escape(subtitle)
        ),
        None => format!(r#"<h2 class="section-title">{}</h2>"#, escape(title)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain text"), "plain text");
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
        assert_eq!(
            escape(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
    }

    #[test]
    fn test_external_link_escapes_href() {
        let link = external_link("https://wa.me/1?text=Hi&x=1", "btn", "WhatsApp");
        assert!(link.contains("text=Hi&amp;x=1"));
        assert!(link.contains(r#"rel="noopener noreferrer""#));
    }
}
