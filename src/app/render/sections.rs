use crate::app::render::html::{escape, external_link, icon, section_heading};
use crate::catalog::Catalog;
use crate::core::contact_form::NoticeKind;
use crate::core::icons::resolve_icon;
use crate::core::page::{PageState, Section};

const STAR_COUNT: usize = 5;
const SERVICE_DETAIL_SLOTS: usize = 3;
const SERVICE_DETAIL_COPY: &str = "Our premium approach ensures every project exceeds expectations with cutting-edge technology, \
luxury design principles, and VIP-level attention to detail. We don't just build applications; we craft digital masterpieces.";

fn open_section(section: Section, class: &str) -> String {
    format!(r#"<section id="{}" class="{}">"#, section.anchor(), class)
}

fn contact_button(label: &str, class: &str) -> String {
    format!(
        r##"<a href="#{}" class="{}">{}</a>"##,
        Section::Contact.anchor(),
        class,
        escape(label)
    )
}

pub fn navigation(catalog: &Catalog, state: &PageState) -> String {
    let links: String = Section::NAVIGATION
        .iter()
        .map(|section| {
            format!(
                r##"<a href="#{}" class="nav-link">{}</a>"##,
                section.anchor(),
                section.nav_label()
            )
        })
        .collect();

    let menu_class = if state.menu_open {
        "nav-mobile open"
    } else {
        "nav-mobile"
    };
    let toggle_label = if state.menu_open { "Close menu" } else { "Open menu" };

    format!(
        r#"<nav class="site-nav"><div class="brand">{}<span>{}</span></div><div class="nav-desktop">{}</div><button class="nav-toggle" aria-expanded="{}" aria-label="{}"></button><div class="{}">{}</div></nav>"#,
        icon("icon-diamond"),
        escape(&catalog.profile.brand),
        links,
        state.menu_open,
        toggle_label,
        menu_class,
        links
    )
}

pub fn hero(catalog: &Catalog) -> String {
    let profile = &catalog.profile;
    format!(
        r##"{}<div class="hero-content">{}<h1>{}</h1><p class="tagline">{}</p><p class="pitch">{}</p><div class="hero-actions"><a href="#{}" class="btn btn-primary">View My Work</a>{}</div></div></section>"##,
        open_section(Section::Hero, "hero"),
        icon("icon-diamond"),
        escape(&profile.brand),
        escape(&profile.tagline),
        escape(&profile.pitch),
        Section::Portfolio.anchor(),
        contact_button("Contact Me", "btn btn-outline")
    )
}

pub fn about(catalog: &Catalog) -> String {
    let profile = &catalog.profile;
    let paragraphs: String = profile
        .about
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();
    let badges: String = profile
        .badges
        .iter()
        .map(|b| format!(r#"<span class="badge">{}</span>"#, escape(b)))
        .collect();

    format!(
        r#"{}<div class="about-portrait"><img src="{}" alt="{} - {}"></div><div class="about-text"><h2 class="section-title">About {}</h2>{}<div class="badges">{}</div><div class="social">{}{}</div></div></section>"#,
        open_section(Section::About, "about"),
        escape(&profile.portrait_url),
        escape(&profile.owner_name),
        escape(&profile.brand),
        escape(&profile.brand),
        paragraphs,
        badges,
        external_link(&profile.instagram_url, "btn social-instagram", "Instagram"),
        external_link(&profile.whatsapp_url, "btn social-whatsapp", "WhatsApp")
    )
}

pub fn services(catalog: &Catalog) -> String {
    let cards: String = catalog
        .services
        .iter()
        .map(|service| {
            format!(
                r#"<article class="card service" data-id="{}">{}<h3>{}</h3><p>{}</p></article>"#,
                service.id,
                icon(resolve_icon(&service.icon_key).css_class()),
                escape(&service.title),
                escape(&service.description)
            )
        })
        .collect();

    format!(
        r#"{}{}<div class="grid">{}</div></section>"#,
        open_section(Section::Services, "services"),
        section_heading(
            "VIP Services",
            Some("Premium digital solutions tailored for your business success")
        ),
        cards
    )
}

/// 前三個服務，依索引搭配同位置作品的圖片
pub fn service_details(catalog: &Catalog) -> String {
    let rows: String = catalog
        .services
        .iter()
        .take(SERVICE_DETAIL_SLOTS)
        .enumerate()
        .map(|(index, service)| {
            let image = catalog
                .project_for_service_slot(index)
                .map(|project| {
                    format!(
                        r#"<div class="detail-image"><img src="{}" alt="{}"></div>"#,
                        escape(&project.image_url),
                        escape(&service.title)
                    )
                })
                .unwrap_or_default();
            let side = if index % 2 == 0 { "detail" } else { "detail reversed" };

            format!(
                r#"<div class="{}"><div class="detail-text">{}<h3>{}</h3><p>{}</p><p>{}</p>{}</div>{}</div>"#,
                side,
                icon(resolve_icon(&service.icon_key).css_class()),
                escape(&service.title),
                escape(&service.description),
                SERVICE_DETAIL_COPY,
                contact_button("Get Started", "btn btn-primary"),
                image
            )
        })
        .collect();

    format!(
        "{}{}{}</section>",
        open_section(Section::ServiceDetails, "service-details"),
        section_heading("Premium Service Details", None),
        rows
    )
}

pub fn portfolio(catalog: &Catalog) -> String {
    let cards: String = catalog
        .projects
        .iter()
        .map(|project| {
            format!(
                r#"<article class="card project" data-id="{}"><img src="{}" alt="{}"><span class="badge">{}</span><h3>{}</h3><p>{}</p>{}</article>"#,
                project.id,
                escape(&project.image_url),
                escape(&project.title),
                escape(&project.category),
                escape(&project.title),
                escape(&project.description),
                contact_button("Get This", "btn btn-small")
            )
        })
        .collect();

    format!(
        r#"{}{}<div class="grid">{}</div></section>"#,
        open_section(Section::Portfolio, "portfolio"),
        section_heading(
            "VIP Portfolio",
            Some("Showcase of premium projects delivered with excellence")
        ),
        cards
    )
}

pub fn why_choose_me(catalog: &Catalog) -> String {
    let cards: String = catalog
        .why_choose_me
        .iter()
        .map(|item| {
            format!(
                r#"<article class="card why" data-id="{}">{}<h3>{}</h3><p>{}</p></article>"#,
                item.id,
                icon(resolve_icon(&item.icon_key).css_class()),
                escape(&item.title),
                escape(&item.description)
            )
        })
        .collect();

    format!(
        r#"{}{}<div class="grid">{}</div></section>"#,
        open_section(Section::WhyChooseMe, "why-choose-me"),
        section_heading(
            &format!("Why Choose {}?", catalog.profile.brand),
            Some("VIP advantages that set us apart from the competition")
        ),
        cards
    )
}

/// 空清單或索引失效時顯示中性的佔位內容
pub fn testimonials(catalog: &Catalog, state: &PageState) -> String {
    let heading = section_heading(
        "Client Testimonials",
        Some("What our VIP clients say about our premium services"),
    );
    let current = state
        .testimonial_index
        .and_then(|index| catalog.testimonials.get(index).map(|t| (index, t)));

    let Some((active, testimonial)) = current else {
        return format!(
            r#"{}{}<div class="carousel carousel-empty"><p class="placeholder">Testimonials coming soon.</p></div></section>"#,
            open_section(Section::Testimonials, "testimonials"),
            heading
        );
    };

    let stars = icon("icon-star").repeat(STAR_COUNT);
    let dots: String = (0..catalog.testimonials.len())
        .map(|index| {
            let class = if index == active { "dot active" } else { "dot" };
            format!(
                r#"<button class="{}" data-index="{}" aria-label="Show testimonial {}"></button>"#,
                class,
                index,
                index + 1
            )
        })
        .collect();

    format!(
        r#"{}{}<div class="carousel" data-active="{}"><figure class="card testimonial" data-id="{}"><div class="stars">{}</div><blockquote>&quot;{}&quot;</blockquote><figcaption><img src="{}" alt="{}"><div><strong>{}</strong><span>{}</span></div></figcaption></figure><div class="dots">{}</div></div></section>"#,
        open_section(Section::Testimonials, "testimonials"),
        heading,
        active,
        testimonial.id,
        stars,
        escape(&testimonial.content),
        escape(&testimonial.avatar_url),
        escape(&testimonial.author_name),
        escape(&testimonial.author_name),
        escape(&testimonial.author_position),
        dots
    )
}

pub fn process(catalog: &Catalog) -> String {
    let count = catalog.process_steps.len();
    let steps: String = catalog
        .process_steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let arrow = if index + 1 < count {
                icon("icon-arrow-right process-arrow")
            } else {
                String::new()
            };
            format!(
                r#"<div class="step" data-id="{}"><span class="step-number">{}</span>{}<h3>{}</h3><p>{}</p></div>{}"#,
                step.id,
                index + 1,
                icon(resolve_icon(&step.icon_key).css_class()),
                escape(&step.title),
                escape(&step.description),
                arrow
            )
        })
        .collect();

    let subtitle =
        (count > 0).then(|| format!("Our premium {}-step approach to delivering excellence", count));
    format!(
        r#"{}{}<div class="steps">{}</div></section>"#,
        open_section(Section::Process, "process"),
        section_heading("VIP Work Process", subtitle.as_deref()),
        steps
    )
}

pub fn pricing(catalog: &Catalog) -> String {
    let cards: String = catalog
        .pricing_plans
        .iter()
        .map(|plan| {
            let highlighted = catalog.is_highlighted(plan);
            let (class, badge, button) = if highlighted {
                (
                    "card plan recommended",
                    r#"<span class="badge badge-recommended">RECOMMENDED</span>"#,
                    "btn btn-primary",
                )
            } else {
                ("card plan", "", "btn btn-outline")
            };
            let features: String = plan
                .features
                .iter()
                .map(|f| format!("<li>{}</li>", escape(f)))
                .collect();

            format!(
                r#"<article class="{}" data-id="{}">{}<h3>{}</h3><p class="price">{}</p><ul>{}</ul>{}</article>"#,
                class,
                plan.id,
                badge,
                escape(&plan.name),
                escape(&plan.price),
                features,
                contact_button(&format!("Choose {}", plan.name), button)
            )
        })
        .collect();

    format!(
        r#"{}{}<div class="grid">{}</div></section>"#,
        open_section(Section::Pricing, "pricing"),
        section_heading(
            "VIP Pricing Plans",
            Some("Choose the perfect package for your business needs")
        ),
        cards
    )
}

pub fn faq(catalog: &Catalog) -> String {
    let items: String = catalog
        .faqs
        .iter()
        .map(|entry| {
            format!(
                r#"<details class="faq-item" data-id="{}"><summary>{}</summary><p>{}</p></details>"#,
                entry.id,
                escape(&entry.question),
                escape(&entry.answer)
            )
        })
        .collect();

    format!(
        r#"{}{}<div class="accordion">{}</div></section>"#,
        open_section(Section::Faq, "faq"),
        section_heading(
            "Frequently Asked Questions",
            Some("Everything you need to know about our VIP services")
        ),
        items
    )
}

pub fn contact(catalog: &Catalog, state: &PageState) -> String {
    let profile = &catalog.profile;
    let highlights: String = profile
        .highlights
        .iter()
        .map(|h| format!("<li>{}{}</li>", icon("icon-crown"), escape(h)))
        .collect();

    let notice = state
        .notice
        .as_ref()
        .map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            format!(
                r#"<div class="{}" role="status"><strong>{}</strong><p>{}</p></div>"#,
                class,
                escape(&notice.title),
                escape(&notice.description)
            )
        })
        .unwrap_or_default();

    let action = state
        .contact_action
        .as_deref()
        .map(|url| format!(r#" action="{}""#, escape(url)))
        .unwrap_or_default();
    let (disabled, button_label) = if state.submitting {
        (" disabled", "Sending...")
    } else {
        ("", "Send VIP Message")
    };

    format!(
        r#"{}{}<div class="contact-grid"><div class="contact-channels">{}{}<div class="card"><h4>Why Choose VIP Service?</h4><ul>{}</ul></div></div><div class="card contact-form"><h3>Send Message</h3>{}<form method="post"{}><label>Your Name<input type="text" name="name" value="{}" placeholder="Enter your name" required></label><label>Email Address<input type="email" name="email" value="{}" placeholder="Enter your email" required></label><label>Project Details<textarea name="message" rows="5" placeholder="Tell us about your VIP project requirements..." required>{}</textarea></label><button type="submit" class="btn btn-primary"{}>{}</button></form></div></div></section>"#,
        open_section(Section::Contact, "contact"),
        section_heading(
            "Get Your VIP Project Started",
            Some("Ready to transform your business? Let's discuss your premium digital solution")
        ),
        external_link(&profile.instagram_url, "channel", "Instagram"),
        external_link(&profile.whatsapp_url, "channel", "WhatsApp"),
        highlights,
        notice,
        action,
        escape(&state.draft.name),
        escape(&state.draft.email),
        escape(&state.draft.message),
        disabled,
        button_label
    )
}

pub fn footer(catalog: &Catalog) -> String {
    let profile = &catalog.profile;
    let links: String = Section::FOOTER_LINKS
        .iter()
        .map(|section| {
            format!(
                r##"<a href="#{}" class="footer-link">{}</a>"##,
                section.anchor(),
                section.nav_label()
            )
        })
        .collect();

    let copyright = if profile.copyright.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="copyright">{}</p>"#, escape(&profile.copyright))
    };

    format!(
        r#"<footer class="site-footer"><div class="footer-row"><div class="brand">{}<span>{}</span></div><div class="footer-links">{}</div><div class="footer-social"><a href="{}" class="social" target="_blank" rel="noopener noreferrer" aria-label="Instagram">{}</a><a href="{}" class="social" target="_blank" rel="noopener noreferrer" aria-label="WhatsApp">{}</a></div></div>{}</footer>"#,
        icon("icon-diamond"),
        escape(&profile.brand),
        links,
        escape(&profile.instagram_url),
        icon("icon-instagram"),
        escape(&profile.whatsapp_url),
        icon("icon-message-square"),
        copyright
    )
}
