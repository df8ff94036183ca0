//! Display Projection
//!
//! Pure mapping from featured courses to what the landing page shows.

use crate::models::FeaturedItem;
use crate::routes;

/// Shown when a course has no thumbnail
pub const PLACEHOLDER_THUMBNAIL: &str = "https://picsum.photos/400/250";

pub const FREE_LABEL: &str = "Free";
pub const VIEW_ALL_LABEL: &str = "View All Courses";

/// Stagger between card fade-ins
const REVEAL_STEP_MS: usize = 150;

/// One rendered course card
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCard {
    pub id: String,
    pub href: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub price_label: String,
    pub reveal_style: String,
}

/// The featured-courses block: cards plus the link to the full catalogue
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedSection {
    pub cards: Vec<CourseCard>,
    pub view_all_href: &'static str,
    pub view_all_label: &'static str,
}

pub fn thumbnail_src(item: &FeaturedItem) -> &str {
    item.thumbnail_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(PLACEHOLDER_THUMBNAIL)
}

/// "$49" for priced courses, "Free" otherwise (a zero price is free too)
pub fn price_label(item: &FeaturedItem) -> String {
    match item.price {
        Some(price) if price != 0.0 => format!("${}", price),
        _ => FREE_LABEL.to_string(),
    }
}

pub fn reveal_style(index: usize) -> String {
    format!("animation-delay: {}ms", index * REVEAL_STEP_MS)
}

pub fn course_card(index: usize, item: &FeaturedItem) -> CourseCard {
    CourseCard {
        id: item.id.clone(),
        href: routes::course_detail(&item.id),
        title: item.title.clone(),
        description: item.description.clone(),
        thumbnail: thumbnail_src(item).to_string(),
        price_label: price_label(item),
        reveal_style: reveal_style(index),
    }
}

pub fn featured_section(items: &[FeaturedItem]) -> FeaturedSection {
    FeaturedSection {
        cards: items.iter().enumerate().map(|(i, item)| course_card(i, item)).collect(),
        view_all_href: routes::COURSES,
        view_all_label: VIEW_ALL_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, thumbnail: Option<&str>, price: Option<f64>) -> FeaturedItem {
        FeaturedItem {
            id: id.to_string(),
            title: format!("Course {}", id),
            description: "<b>rendered as-is</b>".to_string(),
            thumbnail_url: thumbnail.map(str::to_string),
            price,
        }
    }

    #[test]
    fn test_thumbnail_fallback() {
        assert_eq!(thumbnail_src(&item("a", None, None)), PLACEHOLDER_THUMBNAIL);
        assert_eq!(thumbnail_src(&item("a", Some("https://cdn/x.png"), None)), "https://cdn/x.png");
        assert_eq!(thumbnail_src(&item("a", Some(""), None)), PLACEHOLDER_THUMBNAIL);
        assert_eq!(thumbnail_src(&item("a", Some("   "), None)), PLACEHOLDER_THUMBNAIL);
    }

    #[test]
    fn test_price_labels() {
        assert_eq!(price_label(&item("a", None, None)), "Free");
        assert_eq!(price_label(&item("a", None, Some(49.0))), "$49");
        assert_eq!(price_label(&item("a", None, Some(19.5))), "$19.5");
        assert_eq!(price_label(&item("a", None, Some(0.0))), "Free");
    }

    #[test]
    fn test_card_links_to_course_detail() {
        let card = course_card(2, &item("xyz", None, Some(49.0)));
        assert_eq!(card.href, "/courses/xyz");
        assert_eq!(card.price_label, "$49");
        assert_eq!(card.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(card.description, "<b>rendered as-is</b>");
        assert_eq!(card.reveal_style, "animation-delay: 300ms");
    }

    #[test]
    fn test_section_keeps_order() {
        let items = vec![item("3", None, None), item("1", None, None), item("2", None, None)];
        let section = featured_section(&items);
        let ids: Vec<&str> = section.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_empty_section_still_links_to_catalogue() {
        let section = featured_section(&[]);
        assert!(section.cards.is_empty());
        assert_eq!(section.view_all_label, "View All Courses");
        assert_eq!(section.view_all_href, "/courses");
    }
}
