//! Testimonial Block
//!
//! A quote card with an optional star rating and an optional author avatar.
//! Missing optional fields are simply left out of the tree.

use gpui::{
    div, img, linear_color_stop, linear_gradient, prelude::*, px, svg, App, FontWeight,
    InteractiveElement, IntoElement, ObjectFit, ParentElement, RenderOnce, Rgba, SharedString,
    Styled, StyledImage, Window,
};
use serde::{Deserialize, Serialize};

use crate::assets::CustomIconName;
use crate::constants::{AVATAR_SIZE, QUOTE_GLYPH_SIZE, RATING_STAR_COUNT, RATING_STAR_SIZE};
use crate::theme::colors::BlockColors;
use crate::theme::typography::Typography;

/// Content of a single testimonial
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialData {
    pub quote: String,
    pub author: String,
    pub role: String,
    /// Empty when the author has no company to show
    #[serde(default)]
    pub company: String,
    /// Avatar URI or embedded asset path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Expected 1-5, not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

impl TestimonialData {
    /// `role`, followed by `at {company}` when a company is set
    pub fn subtitle(&self) -> SharedString {
        if self.company.is_empty() {
            SharedString::from(self.role.clone())
        } else {
            SharedString::from(format!("{} at {}", self.role, self.company))
        }
    }

    /// The avatar source, if there is one to show
    pub fn image_source(&self) -> Option<SharedString> {
        self.image
            .as_deref()
            .filter(|image| !image.is_empty())
            .map(|image| SharedString::from(image.to_string()))
    }
}

/// Visual state of one rating star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarState {
    Active,
    Inactive,
}

impl StarState {
    pub fn color(self) -> Rgba {
        match self {
            StarState::Active => BlockColors::star_active(),
            StarState::Inactive => BlockColors::star_inactive(),
        }
    }
}

/// Star states for a rating row, or `None` when no row should be drawn.
///
/// The row always has five stars. Ratings are not clamped: anything above five
/// lights every star and anything below one lights none.
pub fn rating_stars(rating: Option<i32>) -> Option<[StarState; RATING_STAR_COUNT]> {
    let rating = rating.filter(|&rating| rating != 0)?;

    let mut stars = [StarState::Inactive; RATING_STAR_COUNT];
    for (index, star) in stars.iter_mut().enumerate() {
        if (index as i64) < i64::from(rating) {
            *star = StarState::Active;
        }
    }
    Some(stars)
}

/// Testimonial block component
#[derive(IntoElement)]
pub struct TestimonialBlock {
    data: TestimonialData,
}

impl TestimonialBlock {
    pub fn new(data: TestimonialData) -> Self {
        Self { data }
    }
}

impl RenderOnce for TestimonialBlock {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let stars = rating_stars(self.data.rating);
        let image = self.data.image_source();
        let subtitle = self.data.subtitle();
        let TestimonialData { quote, author, .. } = self.data;

        div()
            .bg(linear_gradient(
                135.0,
                linear_color_stop(BlockColors::gray_50(), 0.0),
                linear_color_stop(BlockColors::gray_100(), 1.0),
            ))
            .rounded_xl()
            .p_8()
            .my_6()
            .shadow_md()
            // Rating
            .when_some(stars, |el, stars| {
                el.child(
                    div()
                        .debug_selector(|| "testimonial-stars".into())
                        .flex()
                        .gap_1()
                        .mb_4()
                        .children(stars.into_iter().enumerate().map(|(ix, star)| {
                            svg()
                                .debug_selector(move || format!("testimonial-star-{ix}"))
                                .path(CustomIconName::Star.path())
                                .size(px(RATING_STAR_SIZE))
                                .text_color(star.color())
                        })),
                )
            })
            // Quote; the glyph is painted first so the text sits above it
            .child(
                div()
                    .debug_selector(|| "testimonial-quote".into())
                    .relative()
                    .mb_6()
                    .text_size(px(Typography::TEXT_XL))
                    .italic()
                    .text_color(BlockColors::gray_700())
                    .child(
                        div()
                            .absolute()
                            .top(px(-8.0))
                            .left(px(-8.0))
                            .text_size(px(QUOTE_GLYPH_SIZE))
                            .text_color(BlockColors::primary_600())
                            .opacity(0.3)
                            .child("\u{201C}"),
                    )
                    .child(div().relative().child(quote)),
            )
            // Author
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .border_t_1()
                    .border_color(BlockColors::gray_200())
                    .pt_4()
                    .when_some(image, |el, source| {
                        el.child(
                            img(source)
                                .debug_selector(|| "testimonial-avatar".into())
                                .size(px(AVATAR_SIZE))
                                .rounded_full()
                                .border_2()
                                .border_color(BlockColors::white())
                                .shadow_md()
                                .object_fit(ObjectFit::Cover),
                        )
                    })
                    .child(
                        div()
                            .child(
                                div()
                                    .debug_selector(|| "testimonial-author".into())
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(BlockColors::gray_900())
                                    .text_lg()
                                    .child(author),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(BlockColors::gray_600())
                                    .child(subtitle),
                            ),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{Context, Render, TestAppContext};
    use StarState::{Active, Inactive};

    fn sample() -> TestimonialData {
        TestimonialData {
            quote: "Great!".to_string(),
            author: "Jo".to_string(),
            role: "CEO".to_string(),
            company: String::new(),
            image: None,
            rating: Some(3),
        }
    }

    #[test]
    fn three_stars_of_five() {
        let stars = rating_stars(sample().rating).expect("rating row");
        assert_eq!(stars, [Active, Active, Active, Inactive, Inactive]);
        assert_eq!(sample().subtitle().as_ref(), "CEO");
        assert_eq!(sample().image_source(), None);
    }

    #[test]
    fn active_count_matches_rating() {
        for rating in 1..=5 {
            let stars = rating_stars(Some(rating)).expect("rating row");
            let active = stars.iter().filter(|s| **s == Active).count();
            assert_eq!(active, rating as usize);
            assert_eq!(stars.len() - active, 5 - rating as usize);
        }
    }

    #[test]
    fn zero_or_missing_rating_hides_row() {
        assert_eq!(rating_stars(None), None);
        assert_eq!(rating_stars(Some(0)), None);
    }

    #[test]
    fn out_of_range_ratings_pass_through() {
        assert_eq!(rating_stars(Some(9)), Some([Active; 5]));
        assert_eq!(rating_stars(Some(-2)), Some([Inactive; 5]));
        assert_eq!(rating_stars(Some(i32::MIN)), Some([Inactive; 5]));
    }

    #[test]
    fn subtitle_with_company() {
        let data = TestimonialData {
            company: "Acme".to_string(),
            ..sample()
        };
        assert_eq!(data.subtitle().as_ref(), "CEO at Acme");
    }

    #[test]
    fn image_shown_only_when_present() {
        let with_image = TestimonialData {
            image: Some("https://example.com/jo.png".to_string()),
            ..sample()
        };
        assert_eq!(
            with_image.image_source().as_ref().map(AsRef::<str>::as_ref),
            Some("https://example.com/jo.png")
        );

        let empty_image = TestimonialData {
            image: Some(String::new()),
            ..sample()
        };
        assert_eq!(empty_image.image_source(), None);
    }

    struct TestimonialHost {
        data: TestimonialData,
    }

    impl Render for TestimonialHost {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().w(px(600.0)).child(TestimonialBlock::new(self.data.clone()))
        }
    }

    const STAR_SELECTORS: [&str; 5] = [
        "testimonial-star-0",
        "testimonial-star-1",
        "testimonial-star-2",
        "testimonial-star-3",
        "testimonial-star-4",
    ];

    #[gpui::test]
    fn renders_five_star_row_without_avatar(cx: &mut TestAppContext) {
        let (_host, cx) = cx.add_window_view(|_window, _cx| TestimonialHost { data: sample() });
        cx.run_until_parked();

        assert!(cx.debug_bounds("testimonial-stars").is_some());
        for selector in STAR_SELECTORS {
            assert!(cx.debug_bounds(selector).is_some(), "missing {selector}");
        }
        assert!(cx.debug_bounds("testimonial-star-5").is_none());
        assert!(cx.debug_bounds("testimonial-avatar").is_none());
        assert!(cx.debug_bounds("testimonial-quote").is_some());
        assert!(cx.debug_bounds("testimonial-author").is_some());
    }

    #[gpui::test]
    fn unrated_markup_quote_renders_without_star_row(cx: &mut TestAppContext) {
        let data = TestimonialData {
            quote: "  <b>Fast</b> & \"friendly\"  ".to_string(),
            rating: None,
            image: Some(String::new()),
            ..sample()
        };
        let (_host, cx) = cx.add_window_view(move |_window, _cx| TestimonialHost { data });
        cx.run_until_parked();

        assert!(cx.debug_bounds("testimonial-stars").is_none());
        assert!(cx.debug_bounds(STAR_SELECTORS[0]).is_none());
        assert!(cx.debug_bounds("testimonial-avatar").is_none());
        assert!(cx.debug_bounds("testimonial-quote").is_some());
        assert!(cx.debug_bounds("testimonial-author").is_some());
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let data: TestimonialData =
            toml::from_str("quote = \"Q\"\nauthor = \"A\"\nrole = \"R\"").expect("parse");
        assert_eq!(data.company, "");
        assert_eq!(data.image, None);
        assert_eq!(data.rating, None);
        assert_eq!(data.subtitle().as_ref(), "R");
    }
}
