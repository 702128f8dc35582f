//! Reusable preview card for a marketplace listing.
//!
//! DESIGN
//! ======
//! Pure function of props to markup: no data fetching, no shared state.
//! Every display rule (price, byline, date, click behavior) is a pure
//! helper so the branching stays testable without rendering. Missing
//! inputs degrade to empty display rather than error states.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Placeholder asset shown when a listing has no image.
pub const FALLBACK_IMAGE: &str = "/assets/images/noImage.svg";

/// Price line for a soft-deleted listing, shown regardless of type.
pub const DELETED_PRICE_LABEL: &str = "삭제된 게시물입니다";

/// Byline shown when the listing's author has withdrawn their account.
pub const WITHDRAWN_MEMBER_LABEL: &str = "탈퇴한 회원";

/// Listing type, which drives the price and date display rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostType {
    /// Ordinary resale listing.
    #[default]
    Normal,
    /// Rental listing with a start/end period.
    Rental,
    /// Fixed-price immediate purchase.
    Choice,
}

/// Rendered card size; the card is reused at two scales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardSize {
    #[default]
    Normal,
    Small,
}

impl CardSize {
    /// Square image edge in CSS pixels.
    pub fn image_px(self) -> u32 {
        match self {
            Self::Normal => 76,
            Self::Small => 60,
        }
    }
}

/// What a card click should do, decided from the props alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Selection mode: hand the listing id to the caller.
    Select(i64),
    /// Default mode: navigate to the listing detail page.
    Navigate(String),
    /// Deleted listing without a selection callback: do nothing.
    Ignore,
}

/// Decide the click behavior. A caller-supplied selection callback wins
/// over navigation; deleted listings never navigate.
pub fn click_outcome(id: i64, is_deleted: bool, select_mode: bool) -> ClickOutcome {
    if select_mode {
        return ClickOutcome::Select(id);
    }
    if is_deleted {
        return ClickOutcome::Ignore;
    }
    ClickOutcome::Navigate(format!("/home/{id}"))
}

/// Price line: fixed label when deleted, exact purchase price for
/// `Choice`, otherwise the minimum price as an open range. A missing
/// price degrades to an empty string.
pub fn price_label(is_deleted: bool, post_type: PostType, min_price: Option<i64>) -> String {
    if is_deleted {
        return DELETED_PRICE_LABEL.to_owned();
    }
    let Some(price) = min_price else {
        return String::new();
    };
    match post_type {
        PostType::Choice => format!("구매가 {price}원"),
        PostType::Normal | PostType::Rental => format!("{price}원~"),
    }
}

/// Byline prefix: brand wins over nickname; a deleted author is masked
/// with the withdrawn-member label; with neither there is no prefix.
pub fn byline_label(brand: Option<&str>, nickname: Option<&str>, is_deleted: bool) -> String {
    if let Some(brand) = brand {
        return format!("{brand} | ");
    }
    if let Some(nickname) = nickname {
        if !is_deleted {
            return format!("{nickname} 님 | ");
        }
    }
    if is_deleted {
        return format!("{WITHDRAWN_MEMBER_LABEL} | ");
    }
    String::new()
}

/// Date line: rental listings show the rental period, everything else
/// the creation date. Missing parts degrade to empty strings.
pub fn date_label(
    post_type: PostType,
    start_date: Option<&str>,
    end_date: Option<&str>,
    created_at: Option<&str>,
) -> String {
    match post_type {
        PostType::Rental => format!(
            "{}~{}",
            start_date.unwrap_or_default(),
            end_date.unwrap_or_default()
        ),
        PostType::Normal | PostType::Choice => created_at.unwrap_or_default().to_owned(),
    }
}

/// Label on the review button, which flips once a review was written.
pub fn review_button_label(is_reviewed: bool) -> &'static str {
    if is_reviewed { "작성 완료" } else { "후기 보내기" }
}

/// A clickable preview card for one listing.
///
/// With `on_click_choice` supplied the card is in selection mode and a
/// click hands back the listing id; otherwise a click navigates to the
/// listing detail page unless the listing is deleted.
#[component]
pub fn PostCard(
    id: i64,
    #[prop(optional)] post_type: PostType,
    #[prop(optional, into)] img_url: Option<String>,
    #[prop(optional, into)] brand: Option<String>,
    #[prop(optional, into)] nickname: Option<String>,
    #[prop(optional, into)] title: String,
    #[prop(optional)] min_price: Option<i64>,
    #[prop(optional)] is_deleted: bool,
    #[prop(optional)] is_restricted: bool,
    #[prop(optional)] is_suspended: bool,
    #[prop(optional)] is_selected: bool,
    #[prop(optional)] show_reviewed: bool,
    #[prop(optional)] is_reviewed: bool,
    #[prop(optional, into)] start_date: Option<String>,
    #[prop(optional, into)] end_date: Option<String>,
    #[prop(optional, into)] created_at: Option<String>,
    #[prop(optional)] size: CardSize,
    #[prop(optional)] on_click_choice: Option<Callback<i64>>,
    #[prop(optional)] on_click_review: Option<Callback<()>>,
) -> impl IntoView {
    let navigate = use_navigate();
    let select_mode = on_click_choice.is_some();

    let price = price_label(is_deleted, post_type, min_price);
    let byline = byline_label(brand.as_deref(), nickname.as_deref(), is_deleted);
    let date = date_label(
        post_type,
        start_date.as_deref(),
        end_date.as_deref(),
        created_at.as_deref(),
    );
    let image = img_url.unwrap_or_else(|| FALLBACK_IMAGE.to_owned());
    let image_px = size.image_px();

    let on_card_click = move |_| match click_outcome(id, is_deleted, select_mode) {
        ClickOutcome::Select(id) => {
            if let Some(on_click_choice) = on_click_choice.as_ref() {
                on_click_choice.run(id);
            }
        }
        ClickOutcome::Navigate(path) => navigate(&path, NavigateOptions::default()),
        ClickOutcome::Ignore => {}
    };

    let on_review_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if is_reviewed {
            return;
        }
        if let Some(on_click_review) = on_click_review.as_ref() {
            on_click_review.run(());
        }
    };

    view! {
        <div
            class="post-card"
            class:post-card--small=matches!(size, CardSize::Small)
            class:post-card--selected=is_selected
            class:post-card--deleted=is_deleted
            class:post-card--restricted=is_restricted
            class:post-card--suspended=is_suspended
            on:click=on_card_click
        >
            <img
                class="post-card__image"
                src=image
                width=image_px.to_string()
                height=image_px.to_string()
                alt=title.clone()
            />
            <div class="post-card__body">
                <span class="post-card__byline">
                    {byline}
                    <span class="post-card__date">{date}</span>
                </span>
                <span class="post-card__title">{title}</span>
                <span class="post-card__price">{price}</span>
            </div>
            <Show when=move || show_reviewed>
                <button
                    class="post-card__review"
                    disabled=is_reviewed
                    on:click=on_review_click
                >
                    {review_button_label(is_reviewed)}
                </button>
            </Show>
        </div>
    }
}
