use super::*;

// =============================================================
// Price display
// =============================================================

#[test]
fn deleted_listing_shows_the_fixed_deleted_label() {
    assert_eq!(
        price_label(true, PostType::Choice, Some(32_000)),
        "삭제된 게시물입니다"
    );
    assert_eq!(price_label(true, PostType::Rental, None), "삭제된 게시물입니다");
    assert_eq!(price_label(true, PostType::Normal, Some(0)), "삭제된 게시물입니다");
}

#[test]
fn choice_listing_shows_the_exact_purchase_price() {
    assert_eq!(price_label(false, PostType::Choice, Some(32_000)), "구매가 32000원");
}

#[test]
fn range_priced_listings_show_the_minimum_with_a_tilde() {
    assert_eq!(price_label(false, PostType::Normal, Some(8_000)), "8000원~");
    assert_eq!(price_label(false, PostType::Rental, Some(8_000)), "8000원~");
}

#[test]
fn missing_price_degrades_to_empty() {
    assert_eq!(price_label(false, PostType::Choice, None), "");
    assert_eq!(price_label(false, PostType::Normal, None), "");
}

// =============================================================
// Byline
// =============================================================

#[test]
fn brand_wins_over_nickname() {
    assert_eq!(byline_label(Some("클로젯샵"), Some("하온"), false), "클로젯샵 | ");
}

#[test]
fn nickname_byline_carries_the_honorific() {
    assert_eq!(byline_label(None, Some("하온"), false), "하온 님 | ");
}

#[test]
fn deleted_author_is_masked_as_withdrawn_member() {
    assert_eq!(byline_label(None, Some("하온"), true), "탈퇴한 회원 | ");
    assert_eq!(byline_label(None, None, true), "탈퇴한 회원 | ");
}

#[test]
fn no_actor_info_means_no_byline_prefix() {
    assert_eq!(byline_label(None, None, false), "");
}

// =============================================================
// Date
// =============================================================

#[test]
fn rental_listing_shows_the_period() {
    assert_eq!(
        date_label(PostType::Rental, Some("03.02"), Some("03.09"), Some("02.27")),
        "03.02~03.09"
    );
}

#[test]
fn non_rental_listings_show_the_creation_date() {
    assert_eq!(
        date_label(PostType::Normal, Some("03.02"), Some("03.09"), Some("02.27")),
        "02.27"
    );
    assert_eq!(date_label(PostType::Choice, None, None, Some("02.27")), "02.27");
}

#[test]
fn missing_date_parts_degrade_to_empty() {
    assert_eq!(date_label(PostType::Rental, None, None, None), "~");
    assert_eq!(date_label(PostType::Normal, None, None, None), "");
}

// =============================================================
// Click behavior
// =============================================================

#[test]
fn selection_callback_wins_and_carries_the_id() {
    assert_eq!(click_outcome(7, false, true), ClickOutcome::Select(7));
    // Selection mode applies even to deleted listings.
    assert_eq!(click_outcome(7, true, true), ClickOutcome::Select(7));
}

#[test]
fn default_click_navigates_to_the_detail_page() {
    assert_eq!(
        click_outcome(7, false, false),
        ClickOutcome::Navigate("/home/7".to_owned())
    );
}

#[test]
fn deleted_listing_click_is_a_noop() {
    assert_eq!(click_outcome(7, true, false), ClickOutcome::Ignore);
}

// =============================================================
// Sizing and review button
// =============================================================

#[test]
fn card_sizes_map_to_fixed_image_dimensions() {
    assert_eq!(CardSize::Normal.image_px(), 76);
    assert_eq!(CardSize::Small.image_px(), 60);
}

#[test]
fn review_button_label_flips_once_reviewed() {
    assert_eq!(review_button_label(false), "후기 보내기");
    assert_eq!(review_button_label(true), "작성 완료");
}
