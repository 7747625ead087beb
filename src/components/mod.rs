pub mod footer;
pub mod image_gallery;
pub mod image_uploader;
pub mod navbar;
pub mod review_card;
pub mod search_bar;
pub mod star_rating;
